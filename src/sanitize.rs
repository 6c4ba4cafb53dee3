use scraper::{Html, Selector};

/// Elements that carry no landing-page content and would otherwise leak
/// into the extractors: script text mistaken for headings, navigation
/// links mistaken for footer links, and so on.
const NOISE_SELECTOR: &str = "script, style, nav, noscript, iframe, svg";

/// Detaches all noise elements from the parsed document tree.
///
/// Mutation is confined to the in-memory tree; the source HTML string is
/// untouched. Returns the number of elements detached, so re-running on an
/// already-sanitized tree reports 0.
pub fn sanitize(doc: &mut Html) -> usize {
    let selector = Selector::parse(NOISE_SELECTOR).unwrap();
    let noise: Vec<_> = doc.select(&selector).map(|element| element.id()).collect();

    for id in &noise {
        if let Some(mut node) = doc.tree.get_mut(*id) {
            node.detach();
        }
    }

    ::log::debug!("Sanitizer detached {} noise elements", noise.len());
    noise.len()
}
