use scraper::{Html, Selector};

use crate::ids::IdSource;
use crate::lp::{Confidence, Lp, LpMeta, LpStatus, NOTE_MISSING_SECTIONS, NOTE_REPLACE_IMAGES};
use crate::sections::{Section, SectionData, faq, features, footer, hero};
use crate::utils::{element_text, truncate_with_ellipsis};

/// Title used when the page has neither a `<title>` nor an `<h1>`
pub const DEFAULT_TITLE: &str = "Imported LP";

/// Titles are cut to this many characters before the ellipsis marker
pub const TITLE_MAX_CHARS: usize = 50;

/// Runs the four extractors in fixed order over the sanitized tree and
/// wraps the results into an LP record.
///
/// The extractors are pure and mutually independent; the hero, features,
/// faq, footer ordering here is also the final render/storage order.
pub fn assemble(doc: &Html, source_url: &str, ids: &mut dyn IdSource) -> Lp {
    let mut sections = Vec::new();

    if let Some(data) = hero::extract(doc) {
        sections.push(section(SectionData::Hero(data), ids));
    }
    if let Some(data) = features::extract(doc) {
        sections.push(section(SectionData::Features(data), ids));
    }
    if let Some(data) = faq::extract(doc) {
        sections.push(section(SectionData::Faq(data), ids));
    }
    if let Some(data) = footer::extract(doc) {
        sections.push(section(SectionData::Footer(data), ids));
    }

    ::log::info!(
        "Assembled {} sections from {}",
        sections.len(),
        source_url
    );

    let confidence = Confidence::from_section_count(sections.len());
    let mut notes = Vec::new();
    if confidence != Confidence::High {
        notes.push(NOTE_MISSING_SECTIONS.to_string());
    }
    notes.push(NOTE_REPLACE_IMAGES.to_string());

    let now = ids.now();
    Lp {
        id: ids.next_id("lp"),
        title: derive_title(doc),
        status: LpStatus::Draft,
        created_at: now,
        updated_at: now,
        meta: LpMeta {
            source_url: source_url.to_string(),
            confidence,
            notes,
        },
        sections,
    }
}

fn section(data: SectionData, ids: &mut dyn IdSource) -> Section {
    let kind = data.kind();
    Section {
        id: ids.next_id("sec"),
        kind,
        name: kind.display_name().to_string(),
        data,
        visible: true,
    }
}

/// Page title, else first `<h1>`, else the default; cut at 50 characters
fn derive_title(doc: &Html) -> String {
    let title_selector = Selector::parse("title").unwrap();
    let h1_selector = Selector::parse("h1").unwrap();

    let raw = doc
        .select(&title_selector)
        .next()
        .map(element_text)
        .filter(|text| !text.is_empty())
        .or_else(|| {
            doc.select(&h1_selector)
                .next()
                .map(element_text)
                .filter(|text| !text.is_empty())
        })
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    truncate_with_ellipsis(&raw, TITLE_MAX_CHARS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::FixedIds;
    use crate::sections::SectionKind;

    fn assemble_fixed(html: &str) -> Lp {
        let doc = Html::parse_document(html);
        let mut ids = FixedIds::new();
        assemble(&doc, "https://example.com", &mut ids)
    }

    const FULL_PAGE: &str = r#"
        <html><head><title>Acme Widgets</title></head><body>
        <h1>Build faster</h1><p>Ship landing pages in minutes.</p>
        <h3>Quick setup</h3><p>One click.</p>
        <h3>No code needed</h3><p>Drag and drop.</p>
        <dl><dt>Is there a free plan?</dt><dd>Yes, forever.</dd></dl>
        <footer><p>Acme Inc.</p><a href="/terms">Terms</a><a href="/privacy">Privacy</a></footer>
        </body></html>"#;

    #[test]
    fn sections_come_out_in_fixed_order() {
        let lp = assemble_fixed(FULL_PAGE);
        let kinds: Vec<SectionKind> = lp.sections.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SectionKind::Hero,
                SectionKind::Features,
                SectionKind::Faq,
                SectionKind::Footer
            ]
        );
    }

    #[test]
    fn four_sections_mean_high_confidence() {
        let lp = assemble_fixed(FULL_PAGE);
        assert_eq!(lp.meta.confidence, Confidence::High);
        assert_eq!(lp.meta.notes, vec![NOTE_REPLACE_IMAGES.to_string()]);
    }

    #[test]
    fn two_sections_mean_medium_confidence() {
        let lp = assemble_fixed(
            "<h1>Hello</h1><footer><a href=\"/a\">About</a></footer>",
        );
        assert_eq!(lp.sections.len(), 2);
        assert_eq!(lp.meta.confidence, Confidence::Medium);
        assert_eq!(lp.meta.notes.len(), 2);
        assert_eq!(lp.meta.notes[0], NOTE_MISSING_SECTIONS);
        assert_eq!(lp.meta.notes[1], NOTE_REPLACE_IMAGES);
    }

    #[test]
    fn empty_page_still_assembles() {
        let lp = assemble_fixed("<html><body></body></html>");
        assert!(lp.sections.is_empty());
        assert_eq!(lp.meta.confidence, Confidence::Low);
        assert_eq!(lp.title, DEFAULT_TITLE);
        assert!(lp.meta.notes.contains(&NOTE_MISSING_SECTIONS.to_string()));
    }

    #[test]
    fn title_prefers_title_element_over_h1() {
        let lp = assemble_fixed("<head><title>From Title</title></head><h1>From H1</h1>");
        assert_eq!(lp.title, "From Title");

        let lp = assemble_fixed("<h1>From H1</h1>");
        assert_eq!(lp.title, "From H1");
    }

    #[test]
    fn long_title_gets_ellipsis() {
        let html = format!("<head><title>{}</title></head>", "t".repeat(60));
        let lp = assemble_fixed(&html);
        assert_eq!(lp.title.chars().count(), 53);
        assert!(lp.title.ends_with("..."));
    }

    #[test]
    fn ids_and_timestamps_are_deterministic() {
        let lp = assemble_fixed(FULL_PAGE);
        assert_eq!(lp.sections[0].id, "sec-1");
        assert_eq!(lp.sections[3].id, "sec-4");
        assert_eq!(lp.id, "lp-5");
        assert_eq!(lp.created_at, lp.updated_at);

        // Same input, fresh id source: same record shape
        let again = assemble_fixed(FULL_PAGE);
        assert_eq!(lp.id, again.id);
        assert_eq!(lp.sections.len(), again.sections.len());
    }

    #[test]
    fn status_is_always_draft() {
        let lp = assemble_fixed(FULL_PAGE);
        assert_eq!(lp.status, LpStatus::Draft);
    }
}
