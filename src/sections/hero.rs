use scraper::{ElementRef, Html, Selector};

use crate::sections::HeroData;
use crate::utils::element_text;

/// Label used when the call-to-action element is missing or has no text
pub const DEFAULT_CTA_TEXT: &str = "Contact Us";

/// Anchor used when the call-to-action element carries no href
pub const DEFAULT_CTA_LINK: &str = "#contact";

/// Extracts a hero section from the first `<h1>` of the sanitized tree.
///
/// Declines when the document has no `<h1>` with usable text.
pub fn extract(doc: &Html) -> Option<HeroData> {
    let h1_selector = Selector::parse("h1").unwrap();
    let h1 = doc.select(&h1_selector).next()?;

    let heading = element_text(h1);
    if heading.is_empty() {
        return None;
    }

    let subheading = adjacent_paragraph(h1)
        .or_else(|| first_h2_text(doc))
        .unwrap_or_default();

    let (cta_text, cta_link) = call_to_action(doc);

    ::log::debug!("Hero extractor matched heading \"{}\"", heading);

    Some(HeroData {
        heading,
        subheading,
        background_image: String::new(),
        cta_text,
        cta_link,
    })
}

/// Text of the element directly following the heading, if it is a `<p>`
fn adjacent_paragraph(h1: ElementRef) -> Option<String> {
    let next = h1.next_siblings().filter_map(ElementRef::wrap).next()?;
    if next.value().name() != "p" {
        return None;
    }
    let text = element_text(next);
    (!text.is_empty()).then_some(text)
}

fn first_h2_text(doc: &Html) -> Option<String> {
    let h2_selector = Selector::parse("h2").unwrap();
    let text = element_text(doc.select(&h2_selector).next()?);
    (!text.is_empty()).then_some(text)
}

/// First button-like element in document order: button classes, `<button>`
/// elements, or anchors whose href looks like a contact/entry link
fn call_to_action(doc: &Html) -> (String, String) {
    let cta_selector =
        Selector::parse(r#".btn, .button, button, a[href*="contact"], a[href*="entry"]"#).unwrap();

    match doc.select(&cta_selector).next() {
        Some(element) => {
            let text = element_text(element);
            let text = if text.is_empty() {
                DEFAULT_CTA_TEXT.to_string()
            } else {
                text
            };
            let link = element
                .value()
                .attr("href")
                .unwrap_or(DEFAULT_CTA_LINK)
                .to_string();
            (text, link)
        }
        None => (DEFAULT_CTA_TEXT.to_string(), DEFAULT_CTA_LINK.to_string()),
    }
}
