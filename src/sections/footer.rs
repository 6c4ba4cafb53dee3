use scraper::{ElementRef, Html, Selector};

use crate::sections::{FooterData, FooterLink};
use crate::utils::{element_text, truncate_chars};

/// Upper bound on extracted footer links
pub const MAX_LINKS: usize = 5;

/// Company name used when the footer offers no usable text
pub const FALLBACK_COMPANY_NAME: &str = "Company Name";

/// Labels must stay shorter than this many characters
const MAX_LABEL_CHARS: usize = 30;

/// Company names are cut to this many characters
const MAX_COMPANY_CHARS: usize = 50;

/// Extracts a footer section from the first `<footer>` landmark.
///
/// Declines only when the document has no footer at all; once a footer
/// exists, fallbacks guarantee a company name and at least one link.
pub fn extract(doc: &Html) -> Option<FooterData> {
    let footer_selector = Selector::parse("footer").unwrap();
    let footer = doc.select(&footer_selector).next()?;

    let company_name = truncate_chars(&company_name(footer), MAX_COMPANY_CHARS);
    let links = links(footer);

    ::log::debug!(
        "Footer extractor matched \"{}\" with {} links",
        company_name,
        links.len()
    );

    Some(FooterData {
        company_name,
        links,
    })
}

/// First non-empty text among a company/logo element, a `<strong>`, and
/// the first paragraph, in that priority order
fn company_name(footer: ElementRef) -> String {
    for source in [".company, .logo", "strong", "p"] {
        let selector = Selector::parse(source).unwrap();
        if let Some(text) = footer
            .select(&selector)
            .next()
            .map(element_text)
            .filter(|text| !text.is_empty())
        {
            return text;
        }
    }
    FALLBACK_COMPANY_NAME.to_string()
}

/// Footer anchors in document order, capped at 5 accepted entries
fn links(footer: ElementRef) -> Vec<FooterLink> {
    let anchor_selector = Selector::parse("a").unwrap();

    let mut links = Vec::new();
    for anchor in footer.select(&anchor_selector) {
        if links.len() >= MAX_LINKS {
            break;
        }

        let label = element_text(anchor);
        if label.is_empty() || label.chars().count() >= MAX_LABEL_CHARS {
            continue;
        }

        let url = anchor.value().attr("href").unwrap_or("#").to_string();
        links.push(FooterLink { label, url });
    }

    if links.is_empty() {
        links.push(FooterLink {
            label: "Contact".to_string(),
            url: "#contact".to_string(),
        });
    }
    links
}
