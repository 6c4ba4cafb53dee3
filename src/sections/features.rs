use scraper::{ElementRef, Html, Selector};

use crate::sections::{FeatureItem, FeaturesData};
use crate::utils::{element_text, truncate_chars};

/// Upper bound on extracted feature items
pub const MAX_ITEMS: usize = 6;

/// Body text used when a candidate offers no paragraph or description
pub const PLACEHOLDER_BODY: &str = "explanation text goes here";

/// How many `<h2>` headings the fallback pass considers
const FALLBACK_MAX_HEADINGS: usize = 3;

/// How much of a candidate's own text stands in for a missing title
const TITLE_FALLBACK_CHARS: usize = 30;

/// Extracts a features section with up to 6 items.
///
/// Two independent strategies tried in sequence: a scan over feature-like
/// elements, then (only when that yields nothing) a pairing of `<h2>`
/// headings with their adjacent paragraphs.
pub fn extract(doc: &Html) -> Option<FeaturesData> {
    let mut items = scan_candidates(doc);
    if items.is_empty() {
        items = scan_heading_pairs(doc);
    }

    if items.is_empty() {
        None
    } else {
        ::log::debug!("Features extractor collected {} items", items.len());
        Some(FeaturesData { items })
    }
}

/// First pass: feature-like elements in document order
fn scan_candidates(doc: &Html) -> Vec<FeatureItem> {
    let candidate_selector = Selector::parse("h3, .feature, .card, .service-item, article").unwrap();
    let title_selector = Selector::parse("h3, h4, .title").unwrap();
    let body_selector = Selector::parse("p, .description").unwrap();

    let mut items = Vec::new();
    for candidate in doc.select(&candidate_selector) {
        if items.len() >= MAX_ITEMS {
            break;
        }

        let title = candidate
            .select(&title_selector)
            .next()
            .map(element_text)
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| truncate_chars(&element_text(candidate), TITLE_FALLBACK_CHARS));
        if !title_usable(&title) {
            continue;
        }

        let body = candidate
            .select(&body_selector)
            .next()
            .map(element_text)
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| PLACEHOLDER_BODY.to_string());

        items.push(FeatureItem {
            title,
            body,
            icon_image: String::new(),
        });
    }
    items
}

/// Second pass: `<h2>` headings paired with their adjacent paragraphs
fn scan_heading_pairs(doc: &Html) -> Vec<FeatureItem> {
    let h2_selector = Selector::parse("h2").unwrap();

    let mut items = Vec::new();
    for heading in doc.select(&h2_selector).take(FALLBACK_MAX_HEADINGS) {
        let title = element_text(heading);
        if !title_usable(&title) {
            continue;
        }

        let body = heading
            .next_siblings()
            .filter_map(ElementRef::wrap)
            .next()
            .filter(|element| element.value().name() == "p")
            .map(element_text)
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| PLACEHOLDER_BODY.to_string());

        items.push(FeatureItem {
            title,
            body,
            icon_image: String::new(),
        });
    }
    items
}

/// Titles must be longer than 2 and shorter than 50 characters
fn title_usable(title: &str) -> bool {
    let len = title.chars().count();
    len > 2 && len < 50
}
