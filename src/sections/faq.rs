use scraper::{ElementRef, Html, Selector};

use crate::sections::{FaqData, FaqItem};
use crate::utils::{collapse_whitespace, element_text};

/// Upper bound on extracted question/answer pairs
pub const MAX_ITEMS: usize = 6;

/// Extracts an FAQ section with up to 6 question/answer pairs.
///
/// First strategy pairs `<dt>` terms with their adjacent `<dd>`
/// descriptions; only when that yields nothing does the second strategy
/// scan `<details>` disclosures.
pub fn extract(doc: &Html) -> Option<FaqData> {
    let mut items = scan_definition_lists(doc);
    if items.is_empty() {
        items = scan_disclosures(doc);
    }

    if items.is_empty() {
        None
    } else {
        ::log::debug!("FAQ extractor collected {} pairs", items.len());
        Some(FaqData { items })
    }
}

/// First pass: each `<dt>` paired with the `<dd>` directly following it
fn scan_definition_lists(doc: &Html) -> Vec<FaqItem> {
    let dt_selector = Selector::parse("dt").unwrap();

    let mut items = Vec::new();
    for term in doc.select(&dt_selector) {
        if items.len() >= MAX_ITEMS {
            break;
        }

        let Some(description) = term
            .next_siblings()
            .filter_map(ElementRef::wrap)
            .next()
            .filter(|element| element.value().name() == "dd")
        else {
            continue;
        };

        let question = element_text(term);
        let answer = element_text(description);
        if question.is_empty() || answer.is_empty() {
            continue;
        }

        items.push(FaqItem { question, answer });
    }
    items
}

/// Second pass: `<details>` disclosures with a `<summary>` question
fn scan_disclosures(doc: &Html) -> Vec<FaqItem> {
    let details_selector = Selector::parse("details").unwrap();
    let summary_selector = Selector::parse("summary").unwrap();
    let paragraph_selector = Selector::parse("p").unwrap();

    let mut items = Vec::new();
    for disclosure in doc.select(&details_selector) {
        if items.len() >= MAX_ITEMS {
            break;
        }

        let question = disclosure
            .select(&summary_selector)
            .next()
            .map(element_text)
            .unwrap_or_default();

        // Prefer an explicit paragraph; otherwise the disclosure's full
        // text with the question removed
        let answer = disclosure
            .select(&paragraph_selector)
            .next()
            .map(element_text)
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| {
                collapse_whitespace(&element_text(disclosure).replacen(&question, "", 1))
            });

        if question.is_empty() || answer.is_empty() {
            continue;
        }

        items.push(FaqItem { question, answer });
    }
    items
}
