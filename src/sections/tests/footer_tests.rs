use crate::sections::footer::{self, FALLBACK_COMPANY_NAME, MAX_LINKS};
use scraper::Html;

fn doc(html: &str) -> Html {
    Html::parse_document(html)
}

#[test]
fn declines_without_footer_landmark() {
    let doc = doc("<div>Copyright Acme</div>");
    assert!(footer::extract(&doc).is_none());
}

#[test]
fn company_from_class_beats_strong_and_paragraph() {
    let doc = doc(
        r#"<footer>
            <p>Some paragraph</p>
            <strong>Strong Co</strong>
            <span class="company">Acme Inc.</span>
        </footer>"#,
    );
    let data = footer::extract(&doc).unwrap();
    assert_eq!(data.company_name, "Acme Inc.");
}

#[test]
fn company_from_strong_when_no_class_matches() {
    let doc = doc("<footer><p>First paragraph</p><strong>Strong Co</strong></footer>");
    let data = footer::extract(&doc).unwrap();
    assert_eq!(data.company_name, "Strong Co");
}

#[test]
fn company_from_first_paragraph_as_last_resort() {
    let doc = doc("<footer><p>Acme from paragraph</p></footer>");
    let data = footer::extract(&doc).unwrap();
    assert_eq!(data.company_name, "Acme from paragraph");
}

#[test]
fn company_falls_back_to_literal() {
    let doc = doc("<footer><a href=\"/a\">About</a></footer>");
    let data = footer::extract(&doc).unwrap();
    assert_eq!(data.company_name, FALLBACK_COMPANY_NAME);
}

#[test]
fn company_name_is_cut_at_fifty_characters() {
    let doc = doc(&format!("<footer><strong>{}</strong></footer>", "c".repeat(70)));
    let data = footer::extract(&doc).unwrap();
    assert_eq!(data.company_name.chars().count(), 50);
}

#[test]
fn collects_links_in_document_order() {
    let doc = doc(
        r#"<footer>
            <a href="/terms">Terms</a>
            <a href="/privacy">Privacy</a>
        </footer>"#,
    );
    let data = footer::extract(&doc).unwrap();
    assert_eq!(data.links.len(), 2);
    assert_eq!(data.links[0].label, "Terms");
    assert_eq!(data.links[0].url, "/terms");
    assert_eq!(data.links[1].label, "Privacy");
}

#[test]
fn caps_links_at_five() {
    let anchors: String = (0..8)
        .map(|i| format!("<a href=\"/l{}\">Link {}</a>", i, i))
        .collect();
    let doc = doc(&format!("<footer>{}</footer>", anchors));
    let data = footer::extract(&doc).unwrap();
    assert_eq!(data.links.len(), MAX_LINKS);
    assert_eq!(data.links[4].label, "Link 4");
}

#[test]
fn skips_empty_and_overlong_labels() {
    let doc = doc(&format!(
        "<footer>\
         <a href=\"/img\"><img src=\"logo.png\"></a>\
         <a href=\"/long\">{}</a>\
         <a href=\"/ok\">Kept</a>\
         </footer>",
        "l".repeat(30),
    ));
    let data = footer::extract(&doc).unwrap();
    assert_eq!(data.links.len(), 1);
    assert_eq!(data.links[0].label, "Kept");
}

#[test]
fn missing_href_becomes_hash() {
    let doc = doc("<footer><a>Bare anchor</a></footer>");
    let data = footer::extract(&doc).unwrap();
    assert_eq!(data.links[0].url, "#");
}

#[test]
fn synthetic_contact_link_when_none_survive() {
    let doc = doc("<footer><p>Acme</p></footer>");
    let data = footer::extract(&doc).unwrap();
    assert_eq!(data.links.len(), 1);
    assert_eq!(data.links[0].label, "Contact");
    assert_eq!(data.links[0].url, "#contact");
}
