pub mod faq;
pub mod features;
pub mod footer;
pub mod hero;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

/// The closed set of section variants an LP can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Hero,
    Features,
    /// Exists for downstream editing; import never produces it
    Testimonials,
    Faq,
    Footer,
}

impl SectionKind {
    /// Default display name shown in the editor; the user can rename it
    pub fn display_name(&self) -> &'static str {
        match self {
            SectionKind::Hero => "Hero",
            SectionKind::Features => "Features",
            SectionKind::Testimonials => "Testimonials",
            SectionKind::Faq => "FAQ",
            SectionKind::Footer => "Footer",
        }
    }
}

/// One editable block of a landing page, typed by variant
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Generated identifier, unique within the import session
    pub id: String,

    #[serde(rename = "type")]
    pub kind: SectionKind,

    /// Display name, seeded from the kind
    pub name: String,

    pub data: SectionData,

    /// Defaults to true on import
    pub visible: bool,
}

/// Variant-specific payload of a section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionData {
    Hero(HeroData),
    Features(FeaturesData),
    Faq(FaqData),
    Footer(FooterData),
}

impl SectionData {
    pub fn kind(&self) -> SectionKind {
        match self {
            SectionData::Hero(_) => SectionKind::Hero,
            SectionData::Features(_) => SectionKind::Features,
            SectionData::Faq(_) => SectionKind::Faq,
            SectionData::Footer(_) => SectionKind::Footer,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroData {
    /// Non-empty; the extractor declines without a usable heading
    pub heading: String,

    /// May be empty when the page offers no subheading
    pub subheading: String,

    /// Always empty on import; filled in by the editor
    pub background_image: String,

    pub cta_text: String,

    pub cta_link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturesData {
    /// At most 6 items, in encounter order
    pub items: Vec<FeatureItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureItem {
    /// Between 3 and 49 characters
    pub title: String,

    pub body: String,

    /// Always empty on import
    pub icon_image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqData {
    /// At most 6 items, questions and answers both non-empty
    pub items: Vec<FaqItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterData {
    /// At most 50 characters
    pub company_name: String,

    /// Between 1 and 5 links; a synthetic contact link when none survive
    pub links: Vec<FooterLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterLink {
    /// Shorter than 30 characters
    pub label: String,
    pub url: String,
}
