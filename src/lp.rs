use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::sections::Section;

/// Caveat attached when fewer than three section types were extracted
pub const NOTE_MISSING_SECTIONS: &str =
    "Some sections could not be detected from the source page. Add them manually in the editor.";

/// Reminder attached to every import: images are never carried over
pub const NOTE_REPLACE_IMAGES: &str =
    "Images are not imported. Replace the image placeholders with your own.";

/// Coarse quality signal derived from how many section types were extracted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    /// Pure function of the extracted-section count: >=3 high, >=2 medium,
    /// else low
    pub fn from_section_count(count: usize) -> Self {
        match count {
            n if n >= 3 => Confidence::High,
            2 => Confidence::Medium,
            _ => Confidence::Low,
        }
    }
}

/// Lifecycle status of an LP; imports always start as drafts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LpStatus {
    Draft,
    Published,
}

/// Provenance and quality summary of an imported LP
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LpMeta {
    /// The URL the page was imported from
    pub source_url: String,

    pub confidence: Confidence,

    /// Human-readable caveats, extraction caveat first
    pub notes: Vec<String>,
}

/// A landing-page record, the top-level artifact produced by import
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lp {
    pub id: String,

    /// Page title, at most 50 characters before the ellipsis marker
    pub title: String,

    pub status: LpStatus,

    pub created_at: DateTime<Utc>,

    /// Equal to `created_at` at import time
    pub updated_at: DateTime<Utc>,

    pub meta: LpMeta,

    /// Extraction order: hero, features, faq, footer
    pub sections: Vec<Section>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_thresholds() {
        assert_eq!(Confidence::from_section_count(0), Confidence::Low);
        assert_eq!(Confidence::from_section_count(1), Confidence::Low);
        assert_eq!(Confidence::from_section_count(2), Confidence::Medium);
        assert_eq!(Confidence::from_section_count(3), Confidence::High);
        assert_eq!(Confidence::from_section_count(4), Confidence::High);
    }

    #[test]
    fn confidence_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Confidence::High).unwrap(), "\"high\"");
        assert_eq!(serde_json::to_string(&LpStatus::Draft).unwrap(), "\"draft\"");
    }
}
