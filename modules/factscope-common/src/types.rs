use serde::{Deserialize, Serialize};

use crate::error::FactScopeError;

/// Title used when a text submission arrives without one.
pub const DEFAULT_TEXT_TITLE: &str = "User Submitted Article";

/// File name used when an image submission arrives without one.
pub const DEFAULT_IMAGE_NAME: &str = "uploaded-image.jpg";

/// Stand-in for OCR output — no OCR runs anywhere in the core.
pub const IMAGE_OCR_PLACEHOLDER: &str =
    "Breaking news about recent developments in technology and politics affecting the economy";

// --- Input Types ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Text,
    Url,
    Image,
}

/// The normalized unit of submitted content, regardless of input channel.
/// Immutable once constructed; passed by value into the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub kind: ContentKind,
    pub title: String,
    pub body: String,
}

impl Content {
    pub fn text(title: &str, body: &str) -> Self {
        let title = if title.trim().is_empty() {
            DEFAULT_TEXT_TITLE.to_string()
        } else {
            title.to_string()
        };
        Content {
            kind: ContentKind::Text,
            title,
            body: body.to_string(),
        }
    }

    /// Build content for a URL submission. The remote page is never fetched;
    /// a placeholder body derived from the hostname stands in for it.
    /// Rejecting a malformed URL here is the only failure in the whole core.
    pub fn from_url(raw: &str) -> Result<Self, FactScopeError> {
        let parsed = url::Url::parse(raw)
            .map_err(|e| FactScopeError::InvalidUrl(format!("{raw}: {e}")))?;
        let host = parsed
            .host_str()
            .ok_or_else(|| FactScopeError::InvalidUrl(format!("{raw}: missing host")))?;
        Ok(Content {
            kind: ContentKind::Url,
            title: format!("Article from {host}"),
            body: format!("Article about {host} reporting on current events and developments"),
        })
    }

    /// Build content for an image submission. OCR never executes; a fixed
    /// placeholder sentence stands in for the extracted text.
    pub fn image(file_name: Option<&str>) -> Self {
        Content {
            kind: ContentKind::Image,
            title: file_name.unwrap_or(DEFAULT_IMAGE_NAME).to_string(),
            body: IMAGE_OCR_PLACEHOLDER.to_string(),
        }
    }
}

// --- Analysis Enums ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Politics,
    Business,
    Health,
    Technology,
    Sports,
    General,
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Topic::Politics => write!(f, "politics"),
            Topic::Business => write!(f, "business"),
            Topic::Health => write!(f, "health"),
            Topic::Technology => write!(f, "technology"),
            Topic::Sports => write!(f, "sports"),
            Topic::General => write!(f, "general"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Authentic,
    Fake,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Authentic => write!(f, "authentic"),
            Verdict::Fake => write!(f, "fake"),
        }
    }
}

/// A source's labeled relationship to the submitted content's claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stance {
    Confirms,
    Contradicts,
    Neutral,
    Mixed,
}

impl std::fmt::Display for Stance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stance::Confirms => write!(f, "confirms"),
            Stance::Contradicts => write!(f, "contradicts"),
            Stance::Neutral => write!(f, "neutral"),
            Stance::Mixed => write!(f, "mixed"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceClass {
    News,
    Social,
}

impl std::fmt::Display for SourceClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceClass::News => write!(f, "news"),
            SourceClass::Social => write!(f, "social"),
        }
    }
}

// --- Analysis Output ---

/// Minimal selected-source record produced during analysis, before display
/// enrichment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceStub {
    pub platform: String,
    pub stance: Stance,
    pub snippet: String,
    pub url: String,
}

/// One verdict report. Created once per analysis call; the caller holds it
/// for the lifetime of the result screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub content: Content,
    pub verdict: Verdict,
    /// Percentage in [70, 99].
    pub confidence: u8,
    /// Always exactly four mode-specific checklist entries.
    pub signals: Vec<String>,
    /// 3 or 4 stubs, distinct platforms.
    pub sources: Vec<EvidenceStub>,
}

// --- Enrichment Output ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engagement {
    pub likes: u32,
    pub shares: u32,
    pub comments: u32,
}

/// Fully detailed, display-ready expansion of an [`EvidenceStub`]. Derived on
/// demand; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceRecord {
    /// 1-based position within the result's source list.
    pub id: u32,
    pub platform: String,
    pub source_class: SourceClass,
    pub title: String,
    pub author: String,
    pub published_ago: String,
    pub location: String,
    pub stance: Stance,
    /// Percentage in [75, 99].
    pub relevance: u8,
    pub snippet: String,
    pub url: String,
    pub engagement: Engagement,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_content_falls_back_to_default_title() {
        let content = Content::text("  ", "Some article body");
        assert_eq!(content.title, DEFAULT_TEXT_TITLE);
        assert_eq!(content.kind, ContentKind::Text);

        let titled = Content::text("Budget Vote", "Some article body");
        assert_eq!(titled.title, "Budget Vote");
    }

    #[test]
    fn url_content_synthesizes_placeholder_body_from_host() {
        let content = Content::from_url("https://example.com/story/123").unwrap();
        assert_eq!(content.kind, ContentKind::Url);
        assert_eq!(content.title, "Article from example.com");
        assert_eq!(
            content.body,
            "Article about example.com reporting on current events and developments"
        );
    }

    #[test]
    fn malformed_url_is_rejected_at_construction() {
        assert!(matches!(
            Content::from_url("not a url"),
            Err(FactScopeError::InvalidUrl(_))
        ));
        // Parseable but hostless
        assert!(matches!(
            Content::from_url("data:text/plain,hello"),
            Err(FactScopeError::InvalidUrl(_))
        ));
    }

    #[test]
    fn image_content_uses_ocr_placeholder() {
        let content = Content::image(None);
        assert_eq!(content.title, DEFAULT_IMAGE_NAME);
        assert_eq!(content.body, IMAGE_OCR_PLACEHOLDER);

        let named = Content::image(Some("screenshot.png"));
        assert_eq!(named.title, "screenshot.png");
    }

    #[test]
    fn enums_serialize_snake_case() {
        assert_eq!(serde_json::to_string(&Verdict::Authentic).unwrap(), "\"authentic\"");
        assert_eq!(serde_json::to_string(&Stance::Contradicts).unwrap(), "\"contradicts\"");
        assert_eq!(serde_json::to_string(&SourceClass::Social).unwrap(), "\"social\"");
        assert_eq!(serde_json::to_string(&Topic::Politics).unwrap(), "\"politics\"");
        assert_eq!(serde_json::to_string(&ContentKind::Image).unwrap(), "\"image\"");
    }
}
