use factscope_common::catalog::{self, EngagementBand, NEWS_ENGAGEMENT};
use factscope_common::{AnalysisResult, Engagement, EvidenceRecord, EvidenceStub, SourceClass};
use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::debug;

pub const RELEVANCE_MIN: u8 = 75;
pub const RELEVANCE_MAX: u8 = 99;

/// Expand every selected source of a result into display records, ids
/// assigned by position (1-based, source order).
pub fn enrich_all<R: Rng + ?Sized>(result: &AnalysisResult, rng: &mut R) -> Vec<EvidenceRecord> {
    result
        .sources
        .iter()
        .enumerate()
        .map(|(i, stub)| enrich(stub, result, (i + 1) as u32, rng))
        .collect()
}

/// Expand one stub into a full display record. Author, relevance, timing and
/// engagement are fresh draws each call — callers wanting a stable view must
/// cache the returned records.
pub fn enrich<R: Rng + ?Sized>(
    stub: &EvidenceStub,
    result: &AnalysisResult,
    id: u32,
    rng: &mut R,
) -> EvidenceRecord {
    let desc = catalog::descriptor(&stub.platform);
    let content_title = result.content.title.as_str();

    // Platforms outside the catalog get generic fallbacks rather than errors.
    let title = match desc {
        Some(d) => d.title_template.replace("{title}", content_title),
        None => format!("{} coverage of {}", stub.platform, content_title),
    };
    let author = match desc {
        Some(d) => d.author_pool.choose(rng).copied().unwrap_or(catalog::FALLBACK_AUTHOR),
        None => catalog::FALLBACK_AUTHOR,
    };
    let location = desc.map_or(catalog::FALLBACK_LOCATION, |d| d.location);
    let source_class = desc.map_or(SourceClass::News, |d| d.class);
    let band = desc.map_or(NEWS_ENGAGEMENT, |d| d.engagement);

    let record = EvidenceRecord {
        id,
        platform: stub.platform.clone(),
        source_class,
        title,
        author: author.to_string(),
        published_ago: published_ago(rng.random_range(1..=24)),
        location: location.to_string(),
        stance: stub.stance,
        relevance: rng.random_range(RELEVANCE_MIN..=RELEVANCE_MAX),
        snippet: stub.snippet.clone(),
        url: stub.url.clone(),
        engagement: draw_engagement(band, rng),
    };
    debug!(platform = %record.platform, relevance = record.relevance, "enriched evidence record");
    record
}

/// `"1 hour ago"`, `"<h> hours ago"`, `"1 day ago"` once the draw reaches 24.
fn published_ago(hours: u32) -> String {
    match hours {
        1 => "1 hour ago".to_string(),
        h if h < 24 => format!("{h} hours ago"),
        _ => "1 day ago".to_string(),
    }
}

fn draw_engagement<R: Rng + ?Sized>(band: EngagementBand, rng: &mut R) -> Engagement {
    Engagement {
        likes: rng.random_range(band.likes.0..band.likes.1),
        shares: rng.random_range(band.shares.0..band.shares.1),
        comments: rng.random_range(band.comments.0..band.comments.1),
    }
}
