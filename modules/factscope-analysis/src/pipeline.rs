use factscope_common::{AnalysisResult, Content};
use rand::Rng;
use tracing::{debug, info};

use crate::{classify, keywords, score, select};

/// Run the full analysis with the thread-local RNG.
pub fn analyze(content: Content) -> AnalysisResult {
    analyze_with_rng(content, &mut rand::rng())
}

/// The sole analysis entry point: derive topic and keywords from the body,
/// select evidence, score the verdict, and assemble the result. Synchronous,
/// no I/O, bounded time; any pacing delay belongs to the caller.
pub fn analyze_with_rng<R: Rng + ?Sized>(content: Content, rng: &mut R) -> AnalysisResult {
    let sources = if content.body.trim().is_empty() {
        debug!("blank body, skipping source selection");
        Vec::new()
    } else {
        let topic = classify::classify(&content.body);
        let kws = keywords::extract(&content.body);
        debug!(%topic, keywords = ?kws, "derived analysis inputs");
        select::select(topic, &kws, rng)
    };

    let score = score::score(content.kind, rng);
    info!(
        verdict = %score.verdict,
        confidence = score.confidence,
        sources = sources.len(),
        "analysis complete"
    );

    AnalysisResult {
        content,
        verdict: score.verdict,
        confidence: score.confidence,
        signals: score.signals,
        sources,
    }
}
