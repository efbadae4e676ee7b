use factscope_common::{ContentKind, Verdict};
use rand::Rng;

pub const CONFIDENCE_MIN: u8 = 70;
pub const CONFIDENCE_MAX: u8 = 99;

/// Signal checklists shown per input mode. The wording is an external
/// contract; golden tests pin it verbatim.
pub const TEXT_SIGNALS: [&str; 4] = [
    "Language patterns analysis",
    "Source credibility check",
    "Fact verification",
    "Bias detection",
];

pub const URL_SIGNALS: [&str; 4] = [
    "Source domain reputation",
    "Content freshness",
    "Cross-reference verification",
    "Author credibility",
];

pub const IMAGE_SIGNALS: [&str; 4] = [
    "OCR text extraction",
    "Image metadata analysis",
    "Visual tampering detection",
    "Content verification",
];

#[derive(Debug, Clone, PartialEq)]
pub struct Score {
    pub verdict: Verdict,
    pub confidence: u8,
    pub signals: Vec<String>,
}

/// The mode-specific checklist, in display order.
pub fn signals(kind: ContentKind) -> Vec<String> {
    let list = match kind {
        ContentKind::Text => &TEXT_SIGNALS,
        ContentKind::Url => &URL_SIGNALS,
        ContentKind::Image => &IMAGE_SIGNALS,
    };
    list.iter().map(|s| s.to_string()).collect()
}

/// Stand-in scorer. The contract is shape only: verdict is a uniform coin
/// flip, confidence a uniform draw in [70, 99], and always four signals.
pub fn score<R: Rng + ?Sized>(kind: ContentKind, rng: &mut R) -> Score {
    let verdict = if rng.random_bool(0.5) {
        Verdict::Authentic
    } else {
        Verdict::Fake
    };
    Score {
        verdict,
        confidence: rng.random_range(CONFIDENCE_MIN..=CONFIDENCE_MAX),
        signals: signals(kind),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn confidence_stays_in_band() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..500 {
            let s = score(ContentKind::Text, &mut rng);
            assert!((CONFIDENCE_MIN..=CONFIDENCE_MAX).contains(&s.confidence));
        }
    }

    #[test]
    fn both_verdicts_occur() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut authentic = 0;
        let mut fake = 0;
        for _ in 0..200 {
            match score(ContentKind::Url, &mut rng).verdict {
                Verdict::Authentic => authentic += 1,
                Verdict::Fake => fake += 1,
            }
        }
        assert!(authentic > 0 && fake > 0);
    }

    #[test]
    fn signal_lists_match_the_published_wording() {
        assert_eq!(signals(ContentKind::Text), TEXT_SIGNALS.map(String::from).to_vec());
        assert_eq!(
            signals(ContentKind::Url),
            vec![
                "Source domain reputation",
                "Content freshness",
                "Cross-reference verification",
                "Author credibility",
            ]
        );
        assert_eq!(
            signals(ContentKind::Image),
            vec![
                "OCR text extraction",
                "Image metadata analysis",
                "Visual tampering detection",
                "Content verification",
            ]
        );
    }
}
