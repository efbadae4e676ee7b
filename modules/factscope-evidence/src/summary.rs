use factscope_common::{EvidenceRecord, Stance};
use serde::{Deserialize, Serialize};

/// Headline figures for the evidence screen: stance counts plus the average
/// relevance across all records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceSummary {
    pub confirming: usize,
    pub contradicting: usize,
    pub mixed: usize,
    pub neutral: usize,
    /// Rounded mean of record relevance; 0 when there are no records.
    pub avg_relevance: u8,
}

pub fn summarize(records: &[EvidenceRecord]) -> EvidenceSummary {
    let mut summary = EvidenceSummary {
        confirming: 0,
        contradicting: 0,
        mixed: 0,
        neutral: 0,
        avg_relevance: 0,
    };
    for record in records {
        match record.stance {
            Stance::Confirms => summary.confirming += 1,
            Stance::Contradicts => summary.contradicting += 1,
            Stance::Mixed => summary.mixed += 1,
            Stance::Neutral => summary.neutral += 1,
        }
    }
    if !records.is_empty() {
        let total: u32 = records.iter().map(|r| u32::from(r.relevance)).sum();
        summary.avg_relevance =
            ((total as f64 / records.len() as f64).round()) as u8;
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use factscope_common::{Engagement, SourceClass};

    fn record(stance: Stance, relevance: u8) -> EvidenceRecord {
        EvidenceRecord {
            id: 1,
            platform: "Reuters".to_string(),
            source_class: SourceClass::News,
            title: "t".to_string(),
            author: "a".to_string(),
            published_ago: "1 hour ago".to_string(),
            location: "London".to_string(),
            stance,
            relevance,
            snippet: "s".to_string(),
            url: "https://reuters.com/world/general/-1".to_string(),
            engagement: Engagement { likes: 1, shares: 1, comments: 1 },
        }
    }

    #[test]
    fn counts_each_stance_bucket() {
        let records = vec![
            record(Stance::Confirms, 90),
            record(Stance::Confirms, 80),
            record(Stance::Contradicts, 85),
            record(Stance::Mixed, 75),
        ];
        let summary = summarize(&records);
        assert_eq!(summary.confirming, 2);
        assert_eq!(summary.contradicting, 1);
        assert_eq!(summary.mixed, 1);
        assert_eq!(summary.neutral, 0);
        // (90 + 80 + 85 + 75) / 4 = 82.5 -> 83
        assert_eq!(summary.avg_relevance, 83);
    }

    #[test]
    fn empty_records_produce_zeroes() {
        let summary = summarize(&[]);
        assert_eq!(summary.avg_relevance, 0);
        assert_eq!(summary.confirming + summary.contradicting + summary.mixed + summary.neutral, 0);
    }
}
