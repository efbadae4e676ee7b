use factscope_common::{EvidenceRecord, SourceClass};

/// Facet the evidence view filters on: everything, one source class, or one
/// platform by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Facet {
    All,
    Class(SourceClass),
    Platform(String),
}

impl Facet {
    /// Parse the facet strings the view sends: `"all"`, `"news"`, `"social"`,
    /// or a platform name.
    pub fn parse(raw: &str) -> Facet {
        match raw.to_lowercase().as_str() {
            "all" => Facet::All,
            "news" => Facet::Class(SourceClass::News),
            "social" => Facet::Class(SourceClass::Social),
            _ => Facet::Platform(raw.to_string()),
        }
    }

    fn matches(&self, record: &EvidenceRecord) -> bool {
        match self {
            Facet::All => true,
            Facet::Class(class) => record.source_class == *class,
            Facet::Platform(name) => record.platform.eq_ignore_ascii_case(name),
        }
    }
}

/// Filter enriched records: a record passes when `query` is empty or a
/// case-insensitive substring of its title or snippet, and the facet matches.
/// Stateless and order-preserving; the randomness lives upstream.
pub fn filter(records: &[EvidenceRecord], query: &str, facet: &Facet) -> Vec<EvidenceRecord> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| {
            let matches_query = needle.is_empty()
                || record.title.to_lowercase().contains(&needle)
                || record.snippet.to_lowercase().contains(&needle);
            matches_query && facet.matches(record)
        })
        .cloned()
        .collect()
}
