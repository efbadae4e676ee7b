use factscope_common::Topic;

/// Ordered rule table. First matching rule wins; the order is load-bearing
/// because downstream URL slugs depend on it.
const RULES: &[(Topic, &[&str])] = &[
    (Topic::Politics, &["politics", "election", "government"]),
    (Topic::Business, &["economy", "market", "business"]),
    (Topic::Health, &["health", "medical", "disease"]),
    (Topic::Technology, &["technology", "tech", "ai"]),
    (Topic::Sports, &["sports", "cricket", "football"]),
];

/// Map raw content to one topic tag. Case-insensitive substring match;
/// total — unmatched content lands in [`Topic::General`].
pub fn classify(content: &str) -> Topic {
    let lower = content.to_lowercase();
    for (topic, needles) in RULES {
        if needles.iter().any(|n| lower.contains(n)) {
            return *topic;
        }
    }
    Topic::General
}
