//! Fixed registry of candidate evidence outlets.
//!
//! Every generative rule that varies by outlet lives here as plain data:
//! stance odds, snippet and headline templates, author pools, datelines, and
//! engagement bands. The constants are part of the catalog's behavioral
//! contract; do not recalibrate them.

use crate::types::{SourceClass, Stance};

/// One outlet's stance rule: draw `hit` with probability `chance`, else `miss`.
#[derive(Debug, Clone, Copy)]
pub struct StanceOdds {
    pub chance: f64,
    pub hit: Stance,
    pub miss: Stance,
}

/// Uniform engagement draw bands, half-open.
#[derive(Debug, Clone, Copy)]
pub struct EngagementBand {
    pub likes: (u32, u32),
    pub shares: (u32, u32),
    pub comments: (u32, u32),
}

/// News outlets: a narrow middle band.
pub const NEWS_ENGAGEMENT: EngagementBand = EngagementBand {
    likes: (200, 1200),
    shares: (50, 350),
    comments: (20, 120),
};

/// Micro-blogging: high likes/shares, fewer comments.
pub const MICROBLOG_ENGAGEMENT: EngagementBand = EngagementBand {
    likes: (500, 2500),
    shares: (100, 600),
    comments: (50, 250),
};

/// Forum: modest likes/shares, comment-heavy threads.
pub const FORUM_ENGAGEMENT: EngagementBand = EngagementBand {
    likes: (50, 350),
    shares: (10, 60),
    comments: (100, 600),
};

/// Byline for platforms missing from the catalog.
pub const FALLBACK_AUTHOR: &str = "News Team";

/// Dateline for platforms missing from the catalog.
pub const FALLBACK_LOCATION: &str = "Global";

/// Static per-outlet metadata. Never mutated at runtime.
#[derive(Debug, Clone, Copy)]
pub struct SourceDescriptor {
    pub platform: &'static str,
    pub base_url: &'static str,
    pub class: SourceClass,
    pub odds: StanceOdds,
    /// Snippet template; `{keyword}` is substituted at selection time.
    pub snippet_template: &'static str,
    /// Which extracted keyword (by position) the snippet interpolates.
    pub keyword_slot: usize,
    /// Literal phrase used when that keyword slot is empty.
    pub keyword_fallback: &'static str,
    /// Headline template; `{title}` is substituted at enrichment time.
    pub title_template: &'static str,
    pub author_pool: &'static [&'static str],
    pub location: &'static str,
    pub engagement: EngagementBand,
}

/// The 11 candidate outlets: 4 international, 5 regional, 2 social.
pub const CATALOG: &[SourceDescriptor] = &[
    // International
    SourceDescriptor {
        platform: "Reuters",
        base_url: "https://reuters.com/world/",
        class: SourceClass::News,
        odds: StanceOdds { chance: 0.4, hit: Stance::Confirms, miss: Stance::Neutral },
        snippet_template:
            "Reuters investigation reveals {keyword} about the situation, providing additional context.",
        keyword_slot: 0,
        keyword_fallback: "key details",
        title_template: "Breaking: Analysis reveals key details about {title}",
        author_pool: &["Sarah Johnson", "Michael Chen", "Priya Sharma"],
        location: "London",
        engagement: NEWS_ENGAGEMENT,
    },
    SourceDescriptor {
        platform: "BBC News",
        base_url: "https://www.bbc.com/news/world-",
        class: SourceClass::News,
        odds: StanceOdds { chance: 0.5, hit: Stance::Confirms, miss: Stance::Neutral },
        snippet_template:
            "BBC analysis shows similar patterns in {keyword}, corroborating main claims.",
        keyword_slot: 1,
        keyword_fallback: "recent reports",
        title_template: "{title}: What we know so far",
        author_pool: &["BBC News Team", "James Wilson", "Emma Thompson"],
        location: "London",
        engagement: NEWS_ENGAGEMENT,
    },
    SourceDescriptor {
        platform: "Associated Press",
        base_url: "https://apnews.com/",
        class: SourceClass::News,
        odds: StanceOdds { chance: 0.3, hit: Stance::Confirms, miss: Stance::Contradicts },
        snippet_template:
            "AP fact-check team examines claims about {keyword} with mixed findings.",
        keyword_slot: 0,
        keyword_fallback: "the topic",
        title_template: "Fact Check: Claims about {title}",
        author_pool: &["AP Fact Check Team", "David Martinez", "Lisa Zhang"],
        location: "New York",
        engagement: NEWS_ENGAGEMENT,
    },
    SourceDescriptor {
        platform: "CNN",
        base_url: "https://edition.cnn.com/",
        class: SourceClass::News,
        odds: StanceOdds { chance: 0.4, hit: Stance::Neutral, miss: Stance::Contradicts },
        snippet_template:
            "CNN reports additional details about {keyword} that provide broader context.",
        keyword_slot: 2,
        keyword_fallback: "the incident",
        title_template: "Investigation: New details emerge about {title}",
        author_pool: &["CNN Investigation Team", "Robert Garcia", "Aisha Patel"],
        location: "Atlanta",
        engagement: NEWS_ENGAGEMENT,
    },
    // Regional
    SourceDescriptor {
        platform: "Hindustan Times",
        base_url: "https://www.hindustantimes.com/",
        class: SourceClass::News,
        odds: StanceOdds { chance: 0.4, hit: Stance::Confirms, miss: Stance::Neutral },
        snippet_template:
            "Hindustan Times coverage includes local perspective on {keyword} with official statements.",
        keyword_slot: 0,
        keyword_fallback: "developments",
        title_template: "{title}: Indian perspective and impact",
        author_pool: &["Rajesh Kumar", "Priya Nair", "Amit Sharma", "Neha Gupta"],
        location: "New Delhi",
        engagement: NEWS_ENGAGEMENT,
    },
    SourceDescriptor {
        platform: "The Economic Times",
        base_url: "https://economictimes.indiatimes.com/",
        class: SourceClass::News,
        odds: StanceOdds { chance: 0.5, hit: Stance::Confirms, miss: Stance::Neutral },
        snippet_template:
            "Economic Times analysis focuses on {keyword} and market implications.",
        keyword_slot: 1,
        keyword_fallback: "economic impact",
        title_template: "Market Analysis: Economic implications of {title}",
        author_pool: &["Economic Desk", "Vikram Aditya", "Shreya Mehta"],
        location: "Mumbai",
        engagement: NEWS_ENGAGEMENT,
    },
    SourceDescriptor {
        platform: "The Hindu",
        base_url: "https://www.thehindu.com/",
        class: SourceClass::News,
        odds: StanceOdds { chance: 0.3, hit: Stance::Confirms, miss: Stance::Neutral },
        snippet_template:
            "The Hindu provides detailed coverage of {keyword} with expert commentary.",
        keyword_slot: 0,
        keyword_fallback: "the story",
        title_template: "Detailed coverage: {title} developments",
        author_pool: &["The Hindu Bureau", "Krishnan Nair", "Anita Rao"],
        location: "Chennai",
        engagement: NEWS_ENGAGEMENT,
    },
    SourceDescriptor {
        platform: "India Today",
        base_url: "https://www.indiatoday.in/",
        class: SourceClass::News,
        odds: StanceOdds { chance: 0.4, hit: Stance::Neutral, miss: Stance::Confirms },
        snippet_template:
            "India Today investigation reveals {keyword} related to the claims.",
        keyword_slot: 2,
        keyword_fallback: "additional facts",
        title_template: "Investigation: {title} fact-check report",
        author_pool: &["India Today Web Desk", "Arjun Singh", "Kavita Sharma"],
        location: "New Delhi",
        engagement: NEWS_ENGAGEMENT,
    },
    SourceDescriptor {
        platform: "Times of India",
        base_url: "https://timesofindia.indiatimes.com/",
        class: SourceClass::News,
        odds: StanceOdds { chance: 0.5, hit: Stance::Confirms, miss: Stance::Neutral },
        snippet_template:
            "Times of India reports similar findings about {keyword} from multiple sources.",
        keyword_slot: 1,
        keyword_fallback: "the issue",
        title_template: "Breaking: {title} latest updates",
        author_pool: &["TOI Staff", "Rohit Malhotra", "Deepika Verma"],
        location: "Mumbai",
        engagement: NEWS_ENGAGEMENT,
    },
    // Social
    SourceDescriptor {
        platform: "Twitter",
        base_url: "https://twitter.com/search?q=",
        class: SourceClass::Social,
        odds: StanceOdds { chance: 0.6, hit: Stance::Neutral, miss: Stance::Mixed },
        snippet_template:
            "Twitter discussions show varied opinions on {keyword} with trending hashtags.",
        keyword_slot: 0,
        keyword_fallback: "the topic",
        title_template: "Thread: Analysis and discussion about {title}",
        author_pool: &["@NewsAnalyst", "@FactChecker2024", "@IndiaExpert"],
        location: "Global",
        engagement: MICROBLOG_ENGAGEMENT,
    },
    SourceDescriptor {
        platform: "Reddit",
        base_url: "https://reddit.com/r/news/",
        class: SourceClass::Social,
        odds: StanceOdds { chance: 0.7, hit: Stance::Mixed, miss: Stance::Contradicts },
        snippet_template:
            "Reddit community analysis of {keyword} shows skeptical responses and fact-checking.",
        keyword_slot: 1,
        keyword_fallback: "the claims",
        title_template: "r/news: Community discussion on {title}",
        author_pool: &["u/NewsWatcher", "u/FactChecker123", "u/IndiaToday2024"],
        location: "Global",
        engagement: FORUM_ENGAGEMENT,
    },
];

/// Look up an outlet by platform name (exact match).
pub fn descriptor(platform: &str) -> Option<&'static SourceDescriptor> {
    CATALOG.iter().find(|d| d.platform == platform)
}
