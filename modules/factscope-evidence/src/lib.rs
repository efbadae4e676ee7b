pub mod enrich;
pub mod query;
pub mod summary;

pub use enrich::{enrich, enrich_all};
pub use query::{filter, Facet};
pub use summary::{summarize, EvidenceSummary};
