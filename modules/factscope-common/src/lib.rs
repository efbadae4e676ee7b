pub mod catalog;
pub mod error;
pub mod types;

pub use catalog::{descriptor, EngagementBand, SourceDescriptor, StanceOdds, CATALOG};
pub use error::FactScopeError;
pub use types::*;
