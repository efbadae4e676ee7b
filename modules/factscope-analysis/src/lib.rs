pub mod classify;
pub mod keywords;
pub mod pipeline;
pub mod score;
pub mod select;

pub use classify::classify;
pub use keywords::extract;
pub use pipeline::{analyze, analyze_with_rng};
pub use score::{score, Score};
pub use select::select;
