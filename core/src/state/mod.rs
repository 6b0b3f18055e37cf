pub mod cache;
pub mod competitor;

pub use cache::RaceCache;
pub use competitor::Competitor;
