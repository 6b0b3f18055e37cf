//! Final results: per-competitor records, their finalization, ranking and
//! rendering into report lines.

mod finalize;
mod ranking;
mod report;
mod result;

pub use finalize::finalize_results;
pub use ranking::rank_results;
pub use report::format_result;
pub use result::{RaceResult, ResultStatus, Split};
