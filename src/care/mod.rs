//! Presentation derivations built from an assessment: treatment plan,
//! prevention targets, the stone bar chart series and tracker trends.
//! Pure functions; the trends draw from a caller-supplied random source.

mod chart;
mod prevention;
mod tracker;
mod treatment;

pub use chart::*;
pub use prevention::*;
pub use tracker::*;
pub use treatment::*;
