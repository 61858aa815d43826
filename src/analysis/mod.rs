//! Kidney stone assessment engine.
//!
//! Four rules feed one `Assessment`:
//! 1. Scan simulation — mock stone sizes and locations
//! 2. Stone type — weighted draw, independent of the patient
//! 3. Recurrence risk — risk units on a fixed five-point scale
//! 4. Surgery triage — size threshold or ureter location
//!
//! Randomness is always injected by the caller.

mod classify;
mod engine;
mod reference;
mod rules;
mod scan;
mod types;

pub use classify::*;
pub use engine::*;
pub use reference::*;
pub use rules::*;
pub use scan::*;
pub use types::*;
