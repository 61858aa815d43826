pub mod enums;

mod assessment;
mod profile;
mod scan;

pub use assessment::*;
pub use profile::*;
pub use scan::*;
