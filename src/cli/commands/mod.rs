pub mod check;
pub mod scan;

pub use check::*;
pub use scan::*;
