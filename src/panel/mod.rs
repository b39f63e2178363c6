//! Display controllers for concrete panels.

pub mod co5300;

pub use co5300::{Co5300Error, Co5300Panel};
