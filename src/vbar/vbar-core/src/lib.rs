pub mod bank;
pub mod catalog;
pub mod constants;
pub mod decoder;
pub mod derive;
pub mod error;
pub mod groups;
pub mod ops;

pub use error::{Error, Result};

/// Register number as stored in a .vbr file. Values of `constants::DERIVED_BASE`
/// and above identify synthetic registers.
pub type RegisterId = i32;
