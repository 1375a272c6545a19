//! JSON parsing diagnostics

pub mod diagnostics;

pub use diagnostics::JsonParseError;
