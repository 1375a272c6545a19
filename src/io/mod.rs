//! Document input/output
//!
//! The core consumes and produces only in-memory entities; this module
//! is the surrounding collaborator that parses the two input documents
//! (requirements, module library) and serializes the selected
//! architecture back to JSON.

use miette::Diagnostic;
use thiserror::Error;

use crate::entities::ValidationError;
use crate::json::JsonParseError;

pub mod architecture;
pub mod library;
pub mod requirements;

pub use architecture::{dump_architecture, load_architecture, ArchitectureDoc};
pub use library::{library_from_str, load_module_library};
pub use requirements::{load_requirements, requirements_from_str};

/// Errors raised while loading or writing documents
#[derive(Debug, Error, Diagnostic)]
pub enum LoadError {
    #[error("failed to read {path}")]
    #[diagnostic(code(zac::io::read))]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}")]
    #[diagnostic(code(zac::io::write))]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] JsonParseError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Invalid(#[from] ValidationError),
}
