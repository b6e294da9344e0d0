//! Bundle descriptor resolver for RA-moon's List-Wizard.
//!
//! Derives the filesystem locations a freezing pipeline needs (project
//! root, packaging directory, icon file) from the descriptor's own
//! location, and assembles the declarative packaging configuration the
//! pipeline consumes. The pipeline itself (dependency analysis, archive
//! creation, executable stub generation, bundle assembly) is an external
//! collaborator and is not implemented here.
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod descriptor;
pub mod error;

// Re-export commonly used types
pub use error::{CliError, DescriptorError, Result};
