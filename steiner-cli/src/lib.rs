//! Support library for the steiner router CLI binary.
//!
//! Re-exports the CLI, input-file, and XML-rendering modules so integration
//! tests can exercise the command pipeline without forking a subprocess.

pub mod cli;
pub mod input_file;
pub mod logging;
pub mod xml;
