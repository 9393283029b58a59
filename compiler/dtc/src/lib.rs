//! Dispatch-tree compiler driver.
//!
//! Loads a builtin-name catalog, builds its dispatch tree, and writes the
//! generated fragment to a file, stdout, or the marked region of an existing
//! source file.
//!
//! ```text
//! dtc emit core --layout=compact -o core.txt
//! dtc splice core src/builtins/core.cc
//! dtc dump prefix
//! ```
//!
//! # Debugging
//!
//! - `RUST_LOG=debug`: per-catalog summaries.
//! - `RUST_LOG=dtc_build=trace`: every split decision, nested by recursion.

pub mod commands;
mod error;
mod logging;
pub mod options;
pub mod source;
pub mod splice;

pub use error::DriverError;
pub use logging::init_tracing;
