// Library crate: the editor core, host protocol and headless harness.
// The binary only wires these up to files and logging.

pub mod catalog;
pub mod command;
pub mod error;
pub mod fixtures;
pub mod harness;
pub mod id;
pub mod state;
