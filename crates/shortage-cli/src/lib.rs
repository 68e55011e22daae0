//! Interactive front end for the shortage tracker
//!
//! The binary wires configuration, logging and the JSON store together and
//! hands stdin/stdout to a [`Shell`]. The shell is generic over its reader
//! and writer so tests can script whole sessions.

mod shell;

pub use shell::*;
