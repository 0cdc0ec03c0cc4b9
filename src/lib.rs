//! Flat single-command argument parser.
//!
//! Turns `argv[1..]` into a typed [`Config`] record through three phases:
//!
//! 1. **Dispatch** — each token is looked up in the static option table
//!    ([`spec::OPTIONS`]); unknown tokens fail immediately
//! 2. **Decode** — value-taking options consume the following token and
//!    coerce it to the declared type (int16, float32, string, uint32)
//! 3. **Enforce** — after the stream is exhausted, every mandatory field
//!    must have been seen at least once; all missing fields are reported
//!    together
//!
//! The engine never terminates the process. [`parse`] returns a
//! [`ParseError`] and the binary decides what to print and how to exit.

pub mod error;
pub mod parser;
pub mod spec;

pub use error::ParseError;
pub use parser::{parse, Config, Parsed};
