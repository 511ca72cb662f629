//! Diagnostics produced while parsing.
//!
//! This module defines:
//!
//! - Error structures carrying the source position of the offending token
//! - The error variants the parser can report
//! - Text formatting of diagnostics, including a source excerpt with a caret

pub mod errors;
