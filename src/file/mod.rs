//! Low-level byte access for PDB stream data.
//!
//! - [`crate::file::io`] - little-endian primitive decoding
//! - [`crate::file::parser`] - the bounded [`crate::file::parser::Parser`] cursor that record
//!   decoders read from

pub mod io;
pub mod parser;
