// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # pdbscope
//!
//! Decoding and rendering of CodeView type records from PDB type-information streams.
//!
//! A PDB's TPI and IPI streams are sequences of length-framed records, each tagged with a
//! 16-bit leaf. Once the stream reader has sliced a record's payload out of the stream,
//! `pdbscope` decodes it into a typed value and renders it as a plain text report.
//!
//! ## Quick Start
//!
//! ```rust
//! use pdbscope::prelude::*;
//!
//! let mut payload = vec![0u8; 16];                          // GUID
//! payload.extend_from_slice(&[0x01, 0x00, 0x00, 0x00]);     // count
//! payload.extend_from_slice(&[0x00, 0x10, 0x00, 0x00]);     // record number
//!
//! let record = TypeRecord::parse(OemDefinableString2::PDB_ID, &payload)?;
//! print!("{}", record.emit());
//! # Ok::<(), pdbscope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`file`] - the bounded [`Parser`] cursor and little-endian primitives
//! - [`types`] - record numbers, leaf dispatch and the record decoders
//! - [`Error`] and [`Result`] - error handling
//!
//! Decoding is all-or-nothing: a decoder either returns a fully populated record or an
//! [`Error`], never a partial record. Rendering cannot fail.
//!
//! ## Logging
//!
//! Decoders report through the [`log`](https://docs.rs/log) facade at `trace` and `debug`
//! level. The library never installs a logger.
//!
//! ## Fuzzing
//!
//! ```bash
//! cargo +nightly fuzz run type_record --release
//! ```

#[macro_use]
pub(crate) mod error;
pub mod file;
pub mod prelude;
pub mod types;

/// `pdbscope` Result type
///
/// A type alias for `std::result::Result<T, Error>` where the error type is always
/// [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `pdbscope` Error type
///
/// Covers truncated payloads, unsupported record-number widths and invalid counts.
pub use error::Error;

/// Bounded cursor over a record payload
pub use file::parser::Parser;

/// Record types and leaf dispatch
pub use types::{
    OemDefinableString2, RecordCategory, RecordNumber, TypeLeaf, TypeRecord, RECORD_NUMBER_BITS,
};
