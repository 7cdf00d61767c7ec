//! The `LF_OEM2` ("OEM Definable String 2") type record.
//!
//! The record lets a compiler vendor attach tool-specific type information to a PDB. It
//! is identified by a GUID naming the vendor's format, followed by a counted list of
//! type references and a vendor-defined tail. The layout of that tail is not published,
//! so it is kept as opaque bytes and only reported by length.
//!
//! # Layout
//!
//! | Offset | Size        | Field                                  |
//! |--------|-------------|----------------------------------------|
//! | 0      | 16          | GUID                                   |
//! | 16     | 4           | count (signed)                         |
//! | 20     | count * 4   | type record numbers (32-bit)           |
//! | ...    | rest        | OEM-defined data                       |

use std::fmt;

use crate::{
    file::parser::Parser,
    types::record_number::{RecordCategory, RecordNumber, RECORD_NUMBER_BITS},
    Error, Result,
};

/// A decoded `LF_OEM2` record.
///
/// Instances are only produced by [`OemDefinableString2::read`] and are immutable
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OemDefinableString2 {
    guid: uguid::Guid,
    record_numbers: Vec<RecordNumber>,
    remaining_bytes: Vec<u8>,
}

impl OemDefinableString2 {
    /// Leaf tag of this record kind.
    pub const PDB_ID: u16 = 0x1011;

    /// Decode the record from a parser bounded to its payload.
    ///
    /// Fields are read strictly in layout order. The parser is left exhausted on success.
    ///
    /// # Errors
    /// - [`crate::Error::InsufficientData`] if the GUID, the count, or any of the counted
    ///   record numbers is truncated
    /// - [`crate::Error::InvalidCount`] if the count is negative
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pdbscope::{OemDefinableString2, Parser};
    ///
    /// let mut payload = vec![0u8; 16];
    /// payload.extend_from_slice(&[0x01, 0x00, 0x00, 0x00]); // count
    /// payload.extend_from_slice(&[0x00, 0x10, 0x00, 0x00]); // record number
    /// payload.extend_from_slice(&[0xDE, 0xAD]);             // OEM data
    ///
    /// let record = OemDefinableString2::read(&mut Parser::new(&payload))?;
    /// assert_eq!(record.record_numbers().len(), 1);
    /// assert_eq!(record.remaining_bytes(), &[0xDE, 0xAD]);
    /// # Ok::<(), pdbscope::Error>(())
    /// ```
    pub fn read(parser: &mut Parser) -> Result<Self> {
        let guid = parser.read_guid()?;

        let count = parser.read_le::<i32>()?;
        let Ok(count) = usize::try_from(count) else {
            return Err(Error::InvalidCount(count));
        };

        let entry_size = RecordNumber::wire_size(RECORD_NUMBER_BITS)?;
        let mut record_numbers = Vec::with_capacity(count.min(parser.remaining() / entry_size));
        for _ in 0..count {
            record_numbers.push(RecordNumber::read(
                parser,
                RecordCategory::Type,
                RECORD_NUMBER_BITS,
            )?);
        }

        let remaining_bytes = parser.read_remaining().to_vec();

        log::trace!(
            "LF_OEM2 {}: {} record numbers, {} bytes of OEM data",
            guid,
            record_numbers.len(),
            remaining_bytes.len()
        );

        Ok(OemDefinableString2 {
            guid,
            record_numbers,
            remaining_bytes,
        })
    }

    /// The GUID identifying the OEM's format.
    #[must_use]
    pub fn guid(&self) -> &uguid::Guid {
        &self.guid
    }

    /// The referenced type records, in stream order.
    #[must_use]
    pub fn record_numbers(&self) -> &[RecordNumber] {
        &self.record_numbers
    }

    /// The uninterpreted OEM-defined tail of the record.
    #[must_use]
    pub fn remaining_bytes(&self) -> &[u8] {
        &self.remaining_bytes
    }

    /// Render the record as a multi-line text report.
    ///
    /// Every line, including the last, is terminated with `\n`.
    ///
    /// ```text
    /// OEM Definable String 2
    ///   GUID: 00000000-0000-0000-0000-000000000000
    ///   count: 1
    ///     recordNumber[0]: 0x00001000
    ///   additional data length: 0
    /// ```
    #[must_use]
    pub fn emit(&self) -> String {
        let mut lines = Vec::with_capacity(self.record_numbers.len() + 4);
        lines.push("OEM Definable String 2".to_string());
        lines.push(format!("  GUID: {}", self.guid));
        lines.push(format!("  count: {}", self.record_numbers.len()));
        for (index, record_number) in self.record_numbers.iter().enumerate() {
            lines.push(format!("    recordNumber[{}]: {}", index, record_number));
        }
        lines.push(format!(
            "  additional data length: {}",
            self.remaining_bytes.len()
        ));

        let mut text = lines.join("\n");
        text.push('\n');
        text
    }
}

impl fmt::Display for OemDefinableString2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.emit())
    }
}
