//! Record numbers: references from one CodeView record to another.
//!
//! A record number is the index of a record inside either the TPI (type) or IPI (item)
//! stream. It is stored as a plain little-endian integer whose width depends on the
//! record kind: 16 bits for the legacy record layouts, 32 bits for everything else.
//! This module only decodes the raw value; resolving it to the referenced record is the
//! job of the stream-level reader.

use std::fmt;

use strum::Display;

use crate::{file::parser::Parser, Error, Result};

/// Width of the record numbers used by the 32-bit record layouts.
pub const RECORD_NUMBER_BITS: u32 = 32;

/// Record numbers below this value refer to built-in primitive types.
pub const FIRST_NON_PRIMITIVE: u32 = 0x1000;

/// The stream a [`RecordNumber`] points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum RecordCategory {
    /// A record in the TPI stream
    #[strum(serialize = "type")]
    Type,
    /// A record in the IPI stream
    #[strum(serialize = "item")]
    Item,
}

/// A raw reference to another record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordNumber {
    category: RecordCategory,
    number: u32,
}

impl RecordNumber {
    /// Create a record number from its parts.
    #[must_use]
    pub fn new(category: RecordCategory, number: u32) -> Self {
        RecordNumber { category, number }
    }

    /// Reads a record number of the given width from `parser`.
    ///
    /// # Arguments
    /// * `parser` - The cursor to read from
    /// * `category` - Which stream the reference points into
    /// * `bits` - On-wire width; 16 or 32
    ///
    /// # Errors
    /// - [`crate::Error::MalformedReference`] if `bits` is neither 16 nor 32. Nothing is
    ///   consumed in this case.
    /// - [`crate::Error::InsufficientData`] if the payload is too short for the value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pdbscope::{Parser, RecordCategory, RecordNumber};
    ///
    /// let data = [0x05, 0x10, 0x00, 0x00];
    /// let mut parser = Parser::new(&data);
    ///
    /// let number = RecordNumber::read(&mut parser, RecordCategory::Type, 32)?;
    /// assert_eq!(number.number(), 0x1005);
    /// assert_eq!(number.to_string(), "0x00001005");
    /// # Ok::<(), pdbscope::Error>(())
    /// ```
    pub fn read(parser: &mut Parser, category: RecordCategory, bits: u32) -> Result<Self> {
        let number = match bits {
            16 => u32::from(parser.read_le::<u16>()?),
            32 => parser.read_le::<u32>()?,
            _ => return Err(Error::MalformedReference { bits }),
        };

        Ok(RecordNumber { category, number })
    }

    /// Returns the size in bytes a record number of `bits` width occupies on the wire.
    ///
    /// # Errors
    /// Returns [`crate::Error::MalformedReference`] for unsupported widths.
    pub fn wire_size(bits: u32) -> Result<usize> {
        match bits {
            16 => Ok(2),
            32 => Ok(4),
            _ => Err(Error::MalformedReference { bits }),
        }
    }

    /// The raw encoded value.
    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    /// The stream this reference points into.
    #[must_use]
    pub fn category(&self) -> RecordCategory {
        self.category
    }

    /// Returns `true` if this references a built-in primitive type rather than a record.
    ///
    /// Only type references have primitives; item references never do.
    #[must_use]
    pub fn is_primitive(&self) -> bool {
        self.category == RecordCategory::Type && self.number < FIRST_NON_PRIMITIVE
    }
}

impl fmt::Display for RecordNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.number)
    }
}
