//! Bounded byte cursor over a single type record payload.
//!
//! The [`crate::file::parser::Parser`] is handed a slice covering exactly one record's
//! payload (the stream-level reader has already consumed the length and leaf framing).
//! Record decoders pull their fields from it in order; every read is bounds-checked and a
//! failed read leaves the cursor where it was.
//!
//! # Usage Examples
//!
//! ```rust
//! use pdbscope::Parser;
//!
//! let data = [0x02, 0x00, 0x00, 0x00, 0xAA, 0xBB];
//! let mut parser = Parser::new(&data);
//!
//! let count = parser.read_le::<i32>()?;
//! assert_eq!(count, 2);
//!
//! let rest = parser.read_remaining();
//! assert_eq!(rest, &[0xAA, 0xBB]);
//! assert!(!parser.has_more_data());
//! # Ok::<(), pdbscope::Error>(())
//! ```

use crate::{
    file::io::{read_le_at, PdbIO},
    Result,
};

/// Size of a GUID on the wire.
pub const GUID_SIZE: usize = 16;

/// A sequential, bounds-checked reader over a record payload.
///
/// The parser never reads outside the slice it was constructed with, which makes it
/// safe to decode sibling records from disjoint slices concurrently.
pub struct Parser<'a> {
    /// The payload being decoded
    data: &'a [u8],
    /// Current position within the payload
    position: usize,
}

impl<'a> Parser<'a> {
    /// Create a new [`crate::file::parser::Parser`] from a byte slice.
    ///
    /// # Arguments
    /// * `data` - The record payload to read from
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Parser { data, position: 0 }
    }

    /// Returns the length of the underlying payload.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the payload is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `true` if there is more data available to parse.
    #[must_use]
    pub fn has_more_data(&self) -> bool {
        self.position < self.data.len()
    }

    /// Get the current position of the parser within the payload.
    #[must_use]
    pub fn pos(&self) -> usize {
        self.position
    }

    /// Returns the number of bytes left between the current position and the end.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pdbscope::Parser;
    /// let data = [0x01, 0x02, 0x03, 0x04, 0x05];
    /// let mut parser = Parser::new(&data);
    ///
    /// assert_eq!(parser.remaining(), 5);
    /// parser.read_bytes(2)?;
    /// assert_eq!(parser.remaining(), 3);
    /// # Ok::<(), pdbscope::Error>(())
    /// ```
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Ensures that at least `needed` bytes are available from the current position.
    ///
    /// # Errors
    /// Returns [`crate::Error::InsufficientData`] if fewer than `needed` bytes remain.
    pub fn ensure_remaining(&self, needed: usize) -> Result<()> {
        let remaining = self.remaining();
        if remaining < needed {
            return Err(insufficient_data_error!(needed, remaining));
        }
        Ok(())
    }

    /// Read a value of type `T` in little-endian format and advance past it.
    ///
    /// # Errors
    /// Returns [`crate::Error::InsufficientData`] if reading `T` would exceed the payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pdbscope::Parser;
    /// let data = [0x01, 0x10, 0x00, 0x00];
    /// let mut parser = Parser::new(&data);
    ///
    /// assert_eq!(parser.read_le::<u32>()?, 0x1001);
    /// assert_eq!(parser.pos(), 4);
    /// # Ok::<(), pdbscope::Error>(())
    /// ```
    pub fn read_le<T: PdbIO>(&mut self) -> Result<T> {
        read_le_at::<T>(self.data, &mut self.position)
    }

    /// Reads a slice of bytes of the specified length from the current position.
    ///
    /// # Errors
    /// Returns [`crate::Error::InsufficientData`] if reading `length` bytes would exceed
    /// the payload.
    pub fn read_bytes(&mut self, length: usize) -> Result<&'a [u8]> {
        self.ensure_remaining(length)?;

        let end = self.position + length;
        let bytes = &self.data[self.position..end];
        self.position = end;
        Ok(bytes)
    }

    /// Read a 16-byte GUID.
    ///
    /// The bytes are taken in Windows memory order, i.e. the first three groups are
    /// little-endian. No validation of version or variant bits is performed.
    ///
    /// # Errors
    /// Returns [`crate::Error::InsufficientData`] if fewer than 16 bytes remain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pdbscope::Parser;
    /// let data = [
    ///     0x8e, 0x90, 0x37, 0xd4, 0xe6, 0x65, 0x7c, 0x48,
    ///     0x97, 0x35, 0x7b, 0xdf, 0xf6, 0x99, 0xbe, 0xa5,
    /// ];
    /// let mut parser = Parser::new(&data);
    ///
    /// let guid = parser.read_guid()?;
    /// assert_eq!(guid.to_string(), "d437908e-65e6-487c-9735-7bdff699bea5");
    /// # Ok::<(), pdbscope::Error>(())
    /// ```
    pub fn read_guid(&mut self) -> Result<uguid::Guid> {
        let bytes = self.read_bytes(GUID_SIZE)?;

        let mut buffer = [0u8; GUID_SIZE];
        buffer.copy_from_slice(bytes);

        Ok(uguid::Guid::from_bytes(buffer))
    }

    /// Consume everything that is left in the payload.
    ///
    /// Never fails; returns an empty slice when the parser is already exhausted.
    pub fn read_remaining(&mut self) -> &'a [u8] {
        let start = self.position.min(self.data.len());
        self.position = self.data.len();
        &self.data[start..]
    }
}
