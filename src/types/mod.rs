//! CodeView type records.
//!
//! A type-information stream is a sequence of records, each framed by a 16-bit length and
//! a 16-bit leaf tag. The stream reader slices out a record's payload and hands it to
//! [`TypeRecord::parse`], which routes it to the decoder for its leaf.
//!
//! # Key Components
//!
//! - [`crate::types::TypeLeaf`] - known leaf tags
//! - [`crate::types::TypeRecord`] - a decoded record of any supported kind
//! - [`crate::types::record_number`] - references between records
//! - [`crate::types::oem_definable_string`] - the `LF_OEM2` record

pub mod oem_definable_string;
pub mod record_number;

use strum::{Display, EnumIter, FromRepr};

use crate::{file::parser::Parser, Result};

pub use oem_definable_string::OemDefinableString2;
pub use record_number::{RecordCategory, RecordNumber, RECORD_NUMBER_BITS};

/// Leaf tags of the type records this crate decodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, FromRepr)]
#[repr(u16)]
pub enum TypeLeaf {
    /// `LF_OEM2`
    OemDefinableString2 = 0x1011,
}

/// A single decoded type record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRecord {
    /// `LF_OEM2`
    OemDefinableString2(OemDefinableString2),
    /// A record whose leaf has no decoder; the payload is kept verbatim.
    Unknown {
        /// The record's leaf tag
        leaf: u16,
        /// The record's payload
        data: Vec<u8>,
    },
}

impl TypeRecord {
    /// Decode the payload of a record with the given leaf tag.
    ///
    /// # Arguments
    /// * `leaf` - The record's leaf tag, as read from the stream framing
    /// * `payload` - The bytes following the leaf tag, up to the end of the record
    ///
    /// # Errors
    /// Propagates the error of the leaf-specific decoder. Unknown leaves never fail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pdbscope::TypeRecord;
    ///
    /// let record = TypeRecord::parse(0x9999, &[0x01, 0x02])?;
    /// assert_eq!(record.leaf(), 0x9999);
    /// assert!(record.emit().contains("data length: 2"));
    /// # Ok::<(), pdbscope::Error>(())
    /// ```
    pub fn parse(leaf: u16, payload: &[u8]) -> Result<Self> {
        let mut parser = Parser::new(payload);

        match TypeLeaf::from_repr(leaf) {
            Some(TypeLeaf::OemDefinableString2) => Ok(TypeRecord::OemDefinableString2(
                OemDefinableString2::read(&mut parser)?,
            )),
            None => {
                log::debug!(
                    "No decoder for leaf 0x{:04x}, keeping {} bytes",
                    leaf,
                    payload.len()
                );
                Ok(TypeRecord::Unknown {
                    leaf,
                    data: parser.read_remaining().to_vec(),
                })
            }
        }
    }

    /// The record's leaf tag.
    #[must_use]
    pub fn leaf(&self) -> u16 {
        match self {
            TypeRecord::OemDefinableString2(_) => OemDefinableString2::PDB_ID,
            TypeRecord::Unknown { leaf, .. } => *leaf,
        }
    }

    /// Render the record as a text report.
    #[must_use]
    pub fn emit(&self) -> String {
        match self {
            TypeRecord::OemDefinableString2(record) => record.emit(),
            TypeRecord::Unknown { leaf, data } => {
                format!("Unknown leaf 0x{:04x}\n  data length: {}\n", leaf, data.len())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::Error;

    #[test]
    fn leaf_values() {
        assert_eq!(TypeLeaf::OemDefinableString2 as u16, 0x1011);
        assert_eq!(
            TypeLeaf::from_repr(0x1011),
            Some(TypeLeaf::OemDefinableString2)
        );
        assert_eq!(TypeLeaf::from_repr(0x1012), None);

        for leaf in TypeLeaf::iter() {
            assert_eq!(TypeLeaf::from_repr(leaf as u16), Some(leaf));
        }
    }

    #[test]
    fn dispatch_oem2() {
        let mut payload = vec![0u8; 16];
        payload.extend_from_slice(&[0x01, 0x00, 0x00, 0x00, 0x03, 0x10, 0x00, 0x00]);

        let record = TypeRecord::parse(0x1011, &payload).unwrap();
        assert_eq!(record.leaf(), OemDefinableString2::PDB_ID);

        let TypeRecord::OemDefinableString2(oem) = &record else {
            panic!("expected LF_OEM2, got {:?}", record);
        };
        assert_eq!(oem.record_numbers()[0].number(), 0x1003);
        assert_eq!(record.emit(), oem.emit());
    }

    #[test]
    fn dispatch_oem2_error() {
        let result = TypeRecord::parse(0x1011, &[0x00; 4]);
        assert!(matches!(result, Err(Error::InsufficientData { .. })));
    }

    #[test]
    fn dispatch_unknown() {
        let record = TypeRecord::parse(0x1504, &[0xAA, 0xBB, 0xCC]).unwrap();
        assert_eq!(
            record,
            TypeRecord::Unknown {
                leaf: 0x1504,
                data: vec![0xAA, 0xBB, 0xCC],
            }
        );
        assert_eq!(record.emit(), "Unknown leaf 0x1504\n  data length: 3\n");
    }
}
