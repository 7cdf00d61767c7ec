use thiserror::Error;

macro_rules! insufficient_data_error {
    ($needed:expr, $remaining:expr) => {
        crate::Error::InsufficientData {
            needed: $needed,
            remaining: $remaining,
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Decoding a type record is all-or-nothing: any of these errors aborts the decode of the
/// record being read and no partially populated record is ever handed back. Whether the
/// surrounding stream read continues with the next record is left to the caller.
///
/// # Examples
///
/// ```rust
/// use pdbscope::{Error, OemDefinableString2, Parser};
///
/// let payload = [0u8; 10];
/// match OemDefinableString2::read(&mut Parser::new(&payload)) {
///     Err(Error::InsufficientData { needed, remaining, .. }) => {
///         assert_eq!(needed, 16);
///         assert_eq!(remaining, 10);
///     }
///     other => panic!("unexpected result: {:?}", other),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The payload ended before a field could be read completely.
    ///
    /// Raised by every fixed-size read of the [`crate::Parser`], as well as by the
    /// record-number reads driven by a record's declared count. The error carries the
    /// source location where the shortfall was detected.
    ///
    /// # Fields
    ///
    /// * `needed` - Number of bytes the read required
    /// * `remaining` - Number of bytes that were still available
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Insufficient data - {file}:{line}: needed {needed} bytes, {remaining} remaining")]
    InsufficientData {
        /// Number of bytes the read required
        needed: usize,
        /// Number of bytes that were still available
        remaining: usize,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// A record number was requested with a width the stream format does not define.
    ///
    /// CodeView record numbers are either 16 or 32 bits wide.
    #[error("Malformed record number - unsupported width of {bits} bits")]
    MalformedReference {
        /// The requested width in bits
        bits: u32,
    },

    /// A record declared a negative number of entries.
    #[error("Invalid entry count - {0}")]
    InvalidCount(i32),
}
