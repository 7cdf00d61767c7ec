//! Primitive little-endian decoding for PDB stream data.
//!
//! All multi-byte integers inside a CodeView type stream are stored little-endian. The
//! [`PdbIO`] trait ties each primitive to its byte-array representation so that
//! [`read_le_at`] can decode any of them with a single bounds check.

use crate::Result;

/// Trait for primitive types that can be decoded from little-endian bytes.
///
/// Implemented for the signed and unsigned integer types from 8 to 64 bits.
pub trait PdbIO: Sized {
    /// Associated type representing the byte array type for this numeric type.
    type Bytes: Sized + for<'a> TryFrom<&'a [u8]>;

    /// Read T from a byte buffer in little-endian
    fn from_le_bytes(bytes: Self::Bytes) -> Self;
}

macro_rules! impl_pdb_io {
    ($($ty:ty => $len:literal),* $(,)?) => {
        $(
            impl PdbIO for $ty {
                type Bytes = [u8; $len];

                fn from_le_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_le_bytes(bytes)
                }
            }
        )*
    };
}

impl_pdb_io! {
    u8 => 1,
    i8 => 1,
    u16 => 2,
    i16 => 2,
    u32 => 4,
    i32 => 4,
    u64 => 8,
    i64 => 8,
}

/// Reads a value of type `T` in little-endian byte order from `data` at `offset`.
///
/// On success the offset is advanced past the value. On failure the offset is left
/// untouched.
///
/// # Errors
///
/// Returns [`crate::Error::InsufficientData`] if fewer than `size_of::<T>()` bytes
/// remain after `offset`.
///
/// # Examples
///
/// ```rust
/// use pdbscope::file::io::read_le_at;
///
/// let data = [0x01, 0x00, 0x02, 0x00];
/// let mut offset = 0;
///
/// let first: u16 = read_le_at(&data, &mut offset)?;
/// assert_eq!(first, 1);
/// assert_eq!(offset, 2);
/// # Ok::<(), pdbscope::Error>(())
/// ```
pub fn read_le_at<T: PdbIO>(data: &[u8], offset: &mut usize) -> Result<T> {
    let type_len = std::mem::size_of::<T>();
    let remaining = data.len().saturating_sub(*offset);
    if type_len > remaining {
        return Err(insufficient_data_error!(type_len, remaining));
    }

    let Ok(read) = data[*offset..*offset + type_len].try_into() else {
        return Err(insufficient_data_error!(type_len, remaining));
    };

    *offset += type_len;

    Ok(T::from_le_bytes(read))
}
