//! # pdbscope Prelude
//!
//! Commonly used types, for glob import:
//!
//! ```rust
//! use pdbscope::prelude::*;
//! ```

/// The main error type for all pdbscope operations
pub use crate::Error;

/// The result type used throughout pdbscope
pub use crate::Result;

/// Payload cursor
pub use crate::Parser;

/// Leaf dispatch
pub use crate::types::{TypeLeaf, TypeRecord};

/// Record references
pub use crate::types::{RecordCategory, RecordNumber};

/// Record decoders
pub use crate::types::OemDefinableString2;
