//! Byte buffer helpers
//!
//! Reversal, bounds-checked slicing and the `#END` sentinel convention.
//! Every function returns a fresh buffer and leaves its input alone.

pub mod reverse;
pub mod sentinel;
pub mod slice;

pub use reverse::reverse;
pub use sentinel::{add_end, has_end, trim_buf, END_MARKER};
pub use slice::sub_buf;
