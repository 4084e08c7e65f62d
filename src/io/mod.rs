//! I/O module for reading and writing DPX header metadata

pub mod accessor;
pub mod codec;
pub mod session;

pub use accessor::HeaderAccessor;
pub use session::{DpxFile, HeaderDump, MAGIC};
