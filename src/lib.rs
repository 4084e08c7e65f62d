//! Structured read/write access to SMPTE DPX header metadata
//!
//! A DPX file carries a fixed-layout binary header ahead of the pixel
//! data. This crate models that header as named fields grouped into
//! sections, each pinned to an exact byte offset and width, and gives
//! typed read/write access to them: raw integers, floats and
//! NUL-padded strings, plus symbolic transcoding for the `transfer`
//! and `colorimetric` enums and the packed-BCD `time_code`.
//!
//! Pixel data is untouched; only the big-endian (`SDPX`) flavour of the
//! format is recognized.
//!
//! # Examples
//! ```no_run
//! use dpxtools::{DpxFile, SectionId};
//!
//! let mut dpx = DpxFile::open("001_0010_001.0001.dpx")?;
//! let transfer = dpx.read(SectionId::ImageElement, "transfer")?;
//! let timecode = dpx.read(SectionId::TvInfo, "time_code")?;
//! println!("{transfer} @ {timecode}");
//! dpx.close()?;
//! # Ok::<(), dpxtools::DpxError>(())
//! ```

pub mod error;
pub mod io;
pub mod layout;
pub mod transcode;
pub mod types;

pub use error::{DpxError, Result};
pub use io::accessor::HeaderAccessor;
pub use io::session::{DpxFile, HeaderDump, MAGIC};
pub use layout::FieldDescriptor;
pub use transcode::{COLORIMETRIC, TRANSFER_TYPES};
pub use types::{FieldKind, FieldValue, SectionId};
