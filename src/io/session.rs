//! DPX header session
//!
//! A [`DpxFile`] owns one open resource exclusively for its lifetime.
//! Every operation is strictly sequential; batches run their requests in
//! input order and abort on the first failure, so a failed lookup can
//! never stall the batch or leak a partial result.

use std::fs::OpenOptions;
use std::path::Path;

use indexmap::IndexMap;

use crate::error::{DpxError, Result};
use crate::io::accessor::HeaderAccessor;
use crate::io::codec;
use crate::layout;
use crate::transcode;
use crate::types::{FieldValue, SectionId};

/// Expected file signature, compared case-insensitively
pub const MAGIC: &[u8; 4] = b"SDPX";

/// Batch read result: section → field name → value, both levels in
/// request (or registry) order.
pub type HeaderDump = IndexMap<SectionId, IndexMap<String, FieldValue>>;

/// An open DPX file, exposing typed access to its header fields.
///
/// Created only after the signature check passes. `close()` releases
/// the resource; any later operation fails with
/// [`DpxError::SessionClosed`].
#[derive(Debug)]
pub struct DpxFile<A: HeaderAccessor> {
    accessor: Option<A>,
    default_parse: bool,
}

impl DpxFile<std::fs::File> {
    /// Open a DPX file on disk in read-write mode
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = OpenOptions::new().read(true).write(true).open(path)?;
        Self::from_accessor(file)
    }
}

impl<A: HeaderAccessor> DpxFile<A> {
    /// Build a session over any accessor (e.g. an in-memory image).
    ///
    /// Validates the 4-byte signature first; a mismatch yields
    /// [`DpxError::InvalidMagic`] and no session.
    pub fn from_accessor(mut accessor: A) -> Result<Self> {
        let magic = accessor.read_text(0, MAGIC.len())?;
        if !magic.eq_ignore_ascii_case("SDPX") {
            return Err(DpxError::InvalidMagic(magic));
        }
        Ok(Self {
            accessor: Some(accessor),
            default_parse: true,
        })
    }

    /// Toggle symbolic transcoding of `transfer`, `colorimetric` and
    /// `time_code` for the rest of the session (on by default)
    pub fn set_default_parse(&mut self, parse: bool) {
        self.default_parse = parse;
    }

    /// Read one header field
    pub fn read(&mut self, section: SectionId, name: &str) -> Result<FieldValue> {
        let parse = self.default_parse;
        let desc = lookup(section, name)?;
        let accessor = self.accessor_mut()?;
        let value = codec::read_field(accessor, desc)?;
        if parse {
            transcode::apply_read(desc.name, value)
        } else {
            Ok(value)
        }
    }

    /// Write one header field
    pub fn write(&mut self, section: SectionId, name: &str, value: FieldValue) -> Result<()> {
        let parse = self.default_parse;
        let desc = lookup(section, name)?;
        let value = if parse {
            transcode::apply_write(desc.name, value)?
        } else {
            value
        };
        let accessor = self.accessor_mut()?;
        codec::write_field(accessor, desc, &value)
    }

    /// Read several fields as one logical operation.
    ///
    /// Requests run strictly in list order; the first failure aborts the
    /// remaining requests and nothing is returned for the ones already
    /// read.
    pub fn read_multiple(&mut self, requests: &[(SectionId, &str)]) -> Result<HeaderDump> {
        let mut dump = HeaderDump::new();
        for &(section, name) in requests {
            let value = self.read(section, name)?;
            dump.entry(section)
                .or_default()
                .insert(name.to_string(), value);
        }
        Ok(dump)
    }

    /// Read every registered field, section by section in registry order
    pub fn read_all(&mut self) -> Result<HeaderDump> {
        let mut dump = HeaderDump::new();
        for section in layout::sections() {
            let fields = dump.entry(section).or_default();
            for desc in layout::fields(section) {
                let parse = self.default_parse;
                let accessor = self.accessor_mut()?;
                let value = codec::read_field(accessor, desc)?;
                let value = if parse {
                    transcode::apply_read(desc.name, value)?
                } else {
                    value
                };
                fields.insert(desc.name.to_string(), value);
            }
        }
        Ok(dump)
    }

    /// Write several fields as one logical operation.
    ///
    /// Requests run strictly in list order; the first failure aborts the
    /// remaining writes. Writes committed before the failure stay
    /// applied — there is no rollback.
    pub fn write_multiple(&mut self, requests: &[(SectionId, &str, FieldValue)]) -> Result<()> {
        for (section, name, value) in requests {
            self.write(*section, name, value.clone())?;
        }
        Ok(())
    }

    /// Flush and release the underlying resource.
    ///
    /// The session stays around but every subsequent operation,
    /// including a second `close()`, fails with
    /// [`DpxError::SessionClosed`].
    pub fn close(&mut self) -> Result<()> {
        let mut accessor = self.accessor.take().ok_or(DpxError::SessionClosed)?;
        accessor.flush()
    }

    fn accessor_mut(&mut self) -> Result<&mut A> {
        self.accessor.as_mut().ok_or(DpxError::SessionClosed)
    }
}

fn lookup(section: SectionId, name: &str) -> Result<&'static layout::FieldDescriptor> {
    layout::lookup(section, name).ok_or_else(|| DpxError::DescriptorNotFound {
        section,
        field: name.to_string(),
    })
}
