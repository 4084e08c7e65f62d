//! Random-access typed reads and writes on the header resource
//!
//! All multi-byte values are big-endian; only the big-endian `SDPX`
//! flavour of the format is handled.

use std::io::{Read, Seek, SeekFrom, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::error::{DpxError, Result};

/// Fixed-width typed access to a random-access binary resource.
///
/// A blanket implementation covers every `Read + Write + Seek` stream,
/// so sessions work on `std::fs::File` and on in-memory
/// `Cursor<Vec<u8>>` images alike.
pub trait HeaderAccessor {
    fn read_int8(&mut self, offset: u64) -> Result<i8>;
    fn read_int16(&mut self, offset: u64) -> Result<i16>;
    fn read_int32(&mut self, offset: u64) -> Result<i32>;
    fn read_float(&mut self, offset: u64) -> Result<f32>;

    /// Read `len` bytes and strip every embedded NUL byte
    fn read_text(&mut self, offset: u64, len: usize) -> Result<String>;

    fn write_int8(&mut self, offset: u64, value: i8) -> Result<()>;
    fn write_int16(&mut self, offset: u64, value: i16) -> Result<()>;
    fn write_int32(&mut self, offset: u64, value: i32) -> Result<()>;
    fn write_float(&mut self, offset: u64, value: f32) -> Result<()>;

    /// Write `value` right-padded with NUL bytes to exactly `len` bytes.
    ///
    /// Fails closed with [`DpxError::LengthExceeded`] when the value is
    /// longer than the field; nothing is written in that case.
    fn write_text(&mut self, offset: u64, len: usize, value: &str) -> Result<()>;

    /// Flush pending writes to the resource
    fn flush(&mut self) -> Result<()>;
}

impl<S: Read + Write + Seek> HeaderAccessor for S {
    fn read_int8(&mut self, offset: u64) -> Result<i8> {
        self.seek(SeekFrom::Start(offset))?;
        Ok(ReadBytesExt::read_i8(self)?)
    }

    fn read_int16(&mut self, offset: u64) -> Result<i16> {
        self.seek(SeekFrom::Start(offset))?;
        Ok(ReadBytesExt::read_i16::<BigEndian>(self)?)
    }

    fn read_int32(&mut self, offset: u64) -> Result<i32> {
        self.seek(SeekFrom::Start(offset))?;
        Ok(ReadBytesExt::read_i32::<BigEndian>(self)?)
    }

    fn read_float(&mut self, offset: u64) -> Result<f32> {
        self.seek(SeekFrom::Start(offset))?;
        Ok(ReadBytesExt::read_f32::<BigEndian>(self)?)
    }

    fn read_text(&mut self, offset: u64, len: usize) -> Result<String> {
        self.seek(SeekFrom::Start(offset))?;
        let mut buffer = vec![0u8; len];
        self.read_exact(&mut buffer)?;
        let stripped: Vec<u8> = buffer.into_iter().filter(|&b| b != 0).collect();
        Ok(String::from_utf8_lossy(&stripped).into_owned())
    }

    fn write_int8(&mut self, offset: u64, value: i8) -> Result<()> {
        self.seek(SeekFrom::Start(offset))?;
        Ok(WriteBytesExt::write_i8(self, value)?)
    }

    fn write_int16(&mut self, offset: u64, value: i16) -> Result<()> {
        self.seek(SeekFrom::Start(offset))?;
        Ok(WriteBytesExt::write_i16::<BigEndian>(self, value)?)
    }

    fn write_int32(&mut self, offset: u64, value: i32) -> Result<()> {
        self.seek(SeekFrom::Start(offset))?;
        Ok(WriteBytesExt::write_i32::<BigEndian>(self, value)?)
    }

    fn write_float(&mut self, offset: u64, value: f32) -> Result<()> {
        self.seek(SeekFrom::Start(offset))?;
        Ok(WriteBytesExt::write_f32::<BigEndian>(self, value)?)
    }

    fn write_text(&mut self, offset: u64, len: usize, value: &str) -> Result<()> {
        let bytes = value.as_bytes();
        if bytes.len() > len {
            return Err(DpxError::LengthExceeded {
                len: bytes.len(),
                max: len,
            });
        }

        let mut buffer = vec![0u8; len];
        buffer[..bytes.len()].copy_from_slice(bytes);
        self.seek(SeekFrom::Start(offset))?;
        self.write_all(&buffer)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(Write::flush(self)?)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_typed_round_trips() {
        let mut cursor = Cursor::new(vec![0u8; 64]);
        cursor.write_int16(10, -2).unwrap();
        cursor.write_int32(20, 0x01020304).unwrap();
        cursor.write_float(30, 23.976).unwrap();

        assert_eq!(cursor.read_int16(10).unwrap(), -2);
        assert_eq!(cursor.read_int32(20).unwrap(), 0x01020304);
        assert_eq!(cursor.read_float(30).unwrap(), 23.976);
        // big-endian on disk
        assert_eq!(&cursor.get_ref()[20..24], &[0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn test_text_strips_every_nul() {
        let mut cursor = Cursor::new(vec![0u8; 16]);
        cursor.get_mut()[..8].copy_from_slice(b"a\0b\0cd\0\0");
        assert_eq!(cursor.read_text(0, 8).unwrap(), "abcd");
    }

    #[test]
    fn test_text_write_pads() {
        let mut cursor = Cursor::new(vec![0xFFu8; 8]);
        cursor.write_text(0, 8, "dpx").unwrap();
        assert_eq!(cursor.get_ref().as_slice(), b"dpx\0\0\0\0\0");
    }

    #[test]
    fn test_text_overflow_fails_closed() {
        let mut cursor = Cursor::new(vec![0u8; 8]);
        let err = cursor.write_text(0, 4, "too long").unwrap_err();
        assert!(matches!(
            err,
            DpxError::LengthExceeded { len: 8, max: 4 }
        ));
        assert_eq!(cursor.get_ref().as_slice(), &[0u8; 8]);
    }
}
