//! Symbolic transcoding for enumerated fields and the BCD timecode
//!
//! Exactly three field identities are transcoded, regardless of section:
//! `transfer` and `colorimetric` map their 1-byte code to a symbolic
//! name, and `time_code` maps its packed-BCD 32-bit value to the
//! canonical `HH:MM:SS:FF` form.

use crate::error::{DpxError, Result};
use crate::types::FieldValue;

/// Mapping between symbolic names and integer codes.
///
/// Codes are unique per table but not contiguous, so decoding is a
/// partial function. Lookups are case-sensitive in both directions.
#[derive(Debug)]
pub struct EnumTable {
    pub name: &'static str,
    entries: &'static [(&'static str, u8)],
}

impl EnumTable {
    /// Symbolic name for a code, or `None` when the code is a gap
    pub fn decode(&self, code: u8) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|&&(_, c)| c == code)
            .map(|&(name, _)| name)
    }

    /// Code for an exact symbolic name
    pub fn encode(&self, name: &str) -> Option<u8> {
        self.entries
            .iter()
            .find(|&&(n, _)| n == name)
            .map(|&(_, code)| code)
    }
}

/// Transfer characteristics of the image element (code 5 is unassigned)
pub static TRANSFER_TYPES: EnumTable = EnumTable {
    name: "TRANSFER_TYPES",
    entries: &[
        ("UNDEFINED", 0),
        ("RED", 1),
        ("GREEN", 2),
        ("BLUE", 3),
        ("ALPHA", 4),
        ("LUMINANCE", 6),
        ("CHROMA", 7),
        ("DEPTH", 8),
        ("COMPOSITE", 9),
        ("RGB", 50),
        ("RGBA", 51),
        ("ABGR", 52),
        ("BGR", 53),
        ("YUV422", 100),
        ("YUV4224", 101),
        ("YUV444", 102),
        ("YUV4444", 103),
        ("USER", 150),
    ],
};

/// Colorimetric specification of the image element
pub static COLORIMETRIC: EnumTable = EnumTable {
    name: "COLORIMETRIC",
    entries: &[
        ("USER", 0),
        ("PRINT", 1),
        ("LINEAR", 2),
        ("LOG", 3),
        ("UNDEFINED", 4),
        ("SMTPE_274M", 5),
        ("ITU_R709", 6),
        ("ITU_R601_625L", 7),
        ("ITU_R601_525L", 8),
        ("NTSC", 9),
        ("PAL", 10),
        ("ZDEPTH", 11),
        ("DEPTH", 12),
    ],
};

/// Unpack a 32-bit SMPTE timecode into `HH:MM:SS:FF`.
///
/// The value holds 8 BCD digits, 4 bits each, most-significant nibble
/// first: `0x01020304` decodes to `"01:02:03:04"`.
pub fn decode_timecode(raw: u32) -> String {
    let mut out = String::with_capacity(11);
    for i in (0..8).rev() {
        let digit = (raw >> (4 * i)) & 0xF;
        out.push_str(&digit.to_string());
        if i % 2 == 0 && i != 0 {
            out.push(':');
        }
    }
    out
}

/// Pack an `HH:MM:SS:FF` timecode into its 32-bit BCD form.
///
/// Separators are stripped; exactly 8 decimal digits must remain.
pub fn encode_timecode(timecode: &str) -> Result<u32> {
    let digits: Vec<u32> = timecode
        .chars()
        .filter(|&c| c != ':')
        .map(|c| {
            c.to_digit(10)
                .ok_or_else(|| DpxError::Format(format!("invalid timecode {timecode:?}")))
        })
        .collect::<Result<_>>()?;
    if digits.len() != 8 {
        return Err(DpxError::Format(format!(
            "timecode {timecode:?} has {} digits, expected 8",
            digits.len()
        )));
    }

    let mut raw = 0u32;
    for (i, digit) in digits.iter().rev().enumerate() {
        raw |= digit << (4 * i);
    }
    Ok(raw)
}

fn table_for(name: &str) -> Option<&'static EnumTable> {
    match name {
        "transfer" => Some(&TRANSFER_TYPES),
        "colorimetric" => Some(&COLORIMETRIC),
        _ => None,
    }
}

/// Convert a raw value read from disk into its symbolic form.
///
/// Non-transcoded field names pass the value through unchanged.
pub(crate) fn apply_read(name: &str, value: FieldValue) -> Result<FieldValue> {
    if let Some(table) = table_for(name) {
        let code = match value.as_i64() {
            Some(v) => (v & 0xFF) as u8,
            None => return Ok(value),
        };
        let symbol = table.decode(code).ok_or_else(|| {
            DpxError::Format(format!("no {} entry for code {code}", table.name))
        })?;
        return Ok(FieldValue::Text(symbol.to_string()));
    }

    if name == "time_code" {
        if let Some(raw) = value.as_i64() {
            return Ok(FieldValue::Text(decode_timecode(raw as u32)));
        }
    }

    Ok(value)
}

/// Convert a symbolic value into the raw form to write to disk.
///
/// Integer input passes through so callers can always write raw codes;
/// `Text` input must match the table or timecode grammar exactly.
pub(crate) fn apply_write(name: &str, value: FieldValue) -> Result<FieldValue> {
    if let Some(table) = table_for(name) {
        if let FieldValue::Text(symbol) = &value {
            let code = table.encode(symbol).ok_or_else(|| {
                DpxError::Format(format!("no {} entry named {symbol:?}", table.name))
            })?;
            return Ok(FieldValue::Int8(code as i8));
        }
        return Ok(value);
    }

    if name == "time_code" {
        if let FieldValue::Text(timecode) = &value {
            return Ok(FieldValue::Int32(encode_timecode(timecode)? as i32));
        }
    }

    Ok(value)
}
