//! Typed codec between field descriptors and header bytes
//!
//! Encoding is width- and signedness-aware: integer values are checked
//! against the declared width instead of being coerced through a float,
//! and mismatched value kinds are rejected.

use crate::error::{DpxError, Result};
use crate::io::accessor::HeaderAccessor;
use crate::layout::FieldDescriptor;
use crate::types::{FieldKind, FieldValue};

/// Read the raw typed value a descriptor points at
pub fn read_field<A>(accessor: &mut A, desc: &FieldDescriptor) -> Result<FieldValue>
where
    A: HeaderAccessor + ?Sized,
{
    match desc.kind {
        FieldKind::Int8 => accessor.read_int8(desc.offset).map(FieldValue::Int8),
        FieldKind::Int16 => accessor.read_int16(desc.offset).map(FieldValue::Int16),
        FieldKind::Int32 => accessor.read_int32(desc.offset).map(FieldValue::Int32),
        FieldKind::Float => accessor.read_float(desc.offset).map(FieldValue::Float),
        FieldKind::Text(len) => accessor.read_text(desc.offset, len).map(FieldValue::Text),
    }
}

/// Write a raw typed value at the descriptor's offset.
///
/// Integer fields accept any integer variant whose value fits the
/// declared width; float fields also accept integers. Out-of-range and
/// kind-mismatched values fail with [`DpxError::Format`], oversized
/// strings with [`DpxError::LengthExceeded`].
pub fn write_field<A>(accessor: &mut A, desc: &FieldDescriptor, value: &FieldValue) -> Result<()>
where
    A: HeaderAccessor + ?Sized,
{
    match desc.kind {
        FieldKind::Int8 => {
            let v = int_in_range(desc, value, i64::from(i8::MIN), i64::from(i8::MAX))?;
            accessor.write_int8(desc.offset, v as i8)
        }
        FieldKind::Int16 => {
            let v = int_in_range(desc, value, i64::from(i16::MIN), i64::from(i16::MAX))?;
            accessor.write_int16(desc.offset, v as i16)
        }
        FieldKind::Int32 => {
            let v = int_in_range(desc, value, i64::from(i32::MIN), i64::from(i32::MAX))?;
            accessor.write_int32(desc.offset, v as i32)
        }
        FieldKind::Float => {
            let v = match value {
                FieldValue::Float(f) => *f,
                other => match other.as_i64() {
                    Some(i) => i as f32,
                    None => return Err(kind_mismatch(desc, value)),
                },
            };
            accessor.write_float(desc.offset, v)
        }
        FieldKind::Text(len) => match value {
            FieldValue::Text(s) => accessor.write_text(desc.offset, len, s),
            other => Err(kind_mismatch(desc, other)),
        },
    }
}

fn int_in_range(desc: &FieldDescriptor, value: &FieldValue, min: i64, max: i64) -> Result<i64> {
    let v = value.as_i64().ok_or_else(|| kind_mismatch(desc, value))?;
    if v < min || v > max {
        return Err(DpxError::Format(format!(
            "value {v} out of range for {:?} field {}/{}",
            desc.kind, desc.section, desc.name
        )));
    }
    Ok(v)
}

fn kind_mismatch(desc: &FieldDescriptor, value: &FieldValue) -> DpxError {
    DpxError::Format(format!(
        "cannot write {value:?} to {:?} field {}/{}",
        desc.kind, desc.section, desc.name
    ))
}
