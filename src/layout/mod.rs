//! Static descriptor registry for the SMPTE DPX v2.0 header
//!
//! Every named header field is pinned to an absolute byte offset and an
//! on-disk type. The registry is built once, never mutated, and its
//! iteration order is the canonical header order.

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::types::{FieldKind, SectionId};

/// Offset/type metadata for one named header field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDescriptor {
    pub section: SectionId,
    pub name: &'static str,
    /// Absolute byte offset from the start of the file
    pub offset: u64,
    pub kind: FieldKind,
}

use FieldKind::{Float, Int16, Int32, Int8, Text};

/// `(name, offset, kind)` rows per section, in header order.
///
/// Byte values follow the SMPTE 268M-2003 (DPX v2.0) layout. The
/// `image_element` rows describe the first of the format's eight image
/// elements and deliberately sit inside the 768–1407 image information
/// area.
const SECTIONS: [(SectionId, &[(&str, u64, FieldKind)]); 7] = [
    (
        SectionId::FileInfo,
        &[
            ("magic", 0, Text(4)),
            ("offset", 4, Int32),
            ("version", 8, Text(8)),
            ("filesize", 16, Int32),
            ("filename", 36, Text(100)),
            ("timestamp", 136, Text(24)),
            ("creator", 160, Text(100)),
            ("project", 260, Text(200)),
            ("copyright", 460, Text(200)),
            ("encrypt_key", 660, Int32),
            ("reserved", 664, Text(104)),
        ],
    ),
    (
        SectionId::ImageInfo,
        &[
            ("orientation", 768, Int16),
            ("number_of_elements", 770, Int16),
            ("width", 772, Int32),
            ("height", 776, Int32),
            ("reserved", 1356, Text(52)),
        ],
    ),
    (
        SectionId::OrientInfo,
        &[
            ("x_offset", 1408, Int32),
            ("y_offset", 1412, Int32),
            ("x_center", 1416, Float),
            ("y_center", 1420, Float),
            ("x_size", 1424, Int32),
            ("y_size", 1428, Int32),
            ("source_name", 1432, Text(100)),
            ("source_time", 1532, Text(24)),
            ("input_device", 1556, Text(32)),
            ("input_serial", 1588, Text(32)),
            ("border_x_left", 1620, Int16),
            ("border_x_right", 1622, Int16),
            ("border_y_left", 1624, Int16),
            ("border_y_right", 1626, Int16),
            ("aspect_ratio_x", 1628, Int32),
            ("aspect_ratio_y", 1632, Int32),
            ("reserved", 1636, Text(28)),
        ],
    ),
    (
        SectionId::FilmInfo,
        &[
            ("manufacturer_id", 1664, Text(2)),
            ("film_type", 1666, Text(2)),
            ("perf_offset", 1668, Text(2)),
            ("prefix", 1670, Text(6)),
            ("count", 1676, Text(4)),
            ("format", 1680, Text(32)),
            ("frame_position", 1712, Int32),
            ("frame_sequence", 1716, Int32),
            ("held_count", 1720, Int32),
            ("frame_rate", 1724, Float),
            ("shutter_angle", 1728, Float),
            ("frame_id", 1732, Text(32)),
            ("slate", 1764, Text(100)),
            ("reserved", 1864, Text(56)),
        ],
    ),
    (
        SectionId::TvInfo,
        &[
            ("time_code", 1920, Int32),
            ("user_bits", 1924, Int32),
            ("interlace", 1928, Int8),
            ("field_number", 1929, Int8),
            ("video_signal", 1930, Int8),
            ("padding", 1931, Int8),
            ("horizontal_sample_rate", 1932, Int8),
            ("vertical_sample_rate", 1936, Float),
            ("frame_rate", 1940, Float),
            ("time_offset", 1944, Float),
            ("gamma", 1948, Float),
            ("black_level", 1952, Float),
            ("black_gain", 1956, Float),
            ("break_point", 1960, Float),
            ("white_level", 1964, Float),
            ("integration_times", 1968, Float),
            ("reserved", 1972, Text(76)),
        ],
    ),
    (SectionId::UserInfo, &[("id", 2048, Text(32))]),
    (
        SectionId::ImageElement,
        &[
            ("data_sign", 780, Int32),
            ("low_data", 784, Int32),
            ("low_quantity", 788, Float),
            ("high_data", 792, Int32),
            ("high_quantity", 796, Float),
            ("descriptor", 800, Int8),
            ("transfer", 801, Int8),
            ("colorimetric", 802, Int8),
            ("bit_size", 803, Int8),
            ("packing", 804, Int16),
            ("encoding", 806, Int16),
            ("data_offset", 808, Int32),
            ("eol_padding", 812, Int32),
            ("eoi_padding", 816, Int32),
            ("description", 820, Text(32)),
        ],
    ),
];

type Registry = IndexMap<SectionId, IndexMap<&'static str, FieldDescriptor>>;

static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let mut registry = Registry::new();
    for (section, rows) in SECTIONS {
        let fields = rows
            .iter()
            .map(|&(name, offset, kind)| {
                (
                    name,
                    FieldDescriptor {
                        section,
                        name,
                        offset,
                        kind,
                    },
                )
            })
            .collect();
        registry.insert(section, fields);
    }
    registry
});

/// Look up the descriptor for a `(section, name)` pair.
///
/// Total over unknown input: an unregistered pair yields `None`.
pub fn lookup(section: SectionId, name: &str) -> Option<&'static FieldDescriptor> {
    REGISTRY.get(&section)?.get(name)
}

/// Sections in canonical header order
pub fn sections() -> impl Iterator<Item = SectionId> {
    REGISTRY.keys().copied()
}

/// Descriptors of one section in header order
pub fn fields(section: SectionId) -> impl Iterator<Item = &'static FieldDescriptor> {
    REGISTRY.get(&section).into_iter().flat_map(|m| m.values())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known() {
        let desc = lookup(SectionId::TvInfo, "time_code").unwrap();
        assert_eq!(desc.offset, 1920);
        assert_eq!(desc.kind, FieldKind::Int32);

        let desc = lookup(SectionId::FileInfo, "copyright").unwrap();
        assert_eq!(desc.offset, 460);
        assert_eq!(desc.kind, FieldKind::Text(200));
    }

    #[test]
    fn test_lookup_unknown() {
        assert!(lookup(SectionId::FileInfo, "no_such_field").is_none());
        assert!(lookup(SectionId::UserInfo, "magic").is_none());
    }

    #[test]
    fn test_section_order() {
        let order: Vec<SectionId> = sections().collect();
        assert_eq!(order, SectionId::ALL);
    }

    #[test]
    fn test_field_order() {
        let names: Vec<&str> = fields(SectionId::ImageInfo).map(|d| d.name).collect();
        assert_eq!(
            names,
            ["orientation", "number_of_elements", "width", "height", "reserved"]
        );
    }

    #[test]
    fn test_no_overlap_within_section() {
        for section in sections() {
            let descs: Vec<_> = fields(section).collect();
            for (i, a) in descs.iter().enumerate() {
                let a_end = a.offset + a.kind.width() as u64;
                for b in &descs[i + 1..] {
                    assert!(
                        a_end <= b.offset || b.offset + b.kind.width() as u64 <= a.offset,
                        "{section}: {} overlaps {}",
                        a.name,
                        b.name
                    );
                }
            }
        }
    }
}
