use std::io::Cursor;

use proptest::prelude::*;

use dpxtools::transcode::{decode_timecode, encode_timecode};
use dpxtools::{DpxFile, FieldValue, SectionId, MAGIC};

fn open_blank() -> DpxFile<Cursor<Vec<u8>>> {
    let mut bytes = vec![0u8; 2080];
    bytes[..4].copy_from_slice(MAGIC);
    DpxFile::from_accessor(Cursor::new(bytes)).unwrap()
}

/// A u32 whose eight nibbles are all valid BCD digits
fn bcd_u32() -> impl Strategy<Value = u32> {
    proptest::collection::vec(0u32..10, 8)
        .prop_map(|digits| digits.iter().fold(0u32, |acc, d| (acc << 4) | d))
}

/// A well-formed HH:MM:SS:FF string (digit-wise, no field-range rules)
fn timecode_string() -> impl Strategy<Value = String> {
    proptest::collection::vec(0u32..10, 8).prop_map(|d| {
        format!(
            "{}{}:{}{}:{}{}:{}{}",
            d[0], d[1], d[2], d[3], d[4], d[5], d[6], d[7]
        )
    })
}

proptest! {
    #[test]
    fn timecode_encode_inverts_decode(raw in bcd_u32()) {
        prop_assert_eq!(encode_timecode(&decode_timecode(raw)).unwrap(), raw);
    }

    #[test]
    fn timecode_decode_inverts_encode(s in timecode_string()) {
        prop_assert_eq!(decode_timecode(encode_timecode(&s).unwrap()), s);
    }

    #[test]
    fn int32_fields_round_trip(value in any::<i32>()) {
        let mut dpx = open_blank();
        dpx.write(SectionId::ImageInfo, "width", FieldValue::Int32(value)).unwrap();
        prop_assert_eq!(
            dpx.read(SectionId::ImageInfo, "width").unwrap(),
            FieldValue::Int32(value)
        );
    }

    #[test]
    fn int16_fields_round_trip(value in any::<i16>()) {
        let mut dpx = open_blank();
        dpx.write(SectionId::OrientInfo, "border_x_left", FieldValue::Int16(value)).unwrap();
        prop_assert_eq!(
            dpx.read(SectionId::OrientInfo, "border_x_left").unwrap(),
            FieldValue::Int16(value)
        );
    }

    #[test]
    fn int8_fields_round_trip(value in any::<i8>()) {
        let mut dpx = open_blank();
        dpx.write(SectionId::TvInfo, "interlace", FieldValue::Int8(value)).unwrap();
        prop_assert_eq!(
            dpx.read(SectionId::TvInfo, "interlace").unwrap(),
            FieldValue::Int8(value)
        );
    }

    #[test]
    fn float_fields_round_trip(value in any::<f32>().prop_filter("finite", |f| f.is_finite())) {
        let mut dpx = open_blank();
        dpx.write(SectionId::TvInfo, "gamma", FieldValue::Float(value)).unwrap();
        prop_assert_eq!(
            dpx.read(SectionId::TvInfo, "gamma").unwrap(),
            FieldValue::Float(value)
        );
    }

    #[test]
    fn text_fields_round_trip(value in "[ -~]{0,100}") {
        let mut dpx = open_blank();
        dpx.write(SectionId::FileInfo, "filename", FieldValue::from(value.clone())).unwrap();
        prop_assert_eq!(
            dpx.read(SectionId::FileInfo, "filename").unwrap(),
            FieldValue::from(value)
        );
    }
}
