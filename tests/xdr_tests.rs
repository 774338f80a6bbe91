use serde::{Deserialize, Serialize};
use stellar_xdr_model::{
    DecodeOptions, Deserializer, Error, Serializer, XdrCodec, from_bytes, from_bytes_partial,
    to_bytes, to_writer,
};

// ── scalars ─────────────────────────────────────────────────────────────────

#[test]
fn test_ints_are_big_endian_words() {
    let cases: [(Vec<u8>, &[u8]); 6] = [
        (to_bytes(&true).unwrap(), &[0, 0, 0, 1]),
        (to_bytes(&false).unwrap(), &[0, 0, 0, 0]),
        (to_bytes(&0xDEADBEEFu32).unwrap(), &[0xDE, 0xAD, 0xBE, 0xEF]),
        (to_bytes(&-7i32).unwrap(), &[0xFF, 0xFF, 0xFF, 0xF9]),
        (to_bytes(&7u8).unwrap(), &[0, 0, 0, 7]),
        (to_bytes(&-2i16).unwrap(), &[0xFF, 0xFF, 0xFF, 0xFE]),
    ];
    for (got, want) in cases {
        assert_eq!(got, want);
    }
}

#[test]
fn test_hypers_take_eight_bytes() {
    assert_eq!(
        to_bytes(&0x0102030405060708u64).unwrap(),
        [1, 2, 3, 4, 5, 6, 7, 8]
    );
    // A starting balance of ten lumens, in stroops.
    assert_eq!(
        to_bytes(&100_000_000i64).unwrap(),
        [0, 0, 0, 0, 0x05, 0xF5, 0xE1, 0x00]
    );
    for v in [i64::MIN, -9_000_000_000, 0, i64::MAX] {
        assert_eq!(from_bytes::<i64>(&to_bytes(&v).unwrap()).unwrap(), v);
    }
}

#[test]
fn test_narrow_ints_range_checked_on_decode() {
    assert_eq!(from_bytes::<u8>(&[0, 0, 0, 200]).unwrap(), 200);
    assert!(from_bytes::<u8>(&[0, 0, 1, 0]).is_err());
}

#[test]
fn test_floats_are_unsupported() {
    assert!(matches!(to_bytes(&1.5f32), Err(Error::Unsupported(_))));
    assert!(matches!(to_bytes(&1.5f64), Err(Error::Unsupported(_))));
    assert!(matches!(from_bytes::<f64>(&[0; 8]), Err(Error::Unsupported(_))));
}

#[test]
fn test_bad_bool_and_eof() {
    assert!(matches!(from_bytes::<bool>(&[0, 0, 0, 2]), Err(Error::InvalidBool(2))));
    assert!(matches!(from_bytes::<u32>(&[0, 0, 0]), Err(Error::UnexpectedEof)));
    assert!(matches!(from_bytes::<u64>(&[0; 7]), Err(Error::UnexpectedEof)));
}

// ── strings and opaque ──────────────────────────────────────────────────────

#[test]
fn test_home_domain_padding() {
    for (domain, total) in [("", 4usize), ("a", 8), ("ab.c", 8), ("a.com", 12)] {
        let bytes = to_bytes(domain).unwrap();
        assert_eq!(bytes.len(), total, "{domain:?}");
        assert_eq!(&bytes[..4], (domain.len() as u32).to_be_bytes());
        assert!(bytes[4 + domain.len()..].iter().all(|&b| b == 0));
        assert_eq!(from_bytes::<String>(&bytes).unwrap(), domain);
    }
}

#[test]
fn test_string_must_be_utf8() {
    let bytes = [0, 0, 0, 2, 0xC3, 0x28, 0, 0];
    assert!(matches!(from_bytes::<String>(&bytes), Err(Error::InvalidString)));
}

#[test]
fn test_data_value_as_serde_bytes() {
    let data = serde_bytes::ByteBuf::from(vec![1, 2, 3, 4, 5]);
    let bytes = to_bytes(&data).unwrap();
    assert_eq!(bytes, [0, 0, 0, 5, 1, 2, 3, 4, 5, 0, 0, 0]);
    assert_eq!(from_bytes::<serde_bytes::ByteBuf>(&bytes).unwrap(), data);
}

#[test]
fn test_opaque_length_beyond_input() {
    let bytes = [0, 0, 0, 64, 1, 2, 3, 4];
    assert!(matches!(
        from_bytes::<serde_bytes::ByteBuf>(&bytes),
        Err(Error::UnexpectedEof)
    ));
}

// ── optionals, arrays, structs ──────────────────────────────────────────────

#[test]
fn test_optional_presence_flag() {
    assert_eq!(to_bytes(&None::<u32>).unwrap(), [0, 0, 0, 0]);
    let bytes = to_bytes(&Some(42u32)).unwrap();
    assert_eq!(bytes, [0, 0, 0, 1, 0, 0, 0, 42]);
    assert_eq!(from_bytes::<Option<u32>>(&bytes).unwrap(), Some(42));
    assert!(matches!(
        from_bytes::<Option<u32>>(&[0, 0, 0, 2, 0, 0, 0, 1]),
        Err(Error::InvalidOption(2))
    ));
}

#[test]
fn test_variable_array_count_prefix() {
    let weights: Vec<u32> = vec![1, 2, 3, 4, 5];
    let bytes = to_bytes(&weights).unwrap();
    assert_eq!(&bytes[..4], [0, 0, 0, 5]);
    assert_eq!(bytes.len(), 24);
    assert_eq!(from_bytes::<Vec<u32>>(&bytes).unwrap(), weights);
}

#[test]
fn test_array_count_beyond_input() {
    let result = from_bytes::<Vec<u32>>(&[0xFF, 0xFF, 0xFF, 0xFF, 0, 0, 0, 1]);
    assert!(matches!(result, Err(Error::UnexpectedEof)));
}

// Claims more elements than a count prefix can hold; writes none of them.
struct OversizedSeq;

impl Serialize for OversizedSeq {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeSeq as _;
        serializer.serialize_seq(Some(1 << 32))?.end()
    }
}

#[test]
fn test_count_overflow_reports_the_real_length() {
    let err = to_bytes(&OversizedSeq).unwrap_err();
    assert_eq!(
        err,
        Error::LengthOverflow {
            max: u32::MAX,
            got: 1 << 32
        }
    );
    assert!(err.is_invalid_input());
}

#[test]
fn test_tuples_and_void_have_no_prefix() {
    let thresholds = (1u32, 2u32, 3u32);
    let bytes = to_bytes(&thresholds).unwrap();
    assert_eq!(bytes, [0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 3]);
    assert_eq!(from_bytes::<(u32, u32, u32)>(&bytes).unwrap(), thresholds);

    assert!(to_bytes(&()).unwrap().is_empty());
    from_bytes::<()>(&[]).unwrap();
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct TimeBounds {
    min_time: u64,
    max_time: u64,
    base_fee: u32,
}

#[test]
fn test_struct_fields_in_declared_order() {
    let bounds = TimeBounds {
        min_time: 7,
        max_time: 0x0102030405060708,
        base_fee: 100,
    };
    let bytes = to_bytes(&bounds).unwrap();
    assert_eq!(bytes.len(), 20);
    assert_eq!(&bytes[..8], [0, 0, 0, 0, 0, 0, 0, 7]);
    assert_eq!(&bytes[16..], [0, 0, 0, 100]);
    assert_eq!(from_bytes::<TimeBounds>(&bytes).unwrap(), bounds);
}

// Plain serde enums still work; catalog unions do not use this path.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
enum Memo {
    None,
    Text(String),
    Id(u64),
}

#[test]
fn test_serde_enum_variant_index() {
    assert_eq!(to_bytes(&Memo::None).unwrap(), [0, 0, 0, 0]);
    assert_eq!(
        to_bytes(&Memo::Id(9)).unwrap(),
        [0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 9]
    );
    let text = Memo::Text("hello".to_string());
    let bytes = to_bytes(&text).unwrap();
    assert_eq!(&bytes[..4], [0, 0, 0, 1]);
    assert_eq!(from_bytes::<Memo>(&bytes).unwrap(), text);
}

// ── fixed-length opaque ─────────────────────────────────────────────────────

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct SeqAndCode {
    seq: u32,
    #[serde(with = "stellar_xdr_model::fixed_opaque")]
    code: [u8; 12],
}

#[test]
fn test_fixed_opaque_has_no_length_prefix() {
    let value = SeqAndCode {
        seq: 7,
        code: *b"LONGCODE\0\0\0\0",
    };
    let bytes = to_bytes(&value).unwrap();
    assert_eq!(bytes.len(), 16);
    assert_eq!(&bytes[..4], [0, 0, 0, 7]);
    assert_eq!(&bytes[4..], b"LONGCODE\0\0\0\0");
    assert_eq!(from_bytes::<SeqAndCode>(&bytes).unwrap(), value);

    // A bare [u8; 12] would be twelve XDR ints.
    #[derive(Serialize)]
    struct Wide {
        code: [u8; 12],
    }
    assert_eq!(to_bytes(&Wide { code: [0; 12] }).unwrap().len(), 48);
}

#[test]
fn test_fixed_opaque_sizes_one_through_eight() {
    macro_rules! check {
        ($($n:literal)*) => {$({
            #[derive(Serialize, Deserialize, Debug, PartialEq)]
            struct W {
                #[serde(with = "stellar_xdr_model::fixed_opaque")]
                data: [u8; $n],
                after: u32,
            }
            let w = W { data: [0xAB; $n], after: 1 };
            let bytes = to_bytes(&w).unwrap();
            let padded = ($n + 3) / 4 * 4;
            assert_eq!(bytes.len(), padded + 4, "size {}", $n);
            assert_eq!(&bytes[..$n], &[0xAB; $n][..]);
            assert!(bytes[$n..padded].iter().all(|&b| b == 0), "size {}", $n);
            assert_eq!(from_bytes::<W>(&bytes).unwrap(), w, "size {}", $n);
        })*};
    }
    check!(1 2 3 4 5 6 7 8);
}

#[test]
fn test_fixed_opaque_short_input() {
    assert!(matches!(
        from_bytes::<SeqAndCode>(&[0, 0, 0, 7, b'A', b'B']),
        Err(Error::UnexpectedEof)
    ));
}

// ── decoder options and entry points ────────────────────────────────────────

#[test]
fn test_strict_padding_rejects_dirty_pad() {
    let dirty = [0, 0, 0, 1, b'A', 0, 0, 7];
    assert!(matches!(from_bytes::<String>(&dirty), Err(Error::InvalidPadding)));

    let lenient = DecodeOptions::default().strict_padding(false);
    let mut de = Deserializer::with_options(&dirty, lenient);
    assert_eq!(String::deserialize(&mut de).unwrap(), "A");
    assert!(de.remaining().is_empty());
}

#[test]
fn test_trailing_bytes_rejected_by_from_xdr() {
    let mut bytes = to_bytes(&5u32).unwrap();
    bytes.extend([0, 0, 0, 0]);
    assert!(matches!(u32::from_xdr(&bytes), Err(Error::TrailingBytes(4))));

    let options = DecodeOptions::default().allow_trailing_bytes(true);
    assert_eq!(u32::from_xdr_with(&bytes, options).unwrap(), 5);
}

#[test]
fn test_partial_decode_returns_the_rest() {
    let mut buf = to_bytes(&42u32).unwrap();
    buf.extend(to_bytes(&99u32).unwrap());
    buf.extend([0xFF, 0xFF]);
    let (first, rest) = from_bytes_partial::<u32>(&buf).unwrap();
    let (second, rest) = from_bytes_partial::<u32>(rest).unwrap();
    assert_eq!((first, second), (42, 99));
    assert_eq!(rest, [0xFF, 0xFF]);
}

#[test]
fn test_depth_limit() {
    let nested: Option<Option<Option<u32>>> = Some(Some(Some(1)));
    let bytes = to_bytes(&nested).unwrap();

    let shallow = DecodeOptions::default().max_depth(2);
    assert!(matches!(
        Option::<Option<Option<u32>>>::from_xdr_with(&bytes, shallow),
        Err(Error::DepthLimitExceeded(2))
    ));
    assert_eq!(Option::<Option<Option<u32>>>::from_xdr(&bytes).unwrap(), nested);
}

#[test]
fn test_writer_entry_points_agree() {
    let bounds = TimeBounds {
        min_time: 1,
        max_time: 2,
        base_fee: 3,
    };
    let mut written = Vec::new();
    to_writer(&mut written, &bounds).unwrap();
    assert_eq!(written, to_bytes(&bounds).unwrap());

    let mut ser = Serializer::new(std::io::Cursor::new(Vec::new()));
    bounds.serialize(&mut ser).unwrap();
    assert_eq!(ser.bytes_written(), 20);
    assert_eq!(ser.into_inner().into_inner(), written);
}

#[test]
fn test_base64_helpers() {
    assert_eq!(7u32.to_xdr_base64().unwrap(), "AAAABw==");
    assert_eq!(u32::from_xdr_base64(" AAAABw==\n").unwrap(), 7);
    assert!(matches!(u32::from_xdr_base64("not base64!"), Err(Error::Base64(_))));
}

#[test]
fn test_error_classification() {
    assert!(Error::UnexpectedEof.is_decode_error());
    assert!(!Error::UnexpectedEof.is_invalid_input());
    let missing = Error::MissingField {
        ty: "BumpSequenceOp",
        field: "bump_to",
    };
    assert!(missing.is_invalid_input());
    assert!(!missing.is_decode_error());
    assert_eq!(missing.to_string(), "BumpSequenceOp is missing required field `bump_to`");
}
