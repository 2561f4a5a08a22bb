#[cfg(test)]
mod bencode_tests {
    use std::collections::BTreeMap;
    use num_bigint::BigInt;
    use crate::bencode::bencode::{decode, decode_prefix, encode, MAX_DEPTH};
    use crate::bencode::enums::bencode_error::BencodeError;
    use crate::bencode::enums::bencode_value::BencodeValue;
    use crate::bencode::structs::finite_float::FiniteFloat;

    #[test]
    fn test_decode_integers() {
        assert_eq!(decode(b"i0e"), Ok(BencodeValue::from(0i64)));
        assert_eq!(decode(b"i42e"), Ok(BencodeValue::from(42i64)));
        assert_eq!(decode(b"i-17e"), Ok(BencodeValue::from(-17i64)));
        assert_eq!(decode(b"i9223372036854775807e"), Ok(BencodeValue::from(i64::MAX)));
    }

    #[test]
    fn test_decode_rejects_malformed_integers() {
        for input in [&b"i-0e"[..], b"i03e", b"i-03e", b"ie", b"i-e", b"i+3e", b"i3", b"i1.5e", b"i 1e"] {
            assert_eq!(decode(input), Err(BencodeError::Invalid), "input {:?}", String::from_utf8_lossy(input));
        }
    }

    #[test]
    fn test_decode_integers_beyond_64_bits() {
        let above_max = decode(b"i9223372036854775808e").unwrap();
        assert_eq!(above_max.as_big_integer(), Some(&(BigInt::from(i64::MAX) + 1)));
        assert_eq!(above_max.as_integer(), None);

        let below_min = decode(b"i-9223372036854775809e").unwrap();
        assert_eq!(below_min.as_big_integer(), Some(&(BigInt::from(i64::MIN) - 1)));

        assert_eq!(decode(b"i-9223372036854775808e").unwrap().as_integer(), Some(i64::MIN));

        let value = decode(b"d4:sizei100000000000000000000ee").unwrap();
        assert_eq!(value.get(b"size").and_then(BencodeValue::as_big_integer), Some(&BigInt::from(10u128.pow(20))));
        assert_eq!(value.encode(), b"d4:sizei100000000000000000000ee");
    }

    #[test]
    fn test_decode_rejects_malformed_large_integers() {
        assert_eq!(decode(b"i0100000000000000000000e"), Err(BencodeError::Invalid));
        assert_eq!(decode(b"i-0100000000000000000000e"), Err(BencodeError::Invalid));
        assert_eq!(decode(b"i100000000000000000000"), Err(BencodeError::Invalid));
    }

    #[test]
    fn test_decode_strings() {
        assert_eq!(decode(b"4:spam"), Ok(BencodeValue::Bytes(b"spam".to_vec())));
        assert_eq!(decode(b"0:"), Ok(BencodeValue::Bytes(Vec::new())));
        assert_eq!(decode(b"3:\x00\xff\x10"), Ok(BencodeValue::Bytes(vec![0x00, 0xff, 0x10])));
    }

    #[test]
    fn test_decode_rejects_malformed_strings() {
        assert_eq!(decode(b"4:spa"), Err(BencodeError::Invalid));
        assert_eq!(decode(b"04:spam"), Err(BencodeError::Invalid));
        assert_eq!(decode(b"4spam"), Err(BencodeError::Invalid));
        assert_eq!(decode(b"99999999999999999999999:x"), Err(BencodeError::Invalid));
    }

    #[test]
    fn test_decode_trailing_data() {
        assert_eq!(decode(b"i1ei2e"), Err(BencodeError::TrailingData));
        assert_eq!(decode(b"4:spamx"), Err(BencodeError::TrailingData));
    }

    #[test]
    fn test_decode_prefix_reports_offset() {
        let (value, offset) = decode_prefix(b"4:spamtail").unwrap();
        assert_eq!(value, BencodeValue::from("spam"));
        assert_eq!(offset, 6);
    }

    #[test]
    fn test_decode_unknown_lead_byte() {
        assert_eq!(decode(b""), Err(BencodeError::Invalid));
        assert_eq!(decode(b"x"), Err(BencodeError::Invalid));
        assert_eq!(decode(b"e"), Err(BencodeError::Invalid));
    }

    #[test]
    fn test_decode_lists() {
        assert_eq!(decode(b"le"), Ok(BencodeValue::List(vec![])));
        assert_eq!(
            decode(b"l4:spami7ee"),
            Ok(BencodeValue::List(vec![BencodeValue::from("spam"), BencodeValue::from(7i64)]))
        );
        assert_eq!(decode(b"l4:spam"), Err(BencodeError::Invalid));
    }

    #[test]
    fn test_decode_dictionaries_accept_any_key_order() {
        let value = decode(b"d1:bi1e1:ai2ee").unwrap();
        assert_eq!(value.get(b"a"), Some(&BencodeValue::from(2i64)));
        assert_eq!(value.get(b"b"), Some(&BencodeValue::from(1i64)));
        assert_eq!(value.encode(), b"d1:ai2e1:bi1ee");
    }

    #[test]
    fn test_decode_dictionary_duplicate_key_last_wins() {
        let value = decode(b"d1:ai1e1:ai2ee").unwrap();
        assert_eq!(value.as_dictionary().map(|d| d.len()), Some(1));
        assert_eq!(value.get(b"a"), Some(&BencodeValue::from(2i64)));
    }

    #[test]
    fn test_decode_dictionary_rejects_non_string_key() {
        assert_eq!(decode(b"di1ei2ee"), Err(BencodeError::Invalid));
        assert_eq!(decode(b"d1:a"), Err(BencodeError::Invalid));
    }

    #[test]
    fn test_decode_floats() {
        assert_eq!(decode(b"f1.5e").unwrap().as_float(), Some(1.5));
        assert_eq!(decode(b"f-0.25e").unwrap().as_float(), Some(-0.25));
        assert_eq!(decode(b"f1E20e").unwrap().as_float(), Some(1e20));
        assert_eq!(decode(b"f2.5E-3e").unwrap().as_float(), Some(2.5e-3));
    }

    #[test]
    fn test_decode_rejects_non_finite_floats() {
        assert_eq!(decode(b"f1E400e"), Err(BencodeError::Invalid));
        assert_eq!(decode(b"fe"), Err(BencodeError::Invalid));
        assert_eq!(decode(b"f1.2.3e"), Err(BencodeError::Invalid));
    }

    #[test]
    fn test_decode_rejects_excessive_nesting() {
        let mut input = vec![b'l'; MAX_DEPTH + 2];
        input.extend(vec![b'e'; MAX_DEPTH + 2]);
        assert_eq!(decode(&input), Err(BencodeError::Invalid));

        let mut input = vec![b'l'; 64];
        input.extend(vec![b'e'; 64]);
        assert!(decode(&input).is_ok());
    }

    #[test]
    fn test_encode_canonical_dictionary_order() {
        let mut first = BencodeValue::dictionary();
        first.insert("b", 1i64);
        first.insert("a", 2i64);
        let mut second = BencodeValue::dictionary();
        second.insert("a", 2i64);
        second.insert("b", 1i64);

        assert_eq!(encode(&first), b"d1:ai2e1:bi1ee");
        assert_eq!(encode(&first), encode(&second));
    }

    #[test]
    fn test_encode_orders_keys_bytewise() {
        let mut value = BencodeValue::dictionary();
        value.insert(vec![0xffu8], 1i64);
        value.insert("Z", 2i64);
        value.insert("a", 3i64);
        assert_eq!(encode(&value), b"d1:Zi2e1:ai3e1:\xffi1ee".to_vec());
    }

    #[test]
    fn test_encode_scalars() {
        assert_eq!(encode(&BencodeValue::from(0i64)), b"i0e");
        assert_eq!(encode(&BencodeValue::from(-42i64)), b"i-42e");
        assert_eq!(encode(&BencodeValue::from(true)), b"i1e");
        assert_eq!(encode(&BencodeValue::from(false)), b"i0e");
        assert_eq!(encode(&BencodeValue::from("spam")), b"4:spam");
        assert_eq!(encode(&BencodeValue::from(Vec::<u8>::new())), b"0:");
        assert_eq!(encode(&BencodeValue::from(u64::MAX)), b"i18446744073709551615e");
        assert_eq!(encode(&BencodeValue::from(BigInt::from(i128::MIN))), b"i-170141183460469231731687303715884105728e");
    }

    #[test]
    fn test_encode_floats_uppercase_exponent() {
        assert_eq!(encode(&BencodeValue::float(1.5).unwrap()), b"f1.5e");
        assert_eq!(encode(&BencodeValue::float(1e20).unwrap()), b"f1E20e");
        assert_eq!(encode(&BencodeValue::float(2.5e-7).unwrap()), b"f2.5E-7e");
    }

    #[test]
    fn test_non_finite_floats_rejected_at_construction() {
        assert_eq!(FiniteFloat::new(f64::NAN), Err(BencodeError::NonFinite));
        assert_eq!(FiniteFloat::new(f64::INFINITY), Err(BencodeError::NonFinite));
        assert_eq!(BencodeValue::float(f64::NEG_INFINITY), Err(BencodeError::NonFinite));
        assert!(FiniteFloat::try_from(0.1).is_ok());
    }

    #[test]
    fn test_nested_round_trip() {
        let mut inner = BTreeMap::new();
        inner.insert(b"port".to_vec(), BencodeValue::from(6881u16));
        inner.insert(b"ip".to_vec(), BencodeValue::from("10.0.0.1"));
        let value = BencodeValue::from(vec![
            BencodeValue::from(inner),
            BencodeValue::float(0.125).unwrap(),
            BencodeValue::from(vec![BencodeValue::from(-1i64)]),
        ]);
        assert_eq!(decode(&encode(&value)), Ok(value));
    }

    #[test]
    fn test_insert_on_non_dictionary_is_rejected() {
        let mut value = BencodeValue::from(1i64);
        assert!(!value.insert("a", 1i64));
        assert_eq!(value, BencodeValue::from(1i64));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(BencodeError::Invalid.to_string(), "not a valid bencoded value");
        assert_eq!(BencodeError::TrailingData.to_string(), "invalid bencoded value (data after valid prefix)");
    }
}
