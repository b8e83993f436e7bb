use bencodec::{decode, decode_prefix, encode, DecodeOptions, Dict, Value};
use bytes::Bytes;
use proptest::prelude::*;

fn arb_key() -> impl Strategy<Value = Bytes> {
    prop::collection::vec(any::<u8>(), 0..8).prop_map(Bytes::from)
}

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        any::<i64>().prop_map(Value::from),
        any::<i128>().prop_map(Value::from),
        prop::collection::vec(any::<u8>(), 0..32).prop_map(Value::from),
    ];

    leaf.prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(Value::List),
            prop::collection::vec((arb_key(), inner), 0..8)
                .prop_map(|entries| Value::Dict(entries.into_iter().collect())),
        ]
    })
}

fn keys_sorted(value: &Value) -> bool {
    match value {
        Value::List(l) => l.iter().all(keys_sorted),
        Value::Dict(d) => {
            d.keys().zip(d.keys().skip(1)).all(|(a, b)| a < b) && d.values().all(keys_sorted)
        }
        _ => true,
    }
}

fn reversed(value: &Value) -> Value {
    match value {
        Value::List(l) => Value::List(l.iter().map(reversed).collect()),
        Value::Dict(d) => {
            let dict: Dict = d.iter().rev().map(|(k, v)| (k.clone(), reversed(v))).collect();
            Value::Dict(dict)
        }
        other => other.clone(),
    }
}

#[derive(Debug, Clone)]
enum Edit {
    Replace(prop::sample::Index, u8),
    Insert(prop::sample::Index, u8),
    Remove(prop::sample::Index),
}

fn arb_edit() -> impl Strategy<Value = Edit> {
    prop_oneof![
        (any::<prop::sample::Index>(), any::<u8>()).prop_map(|(i, b)| Edit::Replace(i, b)),
        (any::<prop::sample::Index>(), any::<u8>()).prop_map(|(i, b)| Edit::Insert(i, b)),
        any::<prop::sample::Index>().prop_map(Edit::Remove),
    ]
}

fn apply_edits(mut data: Vec<u8>, edits: &[Edit]) -> Vec<u8> {
    for edit in edits {
        match *edit {
            Edit::Insert(ref i, b) => {
                let at = i.index(data.len() + 1);
                data.insert(at, b);
            }
            Edit::Replace(ref i, b) if !data.is_empty() => {
                let at = i.index(data.len());
                data[at] = b;
            }
            Edit::Remove(ref i) if !data.is_empty() => {
                let at = i.index(data.len());
                data.remove(at);
            }
            _ => {}
        }
    }
    data
}

proptest! {
    #[test]
    fn roundtrip(value in arb_value()) {
        let encoded = encode(&value).unwrap();
        prop_assert_eq!(decode(&encoded).unwrap(), value);
    }

    #[test]
    fn roundtrip_strict(value in arb_value()) {
        let encoded = encode(&value).unwrap();
        prop_assert_eq!(DecodeOptions::strict().decode(&encoded).unwrap(), value);
    }

    #[test]
    fn encoded_dicts_are_sorted(value in arb_value()) {
        let decoded = decode(&encode(&value).unwrap()).unwrap();
        prop_assert!(keys_sorted(&decoded));
    }

    #[test]
    fn encoding_ignores_insertion_order(value in arb_value()) {
        prop_assert_eq!(encode(&reversed(&value)).unwrap(), encode(&value).unwrap());
    }

    #[test]
    fn canonicalization_is_idempotent(value in arb_value()) {
        let once = encode(&value).unwrap();
        let twice = encode(&decode(&once).unwrap()).unwrap();
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn prefix_reports_encoded_length(value in arb_value(), tail in prop::collection::vec(any::<u8>(), 0..16)) {
        let encoded = encode(&value).unwrap();
        let mut data = encoded.clone();
        data.extend_from_slice(&tail);

        let (decoded, used) = decode_prefix(&data).unwrap();
        prop_assert_eq!(used, encoded.len());
        prop_assert_eq!(decoded, value);
    }

    #[test]
    fn decode_never_panics(data in prop::collection::vec(any::<u8>(), 0..256)) {
        let _ = decode(&data);
        let _ = DecodeOptions::strict().decode(&data);
    }

    #[test]
    fn decode_survives_corrupted_encodings(value in arb_value(), edits in prop::collection::vec(arb_edit(), 1..4)) {
        let data = apply_edits(encode(&value).unwrap(), &edits);

        for options in [DecodeOptions::default(), DecodeOptions::strict()] {
            if let Ok((decoded, used)) = options.decode_prefix(&data) {
                prop_assert!(used <= data.len());
                // Whatever survives the corruption must still re-encode and decode.
                let reencoded = encode(&decoded).unwrap();
                prop_assert_eq!(decode(&reencoded).unwrap(), decoded);
            }
        }
    }

    #[test]
    fn truncated_input_is_rejected(value in arb_value()) {
        let encoded = encode(&value).unwrap();
        for cut in 0..encoded.len() {
            prop_assert!(decode(&encoded[..cut]).is_err());
        }
    }
}
