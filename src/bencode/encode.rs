use super::error::EncodeError;
use super::value::Value;
use std::io::Write;

/// Encodes a bencode value to a byte vector.
///
/// The output is canonical:
/// - Integers: `i<number>e`, no leading zeros or `+`
/// - Byte strings: `<length>:<data>`
/// - Lists: `l<items>e`, items in order
/// - Dictionaries: `d<key><value>...e`, keys sorted by raw bytes
///
/// Dictionary keys are sorted here, so the result does not depend on the
/// order entries were inserted.
///
/// # Examples
///
/// ```
/// use bencodec::{encode, Dict, Value};
/// use bytes::Bytes;
///
/// let mut dict = Dict::new();
/// dict.insert(Bytes::from_static(b"spam"), Value::from(1));
/// dict.insert(Bytes::from_static(b"cow"), Value::string("moo"));
///
/// assert_eq!(encode(&Value::Dict(dict)).unwrap(), b"d3:cow3:moo4:spami1ee");
/// ```
pub fn encode(value: &Value) -> Result<Vec<u8>, EncodeError> {
    let mut buf = Vec::new();
    encode_to(value, &mut buf)?;
    Ok(buf)
}

/// Encodes a bencode value into `writer`.
///
/// # Errors
///
/// Returns [`EncodeError::Io`] if the writer fails.
pub fn encode_to<W: Write>(value: &Value, writer: &mut W) -> Result<(), EncodeError> {
    match value {
        Value::Integer(i) => {
            write!(writer, "i{}e", i)?;
        }
        Value::Bytes(b) => {
            write_bytes(b, writer)?;
        }
        Value::List(l) => {
            writer.write_all(b"l")?;
            for item in l {
                encode_to(item, writer)?;
            }
            writer.write_all(b"e")?;
        }
        Value::Dict(d) => {
            let mut entries: Vec<_> = d.iter().collect();
            entries.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));

            writer.write_all(b"d")?;
            for (key, val) in entries {
                write_bytes(key, writer)?;
                encode_to(val, writer)?;
            }
            writer.write_all(b"e")?;
        }
    }
    Ok(())
}

fn write_bytes<W: Write>(bytes: &[u8], writer: &mut W) -> Result<(), EncodeError> {
    write!(writer, "{}:", bytes.len())?;
    writer.write_all(bytes)?;
    Ok(())
}
