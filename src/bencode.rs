//! Bencode encoding and decoding ([BEP-3]).
//!
//! Bencode is the serialization format used throughout BitTorrent for storing
//! and transmitting structured data, including `.torrent` files, tracker
//! responses and DHT messages.
//!
//! # Data Types
//!
//! | Type | Format | Example |
//! |------|--------|---------|
//! | Integer | `i<number>e` | `i42e` → 42 |
//! | Byte String | `<length>:<data>` | `4:spam` → "spam" |
//! | List | `l<items>e` | `l4:spami42ee` → ["spam", 42] |
//! | Dictionary | `d<key><value>...e` | `d3:foo3:bare` → {"foo": "bar"} |
//!
//! # Examples
//!
//! ## Decoding
//!
//! ```
//! use bencodec::{decode, Value};
//!
//! let value = decode(b"d3:cow3:moo4:spam4:eggse").unwrap();
//! let dict = value.as_dict().unwrap();
//!
//! // Keys come back in the order they appeared on the wire.
//! let keys: Vec<&[u8]> = dict.keys().map(|k| k.as_ref()).collect();
//! assert_eq!(keys, [b"cow".as_slice(), b"spam".as_slice()]);
//! assert_eq!(value.get(b"spam").and_then(Value::as_str), Some("eggs"));
//! ```
//!
//! ## Encoding
//!
//! ```
//! use bencodec::{encode, Value};
//!
//! let list = Value::List(vec![Value::string("spam"), Value::from(42)]);
//! assert_eq!(encode(&list).unwrap(), b"l4:spami42ee");
//! ```
//!
//! ## From Rust types
//!
//! ```
//! use bencodec::to_bytes;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Announce<'a> {
//!     port: u16,
//!     event: &'a str,
//! }
//!
//! let bytes = to_bytes(&Announce { port: 6881, event: "started" }).unwrap();
//! assert_eq!(bytes, b"d5:event7:started4:porti6881ee");
//! ```
//!
//! # Error Handling
//!
//! Decoding fails as a whole on the first problem and reports where:
//!
//! - [`DecodeError::UnexpectedEnd`] - Input ended inside a value
//! - [`DecodeError::InvalidInteger`] - Text between `i` and `e` is not a decimal integer
//! - [`DecodeError::InvalidLength`] - Byte string length is not a decimal number
//! - [`DecodeError::InvalidLeadByte`] - Byte cannot start a value
//! - [`DecodeError::DuplicateKey`], [`DecodeError::TrailingData`] - Only with the matching [`DecodeOptions`]
//! - [`DecodeError::NestingTooDeep`] - More nested containers than [`DecodeOptions::max_depth`]
//!
//! Encoding a [`Value`] only fails when the writer does. Serializing arbitrary
//! Rust types can also fail with [`EncodeError::UnsupportedType`].
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod decode;
mod encode;
mod error;
mod ser;
mod value;

pub use decode::{decode, decode_prefix, DecodeOptions, DEFAULT_MAX_DEPTH};
pub use encode::{encode, encode_to};
pub use error::{DecodeError, EncodeError};
pub use ser::{to_bytes, to_value};
pub use value::{Dict, Value};
