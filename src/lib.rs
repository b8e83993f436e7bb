//! bencodec - Bencode for BitTorrent data
//!
//! Converts between the bencode wire format and an in-memory [`Value`] tree.
//! Decoding keeps dictionary keys in wire order; encoding always writes them
//! in canonical (byte-sorted) order, so equal values encode to equal bytes.
//!
//! # Modules
//!
//! - [`bencode`] - BEP-3 Bencode encoding/decoding

pub mod bencode;

pub use bencode::{
    decode, decode_prefix, encode, encode_to, to_bytes, to_value, DecodeError, DecodeOptions,
    Dict, EncodeError, Value,
};
