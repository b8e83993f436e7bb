use super::error::DecodeError;
use super::value::{Dict, Value};
use bytes::Bytes;
use num_bigint::BigInt;
use tracing::{debug, trace};

/// Default limit on nested lists and dictionaries.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Decoder configuration.
///
/// The defaults are lenient: integers and lengths with leading zeros are
/// accepted, a repeated dictionary key overwrites the earlier value, and bytes
/// after the first complete value are ignored. [`DecodeOptions::strict`]
/// turns every check on.
///
/// Options carry no cursor state, so one instance can be shared freely
/// between threads; each decode call walks the input with its own cursor.
///
/// # Examples
///
/// ```
/// use bencodec::{DecodeError, DecodeOptions};
///
/// assert!(DecodeOptions::default().decode(b"i03e").is_ok());
/// assert_eq!(
///     DecodeOptions::strict().decode(b"i03e"),
///     Err(DecodeError::InvalidInteger { offset: 1 })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Reject `-0` and leading zeros in integers and string lengths.
    pub strict_integers: bool,
    /// Reject a dictionary that repeats a key instead of keeping the last value.
    pub reject_duplicate_keys: bool,
    /// Reject input that continues after the top-level value.
    pub reject_trailing_data: bool,
    /// Maximum number of nested lists and dictionaries.
    pub max_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            strict_integers: false,
            reject_duplicate_keys: false,
            reject_trailing_data: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl DecodeOptions {
    /// Creates lenient options, same as [`DecodeOptions::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options with every check enabled.
    ///
    /// # Examples
    ///
    /// ```
    /// use bencodec::{DecodeError, DecodeOptions};
    ///
    /// let strict = DecodeOptions::strict();
    /// assert_eq!(
    ///     strict.decode(b"i1ei2e"),
    ///     Err(DecodeError::TrailingData { offset: 3 })
    /// );
    /// assert_eq!(
    ///     strict.decode(b"d1:ai1e1:ai2ee"),
    ///     Err(DecodeError::DuplicateKey { offset: 7 })
    /// );
    /// ```
    pub fn strict() -> Self {
        Self {
            strict_integers: true,
            reject_duplicate_keys: true,
            reject_trailing_data: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Rejects `-0` and leading zeros in integers and string lengths.
    pub fn with_strict_integers(mut self, strict: bool) -> Self {
        self.strict_integers = strict;
        self
    }

    /// Fails with [`DecodeError::DuplicateKey`] instead of keeping the last value.
    pub fn with_reject_duplicate_keys(mut self, reject: bool) -> Self {
        self.reject_duplicate_keys = reject;
        self
    }

    /// Fails with [`DecodeError::TrailingData`] when bytes follow the value.
    pub fn with_reject_trailing_data(mut self, reject: bool) -> Self {
        self.reject_trailing_data = reject;
        self
    }

    /// Sets how many lists and dictionaries may nest inside each other.
    ///
    /// ```
    /// use bencodec::{DecodeError, DecodeOptions};
    ///
    /// let options = DecodeOptions::new().with_max_depth(1);
    /// assert!(options.decode(b"li1ee").is_ok());
    /// assert_eq!(
    ///     options.decode(b"llee"),
    ///     Err(DecodeError::NestingTooDeep { offset: 1 })
    /// );
    /// ```
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Decodes a single value from `data`.
    pub fn decode(&self, data: &[u8]) -> Result<Value, DecodeError> {
        let (value, consumed) = self.decode_prefix(data)?;

        if self.reject_trailing_data && consumed != data.len() {
            debug!(offset = consumed, "bencode value followed by trailing data");
            return Err(DecodeError::TrailingData { offset: consumed });
        }

        Ok(value)
    }

    /// Decodes the first value in `data` and returns it together with the
    /// number of bytes it occupied. Trailing bytes are never an error here.
    pub fn decode_prefix(&self, data: &[u8]) -> Result<(Value, usize), DecodeError> {
        let mut cursor = Cursor {
            data,
            pos: 0,
            options: self,
        };

        match cursor.value(0) {
            Ok(value) => Ok((value, cursor.pos)),
            Err(e) => {
                debug!(offset = e.offset(), error = %e, "bencode decode failed");
                Err(e)
            }
        }
    }
}

/// Decodes a bencode value using the default (lenient) options.
///
/// The whole decode fails on the first malformed element; no partial value
/// is ever returned.
///
/// # Examples
///
/// ```
/// use bencodec::{decode, DecodeError, Value};
///
/// assert_eq!(decode(b"i42e").unwrap(), Value::from(42));
/// assert_eq!(decode(b"4:spam").unwrap(), Value::string("spam"));
/// assert_eq!(decode(b"6:short"), Err(DecodeError::UnexpectedEnd { offset: 7 }));
/// ```
pub fn decode(data: &[u8]) -> Result<Value, DecodeError> {
    DecodeOptions::default().decode(data)
}

/// Decodes the first value in `data` and reports how many bytes it used.
///
/// Useful for messages that carry raw payload after a bencoded header.
///
/// ```
/// use bencodec::decode_prefix;
///
/// let (value, used) = decode_prefix(b"d5:piecei0eeRAW").unwrap();
/// assert_eq!(value.get(b"piece").and_then(|v| v.as_integer()), Some(0));
/// assert_eq!(used, 12);
/// ```
pub fn decode_prefix(data: &[u8]) -> Result<(Value, usize), DecodeError> {
    DecodeOptions::default().decode_prefix(data)
}

// One cursor per decode call, threaded by `&mut` through the recursion.
struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
    options: &'a DecodeOptions,
}

impl Cursor<'_> {
    fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    fn find(&self, needle: u8, from: usize) -> Option<usize> {
        self.data[from..]
            .iter()
            .position(|&b| b == needle)
            .map(|i| from + i)
    }

    fn end(&self) -> DecodeError {
        DecodeError::UnexpectedEnd {
            offset: self.data.len(),
        }
    }

    fn value(&mut self, depth: usize) -> Result<Value, DecodeError> {
        match self.peek() {
            None => Err(self.end()),
            Some(b'i') => self.integer(),
            Some(b'l') => self.list(depth),
            Some(b'd') => self.dict(depth),
            Some(b'0'..=b'9') => self.bytes().map(Value::Bytes),
            Some(byte) => Err(DecodeError::InvalidLeadByte {
                offset: self.pos,
                byte,
            }),
        }
    }

    fn enter(&self, depth: usize) -> Result<(), DecodeError> {
        if depth >= self.options.max_depth {
            return Err(DecodeError::NestingTooDeep { offset: self.pos });
        }
        Ok(())
    }

    fn integer(&mut self) -> Result<Value, DecodeError> {
        let start = self.pos + 1;
        let end = self.find(b'e', start).ok_or_else(|| self.end())?;
        let text = &self.data[start..end];
        let invalid = DecodeError::InvalidInteger { offset: start };

        let digits = text.strip_prefix(b"-").unwrap_or(text);
        if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
            return Err(invalid);
        }

        if self.options.strict_integers {
            let negative = digits.len() != text.len();
            if (digits.len() > 1 && digits[0] == b'0') || (negative && digits == b"0") {
                return Err(invalid);
            }
        }

        let value = BigInt::parse_bytes(text, 10).ok_or(invalid)?;
        self.pos = end + 1;
        Ok(Value::Integer(value))
    }

    fn bytes(&mut self) -> Result<Bytes, DecodeError> {
        let start = self.pos;
        let colon = self.find(b':', start).ok_or_else(|| self.end())?;
        let text = &self.data[start..colon];
        let invalid = DecodeError::InvalidLength { offset: start };

        if text.is_empty() || !text.iter().all(u8::is_ascii_digit) {
            return Err(invalid);
        }
        if self.options.strict_integers && text.len() > 1 && text[0] == b'0' {
            return Err(invalid);
        }

        // All digits by now, so a failed parse means the length overflows
        // `usize` and can never be satisfied by the input.
        let len: usize = std::str::from_utf8(text)
            .ok()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| self.end())?;

        let payload = colon + 1;
        if len > self.data.len() - payload {
            return Err(self.end());
        }

        self.pos = payload + len;
        Ok(Bytes::copy_from_slice(&self.data[payload..self.pos]))
    }

    fn list(&mut self, depth: usize) -> Result<Value, DecodeError> {
        self.enter(depth)?;
        self.pos += 1;
        let mut list = Vec::new();

        loop {
            match self.peek() {
                None => return Err(self.end()),
                Some(b'e') => break,
                Some(_) => list.push(self.value(depth + 1)?),
            }
        }

        self.pos += 1;
        Ok(Value::List(list))
    }

    fn dict(&mut self, depth: usize) -> Result<Value, DecodeError> {
        self.enter(depth)?;
        self.pos += 1;
        let mut dict = Dict::new();

        loop {
            let key_offset = self.pos;
            let key = match self.peek() {
                None => return Err(self.end()),
                Some(b'e') => break,
                Some(b'0'..=b'9') => self.bytes()?,
                Some(byte) => {
                    return Err(DecodeError::InvalidLeadByte {
                        offset: key_offset,
                        byte,
                    })
                }
            };

            if self.options.reject_duplicate_keys && dict.contains_key(&key) {
                return Err(DecodeError::DuplicateKey { offset: key_offset });
            }

            let value = self.value(depth + 1)?;
            if dict.insert(key, value).is_some() {
                trace!(offset = key_offset, "duplicate dictionary key, keeping last value");
            }
        }

        self.pos += 1;
        Ok(Value::Dict(dict))
    }
}
