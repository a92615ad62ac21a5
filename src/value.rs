use std::{
    fmt::{self, Debug, Display},
    str::Utf8Error,
};

use crate::debug;

/// An owned byte buffer with an explicit length.
///
/// No terminator is stored: `len()` is exactly the number of payload bytes.
/// Dropping a `Value` releases its buffer.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Value {
    bytes: Box<[u8]>,
}

impl Value {
    /// Take ownership of `bytes` without copying.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            bytes: bytes.into_boxed_slice(),
        }
    }

    /// Duplicate `bytes` into a fresh buffer owned by the new value.
    pub fn copy_from(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Hand the buffer over to the caller.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes.into_vec()
    }

    pub fn to_str(&self) -> Result<&str, Utf8Error> {
        std::str::from_utf8(&self.bytes)
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Self::copy_from(bytes)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::copy_from(s.as_bytes())
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::new(s.into_bytes())
    }
}

impl AsRef<[u8]> for Value {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value(")?;
        debug::write_bytes(f, &self.bytes)?;
        write!(f, ")")
    }
}

/// Lossy: invalid UTF-8 sequences print as U+FFFD.
impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn copy_is_independent_of_source() {
        let mut source = b"Hello".to_vec();
        let value = Value::copy_from(&source);
        source[0] = b'J';
        assert_eq!(value.as_bytes(), b"Hello");
    }

    #[test]
    fn length_is_explicit() {
        let value = Value::from("a\0b");
        assert_eq!(value.len(), 3);
        assert_eq!(value.into_bytes(), vec![b'a', 0, b'b']);
    }

    #[test]
    fn empty_value() {
        let value = Value::default();
        assert!(value.is_empty());
        assert_eq!(value, Value::from(""));
    }

    #[test]
    fn debug_text_and_binary() {
        assert_eq!(format!("{:?}", Value::from("World")), r#"Value("World")"#);
        assert_eq!(format!("{:?}", Value::new(vec![0xff, 0x01])), "Value([ff, 01])");
    }

    #[test]
    fn display_is_lossy() {
        assert_eq!(Value::from("!").to_string(), "!");
        assert_eq!(Value::new(vec![b'a', 0xff]).to_string(), "a\u{fffd}");
        assert!(Value::new(vec![0xff]).to_str().is_err());
    }
}
