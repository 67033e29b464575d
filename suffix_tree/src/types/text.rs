use std::fmt;
use std::ops::Range;

use crate::error::TextError;

// The text a tree is built over. Every edge in the
// tree refers back into this buffer by index, so it
// is never copied or mutated after construction.
//
// The last byte is expected to be a sentinel that
// occurs nowhere else. Without it some suffix could
// be a prefix of another and would end up inside an
// edge instead of on its own leaf. The builders trust
// this and never check it, loaders can use `validate`.
#[derive(Clone, PartialEq, Eq)]
pub struct Text {
  bytes: Vec<u8>,
}

impl Text {
  pub const DEFAULT_SENTINEL: u8 = b'$';

  pub fn new<B: Into<Vec<u8>>>(bytes: B) -> Self {
    Text {
      bytes: bytes.into(),
    }
  }

  // Appends the sentinel unless the input already ends
  // with it. An empty input becomes just the sentinel.
  pub fn terminated<B: Into<Vec<u8>>>(bytes: B, sentinel: u8) -> Self {
    let mut bytes = bytes.into();
    if bytes.last() != Some(&sentinel) {
      bytes.push(sentinel);
    }
    Text { bytes }
  }

  /// Checks that the text is non-empty and that its last byte
  /// does not occur anywhere before it.
  pub fn validate(&self) -> Result<(), TextError> {
    let sentinel = self.sentinel().ok_or(TextError::Empty)?;
    let body = &self.bytes[..self.bytes.len() - 1];
    match body.iter().position(|&b| b == sentinel) {
      Some(position) => Err(TextError::DuplicateSentinel {
        sentinel: sentinel as char,
        position,
      }),
      None => Ok(()),
    }
  }

  pub fn sentinel(&self) -> Option<u8> {
    self.bytes.last().copied()
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

  pub fn suffix(&self, i: usize) -> &[u8] {
    &self.bytes[i..]
  }

  pub fn slice(&self, range: Range<usize>) -> &[u8] {
    &self.bytes[range]
  }
}

impl From<&str> for Text {
  fn from(s: &str) -> Self {
    Text::new(s.as_bytes())
  }
}

impl From<String> for Text {
  fn from(s: String) -> Self {
    Text::new(s.into_bytes())
  }
}

impl From<&[u8]> for Text {
  fn from(b: &[u8]) -> Self {
    Text::new(b)
  }
}

impl From<Vec<u8>> for Text {
  fn from(b: Vec<u8>) -> Self {
    Text::new(b)
  }
}

impl fmt::Debug for Text {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "Text({:?})", String::from_utf8_lossy(&self.bytes))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn terminated_appends_missing_sentinel() {
    let text = Text::terminated("banana", b'$');
    assert_eq!(b"banana$", text.as_bytes());
    assert_eq!(Some(b'$'), text.sentinel());
  }

  #[test]
  fn terminated_keeps_existing_sentinel() {
    let text = Text::terminated("banana$", b'$');
    assert_eq!(7, text.len());
  }

  #[test]
  fn terminated_empty_input_is_only_sentinel() {
    let text = Text::terminated(Vec::new(), b'#');
    assert_eq!(b"#", text.as_bytes());
    assert!(text.validate().is_ok());
  }

  #[test]
  fn validate_rejects_empty_text() {
    assert_eq!(Err(TextError::Empty), Text::new("").validate());
  }

  #[test]
  fn validate_rejects_repeated_sentinel() {
    let result = Text::new("ab$ab$").validate();
    assert_eq!(
      Err(TextError::DuplicateSentinel {
        sentinel: '$',
        position: 2
      }),
      result
    );
  }

  #[test]
  fn suffix_and_slice() {
    let text = Text::from("mississippi$");
    assert_eq!(b"ppi$", text.suffix(8));
    assert_eq!(b"ssi", text.slice(2..5));
  }
}
