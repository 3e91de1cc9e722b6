//! Byte stuffing for the reserved delimiter values
//!
//! `0x01`, `0x02` and `0x03` never appear raw inside a frame body. Each is
//! replaced by `0x03` followed by the value plus three:
//!
//! ```text
//! 0x01 -> 0x03 0x04
//! 0x02 -> 0x03 0x05
//! 0x03 -> 0x03 0x06
//! ```

use bytes::{BufMut, BytesMut};

use super::{ESCAPE, ESCAPE_OFFSET, Error, FRAME_END, FRAME_START, Result};

#[inline]
const fn is_reserved(byte: u8) -> bool {
    matches!(byte, FRAME_START | FRAME_END | ESCAPE)
}

/// Number of bytes `escape` will produce for `bytes`
#[must_use]
pub fn escaped_len(bytes: &[u8]) -> usize {
    bytes.len() + bytes.iter().filter(|&&b| is_reserved(b)).count()
}

/// Append the escaped form of `bytes` to `out`
pub fn escape_into(bytes: &[u8], out: &mut BytesMut) {
    out.reserve(escaped_len(bytes));
    for &byte in bytes {
        if is_reserved(byte) {
            out.put_u8(ESCAPE);
            out.put_u8(byte + ESCAPE_OFFSET);
        } else {
            out.put_u8(byte);
        }
    }
}

/// Escape the reserved bytes in `bytes`
#[must_use]
pub fn escape(bytes: &[u8]) -> Vec<u8> {
    let mut out = BytesMut::with_capacity(escaped_len(bytes));
    escape_into(bytes, &mut out);
    out.to_vec()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UnescapeState {
    /// Copying bytes through
    Normal,
    /// Saw `ESCAPE`; the next byte must be a valid continuation
    Escaped,
}

/// Reverse `escape`
///
/// # Errors
///
/// Returns [`Error::MalformedPayload`] if an escape marker is followed by a
/// byte outside `0x04..=0x06`, or if the input ends on an escape marker.
pub fn unescape(bytes: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut state = UnescapeState::Normal;

    for &byte in bytes {
        state = match (state, byte) {
            (UnescapeState::Normal, ESCAPE) => UnescapeState::Escaped,
            (UnescapeState::Normal, _) => {
                out.push(byte);
                UnescapeState::Normal
            }
            (UnescapeState::Escaped, 0x04..=0x06) => {
                out.push(byte - ESCAPE_OFFSET);
                UnescapeState::Normal
            }
            (UnescapeState::Escaped, _) => {
                return Err(Error::MalformedPayload {
                    reason: "invalid escape sequence",
                });
            }
        };
    }

    match state {
        UnescapeState::Normal => Ok(out),
        UnescapeState::Escaped => Err(Error::MalformedPayload {
            reason: "unterminated escape sequence",
        }),
    }
}
