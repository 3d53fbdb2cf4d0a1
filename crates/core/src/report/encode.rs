//! Percent-encoding into bounded buffers
//!
//! Unreserved characters (`A-Z a-z 0-9 - _ . ~`) pass through; every other
//! byte becomes `%XX` with uppercase hex digits.
//!
//! # Capacity Contract
//!
//! An output item is emitted only while `written + 3 < capacity`, which keeps
//! room for the widest item (`%XX`) plus a terminator byte. When the input
//! does not fit the output is truncated at an item boundary, never split
//! inside an escape and never written past the end of the buffer.

/// Size of the encoded-message buffer, terminator included
pub const ENCODED_BUFFER_SIZE: usize = 512;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Returns true for RFC 3986 unreserved characters
pub fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~')
}

/// Outcome of a bounded encode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeSummary {
    /// Number of encoded bytes written (terminator excluded)
    pub len: usize,
    /// True if some input bytes were dropped for lack of space
    pub truncated: bool,
}

/// Percent-encode `input` into `output`
///
/// Writes a `0` terminator after the encoded bytes when the buffer has room
/// for it, which is always the case unless `output` is empty.
///
/// # Examples
///
/// ```
/// use pico_joystick_core::report::encode::percent_encode_into;
///
/// let mut buf = [0u8; 16];
/// let summary = percent_encode_into(b"a b", &mut buf);
/// assert_eq!(&buf[..summary.len], b"a%20b");
/// assert!(!summary.truncated);
/// ```
pub fn percent_encode_into(input: &[u8], output: &mut [u8]) -> EncodeSummary {
    let capacity = output.len();
    let mut written = 0;
    let mut consumed = 0;

    for &byte in input {
        if written + 3 >= capacity {
            break;
        }

        if is_unreserved(byte) {
            output[written] = byte;
            written += 1;
        } else {
            output[written] = b'%';
            output[written + 1] = HEX_DIGITS[(byte >> 4) as usize];
            output[written + 2] = HEX_DIGITS[(byte & 0x0F) as usize];
            written += 3;
        }
        consumed += 1;
    }

    if written < capacity {
        output[written] = 0;
    }

    EncodeSummary {
        len: written,
        truncated: consumed < input.len(),
    }
}

/// Owned fixed-size buffer holding a percent-encoded string
#[derive(Clone)]
pub struct EncodedBuffer<const N: usize> {
    bytes: [u8; N],
    summary: EncodeSummary,
}

impl<const N: usize> EncodedBuffer<N> {
    /// Encode `input` into a new buffer of `N` bytes
    pub fn encode(input: &str) -> Self {
        let mut bytes = [0u8; N];
        let summary = percent_encode_into(input.as_bytes(), &mut bytes);
        Self { bytes, summary }
    }

    /// Encoded text
    pub fn as_str(&self) -> &str {
        // Only ASCII is ever written
        core::str::from_utf8(&self.bytes[..self.summary.len]).unwrap_or("")
    }

    /// Encoded length in bytes
    pub fn len(&self) -> usize {
        self.summary.len
    }

    /// True if nothing was encoded
    pub fn is_empty(&self) -> bool {
        self.summary.len == 0
    }

    /// True if the input did not fit
    pub fn is_truncated(&self) -> bool {
        self.summary.truncated
    }
}

/// Buffer type used for status messages
pub type EncodedMessage = EncodedBuffer<ENCODED_BUFFER_SIZE>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreserved_pass_through() {
        let encoded = EncodedMessage::encode("AZaz09-_.~");
        assert_eq!(encoded.as_str(), "AZaz09-_.~");
        assert!(!encoded.is_truncated());
    }

    #[test]
    fn test_reserved_bytes_escaped_uppercase() {
        let encoded = EncodedMessage::encode("[ X: |]\n");
        assert_eq!(encoded.as_str(), "%5B%20X%3A%20%7C%5D%0A");
    }

    #[test]
    fn test_non_ascii_escaped_per_byte() {
        // U+00E9 is 0xC3 0xA9 in UTF-8
        let encoded = EncodedMessage::encode("é");
        assert_eq!(encoded.as_str(), "%C3%A9");
    }

    #[test]
    fn test_terminator_written() {
        let mut buf = [0xFFu8; 8];
        let summary = percent_encode_into(b"ab", &mut buf);
        assert_eq!(summary.len, 2);
        assert_eq!(buf[2], 0);
    }

    #[test]
    fn test_truncates_before_overflow() {
        // capacity 8: items are emitted while written + 3 < 8
        let mut buf = [0xFFu8; 8];
        let summary = percent_encode_into(b"abcdefgh", &mut buf);
        assert_eq!(summary.len, 5);
        assert!(summary.truncated);
        assert_eq!(&buf[..5], b"abcde");
        assert_eq!(buf[5], 0);
    }

    #[test]
    fn test_truncates_at_escape_boundary() {
        let mut buf = [0xFFu8; 7];
        let summary = percent_encode_into(b"   ", &mut buf);
        // two escapes fit (3 + 3 < 7), the third would need 9 bytes
        assert_eq!(summary.len, 6);
        assert_eq!(&buf[..6], b"%20%20");
        assert_eq!(buf[6], 0);
        assert!(summary.truncated);
    }

    #[test]
    fn test_tiny_buffers() {
        let mut empty: [u8; 0] = [];
        let summary = percent_encode_into(b"abc", &mut empty);
        assert_eq!(summary.len, 0);
        assert!(summary.truncated);

        let mut three = [0xFFu8; 3];
        let summary = percent_encode_into(b"abc", &mut three);
        assert_eq!(summary.len, 0);
        assert_eq!(three[0], 0);
        assert_eq!(&three[1..], &[0xFF, 0xFF]);
    }

    #[test]
    fn test_empty_input() {
        let encoded = EncodedMessage::encode("");
        assert!(encoded.is_empty());
        assert!(!encoded.is_truncated());
    }
}
