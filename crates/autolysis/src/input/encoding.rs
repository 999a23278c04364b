//! Character encoding detection and lossy decoding.

use std::borrow::Cow;

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};

/// Outcome of sniffing a byte buffer.
#[derive(Debug, Clone, Copy)]
pub struct DetectedEncoding {
    /// Encoding used for decoding.
    pub encoding: &'static Encoding,
    /// Whether the buffer started with a byte-order mark.
    pub has_bom: bool,
    /// Whether every byte is 7-bit ASCII.
    pub ascii: bool,
}

impl DetectedEncoding {
    /// Name reported to the user.
    pub fn name(&self) -> String {
        if self.ascii {
            "ascii".to_string()
        } else {
            self.encoding.name().to_ascii_lowercase()
        }
    }
}

/// Guess the encoding of `bytes`.
///
/// A byte-order mark wins, valid UTF-8 is taken as UTF-8, and everything
/// else goes through `chardetng`. Empty input falls back to UTF-8.
pub fn detect_encoding(bytes: &[u8]) -> DetectedEncoding {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return DetectedEncoding {
            encoding,
            has_bom: true,
            ascii: false,
        };
    }

    if bytes.is_empty() {
        return DetectedEncoding {
            encoding: UTF_8,
            has_bom: false,
            ascii: false,
        };
    }

    if std::str::from_utf8(bytes).is_ok() {
        return DetectedEncoding {
            encoding: UTF_8,
            has_bom: false,
            ascii: bytes.is_ascii(),
        };
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    DetectedEncoding {
        encoding: detector.guess(None, true),
        has_bom: false,
        ascii: false,
    }
}

/// Decode `bytes`, substituting U+FFFD for malformed sequences.
///
/// Returns the text and whether any substitution happened.
pub fn decode<'a>(bytes: &'a [u8], detected: &DetectedEncoding) -> (Cow<'a, str>, bool) {
    let (text, had_errors) = detected.encoding.decode_with_bom_removal(bytes);
    if had_errors {
        tracing::warn!(
            encoding = detected.encoding.name(),
            "invalid byte sequences were replaced while decoding"
        );
    }
    (text, had_errors)
}
