//! Candidate text encodings for CSV input.

use encoding_rs::{Encoding, GBK, UTF_8, WINDOWS_1252};

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// A text encoding the CSV decoder may attempt.
///
/// `Gb2312` resolves to the GBK decoder (the gb2312 label is a GBK alias
/// under the Encoding Standard); it stays a distinct candidate so the retry
/// order matches the documented list. `Latin1` maps every byte and therefore
/// never fails to decode, making it the terminal fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Gbk,
    Gb2312,
    /// UTF-8 with a byte-order-mark prefix stripped before decoding.
    Utf8Sig,
    Latin1,
}

impl TextEncoding {
    /// Candidate encodings, attempted in order until one succeeds.
    pub const CANDIDATES: [TextEncoding; 5] = [
        TextEncoding::Utf8,
        TextEncoding::Gbk,
        TextEncoding::Gb2312,
        TextEncoding::Utf8Sig,
        TextEncoding::Latin1,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Gbk => "gbk",
            TextEncoding::Gb2312 => "gb2312",
            TextEncoding::Utf8Sig => "utf-8-sig",
            TextEncoding::Latin1 => "latin1",
        }
    }

    fn encoding(self) -> &'static Encoding {
        match self {
            TextEncoding::Utf8 | TextEncoding::Utf8Sig => UTF_8,
            TextEncoding::Gbk | TextEncoding::Gb2312 => GBK,
            TextEncoding::Latin1 => WINDOWS_1252,
        }
    }

    /// Strict decode: any malformed sequence fails the attempt so the next
    /// candidate gets a chance.
    pub fn decode(self, bytes: &[u8]) -> Option<String> {
        let bytes = match self {
            TextEncoding::Utf8Sig => bytes.strip_prefix(&UTF8_BOM).unwrap_or(bytes),
            _ => bytes,
        };
        let (text, had_errors) = self.encoding().decode_without_bom_handling(bytes);
        if had_errors {
            None
        } else {
            Some(text.into_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_rejects_gbk_bytes() {
        // "中文" in GBK
        let bytes = [0xD6, 0xD0, 0xCE, 0xC4];
        assert!(TextEncoding::Utf8.decode(&bytes).is_none());
        assert_eq!(TextEncoding::Gbk.decode(&bytes).as_deref(), Some("中文"));
    }

    #[test]
    fn utf8_sig_strips_the_bom() {
        let bytes = [0xEF, 0xBB, 0xBF, b'a', b'b'];
        assert_eq!(TextEncoding::Utf8Sig.decode(&bytes).as_deref(), Some("ab"));
        // plain utf-8 keeps the BOM as a character
        assert_eq!(
            TextEncoding::Utf8.decode(&bytes).as_deref(),
            Some("\u{feff}ab")
        );
    }

    #[test]
    fn latin1_never_fails() {
        let bytes: Vec<u8> = (0u8..=255).collect();
        assert!(TextEncoding::Latin1.decode(&bytes).is_some());
    }
}
