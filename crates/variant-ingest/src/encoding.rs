//! Byte decoding for legacy exports.
//!
//! Storefront exports come either as UTF-8 or as Windows-1252 (the encoding
//! the upstream tool writes on Windows). UTF-8 is tried first; anything that
//! fails strict validation is decoded as Windows-1252, which never fails.

use std::borrow::Cow;

/// UTF-8 byte order mark.
const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Decode export bytes to text.
///
/// Strips a leading UTF-8 BOM, then decodes as UTF-8 when valid and as
/// Windows-1252 otherwise.
pub fn decode_export_bytes(bytes: &[u8]) -> Cow<'_, str> {
    let bytes = bytes.strip_prefix(&UTF8_BOM).unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => {
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
            Cow::Owned(decoded.into_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_passes_through() {
        assert_eq!(decode_export_bytes(b"SKU,Name\n"), "SKU,Name\n");
    }

    #[test]
    fn utf8_bom_is_stripped() {
        let bytes = [0xEF, 0xBB, 0xBF, b'A', b',', b'B'];
        assert_eq!(decode_export_bytes(&bytes), "A,B");
    }

    #[test]
    fn windows_1252_fallback() {
        // "Société" in Windows-1252
        let bytes = [0x53, 0x6F, 0x63, 0x69, 0xE9, 0x74, 0xE9];
        assert_eq!(decode_export_bytes(&bytes), "Société");
    }

    #[test]
    fn valid_utf8_is_not_reinterpreted() {
        let text = "Größe Übergroß";
        assert_eq!(decode_export_bytes(text.as_bytes()), text);
    }
}
