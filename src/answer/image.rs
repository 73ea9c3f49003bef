//! Attached image checks.
//!
//! Images are only checked for decodability; nothing reads the bytes yet.

use base64::{
    alphabet,
    engine::{GeneralPurpose, GeneralPurposeConfig},
    Engine as _,
};

use super::AnswerError;

/// Standard alphabet with required padding. Unused bits in the final
/// character are ignored, so `QR==` decodes the same as `QQ==`.
const IMAGE_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Decode a base64 image payload using the standard alphabet with padding.
pub fn decode_image(encoded: &str) -> Result<Vec<u8>, AnswerError> {
    IMAGE_ENGINE
        .decode(encoded)
        .map_err(AnswerError::InvalidImage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_padded_standard_alphabet() {
        // 1x1 transparent GIF header prefix.
        let bytes = decode_image("R0lGODlhAQABAIAAAAAAAP///yH5BAEAAAAALAAAAAABAAEAAAIBRAA7").unwrap();
        assert_eq!(&bytes[..6], b"GIF89a");
    }

    #[test]
    fn rejects_characters_outside_alphabet() {
        let err = decode_image("not-valid-base64!!").unwrap_err();
        assert_eq!(err.to_string(), "Invalid base64 image data");
    }

    #[test]
    fn rejects_missing_padding() {
        assert!(decode_image("aGVsbG8").is_err());
        assert_eq!(decode_image("aGVsbG8=").unwrap(), b"hello");
    }

    #[test]
    fn accepts_nonzero_trailing_bits() {
        assert_eq!(decode_image("aGVsbG9=").unwrap(), b"hello");
        assert_eq!(decode_image("QR==").unwrap(), b"A");
    }
}
