use std::fmt;

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

const DATA_IMAGE_PREFIX: &str = "data:image";
const BASE64_MARKER: &str = ";base64,";
const DEFAULT_MEDIA_TYPE: &str = "image/jpeg";

// Mobile encoders often wrap lines and drop padding.
const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// An image ready to be sent to a vision model as a `data:` URI.
///
/// Callers may submit either a full data URI (`data:image/png;base64,...`)
/// or a bare base64 payload, which is assumed to be JPEG.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource {
    data_uri: String,
    payload_offset: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageSourceError {
    #[error("base64_image must not be empty")]
    Empty,
    #[error("image data URI must be base64 encoded")]
    NotBase64Uri,
    #[error("image payload is not valid base64: {0}")]
    InvalidBase64(String),
}

impl ImageSource {
    pub fn parse(input: &str) -> Result<Self, ImageSourceError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ImageSourceError::Empty);
        }

        let (header, raw_payload) = if trimmed.starts_with(DATA_IMAGE_PREFIX) {
            let marker = trimmed
                .find(BASE64_MARKER)
                .ok_or(ImageSourceError::NotBase64Uri)?;
            (
                &trimmed[..marker + BASE64_MARKER.len()],
                &trimmed[marker + BASE64_MARKER.len()..],
            )
        } else {
            ("", trimmed)
        };

        let payload: String = raw_payload
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        if payload.is_empty() {
            return Err(ImageSourceError::Empty);
        }
        LENIENT_BASE64
            .decode(&payload)
            .map_err(|e| ImageSourceError::InvalidBase64(e.to_string()))?;

        let header = if header.is_empty() {
            format!("data:{DEFAULT_MEDIA_TYPE}{BASE64_MARKER}")
        } else {
            header.to_string()
        };
        let payload_offset = header.len();
        let data_uri = header + &payload;

        Ok(Self {
            data_uri,
            payload_offset,
        })
    }

    pub fn as_data_uri(&self) -> &str {
        &self.data_uri
    }

    /// Media type declared by the data URI, e.g. `image/png`.
    pub fn media_type(&self) -> &str {
        let header = &self.data_uri["data:".len()..self.payload_offset - BASE64_MARKER.len()];
        header.split(';').next().unwrap_or(header)
    }

    /// Length of the base64 payload in characters.
    pub fn payload_len(&self) -> usize {
        self.data_uri.len() - self.payload_offset
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} base64 chars)", self.media_type(), self.payload_len())
    }
}
