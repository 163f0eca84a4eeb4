//! Image input and transport encoding

use base64::{Engine, engine::general_purpose::STANDARD};
use common::error::{ClientError, ClientResult};

/// An image field value
#[derive(Debug, Clone, PartialEq)]
pub enum ImageInput {
    /// A file the user just picked
    File { bytes: Vec<u8>, mime_type: String },
    /// An image the server already has (stored path or previously encoded
    /// content)
    Existing(String),
}

impl ImageInput {
    /// A freshly picked file
    pub fn file(bytes: impl Into<Vec<u8>>, mime_type: impl Into<String>) -> Self {
        ImageInput::File {
            bytes: bytes.into(),
            mime_type: mime_type.into(),
        }
    }

    pub fn is_new_file(&self) -> bool {
        matches!(self, ImageInput::File { .. })
    }

    fn check_file(field: &'static str, bytes: &[u8], mime_type: &str) -> ClientResult<()> {
        if bytes.is_empty() {
            return Err(ClientError::validation(field, "The selected image is empty"));
        }
        if !mime_type.starts_with("image/") {
            return Err(ClientError::validation(
                field,
                format!("Unsupported file type {:?}, please pick an image", mime_type),
            ));
        }
        Ok(())
    }

    /// Bare base64 content, as category and sub-category endpoints expect.
    ///
    /// Returns `None` for an empty existing value.
    pub fn to_base64(&self, field: &'static str) -> ClientResult<Option<String>> {
        match self {
            ImageInput::File { bytes, mime_type } => {
                Self::check_file(field, bytes, mime_type)?;
                Ok(Some(STANDARD.encode(bytes)))
            }
            ImageInput::Existing(value) => {
                let value = strip_data_url_prefix(value.trim());
                Ok((!value.is_empty()).then(|| value.to_string()))
            }
        }
    }

    /// Full `data:` URL, as equipment endpoints expect.
    ///
    /// Existing values pass through untouched; `None` for an empty one.
    pub fn to_data_url(&self, field: &'static str) -> ClientResult<Option<String>> {
        match self {
            ImageInput::File { bytes, mime_type } => {
                Self::check_file(field, bytes, mime_type)?;
                Ok(Some(format!(
                    "data:{};base64,{}",
                    mime_type,
                    STANDARD.encode(bytes)
                )))
            }
            ImageInput::Existing(value) => {
                let value = value.trim();
                Ok((!value.is_empty()).then(|| value.to_string()))
            }
        }
    }
}

/// `data:image/png;base64,AAAA` -> `AAAA`; anything else is returned as is
fn strip_data_url_prefix(value: &str) -> &str {
    match value.split_once(',') {
        Some((prefix, payload)) if prefix.starts_with("data:") => payload,
        _ => value,
    }
}
