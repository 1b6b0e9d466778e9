use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use serde::{Deserialize, Serialize};

/// A request to generate one image from a text prompt
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// Text description of the desired image
    pub prompt: String,
}

/// Client-facing response carrying the generated image inline
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    /// The image as a `data:image/jpeg;base64,<...>` URL
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

impl GenerateResponse {
    /// Wrap raw image bytes as a base64 data URL
    ///
    /// The upstream endpoint produces JPEG output, so the mime type is
    /// fixed.
    pub fn from_image_bytes(bytes: &[u8]) -> Self {
        Self {
            image_url: format!("data:image/jpeg;base64,{}", BASE64.encode(bytes)),
        }
    }
}
