//! # QR Link Builder
//!
//! Builds the remote image-service URL for a QR code. The engine only
//! constructs the link; fetching and displaying the image is the shell's
//! job, so there is no network code here.
//!
//! ## Example
//!
//! ```rust
//! use toolcraft_core::calculators::qr::{build_link, QrLinkInput};
//!
//! let input = QrLinkInput {
//!     content: "https://example.com".to_string(),
//!     size_px: 200,
//! };
//! let link = build_link(&input).unwrap();
//! assert_eq!(
//!     link.url,
//!     "https://api.qrserver.com/v1/create-qr-code/?size=200x200&data=https%3A%2F%2Fexample.com"
//! );
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcResult, NotComputable};

/// Base endpoint of the QR image service
pub const QR_SERVICE_BASE: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Rendered image edge length used when none is given
pub const DEFAULT_SIZE_PX: u32 = 200;

fn default_size() -> u32 {
    DEFAULT_SIZE_PX
}

/// Input parameters for a QR link.
///
/// ## JSON Example
///
/// ```json
/// { "content": "https://example.com", "size_px": 200 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QrLinkInput {
    /// URL or free text to encode
    pub content: String,

    /// Square image edge length in pixels; 200 when omitted
    #[serde(default = "default_size")]
    pub size_px: u32,
}

impl QrLinkInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.content.is_empty() {
            return Err(NotComputable::missing(
                "content",
                "Content to encode is required",
            ));
        }
        Ok(())
    }
}

/// The assembled image-service URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QrLink {
    /// Fully percent-encoded URL ready for an `<img>` fetch
    pub url: String,
}

/// Build the QR image-service URL for the given content.
///
/// # Returns
///
/// * `Ok(QrLink)` - service URL with the content percent-encoded
/// * `Err(NotComputable)` - empty content
pub fn build_link(input: &QrLinkInput) -> CalcResult<QrLink> {
    input.validate()?;

    let url = format!(
        "{}?size={}x{}&data={}",
        QR_SERVICE_BASE,
        input.size_px,
        input.size_px,
        urlencoding::encode(&input.content)
    );

    Ok(QrLink { url })
}
