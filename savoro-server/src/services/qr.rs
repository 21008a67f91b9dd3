//! QR code rendering for menu links

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::{ImageFormat, Luma};
use qrcode::{EcLevel, QrCode};
use std::io::Cursor;
use thiserror::Error;

/// Pixels per QR module
const MODULE_SIZE: u32 = 10;

#[derive(Debug, Error)]
pub enum QrError {
    #[error("QR encoding failed: {0}")]
    Encode(#[from] qrcode::types::QrError),

    #[error("PNG encoding failed: {0}")]
    Png(#[from] image::ImageError),
}

/// Render a URL as a black-on-white QR PNG, returned as a data URI
///
/// Error correction level L, 10x10 pixel modules, 4-module quiet zone.
pub fn generate_data_uri(url: &str) -> Result<String, QrError> {
    let code = QrCode::with_error_correction_level(url.as_bytes(), EcLevel::L)?;
    let img = code
        .render::<Luma<u8>>()
        .module_dimensions(MODULE_SIZE, MODULE_SIZE)
        .build();

    let mut buffer = Vec::new();
    img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)?;

    Ok(format!("data:image/png;base64,{}", STANDARD.encode(&buffer)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

    #[test]
    fn renders_png_data_uri() {
        let uri = generate_data_uri("http://localhost:3000/menu/abc123").unwrap();
        let payload = uri.strip_prefix("data:image/png;base64,").unwrap();

        let bytes = STANDARD.decode(payload).unwrap();
        assert_eq!(&bytes[..8], &PNG_MAGIC);
    }

    #[test]
    fn rendering_is_deterministic() {
        let a = generate_data_uri("http://localhost:3000/menu/abc123").unwrap();
        let b = generate_data_uri("http://localhost:3000/menu/abc123").unwrap();
        assert_eq!(a, b);

        let other = generate_data_uri("http://localhost:3000/menu/xyz789").unwrap();
        assert_ne!(a, other);
    }
}
