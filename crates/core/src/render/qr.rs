//! QR symbol encoding and rasterization.

use image::{Rgba, RgbaImage};
use qrcode::types::QrError;
use qrcode::{Color, EcLevel, QrCode};

use super::error::RenderError;

/// Module color.
pub const DARK: Rgba<u8> = Rgba([0, 0, 0, 255]);
/// Background and quiet zone color.
pub const LIGHT: Rgba<u8> = Rgba([255, 255, 255, 255]);
/// Largest image edge, in pixels, that `rasterize` will allocate.
pub const MAX_IMAGE_EDGE: u32 = 16_384;

/// Encodes `payload` at error correction level M in the smallest version
/// that fits.
pub fn encode(payload: &str) -> Result<QrCode, QrError> {
    QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::M)
}

/// Draws `code` with `box_size` pixels per module and a quiet zone of
/// `border` modules on every side.
///
/// The result is square with edge `(width + 2 * border) * box_size`.
/// Fails with `ImageTooLarge` when that edge exceeds `MAX_IMAGE_EDGE`.
pub fn rasterize(code: &QrCode, box_size: u32, border: u32) -> Result<RgbaImage, RenderError> {
    let modules = code.width() as u32;
    let edge = border
        .checked_mul(2)
        .and_then(|quiet| quiet.checked_add(modules))
        .and_then(|span| span.checked_mul(box_size))
        .filter(|edge| *edge <= MAX_IMAGE_EDGE)
        .ok_or(RenderError::ImageTooLarge {
            modules,
            box_size,
            border,
        })?;
    let mut img = RgbaImage::from_pixel(edge, edge, LIGHT);

    for (i, color) in code.to_colors().iter().enumerate() {
        if *color != Color::Dark {
            continue;
        }
        let x0 = (i as u32 % modules + border) * box_size;
        let y0 = (i as u32 / modules + border) * box_size;
        for dy in 0..box_size {
            for dx in 0..box_size {
                img.put_pixel(x0 + dx, y0 + dy, DARK);
            }
        }
    }

    Ok(img)
}
