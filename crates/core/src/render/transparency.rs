//! Background removal for rendered symbols.

use image::{Rgba, RgbaImage};

/// Replacement for every near-white pixel.
pub const TRANSPARENT: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Whether R, G and B are all strictly above `threshold`. Alpha is ignored.
pub fn is_near_white(pixel: &Rgba<u8>, threshold: u8) -> bool {
    let [r, g, b, _] = pixel.0;
    r > threshold && g > threshold && b > threshold
}

/// Makes near-white pixels fully transparent, leaving all others untouched.
///
/// Returns the number of pixels cleared.
pub fn clear_near_white(img: &mut RgbaImage, threshold: u8) -> usize {
    let mut cleared = 0;
    for pixel in img.pixels_mut() {
        if is_near_white(pixel, threshold) {
            *pixel = TRANSPARENT;
            cleared += 1;
        }
    }
    cleared
}
