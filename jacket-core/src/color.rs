//! Farbkonvertierung Framebuffer → LED-Kette
//!
//! Pure Functions ohne Hardware-Dependencies (testbar!)

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::RgbColor;
use rgb::RGB8;

/// Wandelt eine gepackte 5-6-5 Farbe in 8 Bit pro Kanal um
///
/// Die oberen Bits werden in die unteren wiederholt, damit volle Kanäle
/// auf 255 landen und 0 auf 0 bleibt.
///
/// # Beispiele
///
/// ```
/// # use embedded_graphics::pixelcolor::Rgb565;
/// # use embedded_graphics::prelude::RgbColor;
/// # use jacket_core::rgb565_to_rgb8;
/// # use rgb::RGB8;
/// assert_eq!(rgb565_to_rgb8(Rgb565::RED), RGB8 { r: 255, g: 0, b: 0 });
/// assert_eq!(rgb565_to_rgb8(Rgb565::new(16, 32, 16)), RGB8 { r: 132, g: 130, b: 132 });
/// ```
pub fn rgb565_to_rgb8(color: Rgb565) -> RGB8 {
    let (r, g, b) = (color.r(), color.g(), color.b());
    RGB8 {
        r: (r << 3) | (r >> 2),
        g: (g << 2) | (g >> 4),
        b: (b << 3) | (b >> 2),
    }
}
