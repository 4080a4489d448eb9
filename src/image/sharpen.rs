//! Unsharp-mask sharpening for small icons.

use image::RgbaImage;
use imageproc::filter::gaussian_blur_f32;

/// Unsharp mask parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnsharpMask {
    /// Gaussian blur radius (sigma) in pixels.
    pub radius: f32,

    /// Strength of the sharpening, in percent of the detected difference.
    pub percent: u16,

    /// Minimum per-channel difference, in intensity levels, before a pixel is touched.
    pub threshold: u8,
}

impl Default for UnsharpMask {
    fn default() -> Self {
        Self {
            radius: 0.5,
            percent: 120,
            threshold: 2,
        }
    }
}

impl UnsharpMask {
    /// Sharpen the color channels of an image.
    ///
    /// Each channel is compared with a blurred copy of itself; where the
    /// difference reaches `threshold`, it is amplified by `percent`. Alpha is
    /// left as is. The sharpened value is `orig + diff * percent / 100`
    /// computed in floating point and rounded to the nearest level, so it can
    /// differ by one level from integer implementations that truncate.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn apply(&self, img: &RgbaImage) -> RgbaImage {
        let blurred = gaussian_blur_f32(img, self.radius);
        let amount = f32::from(self.percent) / 100.0;
        let threshold = u16::from(self.threshold);

        let mut out = img.clone();
        for (dst, blur) in out.pixels_mut().zip(blurred.pixels()) {
            for c in 0..3 {
                let diff = i16::from(dst[c]) - i16::from(blur[c]);
                if diff.unsigned_abs() < threshold {
                    continue;
                }
                // Safe: clamped to [0, 255] before casting
                dst[c] = f32::from(diff)
                    .mul_add(amount, f32::from(dst[c]))
                    .round()
                    .clamp(0.0, 255.0) as u8;
            }
        }

        out
    }
}
