//! HSV conversion on the 8-bit scale used by common vision toolkits:
//! hue halved into 0-180, saturation and value in 0-255.

use image::RgbImage;
use serde::{Deserialize, Serialize};

/// One HSV pixel, `[h, s, v]`.
pub type Hsv = [u8; 3];

/// Convert an RGB pixel to 8-bit HSV.
#[inline]
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let (rf, gf, bf) = (f32::from(r), f32::from(g), f32::from(b));
    let max = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let delta = max - min;

    let v = max;
    let s = if max > 0.0 { delta * 255.0 / max } else { 0.0 };

    let h_deg = if delta <= 0.0 {
        0.0
    } else if (max - rf).abs() < f32::EPSILON {
        60.0 * (gf - bf) / delta
    } else if (max - gf).abs() < f32::EPSILON {
        120.0 + 60.0 * (bf - rf) / delta
    } else {
        240.0 + 60.0 * (rf - gf) / delta
    };
    let h_deg = if h_deg < 0.0 { h_deg + 360.0 } else { h_deg };

    // All three are within 0..=255 here.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let hsv = [
        (h_deg / 2.0).round().min(180.0) as u8,
        s.round().min(255.0) as u8,
        v.round() as u8,
    ];
    hsv
}

/// An image converted to HSV, row-major.
#[derive(Debug, Clone)]
pub struct HsvImage {
    pub width: u32,
    pub height: u32,
    pixels: Vec<Hsv>,
}

impl HsvImage {
    pub fn from_rgb(image: &RgbImage) -> Self {
        let pixels = image
            .pixels()
            .map(|p| rgb_to_hsv(p[0], p[1], p[2]))
            .collect();
        Self {
            width: image.width(),
            height: image.height(),
            pixels,
        }
    }

    pub fn pixels(&self) -> &[Hsv] {
        &self.pixels
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Hsv> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y * self.width + x) as usize).copied()
    }
}

/// Inclusive HSV bounds, `lower <= pixel <= upper` on every channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HsvRange {
    pub lower: Hsv,
    pub upper: Hsv,
}

impl HsvRange {
    pub const fn new(lower: Hsv, upper: Hsv) -> Self {
        Self { lower, upper }
    }

    pub const fn from_bounds(bounds: (Hsv, Hsv)) -> Self {
        Self::new(bounds.0, bounds.1)
    }

    #[inline]
    pub fn contains(&self, px: Hsv) -> bool {
        (0..3).all(|i| self.lower[i] <= px[i] && px[i] <= self.upper[i])
    }

    /// Reject bounds that can never match or exceed the hue scale.
    pub fn check(&self) -> Result<(), String> {
        let max_hue = crate::config::defaults::HUE_MAX;
        if self.lower[0] > max_hue || self.upper[0] > max_hue {
            return Err(format!("hue bounds must be at most {max_hue}"));
        }
        for (i, channel) in ["hue", "saturation", "value"].iter().enumerate() {
            if self.lower[i] > self.upper[i] {
                return Err(format!(
                    "lower {channel} {} exceeds upper {channel} {}",
                    self.lower[i], self.upper[i]
                ));
            }
        }
        Ok(())
    }
}
