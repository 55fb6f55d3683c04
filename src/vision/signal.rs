//! Traffic signal color classification from a single image.

use super::hsv::{HsvImage, HsvRange};
use super::mask::Mask;
use super::regions::{find_regions, Region};
use crate::config::CameraSensorConfig;
use crate::types::SignalColor;
use image::RgbImage;
use tracing::debug;

/// Outcome of classifying one image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SignalDetection {
    /// No pixel matched any color band.
    NoRegion,
    /// The largest region did not exceed the area threshold.
    BelowThreshold { area: f64 },
    /// A large region exists but no color mask is set inside its box.
    Unclassified { region: Region },
    Color { color: SignalColor, region: Region },
}

impl SignalDetection {
    /// Value reported in the `traffic_signal` reading field.
    ///
    /// `"none"` when nothing matched, `""` when a region was found but no
    /// color could be assigned.
    pub fn reading_value(&self) -> &'static str {
        match self {
            Self::NoRegion => "none",
            Self::BelowThreshold { .. } | Self::Unclassified { .. } => "",
            Self::Color { color, .. } => color.as_str(),
        }
    }

    pub fn color(&self) -> Option<SignalColor> {
        match self {
            Self::Color { color, .. } => Some(*color),
            _ => None,
        }
    }
}

/// HSV band set plus area threshold.
#[derive(Debug, Clone)]
pub struct SignalClassifier {
    pub red_low: HsvRange,
    pub red_high: HsvRange,
    pub green: HsvRange,
    pub yellow: HsvRange,
    pub min_region_area: f64,
}

impl Default for SignalClassifier {
    fn default() -> Self {
        Self::from_config(&CameraSensorConfig::default())
    }
}

impl SignalClassifier {
    pub fn from_config(cfg: &CameraSensorConfig) -> Self {
        Self {
            red_low: cfg.red_low,
            red_high: cfg.red_high,
            green: cfg.green,
            yellow: cfg.yellow,
            min_region_area: cfg.min_region_area,
        }
    }

    pub fn classify(&self, image: &RgbImage) -> SignalDetection {
        let hsv = HsvImage::from_rgb(image);

        let red = Mask::in_range(&hsv, &self.red_low).union(&Mask::in_range(&hsv, &self.red_high));
        let green = Mask::in_range(&hsv, &self.green);
        let yellow = Mask::in_range(&hsv, &self.yellow);
        let combined = red.union(&green).union(&yellow);

        let regions = find_regions(&combined);
        debug!(
            regions = regions.len(),
            red_px = red.count(),
            green_px = green.count(),
            yellow_px = yellow.count(),
            "Color masks built"
        );

        // Largest enclosed area; first region wins ties.
        let Some(largest) = regions
            .iter()
            .copied()
            .reduce(|best, r| if r.area > best.area { r } else { best })
        else {
            return SignalDetection::NoRegion;
        };

        if largest.area <= self.min_region_area {
            return SignalDetection::BelowThreshold { area: largest.area };
        }

        let bbox = &largest.bbox;
        let color = if red.any_in(bbox) {
            Some(SignalColor::Red)
        } else if green.any_in(bbox) {
            Some(SignalColor::Green)
        } else if yellow.any_in(bbox) {
            Some(SignalColor::Yellow)
        } else {
            None
        };

        match color {
            Some(color) => SignalDetection::Color {
                color,
                region: largest,
            },
            None => SignalDetection::Unclassified { region: largest },
        }
    }
}
