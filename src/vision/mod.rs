//! Image analysis for the camera traffic-signal sensor
//!
//! ## Pipeline
//!
//! 1. **hsv**: RGB → HSV on the 8-bit scale (H 0-180, S/V 0-255)
//! 2. **mask**: per-color binary masks from inclusive HSV ranges
//! 3. **regions**: 8-connected regions over the union mask, with bounding boxes
//! 4. **signal**: largest region above the area threshold, colored by whichever
//!    mask is set inside its bounding box (red > green > yellow)

pub mod hsv;
pub mod mask;
pub mod regions;
pub mod signal;

pub use hsv::{rgb_to_hsv, Hsv, HsvImage, HsvRange};
pub use mask::Mask;
pub use regions::{find_regions, Rect, Region};
pub use signal::{SignalClassifier, SignalDetection};
