//! Traffic Signal Recognition from a camera image
//!
//! Loads the configured image on every call and classifies the light color
//! with [`SignalClassifier`]. The file is opened and closed within the call.

use super::{Sensor, SensorError};
use crate::config::CameraSensorConfig;
use crate::types::{fields, SensorKind, SensorReading};
use crate::vision::{SignalClassifier, SignalDetection};
use image::RgbImage;
use rand::RngCore;
use std::path::Path;
use tracing::{info, warn};

pub struct TrafficCameraSensor {
    cfg: CameraSensorConfig,
    classifier: SignalClassifier,
}

impl TrafficCameraSensor {
    pub fn new(cfg: CameraSensorConfig) -> Self {
        let classifier = SignalClassifier::from_config(&cfg);
        Self { cfg, classifier }
    }

    pub fn image_path(&self) -> &Path {
        &self.cfg.image_path
    }

    fn load_image(&self) -> Result<RgbImage, SensorError> {
        let path = self.image_path();
        image::open(path)
            .map(|img| img.to_rgb8())
            .map_err(|source| SensorError::ImageLoad {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Run the classifier on the configured image.
    pub fn detect(&self) -> Result<SignalDetection, SensorError> {
        let image = self.load_image()?;
        Ok(self.classifier.classify(&image))
    }
}

impl Default for TrafficCameraSensor {
    fn default() -> Self {
        Self::new(CameraSensorConfig::default())
    }
}

impl Sensor for TrafficCameraSensor {
    fn name(&self) -> &str {
        "TrafficSignalRecognitionSensorCamera"
    }

    fn kind(&self) -> SensorKind {
        SensorKind::TrafficCamera
    }

    fn try_read(&self, _rng: &mut dyn RngCore) -> Result<SensorReading, SensorError> {
        info!(path = %self.image_path().display(), "Processing traffic recognition sensor data...");
        let detection = self.detect()?;

        match detection {
            SignalDetection::NoRegion => warn!("No traffic signal detected."),
            SignalDetection::BelowThreshold { area } => {
                warn!(area, threshold = self.cfg.min_region_area, "Largest color region too small");
            }
            SignalDetection::Unclassified { region } => {
                warn!(area = region.area, "Color region found but no signal color inside its bounds");
            }
            SignalDetection::Color { color, region } => {
                info!(
                    color = color.as_str(),
                    area = region.area,
                    pixels = region.pixels,
                    "Traffic signal classified"
                );
            }
        }

        Ok(SensorReading::empty().with(fields::TRAFFIC_SIGNAL, detection.reading_value()))
    }
}
