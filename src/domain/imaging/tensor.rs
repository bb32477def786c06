//! Image preprocessing into the classifier's fixed-size input tensor.

use image::imageops::FilterType;

use crate::domain::foundation::AssessmentError;

/// Side length of the square input in the reference model.
pub const DEFAULT_IMAGE_SIDE: u32 = 256;

/// Colour channels per pixel.
pub const IMAGE_CHANNELS: usize = 3;

/// RGB pixels scaled to [0, 1], laid out as `[1, side, side, 3]` (NHWC).
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedImageTensor {
    side: u32,
    data: Vec<f32>,
}

impl NormalizedImageTensor {
    /// Decodes an encoded image (PNG, JPEG, ...), converts it to RGB,
    /// resizes it to `side`×`side` and scales channels to [0, 1].
    pub fn from_encoded(bytes: &[u8], side: u32) -> Result<Self, AssessmentError> {
        if side == 0 {
            return Err(AssessmentError::InvalidImage(
                "target resolution must be non-zero".to_string(),
            ));
        }
        if bytes.is_empty() {
            return Err(AssessmentError::InvalidImage("no image data".to_string()));
        }

        let decoded = image::load_from_memory(bytes)
            .map_err(|e| AssessmentError::InvalidImage(format!("cannot decode image: {}", e)))?;
        if decoded.width() == 0 || decoded.height() == 0 {
            return Err(AssessmentError::InvalidImage("image has no pixels".to_string()));
        }

        let rgb = decoded.to_rgb8();
        let resized = image::imageops::resize(&rgb, side, side, FilterType::CatmullRom);
        let data = resized
            .into_raw()
            .into_iter()
            .map(|channel| f32::from(channel) / 255.0)
            .collect();

        Ok(Self { side, data })
    }

    /// Wraps already-normalized interleaved pixels.
    ///
    /// Fails unless the buffer is exactly `side × side × 3` values in [0, 1].
    pub fn from_normalized(side: u32, channels: usize, data: Vec<f32>) -> Result<Self, AssessmentError> {
        if channels != IMAGE_CHANNELS {
            return Err(AssessmentError::InvalidImage(format!(
                "expected {} colour channels, got {}",
                IMAGE_CHANNELS, channels
            )));
        }
        let expected = side as usize * side as usize * IMAGE_CHANNELS;
        if side == 0 || data.len() != expected {
            return Err(AssessmentError::InvalidImage(format!(
                "expected {} values for a {}x{} RGB image, got {}",
                expected,
                side,
                side,
                data.len()
            )));
        }
        if data.iter().any(|v| !v.is_finite() || !(0.0..=1.0).contains(v)) {
            return Err(AssessmentError::InvalidImage(
                "pixel values must be in [0, 1]".to_string(),
            ));
        }
        Ok(Self { side, data })
    }

    /// Side length in pixels.
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Tensor shape, batch first.
    pub fn shape(&self) -> [i64; 4] {
        [1, self.side as i64, self.side as i64, IMAGE_CHANNELS as i64]
    }

    /// Interleaved channel values.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}
