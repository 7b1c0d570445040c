use crate::error::AssessError;
use chrono::{DateTime, Utc};
use image::DynamicImage;
use std::path::Path;
use std::sync::Arc;
use uuid::Uuid;

/// A captured photograph handed to the analysis service.
///
/// The acquisition layer is expected to deliver an already decoded,
/// orientation-corrected bitmap; the frame only wraps it for cheap
/// sharing between the service and whatever consumes the assessment.
#[derive(Clone, Debug)]
pub struct Frame {
    frame_id: Uuid,
    image: Arc<DynamicImage>,
    captured_at: DateTime<Utc>,
}

impl Frame {
    pub fn new(image: DynamicImage) -> Self {
        Self {
            frame_id: Uuid::new_v4(),
            image: Arc::new(image),
            captured_at: Utc::now(),
        }
    }

    /// Decode an image file into a frame. Decode failures are the one
    /// error surface of the whole pipeline; everything downstream is
    /// total.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, AssessError> {
        let image = image::open(path.as_ref()).map_err(|source| AssessError::ImageRead {
            path: path.as_ref().display().to_string(),
            source,
        })?;
        Ok(Self::new(image))
    }

    pub fn frame_id(&self) -> Uuid {
        self.frame_id
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};

    #[test]
    fn cloning_frame_shares_image_buffer() {
        let img: DynamicImage = DynamicImage::ImageRgb8(
            ImageBuffer::<Rgb<u8>, Vec<u8>>::from_pixel(16, 16, Rgb([1, 2, 3])),
        );
        let f1 = Frame::new(img);
        let f2 = f1.clone();
        assert!(Arc::ptr_eq(&f1.image, &f2.image));
        assert_eq!(f1.frame_id(), f2.frame_id());
    }

    #[test]
    fn missing_file_reports_image_read_error() {
        let err = Frame::from_path("definitely/not/a/file.png").unwrap_err();
        assert!(matches!(err, AssessError::ImageRead { .. }));
    }
}
