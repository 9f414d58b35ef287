use base64::{engine::general_purpose, Engine as _};
use inspector_core::{ImageDimensions, ImageFormat, ImageProbe, ProbeError};

/// Probes by fully decoding the pixel data with the `image` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct DecodingImageProbe;

impl ImageProbe for DecodingImageProbe {
    fn probe(&self, base64_data: &str, format: ImageFormat) -> Result<ImageDimensions, ProbeError> {
        let bytes = general_purpose::STANDARD
            .decode(base64_data.trim())
            .map_err(|err| ProbeError::new(format, format!("not base64: {err}")))?;
        let image = image::load_from_memory_with_format(&bytes, image_format(format))
            .map_err(|err| ProbeError::new(format, err.to_string()))?;
        Ok(ImageDimensions {
            width: image.width(),
            height: image.height(),
        })
    }
}

fn image_format(format: ImageFormat) -> image::ImageFormat {
    match format {
        ImageFormat::Png => image::ImageFormat::Png,
        ImageFormat::Jpeg => image::ImageFormat::Jpeg,
    }
}
