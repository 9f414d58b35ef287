#![allow(dead_code)]

use std::sync::Once;

use base64::{engine::general_purpose, Engine as _};

/// 1x1 PNG with a text chunk, so its base64 form is past the literal limit.
pub const PNG_1X1: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAIAAACQd1PeAAAAM3RFWHRDb21tZW50AHJlbmRlcmVkIGJ5IGEgc3BsYXNoIGluc3BlY3RvciB0ZXN0IGZpeHR1cmWJaKQtAAAADElEQVR4nGP4z8AAAAMBAQDJ/pLvAAAAAElFTkSuQmCC";

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(inspector_logging::initialize_for_tests);
}

pub fn png_bytes() -> Vec<u8> {
    general_purpose::STANDARD.decode(PNG_1X1).unwrap()
}

pub fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    let pixels = image::RgbImage::from_pixel(width, height, image::Rgb([200, 40, 40]));
    let mut bytes = Vec::new();
    image::codecs::jpeg::JpegEncoder::new(&mut bytes)
        .encode(pixels.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
    bytes
}

pub fn jpeg_base64(width: u32, height: u32) -> String {
    general_purpose::STANDARD.encode(jpeg_bytes(width, height))
}
