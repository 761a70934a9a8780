//! QR Code rendering of barcode text
//!
//! The text is handed to the QR encoder verbatim. The raster follows the
//! usual QR writer layout: a quiet zone of light modules around the code, an
//! integer scale per module, and the code centred in an image at least as
//! large as requested.

use crate::config::{MAX_DIMENSION, RenderConfig};
use crate::core::error::RenderError;
use qr_code::QrCode;
use validator::Validate;

/// Monochrome raster of a QR Code, row-major, `true` for dark pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarcodeImage {
    width: u32,
    height: u32,
    module_count: u32,
    scale: u32,
    pixels: Vec<bool>,
}

impl BarcodeImage {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Modules per side of the QR symbol, quiet zone excluded
    pub fn module_count(&self) -> u32 {
        self.module_count
    }

    /// Pixels per module
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Whether the pixel at (`x`, `y`) is dark. Out of range reads as light.
    pub fn is_dark(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.pixels[(y * self.width + x) as usize]
    }

    pub fn pixels(&self) -> &[bool] {
        &self.pixels
    }

    /// Row-major 8-bit luma buffer, 0 for dark and 255 for light
    pub fn to_luma8(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .map(|&dark| if dark { 0 } else { 255 })
            .collect()
    }
}

fn check_config(config: &RenderConfig) -> Result<(), RenderError> {
    config.validate().map_err(|e| RenderError::InvalidConfig {
        message: e.to_string(),
    })
}

fn encode_qr(text: &str, config: &RenderConfig) -> Result<QrCode, RenderError> {
    check_config(config)?;
    QrCode::with_error_correction_level(text.as_bytes(), config.ec_level.into()).map_err(|e| {
        RenderError::QrEncoding {
            message: e.to_string(),
        }
    })
}

/// Render `text` as a QR raster of at least `width` x `height` pixels
pub fn render_barcode(
    text: &str,
    width: u32,
    height: u32,
    config: &RenderConfig,
) -> Result<BarcodeImage, RenderError> {
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(RenderError::InvalidDimensions { width, height });
    }

    let code = encode_qr(text, config)?;
    let module_count = code.width() as u32;
    let modules = code.to_vec();

    let invalid = || RenderError::InvalidDimensions { width, height };
    let full = config
        .quiet_zone
        .checked_mul(2)
        .and_then(|border| border.checked_add(module_count))
        .ok_or_else(invalid)?;
    let out_width = width.max(full);
    let out_height = height.max(full);
    let area = out_width.checked_mul(out_height).ok_or_else(invalid)?;
    let scale = (out_width / full).min(out_height / full);
    let left = (out_width - module_count * scale) / 2;
    let top = (out_height - module_count * scale) / 2;

    let mut pixels = vec![false; area as usize];
    for (index, _) in modules.iter().enumerate().filter(|(_, dark)| **dark) {
        let mx = index as u32 % module_count;
        let my = index as u32 / module_count;
        for y in top + my * scale..top + (my + 1) * scale {
            let row = (y * out_width) as usize;
            let start = row + (left + mx * scale) as usize;
            pixels[start..start + scale as usize].fill(true);
        }
    }

    Ok(BarcodeImage {
        width: out_width,
        height: out_height,
        module_count,
        scale,
        pixels,
    })
}

/// Render `text` as terminal block art, useful for logs and CLIs
pub fn render_text(text: &str, config: &RenderConfig) -> Result<String, RenderError> {
    let code = encode_qr(text, config)?;
    Ok(code.to_string(true, config.quiet_zone.min(u8::MAX as u32) as u8))
}
