//! Rendering configuration loading and management
//!
//! Only the QR raster is configurable. The barcode text itself is fixed by
//! the wire format and has no knobs.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Largest raster side accepted by the renderer, in pixels
pub const MAX_DIMENSION: u32 = 16_384;

/// QR error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCorrection {
    /// ~7% recovery
    #[default]
    Low,
    /// ~15% recovery
    Medium,
    /// ~25% recovery
    Quartile,
    /// ~30% recovery
    High,
}

impl From<ErrorCorrection> for qr_code::EcLevel {
    fn from(level: ErrorCorrection) -> Self {
        match level {
            ErrorCorrection::Low => qr_code::EcLevel::L,
            ErrorCorrection::Medium => qr_code::EcLevel::M,
            ErrorCorrection::Quartile => qr_code::EcLevel::Q,
            ErrorCorrection::High => qr_code::EcLevel::H,
        }
    }
}

/// How barcode text is turned into a raster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RenderConfig {
    /// Requested raster width in pixels
    #[validate(range(max = 16384))]
    pub width: u32,

    /// Requested raster height in pixels
    #[validate(range(max = 16384))]
    pub height: u32,

    /// Light border around the code, in modules
    #[validate(range(max = 64))]
    pub quiet_zone: u32,

    pub ec_level: ErrorCorrection,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 300,
            height: 300,
            quiet_zone: 4,
            ec_level: ErrorCorrection::Low,
        }
    }
}

impl RenderConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    ///
    /// Missing keys fall back to [`RenderConfig::default`].
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Same settings, different raster size
    pub fn with_size(&self, width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.width, 300);
        assert_eq!(config.height, 300);
        assert_eq!(config.quiet_zone, 4);
        assert_eq!(config.ec_level, ErrorCorrection::Low);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = RenderConfig::from_yaml_str("width: 600\nec_level: quartile\n").unwrap();
        assert_eq!(config.width, 600);
        assert_eq!(config.height, 300);
        assert_eq!(config.ec_level, ErrorCorrection::Quartile);
    }

    #[test]
    fn test_oversized_dimension_is_rejected() {
        let result = RenderConfig::from_yaml_str("width: 20000\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_ec_level_is_rejected() {
        assert!(RenderConfig::from_yaml_str("ec_level: extreme\n").is_err());
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "height: 120\nquiet_zone: 2").unwrap();

        let config = RenderConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.height, 120);
        assert_eq!(config.quiet_zone, 2);
    }

    #[test]
    fn test_with_size_keeps_other_settings() {
        let config = RenderConfig {
            ec_level: ErrorCorrection::High,
            ..RenderConfig::default()
        };
        let resized = config.with_size(50, 60);
        assert_eq!((resized.width, resized.height), (50, 60));
        assert_eq!(resized.ec_level, ErrorCorrection::High);
    }

    #[test]
    fn test_error_correction_conversion() {
        assert_eq!(qr_code::EcLevel::from(ErrorCorrection::Low), qr_code::EcLevel::L);
        assert_eq!(qr_code::EcLevel::from(ErrorCorrection::High), qr_code::EcLevel::H);
    }
}
