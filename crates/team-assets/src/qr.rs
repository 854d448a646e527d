//! QR codes linking to profile pages
//!
//! Symbol construction is delegated to the `qrcode` crate; this module only
//! decides the style and rasterises the module grid into a PNG with the
//! `image` crate.

use image::{ImageFormat, Rgb, RgbImage};
use qrcode::{Color, EcLevel, QrCode};
use std::path::Path;

/// Error-correction capability tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCorrection {
    /// ~7% recovery
    Low,
    /// ~15% recovery
    Medium,
    /// ~25% recovery
    Quartile,
    /// ~30% recovery
    High,
}

impl From<ErrorCorrection> for EcLevel {
    fn from(level: ErrorCorrection) -> Self {
        match level {
            ErrorCorrection::Low => EcLevel::L,
            ErrorCorrection::Medium => EcLevel::M,
            ErrorCorrection::Quartile => EcLevel::Q,
            ErrorCorrection::High => EcLevel::H,
        }
    }
}

/// Rendering parameters for a QR image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrStyle {
    pub error_correction: ErrorCorrection,
    /// Pixels per module side
    pub box_size: u32,
    /// Quiet zone width, in modules
    pub border: u32,
    /// Dark module colour
    pub foreground: [u8; 3],
    /// Light module and border colour
    pub background: [u8; 3],
}

impl Default for QrStyle {
    /// Business-card style: high error correction, navy on white
    fn default() -> Self {
        Self {
            error_correction: ErrorCorrection::High,
            box_size: 20,
            border: 2,
            foreground: [0x00, 0x30, 0x5B],
            background: [0xFF, 0xFF, 0xFF],
        }
    }
}

/// Encodes text as a QR image file
///
/// The seam between the orchestrator and the QR library. Implementations
/// overwrite `output` if it exists.
pub trait QrEncoder {
    /// Encode `data` and write the image to `output`
    ///
    /// # Errors
    /// Returns [`QrError`] if the data cannot be encoded or the image
    /// cannot be written.
    fn encode(&self, data: &str, style: &QrStyle, output: &Path) -> Result<(), QrError>;
}

impl<T: QrEncoder + ?Sized> QrEncoder for &T {
    fn encode(&self, data: &str, style: &QrStyle, output: &Path) -> Result<(), QrError> {
        (**self).encode(data, style, output)
    }
}

/// PNG output backed by the `qrcode` and `image` crates
#[derive(Debug, Clone, Copy, Default)]
pub struct PngQrEncoder;

impl PngQrEncoder {
    /// Create new encoder
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Build the bitmap without writing it
    ///
    /// Side length is `(modules + 2 * border) * box_size` pixels.
    ///
    /// # Errors
    /// - `QrError::InvalidStyle` for a zero box size or an oversized image
    /// - `QrError::Encode` if the data does not fit in any QR version
    pub fn rasterize(&self, data: &str, style: &QrStyle) -> Result<RgbImage, QrError> {
        if style.box_size == 0 {
            return Err(QrError::InvalidStyle("box size must be positive".to_string()));
        }

        let code = QrCode::with_error_correction_level(data.as_bytes(), style.error_correction.into())
            .map_err(|e| QrError::Encode(e.to_string()))?;
        let colors = code.to_colors();
        let modules = u32::try_from(code.width())
            .map_err(|_| QrError::InvalidStyle("symbol too wide".to_string()))?;

        let side = modules
            .checked_add(style.border.saturating_mul(2))
            .and_then(|m| m.checked_mul(style.box_size))
            .ok_or_else(|| QrError::InvalidStyle("image side overflows u32".to_string()))?;

        let dark = Rgb(style.foreground);
        let light = Rgb(style.background);
        let (border, box_size) = (style.border, style.box_size);

        Ok(RgbImage::from_fn(side, side, |x, y| {
            let (mx, my) = (x / box_size, y / box_size);
            let inside = (border..border + modules).contains(&mx)
                && (border..border + modules).contains(&my);
            if !inside {
                return light;
            }
            let index = ((my - border) * modules + (mx - border)) as usize;
            match colors[index] {
                Color::Dark => dark,
                Color::Light => light,
            }
        }))
    }
}

impl QrEncoder for PngQrEncoder {
    fn encode(&self, data: &str, style: &QrStyle, output: &Path) -> Result<(), QrError> {
        let image = self.rasterize(data, style)?;
        image.save_with_format(output, ImageFormat::Png)?;
        Ok(())
    }
}

/// QR generation errors
#[derive(Debug, thiserror::Error)]
pub enum QrError {
    /// Data rejected by the QR encoder
    #[error("encode failed: {0}")]
    Encode(String),

    /// Unusable rendering parameters
    #[error("invalid style: {0}")]
    InvalidStyle(String),

    /// PNG encoding or file write failed
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_matches_business_cards() {
        let style = QrStyle::default();
        assert_eq!(style.error_correction, ErrorCorrection::High);
        assert_eq!(style.box_size, 20);
        assert_eq!(style.border, 2);
        assert_eq!(style.foreground, [0x00, 0x30, 0x5B]);
        assert_eq!(style.background, [0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn error_correction_maps_to_qrcode_levels() {
        let levels: Vec<EcLevel> = [
            ErrorCorrection::Low,
            ErrorCorrection::Medium,
            ErrorCorrection::Quartile,
            ErrorCorrection::High,
        ]
        .into_iter()
        .map(EcLevel::from)
        .collect();
        assert_eq!(levels, vec![EcLevel::L, EcLevel::M, EcLevel::Q, EcLevel::H]);
    }

    #[test]
    fn lower_correction_needs_fewer_modules() {
        let url = "https://maplebridgelaw.com/team/zovig-kelesarian";
        let size = |error_correction| {
            let style = QrStyle {
                error_correction,
                ..QrStyle::default()
            };
            PngQrEncoder.rasterize(url, &style).unwrap().width()
        };
        assert!(size(ErrorCorrection::Low) <= size(ErrorCorrection::Medium));
        assert!(size(ErrorCorrection::Medium) <= size(ErrorCorrection::Quartile));
        assert!(size(ErrorCorrection::Low) < size(ErrorCorrection::High));
    }

    #[test]
    fn raster_has_border_and_finder_pattern() {
        let style = QrStyle::default();
        let url = "https://maplebridgelaw.com/team/jane-doe";
        let image = PngQrEncoder::new().rasterize(url, &style).unwrap();

        let modules = QrCode::with_error_correction_level(url, EcLevel::H)
            .unwrap()
            .width() as u32;
        assert_eq!(image.width(), (modules + 4) * 20);
        assert_eq!(image.width(), image.height());

        // Quiet zone is background
        assert_eq!(image.get_pixel(0, 0), &Rgb(style.background));
        assert_eq!(image.get_pixel(39, 39), &Rgb(style.background));
        // Top-left finder pattern starts dark
        assert_eq!(image.get_pixel(40, 40), &Rgb(style.foreground));
        assert_eq!(image.get_pixel(59, 59), &Rgb(style.foreground));
    }

    #[test]
    fn rasterize_is_deterministic() {
        let style = QrStyle::default();
        let a = PngQrEncoder.rasterize("https://example.com/team/a", &style).unwrap();
        let b = PngQrEncoder.rasterize("https://example.com/team/a", &style).unwrap();
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn zero_box_size_is_rejected() {
        let style = QrStyle {
            box_size: 0,
            ..QrStyle::default()
        };
        assert!(matches!(
            PngQrEncoder.rasterize("x", &style),
            Err(QrError::InvalidStyle(_))
        ));
    }

    #[test]
    fn oversized_data_is_an_encode_error() {
        let data = "x".repeat(4000);
        assert!(matches!(
            PngQrEncoder.rasterize(&data, &QrStyle::default()),
            Err(QrError::Encode(_))
        ));
    }
}
