use eframe::egui::Color32;
use palette::Srgb;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown colour {0:?} (expected a CSS colour name or #rrggbb)")]
pub struct ColorError(String);

// ---------------------------------------------------------------------------
// Colour spec → Color32
// ---------------------------------------------------------------------------

/// Parse a bar colour given as an SVG/CSS name (`blue`, `darkorange`) or a
/// hex code (`#1f77b4`, `1f77b4`, `#fff`).
pub fn parse_color(spec: &str) -> Result<Color32, ColorError> {
    let spec = spec.trim();
    let lowered = spec.to_ascii_lowercase();

    let rgb: Srgb<u8> = match palette::named::from_str(&lowered) {
        Some(named) => named,
        None => spec
            .parse::<Srgb<u8>>()
            .map_err(|_| ColorError(spec.to_string()))?,
    };

    Ok(Color32::from_rgb(rgb.red, rgb.green, rgb.blue))
}
