use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, LinSrgb, Mix, Srgb};
use serde::{Serialize, Serializer};

// ---------------------------------------------------------------------------
// Rgb – serializable colour used by the view specifications
// ---------------------------------------------------------------------------

/// 8-bit sRGB colour. Serializes as a `#rrggbb` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const GRAY: Rgb = Rgb(160, 160, 160);

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    fn from_srgb(rgb: Srgb) -> Self {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Rgb(channel(rgb.red), channel(rgb.green), channel(rgb.blue))
    }

    fn to_linear(self) -> LinSrgb {
        Srgb::new(
            f32::from(self.0) / 255.0,
            f32::from(self.1) / 255.0,
            f32::from(self.2) / 255.0,
        )
        .into_linear()
    }
}

impl From<Rgb> for Color32 {
    fn from(c: Rgb) -> Self {
        Color32::from_rgb(c.0, c.1, c.2)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

// ---------------------------------------------------------------------------
// Categorical palette
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Rgb> {
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            Rgb::from_srgb(hsl.into_color())
        })
        .collect()
}

/// Maps each city to a distinct colour, stable across selections.
#[derive(Debug, Clone)]
pub struct CityColors {
    mapping: BTreeMap<String, Rgb>,
}

impl CityColors {
    /// Build the mapping over the full city option list.
    pub fn new(cities: &[String]) -> Self {
        let mapping = cities
            .iter()
            .cloned()
            .zip(generate_palette(cities.len()))
            .collect();
        CityColors { mapping }
    }

    pub fn color_for(&self, city: &str) -> Rgb {
        self.mapping.get(city).copied().unwrap_or(Rgb::GRAY)
    }
}

// ---------------------------------------------------------------------------
// Continuous scale
// ---------------------------------------------------------------------------

const VIRIDIS: [Rgb; 10] = [
    Rgb(0x44, 0x01, 0x54),
    Rgb(0x48, 0x28, 0x78),
    Rgb(0x3e, 0x49, 0x89),
    Rgb(0x31, 0x68, 0x8e),
    Rgb(0x26, 0x82, 0x8e),
    Rgb(0x1f, 0x9e, 0x89),
    Rgb(0x35, 0xb7, 0x79),
    Rgb(0x6e, 0xce, 0x58),
    Rgb(0xb5, 0xde, 0x2b),
    Rgb(0xfd, 0xe7, 0x25),
];

/// Sample the Viridis scale at `t` in `[0, 1]`, interpolating in linear RGB.
pub fn viridis(t: f64) -> Rgb {
    let last = VIRIDIS.len() - 1;
    if t.is_nan() || t <= 0.0 {
        return VIRIDIS[0];
    }
    if t >= 1.0 {
        return VIRIDIS[last];
    }
    let pos = t * last as f64;
    let idx = pos.floor() as usize;
    let frac = (pos - idx as f64) as f32;
    let mixed = VIRIDIS[idx].to_linear().mix(VIRIDIS[idx + 1].to_linear(), frac);
    Rgb::from_srgb(mixed.into_color())
}

/// Linear map from a value range onto the Viridis scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContinuousScale {
    pub min: f64,
    pub max: f64,
}

impl ContinuousScale {
    /// Span the given values; `None` when there are none.
    pub fn spanning(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values.into_iter().fold(None, |acc, v| {
            Some(match acc {
                None => ContinuousScale { min: v, max: v },
                Some(s) => ContinuousScale {
                    min: s.min.min(v),
                    max: s.max.max(v),
                },
            })
        })
    }

    /// Colour for `value`; a degenerate range maps to the scale midpoint.
    pub fn color_for(&self, value: f64) -> Rgb {
        let range = self.max - self.min;
        if range.abs() < f64::EPSILON {
            return viridis(0.5);
        }
        viridis((value - self.min) / range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size() {
        assert!(generate_palette(0).is_empty());
        let colors = generate_palette(6);
        assert_eq!(colors.len(), 6);
        assert_ne!(colors[0], colors[3]);
    }

    #[test]
    fn city_colors_fall_back_to_gray() {
        let colors = CityColors::new(&["Oslo".to_string(), "Lima".to_string()]);
        assert_ne!(colors.color_for("Oslo"), colors.color_for("Lima"));
        assert_eq!(colors.color_for("Atlantis"), Rgb::GRAY);
    }

    #[test]
    fn viridis_endpoints() {
        assert_eq!(viridis(0.0), Rgb(0x44, 0x01, 0x54));
        assert_eq!(viridis(1.0), Rgb(0xfd, 0xe7, 0x25));
        assert_eq!(viridis(-3.0), viridis(0.0));
        assert_eq!(viridis(f64::NAN), viridis(0.0));
    }

    #[test]
    fn scale_maps_range_onto_viridis() {
        let scale = ContinuousScale::spanning([75.0, 80.0, 77.0]).unwrap();
        assert_eq!(scale, ContinuousScale { min: 75.0, max: 80.0 });
        assert_eq!(scale.color_for(75.0), viridis(0.0));
        assert_eq!(scale.color_for(80.0), viridis(1.0));

        let flat = ContinuousScale::spanning([81.0]).unwrap();
        assert_eq!(flat.color_for(81.0), viridis(0.5));
        assert!(ContinuousScale::spanning(std::iter::empty()).is_none());
    }

    #[test]
    fn rgb_serializes_as_hex() {
        assert_eq!(
            serde_json::to_string(&Rgb(0x44, 0x01, 0x54)).unwrap(),
            "\"#440154\""
        );
    }
}
