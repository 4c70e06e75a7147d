use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Species;

// ---------------------------------------------------------------------------
// Species colors
// ---------------------------------------------------------------------------

/// Convert an HSL hue (degrees) into an egui color.
fn hsl_color(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let hsl = Hsl::new(hue, saturation, lightness);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

/// Fixed color per species, used consistently across every panel.
pub fn species_color(species: Species) -> Color32 {
    match species {
        Species::Adelie => hsl_color(28.0, 0.90, 0.52),
        Species::Chinstrap => hsl_color(280.0, 0.55, 0.55),
        Species::Gentoo => hsl_color(175.0, 0.60, 0.40),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn species_colors_are_distinct() {
        let colors: Vec<Color32> = Species::ALL.into_iter().map(species_color).collect();
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert_ne!(colors[0], colors[2]);
    }
}
