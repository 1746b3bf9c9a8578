//! Model a color with the HSV notation in an RGB working space.

use crate::{color::Component, error::Result, models::rgb::Rgb, tags::RgbSpace};

colorpath_macros::gen_model! {
    /// A color specified with the HSV notation.
    pub struct Hsv {
        /// The hue component of the color, in degrees.
        hue: Component,
        /// The saturation component of the color.
        saturation: Component,
        /// The value component of the color.
        value: Component,
        /// The working space of the RGB color this notation describes.
        space: RgbSpace,
    }
}

rgb_space_constructors!(Hsv, hue, saturation, value);

impl Hsv {
    /// Convert to RGB in `target`, or in this color's own working space.
    /// The channels are not transformed between working spaces.
    pub fn to_rgb(&self, target: Option<RgbSpace>) -> Rgb {
        let (saturation, value) = (self.saturation, self.value);

        let sector = (self.hue / 60.0).floor();
        let f = self.hue / 60.0 - sector;
        let p = value * (1.0 - saturation);
        let q = value * (1.0 - f * saturation);
        let t = value * (1.0 - (1.0 - f) * saturation);

        let (red, green, blue) = match (sector as i64).rem_euclid(6) {
            0 => (value, t, p),
            1 => (q, value, p),
            2 => (p, value, t),
            3 => (p, q, value),
            4 => (t, p, value),
            _ => (value, p, q),
        };

        Rgb::with_space(red, green, blue, target.unwrap_or(self.space))
    }
}

impl Rgb {
    /// Convert to the HSV notation in the same working space.
    pub fn to_hsv(&self) -> Hsv {
        let (hue, max, min) = self.hue_with_max_min();
        let saturation = if max == 0.0 { 0.0 } else { 1.0 - min / max };

        Hsv::with_space(hue, saturation, max, self.space())
    }
}
