//! Model a color with the HSL notation in an RGB working space.

use crate::{
    color::Component,
    error::Result,
    models::rgb::Rgb,
    tags::RgbSpace,
};

colorpath_macros::gen_model! {
    /// A color specified with the HSL notation.
    pub struct Hsl {
        /// The hue component of the color, in degrees.
        hue: Component,
        /// The saturation component of the color.
        saturation: Component,
        /// The lightness component of the color.
        lightness: Component,
        /// The working space of the RGB color this notation describes.
        space: RgbSpace,
    }
}

rgb_space_constructors!(Hsl, hue, saturation, lightness);

/// One channel of the HSL to RGB mapping. `t` is the hue, shifted per
/// channel, as a fraction of a full turn.
fn hue_to_channel(p: Component, q: Component, t: Component) -> Component {
    let t = t.rem_euclid(1.0);

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * 6.0 * (2.0 / 3.0 - t)
    } else {
        p
    }
}

impl Hsl {
    /// Convert to RGB in `target`, or in this color's own working space.
    /// The channels are not transformed between working spaces.
    pub fn to_rgb(&self, target: Option<RgbSpace>) -> Rgb {
        let (saturation, lightness) = (self.saturation, self.lightness);
        let hue = self.hue / 360.0;

        let q = if lightness < 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let p = 2.0 * lightness - q;

        Rgb::with_space(
            hue_to_channel(p, q, hue + 1.0 / 3.0),
            hue_to_channel(p, q, hue),
            hue_to_channel(p, q, hue - 1.0 / 3.0),
            target.unwrap_or(self.space),
        )
    }
}

impl Rgb {
    /// Convert to the HSL notation in the same working space.
    pub fn to_hsl(&self) -> Hsl {
        let (hue, max, min) = self.hue_with_max_min();
        let lightness = (max + min) / 2.0;

        // 2L below the midpoint, 2 - 2L above it. Rounding noise around black
        // or white can leave it at 0 (or below) while max != min.
        let denominator = 1.0 - (2.0 * lightness - 1.0).abs();
        let saturation = if max == min || denominator <= 0.0 {
            0.0
        } else {
            (max - min) / denominator
        };

        Hsl::with_space(hue, saturation, lightness, self.space())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn primaries() {
        for (rgb, hue) in [
            (Rgb::new(1.0, 0.0, 0.0), 0.0),
            (Rgb::new(0.0, 1.0, 0.0), 120.0),
            (Rgb::new(0.0, 0.0, 1.0), 240.0),
        ] {
            let hsl = rgb.to_hsl();
            assert_eq!(hsl.hue, hue);
            assert_eq!(hsl.saturation, 1.0);
            assert_eq!(hsl.lightness, 0.5);
        }
    }

    #[test]
    fn achromatic_has_zero_hue_and_saturation() {
        for v in [0.0, 0.5, 1.0] {
            let hsl = Rgb::new(v, v, v).to_hsl();
            assert_eq!(hsl.hue, 0.0);
            assert_eq!(hsl.saturation, 0.0);
            assert_eq!(hsl.lightness, v);
        }
    }

    #[test]
    fn light_colors_use_the_upper_saturation_branch() {
        let hsl = Rgb::new(1.0, 0.8, 0.8).to_hsl();
        assert_component_eq!(hsl.lightness, 0.9);
        assert_component_eq!(hsl.saturation, 1.0);
    }

    #[test]
    fn noisy_white_and_black_stay_finite() {
        for rgb in [
            Rgb::new(1.0 + f64::EPSILON, 1.0, 1.0 - f64::EPSILON),
            Rgb::new(f64::EPSILON, 0.0, -f64::EPSILON),
        ] {
            let hsl = rgb.to_hsl();
            assert!(hsl.saturation.is_finite());

            let back = hsl.to_rgb(None);
            for (channel, expected) in back.channels().into_iter().zip(rgb.channels()) {
                assert!(channel.is_finite());
                assert_component_eq!(channel, expected);
            }
        }
    }

    #[test]
    fn hsl_to_rgb() {
        let rgb = Hsl::new(30.0, 1.0, 0.5).to_rgb(None);
        assert_component_eq!(rgb.red, 1.0);
        assert_component_eq!(rgb.green, 0.5);
        assert_component_eq!(rgb.blue, 0.0);

        let rgb = Hsl::new(210.0, 0.5, 0.75).to_rgb(None);
        assert_component_eq!(rgb.red, 0.625);
        assert_component_eq!(rgb.green, 0.75);
        assert_component_eq!(rgb.blue, 0.875);
    }

    #[test]
    fn hue_wraps_around() {
        let a = Hsl::new(-60.0, 1.0, 0.5).to_rgb(None);
        let b = Hsl::new(300.0, 1.0, 0.5).to_rgb(None);
        assert_component_eq!(a.red, b.red);
        assert_component_eq!(a.green, b.green);
        assert_component_eq!(a.blue, b.blue);
    }

    #[test]
    fn working_space_is_kept_or_retagged() {
        let hsl = Rgb::with_space(0.2, 0.4, 0.6, RgbSpace::AdobeRgb).to_hsl();
        assert_eq!(hsl.space(), RgbSpace::AdobeRgb);
        assert_eq!(hsl.to_rgb(None).space(), RgbSpace::AdobeRgb);
        assert_eq!(
            hsl.to_rgb(Some(RgbSpace::Rec2020)).space(),
            RgbSpace::Rec2020
        );
    }
}
