use num_traits::Float;

use crate::{
    color::{ColorValue, Component, Space},
    convert::{ConvertOptions, Converter},
    error::Result,
};

fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

impl Converter<'_> {
    /// Linearly interpolate from `left` to `right` in `space`, using `t` as
    /// the progress between them.
    ///
    /// Every channel is mixed, hues included, without taking the shorter
    /// arc. The result carries the tags of `left`. When both are CIE-family
    /// values, `right` is adapted to the illuminant of `left` first. When both
    /// are RGB-family values, `right` is re-encoded in the working space of
    /// `left` first.
    pub fn interpolate(
        &self,
        left: &ColorValue,
        right: &ColorValue,
        t: Component,
        space: Space,
        options: &ConvertOptions,
    ) -> Result<ColorValue> {
        let left = self.convert(left, space, options)?;
        let mut right = self.convert(right, space, options)?;

        if let (Some(l), Some(r)) = (left.reference(), right.reference()) {
            if l.illuminant() != r.illuminant() {
                right = self.convert_under(&right, space, l.illuminant(), options)?;
            }
        }

        if let (Some(l), Some(r)) = (left.rgb_space(), right.rgb_space()) {
            if l != r {
                // Decode `right` in its own working space, encode it in ours.
                let own = ConvertOptions {
                    target_rgb: None,
                    ..options.clone()
                };
                let xyz = self.convert(&right, Space::Xyz, &own)?;
                right = self.convert(&xyz, space, &options.clone().with_target_rgb(l))?;
            }
        }

        let channels: Vec<Component> = left
            .channels()
            .into_iter()
            .zip(right.channels())
            .map(|(a, b)| lerp(a, b, t))
            .collect();

        left.with_channels(&channels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        assert_component_eq,
        models::{Lab, Rgb, Spectral},
        tags::{Illuminant, Observer, Reference, RgbSpace},
    };

    #[test]
    fn basic() {
        let left = ColorValue::from(Rgb::new(0.1, 0.2, 0.3));
        let right = ColorValue::from(Rgb::new(0.5, 0.6, 0.7));
        let mixed: Rgb = Converter::standard()
            .interpolate(&left, &right, 0.5, Space::Rgb, &ConvertOptions::default())
            .unwrap()
            .into_model()
            .unwrap();
        assert_component_eq!(mixed.red, 0.3);
        assert_component_eq!(mixed.green, 0.4);
        assert_component_eq!(mixed.blue, 0.5);
        assert_eq!(mixed.space(), RgbSpace::Srgb);
    }

    #[test]
    fn endpoints_are_the_inputs() {
        let converter = Converter::standard();
        let options = ConvertOptions::default();
        let left = ColorValue::from(Rgb::new(1.0, 0.0, 0.0));
        let right = ColorValue::from(Rgb::new(0.0, 0.0, 1.0));

        for (t, expected) in [(0.0, &left), (1.0, &right)] {
            let mixed = converter
                .interpolate(&left, &right, t, Space::Lab, &options)
                .unwrap();
            assert_eq!(mixed.space(), Space::Lab);

            let expected = converter.convert(expected, Space::Lab, &options).unwrap();
            for (a, b) in mixed.channels().iter().zip(expected.channels()) {
                assert_component_eq!(*a, b);
            }
        }
    }

    #[test]
    fn right_is_adapted_to_the_left_illuminant() {
        let converter = Converter::standard();
        let options = ConvertOptions::default();

        let d50 = ColorValue::from(Lab::new(60.0, 20.0, -10.0));
        let d65 = converter
            .convert_under(&d50, Space::Lab, Illuminant::D65, &options)
            .unwrap();
        assert_ne!(d65.channels(), d50.channels());

        // The same color under two illuminants mixes to itself.
        let mixed = converter
            .interpolate(&d50, &d65, 0.5, Space::Lab, &options)
            .unwrap();
        assert_eq!(mixed.reference(), d50.reference());
        for (a, b) in mixed.channels().iter().zip(d50.channels()) {
            assert_component_eq!(*a, b);
        }
    }

    #[test]
    fn right_is_reencoded_in_the_left_working_space() {
        let converter = Converter::standard();
        let options = ConvertOptions::default();

        let red = ColorValue::from(Rgb::new(1.0, 0.0, 0.0));
        let xyz = converter.convert(&red, Space::Xyz, &options).unwrap();
        let wide = converter
            .convert(
                &xyz,
                Space::Rgb,
                &ConvertOptions::default().with_target_rgb(RgbSpace::Rec2020),
            )
            .unwrap();
        assert_eq!(wide.rgb_space(), Some(RgbSpace::Rec2020));

        // The same color in two working spaces mixes to itself.
        for t in [0.5, 1.0] {
            let mixed: Rgb = converter
                .interpolate(&red, &wide, t, Space::Rgb, &options)
                .unwrap()
                .into_model()
                .unwrap();
            assert_eq!(mixed.space(), RgbSpace::Srgb);
            assert_component_eq!(mixed.red, 1.0);
            assert_component_eq!(mixed.green, 0.0);
            assert_component_eq!(mixed.blue, 0.0);
        }
    }

    #[test]
    fn spectral_samples_are_mixed() {
        let reference = Reference::new(Observer::Two, Illuminant::D65).unwrap();
        let left = ColorValue::from(Spectral::with_reference(&[0.2; 50], reference).unwrap());
        let right = ColorValue::from(Spectral::with_reference(&[0.6; 50], reference).unwrap());

        let mixed: Spectral = Converter::standard()
            .interpolate(&left, &right, 0.25, Space::Spectral, &ConvertOptions::default())
            .unwrap()
            .into_model()
            .unwrap();
        for (_, value) in mixed.wavelengths() {
            assert_component_eq!(value, 0.3);
        }
    }
}
