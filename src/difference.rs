//! Color difference.
//! <https://en.wikipedia.org/wiki/Color_difference#CIE76>

use crate::{
    color::{ColorValue, Component, Space},
    convert::{ConvertOptions, Converter},
    error::Result,
    models::Lab,
};

impl Lab {
    /// Calculate deltaE CIE 1976 (simple root sum of squares). Both colors
    /// are assumed to share a reference white.
    pub fn delta_e_cie1976(&self, other: &Lab) -> Component {
        let d = (
            self.lightness - other.lightness,
            self.a - other.a,
            self.b - other.b,
        );
        (d.0 * d.0 + d.1 * d.1 + d.2 * d.2).sqrt()
    }
}

impl Converter<'_> {
    /// Calculate deltaE CIE 1976 between two colors in any space. Delta is
    /// calculated in Lab, with `sample` adapted to the illuminant of
    /// `reference`.
    pub fn delta_e_cie1976(
        &self,
        reference: &ColorValue,
        sample: &ColorValue,
        options: &ConvertOptions,
    ) -> Result<Component> {
        let reference: Lab = self.convert(reference, Space::Lab, options)?.into_model()?;
        let sample: Lab = self
            .convert_under(
                sample,
                Space::Lab,
                reference.reference().illuminant(),
                options,
            )?
            .into_model()?;

        Ok(reference.delta_e_cie1976(&sample))
    }
}
