//! Model a color in the CIE-XYZ and CIE-xyY color spaces.

use crate::{
    color::Component,
    config::Config,
    error::{Error, Result},
    tags::Reference,
};

colorpath_macros::gen_model! {
    /// A color in the CIE-XYZ color space.
    pub struct Xyz {
        /// The X component of the color.
        x: Component,
        /// The Y (luminance) component of the color.
        y: Component,
        /// The Z component of the color.
        z: Component,
        /// The observer and illuminant the channels are relative to.
        reference: Reference,
    }
}

reference_constructors!(Xyz, x, y, z);

impl Xyz {
    /// Project onto the chromaticity plane.
    ///
    /// Black has no chromaticity; it takes the chromaticity of its reference
    /// white so the luminance of 0 survives the trip back.
    pub fn to_xyy(&self, config: &Config) -> Result<XyY> {
        let sum = self.x + self.y + self.z;
        let (x, y) = if sum == 0.0 {
            let white = config.white_point(self.reference.observer(), self.reference.illuminant())?;
            let white_sum = white.0 + white.1 + white.2;
            (white.0 / white_sum, white.1 / white_sum)
        } else {
            (self.x / sum, self.y / sum)
        };

        Ok(XyY::with_reference(x, y, self.y, self.reference))
    }
}

colorpath_macros::gen_model! {
    /// A color as CIE-xy chromaticity plus luminance.
    pub struct XyY {
        /// The x chromaticity coordinate.
        x: Component,
        /// The y chromaticity coordinate.
        y: Component,
        /// The luminance, equal to XYZ's Y.
        luminance: Component,
        /// The observer and illuminant the channels are relative to.
        reference: Reference,
    }
}

reference_constructors!(XyY, x, y, luminance);

impl XyY {
    /// Reproject into tristimulus values.
    pub fn to_xyz(&self) -> Result<Xyz> {
        if self.y == 0.0 {
            return Err(Error::Domain("xyY with y = 0 has no XYZ representation"));
        }

        let scale = self.luminance / self.y;
        Ok(Xyz::with_reference(
            self.x * scale,
            self.luminance,
            (1.0 - self.x - self.y) * scale,
            self.reference,
        ))
    }
}
