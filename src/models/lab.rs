//! Models for CIE-Lab in its rectangular (Lab) and cylindrical (LCHab) forms.

use crate::{
    color::{Component, Components},
    config::Config,
    error::Result,
    math::{hue_from_cartesian, CIE_E, CIE_K},
    models::xyz::Xyz,
    tags::Reference,
};

colorpath_macros::gen_model! {
    /// A color in the CIE-Lab color space.
    pub struct Lab {
        /// The lightness component.
        lightness: Component,
        /// The a component (green to red).
        a: Component,
        /// The b component (blue to yellow).
        b: Component,
        /// The observer and illuminant the channels are relative to.
        reference: Reference,
    }
}

reference_constructors!(Lab, lightness, a, b);

impl Lab {
    /// Convert this rectangular model into its cylindrical form.
    pub fn to_lch(&self) -> LchAb {
        let chroma = self.a.hypot(self.b);
        let hue = hue_from_cartesian(self.a, self.b);

        LchAb::with_reference(self.lightness, chroma, hue, self.reference)
    }

    /// Convert to tristimulus values relative to the same reference white.
    pub fn to_xyz(&self, config: &Config) -> Result<Xyz> {
        let white = config.white_point(self.reference.observer(), self.reference.illuminant())?;

        // To avoid accessing the values through self all the time.
        let (lightness, a, b) = (self.lightness, self.a, self.b);

        let f1 = (lightness + 16.0) / 116.0;
        let f0 = f1 + a / 500.0;
        let f2 = f1 - b / 200.0;

        let f0_cubed = f0 * f0 * f0;
        let x = if f0_cubed > CIE_E {
            f0_cubed
        } else {
            (116.0 * f0 - 16.0) / CIE_K
        };

        let y = if lightness > CIE_K * CIE_E {
            f1 * f1 * f1
        } else {
            lightness / CIE_K
        };

        let f2_cubed = f2 * f2 * f2;
        let z = if f2_cubed > CIE_E {
            f2_cubed
        } else {
            (116.0 * f2 - 16.0) / CIE_K
        };

        Ok(Xyz::with_reference(
            x * white.0,
            y * white.1,
            z * white.2,
            self.reference,
        ))
    }
}

impl Xyz {
    /// Convert to CIE-Lab relative to the same reference white.
    pub fn to_lab(&self, config: &Config) -> Result<Lab> {
        let reference = self.reference();
        let white = config.white_point(reference.observer(), reference.illuminant())?;

        let relative = Components(self.x / white.0, self.y / white.1, self.z / white.2);
        let Components(f0, f1, f2) = relative.map(|v| {
            if v > CIE_E {
                v.cbrt()
            } else {
                (CIE_K * v + 16.0) / 116.0
            }
        });

        Ok(Lab::with_reference(
            116.0 * f1 - 16.0,
            500.0 * (f0 - f1),
            200.0 * (f1 - f2),
            reference,
        ))
    }
}

colorpath_macros::gen_model! {
    /// A color in the cylindrical form of CIE-Lab.
    pub struct LchAb {
        /// The lightness component.
        lightness: Component,
        /// The chroma component.
        chroma: Component,
        /// The hue angle in degrees, in `[0, 360)`.
        hue: Component,
        /// The observer and illuminant the channels are relative to.
        reference: Reference,
    }
}

reference_constructors!(LchAb, lightness, chroma, hue);

impl LchAb {
    /// Convert this cylindrical model into its rectangular form.
    pub fn to_lab(&self) -> Lab {
        let hue = self.hue.to_radians();
        let a = self.chroma * hue.cos();
        let b = self.chroma * hue.sin();

        Lab::with_reference(self.lightness, a, b, self.reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn lab_to_xyz() {
        let xyz = Lab::new(50.0, 20.0, -30.0).to_xyz(Config::standard()).unwrap();
        assert_component_eq!(xyz.x, 0.21774803245828536);
        assert_component_eq!(xyz.y, 0.18418651851244416);
        assert_component_eq!(xyz.z, 0.3066822680549121);
        assert_eq!(xyz.reference(), Reference::default());
    }

    #[test]
    fn dark_lab_uses_linear_branch() {
        let xyz = Lab::new(5.0, 0.0, 0.0).to_xyz(Config::standard()).unwrap();
        assert_component_eq!(xyz.y, 5.0 / CIE_K);

        let lab = xyz.to_lab(Config::standard()).unwrap();
        assert_component_eq!(lab.lightness, 5.0);
        assert_component_eq!(lab.a, 0.0);
        assert_component_eq!(lab.b, 0.0);
    }

    #[test]
    fn reference_white_is_l_100() {
        let reference = Reference::parse("10", "d65").unwrap();
        let white = Xyz::with_reference(0.9481, 1.0, 1.073, reference);
        let lab = white.to_lab(Config::standard()).unwrap();
        assert_component_eq!(lab.lightness, 100.0);
        assert_component_eq!(lab.a, 0.0);
        assert_component_eq!(lab.b, 0.0);
        assert_eq!(lab.reference(), reference);
    }

    #[test]
    fn lab_to_lch() {
        let lch = Lab::new(50.0, 20.0, -30.0).to_lch();
        assert_component_eq!(lch.lightness, 50.0);
        assert_component_eq!(lch.chroma, 36.05551275463989);
        assert_component_eq!(lch.hue, 303.69006752597977);

        let lab = lch.to_lab();
        assert_component_eq!(lab.a, 20.0);
        assert_component_eq!(lab.b, -30.0);
    }

    #[test]
    fn neutral_hue_is_zero_not_360() {
        let lch = Lab::new(50.0, 0.0, 0.0).to_lch();
        assert_eq!(lch.chroma, 0.0);
        assert_eq!(lch.hue, 0.0);

        let lch = Lab::new(50.0, 10.0, -0.0).to_lch();
        assert!(lch.hue < 360.0);
    }
}
