//! Models for CIE-Luv in its rectangular (Luv) and cylindrical (LCHuv) forms.

use crate::{
    color::{Component, Components},
    config::Config,
    error::{Error, Result},
    math::{hue_from_cartesian, CIE_E, CIE_K},
    models::xyz::Xyz,
    tags::Reference,
};

/// The u' v' chromaticity of tristimulus values, or `None` when the
/// denominator vanishes.
fn chromaticity(xyz: Components) -> Option<(Component, Component)> {
    let denominator = xyz.0 + 15.0 * xyz.1 + 3.0 * xyz.2;
    if denominator == 0.0 {
        None
    } else {
        Some((4.0 * xyz.0 / denominator, 9.0 * xyz.1 / denominator))
    }
}

colorpath_macros::gen_model! {
    /// A color in the CIE-Luv color space.
    pub struct Luv {
        /// The lightness component.
        lightness: Component,
        /// The u component.
        u: Component,
        /// The v component.
        v: Component,
        /// The observer and illuminant the channels are relative to.
        reference: Reference,
    }
}

reference_constructors!(Luv, lightness, u, v);

impl Luv {
    /// Convert this rectangular model into its cylindrical form.
    pub fn to_lch(&self) -> LchUv {
        let chroma = self.u.hypot(self.v);
        let hue = hue_from_cartesian(self.u, self.v);

        LchUv::with_reference(self.lightness, chroma, hue, self.reference)
    }

    /// Convert to tristimulus values relative to the same reference white.
    ///
    /// Zero or negative lightness is black.
    pub fn to_xyz(&self, config: &Config) -> Result<Xyz> {
        if self.lightness <= 0.0 {
            return Ok(Xyz::with_reference(0.0, 0.0, 0.0, self.reference));
        }

        let white = config.white_point(self.reference.observer(), self.reference.illuminant())?;
        let (white_u, white_v) =
            chromaticity(white).ok_or(Error::Domain("reference white has no u'v' chromaticity"))?;

        let f = (self.lightness + 16.0) / 116.0;
        let relative_y = if self.lightness > CIE_K * CIE_E {
            f * f * f
        } else {
            self.lightness / CIE_K
        };
        let y = relative_y * white.1;

        let u = self.u / (13.0 * self.lightness) + white_u;
        let v = self.v / (13.0 * self.lightness) + white_v;
        if v == 0.0 {
            return Err(Error::Domain("Luv value has v' = 0"));
        }

        let x = 9.0 * y * u / (4.0 * v);
        let z = y * (12.0 - 3.0 * u - 20.0 * v) / (4.0 * v);

        Ok(Xyz::with_reference(x, y, z, self.reference))
    }
}

impl Xyz {
    /// Convert to CIE-Luv relative to the same reference white.
    pub fn to_luv(&self, config: &Config) -> Result<Luv> {
        let reference = self.reference();
        let white = config.white_point(reference.observer(), reference.illuminant())?;

        let relative_y = self.y / white.1;
        let lightness = if relative_y > CIE_E {
            116.0 * relative_y.cbrt() - 16.0
        } else {
            CIE_K * relative_y
        };

        let (u, v) = match (chromaticity(Components(self.x, self.y, self.z)), chromaticity(white)) {
            (Some((u, v)), Some((white_u, white_v))) => (
                13.0 * lightness * (u - white_u),
                13.0 * lightness * (v - white_v),
            ),
            _ => (0.0, 0.0),
        };

        Ok(Luv::with_reference(lightness, u, v, reference))
    }
}

colorpath_macros::gen_model! {
    /// A color in the cylindrical form of CIE-Luv.
    pub struct LchUv {
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

reference_constructors!(LchUv, lightness, chroma, hue);

impl LchUv {
    /// Convert this cylindrical model into its rectangular form.
    pub fn to_luv(&self) -> Luv {
        let hue = self.hue.to_radians();
        let u = self.chroma * hue.cos();
        let v = self.chroma * hue.sin();

        Luv::with_reference(self.lightness, u, v, self.reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        assert_component_eq,
        tags::{Illuminant, Observer},
    };

    #[test]
    fn xyz_to_luv() {
        let luv = Xyz::new(0.2, 0.3, 0.4).to_luv(Config::standard()).unwrap();
        assert_component_eq!(luv.lightness, 61.65422220953167);
        assert_component_eq!(luv.u, -58.96417588177774);
        assert_component_eq!(luv.v, -24.402830962893272);

        let xyz = luv.to_xyz(Config::standard()).unwrap();
        assert_component_eq!(xyz.x, 0.2);
        assert_component_eq!(xyz.y, 0.3);
        assert_component_eq!(xyz.z, 0.4);
    }

    #[test]
    fn black_short_circuits_both_ways() {
        let luv = Xyz::new(0.0, 0.0, 0.0).to_luv(Config::standard()).unwrap();
        assert_eq!(luv.channels(), [0.0, 0.0, 0.0]);

        let xyz = Luv::new(0.0, 12.0, -7.0).to_xyz(Config::standard()).unwrap();
        assert_eq!(xyz.channels(), [0.0, 0.0, 0.0]);

        let xyz = Luv::new(-3.0, 0.0, 0.0).to_xyz(Config::standard()).unwrap();
        assert_eq!(xyz.channels(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn white_is_neutral() {
        let luv = Xyz::new(0.96422, 1.0, 0.82521).to_luv(Config::standard()).unwrap();
        assert_component_eq!(luv.lightness, 100.0);
        assert_component_eq!(luv.u, 0.0);
        assert_component_eq!(luv.v, 0.0);
    }

    #[test]
    fn collapsed_v_is_a_domain_error() {
        // A white with Y = 0 has v' = 0, so any neutral Luv collapses.
        let mut config = Config::builtin();
        config
            .white_points
            .get_mut(&Observer::Two)
            .unwrap()
            .insert(Illuminant::D50, [1.0, 0.0, 1.0]);

        let luv = Luv::new(50.0, 0.0, 0.0);
        assert!(matches!(luv.to_xyz(&config), Err(Error::Domain(_))));
    }

    #[test]
    fn luv_lch_round_trip() {
        let lch = Luv::new(40.0, -10.0, 10.0).to_lch();
        assert_component_eq!(lch.chroma, 200.0_f64.sqrt());
        assert_component_eq!(lch.hue, 135.0);

        let luv = lch.to_luv();
        assert_component_eq!(luv.u, -10.0);
        assert_component_eq!(luv.v, 10.0);
    }
}
