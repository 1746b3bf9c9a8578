//! Chromatic adaptation: re-express XYZ tristimulus values under another
//! reference illuminant.
//!
//! The adaptation is a von Kries style transform: convert to a cone response
//! space, scale each cone by the ratio of the two white points, convert back.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    color::Components,
    config::Config,
    error::{Error, Result},
    math::{transform, transform_3x3, Transform},
    models::Xyz,
    tags::{Illuminant, Observer},
};

#[rustfmt::skip]
const BRADFORD: Transform = transform_3x3(
     0.8951, -0.7502,  0.0389,
     0.2664,  1.7135, -0.0685,
    -0.1614,  0.0367,  1.0296,
);

#[rustfmt::skip]
const VON_KRIES: Transform = transform_3x3(
     0.40024, -0.22630, 0.0,
     0.70760,  1.16532, 0.0,
    -0.08081,  0.04570, 0.91822,
);

#[rustfmt::skip]
const XYZ_SCALING: Transform = transform_3x3(
    1.0, 0.0, 0.0,
    0.0, 1.0, 0.0,
    0.0, 0.0, 1.0,
);

/// The cone response model used to adapt between white points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Adaptation {
    /// The Bradford transform.
    #[default]
    Bradford,
    /// The von Kries (Hunt-Pointer-Estevez) transform.
    VonKries,
    /// Scale XYZ directly.
    XyzScaling,
}

impl Adaptation {
    fn cone_response(&self) -> &'static Transform {
        match self {
            Adaptation::Bradford => &BRADFORD,
            Adaptation::VonKries => &VON_KRIES,
            Adaptation::XyzScaling => &XYZ_SCALING,
        }
    }

    /// The key of the method.
    pub fn as_str(&self) -> &'static str {
        match self {
            Adaptation::Bradford => "bradford",
            Adaptation::VonKries => "von_kries",
            Adaptation::XyzScaling => "xyz_scaling",
        }
    }
}

impl fmt::Display for Adaptation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Adaptation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bradford" => Ok(Adaptation::Bradford),
            "von_kries" | "vonkries" => Ok(Adaptation::VonKries),
            "xyz_scaling" => Ok(Adaptation::XyzScaling),
            _ => Err(Error::InvalidAdaptation(s.to_string())),
        }
    }
}

/// Build the matrix taking XYZ relative to `source_white` to XYZ relative to
/// `target_white`.
pub fn adaptation_matrix(
    method: Adaptation,
    source_white: Components,
    target_white: Components,
) -> Result<Transform> {
    let cone = method.cone_response();
    let inverse = cone
        .inverse()
        .ok_or(Error::Domain("cone response matrix is singular"))?;

    let source = transform(cone, source_white);
    let target = transform(cone, target_white);
    if source.0 == 0.0 || source.1 == 0.0 || source.2 == 0.0 {
        return Err(Error::Domain("source white has a zero cone response"));
    }

    Ok(cone
        .then_scale(target.0 / source.0, target.1 / source.1, target.2 / source.2)
        .then(&inverse))
}

/// Adapt tristimulus values from one illuminant to another. Equal
/// illuminants return the input untouched.
pub fn apply_chromatic_adaptation(
    xyz: Components,
    observer: Observer,
    source: Illuminant,
    target: Illuminant,
    method: Adaptation,
    config: &Config,
) -> Result<Components> {
    if source == target {
        return Ok(xyz);
    }

    let matrix = adaptation_matrix(
        method,
        config.white_point(observer, source)?,
        config.white_point(observer, target)?,
    )?;

    trace!(%observer, %source, %target, %method, "chromatic adaptation");

    Ok(transform(&matrix, xyz))
}

impl Xyz {
    /// Return this color re-expressed under `target`.
    pub fn adapted(&self, config: &Config, target: Illuminant, method: Adaptation) -> Result<Xyz> {
        let reference = self.reference();
        if reference.illuminant() == target {
            return Ok(*self);
        }

        let Components(x, y, z) = apply_chromatic_adaptation(
            Components(self.x, self.y, self.z),
            reference.observer(),
            reference.illuminant(),
            target,
            method,
            config,
        )?;

        Ok(Xyz::with_reference(
            x,
            y,
            z,
            reference.with_illuminant(config, target)?,
        ))
    }

    /// Re-express this color under `target` in place, using the standard
    /// tables. The channels and the illuminant tag change together.
    pub fn apply_adaptation(&mut self, target: Illuminant, method: Adaptation) -> Result<()> {
        self.apply_adaptation_in(Config::standard(), target, method)
    }

    /// Same as [`Xyz::apply_adaptation`] with the tables in `config`. On
    /// error the color is left unchanged.
    pub fn apply_adaptation_in(
        &mut self,
        config: &Config,
        target: Illuminant,
        method: Adaptation,
    ) -> Result<()> {
        *self = self.adapted(config, target, method)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, color::Component, tags::Reference};

    fn white_ratio(method: Adaptation, source: Components, target: Components) -> [Component; 3] {
        let cone = method.cone_response();
        let s = transform(cone, source);
        let t = transform(cone, target);
        [t.0 / s.0, t.1 / s.1, t.2 / s.2]
    }

    #[test]
    fn parse_methods() {
        assert_eq!("bradford".parse::<Adaptation>().unwrap(), Adaptation::Bradford);
        assert_eq!("von_kries".parse::<Adaptation>().unwrap(), Adaptation::VonKries);
        assert_eq!("XYZ_SCALING".parse::<Adaptation>().unwrap(), Adaptation::XyzScaling);
        assert!(matches!(
            "cat02".parse::<Adaptation>(),
            Err(Error::InvalidAdaptation(_))
        ));
    }

    #[test]
    fn maps_source_white_onto_target_white() {
        let config = Config::standard();
        let d65 = config.white_point(Observer::Two, Illuminant::D65).unwrap();
        let d50 = config.white_point(Observer::Two, Illuminant::D50).unwrap();

        for method in [Adaptation::Bradford, Adaptation::VonKries, Adaptation::XyzScaling] {
            let white = apply_chromatic_adaptation(
                d65,
                Observer::Two,
                Illuminant::D65,
                Illuminant::D50,
                method,
                config,
            )
            .unwrap();
            assert_component_eq!(white.0, d50.0, epsilon = 1e-9);
            assert_component_eq!(white.1, d50.1, epsilon = 1e-9);
            assert_component_eq!(white.2, d50.2, epsilon = 1e-9);
        }
    }

    #[test]
    fn xyz_scaling_scales_channels() {
        let ratio = white_ratio(
            Adaptation::XyzScaling,
            Components(0.5, 1.0, 2.0),
            Components(1.0, 1.0, 1.0),
        );
        assert_eq!(ratio, [2.0, 1.0, 0.5]);

        let m = adaptation_matrix(
            Adaptation::XyzScaling,
            Components(0.5, 1.0, 2.0),
            Components(1.0, 1.0, 1.0),
        )
        .unwrap();
        let v = transform(&m, Components(0.25, 0.5, 1.0));
        assert_component_eq!(v.0, 0.5);
        assert_component_eq!(v.1, 0.5);
        assert_component_eq!(v.2, 0.5);
    }

    #[test]
    fn zero_white_is_a_domain_error() {
        assert!(matches!(
            adaptation_matrix(
                Adaptation::XyzScaling,
                Components(0.0, 1.0, 1.0),
                Components(1.0, 1.0, 1.0),
            ),
            Err(Error::Domain(_))
        ));
    }

    #[test]
    fn same_illuminant_is_bit_identical() {
        let reference = Reference::parse("2", "d65").unwrap();
        let mut xyz = Xyz::with_reference(0.123456789, 0.2, 0.987654321, reference);
        let before = xyz;
        xyz.apply_adaptation(Illuminant::D65, Adaptation::Bradford).unwrap();
        assert_eq!(xyz, before);

        let free = apply_chromatic_adaptation(
            Components(0.123456789, 0.2, 0.987654321),
            Observer::Two,
            Illuminant::D65,
            Illuminant::D65,
            Adaptation::VonKries,
            Config::standard(),
        )
        .unwrap();
        assert_eq!(free, Components(0.123456789, 0.2, 0.987654321));
    }

    #[test]
    fn in_place_adaptation_updates_tag_and_channels() {
        let reference = Reference::parse("2", "d65").unwrap();
        let mut xyz = Xyz::with_reference(0.95047, 1.0, 1.08883, reference);
        xyz.apply_adaptation(Illuminant::D50, Adaptation::Bradford).unwrap();

        assert_eq!(xyz.reference().illuminant(), Illuminant::D50);
        assert_component_eq!(xyz.x, 0.96422);
        assert_component_eq!(xyz.y, 1.0);
        assert_component_eq!(xyz.z, 0.82521);

        let back = xyz
            .adapted(Config::standard(), Illuminant::D65, Adaptation::Bradford)
            .unwrap();
        assert_component_eq!(back.x, 0.95047);
        assert_component_eq!(back.z, 1.08883);
    }

    #[test]
    fn failed_adaptation_leaves_value_unchanged() {
        let mut config = Config::builtin();
        config
            .white_points
            .get_mut(&Observer::Two)
            .unwrap()
            .remove(&Illuminant::F11);

        let mut xyz = Xyz::new(0.2, 0.3, 0.4);
        let before = xyz;
        assert!(matches!(
            xyz.apply_adaptation_in(&config, Illuminant::F11, Adaptation::Bradford),
            Err(Error::InvalidIlluminant(_))
        ));
        assert_eq!(xyz, before);
    }
}
