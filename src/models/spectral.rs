//! Model a color by its spectral distribution.

use crate::{
    color::{ColorValue, Component, HasSpace, Space},
    error::{Error, Result},
    models::xyz::Xyz,
    spectral_tables::{self, SAMPLE_COUNT},
    tags::Reference,
};

/// A spectral reflectance or power distribution, sampled every 10nm from
/// 340nm to 830nm.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spectral {
    samples: [Component; SAMPLE_COUNT],
    reference: Reference,
}

impl Spectral {
    /// The number of samples.
    pub const CHANNELS: usize = SAMPLE_COUNT;

    /// Create a distribution from the samples at 340nm, 350nm, and so on.
    /// Samples not given are 0.0, i.e. no measured power.
    pub fn new(samples: &[Component]) -> Result<Self> {
        Self::with_reference(samples, Reference::default())
    }

    /// Same as [`Spectral::new`], relative to `reference`.
    pub fn with_reference(samples: &[Component], reference: Reference) -> Result<Self> {
        if samples.len() > SAMPLE_COUNT {
            return Err(Error::TooManySamples(samples.len()));
        }

        let mut all = [0.0; SAMPLE_COUNT];
        all[..samples.len()].copy_from_slice(samples);

        Ok(Self {
            samples: all,
            reference,
        })
    }

    /// Same as [`Spectral::new`], relative to observer and illuminant keys.
    ///
    /// Any known illuminant is accepted here, but only D50, D65, A and E have
    /// a tabulated power distribution. Integrating under any other illuminant
    /// needs an `illuminant_override` (see [`Spectral::to_xyz`]).
    pub fn try_new(samples: &[Component], observer: &str, illuminant: &str) -> Result<Self> {
        Self::with_reference(samples, Reference::parse(observer, illuminant)?)
    }

    /// Create a distribution from `(wavelength, value)` pairs. Wavelengths
    /// that are not given are 0.0.
    pub fn from_wavelengths(
        values: impl IntoIterator<Item = (u32, Component)>,
        reference: Reference,
    ) -> Result<Self> {
        let mut samples = [0.0; SAMPLE_COUNT];
        for (nm, value) in values {
            let index = spectral_tables::index_of(nm).ok_or(Error::InvalidWavelength(nm))?;
            samples[index] = value;
        }

        Ok(Self { samples, reference })
    }

    /// All samples, starting at 340nm.
    pub fn samples(&self) -> &[Component; SAMPLE_COUNT] {
        &self.samples
    }

    /// Return a copy with the samples replaced.
    pub fn with_samples(&self, samples: [Component; SAMPLE_COUNT]) -> Self {
        Self { samples, ..*self }
    }

    /// The sample at `nm`.
    pub fn sample(&self, nm: u32) -> Result<Component> {
        spectral_tables::index_of(nm)
            .map(|index| self.samples[index])
            .ok_or(Error::InvalidWavelength(nm))
    }

    /// Iterate over `(wavelength, value)` pairs.
    pub fn wavelengths(&self) -> impl Iterator<Item = (u32, Component)> + '_ {
        self.samples
            .iter()
            .enumerate()
            .map(|(index, value)| (spectral_tables::wavelength(index), *value))
    }

    /// The observer and illuminant the distribution is integrated against.
    pub fn reference(&self) -> Reference {
        self.reference
    }

    /// Integrate against the observer's color matching functions, weighted by
    /// the illuminant's power distribution and normalised so that a perfect
    /// reflector has Y = 1.
    ///
    /// `illuminant_override` replaces the tabulated distribution of the
    /// reference illuminant. Without one, an illuminant other than D50, D65, A
    /// or E is an [`Error::InvalidIlluminant`].
    pub fn to_xyz(&self, illuminant_override: Option<&[Component; SAMPLE_COUNT]>) -> Result<Xyz> {
        let illuminant = match illuminant_override {
            Some(spd) => *spd,
            None => spectral_tables::reference_illuminant(self.reference.illuminant()).ok_or_else(
                || Error::InvalidIlluminant(self.reference.illuminant().to_string()),
            )?,
        };
        let cmf = spectral_tables::color_matching(self.reference.observer());

        let (mut x, mut y, mut z, mut denominator) = (0.0, 0.0, 0.0, 0.0);
        for ((sample, power), [x_bar, y_bar, z_bar]) in
            self.samples.iter().zip(illuminant.iter()).zip(cmf.iter())
        {
            let weighted = sample * power;
            x += weighted * x_bar;
            y += weighted * y_bar;
            z += weighted * z_bar;
            denominator += power * y_bar;
        }

        if denominator == 0.0 {
            return Err(Error::Domain("illuminant has no power under the observer"));
        }

        Ok(Xyz::with_reference(
            x / denominator,
            y / denominator,
            z / denominator,
            self.reference,
        ))
    }
}

impl HasSpace for Spectral {
    const SPACE: Space = Space::Spectral;
}

impl From<Spectral> for ColorValue {
    fn from(value: Spectral) -> Self {
        Self::Spectral(value)
    }
}

impl TryFrom<ColorValue> for Spectral {
    type Error = Error;

    fn try_from(value: ColorValue) -> Result<Self> {
        match value {
            ColorValue::Spectral(model) => Ok(model),
            other => Err(Error::UnexpectedSpace {
                expected: Space::Spectral,
                found: other.space(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, config::Config, tags::Illuminant};

    #[test]
    fn missing_samples_are_zero() {
        let spectral = Spectral::new(&[0.1, 0.2]).unwrap();
        assert_eq!(spectral.sample(340).unwrap(), 0.1);
        assert_eq!(spectral.sample(350).unwrap(), 0.2);
        assert_eq!(spectral.sample(830).unwrap(), 0.0);
        assert_eq!(spectral.wavelengths().count(), 50);

        assert_eq!(
            Spectral::new(&[0.0; 51]),
            Err(Error::TooManySamples(51))
        );
        assert_eq!(spectral.sample(345), Err(Error::InvalidWavelength(345)));
    }

    #[test]
    fn from_wavelengths() {
        let spectral =
            Spectral::from_wavelengths([(500, 0.25), (700, 0.75)], Reference::default()).unwrap();
        assert_eq!(spectral.sample(500).unwrap(), 0.25);
        assert_eq!(spectral.sample(700).unwrap(), 0.75);
        assert_eq!(spectral.samples().iter().sum::<Component>(), 1.0);

        assert_eq!(
            Spectral::from_wavelengths([(900, 1.0)], Reference::default()),
            Err(Error::InvalidWavelength(900))
        );
    }

    #[test]
    fn perfect_reflector_has_unit_luminance() {
        for (observer, illuminant) in [("2", "d50"), ("2", "d65"), ("10", "a"), ("10", "e")] {
            let spectral = Spectral::try_new(&[1.0; 50], observer, illuminant).unwrap();
            let xyz = spectral.to_xyz(None).unwrap();
            assert_component_eq!(xyz.y, 1.0, epsilon = 1e-12);
            assert_eq!(xyz.reference(), spectral.reference());
        }
    }

    #[test]
    fn perfect_reflector_under_d65_is_near_the_white_point() {
        let reference = Reference::parse("2", "d65").unwrap();
        let xyz = Spectral::with_reference(&[1.0; 50], reference)
            .unwrap()
            .to_xyz(None)
            .unwrap();
        let white = Config::standard()
            .white_point(reference.observer(), Illuminant::D65)
            .unwrap();
        assert_component_eq!(xyz.x, white.0, epsilon = 1e-3);
        assert_component_eq!(xyz.z, white.2, epsilon = 1e-3);
    }

    #[test]
    fn untabulated_illuminant_is_rejected() {
        let spectral = Spectral::try_new(&[0.5; 50], "2", "f2").unwrap();
        assert_eq!(
            spectral.to_xyz(None),
            Err(Error::InvalidIlluminant("f2".to_string()))
        );
    }

    #[test]
    fn only_some_illuminants_are_tabulated() {
        let tabulated = [Illuminant::A, Illuminant::D50, Illuminant::D65, Illuminant::E];
        for illuminant in Illuminant::ALL {
            let reference = Reference::new(Default::default(), illuminant).unwrap();
            let spectral = Spectral::with_reference(&[1.0; 50], reference).unwrap();
            let xyz = spectral.to_xyz(None);
            if tabulated.contains(&illuminant) {
                assert!(xyz.is_ok());
            } else {
                assert_eq!(xyz, Err(Error::InvalidIlluminant(illuminant.to_string())));
                assert!(spectral.to_xyz(Some(&[100.0; SAMPLE_COUNT])).is_ok());
            }
        }
    }

    #[test]
    fn illuminant_override() {
        let spectral = Spectral::try_new(&[0.5; 50], "2", "f2").unwrap();
        let flat = [1.0; SAMPLE_COUNT];
        let xyz = spectral.to_xyz(Some(&flat)).unwrap();
        assert_component_eq!(xyz.y, 0.5, epsilon = 1e-12);

        let dark = [0.0; SAMPLE_COUNT];
        assert!(matches!(spectral.to_xyz(Some(&dark)), Err(Error::Domain(_))));
    }
}
