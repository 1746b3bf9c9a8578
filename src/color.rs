//! A [`ColorValue`] holds a color specified in any of the supported color
//! spaces, tagged with the space it is in.

use std::fmt;

use crate::{
    error::{Error, Result},
    models::{Cmy, Cmyk, Hsl, Hsv, Lab, LchAb, LchUv, Luv, Rgb, Spectral, XyY, Xyz},
    tags::{Reference, RgbSpace},
};

/// A 64-bit floating point value that all channels are stored as.
pub type Component = f64;

/// Three channels of a color, used for the matrix and per-channel math.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

impl From<[Component; 3]> for Components {
    fn from([c0, c1, c2]: [Component; 3]) -> Self {
        Self(c0, c1, c2)
    }
}

impl From<Components> for [Component; 3] {
    fn from(value: Components) -> Self {
        [value.0, value.1, value.2]
    }
}

/// The color spaces known to the conversion graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Space {
    /// Spectral reflectance/power sampled every 10nm from 340nm to 830nm.
    Spectral = 0,
    /// CIE L*a*b*.
    Lab = 1,
    /// The cylindrical form of CIE L*a*b*.
    LchAb = 2,
    /// The cylindrical form of CIE L*u*v*.
    LchUv = 3,
    /// CIE L*u*v*.
    Luv = 4,
    /// CIE XYZ tristimulus values.
    Xyz = 5,
    /// CIE xyY chromaticity and luminance.
    XyY = 6,
    /// Gamma encoded device RGB in a working space.
    Rgb = 7,
    /// Hue, saturation, lightness.
    Hsl = 8,
    /// Hue, saturation, value.
    Hsv = 9,
    /// Cyan, magenta, yellow.
    Cmy = 10,
    /// Cyan, magenta, yellow, key.
    Cmyk = 11,
}

impl Space {
    /// The number of spaces.
    pub const COUNT: usize = 12;

    /// Every space, ordered by discriminant.
    pub const ALL: [Space; Self::COUNT] = [
        Space::Spectral,
        Space::Lab,
        Space::LchAb,
        Space::LchUv,
        Space::Luv,
        Space::Xyz,
        Space::XyY,
        Space::Rgb,
        Space::Hsl,
        Space::Hsv,
        Space::Cmy,
        Space::Cmyk,
    ];

    /// Position of the space in [`Space::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// A short name for the space.
    pub fn as_str(&self) -> &'static str {
        match self {
            Space::Spectral => "Spectral",
            Space::Lab => "Lab",
            Space::LchAb => "LCHab",
            Space::LchUv => "LCHuv",
            Space::Luv => "Luv",
            Space::Xyz => "XYZ",
            Space::XyY => "xyY",
            Space::Rgb => "RGB",
            Space::Hsl => "HSL",
            Space::Hsv => "HSV",
            Space::Cmy => "CMY",
            Space::Cmyk => "CMYK",
        }
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Implemented by every model to name the [`Space`] it lives in.
pub trait HasSpace {
    /// The space of the model.
    const SPACE: Space;
}

/// A color in any of the supported spaces.
#[derive(Clone, Debug, PartialEq)]
#[allow(missing_docs)]
pub enum ColorValue {
    Spectral(Spectral),
    Lab(Lab),
    LchAb(LchAb),
    LchUv(LchUv),
    Luv(Luv),
    Xyz(Xyz),
    XyY(XyY),
    Rgb(Rgb),
    Hsl(Hsl),
    Hsv(Hsv),
    Cmy(Cmy),
    Cmyk(Cmyk),
}

impl ColorValue {
    /// The space this value is in.
    pub fn space(&self) -> Space {
        match self {
            ColorValue::Spectral(_) => Space::Spectral,
            ColorValue::Lab(_) => Space::Lab,
            ColorValue::LchAb(_) => Space::LchAb,
            ColorValue::LchUv(_) => Space::LchUv,
            ColorValue::Luv(_) => Space::Luv,
            ColorValue::Xyz(_) => Space::Xyz,
            ColorValue::XyY(_) => Space::XyY,
            ColorValue::Rgb(_) => Space::Rgb,
            ColorValue::Hsl(_) => Space::Hsl,
            ColorValue::Hsv(_) => Space::Hsv,
            ColorValue::Cmy(_) => Space::Cmy,
            ColorValue::Cmyk(_) => Space::Cmyk,
        }
    }

    /// The channels of the value in declaration order.
    pub fn channels(&self) -> Vec<Component> {
        match self {
            ColorValue::Spectral(c) => c.samples().to_vec(),
            ColorValue::Lab(c) => c.channels().to_vec(),
            ColorValue::LchAb(c) => c.channels().to_vec(),
            ColorValue::LchUv(c) => c.channels().to_vec(),
            ColorValue::Luv(c) => c.channels().to_vec(),
            ColorValue::Xyz(c) => c.channels().to_vec(),
            ColorValue::XyY(c) => c.channels().to_vec(),
            ColorValue::Rgb(c) => c.channels().to_vec(),
            ColorValue::Hsl(c) => c.channels().to_vec(),
            ColorValue::Hsv(c) => c.channels().to_vec(),
            ColorValue::Cmy(c) => c.channels().to_vec(),
            ColorValue::Cmyk(c) => c.channels().to_vec(),
        }
    }

    /// Return a copy of the value with its channels replaced, keeping its
    /// space and tags.
    pub fn with_channels(&self, channels: &[Component]) -> Result<Self> {
        fn exact<const N: usize>(channels: &[Component]) -> Result<[Component; N]> {
            channels.try_into().map_err(|_| Error::ChannelCount {
                expected: N,
                found: channels.len(),
            })
        }

        Ok(match self {
            ColorValue::Spectral(c) => ColorValue::Spectral(c.with_samples(exact(channels)?)),
            ColorValue::Lab(c) => ColorValue::Lab(c.with_channels(exact(channels)?)),
            ColorValue::LchAb(c) => ColorValue::LchAb(c.with_channels(exact(channels)?)),
            ColorValue::LchUv(c) => ColorValue::LchUv(c.with_channels(exact(channels)?)),
            ColorValue::Luv(c) => ColorValue::Luv(c.with_channels(exact(channels)?)),
            ColorValue::Xyz(c) => ColorValue::Xyz(c.with_channels(exact(channels)?)),
            ColorValue::XyY(c) => ColorValue::XyY(c.with_channels(exact(channels)?)),
            ColorValue::Rgb(c) => ColorValue::Rgb(c.with_channels(exact(channels)?)),
            ColorValue::Hsl(c) => ColorValue::Hsl(c.with_channels(exact(channels)?)),
            ColorValue::Hsv(c) => ColorValue::Hsv(c.with_channels(exact(channels)?)),
            ColorValue::Cmy(c) => ColorValue::Cmy(c.with_channels(exact(channels)?)),
            ColorValue::Cmyk(c) => ColorValue::Cmyk(c.with_channels(exact(channels)?)),
        })
    }

    /// The observer and illuminant of CIE-family values.
    pub fn reference(&self) -> Option<Reference> {
        match self {
            ColorValue::Spectral(c) => Some(c.reference()),
            ColorValue::Lab(c) => Some(c.reference()),
            ColorValue::LchAb(c) => Some(c.reference()),
            ColorValue::LchUv(c) => Some(c.reference()),
            ColorValue::Luv(c) => Some(c.reference()),
            ColorValue::Xyz(c) => Some(c.reference()),
            ColorValue::XyY(c) => Some(c.reference()),
            _ => None,
        }
    }

    /// The working space of RGB-family values.
    pub fn rgb_space(&self) -> Option<RgbSpace> {
        match self {
            ColorValue::Rgb(c) => Some(c.space()),
            ColorValue::Hsl(c) => Some(c.space()),
            ColorValue::Hsv(c) => Some(c.space()),
            _ => None,
        }
    }

    /// Unwrap the value as the given model.
    pub fn into_model<T>(self) -> Result<T>
    where
        T: TryFrom<ColorValue, Error = Error>,
    {
        T::try_from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::{Illuminant, Observer};

    #[test]
    fn space_indices_follow_all() {
        for (i, space) in Space::ALL.iter().enumerate() {
            assert_eq!(space.index(), i);
        }
    }

    #[test]
    fn value_reports_space_and_tags() {
        let reference = Reference::new(Observer::Ten, Illuminant::D65).unwrap();
        let value = ColorValue::from(Lab::with_reference(50.0, 10.0, -10.0, reference));
        assert_eq!(value.space(), Space::Lab);
        assert_eq!(value.channels(), vec![50.0, 10.0, -10.0]);
        assert_eq!(value.reference(), Some(reference));
        assert_eq!(value.rgb_space(), None);

        let value = ColorValue::from(Hsv::with_space(120.0, 0.5, 0.5, RgbSpace::AdobeRgb));
        assert_eq!(value.reference(), None);
        assert_eq!(value.rgb_space(), Some(RgbSpace::AdobeRgb));
    }

    #[test]
    fn with_channels_keeps_tags() {
        let value = ColorValue::from(Rgb::with_space(0.1, 0.2, 0.3, RgbSpace::DisplayP3));
        let changed = value.with_channels(&[0.4, 0.5, 0.6]).unwrap();
        assert_eq!(
            changed,
            ColorValue::Rgb(Rgb::with_space(0.4, 0.5, 0.6, RgbSpace::DisplayP3))
        );

        assert_eq!(
            value.with_channels(&[0.4, 0.5]),
            Err(Error::ChannelCount {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn into_model_checks_space() {
        let value = ColorValue::from(Cmy::new(0.1, 0.2, 0.3));
        assert_eq!(value.clone().into_model::<Cmy>().unwrap(), Cmy::new(0.1, 0.2, 0.3));
        assert_eq!(
            value.into_model::<Cmyk>(),
            Err(Error::UnexpectedSpace {
                expected: Space::Cmyk,
                found: Space::Cmy
            })
        );
    }
}
