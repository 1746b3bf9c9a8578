//! Conversions between any two spaces are routed through a fixed graph of
//! elementary conversions, see [`Edge`]. The route for every ordered pair of
//! spaces is precomputed in a table, so converting is a lookup followed by a
//! fold over the edges.
//!
//! ```rust
//! use colorpath::{convert_color, ColorValue, ConvertOptions, Lab, Rgb, Space};
//!
//! let gray = ColorValue::from(Lab::new(50.0, 0.0, 0.0));
//! let rgb: Rgb = convert_color(&gray, Space::Rgb, &ConvertOptions::default())
//!     .unwrap()
//!     .into_model()
//!     .unwrap();
//! assert_eq!(rgb.to_hex(), "#777777");
//! ```

use tracing::{debug, trace};

use crate::{
    adaptation::Adaptation,
    color::{ColorValue, Component, HasSpace, Space},
    config::Config,
    error::{Error, Result},
    models::Xyz,
    spectral_tables::SAMPLE_COUNT,
    tags::{Illuminant, RgbSpace},
};

/// An elementary conversion between two adjacent spaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Edge {
    SpectralToXyz,
    LabToXyz,
    XyzToLab,
    LabToLchAb,
    LchAbToLab,
    LuvToXyz,
    XyzToLuv,
    LuvToLchUv,
    LchUvToLuv,
    XyYToXyz,
    XyzToXyY,
    XyzToRgb,
    RgbToXyz,
    RgbToHsl,
    HslToRgb,
    RgbToHsv,
    HsvToRgb,
    RgbToCmy,
    CmyToRgb,
    CmyToCmyk,
    CmykToCmy,
}

impl Edge {
    /// The space the edge converts from.
    pub fn source(&self) -> Space {
        use Edge as E;
        use Space as S;

        match self {
            E::SpectralToXyz => S::Spectral,
            E::LabToXyz | E::LabToLchAb => S::Lab,
            E::LchAbToLab => S::LchAb,
            E::LuvToXyz | E::LuvToLchUv => S::Luv,
            E::LchUvToLuv => S::LchUv,
            E::XyYToXyz => S::XyY,
            E::XyzToLab | E::XyzToLuv | E::XyzToXyY | E::XyzToRgb => S::Xyz,
            E::RgbToXyz | E::RgbToHsl | E::RgbToHsv | E::RgbToCmy => S::Rgb,
            E::HslToRgb => S::Hsl,
            E::HsvToRgb => S::Hsv,
            E::CmyToRgb | E::CmyToCmyk => S::Cmy,
            E::CmykToCmy => S::Cmyk,
        }
    }

    /// The space the edge converts to.
    pub fn destination(&self) -> Space {
        use Edge as E;
        use Space as S;

        match self {
            E::SpectralToXyz | E::LabToXyz | E::LuvToXyz | E::XyYToXyz | E::RgbToXyz => S::Xyz,
            E::XyzToLab | E::LchAbToLab => S::Lab,
            E::LabToLchAb => S::LchAb,
            E::XyzToLuv | E::LchUvToLuv => S::Luv,
            E::LuvToLchUv => S::LchUv,
            E::XyzToXyY => S::XyY,
            E::XyzToRgb | E::HslToRgb | E::HsvToRgb | E::CmyToRgb => S::Rgb,
            E::RgbToHsl => S::Hsl,
            E::RgbToHsv => S::Hsv,
            E::RgbToCmy | E::CmykToCmy => S::Cmy,
            E::CmyToCmyk => S::Cmyk,
        }
    }

    /// A name like `"Lab->XYZ"`, for logging.
    pub fn name(&self) -> String {
        format!("{}->{}", self.source(), self.destination())
    }

    /// Run the conversion on `value`, which must be in [`Edge::source`].
    pub fn apply(
        &self,
        value: &ColorValue,
        config: &Config,
        options: &ConvertOptions,
    ) -> Result<ColorValue> {
        use ColorValue as V;
        use Edge as E;

        let method = options.adaptation;

        Ok(match (self, value) {
            (E::SpectralToXyz, V::Spectral(c)) => {
                c.to_xyz(options.illuminant_override.as_ref())?.into()
            }
            (E::LabToXyz, V::Lab(c)) => c.to_xyz(config)?.into(),
            (E::XyzToLab, V::Xyz(c)) => c.to_lab(config)?.into(),
            (E::LabToLchAb, V::Lab(c)) => c.to_lch().into(),
            (E::LchAbToLab, V::LchAb(c)) => c.to_lab().into(),
            (E::LuvToXyz, V::Luv(c)) => c.to_xyz(config)?.into(),
            (E::XyzToLuv, V::Xyz(c)) => c.to_luv(config)?.into(),
            (E::LuvToLchUv, V::Luv(c)) => c.to_lch().into(),
            (E::LchUvToLuv, V::LchUv(c)) => c.to_luv().into(),
            (E::XyYToXyz, V::XyY(c)) => c.to_xyz()?.into(),
            (E::XyzToXyY, V::Xyz(c)) => c.to_xyy(config)?.into(),
            (E::XyzToRgb, V::Xyz(c)) => c
                .to_rgb(config, options.target_rgb.unwrap_or_default(), method)?
                .into(),
            (E::RgbToXyz, V::Rgb(c)) => c.to_xyz(config, options.target_illuminant, method)?.into(),
            (E::RgbToHsl, V::Rgb(c)) => c.to_hsl().into(),
            (E::HslToRgb, V::Hsl(c)) => c.to_rgb(options.target_rgb).into(),
            (E::RgbToHsv, V::Rgb(c)) => c.to_hsv().into(),
            (E::HsvToRgb, V::Hsv(c)) => c.to_rgb(options.target_rgb).into(),
            (E::RgbToCmy, V::Rgb(c)) => c.to_cmy().into(),
            (E::CmyToRgb, V::Cmy(c)) => c.to_rgb(options.target_rgb).into(),
            (E::CmyToCmyk, V::Cmy(c)) => c.to_cmyk().into(),
            (E::CmykToCmy, V::Cmyk(c)) => c.to_cmy().into(),
            (edge, value) => {
                return Err(Error::UnexpectedSpace {
                    expected: edge.source(),
                    found: value.space(),
                })
            }
        })
    }
}

macro_rules! path {
    () => {
        Some(&[] as &[Edge])
    };
    ($($edge:ident),+) => {
        Some(&[$(Edge::$edge),+] as &[Edge])
    };
}

const NO_PATH: Option<&[Edge]> = None;

/// The route for every ordered pair of spaces, indexed by
/// `[source.index()][destination.index()]`. Columns follow [`Space::ALL`].
static PATHS: [[Option<&[Edge]>; Space::COUNT]; Space::COUNT] = [
    // From Spectral.
    [
        path![],
        path![SpectralToXyz, XyzToLab],
        path![SpectralToXyz, XyzToLab, LabToLchAb],
        path![SpectralToXyz, XyzToLuv, LuvToLchUv],
        path![SpectralToXyz, XyzToLuv],
        path![SpectralToXyz],
        path![SpectralToXyz, XyzToXyY],
        path![SpectralToXyz, XyzToRgb],
        path![SpectralToXyz, XyzToRgb, RgbToHsl],
        path![SpectralToXyz, XyzToRgb, RgbToHsv],
        path![SpectralToXyz, XyzToRgb, RgbToCmy],
        path![SpectralToXyz, XyzToRgb, RgbToCmy, CmyToCmyk],
    ],
    // From Lab.
    [
        NO_PATH,
        path![],
        path![LabToLchAb],
        path![LabToXyz, XyzToLuv, LuvToLchUv],
        path![LabToXyz, XyzToLuv],
        path![LabToXyz],
        path![LabToXyz, XyzToXyY],
        path![LabToXyz, XyzToRgb],
        path![LabToXyz, XyzToRgb, RgbToHsl],
        path![LabToXyz, XyzToRgb, RgbToHsv],
        path![LabToXyz, XyzToRgb, RgbToCmy],
        path![LabToXyz, XyzToRgb, RgbToCmy, CmyToCmyk],
    ],
    // From LCHab.
    [
        NO_PATH,
        path![LchAbToLab],
        path![],
        path![LchAbToLab, LabToXyz, XyzToLuv, LuvToLchUv],
        path![LchAbToLab, LabToXyz, XyzToLuv],
        path![LchAbToLab, LabToXyz],
        path![LchAbToLab, LabToXyz, XyzToXyY],
        path![LchAbToLab, LabToXyz, XyzToRgb],
        path![LchAbToLab, LabToXyz, XyzToRgb, RgbToHsl],
        path![LchAbToLab, LabToXyz, XyzToRgb, RgbToHsv],
        path![LchAbToLab, LabToXyz, XyzToRgb, RgbToCmy],
        path![LchAbToLab, LabToXyz, XyzToRgb, RgbToCmy, CmyToCmyk],
    ],
    // From LCHuv.
    [
        NO_PATH,
        path![LchUvToLuv, LuvToXyz, XyzToLab],
        path![LchUvToLuv, LuvToXyz, XyzToLab, LabToLchAb],
        path![],
        path![LchUvToLuv],
        path![LchUvToLuv, LuvToXyz],
        path![LchUvToLuv, LuvToXyz, XyzToXyY],
        path![LchUvToLuv, LuvToXyz, XyzToRgb],
        path![LchUvToLuv, LuvToXyz, XyzToRgb, RgbToHsl],
        path![LchUvToLuv, LuvToXyz, XyzToRgb, RgbToHsv],
        path![LchUvToLuv, LuvToXyz, XyzToRgb, RgbToCmy],
        path![LchUvToLuv, LuvToXyz, XyzToRgb, RgbToCmy, CmyToCmyk],
    ],
    // From Luv.
    [
        NO_PATH,
        path![LuvToXyz, XyzToLab],
        path![LuvToXyz, XyzToLab, LabToLchAb],
        path![LuvToLchUv],
        path![],
        path![LuvToXyz],
        path![LuvToXyz, XyzToXyY],
        path![LuvToXyz, XyzToRgb],
        path![LuvToXyz, XyzToRgb, RgbToHsl],
        path![LuvToXyz, XyzToRgb, RgbToHsv],
        path![LuvToXyz, XyzToRgb, RgbToCmy],
        path![LuvToXyz, XyzToRgb, RgbToCmy, CmyToCmyk],
    ],
    // From XYZ.
    [
        NO_PATH,
        path![XyzToLab],
        path![XyzToLab, LabToLchAb],
        path![XyzToLuv, LuvToLchUv],
        path![XyzToLuv],
        path![],
        path![XyzToXyY],
        path![XyzToRgb],
        path![XyzToRgb, RgbToHsl],
        path![XyzToRgb, RgbToHsv],
        path![XyzToRgb, RgbToCmy],
        path![XyzToRgb, RgbToCmy, CmyToCmyk],
    ],
    // From xyY.
    [
        NO_PATH,
        path![XyYToXyz, XyzToLab],
        path![XyYToXyz, XyzToLab, LabToLchAb],
        path![XyYToXyz, XyzToLuv, LuvToLchUv],
        path![XyYToXyz, XyzToLuv],
        path![XyYToXyz],
        path![],
        path![XyYToXyz, XyzToRgb],
        path![XyYToXyz, XyzToRgb, RgbToHsl],
        path![XyYToXyz, XyzToRgb, RgbToHsv],
        path![XyYToXyz, XyzToRgb, RgbToCmy],
        path![XyYToXyz, XyzToRgb, RgbToCmy, CmyToCmyk],
    ],
    // From RGB.
    [
        NO_PATH,
        path![RgbToXyz, XyzToLab],
        path![RgbToXyz, XyzToLab, LabToLchAb],
        path![RgbToXyz, XyzToLuv, LuvToLchUv],
        path![RgbToXyz, XyzToLuv],
        path![RgbToXyz],
        path![RgbToXyz, XyzToXyY],
        path![],
        path![RgbToHsl],
        path![RgbToHsv],
        path![RgbToCmy],
        path![RgbToCmy, CmyToCmyk],
    ],
    // From HSL.
    [
        NO_PATH,
        path![HslToRgb, RgbToXyz, XyzToLab],
        path![HslToRgb, RgbToXyz, XyzToLab, LabToLchAb],
        path![HslToRgb, RgbToXyz, XyzToLuv, LuvToLchUv],
        path![HslToRgb, RgbToXyz, XyzToLuv],
        path![HslToRgb, RgbToXyz],
        path![HslToRgb, RgbToXyz, XyzToXyY],
        path![HslToRgb],
        path![],
        path![HslToRgb, RgbToHsv],
        path![HslToRgb, RgbToCmy],
        path![HslToRgb, RgbToCmy, CmyToCmyk],
    ],
    // From HSV.
    [
        NO_PATH,
        path![HsvToRgb, RgbToXyz, XyzToLab],
        path![HsvToRgb, RgbToXyz, XyzToLab, LabToLchAb],
        path![HsvToRgb, RgbToXyz, XyzToLuv, LuvToLchUv],
        path![HsvToRgb, RgbToXyz, XyzToLuv],
        path![HsvToRgb, RgbToXyz],
        path![HsvToRgb, RgbToXyz, XyzToXyY],
        path![HsvToRgb],
        path![HsvToRgb, RgbToHsl],
        path![],
        path![HsvToRgb, RgbToCmy],
        path![HsvToRgb, RgbToCmy, CmyToCmyk],
    ],
    // From CMY.
    [
        NO_PATH,
        path![CmyToRgb, RgbToXyz, XyzToLab],
        path![CmyToRgb, RgbToXyz, XyzToLab, LabToLchAb],
        path![CmyToRgb, RgbToXyz, XyzToLuv, LuvToLchUv],
        path![CmyToRgb, RgbToXyz, XyzToLuv],
        path![CmyToRgb, RgbToXyz],
        path![CmyToRgb, RgbToXyz, XyzToXyY],
        path![CmyToRgb],
        path![CmyToRgb, RgbToHsl],
        path![CmyToRgb, RgbToHsv],
        path![],
        path![CmyToCmyk],
    ],
    // From CMYK.
    [
        NO_PATH,
        path![CmykToCmy, CmyToRgb, RgbToXyz, XyzToLab],
        path![CmykToCmy, CmyToRgb, RgbToXyz, XyzToLab, LabToLchAb],
        path![CmykToCmy, CmyToRgb, RgbToXyz, XyzToLuv, LuvToLchUv],
        path![CmykToCmy, CmyToRgb, RgbToXyz, XyzToLuv],
        path![CmykToCmy, CmyToRgb, RgbToXyz],
        path![CmykToCmy, CmyToRgb, RgbToXyz, XyzToXyY],
        path![CmykToCmy, CmyToRgb],
        path![CmykToCmy, CmyToRgb, RgbToHsl],
        path![CmykToCmy, CmyToRgb, RgbToHsv],
        path![CmykToCmy],
        path![],
    ],
];

/// The edges that convert `source` into `destination`. Converting a space to
/// itself takes no edges.
pub fn conversion_path(source: Space, destination: Space) -> Result<&'static [Edge]> {
    PATHS[source.index()][destination.index()].ok_or(Error::UndefinedConversion {
        from: source,
        to: destination,
    })
}

/// Parameters that are passed to the edges that consume them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConvertOptions {
    /// The working space for XYZ, HSL, HSV and CMY to RGB. XYZ and CMY
    /// default to sRGB, HSL and HSV keep their own working space.
    pub target_rgb: Option<RgbSpace>,
    /// The illuminant XYZ converted from RGB is expressed in. Defaults to the
    /// working space's native illuminant.
    pub target_illuminant: Option<Illuminant>,
    /// The method for every chromatic adaptation along the way.
    pub adaptation: Adaptation,
    /// A power distribution used instead of the reference illuminant's when
    /// integrating spectral data.
    pub illuminant_override: Option<[Component; SAMPLE_COUNT]>,
}

impl ConvertOptions {
    /// Set the target RGB working space.
    pub fn with_target_rgb(mut self, space: RgbSpace) -> Self {
        self.target_rgb = Some(space);
        self
    }

    /// Set the illuminant for XYZ produced from RGB.
    pub fn with_target_illuminant(mut self, illuminant: Illuminant) -> Self {
        self.target_illuminant = Some(illuminant);
        self
    }

    /// Set the chromatic adaptation method.
    pub fn with_adaptation(mut self, adaptation: Adaptation) -> Self {
        self.adaptation = adaptation;
        self
    }

    /// Set the illuminant power distribution for spectral integration.
    pub fn with_illuminant_override(mut self, spd: [Component; SAMPLE_COUNT]) -> Self {
        self.illuminant_override = Some(spd);
        self
    }
}

/// Converts colors using the white points and working spaces of a
/// [`Config`].
#[derive(Clone, Copy, Debug)]
pub struct Converter<'c> {
    config: &'c Config,
}

impl Converter<'static> {
    /// A converter over [`Config::standard`].
    pub fn standard() -> Self {
        Self::new(Config::standard())
    }
}

impl<'c> Converter<'c> {
    /// A converter over a custom configuration.
    pub fn new(config: &'c Config) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &'c Config {
        self.config
    }

    /// Convert `value` into `destination`. The input is never modified.
    pub fn convert(
        &self,
        value: &ColorValue,
        destination: Space,
        options: &ConvertOptions,
    ) -> Result<ColorValue> {
        let source = value.space();
        let path = conversion_path(source, destination)?;
        debug!(%source, %destination, steps = path.len(), "converting color");

        path.iter().try_fold(value.clone(), |current, edge| {
            trace!(edge = %edge.name(), "applying conversion");
            edge.apply(&current, self.config, options)
        })
    }

    /// Convert `value` into the space of the model `T` and unwrap it.
    pub fn convert_to<T>(&self, value: impl Into<ColorValue>, options: &ConvertOptions) -> Result<T>
    where
        T: HasSpace + TryFrom<ColorValue, Error = Error>,
    {
        self.convert(&value.into(), T::SPACE, options)?.into_model()
    }

    /// Convert `value` into `destination`, routing through XYZ adapted to
    /// `illuminant`. CIE-family results are relative to `illuminant`.
    pub fn convert_under(
        &self,
        value: &ColorValue,
        destination: Space,
        illuminant: Illuminant,
        options: &ConvertOptions,
    ) -> Result<ColorValue> {
        let xyz: Xyz = self.convert(value, Space::Xyz, options)?.into_model()?;
        let xyz = xyz.adapted(self.config, illuminant, options.adaptation)?;
        self.convert(&xyz.into(), destination, options)
    }
}

/// Convert `value` into `destination` with the standard configuration.
pub fn convert_color(
    value: &ColorValue,
    destination: Space,
    options: &ConvertOptions,
) -> Result<ColorValue> {
    Converter::standard().convert(value, destination, options)
}

impl ColorValue {
    /// Convert to `space` with the standard configuration and default
    /// options.
    pub fn to_space(&self, space: Space) -> Result<Self> {
        convert_color(self, space, &ConvertOptions::default())
    }
}
