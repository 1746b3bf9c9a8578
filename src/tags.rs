//! The tags a color value may carry: the standard observer and illuminant its
//! channels are relative to, or the RGB working space it is encoded in.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    error::{Error, Result},
};

/// CIE standard observer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Observer {
    /// CIE 1931 2° observer.
    #[default]
    #[serde(rename = "2")]
    Two,
    /// CIE 1964 10° observer.
    #[serde(rename = "10")]
    Ten,
}

impl Observer {
    /// The key of the observer, "2" or "10".
    pub fn as_str(&self) -> &'static str {
        match self {
            Observer::Two => "2",
            Observer::Ten => "10",
        }
    }
}

impl fmt::Display for Observer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Observer {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "2" => Ok(Observer::Two),
            "10" => Ok(Observer::Ten),
            _ => Err(Error::InvalidObserver(s.to_string())),
        }
    }
}

/// Standard illuminants with tabulated white points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum Illuminant {
    A,
    B,
    C,
    #[default]
    D50,
    D55,
    D65,
    D75,
    E,
    F2,
    F7,
    F11,
}

impl Illuminant {
    /// All known illuminants.
    pub const ALL: [Illuminant; 11] = [
        Illuminant::A,
        Illuminant::B,
        Illuminant::C,
        Illuminant::D50,
        Illuminant::D55,
        Illuminant::D65,
        Illuminant::D75,
        Illuminant::E,
        Illuminant::F2,
        Illuminant::F7,
        Illuminant::F11,
    ];

    /// The lowercase key of the illuminant.
    pub fn as_str(&self) -> &'static str {
        match self {
            Illuminant::A => "a",
            Illuminant::B => "b",
            Illuminant::C => "c",
            Illuminant::D50 => "d50",
            Illuminant::D55 => "d55",
            Illuminant::D65 => "d65",
            Illuminant::D75 => "d75",
            Illuminant::E => "e",
            Illuminant::F2 => "f2",
            Illuminant::F7 => "f7",
            Illuminant::F11 => "f11",
        }
    }
}

impl fmt::Display for Illuminant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Illuminant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_lowercase();
        Illuminant::ALL
            .into_iter()
            .find(|i| i.as_str() == key)
            .ok_or_else(|| Error::InvalidIlluminant(s.to_string()))
    }
}

/// RGB working spaces known to the registry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RgbSpace {
    /// sRGB (IEC 61966-2-1), D65.
    #[default]
    Srgb,
    /// Adobe RGB (1998), D65.
    AdobeRgb,
    /// Display P3, D65 with the sRGB transfer curve.
    DisplayP3,
    /// ProPhoto RGB (ROMM), D50.
    #[serde(rename = "prophoto-rgb")]
    ProPhotoRgb,
    /// ITU-R BT.2020, D65.
    Rec2020,
}

impl RgbSpace {
    /// All known working spaces.
    pub const ALL: [RgbSpace; 5] = [
        RgbSpace::Srgb,
        RgbSpace::AdobeRgb,
        RgbSpace::DisplayP3,
        RgbSpace::ProPhotoRgb,
        RgbSpace::Rec2020,
    ];

    /// The canonical key of the working space.
    pub fn as_str(&self) -> &'static str {
        match self {
            RgbSpace::Srgb => "srgb",
            RgbSpace::AdobeRgb => "adobe-rgb",
            RgbSpace::DisplayP3 => "display-p3",
            RgbSpace::ProPhotoRgb => "prophoto-rgb",
            RgbSpace::Rec2020 => "rec2020",
        }
    }
}

impl fmt::Display for RgbSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RgbSpace {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "srgb" => Ok(RgbSpace::Srgb),
            "adobe-rgb" | "a98-rgb" => Ok(RgbSpace::AdobeRgb),
            "display-p3" => Ok(RgbSpace::DisplayP3),
            "prophoto-rgb" => Ok(RgbSpace::ProPhotoRgb),
            "rec2020" | "bt2020" => Ok(RgbSpace::Rec2020),
            _ => Err(Error::InvalidRgbSpace(s.to_string())),
        }
    }
}

/// The reference white a set of CIE channels is expressed against.
///
/// A `Reference` can only be obtained through validation against a
/// [`Config`], so holding one means the pair has a white point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Reference {
    observer: Observer,
    illuminant: Illuminant,
}

impl Default for Reference {
    fn default() -> Self {
        Self {
            observer: Observer::Two,
            illuminant: Illuminant::D50,
        }
    }
}

impl Reference {
    /// Validate the pair against the standard tables.
    pub fn new(observer: Observer, illuminant: Illuminant) -> Result<Self> {
        Self::new_in(Config::standard(), observer, illuminant)
    }

    /// Validate the pair against the tables in `config`.
    pub fn new_in(config: &Config, observer: Observer, illuminant: Illuminant) -> Result<Self> {
        config.white_point(observer, illuminant)?;
        Ok(Self {
            observer,
            illuminant,
        })
    }

    /// Parse and validate observer and illuminant keys, e.g. `("2", "d65")`.
    pub fn parse(observer: &str, illuminant: &str) -> Result<Self> {
        Self::new(observer.parse()?, illuminant.parse()?)
    }

    /// The standard observer.
    pub fn observer(&self) -> Observer {
        self.observer
    }

    /// The reference illuminant.
    pub fn illuminant(&self) -> Illuminant {
        self.illuminant
    }

    /// The same observer with another illuminant, validated against `config`.
    pub fn with_illuminant(&self, config: &Config, illuminant: Illuminant) -> Result<Self> {
        Self::new_in(config, self.observer, illuminant)
    }
}
