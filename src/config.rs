//! Static data the conversions are parameterised by: white points per
//! observer and illuminant, and the RGB working space registry.
//!
//! The built-in tables are available through [`Config::standard`]. A custom
//! [`Config`] can be deserialized from any serde format and handed to a
//! [`Converter`](crate::Converter).

use std::{collections::BTreeMap, sync::OnceLock};

use serde::{Deserialize, Serialize};

use crate::{
    color::{Component, Components},
    error::{Error, Result},
    tags::{Illuminant, Observer, RgbSpace},
};

/// A 3x3 matrix applied as `[v1 v2 v3] * M`.
pub type Matrix = [[Component; 3]; 3];

/// Transfer function between linear light and encoded RGB values.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transfer {
    /// The piecewise linear/power sRGB curve.
    Srgb,
    /// A pure power law with the given exponent.
    Gamma(Component),
}

impl Transfer {
    /// Linear light to encoded value.
    pub fn encode(&self, value: Component) -> Component {
        let abs = value.abs();
        match *self {
            Transfer::Srgb => {
                if abs <= 0.0031308 {
                    12.92 * value
                } else {
                    value.signum() * (1.055 * abs.powf(1.0 / 2.4) - 0.055)
                }
            }
            Transfer::Gamma(gamma) => value.signum() * abs.powf(1.0 / gamma),
        }
    }

    /// Encoded value to linear light.
    pub fn decode(&self, value: Component) -> Component {
        let abs = value.abs();
        match *self {
            Transfer::Srgb => {
                if abs <= 0.04045 {
                    value / 12.92
                } else {
                    value.signum() * ((abs + 0.055) / 1.055).powf(2.4)
                }
            }
            Transfer::Gamma(gamma) => value.signum() * abs.powf(gamma),
        }
    }
}

/// Everything needed to move between XYZ and one RGB working space.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RgbSpec {
    /// The illuminant the primaries are defined against.
    pub native_illuminant: Illuminant,
    /// Encoding applied after the matrix.
    pub transfer: Transfer,
    /// Linear RGB to XYZ.
    pub rgb_to_xyz: Matrix,
    /// XYZ to linear RGB.
    pub xyz_to_rgb: Matrix,
}

/// The tables every conversion reads from. Read-only once built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// XYZ of the reference white per observer and illuminant, with Y = 1.
    pub white_points: BTreeMap<Observer, BTreeMap<Illuminant, [Component; 3]>>,
    /// The RGB working space registry.
    pub rgb_spaces: BTreeMap<RgbSpace, RgbSpec>,
}

impl Default for Config {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Config {
    /// The built-in tables, shared by the whole process.
    pub fn standard() -> &'static Config {
        static STANDARD: OnceLock<Config> = OnceLock::new();
        STANDARD.get_or_init(Config::builtin)
    }

    /// Build a fresh copy of the built-in tables.
    pub fn builtin() -> Self {
        use Illuminant as I;

        let two = BTreeMap::from([
            (I::A, [1.09850, 1.0, 0.35585]),
            (I::B, [0.99072, 1.0, 0.85223]),
            (I::C, [0.98074, 1.0, 1.18232]),
            (I::D50, [0.96422, 1.0, 0.82521]),
            (I::D55, [0.95682, 1.0, 0.92149]),
            (I::D65, [0.95047, 1.0, 1.08883]),
            (I::D75, [0.94972, 1.0, 1.22638]),
            (I::E, [1.0, 1.0, 1.0]),
            (I::F2, [0.99186, 1.0, 0.67393]),
            (I::F7, [0.95041, 1.0, 1.08747]),
            (I::F11, [1.00962, 1.0, 0.64350]),
        ]);

        let ten = BTreeMap::from([
            (I::A, [1.11144, 1.0, 0.35200]),
            (I::B, [0.99178, 1.0, 0.84349]),
            (I::C, [0.97285, 1.0, 1.16145]),
            (I::D50, [0.9672, 1.0, 0.8143]),
            (I::D55, [0.958, 1.0, 0.9093]),
            (I::D65, [0.9481, 1.0, 1.073]),
            (I::D75, [0.94416, 1.0, 1.2064]),
            (I::E, [1.0, 1.0, 1.0]),
            (I::F2, [1.03279, 1.0, 0.69027]),
            (I::F7, [0.95792, 1.0, 1.07686]),
            (I::F11, [1.03863, 1.0, 0.65607]),
        ]);

        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        let rgb_spaces = BTreeMap::from([
            (RgbSpace::Srgb, RgbSpec {
                native_illuminant: I::D65,
                transfer: Transfer::Srgb,
                rgb_to_xyz: [
                    [0.4123907992659595,  0.21263900587151036, 0.01933081871559185],
                    [0.35758433938387796, 0.7151686787677559,  0.11919477979462599],
                    [0.1804807884018343,  0.07219231536073371, 0.9505321522496606],
                ],
                xyz_to_rgb: [
                    [ 3.2409699419045213, -0.9692436362808798,  0.05563007969699361],
                    [-1.5373831775700935,  1.8759675015077206, -0.20397695888897657],
                    [-0.4986107602930033,  0.04155505740717561, 1.0569715142428786],
                ],
            }),
            (RgbSpace::AdobeRgb, RgbSpec {
                native_illuminant: I::D65,
                transfer: Transfer::Gamma(563.0 / 256.0),
                rgb_to_xyz: [
                    [0.5766690429101308,  0.29734497525053616, 0.027031361386412378],
                    [0.18555823790654627, 0.627363566255466,   0.07068885253582714],
                    [0.18822864623499472, 0.07529145849399789, 0.9913375368376389],
                ],
                xyz_to_rgb: [
                    [ 2.041587903810746,  -0.9692436362808798,  0.013444280632031024],
                    [-0.5650069742788596,  1.8759675015077206, -0.11836239223101824],
                    [-0.3447313507783295,  0.04155505740717561, 1.0151749943912054],
                ],
            }),
            (RgbSpace::DisplayP3, RgbSpec {
                native_illuminant: I::D65,
                transfer: Transfer::Srgb,
                rgb_to_xyz: [
                    [0.48657094864821626, 0.22897456406974884, 0.0],
                    [0.26566769316909294, 0.6917385218365062,  0.045113381858902575],
                    [0.1982172852343625,  0.079286914093745,   1.0439443689009757],
                ],
                xyz_to_rgb: [
                    [ 2.4934969119414245,  -0.829488969561575,   0.035845830243784335],
                    [-0.9313836179191236,   1.7626640603183468, -0.07617238926804171],
                    [-0.40271078445071684,  0.02362468584194359, 0.9568845240076873],
                ],
            }),
            (RgbSpace::ProPhotoRgb, RgbSpec {
                native_illuminant: I::D50,
                transfer: Transfer::Gamma(1.8),
                rgb_to_xyz: [
                    [0.7977604896723027,  0.2880711282292934,     0.0],
                    [0.13518583717574031, 0.7118432178101014,     0.0],
                    [0.0313493495815248,  0.00008565396060525902, 0.8251046025104601],
                ],
                xyz_to_rgb: [
                    [ 1.3457989731028281,  -0.5446224939028347,  0.0],
                    [-0.25558010007997534,  1.5082327413132781,  0.0],
                    [-0.05110628506753401,  0.02053603239147973, 1.2119675456389454],
                ],
            }),
            (RgbSpace::Rec2020, RgbSpec {
                native_illuminant: I::D65,
                transfer: Transfer::Gamma(2.4),
                rgb_to_xyz: [
                    [0.6369580483012913,  0.26270021201126703,  0.0],
                    [0.14461690358620838, 0.677998071518871,    0.028072693049087508],
                    [0.16888097516417205, 0.059301716469861945, 1.0609850577107909],
                ],
                xyz_to_rgb: [
                    [ 1.7166511879712676, -0.666684351832489,    0.017639857445310915],
                    [-0.3556707837763924,  1.616481236634939,   -0.042770613257808655],
                    [-0.2533662813736598,  0.01576854581391113,  0.942103121235474],
                ],
            }),
        ]);

        Self {
            white_points: BTreeMap::from([(Observer::Two, two), (Observer::Ten, ten)]),
            rgb_spaces,
        }
    }

    /// XYZ of the reference white for the pair.
    pub fn white_point(&self, observer: Observer, illuminant: Illuminant) -> Result<Components> {
        let table = self
            .white_points
            .get(&observer)
            .ok_or_else(|| Error::InvalidObserver(observer.to_string()))?;
        let [x, y, z] = table
            .get(&illuminant)
            .ok_or_else(|| Error::InvalidIlluminant(illuminant.to_string()))?;
        Ok(Components(*x, *y, *z))
    }

    /// The registry entry for a working space.
    pub fn rgb_spec(&self, space: RgbSpace) -> Result<&RgbSpec> {
        self.rgb_spaces
            .get(&space)
            .ok_or_else(|| Error::InvalidRgbSpace(space.to_string()))
    }
}
