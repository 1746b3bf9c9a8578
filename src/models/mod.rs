//! Each color space is modeled with its own type. The elementary conversions
//! between neighbouring spaces are methods on these types; the
//! [`Converter`](crate::Converter) chains them into full conversion paths.

/// Constructors for models whose channels are relative to a reference white.
macro_rules! reference_constructors {
    ($model:ident, $c0:ident, $c1:ident, $c2:ident) => {
        impl $model {
            /// Create a new color relative to the default reference white
            /// (2° observer, D50).
            pub fn new($c0: Component, $c1: Component, $c2: Component) -> Self {
                Self::with_reference($c0, $c1, $c2, Reference::default())
            }

            /// Create a new color relative to `reference`.
            pub fn with_reference(
                $c0: Component,
                $c1: Component,
                $c2: Component,
                reference: Reference,
            ) -> Self {
                Self {
                    $c0,
                    $c1,
                    $c2,
                    reference,
                }
            }

            /// Create a new color from observer and illuminant keys, e.g.
            /// `"2"` and `"d65"`.
            pub fn try_new(
                $c0: Component,
                $c1: Component,
                $c2: Component,
                observer: &str,
                illuminant: &str,
            ) -> Result<Self> {
                Ok(Self::with_reference(
                    $c0,
                    $c1,
                    $c2,
                    Reference::parse(observer, illuminant)?,
                ))
            }
        }
    };
}

/// Constructors for models encoded in an RGB working space.
macro_rules! rgb_space_constructors {
    ($model:ident, $c0:ident, $c1:ident, $c2:ident) => {
        impl $model {
            /// Create a new color in sRGB.
            pub fn new($c0: Component, $c1: Component, $c2: Component) -> Self {
                Self::with_space($c0, $c1, $c2, RgbSpace::Srgb)
            }

            /// Create a new color in the given working space.
            pub fn with_space(
                $c0: Component,
                $c1: Component,
                $c2: Component,
                space: RgbSpace,
            ) -> Self {
                Self {
                    $c0,
                    $c1,
                    $c2,
                    space,
                }
            }

            /// Create a new color from a working space key, e.g.
            /// `"adobe-rgb"`. The key must be in the standard registry.
            pub fn try_new(
                $c0: Component,
                $c1: Component,
                $c2: Component,
                space: &str,
            ) -> Result<Self> {
                let space: RgbSpace = space.parse()?;
                crate::config::Config::standard().rgb_spec(space)?;
                Ok(Self::with_space($c0, $c1, $c2, space))
            }
        }
    };
}

pub mod cmy;
pub mod hsl;
pub mod hsv;
pub mod lab;
pub mod luv;
pub mod rgb;
pub mod spectral;
pub mod xyz;

pub use cmy::{Cmy, Cmyk};
pub use hsl::Hsl;
pub use hsv::Hsv;
pub use lab::{Lab, LchAb};
pub use luv::{LchUv, Luv};
pub use rgb::Rgb;
pub use spectral::Spectral;
pub use xyz::{XyY, Xyz};
