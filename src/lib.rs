//! colorpath converts colors between CIE, device and spectral color spaces
//! by routing them through a fixed graph of elementary conversions.
//!
//! ```rust
//! use colorpath::{ColorValue, Lab, Rgb, Space};
//!
//! let rgb: Rgb = ColorValue::from(Lab::new(50.0, 0.0, 0.0))
//!     .to_space(Space::Rgb)
//!     .unwrap()
//!     .into_model()
//!     .unwrap();
//! assert_eq!(rgb.to_hex(), "#777777");
//! ```

#![deny(missing_docs)]

mod adaptation;
mod color;
mod config;
mod convert;
mod difference;
mod error;
mod interpolate;
mod math;
pub mod models;
pub mod spectral_tables;
mod tags;


pub use adaptation::{adaptation_matrix, apply_chromatic_adaptation, Adaptation};
pub use color::{ColorValue, Component, Components, HasSpace, Space};
pub use config::{Config, Matrix, RgbSpec, Transfer};
pub use convert::{conversion_path, convert_color, ConvertOptions, Converter, Edge};
pub use error::{Error, Result};
pub use math::{Transform, CIE_E, CIE_K};
pub use models::{Cmy, Cmyk, Hsl, Hsv, Lab, LchAb, LchUv, Luv, Rgb, Spectral, XyY, Xyz};
pub use tags::{Illuminant, Observer, Reference, RgbSpace};
