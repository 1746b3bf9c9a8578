//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

use crate::color::Space;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while constructing or converting colors.
///
/// All variants describe caller input errors; none of them are transient.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// The observer key is not one of the supported standard observers.
    #[error("invalid observer: {0:?} (expected \"2\" or \"10\")")]
    InvalidObserver(String),

    /// The illuminant key has no entry for the requested observer.
    #[error("invalid illuminant: {0:?}")]
    InvalidIlluminant(String),

    /// The RGB working space key is absent from the registry.
    #[error("invalid RGB working space: {0:?}")]
    InvalidRgbSpace(String),

    /// The chromatic adaptation method is not recognised.
    #[error("invalid chromatic adaptation method: {0:?}")]
    InvalidAdaptation(String),

    /// No conversion path is registered for the pair.
    #[error("no conversion from {from} to {to}")]
    UndefinedConversion {
        /// Space of the value being converted.
        from: Space,
        /// Requested destination space.
        to: Space,
    },

    /// The value lies outside the domain of a conversion (division by zero).
    #[error("value outside conversion domain: {0}")]
    Domain(&'static str),

    /// A wavelength that is not one of the 10nm sample points.
    #[error("wavelength {0}nm is not a sample point (340..=830 in 10nm steps)")]
    InvalidWavelength(u32),

    /// More spectral samples than there are sample points.
    #[error("{0} spectral samples given, at most 50 are allowed")]
    TooManySamples(usize),

    /// A channel slice of the wrong length.
    #[error("expected {expected} channels, found {found}")]
    ChannelCount {
        /// Number of channels of the target space.
        expected: usize,
        /// Number of channels supplied.
        found: usize,
    },

    /// A value of one space was given where another was required.
    #[error("expected a {expected} color, found {found}")]
    UnexpectedSpace {
        /// The space that was required.
        expected: Space,
        /// The space of the value.
        found: Space,
    },

    /// A malformed `#RRGGBB` string.
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
}
