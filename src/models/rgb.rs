//! Model a gamma encoded color in an RGB working space.

use tracing::trace;

use crate::{
    adaptation::Adaptation,
    color::{Component, Components},
    config::Config,
    error::{Error, Result},
    math::{from_rows, transform},
    models::xyz::Xyz,
    tags::{Illuminant, Observer, Reference, RgbSpace},
};

colorpath_macros::gen_model! {
    /// A gamma encoded color in an RGB working space. Channels are nominally
    /// in `[0, 1]`.
    pub struct Rgb {
        /// The red component of the color.
        red: Component,
        /// The green component of the color.
        green: Component,
        /// The blue component of the color.
        blue: Component,
        /// The working space the channels are encoded in.
        space: RgbSpace,
    }
}

rgb_space_constructors!(Rgb, red, green, blue);

/// Scale a nominal `[0, 1]` channel to `0..=255`.
fn upscale(value: Component) -> u8 {
    (0.5 + value * 255.0).floor().clamp(0.0, 255.0) as u8
}

impl Rgb {
    /// Create an sRGB color from 8-bit channels.
    pub fn from_upscaled(red: u8, green: u8, blue: u8) -> Self {
        Self::new(
            red as Component / 255.0,
            green as Component / 255.0,
            blue as Component / 255.0,
        )
    }

    /// The channels scaled to `0..=255`, rounded half up and saturated.
    pub fn to_upscaled(&self) -> (u8, u8, u8) {
        (upscale(self.red), upscale(self.green), upscale(self.blue))
    }

    /// Parse a hex color like `"#ff00aa"` or `"FF00AA"` as sRGB.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim().strip_prefix('#').unwrap_or(hex.trim());
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidHex(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| Error::InvalidHex(hex.to_string()))
        };

        Ok(Self::from_upscaled(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Format the color as `"#rrggbb"`.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_upscaled();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Return the hue in degrees, together with the largest and smallest
    /// channel.
    pub(crate) fn hue_with_max_min(&self) -> (Component, Component, Component) {
        let (red, green, blue) = (self.red, self.green, self.blue);
        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = max - min;

        let hue = if delta == 0.0 {
            0.0
        } else if max == red {
            (60.0 * (green - blue) / delta + 360.0) % 360.0
        } else if max == green {
            60.0 * (blue - red) / delta + 120.0
        } else {
            60.0 * (red - green) / delta + 240.0
        };

        (hue, max, min)
    }

    /// Convert to tristimulus values (2° observer).
    ///
    /// The result is relative to the working space's native illuminant,
    /// unless `target_illuminant` asks for another one.
    pub fn to_xyz(
        &self,
        config: &Config,
        target_illuminant: Option<Illuminant>,
        method: Adaptation,
    ) -> Result<Xyz> {
        let spec = config.rgb_spec(self.space)?;
        trace!(space = %self.space, "rgb to xyz");

        let linear = Components(self.red, self.green, self.blue).map(|v| spec.transfer.decode(v));
        let Components(x, y, z) = transform(&from_rows(&spec.rgb_to_xyz), linear);

        let reference = Reference::new_in(config, Observer::Two, spec.native_illuminant)?;
        let xyz = Xyz::with_reference(x, y, z, reference);

        match target_illuminant {
            Some(target) => xyz.adapted(config, target, method),
            None => Ok(xyz),
        }
    }
}

impl Xyz {
    /// Convert to gamma encoded RGB in `target`, adapting to the working
    /// space's native illuminant first when needed.
    pub fn to_rgb(&self, config: &Config, target: RgbSpace, method: Adaptation) -> Result<Rgb> {
        let spec = config.rgb_spec(target)?;
        trace!(space = %target, "xyz to rgb");

        let xyz = self.adapted(config, spec.native_illuminant, method)?;
        let linear = transform(&from_rows(&spec.xyz_to_rgb), Components(xyz.x, xyz.y, xyz.z));
        let Components(red, green, blue) = linear.map(|v| spec.transfer.encode(v));

        Ok(Rgb::with_space(red, green, blue, target))
    }
}
