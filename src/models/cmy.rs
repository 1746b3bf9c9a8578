//! Subtractive device models: CMY and CMYK.

use crate::{color::Component, models::rgb::Rgb, tags::RgbSpace};

colorpath_macros::gen_model! {
    /// A color in subtractive cyan, magenta, yellow.
    pub struct Cmy {
        /// The cyan component.
        cyan: Component,
        /// The magenta component.
        magenta: Component,
        /// The yellow component.
        yellow: Component,
    }
}

impl Cmy {
    /// Create a new color.
    pub fn new(cyan: Component, magenta: Component, yellow: Component) -> Self {
        Self {
            cyan,
            magenta,
            yellow,
        }
    }

    /// Complement into RGB in `target` (sRGB by default).
    pub fn to_rgb(&self, target: Option<RgbSpace>) -> Rgb {
        Rgb::with_space(
            1.0 - self.cyan,
            1.0 - self.magenta,
            1.0 - self.yellow,
            target.unwrap_or_default(),
        )
    }

    /// Pull the shared darkness out into a key channel.
    pub fn to_cmyk(&self) -> Cmyk {
        let key = self.cyan.min(self.magenta).min(self.yellow).min(1.0);

        // Pure black leaves nothing to scale by.
        if key == 1.0 {
            return Cmyk::new(0.0, 0.0, 0.0, 1.0);
        }

        let scale = |v: Component| (v - key) / (1.0 - key);
        Cmyk::new(scale(self.cyan), scale(self.magenta), scale(self.yellow), key)
    }
}

impl Rgb {
    /// Complement into CMY.
    pub fn to_cmy(&self) -> Cmy {
        Cmy::new(1.0 - self.red, 1.0 - self.green, 1.0 - self.blue)
    }
}

colorpath_macros::gen_model! {
    /// A color in subtractive cyan, magenta, yellow and key (black).
    pub struct Cmyk {
        /// The cyan component.
        cyan: Component,
        /// The magenta component.
        magenta: Component,
        /// The yellow component.
        yellow: Component,
        /// The key (black) component.
        key: Component,
    }
}

impl Cmyk {
    /// Create a new color.
    pub fn new(cyan: Component, magenta: Component, yellow: Component, key: Component) -> Self {
        Self {
            cyan,
            magenta,
            yellow,
            key,
        }
    }

    /// Fold the key channel back into CMY.
    pub fn to_cmy(&self) -> Cmy {
        let unscale = |v: Component| v * (1.0 - self.key) + self.key;
        Cmy::new(unscale(self.cyan), unscale(self.magenta), unscale(self.yellow))
    }
}
