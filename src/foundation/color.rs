use crate::foundation::core::Fraction;

/// Opaque 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// `rgb(0, 0, 0)`.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// `rgb(255, 255, 255)`.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Build a color from its three channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Moves `self` toward `other` by `fraction`.
    ///
    /// `0.0` yields `self` and `1.0` yields `other`, both exactly. Channels are rounded and
    /// clamped, so fractions outside `[0, 1]` extrapolate up to the channel limits.
    pub fn weighted_mean(self, other: Self, fraction: Fraction) -> Self {
        fn mix(a: u8, b: u8, t: f64) -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        }

        Self {
            r: mix(self.r, other.r, fraction),
            g: mix(self.g, other.g, fraction),
            b: mix(self.b, other.b, fraction),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
