//! RGB color triple
//!
//! In memory a pixel is always `(red, green, blue)`. The BMP on-disk order
//! is `(blue, green, red)`; [`Rgb::from_bgr`] and [`Rgb::to_bgr`] are the only
//! places that convert between the two.

/// A 24-bit color value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create a color from its red, green and blue components.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Build a color from a `[blue, green, red]` record.
    #[inline]
    pub const fn from_bgr(bgr: [u8; 3]) -> Self {
        Rgb::new(bgr[2], bgr[1], bgr[0])
    }

    /// The `[blue, green, red]` record for this color.
    #[inline]
    pub const fn to_bgr(self) -> [u8; 3] {
        [self.b, self.g, self.r]
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgb::new(r, g, b)
    }
}

impl From<Rgb> for (u8, u8, u8) {
    #[inline]
    fn from(c: Rgb) -> Self {
        (c.r, c.g, c.b)
    }
}
