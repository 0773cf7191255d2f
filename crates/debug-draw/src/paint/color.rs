/// Linear premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are multiplied by `a` (premultiplied alpha).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    /// Creates a premultiplied color from a packed `0xRRGGBB` value and a
    /// separate straight alpha in `[0, 1]`.
    ///
    /// Bits above the low 24 are ignored.
    #[inline]
    pub fn from_hex(rgb: u32, alpha: f32) -> Self {
        let [_, r, g, b] = rgb.to_be_bytes();
        Self::from_straight(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, alpha)
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: (r.clamp(0.0, 1.0)) * a,
            g: (g.clamp(0.0, 1.0)) * a,
            b: (b.clamp(0.0, 1.0)) * a,
            a,
        }
    }

    /// Returns a straight-alpha representation.
    ///
    /// For `a == 0`, RGB is returned as 0.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        if self.a <= 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let inv = 1.0 / self.a;
            (self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    /// Packs the straight-alpha RGB channels back into `0xRRGGBB`.
    pub fn to_hex(self) -> u32 {
        let (r, g, b, _) = self.to_straight();
        let byte = |c: f32| (c * 255.0).round().clamp(0.0, 255.0) as u32;
        (byte(r) << 16) | (byte(g) << 8) | byte(b)
    }
}
