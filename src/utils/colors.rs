use gpui::Rgba;

/// Creates an RGBA color from a hex value and alpha component.
pub fn rgb_a(hex: u32, a: f32) -> Rgba {
    let [_, r, g, b] = hex.to_be_bytes().map(|b| (b as f32) / 255.0);
    Rgba { r, g, b, a }
}

/// Extension trait for modifying RGBA colors.
pub trait RgbaExt {
    /// Returns a new color with the specified alpha value.
    fn alpha(self, alpha: f32) -> Self;

    /// Returns a new color whose alpha channel is the byte `alpha`, the same
    /// as writing `#RRGGBB` followed by two alpha digits.
    fn hex_alpha(self, alpha: u8) -> Self;
}

impl RgbaExt for Rgba {
    fn alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    fn hex_alpha(self, alpha: u8) -> Self {
        self.alpha(alpha as f32 / 255.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_a() {
        let color = rgb_a(0xFF8000, 0.5);
        assert_eq!(color.r, 1.0);
        assert_eq!(color.g, 128.0 / 255.0);
        assert_eq!(color.b, 0.0);
        assert_eq!(color.a, 0.5);
    }

    #[test]
    fn test_hex_alpha_replaces_alpha_only() {
        let color = rgb_a(0x3B82F6, 1.0).hex_alpha(0x15);
        assert_eq!(color.a, 21.0 / 255.0);
        assert_eq!(color.r, rgb_a(0x3B82F6, 1.0).r);
    }
}
