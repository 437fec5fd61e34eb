macro_rules! rgb {
    ($r:literal, $g:literal, $b:literal) => {
        Color {
            r: $r as f32 / 255.0,
            g: $g as f32 / 255.0,
            b: $b as f32 / 255.0,
            a: 1.0,
        }
    };
}

/// Normalised RGBA colour (each channel in `[0.0, 1.0]`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLUE:   Self = rgb!(0x34, 0x98, 0xdb); // good
    pub const GREEN:  Self = rgb!(0x40, 0x91, 0x6c); // moderate
    pub const ORANGE: Self = rgb!(0xfb, 0x85, 0x00); // unhealthy for sensitive groups
    pub const RED:    Self = rgb!(0xbf, 0x06, 0x03); // dangerous

    pub const PAPER:  Self = rgb!(0xf8, 0xf9, 0xfa);
    pub const INK:    Self = rgb!(0x21, 0x25, 0x29);
    pub const NIGHT:  Self = rgb!(0x1d, 0x1f, 0x21);
    pub const FOG:    Self = rgb!(0xde, 0xe2, 0xe6);

    /// Parse a CSS-style hex color string (`#RRGGBB` or `#RRGGBBAA`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }

        let byte = |s: &str| -> Option<f32> { u8::from_str_radix(s, 16).ok().map(|b| b as f32 / 255.0) };

        match hex.len() {
            6 => Some(Self {
                r: byte(&hex[0..2])?,
                g: byte(&hex[2..4])?,
                b: byte(&hex[4..6])?,
                a: 1.0,
            }),
            8 => Some(Self {
                r: byte(&hex[0..2])?,
                g: byte(&hex[2..4])?,
                b: byte(&hex[4..6])?,
                a: byte(&hex[6..8])?,
            }),
            _ => None,
        }
    }

    /// Convert to an [`iced::Color`] for use in Iced widgets.
    #[inline]
    pub fn to_iced(self) -> iced::Color {
        iced::Color::from_rgba(self.r, self.g, self.b, self.a)
    }

    /// Return a copy with the alpha channel set to `alpha`.
    #[inline]
    #[must_use]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha.clamp(0.0, 1.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        assert_eq!(Color::from_hex("#3498db"), Some(Color::BLUE));
        assert_eq!(Color::from_hex("bf0603"), Some(Color::RED));
    }

    #[test]
    fn parses_alpha_channel() {
        let c = Color::from_hex("#00000080").unwrap();
        assert!((c.a - 128.0 / 255.0).abs() < f32::EPSILON);
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::from_hex("#zzzzzz"), None);
        assert_eq!(Color::from_hex("#ééé"), None);
    }

    #[test]
    fn alpha_is_clamped() {
        assert_eq!(Color::BLUE.with_alpha(3.0).a, 1.0);
    }
}
