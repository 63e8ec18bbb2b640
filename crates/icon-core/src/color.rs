use image::Rgba;
use std::fmt;
use std::str::FromStr;

/// A straight (non-premultiplied) RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("color must start with '#': {0:?}")]
    MissingHash(String),
    #[error("color {input:?} has {len} hex digits, expected 3, 4, 6 or 8")]
    WrongLength { input: String, len: usize },
    #[error("invalid hex digit {digit:?} in color {input:?}")]
    InvalidDigit { input: String, digit: char },
}

impl Color {
    /// Fill used for generated logos when nothing else is configured.
    pub const DEFAULT_FILL: Color = Color::rgb(0x4A, 0x90, 0xE2);

    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: u8::MAX }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_opaque(&self) -> bool {
        self.a == u8::MAX
    }

    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, self.a])
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::DEFAULT_FILL
    }
}

impl From<Color> for Rgba<u8> {
    fn from(color: Color) -> Self {
        color.to_rgba()
    }
}

impl FromStr for Color {
    type Err = ColorError;

    /// Parse `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('#')
            .ok_or_else(|| ColorError::MissingHash(s.to_string()))?;

        if let Some(digit) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidDigit {
                input: s.to_string(),
                digit,
            });
        }

        // All ASCII from here on, so byte length equals char count.
        let nibbles: Vec<u8> = digits
            .bytes()
            .map(|b| (b as char).to_digit(16).unwrap_or(0) as u8)
            .collect();

        let channels: Vec<u8> = match nibbles.len() {
            3 | 4 => nibbles.iter().map(|n| n * 17).collect(),
            6 | 8 => nibbles.chunks(2).map(|pair| pair[0] << 4 | pair[1]).collect(),
            len => {
                return Err(ColorError::WrongLength {
                    input: s.to_string(),
                    len,
                })
            }
        };

        let alpha = channels.get(3).copied().unwrap_or(u8::MAX);
        Ok(Color::rgba(channels[0], channels[1], channels[2], alpha))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if !self.is_opaque() {
            write!(f, "{:02X}", self.a)?;
        }
        Ok(())
    }
}
