use crate::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

impl Color {
    pub const TRANSPARENT: Color = Color(0, 0, 0, 0);
    pub const BLACK: Color = Color(0, 0, 0, 255);
    pub const WHITE: Color = Color(255, 255, 255, 255);

    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color(r, g, b, 255)
    }
    pub fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color(r, g, b, a)
    }
    pub fn from_hex(hex: &str) -> Self {
        let s = hex.trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>, fallback: u8| {
            s.get(range)
                .and_then(|c| u8::from_str_radix(c, 16).ok())
                .unwrap_or(fallback)
        };
        match s.len() {
            6 => Color(channel(0..2, 0), channel(2..4, 0), channel(4..6, 0), 255),
            8 => Color(
                channel(0..2, 0),
                channel(2..4, 0),
                channel(4..6, 0),
                channel(6..8, 255),
            ),
            _ => Color(0, 0, 0, 255),
        }
    }
    pub fn with_alpha(self, a: u8) -> Self {
        Color(self.0, self.1, self.2, a)
    }

    /// Multiply alpha by `a` (0..=1), as used when painting faded subtrees.
    pub fn mul_alpha(self, a: f32) -> Self {
        let na = ((self.3 as f32) * a).clamp(0.0, 255.0) as u8;
        Color(self.0, self.1, self.2, na)
    }
}

/// Brush for filling shapes.
///
/// Either a solid color or a linear gradient. The hero overlay and the
/// company section background are gradients; everything else is solid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Brush {
    Solid(Color),

    /// Linear gradient from `start` to `end` in normalized local coordinates
    /// (top-left (0,0), bottom-right (1,1)).
    Linear {
        start: Vec2,
        end: Vec2,
        start_color: Color,
        end_color: Color,
    },
}

impl From<Color> for Brush {
    fn from(c: Color) -> Self {
        Brush::Solid(c)
    }
}

impl Brush {
    pub fn mul_alpha(self, a: f32) -> Self {
        match self {
            Brush::Solid(c) => Brush::Solid(c.mul_alpha(a)),
            Brush::Linear {
                start,
                end,
                start_color,
                end_color,
            } => Brush::Linear {
                start,
                end,
                start_color: start_color.mul_alpha(a),
                end_color: end_color.mul_alpha(a),
            },
        }
    }
}

pub struct LinearGradient;

impl LinearGradient {
    pub fn vertical(top: Color, bottom: Color) -> Brush {
        Brush::Linear {
            start: Vec2 { x: 0.0, y: 0.0 },
            end: Vec2 { x: 0.0, y: 1.0 },
            start_color: top,
            end_color: bottom,
        }
    }
}
