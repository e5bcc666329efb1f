// color.rs - RGBA colors and the fixed note palette

use rand::Rng;
use serde::{Deserialize, Serialize};

const LIGHTNESS: f64 = 0.5;

/// RGBA color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Composites `self` over `under` ("source over").
    pub const fn over(self, under: Color) -> Color {
        let inv = 1.0 - self.a;
        Color {
            r: self.r * self.a + under.r * inv,
            g: self.g * self.a + under.g * inv,
            b: self.b * self.a + under.b * inv,
            a: self.a + under.a * inv,
        }
    }

    /// Flattens the color against `background` and converts it for the terminal.
    pub fn to_terminal(self, background: Color) -> ratatui::style::Color {
        let flat = self.over(background.with_alpha(1.0));
        ratatui::style::Color::Rgb(channel(flat.r), channel(flat.g), channel(flat.b))
    }
}

fn channel(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

pub const fn yellow(l: f64, a: f64) -> Color {
    Color::rgba(l, l, 0.0, a)
}

pub const fn red(l: f64, a: f64) -> Color {
    Color::rgba(l, 0.0, 0.0, a)
}

pub const fn green(l: f64, a: f64) -> Color {
    Color::rgba(0.0, l, 0.0, a)
}

pub const fn blue(l: f64, a: f64) -> Color {
    Color::rgba(0.0, 0.0, l, a)
}

pub const fn cyan(l: f64, a: f64) -> Color {
    Color::rgba(0.0, l, l, a)
}

pub const fn magenta(l: f64, a: f64) -> Color {
    Color::rgba(l, 0.0, l, a)
}

pub const fn gray(l: f64, a: f64) -> Color {
    Color::rgba(l, l, l, a)
}

pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

/// Note colors, addressed by the digit keys `0`-`9`.
pub const PALETTE: [Color; 10] = [
    yellow(LIGHTNESS, 1.0),
    red(LIGHTNESS, 1.0),
    blue(LIGHTNESS, 1.0),
    green(LIGHTNESS, 1.0),
    cyan(LIGHTNESS, 1.0),
    magenta(LIGHTNESS, 1.0),
    yellow(LIGHTNESS, 0.5).over(red(LIGHTNESS, 1.0)),
    yellow(LIGHTNESS, 0.5).over(blue(LIGHTNESS, 1.0)),
    red(LIGHTNESS, 0.5).over(green(LIGHTNESS, 1.0)),
    blue(LIGHTNESS, 0.5).over(cyan(LIGHTNESS, 1.0)),
];

pub const PALETTE_NAMES: [&str; 10] = [
    "yellow",
    "red",
    "blue",
    "green",
    "cyan",
    "magenta",
    "orange",
    "slate",
    "olive",
    "teal",
];

pub fn palette_color(index: usize) -> Option<Color> {
    PALETTE.get(index).copied()
}

/// Picks a color for a fresh note.
///
/// Draws uniformly from every palette entry except the last one. Boards
/// written by earlier versions only ever contain these colors, so the
/// distribution is kept as is.
pub fn random_note_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    PALETTE[rng.gen_range(0..PALETTE.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_palette_lookup() {
        assert_eq!(palette_color(0), Some(yellow(0.5, 1.0)));
        assert_eq!(palette_color(9), Some(PALETTE[9]));
        assert_eq!(palette_color(10), None);
    }

    #[test]
    fn test_blended_entries_are_opaque() {
        for color in PALETTE {
            assert!((color.a - 1.0).abs() < f64::EPSILON);
        }
        let orange = PALETTE[6];
        assert!((orange.r - 0.5).abs() < 1e-9);
        assert!((orange.g - 0.25).abs() < 1e-9);
        assert_eq!(orange.b, 0.0);
    }

    #[test]
    fn test_random_note_color_never_picks_last_entry() {
        let mut rng = StdRng::seed_from_u64(7);
        let last = PALETTE[PALETTE.len() - 1];
        let mut seen = [false; 10];
        for _ in 0..2000 {
            let color = random_note_color(&mut rng);
            assert_ne!(color, last);
            let idx = PALETTE.iter().position(|c| *c == color).unwrap();
            seen[idx] = true;
        }
        assert!(seen[..9].iter().all(|s| *s));
    }

    #[test]
    fn test_to_terminal_flattens_alpha() {
        let half_white = WHITE.with_alpha(0.5);
        assert_eq!(
            half_white.to_terminal(BLACK),
            ratatui::style::Color::Rgb(128, 128, 128)
        );
    }
}
