//! Color helper functions: interpolation, lightening, darkening.

use crate::backend::Color;

/// Linearly interpolate between two colors. `t` is clamped to `[0, 1]`.
pub fn lerp_color(a: Color, b: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let lerp = |x: u8, y: u8| -> u8 { (x as f32 + (y as f32 - x as f32) * t) as u8 };
    Color {
        r: lerp(a.r, b.r),
        g: lerp(a.g, b.g),
        b: lerp(a.b, b.b),
        a: lerp(a.a, b.a),
    }
}

/// Lighten a color toward white by `amount` in `[0, 1]`.
pub fn lighten(c: Color, amount: f32) -> Color {
    lerp_color(c, Color::rgba(255, 255, 255, c.a), amount)
}

/// Darken a color toward black by `amount` in `[0, 1]`.
pub fn darken(c: Color, amount: f32) -> Color {
    lerp_color(c, Color::rgba(0, 0, 0, c.a), amount)
}

/// Replace the alpha channel.
pub fn with_alpha(c: Color, a: u8) -> Color {
    Color::rgba(c.r, c.g, c.b, a)
}
