use anyhow::{anyhow, bail, Context, Result};
use palette::{LinSrgb, Srgb};

pub use palette::LinSrgba as Color;

/// Builds a fully opaque color from 8 bit sRGB components.
pub fn rgb8(red: u8, green: u8, blue: u8) -> Color {
    let linear: LinSrgb<f32> = Srgb::new(red, green, blue).into_format::<f32>().into_linear();
    Color::new(linear.red, linear.green, linear.blue, 1.0)
}

/// Parses css style hex colors (`#RRGGBB` or the short `#RGB` form).
pub fn parse_hex(input: &str) -> Result<Color> {
    let digits = input
        .trim()
        .strip_prefix('#')
        .ok_or_else(|| anyhow!("color {:?} does not start with '#'", input))?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        bail!("color {:?} contains non hex characters", input);
    }

    let component = |s: &str| {
        u8::from_str_radix(s, 16)
            .with_context(|| format!("invalid hex component {:?} in color {:?}", s, input))
    };

    match digits.len() {
        6 => Ok(rgb8(component(&digits[0..2])?, component(&digits[2..4])?, component(&digits[4..6])?)),
        3 => {
            let short = |i: usize| component(&digits[i..=i]).map(|v| v * 0x11);
            Ok(rgb8(short(0)?, short(1)?, short(2)?))
        }
        len => bail!("color {:?} has {} hex digits, expected 3 or 6", input, len),
    }
}
