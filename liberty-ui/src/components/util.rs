use iced::Color;
use palette::{rgb::Rgb, FromColor, Hsl};

pub fn darken(color: Color, amount: f32) -> Color {
    let mut hsl = to_hsl(color);

    hsl.lightness = if hsl.lightness - amount < 0.0 {
        0.0
    } else {
        hsl.lightness - amount
    };

    from_hsl(hsl)
}

pub fn lighten(color: Color, amount: f32) -> Color {
    let mut hsl = to_hsl(color);

    hsl.lightness = if hsl.lightness + amount > 1.0 {
        1.0
    } else {
        hsl.lightness + amount
    };

    from_hsl(hsl)
}

fn to_hsl(color: Color) -> Hsl {
    Hsl::from_color(Rgb::from(color))
}

fn from_hsl(hsl: Hsl) -> Color {
    Rgb::from_color(hsl).into()
}

/// Shortens `input` to `max_len` characters with an ellipsis in the middle
pub fn truncate_text(input: &str, max_len: usize) -> String {
    let chars: Vec<char> = input.chars().collect();
    if chars.len() <= max_len {
        return input.to_string();
    }
    let half = max_len / 2;
    let head: String = chars[..half].iter().collect();
    let tail: String = chars[chars.len() - half..].iter().collect();
    format!("{head}...{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_address() {
        let address = "0x742d35Cc6634C0532925a3b844Bc9e7595f0bEbb";
        assert_eq!(truncate_text(address, 12), "0x742d...f0bEbb");
        assert_eq!(truncate_text("0xabc", 12), "0xabc");
    }

    #[test]
    fn test_lighten_clamps() {
        let white = lighten(Color::WHITE, 0.5);
        assert!((white.r - 1.0).abs() < 0.01);
        let black = darken(Color::BLACK, 0.5);
        assert!(black.r.abs() < 0.01);
    }
}
