use iced::Color;

pub const BRIDGE_RED: Color = Color::from_rgb(250.0 / 255.0, 0.0 / 255.0, 80.0 / 255.0);
pub const BRIDGE_BLUE: Color = Color::from_rgb(64.0 / 255.0, 96.0 / 255.0, 255.0 / 255.0);
pub const BRIDGE_GREEN: Color = Color::from_rgb(40.0 / 255.0, 164.0 / 255.0, 127.0 / 255.0);
pub const BACKGROUND_GREY: Color = Color::from_rgb(23.0 / 255.0, 23.0 / 255.0, 25.0 / 255.0);
