// src/utilities/color.rs
//
// Hex color strings ("#35654d") to nannou colors

use nannou::color::{rgb8, Rgb8};

pub fn parse_hex_color(value: &str) -> Option<Rgb8> {
    let re = regex::Regex::new(r"^#([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$").ok()?;
    let caps = re.captures(value.trim())?;

    Some(rgb8(
        u8::from_str_radix(&caps[1], 16).ok()?,
        u8::from_str_radix(&caps[2], 16).ok()?,
        u8::from_str_radix(&caps[3], 16).ok()?,
    ))
}

pub fn to_hex(color: Rgb8) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}
