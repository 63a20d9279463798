// src/models/palette.rs
//
// Fixed table colors

use nannou::color::{rgb8, Rgb8};

use super::pips::Pips;

/// Dark green poker table felt
pub fn poker_green() -> Rgb8 {
    rgb8(0x35, 0x65, 0x4d)
}

/// Warm beige of the hub
pub fn hub_color() -> Rgb8 {
    rgb8(0xd4, 0xb4, 0x83)
}

pub fn hub_border() -> Rgb8 {
    rgb8(0x82, 0x6e, 0x50)
}

/// Play button on the title scene
pub fn purple() -> Rgb8 {
    rgb8(0x5e, 0x3c, 0x52)
}

pub fn domino_background() -> Rgb8 {
    rgb8(0xf8, 0xf6, 0xec)
}

/// Pip color per domino value. Blank halves have no pips, so 0 has no color.
pub fn pip_color(value: Pips) -> Option<Rgb8> {
    let color = match value.value() {
        1 => rgb8(0xff, 0x00, 0x00),  // red
        2 => rgb8(0x63, 0x8c, 0x4d),  // green
        3 => rgb8(0x7f, 0x4d, 0xb3),  // purple
        4 => rgb8(0x63, 0xd4, 0xd3),  // bright blue
        5 => rgb8(0xff, 0x69, 0xb4),  // pink
        6 => rgb8(0xd0, 0x87, 0x0e),  // orange
        7 => rgb8(0x70, 0x70, 0x70),  // gray
        8 => rgb8(0xe6, 0xc6, 0x19),  // yellow
        9 => rgb8(0x00, 0x9d, 0x9d),  // cyan
        10 => rgb8(0x42, 0x42, 0xff), // blue
        11 => rgb8(0x70, 0x42, 0x14), // brown
        12 => rgb8(0x75, 0x92, 0x9b), // light blue
        _ => return None,
    };
    Some(color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_non_blank_value_has_a_distinct_color() {
        let colors: HashSet<(u8, u8, u8)> = Pips::all()
            .filter_map(pip_color)
            .map(|c| (c.red, c.green, c.blue))
            .collect();
        assert_eq!(colors.len(), 12);
        assert_eq!(pip_color(Pips::BLANK), None);
    }
}
