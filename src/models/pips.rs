// src/models/pips.rs
//
// Pip values and the dot layout for one half of a domino.
//
// A half is laid out as up to three rows (index 0-2) of 1-4 pips each.
// Offsets are unit positions; the domino scales them when drawing.

use nannou::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{TableError, TableResult};

/// The number printed on one end of a domino, 0 through 12
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Pips(u8);

impl Pips {
    pub const BLANK: Pips = Pips(0);
    pub const MAX: Pips = Pips(12);

    pub fn new(value: u8) -> TableResult<Self> {
        if value > Self::MAX.0 {
            return Err(TableError::InvalidPips(value));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_blank(self) -> bool {
        self.0 == 0
    }

    /// Every legal value, blank first
    pub fn all() -> impl Iterator<Item = Pips> {
        (0..=Self::MAX.0).map(Pips)
    }
}

impl TryFrom<u8> for Pips {
    type Error = TableError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Pips::new(value)
    }
}

impl From<Pips> for u8 {
    fn from(pips: Pips) -> Self {
        pips.0
    }
}

impl fmt::Display for Pips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Offsets for a single row of pips
#[derive(Debug, Clone)]
pub struct PipOffsetBuilder {
    offsets: Vec<Vec2>,
}

impl PipOffsetBuilder {
    const ROW_POSITIONS: [&'static [f32]; 4] = [
        &[0.0],
        &[-1.0, 1.0],
        &[-1.0, 0.0, 1.0],
        &[-1.5, -0.5, 0.5, 1.5],
    ];

    /// `index` is the 0-based row, `quantity` the number of pips across it
    pub fn new(index: usize, quantity: usize) -> TableResult<Self> {
        if index > 2 {
            return Err(TableError::InvalidRowIndex(index));
        }
        if !(1..=4).contains(&quantity) {
            return Err(TableError::InvalidQuantity(quantity));
        }

        let row_offset = index as f32 - 1.0;
        let offsets = Self::ROW_POSITIONS[quantity - 1]
            .iter()
            .map(|&across| vec2(across, row_offset))
            .collect();

        Ok(Self { offsets })
    }

    pub fn offsets(&self) -> &[Vec2] {
        &self.offsets
    }

    pub fn into_offsets(self) -> Vec<Vec2> {
        self.offsets
    }
}

// Only called with literal rows and quantities that are in range
fn across(index: usize, quantity: usize) -> Vec<Vec2> {
    PipOffsetBuilder::new(index, quantity)
        .map(PipOffsetBuilder::into_offsets)
        .unwrap_or_default()
}

/// Unit offsets for every pip on a half showing `value`
pub fn pip_layout(value: Pips) -> Vec<Vec2> {
    let corners = [vec2(-1.0, 1.0), vec2(1.0, -1.0)];

    let rows: Vec<Vec<Vec2>> = match value.value() {
        0 => vec![],
        1 => vec![across(1, 1)],
        2 => vec![corners.to_vec()],
        3 => vec![vec![corners[0]], across(1, 1), vec![corners[1]]],
        4 => vec![across(0, 2), across(2, 2)],
        5 => vec![across(0, 2), across(1, 1), across(2, 2)],
        6 => vec![across(0, 3), across(2, 3)],
        7 => vec![across(0, 3), across(1, 1), across(2, 3)],
        8 => vec![across(0, 3), across(1, 2), across(2, 3)],
        9 => vec![across(0, 3), across(1, 3), across(2, 3)],
        10 => vec![
            across(0, 4),
            vec![vec2(-1.5, 0.0), vec2(1.5, 0.0)],
            across(2, 4),
        ],
        11 => vec![
            across(0, 4),
            vec![vec2(-1.5, 0.0), vec2(0.0, 0.0), vec2(1.5, 0.0)],
            across(2, 4),
        ],
        _ => vec![across(0, 4), across(1, 4), across(2, 4)],
    };

    rows.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    mod pips_tests {
        use super::*;

        #[test]
        fn test_valid_range() {
            for value in 0..=12 {
                assert_eq!(Pips::new(value).unwrap().value(), value);
            }
            assert_eq!(Pips::all().count(), 13);
        }

        #[test]
        fn test_out_of_range_is_rejected() {
            assert_eq!(Pips::new(13), Err(TableError::InvalidPips(13)));
            assert_eq!(Pips::new(255), Err(TableError::InvalidPips(255)));
        }

        #[test]
        fn test_deserialize_validates() {
            let ok: Pips = serde_json::from_str("7").unwrap();
            assert_eq!(ok.value(), 7);
            assert!(serde_json::from_str::<Pips>("13").is_err());
        }
    }

    mod builder_tests {
        use super::*;

        #[rstest]
        #[case(0, 1)]
        #[case(1, 2)]
        #[case(2, 3)]
        #[case(0, 4)]
        #[case(2, 4)]
        fn test_returns_quantity_offsets(#[case] index: usize, #[case] quantity: usize) {
            let builder = PipOffsetBuilder::new(index, quantity).unwrap();
            assert_eq!(builder.offsets().len(), quantity);
            let expected_row = index as f32 - 1.0;
            assert!(builder.offsets().iter().all(|o| o.y == expected_row));
        }

        #[rstest]
        #[case(3, 1)]
        #[case(10, 2)]
        fn test_rejects_bad_index(#[case] index: usize, #[case] quantity: usize) {
            assert_eq!(
                PipOffsetBuilder::new(index, quantity).unwrap_err(),
                TableError::InvalidRowIndex(index)
            );
        }

        #[rstest]
        #[case(0, 0)]
        #[case(1, 5)]
        #[case(2, 100)]
        fn test_rejects_bad_quantity(#[case] index: usize, #[case] quantity: usize) {
            assert_eq!(
                PipOffsetBuilder::new(index, quantity).unwrap_err(),
                TableError::InvalidQuantity(quantity)
            );
        }

        #[test]
        fn test_four_across_positions() {
            let builder = PipOffsetBuilder::new(0, 4).unwrap();
            let xs: Vec<f32> = builder.offsets().iter().map(|o| o.x).collect();
            assert_eq!(xs, vec![-1.5, -0.5, 0.5, 1.5]);
        }
    }

    mod layout_tests {
        use super::*;

        #[test]
        fn test_layout_count_matches_value() {
            for pips in Pips::all() {
                assert_eq!(pip_layout(pips).len(), pips.value() as usize, "value {}", pips);
            }
        }

        #[test]
        fn test_blank_has_no_pips() {
            assert!(pip_layout(Pips::BLANK).is_empty());
        }

        #[test]
        fn test_one_is_centered() {
            assert_eq!(pip_layout(Pips::new(1).unwrap()), vec![vec2(0.0, 0.0)]);
        }

        #[test]
        fn test_two_and_three_use_corners() {
            let two = pip_layout(Pips::new(2).unwrap());
            assert_eq!(two, vec![vec2(-1.0, 1.0), vec2(1.0, -1.0)]);

            let three = pip_layout(Pips::new(3).unwrap());
            assert_eq!(
                three,
                vec![vec2(-1.0, 1.0), vec2(0.0, 0.0), vec2(1.0, -1.0)]
            );
        }

        fn row(y: f32, xs: &[f32]) -> Vec<Vec2> {
            xs.iter().map(|&x| vec2(x, y)).collect()
        }

        #[rstest]
        #[case(0, vec![])]
        #[case(1, row(0.0, &[0.0]))]
        #[case(2, vec![vec2(-1.0, 1.0), vec2(1.0, -1.0)])]
        #[case(3, vec![vec2(-1.0, 1.0), vec2(0.0, 0.0), vec2(1.0, -1.0)])]
        #[case(4, [row(-1.0, &[-1.0, 1.0]), row(1.0, &[-1.0, 1.0])].concat())]
        #[case(5, [row(-1.0, &[-1.0, 1.0]), row(0.0, &[0.0]), row(1.0, &[-1.0, 1.0])].concat())]
        #[case(6, [row(-1.0, &[-1.0, 0.0, 1.0]), row(1.0, &[-1.0, 0.0, 1.0])].concat())]
        #[case(7, [row(-1.0, &[-1.0, 0.0, 1.0]), row(0.0, &[0.0]), row(1.0, &[-1.0, 0.0, 1.0])].concat())]
        #[case(8, [row(-1.0, &[-1.0, 0.0, 1.0]), row(0.0, &[-1.0, 1.0]), row(1.0, &[-1.0, 0.0, 1.0])].concat())]
        #[case(9, [row(-1.0, &[-1.0, 0.0, 1.0]), row(0.0, &[-1.0, 0.0, 1.0]), row(1.0, &[-1.0, 0.0, 1.0])].concat())]
        #[case(10, [row(-1.0, &[-1.5, -0.5, 0.5, 1.5]), row(0.0, &[-1.5, 1.5]), row(1.0, &[-1.5, -0.5, 0.5, 1.5])].concat())]
        #[case(11, [row(-1.0, &[-1.5, -0.5, 0.5, 1.5]), row(0.0, &[-1.5, 0.0, 1.5]), row(1.0, &[-1.5, -0.5, 0.5, 1.5])].concat())]
        #[case(12, [row(-1.0, &[-1.5, -0.5, 0.5, 1.5]), row(0.0, &[-1.5, -0.5, 0.5, 1.5]), row(1.0, &[-1.5, -0.5, 0.5, 1.5])].concat())]
        fn test_layout_table(#[case] value: u8, #[case] expected: Vec<Vec2>) {
            assert_eq!(pip_layout(Pips::new(value).unwrap()), expected);
        }
    }
}
