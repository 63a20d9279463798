pub mod angle;
pub mod boneyard;
pub mod domino;
pub mod hub;
pub mod palette;
pub mod pips;
pub mod position;
pub mod snapshot;

pub use angle::Angle;
pub use boneyard::Boneyard;
pub use domino::{Domino, Half};
pub use hub::{Branch, Hub, BRANCH_COUNT};
pub use pips::{pip_layout, PipOffsetBuilder, Pips};
pub use position::Position;
pub use snapshot::TableSnapshot;
