//! Decoded magnetic-field values.

use core::fmt::{Debug, Display, Formatter};

/// One X/Y field measurement in sensor counts. Each axis is the
/// sign-extended value of a 24-bit two's-complement result field.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisPair {
    pub x: i32,
    pub y: i32,
}

impl Display for AxisPair {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "X: {}\tY: {}", self.x, self.y)
    }
}
