// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bounded integer range shared by every numeric light parameter.
//!
//! Bounds are stored as given: nothing checks that `min <= max`. Callers
//! that set an inverted range get a range that contains nothing, and
//! [`ParameterRange::clamp`] keeps working without panicking.

use std::fmt;

use crate::error::ValueError;

/// Inclusive range `[min, max]` for an integer parameter.
///
/// # Examples
///
/// ```
/// use lumen_lights::types::ParameterRange;
///
/// let range = ParameterRange::new(0, 255);
/// assert!(range.contains(128));
/// assert!(!range.contains(256));
/// assert_eq!(range.clamp(300), 255);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ParameterRange {
    min: i32,
    max: i32,
}

impl ParameterRange {
    /// The 8-bit range `[0, 255]` used by default for intensity and CCT.
    pub const BYTE: Self = Self::new(0, 255);

    /// Creates a new range. The bounds are not validated.
    #[must_use]
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Returns the lower bound.
    #[must_use]
    pub const fn min(&self) -> i32 {
        self.min
    }

    /// Returns the upper bound.
    #[must_use]
    pub const fn max(&self) -> i32 {
        self.max
    }

    /// Overwrites the lower bound.
    pub fn set_min(&mut self, min: i32) {
        self.min = min;
    }

    /// Overwrites the upper bound.
    pub fn set_max(&mut self, max: i32) {
        self.max = max;
    }

    /// Returns `true` if `value` lies within `[min, max]`.
    #[must_use]
    pub const fn contains(&self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Constrains `value` to the range.
    ///
    /// Unlike [`Ord::clamp`] this never panics: with an inverted range the
    /// lower bound wins for small values and the upper bound for large ones.
    #[must_use]
    pub const fn clamp(&self, value: i32) -> i32 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// Validates `value` against the range.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if `value` is outside `[min, max]`.
    pub fn check(&self, value: i32) -> Result<i32, ValueError> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(ValueError::OutOfRange {
                min: self.min,
                max: self.max,
                actual: value,
            })
        }
    }

    /// Linearly maps `value` from this range onto `target`.
    ///
    /// The result is truncated toward zero and saturates at the `i32` bounds.
    /// Returns `None` when this range has zero width, since no relative
    /// position can be computed.
    ///
    /// # Examples
    ///
    /// ```
    /// use lumen_lights::types::ParameterRange;
    ///
    /// let old = ParameterRange::new(0, 255);
    /// let new = ParameterRange::new(0, 1000);
    /// assert_eq!(old.map_to(64, &new), Some(250));
    /// ```
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn map_to(&self, value: i32, target: &Self) -> Option<i32> {
        if self.max == self.min {
            return None;
        }
        let offset = i64::from(value) - i64::from(self.min);
        let width = i64::from(self.max) - i64::from(self.min);
        let target_width = i64::from(target.max) - i64::from(target.min);
        let fraction = offset as f32 / width as f32;
        let mapped = target.min as f32 + target_width as f32 * fraction;
        Some(mapped as i32)
    }
}

impl Default for ParameterRange {
    fn default() -> Self {
        Self::BYTE
    }
}

impl fmt::Display for ParameterRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

impl From<(i32, i32)> for ParameterRange {
    fn from((min, max): (i32, i32)) -> Self {
        Self::new(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_byte_range() {
        let range = ParameterRange::default();
        assert_eq!(range.min(), 0);
        assert_eq!(range.max(), 255);
    }

    #[test]
    fn contains_is_inclusive() {
        let range = ParameterRange::new(10, 20);
        assert!(range.contains(10));
        assert!(range.contains(20));
        assert!(!range.contains(9));
        assert!(!range.contains(21));
    }

    #[test]
    fn clamp_constrains_values() {
        let range = ParameterRange::new(10, 20);
        assert_eq!(range.clamp(5), 10);
        assert_eq!(range.clamp(15), 15);
        assert_eq!(range.clamp(25), 20);
    }

    #[test]
    fn clamp_inverted_range_does_not_panic() {
        let range = ParameterRange::new(20, 10);
        assert_eq!(range.clamp(5), 20);
        assert_eq!(range.clamp(25), 10);
        assert!(!range.contains(15));
    }

    #[test]
    fn check_reports_out_of_range() {
        let range = ParameterRange::BYTE;
        assert_eq!(range.check(42), Ok(42));
        assert_eq!(
            range.check(-1),
            Err(ValueError::OutOfRange {
                min: 0,
                max: 255,
                actual: -1
            })
        );
    }

    #[test]
    fn map_to_scales_proportionally() {
        let old = ParameterRange::new(0, 255);
        assert_eq!(old.map_to(0, &ParameterRange::new(0, 1000)), Some(0));
        assert_eq!(old.map_to(255, &ParameterRange::new(0, 1000)), Some(1000));
        assert_eq!(old.map_to(64, &ParameterRange::new(0, 1000)), Some(250));
        assert_eq!(old.map_to(128, &ParameterRange::new(100, 200)), Some(150));
    }

    #[test]
    fn map_to_zero_width_range() {
        let degenerate = ParameterRange::new(5, 5);
        assert_eq!(degenerate.map_to(5, &ParameterRange::BYTE), None);
    }

    #[test]
    fn display_and_from_tuple() {
        let range: ParameterRange = (3, 9).into();
        assert_eq!(range.to_string(), "[3, 9]");
    }

    #[test]
    fn map_to_handles_extreme_bounds() {
        let wide = ParameterRange::new(-2_000_000_000, 2_000_000_000);
        assert_eq!(wide.map_to(0, &ParameterRange::BYTE), Some(127));
        assert_eq!(wide.map_to(2_000_000_000, &ParameterRange::BYTE), Some(255));

        let full = ParameterRange::new(i32::MIN, i32::MAX);
        assert_eq!(ParameterRange::BYTE.map_to(255, &full), Some(i32::MAX));
        assert_eq!(ParameterRange::BYTE.map_to(0, &full), Some(i32::MIN));
        assert_eq!(full.map_to(i32::MIN, &ParameterRange::BYTE), Some(0));
    }
}
