//! Near-equality checks for floating-point results
//!
//! The tolerance scales with the magnitude of the expected value:
//! `|expected| * 1e-12`. A fixed epsilon is meaningless for outputs that
//! span many orders of magnitude, e.g. concentrations near `1e-140` next to
//! temperatures near `600`.
//!
//! With an expected value of exactly zero the strict tolerance is zero and
//! the check degenerates to exact equality. Use [`NearCheck::with_floor`]
//! where results are expected to land near zero.

use gpies_core::{GpFloat, ScalarFields};
use thiserror::Error;

/// Relative tolerance applied by the strict check
pub const RELATIVE_TOLERANCE: GpFloat = 1e-12;

/// Two values were not near each other
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error(
    "expected {expected}, got {actual}: difference {difference} exceeds tolerance {tolerance}"
)]
pub struct NearMismatch {
    pub expected: GpFloat,
    pub actual: GpFloat,
    pub difference: GpFloat,
    pub tolerance: GpFloat,
}

/// A field of two records was not near
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{record}.{field}: {source}")]
pub struct FieldMismatch {
    pub record: &'static str,
    pub field: &'static str,
    pub source: NearMismatch,
}

/// Near-equality policy
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NearCheck {
    /// Multiplier on `|expected|`
    pub relative: GpFloat,
    /// Minimum tolerance regardless of magnitude
    pub absolute_floor: GpFloat,
}

impl Default for NearCheck {
    fn default() -> Self {
        Self::strict()
    }
}

impl NearCheck {
    /// Relative tolerance of `1e-12` with no floor
    pub const fn strict() -> Self {
        NearCheck {
            relative: RELATIVE_TOLERANCE,
            absolute_floor: 0.0,
        }
    }

    pub const fn with_floor(self, absolute_floor: GpFloat) -> Self {
        NearCheck {
            absolute_floor,
            ..self
        }
    }

    pub const fn with_relative(self, relative: GpFloat) -> Self {
        NearCheck { relative, ..self }
    }

    /// Allowed difference for a given expected value
    pub fn tolerance(&self, expected: GpFloat) -> GpFloat {
        (expected.abs() * self.relative).max(self.absolute_floor)
    }

    /// Check `actual` against `expected`.
    ///
    /// Identical values always pass, infinities included. NaN never passes,
    /// and an infinity only matches itself.
    pub fn check(&self, expected: GpFloat, actual: GpFloat) -> Result<(), NearMismatch> {
        if expected == actual {
            return Ok(());
        }

        let difference = (expected - actual).abs();
        let tolerance = self.tolerance(expected);
        let mismatch = NearMismatch {
            expected,
            actual,
            difference,
            tolerance,
        };

        if !expected.is_finite() || !actual.is_finite() {
            return Err(mismatch);
        }
        if difference <= tolerance {
            Ok(())
        } else {
            Err(mismatch)
        }
    }

    /// Panic with the mismatch if `actual` is not near `expected`
    #[track_caller]
    pub fn assert(&self, expected: GpFloat, actual: GpFloat) {
        if let Err(mismatch) = self.check(expected, actual) {
            panic!("values not near: {mismatch}");
        }
    }

    /// Check every scalar field of two records, stopping at the first miss
    pub fn check_fields<F: ScalarFields>(
        &self,
        expected: &F,
        actual: &F,
    ) -> Result<(), FieldMismatch> {
        let pairs = expected.field_values().into_iter().zip(actual.field_values());
        for (field, (e, a)) in F::FIELD_NAMES.iter().copied().zip(pairs) {
            self.check(e, a).map_err(|source| FieldMismatch {
                record: F::RECORD_NAME,
                field,
                source,
            })?;
        }
        Ok(())
    }

    /// Panic with the first field mismatch, if any
    #[track_caller]
    pub fn assert_fields<F: ScalarFields>(&self, expected: &F, actual: &F) {
        if let Err(mismatch) = self.check_fields(expected, actual) {
            panic!("fields not near: {mismatch}");
        }
    }
}

/// Strict check
pub fn check_near(expected: GpFloat, actual: GpFloat) -> Result<(), NearMismatch> {
    NearCheck::strict().check(expected, actual)
}

/// Strict assertion
#[track_caller]
pub fn assert_near(expected: GpFloat, actual: GpFloat) {
    NearCheck::strict().assert(expected, actual);
}

/// Strict check over every scalar field
pub fn check_fields_near<F: ScalarFields>(
    expected: &F,
    actual: &F,
) -> Result<(), FieldMismatch> {
    NearCheck::strict().check_fields(expected, actual)
}

/// Assert two floats are near.
///
/// `gp_assert_near!(expected, actual)` uses the strict check;
/// `gp_assert_near!(expected, actual, check)` uses the given [`NearCheck`].
#[macro_export]
macro_rules! gp_assert_near {
    ($expected:expr, $actual:expr $(,)?) => {
        $crate::assert_near($expected, $actual)
    };
    ($expected:expr, $actual:expr, $check:expr $(,)?) => {
        $crate::NearCheck::assert(&$check, $expected, $actual)
    };
}

/// Assert every scalar field of two records is near
#[macro_export]
macro_rules! gp_assert_fields_near {
    ($expected:expr, $actual:expr $(,)?) => {
        $crate::NearCheck::strict().assert_fields(&$expected, &$actual)
    };
    ($expected:expr, $actual:expr, $check:expr $(,)?) => {
        $crate::NearCheck::assert_fields(&$check, &$expected, &$actual)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpies_core::NuclearReactor;

    #[test]
    fn test_identical_values_pass() {
        for x in [0.0, -0.0, 1.0, -3.5, 1e-30, 6.02e23, GpFloat::MAX] {
            assert!(check_near(x, x).is_ok(), "{x} not near itself");
        }
    }

    #[test]
    fn test_within_relative_tolerance() {
        assert!(check_near(100.0, 100.0 + 1e-13).is_ok());
        gp_assert_near!(100.0, 100.0 + 1e-13);
    }

    #[test]
    fn test_outside_relative_tolerance() {
        let mismatch = check_near(100.0, 100.1).unwrap_err();
        assert_eq!(mismatch.expected, 100.0);
        assert_eq!(mismatch.actual, 100.1);
        assert_eq!(mismatch.tolerance, 100.0 * RELATIVE_TOLERANCE);
        assert!(mismatch.difference > mismatch.tolerance);
    }

    #[test]
    fn test_tolerance_scales_with_expected() {
        assert!(check_near(1e-9, 1e-9 * (1.0 + 1e-13)).is_ok());
        assert!(check_near(1e-9, 1.1e-9).is_err());
        assert!(check_near(1e3, 1e3 + 1e-10).is_ok());
    }

    #[test]
    fn test_zero_expected_is_exact_when_strict() {
        assert!(check_near(0.0, 0.0).is_ok());
        let mismatch = check_near(0.0, 1e-15).unwrap_err();
        assert_eq!(mismatch.tolerance, 0.0);
    }

    #[test]
    fn test_zero_expected_with_floor() {
        let check = NearCheck::strict().with_floor(1e-14);
        assert!(check.check(0.0, 1e-15).is_ok());
        assert!(check.check(0.0, 1e-13).is_err());
        gp_assert_near!(0.0, 1e-15, check);
    }

    #[test]
    fn test_floor_does_not_shrink_relative() {
        let check = NearCheck::strict().with_floor(1e-14);
        assert_eq!(check.tolerance(1e6), 1e6 * RELATIVE_TOLERANCE);
        assert_eq!(check.tolerance(0.0), 1e-14);
    }

    #[test]
    fn test_non_finite() {
        assert!(check_near(GpFloat::NAN, GpFloat::NAN).is_err());
        assert!(check_near(1.0, GpFloat::NAN).is_err());
        assert!(check_near(GpFloat::INFINITY, GpFloat::INFINITY).is_ok());
        assert!(check_near(GpFloat::INFINITY, 1.0).is_err());
        assert!(check_near(GpFloat::INFINITY, GpFloat::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_negative_expected() {
        assert!(check_near(-50.0, -50.0 - 1e-11).is_ok());
        assert!(check_near(-50.0, 50.0).is_err());
    }

    #[test]
    fn test_custom_relative() {
        let loose = NearCheck::strict().with_relative(1e-3);
        assert!(loose.check(100.0, 100.05).is_ok());
        assert!(loose.check(100.0, 100.2).is_err());
    }

    #[test]
    #[should_panic(expected = "values not near")]
    fn test_assert_near_panics() {
        assert_near(100.0, 100.1);
    }

    #[test]
    fn test_mismatch_message_carries_values() {
        let message = check_near(2.0, 3.0).unwrap_err().to_string();
        assert!(message.contains("expected 2"));
        assert!(message.contains("got 3"));
        assert!(message.contains("tolerance"));
    }

    #[test]
    fn test_fields_near_reports_field() {
        let expected = NuclearReactor {
            flux: 1.0,
            temperature: 600.0,
            ..NuclearReactor::default()
        };
        let mut actual = expected.clone();
        assert!(check_fields_near(&expected, &actual).is_ok());
        gp_assert_fields_near!(expected, actual);

        actual.temperature = 601.0;
        let mismatch = check_fields_near(&expected, &actual).unwrap_err();
        assert_eq!(mismatch.record, "NuclearReactor");
        assert_eq!(mismatch.field, "temperature");
        assert!(mismatch.to_string().starts_with("NuclearReactor.temperature"));
    }

    #[test]
    #[should_panic(expected = "fields not near")]
    fn test_assert_fields_panics() {
        let expected = NuclearReactor::default();
        let actual = NuclearReactor {
            v_quad: 1.0,
            ..NuclearReactor::default()
        };
        gp_assert_fields_near!(expected, actual, NearCheck::strict());
    }
}
