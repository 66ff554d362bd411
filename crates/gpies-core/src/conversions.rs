//! Unit conversions used by the reference presets

use crate::GpFloat;

/// Offset between degrees Celsius and Kelvin
pub const CELSIUS_KELVIN_OFFSET: GpFloat = 273.15;

/// Femtoseconds per second
pub const SEC_FS: GpFloat = 1e15;

/// Centimeters per picometer
pub const PM_CM: GpFloat = 1e-10;

#[inline]
pub fn celsius_to_kelvin(celsius: GpFloat) -> GpFloat {
    celsius + CELSIUS_KELVIN_OFFSET
}

#[inline]
pub fn sec_to_fs(seconds: GpFloat) -> GpFloat {
    seconds * SEC_FS
}

#[inline]
pub fn pm_to_cm(picometers: GpFloat) -> GpFloat {
    picometers * PM_CM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_celsius_to_kelvin() {
        assert_eq!(celsius_to_kelvin(0.0), 273.15);
        assert_eq!(celsius_to_kelvin(-273.15), 0.0);
    }

    #[test]
    fn test_pm_to_cm() {
        // fcc nickel lattice parameter
        let a = pm_to_cm(360.0);
        assert!(((a - 3.6e-8) / 3.6e-8).abs() < 1e-6);
    }

    #[test]
    fn test_sec_to_fs() {
        assert_eq!(sec_to_fs(1.0), 1e15);
    }
}
