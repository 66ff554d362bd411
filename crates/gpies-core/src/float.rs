//! Simulation floating-point precision

/// Scalar type shared by timings and physical quantities.
#[cfg(not(feature = "single-precision"))]
pub type GpFloat = f64;

/// Scalar type shared by timings and physical quantities.
#[cfg(feature = "single-precision")]
pub type GpFloat = f32;

/// Bit width of `GpFloat` in the current build
pub const GP_FLOAT_BITS: u32 = (std::mem::size_of::<GpFloat>() * 8) as u32;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precision_matches_feature() {
        if cfg!(feature = "single-precision") {
            assert_eq!(GP_FLOAT_BITS, 32);
        } else {
            assert_eq!(GP_FLOAT_BITS, 64);
        }
    }
}
