//! Constants module for coordinate-system calculations

use crate::scalar::Scalar;

// Pseudorapidity
/// Saturation value added to (or subtracted from) z when the pseudorapidity
/// of a point on the z axis is requested.
///
/// This is `ln(MAX/256) - ln(DENORM_MIN*256) + 16*ln(2)` evaluated over the
/// 80-bit extended-precision float range, rounded to the nearest integer.
/// No finite vector of any supported scalar type reaches this pseudorapidity
/// off axis.
pub const ETA_MAX_LIMIT: f64 = 22_756.0;

/// Pseudorapidity exponent used to derive the asymptotic-branch threshold
/// (`epsilon^BIG_Z_EXPONENT`)
pub const BIG_Z_EXPONENT: f64 = -0.6;

/// Maximum representable pseudorapidity for the scalar type `T`
///
/// # Examples
///
/// ```rust
/// use genvector::constants::{eta_max, ETA_MAX_LIMIT};
///
/// assert_eq!(eta_max::<f64>(), ETA_MAX_LIMIT);
/// assert_eq!(eta_max::<i32>(), 22_756);
/// ```
#[inline]
pub fn eta_max<T: Scalar>() -> T {
    T::from_f64(ETA_MAX_LIMIT)
}

/// Ratio `|z| / rho` above which pseudorapidity switches to the asymptotic
/// `ln(2 |z| / rho)` form, for the scalar type `T`
///
/// Grows as the scalar gets more precise. Integer types have a zero epsilon,
/// so their threshold saturates at the type's maximum.
#[inline]
pub fn big_z_scaled<T: Scalar>() -> T {
    T::epsilon().powf(BIG_Z_EXPONENT)
}
