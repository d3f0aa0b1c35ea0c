//! # Coordinate Systems
//!
//! Three representations of a point in 3D space, all generic over the
//! [`Scalar`] used for their components:
//!
//! - [`Cartesian3D`]: x, y, z
//! - [`Polar3D`]: r, theta, phi
//! - [`CylindricalEta3D`]: rho, eta, phi
//!
//! Any type implementing [`Coordinates3D`] can be converted into any of them.

pub mod cartesian;
pub mod cylindrical_eta;
pub mod polar;

pub use cartesian::{Cartesian3D, XYZVector, XYZVectorF};
pub use cylindrical_eta::CylindricalEta3D;
pub use polar::Polar3D;

use crate::constants::{big_z_scaled, eta_max};
use crate::scalar::Scalar;
use nalgebra::Vector3;

/// Capability shared by everything that can report Cartesian components
///
/// Conversions between coordinate systems only go through this trait, so a
/// new representation (or a foreign vector type) interoperates with every
/// system in the crate by implementing these three accessors.
pub trait Coordinates3D<T: Scalar> {
    /// X component
    fn x(&self) -> T;
    /// Y component
    fn y(&self) -> T;
    /// Z component
    fn z(&self) -> T;
}

impl<T: Scalar> Coordinates3D<T> for [T; 3] {
    fn x(&self) -> T {
        self[0]
    }
    fn y(&self) -> T {
        self[1]
    }
    fn z(&self) -> T {
        self[2]
    }
}

impl<T: Scalar> Coordinates3D<T> for (T, T, T) {
    fn x(&self) -> T {
        self.0
    }
    fn y(&self) -> T {
        self.1
    }
    fn z(&self) -> T {
        self.2
    }
}

impl<T: Scalar + nalgebra::Scalar> Coordinates3D<T> for Vector3<T> {
    fn x(&self) -> T {
        self[0]
    }
    fn y(&self) -> T {
        self[1]
    }
    fn z(&self) -> T {
        self[2]
    }
}

/// Pseudorapidity of a point from its transverse magnitude and z component
///
/// `-ln(tan(theta/2))` loses all precision near the z axis, so this uses
/// three regimes instead:
///
/// - `rho > 0` and `|z|/rho` below [`big_z_scaled`]: `asinh(z/rho)` written
///   as `ln(z/rho + sqrt((z/rho)² + 1))`
/// - `rho > 0` and `|z|/rho` above it: the asymptotic `±ln(2|z|/rho)`
/// - `rho == 0`: `0` at the origin, otherwise `z ± eta_max` so on-axis points
///   saturate instead of returning an infinity
pub fn eta_from_rho_z<T: Scalar>(rho: T, z: T) -> T {
    let zero = T::zero();
    if rho > zero {
        let z_scaled = z / rho;
        if z_scaled.abs() < big_z_scaled::<T>() {
            (z_scaled + (z_scaled * z_scaled + T::one()).sqrt()).ln()
        } else {
            log::trace!("asymptotic pseudorapidity for z/rho = {z_scaled:?}");
            if z > zero {
                z_scaled.twice().ln()
            } else {
                -(-z_scaled.twice()).ln()
            }
        }
    } else if z == zero {
        zero
    } else if z > zero {
        log::trace!("on-axis pseudorapidity saturated for z = {z:?}");
        z + eta_max::<T>()
    } else {
        log::trace!("on-axis pseudorapidity saturated for z = {z:?}");
        z - eta_max::<T>()
    }
}

/// Wrap an azimuthal angle into `(-π, π]`
pub(crate) fn restrict_phi<T: Scalar>(phi: T) -> T {
    let pi = T::pi();
    if phi <= -pi || phi > pi {
        let two_pi = pi.twice();
        // [0, 2π) for floats; integer division truncates, leaving (-2π, 2π)
        let wrapped = phi - (phi / two_pi).floor() * two_pi;
        if wrapped > pi {
            wrapped - two_pi
        } else if wrapped <= -pi {
            wrapped + two_pi
        } else {
            wrapped
        }
    } else {
        phi
    }
}
