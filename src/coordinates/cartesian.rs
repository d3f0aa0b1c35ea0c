//! # Cartesian Coordinate System Module
//!
//! This module provides the 3D Cartesian coordinate representation used as
//! the storage format of most vectors in physics analysis code.
//!
//! ## Internal Storage
//!
//! Coordinates are stored as three scalars x, y and z:
//! - No normalization is applied, the vector need not be a unit vector
//! - Setters touch exactly the component they name
//! - The scalar type is generic; `f64` is the default
//!
//! ## Derived Quantities
//!
//! Magnitudes, angles and the pseudorapidity are computed on demand from the
//! stored components:
//!
//! | Accessor | Formula |
//! |---|---|
//! | `mag2` | x² + y² + z² |
//! | `perp2` | x² + y² |
//! | `rho` | sqrt(perp2) |
//! | `r` | sqrt(mag2) |
//! | `theta` | atan2(rho, z), 0 at the origin |
//! | `phi` | atan2(y, x), 0 on the z axis |
//! | `eta` | see [`eta_from_rho_z`] |
//!
//! ## Quantities That Are Not Stored
//!
//! `set_r`, `set_theta`, `set_phi`, `set_rho` and `set_eta` exist for
//! compatibility with code written against the other coordinate systems.
//! Calling them is a usage error: each one logs and returns
//! [`crate::errors::GenVectorError::SetNotSupported`], but only after applying the change
//! through a [`Polar3D`] or [`CylindricalEta3D`] round trip.
//!
//! ## Examples
//!
//! ```rust
//! use genvector::coordinates::Cartesian3D;
//!
//! let v = Cartesian3D::new(3.0, 4.0, 0.0);
//! assert_eq!(v.rho(), 5.0);
//! assert_eq!(v.r(), 5.0);
//! assert_eq!(v.theta(), std::f64::consts::FRAC_PI_2);
//! assert_eq!(v.eta(), 0.0);
//! ```

use super::{eta_from_rho_z, Coordinates3D, CylindricalEta3D, Polar3D};
use crate::errors::{check_length, set_not_supported, Result};
use crate::scalar::Scalar;
use nalgebra::Vector3;

/// Three-dimensional Cartesian coordinate representation
///
/// Equality is exact: two values compare equal only if all three components
/// compare equal with `==`. There is no tolerance, and a value holding a NaN
/// component is not equal to itself.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cartesian3D<T = f64> {
    x: T,
    y: T,
    z: T,
}

/// Double precision Cartesian vector
pub type XYZVector = Cartesian3D<f64>;

/// Single precision Cartesian vector
pub type XYZVectorF = Cartesian3D<f32>;

impl<T: Scalar> Cartesian3D<T> {
    /// Creates a new Cartesian coordinate
    ///
    /// # Examples
    ///
    /// ```rust
    /// use genvector::coordinates::Cartesian3D;
    ///
    /// let coord = Cartesian3D::new(1.0, 2.0, 3.0);
    /// assert_eq!(coord.x(), 1.0);
    /// assert_eq!(coord.y(), 2.0);
    /// assert_eq!(coord.z(), 3.0);
    /// ```
    pub fn new(x: T, y: T, z: T) -> Self {
        Cartesian3D { x, y, z }
    }

    /// Creates the origin (0, 0, 0)
    pub fn new_zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Creates a Cartesian coordinate from any coordinate system
    ///
    /// # Examples
    ///
    /// ```rust
    /// use genvector::coordinates::{Cartesian3D, Polar3D};
    ///
    /// let from_array = Cartesian3D::from_coordinates(&[1.0, 2.0, 3.0]);
    /// assert_eq!(from_array, Cartesian3D::new(1.0, 2.0, 3.0));
    ///
    /// let polar = Polar3D::new(2.0, 0.0, 0.0);
    /// let on_axis = Cartesian3D::from_coordinates(&polar);
    /// assert_eq!(on_axis.z(), 2.0);
    /// ```
    pub fn from_coordinates<C: Coordinates3D<T> + ?Sized>(source: &C) -> Self {
        Self::new(source.x(), source.y(), source.z())
    }

    /// Overwrites this coordinate with the components of any coordinate system
    pub fn assign<C: Coordinates3D<T> + ?Sized>(&mut self, source: &C) -> &mut Self {
        self.x = source.x();
        self.y = source.y();
        self.z = source.z();
        self
    }

    /// Sets the components from a slice of exactly three scalars
    ///
    /// # Errors
    ///
    /// [`crate::errors::GenVectorError::InvalidLength`] if `src` does not hold three
    /// elements. The coordinate is left untouched in that case.
    pub fn set_coordinates_slice(&mut self, src: &[T]) -> Result<()> {
        check_length(3, src.len())?;
        self.set_coordinates(src[0], src[1], src[2]);
        Ok(())
    }

    /// Copies the components into a slice of exactly three scalars
    ///
    /// # Errors
    ///
    /// [`crate::errors::GenVectorError::InvalidLength`] if `dest` does not hold three
    /// elements.
    pub fn get_coordinates_into(&self, dest: &mut [T]) -> Result<()> {
        check_length(3, dest.len())?;
        dest.copy_from_slice(&self.coordinates());
        Ok(())
    }

    /// Sets all three components at once
    pub fn set_coordinates(&mut self, x: T, y: T, z: T) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    /// Returns the `(x, y, z)` components
    pub fn get_coordinates(&self) -> (T, T, T) {
        (self.x, self.y, self.z)
    }

    /// Returns the components as an array
    pub fn coordinates(&self) -> [T; 3] {
        [self.x, self.y, self.z]
    }

    /// The x component
    #[inline]
    pub fn x(&self) -> T {
        self.x
    }

    /// The y component
    #[inline]
    pub fn y(&self) -> T {
        self.y
    }

    /// The z component
    #[inline]
    pub fn z(&self) -> T {
        self.z
    }

    /// Squared magnitude x² + y² + z²
    #[inline]
    pub fn mag2(&self) -> T {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Squared transverse magnitude x² + y²
    #[inline]
    pub fn perp2(&self) -> T {
        self.x * self.x + self.y * self.y
    }

    /// Transverse magnitude, the distance to the z axis
    #[inline]
    pub fn rho(&self) -> T {
        self.perp2().sqrt()
    }

    /// Magnitude, the distance to the origin
    #[inline]
    pub fn r(&self) -> T {
        self.mag2().sqrt()
    }

    /// Polar angle measured from the +z axis, in `[0, π]`
    ///
    /// Returns exactly zero at the origin.
    pub fn theta(&self) -> T {
        let zero = T::zero();
        if self.x == zero && self.y == zero && self.z == zero {
            zero
        } else {
            self.rho().atan2(self.z)
        }
    }

    /// Azimuthal angle in the x-y plane, in `(-π, π]`
    ///
    /// Returns exactly zero for points on the z axis.
    pub fn phi(&self) -> T {
        let zero = T::zero();
        if self.x == zero && self.y == zero {
            zero
        } else {
            self.y.atan2(self.x)
        }
    }

    /// Pseudorapidity
    ///
    /// # Examples
    ///
    /// ```rust
    /// use genvector::constants::eta_max;
    /// use genvector::coordinates::Cartesian3D;
    ///
    /// // asinh(1)
    /// let v = Cartesian3D::new(1.0_f64, 0.0, 1.0);
    /// assert!((v.eta() - 0.881373587019543).abs() < 1e-14);
    ///
    /// // On the z axis the pseudorapidity saturates
    /// let beam = Cartesian3D::new(0.0, 0.0, 2.0);
    /// assert_eq!(beam.eta(), 2.0 + eta_max::<f64>());
    /// ```
    pub fn eta(&self) -> T {
        eta_from_rho_z(self.rho(), self.z)
    }

    /// Sets the x component, keeping y and z
    pub fn set_x(&mut self, x: T) {
        self.x = x;
    }

    /// Sets the y component, keeping x and z
    pub fn set_y(&mut self, y: T) {
        self.y = y;
    }

    /// Sets the z component, keeping x and y
    pub fn set_z(&mut self, z: T) {
        self.z = z;
    }

    /// Multiplies every component by `a`
    pub fn scale(&mut self, a: T) {
        self.x = self.x * a;
        self.y = self.y * a;
        self.z = self.z * a;
    }

    /// Flips the sign of every component
    pub fn negate(&mut self) {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
    }

    /// Sets the magnitude, keeping theta and phi
    ///
    /// # Errors
    ///
    /// Always returns [`crate::errors::GenVectorError::SetNotSupported`]; the magnitude has
    /// been updated by the time it does.
    pub fn set_r(&mut self, r: T) -> Result<()> {
        let err = set_not_supported("Cartesian3D::set_r");
        let mut polar = Polar3D::from(*self);
        polar.set_r(r);
        *self = Self::from(polar);
        Err(err)
    }

    /// Sets the polar angle, keeping r and phi
    ///
    /// # Errors
    ///
    /// Always returns [`crate::errors::GenVectorError::SetNotSupported`] after applying the
    /// change.
    pub fn set_theta(&mut self, theta: T) -> Result<()> {
        let err = set_not_supported("Cartesian3D::set_theta");
        let mut polar = Polar3D::from(*self);
        polar.set_theta(theta);
        *self = Self::from(polar);
        Err(err)
    }

    /// Sets the azimuthal angle, keeping r and theta
    ///
    /// # Errors
    ///
    /// Always returns [`crate::errors::GenVectorError::SetNotSupported`] after applying the
    /// change.
    pub fn set_phi(&mut self, phi: T) -> Result<()> {
        let err = set_not_supported("Cartesian3D::set_phi");
        let mut polar = Polar3D::from(*self);
        polar.set_phi(phi);
        *self = Self::from(polar);
        Err(err)
    }

    /// Sets the transverse magnitude, keeping eta and phi
    ///
    /// # Errors
    ///
    /// Always returns [`crate::errors::GenVectorError::SetNotSupported`] after applying the
    /// change.
    pub fn set_rho(&mut self, rho: T) -> Result<()> {
        let err = set_not_supported("Cartesian3D::set_rho");
        let mut cylindrical = CylindricalEta3D::from(*self);
        cylindrical.set_rho(rho);
        *self = Self::from(cylindrical);
        Err(err)
    }

    /// Sets the pseudorapidity, keeping rho and phi
    ///
    /// # Errors
    ///
    /// Always returns [`crate::errors::GenVectorError::SetNotSupported`] after applying the
    /// change.
    pub fn set_eta(&mut self, eta: T) -> Result<()> {
        let err = set_not_supported("Cartesian3D::set_eta");
        let mut cylindrical = CylindricalEta3D::from(*self);
        cylindrical.set_eta(eta);
        *self = Self::from(cylindrical);
        Err(err)
    }
}

impl<T: Scalar + nalgebra::Scalar> Cartesian3D<T> {
    /// Converts to nalgebra Vector3 for linear algebra operations
    ///
    /// # Examples
    ///
    /// ```rust
    /// use genvector::coordinates::Cartesian3D;
    /// use nalgebra::Vector3;
    ///
    /// let coord = Cartesian3D::new(1.0, 2.0, 3.0);
    /// let vec: Vector3<f64> = coord.to_vector3();
    /// assert_eq!(vec, Vector3::new(1.0, 2.0, 3.0));
    /// ```
    pub fn to_vector3(&self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }
}

impl<T: Scalar> Coordinates3D<T> for Cartesian3D<T> {
    fn x(&self) -> T {
        self.x
    }
    fn y(&self) -> T {
        self.y
    }
    fn z(&self) -> T {
        self.z
    }
}

impl<T: Scalar + nalgebra::Scalar> From<Vector3<T>> for Cartesian3D<T> {
    fn from(vec: Vector3<T>) -> Self {
        Self::from_coordinates(&vec)
    }
}

// Reading rho and phi once (and taking cos/sin of phi once) is cheaper than
// going through Polar3D::x() and Polar3D::y(), which each recompute them.
impl<T: Scalar> From<&Polar3D<T>> for Cartesian3D<T> {
    fn from(polar: &Polar3D<T>) -> Self {
        let rho = polar.rho();
        let phi = polar.phi();
        Cartesian3D {
            x: rho * phi.cos(),
            y: rho * phi.sin(),
            z: polar.z(),
        }
    }
}

impl<T: Scalar> From<Polar3D<T>> for Cartesian3D<T> {
    fn from(polar: Polar3D<T>) -> Self {
        Self::from(&polar)
    }
}

impl<T: Scalar> From<&CylindricalEta3D<T>> for Cartesian3D<T> {
    fn from(cylindrical: &CylindricalEta3D<T>) -> Self {
        let rho = cylindrical.rho();
        let phi = cylindrical.phi();
        Cartesian3D {
            x: rho * phi.cos(),
            y: rho * phi.sin(),
            z: cylindrical.z(),
        }
    }
}

impl<T: Scalar> From<CylindricalEta3D<T>> for Cartesian3D<T> {
    fn from(cylindrical: CylindricalEta3D<T>) -> Self {
        Self::from(&cylindrical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::eta_max;
    use crate::errors::GenVectorError;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_cartesian_creation() {
        let coord = Cartesian3D::new(1.0, 2.0, 3.0);
        assert_eq!(coord.x(), 1.0);
        assert_eq!(coord.y(), 2.0);
        assert_eq!(coord.z(), 3.0);

        let zero: XYZVector = Cartesian3D::default();
        assert_eq!(zero, Cartesian3D::new_zero());
        assert_eq!(zero.coordinates(), [0.0; 3]);
    }

    #[test]
    fn test_bulk_access() {
        let mut coord: XYZVector = Cartesian3D::new_zero();
        coord.set_coordinates_slice(&[4.0, 5.0, 6.0]).unwrap();
        assert_eq!(coord.get_coordinates(), (4.0, 5.0, 6.0));

        let mut dest = [0.0; 3];
        coord.get_coordinates_into(&mut dest).unwrap();
        assert_eq!(dest, [4.0, 5.0, 6.0]);

        coord.set_coordinates(7.0, 8.0, 9.0);
        assert_eq!(coord.coordinates(), [7.0, 8.0, 9.0]);
    }

    #[test]
    fn test_bulk_access_wrong_length() {
        let mut coord = Cartesian3D::new(1.0, 2.0, 3.0);
        let err = coord.set_coordinates_slice(&[1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            GenVectorError::InvalidLength {
                expected: 3,
                actual: 2
            }
        );
        assert_eq!(coord, Cartesian3D::new(1.0, 2.0, 3.0));

        let mut dest = [0.0; 4];
        assert!(coord.get_coordinates_into(&mut dest).is_err());
    }

    #[test]
    fn test_single_component_setters() {
        let mut coord = Cartesian3D::new(1.0, 2.0, 3.0);
        coord.set_x(10.0);
        assert_eq!(coord, Cartesian3D::new(10.0, 2.0, 3.0));
        coord.set_y(20.0);
        assert_eq!(coord, Cartesian3D::new(10.0, 20.0, 3.0));
        coord.set_z(30.0);
        assert_eq!(coord, Cartesian3D::new(10.0, 20.0, 30.0));
    }

    #[test]
    fn test_magnitude_calculation() {
        let coord = Cartesian3D::new(3.0, 4.0, 12.0);
        assert_eq!(coord.perp2(), 25.0);
        assert_eq!(coord.rho(), 5.0);
        assert_eq!(coord.mag2(), 169.0);
        assert_eq!(coord.r(), 13.0);
    }

    #[test]
    fn test_angles() {
        let coord = Cartesian3D::new(3.0, 4.0, 0.0);
        assert_eq!(coord.theta(), PI / 2.0);
        assert_relative_eq!(coord.phi(), 0.9272952180016122);

        let down = Cartesian3D::new(0.0, 0.0, -1.0);
        assert_eq!(down.theta(), PI);
        assert_eq!(down.phi(), 0.0);

        let origin = Cartesian3D::<f64>::new_zero();
        assert_eq!(origin.theta(), 0.0);
        assert_eq!(origin.phi(), 0.0);
    }

    #[test]
    fn test_eta_branches() {
        assert_eq!(Cartesian3D::new(3.0, 4.0, 0.0).eta(), 0.0);
        assert_relative_eq!(Cartesian3D::new(0.0, 2.0, 2.0).eta(), 1.0_f64.asinh(), epsilon = 1e-14);
        assert_eq!(Cartesian3D::new(0.0, 0.0, 3.0).eta(), 3.0 + eta_max::<f64>());
        assert_eq!(Cartesian3D::new(0.0, 0.0, -3.0).eta(), -3.0 - eta_max::<f64>());
        assert_eq!(Cartesian3D::<f64>::new_zero().eta(), 0.0);
    }

    #[test]
    fn test_scale_and_negate() {
        let mut coord = Cartesian3D::new(1.0, -2.0, 3.0);
        coord.scale(2.0);
        assert_eq!(coord, Cartesian3D::new(2.0, -4.0, 6.0));
        coord.negate();
        assert_eq!(coord, Cartesian3D::new(-2.0, 4.0, -6.0));
    }

    #[test]
    fn test_exact_equality() {
        let a = Cartesian3D::new(1.0, 2.0, 3.0);
        assert_eq!(a, Cartesian3D::new(1.0, 2.0, 3.0));
        assert_ne!(a, Cartesian3D::new(1.0, 2.0, 3.0000001));

        let nan = Cartesian3D::new(f64::NAN, 0.0, 0.0);
        assert_ne!(nan, nan);
    }

    #[test]
    fn test_assign() {
        let mut coord: XYZVector = Cartesian3D::new_zero();
        coord.assign(&(1.0, 2.0, 3.0));
        assert_eq!(coord, Cartesian3D::new(1.0, 2.0, 3.0));

        coord.assign(&Polar3D::new(2.0, 0.0, 0.0));
        assert_eq!(coord, Cartesian3D::new(0.0, 0.0, 2.0));
    }

    #[test]
    fn test_from_polar_matches_generic_path() {
        let polar = Polar3D::new(2.0, 0.7, -1.3);
        let fast = Cartesian3D::from(polar);
        let generic = Cartesian3D::from_coordinates(&polar);
        assert_relative_eq!(fast.x(), generic.x(), epsilon = 1e-15);
        assert_relative_eq!(fast.y(), generic.y(), epsilon = 1e-15);
        assert_eq!(fast.z(), generic.z());
    }

    #[test]
    fn test_set_r_round_trips_through_polar() {
        let mut coord = Cartesian3D::new(3.0, 4.0, 0.0);
        let result = coord.set_r(10.0);
        assert_eq!(
            result,
            Err(GenVectorError::SetNotSupported {
                operation: "Cartesian3D::set_r"
            })
        );
        assert_relative_eq!(coord.x(), 6.0, epsilon = 1e-12);
        assert_relative_eq!(coord.y(), 8.0, epsilon = 1e-12);
        assert_relative_eq!(coord.z(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_angle_setters() {
        let mut coord = Cartesian3D::new(1.0, 0.0, 0.0);
        assert!(coord.set_theta(0.0).is_err());
        assert_relative_eq!(coord.z(), 1.0, epsilon = 1e-15);
        assert_relative_eq!(coord.rho(), 0.0, epsilon = 1e-15);

        let mut coord = Cartesian3D::new(1.0, 0.0, 0.0);
        assert!(coord.set_phi(PI / 2.0).is_err());
        assert_relative_eq!(coord.x(), 0.0, epsilon = 1e-15);
        assert_relative_eq!(coord.y(), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_cylindrical_setters() {
        let mut coord = Cartesian3D::new(3.0, 4.0, 2.0);
        let eta = coord.eta();
        assert!(coord.set_rho(10.0).is_err());
        assert_relative_eq!(coord.rho(), 10.0, epsilon = 1e-12);
        assert_relative_eq!(coord.eta(), eta, epsilon = 1e-12);
        assert_relative_eq!(coord.z(), 4.0, epsilon = 1e-12);

        let mut coord = Cartesian3D::new(1.0, 0.0, 0.0);
        let err = coord.set_eta(1.0).unwrap_err();
        assert_eq!(
            err,
            GenVectorError::SetNotSupported {
                operation: "Cartesian3D::set_eta"
            }
        );
        assert_relative_eq!(coord.z(), 1.0_f64.sinh(), epsilon = 1e-12);
        assert_relative_eq!(coord.rho(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_vector3_conversions() {
        let coord = Cartesian3D::new(1.0, 2.0, 3.0);
        let vec = coord.to_vector3();
        assert_eq!(vec, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(Cartesian3D::from(vec), coord);
    }

    #[test]
    fn test_integer_scalar() {
        let mut coord = Cartesian3D::<i32>::new(3, 4, 0);
        assert_eq!(coord.rho(), 5);
        assert_eq!(coord.r(), 5);
        assert_eq!(coord.theta(), 1); // π/2 truncated
        assert_eq!(coord.phi(), 0); // atan2(4, 3) ≈ 0.93 truncated
        assert_eq!(coord.eta(), 0);

        coord.scale(2);
        assert_eq!(coord, Cartesian3D::new(6, 8, 0));
        coord.negate();
        assert_eq!(coord.coordinates(), [-6, -8, 0]);

        let beam = Cartesian3D::<i64>::new(0, 0, 5);
        assert_eq!(beam.eta(), 5 + 22_756);
    }
}
