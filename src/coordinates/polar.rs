//! # Polar Coordinate System Module
//!
//! Spherical-polar representation of a 3D point: the magnitude `r`, the
//! polar angle `theta` measured from the +z axis and the azimuthal angle
//! `phi`, kept in `(-π, π]`.
//!
//! ```rust
//! use genvector::coordinates::{Cartesian3D, Polar3D};
//!
//! let polar = Polar3D::from(Cartesian3D::new(0.0, 0.0, -2.0));
//! assert_eq!(polar.r(), 2.0);
//! assert_eq!(polar.theta(), std::f64::consts::PI);
//! ```

use super::{eta_from_rho_z, restrict_phi, Cartesian3D, Coordinates3D};
use crate::scalar::Scalar;

/// Three-dimensional polar coordinate representation (r, theta, phi)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Polar3D<T = f64> {
    r: T,
    theta: T,
    phi: T,
}

impl<T: Scalar> Polar3D<T> {
    /// Creates a polar coordinate, wrapping `phi` into `(-π, π]`
    pub fn new(r: T, theta: T, phi: T) -> Self {
        Polar3D {
            r,
            theta,
            phi: restrict_phi(phi),
        }
    }

    /// Creates a polar coordinate from any coordinate system
    pub fn from_coordinates<C: Coordinates3D<T> + ?Sized>(source: &C) -> Self {
        Self::from(Cartesian3D::from_coordinates(source))
    }

    /// Sets all three components at once
    pub fn set_coordinates(&mut self, r: T, theta: T, phi: T) {
        *self = Self::new(r, theta, phi);
    }

    /// Returns the `(r, theta, phi)` components
    pub fn get_coordinates(&self) -> (T, T, T) {
        (self.r, self.theta, self.phi)
    }

    /// Magnitude of the vector
    pub fn r(&self) -> T {
        self.r
    }

    /// Polar angle measured from the +z axis
    pub fn theta(&self) -> T {
        self.theta
    }

    /// Azimuthal angle in `(-π, π]`
    pub fn phi(&self) -> T {
        self.phi
    }

    /// Transverse magnitude `r sin(theta)`
    pub fn rho(&self) -> T {
        self.r * self.theta.sin()
    }

    /// Cartesian x component `rho cos(phi)`
    pub fn x(&self) -> T {
        self.rho() * self.phi.cos()
    }

    /// Cartesian y component `rho sin(phi)`
    pub fn y(&self) -> T {
        self.rho() * self.phi.sin()
    }

    /// Cartesian z component `r cos(theta)`
    pub fn z(&self) -> T {
        self.r * self.theta.cos()
    }

    /// Squared magnitude
    pub fn mag2(&self) -> T {
        self.r * self.r
    }

    /// Squared transverse magnitude
    pub fn perp2(&self) -> T {
        let rho = self.rho();
        rho * rho
    }

    /// Pseudorapidity, with the same on-axis saturation as [`Cartesian3D::eta`]
    pub fn eta(&self) -> T {
        eta_from_rho_z(self.rho(), self.z())
    }

    /// Sets the magnitude
    pub fn set_r(&mut self, r: T) {
        self.r = r;
    }

    /// Sets the polar angle
    pub fn set_theta(&mut self, theta: T) {
        self.theta = theta;
    }

    /// Sets the azimuthal angle, wrapping it into `(-π, π]`
    pub fn set_phi(&mut self, phi: T) {
        self.phi = restrict_phi(phi);
    }

    /// Multiplies the vector by `a`; a negative factor flips its direction
    pub fn scale(&mut self, a: T) {
        let a = if a < T::zero() {
            self.negate();
            -a
        } else {
            a
        };
        self.r = self.r * a;
    }

    /// Points the vector the opposite way, keeping its magnitude
    pub fn negate(&mut self) {
        let pi = T::pi();
        self.phi = if self.phi > T::zero() {
            self.phi - pi
        } else {
            self.phi + pi
        };
        self.theta = pi - self.theta;
    }
}

impl<T: Scalar> Coordinates3D<T> for Polar3D<T> {
    fn x(&self) -> T {
        Polar3D::x(self)
    }
    fn y(&self) -> T {
        Polar3D::y(self)
    }
    fn z(&self) -> T {
        Polar3D::z(self)
    }
}

impl<T: Scalar> From<Cartesian3D<T>> for Polar3D<T> {
    fn from(cartesian: Cartesian3D<T>) -> Self {
        Polar3D {
            r: cartesian.r(),
            theta: cartesian.theta(),
            phi: cartesian.phi(),
        }
    }
}
