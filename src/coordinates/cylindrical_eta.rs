//! # Cylindrical-Eta Coordinate System Module
//!
//! Collider-style representation of a 3D point: the transverse magnitude
//! `rho`, the pseudorapidity `eta` and the azimuthal angle `phi`.
//!
//! ## On-axis Points
//!
//! A point on the z axis has `rho == 0`, and its pseudorapidity is stored in
//! the saturated form produced by [`eta_from_rho_z`]: `z + eta_max` for
//! `z > 0`, `z - eta_max` for `z < 0`. [`CylindricalEta3D::z`] undoes that
//! shift, so on-axis points survive a round trip through this system.
//!
//! ```rust
//! use genvector::coordinates::{Cartesian3D, CylindricalEta3D};
//!
//! let beam = CylindricalEta3D::from(Cartesian3D::new(0.0, 0.0, 7.0));
//! assert_eq!(beam.rho(), 0.0);
//! assert_eq!(beam.z(), 7.0);
//! ```

use super::{eta_from_rho_z, restrict_phi, Cartesian3D, Coordinates3D};
use crate::constants::eta_max;
use crate::scalar::Scalar;

/// Three-dimensional cylindrical coordinate representation (rho, eta, phi)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CylindricalEta3D<T = f64> {
    rho: T,
    eta: T,
    phi: T,
}

impl<T: Scalar> CylindricalEta3D<T> {
    /// Creates a cylindrical-eta coordinate, wrapping `phi` into `(-π, π]`
    pub fn new(rho: T, eta: T, phi: T) -> Self {
        CylindricalEta3D {
            rho,
            eta,
            phi: restrict_phi(phi),
        }
    }

    /// Creates a cylindrical-eta coordinate from any coordinate system
    pub fn from_coordinates<C: Coordinates3D<T> + ?Sized>(source: &C) -> Self {
        Self::from(Cartesian3D::from_coordinates(source))
    }

    /// Returns the `(rho, eta, phi)` components
    pub fn get_coordinates(&self) -> (T, T, T) {
        (self.rho, self.eta, self.phi)
    }

    /// Transverse magnitude
    pub fn rho(&self) -> T {
        self.rho
    }

    /// Pseudorapidity, saturated on the z axis
    pub fn eta(&self) -> T {
        self.eta
    }

    /// Azimuthal angle in `(-π, π]`
    pub fn phi(&self) -> T {
        self.phi
    }

    /// Cartesian x component `rho cos(phi)`
    pub fn x(&self) -> T {
        self.rho * self.phi.cos()
    }

    /// Cartesian y component `rho sin(phi)`
    pub fn y(&self) -> T {
        self.rho * self.phi.sin()
    }

    /// Longitudinal component `rho sinh(eta)`, or the unsaturated z on axis
    pub fn z(&self) -> T {
        let zero = T::zero();
        if self.rho > zero {
            self.rho * self.eta.sinh()
        } else if self.eta == zero {
            zero
        } else if self.eta > zero {
            self.eta - eta_max::<T>()
        } else {
            self.eta + eta_max::<T>()
        }
    }

    /// Magnitude of the vector
    pub fn r(&self) -> T {
        let z = self.z();
        (self.rho * self.rho + z * z).sqrt()
    }

    /// Polar angle; on the axis it is 0 for non-negative eta and π otherwise
    pub fn theta(&self) -> T {
        if self.rho > T::zero() {
            self.rho.atan2(self.z())
        } else if self.eta >= T::zero() {
            T::zero()
        } else {
            T::pi()
        }
    }

    /// Sets the transverse magnitude
    pub fn set_rho(&mut self, rho: T) {
        self.rho = rho;
    }

    /// Sets the pseudorapidity
    pub fn set_eta(&mut self, eta: T) {
        self.eta = eta;
    }

    /// Sets the azimuthal angle, wrapping it into `(-π, π]`
    pub fn set_phi(&mut self, phi: T) {
        self.phi = restrict_phi(phi);
    }

    /// Multiplies the vector by `a`; a negative factor flips its direction
    ///
    /// On the z axis the length lives in the saturated eta, so the
    /// unsaturated z is scaled there instead of rho.
    pub fn scale(&mut self, a: T) {
        let a = if a < T::zero() {
            self.negate();
            -a
        } else {
            a
        };
        let zero = T::zero();
        if self.rho > zero {
            self.rho = self.rho * a;
        } else if self.eta > zero {
            self.eta = (self.eta - eta_max::<T>()) * a + eta_max::<T>();
        } else if self.eta < zero {
            self.eta = (self.eta + eta_max::<T>()) * a - eta_max::<T>();
        }
    }

    /// Points the vector the opposite way
    pub fn negate(&mut self) {
        let pi = T::pi();
        self.phi = if self.phi > T::zero() {
            self.phi - pi
        } else {
            self.phi + pi
        };
        self.eta = -self.eta;
    }
}

impl<T: Scalar> Coordinates3D<T> for CylindricalEta3D<T> {
    fn x(&self) -> T {
        CylindricalEta3D::x(self)
    }
    fn y(&self) -> T {
        CylindricalEta3D::y(self)
    }
    fn z(&self) -> T {
        CylindricalEta3D::z(self)
    }
}

impl<T: Scalar> From<Cartesian3D<T>> for CylindricalEta3D<T> {
    fn from(cartesian: Cartesian3D<T>) -> Self {
        let rho = cartesian.rho();
        CylindricalEta3D {
            rho,
            eta: eta_from_rho_z(rho, cartesian.z()),
            phi: cartesian.phi(),
        }
    }
}
