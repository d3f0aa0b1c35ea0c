//! genvector: generic 3D coordinate systems for physics analysis
//!
//! This crate provides value types describing a point or direction in 3D
//! space, generic over the scalar type of their components, together with
//! the derived quantities used in collider physics (transverse magnitude,
//! polar and azimuthal angles, pseudorapidity).
//!
//! ```rust
//! use genvector::{Cartesian3D, CylindricalEta3D};
//!
//! let track = Cartesian3D::new(3.0, 4.0, 0.0);
//! assert_eq!(track.rho(), 5.0);
//! assert_eq!(track.eta(), 0.0);
//!
//! let cylindrical = CylindricalEta3D::from(track);
//! assert_eq!(cylindrical.rho(), 5.0);
//! ```

pub mod constants;
pub mod coordinates;
pub mod errors;
pub mod plot;
pub mod scalar;

// Re-export commonly used types
pub use coordinates::{
    Cartesian3D, Coordinates3D, CylindricalEta3D, Polar3D, XYZVector, XYZVectorF,
};
pub use errors::{GenVectorError, Result};
pub use plot::{Plotable, YAxis};
pub use scalar::Scalar;
