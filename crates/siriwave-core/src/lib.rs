//! Platform-independent core of siriwave: curve models, parameter smoothing
//! and the frame cycle. Rendering goes through the [`DrawingSurface`] trait so
//! the same code drives a browser canvas or a recording used in tests.

pub mod color;
pub mod constants;
pub mod controller;
pub mod curve;
pub mod error;
pub mod interpolate;
pub mod options;
pub mod surface;

pub use color::*;
pub use controller::*;
pub use curve::*;
pub use error::*;
pub use interpolate::*;
pub use options::*;
pub use surface::*;
