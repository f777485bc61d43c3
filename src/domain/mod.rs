pub mod kind;
pub mod params;

pub use kind::ModelKind;
pub use params::{
    CubeParams, CylinderParams, HollowBoxParams, MAX_CYLINDER_SEGMENTS, MAX_SPHERE_SEGMENTS,
    MIN_CYLINDER_SEGMENTS, MIN_SPHERE_SEGMENTS, Primitive, SphereParams, validate,
};

use thiserror::Error;

/// Rejections surfaced by parameter validation and model-kind parsing.
///
/// Generation is all-or-nothing: a rejected call returns no partial mesh and
/// leaves nothing behind.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// Core guard: geometry is undefined for non-positive dimensions
    #[error("{name} must be positive (got {value})")]
    NonPositiveDimension { name: &'static str, value: f32 },

    /// Host-side bounds check on a dimension
    #[error("{name} must be between {min} and {max} mm (got {value})")]
    OutOfRange {
        name: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },

    /// Wall thickness incompatible with the box footprint
    #[error("wall thickness must be less than {limit} mm for a {length} x {width} mm box (got {value})")]
    WallTooThick {
        value: f32,
        limit: f32,
        length: f32,
        width: f32,
    },

    /// Requested model kind is outside the fixed set
    #[error("unknown model type '{0}' (expected cube, cylinder, sphere, or hollow_box)")]
    UnknownModelKind(String),
}
