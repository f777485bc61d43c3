use crate::domain::{
    CubeParams, CylinderParams, HollowBoxParams, ModelKind, Primitive, SphereParams,
};
use serde::Serialize;

/// Dimensional parameters of a generated model, one case per kind.
///
/// Serializes as a flat map (`{"radius": 5.0, "height": 10.0, ...}`).
/// Segment counts are the effective values after clamping, not what the
/// caller passed in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Dimensions {
    Cylinder(CylinderParams),
    HollowBox(HollowBoxParams),
    Sphere(SphereParams),
    Cube(CubeParams),
}

/// Descriptive fields derived from a generation call, consumed by storage
#[derive(Debug, Clone, Serialize)]
pub struct ModelMetadata {
    pub model_type: ModelKind,
    pub dimensions: Dimensions,
    pub triangles: usize,
}

impl ModelMetadata {
    /// Build metadata for a finished mesh. `effective` carries the clamped
    /// segment counts actually used by the generator.
    pub fn new(effective: Primitive, triangles: usize) -> Self {
        let dimensions = match effective {
            Primitive::Cube(p) => Dimensions::Cube(p),
            Primitive::Cylinder(p) => Dimensions::Cylinder(p),
            Primitive::Sphere(p) => Dimensions::Sphere(p),
            Primitive::HollowBox(p) => Dimensions::HollowBox(p),
        };
        Self {
            model_type: effective.kind(),
            dimensions,
            triangles,
        }
    }

    /// Descriptive base filename for this model, e.g. `cube_10mm.stl`.
    /// Storage appends a timestamp to make it unique.
    pub fn base_filename(&self) -> String {
        match self.dimensions {
            Dimensions::Cube(p) => format!("cube_{}mm.stl", p.size),
            Dimensions::Cylinder(p) => format!("cylinder_r{}_h{}.stl", p.radius, p.height),
            Dimensions::Sphere(p) => format!("sphere_r{}.stl", p.radius),
            Dimensions::HollowBox(p) => {
                format!("box_{}x{}x{}.stl", p.length, p.width, p.height)
            }
        }
    }
}
