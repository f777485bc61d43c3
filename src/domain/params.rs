use super::{ModelError, ModelKind};
use serde::Serialize;

/// Segment clamp bounds. Generators re-clamp to these defensively, so the
/// effective tessellation never leaves the range even for unchecked callers.
pub const MIN_CYLINDER_SEGMENTS: u32 = 6;
pub const MAX_CYLINDER_SEGMENTS: u32 = 256;
pub const MIN_SPHERE_SEGMENTS: u32 = 6;
pub const MAX_SPHERE_SEGMENTS: u32 = 128;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CubeParams {
    /// Edge length in mm
    pub size: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CylinderParams {
    pub radius: f32,
    pub height: f32,
    /// Tessellation resolution, clamped to [6, 256]
    pub segments: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SphereParams {
    pub radius: f32,
    /// Tessellation resolution, clamped to [6, 128]
    pub segments: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HollowBoxParams {
    pub length: f32,
    pub width: f32,
    pub height: f32,
    pub wall_thickness: f32,
}

/// A model request: one case per kind, each with its own typed parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Cube(CubeParams),
    Cylinder(CylinderParams),
    Sphere(SphereParams),
    HollowBox(HollowBoxParams),
}

impl Primitive {
    pub fn kind(&self) -> ModelKind {
        match self {
            Primitive::Cube(_) => ModelKind::Cube,
            Primitive::Cylinder(_) => ModelKind::Cylinder,
            Primitive::Sphere(_) => ModelKind::Sphere,
            Primitive::HollowBox(_) => ModelKind::HollowBox,
        }
    }

    /// Triangle count the generator will produce for these parameters,
    /// after segment clamping.
    pub fn expected_triangles(&self) -> usize {
        match self {
            // 2 per face x 6 faces
            Primitive::Cube(_) => 12,
            // one fan per cap + 2 per lateral quad
            Primitive::Cylinder(p) => {
                let n = p.segments.clamp(MIN_CYLINDER_SEGMENTS, MAX_CYLINDER_SEGMENTS) as usize;
                4 * n
            }
            // 2 per lat/long quad
            Primitive::Sphere(p) => {
                let n = p.segments.clamp(MIN_SPHERE_SEGMENTS, MAX_SPHERE_SEGMENTS) as usize;
                2 * n * n
            }
            // 10 outer + 10 inner + 2 seam-stitching
            Primitive::HollowBox(_) => 22,
        }
    }
}

/// Enforce the printable-dimension bounds on a model request.
///
/// This is the host-side check: it bounds dimensions to the ranges the
/// service accepts. Segment counts outside their range are not an error
/// here; the generators clamp them.
pub fn validate(primitive: &Primitive) -> Result<(), ModelError> {
    match primitive {
        Primitive::Cube(p) => {
            in_range("size", p.size, 0.1, 500.0)?;
        }
        Primitive::Cylinder(p) => {
            in_range("radius", p.radius, 0.1, 250.0)?;
            in_range("height", p.height, 0.1, 500.0)?;
        }
        Primitive::Sphere(p) => {
            in_range("radius", p.radius, 0.1, 250.0)?;
        }
        Primitive::HollowBox(p) => {
            in_range("length", p.length, 1.0, 500.0)?;
            in_range("width", p.width, 1.0, 500.0)?;
            in_range("height", p.height, 1.0, 500.0)?;
            in_range("wall_thickness", p.wall_thickness, 0.1, 50.0)?;

            let limit = p.length.min(p.width) / 2.0;
            if p.wall_thickness >= limit {
                return Err(ModelError::WallTooThick {
                    value: p.wall_thickness,
                    limit,
                    length: p.length,
                    width: p.width,
                });
            }
        }
    }
    Ok(())
}

fn in_range(name: &'static str, value: f32, min: f32, max: f32) -> Result<(), ModelError> {
    if value < min || value > max || !value.is_finite() {
        return Err(ModelError::OutOfRange {
            name,
            value,
            min,
            max,
        });
    }
    Ok(())
}
