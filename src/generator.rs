use crate::domain::{
    MAX_CYLINDER_SEGMENTS, MAX_SPHERE_SEGMENTS, MIN_CYLINDER_SEGMENTS, MIN_SPHERE_SEGMENTS,
    ModelError, Primitive,
};
use crate::mesh::{self, Triangle};
use crate::metadata::ModelMetadata;
use crate::solids::{generate_cube, generate_cylinder, generate_hollow_box, generate_sphere};

/// A generated mesh and its descriptive metadata. Created fresh per call;
/// ownership passes entirely to the caller.
#[derive(Debug)]
pub struct GenerationResult {
    pub mesh: Vec<Triangle>,
    pub metadata: ModelMetadata,
}

impl GenerationResult {
    /// Render the mesh as ASCII STL text
    pub fn to_stl(&self) -> String {
        mesh::to_ascii(&self.mesh)
    }
}

/// Generate the mesh for a model request.
///
/// Assumes bounds were checked upstream (see [`crate::domain::validate`]) but
/// still refuses literally non-positive dimensions, which have no defined
/// geometry, and re-clamps segment counts. Fails fast: on rejection no
/// partial mesh is returned.
pub fn generate(primitive: &Primitive) -> Result<GenerationResult, ModelError> {
    let (mesh, effective) = match *primitive {
        Primitive::Cube(p) => {
            positive("size", p.size)?;
            (generate_cube(p.size), Primitive::Cube(p))
        }
        Primitive::Cylinder(mut p) => {
            positive("radius", p.radius)?;
            positive("height", p.height)?;
            p.segments = p.segments.clamp(MIN_CYLINDER_SEGMENTS, MAX_CYLINDER_SEGMENTS);
            (
                generate_cylinder(p.radius, p.height, p.segments),
                Primitive::Cylinder(p),
            )
        }
        Primitive::Sphere(mut p) => {
            positive("radius", p.radius)?;
            p.segments = p.segments.clamp(MIN_SPHERE_SEGMENTS, MAX_SPHERE_SEGMENTS);
            (
                generate_sphere(p.radius, p.segments),
                Primitive::Sphere(p),
            )
        }
        Primitive::HollowBox(p) => {
            positive("length", p.length)?;
            positive("width", p.width)?;
            positive("height", p.height)?;
            positive("wall_thickness", p.wall_thickness)?;
            (
                generate_hollow_box(p.length, p.width, p.height, p.wall_thickness),
                Primitive::HollowBox(p),
            )
        }
    };

    let metadata = ModelMetadata::new(effective, mesh.len());
    Ok(GenerationResult { mesh, metadata })
}

fn positive(name: &'static str, value: f32) -> Result<(), ModelError> {
    if !(value > 0.0) {
        return Err(ModelError::NonPositiveDimension { name, value });
    }
    Ok(())
}
