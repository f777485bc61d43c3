use crate::mesh::{MeshBuilder, Triangle};

/// Generate an axis-aligned cube spanning (0,0,0) to (size,size,size).
///
/// 12 triangles, 2 per face, each face's pair sharing a diagonal. Every face
/// is wound so its normal points outward; the bottom face comes first.
pub fn generate_cube(size: f32) -> Vec<Triangle> {
    let s = size;
    let mut mesh = MeshBuilder::new();

    // Bottom (z = 0, normal -z)
    mesh.add_quad([0.0, 0.0, 0.0], [0.0, s, 0.0], [s, s, 0.0], [s, 0.0, 0.0]);
    // Top (z = s, normal +z)
    mesh.add_quad([0.0, 0.0, s], [s, 0.0, s], [s, s, s], [0.0, s, s]);
    // Front (y = 0, normal -y)
    mesh.add_quad([0.0, 0.0, 0.0], [s, 0.0, 0.0], [s, 0.0, s], [0.0, 0.0, s]);
    // Back (y = s, normal +y)
    mesh.add_quad([s, s, 0.0], [0.0, s, 0.0], [0.0, s, s], [s, s, s]);
    // Left (x = 0, normal -x)
    mesh.add_quad([0.0, s, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, s], [0.0, s, s]);
    // Right (x = s, normal +x)
    mesh.add_quad([s, 0.0, 0.0], [s, s, 0.0], [s, s, s], [s, 0.0, s]);

    mesh.finish()
}
