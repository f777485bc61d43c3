use crate::domain::{MAX_SPHERE_SEGMENTS, MIN_SPHERE_SEGMENTS};
use crate::mesh::{MeshBuilder, Triangle, Vertex};
use std::f32::consts::{PI, TAU};

/// Generate a sphere of the given radius centered at the origin.
///
/// Latitude/longitude tessellation: `segments + 1` rings from the south to
/// the north pole, `segments` longitude samples per ring, two outward-wound
/// triangles per quad with longitude wrap-around. `segments` is re-clamped
/// to [6, 128]. Produces exactly `2 * segments^2` triangles.
///
/// The pole rings collapse to coincident points, so the triangles touching a
/// pole have zero area. They are kept as-is; callers needing strict manifold
/// poles must post-process.
pub fn generate_sphere(radius: f32, segments: u32) -> Vec<Triangle> {
    let segments = segments.clamp(MIN_SPHERE_SEGMENTS, MAX_SPHERE_SEGMENTS) as usize;

    let mut vertices: Vec<Vertex> = Vec::with_capacity((segments + 1) * segments);
    for i in 0..=segments {
        let lat = PI * i as f32 / segments as f32 - PI / 2.0;
        for j in 0..segments {
            let lon = TAU * j as f32 / segments as f32;
            vertices.push([
                radius * lat.cos() * lon.cos(),
                radius * lat.cos() * lon.sin(),
                radius * lat.sin(),
            ]);
        }
    }

    let mut mesh = MeshBuilder::new();
    for i in 0..segments {
        for j in 0..segments {
            let current = i * segments + j;
            let next_lat = (i + 1) * segments + j;
            let next_lon = i * segments + (j + 1) % segments;
            let next_both = (i + 1) * segments + (j + 1) % segments;

            mesh.add_triangle(vertices[current], vertices[next_lon], vertices[next_lat]);
            mesh.add_triangle(vertices[next_lon], vertices[next_both], vertices[next_lat]);
        }
    }

    mesh.finish()
}
