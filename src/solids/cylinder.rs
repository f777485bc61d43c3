use crate::domain::{MAX_CYLINDER_SEGMENTS, MIN_CYLINDER_SEGMENTS};
use crate::mesh::{MeshBuilder, Triangle, Vertex};
use std::f32::consts::TAU;

/// Generate a cylinder of the given radius and height, standing on z = 0.
///
/// `segments` is re-clamped to [6, 256] regardless of what the caller
/// validated. Angles are sampled half-open over [0, 2*pi) so the seam vertex
/// is not duplicated. Produces exactly `4 * segments` triangles: one fan per
/// cap plus two triangles per lateral quad.
pub fn generate_cylinder(radius: f32, height: f32, segments: u32) -> Vec<Triangle> {
    let segments = segments.clamp(MIN_CYLINDER_SEGMENTS, MAX_CYLINDER_SEGMENTS) as usize;

    let ring = |z: f32| -> Vec<Vertex> {
        (0..segments)
            .map(|i| {
                let angle = TAU * i as f32 / segments as f32;
                [radius * angle.cos(), radius * angle.sin(), z]
            })
            .collect()
    };

    let bottom = ring(0.0);
    let top = ring(height);
    let bottom_center = [0.0, 0.0, 0.0];
    let top_center = [0.0, 0.0, height];

    let mut mesh = MeshBuilder::new();

    // Bottom cap: fan from the center, wound so the normal points down
    for i in 0..segments {
        let next = (i + 1) % segments;
        mesh.add_triangle(bottom_center, bottom[next], bottom[i]);
    }

    // Top cap: fan from the center, wound so the normal points up
    for i in 0..segments {
        let next = (i + 1) % segments;
        mesh.add_triangle(top_center, top[i], top[next]);
    }

    // Lateral surface: one outward-wound quad per ring-index pair
    for i in 0..segments {
        let next = (i + 1) % segments;
        mesh.add_triangle(bottom[i], bottom[next], top[i]);
        mesh.add_triangle(bottom[next], top[next], top[i]);
    }

    mesh.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solids::test_util::is_watertight;

    #[test]
    fn test_cylinder_triangle_count() {
        assert_eq!(generate_cylinder(5.0, 10.0, 20).len(), 80);
        assert_eq!(generate_cylinder(1.0, 1.0, 6).len(), 24);
    }

    #[test]
    fn test_segments_clamped_low() {
        // 3 behaves as 6
        assert_eq!(
            generate_cylinder(5.0, 10.0, 3).len(),
            generate_cylinder(5.0, 10.0, 6).len()
        );
    }

    #[test]
    fn test_segments_clamped_high() {
        // 300 behaves as 256
        assert_eq!(
            generate_cylinder(5.0, 10.0, 300).len(),
            generate_cylinder(5.0, 10.0, 256).len()
        );
    }

    #[test]
    fn test_cap_normals() {
        let segments = 20;
        let triangles = generate_cylinder(5.0, 10.0, segments);
        let n = segments as usize;

        for tri in &triangles[..n] {
            assert!((tri.normal[2] + 1.0).abs() < 1e-4, "bottom cap not facing -z");
        }
        for tri in &triangles[n..2 * n] {
            assert!((tri.normal[2] - 1.0).abs() < 1e-4, "top cap not facing +z");
        }
    }

    #[test]
    fn test_lateral_normals_point_outward() {
        let triangles = generate_cylinder(5.0, 10.0, 20);
        for tri in &triangles[40..] {
            // Radial component of the normal at the facet centroid
            let cx = (tri.vertices[0][0] + tri.vertices[1][0] + tri.vertices[2][0]) / 3.0;
            let cy = (tri.vertices[0][1] + tri.vertices[1][1] + tri.vertices[2][1]) / 3.0;
            let radial = cx * tri.normal[0] + cy * tri.normal[1];
            assert!(radial > 0.0, "lateral facet faces inward");
            assert!(tri.normal[2].abs() < 1e-4);
        }
    }

    #[test]
    fn test_ring_vertices_on_radius() {
        let radius = 5.0;
        for tri in generate_cylinder(radius, 10.0, 12) {
            for v in tri.vertices {
                let r = (v[0] * v[0] + v[1] * v[1]).sqrt();
                assert!(r < 1e-4 || (r - radius).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn test_cylinder_is_watertight() {
        assert!(is_watertight(&generate_cylinder(5.0, 10.0, 16)));
    }
}
