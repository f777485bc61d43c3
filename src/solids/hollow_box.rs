use crate::mesh::{MeshBuilder, Triangle, Vertex};

/// Generate an open-topped hollow box: an outer shell from (0,0,0) to
/// (length,width,height) and an inner cavity inset by `wall_thickness` on x/y
/// with its floor at z = wall_thickness. Neither shell has a top cap, so the
/// result is a printable open container.
///
/// Outer bottom and side faces wind outward; the cavity floor and side faces
/// wind reversed, so their normals point into the cavity. A single stitching
/// quad closes the vertical seam at the corner nearest the origin. The other
/// three vertical seams are left open, matching the shape this generator has
/// always produced; tests pin that behavior rather than completing the seams.
///
/// 10 outer + 10 inner + 2 stitching = 22 triangles.
pub fn generate_hollow_box(
    length: f32,
    width: f32,
    height: f32,
    wall_thickness: f32,
) -> Vec<Triangle> {
    let (l, w, h, t) = (length, width, height, wall_thickness);

    // Footprint corners, counter-clockwise viewed from above
    let outer: [(f32, f32); 4] = [(0.0, 0.0), (l, 0.0), (l, w), (0.0, w)];
    let inner: [(f32, f32); 4] = [(t, t), (l - t, t), (l - t, w - t), (t, w - t)];

    let mut mesh = MeshBuilder::new();

    // Outer bottom (z = 0, normal -z)
    mesh.add_quad(
        [0.0, 0.0, 0.0],
        [0.0, w, 0.0],
        [l, w, 0.0],
        [l, 0.0, 0.0],
    );

    // Outer side walls, wound outward
    for i in 0..4 {
        let (x1, y1) = outer[i];
        let (x2, y2) = outer[(i + 1) % 4];
        mesh.add_triangle([x1, y1, 0.0], [x2, y2, 0.0], [x2, y2, h]);
        mesh.add_triangle([x1, y1, 0.0], [x2, y2, h], [x1, y1, h]);
    }

    // Cavity floor (z = t, normal +z into the cavity)
    mesh.add_quad(
        [t, t, t],
        [l - t, t, t],
        [l - t, w - t, t],
        [t, w - t, t],
    );

    // Cavity side walls, reversed winding so normals face the cavity
    for i in 0..4 {
        let (x1, y1) = inner[i];
        let (x2, y2) = inner[(i + 1) % 4];
        mesh.add_triangle([x1, y1, t], [x2, y2, h], [x2, y2, t]);
        mesh.add_triangle([x1, y1, t], [x1, y1, h], [x2, y2, h]);
    }

    // Stitch the vertical seam nearest the origin corner. The remaining
    // three corner seams stay open.
    let outer_edge: [Vertex; 2] = [[0.0, 0.0, 0.0], [0.0, 0.0, h]];
    let inner_edge: [Vertex; 2] = [[t, t, t], [t, t, h]];
    mesh.add_triangle(outer_edge[0], inner_edge[0], outer_edge[1]);
    mesh.add_triangle(inner_edge[0], inner_edge[1], outer_edge[1]);

    mesh.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solids::test_util::edge_use_counts;

    fn sample() -> Vec<Triangle> {
        generate_hollow_box(20.0, 15.0, 10.0, 2.0)
    }

    fn facet_touches(tri: &Triangle, x: f32, y: f32) -> bool {
        tri.vertices
            .iter()
            .any(|v| (v[0] - x).abs() < 1e-4 && (v[1] - y).abs() < 1e-4)
    }

    #[test]
    fn test_triangle_count() {
        // 10 outer + 10 inner + 2 stitching
        assert_eq!(sample().len(), 22);
    }

    #[test]
    fn test_bottom_face_first() {
        let triangles = sample();
        assert_eq!(triangles[0].normal, [0.0, 0.0, -1.0]);
        assert_eq!(triangles[1].normal, [0.0, 0.0, -1.0]);
    }

    #[test]
    fn test_cavity_floor_faces_up() {
        let triangles = sample();
        // Floor quad follows the 8 outer side-wall triangles
        assert_eq!(triangles[10].normal, [0.0, 0.0, 1.0]);
        assert_eq!(triangles[11].normal, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_outer_walls_face_outward_and_cavity_walls_face_inward() {
        let (l, w) = (20.0, 15.0);
        let (cx, cy) = (l / 2.0, w / 2.0);
        let triangles = sample();

        for tri in &triangles[2..10] {
            let mx = (tri.vertices[0][0] + tri.vertices[1][0] + tri.vertices[2][0]) / 3.0;
            let my = (tri.vertices[0][1] + tri.vertices[1][1] + tri.vertices[2][1]) / 3.0;
            let dot = (mx - cx) * tri.normal[0] + (my - cy) * tri.normal[1];
            assert!(dot > 0.0, "outer wall facet faces inward");
        }
        for tri in &triangles[12..20] {
            let mx = (tri.vertices[0][0] + tri.vertices[1][0] + tri.vertices[2][0]) / 3.0;
            let my = (tri.vertices[0][1] + tri.vertices[1][1] + tri.vertices[2][1]) / 3.0;
            let dot = (cx - mx) * tri.normal[0] + (cy - my) * tri.normal[1];
            assert!(dot > 0.0, "cavity wall facet faces away from the cavity");
        }
    }

    #[test]
    fn test_only_origin_seam_is_stitched() {
        let (l, w, t) = (20.0f32, 15.0f32, 2.0f32);
        let triangles = sample();

        let corners = [
            ((0.0, 0.0), (t, t)),
            ((l, 0.0), (l - t, t)),
            ((l, w), (l - t, w - t)),
            ((0.0, w), (t, w - t)),
        ];

        for (k, ((ox, oy), (ix, iy))) in corners.iter().enumerate() {
            let stitched = triangles.iter().any(|tri| {
                facet_touches(tri, *ox, *oy) && facet_touches(tri, *ix, *iy)
            });
            if k == 0 {
                assert!(stitched, "origin seam must be stitched");
            } else {
                assert!(!stitched, "seam {k} must remain open");
            }
        }
    }

    #[test]
    fn test_mesh_is_not_watertight() {
        // The open top rim and the three unstitched seams leave boundary
        // edges (edges used by exactly one facet)
        let counts = edge_use_counts(&sample());
        let boundary = counts.values().filter(|&&uses| uses == 1).count();
        assert!(boundary > 0);
    }
}
