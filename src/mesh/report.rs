//! Read-only mesh diagnostics
//!
//! Inspects a generated mesh without modifying it: degenerate (near-zero
//! area) facets, zero normals, and the bounding box. Degenerate facets are
//! an expected artifact of some primitives (sphere poles), so nothing here
//! removes or repairs geometry.

use super::Triangle;

/// Minimum area for a facet to count as non-degenerate (in square mm)
const MIN_FACET_AREA: f32 = 1e-10;

/// Summary of a mesh inspection
#[derive(Debug, Default)]
pub struct MeshReport {
    /// Total number of facets inspected
    pub total: usize,
    /// Facets with zero or near-zero area
    pub degenerate: usize,
    /// Facets carrying the zero normal
    pub zero_normals: usize,
    /// Axis-aligned bounding box as (min, max), absent for an empty mesh
    pub bounds: Option<([f32; 3], [f32; 3])>,
}

impl MeshReport {
    /// Get a one-line summary string
    pub fn summary(&self) -> String {
        let extent = match self.bounds {
            Some((min, max)) => format!(
                "{:.1} x {:.1} x {:.1} mm",
                max[0] - min[0],
                max[1] - min[1],
                max[2] - min[2]
            ),
            None => "empty".to_string(),
        };
        format!(
            "{} facets ({} degenerate, {} zero normals), extent {}",
            self.total, self.degenerate, self.zero_normals, extent
        )
    }
}

/// Inspect a mesh and return a report. The mesh is left untouched.
pub fn analyze(triangles: &[Triangle]) -> MeshReport {
    let mut report = MeshReport {
        total: triangles.len(),
        ..Default::default()
    };

    let mut min = [f32::MAX; 3];
    let mut max = [f32::MIN; 3];

    for tri in triangles {
        if tri.area() < MIN_FACET_AREA {
            report.degenerate += 1;
        }
        if tri.normal == [0.0, 0.0, 0.0] {
            report.zero_normals += 1;
        }
        for vertex in &tri.vertices {
            for axis in 0..3 {
                min[axis] = min[axis].min(vertex[axis]);
                max[axis] = max[axis].max(vertex[axis]);
            }
        }
    }

    if !triangles.is_empty() {
        report.bounds = Some((min, max));
    }

    report
}
