use super::Triangle;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Solid name written in the STL header and footer
pub const SOLID_NAME: &str = "modelo3d";

/// Render triangles as ASCII STL text.
///
/// The layout is a compatibility contract with downstream slicer tooling:
/// every numeric field carries exactly 6 fractional digits, and the
/// indentation below is canonical.
///
/// ```text
/// solid modelo3d
///   facet normal <nx> <ny> <nz>
///     outer loop
///       vertex <x> <y> <z>
///       ...
///     endloop
///   endfacet
/// endsolid modelo3d
/// ```
pub fn to_ascii(triangles: &[Triangle]) -> String {
    // ~170 bytes per facet block at typical magnitudes
    let mut out = String::with_capacity(32 + triangles.len() * 180);
    out.push_str(&format!("solid {}\n", SOLID_NAME));

    for tri in triangles {
        let [nx, ny, nz] = tri.normal;
        out.push_str(&format!("  facet normal {:.6} {:.6} {:.6}\n", nx, ny, nz));
        out.push_str("    outer loop\n");
        for &[x, y, z] in &tri.vertices {
            out.push_str(&format!("      vertex {:.6} {:.6} {:.6}\n", x, y, z));
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    }

    out.push_str(&format!("endsolid {}\n", SOLID_NAME));
    out
}

/// Write triangles to an ASCII STL file
pub fn write_stl(path: &Path, triangles: &[Triangle]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create STL file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    writer.write_all(to_ascii(triangles).as_bytes())?;
    writer.flush()?;

    Ok(())
}

/// Recount the facets in serialized STL text.
///
/// Returns the number of `facet normal` lines, or `None` if the document is
/// inconsistent (`facet normal` and `endfacet` counts differ). Tolerates
/// leading-whitespace variation.
pub fn facet_count(stl: &str) -> Option<usize> {
    let mut facets = 0usize;
    let mut ends = 0usize;

    for line in stl.lines() {
        let line = line.trim_start();
        if line.starts_with("facet normal") {
            facets += 1;
        } else if line.starts_with("endfacet") {
            ends += 1;
        }
    }

    (facets == ends).then_some(facets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn sample_triangles() -> Vec<Triangle> {
        vec![
            Triangle::new([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            Triangle::new([0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]),
        ]
    }

    #[test]
    fn test_header_and_footer() {
        let stl = to_ascii(&sample_triangles());
        let lines: Vec<&str> = stl.lines().collect();

        assert_eq!(lines[0], "solid modelo3d");
        assert_eq!(*lines.last().unwrap(), "endsolid modelo3d");
    }

    #[test]
    fn test_facet_block_layout() {
        let stl = to_ascii(&sample_triangles()[..1]);
        let lines: Vec<&str> = stl.lines().collect();

        assert_eq!(lines[1], "  facet normal 0.000000 0.000000 1.000000");
        assert_eq!(lines[2], "    outer loop");
        assert_eq!(lines[3], "      vertex 0.000000 0.000000 0.000000");
        assert_eq!(lines[4], "      vertex 1.000000 0.000000 0.000000");
        assert_eq!(lines[5], "      vertex 0.000000 1.000000 0.000000");
        assert_eq!(lines[6], "    endloop");
        assert_eq!(lines[7], "  endfacet");
    }

    #[test]
    fn test_six_fractional_digits_everywhere() {
        let stl = to_ascii(&[Triangle::new(
            [0.5, 123.456789, -2.0],
            [10.0, 0.0, 0.0],
            [0.0, 10.0, 0.0],
        )]);

        for line in stl.lines() {
            let line = line.trim_start();
            let fields: Option<&str> = line
                .strip_prefix("facet normal ")
                .or_else(|| line.strip_prefix("vertex "));
            if let Some(fields) = fields {
                for field in fields.split_whitespace() {
                    let (_, frac) = field.split_once('.').expect("numeric field missing '.'");
                    assert_eq!(frac.len(), 6, "field {field:?} in line {line:?}");
                }
            }
        }
    }

    #[test]
    fn test_degenerate_facet_serializes_zero_normal() {
        let stl = to_ascii(&[Triangle::new(
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [2.0, 0.0, 0.0],
        )]);
        assert!(stl.contains("facet normal 0.000000 0.000000 0.000000"));
    }

    #[test]
    fn test_facet_count_round_trip() {
        let triangles = sample_triangles();
        let stl = to_ascii(&triangles);
        assert_eq!(facet_count(&stl), Some(triangles.len()));
    }

    #[test]
    fn test_facet_count_rejects_mismatched_document() {
        let stl = "solid modelo3d\n  facet normal 0.000000 0.000000 1.000000\nendsolid modelo3d\n";
        assert_eq!(facet_count(stl), None);
    }

    #[test]
    fn test_facet_count_tolerates_whitespace_variation() {
        let stl = "solid x\nfacet normal 0 0 1\nouter loop\nendloop\n\tendfacet\nendsolid x\n";
        assert_eq!(facet_count(stl), Some(1));
    }

    #[test]
    fn test_serialization_is_deterministic() {
        let a = to_ascii(&sample_triangles());
        let b = to_ascii(&sample_triangles());
        assert_eq!(a, b);
    }

    #[test]
    fn test_write_stl() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.stl");

        let triangles = sample_triangles();
        write_stl(&path, &triangles).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, to_ascii(&triangles));
    }
}
