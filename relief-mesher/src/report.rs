//! Edge-level solidity analysis.

use std::fmt;

use hashbrown::HashMap;
use relief_types::TriangleMesh;

/// Triangles with area below this are counted as degenerate.
const DEGENERATE_AREA: f64 = 1e-10;

/// Edge statistics for a generated mesh.
///
/// A relief solid should be closed: every undirected edge shared by
/// exactly two faces traversing it in opposite directions. Valid regions
/// joined only at a corner break this locally; the counts here make that
/// visible without attempting repair.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolidityReport {
    /// Undirected edges in the mesh.
    pub edge_count: usize,
    /// Edges used by exactly one face.
    pub boundary_edge_count: usize,
    /// Edges used by more than two faces.
    pub non_manifold_edge_count: usize,
    /// Edges used by two faces traversing in the same direction.
    pub misoriented_edge_count: usize,
    /// Faces with repeated indices or near-zero area.
    pub degenerate_face_count: usize,
}

impl SolidityReport {
    /// Whether the mesh is a closed, consistently wound surface.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.boundary_edge_count == 0
            && self.non_manifold_edge_count == 0
            && self.misoriented_edge_count == 0
    }

    /// Whether any defect was found.
    #[must_use]
    pub const fn has_issues(&self) -> bool {
        !self.is_closed() || self.degenerate_face_count > 0
    }
}

impl fmt::Display for SolidityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Solidity report")?;
        writeln!(f, "  Edges: {}", self.edge_count)?;
        writeln!(f, "  Boundary edges: {}", self.boundary_edge_count)?;
        writeln!(f, "  Non-manifold edges: {}", self.non_manifold_edge_count)?;
        writeln!(f, "  Misoriented edges: {}", self.misoriented_edge_count)?;
        writeln!(f, "  Degenerate faces: {}", self.degenerate_face_count)?;
        if self.is_closed() {
            writeln!(f, "  Status: closed")
        } else {
            writeln!(f, "  Status: OPEN")
        }
    }
}

/// Count edge-sharing and orientation defects in `mesh`.
///
/// Every face contributes three directed edges; for a closed,
/// consistently wound mesh each undirected pair carries exactly one edge
/// in each direction. Faces with repeated indices are skipped so their
/// collapsed edges do not distort the counts.
#[must_use]
pub fn analyze_solidity(mesh: &TriangleMesh) -> SolidityReport {
    // (forward, reverse) traversal counts keyed by the undirected pair.
    let mut edges: HashMap<(u32, u32), (u32, u32)> = HashMap::new();
    let mut degenerate_face_count = 0;

    for (index, face) in mesh.faces.iter().enumerate() {
        let [a, b, c] = *face;
        if a == b || b == c || c == a {
            degenerate_face_count += 1;
            continue;
        }
        if triangle_area(mesh, index) < DEGENERATE_AREA {
            degenerate_face_count += 1;
        }
        for (u, v) in [(a, b), (b, c), (c, a)] {
            let entry = edges.entry(normalize_edge(u, v)).or_insert((0u32, 0u32));
            if u < v {
                entry.0 += 1;
            } else {
                entry.1 += 1;
            }
        }
    }

    let mut report = SolidityReport {
        edge_count: edges.len(),
        degenerate_face_count,
        ..SolidityReport::default()
    };

    for &(forward, reverse) in edges.values() {
        match forward + reverse {
            1 => report.boundary_edge_count += 1,
            2 if forward != 1 => report.misoriented_edge_count += 1,
            2 => {}
            _ => report.non_manifold_edge_count += 1,
        }
    }

    report
}

/// Canonical (low, high) form of an undirected edge.
const fn normalize_edge(a: u32, b: u32) -> (u32, u32) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

fn triangle_area(mesh: &TriangleMesh, index: usize) -> f64 {
    let [a, b, c] = mesh.triangle(index);
    (b - a).cross(&(c - a)).norm() * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;
    use relief_types::Point3;

    fn cube() -> TriangleMesh {
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, 1.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(0.0, 1.0, 1.0),
        ];
        let faces = vec![
            [0, 2, 1],
            [0, 3, 2],
            [4, 5, 6],
            [4, 6, 7],
            [0, 1, 5],
            [0, 5, 4],
            [1, 2, 6],
            [1, 6, 5],
            [2, 3, 7],
            [2, 7, 6],
            [3, 0, 4],
            [3, 4, 7],
        ];
        TriangleMesh::from_parts(positions, faces)
    }

    #[test]
    fn closed_cube_reports_clean() {
        let report = analyze_solidity(&cube());
        assert_eq!(report.edge_count, 18);
        assert!(report.is_closed());
        assert!(!report.has_issues());
        assert_eq!(report.degenerate_face_count, 0);
    }

    #[test]
    fn missing_face_leaves_boundary_edges() {
        let mut mesh = cube();
        mesh.faces.pop();
        let report = analyze_solidity(&mesh);
        assert_eq!(report.boundary_edge_count, 3);
        assert!(!report.is_closed());
    }

    #[test]
    fn flipped_face_is_misoriented() {
        let mut mesh = cube();
        mesh.faces[0].swap(1, 2);
        let report = analyze_solidity(&mesh);
        assert_eq!(report.misoriented_edge_count, 3);
        assert_eq!(report.boundary_edge_count, 0);
        assert!(!report.is_closed());
    }

    #[test]
    fn duplicated_face_is_non_manifold() {
        let mut mesh = cube();
        mesh.faces.push([0, 2, 1]);
        let report = analyze_solidity(&mesh);
        assert_eq!(report.non_manifold_edge_count, 3);
    }

    #[test]
    fn repeated_index_face_is_degenerate() {
        let mut mesh = cube();
        mesh.faces.push([0, 0, 1]);
        let report = analyze_solidity(&mesh);
        assert_eq!(report.degenerate_face_count, 1);
        // Its collapsed edges are skipped entirely.
        assert_eq!(report.edge_count, 18);
    }

    #[test]
    fn zero_area_face_is_degenerate() {
        let mut mesh = cube();
        let slot = mesh.positions.len() as u32;
        mesh.positions.push(Point3::new(0.0, 0.0, 0.0));
        mesh.faces.push([0, slot, 1]);
        let report = analyze_solidity(&mesh);
        assert_eq!(report.degenerate_face_count, 1);
    }

    #[test]
    fn display_summarizes_counts() {
        let text = analyze_solidity(&cube()).to_string();
        assert!(text.contains("Edges: 18"));
        assert!(text.contains("Status: closed"));

        let mut mesh = cube();
        mesh.faces.pop();
        let text = analyze_solidity(&mesh).to_string();
        assert!(text.contains("Boundary edges: 3"));
        assert!(text.contains("Status: OPEN"));
    }
}
