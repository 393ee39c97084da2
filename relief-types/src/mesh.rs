//! Indexed triangle mesh.

use crate::Aabb;
use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An indexed triangle mesh.
///
/// Stores vertex positions and faces separately, with faces referencing
/// positions by index.
///
/// # Memory Layout
///
/// - `positions`: `Vec<Point3<f64>>` - Vertex coordinates
/// - `faces`: `Vec<[u32; 3]>` - Triangle faces as vertex indices
///
/// # Winding Order
///
/// Faces use **counter-clockwise (CCW) winding** when viewed from outside.
/// This means normals point outward by the right-hand rule.
///
/// # Example
///
/// ```
/// use relief_types::{Point3, TriangleMesh};
///
/// // Create a single triangle
/// let mut mesh = TriangleMesh::new();
/// mesh.positions.push(Point3::new(0.0, 0.0, 0.0));
/// mesh.positions.push(Point3::new(1.0, 0.0, 0.0));
/// mesh.positions.push(Point3::new(0.0, 1.0, 0.0));
/// mesh.faces.push([0, 1, 2]);
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TriangleMesh {
    /// Vertex coordinates.
    pub positions: Vec<Point3<f64>>,

    /// Triangle faces as indices into the position array.
    /// Each face is `[v0, v1, v2]` with counter-clockwise winding.
    pub faces: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Create a new empty mesh.
    ///
    /// # Example
    ///
    /// ```
    /// use relief_types::TriangleMesh;
    ///
    /// let mesh = TriangleMesh::new();
    /// assert!(mesh.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            positions: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    ///
    /// # Arguments
    ///
    /// * `vertex_count` - Expected number of vertices
    /// * `face_count` - Expected number of faces
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Create a mesh from positions and faces.
    ///
    /// # Example
    ///
    /// ```
    /// use relief_types::{Point3, TriangleMesh};
    ///
    /// let positions = vec![
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(1.0, 0.0, 0.0),
    ///     Point3::new(0.0, 1.0, 0.0),
    /// ];
    /// let mesh = TriangleMesh::from_parts(positions, vec![[0, 1, 2]]);
    /// assert_eq!(mesh.face_count(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_parts(positions: Vec<Point3<f64>>, faces: Vec<[u32; 3]>) -> Self {
        Self { positions, faces }
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangle faces.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if the mesh has no faces.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// The three corner positions of face `index`, in winding order.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range or the face references a vertex
    /// outside the position buffer.
    #[must_use]
    pub fn triangle(&self, index: usize) -> [Point3<f64>; 3] {
        let [i0, i1, i2] = self.faces[index];
        [
            self.positions[i0 as usize],
            self.positions[i1 as usize],
            self.positions[i2 as usize],
        ]
    }

    /// Compute the signed volume of the mesh.
    ///
    /// Uses the divergence theorem: the signed volume is the sum of signed
    /// tetrahedra volumes formed by each face and the origin.
    ///
    /// # Returns
    ///
    /// - Positive value: normals point outward (correct orientation)
    /// - Negative value: normals point inward (inside-out mesh)
    /// - Near-zero: mesh is not closed or has inconsistent winding
    ///
    /// # Note
    ///
    /// This calculation assumes the mesh is closed (watertight). For open
    /// meshes, the result is not meaningful as a volume measurement.
    #[must_use]
    pub fn signed_volume(&self) -> f64 {
        let mut volume = 0.0;

        for &[i0, i1, i2] in &self.faces {
            let v0 = &self.positions[i0 as usize];
            let v1 = &self.positions[i1 as usize];
            let v2 = &self.positions[i2 as usize];

            // Signed volume of tetrahedron with origin = (v0 · (v1 × v2)) / 6
            // Using mul_add for better numerical accuracy and performance
            let cross = Vector3::new(
                v1.y.mul_add(v2.z, -(v1.z * v2.y)),
                v1.z.mul_add(v2.x, -(v1.x * v2.z)),
                v1.x.mul_add(v2.y, -(v1.y * v2.x)),
            );
            volume += v0.z.mul_add(cross.z, v0.x.mul_add(cross.x, v0.y * cross.y));
        }

        volume / 6.0
    }

    /// Axis-aligned bounding box over all vertex positions.
    ///
    /// Returns an empty box for a mesh with no vertices.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(self.positions.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_cube() -> TriangleMesh {
        // 8 corners, 12 outward-wound triangles.
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
            // Bottom (-Z)
            [0, 2, 1],
            [0, 3, 2],
            // Top (+Z)
            [4, 5, 6],
            [4, 6, 7],
            // Front (-Y)
            [0, 1, 5],
            [0, 5, 4],
            // Right (+X)
            [1, 2, 6],
            [1, 6, 5],
            // Back (+Y)
            [2, 3, 7],
            [2, 7, 6],
            // Left (-X)
            [3, 0, 4],
            [3, 4, 7],
        ];
        TriangleMesh::from_parts(positions, faces)
    }

    #[test]
    fn new_mesh_is_empty() {
        let mesh = TriangleMesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.face_count(), 0);
    }

    #[test]
    fn with_capacity_is_still_empty() {
        let mesh = TriangleMesh::with_capacity(100, 200);
        assert!(mesh.is_empty());
    }

    #[test]
    fn triangle_returns_corners_in_winding_order() {
        let mesh = TriangleMesh::from_parts(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(2.0, 0.0, 0.0),
                Point3::new(0.0, 2.0, 0.0),
            ],
            vec![[0, 2, 1]],
        );
        let tri = mesh.triangle(0);
        assert_eq!(tri[0], Point3::new(0.0, 0.0, 0.0));
        assert_eq!(tri[1], Point3::new(0.0, 2.0, 0.0));
        assert_eq!(tri[2], Point3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn unit_cube_volume_is_one() {
        let volume = unit_cube().signed_volume();
        assert!((volume - 1.0).abs() < 1e-10, "volume was {volume}");
    }

    #[test]
    fn flipped_cube_volume_is_negative() {
        let mut mesh = unit_cube();
        for face in &mut mesh.faces {
            face.swap(1, 2);
        }
        assert!(mesh.signed_volume() < 0.0);
    }

    #[test]
    fn empty_mesh_volume_is_zero() {
        assert!(TriangleMesh::new().signed_volume().abs() < f64::EPSILON);
    }

    #[test]
    fn bounds_spans_all_positions() {
        let bounds = unit_cube().bounds();
        assert_eq!(bounds.min, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(bounds.max, Point3::new(1.0, 1.0, 1.0));
    }
}
