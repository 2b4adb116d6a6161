//! Cube geometry: unwelded vertices, flat per-face colors and triangle indices.

use glam::{Vec3, Vec4};

use crate::types::Face;

/// Vertices per cube face (one quad).
pub const VERTICES_PER_FACE: usize = 4;

/// Total vertex count (4 per face, faces do not share vertices).
pub const VERTEX_COUNT: usize = VERTICES_PER_FACE * 6;

/// Total index count (2 triangles per face).
pub const INDEX_COUNT: usize = 6 * 6;

/// Corner positions of each face quad, in `Face::ALL` order.
const FACE_CORNERS: [[[f32; 3]; VERTICES_PER_FACE]; 6] = [
    // front
    [[-1.0, -1.0, 1.0], [1.0, -1.0, 1.0], [1.0, 1.0, 1.0], [-1.0, 1.0, 1.0]],
    // back
    [[-1.0, -1.0, -1.0], [-1.0, 1.0, -1.0], [1.0, 1.0, -1.0], [1.0, -1.0, -1.0]],
    // top
    [[-1.0, 1.0, -1.0], [-1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, -1.0]],
    // bottom
    [[-1.0, -1.0, -1.0], [1.0, -1.0, -1.0], [1.0, -1.0, 1.0], [-1.0, -1.0, 1.0]],
    // right
    [[1.0, -1.0, -1.0], [1.0, 1.0, -1.0], [1.0, 1.0, 1.0], [1.0, -1.0, 1.0]],
    // left
    [[-1.0, -1.0, -1.0], [-1.0, -1.0, 1.0], [-1.0, 1.0, 1.0], [-1.0, 1.0, -1.0]],
];

/// Static cube mesh ready to be uploaded to a render backend.
#[derive(Debug, Clone, PartialEq)]
pub struct CubeMesh {
    pub positions: Vec<Vec3>,
    pub colors: Vec<Vec4>,
    pub indices: Vec<u16>,
}

impl CubeMesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Index triples, one per triangle.
    pub fn triangles(&self) -> impl Iterator<Item = [u16; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }
}

/// Build the six-face cube.
///
/// Each face `f` owns vertices `4f..4f+4`, is split into the triangles
/// `(4f, 4f+1, 4f+2)` and `(4f, 4f+2, 4f+3)`, and carries one color from
/// [`Face::color`] replicated on its four vertices.
pub fn build_cube() -> CubeMesh {
    let mut positions = Vec::with_capacity(VERTEX_COUNT);
    let mut colors = Vec::with_capacity(VERTEX_COUNT);
    let mut indices = Vec::with_capacity(INDEX_COUNT);

    for (face_idx, face) in Face::ALL.iter().enumerate() {
        let color = Vec4::from_array(face.color().to_unit_rgba());
        for corner in FACE_CORNERS[face_idx] {
            positions.push(Vec3::from_array(corner));
            colors.push(color);
        }

        let a = (face_idx * VERTICES_PER_FACE) as u16;
        indices.extend_from_slice(&[a, a + 1, a + 2, a, a + 2, a + 3]);
    }

    CubeMesh {
        positions,
        colors,
        indices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_has_expected_counts() {
        let mesh = build_cube();
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.colors.len(), 24);
        assert_eq!(mesh.index_count(), 36);
        assert_eq!(mesh.triangles().count(), 12);
    }

    #[test]
    fn build_is_idempotent() {
        assert_eq!(build_cube(), build_cube());
    }

    #[test]
    fn each_face_is_flat_colored() {
        let mesh = build_cube();
        for (face_idx, face) in Face::ALL.iter().enumerate() {
            let expected = Vec4::from_array(face.color().to_unit_rgba());
            let start = face_idx * VERTICES_PER_FACE;
            for c in &mesh.colors[start..start + VERTICES_PER_FACE] {
                assert_eq!(*c, expected, "face {}", face.as_str());
            }
        }
    }

    #[test]
    fn indices_stay_within_their_face() {
        let mesh = build_cube();
        for (tri_idx, tri) in mesh.triangles().enumerate() {
            let face = tri_idx / 2;
            for i in tri {
                assert_eq!(i as usize / VERTICES_PER_FACE, face);
            }
        }
    }

    #[test]
    fn face_vertices_lie_on_one_plane_of_the_unit_cube() {
        let mesh = build_cube();
        for face in mesh.positions.chunks_exact(VERTICES_PER_FACE) {
            let on_x = face.iter().all(|p| p.x == face[0].x);
            let on_y = face.iter().all(|p| p.y == face[0].y);
            let on_z = face.iter().all(|p| p.z == face[0].z);
            assert!(on_x || on_y || on_z);
            assert!(face.iter().all(|p| p.abs().max_element() == 1.0));
        }
    }
}
