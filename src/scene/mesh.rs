//! Quad meshes for the layout boxes.

use serde::Serialize;

use crate::decomposition::BoxSpec;

/// Mesh in the host's vertices-plus-faces exchange shape. Faces are quads
/// with outward winding; vertices are absolute scene coordinates, so the
/// host replaces geometry without repositioning the object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mesh {
    pub vertices: Vec<[f64; 3]>,
    pub faces: Vec<Vec<u32>>,
}

/// Corner sign pattern, low-to-high in z, counter-clockwise per ring.
const CORNERS: [[f64; 3]; 8] = [
    [-0.5, -0.5, -0.5],
    [0.5, -0.5, -0.5],
    [0.5, 0.5, -0.5],
    [-0.5, 0.5, -0.5],
    [-0.5, -0.5, 0.5],
    [0.5, -0.5, 0.5],
    [0.5, 0.5, 0.5],
    [-0.5, 0.5, 0.5],
];

/// One quad per box side, wound so normals point outward.
const QUADS: [[u32; 4]; 6] = [
    [0, 3, 2, 1], // -z
    [4, 5, 6, 7], // +z
    [0, 1, 5, 4], // -y
    [3, 7, 6, 2], // +y
    [0, 4, 7, 3], // -x
    [1, 2, 6, 5], // +x
];

/// Build the absolute-coordinate mesh for one layout entry.
#[must_use]
pub fn box_mesh(spec: &BoxSpec) -> Mesh {
    let extents = spec.dimensions.map(f64::from);

    let vertices = CORNERS
        .iter()
        .map(|corner| {
            [
                spec.center[0] + corner[0] * extents[0],
                spec.center[1] + corner[1] * extents[1],
                spec.center[2] + corner[2] * extents[2],
            ]
        })
        .collect();

    Mesh {
        vertices,
        faces: QUADS.iter().map(|quad| quad.to_vec()).collect(),
    }
}
