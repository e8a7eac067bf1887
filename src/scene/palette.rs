//! The fixed material palette for the eight term boxes.

use serde::Serialize;

/// Half-transparent unlit material, diffuse channels in 0..=1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Material {
    pub color: [f64; 3],
    pub opacity: f64,
    pub transparent: bool,
}

const fn material(color: [f64; 3]) -> Material {
    Material {
        color,
        opacity: 0.5,
        transparent: true,
    }
}

/// Palette indexed by `color_index`. The ordering is part of the contract:
/// a host keys its persistent objects by index, so entry i always colors
/// the same table row.
pub const BOX_MATERIALS: [Material; 8] = [
    material([1.0, 0.0, 0.0]),          // red, a³
    material([0.0, 1.0, 0.0]),          // green, b³
    material([0.0, 0.0, 1.0]),          // blue, 3a²b
    material([1.0, 1.0, 0.0]),          // yellow, 3a²b
    material([0.0, 1.0, 1.0]),          // cyan, 3a²b
    material([1.0, 0.0, 1.0]),          // magenta, 3ab²
    material([1.0, 1.0, 1.0]),          // white, 3ab²
    material([1.0, 136.0 / 255.0, 0.0]), // orange, 3ab²
];
