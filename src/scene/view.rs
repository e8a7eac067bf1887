//! Camera configuration for the two synchronized views.
//!
//! The host builds its own renderers and cameras from these records once
//! at startup; neither view depends on the parameters, so they never
//! appear in a diff.

use std::f64::consts::FRAC_PI_2;

use serde::Serialize;

/// Camera projection, tagged for the host side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Projection {
    Perspective {
        fov_degrees: f64,
        near: f64,
        far: f64,
    },
    Orthographic {
        left: f64,
        right: f64,
        top: f64,
        bottom: f64,
        near: f64,
        far: f64,
    },
}

/// Orbit-control tuning for the interactive view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrbitSettings {
    pub enable_damping: bool,
    pub damping_factor: f64,
    pub screen_space_panning: bool,
    pub max_polar_angle: f64,
}

/// One renderer/camera pair as the host should construct it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewConfig {
    pub id: &'static str,
    pub projection: Projection,
    pub position: [f64; 3],
    pub target: [f64; 3],
    /// Fixed pixel size, when the view is not window-sized.
    pub viewport: Option<[u32; 2]>,
    /// Present only on the user-controlled view.
    pub orbit: Option<OrbitSettings>,
}

/// The interactive perspective view, orbiting the scene origin.
#[must_use]
pub fn main_view() -> ViewConfig {
    ViewConfig {
        id: "main",
        projection: Projection::Perspective {
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
        },
        position: [20.0, 20.0, 20.0],
        target: [0.0, 0.0, 0.0],
        viewport: None,
        orbit: Some(OrbitSettings {
            enable_damping: true,
            damping_factor: 0.05,
            screen_space_panning: false,
            max_polar_angle: FRAC_PI_2,
        }),
    }
}

/// The fixed top-down view. The window frames the first quadrant where
/// the cube lives; x runs 0..10 and z runs 0..-10 as seen from above.
#[must_use]
pub fn top_view() -> ViewConfig {
    ViewConfig {
        id: "top",
        projection: Projection::Orthographic {
            left: 0.0,
            right: 10.0,
            top: 0.0,
            bottom: -10.0,
            near: 1.0,
            far: 100.0,
        },
        position: [0.0, 20.0, 0.0],
        target: [0.0, 0.0, 0.0],
        viewport: Some([200, 200]),
        orbit: None,
    }
}

/// Both views, main first.
#[must_use]
pub fn views() -> [ViewConfig; 2] {
    [main_view(), top_view()]
}

#[cfg(test)]
mod tests {
    use super::{Projection, main_view, top_view, views};

    #[test]
    fn main_view_orbits_the_origin() {
        let view = main_view();
        assert!(matches!(
            view.projection,
            Projection::Perspective { fov_degrees, .. } if fov_degrees == 75.0
        ));
        assert_eq!(view.target, [0.0, 0.0, 0.0]);
        let orbit = view.orbit.expect("main view is user controlled");
        assert!(orbit.enable_damping);
        assert!(orbit.max_polar_angle <= std::f64::consts::PI);
    }

    #[test]
    fn top_view_is_fixed_overhead() {
        let view = top_view();
        assert!(matches!(view.projection, Projection::Orthographic { .. }));
        assert_eq!(view.position, [0.0, 20.0, 0.0]);
        assert_eq!(view.viewport, Some([200, 200]));
        assert!(view.orbit.is_none());
    }

    #[test]
    fn views_are_stable_and_distinct() {
        let [main, top] = views();
        assert_ne!(main.id, top.id);
        assert_eq!([main, top], views());
    }
}
