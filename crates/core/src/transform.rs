//! Rotation model and per-frame projection / model-view matrices.
//!
//! The rotation state is a single accumulated time scalar. Three angular
//! speeds are derived from it (1x, 0.618x, -1.618x) so the three axes drift
//! out of phase and the cube never settles into a short visual period.

use std::f64::consts::TAU;

use glam::{Mat4, Vec3};

use crate::types::{
    CAMERA_DISTANCE, FOV_Y_DEGREES, X_AXIS_SPEED, Y_AXIS_SPEED, Z_AXIS_SPEED, Z_FAR, Z_NEAR,
};

/// Accumulated rotation, in elapsed seconds.
///
/// Never wrapped: angles are reduced modulo a full turn only at the trig
/// boundary (see [`AxisAngles::reduced`]).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationState {
    seconds: f64,
}

impl RotationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_seconds(seconds: f64) -> Self {
        Self { seconds }
    }

    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    /// Advance by `elapsed_secs`. Negative or NaN deltas are ignored.
    pub fn advance(&mut self, elapsed_secs: f64) {
        if elapsed_secs > 0.0 {
            self.seconds += elapsed_secs;
        }
    }

    /// Unreduced angles, in application order.
    pub fn axis_angles(&self) -> AxisAngles {
        AxisAngles {
            z: self.seconds * Z_AXIS_SPEED,
            y: self.seconds * Y_AXIS_SPEED,
            x: self.seconds * X_AXIS_SPEED,
        }
    }
}

/// Rotation angles in radians, applied Z first, then Y, then X.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisAngles {
    pub z: f64,
    pub y: f64,
    pub x: f64,
}

impl AxisAngles {
    /// Angles folded into `[0, TAU)` and narrowed to `f32`.
    pub fn reduced(&self) -> [f32; 3] {
        [
            reduce_angle(self.z),
            reduce_angle(self.y),
            reduce_angle(self.x),
        ]
    }
}

#[inline]
fn reduce_angle(radians: f64) -> f32 {
    radians.rem_euclid(TAU) as f32
}

/// Matrices consumed by the render backend for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameMatrices {
    pub projection: Mat4,
    pub model_view: Mat4,
}

impl FrameMatrices {
    /// `projection * model_view`.
    pub fn model_view_projection(&self) -> Mat4 {
        self.projection * self.model_view
    }
}

/// Perspective projection for the given viewport aspect.
pub fn projection(aspect: f32) -> Mat4 {
    Mat4::perspective_rh_gl(FOV_Y_DEGREES.to_radians(), aspect, Z_NEAR, Z_FAR)
}

/// Model-view: translate to `CAMERA_DISTANCE`, then rotate about Z, Y, X.
pub fn model_view(rotation: &RotationState) -> Mat4 {
    let [z, y, x] = rotation.axis_angles().reduced();
    Mat4::from_translation(Vec3::new(0.0, 0.0, -CAMERA_DISTANCE))
        * Mat4::from_rotation_z(z)
        * Mat4::from_rotation_y(y)
        * Mat4::from_rotation_x(x)
}

/// Both matrices for one frame. Pure in `(rotation, aspect)`.
pub fn compute_matrices(rotation: &RotationState, aspect: f32) -> FrameMatrices {
    FrameMatrices {
        projection: projection(aspect),
        model_view: model_view(rotation),
    }
}
