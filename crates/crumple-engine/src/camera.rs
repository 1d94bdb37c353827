//! Orbit camera state.
//!
//! View-only: rotating never touches the paper. Pitch is clamped so the
//! camera cannot flip over the poles, yaw wraps to `(-π, π]`.

use std::f32::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

use crumple_math::{EulerRot, Quat, Vec3};
use crumple_types::constants::{DEFAULT_CAMERA_DISTANCE, PITCH_LIMIT};

/// Yaw/pitch orbit around the paper center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitCamera {
    /// Rotation about the paper's Y axis (radians).
    pub yaw: f32,
    /// Rotation about the camera's X axis (radians).
    pub pitch: f32,
    /// Distance from the focus point.
    pub distance: f32,
    /// Point the camera orbits.
    pub focus: Vec3,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance: DEFAULT_CAMERA_DISTANCE,
            focus: Vec3::ZERO,
        }
    }
}

impl OrbitCamera {
    /// Applies a drag delta.
    pub fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
        if delta_yaw.is_finite() {
            self.yaw = wrap_angle(self.yaw + delta_yaw);
        }
        if delta_pitch.is_finite() {
            self.pitch = (self.pitch + delta_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }
    }

    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    /// Camera position; at yaw = pitch = 0 it looks down -Z onto the sheet.
    pub fn eye(&self) -> Vec3 {
        self.focus + self.orientation() * (Vec3::Z * self.distance)
    }
}

/// Wraps an angle into `(-π, π]`.
fn wrap_angle(angle: f32) -> f32 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}
