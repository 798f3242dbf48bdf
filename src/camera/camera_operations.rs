//! Camera operations - Pure DOP functions
//!
//! All functions are pure: they take data, return new data, no side effects.
//! No methods, no self, just transformations.

use super::camera_data::{CameraBasis, CameraData};
use crate::config::EngineConfig;
use crate::constants::render::{DEFAULT_FOV_Y_DEGREES, DEFAULT_VIEW_DISTANCE};
use crate::error::{EngineError, EngineResult};
use cgmath::{InnerSpace, Point3, Quaternion, Rad, Rotation, Rotation3, Vector3};

/// Below this magnitude a vector counts as zero.
const DEGENERATE_EPSILON: f64 = 1e-9;

fn world_up() -> Vector3<f64> {
    Vector3::new(0.0, 1.0, 0.0)
}

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Camera looking down +X with default FOV and view distance
pub fn init_camera(eye: Point3<f64>) -> CameraData {
    CameraData {
        eye,
        forward: Vector3::new(1.0, 0.0, 0.0),
        fov_y_degrees: DEFAULT_FOV_Y_DEGREES,
        view_distance: DEFAULT_VIEW_DISTANCE,
    }
}

/// Camera taking FOV and view distance from a validated config
pub fn init_camera_from_config(
    config: &EngineConfig,
    eye: Point3<f64>,
    forward: Vector3<f64>,
) -> EngineResult<CameraData> {
    let camera = init_camera(eye);
    let camera = set_forward(&camera, forward)?;
    let camera = set_fov_y(&camera, config.fov_y_degrees)?;
    set_view_distance(&camera, config.view_distance)
}

// ============================================================================
// SETTERS
// ============================================================================

pub fn set_eye(camera: &CameraData, eye: Point3<f64>) -> CameraData {
    CameraData { eye, ..*camera }
}

/// Replace the look direction. A zero vector has no direction to look in.
pub fn set_forward(camera: &CameraData, forward: Vector3<f64>) -> EngineResult<CameraData> {
    let magnitude = forward.magnitude();
    if !(magnitude.is_finite() && magnitude > DEGENERATE_EPSILON) {
        return Err(EngineError::ValidationFailed(format!(
            "camera forward must be a non-zero finite vector, got {:?}",
            forward
        )));
    }

    Ok(CameraData {
        forward: forward / magnitude,
        ..*camera
    })
}

pub fn set_fov_y(camera: &CameraData, fov_y_degrees: f64) -> EngineResult<CameraData> {
    if !(fov_y_degrees > 0.0 && fov_y_degrees < 180.0) {
        return Err(EngineError::ValidationFailed(format!(
            "vertical FOV must be in (0, 180) degrees, got {}",
            fov_y_degrees
        )));
    }

    Ok(CameraData {
        fov_y_degrees,
        ..*camera
    })
}

/// Zero is allowed and turns every pixel into fog.
pub fn set_view_distance(camera: &CameraData, view_distance: f64) -> EngineResult<CameraData> {
    if !(view_distance.is_finite() && view_distance >= 0.0) {
        return Err(EngineError::ValidationFailed(format!(
            "view distance must be finite and non-negative, got {}",
            view_distance
        )));
    }

    Ok(CameraData {
        view_distance,
        ..*camera
    })
}

// ============================================================================
// MOVEMENT
// ============================================================================

/// Move the eye along the look direction
pub fn move_forward(camera: &CameraData, distance: f64) -> CameraData {
    set_eye(camera, camera.eye + camera.forward * distance)
}

/// Move the eye sideways along the camera's right vector
pub fn move_right(camera: &CameraData, distance: f64) -> CameraData {
    let basis = build_camera_basis(camera);
    set_eye(camera, camera.eye + basis.right * distance)
}

/// Turn the look direction around the world Y axis
pub fn rotate_yaw(camera: &CameraData, radians: f64) -> CameraData {
    let rotation = Quaternion::from_axis_angle(world_up(), Rad(radians));
    let forward = rotation.rotate_vector(camera.forward).normalize();
    CameraData { forward, ..*camera }
}

// ============================================================================
// BASIS & RAY DIRECTIONS
// ============================================================================

/// right = forward x up, up = right x forward. A camera looking straight
/// up or down falls back to +X as its right vector.
pub fn build_camera_basis(camera: &CameraData) -> CameraBasis {
    let forward = camera.forward.normalize();
    let right = forward.cross(world_up());
    let right = if right.magnitude() > DEGENERATE_EPSILON {
        right.normalize()
    } else {
        Vector3::new(1.0, 0.0, 0.0)
    };
    let up = right.cross(forward).normalize();
    let zoom = 1.0 / (camera.fov_y_degrees.to_radians() * 0.5).tan();

    CameraBasis {
        forward,
        right,
        up,
        zoom,
    }
}

/// Normalized world-space direction through pixel (x, y) of a width x
/// height image. Screen coordinates map to [-1, 1]; +y runs down the image.
pub fn pixel_ray_direction(
    basis: &CameraBasis,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
) -> Vector3<f64> {
    let width_f = width as f64;
    let height_f = height as f64;
    let aspect = width_f / height_f;
    let screen_x = (2.0 * x as f64 / width_f) - 1.0;
    let screen_y = (2.0 * y as f64 / height_f) - 1.0;

    let direction = basis.forward * basis.zoom + basis.right * (aspect * screen_x)
        - basis.up * screen_y;
    direction.normalize()
}

pub fn log_camera_context(camera: &CameraData) {
    log::debug!(
        "[camera::log_camera_context] eye=({:.2}, {:.2}, {:.2}) forward=({:.3}, {:.3}, {:.3}) fov_y={} view_distance={}",
        camera.eye.x,
        camera.eye.y,
        camera.eye.z,
        camera.forward.x,
        camera.forward.y,
        camera.forward.z,
        camera.fov_y_degrees,
        camera.view_distance
    );
}
