//! Camera data structures - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in camera_operations.rs

use cgmath::{Point3, Vector3};

/// Camera state the gameplay layer mutates between frames
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraData {
    /// Eye position in world space (Y scaled by voxel height)
    pub eye: Point3<f64>,

    /// Look direction, kept normalized by the setters
    pub forward: Vector3<f64>,

    /// Vertical field of view (degrees)
    pub fov_y_degrees: f64,

    /// Distance at which geometry fully fades into fog
    pub view_distance: f64,
}

/// Orthonormal basis derived from a camera at the start of every render.
/// Never cached across camera mutations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    pub forward: Vector3<f64>,
    pub right: Vector3<f64>,
    pub up: Vector3<f64>,
    /// 1 / tan(fov_y / 2)
    pub zoom: f64,
}
