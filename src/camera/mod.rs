/// Camera Module - Data-Oriented Programming (DOP) style
///
/// This module follows pure DOP principles:
/// - camera_data.rs: Pure data structures with NO methods
/// - camera_operations.rs: Pure functions that operate on data

pub mod camera_data;
pub mod camera_operations;

// Re-export data structures
pub use camera_data::{CameraBasis, CameraData};

// Re-export all operations
pub use camera_operations::{
    // Initialization
    init_camera,
    init_camera_from_config,

    // Setters
    set_eye,
    set_forward,
    set_fov_y,
    set_view_distance,

    // Movement
    move_forward,
    move_right,
    rotate_yaw,

    // Basis & ray directions
    build_camera_basis,
    pixel_ray_direction,

    // Diagnostics
    log_camera_context,
};
