use cgmath::{InnerSpace, Point3, Vector3};

#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Point3<f64>,
    pub direction: Vector3<f64>,
}

impl Ray {
    /// Normalizes the direction. A zero direction stays zero so callers can
    /// treat it as a ray that never hits.
    pub fn new(origin: Point3<f64>, direction: Vector3<f64>) -> Self {
        let magnitude = direction.magnitude();
        let direction = if magnitude > 0.0 {
            direction / magnitude
        } else {
            Vector3::new(0.0, 0.0, 0.0)
        };
        Self { origin, direction }
    }

    pub fn point_at(&self, distance: f64) -> Point3<f64> {
        self.origin + self.direction * distance
    }
}

/// Axis of the voxel face a ray stopped on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceAxis {
    X,
    Y,
    Z,
}
