//! Runtime Overlay Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in runtime_operations.rs
//!
//! Mutable per-voxel state layered over an immutable LevelDefinition.

use crate::world::core::LevelVoxel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorAnimation {
    None,
    Opening,
    Closing,
}

/// Open/close progress of one door voxel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoorState {
    pub voxel: LevelVoxel,
    /// Fraction of the door opening per second.
    pub speed: f64,
    /// 0.0 closed, 1.0 fully open.
    pub percent_open: f64,
    pub animation: DoorAnimation,
}

/// Fade-out progress of one voxel, e.g. a destroyed wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeState {
    pub voxel: LevelVoxel,
    pub seconds: f64,
    pub target_seconds: f64,
}

/// Which walls of a chasm voxel are drawn. Faces use the `Facing`
/// convention: north -X, south +X, east -Z, west +Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChasmState {
    pub north: bool,
    pub south: bool,
    pub east: bool,
    pub west: bool,
}

/// All overlays of one active level.
#[derive(Debug, Clone, Default)]
pub struct LevelRuntimeData {
    pub doors: Vec<DoorState>,
    pub fades: Vec<FadeState>,
    pub chasms: Vec<(LevelVoxel, ChasmState)>,
}
