//! Non-voxel definitions a level references by ID
//!
//! NO METHODS beyond trivial accessors. Built by the generators, read by the
//! runtime layer.

use crate::world::core::InteriorType;

/// How an entity is simulated. Resolved once when the definition is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityCapability {
    /// Idle animation only; never moves.
    Static,
    /// Has movement and combat states.
    Dynamic,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DoodadDefinition {
    /// Arena units above the floor.
    pub y_offset: i32,
    pub scale: f64,
    pub collider: bool,
    pub transparent: bool,
    pub ceiling: bool,
    pub street_light: bool,
    pub puddle: bool,
    pub light_intensity: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EntityKind {
    Creature { creature_id: i32, is_final_boss: bool },
    HumanEnemy { is_male: bool, char_class_id: i32 },
    Doodad(DoodadDefinition),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntityDefinition {
    /// Parameter table flat this entity was built from.
    pub flat_index: i32,
    pub capability: EntityCapability,
    pub kind: EntityKind,
}

/// Locked voxel. The key level a lockpick or key must beat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LockDefinition {
    pub lock_level: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TriggerText {
    pub text: String,
    pub displayed_once: bool,
}

/// Text and/or sound fired when the player enters a voxel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TriggerDefinition {
    pub text: Option<TriggerText>,
    /// Upper-cased sound file name.
    pub sound: Option<String>,
}

/// What the runtime needs to build the interior behind a door.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteriorGenInfo {
    /// Hand-made interior; the .MIF name is picked from the door position at runtime.
    Prefab {
        interior_type: InteriorType,
        ruler_is_male: Option<bool>,
    },
    /// Procedural dungeon; seeded from the door position at runtime.
    Dungeon { is_artifact_dungeon: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionDefinition {
    CityGate,
    EnterInterior(InteriorGenInfo),
    ExitInterior,
    LevelChange { is_up: bool },
}
