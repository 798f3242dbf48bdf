//! Builders for entity, transition, lock and trigger definitions
//!
//! Everything position independent about a definition is resolved here,
//! once per cache miss.

use crate::constants::legacy::{
    CREATURE_ITEM_INDEX_FIRST, CREATURE_ITEM_INDEX_LAST, FINAL_BOSS_CREATURE_ID,
    FINAL_BOSS_ITEM_INDEX, HUMAN_ENEMY_ITEM_INDEX_FIRST, HUMAN_ENEMY_ITEM_INDEX_LAST,
    WILD_DEN_FLAT_INDEX,
};
use crate::legacy::{
    interior_type_from_menu_index, is_city_gate_menu_index, LegacyTrigger, ParameterTable,
};
use crate::world::core::{InteriorType, VoxelDefinition, WallKind, WorldType};
use crate::world::level::{
    DoodadDefinition, EntityCapability, EntityDefinition, EntityKind, InteriorGenInfo,
    TransitionDefinition, TriggerDefinition, TriggerText,
};

/// Creature ID for an item index, and whether it is the final boss.
pub fn creature_from_item_index(item_index: i32) -> Option<(i32, bool)> {
    if item_index == FINAL_BOSS_ITEM_INDEX {
        Some((FINAL_BOSS_CREATURE_ID, true))
    } else if (CREATURE_ITEM_INDEX_FIRST..=CREATURE_ITEM_INDEX_LAST).contains(&item_index) {
        Some((item_index - (CREATURE_ITEM_INDEX_FIRST - 1), false))
    } else {
        None
    }
}

/// Character class for an item index that places a human enemy.
pub fn human_enemy_class_from_item_index(item_index: i32) -> Option<i32> {
    (HUMAN_ENEMY_ITEM_INDEX_FIRST..=HUMAN_ENEMY_ITEM_INDEX_LAST)
        .contains(&item_index)
        .then(|| item_index - HUMAN_ENEMY_ITEM_INDEX_FIRST)
}

/// Entity for a flat, or `None` (logged) when the table has no such flat.
pub fn make_entity_def(flat_index: i32, inf: &ParameterTable) -> Option<EntityDefinition> {
    let flat = match inf.flat(flat_index) {
        Some(flat) => flat,
        None => {
            log::warn!(
                "[definition_builders::make_entity_def] No flat {} in '{}', skipping placement",
                flat_index,
                inf.name
            );
            return None;
        }
    };

    let creature = flat.item_index.and_then(creature_from_item_index);
    let human = flat.item_index.and_then(human_enemy_class_from_item_index);

    let (capability, kind) = match (creature, human) {
        (Some((creature_id, is_final_boss)), _) => (
            EntityCapability::Dynamic,
            EntityKind::Creature {
                creature_id,
                is_final_boss,
            },
        ),
        // Human enemies placed by map data are always male.
        (None, Some(char_class_id)) => (
            EntityCapability::Dynamic,
            EntityKind::HumanEnemy {
                is_male: true,
                char_class_id,
            },
        ),
        (None, None) => (
            EntityCapability::Static,
            EntityKind::Doodad(DoodadDefinition {
                y_offset: flat.y_offset,
                scale: flat.dimension_scale,
                collider: flat.collider,
                transparent: flat.transparent,
                ceiling: flat.ceiling,
                street_light: flat.street_light,
                puddle: flat.puddle,
                light_intensity: flat.light_intensity.unwrap_or(0),
            }),
        ),
    };

    Some(EntityDefinition {
        flat_index,
        capability,
        kind,
    })
}

/// Interior behind a door of the given type. Procedural interiors are
/// dungeons; wild dens are never artifact dungeons.
pub fn make_interior_gen_info(
    interior_type: InteriorType,
    ruler_is_male: Option<bool>,
) -> InteriorGenInfo {
    if interior_type.is_procedural() {
        InteriorGenInfo::Dungeon {
            is_artifact_dungeon: false,
        }
    } else {
        InteriorGenInfo::Prefab {
            interior_type,
            ruler_is_male,
        }
    }
}

/// Transition carried by a decoded MAP1 voxel, if any. Only solid-wall codes
/// can be transitions.
pub fn make_voxel_transition_def(
    definition: &VoxelDefinition,
    world_type: WorldType,
    ruler_is_male: Option<bool>,
) -> Option<TransitionDefinition> {
    let (kind, menu_id) = match definition {
        VoxelDefinition::Wall { kind, menu_id, .. } => (*kind, *menu_id),
        _ => return None,
    };

    match world_type {
        WorldType::Interior => match kind {
            WallKind::LevelUp => Some(TransitionDefinition::LevelChange { is_up: true }),
            WallKind::LevelDown => Some(TransitionDefinition::LevelChange { is_up: false }),
            WallKind::Menu => Some(TransitionDefinition::ExitInterior),
            WallKind::Solid => None,
        },
        WorldType::City | WorldType::Wilderness => {
            let menu_id = menu_id?;
            if is_city_gate_menu_index(menu_id, world_type) {
                Some(TransitionDefinition::CityGate)
            } else {
                interior_type_from_menu_index(menu_id, world_type).map(|interior_type| {
                    TransitionDefinition::EnterInterior(make_interior_gen_info(
                        interior_type,
                        ruler_is_male,
                    ))
                })
            }
        }
    }
}

/// Wild dens are the only entities that are also transitions.
pub fn is_entity_transition(flat_index: i32, world_type: WorldType) -> bool {
    world_type == WorldType::Wilderness && flat_index == WILD_DEN_FLAT_INDEX
}

pub fn make_den_transition_def() -> TransitionDefinition {
    TransitionDefinition::EnterInterior(make_interior_gen_info(InteriorType::Dungeon, None))
}

/// Text is attached only when the table holds that text index; sound names
/// are upper-cased. Unknown sounds are logged and dropped.
pub fn make_trigger_def(trigger: &LegacyTrigger, inf: &ParameterTable) -> TriggerDefinition {
    let text = if trigger.text_index != -1 {
        inf.text(trigger.text_index).map(|data| TriggerText {
            text: data.text.clone(),
            displayed_once: data.displayed_once,
        })
    } else {
        None
    };

    let sound = if trigger.sound_index != -1 {
        match inf.sound(trigger.sound_index) {
            Some(name) => Some(name.to_uppercase()),
            None => {
                log::warn!(
                    "[definition_builders::make_trigger_def] No sound {} in '{}'",
                    trigger.sound_index,
                    inf.name
                );
                None
            }
        }
    } else {
        None
    };

    TriggerDefinition { text, sound }
}
