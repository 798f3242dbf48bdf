//! Prefab levels: fixed legacy layouts decoded as-is

use super::generation_caches::GenerationCaches;
use super::layer_reader::{level_height, read_level_layers, read_lock, read_trigger, GenerationContext};
use crate::error::EngineResult;
use crate::legacy::LegacyLevel;
use crate::world::level::{create_level_definition, create_level_info, LevelDefinition, LevelInfoDefinition};

/// Empty level sized for a legacy layout. Level X spans legacy rows.
pub fn create_level_for_layout(source: &LegacyLevel) -> EngineResult<LevelDefinition> {
    source.validate()?;
    create_level_definition(source.depth(), level_height(source), source.width())
}

/// Decode every level of a prefab interior (or any fixed layout) into one
/// shared set of catalogs.
pub fn generate_prefab_levels(
    levels: &[LegacyLevel],
    ctx: &GenerationContext,
) -> EngineResult<(Vec<LevelDefinition>, LevelInfoDefinition)> {
    log::info!(
        "[prefab::generate_prefab_levels] Decoding {} level(s) with '{}'",
        levels.len(),
        ctx.inf.name
    );

    let mut info = create_level_info(ctx.inf.ceiling_scale());
    let mut caches = GenerationCaches::default();
    let mut level_defs = Vec::with_capacity(levels.len());

    for source in levels {
        let mut level = create_level_for_layout(source)?;
        read_level_layers(source, ctx, &mut level, &mut info, &mut caches)?;
        for lock in &source.locks {
            read_lock(lock, &mut level, &mut info, &mut caches);
        }
        for trigger in &source.triggers {
            read_trigger(trigger, ctx, &mut level, &mut info, &mut caches);
        }
        level_defs.push(level);
    }

    log::debug!(
        "[prefab::generate_prefab_levels] {} voxel defs, {} entity defs, {} transitions",
        info.voxel_defs.len(),
        info.entity_defs.len(),
        info.transition_defs.len()
    );
    Ok((level_defs, info))
}
