use crate::constants::legacy::DEFAULT_CEILING_HEIGHT;
use rustc_hash::FxHashMap;

/// *CEILING block of a parameter table
#[derive(Debug, Clone, PartialEq)]
pub struct CeilingData {
    pub texture_index: Option<i32>,
    /// Height in Arena units.
    pub height: i32,
    pub box_scale: Option<i32>,
    /// Outdoor dungeons have no ceiling layer.
    pub outdoor_dungeon: bool,
}

impl Default for CeilingData {
    fn default() -> Self {
        Self {
            texture_index: None,
            height: DEFAULT_CEILING_HEIGHT,
            box_scale: None,
            outdoor_dungeon: false,
        }
    }
}

/// Per-flat entity metadata
#[derive(Debug, Clone, PartialEq)]
pub struct FlatData {
    pub y_offset: i32,
    pub collider: bool,
    pub transparent: bool,
    pub ceiling: bool,
    pub puddle: bool,
    pub street_light: bool,
    pub light_intensity: Option<i32>,
    pub item_index: Option<i32>,
    pub dimension_scale: f64,
}

impl Default for FlatData {
    fn default() -> Self {
        Self {
            y_offset: 0,
            collider: false,
            transparent: false,
            ceiling: false,
            puddle: false,
            street_light: false,
            light_intensity: None,
            item_index: None,
            dimension_scale: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextData {
    pub text: String,
    pub displayed_once: bool,
}

/// Level parameter table, the data an .INF file provides.
///
/// Lookups return `None` for absent entries; callers decide the default and
/// log the substitution.
#[derive(Debug, Clone, Default)]
pub struct ParameterTable {
    pub name: String,
    /// Texture index -> *MENU ID.
    pub menu_indices: FxHashMap<i32, i32>,
    pub level_up_index: Option<i32>,
    pub level_down_index: Option<i32>,
    pub box_sides: FxHashMap<i32, i32>,
    pub box_caps: FxHashMap<i32, i32>,
    pub dry_chasm_index: Option<i32>,
    pub wet_chasm_index: Option<i32>,
    pub lava_chasm_index: Option<i32>,
    pub ceiling: CeilingData,
    pub flats: Vec<FlatData>,
    pub texts: FxHashMap<i32, TextData>,
    pub sounds: Vec<String>,
}

impl ParameterTable {
    pub fn menu_index(&self, texture_index: i32) -> Option<i32> {
        self.menu_indices.get(&texture_index).copied()
    }

    pub fn box_side(&self, index: i32) -> Option<i32> {
        self.box_sides.get(&index).copied()
    }

    pub fn box_cap(&self, index: i32) -> Option<i32> {
        self.box_caps.get(&index).copied()
    }

    pub fn flat(&self, flat_index: i32) -> Option<&FlatData> {
        usize::try_from(flat_index)
            .ok()
            .and_then(|i| self.flats.get(i))
    }

    pub fn text(&self, text_index: i32) -> Option<&TextData> {
        self.texts.get(&text_index)
    }

    pub fn sound(&self, sound_index: i32) -> Option<&str> {
        usize::try_from(sound_index)
            .ok()
            .and_then(|i| self.sounds.get(i))
            .map(String::as_str)
    }

    /// Vertical scale of the level: ceiling height in Arena units over 128.
    pub fn ceiling_scale(&self) -> f64 {
        self.ceiling.height as f64 / crate::constants::legacy::ARENA_UNITS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookups() {
        let mut table = ParameterTable::default();
        table.menu_indices.insert(4, 1);
        table.flats.push(FlatData::default());
        table.sounds.push("door".to_string());

        assert_eq!(table.menu_index(4), Some(1));
        assert_eq!(table.menu_index(5), None);
        assert!(table.flat(0).is_some());
        assert!(table.flat(-1).is_none());
        assert!(table.flat(1).is_none());
        assert_eq!(table.sound(0), Some("door"));
        assert_eq!(table.sound(-1), None);
    }

    #[test]
    fn test_default_ceiling_scale() {
        let table = ParameterTable::default();
        assert!((table.ceiling_scale() - 100.0 / 128.0).abs() < 1e-12);
    }
}
