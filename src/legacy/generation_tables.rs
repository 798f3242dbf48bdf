//! Tables the original executable carries for level generation.
//!
//! Supplied by the asset layer. Generators index into them with values
//! drawn from fixed modulus ranges, so `validate` checks every table is at
//! least that long before generation starts.

use crate::constants::generation::{
    EQUIPMENT_PREFIX_PICKS, EQUIPMENT_SUFFIX_PICKS, TAVERN_PREFIX_PICKS, TAVERN_SUFFIX_PICKS,
    TEMPLE_MODEL_COUNT, TEMPLE_MODEL_VARIATIONS,
};
use crate::world::error::GenerationError;

/// Raised platform offsets (box1*) and thicknesses (box2*) in Arena units.
/// `a` tables are for interiors, `b` for cities, `c` for the wilderness.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WallHeightTables {
    pub box1a: [i32; 8],
    pub box1b: [i32; 8],
    pub box1c: [i32; 8],
    pub box2a: [i32; 16],
    pub box2b: [i32; 16],
}

/// Number of procedural city block types (equipment through houses).
pub const CITY_BLOCK_TYPE_COUNT: usize = 7;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CityGenerationTables {
    /// Block code per block type, e.g. "EQ" for equipment stores.
    pub block_codes: [String; CITY_BLOCK_TYPE_COUNT],
    pub block_variations: [u32; CITY_BLOCK_TYPE_COUNT],
    /// Percent chance per block type for cells left after the fixed placements.
    pub block_chances: [u32; CITY_BLOCK_TYPE_COUNT],
    /// Rotation suffixes appended to block layout names.
    pub rotations: Vec<String>,
    pub tavern_prefixes: Vec<String>,
    pub tavern_suffixes: Vec<String>,
    pub tavern_marine_suffixes: Vec<String>,
    pub equipment_prefixes: Vec<String>,
    pub equipment_suffixes: Vec<String>,
    pub temple_prefixes: Vec<String>,
    pub temple1_suffixes: Vec<String>,
    pub temple2_suffixes: Vec<String>,
    pub temple3_suffixes: Vec<String>,
}

/// Name fragments for one race. A name concatenates one pick from every
/// first-name chunk list, then a space and one pick from every last-name
/// chunk list when the race has last names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RaceNameChunks {
    pub first_name_chunks: Vec<Vec<String>>,
    pub last_name_chunks: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NpcNameTables {
    pub races: Vec<RaceNameChunks>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegacyTables {
    pub wall_heights: WallHeightTables,
    pub city_gen: CityGenerationTables,
    pub npc_names: NpcNameTables,
}

fn require_len(
    table: &'static str,
    values: &[String],
    expected: usize,
) -> Result<(), GenerationError> {
    if values.len() < expected {
        return Err(GenerationError::TableTooShort {
            table,
            expected,
            found: values.len(),
        });
    }
    Ok(())
}

impl CityGenerationTables {
    pub fn temple_suffixes(&self, model: u32) -> &[String] {
        match model {
            0 => &self.temple1_suffixes,
            1 => &self.temple2_suffixes,
            _ => &self.temple3_suffixes,
        }
    }

    /// Tables reachable from building-name generation
    pub fn validate_names(&self) -> Result<(), GenerationError> {
        require_len(
            "tavern_prefixes",
            &self.tavern_prefixes,
            TAVERN_PREFIX_PICKS as usize,
        )?;
        require_len(
            "tavern_suffixes",
            &self.tavern_suffixes,
            TAVERN_SUFFIX_PICKS as usize,
        )?;
        require_len(
            "tavern_marine_suffixes",
            &self.tavern_marine_suffixes,
            TAVERN_SUFFIX_PICKS as usize,
        )?;
        require_len(
            "equipment_prefixes",
            &self.equipment_prefixes,
            EQUIPMENT_PREFIX_PICKS as usize,
        )?;
        require_len(
            "equipment_suffixes",
            &self.equipment_suffixes,
            EQUIPMENT_SUFFIX_PICKS as usize,
        )?;
        require_len(
            "temple_prefixes",
            &self.temple_prefixes,
            TEMPLE_MODEL_COUNT as usize,
        )?;
        for model in 0..TEMPLE_MODEL_COUNT {
            require_len(
                "temple_suffixes",
                self.temple_suffixes(model),
                TEMPLE_MODEL_VARIATIONS[model as usize] as usize,
            )?;
        }
        Ok(())
    }

    /// Tables reachable from procedural block placement
    pub fn validate_blocks(&self) -> Result<(), GenerationError> {
        require_len("rotations", &self.rotations, 1)?;

        if self.block_variations.iter().any(|&v| v == 0) {
            return Err(GenerationError::InvalidLayout(
                "city block variation counts must be non-zero".to_string(),
            ));
        }

        let total: u32 = self.block_chances.iter().sum();
        if total != 100 {
            return Err(GenerationError::InvalidLayout(format!(
                "city block chances sum to {}, expected 100",
                total
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(prefix: &str, count: usize) -> Vec<String> {
        (0..count).map(|i| format!("{}{}", prefix, i)).collect()
    }

    #[test]
    fn test_short_name_table_rejected() {
        let mut tables = CityGenerationTables {
            tavern_prefixes: names("tp", 23),
            tavern_suffixes: names("ts", 23),
            tavern_marine_suffixes: names("tm", 23),
            equipment_prefixes: names("ep", 20),
            equipment_suffixes: names("es", 10),
            temple_prefixes: names("p", 3),
            temple1_suffixes: names("a", 5),
            temple2_suffixes: names("b", 9),
            temple3_suffixes: names("c", 10),
            ..Default::default()
        };
        assert!(tables.validate_names().is_ok());

        tables.temple2_suffixes.pop();
        assert!(matches!(
            tables.validate_names(),
            Err(GenerationError::TableTooShort {
                table: "temple_suffixes",
                expected: 9,
                found: 8
            })
        ));
    }

    #[test]
    fn test_block_chances_must_sum_to_100() {
        let mut tables = CityGenerationTables {
            block_variations: [1; CITY_BLOCK_TYPE_COUNT],
            block_chances: [0, 0, 0, 0, 0, 0, 100],
            rotations: vec!["A".to_string()],
            ..Default::default()
        };
        assert!(tables.validate_blocks().is_ok());

        tables.block_chances[6] = 99;
        assert!(tables.validate_blocks().is_err());
    }
}
