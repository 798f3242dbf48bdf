//! *MENU ID interpretation
//!
//! The same *MENU ID means different things in cities and the wilderness.
//! Interiors have no enterable menus; their *MENU walls are exits.

use crate::world::core::{InteriorType, WorldType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuType {
    None,
    CityGates,
    Crypt,
    Dungeon,
    Equipment,
    House,
    MagesGuild,
    Noble,
    Palace,
    Tavern,
    Temple,
    Tower,
}

impl MenuType {
    pub fn interior_type(&self) -> Option<InteriorType> {
        match self {
            MenuType::None | MenuType::CityGates => None,
            MenuType::Crypt => Some(InteriorType::Crypt),
            MenuType::Dungeon => Some(InteriorType::Dungeon),
            MenuType::Equipment => Some(InteriorType::Equipment),
            MenuType::House => Some(InteriorType::House),
            MenuType::MagesGuild => Some(InteriorType::MagesGuild),
            MenuType::Noble => Some(InteriorType::Noble),
            MenuType::Palace => Some(InteriorType::Palace),
            MenuType::Tavern => Some(InteriorType::Tavern),
            MenuType::Temple => Some(InteriorType::Temple),
            MenuType::Tower => Some(InteriorType::Tower),
        }
    }
}

pub fn menu_type_from_index(menu_index: i32, world_type: WorldType) -> MenuType {
    match world_type {
        WorldType::Interior => MenuType::None,
        WorldType::City => match menu_index {
            0 => MenuType::Equipment,
            1 => MenuType::Tavern,
            2 => MenuType::MagesGuild,
            3 => MenuType::Temple,
            4..=6 => MenuType::House,
            7 | 8 => MenuType::CityGates,
            9 => MenuType::Noble,
            11..=13 => MenuType::Palace,
            _ => MenuType::None,
        },
        WorldType::Wilderness => match menu_index {
            1 => MenuType::Crypt,
            2 => MenuType::House,
            3 => MenuType::Tavern,
            4 => MenuType::Temple,
            5 => MenuType::Tower,
            6 | 7 => MenuType::CityGates,
            8 | 9 => MenuType::Dungeon,
            _ => MenuType::None,
        },
    }
}

pub fn is_city_gate_menu_index(menu_index: i32, world_type: WorldType) -> bool {
    menu_type_from_index(menu_index, world_type) == MenuType::CityGates
}

pub fn interior_type_from_menu_index(menu_index: i32, world_type: WorldType) -> Option<InteriorType> {
    menu_type_from_index(menu_index, world_type).interior_type()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_gates_per_world_type() {
        assert!(is_city_gate_menu_index(7, WorldType::City));
        assert!(is_city_gate_menu_index(8, WorldType::City));
        assert!(!is_city_gate_menu_index(6, WorldType::City));
        assert!(is_city_gate_menu_index(6, WorldType::Wilderness));
        assert!(!is_city_gate_menu_index(8, WorldType::Wilderness));
        assert!(!is_city_gate_menu_index(7, WorldType::Interior));
    }

    #[test]
    fn test_interior_mappings() {
        assert_eq!(
            interior_type_from_menu_index(0, WorldType::City),
            Some(InteriorType::Equipment)
        );
        assert_eq!(
            interior_type_from_menu_index(12, WorldType::City),
            Some(InteriorType::Palace)
        );
        assert_eq!(interior_type_from_menu_index(10, WorldType::City), None);
        assert_eq!(
            interior_type_from_menu_index(9, WorldType::Wilderness),
            Some(InteriorType::Dungeon)
        );
        assert_eq!(interior_type_from_menu_index(0, WorldType::Wilderness), None);
        assert_eq!(interior_type_from_menu_index(1, WorldType::Interior), None);
    }
}
