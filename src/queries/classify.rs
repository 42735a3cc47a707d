use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Weapon,
    Armor,
    Offhand,
    Tool,
    Resource,
    Consumable,
    Bag,
    Journal,
    Mount,
    Furniture,
    Fishing,
    Other,
}

/// Id substrings per category, checked top to bottom. Order matters: an id
/// matching several rows belongs to the first.
const RULES: &[(Category, &[&str])] = &[
    (
        Category::Weapon,
        &[
            "MAIN_", "SWORD", "CLAYMORE", "2H_AXE", "HALBERD", "SCYTHE", "2H_HAMMER",
            "POLEHAMMER", "MACE", "FLAIL", "BOW", "SPEAR", "GLAIVE", "DAGGER", "CLAWPAIR",
            "STAFF", "KNUCKLES", "SHAPESHIFTER",
        ],
    ),
    (
        Category::Armor,
        &["ARMOR_", "HEAD_", "SHOES_", "CAPE"],
    ),
    (Category::Offhand, &["OFF_"]),
    (Category::Tool, &["TOOL"]),
    (
        Category::Resource,
        &[
            "_WOOD", "_ORE", "_FIBER", "_HIDE", "_ROCK", "_METALBAR", "_PLANKS", "_CLOTH",
            "_LEATHER", "_STONEBLOCK", "_ESSENCE", "_RUNE", "_SOUL", "_RELIC",
        ],
    ),
    (
        Category::Consumable,
        &["POTION", "MEAL", "_FOOD", "_SKILLBOOK"],
    ),
    (Category::Bag, &["BAG"]),
    (Category::Journal, &["JOURNAL"]),
    (Category::Mount, &["MOUNT"]),
    (
        Category::Furniture,
        &["FURNITURE", "DECORATION", "TROPHY", "BANNER"],
    ),
    (Category::Fishing, &["FISH", "BAIT"]),
];

/// Bucket an item id into a [`Category`]. Total: unmatched ids are `Other`.
pub fn classify(item_id: &str) -> Category {
    let id = item_id.to_uppercase();
    RULES
        .iter()
        .find(|(_, markers)| markers.iter().any(|m| id.contains(m)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Other)
}

impl Category {
    pub const ALL: [Category; 12] = [
        Category::Weapon,
        Category::Armor,
        Category::Offhand,
        Category::Tool,
        Category::Resource,
        Category::Consumable,
        Category::Bag,
        Category::Journal,
        Category::Mount,
        Category::Furniture,
        Category::Fishing,
        Category::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Weapon => "Weapon",
            Category::Armor => "Armor",
            Category::Offhand => "Offhand",
            Category::Tool => "Tool",
            Category::Resource => "Resource",
            Category::Consumable => "Consumable",
            Category::Bag => "Bag",
            Category::Journal => "Journal",
            Category::Mount => "Mount",
            Category::Furniture => "Furniture/Decoration",
            Category::Fishing => "Fishing",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
