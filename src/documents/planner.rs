use serde::{Deserialize, Serialize};

/// Entry of the 'uni-assets' composer fixtures: an accessory, room part or
/// pet that can be placed on the planner canvas.
#[derive(Serialize, Deserialize, Default, Clone, Debug)]
pub struct PlannerItem {
    pub name: String,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Where the item is obtained, e.g. a shop or a download area.
    #[serde(default)]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub source: String,

    /// Companion pet pulled in when this furniture is placed.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet: Option<String>,
}
