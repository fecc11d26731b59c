use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Document for the 'device-timeline' view that contains device releases
/// bucketed by year. Year keys are strings so that iterating the map yields
/// the view's lexicographic year order.
#[derive(Serialize, Deserialize, Default, Clone, Debug)]
pub struct Timeline {
    #[serde(default)]
    pub last_updated: u64,

    #[serde(default)]
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub years: BTreeMap<String, Vec<EventRow>>,
}

/// A single timeline row holding up to one Asia and one International release
/// that share a year-month.
#[derive(Serialize, Deserialize, Default, Clone, Debug)]
pub struct EventRow {
    pub year: i32,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asia: Option<ReleaseEvent>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub international: Option<ReleaseEvent>,
}

impl EventRow {
    pub fn slot(&self, region: Region) -> Option<&ReleaseEvent> {
        match region {
            Region::Asia => self.asia.as_ref(),
            Region::International => self.international.as_ref(),
        }
    }

    pub fn slot_mut(&mut self, region: Region) -> &mut Option<ReleaseEvent> {
        match region {
            Region::Asia => &mut self.asia,
            Region::International => &mut self.international,
        }
    }

    /// Release date of whichever slot is occupied.
    pub fn release_date(&self) -> Option<&str> {
        self.asia
            .as_ref()
            .or(self.international.as_ref())
            .map(|event| event.release_date.as_str())
    }

    pub fn slot_count(&self) -> usize {
        self.asia.iter().count() + self.international.iter().count()
    }
}

/// Entry of the 'tamagotchi-timeline' fixture: a single device release.
#[derive(Serialize, Deserialize, Default, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseEvent {
    pub id: u64,

    #[serde(default)]
    pub region: Region,

    pub name: String,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    pub release_date: String,

    /// Marks that a counterpart release exists in the other region.
    #[serde(default)]
    pub has_other: bool,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Asia,
    International,
}

impl Default for Region {
    fn default() -> Self {
        Region::Asia
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
