use std::collections::BTreeMap;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::{device_name, DEVICE_COLUMNS};

/// The 'tamagotchi-data' fixture: character name to its data.
pub type CharacterSet = BTreeMap<String, CharacterData>;

#[derive(Serialize, Deserialize, Default, Clone, Debug)]
pub struct CharacterData {
    #[serde(default)]
    pub link: String,

    #[serde(default)]
    pub image: String,

    #[serde(default)]
    pub gender: String,

    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub versions: Vec<VersionEntry>,
}

/// A character's appearance on one device version.
#[derive(Serialize, Deserialize, Default, Clone, Debug)]
pub struct VersionEntry {
    pub version: String,

    /// Individual device releases this appearance is available on.
    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub devices: Vec<String>,

    /// Life stage on this version. Empty when the metadata is unknown.
    #[serde(default)]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub stage: String,

    /// Gender override for this version.
    #[serde(default)]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub gender: String,

    #[serde(default)]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sprite: String,
}

impl VersionEntry {
    pub fn has_stage(&self) -> bool {
        !self.stage.is_empty()
    }
}

/// Document for the 'character-table' view: pre-built grid rows.
#[derive(Serialize, Deserialize, Default, Clone, Debug)]
pub struct CharacterTable {
    #[serde(default)]
    pub last_updated: u64,

    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rows: Vec<CharacterRow>,
}

/// Row of the character grid with a sprite projected per device column.
#[derive(Serialize, Deserialize, Default, Clone, Debug)]
pub struct CharacterRow {
    pub name: String,

    #[serde(default)]
    pub image: String,

    #[serde(default)]
    pub link: String,

    #[serde(default)]
    pub gender: String,

    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub versions: Vec<VersionEntry>,

    #[serde(default)]
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub sprites: BTreeMap<String, String>,
}

impl CharacterRow {
    pub fn from_character(name: &str, data: &CharacterData) -> Self {
        CharacterRow {
            name: name.to_owned(),
            image: data.image.clone(),
            link: data.link.clone(),
            gender: data.gender.clone(),
            versions: data.versions.clone(),
            sprites: DEVICE_COLUMNS
                .iter()
                .filter_map(|column| {
                    version_sprite(&data.versions, column.version)
                        .map(|sprite| (column.version.to_owned(), sprite.to_owned()))
                })
                .collect(),
        }
    }

    pub fn sprite(&self, version: &str) -> Option<&str> {
        self.sprites.get(version).map(|sprite| sprite.as_str())
    }
}

pub fn build_character_rows(characters: &CharacterSet) -> Vec<CharacterRow> {
    characters
        .iter()
        .map(|(name, data)| CharacterRow::from_character(name, data))
        .collect()
}

pub fn version_sprite<'a>(versions: &'a [VersionEntry], version: &str) -> Option<&'a str> {
    versions
        .iter()
        .find(|entry| entry.version == version)
        .map(|entry| entry.sprite.as_str())
}

/// Tooltip text for a grid cell: the distinct device display names a version
/// appearance is available on.
pub fn device_tooltip(versions: &[VersionEntry], version: &str) -> String {
    match versions.iter().find(|entry| entry.version == version) {
        Some(entry) => entry
            .devices
            .iter()
            .map(|device| device_name(device))
            .unique()
            .join(", "),
        None => String::new(),
    }
}
