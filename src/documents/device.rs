use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// Coarse device generation used by the grid's device filter.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    BlackAndWhite,
    Color,
}

impl std::fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// One column of the character grid. The set of columns is closed; version
/// ids appearing in fixtures are expected to come from this table.
pub struct DeviceColumn {
    pub version: &'static str,
    pub short_name: &'static str,
    pub long_name: &'static str,
    pub class: DeviceClass,
}

pub static DEVICE_COLUMNS: [DeviceColumn; 25] = [
    DeviceColumn {
        version: "original",
        short_name: "OG",
        long_name: "Original",
        class: DeviceClass::BlackAndWhite,
    },
    DeviceColumn {
        version: "osuMesu",
        short_name: "OsuMesu",
        long_name: "Osutchi & Mesutchi",
        class: DeviceClass::BlackAndWhite,
    },
    DeviceColumn {
        version: "v1",
        short_name: "v1",
        long_name: "Plus / Connection",
        class: DeviceClass::BlackAndWhite,
    },
    DeviceColumn {
        version: "v2",
        short_name: "v2",
        long_name: "Keitai / Connection V2",
        class: DeviceClass::BlackAndWhite,
    },
    DeviceColumn {
        version: "mini",
        short_name: "Mini",
        long_name: "Mini",
        class: DeviceClass::BlackAndWhite,
    },
    DeviceColumn {
        version: "v3",
        short_name: "v3",
        long_name: "Akai / Connection V3 / 2024",
        class: DeviceClass::BlackAndWhite,
    },
    DeviceColumn {
        version: "v4",
        short_name: "v4",
        long_name: "Entama / Uratama / Connection V4 / V4.5",
        class: DeviceClass::BlackAndWhite,
    },
    DeviceColumn {
        version: "chu",
        short_name: "Chu",
        long_name: "TamagoChu",
        class: DeviceClass::BlackAndWhite,
    },
    DeviceColumn {
        version: "v5",
        short_name: "v5",
        long_name: "Familitchi / Royal Family / Celebrity",
        class: DeviceClass::BlackAndWhite,
    },
    DeviceColumn {
        version: "v6",
        short_name: "v6",
        long_name: "Connection Music Star",
        class: DeviceClass::BlackAndWhite,
    },
    DeviceColumn {
        version: "tamaGo",
        short_name: "Go",
        long_name: "TamaTown Tama-Go",
        class: DeviceClass::BlackAndWhite,
    },
    DeviceColumn {
        version: "nano",
        short_name: "Nano",
        long_name: "Nano",
        class: DeviceClass::BlackAndWhite,
    },
    DeviceColumn {
        version: "friends",
        short_name: "Friends",
        long_name: "Friends & Dream Town",
        class: DeviceClass::BlackAndWhite,
    },
    DeviceColumn {
        version: "pac-man",
        short_name: "PcMn",
        long_name: "Pac-Man",
        class: DeviceClass::BlackAndWhite,
    },
    DeviceColumn {
        version: "helloKitty",
        short_name: "HKitty",
        long_name: "Hello Kitty",
        class: DeviceClass::BlackAndWhite,
    },
    DeviceColumn {
        version: "plusColor",
        short_name: "+C",
        long_name: "+Color",
        class: DeviceClass::Color,
    },
    DeviceColumn {
        version: "iD",
        short_name: "iD",
        long_name: "iD / iD L",
        class: DeviceClass::Color,
    },
    DeviceColumn {
        version: "Ps",
        short_name: "P's",
        long_name: "P's",
        class: DeviceClass::Color,
    },
    DeviceColumn {
        version: "4U",
        short_name: "4U",
        long_name: "4U / 4U+",
        class: DeviceClass::Color,
    },
    DeviceColumn {
        version: "mix",
        short_name: "M!x",
        long_name: "M!x",
        class: DeviceClass::Color,
    },
    DeviceColumn {
        version: "on",
        short_name: "On",
        long_name: "Meets / On / Some",
        class: DeviceClass::Color,
    },
    DeviceColumn {
        version: "pix",
        short_name: "Pix",
        long_name: "Pix & Party",
        class: DeviceClass::Color,
    },
    DeviceColumn {
        version: "smart",
        short_name: "Smart",
        long_name: "Smart",
        class: DeviceClass::Color,
    },
    DeviceColumn {
        version: "uni",
        short_name: "Uni",
        long_name: "Uni",
        class: DeviceClass::Color,
    },
    DeviceColumn {
        version: "paradise",
        short_name: "Paradise",
        long_name: "Paradise",
        class: DeviceClass::Color,
    },
];

lazy_static! {
    static ref COLUMNS_BY_VERSION: HashMap<&'static str, &'static DeviceColumn> =
        DEVICE_COLUMNS.iter().map(|column| (column.version, column)).collect();
}

pub fn device_column(version: &str) -> Option<&'static DeviceColumn> {
    COLUMNS_BY_VERSION.get(version).copied()
}

pub fn device_class(version: &str) -> Option<DeviceClass> {
    device_column(version).map(|column| column.class)
}

/// Display name of an individual device release, keyed by the device ids
/// found in version entries' device lists.
pub fn device_name(device: &str) -> &str {
    DEVICE_NAMES.get(device).copied().unwrap_or(device)
}

use phf::phf_map;

static DEVICE_NAMES: phf::Map<&'static str, &'static str> = phf_map! {
    "p1" => "Original P1",
    "p2jp" => "Original P2 Japanese",
    "p2en" => "Original P2 International",

    "osu" => "Osutchi",
    "mesu" => "Mesutchi",

    "v1" => "Plus / Connection",

    "keitai" => "Keitai",
    "v2" => "Connection V2",

    "miniJP" => "Mini Japanese",
    "miniEN" => "Mini International",
    "miniGL" => "Mini Good Luck",
    "mini20" => "Mini 20th Anniversary",

    "akai" => "Akai",
    "v3" => "Connection V3",
    "rv3" => "Connection 2024",

    "entama" => "Entama",
    "v4" => "Connection V4",
    "uratama" => "Uratama",
    "v4.5" => "Connection V4.5",

    "chu" => "TamagoChu",

    "v5" => "Familitchi / Connection V5",
    "v5.5" => "Royal Family / Connection V5.5 Celebrity",

    "v6" => "Connection V6 Music Star",

    "plusColor" => "+Color",

    "iD" => "iD",
    "iDLM" => "iD Lovely Melody",
    "iDL" => "iD L",
    "iDL15" => "iD L 15th Anniversary",
    "iDLPS" => "iD L Princess Spacy",

    "tamaGo" => "TamaTown Tama-Go",

    "nanoV1" => "Nano V1",
    "nanoV2" => "Nano V2",

    "Ps" => "P's",
    "PsLM" => "P's Love & Melody",
    "PsSC" => "P's Tama Star Circus",
    "PsML" => "P's Melody Land",
    "PsBS" => "P's Berry Sweets",
    "PsDC" => "P's Dream Coffret",
    "PsMc" => "P's Miracrise",

    "friends" => "Friends",
    "friendsDT" => "Friends Dream Town",

    "4U" => "4U",
    "4UD" => "4U Downloadable",
    "4U+" => "4U+",
    "4U+D" => "4U+ Downloadable",

    "mix" => "m!x",
    "mix20" => "m!x 20th Anniversary",
    "mixS" => "m!x Sanrio",
    "mixD" => "m!x Dream",

    "on" => "Meets / On / Some",
    "onPastel" => "Meets Pastel",
    "onSanrio" => "Meets Sanrio",
    "onFantasy" => "Meets Fantasy",
    "onWG" => "On Wonder Garden",
    "onSweets" => "Meets Sweets",

    "pac-man" => "Pac-Man",

    "helloKittyV1" => "Hello Kitty 2020",
    "helloKittyV2" => "Hello Kitty 2024",

    "pix" => "Pix",
    "pixP" => "Pix Party",

    "smart" => "Smart",
    "smart96" => "Smart 1996 Friends",
    "smartRainbow" => "Smart Rainbow Friends",
    "smartSweets" => "Smart Sweets Friends",
    "smartCosmetic" => "Smart Cosmetic Friends",
    "smartGourmet" => "Smart Gourmet Friends",
    "smartMelody" => "Smart Melody Friends",
    "smartPastel" => "Smart Pastel Friends",
    "smartAnniversary" => "Smart Anniversary Party Friends",
    "smartKei" => "Smart Kei-Tama Friends",
    "smartEn" => "Smart En-Tama Friends",

    "uni" => "Uni",
    "uniBerry" => "Uni Very Berry Land",
    "uniLM" => "Uni LoveMelo Concert",
    "uniFS" => "Uni Tamamori Fashion Show",
    "uniSanrio" => "Uni Sanrio Characters",
    "uniAngel" => "Uni Angel Festival",
    "uniMonster" => "Uni Monster Carnival",
    "uniFT" => "Uni Fairy Tale Library",
    "uniPP" => "Uni PokoPea Land",
    "uniDS" => "Uni DoriTama School",

    "paradise" => "Paradise",
};
