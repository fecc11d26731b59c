use std::path::PathBuf;

use clap::Parser;
use itertools::Itertools;
use tamadex_backend::{
    filters::FilterSet, library::fixtures::characters, Status, Tracing,
};
use tracing::info;

/// Util for checking the grid filters against the character fixture.
#[derive(Parser)]
struct Opts {
    /// Character fixture keyed by character name.
    #[clap(long, default_value = "public/tamagotchi-data.json")]
    input: PathBuf,

    /// Device generations to keep, e.g. "Color". All when omitted.
    #[clap(long, value_delimiter = ',')]
    device: Option<Vec<String>>,

    /// Genders to keep, e.g. "Female,Other". All when omitted.
    #[clap(long, value_delimiter = ',')]
    gender: Option<Vec<String>>,

    /// Life stages to keep, e.g. "Baby,Adult". All when omitted.
    #[clap(long, value_delimiter = ',')]
    stages: Option<Vec<String>>,
}

fn main() -> Result<(), Status> {
    Tracing::setup("utils/filter_characters")?;

    let opts: Opts = Opts::parse();
    let character_set = characters::read(&opts.input)?;

    let mut filters = FilterSet::default();
    if let Some(device) = opts.device {
        filters.device = device;
    }
    if let Some(gender) = opts.gender {
        filters.gender = gender;
    }
    if let Some(stages) = opts.stages {
        filters.stages = stages;
    }

    if !filters.is_active() {
        info!("no active filters, all {} characters pass", character_set.len());
        return Ok(());
    }

    let matching = character_set
        .iter()
        .filter(|(_, data)| filters.passes(&data.versions))
        .map(|(name, _)| name)
        .collect_vec();
    info!("{} of {} characters pass", matching.len(), character_set.len());

    for name in matching {
        println!("{name}");
    }

    Ok(())
}
