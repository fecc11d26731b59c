use std::{
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

use clap::Parser;
use tamadex_backend::{
    api::FixturesApi,
    documents::{build_character_rows, CharacterTable},
    library::fixtures::characters,
    Status, Tracing,
};
use tracing::info;

#[derive(Parser)]
struct Opts {
    #[clap(long)]
    prod_tracing: bool,

    /// Fetch fixtures from a deployed site instead of the local copy.
    #[clap(long)]
    base_url: Option<String>,

    /// Character fixture keyed by character name.
    #[clap(long, default_value = "public/tamagotchi-data.json")]
    input: PathBuf,

    /// Output document with pre-built grid rows.
    #[clap(long, default_value = "public/character-table.json")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Status> {
    let opts: Opts = Opts::parse();

    match opts.prod_tracing {
        false => Tracing::setup("build-character-table")?,
        true => Tracing::setup_prod("build-character-table")?,
    }

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs();

    let character_set = match &opts.base_url {
        Some(base_url) => FixturesApi::new(base_url).characters_or_empty().await,
        None => characters::read(&opts.input)?,
    };
    info!("characters = {}", character_set.len());

    let table = CharacterTable {
        last_updated: now,
        rows: build_character_rows(&character_set),
    };
    info!("grid rows = {}", table.rows.len());

    characters::write_table(&opts.output, &table)?;

    let serialized = serde_json::to_string(&table)?;
    info!("character table size: {}KB", serialized.len() / 1024);

    Ok(())
}
