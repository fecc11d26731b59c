use std::{
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

use clap::Parser;
use tamadex_backend::{
    api::FixturesApi,
    documents::Timeline,
    library::fixtures::timeline as timeline_fixtures,
    timeline::{build_event_rows, group_events_by_year},
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

    /// Timeline fixture with the flat release list.
    #[clap(long, default_value = "public/tamagotchi-timeline.json")]
    input: PathBuf,

    /// Output document with year-bucketed event rows.
    #[clap(long, default_value = "public/device-timeline.json")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Status> {
    let opts: Opts = Opts::parse();

    match opts.prod_tracing {
        false => Tracing::setup("build-timeline")?,
        true => Tracing::setup_prod("build-timeline")?,
    }

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs();

    let events = match &opts.base_url {
        Some(base_url) => FixturesApi::new(base_url).timeline_events_or_empty().await,
        None => timeline_fixtures::read(&opts.input)?,
    };
    info!("release events = {}", events.len());

    let rows = build_event_rows(events)?;
    info!("event rows = {}", rows.len());

    let timeline = Timeline {
        last_updated: now,
        years: group_events_by_year(rows),
    };
    info!("populated years = {}", timeline.years.len());

    timeline_fixtures::write(&opts.output, &timeline)?;

    let serialized = serde_json::to_string(&timeline)?;
    info!("timeline document size: {}KB", serialized.len() / 1024);

    Ok(())
}
