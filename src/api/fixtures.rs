use serde::de::DeserializeOwned;
use tracing::{error, instrument};

use crate::{
    documents::{CharacterSet, PlannerItem, ReleaseEvent},
    Status,
};

/// Client for the static JSON fixtures a deployed site serves. Each view
/// fetches its dataset once on mount.
pub struct FixturesApi {
    base_url: String,
}

impl FixturesApi {
    pub fn new(base_url: &str) -> FixturesApi {
        FixturesApi {
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub async fn characters(&self) -> Result<CharacterSet, Status> {
        self.fetch("tamagotchi-data.json").await
    }

    #[instrument(level = "trace", skip(self))]
    pub async fn timeline_events(&self) -> Result<Vec<ReleaseEvent>, Status> {
        self.fetch("tamagotchi-timeline.json").await
    }

    /// Composer fixture for one canvas slot, e.g. `head`, `body` or `room`.
    #[instrument(level = "trace", skip(self))]
    pub async fn planner_items(&self, slot: &str) -> Result<Vec<PlannerItem>, Status> {
        self.fetch(&format!("uni-assets/{slot}.json")).await
    }

    /// Views degrade to an empty dataset when a fetch fails.
    pub async fn characters_or_empty(&self) -> CharacterSet {
        match self.characters().await {
            Ok(characters) => characters,
            Err(status) => {
                error!("Failed to fetch character data: {status}");
                CharacterSet::new()
            }
        }
    }

    pub async fn timeline_events_or_empty(&self) -> Vec<ReleaseEvent> {
        match self.timeline_events().await {
            Ok(events) => events,
            Err(status) => {
                error!("Failed to fetch timeline data: {status}");
                vec![]
            }
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, name: &str) -> Result<T, Status> {
        let uri = format!("{}/{name}", self.base_url);

        let resp = reqwest::get(&uri).await?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(Status::not_found(format!("'{uri}' was not found")));
        } else if !resp.status().is_success() {
            return Err(Status::internal(format!(
                "'{uri}' returned HTTP {}",
                resp.status()
            )));
        }

        let text = resp.text().await?;
        serde_json::from_str::<T>(&text).map_err(|e| {
            Status::internal(format!("Parse error: {e}\n '{uri}' response: {text}"))
        })
    }
}
