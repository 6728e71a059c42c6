use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::agenda::EventSource;

/// A single schedule entry: one calendar day, one title. Dates are kept as
/// plain (year, month, day) triples and are never converted through a
/// timestamp, so they cannot drift across time zones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub date: NaiveDate,
    pub title: String,
}

/// Wire shape of a single record in the fixture. `title` wins over `name`
/// when both are present.
#[derive(Debug, Deserialize)]
struct RawEvent {
    title: Option<String>,
    name: Option<String>,
    date: String,
}

/// The fixture wraps its entries in an object keyed `"kenny-schedule"`;
/// a missing key unwraps to an empty schedule.
#[derive(Debug, Deserialize)]
struct ScheduleDoc {
    #[serde(rename = "kenny-schedule", default)]
    entries: Vec<RawEvent>,
}

impl RawEvent {
    fn normalize(self) -> Option<Event> {
        let Some(title) = self.title.or(self.name) else {
            log::warn!("skipping schedule entry without title or name");
            return None;
        };

        let Ok(date) = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d") else {
            log::warn!("skipping schedule entry {title:?} with malformed date {:?}", self.date);
            return None;
        };

        Some(Event { date, title })
    }
}

/// Parses the wrapped fixture document into normalized events. Records with
/// a malformed date or no usable title are skipped with a warning; bad data
/// never fails the caller.
pub fn parse_schedule(json: &str) -> serde_json::Result<Vec<Event>> {
    let doc: ScheduleDoc = serde_json::from_str(json)?;
    Ok(doc.entries.into_iter().filter_map(RawEvent::normalize).collect())
}

/// Disk-backed event source reading the schedule fixture under the site
/// root, the same file the `/api/kenny-schedule.json` endpoint serves.
pub struct FixtureEvents {
    root: PathBuf,
}

impl FixtureEvents {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.root.join("api").join("kenny-schedule.json")
    }
}

impl EventSource for FixtureEvents {
    async fn fetch_events(&self) -> anyhow::Result<Vec<Event>> {
        let json = tokio::fs::read_to_string(self.path()).await?;
        Ok(parse_schedule(&json)?)
    }
}
