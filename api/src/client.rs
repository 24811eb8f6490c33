use crate::sportsdb::{EventStatsResponse, EventsResponse, RawEvent, RawTimeline, TimelineResponse};
use crate::{Match, MatchStats, Side, TimelineEvent, TimelineKind};
use chrono::NaiveDate;
use log::debug;
use reqwest::Client;
use std::fmt;
use std::time::Duration;

pub type ApiResult<T> = Result<T, ApiError>;

pub const DEFAULT_BASE_URL: &str = "https://www.thesportsdb.com/api/v1/json";
/// TheSportsDB's public test key.
pub const DEFAULT_API_KEY: &str = "123";
const SPORT_FILTER: &str = "Soccer";

/// Read-only client for TheSportsDB v1 endpoints.
///
/// Every transport failure, non-success status and malformed body is returned
/// as an `ApiError`. A response that simply lacks its payload field is not an
/// error: it yields an empty list / `None`.
#[derive(Debug, Clone)]
pub struct SportsDbApi {
    client: Client,
    timeout: Duration,
    base_url: String,
    api_key: String,
}

impl Default for SportsDbApi {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, DEFAULT_API_KEY)
    }
}

#[derive(Debug)]
pub enum ApiError {
    Network(reqwest::Error, String),
    Api(reqwest::Error, String),
    Parsing(reqwest::Error, String),
    InvalidInput(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            ApiError::Api(e, url) => write!(f, "API error for {url}: {e}"),
            ApiError::Parsing(e, url) => write!(f, "Parse error for {url}: {e}"),
            ApiError::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Network(e, _) | ApiError::Api(e, _) | ApiError::Parsing(e, _) => Some(e),
            ApiError::InvalidInput(_) => None,
        }
    }
}

impl SportsDbApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(base_url: &str, api_key: &str) -> Self {
        Self {
            client: Client::builder()
                .user_agent("pitchside/0.1 (terminal match browser)")
                .build()
                .unwrap_or_default(),
            timeout: Duration::from_secs(10),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// All soccer matches scheduled on `date`, in API order.
    pub async fn fetch_matches_by_date(&self, date: NaiveDate) -> ApiResult<Vec<Match>> {
        let url = self.endpoint(&format!(
            "eventsday.php?d={}&s={SPORT_FILTER}",
            date.format("%Y-%m-%d")
        ));
        let raw: EventsResponse = self.get(&url).await?;
        let matches: Vec<Match> = raw.events.unwrap_or_default().into_iter().map(map_event).collect();
        debug!("fetched {} matches for {date}", matches.len());
        Ok(matches)
    }

    /// Statistics for one match. `None` when the API has none for it.
    pub async fn fetch_match_stats(&self, event_id: &str) -> ApiResult<Option<MatchStats>> {
        let event_id = validate_event_id(event_id)?;
        let url = self.endpoint(&format!("lookupeventstats.php?id={event_id}"));
        let raw: EventStatsResponse = self.get(&url).await?;
        Ok(raw
            .eventstats
            .and_then(|records| records.into_iter().next())
            .map(map_stats))
    }

    /// Notable in-match events for one match, in API order.
    pub async fn fetch_match_timeline(&self, event_id: &str) -> ApiResult<Vec<TimelineEvent>> {
        let event_id = validate_event_id(event_id)?;
        let url = self.endpoint(&format!("lookuptimeline.php?id={event_id}"));
        let raw: TimelineResponse = self.get(&url).await?;
        Ok(raw
            .timeline
            .unwrap_or_default()
            .into_iter()
            .map(|t| map_timeline(t, event_id))
            .collect())
    }

    fn endpoint(&self, path_and_query: &str) -> String {
        format!("{}/{}/{path_and_query}", self.base_url, self.api_key)
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Network(e, url.to_owned()))?;

        response
            .error_for_status()
            .map_err(|e| ApiError::Api(e, url.to_owned()))?
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parsing(e, url.to_owned()))
    }
}

fn validate_event_id(event_id: &str) -> ApiResult<&str> {
    let id = event_id.trim();
    if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ApiError::InvalidInput(format!("bad event id {event_id:?}")));
    }
    Ok(id)
}

// ---------------------------------------------------------------------------
// Mapping: TheSportsDB wire types → clean domain types
// ---------------------------------------------------------------------------

fn map_event(e: RawEvent) -> Match {
    Match {
        id: e.id_event.unwrap_or_default(),
        name: e.str_event.unwrap_or_default(),
        home_team: e.str_home_team.unwrap_or_default(),
        away_team: e.str_away_team.unwrap_or_default(),
        home_score: e.int_home_score,
        away_score: e.int_away_score,
        status: e.str_status.unwrap_or_default(),
        date: e.date_event.unwrap_or_default(),
        time: e.str_time.unwrap_or_default(),
        venue: e.str_venue.unwrap_or_default(),
        round: e.int_round.unwrap_or_default(),
        home_badge: e.str_home_team_badge.unwrap_or_default(),
        away_badge: e.str_away_team_badge.unwrap_or_default(),
        league: e.str_league.unwrap_or_default(),
    }
}

fn map_stats(record: std::collections::HashMap<String, serde_json::Value>) -> MatchStats {
    let fields = record
        .into_iter()
        .filter_map(|(k, v)| crate::sportsdb::value_to_string(&v).map(|s| (k, s)))
        .collect();
    MatchStats { fields }
}

fn map_timeline(t: RawTimeline, event_id: &str) -> TimelineEvent {
    TimelineEvent {
        id: t.id_timeline.unwrap_or_default(),
        match_id: t.id_event.unwrap_or_else(|| event_id.to_string()),
        kind: TimelineKind::parse(t.str_timeline_detail.as_deref().unwrap_or_default()),
        description: t.str_timeline.unwrap_or_default(),
        side: Side::parse(t.str_team.as_deref().unwrap_or_default()),
        player: t.str_player.unwrap_or_default(),
        minute: t.str_minute.or(t.int_time).unwrap_or_default(),
    }
}
