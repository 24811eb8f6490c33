//! TheSportsDB raw wire types: serde shapes for deserializing v1 JSON responses.
//! These map to our clean domain types via the mapping functions in client.rs.
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Events by day  (eventsday.php)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EventsResponse {
    pub events: Option<Vec<RawEvent>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct RawEvent {
    #[serde(rename = "idEvent", default, deserialize_with = "lenient_string")]
    pub id_event: Option<String>,
    #[serde(rename = "strEvent")]
    pub str_event: Option<String>,
    #[serde(rename = "strHomeTeam")]
    pub str_home_team: Option<String>,
    #[serde(rename = "strAwayTeam")]
    pub str_away_team: Option<String>,
    /// Sent as a string ("2"), a number, or null before kick-off.
    #[serde(rename = "intHomeScore", default, deserialize_with = "lenient_string")]
    pub int_home_score: Option<String>,
    #[serde(rename = "intAwayScore", default, deserialize_with = "lenient_string")]
    pub int_away_score: Option<String>,
    #[serde(rename = "strStatus")]
    pub str_status: Option<String>,
    #[serde(rename = "dateEvent")]
    pub date_event: Option<String>,
    #[serde(rename = "strTime")]
    pub str_time: Option<String>,
    #[serde(rename = "strVenue")]
    pub str_venue: Option<String>,
    #[serde(rename = "intRound", default, deserialize_with = "lenient_string")]
    pub int_round: Option<String>,
    #[serde(rename = "strHomeTeamBadge")]
    pub str_home_team_badge: Option<String>,
    #[serde(rename = "strAwayTeamBadge")]
    pub str_away_team_badge: Option<String>,
    #[serde(rename = "strLeague")]
    pub str_league: Option<String>,
}

// ---------------------------------------------------------------------------
// Event stats  (lookupeventstats.php)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EventStatsResponse {
    /// One flat record per event; values are strings, numbers or null.
    pub eventstats: Option<Vec<HashMap<String, Value>>>,
}

// ---------------------------------------------------------------------------
// Event timeline  (lookuptimeline.php)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct TimelineResponse {
    pub timeline: Option<Vec<RawTimeline>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct RawTimeline {
    #[serde(rename = "idTimeline", default, deserialize_with = "lenient_string")]
    pub id_timeline: Option<String>,
    #[serde(rename = "idEvent", default, deserialize_with = "lenient_string")]
    pub id_event: Option<String>,
    #[serde(rename = "strTimeline")]
    pub str_timeline: Option<String>,
    #[serde(rename = "strTimelineDetail")]
    pub str_timeline_detail: Option<String>,
    #[serde(rename = "strTeam")]
    pub str_team: Option<String>,
    #[serde(rename = "strPlayer")]
    pub str_player: Option<String>,
    #[serde(rename = "strMinute", default, deserialize_with = "lenient_string")]
    pub str_minute: Option<String>,
    /// Newer payloads carry the minute here instead of `strMinute`.
    #[serde(rename = "intTime", default, deserialize_with = "lenient_string")]
    pub int_time: Option<String>,
}

/// Accept a JSON string, number or null and normalise to `Option<String>`.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| value_to_string(&v)))
}

/// Render a scalar JSON value as the string the UI would show. Null, arrays and
/// objects have no scalar form.
pub fn value_to_string(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
