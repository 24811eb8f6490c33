pub mod client;
pub mod logos;
pub mod sportsdb;

use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Domain types: clean model, independent of TheSportsDB wire format
// ---------------------------------------------------------------------------

/// Status tokens that rule a match out of being live even when it carries a score.
pub const NON_LIVE_STATUSES: [&str; 5] = [
    "Match Finished",
    "Not Started",
    "Postponed",
    "Cancelled",
    "Abandoned",
];

pub const STATUS_NOT_STARTED: &str = "Not Started";
pub const STATUS_FINISHED: &str = "Match Finished";

/// A single scheduled football match ("event" in TheSportsDB terms).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Match {
    pub id: String,
    pub name: String,
    pub home_team: String,
    pub away_team: String,
    /// `None` until the match has been played (or kicked off).
    pub home_score: Option<String>,
    pub away_score: Option<String>,
    /// Free-text status straight from the API ("Not Started", "Match Finished", "1H", ...).
    pub status: String,
    pub date: String, // "YYYY-MM-DD"
    pub time: String, // "HH:MM:SS", sometimes with a zone suffix
    pub venue: String,
    pub round: String,
    pub home_badge: String,
    pub away_badge: String,
    pub league: String,
}

/// Client-inferred phase of a match. The API has no explicit "live" status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    Live,
    Upcoming,
    Finished,
    /// Postponed, cancelled, abandoned, or in progress without a score.
    Unclassified,
}

impl MatchPhase {
    pub fn label(&self) -> &'static str {
        match self {
            MatchPhase::Live => "LIVE",
            MatchPhase::Upcoming => "UPCOMING",
            MatchPhase::Finished => "FINISHED",
            MatchPhase::Unclassified => "--",
        }
    }
}

impl Match {
    /// Live means "has a score but isn't finished, pre-match or called off".
    pub fn is_live(&self) -> bool {
        !NON_LIVE_STATUSES.contains(&self.status.as_str()) && self.home_score.is_some()
    }

    pub fn is_upcoming(&self) -> bool {
        self.status == STATUS_NOT_STARTED
    }

    pub fn is_finished(&self) -> bool {
        self.status == STATUS_FINISHED
    }

    pub fn phase(&self) -> MatchPhase {
        if self.is_live() {
            MatchPhase::Live
        } else if self.is_upcoming() {
            MatchPhase::Upcoming
        } else if self.is_finished() {
            MatchPhase::Finished
        } else {
            MatchPhase::Unclassified
        }
    }

    /// "2 : 1" style score line. Missing sides are rendered as `missing`.
    pub fn score_line(&self, missing: &str) -> String {
        format!(
            "{} : {}",
            self.home_score.as_deref().unwrap_or(missing),
            self.away_score.as_deref().unwrap_or(missing)
        )
    }

    pub fn involves(&self, needle_lower: &str) -> bool {
        self.home_team.to_lowercase().contains(needle_lower)
            || self.away_team.to_lowercase().contains(needle_lower)
    }
}

/// Sparse per-match statistics. Every value is kept as the raw string the API sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchStats {
    pub fields: HashMap<String, String>,
}

impl MatchStats {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimelineKind {
    Goal,
    YellowCard,
    RedCard,
    Substitution,
    Other(String),
}

impl TimelineKind {
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "Goal" => TimelineKind::Goal,
            "Yellow Card" => TimelineKind::YellowCard,
            "Red Card" => TimelineKind::RedCard,
            "Substitution" => TimelineKind::Substitution,
            other => TimelineKind::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
    #[default]
    Unknown,
}

impl Side {
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "Home" => Side::Home,
            "Away" => Side::Away,
            _ => Side::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Side::Home => "Home",
            Side::Away => "Away",
            Side::Unknown => "",
        }
    }
}

/// One notable in-match event (goal, card, substitution, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEvent {
    pub id: String,
    pub match_id: String,
    pub kind: TimelineKind,
    pub description: String,
    pub side: Side,
    pub player: String,
    pub minute: String,
}

impl TimelineEvent {
    pub fn is_goal(&self) -> bool {
        self.kind == TimelineKind::Goal
    }

    /// Position along the timeline bar as a percentage, if the minute marker parses.
    /// Stoppage-time markers like "90+3" land on their leading minute.
    pub fn position_percent(&self) -> Option<u16> {
        leading_int(&self.minute).map(|m| m.clamp(0, 100) as u16)
    }
}

/// Parse the leading integer of a string the way a lenient `parseInt` would:
/// optional sign, then digits, anything after is ignored. `None` if no digits.
pub fn leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    let value = digits.parse::<i64>().ok()?;
    Some(if negative { -value } else { value })
}
