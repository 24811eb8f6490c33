use crate::state::network::LoadingState;
use chrono::NaiveDate;
use crossterm::event::KeyEvent;
use sportsdb_api::{Match, MatchStats, TimelineEvent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkRequest {
    LoadMatches { date: NaiveDate },
    LoadMatchDetail { match_id: String },
}

#[derive(Debug)]
pub enum NetworkResponse {
    LoadingStateChanged { loading_state: LoadingState },
    /// Tagged with the date it was requested for, so stale lists can be dropped.
    MatchesLoaded { date: NaiveDate, matches: Vec<Match> },
    MatchesFailed { date: NaiveDate, message: String },
    /// Stats and timeline fail independently.
    MatchDetailLoaded {
        match_id: String,
        stats: Result<Option<MatchStats>, String>,
        timeline: Result<Vec<TimelineEvent>, String>,
    },
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    KeyPressed(KeyEvent),
    Resize,
    AppStarted,
    AnimationTick,
}
