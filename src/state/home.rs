use chrono::{Datelike, Duration, NaiveDate};
use sportsdb_api::Match;

/// Number of selectable days in the date strip, starting at the first day.
pub const DATE_WINDOW_DAYS: usize = 30;

// ---------------------------------------------------------------------------
// Match classification: pure functions over the fetched snapshot
// ---------------------------------------------------------------------------

/// Keep matches whose home or away team contains `query` (case-insensitive).
/// An empty query keeps everything; whitespace is part of the query. Order is
/// preserved.
pub fn search_filter<'a>(matches: &'a [Match], query: &str) -> Vec<&'a Match> {
    if query.is_empty() {
        return matches.iter().collect();
    }
    let needle = query.to_lowercase();
    matches.iter().filter(|m| m.involves(&needle)).collect()
}

/// Live / upcoming / finished partitions, each in fetch order. Matches that fit
/// none of the three (postponed, cancelled, ...) are left out.
#[derive(Debug, Default)]
pub struct ClassifiedMatches<'a> {
    pub live: Vec<&'a Match>,
    pub upcoming: Vec<&'a Match>,
    pub finished: Vec<&'a Match>,
}

impl<'a> ClassifiedMatches<'a> {
    pub fn classify(matches: impl IntoIterator<Item = &'a Match>) -> Self {
        let mut out = Self::default();
        for m in matches {
            if m.is_live() {
                out.live.push(m);
            } else if m.is_upcoming() {
                out.upcoming.push(m);
            } else if m.is_finished() {
                out.finished.push(m);
            }
        }
        out
    }

    pub fn first_live(&self) -> Option<&'a Match> {
        self.live.first().copied()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Live,
    Upcoming,
    Finished,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Live,
        StatusFilter::Upcoming,
        StatusFilter::Finished,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Live => "Live",
            StatusFilter::Upcoming => "Upcoming",
            StatusFilter::Finished => "Finished",
        }
    }

    pub fn next(self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::Live,
            StatusFilter::Live => StatusFilter::Upcoming,
            StatusFilter::Upcoming => StatusFilter::Finished,
            StatusFilter::Finished => StatusFilter::All,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::Finished,
            StatusFilter::Live => StatusFilter::All,
            StatusFilter::Upcoming => StatusFilter::Live,
            StatusFilter::Finished => StatusFilter::Upcoming,
        }
    }

    pub fn shows_live(&self) -> bool {
        matches!(self, StatusFilter::All | StatusFilter::Live)
    }

    pub fn shows_upcoming(&self) -> bool {
        matches!(self, StatusFilter::All | StatusFilter::Upcoming)
    }

    pub fn shows_finished(&self) -> bool {
        matches!(self, StatusFilter::All | StatusFilter::Finished)
    }
}

/// What the home screen renders: the featured live match plus the two lists,
/// already gated by the status filter.
#[derive(Debug, Default)]
pub struct HomeSections<'a> {
    pub featured_live: Option<&'a Match>,
    pub upcoming: Vec<&'a Match>,
    pub finished: Vec<&'a Match>,
}

impl<'a> HomeSections<'a> {
    pub fn compose(matches: &'a [Match], query: &str, filter: StatusFilter) -> Self {
        let classified = ClassifiedMatches::classify(search_filter(matches, query));
        Self {
            featured_live: classified.first_live().filter(|_| filter.shows_live()),
            upcoming: if filter.shows_upcoming() { classified.upcoming } else { Vec::new() },
            finished: if filter.shows_finished() { classified.finished } else { Vec::new() },
        }
    }

    /// True when neither list section has anything to show. The live card
    /// does not count.
    pub fn lists_empty(&self) -> bool {
        self.upcoming.is_empty() && self.finished.is_empty()
    }

    /// Selectable rows in screen order: live card, upcoming, finished.
    pub fn rows(&self) -> Vec<&'a Match> {
        self.featured_live
            .into_iter()
            .chain(self.upcoming.iter().copied())
            .chain(self.finished.iter().copied())
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Date strip
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct DateStrip {
    pub start: NaiveDate,
    pub selected: usize,
}

impl DateStrip {
    pub fn starting(start: NaiveDate) -> Self {
        Self { start, selected: 0 }
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.date_at(self.selected)
    }

    pub fn date_at(&self, idx: usize) -> NaiveDate {
        self.start + Duration::days(idx as i64)
    }

    /// Move the selection by `delta` days, clamped to the window.
    /// Returns the new date only if the selection actually changed.
    pub fn shift(&mut self, delta: i64) -> Option<NaiveDate> {
        let max = DATE_WINDOW_DAYS as i64 - 1;
        let next = (self.selected as i64 + delta).clamp(0, max) as usize;
        if next == self.selected {
            return None;
        }
        self.selected = next;
        Some(self.selected_date())
    }

    /// ("Today" | "Tomorrow" | "Mon", "16") for the date at `idx`.
    pub fn label_at(&self, idx: usize) -> (String, String) {
        let date = self.date_at(idx);
        let label = match idx {
            0 => "Today".to_string(),
            1 => "Tomorrow".to_string(),
            _ => date.format("%a").to_string(),
        };
        (label, date.day().to_string())
    }
}

// ---------------------------------------------------------------------------
// Search input
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Clone)]
pub struct SearchInput {
    pub query: String,
    pub editing: bool,
}

// ---------------------------------------------------------------------------
// Home screen state
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct HomeState {
    pub dates: DateStrip,
    pub status_filter: StatusFilter,
    pub search: SearchInput,
    pub matches: Vec<Match>,
    pub loading: bool,
    pub error: Option<String>,
    /// Index into `sections().rows()`.
    pub selected: usize,
}

impl HomeState {
    pub fn new(start: NaiveDate) -> Self {
        Self {
            dates: DateStrip::starting(start),
            status_filter: StatusFilter::All,
            search: SearchInput::default(),
            matches: Vec::new(),
            loading: true,
            error: None,
            selected: 0,
        }
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.dates.selected_date()
    }

    pub fn sections(&self) -> HomeSections<'_> {
        HomeSections::compose(&self.matches, &self.search.query, self.status_filter)
    }

    /// Change the date and enter the loading state. Returns the date to fetch.
    pub fn shift_date(&mut self, delta: i64) -> Option<NaiveDate> {
        let date = self.dates.shift(delta)?;
        self.loading = true;
        self.error = None;
        self.selected = 0;
        Some(date)
    }

    /// Apply a fetched list. Responses for a date that is no longer selected are
    /// dropped; returns whether the list was applied.
    pub fn apply_matches(&mut self, date: NaiveDate, matches: Vec<Match>) -> bool {
        if date != self.selected_date() {
            return false;
        }
        self.matches = matches;
        self.loading = false;
        self.error = None;
        self.clamp_selection();
        true
    }

    pub fn apply_failure(&mut self, date: NaiveDate, message: String) -> bool {
        if date != self.selected_date() {
            return false;
        }
        self.loading = false;
        self.error = Some(message);
        true
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.status_filter = filter;
        self.clamp_selection();
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search.query.push(c);
        self.selected = 0;
    }

    pub fn pop_search_char(&mut self) {
        self.search.query.pop();
        self.selected = 0;
    }

    pub fn clear_search(&mut self) {
        self.search.query.clear();
        self.selected = 0;
    }

    pub fn select_down(&mut self) {
        let max = self.sections().rows().len().saturating_sub(1);
        if self.selected < max {
            self.selected += 1;
        }
    }

    pub fn select_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_match_id(&self) -> Option<String> {
        self.sections().rows().get(self.selected).map(|m| m.id.clone())
    }

    pub fn find_match(&self, id: &str) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == id)
    }

    fn clamp_selection(&mut self) {
        let rows = self.sections().rows().len();
        self.selected = self.selected.min(rows.saturating_sub(1));
    }
}

// ---------------------------------------------------------------------------
// Display helpers
// ---------------------------------------------------------------------------

/// "15:00:00" → "15:00". Anything without a colon is returned as-is.
pub fn display_time(time: &str) -> String {
    let mut parts = time.split(':');
    match (parts.next(), parts.next()) {
        (Some(h), Some(m)) => format!("{h}:{}", m.get(..2).unwrap_or(m)),
        _ => time.to_string(),
    }
}

/// "2025-03-16" → "16 Mar". Unparseable dates are returned unchanged.
pub fn display_date(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.format("%-d %b").to_string())
        .unwrap_or_else(|_| date.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(id: &str, home: &str, away: &str, status: &str, score: Option<(&str, &str)>) -> Match {
        Match {
            id: id.into(),
            home_team: home.into(),
            away_team: away.into(),
            status: status.into(),
            home_score: score.map(|(h, _)| h.to_string()),
            away_score: score.map(|(_, a)| a.to_string()),
            date: "2025-03-16".into(),
            ..Default::default()
        }
    }

    fn fixture() -> Vec<Match> {
        vec![
            m("1", "Arsenal", "Chelsea", "Not Started", None),
            m("2", "Liverpool", "Everton", "Match Finished", Some(("2", "1"))),
            m("3", "Brentford", "Fulham", "2H", Some(("0", "0"))),
            m("4", "Leeds", "Burnley", "Postponed", None),
            m("5", "Wolves", "Arsenal", "HT", Some(("1", "1"))),
        ]
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 16).unwrap()
    }

    #[test]
    fn empty_query_is_identity() {
        let all = fixture();
        let kept: Vec<_> = search_filter(&all, "").iter().map(|m| m.id.as_str()).collect();
        assert_eq!(kept, vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn surrounding_whitespace_is_matched_literally() {
        let all = vec![
            m("1", "Man City", "Spurs", "Not Started", None),
            m("2", "Mansfield Town", "Wrexham", "Not Started", None),
            m("3", "Arsenal", "Chelsea", "Not Started", None),
        ];
        let ids = |q: &str| -> Vec<String> {
            search_filter(&all, q).iter().map(|m| m.id.clone()).collect()
        };
        assert_eq!(ids("man "), vec!["1"]);
        assert_eq!(ids(" "), vec!["1", "2"]);
        assert!(ids("   ").is_empty());
        assert!(ids(" city ").is_empty());
    }

    #[test]
    fn search_matches_either_side_case_insensitively() {
        let all = fixture();
        let kept: Vec<_> = search_filter(&all, "ARS").iter().map(|m| m.id.as_str()).collect();
        assert_eq!(kept, vec!["1", "5"]);
        assert!(search_filter(&all, "madrid").is_empty());
    }

    #[test]
    fn classification_keeps_fetch_order_and_drops_unclassified() {
        let all = fixture();
        let c = ClassifiedMatches::classify(&all);
        let ids = |v: &Vec<&Match>| v.iter().map(|m| m.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&c.live), vec!["3", "5"]);
        assert_eq!(ids(&c.upcoming), vec!["1"]);
        assert_eq!(ids(&c.finished), vec!["2"]);
        assert_eq!(c.first_live().map(|m| m.id.as_str()), Some("3"));
        let total = c.live.len() + c.upcoming.len() + c.finished.len();
        assert_eq!(total, 4, "postponed match belongs to no section");
    }

    #[test]
    fn not_started_match_is_upcoming_only() {
        let all = vec![m("1", "A", "B", "Not Started", None)];
        let c = ClassifiedMatches::classify(&all);
        assert_eq!(c.upcoming.len(), 1);
        assert!(c.live.is_empty() && c.finished.is_empty());
    }

    #[test]
    fn finished_match_shows_score() {
        let all = vec![m("2", "A", "B", "Match Finished", Some(("2", "1")))];
        let sections = HomeSections::compose(&all, "", StatusFilter::All);
        assert_eq!(sections.finished.len(), 1);
        assert_eq!(sections.finished[0].score_line("-"), "2 : 1");
        assert!(sections.featured_live.is_none());
    }

    #[test]
    fn status_filter_gates_sections_only() {
        let all = fixture();
        let live_only = HomeSections::compose(&all, "", StatusFilter::Live);
        assert_eq!(live_only.featured_live.map(|m| m.id.as_str()), Some("3"));
        assert!(live_only.lists_empty());

        let finished_only = HomeSections::compose(&all, "", StatusFilter::Finished);
        assert!(finished_only.featured_live.is_none());
        assert!(finished_only.upcoming.is_empty());
        assert_eq!(finished_only.finished.len(), 1);
    }

    #[test]
    fn search_applies_before_choosing_featured_live() {
        let all = fixture();
        let sections = HomeSections::compose(&all, "wolves", StatusFilter::All);
        assert_eq!(sections.featured_live.map(|m| m.id.as_str()), Some("5"));
    }

    #[test]
    fn rows_put_live_card_first() {
        let all = fixture();
        let rows: Vec<_> = HomeSections::compose(&all, "", StatusFilter::All)
            .rows()
            .iter()
            .map(|m| m.id.clone())
            .collect();
        assert_eq!(rows, vec!["3", "1", "2"]);
    }

    #[test]
    fn status_filter_cycles() {
        let mut f = StatusFilter::All;
        for _ in 0..4 {
            f = f.next();
        }
        assert_eq!(f, StatusFilter::All);
        assert_eq!(StatusFilter::All.prev(), StatusFilter::Finished);
    }

    #[test]
    fn date_strip_clamps_to_window() {
        let mut strip = DateStrip::starting(date());
        assert_eq!(strip.shift(-1), None);
        assert_eq!(strip.shift(1), NaiveDate::from_ymd_opt(2025, 3, 17));
        assert_eq!(strip.shift(100), NaiveDate::from_ymd_opt(2025, 4, 14));
        assert_eq!(strip.shift(1), None);
        assert_eq!(strip.selected, DATE_WINDOW_DAYS - 1);
    }

    #[test]
    fn date_strip_labels() {
        let strip = DateStrip::starting(date());
        assert_eq!(strip.label_at(0), ("Today".to_string(), "16".to_string()));
        assert_eq!(strip.label_at(1).0, "Tomorrow");
        assert_eq!(strip.label_at(2), ("Tue".to_string(), "18".to_string()));
    }

    #[test]
    fn stale_responses_are_discarded() {
        let mut home = HomeState::new(date());
        let first = home.selected_date();
        let second = home.shift_date(1).unwrap();
        assert!(home.loading);

        assert!(!home.apply_matches(first, fixture()), "old date must not overwrite");
        assert!(home.matches.is_empty());
        assert!(home.loading);

        assert!(home.apply_matches(second, fixture()));
        assert!(!home.loading);
        assert_eq!(home.matches.len(), 5);

        assert!(!home.apply_failure(first, "boom".into()));
        assert!(home.error.is_none());
    }

    #[test]
    fn failure_sets_error_and_clears_loading() {
        let mut home = HomeState::new(date());
        assert!(home.apply_failure(date(), "Failed".into()));
        assert!(!home.loading);
        assert_eq!(home.error.as_deref(), Some("Failed"));
    }

    #[test]
    fn selection_follows_visible_rows() {
        let mut home = HomeState::new(date());
        home.apply_matches(date(), fixture());
        home.select_down();
        home.select_down();
        home.select_down();
        assert_eq!(home.selected, 2);
        assert_eq!(home.selected_match_id().as_deref(), Some("2"));

        home.set_status_filter(StatusFilter::Upcoming);
        assert_eq!(home.selected, 0);
        assert_eq!(home.selected_match_id().as_deref(), Some("1"));
    }

    #[test]
    fn time_and_date_formatting() {
        assert_eq!(display_time("15:00:00"), "15:00");
        assert_eq!(display_time("19:45:00+00:00"), "19:45");
        assert_eq!(display_time(""), "");
        assert_eq!(display_date("2025-03-06"), "6 Mar");
        assert_eq!(display_date("soon"), "soon");
    }
}
