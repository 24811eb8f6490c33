use crate::components::splash_frames::TAGLINES;
use crate::state::app_settings::AppSettings;
use crate::state::app_state::AppState;
use crate::state::messages::NetworkRequest;
use crate::state::onboarding::{OnboardingState, OnboardingStep, UserOnboardingData};
use crate::state::profile::ProfileState;
use chrono::NaiveDate;
use log::{debug, info, warn};
use sportsdb_api::{Match, MatchStats, TimelineEvent};

/// Which screen is showing. Details carries the match it belongs to, so a
/// selected match without the details screen cannot be represented.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Home,
    Details { match_id: String },
    Profile,
}

impl Screen {
    /// Highlighted footer tab. Details counts as Home.
    pub fn tab_index(&self) -> usize {
        match self {
            Screen::Home | Screen::Details { .. } => 0,
            Screen::Profile => 1,
        }
    }
}

pub struct App {
    pub settings: AppSettings,
    pub state: AppState,
}

impl App {
    pub fn new(settings: AppSettings, start: NaiveDate) -> Self {
        let state = AppState::new(start, settings.skip_onboarding);
        Self { settings, state }
    }

    /// The request that fills the home screen on startup.
    pub fn initial_request(&self) -> NetworkRequest {
        NetworkRequest::LoadMatches { date: self.state.home.selected_date() }
    }

    // -----------------------------------------------------------------------
    // Network response handlers, called from main_ui_loop
    // -----------------------------------------------------------------------

    pub fn on_matches_loaded(&mut self, date: NaiveDate, matches: Vec<Match>) {
        if !self.state.home.apply_matches(date, matches) {
            debug!("dropping stale match list for {date}");
        }
    }

    pub fn on_matches_failed(&mut self, date: NaiveDate, message: String) {
        if !self.state.home.apply_failure(date, message) {
            debug!("dropping stale failure for {date}");
        }
    }

    pub fn on_match_detail_loaded(
        &mut self,
        match_id: String,
        stats: Result<Option<MatchStats>, String>,
        timeline: Result<Vec<TimelineEvent>, String>,
    ) {
        if !self.state.details.apply(&match_id, stats, timeline) {
            debug!("dropping details for match {match_id}, no longer on screen");
        }
    }

    // -----------------------------------------------------------------------
    // Navigation
    // -----------------------------------------------------------------------

    /// Footer navigation. Always leaves details mode.
    pub fn switch_tab(&mut self, next: Screen) {
        if matches!(next, Screen::Details { .. }) {
            return;
        }
        self.state.details.clear();
        self.state.home.search.editing = false;
        self.state.screen = next;
    }

    pub fn back_to_home(&mut self) {
        self.switch_tab(Screen::Home);
    }

    /// Enter details for the highlighted row. Returns the fetch to issue.
    pub fn open_selected_match(&mut self) -> Option<NetworkRequest> {
        if self.state.screen != Screen::Home {
            return None;
        }
        let match_id = self.state.home.selected_match_id()?;
        self.state.home.search.editing = false;
        self.state.details.begin(match_id.clone());
        self.state.screen = Screen::Details { match_id: match_id.clone() };
        Some(NetworkRequest::LoadMatchDetail { match_id })
    }

    /// The match the details screen is showing, looked up in the fetched list.
    pub fn detail_match(&self) -> Option<&Match> {
        match &self.state.screen {
            Screen::Details { match_id } => self.state.home.find_match(match_id),
            _ => None,
        }
    }

    pub fn details_scroll_down(&mut self) {
        self.state.details.scroll_offset = self.state.details.scroll_offset.saturating_add(1);
    }

    pub fn details_scroll_up(&mut self) {
        self.state.details.scroll_offset = self.state.details.scroll_offset.saturating_sub(1);
    }

    // -----------------------------------------------------------------------
    // Home screen
    // -----------------------------------------------------------------------

    /// Move the date strip. Only an actual change produces a fetch.
    pub fn shift_date(&mut self, delta: i64) -> Option<NetworkRequest> {
        let date = self.state.home.shift_date(delta)?;
        Some(NetworkRequest::LoadMatches { date })
    }

    pub fn next_status_filter(&mut self) {
        let next = self.state.home.status_filter.next();
        self.state.home.set_status_filter(next);
    }

    pub fn prev_status_filter(&mut self) {
        let prev = self.state.home.status_filter.prev();
        self.state.home.set_status_filter(prev);
    }

    pub fn start_search(&mut self) {
        self.state.home.search.editing = true;
    }

    pub fn stop_search(&mut self) {
        self.state.home.search.editing = false;
    }

    pub fn clear_search(&mut self) {
        self.state.home.clear_search();
        self.state.home.search.editing = false;
    }

    pub fn search_push(&mut self, c: char) {
        self.state.home.push_search_char(c);
    }

    pub fn search_pop(&mut self) {
        self.state.home.pop_search_char();
    }

    pub fn select_down(&mut self) {
        self.state.home.select_down();
    }

    pub fn select_up(&mut self) {
        self.state.home.select_up();
    }

    // -----------------------------------------------------------------------
    // Profile
    // -----------------------------------------------------------------------

    pub fn toggle_match_reminders(&mut self) {
        self.state.profile.toggle_match_reminders();
    }

    pub fn toggle_news_updates(&mut self) {
        self.state.profile.toggle_news_updates();
    }

    // -----------------------------------------------------------------------
    // Onboarding
    // -----------------------------------------------------------------------

    pub fn onboarding_mut(&mut self) -> Option<&mut OnboardingState> {
        self.state.onboarding.as_mut()
    }

    /// Continue / complete. On completion the profile is seeded and the
    /// wizard closes onto Home.
    pub fn onboarding_advance(&mut self) {
        let Some(onboarding) = self.state.onboarding.as_mut() else {
            return;
        };
        if let Some(data) = onboarding.advance() {
            self.complete_onboarding(data);
        }
    }

    pub fn complete_onboarding(&mut self, data: UserOnboardingData) {
        match serde_json::to_string(&data) {
            Ok(json) => info!("onboarding complete: {json}"),
            Err(e) => warn!("could not serialise onboarding payload: {e}"),
        }
        self.state.profile = ProfileState::from_onboarding(&data);
        self.state.onboarding = None;
        self.state.screen = Screen::Home;
    }

    // -----------------------------------------------------------------------
    // Chrome
    // -----------------------------------------------------------------------

    /// True while keystrokes are text input, so `q` and friends are literal.
    pub fn is_typing(&self) -> bool {
        if let Some(onboarding) = &self.state.onboarding {
            return onboarding.step == OnboardingStep::Name;
        }
        self.state.screen == Screen::Home && self.state.home.search.editing
    }

    pub fn toggle_show_logs(&mut self) {
        self.state.show_logs = !self.state.show_logs;
    }

    pub fn toggle_full_screen(&mut self) {
        self.settings.full_screen = !self.settings.full_screen;
    }

    pub fn dismiss_intro(&mut self) {
        self.state.show_intro = false;
    }

    /// Animation tick, every 80ms. Ends the splash one tagline period after
    /// the last tagline appeared.
    pub fn advance_animation(&mut self, frame_count: usize) {
        self.state.animation.advance(frame_count);
        if self.state.show_intro && self.state.animation.tagline_step() >= TAGLINES.len() {
            self.dismiss_intro();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::app_state::TICKS_PER_TAGLINE;
    use crate::state::home::StatusFilter;
    use crate::state::onboarding::ReferralSource;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 16).unwrap()
    }

    fn app() -> App {
        let settings = AppSettings { skip_onboarding: true, ..AppSettings::default() };
        App::new(settings, date())
    }

    fn m(id: &str, status: &str, home_score: Option<&str>) -> Match {
        Match {
            id: id.into(),
            home_team: format!("Home {id}"),
            away_team: format!("Away {id}"),
            status: status.into(),
            home_score: home_score.map(Into::into),
            ..Match::default()
        }
    }

    fn loaded_app() -> App {
        let mut app = app();
        app.on_matches_loaded(
            date(),
            vec![m("1", "Not Started", None), m("2", "Match Finished", Some("2"))],
        );
        app
    }

    #[test]
    fn initial_request_is_for_the_start_date() {
        assert_eq!(app().initial_request(), NetworkRequest::LoadMatches { date: date() });
    }

    #[test]
    fn opening_a_match_enters_details_and_requests_it() {
        let mut app = loaded_app();
        let req = app.open_selected_match();
        assert_eq!(req, Some(NetworkRequest::LoadMatchDetail { match_id: "1".into() }));
        assert_eq!(app.state.screen, Screen::Details { match_id: "1".into() });
        assert_eq!(app.state.screen.tab_index(), 0);
        assert_eq!(app.detail_match().map(|m| m.id.as_str()), Some("1"));
        assert!(app.state.details.loading);
    }

    #[test]
    fn nothing_to_open_on_an_empty_list() {
        let mut app = app();
        app.on_matches_loaded(date(), vec![]);
        assert_eq!(app.open_selected_match(), None);
        assert_eq!(app.state.screen, Screen::Home);
    }

    #[test]
    fn footer_navigation_clears_details() {
        let mut app = loaded_app();
        app.open_selected_match();
        app.switch_tab(Screen::Profile);
        assert_eq!(app.state.screen, Screen::Profile);
        assert!(app.state.details.match_id.is_none());

        app.switch_tab(Screen::Details { match_id: "2".into() });
        assert_eq!(app.state.screen, Screen::Profile);
    }

    #[test]
    fn back_returns_home_and_late_details_are_dropped() {
        let mut app = loaded_app();
        app.open_selected_match();
        app.back_to_home();
        assert_eq!(app.state.screen, Screen::Home);
        app.on_match_detail_loaded("1".into(), Ok(None), Ok(vec![]));
        assert!(app.state.details.match_id.is_none());
        assert!(!app.state.details.loading);
    }

    #[test]
    fn date_change_fetches_once_and_drops_stale_lists() {
        let mut app = app();
        assert_eq!(app.shift_date(-1), None);
        let next = date().succ_opt().unwrap();
        assert_eq!(app.shift_date(1), Some(NetworkRequest::LoadMatches { date: next }));

        app.on_matches_loaded(date(), vec![m("9", "Not Started", None)]);
        assert!(app.state.home.matches.is_empty());
        assert!(app.state.home.loading);

        app.on_matches_failed(next, "boom".into());
        assert!(!app.state.home.loading);
        assert_eq!(app.state.home.error.as_deref(), Some("boom"));
    }

    #[test]
    fn filter_and_search_never_fetch() {
        let mut app = loaded_app();
        app.next_status_filter();
        assert_eq!(app.state.home.status_filter, StatusFilter::Live);
        assert!(app.state.home.sections().rows().is_empty());
        app.prev_status_filter();

        app.start_search();
        app.search_push('2');
        assert!(app.is_typing());
        assert_eq!(app.state.home.sections().rows().len(), 1);
        app.clear_search();
        assert!(!app.is_typing());
        assert_eq!(app.state.home.sections().rows().len(), 2);
        assert!(!app.state.home.loading);
    }

    #[test]
    fn completing_onboarding_seeds_profile() {
        let mut app = App::new(AppSettings::default(), date());
        assert!(app.is_typing());
        let ob = app.onboarding_mut().unwrap();
        ob.push_name_char('J');
        ob.advance();
        ob.toggle_club("porto");
        ob.advance();
        ob.select_referral(ReferralSource::Other);
        ob.advance();
        app.onboarding_advance();
        assert!(app.state.onboarding.is_none());
        assert_eq!(app.state.profile.name, "J");
        assert_eq!(app.state.profile.favorite_clubs, vec!["porto"]);
        assert_eq!(app.state.screen, Screen::Home);
    }

    #[test]
    fn splash_ends_after_last_tagline() {
        let mut app = App::new(AppSettings::default(), date());
        let ticks = TICKS_PER_TAGLINE * TAGLINES.len() as u64;
        for _ in 0..ticks - 1 {
            app.advance_animation(4);
        }
        assert!(app.state.show_intro);
        app.advance_animation(4);
        assert!(!app.state.show_intro);
    }
}
