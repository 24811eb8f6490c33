use crate::app::Screen;
use crate::state::details::MatchDetailState;
use crate::state::home::HomeState;
use crate::state::onboarding::OnboardingState;
use crate::state::profile::ProfileState;
use chrono::NaiveDate;

/// Animation ticks arrive every 80ms; 15 of them hold one splash tagline for 1.2s.
pub const TICKS_PER_TAGLINE: u64 = 15;

// ---------------------------------------------------------------------------
// Splash animation state
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct AnimationState {
    /// Current frame index into the ball frames array, wraps at FRAME_COUNT.
    pub frame: usize,
    /// Monotonic tick counter, drives the bounce and the tagline rotation.
    pub tick: u64,
}

impl AnimationState {
    pub fn advance(&mut self, frame_count: usize) {
        self.tick = self.tick.wrapping_add(1);
        self.frame = (self.frame + 1) % frame_count.max(1);
    }

    /// Index of the tagline currently on screen. Runs past the last tagline
    /// once the splash is over.
    pub fn tagline_step(&self) -> usize {
        (self.tick / TICKS_PER_TAGLINE) as usize
    }
}

// ---------------------------------------------------------------------------
// Root app state
// ---------------------------------------------------------------------------

pub struct AppState {
    pub screen: Screen,
    pub show_intro: bool,
    pub show_logs: bool,
    pub home: HomeState,
    pub details: MatchDetailState,
    /// Present while the first-run wizard is on screen.
    pub onboarding: Option<OnboardingState>,
    pub profile: ProfileState,
    pub animation: AnimationState,
}

impl AppState {
    pub fn new(start: NaiveDate, skip_onboarding: bool) -> Self {
        Self {
            screen: Screen::Home,
            show_intro: !skip_onboarding,
            show_logs: false,
            home: HomeState::new(start),
            details: MatchDetailState::default(),
            onboarding: (!skip_onboarding).then(OnboardingState::new),
            profile: ProfileState::default(),
            animation: AnimationState::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagline_changes_every_fifteen_ticks() {
        let mut anim = AnimationState::default();
        for _ in 0..14 {
            anim.advance(4);
        }
        assert_eq!(anim.tagline_step(), 0);
        anim.advance(4);
        assert_eq!(anim.tagline_step(), 1);
        assert_eq!(anim.frame, 3);
    }

    #[test]
    fn skipping_onboarding_skips_the_splash_too() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 16).unwrap();
        let state = AppState::new(date, true);
        assert!(!state.show_intro);
        assert!(state.onboarding.is_none());

        let state = AppState::new(date, false);
        assert!(state.show_intro);
        assert!(state.onboarding.is_some());
    }
}
