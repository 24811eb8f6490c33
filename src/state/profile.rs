use crate::state::onboarding::UserOnboardingData;
use sportsdb_api::logos::team_logo;

const DEMO_NAME: &str = "Football Fan";
const DEMO_CLUBS: [&str; 6] = ["man city", "real madrid", "juventus", "psg", "bayern munich", "arsenal"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileState {
    pub name: String,
    pub favorite_clubs: Vec<String>,
    pub match_reminders: bool,
    pub news_updates: bool,
}

impl Default for ProfileState {
    /// Demo profile shown when onboarding was skipped.
    fn default() -> Self {
        Self {
            name: DEMO_NAME.to_string(),
            favorite_clubs: DEMO_CLUBS.iter().map(|c| c.to_string()).collect(),
            match_reminders: true,
            news_updates: false,
        }
    }
}

impl ProfileState {
    pub fn from_onboarding(data: &UserOnboardingData) -> Self {
        Self {
            name: data.name.clone(),
            favorite_clubs: data.favorite_clubs.clone(),
            match_reminders: data.notifications,
            news_updates: false,
        }
    }

    pub fn toggle_match_reminders(&mut self) {
        self.match_reminders = !self.match_reminders;
    }

    pub fn toggle_news_updates(&mut self) {
        self.news_updates = !self.news_updates;
    }

    /// Favorite clubs paired with their crest URL.
    pub fn clubs_with_logos(&self) -> impl Iterator<Item = (&str, &'static str)> {
        self.favorite_clubs
            .iter()
            .map(|club| (club.as_str(), team_logo(club)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::onboarding::ReferralSource;
    use sportsdb_api::logos::FALLBACK_LOGO;

    #[test]
    fn demo_profile_defaults() {
        let p = ProfileState::default();
        assert_eq!(p.favorite_clubs.len(), 6);
        assert!(p.match_reminders);
        assert!(!p.news_updates);
        assert!(p.clubs_with_logos().all(|(_, url)| url != FALLBACK_LOGO));
    }

    #[test]
    fn seeded_from_onboarding() {
        let data = UserOnboardingData {
            name: "Sam".into(),
            favorite_clubs: vec!["napoli".into(), "psg".into()],
            how_did_you_hear: ReferralSource::Ad,
            notifications: false,
        };
        let p = ProfileState::from_onboarding(&data);
        assert_eq!(p.name, "Sam");
        assert!(!p.match_reminders);
        let logos: Vec<_> = p.clubs_with_logos().collect();
        assert_eq!(logos[0], ("napoli", FALLBACK_LOGO));
        assert_ne!(logos[1].1, FALLBACK_LOGO);
    }

    #[test]
    fn toggles_flip_independently() {
        let mut p = ProfileState::default();
        p.toggle_news_updates();
        assert!(p.news_updates);
        assert!(p.match_reminders);
        p.toggle_match_reminders();
        assert!(!p.match_reminders);
        assert!(p.news_updates);
    }
}
