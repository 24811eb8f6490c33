use serde::Serialize;

pub const MAX_FAVORITE_CLUBS: usize = 6;

pub const POPULAR_CLUBS: [&str; 18] = [
    "manchester united",
    "manchester city",
    "liverpool",
    "arsenal",
    "chelsea",
    "tottenham",
    "real madrid",
    "barcelona",
    "atletico madrid",
    "bayern munich",
    "juventus",
    "psg",
    "ac milan",
    "inter milan",
    "ajax",
    "benfica",
    "porto",
    "napoli",
];

/// Wizard steps, strictly in order. No skipping, no branching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum OnboardingStep {
    #[default]
    Name,
    Clubs,
    Referral,
    Summary,
}

impl OnboardingStep {
    pub const COUNT: usize = 4;

    pub fn index(&self) -> usize {
        match self {
            OnboardingStep::Name => 0,
            OnboardingStep::Clubs => 1,
            OnboardingStep::Referral => 2,
            OnboardingStep::Summary => 3,
        }
    }

    pub fn next(self) -> Option<Self> {
        match self {
            OnboardingStep::Name => Some(OnboardingStep::Clubs),
            OnboardingStep::Clubs => Some(OnboardingStep::Referral),
            OnboardingStep::Referral => Some(OnboardingStep::Summary),
            OnboardingStep::Summary => None,
        }
    }

    pub fn prev(self) -> Option<Self> {
        match self {
            OnboardingStep::Name => None,
            OnboardingStep::Clubs => Some(OnboardingStep::Name),
            OnboardingStep::Referral => Some(OnboardingStep::Clubs),
            OnboardingStep::Summary => Some(OnboardingStep::Referral),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            OnboardingStep::Name => "Welcome to Soccer Nerds!",
            OnboardingStep::Clubs => "Choose Your Teams",
            OnboardingStep::Referral => "How did you find us?",
            OnboardingStep::Summary => "You're All Set!",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            OnboardingStep::Name => "Let's get you set up",
            OnboardingStep::Clubs => "Select your favorite clubs",
            OnboardingStep::Referral => "Help us understand our community",
            OnboardingStep::Summary => "Ready to explore the world of football",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferralSource {
    Friend,
    Social,
    Search,
    Store,
    Ad,
    Other,
}

impl ReferralSource {
    pub const ALL: [ReferralSource; 6] = [
        ReferralSource::Friend,
        ReferralSource::Social,
        ReferralSource::Search,
        ReferralSource::Store,
        ReferralSource::Ad,
        ReferralSource::Other,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ReferralSource::Friend => "friend",
            ReferralSource::Social => "social",
            ReferralSource::Search => "search",
            ReferralSource::Store => "store",
            ReferralSource::Ad => "ad",
            ReferralSource::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReferralSource::Friend => "Friend or Family",
            ReferralSource::Social => "Social Media",
            ReferralSource::Search => "Google Search",
            ReferralSource::Store => "App Store",
            ReferralSource::Ad => "Advertisement",
            ReferralSource::Other => "Other",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ReferralSource::Friend => "Someone recommended it",
            ReferralSource::Social => "Instagram, Twitter, TikTok",
            ReferralSource::Search => "Found it while searching",
            ReferralSource::Store => "Discovered in app store",
            ReferralSource::Ad => "Saw an ad online",
            ReferralSource::Other => "Something else",
        }
    }
}

/// The payload handed over when the wizard completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserOnboardingData {
    pub name: String,
    pub favorite_clubs: Vec<String>,
    pub how_did_you_hear: ReferralSource,
    pub notifications: bool,
}

/// In-progress form values. Nothing here outlives the wizard.
#[derive(Debug, Clone)]
pub struct OnboardingForm {
    pub name: String,
    pub favorite_clubs: Vec<String>,
    pub how_did_you_hear: Option<ReferralSource>,
    pub notifications: bool,
}

impl Default for OnboardingForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            favorite_clubs: Vec::new(),
            how_did_you_hear: None,
            notifications: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct OnboardingState {
    pub step: OnboardingStep,
    pub form: OnboardingForm,
    /// Highlighted entry on the clubs step (index into POPULAR_CLUBS).
    pub club_cursor: usize,
    /// Highlighted entry on the referral step (index into ReferralSource::ALL).
    pub referral_cursor: usize,
}

impl OnboardingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn can_proceed(&self) -> bool {
        match self.step {
            OnboardingStep::Name => !self.form.name.trim().is_empty(),
            OnboardingStep::Clubs => !self.form.favorite_clubs.is_empty(),
            OnboardingStep::Referral => self.form.how_did_you_hear.is_some(),
            OnboardingStep::Summary => true,
        }
    }

    /// Continue / complete. On the summary step this yields the finished
    /// payload; elsewhere it moves forward when the step is satisfied.
    pub fn advance(&mut self) -> Option<UserOnboardingData> {
        if !self.can_proceed() {
            return None;
        }
        match self.step.next() {
            Some(next) => {
                self.step = next;
                None
            }
            None => self.payload(),
        }
    }

    /// Step back without clearing anything. No-op on the first step.
    pub fn back(&mut self) {
        if let Some(prev) = self.step.prev() {
            self.step = prev;
        }
    }

    pub fn is_last_step(&self) -> bool {
        self.step == OnboardingStep::Summary
    }

    /// Percent of the progress bar filled: (step + 1) / steps.
    pub fn progress_percent(&self) -> u16 {
        ((self.step.index() + 1) * 100 / OnboardingStep::COUNT) as u16
    }

    // -- name ---------------------------------------------------------------

    pub fn push_name_char(&mut self, c: char) {
        if self.step == OnboardingStep::Name && !c.is_control() {
            self.form.name.push(c);
        }
    }

    pub fn pop_name_char(&mut self) {
        if self.step == OnboardingStep::Name {
            self.form.name.pop();
        }
    }

    // -- clubs --------------------------------------------------------------

    pub fn is_club_selected(&self, club: &str) -> bool {
        self.form.favorite_clubs.iter().any(|c| c == club)
    }

    /// Whether toggling `club` would do anything: removal always works,
    /// adding only below the cap.
    pub fn can_toggle_club(&self, club: &str) -> bool {
        self.is_club_selected(club) || self.form.favorite_clubs.len() < MAX_FAVORITE_CLUBS
    }

    /// Add or remove `club`. Adding past the cap is a no-op. Returns whether the
    /// selection changed.
    pub fn toggle_club(&mut self, club: &str) -> bool {
        if self.is_club_selected(club) {
            self.form.favorite_clubs.retain(|c| c != club);
            return true;
        }
        if self.form.favorite_clubs.len() >= MAX_FAVORITE_CLUBS {
            return false;
        }
        self.form.favorite_clubs.push(club.to_string());
        true
    }

    pub fn toggle_club_at_cursor(&mut self) -> bool {
        match POPULAR_CLUBS.get(self.club_cursor) {
            Some(club) => self.toggle_club(club),
            None => false,
        }
    }

    pub fn move_club_cursor(&mut self, delta: isize) {
        self.club_cursor = step_cursor(self.club_cursor, delta, POPULAR_CLUBS.len());
    }

    // -- referral -----------------------------------------------------------

    pub fn select_referral(&mut self, source: ReferralSource) {
        self.form.how_did_you_hear = Some(source);
    }

    pub fn select_referral_at_cursor(&mut self) {
        if let Some(source) = ReferralSource::ALL.get(self.referral_cursor) {
            self.select_referral(*source);
        }
    }

    pub fn move_referral_cursor(&mut self, delta: isize) {
        self.referral_cursor = step_cursor(self.referral_cursor, delta, ReferralSource::ALL.len());
    }

    // -- summary ------------------------------------------------------------

    pub fn toggle_notifications(&mut self) {
        self.form.notifications = !self.form.notifications;
    }

    fn payload(&self) -> Option<UserOnboardingData> {
        Some(UserOnboardingData {
            name: self.form.name.trim().to_string(),
            favorite_clubs: self.form.favorite_clubs.clone(),
            how_did_you_hear: self.form.how_did_you_hear?,
            notifications: self.form.notifications,
        })
    }
}

fn step_cursor(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    current.saturating_add_signed(delta).min(len - 1)
}
