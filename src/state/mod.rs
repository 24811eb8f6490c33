pub mod app_settings;
pub mod app_state;
pub mod details;
pub mod home;
pub mod messages;
pub mod network;
pub mod onboarding;
pub mod profile;
