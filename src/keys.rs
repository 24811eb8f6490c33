use crate::app::{App, Screen};
use crate::state::messages::NetworkRequest;
use crate::state::onboarding::OnboardingStep;
use crossterm::event::KeyCode::Char;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::error;
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};

pub async fn handle_key_bindings(
    key_event: KeyEvent,
    app: &Arc<Mutex<App>>,
    network_requests: &mpsc::Sender<NetworkRequest>,
) {
    let mut guard = app.lock().await;

    if let (Char('c'), KeyModifiers::CONTROL) = (key_event.code, key_event.modifiers) {
        quit();
    }

    if guard.state.show_intro {
        match key_event.code {
            KeyCode::Enter => guard.dismiss_intro(),
            Char('q') => quit(),
            _ => {}
        }
        return;
    }

    if guard.state.onboarding.is_some() {
        handle_onboarding_keys(key_event, &mut guard);
        return;
    }

    if guard.state.screen == Screen::Home && guard.state.home.search.editing {
        match key_event.code {
            KeyCode::Esc => guard.clear_search(),
            KeyCode::Enter | KeyCode::Down => guard.stop_search(),
            KeyCode::Backspace => guard.search_pop(),
            Char(c) => guard.search_push(c),
            _ => {}
        }
        return;
    }

    let mut request = None;
    let screen = guard.state.screen.clone();

    match (&screen, key_event.code, key_event.modifiers) {
        (_, Char('q'), _) => quit(),

        // Footer tabs
        (_, Char('1'), _) => guard.switch_tab(Screen::Home),
        (_, Char('2'), _) => guard.switch_tab(Screen::Profile),

        // Home
        (Screen::Home, Char('h') | KeyCode::Left, _) => request = guard.shift_date(-1),
        (Screen::Home, Char('l') | KeyCode::Right, _) => request = guard.shift_date(1),
        (Screen::Home, KeyCode::Tab, _) => guard.next_status_filter(),
        (Screen::Home, KeyCode::BackTab, _) => guard.prev_status_filter(),
        (Screen::Home, Char('/'), _) => guard.start_search(),
        (Screen::Home, KeyCode::Esc, _) => guard.clear_search(),
        (Screen::Home, Char('j') | KeyCode::Down, _) => guard.select_down(),
        (Screen::Home, Char('k') | KeyCode::Up, _) => guard.select_up(),
        (Screen::Home, KeyCode::Enter, _) => request = guard.open_selected_match(),

        // Match details
        (Screen::Details { .. }, KeyCode::Esc | KeyCode::Backspace, _) => guard.back_to_home(),
        (Screen::Details { .. }, Char('j') | KeyCode::Down, _) => guard.details_scroll_down(),
        (Screen::Details { .. }, Char('k') | KeyCode::Up, _) => guard.details_scroll_up(),

        // Profile
        (Screen::Profile, Char('r'), _) => guard.toggle_match_reminders(),
        (Screen::Profile, Char('n'), _) => guard.toggle_news_updates(),
        (Screen::Profile, KeyCode::Esc, _) => guard.switch_tab(Screen::Home),

        // Global
        (_, Char('f'), _) => guard.toggle_full_screen(),
        (_, Char('"'), _) => guard.toggle_show_logs(),

        _ => {}
    }

    if let Some(request) = request {
        drop(guard);
        send_request(network_requests, request).await;
    }
}

fn handle_onboarding_keys(key_event: KeyEvent, app: &mut App) {
    let Some(step) = app.state.onboarding.as_ref().map(|o| o.step) else {
        return;
    };

    if key_event.code == KeyCode::Enter {
        app.onboarding_advance();
        return;
    }
    if step != OnboardingStep::Name && key_event.code == Char('q') {
        quit();
    }

    let Some(onboarding) = app.onboarding_mut() else {
        return;
    };
    match (step, key_event.code) {
        // The name step is a text field.
        (OnboardingStep::Name, KeyCode::Backspace) => onboarding.pop_name_char(),
        (OnboardingStep::Name, Char(c)) => onboarding.push_name_char(c),
        (OnboardingStep::Name, _) => {}

        (_, KeyCode::Esc | KeyCode::Backspace) => onboarding.back(),

        (OnboardingStep::Clubs, Char('j') | KeyCode::Down) => onboarding.move_club_cursor(1),
        (OnboardingStep::Clubs, Char('k') | KeyCode::Up) => onboarding.move_club_cursor(-1),
        (OnboardingStep::Clubs, Char(' ')) => {
            onboarding.toggle_club_at_cursor();
        }

        (OnboardingStep::Referral, Char('j') | KeyCode::Down) => {
            onboarding.move_referral_cursor(1)
        }
        (OnboardingStep::Referral, Char('k') | KeyCode::Up) => {
            onboarding.move_referral_cursor(-1)
        }
        (OnboardingStep::Referral, Char(' ')) => onboarding.select_referral_at_cursor(),

        (OnboardingStep::Summary, Char(' ') | Char('n')) => onboarding.toggle_notifications(),

        _ => {}
    }
}

/// Queue a request for the network worker. Returns false, after logging, when
/// the worker has gone away.
pub async fn send_request(
    network_requests: &mpsc::Sender<NetworkRequest>,
    request: NetworkRequest,
) -> bool {
    match network_requests.send(request).await {
        Ok(()) => true,
        Err(e) => {
            error!("Failed to send network request: {e}");
            false
        }
    }
}

fn quit() {
    crate::cleanup_terminal();
    std::process::exit(0);
}
