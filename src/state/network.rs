use crate::state::messages::{NetworkRequest, NetworkResponse};
use chrono::NaiveDate;
use log::{debug, error, warn};
use sportsdb_api::client::SportsDbApi;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::mpsc;

const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
pub const ERROR_CHAR: char = '!';

#[derive(Debug, Copy, Clone)]
pub struct LoadingState {
    pub is_loading: bool,
    pub spinner_char: char,
}

impl Default for LoadingState {
    fn default() -> Self {
        Self { is_loading: false, spinner_char: ' ' }
    }
}

pub struct NetworkWorker {
    client: SportsDbApi,
    requests: mpsc::Receiver<NetworkRequest>,
    responses: mpsc::Sender<NetworkResponse>,
    is_loading: Arc<AtomicBool>,
}

impl NetworkWorker {
    pub fn new(
        client: SportsDbApi,
        requests: mpsc::Receiver<NetworkRequest>,
        responses: mpsc::Sender<NetworkResponse>,
    ) -> Self {
        Self {
            client,
            requests,
            responses,
            is_loading: Arc::new(AtomicBool::new(false)),
        }
    }

    pub async fn run(mut self) {
        while let Some(request) = self.requests.recv().await {
            self.start_loading_animation().await;

            let (response, is_ok) = match request {
                NetworkRequest::LoadMatches { date } => self.handle_load_matches(date).await,
                NetworkRequest::LoadMatchDetail { match_id } => {
                    self.handle_load_match_detail(match_id).await
                }
            };

            debug!("network request complete");
            self.stop_loading_animation(is_ok).await;

            if let Err(e) = self.responses.send(response).await {
                error!("Failed to send network response: {e}");
                break;
            }
        }
    }

    async fn handle_load_matches(&self, date: NaiveDate) -> (NetworkResponse, bool) {
        debug!("loading matches for {date}");
        match self.client.fetch_matches_by_date(date).await {
            Ok(matches) => {
                debug!("{} matches on {date}", matches.len());
                (NetworkResponse::MatchesLoaded { date, matches }, true)
            }
            Err(e) => {
                error!("match list for {date} failed: {e}");
                (NetworkResponse::MatchesFailed { date, message: e.to_string() }, false)
            }
        }
    }

    async fn handle_load_match_detail(&self, match_id: String) -> (NetworkResponse, bool) {
        debug!("loading stats and timeline for match {match_id}");
        let (stats, timeline) = tokio::join!(
            self.client.fetch_match_stats(&match_id),
            self.client.fetch_match_timeline(&match_id),
        );

        let stats = stats.map_err(|e| {
            warn!("stats for match {match_id} unavailable: {e}");
            e.to_string()
        });
        let timeline = timeline.map_err(|e| {
            warn!("timeline for match {match_id} unavailable: {e}");
            e.to_string()
        });
        let is_ok = stats.is_ok() && timeline.is_ok();

        (NetworkResponse::MatchDetailLoaded { match_id, stats, timeline }, is_ok)
    }

    async fn start_loading_animation(&self) {
        self.is_loading.store(true, Ordering::Relaxed);

        let mut loading_state =
            LoadingState { is_loading: true, spinner_char: SPINNER_CHARS[0] };
        let _ = self
            .responses
            .send(NetworkResponse::LoadingStateChanged { loading_state })
            .await;

        let responses = self.responses.clone();
        let is_loading = self.is_loading.clone();

        tokio::spawn(async move {
            let mut spinner_index = 1;
            let mut interval = tokio::time::interval(Duration::from_millis(33));
            loop {
                interval.tick().await;
                if !is_loading.load(Ordering::Relaxed) {
                    break;
                }
                loading_state.spinner_char = SPINNER_CHARS[spinner_index];
                spinner_index = (spinner_index + 1) % SPINNER_CHARS.len();
                let _ = responses
                    .send(NetworkResponse::LoadingStateChanged { loading_state })
                    .await;
            }
        });
    }

    async fn stop_loading_animation(&self, is_ok: bool) {
        self.is_loading.store(false, Ordering::Relaxed);
        tokio::time::sleep(Duration::from_millis(15)).await;

        let spinner_char = if is_ok { ' ' } else { ERROR_CHAR };
        let _ = self
            .responses
            .send(NetworkResponse::LoadingStateChanged {
                loading_state: LoadingState { is_loading: false, spinner_char },
            })
            .await;
    }
}
