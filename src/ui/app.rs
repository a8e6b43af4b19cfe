//! Main search application window.
//!
//! Implements eframe::App for the search UI: query input, preset
//! selector, submission handling with a loading state, error banner with
//! auto-hide, and result-card display.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::time::{Duration, Instant};

use eframe::egui;
use tokio::runtime::Handle;

use crate::api::protocol::{Preset, SearchResponse};
use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::ui::actions;
use crate::ui::cards::{self, CardAction, ResultsView};
use crate::{Result, SearchError};

/// How long the error banner stays up before hiding itself.
const ERROR_AUTOHIDE: Duration = Duration::from_secs(5);

/// An error banner with its display timestamp.
///
/// Auto-hide is computed from `shown_at` on every frame, so a newer
/// banner restarts the clock and there is no detached timer that could
/// hide a message it doesn't belong to.
struct ErrorBanner {
    message: String,
    shown_at: Instant,
}

/// The main search application.
pub struct SearchApp {
    /// Current query input text.
    query: String,
    /// Currently selected search preset.
    preset: Preset,
    /// Last rendered response, cleared on each new submission.
    results: Option<SearchResponse>,
    /// Visible error banner, if any.
    error: Option<ErrorBanner>,
    /// Whether a search is awaiting its response.
    in_flight: bool,
    /// Submission counter; responses carry the value they were issued
    /// under so a superseded search can never win the render.
    search_seq: u64,
    /// Receiver for the most recent submission. Replacing it drops the
    /// previous request's channel, ignoring its late resolution.
    pending: Option<Receiver<(u64, Result<SearchResponse>)>>,
    /// API client for backend communication.
    api: ApiClient,
    /// Tokio runtime handle for async requests.
    runtime: Handle,
    /// Whether this is the first frame (for initial focus).
    first_frame: bool,
    /// Set by the Ctrl/Cmd+K shortcut to refocus the query input.
    focus_query: bool,
}

impl SearchApp {
    /// Create a new search application.
    pub fn new(_cc: &eframe::CreationContext<'_>, runtime: Handle, config: AppConfig) -> Self {
        Self {
            query: String::new(),
            preset: config.default_preset,
            results: None,
            error: None,
            in_flight: false,
            search_seq: 0,
            pending: None,
            api: ApiClient::new(config.endpoint),
            runtime,
            first_frame: true,
            focus_query: false,
        }
    }

    /// Handle a search submission.
    ///
    /// Validates the query, enters the loading state, and spawns the
    /// backend request. A new submission supersedes any in-flight one.
    fn submit_search(&mut self, ctx: &egui::Context) {
        let Some(query) = normalized_query(&self.query) else {
            self.show_error("Please enter a search query");
            return;
        };
        let query = query.to_string();

        // Enter loading state; clear prior error and results
        self.error = None;
        self.results = None;
        self.in_flight = true;
        self.search_seq += 1;
        let seq = self.search_seq;

        tracing::info!(%query, preset = %self.preset, seq, "submitting search");

        let (tx, rx) = mpsc::channel();
        self.pending = Some(rx);

        let client = self.api.clone();
        let preset = self.preset;
        let ctx = ctx.clone();

        self.runtime.spawn(async move {
            let result = client.search(&query, preset).await;
            let _ = tx.send((seq, result));
            ctx.request_repaint();
        });
    }

    /// Check for and process the pending search response.
    ///
    /// Every terminal outcome - response, error, or a dead worker -
    /// exits the loading state.
    fn poll_pending(&mut self) {
        let Some(rx) = &self.pending else { return };

        match rx.try_recv() {
            Ok((seq, result)) if seq == self.search_seq => {
                self.pending = None;
                self.in_flight = false;
                match result {
                    Ok(response) => {
                        tracing::info!(total = response.total, "search completed");
                        self.results = Some(response);
                    }
                    Err(err) => {
                        tracing::error!(error = %err, "search failed");
                        let message = user_message(&err);
                        self.show_error(&message);
                    }
                }
            }
            Ok((seq, _)) => {
                // Can only happen if a stale receiver outlived a newer
                // submission; drop the response, keep waiting.
                tracing::debug!(seq, current = self.search_seq, "dropping superseded response");
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                self.pending = None;
                self.in_flight = false;
                tracing::error!("search task dropped without a response");
                self.show_error("An error occurred while searching");
            }
        }
    }

    /// Show the error banner and restart its auto-hide clock.
    fn show_error(&mut self, message: &str) {
        self.error = Some(ErrorBanner {
            message: message.to_string(),
            shown_at: Instant::now(),
        });
    }

    /// Hide the error banner once it has been up for [`ERROR_AUTOHIDE`].
    fn tick_error(&mut self, ctx: &egui::Context) {
        if let Some(banner) = &self.error {
            let elapsed = banner.shown_at.elapsed();
            if elapsed >= ERROR_AUTOHIDE {
                self.error = None;
            } else {
                ctx.request_repaint_after(ERROR_AUTOHIDE - elapsed);
            }
        }
    }

    /// Handle global keyboard shortcuts.
    ///
    /// Ctrl+K (Cmd+K on macOS) refocuses the query input from anywhere;
    /// the key press is consumed so nothing else sees it.
    fn handle_keyboard(&mut self, ctx: &egui::Context) {
        let refocus =
            ctx.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::K));
        if refocus {
            self.focus_query = true;
        }
    }

    fn handle_card_action(&mut self, action: CardAction) {
        let result = match &action {
            CardAction::Open(url) => actions::open_url(url),
            CardAction::Copy(url) => actions::copy_url(url),
        };

        if let Err(err) = result {
            tracing::error!(error = %err, "result action failed");
            let message = err.to_string();
            self.show_error(&message);
        }
    }
}

impl eframe::App for SearchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_pending();
        self.tick_error(ctx);
        self.handle_keyboard(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical(|ui| {
                // Preset selector
                ui.horizontal_wrapped(|ui| {
                    for &preset in Preset::ALL {
                        if ui
                            .selectable_label(self.preset == preset, preset.label())
                            .clicked()
                        {
                            self.preset = preset;
                        }
                    }
                });

                ui.add_space(4.0);

                // Query input and submit button
                ui.horizontal(|ui| {
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut self.query)
                            .desired_width(ui.available_width() - 80.0)
                            .hint_text("Search the web..."),
                    );

                    if self.first_frame {
                        response.request_focus();
                        self.first_frame = false;
                    }
                    if self.focus_query {
                        response.request_focus();
                        self.focus_query = false;
                    }

                    let submitted = response.lost_focus()
                        && ui.input(|i| i.key_pressed(egui::Key::Enter));

                    // Submit control is disabled while a search is in flight
                    let button = ui.add_enabled(!self.in_flight, egui::Button::new("Search"));

                    if submitted || button.clicked() {
                        self.submit_search(ctx);
                    }
                });

                ui.separator();

                // Loading indicator
                if self.in_flight {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Searching...");
                    });
                }

                // Error banner
                if let Some(banner) = &self.error {
                    ui.colored_label(ui.visuals().error_fg_color, &banner.message);
                }

                // Results
                let mut action = None;
                if let Some(response) = &self.results {
                    ui.strong(cards::results_header(&response.query));
                    ui.weak(cards::count_label(response.total));
                    ui.add_space(4.0);
                    action = ResultsView::show(ui, &response.results);
                }
                if let Some(action) = action {
                    self.handle_card_action(action);
                }
            });
        });
    }
}

/// Trim a raw query, returning `None` when nothing searchable remains.
fn normalized_query(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Map a search failure to the message shown in the banner.
///
/// Backend-reported messages are shown verbatim; transport and other
/// internal failures get a generic message (the detail goes to the log).
fn user_message(err: &SearchError) -> String {
    match err {
        SearchError::Backend(message) => message.clone(),
        _ => "An error occurred while searching".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::api::protocol::SearchResult;

    fn runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
    }

    /// An app mid-submission: loading state entered, response pending.
    fn app_in_flight(
        runtime: &tokio::runtime::Runtime,
        seq: u64,
        rx: Receiver<(u64, Result<SearchResponse>)>,
    ) -> SearchApp {
        SearchApp {
            query: "rust".to_string(),
            preset: Preset::General,
            results: None,
            error: None,
            in_flight: true,
            search_seq: seq,
            pending: Some(rx),
            api: ApiClient::new("http://127.0.0.1:5001"),
            runtime: runtime.handle().clone(),
            first_frame: false,
            focus_query: false,
        }
    }

    #[test]
    fn test_poll_pending_success_exits_loading() {
        let rt = runtime();
        let (tx, rx) = mpsc::channel();
        let mut app = app_in_flight(&rt, 1, rx);

        let response = SearchResponse {
            success: true,
            query: "rust".to_string(),
            preset: "general".to_string(),
            total: 1,
            results: vec![SearchResult {
                url: "https://a".to_string(),
                title: "A".to_string(),
                author: None,
                published_date: None,
                score: None,
            }],
            error: None,
        };
        tx.send((1, Ok(response))).unwrap();

        app.poll_pending();

        assert!(!app.in_flight);
        assert!(app.pending.is_none());
        assert!(app.error.is_none());
        assert_eq!(app.results.as_ref().unwrap().total, 1);
    }

    #[test]
    fn test_poll_pending_error_exits_loading_and_shows_banner() {
        let rt = runtime();
        let (tx, rx) = mpsc::channel();
        let mut app = app_in_flight(&rt, 1, rx);

        tx.send((1, Err(SearchError::Backend("Search failed".to_string()))))
            .unwrap();

        app.poll_pending();

        assert!(!app.in_flight);
        assert!(app.pending.is_none());
        assert!(app.results.is_none());
        assert_eq!(app.error.as_ref().unwrap().message, "Search failed");
    }

    #[test]
    fn test_poll_pending_dead_worker_exits_loading() {
        let rt = runtime();
        let (tx, rx) = mpsc::channel::<(u64, Result<SearchResponse>)>();
        let mut app = app_in_flight(&rt, 1, rx);
        drop(tx);

        app.poll_pending();

        assert!(!app.in_flight);
        assert!(app.pending.is_none());
        assert_eq!(
            app.error.as_ref().unwrap().message,
            "An error occurred while searching"
        );
    }

    #[test]
    fn test_poll_pending_ignores_superseded_response() {
        let rt = runtime();
        let (tx, rx) = mpsc::channel();
        // A newer submission has since bumped the sequence number
        let mut app = app_in_flight(&rt, 2, rx);

        tx.send((1, Ok(SearchResponse::default()))).unwrap();

        app.poll_pending();

        // The stale response must not render or end the newer cycle
        assert!(app.in_flight);
        assert!(app.results.is_none());
    }

    #[test]
    fn test_normalized_query_trims() {
        assert_eq!(normalized_query("  rust  "), Some("rust"));
        assert_eq!(normalized_query("rust"), Some("rust"));
    }

    #[test]
    fn test_empty_query_rejected_before_any_request() {
        assert_eq!(normalized_query(""), None);
        assert_eq!(normalized_query("   "), None);
        assert_eq!(normalized_query("\t\n"), None);
    }

    #[test]
    fn test_backend_message_shown_verbatim() {
        let err = SearchError::Backend("Search failed".to_string());
        assert_eq!(user_message(&err), "Search failed");
    }

    #[test]
    fn test_internal_errors_get_generic_message() {
        let err = SearchError::Action("clipboard gone".to_string());
        assert_eq!(user_message(&err), "An error occurred while searching");

        let err = SearchError::Preset("bluesky".to_string());
        assert_eq!(user_message(&err), "An error occurred while searching");
    }
}
