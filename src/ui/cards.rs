//! Result card rendering.
//!
//! Turns a backend result list into numbered cards: title link, raw URL,
//! and an optional metadata row (author, publication date, relevance).
//! Card contents are plain text throughout - egui draws strings verbatim,
//! so markup in backend-supplied fields renders inert.

use eframe::egui::{self, ScrollArea};

use crate::api::protocol::SearchResult;

/// A click on a card that the app should act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    /// Open the URL in the browser
    Open(String),
    /// Copy the URL to the clipboard
    Copy(String),
}

/// Renderable model of one result card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardModel {
    /// 1-based position in the result list
    pub number: usize,
    pub title: String,
    pub url: String,
    /// Pre-formatted metadata items; empty when the result has none
    pub meta: Vec<String>,
}

/// Build card models from a result list, numbered from 1 in input order.
pub fn build_cards(results: &[SearchResult]) -> Vec<CardModel> {
    results
        .iter()
        .enumerate()
        .map(|(i, result)| CardModel {
            number: i + 1,
            title: result.title.clone(),
            url: result.url.clone(),
            meta: meta_items(result),
        })
        .collect()
}

/// Header line above the result list.
pub fn results_header(query: &str) -> String {
    format!("Results for \"{}\"", query)
}

/// Pluralized result-count label: "1 result", "2 results".
pub fn count_label(total: usize) -> String {
    if total == 1 {
        "1 result".to_string()
    } else {
        format!("{} results", total)
    }
}

fn meta_items(result: &SearchResult) -> Vec<String> {
    let mut items = Vec::new();

    if let Some(author) = &result.author {
        items.push(format!("by {}", author));
    }

    if let Some(date) = &result.published_date {
        items.push(format_published_date(date));
    }

    if let Some(score) = result.score {
        items.push(format_score(score));
    }

    items
}

/// Format an ISO-8601 publication date as "Jan 5, 2024".
///
/// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates. Anything
/// else is shown as-is rather than dropped or panicking.
pub fn format_published_date(raw: &str) -> String {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return dt.format("%b %-d, %Y").to_string();
    }

    if let Ok(date) = chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%b %-d, %Y").to_string();
    }

    raw.to_string()
}

/// Format a relevance score in [0, 1] as a percentage.
///
/// Example: 0.873 -> "87.3% relevance"
pub fn format_score(score: f64) -> String {
    format!("{:.1}% relevance", score * 100.0)
}

/// View for displaying the result list.
pub struct ResultsView;

impl ResultsView {
    /// Display the result cards.
    ///
    /// Returns an action for a clicked card element, if any.
    pub fn show(ui: &mut egui::Ui, results: &[SearchResult]) -> Option<CardAction> {
        if results.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label("No results found. Try a different query or search preset.");
            });
            return None;
        }

        let mut action = None;

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for card in build_cards(results) {
                    ui.group(|ui| {
                        ui.horizontal(|ui| {
                            ui.monospace(format!("#{}", card.number));

                            if ui.link(&card.title).clicked() {
                                action = Some(CardAction::Open(card.url.clone()));
                            }

                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui.small_button("Copy link").clicked() {
                                        action = Some(CardAction::Copy(card.url.clone()));
                                    }
                                },
                            );
                        });

                        ui.weak(&card.url);

                        if !card.meta.is_empty() {
                            ui.horizontal_wrapped(|ui| {
                                for item in &card.meta {
                                    ui.weak(item);
                                }
                            });
                        }
                    });

                    ui.add_space(6.0);
                }
            });

        action
    }
}
