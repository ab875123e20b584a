//! Application shell: owns the catalog state, the search query, and the
//! selection state machine, and drives the per-second countdown repaint.

mod state;

use std::time::Duration;

use chrono::Local;
use egui::RichText;

use crate::services::catalog::{self, CatalogLoad};
use crate::services::settings::AppConfig;

use self::state::{CatalogState, SelectionController};
use super::countdown_modal::{render_countdown_modal, ModalAction};
use super::header::render_header;
use super::movie_grid::render_movie_grid;
use super::theme::AppTheme;

pub struct MovieCountdownApp {
    theme: AppTheme,
    search_query: String,
    catalog: CatalogState,
    /// In-flight catalog load; dropped once it settles.
    load: Option<CatalogLoad>,
    selection: SelectionController,
}

impl MovieCountdownApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = AppConfig::load();
        let theme = if config.prefers_dark_theme() {
            AppTheme::dark()
        } else {
            AppTheme::light()
        };
        theme.apply(&cc.egui_ctx);

        let source = config.catalog_source();
        log::info!("Loading movie catalog from {:?}", source);

        Self {
            theme,
            search_query: String::new(),
            catalog: CatalogState::Loading,
            load: Some(CatalogLoad::start(source)),
            selection: SelectionController::new(),
        }
    }

    /// Check the in-flight load, settling the catalog state once the
    /// result arrives. Keeps the loading indicator animated meanwhile.
    fn poll_catalog(&mut self, ctx: &egui::Context) {
        let Some(load) = self.load.as_mut() else {
            return;
        };
        match load.poll() {
            Some(Ok(movies)) => {
                log::info!("Movie catalog ready with {} record(s)", movies.len());
                self.catalog = CatalogState::Ready(movies);
                self.load = None;
            }
            Some(Err(err)) => {
                log::error!("Movie catalog load failed: {}", err);
                self.catalog = CatalogState::Failed(err.to_string());
                self.load = None;
            }
            None => {
                ctx.request_repaint_after(Duration::from_millis(100));
            }
        }
    }
}

impl eframe::App for MovieCountdownApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Local::now();

        self.poll_catalog(ctx);
        self.selection.tick(now);
        if self.selection.selected().is_some() {
            // Frames are demand-driven; keep polling fast enough that the
            // ticker fires close to each second boundary
            ctx.request_repaint_after(Duration::from_millis(250));
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            render_header(ui, &mut self.search_query, &self.theme);
        });

        let mut clicked = None;
        egui::CentralPanel::default().show(ctx, |ui| match &self.catalog {
            CatalogState::Loading => {
                let theme = &self.theme;
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() * 0.3);
                    ui.spinner();
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new("Loading movies...")
                            .size(18.0)
                            .color(theme.text_primary),
                    );
                });
            }
            CatalogState::Failed(message) => {
                render_status_panel(
                    ui,
                    "⚠",
                    "Could not load the movie catalog",
                    Some(message),
                    &self.theme,
                );
            }
            CatalogState::Ready(movies) => {
                let filtered =
                    catalog::upcoming_matching(movies, &self.search_query, now.date_naive());
                if filtered.is_empty() {
                    let detail = format!("No movies found matching \"{}\"", self.search_query);
                    render_status_panel(ui, "🎬", &detail, None, &self.theme);
                } else {
                    clicked = render_movie_grid(ui, &filtered, &self.theme);
                }
            }
        });

        // The modal captures input while open, so a click can only open a
        // selection when none exists
        let selection_open = self.selection.selected().is_some();
        if let Some(id) = clicked {
            if !selection_open {
                if let CatalogState::Ready(movies) = &self.catalog {
                    if let Some(movie) = movies.iter().find(|m| m.id == id).cloned() {
                        log::debug!("Opening countdown for movie {} ({})", movie.id, movie.title);
                        self.selection.open(movie, now);
                    }
                }
            }
        }

        let close_requested = match self.selection.selected() {
            Some(movie) => {
                render_countdown_modal(ctx, movie, self.selection.countdown(), &self.theme)
                    == ModalAction::Close
            }
            None => false,
        };
        if close_requested {
            self.selection.close();
        }
    }
}

/// Full-panel message used for the loading, error, and no-results states.
fn render_status_panel(
    ui: &mut egui::Ui,
    icon: &str,
    headline: &str,
    detail: Option<&str>,
    theme: &AppTheme,
) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.3);
        ui.label(RichText::new(icon).size(48.0));
        ui.add_space(8.0);
        ui.label(
            RichText::new(headline)
                .size(18.0)
                .color(theme.text_primary),
        );
        if let Some(detail) = detail {
            ui.add_space(4.0);
            ui.label(RichText::new(detail).color(theme.text_secondary));
        }
    });
}
