//! Countdown modal overlay.
//!
//! A dimmed backdrop with a centered detail surface: gradient poster
//! strip, the live days/hours/minutes/seconds countdown, and the movie's
//! metadata. Dismissed by the close button, the Escape key, or a click on
//! the backdrop.

use chrono::NaiveDate;
use egui::{Align2, FontId, Rect, RichText, Rounding, Sense, Vec2};

use crate::models::movie::MovieRecord;
use crate::services::countdown::palette::gradient_for_id;
use crate::services::countdown::CountdownValue;

use super::movie_grid::paint_vertical_gradient;
use super::theme::AppTheme;

const MODAL_WIDTH: f32 = 520.0;
const POSTER_STRIP_HEIGHT: f32 = 130.0;

/// Action result from the modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    None,
    Close,
}

/// Render the countdown modal for the selected movie.
pub fn render_countdown_modal(
    ctx: &egui::Context,
    movie: &MovieRecord,
    countdown: CountdownValue,
    theme: &AppTheme,
) -> ModalAction {
    let mut action = ModalAction::None;

    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        action = ModalAction::Close;
    }

    // Dimmed backdrop; a click that lands here (not on the window above)
    // dismisses the modal
    let screen = ctx.screen_rect();
    egui::Area::new(egui::Id::new("countdown_modal_backdrop"))
        .order(egui::Order::Middle)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            let response = ui.allocate_rect(screen, Sense::click());
            ui.painter().rect_filled(screen, Rounding::ZERO, theme.backdrop);
            if response.clicked() {
                action = ModalAction::Close;
            }
        });

    egui::Window::new("countdown_modal")
        .title_bar(false)
        .collapsible(false)
        .resizable(false)
        .default_width(MODAL_WIDTH)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .order(egui::Order::Foreground)
        .frame(
            egui::Frame::window(&ctx.style())
                .fill(theme.modal_background)
                .rounding(Rounding::same(12.0)),
        )
        .show(ctx, |ui| {
            if render_modal_contents(ui, movie, countdown, theme) == ModalAction::Close {
                action = ModalAction::Close;
            }
        });

    action
}

fn render_modal_contents(
    ui: &mut egui::Ui,
    movie: &MovieRecord,
    countdown: CountdownValue,
    theme: &AppTheme,
) -> ModalAction {
    let mut action = ModalAction::None;
    ui.set_width(MODAL_WIDTH);

    // Poster strip with initials and the close button on top
    let gradient = gradient_for_id(movie.id);
    let (strip, _) = ui.allocate_exact_size(
        Vec2::new(MODAL_WIDTH, POSTER_STRIP_HEIGHT),
        Sense::hover(),
    );
    paint_vertical_gradient(ui.painter(), strip, gradient);
    ui.painter().text(
        strip.center(),
        Align2::CENTER_CENTER,
        movie.initials(),
        FontId::proportional(52.0),
        gradient.text_color(),
    );

    let close_rect = Rect::from_center_size(
        strip.right_top() + Vec2::new(-18.0, 18.0),
        Vec2::splat(24.0),
    );
    let close_response = ui
        .interact(close_rect, ui.id().with("modal_close"), Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand);
    ui.painter().text(
        close_rect.center(),
        Align2::CENTER_CENTER,
        "✕",
        FontId::proportional(18.0),
        gradient.text_color(),
    );
    if close_response.clicked() {
        action = ModalAction::Close;
    }

    ui.add_space(12.0);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(&movie.title)
                .size(24.0)
                .strong()
                .color(theme.text_primary),
        );
    });

    ui.add_space(10.0);
    render_countdown_row(ui, countdown, theme);
    ui.add_space(12.0);

    if !movie.description.is_empty() {
        ui.label(RichText::new(&movie.description).color(theme.text_secondary));
        ui.add_space(10.0);
    }

    ui.horizontal(|ui| {
        metadata_column(ui, "Release Date", &format_release_date_long(movie.release_date), theme);
        if let Some(director) = &movie.director {
            ui.add_space(24.0);
            metadata_column(ui, "Director", director, theme);
        }
    });

    if !movie.cast.is_empty() {
        ui.add_space(8.0);
        metadata_column(ui, "Cast", &movie.cast.join(", "), theme);
    }

    if !movie.genres.is_empty() {
        ui.add_space(10.0);
        ui.horizontal_wrapped(|ui| {
            for genre in &movie.genres {
                genre_tag(ui, genre, theme);
            }
        });
    }
    ui.add_space(8.0);

    action
}

fn render_countdown_row(ui: &mut egui::Ui, countdown: CountdownValue, theme: &AppTheme) {
    let segments = [
        (countdown.days.to_string(), "Days"),
        (format!("{:02}", countdown.hours), "Hours"),
        (format!("{:02}", countdown.minutes), "Minutes"),
        (format!("{:02}", countdown.seconds), "Seconds"),
    ];

    ui.vertical_centered(|ui| {
        ui.horizontal(|ui| {
            // Center the row by padding half the leftover width
            let row_width = segments.len() as f32 * 76.0;
            ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));
            for (index, (value, label)) in segments.iter().enumerate() {
                if index > 0 {
                    ui.label(
                        RichText::new(":")
                            .size(28.0)
                            .color(theme.text_secondary),
                    );
                }
                ui.vertical(|ui| {
                    ui.set_width(60.0);
                    ui.vertical_centered(|ui| {
                        ui.label(
                            RichText::new(value)
                                .size(30.0)
                                .strong()
                                .color(theme.text_primary),
                        );
                        ui.label(
                            RichText::new(*label)
                                .size(11.0)
                                .color(theme.accent),
                        );
                    });
                });
            }
        });
    });
}

fn metadata_column(ui: &mut egui::Ui, label: &str, value: &str, theme: &AppTheme) {
    ui.vertical(|ui| {
        ui.label(
            RichText::new(label.to_uppercase())
                .size(10.0)
                .color(theme.text_secondary),
        );
        ui.label(RichText::new(value).color(theme.text_primary));
    });
}

fn genre_tag(ui: &mut egui::Ui, genre: &str, theme: &AppTheme) {
    egui::Frame::none()
        .fill(theme.card_background)
        .stroke(egui::Stroke::new(1.0, theme.card_border))
        .rounding(Rounding::same(10.0))
        .inner_margin(egui::Margin::symmetric(8.0, 3.0))
        .show(ui, |ui| {
            ui.label(RichText::new(genre).size(12.0).color(theme.text_secondary));
        });
}

/// "Friday, March 13, 2026" style date line.
fn format_release_date_long(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}
