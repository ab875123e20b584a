//! Movie card grid.
//!
//! Cards are painted directly: a gradient poster block with the title
//! initials, then the title, a release-date badge, and up to two genre
//! tags. Clicking a card opens the countdown modal for that movie.

use chrono::NaiveDate;
use egui::{Align2, FontId, Pos2, Rect, Rounding, Sense, Stroke, Vec2};

use crate::models::movie::MovieRecord;
use crate::services::countdown::palette::{gradient_for_id, PosterGradient};

use super::theme::AppTheme;

// Card layout constants
const CARD_SIZE: Vec2 = Vec2::new(200.0, 290.0);
const CARD_ROUNDING: f32 = 8.0;
const POSTER_HEIGHT: f32 = 170.0;
const CARD_SPACING: f32 = 14.0;
const MAX_TITLE_CHARS: usize = 22;
const MAX_VISIBLE_GENRES: usize = 2;

/// Render the grid of upcoming movies. Returns the id of a clicked card.
pub fn render_movie_grid(
    ui: &mut egui::Ui,
    movies: &[&MovieRecord],
    theme: &AppTheme,
) -> Option<u32> {
    let mut clicked = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.add_space(CARD_SPACING);
            ui.spacing_mut().item_spacing = Vec2::splat(CARD_SPACING);
            ui.horizontal_wrapped(|ui| {
                for movie in movies {
                    let response = render_movie_card(ui, movie, theme);
                    if response.clicked() {
                        clicked = Some(movie.id);
                    }
                }
            });
            ui.add_space(CARD_SPACING);
        });

    clicked
}

fn render_movie_card(ui: &mut egui::Ui, movie: &MovieRecord, theme: &AppTheme) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(CARD_SIZE, Sense::click());
    if !ui.is_rect_visible(rect) {
        return response;
    }

    let painter = ui.painter();
    let border = if response.hovered() {
        Stroke::new(1.5, theme.accent)
    } else {
        Stroke::new(1.0, theme.card_border)
    };
    painter.rect(rect, Rounding::same(CARD_ROUNDING), theme.card_background, border);

    // Poster block with gradient and initials
    let gradient = gradient_for_id(movie.id);
    let poster = Rect::from_min_size(
        rect.min + Vec2::splat(1.0),
        Vec2::new(rect.width() - 2.0, POSTER_HEIGHT),
    );
    paint_vertical_gradient(painter, poster, gradient);
    painter.text(
        poster.center(),
        Align2::CENTER_CENTER,
        movie.initials(),
        FontId::proportional(44.0),
        gradient.text_color(),
    );

    // Title
    let mut cursor = Pos2::new(rect.center().x, poster.max.y + 18.0);
    painter.text(
        cursor,
        Align2::CENTER_CENTER,
        truncate_title(&movie.title, MAX_TITLE_CHARS),
        FontId::proportional(15.0),
        theme.text_primary,
    );

    // Release-date badge
    cursor.y += 26.0;
    let badge_text = format_release_date_short(movie.release_date);
    let badge_rect = Rect::from_center_size(cursor, Vec2::new(110.0, 20.0));
    painter.rect_filled(badge_rect, Rounding::same(10.0), gradient.midpoint());
    painter.text(
        cursor,
        Align2::CENTER_CENTER,
        badge_text,
        FontId::proportional(12.0),
        gradient.text_color(),
    );

    // Up to two genre tags
    cursor.y += 28.0;
    let genres: Vec<&String> = movie.genres.iter().take(MAX_VISIBLE_GENRES).collect();
    if !genres.is_empty() {
        painter.text(
            cursor,
            Align2::CENTER_CENTER,
            genres
                .iter()
                .map(|g| g.as_str())
                .collect::<Vec<_>>()
                .join("  ·  "),
            FontId::proportional(12.0),
            theme.text_secondary,
        );
    }

    response.on_hover_cursor(egui::CursorIcon::PointingHand)
}

/// Paint a top-to-bottom two-stop gradient as a colored quad.
pub(super) fn paint_vertical_gradient(
    painter: &egui::Painter,
    rect: Rect,
    gradient: PosterGradient,
) {
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(rect.left_top(), gradient.start);
    mesh.colored_vertex(rect.right_top(), gradient.start);
    mesh.colored_vertex(rect.left_bottom(), gradient.end);
    mesh.colored_vertex(rect.right_bottom(), gradient.end);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(1, 2, 3);
    painter.add(egui::Shape::mesh(mesh));
}

/// "Mar 13, 2026" style badge text.
pub(super) fn format_release_date_short(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

fn truncate_title(title: &str, max_chars: usize) -> String {
    if title.chars().count() <= max_chars {
        return title.to_string();
    }
    let mut truncated: String = title.chars().take(max_chars.saturating_sub(1)).collect();
    truncated.push('…');
    truncated
}
