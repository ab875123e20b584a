//! Header bar with the app title and the live search box.

use egui::RichText;

use super::theme::AppTheme;

/// Render the header panel contents. The query is edited in place; the
/// grid re-derives its filtered list from it every frame.
pub fn render_header(ui: &mut egui::Ui, query: &mut String, theme: &AppTheme) {
    ui.add_space(10.0);
    ui.horizontal(|ui| {
        ui.add_space(16.0);
        ui.label(RichText::new("🎬").size(26.0));
        ui.label(
            RichText::new("Movie Countdown")
                .size(22.0)
                .strong()
                .color(theme.text_primary),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add_space(16.0);
            ui.add(
                egui::TextEdit::singleline(query)
                    .desired_width(260.0)
                    .hint_text("Search movies..."),
            );
            ui.label(RichText::new("🔍").color(theme.text_secondary));
        });
    });
    ui.add_space(10.0);
}
