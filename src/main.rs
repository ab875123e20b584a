// Movie Countdown Application
// Main entry point

use movie_countdown::ui_egui::MovieCountdownApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Movie Countdown Application");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Movie Countdown")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Movie Countdown",
        options,
        Box::new(|cc| Ok(Box::new(MovieCountdownApp::new(cc)))),
    )
}
