#![warn(clippy::all, rust_2018_idioms)]

use screen_pen::{DrawingStore, PenApp};

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let store = match DrawingStore::in_home_dir() {
        Ok(store) => store,
        Err(err) => {
            log::warn!("{}; saving to the working directory instead", err);
            DrawingStore::new(screen_pen::persistence::SAVE_DIR_NAME)
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("screen-pen")
            .with_fullscreen(true)
            .with_transparent(true)
            .with_decorations(false)
            .with_always_on_top(),
        ..Default::default()
    };

    eframe::run_native(
        "screen-pen",
        options,
        Box::new(|cc| Ok(Box::new(PenApp::new(cc, store)))),
    )
}
