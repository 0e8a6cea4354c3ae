//! Main application entry point.

use facet_app::{App, AppConfig};

fn main() {
    env_logger::init();
    log::info!("Starting Facet");

    let config = AppConfig::default();
    let app = match std::env::args().nth(1) {
        Some(path) => App::load(config, path),
        None => App::demo(config),
    };

    match app.and_then(|mut app| app.run()) {
        Ok(summary) => {
            println!(
                "{} events ({} handled), {} frames, {} draw commands, {} vertices",
                summary.events,
                summary.handled,
                summary.frames,
                summary.draw_commands,
                summary.vertices
            );
        }
        Err(e) => {
            log::error!("{}", e);
            eprintln!("facet: {}", e);
            std::process::exit(1);
        }
    }
}
