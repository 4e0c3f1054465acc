mod color;
mod error;
mod ui;

use std::env;

use eframe::egui::{Vec2, ViewportBuilder};

use crate::color::Rgb;
use crate::ui::app::App;

fn main() -> eframe::Result {
    env_logger::init();

    // Optional initial background color from the command line, e.g.
    // `rgb_mixer '#4080ff'`. Defaults to white.
    let args: Vec<String> = env::args().collect();
    let background = if args.len() > 1 {
        Rgb::from_hex(&args[1]).unwrap_or_else(|e| {
            log::warn!("{e}; using the default background");
            Rgb::default()
        })
    } else {
        Rgb::default()
    };

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(Vec2::new(420.0, 360.0))
            .with_resizable(false),
        ..Default::default()
    };
    eframe::run_native(
        "RGB Mixer",
        options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, background)))),
    )
}
