// main.rs - Window host for the bounded Game of Life engine

use anyhow::{anyhow, Context};
use clap::Parser;
use eframe::egui;
use log::{debug, info};
use std::time::Instant;

use life::{patterns, LifeEngine, SeedPolicy};

mod args;     // Command line options
mod palette;  // Display colors
mod render;   // Grid -> image projection
mod tps;      // Ticks-per-second meter
mod ui;       // eframe::App impl

use args::Args;
use render::FrameRenderer;
use tps::TickMeter;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let app = LifeApp::new(&args).context("could not set up the simulation")?;
    info!(
        "{}x{} grid, {} alive, window {}px",
        args.size,
        args.size,
        app.engine.population(),
        args.window
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([args.window, args.window])
            .with_title(args.title.clone()),
        ..Default::default()
    };

    eframe::run_native(&args.title, options, Box::new(move |_cc| Box::new(app)))
        .map_err(|err| anyhow!("window loop failed: {err}"))
}

/// Engine plus everything the host keeps around it between frames.
pub struct LifeApp {
    engine: LifeEngine,
    renderer: FrameRenderer,
    texture: Option<egui::TextureHandle>,
    meter: TickMeter,
    is_running: bool,
    frame_dirty: bool,
}

impl LifeApp {
    pub fn new(args: &Args) -> anyhow::Result<Self> {
        let mut engine = LifeEngine::new(args.size)?;
        match &args.pattern {
            Some(name) => {
                let pattern = patterns::find(name).ok_or_else(|| {
                    let known: Vec<_> = patterns::PATTERNS.iter().map(|p| p.name).collect();
                    anyhow!("unknown pattern {name:?}, expected one of {}", known.join(", "))
                })?;
                engine.apply_pattern(pattern);
            }
            None => engine.initialize(args.seed_policy()),
        }

        let mut renderer = FrameRenderer::new(args.size, args.palette());
        renderer.project(engine.current());

        Ok(Self {
            engine,
            renderer,
            texture: None,
            meter: TickMeter::new(Instant::now()),
            is_running: !args.paused,
            frame_dirty: true,
        })
    }

    /// Advances one generation and brings the frame up to date.
    pub fn step(&mut self) {
        self.engine.advance_generation();
        if self.renderer.needs_full_projection() {
            self.renderer.project(self.engine.current());
        } else {
            self.renderer.apply_delta(self.engine.changes());
        }
        self.meter.tick(Instant::now());
        self.frame_dirty = true;
    }

    pub fn toggle_running(&mut self) {
        self.is_running = !self.is_running;
        self.meter.reset(Instant::now());
        debug!(
            "{} at generation {}",
            if self.is_running { "resumed" } else { "paused" },
            self.engine.generation()
        );
    }

    pub fn reseed(&mut self) {
        self.engine.initialize(SeedPolicy::random());
        self.renderer.project(self.engine.current());
        self.meter.reset(Instant::now());
        self.frame_dirty = true;
        debug!("reseeded: {} alive", self.engine.population());
    }

    /// Text for the overlay in the top-left corner.
    pub fn status_line(&self) -> String {
        format!(
            "TPS {:.1}  gen {}  alive {}{}",
            self.meter.rate(),
            self.engine.generation(),
            self.engine.population(),
            if self.is_running { "" } else { "  [paused]" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(argv: &[&str]) -> anyhow::Result<LifeApp> {
        let args = Args::try_parse_from(std::iter::once("life_window").chain(argv.iter().copied()))?;
        LifeApp::new(&args)
    }

    #[test]
    fn starts_from_named_pattern() {
        let app = app(&["-s", "20", "-p", "blinker"]).unwrap();
        assert_eq!(app.engine.population(), 3);
        assert!(app.is_running);
    }

    #[test]
    fn unknown_pattern_is_a_startup_error() {
        let err = app(&["-p", "spaceship"]).err().unwrap();
        assert!(err.to_string().contains("unknown pattern"));
    }

    #[test]
    fn grid_without_interior_is_a_startup_error() {
        let err = app(&["-s", "2"]).err().unwrap();
        assert!(err.downcast_ref::<life::LifeError>().is_some());
    }

    #[test]
    fn step_keeps_frame_in_sync_with_engine() {
        let mut app = app(&["-s", "32", "--seed", "8", "--paused"]).unwrap();
        assert!(!app.is_running);
        for _ in 0..5 {
            app.step();
        }
        assert_eq!(app.engine.generation(), 5);

        let mut fresh = FrameRenderer::new(32, *app.renderer.palette());
        fresh.project(app.engine.current());
        assert_eq!(app.renderer.frame().pixels, fresh.frame().pixels);
    }

    #[test]
    fn status_line_reports_pause() {
        let mut app = app(&["-s", "10", "--seed", "1"]).unwrap();
        assert!(!app.status_line().contains("paused"));
        app.toggle_running();
        assert!(app.status_line().contains("[paused]"));
        assert!(app.status_line().contains("gen 0"));
    }
}
