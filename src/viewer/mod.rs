mod stepper;

use std::time::Duration;

use ggez::{
    conf::{WindowMode, WindowSetup},
    event::{self, EventHandler},
    input::keyboard::{KeyCode, KeyInput},
    Context, ContextBuilder, GameResult,
};
use tracing::{error, info};

use lang_component::Grid;

use crate::constant;

use stepper::StepperScene;

pub trait Scene: EventHandler {
    fn next(&self) -> Box<dyn Scene>;
    fn is_finished(&self) -> bool;
}

pub struct BefungeViewer {
    scene: Box<dyn Scene>,
}

impl BefungeViewer {
    pub fn new(_ctx: &mut Context, grid: Grid, seed: Option<u64>, delay: Duration) -> Self {
        BefungeViewer {
            scene: Box::new(StepperScene::new(grid, seed, delay)),
        }
    }
}

impl EventHandler for BefungeViewer {
    fn update(&mut self, ctx: &mut Context) -> GameResult<()> {
        self.scene.update(ctx)
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult<()> {
        self.scene.draw(ctx)
    }

    fn key_down_event(&mut self, ctx: &mut Context, key: KeyInput, repeat: bool) -> GameResult<()> {
        if self.scene.is_finished() && key.keycode == Some(KeyCode::R) {
            info!("restarting program");
            self.scene = self.scene.next();
            return Ok(());
        }
        self.scene.key_down_event(ctx, key, repeat)
    }

    fn key_up_event(&mut self, ctx: &mut Context, key: KeyInput) -> GameResult<()> {
        self.scene.key_up_event(ctx, key)
    }

    fn text_input_event(&mut self, ctx: &mut Context, character: char) -> GameResult<()> {
        self.scene.text_input_event(ctx, character)
    }
}

pub fn run(name: &str, grid: Grid, seed: Option<u64>, delay: Duration) -> ! {
    let title = format!("befunge: {} v{}", name, env!("CARGO_PKG_VERSION"));

    let window_setup = WindowSetup::default().title(&title);
    let window_mode = WindowMode::default()
        .dimensions(constant::WIDTH, constant::HEIGHT)
        .resizable(false);

    let (mut ctx, event_loop) = match ContextBuilder::new("befunge", "befunge")
        .window_setup(window_setup)
        .window_mode(window_mode)
        .build()
    {
        Ok(built) => built,
        Err(err) => {
            error!(%err, "cannot create ggez context");
            std::process::exit(1);
        }
    };
    let viewer = BefungeViewer::new(&mut ctx, grid, seed, delay);

    event::run(ctx, event_loop, viewer)
}
