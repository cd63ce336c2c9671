mod draw;

use std::time::Duration;

use ggez::{
    event::EventHandler,
    graphics::{self, Canvas},
    input::keyboard::{KeyCode, KeyInput, KeyMods},
    Context, GameError, GameResult,
};
use tracing::debug;

use lang_component::Grid;
use lang_vm::SuspendingReason;

use crate::{constant, session::Session, viewer::Scene};

trait SceneDrawable {
    fn draw(&self, ctx: &mut Context, canvas: &mut Canvas) -> GameResult<()>;
}

pub struct StepperScene {
    source: Grid,
    seed: Option<u64>,
    delay: Duration,
    session: Session,
    elapsed: Duration,
    paused: bool,
    input: String,
}

impl StepperScene {
    pub fn new(source: Grid, seed: Option<u64>, delay: Duration) -> Self {
        Self {
            session: Session::new(source.clone(), seed),
            source,
            seed,
            delay,
            elapsed: Duration::ZERO,
            paused: false,
            input: String::new(),
        }
    }

    fn step_once(&mut self) -> SuspendingReason {
        self.session.advance()
    }

    fn interrupt(&mut self) {
        self.session.interrupt();
        // nothing else will step a paused or suspended run
        if self.paused || self.session.awaiting().is_some() {
            self.step_once();
        }
        self.input.clear();
    }

    fn submit_input(&mut self) -> GameResult<()> {
        let line = std::mem::take(&mut self.input);
        match self.session.supply(&line) {
            Ok(_) => Ok(()),
            Err(err) => Err(GameError::CustomError(format!("error = {}", err))),
        }
    }

    fn prompt(&self) -> (String, graphics::Color) {
        if let Some(kind) = self.session.awaiting() {
            (
                format!("{}{}_", kind.prompt(), self.input),
                constant::PROMPT_COLOR,
            )
        } else if self.session.is_finished() {
            (
                "Finished. R: restart  Esc: quit".to_string(),
                constant::DIM_COLOR,
            )
        } else if self.paused {
            (
                "Paused. Space: resume  N: step  Esc: interrupt".to_string(),
                constant::DIM_COLOR,
            )
        } else {
            (
                "Space: pause  Esc/Ctrl+C: interrupt".to_string(),
                constant::DIM_COLOR,
            )
        }
    }
}

impl Scene for StepperScene {
    fn next(&self) -> Box<dyn Scene> {
        Box::new(StepperScene::new(self.source.clone(), self.seed, self.delay))
    }

    fn is_finished(&self) -> bool {
        self.session.is_finished()
    }
}

impl EventHandler for StepperScene {
    fn update(&mut self, ctx: &mut Context) -> GameResult<()> {
        if self.paused || self.session.awaiting().is_some() || self.session.is_finished() {
            self.elapsed = Duration::ZERO;
            return Ok(());
        }

        self.elapsed += ctx.time.delta();

        let mut budget = constant::MAX_STEPS_PER_FRAME;
        while self.elapsed >= self.delay && budget > 0 {
            self.elapsed -= self.delay;
            budget -= 1;
            if !matches!(self.step_once(), SuspendingReason::Continue(_)) {
                self.elapsed = Duration::ZERO;
                break;
            }
        }
        if budget == 0 {
            self.elapsed = Duration::ZERO;
        }

        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult<()> {
        let mut canvas = Canvas::from_frame(ctx, constant::BG_COLOR);

        self.session.draw(ctx, &mut canvas)?;

        let (prompt, color) = self.prompt();
        draw::draw_line(&mut canvas, constant::PROMPT_ROW, prompt, color);

        canvas.finish(ctx)
    }

    fn key_down_event(&mut self, ctx: &mut Context, key: KeyInput, _repeat: bool) -> GameResult<()> {
        let awaiting = self.session.awaiting().is_some();
        let ctrl = key.mods.contains(KeyMods::CTRL);

        match key.keycode {
            Some(KeyCode::Escape) if self.session.is_finished() => ctx.request_quit(),
            Some(KeyCode::Escape) => self.interrupt(),
            Some(KeyCode::C) if ctrl && !self.session.is_finished() => self.interrupt(),
            Some(KeyCode::Return) | Some(KeyCode::NumpadEnter) if awaiting => {
                self.submit_input()?
            }
            Some(KeyCode::Back) if awaiting => {
                self.input.pop();
            }
            Some(KeyCode::Space) if !awaiting => {
                self.paused = !self.paused;
                debug!(paused = self.paused, "pause toggled");
            }
            Some(KeyCode::N) if self.paused && !awaiting => {
                self.step_once();
            }
            _ => {}
        }

        Ok(())
    }

    fn text_input_event(&mut self, _ctx: &mut Context, character: char) -> GameResult<()> {
        if self.session.awaiting().is_some() && !character.is_control() {
            self.input.push(character);
        }
        Ok(())
    }
}
