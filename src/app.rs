use crate::command::Command;
use crate::game::{Intent, Scheduler, Session};
use crate::highscore::HighScoreStore;
use crate::render::Renderer;
use crossterm::event::{poll, read, Event};
use rand::Rng;
use std::io;
use std::time::Instant;

/// The event loop: feeds terminal input and timer ticks to a session and
/// redraws it whenever something visible changed
#[derive(Debug)]
pub(crate) struct App<S, P, R, D> {
    session: Session<S, P, R>,
    renderer: D,
    quitting: bool,
}

impl<S: Scheduler, P: HighScoreStore, R: Rng, D: Renderer> App<S, P, R, D> {
    pub(crate) fn new(session: Session<S, P, R>, renderer: D) -> Self {
        App {
            session,
            renderer,
            quitting: false,
        }
    }

    pub(crate) fn run(mut self) -> io::Result<()> {
        self.draw()?;
        while !self.quitting {
            if self.process_input()? {
                self.draw()?;
            }
        }
        tracing::info!("Quitting");
        Ok(())
    }

    /// Wait for the next tick or input event, whichever comes first, and
    /// apply it.  Returns `true` if the screen needs to be redrawn.
    fn process_input(&mut self) -> io::Result<bool> {
        if let Some(wait) = self.session.scheduler().until_next(Instant::now()) {
            if wait.is_zero() || !poll(wait)? {
                return Ok(self.on_timer(Instant::now()));
            }
        }
        Ok(self.handle_event(read()?))
    }

    fn on_timer(&mut self, now: Instant) -> bool {
        self.session.scheduler_mut().fire(now) && self.session.tick().is_some()
    }

    fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::FocusLost => self.session.handle(Intent::Pause),
            Event::Resize(..) => true,
            _ => match event.as_key_press_event().and_then(Command::from_key_event) {
                Some(cmd) if cmd.quits() => {
                    self.quitting = true;
                    false
                }
                Some(cmd) => cmd
                    .to_intent(self.session.difficulty())
                    .is_some_and(|intent| self.session.handle(intent)),
                None => false,
            },
        }
    }

    fn draw(&mut self) -> io::Result<()> {
        self.renderer.render(&self.session.snapshot())
    }
}
