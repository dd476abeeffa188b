//! Application state: maps key and mouse input onto the session and tracks
//! when the screen needs repainting.

use std::time::Instant;

use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};

use pathviz_core::{Coord, Error, Grid};
use pathviz_search::Algorithm;
use pathviz_session::{DEFAULT_WALL_FILL, Mode, Session, SessionConfig};

use crate::term::HEADER_ROWS;

pub struct App {
    session: Session,
    algorithm: Algorithm,
    started: Instant,
    was_running: bool,
    pub dirty: bool,
    pub quit: bool,
}

impl App {
    pub fn new() -> Result<Self, Error> {
        Ok(Self {
            session: Session::new(SessionConfig::default())?,
            algorithm: Algorithm::Dijkstra,
            started: Instant::now(),
            was_running: false,
            dirty: true,
            quit: false,
        })
    }

    pub fn grid(&self) -> &Grid {
        self.session.grid()
    }

    /// One-line status bar content.
    pub fn status(&self) -> String {
        let mode = match self.session.mode() {
            Mode::PlacingStart => "place start",
            Mode::PlacingEnd => "place finish",
            Mode::DrawingWalls => "draw walls",
        };
        let state = if self.session.is_running() {
            "running"
        } else {
            "idle"
        };
        format!(
            " [{mode}] {} · {state} · s/e/w mode  1/2 algo  enter run  r reset  g scatter  q quit",
            self.algorithm
        )
    }

    fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Char('s') => self.session.set_mode(Mode::PlacingStart),
            KeyCode::Char('e') => self.session.set_mode(Mode::PlacingEnd),
            KeyCode::Char('w') => self.session.set_mode(Mode::DrawingWalls),
            KeyCode::Char('1') => self.algorithm = Algorithm::Bfs,
            KeyCode::Char('2') => self.algorithm = Algorithm::Dijkstra,
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.session.run_visualization(self.algorithm.as_str());
            }
            KeyCode::Char('r') => self.session.reset_grid(),
            KeyCode::Char('g') => {
                let mut rng = rand::rng();
                self.session.scatter_walls(&mut rng, DEFAULT_WALL_FILL);
            }
            _ => return,
        }
        self.dirty = true;
    }

    pub fn handle_mouse(&mut self, ev: MouseEvent) {
        let at = Coord::new(ev.row as i32 - HEADER_ROWS as i32, ev.column as i32);
        match ev.kind {
            MouseEventKind::Down(MouseButton::Left) => self.session.pointer_down(at),
            MouseEventKind::Drag(MouseButton::Left) => self.session.pointer_enter(at),
            MouseEventKind::Up(_) => self.session.pointer_up(),
            _ => return,
        }
        self.dirty = true;
    }

    /// Drain due playback events and note whether a repaint is needed.
    pub fn tick(&mut self) {
        let events = self.session.advance(self.now_ms());
        let running = self.session.is_running();
        if !events.is_empty() || running != self.was_running {
            self.dirty = true;
        }
        self.was_running = running;
    }
}
