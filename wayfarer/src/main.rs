//! wayfarer — a terminal front-end for the pathviz shortest-path
//! visualizer.
//!
//! Paint walls with the mouse, relocate the endpoints, pick an algorithm,
//! and watch the search sweep the board before the shortest path lights up.

mod model;
mod term;

use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};

use model::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    term::init()?;
    let result = run();
    term::restore();
    result
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new()?;
    loop {
        if app.dirty {
            term::draw(app.grid(), &app.status())?;
            app.dirty = false;
        }
        if event::poll(Duration::from_millis(16))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
                Event::Mouse(ev) => app.handle_mouse(ev),
                Event::Resize(..) => app.dirty = true,
                _ => {}
            }
        }
        app.tick();
        if app.quit {
            return Ok(());
        }
    }
}
