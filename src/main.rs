//! Headless playfield demo
//!
//! Loads a level (path argument, or a built-in demo field), runs a
//! fixed-timestep loop while probing a sample hitbox, and prints the
//! final visible window as ASCII art through the `DrawSurface` trait.

use scrollfield::consts::SIM_DT;
use scrollfield::{
    Contact, Direction, DrawSurface, FieldTuning, Playfield, Rect, TileSprite,
};

const DEMO_LEVEL: &str = "\
24 6
000000000000000000000000
000000000000002000000000
000011000000011100000000
000000000200000000001100
001100000111000000000000
111111111111111111111111
";

/// Rasterizes sprite draws into a character grid
struct AsciiSurface {
    cells: Vec<char>,
    columns: usize,
    rows: usize,
    scale: f32,
}

impl AsciiSurface {
    fn new(viewport_w: f32, viewport_h: f32, columns: usize) -> Self {
        let scale = viewport_w / columns as f32;
        let rows = (viewport_h / scale).ceil() as usize;
        Self {
            cells: vec![' '; columns * rows],
            columns,
            rows,
            scale,
        }
    }

    fn print(&self) {
        for row in 0..self.rows {
            let line: String = self.cells[row * self.columns..(row + 1) * self.columns]
                .iter()
                .collect();
            println!("{line}");
        }
    }
}

impl DrawSurface for AsciiSurface {
    fn draw_sprite(&mut self, sprite: TileSprite, rect: Rect) {
        let glyph = match sprite {
            TileSprite::Background => '.',
            TileSprite::Block => '#',
            TileSprite::Hazard => '^',
        };
        let col_start = (rect.x / self.scale).floor().max(0.0) as usize;
        let col_end = ((rect.right() / self.scale).ceil() as usize).min(self.columns);
        let row_start = (rect.y / self.scale).floor().max(0.0) as usize;
        let row_end = ((rect.bottom() / self.scale).ceil() as usize).min(self.rows);
        for row in row_start..row_end {
            for col in col_start..col_end {
                self.cells[row * self.columns + col] = glyph;
            }
        }
    }
}

fn main() {
    env_logger::init();

    let tuning = FieldTuning::load("tuning.json");

    let source = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                log::error!("cannot read level file {path}: {e}");
                std::process::exit(1);
            }
        },
        None => DEMO_LEVEL.to_string(),
    };

    let mut field = match Playfield::load(&source, &tuning) {
        Ok(field) => field,
        Err(e) => {
            log::error!("failed to load level: {e}");
            std::process::exit(1);
        }
    };

    // A sample entity riding the middle of the screen.
    let hitbox = Rect::new(
        tuning.viewport.x * 0.25,
        tuning.viewport.y * 0.5,
        field.tile_size() * 0.5,
        field.tile_size() * 0.5,
    );

    let mut last = Contact::None;
    let mut lethal_frames = 0u32;
    for frame in 0..1200 {
        field.tick(SIM_DT);
        let contact = field.classify(hitbox, Direction::Right);
        if contact != last {
            log::debug!(
                "frame {frame}: contact {last:?} -> {contact:?} at offset {:.3}",
                field.offset()
            );
            last = contact;
        }
        if contact == Contact::Unsafe {
            lethal_frames += 1;
        }
    }

    log::info!(
        "after 10s: offset {:.3} columns, rate {:.3} col/s, {lethal_frames} lethal frames",
        field.offset(),
        field.scroll_rate(),
    );
    log::info!(
        "ceiling {:.1}px, floor {:.1}px for the sample hitbox",
        field.nearest_up(hitbox),
        field.nearest_down(hitbox),
    );

    let mut surface = AsciiSurface::new(tuning.viewport.x, tuning.viewport.y, 72);
    field.draw(&mut surface);
    surface.print();
}
