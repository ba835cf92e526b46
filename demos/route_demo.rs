//! Terminal route-planning demo.
//!
//! Scatters obstacles on a 10x10 grid and plans a new random route every
//! half second, drawing obstacles, the route and free cells as colored tiles.
//!
//! Run: RUST_LOG=info cargo run --bin route-demo

use std::io::{self, Write};
use std::thread;

use crossterm::{
    cursor, execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor},
    terminal::{self, ClearType},
};
use gridroute_demos::{DemoConfig, Launcher, Tile};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn tile_color(tile: Tile) -> Color {
    match tile {
        Tile::Free => Color::Rgb { r: 60, g: 55, b: 50 },
        Tile::Blocked => Color::Rgb { r: 100, g: 100, b: 130 },
        Tile::Path => Color::Rgb { r: 50, g: 180, b: 255 },
    }
}

fn draw(out: &mut impl Write, launcher: &Launcher<StdRng>) -> io::Result<()> {
    queue!(out, cursor::MoveTo(0, 0), terminal::Clear(ClearType::All))?;
    let rows = launcher.rows();
    for (y, row) in rows.iter().enumerate() {
        queue!(out, cursor::MoveTo(0, y as u16))?;
        for &tile in row {
            queue!(out, SetBackgroundColor(tile_color(tile)), Print("  "))?;
        }
        queue!(out, ResetColor)?;
    }
    let status = match launcher.last() {
        Some(round) => match &round.path {
            Some(path) => format!(
                "{} -> {}: {} cells in {:?}",
                round.start,
                round.destination,
                path.len(),
                round.elapsed
            ),
            None => format!("{} -> {}: no route", round.start, round.destination),
        },
        None => "no free cell".to_string(),
    };
    queue!(out, cursor::MoveTo(0, rows.len() as u16 + 1), Print(status))?;
    out.flush()
}

fn run(config: &DemoConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut launcher = Launcher::new(config, StdRng::seed_from_u64(config.seed))?;
    let mut stdout = io::stdout();
    execute!(stdout, cursor::Hide)?;

    let result = (|| -> Result<(), Box<dyn std::error::Error>> {
        for _ in 0..config.rounds {
            launcher.tick()?;
            draw(&mut stdout, &launcher)?;
            thread::sleep(config.tick);
        }
        Ok(())
    })();

    execute!(stdout, ResetColor, cursor::Show, Print("\n"))?;
    result
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run(&DemoConfig::default()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
