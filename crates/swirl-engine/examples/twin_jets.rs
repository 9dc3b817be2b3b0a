//! Twin jets: two opposing ink streams meeting in the middle.
//!
//! Demonstrates:
//!   1. Building an RGB `FluidGrid`
//!   2. Emitting from `TwinJets` every frame
//!   3. The step → read → decay cadence
//!   4. Drawing a brush stroke across the flow
//!
//! Prints a coarse ASCII rendering of the red and blue channels.
//!
//! Run with:
//!   cargo run --example twin_jets

use swirl_engine::{Brush, FluidConfig, FluidGrid, TwinJets};

const WIDTH: u32 = 64;
const HEIGHT: u32 = 24;
const FRAMES: u64 = 120;

fn render(grid: &FluidGrid) {
    let red = grid.channel_by_name("red").expect("red channel");
    let blue = grid.channel_by_name("blue").expect("blue channel");
    for (r_row, b_row) in red.interior_rows().zip(blue.interior_rows()) {
        let line: String = r_row
            .iter()
            .zip(b_row)
            .map(|(&r, &b)| match (r > 20.0, b > 20.0) {
                (true, true) => '#',
                (true, false) => 'r',
                (false, true) => 'b',
                (false, false) => '.',
            })
            .collect();
        println!("{line}");
    }
}

fn main() {
    let mut grid = FluidGrid::new(FluidConfig::rgb(WIDTH, HEIGHT)).expect("valid config");
    let jets = TwinJets::blue_red();
    let mut brush = Brush::default().with_gain(0.5);

    let mut slowest = 0;
    for frame in 0..FRAMES {
        jets.emit(&mut grid).expect("jets match the rgb channels");

        // A vertical stroke through the centre for the middle third.
        if (FRAMES / 3..2 * FRAMES / 3).contains(&frame) {
            let y = 1.0 + (frame - FRAMES / 3) as f32 * (HEIGHT as f32 / (FRAMES / 3) as f32);
            brush
                .stroke_to(&mut grid, WIDTH as f32 / 2.0, y)
                .expect("brush matches the rgb channels");
        } else {
            brush.lift();
        }

        let metrics = grid.step();
        slowest = slowest.max(metrics.total_us);
        grid.decay();
    }

    render(&grid);
    println!();
    println!(
        "{} frames, slowest {}us, {} non-finite cells reset",
        grid.frames(),
        slowest,
        grid.faults_total()
    );
}
