//! Headless bouncing ball: a ball dropped onto a platform between two walls.
//!
//! Run with `cargo run --example bouncing_ball [ticks]`. Wind gusts that a
//! windowed host would read from the keyboard are scripted instead.

use std::error::Error;

use planar_physics::{Body, CollisionResponse, Vector};

const CANVAS_WIDTH: f64 = 800.0;
const DEFAULT_TICKS: usize = 300;
const REPORT_EVERY: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Wind {
    Calm,
    Right,
    Left,
}

/// Gusts a player would otherwise trigger with the R and L keys.
fn wind_at(tick: usize) -> Wind {
    match tick {
        90..=92 => Wind::Right,
        180..=182 => Wind::Left,
        _ => Wind::Calm,
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let ticks = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<usize>()?,
        None => DEFAULT_TICKS,
    };

    let mut ball = Body::circle(20.0, 1.0, Vector::xy(400.0, 400.0));
    let platform = Body::bounding_box(CANVAS_WIDTH, 100.0, 0.0, Vector::xy(0.0, 0.0));
    let walls = [
        Body::bounding_box(50.0, 400.0, 0.0, Vector::xy(CANVAS_WIDTH - 50.0, 0.0)),
        Body::bounding_box(50.0, 400.0, 0.0, Vector::xy(0.0, 0.0)),
    ];

    let gravity = Vector::xy(0.0, -1.0);
    let drag = Vector::xy(0.0, 0.2);
    let wind_right = Vector::xy(10.0, 0.0);
    let wind_left = Vector::xy(-10.0, 0.0);

    let response = CollisionResponse::default();

    for tick in 0..ticks {
        let mut sum_accel = gravity.add(&drag)?;

        match wind_at(tick) {
            Wind::Right => {
                println!("Wind right");
                sum_accel = sum_accel.add(&wind_right)?;
            }
            Wind::Left => {
                println!("Wind left");
                sum_accel = sum_accel.add(&wind_left)?;
            }
            Wind::Calm => {}
        }

        for obstacle in std::iter::once(&platform).chain(walls.iter()) {
            if let Some(rebound) = response.resolve(&mut ball, obstacle)? {
                sum_accel = sum_accel.add(&rebound)?;
            }
        }

        ball.apply_acceleration(&sum_accel)?;

        if tick % REPORT_EVERY == 0 {
            println!(
                "tick {:>4}: position={:?} acceleration={:?}",
                tick,
                ball.position().components(),
                ball.acceleration().components()
            );
        }
    }

    Ok(())
}
