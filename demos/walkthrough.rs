//! Terminal walkthrough: build a small maze, scatter random walls, then
//! print the breadth-first visit order followed by the shortest route.
//!
//! Run with `RUST_LOG=debug` for search milestones.

use mazer_core::{Cell, Maze, Point};
use rand::RngExt;

const WIDTH: i32 = 10;
const HEIGHT: i32 = 10;
const WALL_CHANCE: f64 = 0.25;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut maze = Maze::new(WIDTH, HEIGHT)?;
    let mut rng = rand::rng();
    let mut walls = 0;
    for p in maze.bounds().iter() {
        if rng.random::<f64>() < WALL_CHANCE {
            maze.set_cell(p, Cell::Wall)?;
            walls += 1;
        }
    }
    log::debug!("scattered {walls} walls");

    // Corners beat whatever the scatter put there.
    maze.set_cell(Point::ZERO, Cell::Start)?;
    maze.set_cell(Point::new(WIDTH - 1, HEIGHT - 1), Cell::End)?;

    println!("{maze}");
    println!();

    let mut traversal = mazer_paths::traverse(&maze)?;
    for (step, p) in traversal.by_ref().enumerate() {
        println!("step {step:3}: visit {p}");
    }

    let mut route = traversal.into_path();
    route.reverse();
    if route.is_empty() {
        log::debug!("end not reachable");
        println!("no route");
    } else {
        log::debug!("route has {} cells", route.len());
        let legs: Vec<String> = route.iter().map(|p| p.to_string()).collect();
        println!("route: {}", legs.join(" -> "));
    }

    Ok(())
}
