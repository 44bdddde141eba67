#![allow(dead_code)]

use gridplan::{Cell, Grid, SearchResult, SearchSession};

/// 10x10 grid with staggered wall segments; 0 is free, 1 is an obstacle
pub const WALLED_GRID: [[u8; 10]; 10] = [
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 1, 1, 1, 0, 1, 1, 1, 1, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 1, 0],
    [0, 1, 1, 1, 1, 1, 1, 0, 1, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 1, 0],
    [0, 1, 1, 1, 1, 1, 1, 1, 1, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 1, 1, 1, 0, 1, 1, 1, 1, 1],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 1, 1, 1, 0, 1, 1, 1, 1, 0],
];

pub fn walled_session() -> SearchSession {
    let grid = Grid::from_obstacles(&WALLED_GRID).unwrap();
    SearchSession::new(grid, Cell::new(0, 0), Cell::new(9, 9)).unwrap()
}

/// Check a returned path is a legal walk from start to goal
pub fn assert_valid_path(session: &SearchSession, result: &SearchResult) {
    let path = result.path.as_ref().expect("path should exist");
    let name = result.strategy;

    assert_eq!(path.first(), Some(&session.start()), "{name}: path must begin at start");
    assert_eq!(path.last(), Some(&session.goal()), "{name}: path must end at goal");

    for cell in path {
        assert!(session.grid().is_open(*cell), "{name}: {cell} is not passable");
    }
    for pair in path.windows(2) {
        assert!(pair[0].is_adjacent(&pair[1]), "{name}: {} -> {} is not a unit move", pair[0], pair[1]);
    }
}

/// Draw a path over a grid, for failure messages
pub fn visualize(session: &SearchSession, path: &[Cell]) -> String {
    let grid = session.grid();
    let mut out = String::new();
    for row in 0..grid.rows() as i32 {
        for col in 0..grid.cols() as i32 {
            let cell = Cell::new(row, col);
            let symbol = if cell == session.start() {
                'S'
            } else if cell == session.goal() {
                'E'
            } else if path.contains(&cell) {
                '*'
            } else if grid.is_open(cell) {
                '.'
            } else {
                '#'
            };
            out.push(symbol);
        }
        out.push('\n');
    }
    out
}
