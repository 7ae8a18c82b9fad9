//! A* route search over the 8-connected grid.
//!
//! Orthogonal steps cost 1.0 and diagonal steps 1.4 (kept as integer tenths
//! so the open set orders exactly). The Manhattan heuristic overestimates on
//! diagonals, so results are good routes rather than certified shortest
//! ones. Ties on f-score pop in insertion order, which together with the
//! fixed neighbour order makes every search reproducible.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::state::{Grid, Offset, Position};

const ORTHOGONAL_COST: u32 = 10;
const DIAGONAL_COST: u32 = 14;

/// Expansion order: orthogonals first, then diagonals.
const NEIGHBOR_ORDER: [Offset; 8] = [
    Offset::new(0, -1),
    Offset::new(0, 1),
    Offset::new(-1, 0),
    Offset::new(1, 0),
    Offset::new(-1, -1),
    Offset::new(-1, 1),
    Offset::new(1, -1),
    Offset::new(1, 1),
];

/// Node in the A* open set
#[derive(Debug, Clone, Copy)]
struct PathNode {
    position: Position,
    g_cost: u32,
    f_cost: u32,
    /// Push counter; earlier pushes win f-score ties.
    sequence: u64,
}

impl PartialEq for PathNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PathNode {}

impl Ord for PathNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap
        other
            .f_cost
            .cmp(&self.f_cost)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for PathNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn heuristic(from: Position, to: Position) -> u32 {
    let delta = from.delta_to(to);
    (delta.dx.unsigned_abs() + delta.dy.unsigned_abs()) * ORTHOGONAL_COST
}

/// Finds a route from `start` to `goal`.
///
/// Intermediate cells must be walkable (passable and unoccupied). The goal
/// only needs passable terrain, so an occupied target cell can still be
/// routed to.
///
/// # Returns
///
/// The cells to step through, excluding `start` and ending at `goal`. Empty
/// when the goal is unreachable, out of bounds, or equal to `start`.
pub fn find_path(grid: &Grid, start: Position, goal: Position) -> Vec<Position> {
    if start == goal || !grid.in_bounds(start) || !grid.is_passable(goal) {
        return Vec::new();
    }

    let mut open_set = BinaryHeap::new();
    let mut came_from: HashMap<Position, Position> = HashMap::new();
    let mut g_scores: HashMap<Position, u32> = HashMap::new();
    let mut sequence = 0u64;

    g_scores.insert(start, 0);
    open_set.push(PathNode {
        position: start,
        g_cost: 0,
        f_cost: heuristic(start, goal),
        sequence,
    });

    while let Some(current) = open_set.pop() {
        if current.position == goal {
            return reconstruct_path(&came_from, start, goal);
        }
        // A cheaper route to this cell was pushed after this entry.
        if g_scores
            .get(&current.position)
            .is_some_and(|&best| current.g_cost > best)
        {
            continue;
        }

        for offset in NEIGHBOR_ORDER {
            let neighbor = current.position + offset;
            let enterable = if neighbor == goal {
                grid.is_passable(neighbor)
            } else {
                grid.is_walkable(neighbor)
            };
            if !enterable {
                continue;
            }

            let step = if offset.dx != 0 && offset.dy != 0 {
                DIAGONAL_COST
            } else {
                ORTHOGONAL_COST
            };
            let tentative_g = current.g_cost + step;
            if g_scores
                .get(&neighbor)
                .is_some_and(|&known| tentative_g >= known)
            {
                continue;
            }

            came_from.insert(neighbor, current.position);
            g_scores.insert(neighbor, tentative_g);
            sequence += 1;
            open_set.push(PathNode {
                position: neighbor,
                g_cost: tentative_g,
                f_cost: tentative_g + heuristic(neighbor, goal),
                sequence,
            });
        }
    }

    Vec::new()
}

/// Walks predecessors back from the goal, dropping the start cell.
fn reconstruct_path(
    came_from: &HashMap<Position, Position>,
    start: Position,
    goal: Position,
) -> Vec<Position> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(&previous) = came_from.get(&current) {
        if previous == start {
            break;
        }
        path.push(previous);
        current = previous;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Actor, Fighter, Rgb, Tile, TileKind};
    use proptest::prelude::*;

    fn open_grid(width: i32, height: i32) -> Grid {
        Grid::new(width, height, Tile::from_kind(TileKind::Floor)).unwrap()
    }

    fn assert_valid(grid: &Grid, start: Position, goal: Position, path: &[Position]) {
        assert_eq!(path.last(), Some(&goal));
        assert!(start.is_adjacent(path[0]));
        for pair in path.windows(2) {
            assert!(pair[0].is_adjacent(pair[1]), "{:?} not adjacent", pair);
        }
        for cell in &path[..path.len() - 1] {
            assert!(grid.is_walkable(*cell));
        }
    }

    #[test]
    fn straight_corridor_excludes_start_and_includes_goal() {
        let grid = open_grid(6, 1);
        let path = find_path(&grid, Position::new(0, 0), Position::new(4, 0));
        assert_eq!(
            path,
            vec![
                Position::new(1, 0),
                Position::new(2, 0),
                Position::new(3, 0),
                Position::new(4, 0)
            ]
        );
    }

    #[test]
    fn routes_around_a_wall() {
        let mut grid = open_grid(7, 7);
        for y in 0..6 {
            grid.set_tile(Position::new(3, y), Tile::from_kind(TileKind::Wall));
        }
        let (start, goal) = (Position::new(1, 1), Position::new(5, 1));
        let path = find_path(&grid, start, goal);
        assert!(!path.is_empty());
        assert_valid(&grid, start, goal, &path);
        assert!(path.contains(&Position::new(3, 6)));
    }

    #[test]
    fn unreachable_goal_yields_empty_route() {
        let mut grid = open_grid(5, 5);
        for y in 0..5 {
            grid.set_tile(Position::new(2, y), Tile::from_kind(TileKind::Wall));
        }
        assert!(find_path(&grid, Position::new(0, 0), Position::new(4, 4)).is_empty());
        assert!(find_path(&grid, Position::new(0, 0), Position::new(2, 2)).is_empty());
        assert!(find_path(&grid, Position::new(0, 0), Position::new(9, 9)).is_empty());
        assert!(find_path(&grid, Position::new(1, 1), Position::new(1, 1)).is_empty());
    }

    #[test]
    fn occupied_goal_is_reachable_but_occupied_cells_en_route_are_not() {
        let mut grid = open_grid(5, 1);
        let target = Actor::new(Position::new(4, 0), 'g', Rgb::GRAY, "goblin")
            .with_fighter(Fighter::new(5, 0, 1));
        grid.add_actor(target);
        assert_eq!(
            find_path(&grid, Position::new(2, 0), Position::new(4, 0)),
            vec![Position::new(3, 0), Position::new(4, 0)]
        );

        let blocker = Actor::new(Position::new(1, 0), 'g', Rgb::GRAY, "goblin")
            .with_fighter(Fighter::new(5, 0, 1));
        grid.add_actor(blocker);
        assert!(find_path(&grid, Position::new(0, 0), Position::new(3, 0)).is_empty());
    }

    proptest! {
        #[test]
        fn routes_are_valid_and_deterministic(
            walls in proptest::collection::vec((0i32..10, 0i32..10), 0..35),
            start in (0i32..10, 0i32..10),
            goal in (0i32..10, 0i32..10),
        ) {
            let mut grid = open_grid(10, 10);
            let start = Position::new(start.0, start.1);
            let goal = Position::new(goal.0, goal.1);
            for (x, y) in walls {
                let cell = Position::new(x, y);
                if cell != start && cell != goal {
                    grid.set_tile(cell, Tile::from_kind(TileKind::Wall));
                }
            }
            let path = find_path(&grid, start, goal);
            prop_assert_eq!(&path, &find_path(&grid, start, goal));
            if !path.is_empty() {
                prop_assert!(start.is_adjacent(path[0]));
                prop_assert_eq!(path.last(), Some(&goal));
                for pair in path.windows(2) {
                    prop_assert!(pair[0].is_adjacent(pair[1]));
                }
                for cell in &path {
                    prop_assert!(grid.is_walkable(*cell));
                }
            }
        }
    }
}
