//! Ray-cast field of view.
//!
//! One ray per degree leaves the centre of the origin cell and walks outward
//! in half-cell steps until it leaves the grid, passes the sight radius, or
//! hits an opaque cell. This is an approximation: sampled rays can slip past
//! the corner of a thin diagonal wall or leave single-cell gaps at long
//! range. Shadowcasting would be exact but reveals a different set of cells.

use crate::state::{Grid, Position};

/// Angular samples per recompute.
pub const RAY_COUNT: u32 = 360;
/// Distance travelled along a ray per sample, in cells.
pub const RAY_STEP: f32 = 0.5;

/// Rebuilds the grid's visible map from `origin` and folds it into explored.
///
/// # Arguments
///
/// * `grid` - Level whose visibility layers are rewritten
/// * `origin` - Viewer cell; always ends up visible and explored
/// * `radius` - Euclidean sight range in cells, measured between cell coordinates
/// * `light_walls` - Whether the opaque cell that stops a ray is revealed
pub fn compute_fov(grid: &mut Grid, origin: Position, radius: u32, light_walls: bool) {
    grid.clear_visible();
    if !grid.in_bounds(origin) {
        return;
    }
    grid.reveal(origin);

    let max_range = radius as f32;
    let max_steps = ((max_range + 2.0) / RAY_STEP) as u32;
    let (cx, cy) = (origin.x as f32 + 0.5, origin.y as f32 + 0.5);

    for degree in 0..RAY_COUNT {
        let (sin, cos) = (degree as f32).to_radians().sin_cos();
        let mut last = origin;
        for step in 1..=max_steps {
            let travelled = step as f32 * RAY_STEP;
            let cell = Position::new(
                (cx + cos * travelled).floor() as i32,
                (cy + sin * travelled).floor() as i32,
            );
            if cell == last {
                continue;
            }
            last = cell;

            if !grid.in_bounds(cell) || origin.euclidean(cell) > max_range {
                break;
            }
            let transparent = grid.is_transparent(cell);
            if transparent || light_walls {
                grid.reveal(cell);
            }
            if !transparent {
                break;
            }
        }
    }
}
