//! Fuel Jam engine rules — pure functions over vehicle snapshots, fully testable.
//!
//! Nothing in here mutates its inputs. `is_move_valid` is the single authority on
//! legality; every other function that proposes a position goes through it.

use super::grid::{clamp_to_reach, is_within_bounds, Position, EXIT_ROW, GRID_SIZE};
use super::vehicle::{get_occupied_cells, Orientation, Vehicle, GOAL_VEHICLE_ID};

/// Whether `vehicle` may sit at `new_position` given the rest of `all_vehicles`.
///
/// The moved vehicle is matched by id and ignored in the collision pass, so moving
/// onto its own current position is always valid.
pub fn is_move_valid(vehicle: &Vehicle, new_position: Position, all_vehicles: &[Vehicle]) -> bool {
    let candidate = vehicle.at(new_position);
    let cells = get_occupied_cells(&candidate);

    if !cells.iter().all(|c| is_within_bounds(c.row, c.col)) {
        return false;
    }

    all_vehicles
        .iter()
        .filter(|other| other.id != vehicle.id)
        .all(|other| {
            get_occupied_cells(other)
                .iter()
                .all(|cell| !cells.contains(cell))
        })
}

/// Move `vehicle` by `(d_row, d_col)`, keeping only the component along its axis.
///
/// Returns the moved copy, or `None` if the destination is illegal.
pub fn move_vehicle(
    vehicle: &Vehicle,
    delta: (i32, i32),
    all_vehicles: &[Vehicle],
) -> Option<Vehicle> {
    let (d_row, d_col) = delta;
    let target = match vehicle.orientation {
        Orientation::Horizontal => vehicle.position.offset(0, d_col),
        Orientation::Vertical => vehicle.position.offset(d_row, 0),
    };

    if is_move_valid(vehicle, target, all_vehicles) {
        Some(vehicle.at(target))
    } else {
        None
    }
}

/// `target` with the coordinate across the vehicle's axis reset to the current one.
///
/// The coordinate along the axis is passed through as is.
pub fn project_onto_axis(vehicle: &Vehicle, target: Position) -> Position {
    match vehicle.orientation {
        Orientation::Horizontal => Position::new(vehicle.position.row, target.col),
        Orientation::Vertical => Position::new(target.row, vehicle.position.col),
    }
}

/// Resolve a raw drag target to the furthest legal position toward it.
///
/// The target is first projected onto the vehicle's axis and pulled to within a board
/// width of the grid, so any `i32` target is accepted. If that is directly valid it
/// is returned as is; otherwise the vehicle slides one cell at a time toward it and
/// stops before the first blocked or out-of-bounds cell. The returned position is
/// always valid and always on the vehicle's axis.
pub fn get_next_valid_position(
    vehicle: &Vehicle,
    target: Position,
    all_vehicles: &[Vehicle],
) -> Position {
    let projected = project_onto_axis(vehicle, target);
    let target = match vehicle.orientation {
        Orientation::Horizontal => Position::new(projected.row, clamp_to_reach(projected.col)),
        Orientation::Vertical => Position::new(clamp_to_reach(projected.row), projected.col),
    };
    if is_move_valid(vehicle, target, all_vehicles) {
        return target;
    }

    let current = vehicle.position;
    let (from, to) = match vehicle.orientation {
        Orientation::Horizontal => (current.col, target.col),
        Orientation::Vertical => (current.row, target.row),
    };
    let direction = if to > from { 1 } else { -1 };

    let mut last_valid = current;
    for i in 1..=(to - from).abs() {
        let step = i * direction;
        let candidate = match vehicle.orientation {
            Orientation::Horizontal => current.offset(0, step),
            Orientation::Vertical => current.offset(step, 0),
        };
        if !is_move_valid(vehicle, candidate, all_vehicles) {
            break;
        }
        last_valid = candidate;
    }

    last_valid
}

/// Whether the goal vehicle has reached the exit.
///
/// The goal vehicle must be horizontal on the exit row with its rightmost cell in the
/// last column. No goal vehicle means no win.
pub fn check_if_won(all_vehicles: &[Vehicle]) -> bool {
    let Some(goal) = all_vehicles.iter().find(|v| v.id == GOAL_VEHICLE_ID) else {
        log::warn!("no goal vehicle '{GOAL_VEHICLE_ID}' on the board");
        return false;
    };

    goal.orientation == Orientation::Horizontal
        && goal.position.row == EXIT_ROW
        && goal.rightmost_col() == GRID_SIZE - 1
}

/// The vehicle covering `cell`, if any.
pub fn vehicle_at(all_vehicles: &[Vehicle], cell: Position) -> Option<&Vehicle> {
    all_vehicles
        .iter()
        .find(|v| get_occupied_cells(v).contains(&cell))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn goal(row: i32, col: i32) -> Vehicle {
        Vehicle::new(GOAL_VEHICLE_ID, Orientation::Horizontal, 3, (row, col))
    }

    #[test]
    fn valid_move_into_empty_cells() {
        let g = goal(2, 0);
        assert!(is_move_valid(&g, Position::new(2, 2), &[g.clone()]));
    }

    #[test]
    fn staying_put_is_valid() {
        let g = goal(2, 1);
        let blocker = Vehicle::new("blue1", Orientation::Vertical, 3, (0, 4));
        let all = vec![g.clone(), blocker];
        assert!(is_move_valid(&g, g.position, &all));
    }

    #[test]
    fn out_of_bounds_rejected() {
        let g = goal(2, 0);
        assert!(!is_move_valid(&g, Position::new(2, 4), &[]));
        assert!(!is_move_valid(&g, Position::new(2, -1), &[]));
        let v = Vehicle::new("green1", Orientation::Vertical, 2, (0, 0));
        assert!(!is_move_valid(&v, Position::new(5, 0), &[]));
        assert!(!is_move_valid(&v, Position::new(-1, 0), &[]));
    }

    #[test]
    fn collision_rejected() {
        let g = goal(2, 0);
        let blocker = Vehicle::new("blue1", Orientation::Vertical, 3, (0, 4));
        let all = vec![g.clone(), blocker];
        assert!(!is_move_valid(&g, Position::new(2, 2), &all));
        assert!(is_move_valid(&g, Position::new(2, 1), &all));
    }

    #[test]
    fn validator_does_not_mutate() {
        let g = goal(2, 0);
        let all = vec![g.clone()];
        is_move_valid(&g, Position::new(2, 3), &all);
        assert_eq!(all[0].position, Position::new(2, 0));
    }

    #[test]
    fn move_vehicle_locks_axis() {
        let g = goal(2, 0);
        let moved = move_vehicle(&g, (3, 2), &[g.clone()]).unwrap();
        assert_eq!(moved.position, Position::new(2, 2));

        let v = Vehicle::new("green1", Orientation::Vertical, 2, (0, 0));
        let moved = move_vehicle(&v, (1, 4), &[v.clone()]).unwrap();
        assert_eq!(moved.position, Position::new(1, 0));
    }

    #[test]
    fn move_vehicle_rejects_invalid() {
        let g = goal(2, 0);
        assert!(move_vehicle(&g, (0, -1), &[g.clone()]).is_none());
    }

    #[test]
    fn drag_goal_to_exit_with_empty_board() {
        let g = goal(2, 0);
        let resolved = get_next_valid_position(&g, Position::new(2, 5), &[]);
        assert_eq!(resolved, Position::new(2, 3));
        assert!(check_if_won(&[g.at(resolved)]));
    }

    #[test]
    fn drag_stops_before_obstacle() {
        let g = goal(2, 0);
        let blocker = Vehicle::new("green1", Orientation::Vertical, 2, (2, 4));
        let all = vec![g.clone(), blocker.clone()];
        let resolved = get_next_valid_position(&g, Position::new(2, 5), &all);
        assert_eq!(resolved, Position::new(2, 1));
        assert!(!check_if_won(&[g.at(resolved), blocker]));
    }

    #[test]
    fn drag_past_left_edge_stays() {
        let v = Vehicle::new("green1", Orientation::Horizontal, 2, (0, 0));
        let resolved = get_next_valid_position(&v, Position::new(0, -3), &[v.clone()]);
        assert_eq!(resolved, Position::new(0, 0));
    }

    #[test]
    fn drag_to_extreme_coordinates_stops_at_edge() {
        let g = goal(2, 0);
        let far_right = get_next_valid_position(&g, Position::new(2, i32::MAX), &[]);
        assert_eq!(far_right, Position::new(2, 3));
        let far_left = get_next_valid_position(&g, Position::new(2, i32::MIN), &[]);
        assert_eq!(far_left, Position::new(2, 0));
        assert_eq!(
            get_next_valid_position(&g, Position::new(i32::MIN, i32::MAX), &[]),
            Position::new(2, 3)
        );

        let v = Vehicle::new("blue1", Orientation::Vertical, 3, (1, 4));
        let far_down = get_next_valid_position(&v, Position::new(i32::MAX, 4), &[]);
        assert_eq!(far_down, Position::new(3, 4));
        let far_up = get_next_valid_position(&v, Position::new(i32::MIN, 4), &[]);
        assert_eq!(far_up, Position::new(0, 4));
    }

    #[test]
    fn extreme_targets_are_simply_invalid() {
        let g = goal(2, 0);
        assert!(!is_move_valid(&g, Position::new(2, i32::MAX), &[]));
        assert!(!is_move_valid(&g, Position::new(i32::MIN, i32::MIN), &[]));
        assert!(move_vehicle(&g, (0, i32::MAX), &[]).is_none());
    }

    #[test]
    fn drag_ignores_orthogonal_component() {
        let v = Vehicle::new("blue1", Orientation::Vertical, 3, (0, 0));
        let resolved = get_next_valid_position(&v, Position::new(9, 4), &[v.clone()]);
        assert_eq!(resolved, Position::new(3, 0));
    }

    #[test]
    fn drag_to_free_cell_off_axis_is_projected() {
        // (4, 0) is free, but a horizontal vehicle may only change column.
        let g = goal(2, 1);
        let resolved = get_next_valid_position(&g, Position::new(4, 0), &[g.clone()]);
        assert_eq!(resolved, Position::new(2, 0));
    }

    #[test]
    fn drag_with_zero_axis_distance_stays() {
        // Target differs only on the locked axis, so it is invalid and there is no step.
        let g = goal(2, 1);
        let blocker = Vehicle::new("green1", Orientation::Horizontal, 2, (3, 1));
        let all = vec![g.clone(), blocker];
        let resolved = get_next_valid_position(&g, Position::new(3, 1), &all);
        assert_eq!(resolved, Position::new(2, 1));
    }

    #[test]
    fn win_requires_exit_row_and_right_edge() {
        assert!(check_if_won(&[goal(2, 3)]));
        assert!(!check_if_won(&[goal(2, 2)]));
        assert!(!check_if_won(&[goal(1, 3)]));
    }

    #[test]
    fn vertical_goal_never_wins() {
        let g = Vehicle::new(GOAL_VEHICLE_ID, Orientation::Vertical, 2, (2, 5));
        assert!(!check_if_won(&[g]));
    }

    #[test]
    fn missing_goal_is_not_a_win() {
        let v = Vehicle::new("green1", Orientation::Horizontal, 2, (2, 4));
        assert!(!check_if_won(&[v]));
        assert!(!check_if_won(&[]));
    }

    #[test]
    fn vehicle_at_hit_test() {
        let g = goal(2, 0);
        let truck = Vehicle::new("blue1", Orientation::Vertical, 3, (0, 4));
        let all = vec![g, truck];
        assert_eq!(vehicle_at(&all, Position::new(2, 2)).map(|v| v.id.as_str()), Some("red"));
        assert_eq!(vehicle_at(&all, Position::new(1, 4)).map(|v| v.id.as_str()), Some("blue1"));
        assert!(vehicle_at(&all, Position::new(5, 5)).is_none());
    }
}
