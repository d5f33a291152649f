//! A validated initial/goal pair and its search space.

use crate::error::PuzzleError;
use crate::grid::{idx_to_coord, Grid, GridKey, GRID_SIZE};
use crate::heuristic::{manhattan_distance, GoalPositions};
use crate::moves::{legal_moves, Move};
use crate::solver::{search, SearchOutcome, SearchSpace};

/// Result type of a cube search.
pub type CubeOutcome = SearchOutcome<Move, Grid>;

/// An initial configuration and the goal it should reach.
///
/// Both grids hold one blank each and the same set of labels.
#[derive(Clone)]
pub struct Puzzle {
    initial: Grid,
    goal: Grid,
    goal_positions: GoalPositions,
}

impl Puzzle {
    /// Pairs two valid grids, rejecting mismatched label sets.
    pub fn new(initial: Grid, goal: Grid) -> Result<Self, PuzzleError> {
        let initial_labels = initial.sorted_labels();
        let goal_labels = goal.sorted_labels();

        if initial_labels != goal_labels {
            let only_initial = initial_labels
                .iter()
                .copied()
                .filter(|label| goal_labels.binary_search(label).is_err())
                .collect();
            let only_goal = goal_labels
                .iter()
                .copied()
                .filter(|label| initial_labels.binary_search(label).is_err())
                .collect();
            return Err(PuzzleError::LabelMismatch {
                only_initial,
                only_goal,
            });
        }

        Ok(Self {
            initial,
            goal,
            goal_positions: GoalPositions::new(&goal),
        })
    }

    /// Validates two flat cell arrays and pairs them.
    pub fn from_cells(initial: GridKey, goal: GridKey) -> Result<Self, PuzzleError> {
        let initial = Grid::new(initial).map_err(PuzzleError::Initial)?;
        let goal = Grid::new(goal).map_err(PuzzleError::Goal)?;
        Self::new(initial, goal)
    }

    pub fn initial(&self) -> &Grid {
        &self.initial
    }

    pub fn goal(&self) -> &Grid {
        &self.goal
    }

    /// Heuristic value of the initial configuration.
    pub fn initial_estimate(&self) -> u32 {
        self.goal_positions.estimate(&self.initial)
    }

    /// Parity test for reachability.
    ///
    /// Every move is one transposition of the cell permutation and flips the
    /// colour of the blank's cell in the checkerboard colouring of the cube.
    /// The goal is reachable only if the permutation parity matches the
    /// parity of the blank's Manhattan displacement.
    pub fn is_solvable(&self) -> bool {
        let permutation_parity = (GRID_SIZE - self.cycle_count()) % 2;
        let blank_parity =
            manhattan_distance(self.initial.blank_coord(), self.goal.blank_coord()) % 2;
        permutation_parity == blank_parity as usize
    }

    /// Cycles in the permutation sending each initial cell to the goal cell
    /// holding the same label.
    fn cycle_count(&self) -> usize {
        let mut target = [0usize; GRID_SIZE];
        let mut goal_index = [0usize; 256];
        for (idx, &label) in self.goal.cells().iter().enumerate() {
            goal_index[label as usize] = idx;
        }
        for (idx, &label) in self.initial.cells().iter().enumerate() {
            target[idx] = goal_index[label as usize];
        }

        let mut seen = [false; GRID_SIZE];
        let mut cycles = 0;
        for start in 0..GRID_SIZE {
            if seen[start] {
                continue;
            }
            cycles += 1;
            let mut cell = start;
            while !seen[cell] {
                seen[cell] = true;
                cell = target[cell];
            }
        }
        cycles
    }

    /// Finds a shortest move sequence from the initial grid to the goal.
    pub fn solve(&self) -> CubeOutcome {
        log::debug!("initial:\n{}goal:\n{}", self.initial, self.goal);
        search(self, self.initial)
    }
}

impl SearchSpace for Puzzle {
    type State = Grid;
    type Action = Move;
    type Key = GridKey;

    #[inline]
    fn key(&self, state: &Grid) -> GridKey {
        state.key()
    }

    #[inline]
    fn is_goal(&self, state: &Grid) -> bool {
        *state == self.goal
    }

    #[inline]
    fn estimate(&self, state: &Grid) -> u32 {
        self.goal_positions.estimate(state)
    }

    fn successors(&self, state: &Grid) -> impl Iterator<Item = (Move, Grid)> {
        legal_moves(state)
    }
}

/// Describes where the blank sits, for diagnostics.
pub fn describe_blank(grid: &Grid) -> String {
    let (layer, row, col) = idx_to_coord(grid.blank_idx());
    format!("layer {layer}, row {row}, col {col}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GridError;
    use crate::grid::{coord_to_idx, BLANK};
    use crate::moves::{apply, replay, scramble};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rustc_hash::FxHashMap;
    use std::collections::VecDeque;

    fn solved_from(initial: Grid) -> crate::solver::Solution<Move, Grid> {
        let puzzle = Puzzle::new(initial, Grid::solved()).unwrap();
        puzzle
            .solve()
            .into_solution()
            .expect("reachable puzzle should be solved")
    }

    fn assert_well_formed(initial: &Grid, goal: &Grid, solution: &crate::solver::Solution<Move, Grid>) {
        assert_eq!(solution.depth as usize, solution.actions.len());
        assert_eq!(solution.actions.len(), solution.f_values.len());
        assert_eq!(solution.path.len(), solution.actions.len() + 1);
        assert_eq!(replay(initial, &solution.actions), Some(*goal));
        assert_eq!(solution.path.first(), Some(initial));
        assert_eq!(solution.path.last(), Some(goal));
        assert!(solution.nodes_generated >= solution.path.len() as u64);
        if let Some(&last) = solution.f_values.last() {
            assert_eq!(last, solution.depth);
        }
        for pair in solution.f_values.windows(2) {
            assert!(pair[0] <= pair[1], "f decreased along the path: {:?}", solution.f_values);
        }
    }

    /// Exact distance by breadth-first search, for short scrambles.
    fn breadth_first_depth(initial: &Grid, goal: &Grid) -> u32 {
        let mut distances: FxHashMap<Grid, u32> = FxHashMap::default();
        let mut queue = VecDeque::from([*initial]);
        distances.insert(*initial, 0);
        while let Some(state) = queue.pop_front() {
            let distance = distances[&state];
            if state == *goal {
                return distance;
            }
            for (_, next) in legal_moves(&state) {
                if !distances.contains_key(&next) {
                    distances.insert(next, distance + 1);
                    queue.push_back(next);
                }
            }
        }
        unreachable!("goal not found by breadth-first search")
    }

    #[test]
    fn test_initial_equal_to_goal() {
        let solution = solved_from(Grid::solved());
        assert_eq!(solution.depth, 0);
        assert!(solution.actions.is_empty());
        assert!(solution.f_values.is_empty());
        assert_eq!(solution.nodes_generated, 1);
    }

    #[test]
    fn test_single_in_layer_move() {
        // blank one cell west of its goal position
        let initial = apply(&Grid::solved(), Move::West).unwrap();
        let solution = solved_from(initial);
        assert_eq!(solution.depth, 1);
        assert_eq!(solution.actions, vec![Move::East]);
        assert_eq!(solution.f_values, vec![1]);
        // root plus the East, West, North and Up successors
        assert_eq!(solution.nodes_generated, 5);
    }

    #[test]
    fn test_single_down_move_crosses_layers() {
        let initial = apply(&Grid::solved(), Move::Up).unwrap();
        assert_eq!(initial.blank_coord(), (1, 2, 2));
        let solution = solved_from(initial);
        assert_eq!(solution.actions, vec![Move::Down]);
        assert_eq!(solution.f_values, vec![1]);
    }

    #[test]
    fn test_single_up_move_crosses_layers() {
        let goal = apply(&Grid::solved(), Move::Up).unwrap();
        let puzzle = Puzzle::new(Grid::solved(), goal).unwrap();
        let solution = puzzle.solve().into_solution().unwrap();
        assert_eq!(solution.actions, vec![Move::Up]);
        assert_eq!(solution.depth, 1);
    }

    #[test]
    fn test_scrambles_yield_well_formed_solutions() {
        let solved = Grid::solved();
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..5 {
            let (initial, walk) = scramble(&solved, 14, &mut rng);
            let solution = solved_from(initial);
            assert!(solution.depth as usize <= walk.len());
            assert_well_formed(&initial, &solved, &solution);
        }
    }

    #[test]
    fn test_solution_depth_matches_breadth_first_search() {
        let solved = Grid::solved();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..4 {
            let (initial, _) = scramble(&solved, 6, &mut rng);
            let solution = solved_from(initial);
            assert_eq!(solution.depth, breadth_first_depth(&initial, &solved));
        }
    }

    #[test]
    fn test_scrambled_goal_is_reached() {
        let solved = Grid::solved();
        let mut rng = StdRng::seed_from_u64(5);
        let (goal, _) = scramble(&solved, 10, &mut rng);
        let (initial, _) = scramble(&goal, 10, &mut rng);
        let puzzle = Puzzle::new(initial, goal).unwrap();
        let solution = puzzle.solve().into_solution().unwrap();
        assert_well_formed(&initial, &goal, &solution);
    }

    #[test]
    fn test_repeated_solves_are_identical() {
        let (initial, _) = scramble(&Grid::solved(), 16, &mut StdRng::seed_from_u64(99));
        let puzzle = Puzzle::new(initial, Grid::solved()).unwrap();
        assert_eq!(puzzle.solve(), puzzle.solve());
    }

    #[test]
    fn test_label_mismatch_is_rejected() {
        let mut cells = Grid::solved().key();
        cells[0] = 40;
        let initial = Grid::new(cells).unwrap();
        let error = Puzzle::new(initial, Grid::solved()).err();
        assert_eq!(
            error,
            Some(PuzzleError::LabelMismatch {
                only_initial: vec![40],
                only_goal: vec![1],
            })
        );
    }

    #[test]
    fn test_from_cells_reports_which_grid_is_malformed() {
        let mut goal = Grid::solved().key();
        goal[3] = BLANK;
        let error = Puzzle::from_cells(Grid::solved().key(), goal).err();
        assert_eq!(error, Some(PuzzleError::Goal(GridError::BlankCount { found: 2 })));
    }

    #[test]
    fn test_scrambles_are_solvable() {
        let solved = Grid::solved();
        let mut rng = StdRng::seed_from_u64(8);
        for moves in [0, 1, 2, 7, 40] {
            let (initial, _) = scramble(&solved, moves, &mut rng);
            let puzzle = Puzzle::new(initial, solved).unwrap();
            assert!(puzzle.is_solvable(), "scramble of {moves} moves reported unsolvable");
        }
    }

    #[test]
    fn test_swapping_two_tiles_is_unsolvable() {
        let mut cells = Grid::solved().key();
        cells.swap(coord_to_idx(0, 0, 0), coord_to_idx(0, 0, 1));
        let puzzle = Puzzle::from_cells(cells, Grid::solved().key()).unwrap();
        assert!(!puzzle.is_solvable());
    }

    #[test]
    fn test_initial_estimate_uses_goal() {
        let initial = apply(&Grid::solved(), Move::North).unwrap();
        let puzzle = Puzzle::new(initial, Grid::solved()).unwrap();
        assert_eq!(puzzle.initial_estimate(), 1);
        assert_eq!(describe_blank(&initial), "layer 2, row 1, col 2");
    }
}
