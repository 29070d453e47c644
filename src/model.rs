//! Core data model for the minesweeper board.
//! Grid generation, the reveal cascade and flag tracking all live here;
//! the components layer only dispatches `GameAction`s.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::rc::Rc;
use yew::Reducible;

/// The eight offsets around a cell, centre excluded.
const NEIGHBOUR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    pub rows: u32,
    pub cols: u32,
}

impl GridSize {
    pub fn area(self) -> u32 {
        self.rows * self.cols
    }

    pub fn contains(self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.cols && (y as u32) < self.rows
    }

    /// Row-major index of (x, y); x indexes columns, y indexes rows.
    pub fn index(self, x: u32, y: u32) -> usize {
        (y * self.cols + x) as usize
    }

    /// In-bounds 8-neighbourhood of (x, y). Out-of-bounds positions are
    /// silently skipped.
    pub fn neighbours(self, x: u32, y: u32) -> impl Iterator<Item = (u32, u32)> {
        NEIGHBOUR_OFFSETS.iter().filter_map(move |&(dx, dy)| {
            let nx = x as i32 + dx;
            let ny = y as i32 + dy;
            if self.contains(nx, ny) {
                Some((nx as u32, ny as u32))
            } else {
                None
            }
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Number of mines in the 8-neighbourhood, 0..=8.
    pub adjacent_mines: u8,
    /// Set at generation time, never moved afterwards.
    pub is_mine: bool,
    pub is_flagged: bool,
    /// Monotonic; a revealed cell never reverts.
    pub is_revealed: bool,
    /// True only for the mine that ended the game.
    pub is_exploded: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub grid_size: GridSize,
    /// Row-major cells; length = rows * cols.
    pub cells: Vec<Cell>,
    /// Number of mines on the board (after clamping to area - 1).
    pub mine_count: u32,
    /// Flags currently planted. Informational only; never validated
    /// against true mine positions.
    pub flagged_count: u32,
    pub lost: bool,
}

impl GameState {
    /// Fresh board with `mine_count` mines placed uniformly at random.
    /// Requires rows > 0 and cols > 0; `mine_count` is clamped to
    /// area - 1 so placement always terminates.
    pub fn new(grid_size: GridSize, mine_count: u32) -> Self {
        Self::with_rng(grid_size, mine_count, &mut rand::thread_rng())
    }

    pub fn with_rng(grid_size: GridSize, mine_count: u32, rng: &mut impl Rng) -> Self {
        let mine_count = mine_count.min(grid_size.area().saturating_sub(1));
        let mut state = Self {
            grid_size,
            cells: vec![Cell::default(); grid_size.area() as usize],
            mine_count,
            flagged_count: 0,
            lost: false,
        };
        // Rejection sampling: re-roll occupied cells until enough distinct
        // mines exist. Cheap while mine_count stays well below the area.
        let mut placed = 0;
        while placed < mine_count {
            let x = rng.gen_range(0..grid_size.cols);
            let y = rng.gen_range(0..grid_size.rows);
            if state.cells[grid_size.index(x, y)].is_mine {
                continue;
            }
            state.place_mine(x, y);
            placed += 1;
        }
        state
    }

    /// Mines minus flags for the readout. Goes negative when the player
    /// over-flags.
    pub fn remaining_mines(&self) -> i32 {
        self.mine_count as i32 - self.flagged_count as i32
    }

    fn place_mine(&mut self, x: u32, y: u32) {
        let size = self.grid_size;
        self.cells[size.index(x, y)].is_mine = true;
        // Increment-only, so counts end up correct regardless of the
        // order mines are placed in.
        for (nx, ny) in size.neighbours(x, y) {
            self.cells[size.index(nx, ny)].adjacent_mines += 1;
        }
    }

    fn reveal_at(&mut self, x: u32, y: u32) {
        let size = self.grid_size;
        let idx = size.index(x, y);
        if self.cells[idx].is_revealed || self.cells[idx].is_flagged {
            return;
        }
        self.cells[idx].is_revealed = true;

        if self.cells[idx].is_mine {
            self.cells[idx].is_exploded = true;
            self.lost = true;
            // Show the player the whole board, flags included.
            for cell in &mut self.cells {
                cell.is_revealed = true;
            }
            return;
        }
        if self.cells[idx].adjacent_mines != 0 {
            return;
        }

        // Flood the connected zero region and its numbered border with an
        // explicit work queue; the revealed guard keeps each cell to one
        // visit. A zero cell never borders a mine, so the cascade cannot
        // detonate anything.
        let mut queue: VecDeque<(u32, u32)> = VecDeque::new();
        queue.push_back((x, y));
        while let Some((cx, cy)) = queue.pop_front() {
            for (nx, ny) in size.neighbours(cx, cy) {
                let cell = &mut self.cells[size.index(nx, ny)];
                if cell.is_revealed || cell.is_flagged {
                    continue;
                }
                cell.is_revealed = true;
                if cell.adjacent_mines == 0 {
                    queue.push_back((nx, ny));
                }
            }
        }
    }
}

#[derive(Clone, Debug)]
pub enum GameAction {
    Reveal { x: u32, y: u32 },
    ToggleFlag { x: u32, y: u32 },
    Restart,
}

impl Reducible for GameState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use GameAction::*;
        let mut new = (*self).clone();
        match action {
            Reveal { x, y } => {
                // Input gate: the board is inert between a loss and the
                // restart that follows it.
                if new.lost || !new.grid_size.contains(x as i32, y as i32) {
                    return self;
                }
                new.reveal_at(x, y);
            }
            ToggleFlag { x, y } => {
                if new.lost || !new.grid_size.contains(x as i32, y as i32) {
                    return self;
                }
                let idx = new.grid_size.index(x, y);
                if new.cells[idx].is_revealed {
                    return self;
                }
                let flagged = {
                    let cell = &mut new.cells[idx];
                    cell.is_flagged = !cell.is_flagged;
                    cell.is_flagged
                };
                if flagged {
                    new.flagged_count += 1;
                } else {
                    new.flagged_count = new.flagged_count.saturating_sub(1);
                }
            }
            Restart => {
                new = GameState::new(new.grid_size, new.mine_count);
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
use proptest::prelude::*;

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Board with no random placement; mines go exactly where the test
    /// puts them.
    fn board_with_mines(rows: u32, cols: u32, mines: &[(u32, u32)]) -> GameState {
        let grid_size = GridSize { rows, cols };
        let mut state = GameState {
            grid_size,
            cells: vec![Cell::default(); grid_size.area() as usize],
            mine_count: mines.len() as u32,
            flagged_count: 0,
            lost: false,
        };
        for &(x, y) in mines {
            state.place_mine(x, y);
        }
        state
    }

    fn revealed_count(state: &GameState) -> usize {
        state.cells.iter().filter(|c| c.is_revealed).count()
    }

    #[test]
    fn generation_places_exact_mine_count() {
        let mut rng = StdRng::seed_from_u64(7);
        let state = GameState::with_rng(GridSize { rows: 9, cols: 9 }, 10, &mut rng);
        assert_eq!(state.cells.iter().filter(|c| c.is_mine).count(), 10);
        assert_eq!(state.mine_count, 10);
    }

    #[test]
    fn generation_clamps_excessive_mine_count() {
        let mut rng = StdRng::seed_from_u64(7);
        let state = GameState::with_rng(GridSize { rows: 3, cols: 3 }, 20, &mut rng);
        assert_eq!(state.mine_count, 8);
        assert_eq!(state.cells.iter().filter(|c| c.is_mine).count(), 8);
    }

    #[test]
    fn neighbourhood_is_clipped_at_edges() {
        let size = GridSize { rows: 4, cols: 3 };
        assert_eq!(size.neighbours(0, 0).count(), 3);
        assert_eq!(size.neighbours(2, 0).count(), 3);
        assert_eq!(size.neighbours(1, 1).count(), 8);
        assert_eq!(size.neighbours(0, 2).count(), 5);
    }

    #[test]
    fn single_numbered_reveal_does_not_cascade() {
        // Centre mine gives every other cell a count of 1, so a corner
        // click reveals exactly that corner.
        let mut state = board_with_mines(3, 3, &[(1, 1)]);
        state.reveal_at(0, 0);
        assert_eq!(revealed_count(&state), 1);
        assert!(state.cells[state.grid_size.index(0, 0)].is_revealed);
        assert!(!state.lost);
    }

    #[test]
    fn zero_reveal_cascades_over_whole_safe_region() {
        let mut state = board_with_mines(5, 5, &[(4, 4)]);
        state.reveal_at(0, 0);
        for (i, cell) in state.cells.iter().enumerate() {
            if cell.is_mine {
                assert!(!cell.is_revealed, "mine at index {} was revealed", i);
            } else {
                assert!(cell.is_revealed, "safe cell at index {} stayed hidden", i);
            }
        }
        assert!(!state.lost);
    }

    #[test]
    fn cascade_skips_flagged_cells() {
        let mut state = board_with_mines(5, 5, &[(4, 4)]);
        state.cells[state.grid_size.index(2, 2)].is_flagged = true;
        state.reveal_at(0, 0);
        assert!(!state.cells[state.grid_size.index(2, 2)].is_revealed);
        // Everything else safe is still reached around the flag.
        let hidden_safe = state
            .cells
            .iter()
            .filter(|c| !c.is_mine && !c.is_revealed)
            .count();
        assert_eq!(hidden_safe, 1);
    }

    #[test]
    fn revealing_flagged_cell_is_noop() {
        let mut state = board_with_mines(3, 3, &[(2, 2)]);
        state.cells[state.grid_size.index(2, 2)].is_flagged = true;
        state.reveal_at(2, 2);
        assert_eq!(revealed_count(&state), 0);
        assert!(!state.lost);
    }

    #[test]
    fn revealing_mine_loses_and_shows_whole_board() {
        let mut state = board_with_mines(5, 5, &[(2, 2), (4, 4)]);
        state.cells[state.grid_size.index(0, 0)].is_flagged = true;
        state.reveal_at(2, 2);
        assert!(state.lost);
        assert_eq!(revealed_count(&state), 25);
        let exploded: Vec<usize> = state
            .cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_exploded)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(exploded, vec![state.grid_size.index(2, 2)]);
    }

    #[test]
    fn flag_toggle_tracks_counter_and_goes_negative() {
        let state = Rc::new(board_with_mines(3, 3, &[(1, 1)]));
        let state = state.reduce(GameAction::ToggleFlag { x: 0, y: 0 });
        let state = state.reduce(GameAction::ToggleFlag { x: 2, y: 0 });
        let state = state.reduce(GameAction::ToggleFlag { x: 0, y: 2 });
        assert_eq!(state.flagged_count, 3);
        assert_eq!(state.remaining_mines(), -2);
        let state = state.reduce(GameAction::ToggleFlag { x: 0, y: 0 });
        assert_eq!(state.flagged_count, 2);
        assert_eq!(state.remaining_mines(), -1);
    }

    #[test]
    fn flagging_revealed_cell_is_noop() {
        let mut base = board_with_mines(3, 3, &[(1, 1)]);
        base.reveal_at(0, 0);
        let state = Rc::new(base);
        let next = state.clone().reduce(GameAction::ToggleFlag { x: 0, y: 0 });
        assert!(Rc::ptr_eq(&state, &next));
        assert_eq!(next.flagged_count, 0);
    }

    #[test]
    fn actions_are_ignored_after_loss() {
        let mut base = board_with_mines(3, 3, &[(1, 1)]);
        base.reveal_at(1, 1);
        assert!(base.lost);
        let state = Rc::new(base);
        let next = state.clone().reduce(GameAction::Reveal { x: 0, y: 0 });
        assert!(Rc::ptr_eq(&state, &next));
        let next = state.clone().reduce(GameAction::ToggleFlag { x: 0, y: 0 });
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn out_of_bounds_actions_are_ignored() {
        let state = Rc::new(board_with_mines(3, 3, &[(1, 1)]));
        let next = state.clone().reduce(GameAction::Reveal { x: 3, y: 0 });
        assert!(Rc::ptr_eq(&state, &next));
        let next = state.clone().reduce(GameAction::ToggleFlag { x: 0, y: 7 });
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn restart_builds_fresh_board() {
        let mut base = board_with_mines(4, 4, &[(0, 0), (3, 3)]);
        base.cells[base.grid_size.index(1, 0)].is_flagged = true;
        base.flagged_count = 1;
        base.reveal_at(0, 0);
        assert!(base.lost);
        let state = Rc::new(base).reduce(GameAction::Restart);
        assert!(!state.lost);
        assert_eq!(state.flagged_count, 0);
        assert_eq!(revealed_count(&state), 0);
        assert_eq!(state.cells.iter().filter(|c| c.is_mine).count(), 2);
    }
}
