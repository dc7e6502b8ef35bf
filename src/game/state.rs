use anyhow::Result;
use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::game::grid::generate_with_rng;
use crate::game::systems::try_move_dir;
use crate::game::types::{Direction, Grid, Player, Position};

/// Where a game sits in its lifecycle. `Solved` is terminal until the host
/// restarts, which regenerates the maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Ready,
    Solved,
}

/// One maze run: the generated grid, the player, and the lifecycle phase.
///
/// Grid and player are created together and replaced together on restart;
/// the player mutates only through validated moves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub grid: Grid,
    pub player: Player,
    pub phase: Phase,
    pub moves: u32,
}

impl GameState {
    /// Create a new game with a freshly generated `rows` x `cols` maze.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        Self::with_rng(rows, cols, &mut rand::rng())
    }

    /// Create a new game using the given random source.
    pub fn with_rng<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Result<Self> {
        let grid = generate_with_rng(rows, cols, rng)?;
        let player = Player::new(grid.start());
        // A 1x1 maze starts on the goal.
        let phase = if grid.is_goal(player.pos) {
            Phase::Solved
        } else {
            Phase::Ready
        };
        info!(
            "new {}x{} maze, start {:?}, goal {:?}",
            grid.rows(),
            grid.cols(),
            grid.start(),
            grid.goal()
        );
        Ok(Self {
            grid,
            player,
            phase,
            moves: 0,
        })
    }

    /// Move the player one cell in `direction`, if the grid allows it.
    ///
    /// Rejected moves leave everything unchanged. An accepted move onto the
    /// goal flips the phase to [`Phase::Solved`]; further moves are ignored
    /// until a restart. Returns the (possibly unchanged) player position.
    pub fn apply_move(&mut self, direction: Direction) -> Position {
        if self.phase == Phase::Solved {
            return self.player.pos;
        }

        let next = try_move_dir(&self.grid, self.player.pos, direction);
        if next != self.player.pos {
            self.player.pos = next;
            self.moves += 1;
            if self.grid.is_goal(next) {
                self.phase = Phase::Solved;
                info!("maze solved in {} moves", self.moves);
            }
        }
        next
    }

    pub fn is_solved(&self) -> bool {
        self.phase == Phase::Solved
    }

    /// Throw away the current grid and player and generate a new maze of the
    /// same dimensions.
    pub fn restart(&mut self) -> Result<()> {
        self.restart_with_rng(&mut rand::rng())
    }

    /// [`restart`](Self::restart) using the given random source.
    pub fn restart_with_rng<R: Rng>(&mut self, rng: &mut R) -> Result<()> {
        *self = Self::with_rng(self.grid.rows(), self.grid.cols(), rng)?;
        Ok(())
    }
}
