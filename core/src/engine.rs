use core::num::Saturating;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EngineState {
    Playing,
    Won,
}

impl EngineState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Playing
    }
}

/// One puzzle instance: the board, the tracked source position, the score and the timer.
///
/// Only a rotation can finish the puzzle. A board that starts out fully lit is still playable
/// until the first rotation.
///
/// The random stream is owned so that [`PlayEngine::restart`] keeps drawing from it.
#[derive(Clone, Debug)]
pub struct PlayEngine<R = SmallRng> {
    config: GameConfig,
    board: TileGrid,
    source: Coord2,
    score: Saturating<u32>,
    ticks: u32,
    elapsed: Saturating<u32>,
    state: EngineState,
    rng: R,
}

impl PlayEngine<SmallRng> {
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PlayEngine<R> {
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self> {
        let config = config.sanitized();
        let mut engine = Self {
            config,
            board: TileGrid::new(config.size),
            source: config.source,
            score: Saturating(0),
            ticks: 0,
            elapsed: Saturating(0),
            state: EngineState::default(),
            rng,
        };
        engine.generate()?;
        Ok(engine)
    }

    /// Starts play on a prepared board. A source flag already on `source` is kept, otherwise the
    /// board must not carry one.
    pub fn from_grid(mut board: TileGrid, source: Coord2, rng: R) -> Result<Self> {
        let source = board.validate_coords(source)?;
        match (board.source_count(), board[source].is_source()) {
            (0, _) => designate_source(&mut board, source)?,
            (1, true) => {}
            _ => return Err(GameError::SourceAlreadyPlaced),
        }

        let config = GameConfig::new(board.size()).with_source(source);
        let mut engine = Self {
            config,
            board,
            source,
            score: Saturating(0),
            ticks: 0,
            elapsed: Saturating(0),
            state: EngineState::default(),
            rng,
        };
        engine.refresh()?;
        Ok(engine)
    }

    /// Throws the board away and generates a new one of the same configuration.
    pub fn restart(&mut self) -> Result<()> {
        log::debug!("Restarting {}x{} puzzle", self.config.size.0, self.config.size.1);
        self.generate()
    }

    /// Turns the tile at `coords` a quarter clockwise and counts it towards the score.
    pub fn rotate(&mut self, coords: Coord2) -> Result<RotateOutcome> {
        let coords = self.board.validate_coords(coords)?;
        self.check_playing()?;

        self.board[coords].rotate_clockwise();
        self.score += 1;
        self.refresh()?;

        if self.is_won() {
            log::info!("Puzzle solved with score {}", self.score);
            self.state = EngineState::Won;
            Ok(RotateOutcome::Won)
        } else {
            Ok(RotateOutcome::Rotated)
        }
    }

    /// Moves the source one tile along an open stub, but only onto a tile that is already lit.
    pub fn move_source(&mut self, direction: Direction) -> Result<MoveOutcome> {
        self.check_playing()?;

        let from = self.source;
        let target = self
            .board
            .neighbor(from, direction)
            .filter(|&to| self.board[from].has(direction) && self.board[to].is_lit());
        let Some(to) = target else {
            log::debug!("Source move {:?} from {:?} rejected", direction, from);
            return Ok(MoveOutcome::Rejected);
        };

        self.board[from].toggle_source();
        self.board[to].toggle_source();
        self.source = to;
        self.refresh()?;
        Ok(MoveOutcome::Moved)
    }

    /// Advances the clock by one tick; every `ticks_per_second` ticks add a unit of elapsed time.
    pub fn on_tick(&mut self) {
        if self.state.is_finished() {
            return;
        }
        self.ticks = self.ticks.wrapping_add(1);
        if self.ticks % self.config.ticks_per_second == 0 {
            self.elapsed += 1;
        }
    }

    fn generate(&mut self) -> Result<()> {
        let layout = SpanningTreeGenerator.generate(&self.config, &mut self.rng)?;

        self.board = layout.board;
        self.source = self.config.source;
        self.score = Saturating(0);
        self.ticks = 0;
        self.elapsed = Saturating(0);
        self.state = EngineState::Playing;
        self.refresh()?;
        Ok(())
    }

    fn refresh(&mut self) -> Result<LitSet> {
        propagate(&mut self.board, self.source)
    }
}

impl<R> PlayEngine<R> {
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_won(&self) -> bool {
        self.board.all_lit()
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn board(&self) -> &TileGrid {
        &self.board
    }

    pub fn tile_at(&self, coords: Coord2) -> Result<Tile> {
        let coords = self.board.validate_coords(coords)?;
        Ok(self.board[coords])
    }

    pub fn source(&self) -> Coord2 {
        self.source
    }

    /// Number of rotations made on the current board.
    pub fn score(&self) -> u32 {
        self.score.0
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn elapsed(&self) -> u32 {
        self.elapsed.0
    }

    pub fn lit_tiles(&self) -> LitSet {
        self.board
            .iter_coords()
            .filter(|&coords| self.board[coords].is_lit())
            .collect()
    }

    /// Manhattan distance from the current source, used by renderers to shade lit wire.
    pub fn source_distance(&self, coords: Coord2) -> TileCount {
        manhattan(coords, self.source)
    }

    fn check_playing(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
