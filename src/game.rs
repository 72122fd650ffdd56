//! Game session management
//!
//! Tracks whose turn it is, which sides are driven by the AI and when the game
//! ends. Human and AI moves go through the same placement path. The AI runs on
//! a worker thread with its own copy of the board; the result comes back over
//! a channel and is polled by the caller.

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::board::{Board, Player, Pos};
use crate::engine::{AIEngine, EngineConfig, MoveResult, DEFAULT_DEPTH};
use crate::error::{EngineError, MoveError};
use crate::rules::{check_win, winning_line};

/// Who controls each side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Two humans sharing the board
    HumanHuman,
    /// Human plays `human`, the AI plays the other side
    HumanAi { human: Player },
    /// The AI plays both sides
    AiAi,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::HumanAi {
            human: Player::Black,
        }
    }
}

/// Session settings, changed from the settings panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    pub mode: GameMode,
    pub depth: u8,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            depth: DEFAULT_DEPTH,
        }
    }
}

impl GameSettings {
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig { depth: self.depth }
    }
}

/// How the game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameResult {
    Win { winner: Player, line: Vec<Pos> },
    Draw,
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub settings: GameSettings,
    pub current: Player,
    pub game_over: Option<GameResult>,
    pub move_count: usize,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub message: Option<String>,
}

impl GameState {
    /// Start a game. Black always moves first.
    pub fn new(settings: GameSettings) -> Result<Self, EngineError> {
        settings.engine_config().validate()?;
        Ok(Self {
            board: Board::new(),
            settings,
            current: Player::Black,
            game_over: None,
            move_count: 0,
            last_ai_result: None,
            ai_state: AiState::Idle,
            message: None,
        })
    }

    /// Clear the board and start over with the current settings
    pub fn new_game(&mut self) {
        self.board.reset();
        self.current = Player::Black;
        self.game_over = None;
        self.move_count = 0;
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.message = None;
        debug!(mode = ?self.settings.mode, depth = self.settings.depth, "new game");
    }

    /// Apply new settings and restart
    pub fn apply_settings(&mut self, settings: GameSettings) -> Result<(), EngineError> {
        settings.engine_config().validate()?;
        self.settings = settings;
        self.new_game();
        Ok(())
    }

    /// Check if it's a human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.settings.mode {
            GameMode::HumanHuman => true,
            GameMode::HumanAi { human } => self.current == human,
            GameMode::AiAi => false,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        self.game_over.is_none() && !self.is_human_turn()
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt to place a stone for the human whose turn it is
    pub fn try_place_stone(&mut self, row: i32, col: i32) -> Result<(), MoveError> {
        if self.game_over.is_some() {
            return Err(MoveError::GameOver);
        }
        if self.is_ai_thinking() {
            return Err(MoveError::AiThinking);
        }
        if !self.is_human_turn() {
            return Err(MoveError::NotYourTurn);
        }
        let pos = Pos::try_new(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        self.execute_move(pos)
    }

    /// Place a stone for the side to move, then check for the end of the game
    fn execute_move(&mut self, pos: Pos) -> Result<(), MoveError> {
        let player = self.current;
        if !self.board.place_at(pos, player) {
            return Err(MoveError::Occupied(pos));
        }
        self.move_count += 1;
        self.message = None;
        debug!(?player, ?pos, move_count = self.move_count, "stone placed");

        if check_win(&self.board, pos, player) {
            let line = winning_line(&self.board, pos, player).unwrap_or_else(|| vec![pos]);
            info!(?player, move_count = self.move_count, "game won");
            self.game_over = Some(GameResult::Win {
                winner: player,
                line,
            });
            return Ok(());
        }

        if self.board.is_full() {
            info!(move_count = self.move_count, "game drawn");
            self.game_over = Some(GameResult::Draw);
            return Ok(());
        }

        self.current = player.opponent();
        Ok(())
    }

    /// Apply an engine result for the side to move.
    ///
    /// A result without a move means the board is full, which ends the game
    /// in a draw.
    pub fn apply_ai_move(&mut self, result: MoveResult) -> Result<(), MoveError> {
        if self.game_over.is_some() {
            return Err(MoveError::GameOver);
        }
        let best_move = result.best_move;
        self.last_ai_result = Some(result);

        match best_move {
            Some(pos) => self.execute_move(pos),
            None => {
                info!(move_count = self.move_count, "no move left, game drawn");
                self.game_over = Some(GameResult::Draw);
                Ok(())
            }
        }
    }

    /// Run the AI for the side to move on this thread and apply its move
    pub fn play_ai_turn(&mut self) -> Result<(), MoveError> {
        if !self.is_ai_turn() {
            return Err(MoveError::NotYourTurn);
        }
        let mut engine = self.engine();
        let result = engine.get_move_with_stats(&self.board, self.current);
        self.apply_ai_move(result)
    }

    /// Start AI thinking on a worker thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() {
            return;
        }

        let board = self.board.clone();
        let player = self.current;
        let mut engine = self.engine();
        let (tx, rx) = channel();

        thread::spawn(move || {
            let result = engine.get_move_with_stats(&board, player);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking and apply its move
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(result) => result,
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    warn!("AI worker exited without a result");
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => return,
        };

        self.ai_state = AiState::Idle;
        if let Err(err) = self.apply_ai_move(result) {
            warn!(%err, "AI move rejected");
            self.message = Some(err.to_string());
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Engine for the current settings. `settings` is public, so a depth set
    /// directly on it is checked again here.
    fn engine(&self) -> AIEngine {
        AIEngine::with_config(self.settings.engine_config()).unwrap_or_else(|err| {
            warn!(%err, depth = DEFAULT_DEPTH, "invalid engine settings, using default depth");
            AIEngine::default()
        })
    }
}
