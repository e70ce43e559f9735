use std::time::Duration;

use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::bot_controller::{MoveStrategy, decide_move};
use super::broadcaster::GameBroadcaster;
use super::difficulty::Difficulty;
use super::error::{GameError, IllegalMoveReason};
use super::settings::TicTacToeSessionSettings;
use super::types::{GameStatus, Player, Position, WinningLine};

/// One human-vs-computer game: owns the board and drives the turn order.
///
/// The human always moves first. Every accepted human move that does not end the
/// game is answered synchronously by the engine before `on_human_select` returns.
pub struct TicTacToeGameState<B: GameBroadcaster> {
    board: Board,
    difficulty: Difficulty,
    current_player: Player,
    status: GameStatus,
    last_move: Option<Position>,
    computer_move_delay: Duration,
    rng: SessionRng,
    broadcaster: B,
}

impl<B: GameBroadcaster> TicTacToeGameState<B> {
    pub fn new(settings: &TicTacToeSessionSettings, broadcaster: B) -> Self {
        let rng = match settings.seed {
            Some(seed) => SessionRng::new(seed),
            None => SessionRng::from_random(),
        };
        log!(
            "New game: difficulty={}, seed={}",
            settings.difficulty,
            rng.seed()
        );

        Self {
            board: Board::new(),
            difficulty: settings.difficulty,
            current_player: Player::Human,
            status: GameStatus::InProgress,
            last_move: None,
            computer_move_delay: settings.computer_move_delay,
            rng,
            broadcaster,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.board.winning_line()
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn broadcaster(&self) -> &B {
        &self.broadcaster
    }

    pub fn broadcaster_mut(&mut self) -> &mut B {
        &mut self.broadcaster
    }

    pub fn on_human_select(&mut self, row: usize, col: usize) -> Result<(), GameError> {
        let position = Position::new(row, col);
        if self.status.is_over() {
            return Err(GameError::illegal_move(position, IllegalMoveReason::GameOver));
        }
        if self.current_player != Player::Human {
            return Err(GameError::illegal_move(position, IllegalMoveReason::NotYourTurn));
        }

        self.board.place(row, col, Player::Human)?;
        self.last_move = Some(position);
        log!("Human played {}", position);

        if self.check_game_over() {
            return Ok(());
        }

        self.current_player = Player::Computer;
        if !self.computer_move_delay.is_zero() {
            std::thread::sleep(self.computer_move_delay);
        }
        self.play_computer_turn()
    }

    fn play_computer_turn(&mut self) -> Result<(), GameError> {
        let decision = decide_move(&mut self.board, self.difficulty, &mut self.rng)?;
        let position = decision.position;
        self.board.place(position.row, position.col, Player::Computer)?;
        self.last_move = Some(position);
        debug_assert_eq!(
            self.board.count_of(Player::Human),
            self.board.count_of(Player::Computer)
        );

        match decision.strategy {
            MoveStrategy::Random => log!("Computer played {} (random)", position),
            MoveStrategy::Search => log!(
                "Computer played {} (search score {})",
                position,
                decision.score.unwrap_or_default()
            ),
        }
        self.broadcaster.on_computer_move_ready(position);

        if !self.check_game_over() {
            self.current_player = Player::Human;
        }
        Ok(())
    }

    fn check_game_over(&mut self) -> bool {
        self.status = self.board.winner();
        match self.status.outcome() {
            Some(outcome) => {
                log!("Game over: {:?} after {} moves", outcome, self.board.move_count());
                self.broadcaster.on_game_over(outcome);
                true
            }
            None => false,
        }
    }

    pub fn on_reset(&mut self) {
        self.board.reset();
        self.status = GameStatus::InProgress;
        self.current_player = Player::Human;
        self.last_move = None;
        log!("Game reset, difficulty={}", self.difficulty);
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if difficulty != self.difficulty {
            log!("Difficulty changed: {} -> {}", self.difficulty, difficulty);
        }
        self.difficulty = difficulty;
    }

    #[cfg(test)]
    fn with_board(board: Board, settings: &TicTacToeSessionSettings, broadcaster: B) -> Self {
        let mut state = Self::new(settings, broadcaster);
        state.board = board;
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Outcome;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        ComputerMove(Position),
        GameOver(Outcome),
    }

    #[derive(Default)]
    struct RecordingBroadcaster {
        events: Vec<Event>,
    }

    impl GameBroadcaster for RecordingBroadcaster {
        fn on_computer_move_ready(&mut self, position: Position) {
            self.events.push(Event::ComputerMove(position));
        }

        fn on_game_over(&mut self, outcome: Outcome) {
            self.events.push(Event::GameOver(outcome));
        }
    }

    fn settings(difficulty: Difficulty) -> TicTacToeSessionSettings {
        TicTacToeSessionSettings {
            difficulty,
            computer_move_delay: Duration::ZERO,
            seed: Some(42),
        }
    }

    fn create_game(difficulty: Difficulty) -> TicTacToeGameState<RecordingBroadcaster> {
        TicTacToeGameState::new(&settings(difficulty), RecordingBroadcaster::default())
    }

    fn play_first_free_cells(game: &mut TicTacToeGameState<RecordingBroadcaster>) {
        while !game.status().is_over() {
            let position = game.board().available_cells()[0];
            game.on_human_select(position.row, position.col).unwrap();
        }
    }

    #[test]
    fn test_human_move_is_answered() {
        let mut game = create_game(Difficulty::Impossible);
        game.on_human_select(1, 1).unwrap();

        assert_eq!(game.board().move_count(), 2);
        assert_eq!(game.current_player(), Player::Human);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.broadcaster().events.len(), 1);
        let Event::ComputerMove(reply) = game.broadcaster().events[0].clone() else {
            panic!("expected a computer move");
        };
        assert_eq!(game.last_move(), Some(reply));
        assert_ne!(reply, Position::new(1, 1));
    }

    #[test]
    fn test_occupied_cell_is_rejected_without_consuming_turn() {
        let mut game = create_game(Difficulty::Impossible);
        game.on_human_select(0, 0).unwrap();
        let before = game.board().clone();
        let events_before = game.broadcaster().events.len();

        let result = game.on_human_select(0, 0);
        assert_eq!(
            result,
            Err(GameError::illegal_move(Position::new(0, 0), IllegalMoveReason::Occupied))
        );
        assert_eq!(game.board(), &before);
        assert_eq!(game.current_player(), Player::Human);
        assert_eq!(game.broadcaster().events.len(), events_before);
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let mut game = create_game(Difficulty::Impossible);
        let result = game.on_human_select(0, 3);
        assert!(matches!(
            result,
            Err(GameError::IllegalMove { reason: IllegalMoveReason::OutOfBounds, .. })
        ));
        assert_eq!(game.board().move_count(), 0);
    }

    #[test]
    fn test_impossible_game_never_ends_in_human_win() {
        let mut game = create_game(Difficulty::Impossible);
        play_first_free_cells(&mut game);

        assert_ne!(game.status(), GameStatus::HumanWon);
        let game_overs = game
            .broadcaster()
            .events
            .iter()
            .filter(|event| matches!(event, Event::GameOver(_)))
            .count();
        assert_eq!(game_overs, 1);
        assert_eq!(
            game.broadcaster().events.last(),
            game.status().outcome().map(Event::GameOver).as_ref()
        );
    }

    #[test]
    fn test_moves_after_game_over_are_rejected() {
        let mut game = create_game(Difficulty::Impossible);
        play_first_free_cells(&mut game);
        let before = game.board().clone();

        let free = game.board().available_cells().first().copied().unwrap_or(Position::new(0, 0));
        let result = game.on_human_select(free.row, free.col);
        assert!(matches!(
            result,
            Err(GameError::IllegalMove { reason: IllegalMoveReason::GameOver, .. })
        ));
        assert_eq!(game.board(), &before);
    }

    #[test]
    fn test_human_winning_move_ends_game_without_reply() {
        let board: Board = "XX. / OO. / ...".parse().unwrap();
        let mut game = TicTacToeGameState::with_board(
            board,
            &settings(Difficulty::Easy),
            RecordingBroadcaster::default(),
        );

        game.on_human_select(0, 2).unwrap();
        assert_eq!(game.status(), GameStatus::HumanWon);
        assert_eq!(game.broadcaster().events, vec![Event::GameOver(Outcome::HumanWin)]);
        assert_eq!(game.winning_line().map(|line| line.player), Some(Player::Human));
    }

    #[test]
    fn test_computer_winning_reply_ends_game() {
        let board: Board = "X.. / OO. / X..".parse().unwrap();
        let mut game = TicTacToeGameState::with_board(
            board,
            &settings(Difficulty::Impossible),
            RecordingBroadcaster::default(),
        );

        game.on_human_select(2, 2).unwrap();
        assert_eq!(game.status(), GameStatus::ComputerWon);
        assert_eq!(
            game.broadcaster().events,
            vec![
                Event::ComputerMove(Position::new(1, 2)),
                Event::GameOver(Outcome::ComputerWin),
            ]
        );
    }

    #[test]
    fn test_reset_starts_fresh_and_keeps_difficulty() {
        let mut game = create_game(Difficulty::Hard);
        play_first_free_cells(&mut game);

        game.on_reset();
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.current_player(), Player::Human);
        assert_eq!(game.last_move(), None);
        assert_eq!(game.difficulty(), Difficulty::Hard);
        assert!(game.on_human_select(2, 2).is_ok());
    }

    #[test]
    fn test_set_difficulty_applies_to_next_move() {
        let board: Board = "XX. / OO. / ...".parse().unwrap();
        let mut game = TicTacToeGameState::with_board(
            board,
            &settings(Difficulty::Easy),
            RecordingBroadcaster::default(),
        );
        game.set_difficulty(Difficulty::Impossible);
        assert_eq!(game.difficulty(), Difficulty::Impossible);

        game.on_human_select(2, 2).unwrap();
        assert_eq!(game.status(), GameStatus::ComputerWon);
        assert_eq!(game.last_move(), Some(Position::new(1, 2)));
    }

    #[test]
    fn test_marks_alternate_in_seeded_games() {
        let mut human_rng = SessionRng::new(2024);
        for difficulty in Difficulty::ALL {
            for seed in 0..100 {
                let seeded = TicTacToeSessionSettings {
                    seed: Some(seed),
                    ..settings(difficulty)
                };
                let mut game = TicTacToeGameState::new(&seeded, RecordingBroadcaster::default());

                while !game.status().is_over() {
                    let available = game.board().available_cells();
                    let position = available[human_rng.random_range(0..available.len())];
                    game.on_human_select(position.row, position.col).unwrap();

                    let humans = game.board().count_of(Player::Human);
                    let computers = game.board().count_of(Player::Computer);
                    assert!(
                        humans == computers || humans == computers + 1,
                        "{} seed {}: {} human marks, {} computer marks\n{}",
                        difficulty,
                        seed,
                        humans,
                        computers,
                        game.board()
                    );
                    assert_eq!(game.board().move_count(), humans + computers);
                }

                if difficulty == Difficulty::Impossible {
                    assert_ne!(game.status(), GameStatus::HumanWon, "seed {}", seed);
                }
            }
        }
    }

    #[test]
    fn test_same_seed_replays_same_game() {
        let mut first = create_game(Difficulty::Easy);
        let mut second = create_game(Difficulty::Easy);
        play_first_free_cells(&mut first);
        play_first_free_cells(&mut second);

        assert_eq!(first.seed(), second.seed());
        assert_eq!(first.board(), second.board());
        assert_eq!(first.broadcaster().events, second.broadcaster().events);
    }
}
