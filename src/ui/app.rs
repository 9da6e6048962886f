use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

use crate::config::AppConfig;
use crate::game::{GameState, LastMove, Player};
use crate::history::History;
use crate::search::MoveTask;

/// Match phase, driven by the controller: a move is either being animated,
/// the game is waiting for the side to move, or it has ended and the app
/// idles until reset or timeout.
enum Phase {
    Waiting,
    Falling { since: Instant },
    Finished { since: Instant },
}

pub struct App {
    history: History,
    config: AppConfig,
    phase: Phase,
    selected_column: usize,
    autopilot: bool,
    pending: Option<MoveTask>,
    engine_stuck: bool,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        App {
            history: History::new(GameState::new()),
            autopilot: config.ui.autopilot,
            config,
            phase: Phase::Waiting,
            selected_column: 3, // Start in middle
            pending: None,
            engine_stuck: false,
            message: None,
            should_quit: false,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
            self.tick();
        }
        Ok(())
    }

    /// The engine plays Yellow; with autopilot on it plays both sides.
    fn engine_to_move(&self) -> bool {
        self.autopilot || self.history.current().turn() == Player::Yellow
    }

    /// Advance the match: finish animations, harvest a completed search, or
    /// launch one when it is the engine's turn.
    fn tick(&mut self) {
        match self.phase {
            Phase::Falling { since } => {
                if since.elapsed() >= Duration::from_millis(self.config.ui.drop_time_ms) {
                    self.settle_move();
                }
            }
            Phase::Finished { since } => {
                if since.elapsed() >= Duration::from_secs(self.config.ui.idle_timeout_secs) {
                    self.should_quit = true;
                }
            }
            Phase::Waiting => {
                if self.history.current().finished() {
                    self.phase = Phase::Finished {
                        since: Instant::now(),
                    };
                    return;
                }
                if let Some(task) = self.pending.take() {
                    if task.is_finished() {
                        self.apply_engine_move(task);
                    } else {
                        self.pending = Some(task);
                    }
                } else if self.engine_to_move() && !self.engine_stuck {
                    let mut task = MoveTask::new(*self.history.current());
                    task.start(self.config.search.depth);
                    self.pending = Some(task);
                }
            }
        }
    }

    /// Join a completed search and append its move. The state goes into the
    /// history only after `wait` has fully returned.
    fn apply_engine_move(&mut self, task: MoveTask) {
        match task.wait(self.config.search.depth) {
            Some(next) => {
                self.history.add(next);
                self.phase = Phase::Falling {
                    since: Instant::now(),
                };
            }
            None => {
                // Only reachable on a board with no legal column; fatal for
                // this match but not for the app.
                self.engine_stuck = true;
                self.message = Some("Engine found no move. Press 'r' for a new game.".to_string());
            }
        }
    }

    /// The drop animation ended; decide where the match goes next.
    fn settle_move(&mut self) {
        let state = self.history.current();
        if state.finished() {
            self.message = Some(match state.last_move() {
                Some(mv) if state.winning_line().is_some() => {
                    format!("{} wins! Press 'r' to play again.", mv.player.name())
                }
                _ => "It's a draw! Press 'r' to play again.".to_string(),
            });
            self.phase = Phase::Finished {
                since: Instant::now(),
            };
        } else {
            self.phase = Phase::Waiting;
        }
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(self.config.ui.tick_rate_ms))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < crate::game::COLUMNS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_token();
            }
            KeyCode::Char('u') => {
                self.navigate(History::back, "Nothing to undo.");
            }
            KeyCode::Char('y') => {
                self.navigate(History::forward, "Nothing to redo.");
            }
            KeyCode::Char('a') => {
                self.autopilot = !self.autopilot;
                self.message = Some(if self.autopilot {
                    "Autopilot on: engine plays both sides.".to_string()
                } else {
                    "Autopilot off.".to_string()
                });
            }
            KeyCode::Char('r') => {
                self.reset();
            }
            _ => {}
        }
    }

    /// Drop a token in the selected column on behalf of the human.
    fn drop_token(&mut self) {
        if self.pending.is_some() || self.engine_to_move() {
            return;
        }
        if !matches!(self.phase, Phase::Waiting) {
            return;
        }
        let state = self.history.current();
        if state.finished() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }
        match state.make_move(self.selected_column) {
            Ok(next) => {
                self.history.add(next);
                self.phase = Phase::Falling {
                    since: Instant::now(),
                };
            }
            Err(e) => {
                self.message = Some(format!("{e}!"));
            }
        }
    }

    /// Move the history cursor. A search in flight cannot be cancelled, so
    /// navigation waits for it; appending after stepping back discards the
    /// abandoned branch.
    fn navigate(&mut self, step: fn(&mut History) -> bool, failure: &str) {
        if self.pending.is_some() {
            self.message = Some("Engine is thinking...".to_string());
            return;
        }
        if step(&mut self.history) {
            self.engine_stuck = false;
            self.phase = Phase::Waiting;
        } else {
            self.message = Some(failure.to_string());
        }
    }

    fn reset(&mut self) {
        if self.pending.is_some() {
            self.message = Some("Engine is thinking...".to_string());
            return;
        }
        self.history = History::new(GameState::new());
        self.phase = Phase::Waiting;
        self.selected_column = 3;
        self.engine_stuck = false;
        self.message = Some("New game started!".to_string());
    }

    /// The last move with its drop progress in [0, 1], while animating.
    fn falling(&self) -> Option<(LastMove, f64)> {
        if let Phase::Falling { since } = self.phase {
            let progress = since.elapsed().as_secs_f64()
                / Duration::from_millis(self.config.ui.drop_time_ms).as_secs_f64();
            self.history
                .current()
                .last_move()
                .map(|mv| (mv, progress.min(1.0)))
        } else {
            None
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        let mode = if self.autopilot {
            "Autopilot".to_string()
        } else {
            format!("You: Red  Engine: Yellow (depth {})", self.config.search.depth)
        };
        super::game_view::render(
            frame,
            self.history.current(),
            self.selected_column,
            self.falling(),
            &self.message,
            &mode,
            self.history.cursor(),
            self.history.len(),
        );
    }
}
