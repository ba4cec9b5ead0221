// Game engine API boundary. Front ends (the TUI, scripted drivers, tests)
// drive a round through this trait and never reach into `Game` directly.

use crate::game::{ActionError, Game, HistoryEntry, Phase, Transition};
use crate::player::{Participant, Seat};

pub trait GameEngine {
    // Round lifecycle
    fn next_round(&mut self) -> Result<Transition, ActionError>;
    fn restart(&mut self) -> Result<Transition, ActionError>;

    // Player actions
    fn open(&mut self) -> Result<Transition, ActionError>;
    fn refresh(&mut self, discards: &[usize]) -> Result<Transition, ActionError>;
    fn check(&mut self) -> Result<Transition, ActionError>;
    fn bet(&mut self, amount: i64) -> Result<Transition, ActionError>;

    // Queries
    fn phase(&self) -> Phase;
    fn pot(&self) -> i64;
    fn round(&self) -> u32;
    fn participant(&self, seat: Seat) -> &Participant;
    fn contribution(&self, seat: Seat) -> i64;
    fn opener(&self) -> Option<Seat>;
    fn winners(&self) -> &[Seat];
    fn message(&self) -> &str;
    fn can_bet(&self) -> bool;
    fn max_bet(&self) -> i64;
    fn history_recent_offset(&self, n: usize, offset: usize) -> Vec<HistoryEntry>;
}

impl GameEngine for Game {
    fn next_round(&mut self) -> Result<Transition, ActionError> {
        Game::next_round(self)
    }
    fn restart(&mut self) -> Result<Transition, ActionError> {
        Game::restart(self)
    }

    fn open(&mut self) -> Result<Transition, ActionError> {
        Game::open(self)
    }
    fn refresh(&mut self, discards: &[usize]) -> Result<Transition, ActionError> {
        Game::refresh(self, discards)
    }
    fn check(&mut self) -> Result<Transition, ActionError> {
        Game::check(self)
    }
    fn bet(&mut self, amount: i64) -> Result<Transition, ActionError> {
        Game::bet(self, amount)
    }

    fn phase(&self) -> Phase {
        self.phase
    }
    fn pot(&self) -> i64 {
        self.pot
    }
    fn round(&self) -> u32 {
        self.round
    }
    fn participant(&self, seat: Seat) -> &Participant {
        Game::participant(self, seat)
    }
    fn contribution(&self, seat: Seat) -> i64 {
        self.bets[seat.index()]
    }
    fn opener(&self) -> Option<Seat> {
        self.opener
    }
    fn winners(&self) -> &[Seat] {
        &self.winners
    }
    fn message(&self) -> &str {
        Game::message(self)
    }
    fn can_bet(&self) -> bool {
        Game::can_bet(self)
    }
    fn max_bet(&self) -> i64 {
        Game::max_bet(self)
    }
    fn history_recent_offset(&self, n: usize, offset: usize) -> Vec<HistoryEntry> {
        Game::history_recent_offset(self, n, offset)
    }
}

/// One user-level command, as a front end would issue it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Open,
    Decline,
    NextRound,
    Refresh(Vec<usize>),
    Check,
    Bet(i64),
    Restart,
}

/// Route an [`Action`] to the matching engine call.
///
/// `Decline` and `NextRound` both deal a fresh round; they differ only in the
/// phase they are legal from, which the engine enforces.
pub fn dispatch(engine: &mut dyn GameEngine, action: Action) -> Result<Transition, ActionError> {
    match action {
        Action::Open => engine.open(),
        Action::Decline => {
            if engine.phase() != Phase::OpenCheck {
                return Err(ActionError::IllegalTransition {
                    action: "decline",
                    phase: engine.phase(),
                });
            }
            engine.next_round()
        }
        Action::NextRound => engine.next_round(),
        Action::Refresh(discards) => engine.refresh(&discards),
        Action::Check => engine.check(),
        Action::Bet(amount) => engine.bet(amount),
        Action::Restart => engine.restart(),
    }
}
