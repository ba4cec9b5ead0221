use crate::deck::{Deck, DeckError};
use crate::evaluator::Evaluation;
use crate::hand::{Hand, HandError, HAND_SIZE};
use crate::player::{Participant, Seat};
use crate::policy::{self, MAX_BET, MAX_DISCARDS};
use log::{debug, info, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Coins each side puts in the pot when a round is opened.
pub const ANTE: i64 = 1;

/// Session settings fixed for the lifetime of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct GameConfig {
    pub starting_coins: i64,
    /// Seed for every deck in the session; `None` draws one from the thread RNG.
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn new(starting_coins: i64, seed: Option<u64>) -> Self {
        Self { starting_coins, seed }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { starting_coins: 10, seed: None }
    }
}

/// Where a round stands. Dealing and opening are instantaneous and have no phase of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Phase {
    /// Someone may open; the human decides whether to play.
    OpenCheck,
    /// Nobody could open; only a new deal is possible.
    Folded,
    /// Antes are in; both sides may swap cards.
    Refresh,
    /// The human checks or bets.
    Decision,
    /// The pot has been paid out.
    Resolved,
    /// Somebody ran out of coins; only a restart leaves this phase.
    GameOver,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::OpenCheck => "Open?",
            Phase::Folded => "No opener",
            Phase::Refresh => "Refresh",
            Phase::Decision => "Check or Bet",
            Phase::Resolved => "Resolved",
            Phase::GameOver => "Game Over",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum HistoryVerb {
    Ante,
    Open,
    Decline,
    Discard,
    Check,
    Bet,
    Call,
    Fold,
    Win,
    Split,
}

impl HistoryVerb {
    pub fn label(self) -> &'static str {
        match self {
            HistoryVerb::Ante => "Ante",
            HistoryVerb::Open => "Open",
            HistoryVerb::Decline => "Decline",
            HistoryVerb::Discard => "Discard",
            HistoryVerb::Check => "Check",
            HistoryVerb::Bet => "Bet",
            HistoryVerb::Call => "Call",
            HistoryVerb::Fold => "Fold",
            HistoryVerb::Win => "Win",
            HistoryVerb::Split => "Split",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct HistoryEntry {
    pub round: u32,
    pub seat: Seat,
    pub verb: HistoryVerb,
    pub amount: Option<i64>,
}

/// Result of a successful transition: the phase entered and the text to show.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Transition {
    pub phase: Phase,
    pub message: String,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionError {
    #[error("cannot {action} during {phase:?}")]
    IllegalTransition { action: &'static str, phase: Phase },
    #[error("betting is not allowed while a player has no coins")]
    BetNotAllowed,
    #[error("bet must be between 1 and {max}, got {got}")]
    BetAmount { max: i64, got: i64 },
    #[error("at most {max} cards may be replaced, got {got}")]
    TooManyDiscards { max: usize, got: usize },
    #[error("card index {0} is out of range")]
    InvalidDiscard(usize),
    #[error("starting coins must be at least 1, got {0}")]
    StartingCoins(i64),
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error(transparent)]
    Hand(#[from] HandError),
}

/// One two-party draw poker session: the computer against a human.
///
/// The session owns the deck, both participants and the pot. Every public
/// action validates first and only then mutates, so an `Err` leaves the game
/// exactly as it was.
#[derive(Debug)]
#[non_exhaustive]
pub struct Game {
    pub(crate) config: GameConfig,
    rng: ChaCha8Rng,
    pub(crate) deck: Deck,
    pub(crate) participants: [Participant; 2],
    pub(crate) pot: i64,
    pub(crate) bets: [i64; 2],
    pub(crate) phase: Phase,
    pub(crate) opener: Option<Seat>,
    pub(crate) round: u32,
    pub(crate) winners: Vec<Seat>,
    /// Computer evaluation taken just before the refresh; decides call or fold.
    call_basis: Option<Evaluation>,
    message: String,
    /// Every action of the session. Cleared only by `restart`.
    history: Vec<HistoryEntry>,
}

impl Game {
    /// Start a session: deal round 1 and run the open check.
    pub fn new(config: GameConfig) -> Result<Self, ActionError> {
        if config.starting_coins < 1 {
            warn!("rejected starting coins {}", config.starting_coins);
            return Err(ActionError::StartingCoins(config.starting_coins));
        }
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::seeded(rng.random());
        let computer = Hand::deal(&mut deck)?;
        let human = Hand::deal(&mut deck)?;
        let mut game = Self {
            config,
            rng,
            deck,
            participants: [
                Participant::new(Seat::Computer, computer, config.starting_coins),
                Participant::new(Seat::Human, human, config.starting_coins),
            ],
            pot: 0,
            bets: [0; 2],
            phase: Phase::Folded,
            opener: None,
            round: 1,
            winners: Vec::new(),
            call_basis: None,
            message: String::new(),
            history: Vec::new(),
        };
        info!("new game: {} coins each, seed {seed}", config.starting_coins);
        game.check_open();
        Ok(game)
    }

    /// Returns the session settings
    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn pot(&self) -> i64 {
        self.pot
    }

    /// Returns the 1-based round number
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn participant(&self, seat: Seat) -> &Participant {
        &self.participants[seat.index()]
    }

    pub fn computer(&self) -> &Participant {
        self.participant(Seat::Computer)
    }

    pub fn human(&self) -> &Participant {
        self.participant(Seat::Human)
    }

    /// Returns what `seat` has put in the pot this round
    pub fn contribution(&self, seat: Seat) -> i64 {
        self.bets[seat.index()]
    }

    /// Returns who may open the current round, if anyone
    pub fn opener(&self) -> Option<Seat> {
        self.opener
    }

    /// Returns the winners of the last resolved round (two on a split)
    pub fn winners(&self) -> &[Seat] {
        &self.winners
    }

    /// Returns the text produced by the latest transition
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Whether `Bet` is on offer; otherwise only `Check` is.
    pub fn can_bet(&self) -> bool {
        self.phase == Phase::Decision && self.participants.iter().all(|p| !p.is_broke())
    }

    /// Largest legal bet: three coins, capped by the poorer side.
    pub fn max_bet(&self) -> i64 {
        let poorest = self.participants.iter().map(|p| p.coins).min().unwrap_or(0);
        MAX_BET.min(poorest).max(0)
    }

    /// Returns the last `n` history entries, oldest first. History covers the
    /// whole session and starts empty again after `restart`.
    pub fn history_recent(&self, n: usize) -> Vec<HistoryEntry> {
        let start = self.history.len().saturating_sub(n);
        self.history[start..].to_vec()
    }

    pub fn history_recent_offset(&self, n: usize, offset: usize) -> Vec<HistoryEntry> {
        if n == 0 || self.history.is_empty() {
            return Vec::new();
        }
        let len = self.history.len();
        let offset = offset.min(len.saturating_sub(n));
        let end = len - offset;
        let start = end.saturating_sub(n);
        self.history[start..end].to_vec()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Accept the open: both sides ante into the pot and the refresh begins.
    pub fn open(&mut self) -> Result<Transition, ActionError> {
        self.expect_phase("open", &[Phase::OpenCheck])?;
        let Some(opener) = self.opener else {
            return Err(self.reject(ActionError::IllegalTransition {
                action: "open",
                phase: self.phase,
            }));
        };
        self.record(opener, HistoryVerb::Open, None);
        for seat in Seat::ALL {
            self.contribute(seat, ANTE);
            self.record(seat, HistoryVerb::Ante, Some(ANTE));
        }
        info!("round {} opened by {opener}, pot {}", self.round, self.pot);
        Ok(self.enter(Phase::Refresh, "Please select cards to refresh.".to_string()))
    }

    /// Deal a fresh round. Legal when no one could open, when the human declines
    /// the open, and after a resolved round.
    pub fn next_round(&mut self) -> Result<Transition, ActionError> {
        self.expect_phase("deal", &[Phase::OpenCheck, Phase::Folded, Phase::Resolved])?;
        if self.phase == Phase::OpenCheck {
            self.record(Seat::Human, HistoryVerb::Decline, None);
        }
        let mut deck = Deck::seeded(self.rng.random());
        let computer = Hand::deal(&mut deck)?;
        let human = Hand::deal(&mut deck)?;
        self.deck = deck;
        self.round += 1;
        self.participants[Seat::Computer.index()].set_hand(computer);
        self.participants[Seat::Human.index()].set_hand(human);
        Ok(self.check_open())
    }

    /// Swap cards. The computer throws away whatever its evaluation did not mark
    /// valuable; the human throws away `discards` (positions in the sorted hand).
    pub fn refresh(&mut self, discards: &[usize]) -> Result<Transition, ActionError> {
        self.expect_phase("refresh", &[Phase::Refresh])?;
        if let Some(&bad) = discards.iter().find(|&&i| i >= HAND_SIZE) {
            return Err(self.reject(ActionError::InvalidDiscard(bad)));
        }
        let human: Vec<usize> =
            discards.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();
        if human.len() > MAX_DISCARDS {
            return Err(self.reject(ActionError::TooManyDiscards {
                max: MAX_DISCARDS,
                got: human.len(),
            }));
        }
        let computer = policy::discards(self.computer().evaluation());
        if computer.len() + human.len() > self.deck.remaining() {
            return Err(self.reject(ActionError::Deck(DeckError::Empty)));
        }

        self.call_basis = Some(*self.computer().evaluation());

        self.participants[Seat::Computer.index()].replace_cards(&computer, &mut self.deck)?;
        self.participants[Seat::Human.index()].replace_cards(&human, &mut self.deck)?;
        self.record(Seat::Computer, HistoryVerb::Discard, Some(computer.len() as i64));
        self.record(Seat::Human, HistoryVerb::Discard, Some(human.len() as i64));

        let mut message = format!("Computer replaced {} card(s).", computer.len());
        if self.can_bet_after_refresh() {
            message.push_str(" Check or bet?");
        } else {
            message.push_str(" A player has no coins left, you can only check.");
        }
        Ok(self.enter(Phase::Decision, message))
    }

    /// Show both hands; the higher score takes the pot, a tie splits it.
    pub fn check(&mut self) -> Result<Transition, ActionError> {
        self.expect_phase("check", &[Phase::Decision])?;
        self.record(Seat::Human, HistoryVerb::Check, None);
        Ok(self.showdown())
    }

    /// Bet `amount` coins. The computer calls if it held two pair or better
    /// before the refresh and the hands are compared; otherwise it folds and
    /// the human takes the pot.
    pub fn bet(&mut self, amount: i64) -> Result<Transition, ActionError> {
        self.expect_phase("bet", &[Phase::Decision])?;
        if !self.can_bet() {
            return Err(self.reject(ActionError::BetNotAllowed));
        }
        let max = self.max_bet();
        if amount < 1 || amount > max {
            return Err(self.reject(ActionError::BetAmount { max, got: amount }));
        }

        self.contribute(Seat::Human, amount);
        self.record(Seat::Human, HistoryVerb::Bet, Some(amount));
        let basis = self.call_basis.unwrap_or(*self.computer().evaluation());
        if policy::calls_bet(&basis) {
            self.contribute(Seat::Computer, amount);
            self.record(Seat::Computer, HistoryVerb::Call, Some(amount));
            info!("computer calls {amount} on score {}", basis.score());
            return Ok(self.showdown());
        }

        self.record(Seat::Computer, HistoryVerb::Fold, None);
        let pot = self.pot;
        self.award(Seat::Human, pot);
        info!("computer folds, human takes {pot}");
        Ok(self.finish_round(format!("Computer folds. You win the pot of {pot}.")))
    }

    /// Throw the session away and start over with fresh balances.
    pub fn restart(&mut self) -> Result<Transition, ActionError> {
        let seed = self.rng.random();
        let mut fresh = Game::new(self.config.with_seed(seed))?;
        fresh.config = self.config;
        *self = fresh;
        Ok(Transition { phase: self.phase, message: self.message.clone() })
    }

    fn check_open(&mut self) -> Transition {
        self.pot = 0;
        self.bets = [0; 2];
        self.winners.clear();
        self.call_basis = None;
        debug!(
            "round {} dealt: computer [{}] {}, human [{}] {}",
            self.round,
            self.computer().hand(),
            self.computer().evaluation(),
            self.human().hand(),
            self.human().evaluation()
        );
        let (opener, phase, message) = if self.computer().can_open() {
            (Some(Seat::Computer), Phase::OpenCheck, "Computer can open. Do you want to play?")
        } else if self.human().can_open() {
            (
                Some(Seat::Human),
                Phase::OpenCheck,
                "Computer cannot open. You can open. Do you want to play?",
            )
        } else {
            (None, Phase::Folded, "Computer cannot open. You cannot open.")
        };
        self.opener = opener;
        self.enter(phase, message.to_string())
    }

    fn showdown(&mut self) -> Transition {
        let computer = *self.computer().evaluation();
        let human = *self.human().evaluation();
        let pot = self.pot;
        let summary = format!("Computer: {}. You: {}.", computer.category, human.category);
        let message = match computer.cmp(&human) {
            Ordering::Greater => {
                self.award(Seat::Computer, pot);
                format!("Computer wins the pot of {pot}. {summary}")
            }
            Ordering::Less => {
                self.award(Seat::Human, pot);
                format!("You win the pot of {pot}. {summary}")
            }
            Ordering::Equal => {
                let share = pot / 2;
                for seat in Seat::ALL {
                    self.participants[seat.index()].collect(share);
                    self.record(seat, HistoryVerb::Split, Some(share));
                }
                self.winners = Seat::ALL.to_vec();
                format!("Split pot, {share} each. {summary}")
            }
        };
        info!(
            "showdown round {}: computer {} vs human {}, pot {pot}",
            self.round,
            computer.score(),
            human.score()
        );
        self.finish_round(message)
    }

    fn award(&mut self, seat: Seat, amount: i64) {
        self.participants[seat.index()].collect(amount);
        self.winners = vec![seat];
        self.record(seat, HistoryVerb::Win, Some(amount));
    }

    fn finish_round(&mut self, mut message: String) -> Transition {
        self.pot = 0;
        if let Some(broke) = self.participants.iter().find(|p| p.is_broke()) {
            let seat = broke.seat();
            message.push_str(&format!(" Game over: {seat} ran out of coins."));
            info!("game over after round {}: {seat} is out of coins", self.round);
            return self.enter(Phase::GameOver, message);
        }
        self.enter(Phase::Resolved, message)
    }

    fn contribute(&mut self, seat: Seat, amount: i64) {
        self.participants[seat.index()].pay(amount);
        self.bets[seat.index()] += amount;
        self.pot += amount;
    }

    fn can_bet_after_refresh(&self) -> bool {
        self.participants.iter().all(|p| !p.is_broke())
    }

    fn expect_phase(&self, action: &'static str, allowed: &[Phase]) -> Result<(), ActionError> {
        if allowed.contains(&self.phase) {
            return Ok(());
        }
        Err(self.reject(ActionError::IllegalTransition { action, phase: self.phase }))
    }

    fn reject(&self, err: ActionError) -> ActionError {
        warn!("rejected action in round {}: {err}", self.round);
        err
    }

    fn enter(&mut self, phase: Phase, message: String) -> Transition {
        debug!("round {}: {:?} -> {phase:?}", self.round, self.phase);
        self.phase = phase;
        self.message = message.clone();
        Transition { phase, message }
    }

    fn record(&mut self, seat: Seat, verb: HistoryVerb, amount: Option<i64>) {
        self.history.push(HistoryEntry { round: self.round, seat, verb, amount });
    }
}
