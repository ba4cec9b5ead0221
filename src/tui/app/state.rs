use crate::engine::{self, Action};
use crate::game::{ActionError, Game, GameConfig, Phase};
use crate::hand::HAND_SIZE;
use crate::policy::MAX_DISCARDS;
use log::debug;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    Table,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuCancel,
    ToggleMenu,
    ToggleHelp,
    ToggleHistory,
    HistoryUp,
    HistoryDown,
    Deal,
    Open,
    Decline,
    ToggleDiscard(usize),
    Refresh,
    Check,
    AmountOpen,
    AmountDigit(u8),
    AmountBackspace,
    AmountInc,
    AmountDec,
    AmountSubmit,
    AmountCancel,
    Restart,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    // Core game engine instance
    pub game: Game,
    // Menu config being edited
    pub menu_index: usize,
    pub cfg_starting_coins: i64,
    pub cfg_seed: Option<u64>,
    // Human discard marks, aligned with the sorted hand
    selected: [bool; HAND_SIZE],
    help_open: bool,
    history_open: bool,
    history_offset: usize,
    amount_entry: Option<String>,
    amount_entry_error: Option<String>,
    action_error: Option<String>,
    action_error_at: Option<Instant>,
}

impl AppState {
    pub const HISTORY_PAGE_SIZE: usize = 20;
    const ACTION_ERROR_TTL: Duration = Duration::from_secs(3);

    pub fn new(config: GameConfig) -> Result<Self, ActionError> {
        let game = Game::new(config)?;
        Ok(Self {
            scene: Scene::Menu,
            game,
            menu_index: 0,
            cfg_starting_coins: config.starting_coins,
            cfg_seed: config.seed,
            selected: [false; HAND_SIZE],
            help_open: false,
            history_open: false,
            history_offset: 0,
            amount_entry: None,
            amount_entry_error: None,
            action_error: None,
            action_error_at: None,
        })
    }

    /// Whether the computer's cards may be shown.
    pub fn reveal_computer(&self) -> bool {
        matches!(self.game.phase(), Phase::Resolved | Phase::GameOver)
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.get(index).copied().unwrap_or(false)
    }

    pub fn selected_indices(&self) -> Vec<usize> {
        (0..HAND_SIZE).filter(|&i| self.selected[i]).collect()
    }

    pub fn amount_entry_active(&self) -> bool {
        self.amount_entry.is_some()
    }

    pub fn amount_entry_text(&self) -> Option<&str> {
        self.amount_entry.as_deref()
    }

    pub fn amount_entry_error(&self) -> Option<&str> {
        self.amount_entry_error.as_deref()
    }

    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    pub(crate) fn set_action_error(&mut self, msg: String) {
        self.action_error = Some(msg);
        self.action_error_at = Some(Instant::now());
    }

    pub(crate) fn clear_action_error(&mut self) {
        self.action_error = None;
        self.action_error_at = None;
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn history_open(&self) -> bool {
        self.history_open
    }

    pub fn history_offset(&self) -> usize {
        self.history_offset
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    pub(crate) fn close_history(&mut self) {
        self.history_open = false;
    }

    /// Route one engine action; errors are kept for the status bar.
    fn perform(&mut self, action: Action) -> bool {
        if self.scene != Scene::Table {
            return false;
        }
        debug!("tui action {action:?}");
        match engine::dispatch(&mut self.game, action) {
            Ok(_) => {
                self.clear_action_error();
                self.selected = [false; HAND_SIZE];
                true
            }
            Err(err) => {
                self.set_action_error(err.to_string());
                false
            }
        }
    }

    fn deal(&mut self) -> bool {
        match self.game.phase() {
            Phase::GameOver => self.perform(Action::Restart),
            _ => self.perform(Action::NextRound),
        }
    }

    fn decline(&mut self) -> bool {
        match self.game.phase() {
            Phase::OpenCheck => self.perform(Action::Decline),
            _ => self.perform(Action::NextRound),
        }
    }

    fn toggle_discard(&mut self, index: usize) {
        if self.scene != Scene::Table || self.game.phase() != Phase::Refresh || index >= HAND_SIZE
        {
            return;
        }
        if !self.selected[index] && self.selected_indices().len() >= MAX_DISCARDS {
            self.set_action_error(format!("At most {MAX_DISCARDS} cards may be replaced"));
            return;
        }
        self.selected[index] = !self.selected[index];
    }

    fn refresh(&mut self) -> bool {
        let discards = self.selected_indices();
        self.perform(Action::Refresh(discards))
    }

    fn open_amount_entry(&mut self) -> bool {
        if self.scene != Scene::Table {
            return false;
        }
        if !self.game.can_bet() {
            let err = if self.game.phase() == Phase::Decision {
                ActionError::BetNotAllowed
            } else {
                ActionError::IllegalTransition { action: "bet", phase: self.game.phase() }
            };
            self.set_action_error(err.to_string());
            return false;
        }
        self.amount_entry = Some("1".to_string());
        self.amount_entry_error = None;
        true
    }

    fn amount_entry_backspace(&mut self) {
        if let Some(buf) = self.amount_entry.as_mut() {
            buf.pop();
        }
        self.amount_entry_error = None;
    }

    fn amount_entry_push_digit(&mut self, digit: u8) {
        if let Some(buf) = self.amount_entry.as_mut() {
            // bets never exceed one digit
            *buf = char::from(b'0' + digit).to_string();
        }
        self.amount_entry_error = None;
    }

    fn amount_entry_adjust(&mut self, delta: i64) {
        let max = self.game.max_bet().max(1);
        if let Some(buf) = self.amount_entry.as_mut() {
            let cur = buf.parse::<i64>().unwrap_or(0);
            *buf = (cur + delta).clamp(1, max).to_string();
        }
        self.amount_entry_error = None;
    }

    fn amount_entry_submit(&mut self) -> bool {
        let Some(buf) = self.amount_entry.as_ref() else {
            return false;
        };
        let amount = match buf.parse::<i64>() {
            Ok(v) => v,
            Err(_) => {
                self.amount_entry_error = Some("Invalid amount".to_string());
                return false;
            }
        };
        match engine::dispatch(&mut self.game, Action::Bet(amount)) {
            Ok(_) => {
                self.amount_entry = None;
                self.amount_entry_error = None;
                self.clear_action_error();
                true
            }
            Err(err) => {
                self.amount_entry_error = Some(err.to_string());
                false
            }
        }
    }

    fn amount_entry_cancel(&mut self) {
        self.amount_entry = None;
        self.amount_entry_error = None;
    }

    /// Apply one input. Returns true when the game advanced.
    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleMenu => {
                self.toggle_menu();
                false
            }
            InputAction::ToggleHelp => {
                if self.scene == Scene::Table {
                    self.history_open = false;
                    self.help_open = !self.help_open;
                }
                false
            }
            InputAction::ToggleHistory => {
                if self.scene == Scene::Table {
                    self.help_open = false;
                    if !self.history_open {
                        self.history_offset = 0;
                    }
                    self.history_open = !self.history_open;
                }
                false
            }
            InputAction::HistoryUp => {
                if self.scene == Scene::Table && self.history_open {
                    let max_offset =
                        self.game.history_len().saturating_sub(Self::HISTORY_PAGE_SIZE);
                    self.history_offset = (self.history_offset + 1).min(max_offset);
                }
                false
            }
            InputAction::HistoryDown => {
                if self.scene == Scene::Table && self.history_open && self.history_offset > 0 {
                    self.history_offset -= 1;
                }
                false
            }
            InputAction::MenuNext => {
                if self.scene == Scene::Menu {
                    self.menu_next();
                }
                false
            }
            InputAction::MenuPrev => {
                if self.scene == Scene::Menu {
                    self.menu_prev();
                }
                false
            }
            InputAction::MenuInc => {
                if self.scene == Scene::Menu {
                    self.menu_inc();
                }
                false
            }
            InputAction::MenuDec => {
                if self.scene == Scene::Menu {
                    self.menu_dec();
                }
                false
            }
            InputAction::MenuApply => {
                if self.scene == Scene::Menu {
                    self.apply_menu();
                }
                false
            }
            InputAction::MenuCancel => {
                if self.scene == Scene::Menu {
                    self.cancel_menu();
                }
                false
            }
            InputAction::Deal => self.deal(),
            InputAction::Open => self.perform(Action::Open),
            InputAction::Decline => self.decline(),
            InputAction::ToggleDiscard(idx) => {
                self.toggle_discard(idx);
                false
            }
            InputAction::Refresh => self.refresh(),
            InputAction::Check => self.perform(Action::Check),
            InputAction::AmountOpen => self.open_amount_entry(),
            InputAction::AmountDigit(d) => {
                self.amount_entry_push_digit(d);
                false
            }
            InputAction::AmountBackspace => {
                self.amount_entry_backspace();
                false
            }
            InputAction::AmountInc => {
                self.amount_entry_adjust(1);
                false
            }
            InputAction::AmountDec => {
                self.amount_entry_adjust(-1);
                false
            }
            InputAction::AmountSubmit => self.amount_entry_submit(),
            InputAction::AmountCancel => {
                self.amount_entry_cancel();
                false
            }
            InputAction::Restart => {
                let restarted = self.perform(Action::Restart);
                if restarted {
                    self.history_offset = 0;
                }
                restarted
            }
        }
    }

    /// Expire stale error text.
    pub fn on_tick(&mut self) {
        if let Some(at) = self.action_error_at {
            if at.elapsed() >= Self::ACTION_ERROR_TTL {
                self.clear_action_error();
            }
        }
    }
}
