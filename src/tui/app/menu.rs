use crate::game::{Game, GameConfig};

use super::{AppState, Scene};

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    StartingCoins,
    Seed,
}

const MENU_ITEMS: [MenuItem; 2] = [MenuItem::StartingCoins, MenuItem::Seed];

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::StartingCoins => format!("Starting Coins: {}", app.cfg_starting_coins),
            MenuItem::Seed => match app.cfg_seed {
                Some(seed) => format!("Seed: {seed}"),
                None => "Seed: random".to_string(),
            },
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::StartingCoins => {
                app.cfg_starting_coins = app.cfg_starting_coins.saturating_add(1);
            }
            MenuItem::Seed => {
                app.cfg_seed = Some(app.cfg_seed.map_or(0, |s| s.saturating_add(1)));
            }
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            MenuItem::StartingCoins => {
                if app.cfg_starting_coins > 1 {
                    app.cfg_starting_coins -= 1;
                }
            }
            // stepping below zero switches back to a random seed
            MenuItem::Seed => {
                app.cfg_seed = match app.cfg_seed {
                    Some(0) | None => None,
                    Some(s) => Some(s - 1),
                };
            }
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn toggle_menu(&mut self) {
        self.close_help();
        self.close_history();
        self.scene = match self.scene {
            Scene::Menu => Scene::Table,
            _ => {
                self.open_menu();
                Scene::Menu
            }
        };
    }

    // --- Menu operations ---
    pub fn open_menu(&mut self) {
        self.close_help();
        self.close_history();
        let config = self.game.config();
        self.menu_index = 0;
        self.cfg_starting_coins = config.starting_coins;
        self.cfg_seed = config.seed;
        self.scene = Scene::Menu;
    }

    /// Start a fresh session with the edited settings.
    pub fn apply_menu(&mut self) {
        if self.cfg_starting_coins < 1 {
            self.cfg_starting_coins = 1;
        }
        let config = GameConfig::new(self.cfg_starting_coins, self.cfg_seed);
        match Game::new(config) {
            Ok(game) => {
                self.game = game;
                self.clear_action_error();
            }
            Err(err) => self.set_action_error(err.to_string()),
        }
        self.scene = Scene::Table;
    }

    pub fn cancel_menu(&mut self) {
        self.scene = Scene::Table;
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }
    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_edits_and_applies_config() {
        let mut app = AppState::new(GameConfig::default()).unwrap();
        app.menu_inc();
        assert_eq!(app.menu_items_display()[0], "Starting Coins: 11");
        app.menu_next();
        app.menu_inc();
        app.menu_inc();
        assert_eq!(app.cfg_seed, Some(1));
        app.menu_dec();
        app.menu_dec();
        assert_eq!(app.cfg_seed, None);
        app.menu_inc();
        app.apply_menu();
        assert_eq!(app.scene, Scene::Table);
        assert_eq!(app.game.config(), GameConfig::new(11, Some(0)));
        assert_eq!(app.game.human().coins(), 11);
    }
}
