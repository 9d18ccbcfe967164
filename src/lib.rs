//! American roulette: a wheel, outside bets, and a per-game money ledger.
//!
//! ```
//! use roulette::{BetType, Game, Outcome};
//!
//! let mut game = Game::seeded(7);
//! game.place_bet(BetType::Red, 10).unwrap();
//! let won = game.play_outcome(Outcome::new(7).unwrap()).unwrap();
//! assert!(won);
//! assert_eq!(game.money(), 10);
//! ```

pub mod bet;
pub mod commands;
pub mod config;
pub mod error;
pub mod game;
pub mod roulette;

pub use bet::BetType;
pub use error::GameError;
pub use game::{BetBook, Game, GameReport, Ledger};
pub use roulette::{color_of, Color, Outcome, Wheel};
