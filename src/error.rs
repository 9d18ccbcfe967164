use thiserror::Error;

use crate::roulette::Color;

/// Errors raised while placing bets or settling a game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Stake is negative or not a whole number.
    #[error("invalid stake: {0}")]
    InvalidStake(String),
    /// Bet name does not match any known bet type.
    #[error("unknown bet type: {0}")]
    UnknownBetType(String),
    /// Wheel pocket outside 0..=36.
    #[error("pocket {0} is not on the wheel")]
    InvalidPocket(u8),
    /// Outcome whose color does not belong to its pocket.
    #[error("pocket {number} is {expected}, not {found}")]
    ColorMismatch {
        number: u8,
        expected: Color,
        found: Color,
    },
    /// The game has already been played; no more bets or spins.
    #[error("game has already been played")]
    AlreadyPlayed,
    /// Results were requested before the game was played.
    #[error("game has not been played yet")]
    NotPlayed,
    /// Ledger arithmetic left the i64 range.
    #[error("stake total overflowed")]
    StakeOverflow,
}
