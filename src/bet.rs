//! Outside bets and their payoffs.
//!
//! Payoffs are "x to 1": a winning stake is returned with `stake * payoff` on top.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::roulette::{Color, Outcome};

/// Red / black pays 1 to 1.
pub const PAYOFF_RED_BLACK: u32 = 1;
/// Low / high pays 1 to 1.
pub const PAYOFF_LOW_HIGH: u32 = 1;
/// Dozens pay 2 to 1.
pub const PAYOFF_DOZEN: u32 = 2;
/// Columns pay 2 to 1.
pub const PAYOFF_COLUMN: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BetType {
    Red,
    Black,
    Low,  // 1-19
    High, // 20-36
    FirstDozen,
    SecondDozen,
    ThirdDozen,
    FirstColumn,
    SecondColumn,
    ThirdColumn,
}

impl BetType {
    pub const ALL: [BetType; 10] = [
        BetType::Red,
        BetType::Black,
        BetType::Low,
        BetType::High,
        BetType::FirstDozen,
        BetType::SecondDozen,
        BetType::ThirdDozen,
        BetType::FirstColumn,
        BetType::SecondColumn,
        BetType::ThirdColumn,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BetType::Red => "red",
            BetType::Black => "black",
            BetType::Low => "low",
            BetType::High => "high",
            BetType::FirstDozen => "first_dozen",
            BetType::SecondDozen => "second_dozen",
            BetType::ThirdDozen => "third_dozen",
            BetType::FirstColumn => "first_column",
            BetType::SecondColumn => "second_column",
            BetType::ThirdColumn => "third_column",
        }
    }

    /// Payoff multiplier, excluding the returned stake.
    pub fn payoff(&self) -> u32 {
        match self {
            BetType::Red | BetType::Black => PAYOFF_RED_BLACK,
            BetType::Low | BetType::High => PAYOFF_LOW_HIGH,
            BetType::FirstDozen | BetType::SecondDozen | BetType::ThirdDozen => PAYOFF_DOZEN,
            BetType::FirstColumn | BetType::SecondColumn | BetType::ThirdColumn => PAYOFF_COLUMN,
        }
    }

    /// Whether this bet wins on `outcome`. Zero loses every bet.
    pub fn wins(&self, outcome: &Outcome) -> bool {
        let n = outcome.number();
        match self {
            BetType::Red => outcome.color() == Color::Red,
            BetType::Black => outcome.color() == Color::Black,
            BetType::Low => (1..=19).contains(&n),
            BetType::High => (20..=36).contains(&n),
            BetType::FirstDozen => (1..=12).contains(&n),
            BetType::SecondDozen => (13..=24).contains(&n),
            BetType::ThirdDozen => (25..=36).contains(&n),
            BetType::FirstColumn => n != 0 && n % 3 == 1,
            BetType::SecondColumn => n != 0 && n % 3 == 2,
            BetType::ThirdColumn => n != 0 && n % 3 == 0,
        }
    }

    /// Payoff multiplier if the bet wins, `None` otherwise.
    pub fn settle(&self, outcome: &Outcome) -> Option<u32> {
        self.wins(outcome).then_some(self.payoff())
    }
}

impl fmt::Display for BetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BetType {
    type Err = GameError;

    /// Accepts `first_dozen`, `bet_first_dozen` or `first-dozen`, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        let name = normalized.strip_prefix("bet_").unwrap_or(normalized.as_str());
        BetType::ALL
            .into_iter()
            .find(|bet| bet.name() == name)
            .ok_or_else(|| GameError::UnknownBetType(s.to_string()))
    }
}
