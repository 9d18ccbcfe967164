//! One round of roulette: bets go in, the wheel spins once, every bet is settled.

use std::collections::BTreeMap;
use std::fmt;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::bet::BetType;
use crate::error::GameError;
use crate::roulette::{Outcome, Wheel};

/// Accumulated stake per bet type.
pub type BetBook = BTreeMap<BetType, i64>;

/// Money totals for one game.
///
/// After settlement `money == money_won - money_lost`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    pub total_wagered: i64,
    pub money_won: i64,
    pub money_lost: i64,
    pub money: i64,
    pub win: bool,
}

impl Ledger {
    fn record_win(&mut self, stake: i64, payoff: u32) -> Result<(), GameError> {
        let won = stake
            .checked_mul(i64::from(payoff))
            .ok_or(GameError::StakeOverflow)?;
        self.money_won = self
            .money_won
            .checked_add(won)
            .ok_or(GameError::StakeOverflow)?;
        self.money = self.money.checked_add(won).ok_or(GameError::StakeOverflow)?;
        self.win = true;
        Ok(())
    }

    fn record_loss(&mut self, stake: i64) -> Result<(), GameError> {
        self.money_lost = self
            .money_lost
            .checked_add(stake)
            .ok_or(GameError::StakeOverflow)?;
        self.money = self
            .money
            .checked_sub(stake)
            .ok_or(GameError::StakeOverflow)?;
        Ok(())
    }
}

/// Snapshot of a settled game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameReport {
    pub outcome: Outcome,
    pub bets: BetBook,
    pub ledger: Ledger,
}

impl fmt::Display for GameReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Wager: {}", self.ledger.total_wagered)?;
        writeln!(f)?;
        writeln!(f, "Result: {}", self.outcome)?;
        writeln!(f)?;
        writeln!(f, "Won: {}", self.ledger.money_won)?;
        writeln!(f, "Lost: {}", self.ledger.money_lost)?;
        writeln!(f)?;
        write!(f, "Money: {}", self.ledger.money)
    }
}

/// Parses a stake typed by a user. Negative or non-integer text is rejected.
pub fn parse_stake(text: &str) -> Result<i64, GameError> {
    let stake: i64 = text
        .trim()
        .parse()
        .map_err(|_| GameError::InvalidStake(text.to_string()))?;
    if stake < 0 {
        return Err(GameError::InvalidStake(text.to_string()));
    }
    Ok(stake)
}

/// A single game. Once played it only answers questions about the result.
pub struct Game<R = StdRng> {
    wheel: Wheel<R>,
    bets: BetBook,
    ledger: Ledger,
    outcome: Option<Outcome>,
}

impl Game<StdRng> {
    pub fn new() -> Self {
        Self::with_wheel(Wheel::new())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_wheel(Wheel::seeded(seed))
    }
}

impl Default for Game<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Game<R> {
    pub fn with_wheel(wheel: Wheel<R>) -> Self {
        Self {
            wheel,
            bets: BetBook::new(),
            ledger: Ledger::default(),
            outcome: None,
        }
    }

    /// Adds `stake` to the bet on `bet`. Repeated bets on the same type are summed.
    pub fn place_bet(&mut self, bet: BetType, stake: i64) -> Result<(), GameError> {
        if self.is_played() {
            return Err(GameError::AlreadyPlayed);
        }
        if stake < 0 {
            return Err(GameError::InvalidStake(stake.to_string()));
        }

        let current = self.bets.get(&bet).copied().unwrap_or(0);
        let total = current
            .checked_add(stake)
            .ok_or(GameError::StakeOverflow)?;
        let wagered = self
            .ledger
            .total_wagered
            .checked_add(stake)
            .ok_or(GameError::StakeOverflow)?;

        self.bets.insert(bet, total);
        self.ledger.total_wagered = wagered;
        debug!("placed {} on {} (now {})", stake, bet, total);
        Ok(())
    }

    /// Places a bet from user-supplied text, e.g. `("bet_red", "10")`.
    pub fn place_bet_str(&mut self, bet: &str, stake: &str) -> Result<(), GameError> {
        let bet: BetType = bet.parse()?;
        let stake = parse_stake(stake)?;
        self.place_bet(bet, stake)
    }

    /// Spins the wheel once and settles every bet. Returns whether any bet won.
    ///
    /// A game without bets still spins and returns `false`.
    pub fn play(&mut self) -> Result<bool, GameError> {
        if self.is_played() {
            return Err(GameError::AlreadyPlayed);
        }
        let outcome = self.wheel.spin();
        self.settle(outcome)
    }

    /// Settles every bet against an outcome drawn elsewhere.
    pub fn play_outcome(&mut self, outcome: Outcome) -> Result<bool, GameError> {
        if self.is_played() {
            return Err(GameError::AlreadyPlayed);
        }
        self.settle(outcome)
    }

    fn settle(&mut self, outcome: Outcome) -> Result<bool, GameError> {
        let mut ledger = self.ledger;
        for (&bet, &stake) in &self.bets {
            match bet.settle(&outcome) {
                Some(payoff) => {
                    debug!("{} wins {} to 1 on stake {}", bet, payoff, stake);
                    ledger.record_win(stake, payoff)?;
                }
                None => {
                    debug!("{} loses stake {}", bet, stake);
                    ledger.record_loss(stake)?;
                }
            }
        }

        self.ledger = ledger;
        self.outcome = Some(outcome);
        info!(
            "settled {} bet(s) on {}: won {}, lost {}, net {}",
            self.bets.len(),
            outcome,
            ledger.money_won,
            ledger.money_lost,
            ledger.money
        );
        Ok(ledger.win)
    }

    pub fn is_played(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn bets(&self) -> &BetBook {
        &self.bets
    }

    /// Current totals; all zero until the game is played.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn total_wagered(&self) -> i64 {
        self.ledger.total_wagered
    }

    pub fn money(&self) -> i64 {
        self.ledger.money
    }

    pub fn money_won(&self) -> i64 {
        self.ledger.money_won
    }

    pub fn money_lost(&self) -> i64 {
        self.ledger.money_lost
    }

    pub fn win(&self) -> bool {
        self.ledger.win
    }

    pub fn report(&self) -> Result<GameReport, GameError> {
        let outcome = self.outcome.ok_or(GameError::NotPlayed)?;
        Ok(GameReport {
            outcome,
            bets: self.bets.clone(),
            ledger: self.ledger,
        })
    }
}
