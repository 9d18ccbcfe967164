use std::fmt;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Lowest pocket on the wheel.
pub const MIN_POCKET: u8 = 0;
/// Highest pocket on the wheel.
pub const MAX_POCKET: u8 = 36;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Green,
    Black,
    Red,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Green => "Green",
            Color::Black => "Black",
            Color::Red => "Red",
        };
        f.write_str(name)
    }
}

/// Color of a pocket.
///
/// Zero is green. In 1-10 and 19-28 odd numbers are red, in 11-18 and 29-36
/// odd numbers are black. Numbers past the wheel are treated as green.
pub fn color_of(number: u8) -> Color {
    match number {
        1..=10 | 19..=28 => {
            if number % 2 == 0 {
                Color::Black
            } else {
                Color::Red
            }
        }
        11..=18 | 29..=36 => {
            if number % 2 == 0 {
                Color::Red
            } else {
                Color::Black
            }
        }
        _ => Color::Green,
    }
}

/// Result of a single spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "OutcomeRepr")]
pub struct Outcome {
    number: u8,
    color: Color,
}

impl Outcome {
    pub fn new(number: u8) -> Result<Self, GameError> {
        if number > MAX_POCKET {
            return Err(GameError::InvalidPocket(number));
        }
        Ok(Self {
            number,
            color: color_of(number),
        })
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

/// Wire form of an [`Outcome`], checked before it becomes one.
#[derive(Deserialize)]
struct OutcomeRepr {
    number: u8,
    color: Color,
}

impl TryFrom<OutcomeRepr> for Outcome {
    type Error = GameError;

    fn try_from(repr: OutcomeRepr) -> Result<Self, Self::Error> {
        let outcome = Outcome::new(repr.number)?;
        if outcome.color != repr.color {
            return Err(GameError::ColorMismatch {
                number: repr.number,
                expected: outcome.color,
                found: repr.color,
            });
        }
        Ok(outcome)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.color, self.number)
    }
}

/// Single-zero wheel remembering its most recent outcome.
pub struct Wheel<R = StdRng> {
    rng: R,
    last: Option<Outcome>,
}

impl Wheel<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Wheel with a reproducible sequence of outcomes.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for Wheel<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Wheel<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng, last: None }
    }

    pub fn spin(&mut self) -> Outcome {
        let number = self.rng.gen_range(MIN_POCKET..=MAX_POCKET);
        let outcome = Outcome {
            number,
            color: color_of(number),
        };
        debug!("wheel landed on {}", outcome);
        self.last = Some(outcome);
        outcome
    }

    pub fn last(&self) -> Option<Outcome> {
        self.last
    }

    pub fn number(&self) -> Option<u8> {
        self.last.map(|o| o.number)
    }

    pub fn color(&self) -> Option<Color> {
        self.last.map(|o| o.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED_NUMBERS: [u8; 18] = [
        1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36,
    ];

    #[test]
    fn test_zero_is_green() {
        assert_eq!(color_of(0), Color::Green);
    }

    #[test]
    fn test_color_table() {
        for n in 1..=MAX_POCKET {
            let expected = if RED_NUMBERS.contains(&n) {
                Color::Red
            } else {
                Color::Black
            };
            assert_eq!(color_of(n), expected, "pocket {}", n);
        }
    }

    #[test]
    fn test_eighteen_of_each_color() {
        let red = (1..=MAX_POCKET).filter(|&n| color_of(n) == Color::Red).count();
        let black = (1..=MAX_POCKET)
            .filter(|&n| color_of(n) == Color::Black)
            .count();
        assert_eq!(red, 18);
        assert_eq!(black, 18);
    }

    #[test]
    fn test_outcome_rejects_off_wheel() {
        assert_eq!(Outcome::new(37), Err(GameError::InvalidPocket(37)));
        let outcome = Outcome::new(7).unwrap();
        assert_eq!(outcome.color(), Color::Red);
        assert_eq!(outcome.to_string(), "Red - 7");
    }

    #[test]
    fn test_outcome_json() {
        let outcome: Outcome = serde_json::from_str(r#"{"number":7,"color":"red"}"#).unwrap();
        assert_eq!(outcome, Outcome::new(7).unwrap());
        let json = serde_json::to_string(&outcome).unwrap();
        assert_eq!(serde_json::from_str::<Outcome>(&json).unwrap(), outcome);
    }

    #[test]
    fn test_outcome_json_rejects_off_wheel() {
        let err = serde_json::from_str::<Outcome>(r#"{"number":99,"color":"red"}"#).unwrap_err();
        assert!(err.to_string().contains("pocket 99"));
    }

    #[test]
    fn test_outcome_json_rejects_wrong_color() {
        let err = serde_json::from_str::<Outcome>(r#"{"number":2,"color":"red"}"#).unwrap_err();
        assert!(err.to_string().contains("pocket 2 is Black, not Red"));
        assert!(serde_json::from_str::<Outcome>(r#"{"number":0,"color":"black"}"#).is_err());
    }

    #[test]
    fn test_spin_remembers_last() {
        let mut wheel = Wheel::seeded(1);
        assert!(wheel.last().is_none());
        let outcome = wheel.spin();
        assert_eq!(wheel.last(), Some(outcome));
        assert_eq!(wheel.number(), Some(outcome.number()));
        assert_eq!(wheel.color(), Some(color_of(outcome.number())));
    }

    #[test]
    fn test_seeded_wheels_agree() {
        let mut a = Wheel::seeded(42);
        let mut b = Wheel::seeded(42);
        for _ in 0..100 {
            assert_eq!(a.spin(), b.spin());
        }
    }

    #[test]
    fn test_spin_distribution() {
        let spins = 10_000;
        let mut counts = [0u32; 37];
        let mut wheel = Wheel::seeded(2024);
        for _ in 0..spins {
            let n = wheel.spin().number();
            assert!(n <= MAX_POCKET);
            counts[n as usize] += 1;
        }

        let expected = spins as f64 / 37.0;
        let chi_square: f64 = counts
            .iter()
            .map(|&c| {
                let d = c as f64 - expected;
                d * d / expected
            })
            .sum();
        // 36 degrees of freedom; p = 0.0001 sits near 76
        assert!(chi_square < 80.0, "chi-square {}", chi_square);
        for (n, &c) in counts.iter().enumerate() {
            assert!(c > 180 && c < 370, "pocket {} drawn {} times", n, c);
        }
    }
}
