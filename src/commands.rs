use anyhow::{bail, Context, Result};
use log::{info, warn};
use std::io::Write;

use crate::bet::BetType;
use crate::game::{parse_stake, Game};
use crate::roulette::Wheel;

/// Bet used when nothing else was asked for.
pub const DEFAULT_BET: (BetType, i64) = (BetType::Red, 10);

/// Parses a `TYPE=STAKE` argument such as `first_dozen=5`.
pub fn parse_bet_arg(arg: &str) -> Result<(BetType, i64)> {
    let Some((name, stake)) = arg.split_once('=') else {
        bail!("expected TYPE=STAKE, got {:?}", arg);
    };
    let bet = name.parse::<BetType>()?;
    let stake = parse_stake(stake)?;
    Ok((bet, stake))
}

fn new_game(seed: Option<u64>) -> Game {
    match seed {
        Some(seed) => {
            info!("seeding wheel with {}", seed);
            Game::seeded(seed)
        }
        None => Game::new(),
    }
}

/// Places `bets`, plays one game and writes the result.
pub fn play<W: Write>(
    out: &mut W,
    bets: &[(BetType, i64)],
    seed: Option<u64>,
    json: bool,
) -> Result<bool> {
    let mut game = new_game(seed);
    if bets.is_empty() {
        warn!("no bets given, placing {} on {}", DEFAULT_BET.1, DEFAULT_BET.0);
        game.place_bet(DEFAULT_BET.0, DEFAULT_BET.1)?;
    }
    for &(bet, stake) in bets {
        game.place_bet(bet, stake)
            .with_context(|| format!("rejected bet {} on {}", stake, bet))?;
    }

    let win = game.play()?;
    let report = game.report()?;
    if json {
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", report)?;
    }
    Ok(win)
}

/// Spins a bare wheel `count` times, one `Color - number` line per spin.
pub fn spin<W: Write>(out: &mut W, count: u32, seed: Option<u64>) -> Result<()> {
    let mut wheel = match seed {
        Some(seed) => Wheel::seeded(seed),
        None => Wheel::new(),
    };
    for _ in 0..count {
        let outcome = wheel.spin();
        writeln!(out, "{}", outcome)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameReport;

    #[test]
    fn test_parse_bet_arg() {
        assert_eq!(parse_bet_arg("red=10").unwrap(), (BetType::Red, 10));
        assert_eq!(
            parse_bet_arg("bet_third_column=3").unwrap(),
            (BetType::ThirdColumn, 3)
        );
        assert!(parse_bet_arg("red").is_err());
        assert!(parse_bet_arg("red=-1").is_err());
        assert!(parse_bet_arg("straight=1").is_err());
    }

    #[test]
    fn test_play_text_output() {
        let mut out = Vec::new();
        play(&mut out, &[(BetType::Black, 4)], Some(5), false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Wager: 4\n"));
        assert!(text.contains("Result: "));
        assert!(text.contains("Money: "));
    }

    #[test]
    fn test_play_json_output() {
        let mut out = Vec::new();
        let win = play(&mut out, &[], Some(5), true).unwrap();
        let report: GameReport = serde_json::from_slice(&out).unwrap();
        assert_eq!(report.bets.get(&BetType::Red), Some(&10));
        assert_eq!(report.ledger.total_wagered, 10);
        assert_eq!(report.ledger.win, win);
        assert_eq!(
            report.ledger.money,
            report.ledger.money_won - report.ledger.money_lost
        );
    }

    #[test]
    fn test_spin_lines() {
        let mut out = Vec::new();
        spin(&mut out, 20, Some(11)).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 20);
        for line in text.lines() {
            let (color, number) = line.split_once(" - ").unwrap();
            assert!(["Green", "Black", "Red"].contains(&color));
            assert!(number.parse::<u8>().unwrap() <= 36);
        }
    }
}
