use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env::{self, VarError};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::bet::BetType;

pub const SEED_VAR: &str = "ROULETTE_SEED";
pub const SPINS_VAR: &str = "ROULETTE_SPINS";
pub const DEFAULT_SPINS: u32 = 20;

/// Bets read from a JSON file, e.g. `{"seed": 7, "bets": {"red": 10}}`.
///
/// Names are kept as text so unknown bet types are reported when the slip is
/// turned into bets, not swallowed by the parser.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct BetSlip {
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub bets: BTreeMap<String, i64>,
}

impl BetSlip {
    /// Loads a slip if one exists at `path`, otherwise an empty slip.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::open(path)
        } else {
            Ok(BetSlip::default())
        }
    }

    /// Loads the slip at `path`, which must exist.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read bet slip {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("malformed bet slip {}", path.display()))
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), content)?;
        Ok(())
    }

    /// Resolves every entry into a typed bet, failing on the first bad one.
    pub fn resolve(&self) -> Result<Vec<(BetType, i64)>> {
        self.bets
            .iter()
            .map(|(name, &stake)| -> Result<(BetType, i64)> {
                let bet = name
                    .parse::<BetType>()
                    .with_context(|| format!("bet slip entry {:?}", name))?;
                Ok((bet, stake))
            })
            .collect()
    }
}

/// Reads and parses `name`. Unset gives `None`; unparsable or non-Unicode values are errors.
fn read_var<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(v) => v
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{} has an invalid value {:?}", name, v)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(v)) => bail!("{} is not valid unicode: {:?}", name, v),
    }
}

fn seed_or(explicit: Option<u64>, var: &str) -> Result<Option<u64>> {
    match explicit {
        Some(seed) => Ok(Some(seed)),
        None => read_var(var),
    }
}

fn spins_or(explicit: Option<u32>, var: &str) -> Result<u32> {
    match explicit {
        Some(count) => Ok(count),
        None => Ok(read_var(var)?.unwrap_or(DEFAULT_SPINS)),
    }
}

/// Wheel seed: `explicit` if given, otherwise `ROULETTE_SEED`, otherwise none.
///
/// The environment is only consulted when no seed was given.
pub fn seed_or_env(explicit: Option<u64>) -> Result<Option<u64>> {
    seed_or(explicit, SEED_VAR)
}

/// Spin count: `explicit` if given, otherwise `ROULETTE_SPINS`, otherwise 20.
pub fn spins_or_env(explicit: Option<u32>) -> Result<u32> {
    spins_or(explicit, SPINS_VAR)
}
