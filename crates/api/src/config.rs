use std::env;

use anyhow::{bail, Context, Result};

use crate::standings::{CategoryWeights, MedalWeights};

/// Scoring rules that vary between deployments.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoringConfig {
    /// Individual game wins needed to take a tie (3 for best-of-5).
    pub tie_win_threshold: u32,
    pub tie_points_on_win: f64,
    pub medal_weights: CategoryWeights,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            tie_win_threshold: 3,
            tie_points_on_win: 3.0,
            medal_weights: CategoryWeights::default(),
        }
    }
}

impl ScoringConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let tie_win_threshold = match lookup("TIE_WIN_THRESHOLD") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .with_context(|| format!("TIE_WIN_THRESHOLD must be a whole number, got '{raw}'"))?,
            None => defaults.tie_win_threshold,
        };
        if tie_win_threshold == 0 {
            bail!("TIE_WIN_THRESHOLD must be at least 1");
        }

        let tie_points_on_win = match lookup("TIE_POINTS_ON_WIN") {
            Some(raw) => parse_points("TIE_POINTS_ON_WIN", &raw)?,
            None => defaults.tie_points_on_win,
        };

        let sports = match lookup("MEDAL_WEIGHTS_SPORTS") {
            Some(raw) => parse_weights("MEDAL_WEIGHTS_SPORTS", &raw)?,
            None => defaults.medal_weights.sports,
        };
        let cultural = match lookup("MEDAL_WEIGHTS_CULTURAL") {
            Some(raw) => parse_weights("MEDAL_WEIGHTS_CULTURAL", &raw)?,
            None => defaults.medal_weights.cultural,
        };

        Ok(Self {
            tie_win_threshold,
            tie_points_on_win,
            medal_weights: CategoryWeights { sports, cultural },
        })
    }
}

fn parse_points(name: &str, raw: &str) -> Result<f64> {
    let value = raw
        .trim()
        .parse::<f64>()
        .with_context(|| format!("{name} must be a number, got '{raw}'"))?;
    if !value.is_finite() || value < 0.0 {
        bail!("{name} must be a non-negative number, got '{raw}'");
    }
    Ok(value)
}

/// `"gold,silver,bronze"`, e.g. `3,2,1`.
fn parse_weights(name: &str, raw: &str) -> Result<MedalWeights> {
    let parts: Vec<&str> = raw.split(',').collect();
    if parts.len() != 3 {
        bail!("{name} must be three comma-separated numbers (gold,silver,bronze), got '{raw}'");
    }

    Ok(MedalWeights::new(
        parse_points(name, parts[0])?,
        parse_points(name, parts[1])?,
        parse_points(name, parts[2])?,
    ))
}
