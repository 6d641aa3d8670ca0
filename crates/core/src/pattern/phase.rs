use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Range, RangeInclusive};

/// Seasonal phase of the bass calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[serde(rename = "winter")]
    Winter,
    #[serde(rename = "pre-spawn")]
    PreSpawn,
    #[serde(rename = "spawn/post-spawn")]
    SpawnPostSpawn,
    #[serde(rename = "summer")]
    Summer,
    #[serde(rename = "fall")]
    Fall,
}

impl Phase {
    pub const ALL: [Phase; 5] = [
        Phase::Winter,
        Phase::PreSpawn,
        Phase::SpawnPostSpawn,
        Phase::Summer,
        Phase::Fall,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Winter => "winter",
            Phase::PreSpawn => "pre-spawn",
            Phase::SpawnPostSpawn => "spawn/post-spawn",
            Phase::Summer => "summer",
            Phase::Fall => "fall",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct PhaseRule {
    temp_f: Range<f64>,
    months: Option<RangeInclusive<u32>>,
    phase: Phase,
}

impl PhaseRule {
    fn matches(&self, temp_f: f64, month: u32) -> bool {
        self.temp_f.contains(&temp_f)
            && self.months.as_ref().map_or(true, |m| m.contains(&month))
    }
}

// Evaluated top to bottom; the first matching rule wins.
const PHASE_RULES: &[PhaseRule] = &[
    PhaseRule { temp_f: f64::NEG_INFINITY..50.0, months: None, phase: Phase::Winter },
    PhaseRule { temp_f: 50.0..60.0, months: Some(9..=12), phase: Phase::Fall },
    PhaseRule { temp_f: 50.0..60.0, months: None, phase: Phase::PreSpawn },
    PhaseRule { temp_f: 60.0..70.0, months: Some(9..=11), phase: Phase::Fall },
    PhaseRule { temp_f: 60.0..70.0, months: None, phase: Phase::SpawnPostSpawn },
    PhaseRule { temp_f: 70.0..80.0, months: None, phase: Phase::Summer },
    PhaseRule { temp_f: 80.0..f64::INFINITY, months: Some(6..=8), phase: Phase::Summer },
    PhaseRule { temp_f: 80.0..f64::INFINITY, months: None, phase: Phase::Fall },
];

/// Returned only when no rule matches (NaN temperatures).
const DEFAULT_PHASE: Phase = Phase::Fall;

/// Classify the seasonal phase from water temperature and calendar month.
pub fn classify_phase(temp_f: f64, month: u32) -> Phase {
    PHASE_RULES
        .iter()
        .find(|rule| rule.matches(temp_f, month))
        .map(|rule| rule.phase)
        .unwrap_or(DEFAULT_PHASE)
}
