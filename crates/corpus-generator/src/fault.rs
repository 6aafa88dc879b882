//! Per-line fault and outcome decisions.
//!
//! Every line consumes draws from the shared RNG in a fixed order:
//!
//! 1. terminator (`crlf_rate`)
//! 2. empty (`empty_rate`), stop on hit
//! 3. oversized (`oversize_rate`), stop on hit
//! 4. malformed (`malformed_rate`), stop on hit
//! 5. noise fields, then one outcome draw split into
//!    missing / match / mismatch
//!
//! The rates are independent per-check probabilities. A hit on an earlier
//! check short-circuits the later ones, so the realized share of a
//! lower-priority category is smaller than its configured rate whenever a
//! higher-priority rate is non-zero. Rates are never renormalized.

use crate::error::ConfigError;
use crate::line::Terminator;
use rand::Rng;
use std::fmt;

/// Default share of records that carry the target value.
pub const DEFAULT_MATCH_RATE: f64 = 0.01;
/// Default share of records without the target path.
pub const DEFAULT_MISSING_RATE: f64 = 0.10;
/// Default share of malformed lines.
pub const DEFAULT_MALFORMED_RATE: f64 = 0.001;

/// Category of a generated line. Exactly one applies per line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineOutcome {
    Empty,
    Oversized,
    Malformed,
    Match,
    Missing,
    Mismatch,
}

impl LineOutcome {
    pub const ALL: [LineOutcome; 6] = [
        LineOutcome::Match,
        LineOutcome::Missing,
        LineOutcome::Mismatch,
        LineOutcome::Empty,
        LineOutcome::Oversized,
        LineOutcome::Malformed,
    ];

    /// Whether the line is not a valid JSON record.
    pub fn is_fault(&self) -> bool {
        matches!(
            self,
            LineOutcome::Empty | LineOutcome::Oversized | LineOutcome::Malformed
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LineOutcome::Empty => "empty",
            LineOutcome::Oversized => "oversized",
            LineOutcome::Malformed => "malformed",
            LineOutcome::Match => "match",
            LineOutcome::Missing => "missing",
            LineOutcome::Mismatch => "mismatch",
        }
    }
}

impl fmt::Display for LineOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Independent rate parameters, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaultRates {
    pub match_rate: f64,
    pub missing_rate: f64,
    pub malformed_rate: f64,
    pub empty_rate: f64,
    pub crlf_rate: f64,
    pub oversize_rate: f64,
}

impl Default for FaultRates {
    fn default() -> Self {
        Self {
            match_rate: DEFAULT_MATCH_RATE,
            missing_rate: DEFAULT_MISSING_RATE,
            malformed_rate: DEFAULT_MALFORMED_RATE,
            empty_rate: 0.0,
            crlf_rate: 0.0,
            oversize_rate: 0.0,
        }
    }
}

impl FaultRates {
    /// Rates that produce only matching records terminated by LF.
    pub fn all_match() -> Self {
        Self {
            match_rate: 1.0,
            missing_rate: 0.0,
            malformed_rate: 0.0,
            empty_rate: 0.0,
            crlf_rate: 0.0,
            oversize_rate: 0.0,
        }
    }

    fn named(&self) -> [(&'static str, f64); 6] {
        [
            ("match-rate", self.match_rate),
            ("missing-rate", self.missing_rate),
            ("malformed-rate", self.malformed_rate),
            ("empty-rate", self.empty_rate),
            ("crlf-rate", self.crlf_rate),
            ("oversize-rate", self.oversize_rate),
        ]
    }

    /// Check every rate lies in `[0, 1]`. NaN is rejected.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in self.named() {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::RateOutOfRange { name, value });
            }
        }
        Ok(())
    }
}

/// Structural fault replacing a record line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    Empty,
    Oversized,
    Malformed,
}

impl From<Fault> for LineOutcome {
    fn from(fault: Fault) -> Self {
        match fault {
            Fault::Empty => LineOutcome::Empty,
            Fault::Oversized => LineOutcome::Oversized,
            Fault::Malformed => LineOutcome::Malformed,
        }
    }
}

/// How a well-formed record treats the target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    Match,
    Missing,
    Mismatch,
}

impl From<RecordOutcome> for LineOutcome {
    fn from(outcome: RecordOutcome) -> Self {
        match outcome {
            RecordOutcome::Match => LineOutcome::Match,
            RecordOutcome::Missing => LineOutcome::Missing,
            RecordOutcome::Mismatch => LineOutcome::Mismatch,
        }
    }
}

/// Makes the per-line Bernoulli decisions against the configured rates.
#[derive(Debug, Clone, Copy)]
pub struct FaultInjector {
    rates: FaultRates,
}

impl FaultInjector {
    pub fn new(rates: FaultRates) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &FaultRates {
        &self.rates
    }

    /// Draw the line terminator. Consumes one draw.
    pub fn pick_terminator<R: Rng>(&self, rng: &mut R) -> Terminator {
        if draw(rng) < self.rates.crlf_rate {
            Terminator::Crlf
        } else {
            Terminator::Lf
        }
    }

    /// Run the empty, oversized and malformed checks in priority order.
    ///
    /// Consumes one draw per check performed and stops at the first hit.
    pub fn pick_fault<R: Rng>(&self, rng: &mut R) -> Option<Fault> {
        let checks = [
            (Fault::Empty, self.rates.empty_rate),
            (Fault::Oversized, self.rates.oversize_rate),
            (Fault::Malformed, self.rates.malformed_rate),
        ];
        checks
            .into_iter()
            .find(|(_, rate)| draw(rng) < *rate)
            .map(|(fault, _)| fault)
    }

    /// Split one draw into missing, match and mismatch. Consumes one draw.
    pub fn pick_record_outcome<R: Rng>(&self, rng: &mut R) -> RecordOutcome {
        let d = draw(rng);
        if d < self.rates.missing_rate {
            RecordOutcome::Missing
        } else if d < self.rates.missing_rate + self.rates.match_rate {
            RecordOutcome::Match
        } else {
            RecordOutcome::Mismatch
        }
    }
}

/// One uniform sample in `[0, 1)`.
fn draw<R: Rng>(rng: &mut R) -> f64 {
    rng.gen::<f64>()
}
