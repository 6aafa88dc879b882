//! Noise fields that pad records with unrelated, randomly typed values.

use crate::record::Record;
use rand::Rng;
use serde_json::Value;

/// Upper bound (inclusive) of integer noise values.
pub const NOISE_INT_MAX: i64 = 10_000;

/// Letters a string noise field is chosen from.
pub const NOISE_LETTERS: [&str; 3] = ["a", "b", "c"];

/// Kind of value a noise field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoiseKind {
    Integer,
    Fraction,
    Letter,
    Boolean,
}

impl NoiseKind {
    pub const ALL: [NoiseKind; 4] = [
        NoiseKind::Integer,
        NoiseKind::Fraction,
        NoiseKind::Letter,
        NoiseKind::Boolean,
    ];

    /// Pick a kind uniformly. Consumes one draw.
    ///
    /// Indices are drawn as `u32` so the stream does not depend on the
    /// host's pointer width.
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len() as u32) as usize]
    }

    /// Generate a value of this kind. Consumes one draw.
    pub fn generate<R: Rng>(self, rng: &mut R) -> Value {
        match self {
            NoiseKind::Integer => Value::from(rng.gen_range(0..=NOISE_INT_MAX)),
            NoiseKind::Fraction => Value::from(rng.gen::<f64>()),
            NoiseKind::Letter => {
                let letter = rng.gen_range(0..NOISE_LETTERS.len() as u32) as usize;
                Value::from(NOISE_LETTERS[letter])
            }
            NoiseKind::Boolean => Value::Bool(rng.gen_bool(0.5)),
        }
    }
}

/// Name of the noise field at position `n`.
pub fn noise_field_name(n: usize) -> String {
    format!("noise_{n}")
}

/// Append `count` noise fields to `record`, in field order.
///
/// Each field consumes a kind draw followed by the value draw.
pub fn append_noise_fields<R: Rng>(record: &mut Record, count: usize, rng: &mut R) {
    for n in 0..count {
        let kind = NoiseKind::sample(rng);
        record.insert(noise_field_name(n), kind.generate(rng));
    }
}
