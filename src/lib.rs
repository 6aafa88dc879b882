//! jsonl-harness library
//!
//! Harness tooling for exercising line-oriented JSON query tools ("matchers").
//!
//! # Features
//!
//! - Corpus generation: deterministic JSONL files with controlled rates of
//!   matching, missing and mismatching records
//! - Fault injection: empty, oversized and malformed lines, CRLF endings and
//!   a missing final newline
//! - Benchmarking: timed, repeated matcher runs with a text or JSON summary
//!
//! # Crates
//!
//! - `corpus_generator` - seeded line generation
//! - `corpus_populate_jsonl` - writing corpora to files or stdout
//! - `matcher_bench` - matcher invocation and timing statistics
//!
//! # CLI Usage
//!
//! ```bash
//! # 1M lines, 1% matching user.id == 42, some CRLF endings
//! jsonl-harness generate --out data/1m.jsonl --lines 1000000 \
//!   --path user.id --type number --value 42 --crlf-rate 0.05
//!
//! # Benchmark a matcher on the generated file
//! jsonl-harness bench --matcher ./build/release/bin/jlq --file data/1m.jsonl \
//!   --path user.id --type number --value 42 --runs 10 --json-out bench.json
//! ```

pub mod bench;
pub mod generate;

pub use bench::run_bench;
pub use generate::run_generate;
