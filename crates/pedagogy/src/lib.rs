// model = "claude-opus-4-5"
// created = "2026-08-05"
// modified = "2026-08-05"
// driver = "Isaac Clayton"

//! Educational baseline implementations.
//!
//! This crate holds the slow reference algorithms the yardstick harness
//! times and cross-checks against. They are written for clarity, not speed:
//!
//! | Baseline | Algorithm | Cost |
//! |----------|-----------|------|
//! | `distance::recursive` | direct recursion on the definition | exponential |
//!
//! None of these belong in a production call path. They exist so the fast
//! implementations have something honest to be measured against.

pub mod distance;
