//! Property-based tests for the trimmer
//!
//! These check the formatter's guarantees against arbitrary documents rather
//! than hand-picked fixtures.

mod generators;
mod invariants;
