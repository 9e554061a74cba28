//! Deterministic playthrough simulator for Time Condenser balance checks.
//! Run with: cargo test simulate_greedy -- --nocapture
