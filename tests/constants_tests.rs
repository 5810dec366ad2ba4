// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn noise_parameters_are_sane() {
    assert!(HALL_NOISE > 0);
    assert!(TMR_NOISE > 0);
    assert!(ANALOG_NOISE > 0);
    assert!(TMR_JITTER_AMPLITUDE > 0.0);
    assert!(TMR_JITTER_PERIOD_MS > 0.0);

    // deadzone must leave usable travel
    assert!(DEADZONE > 0 && DEADZONE < MAX_OUTPUT);
    assert!(ACCURACY_NOISE_DIVISOR > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn geometry_relationships_hold() {
    // knob stays inside the travel ring, ring inside the canvas
    assert!(KNOB_SIZE < RADIUS as f64);
    assert!(MINI_KNOB_SIZE < MINI_RADIUS as f64);
    assert!((RADIUS as f64) * 2.0 < WIDTH.min(HEIGHT));
    assert!((MINI_RADIUS as f64) * 2.0 < MINI_WIDTH.min(MINI_HEIGHT));
    assert!(MINI_RADIUS < RADIUS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn relaxation_converges() {
    assert!(RELAX_FACTOR > 0.0 && RELAX_FACTOR < 1.0);
    assert!(RELAX_SNAP_EPSILON > 0.0);
    assert!(RELAX_TICK_MS > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn history_buffers_are_bounded() {
    assert!(STATS_WINDOW > 0);
    assert!(CHART_POINTS > 0);
    // the chart plots the full normalized range
    assert!(CHART_VALUE_MIN < CHART_VALUE_MAX);
    assert!(CHART_VALUE_MAX == MAX_OUTPUT as f64);
    assert!(CHART_VALUE_MIN == -(MAX_OUTPUT as f64));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn playfield_fits_the_car_and_coins() {
    assert!(GAME_MARGIN * 2.0 < GAME_WIDTH);
    assert!(GAME_MARGIN * 2.0 < GAME_HEIGHT);
    assert!(CAR_HALF <= GAME_MARGIN);
    assert!(COIN_RADIUS > 0.0);
    assert!(CAR_SPEED > 0.0);
    assert!(COIN_COUNT > 0);
    assert!(COIN_SCORE > 0);
}
