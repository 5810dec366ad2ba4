// Host-side tests for the bounded chart feed.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod chart {
    include!("../src/chart.rs");
}

use chart::*;

#[test]
fn emit_advances_a_shared_timestep() {
    let mut feed = ChartFeed::new(3);
    assert_eq!(feed.step(), 0);
    feed.emit(&[1.0, 2.0, 3.0]);
    feed.emit(&[4.0, 5.0, 6.0]);
    assert_eq!(feed.step(), 2);
    for series in feed.series() {
        assert_eq!(series.len(), 2);
    }
}

#[test]
fn values_land_in_their_own_series_in_order() {
    let mut feed = ChartFeed::new(2);
    feed.emit(&[10.0, 20.0]);
    feed.emit(&[11.0, 21.0]);
    let first: Vec<(u32, f64)> = feed.series()[0].iter().collect();
    let second: Vec<(u32, f64)> = feed.series()[1].iter().collect();
    assert_eq!(first, vec![(1, 10.0), (2, 11.0)]);
    assert_eq!(second, vec![(1, 20.0), (2, 21.0)]);
}

#[test]
fn series_are_capped_with_fifo_eviction() {
    let mut feed = ChartFeed::new(1);
    for i in 0..250 {
        feed.emit(&[i as f64]);
    }
    let series = &feed.series()[0];
    assert_eq!(series.len(), 200);
    // first 50 timesteps evicted
    assert_eq!(series.oldest(), Some((51, 50.0)));
    // remaining steps are contiguous and ascending
    let mut expected = 51;
    for (step, _) in series.iter() {
        assert_eq!(step, expected);
        expected += 1;
    }
}

#[test]
fn series_below_capacity_keep_everything() {
    let mut feed = ChartFeed::new(1);
    for i in 0..200 {
        feed.emit(&[i as f64]);
    }
    assert_eq!(feed.series()[0].len(), 200);
    assert_eq!(feed.series()[0].oldest(), Some((1, 0.0)));
}
