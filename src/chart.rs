use crate::constants::CHART_POINTS;
use std::collections::VecDeque;

/// One plotted signal: (timestep, value) pairs with FIFO eviction.
pub struct ChartSeries {
    points: VecDeque<(u32, f64)>,
    capacity: usize,
}

impl ChartSeries {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    fn push(&mut self, step: u32, value: f64) {
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back((step, value));
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.points.iter().copied()
    }

    pub fn oldest(&self) -> Option<(u32, f64)> {
        self.points.front().copied()
    }
}

/// Bounded history behind one chart: a fixed set of series advancing on a
/// shared timestep.
pub struct ChartFeed {
    series: Vec<ChartSeries>,
    step: u32,
}

impl ChartFeed {
    pub fn new(series_count: usize) -> Self {
        Self {
            series: (0..series_count)
                .map(|_| ChartSeries::new(CHART_POINTS))
                .collect(),
            step: 0,
        }
    }

    /// Record one value per series for the next timestep. `values` arity
    /// must match the series count.
    pub fn emit(&mut self, values: &[f64]) {
        self.step += 1;
        for (series, value) in self.series.iter_mut().zip(values) {
            series.push(self.step, *value);
        }
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    pub fn series(&self) -> &[ChartSeries] {
        &self.series
    }
}
