//! Population statistics: per-tick counts, bounded history, and stacked chart bands.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::constants::DT;

/// Population sizes at one instant.
///
/// `susceptible + infected + recovered + dead == total` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationCounts {
    pub susceptible: u32,
    pub infected: u32,
    pub recovered: u32,
    pub dead: u32,
    /// Initial population N.
    pub total: u32,
}

impl PopulationCounts {
    /// Build counts from the live collections; deaths are what is missing from N.
    pub fn from_live(susceptible: u32, infected: u32, recovered: u32, total: u32) -> Self {
        let live = susceptible + infected + recovered;
        Self {
            susceptible,
            infected,
            recovered,
            dead: total.saturating_sub(live),
            total,
        }
    }

    /// Agents still present in the simulation.
    pub fn live(&self) -> u32 {
        self.susceptible + self.infected + self.recovered
    }
}

/// Bounded history of population samples, oldest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PopulationHistory {
    capacity: usize,
    samples: VecDeque<PopulationCounts>,
}

impl PopulationHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            samples: VecDeque::with_capacity(capacity),
        }
    }

    /// Append a sample, evicting the oldest once full. A zero capacity keeps nothing.
    pub fn record(&mut self, counts: PopulationCounts) {
        if self.capacity == 0 {
            return;
        }
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(counts);
    }

    pub fn latest(&self) -> Option<&PopulationCounts> {
        self.samples.back()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PopulationCounts> {
        self.samples.iter()
    }

    /// Highest infected count in the retained window.
    pub fn peak_infected(&self) -> u32 {
        self.samples.iter().map(|c| c.infected).max().unwrap_or(0)
    }
}

/// Heights of the stacked areas in one chart column, bottom to top.
///
/// Whatever is left above `recovered` is the dead share.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackedBands {
    pub susceptible: u32,
    pub infected: u32,
    pub recovered: u32,
}

impl StackedBands {
    /// Scale counts to a chart of `chart_height` pixels, truncating each band.
    pub fn from_counts(counts: &PopulationCounts, chart_height: u32) -> Self {
        if counts.total == 0 {
            return Self::default();
        }
        let scale = |n: u32| ((n as f64 / counts.total as f64) * chart_height as f64) as u32;
        Self {
            susceptible: scale(counts.susceptible),
            infected: scale(counts.infected),
            recovered: scale(counts.recovered),
        }
    }

    /// Pixels not covered by any live band.
    pub fn dead(&self, chart_height: u32) -> u32 {
        chart_height.saturating_sub(self.susceptible + self.infected + self.recovered)
    }
}

/// Chart column for a tick: one column per simulated second, pinned to the last column.
pub fn chart_column(tick: u64, chart_width: u32) -> u32 {
    if chart_width == 0 {
        return 0;
    }
    let column = (tick as f64 * DT) as u32;
    column.min(chart_width - 1)
}
