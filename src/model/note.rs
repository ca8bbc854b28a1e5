use serde::{Deserialize, Serialize};

/// A single normalized chart note, as every stage after parsing sees it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Note {
    /// Seconds from the start of the chart, never negative.
    pub time: f64,
    pub lane: u32,
    /// Hold length in seconds, `0.0` for a tap.
    #[serde(default)]
    pub duration: f64,
    pub velocity: f64,
}

impl Note {
    pub fn new(time: f64, lane: u32, velocity: f64) -> Self {
        Self {
            time,
            lane,
            duration: 0.0,
            velocity,
        }
    }

    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }
}
