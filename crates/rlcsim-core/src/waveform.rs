//! Sampled time-series output types.

use serde::{Deserialize, Serialize};

/// A single sample in a simulated waveform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimePoint {
    /// Time value (s).
    pub time: f64,
    /// Sampled quantity at this time.
    pub value: f64,
}

/// A sampled waveform: `(time, value)` pairs in strictly increasing
/// time order.
///
/// Solvers append one sample per step; once a run completes the
/// waveform is handed to the caller and never mutated by the engine
/// again.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Waveform {
    points: Vec<TimePoint>,
}

impl Waveform {
    /// Create an empty waveform.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty waveform with room for `capacity` samples.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Append a sample.
    pub fn push(&mut self, time: f64, value: f64) {
        self.points.push(TimePoint { time, value });
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the waveform holds no samples.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All samples in time order.
    pub fn points(&self) -> &[TimePoint] {
        &self.points
    }

    /// The first sample, if any.
    pub fn first(&self) -> Option<&TimePoint> {
        self.points.first()
    }

    /// The last sample, if any.
    pub fn last(&self) -> Option<&TimePoint> {
        self.points.last()
    }

    /// All time values.
    pub fn times(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.time).collect()
    }

    /// All sampled values.
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Interpolate the value at a specific time.
    ///
    /// Uses linear interpolation between the two nearest samples.
    /// Returns `None` if the waveform is empty or `time` lies outside
    /// the sampled range.
    pub fn interpolate_at(&self, time: f64) -> Option<f64> {
        let first = self.points.first()?;
        let last = self.points.last()?;
        if time < first.time || time > last.time {
            return None;
        }

        for pair in self.points.windows(2) {
            let (p0, p1) = (pair[0], pair[1]);
            if time >= p0.time && time <= p1.time {
                let alpha = (time - p0.time) / (p1.time - p0.time);
                return Some(p0.value * (1.0 - alpha) + p1.value * alpha);
            }
        }

        // time == last.time on a single-sample waveform
        Some(last.value)
    }

    /// Largest pointwise absolute difference against another waveform.
    ///
    /// Both waveforms must be sampled on the same time grid. Returns
    /// `None` when the lengths differ or either waveform is empty.
    pub fn max_abs_delta(&self, other: &Waveform) -> Option<f64> {
        if self.is_empty() || self.len() != other.len() {
            return None;
        }
        let max = self
            .points
            .iter()
            .zip(other.points.iter())
            .map(|(a, b)| (a.value - b.value).abs())
            .fold(0.0_f64, f64::max);
        Some(max)
    }

    /// Root-mean-square pointwise difference against another waveform.
    ///
    /// Same grid requirements as [`Waveform::max_abs_delta`].
    pub fn rms_delta(&self, other: &Waveform) -> Option<f64> {
        if self.is_empty() || self.len() != other.len() {
            return None;
        }
        let sum_sq: f64 = self
            .points
            .iter()
            .zip(other.points.iter())
            .map(|(a, b)| {
                let d = a.value - b.value;
                d * d
            })
            .sum();
        Some((sum_sq / self.len() as f64).sqrt())
    }
}

impl std::ops::Index<usize> for Waveform {
    type Output = TimePoint;

    fn index(&self, index: usize) -> &TimePoint {
        &self.points[index]
    }
}

/// The three waveforms produced by one solver run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitWaveforms {
    /// Capacitor charge q(t) (C).
    pub charge: Waveform,
    /// Circuit current I(t) (A).
    pub current: Waveform,
    /// Induced solenoid field B(t) (T).
    pub magnetic_field: Waveform,
}

impl CircuitWaveforms {
    /// Create three empty waveforms, each with room for `capacity`
    /// samples.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            charge: Waveform::with_capacity(capacity),
            current: Waveform::with_capacity(capacity),
            magnetic_field: Waveform::with_capacity(capacity),
        }
    }

    /// Number of samples in each series.
    pub fn len(&self) -> usize {
        self.charge.len()
    }

    /// Whether the run produced no samples.
    pub fn is_empty(&self) -> bool {
        self.charge.is_empty()
    }
}
