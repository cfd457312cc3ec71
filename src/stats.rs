use crate::engine::Trajectory;
use crate::model::State;
use serde::Serialize;

/// Aggregate metrics of a finished run.
#[derive(Debug, PartialEq, Serialize)]
pub struct Summary {
    /// Number of update steps performed.
    pub steps: usize,
    /// Fraction of the population infected during the run.
    pub total_infected: f64,
    /// Earliest time index of maximum infection.
    pub peak_time: u32,
    /// Infected fraction at `peak_time`.
    pub peak_infected: f64,
    /// State at `t_end`.
    pub final_state: State,
}

impl Summary {
    pub fn new(trajectory: &Trajectory) -> Self {
        let (peak_time, peak_infected) = peak_infected(trajectory);
        Self {
            steps: trajectory.len() - 1,
            total_infected: total_infected(trajectory),
            peak_time,
            peak_infected,
            final_state: *trajectory.last(),
        }
    }
}

/// Drop in the susceptible fraction between the first and last entries.
pub fn total_infected(trajectory: &Trajectory) -> f64 {
    trajectory.first().s - trajectory.last().s
}

/// Maximum infected fraction and the earliest time it is reached.
pub fn peak_infected(trajectory: &Trajectory) -> (u32, f64) {
    let mut peak = (trajectory.t0(), f64::NEG_INFINITY);
    for (t, state) in trajectory.iter() {
        if state.i > peak.1 {
            peak = (t, state.i);
        }
    }
    peak
}
