//! Model definition: compartment state and system configuration.

use serde::{Deserialize, Serialize};

/// Proportions of the population in each compartment.
///
/// For a normalized state `s + i + r` is approximately 1. The update rule
/// preserves the sum algebraically, but nothing enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct State {
    /// Susceptible fraction.
    pub s: f64,
    /// Infected fraction.
    pub i: f64,
    /// Resistant (recovered) fraction.
    pub r: f64,
}

impl State {
    pub fn new(s: f64, i: f64, r: f64) -> Self {
        Self { s, i, r }
    }

    /// Sum of all compartments.
    pub fn total(&self) -> f64 {
        self.s + self.i + self.r
    }

    /// Return a copy with every compartment divided by the total.
    pub fn normalized(&self) -> Self {
        let total = self.total();
        Self {
            s: self.s / total,
            i: self.i / total,
            r: self.r / total,
        }
    }
}

/// Immutable configuration of a single simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct System {
    init: State,
    t0: u32,
    t_end: u32,
    beta: f64,
    gamma: f64,
}

impl System {
    /// Create a system from raw compartment values, normalizing `init`.
    pub fn new(init: State, t0: u32, t_end: u32, beta: f64, gamma: f64) -> Self {
        Self {
            init: init.normalized(),
            t0,
            t_end,
            beta,
            gamma,
        }
    }

    pub fn init(&self) -> &State {
        &self.init
    }

    pub fn t0(&self) -> u32 {
        self.t0
    }

    pub fn t_end(&self) -> u32 {
        self.t_end
    }

    /// Transmission rate.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Recovery rate.
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Number of update steps between `t0` and `t_end`.
    pub fn n_steps(&self) -> u32 {
        self.t_end.saturating_sub(self.t0)
    }
}

pub const DEFAULT_INIT: State = State {
    s: 89.0,
    i: 1.0,
    r: 0.0,
};
pub const DEFAULT_T0: u32 = 0;
pub const DEFAULT_T_END: u32 = 7 * 14;

/// Build the default system for the given rates.
///
/// Starts from 89 susceptible and 1 infected, normalized to proportions,
/// and runs for 14 weeks of daily steps.
pub fn make_system(beta: f64, gamma: f64) -> System {
    System::new(DEFAULT_INIT, DEFAULT_T0, DEFAULT_T_END, beta, gamma)
}
