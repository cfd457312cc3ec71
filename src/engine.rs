//! Discrete-time SIR integration.
//!
//! [`update_func`] advances a [`State`] by one step. [`simulate_final`] and
//! [`simulate_trajectory`] drive any update rule from `t0` to `t_end`, the
//! former keeping only the last state, the latter recording every one.

use crate::model::{State, System};

/// Advance `state` by one forward-difference step.
///
/// The rule is time-invariant, so `_t` is ignored. No clamping is applied:
/// large rates can push compartments outside `[0, 1]`.
pub fn update_func(state: &State, _t: u32, system: &System) -> State {
    let infected = system.beta() * state.i * state.s;
    let recovered = system.gamma() * state.i;

    State {
        s: state.s - infected,
        i: state.i + infected - recovered,
        r: state.r + recovered,
    }
}

/// Run the update rule from `t0` to `t_end` and return the final state.
pub fn simulate_final<F>(system: &System, update: F) -> State
where
    F: Fn(&State, u32, &System) -> State,
{
    log::debug!("running {} steps (final state only)", system.n_steps());

    let mut state = *system.init();
    for t in system.t0()..system.t_end() {
        state = update(&state, t, system);
        log::trace!("t = {} -> {state:?}", t + 1);
    }

    state
}

/// Run the update rule from `t0` to `t_end`, recording every state.
///
/// The result holds `t_end - t0 + 1` entries, the first being the initial
/// state at `t0`.
pub fn simulate_trajectory<F>(system: &System, update: F) -> Trajectory
where
    F: Fn(&State, u32, &System) -> State,
{
    log::debug!("running {} steps (full trajectory)", system.n_steps());

    let mut states = Vec::with_capacity(system.n_steps() as usize + 1);
    states.push(*system.init());

    for t in system.t0()..system.t_end() {
        let prev = &states[states.len() - 1];
        let next = update(prev, t, system);
        log::trace!("t = {} -> {next:?}", t + 1);
        states.push(next);
    }

    Trajectory {
        t0: system.t0(),
        states,
    }
}

/// Time-indexed history of a simulation run.
///
/// Entry `k` holds the state at time `t0 + k`, so indices are consecutive
/// and increasing. A trajectory is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    t0: u32,
    states: Vec<State>,
}

impl Trajectory {
    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn t0(&self) -> u32 {
        self.t0
    }

    pub fn t_end(&self) -> u32 {
        self.t0 + (self.states.len() as u32 - 1)
    }

    /// State at time index `t`, if recorded.
    #[cfg(test)]
    pub fn get(&self, t: u32) -> Option<&State> {
        let idx = t.checked_sub(self.t0)?;
        self.states.get(idx as usize)
    }

    pub fn first(&self) -> &State {
        &self.states[0]
    }

    pub fn last(&self) -> &State {
        &self.states[self.states.len() - 1]
    }

    /// Iterate over `(time, state)` pairs in increasing time order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &State)> {
        (self.t0..=self.t_end()).zip(self.states.iter())
    }

    pub fn susceptible(&self) -> Vec<(u32, f64)> {
        self.series(|state| state.s)
    }

    pub fn infected(&self) -> Vec<(u32, f64)> {
        self.series(|state| state.i)
    }

    pub fn resistant(&self) -> Vec<(u32, f64)> {
        self.series(|state| state.r)
    }

    fn series(&self, field: impl Fn(&State) -> f64) -> Vec<(u32, f64)> {
        self.iter().map(|(t, state)| (t, field(state))).collect()
    }
}
