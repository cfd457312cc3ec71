use crate::config::Config;
use crate::engine::{simulate_final, simulate_trajectory, update_func};
use crate::model::System;
use crate::stats::Summary;
use anyhow::{Context, Result};
use std::io::Write;

pub struct Manager {
    system: System,
}

impl Manager {
    pub fn new(cfg: Config) -> Result<Self> {
        cfg.validate().context("failed to validate cfg")?;
        log::info!("{cfg:#?}");

        let system = cfg.system();
        log::info!("{system:#?}");

        Ok(Self { system })
    }

    pub fn run_final<W: Write>(&self, out: &mut W) -> Result<()> {
        let state = simulate_final(&self.system, update_func);
        log::info!("completed {} steps", self.system.n_steps());

        writeln!(out, "{} {} {}", state.s, state.i, state.r)
            .context("failed to write final state")?;
        Ok(())
    }

    pub fn run_trajectory<W: Write>(&self, out: &mut W) -> Result<()> {
        let trajectory = simulate_trajectory(&self.system, update_func);
        log::info!(
            "recorded {} entries up to t = {}",
            trajectory.len(),
            trajectory.t_end()
        );

        for (t, state) in trajectory.iter() {
            writeln!(out, "{t} {} {} {}", state.s, state.i, state.r)
                .with_context(|| format!("failed to write entry {t}"))?;
        }
        Ok(())
    }

    pub fn run_summary<W: Write>(&self, out: &mut W) -> Result<()> {
        let trajectory = simulate_trajectory(&self.system, update_func);
        let summary = Summary::new(&trajectory);
        log::info!(
            "infection peaks at t = {} with {:.4}",
            summary.peak_time,
            summary.peak_infected
        );

        let text = toml::to_string(&summary).context("failed to serialize summary")?;
        out.write_all(text.as_bytes())
            .context("failed to write summary")?;
        Ok(())
    }

    #[cfg(feature = "gui")]
    pub fn run_plot(&self) -> Result<()> {
        use crate::plot::{WindowSurface, plot_results};

        let trajectory = simulate_trajectory(&self.system, update_func);
        let surface = WindowSurface::new("SIR model");
        plot_results(
            surface,
            &trajectory.susceptible(),
            &trajectory.infected(),
            &trajectory.resistant(),
        )
        .context("failed to plot results")
    }

    #[cfg(not(feature = "gui"))]
    pub fn run_plot(&self) -> Result<()> {
        anyhow::bail!("plotting requires the `gui` feature");
    }
}
