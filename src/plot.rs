//! Rendering of simulation results.
//!
//! Drawing goes through an explicit [`Surface`] handed to [`plot_results`],
//! which draws, labels and finally consumes it. Nothing persists between
//! calls.
#![cfg_attr(not(feature = "gui"), allow(dead_code))]

use anyhow::{Context, Result};

/// Stroke pattern of a line series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Dashed,
    Solid,
    Dotted,
}

/// A labeled line of `[x, y]` points.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub style: LineStyle,
    pub points: Vec<[f64; 2]>,
}

impl Series {
    pub fn new(label: &str, style: LineStyle, data: &[(u32, f64)]) -> Self {
        Self {
            label: label.to_owned(),
            style,
            points: data.iter().map(|&(t, y)| [f64::from(t), y]).collect(),
        }
    }
}

/// A drawing target for line charts.
pub trait Surface {
    fn draw(&mut self, series: Series) -> Result<()>;

    fn label_axes(&mut self, x: &str, y: &str) -> Result<()>;

    /// Present the chart and release the surface.
    fn finish(self) -> Result<()>;
}

/// Draw the susceptible, infected and resistant series on `surface`.
pub fn plot_results<S: Surface>(
    mut surface: S,
    s: &[(u32, f64)],
    i: &[(u32, f64)],
    r: &[(u32, f64)],
) -> Result<()> {
    surface
        .draw(Series::new("Susceptible", LineStyle::Dashed, s))
        .context("failed to draw susceptible series")?;
    surface
        .draw(Series::new("Infected", LineStyle::Solid, i))
        .context("failed to draw infected series")?;
    surface
        .draw(Series::new("Resistant", LineStyle::Dotted, r))
        .context("failed to draw resistant series")?;

    surface
        .label_axes("Time (days)", "Fraction of population")
        .context("failed to label axes")?;

    surface.finish().context("failed to finish surface")
}

#[cfg(feature = "gui")]
pub use window::WindowSurface;

#[cfg(feature = "gui")]
mod window {
    use super::{LineStyle, Series, Surface};
    use anyhow::{Result, anyhow};
    use eframe::egui;
    use egui_plot::{Legend, Line, Plot, PlotPoints};

    /// A native window showing a single chart.
    ///
    /// Series are buffered until [`Surface::finish`], which blocks until the
    /// window is closed.
    pub struct WindowSurface {
        title: String,
        series: Vec<Series>,
        x_label: String,
        y_label: String,
    }

    impl WindowSurface {
        pub fn new(title: &str) -> Self {
            Self {
                title: title.to_owned(),
                series: Vec::new(),
                x_label: String::new(),
                y_label: String::new(),
            }
        }
    }

    impl Surface for WindowSurface {
        fn draw(&mut self, series: Series) -> Result<()> {
            self.series.push(series);
            Ok(())
        }

        fn label_axes(&mut self, x: &str, y: &str) -> Result<()> {
            self.x_label = x.to_owned();
            self.y_label = y.to_owned();
            Ok(())
        }

        fn finish(self) -> Result<()> {
            let title = self.title.clone();
            log::info!("opening plot window {title:?}");

            eframe::run_native(
                &title,
                eframe::NativeOptions::default(),
                Box::new(move |_cc| Ok(Box::new(ChartApp { surface: self }))),
            )
            .map_err(|err| anyhow!("failed to run plot window: {err}"))
        }
    }

    struct ChartApp {
        surface: WindowSurface,
    }

    impl eframe::App for ChartApp {
        fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
            let surface = &self.surface;
            egui::CentralPanel::default().show(ctx, |ui| {
                Plot::new("sir_chart")
                    .legend(Legend::default())
                    .x_axis_label(surface.x_label.as_str())
                    .y_axis_label(surface.y_label.as_str())
                    .show(ui, |plot_ui| {
                        for series in &surface.series {
                            let points: PlotPoints = series.points.iter().copied().collect();
                            plot_ui.line(
                                Line::new(points)
                                    .name(&series.label)
                                    .style(line_style(series.style)),
                            );
                        }
                    });
            });
        }
    }

    fn line_style(style: LineStyle) -> egui_plot::LineStyle {
        match style {
            LineStyle::Dashed => egui_plot::LineStyle::Dashed { length: 10.0 },
            LineStyle::Solid => egui_plot::LineStyle::Solid,
            LineStyle::Dotted => egui_plot::LineStyle::Dotted { spacing: 8.0 },
        }
    }
}
