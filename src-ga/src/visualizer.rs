use std::path::{Path, PathBuf};

use plotly::common::{Fill, Line, Mode, Title};
use plotly::layout::{Axis, Layout};
use plotly::{Plot, Scatter};

use crate::error::TunerError;
use crate::stats::ScoreHistory;

/// Sink for the score history, called every `plot_step` generations
pub trait Visualizer {
	fn progress_band(&mut self, history: &ScoreHistory, score_name: &str) -> Result<(), TunerError>;
}

/// Writes an HTML "progress band" (max, mean, min by generation) with plotly
#[derive(Debug, Clone)]
pub struct PlotlyVisualizer {
	output_dir: PathBuf,
}

impl PlotlyVisualizer {
	pub fn new(output_dir: impl Into<PathBuf>) -> Self {
		Self { output_dir: output_dir.into() }
	}

	/// Plots go below `GATUNER_DIR/data_generated/plots`
	pub fn from_env() -> Result<Self, TunerError> {
		Ok(Self::new(gatuner_env::get_plots_dir()?))
	}

	pub fn output_path(&self, score_name: &str) -> PathBuf {
		let stem: String = score_name
			.chars()
			.map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
			.collect();
		self.output_dir.join(format!("{}_progress.html", stem))
	}

	fn write(&self, plot: &Plot, path: &Path) -> Result<(), TunerError> {
		std::fs::create_dir_all(&self.output_dir)
			.map_err(|e| TunerError::Output(format!("{}: {}", self.output_dir.display(), e)))?;
		std::fs::write(path, plot.to_html())
			.map_err(|e| TunerError::Output(format!("{}: {}", path.display(), e)))
	}
}

impl Visualizer for PlotlyVisualizer {
	fn progress_band(&mut self, history: &ScoreHistory, score_name: &str) -> Result<(), TunerError> {
		let plot = progress_band_plot(history, score_name);
		let path = self.output_path(score_name);
		self.write(&plot, &path)?;
		log::info!("Progress plot saved to {}", path.display());
		Ok(())
	}
}

/// Max / mean / min lines with the band between max and min filled
pub fn progress_band_plot(history: &ScoreHistory, score_name: &str) -> Plot {
	let x: Vec<usize> = (1..=history.len()).collect();
	let mut plot = Plot::new();

	// min first so that the max trace fills down to it
	let min_trace = Scatter::new(x.clone(), history.min_scores.clone())
		.name(&format!("Min {}", score_name))
		.mode(Mode::Lines)
		.line(Line::new().color("red").width(2.0));
	plot.add_trace(min_trace);

	let max_trace = Scatter::new(x.clone(), history.max_scores.clone())
		.name(&format!("Max {}", score_name))
		.mode(Mode::Lines)
		.fill(Fill::ToNextY)
		.fill_color("rgba(156, 39, 176, 0.2)")
		.line(Line::new().color("blue").width(2.0));
	plot.add_trace(max_trace);

	let mean_trace = Scatter::new(x, history.mean_scores.clone())
		.name(&format!("Mean {}", score_name))
		.mode(Mode::Lines)
		.line(Line::new().color("#9C27B0").width(2.0));
	plot.add_trace(mean_trace);

	let layout = Layout::new()
		.title(Title::with_text(&format!("{} Progress By Generation", score_name)))
		.x_axis(Axis::new().title(Title::with_text("Generation")))
		.y_axis(Axis::new().title(Title::with_text(score_name)));
	plot.set_layout(layout);
	plot
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_writes_html() {
		let dir = tempfile::tempdir().unwrap();
		let mut viz = PlotlyVisualizer::new(dir.path());
		let history = ScoreHistory {
			max_scores: vec![0.8, 0.9, 0.95],
			min_scores: vec![0.5, 0.6, 0.7],
			mean_scores: vec![0.6, 0.75, 0.8],
		};
		viz.progress_band(&history, "r2").unwrap();
		let path = viz.output_path("r2");
		assert!(path.ends_with("r2_progress.html"));
		let html = std::fs::read_to_string(path).unwrap();
		assert!(html.contains("r2 Progress By Generation"));
	}

	#[test]
	fn test_output_name_is_sanitized() {
		let viz = PlotlyVisualizer::new("/tmp/plots");
		assert!(viz.output_path("neg mean/squared").ends_with("neg_mean_squared_progress.html"));
	}
}
