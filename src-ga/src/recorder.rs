use std::path::{Path, PathBuf};

use crate::error::TunerError;
use crate::reporter::Reporter;
use crate::stats::GenerationSummary;
use crate::value::{ParamValue, Params};

/// A single generation record
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRecord {
	pub generation: usize,
	pub max: f64,
	pub min: f64,
	pub mean: f64,
	pub std: f64,
	/// Best parameters of that generation
	pub best_params: Params,
}

/// Records run progress as a reporter and saves it as CSV
#[derive(Debug, Default, Clone)]
pub struct HistoryRecorder {
	run_name: String,
	records: Vec<GenerationRecord>,
}

impl HistoryRecorder {
	pub fn new(run_name: impl Into<String>) -> Self {
		Self { run_name: run_name.into(), records: Vec::new() }
	}

	pub fn records(&self) -> &[GenerationRecord] {
		&self.records
	}

	pub fn num_generations(&self) -> usize {
		self.records.len()
	}

	pub fn clear(&mut self) {
		self.records.clear();
	}

	/// Write `<output_dir>/<run_name>.csv`:
	/// `generation,max,min,mean,std,<one column per parameter>`
	pub fn save_to_csv(&self, output_dir: &Path) -> Result<PathBuf, TunerError> {
		std::fs::create_dir_all(output_dir).map_err(output_err)?;
		let path = output_dir.join(format!("{}.csv", self.run_name));
		let mut wtr = csv::Writer::from_path(&path).map_err(output_err)?;

		let names: Vec<String> = self
			.records
			.first()
			.map(|r| r.best_params.names().map(str::to_string).collect())
			.unwrap_or_default();
		let mut header = vec!["generation", "max", "min", "mean", "std"];
		header.extend(names.iter().map(String::as_str));
		wtr.write_record(&header).map_err(output_err)?;

		for r in &self.records {
			let mut row = vec![
				r.generation.to_string(),
				r.max.to_string(),
				r.min.to_string(),
				r.mean.to_string(),
				r.std.to_string(),
			];
			row.extend(names.iter().map(|n| r.best_params.get(n).map(csv_field).unwrap_or_default()));
			wtr.write_record(&row).map_err(output_err)?;
		}
		wtr.flush().map_err(output_err)?;
		Ok(path)
	}
}

fn output_err(e: impl std::fmt::Display) -> TunerError {
	TunerError::Output(e.to_string())
}

fn csv_field(v: &ParamValue) -> String {
	match v {
		ParamValue::Str(s) => s.clone(),
		other => other.to_string(),
	}
}

impl Reporter for HistoryRecorder {
	fn generation(&mut self, summary: &GenerationSummary<'_>) {
		self.records.push(GenerationRecord {
			generation: summary.generation,
			max: summary.stats.max,
			min: summary.stats.min,
			mean: summary.stats.mean,
			std: summary.stats.std,
			best_params: summary.best_params.clone(),
		});
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::stats::{GenerationStats, ScoreHistory};

	#[test]
	fn test_records_and_csv() {
		let mut rec = HistoryRecorder::new("iris_c");
		let history = ScoreHistory::default();
		let mut best = Params::new();
		best.insert("C", ParamValue::Float(0.25));
		best.insert("solver", ParamValue::from("liblinear"));
		for g in 2..=3 {
			rec.generation(&GenerationSummary {
				generation: g,
				stats: GenerationStats { max: 0.9, min: 0.5, mean: 0.7, std: 0.1 },
				best_params: &best,
				best_score: 0.9,
				history: &history,
			});
		}
		assert_eq!(rec.num_generations(), 2);

		let dir = tempfile::tempdir().unwrap();
		let path = rec.save_to_csv(dir.path()).unwrap();
		let content = std::fs::read_to_string(path).unwrap();
		let lines: Vec<&str> = content.trim().lines().collect();
		assert_eq!(lines[0], "generation,max,min,mean,std,C,solver");
		assert_eq!(lines[1], "2,0.9,0.5,0.7,0.1,0.25,liblinear");
		assert_eq!(lines.len(), 3);
	}
}
