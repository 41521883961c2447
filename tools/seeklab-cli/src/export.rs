//! Result export helpers.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use seeklab_core::metrics::Metrics;
use seeklab_core::trace::Trace;

/// Metrics of one algorithm run, as written to the JSON results file.
#[derive(Serialize)]
pub struct AlgorithmResult {
    /// Operator-facing algorithm name.
    pub algorithm: String,
    /// Aggregate metrics of the run.
    pub metrics: Metrics,
}

/// Writes the trace export rows (`seq,from,to,distance`) to a CSV file.
///
/// Non-serving steps are included as rows, they represent real head
/// movement.
pub fn write_trace_csv(path: &Path, trace: &Trace) -> Result<(), String> {
    let mut writer = csv::Writer::from_path(path).map_err(|error| error.to_string())?;
    for record in trace.export_records() {
        writer.serialize(record).map_err(|error| error.to_string())?;
    }
    writer.flush().map_err(|error| error.to_string())
}

/// Writes per-algorithm metrics as pretty-printed JSON.
pub fn write_results_json(path: &Path, results: &[AlgorithmResult]) -> Result<(), String> {
    let json = serde_json::to_string_pretty(results).map_err(|error| error.to_string())?;
    File::create(path)
        .and_then(|mut file| file.write_all(json.as_bytes()))
        .map_err(|error| error.to_string())
}
