//! Workload loading and validation.
//!
//! The engine assumes pre-validated input, so every track is checked against
//! the disk domain here, before any simulation runs.

use std::path::Path;

use seeklab_core::track::{in_range, Track};

/// Parses a comma or whitespace separated list of track numbers.
pub fn parse_text(text: &str, disk_max: Track) -> Result<Vec<Track>, String> {
    let mut workload = Vec::new();
    for token in text.split(|c: char| c == ',' || c.is_whitespace()) {
        if token.is_empty() {
            continue;
        }
        workload.push(parse_track(token, disk_max)?);
    }
    Ok(workload)
}

/// Loads track numbers from a CSV file, flattening all cells in row order.
pub fn load_csv(path: &Path, disk_max: Track) -> Result<Vec<Track>, String> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|error| error.to_string())?;
    let mut workload = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|error| error.to_string())?;
        for cell in record.iter() {
            let cell = cell.trim();
            if cell.is_empty() {
                continue;
            }
            workload.push(parse_track(cell, disk_max)?);
        }
    }
    Ok(workload)
}

fn parse_track(token: &str, disk_max: Track) -> Result<Track, String> {
    let track: Track = token
        .parse()
        .map_err(|_| format!("invalid track number: {}", token))?;
    if !in_range(track, disk_max) {
        return Err(format!("track {} is outside the domain [0, {}]", track, disk_max));
    }
    Ok(track)
}
