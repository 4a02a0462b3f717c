use std::path::Path;

use crate::runner::{ForecastDay, FrameSample, PreviewResult};

/// A complete preview report, saved as JSON.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Report {
    pub label: String,
    pub results: Vec<PreviewResult>,
    #[serde(default)]
    pub forecast: Vec<ForecastDay>,
}

/// Load a report from a JSON file. Returns None if the file doesn't exist or is malformed.
pub fn load_report(path: &Path) -> Option<Report> {
    let contents = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&contents).ok()
}

/// Save a report to a JSON file.
pub fn save_report(path: &Path, report: &Report) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(report).map_err(std::io::Error::other)?;
    std::fs::write(path, json)
}

/// Compare results against an earlier report. Returns one line per preset
/// whose transition counts changed or whose samples drifted past `tolerance`.
/// Presets missing from the earlier report are skipped.
pub fn compare(results: &[PreviewResult], previous: &Report, tolerance: f32) -> Vec<String> {
    let mut changes = Vec::new();
    for current in results {
        let Some(base) = previous
            .results
            .iter()
            .find(|r| r.preset_name == current.preset_name)
        else {
            continue;
        };

        if current.transitions != base.transitions {
            changes.push(format!(
                "{}: transitions {:?} -> {:?}",
                current.preset_name, base.transitions, current.transitions
            ));
            continue;
        }
        if current.samples.len() != base.samples.len() {
            changes.push(format!(
                "{}: {} samples -> {}",
                current.preset_name,
                base.samples.len(),
                current.samples.len()
            ));
            continue;
        }

        let drift = current
            .samples
            .iter()
            .zip(&base.samples)
            .map(|(a, b)| sample_drift(a, b))
            .fold(0.0f32, f32::max);
        if drift > tolerance {
            changes.push(format!(
                "{}: samples drifted by {:.4} (tolerance {:.4})",
                current.preset_name, drift, tolerance
            ));
        }
    }
    changes
}

/// Largest per-channel difference between two samples.
fn sample_drift(a: &FrameSample, b: &FrameSample) -> f32 {
    let colors = a
        .sun_color
        .iter()
        .zip(&b.sun_color)
        .chain(a.fog_color.iter().zip(&b.fog_color))
        .chain(a.sun_direction.iter().zip(&b.sun_direction));
    colors
        .map(|(x, y)| (x - y).abs())
        .fold((a.fog_density - b.fog_density).abs(), f32::max)
}

/// Format sampled frames as a markdown table, one section per preset.
pub fn format_markdown(results: &[PreviewResult]) -> String {
    let mut out = String::new();
    for r in results {
        out.push_str(&format!(
            "### {} ({} frames: {} band, {} to day, {} to night)\n\n",
            r.preset_name,
            r.frame_count,
            r.transitions.band,
            r.transitions.snap_day,
            r.transitions.snap_night
        ));
        out.push_str("| Day | Time | Sun RGB | Fog RGB | Fog density | Sun dir |\n");
        out.push_str("|-----|------|---------|---------|-------------|---------|\n");
        for s in &r.samples {
            out.push_str(&format!(
                "| {} | {} | {:.2} {:.2} {:.2} | {:.2} {:.2} {:.2} | {:.5} | {:.2} {:.2} {:.2} |\n",
                s.day,
                s.time,
                s.sun_color[0],
                s.sun_color[1],
                s.sun_color[2],
                s.fog_color[0],
                s.fog_color[1],
                s.fog_color[2],
                s.fog_density,
                s.sun_direction[0],
                s.sun_direction[1],
                s.sun_direction[2],
            ));
        }
        out.push('\n');
    }
    out
}

/// Format a weather forecast as a markdown table.
pub fn format_forecast(days: &[ForecastDay]) -> String {
    if days.is_empty() {
        return "No weather presets to forecast.\n".to_string();
    }
    let mut out = String::new();
    out.push_str("| Day | Weather | Changed |\n");
    out.push_str("|-----|---------|---------|\n");
    for d in days {
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            d.day,
            d.preset_name,
            if d.changed { "yes" } else { "" }
        ));
    }
    out
}
