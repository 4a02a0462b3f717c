use std::path::PathBuf;
use std::process;

use daybreak_core::preset::WeatherPreset;
use daybreak_preview::report;
use daybreak_preview::runner::PreviewRunner;
use daybreak_presets::defaults::{builtin_preset, BUILTIN_NAMES};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();

    let mut preset_args: Vec<String> = Vec::new();
    let mut output_path: Option<PathBuf> = None;
    let mut compare_path: Option<PathBuf> = None;
    let mut tolerance = 1e-3f32;
    let mut frames_per_day = 1440u32;
    let mut days = 1u32;
    let mut cloud_layers = 4usize;
    let mut forecast_seed: Option<u32> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--preset" => {
                i += 1;
                preset_args.push(required(&args, i, "--preset").to_string());
            }
            "--output" => {
                i += 1;
                output_path = Some(PathBuf::from(required(&args, i, "--output")));
            }
            "--compare" => {
                i += 1;
                compare_path = Some(PathBuf::from(required(&args, i, "--compare")));
            }
            "--tolerance" => {
                i += 1;
                tolerance = parse_or_exit(required(&args, i, "--tolerance"), "--tolerance");
            }
            "--frames" => {
                i += 1;
                frames_per_day = parse_or_exit(required(&args, i, "--frames"), "--frames");
            }
            "--days" => {
                i += 1;
                days = parse_or_exit(required(&args, i, "--days"), "--days");
            }
            "--layers" => {
                i += 1;
                cloud_layers = parse_or_exit(required(&args, i, "--layers"), "--layers");
            }
            "--forecast" => {
                i += 1;
                forecast_seed = Some(parse_or_exit(required(&args, i, "--forecast"), "--forecast"));
            }
            "--help" | "-h" => {
                eprintln!("Usage: daybreak-preview [OPTIONS]");
                eprintln!(
                    "  --preset <name|path>   Built-in ({}) or RON file; repeatable (default: all built-ins)",
                    BUILTIN_NAMES.join(", ")
                );
                eprintln!("  --frames <n>           Frames per simulated day (default: 1440)");
                eprintln!("  --days <n>             Days to simulate (default: 1)");
                eprintln!("  --layers <n>           Cloud layers bound to each preset (default: 4)");
                eprintln!("  --forecast <seed>      Also roll a weather forecast over the simulated days");
                eprintln!("  --output <path>        Save the report as JSON");
                eprintln!("  --compare <path>       Compare against an earlier JSON report");
                eprintln!("  --tolerance <x>        Allowed sample drift for --compare (default: 0.001)");
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                process::exit(1);
            }
        }
        i += 1;
    }

    let presets = if preset_args.is_empty() {
        match daybreak_presets::builtin_presets() {
            Ok(presets) => presets,
            Err(e) => {
                eprintln!("ERROR: {e}");
                process::exit(1);
            }
        }
    } else {
        preset_args
            .iter()
            .map(|arg| load_preset_arg(arg))
            .collect()
    };

    let runner = PreviewRunner::new(frames_per_day, days, cloud_layers);
    let mut results = Vec::new();
    for preset in &presets {
        match runner.run_preset(preset) {
            Ok(result) => results.push(result),
            Err(e) => {
                eprintln!("ERROR: {e}");
                process::exit(1);
            }
        }
    }

    println!("\n## Day Cycle Preview\n");
    println!("{}", report::format_markdown(&results));

    let forecast = match forecast_seed {
        Some(seed) => {
            let days = runner.forecast(presets.clone(), seed);
            println!("## Forecast (seed {seed})\n");
            println!("{}", report::format_forecast(&days));
            days
        }
        None => Vec::new(),
    };

    let mut exit_code = 0;
    if let Some(ref path) = compare_path {
        match report::load_report(path) {
            Some(previous) => {
                let changes = report::compare(&results, &previous, tolerance);
                if changes.is_empty() {
                    log::info!("No changes against '{}'", previous.label);
                } else {
                    println!("## Changes against {}\n", previous.label);
                    for change in &changes {
                        println!("- {change}");
                    }
                    exit_code = 1;
                }
            }
            None => log::warn!("Report file not found: {}", path.display()),
        }
    }

    if let Some(ref path) = output_path {
        let report = report::Report {
            label: format!("preview-{}", process::id()),
            results,
            forecast,
        };
        if let Err(e) = report::save_report(path, &report) {
            eprintln!("ERROR: failed to save report: {e}");
            process::exit(1);
        }
        log::info!("Saved report to {}", path.display());
    }

    log::info!("Preview complete.");
    if exit_code != 0 {
        process::exit(exit_code);
    }
}

fn required<'a>(args: &'a [String], i: usize, flag: &str) -> &'a str {
    match args.get(i) {
        Some(value) => value,
        None => {
            eprintln!("Missing value for {flag}");
            process::exit(1);
        }
    }
}

fn parse_or_exit<T: std::str::FromStr>(value: &str, flag: &str) -> T {
    match value.parse() {
        Ok(v) => v,
        Err(_) => {
            eprintln!("Invalid {flag} value: {value}");
            process::exit(1);
        }
    }
}

/// Resolve a built-in preset name or load a RON preset file.
fn load_preset_arg(arg: &str) -> WeatherPreset {
    let loaded = match builtin_preset(arg) {
        Some(result) => result,
        None => match std::fs::read_to_string(arg) {
            Ok(source) => daybreak_presets::load_preset_from_str(&source),
            Err(e) => {
                eprintln!("ERROR: cannot read preset '{arg}': {e}");
                process::exit(1);
            }
        },
    };
    match loaded {
        Ok(preset) => preset,
        Err(e) => {
            eprintln!("ERROR: {e}");
            process::exit(1);
        }
    }
}
