use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::prelude::*;
use rand_chacha::ChaCha12Rng;
use rand_distr::StandardNormal;

// only the column list is needed here
#[allow(dead_code)]
#[path = "../data/attributes.rs"]
mod attributes;

use attributes::ATTRIBUTES;

/// Write a synthetic HomeC-style CSV (minute samples of household power use
/// plus hourly weather).
#[derive(Parser, Debug)]
#[command(about)]
struct Args {
    /// Output CSV path
    #[arg(long, default_value = "HomeC.csv")]
    output: PathBuf,

    /// Number of data rows
    #[arg(long, default_value_t = 10_000)]
    rows: usize,

    /// PRNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

/// 2016-01-01T05:00:00Z, first sample of the original recording.
const START_TIME: i64 = 1_451_624_400;

const WEATHER: [(&str, &str); 5] = [
    ("Clear", "clear-night"),
    ("Partly Cloudy", "partly-cloudy-day"),
    ("Mostly Cloudy", "cloudy"),
    ("Overcast", "cloudy"),
    ("Light Rain", "rain"),
];

/// Draw from N(`mean`, `std_dev`).
fn gauss(rng: &mut ChaCha12Rng, mean: f64, std_dev: f64) -> f64 {
    let z: f64 = rng.sample(StandardNormal);
    mean + std_dev * z
}

/// Non-negative meter reading around `mean`.
fn reading(rng: &mut ChaCha12Rng, mean: f64, std_dev: f64) -> f64 {
    gauss(rng, mean, std_dev).max(0.0)
}

/// Hourly weather, repeated for every minute of the hour.
struct Weather {
    summary: &'static str,
    icon: &'static str,
    temperature: f64,
    humidity: f64,
    visibility: f64,
    pressure: f64,
    wind_speed: f64,
    cloud_cover: Option<f64>,
    wind_bearing: u32,
    precip_intensity: f64,
    precip_probability: f64,
}

impl Weather {
    fn sample(rng: &mut ChaCha12Rng, hour: usize) -> Self {
        let (summary, icon) = WEATHER[rng.random_range(0..WEATHER.len())];
        let daily = (2.0 * std::f64::consts::PI * (hour % 24) as f64 / 24.0).sin();
        let raining = icon == "rain";
        Weather {
            summary,
            icon,
            temperature: gauss(rng, 35.0 + 8.0 * daily, 2.0),
            humidity: gauss(rng, 0.62, 0.1).clamp(0.0, 1.0),
            visibility: gauss(rng, 9.5, 0.8).clamp(0.0, 10.0),
            pressure: gauss(rng, 1016.0, 6.0),
            wind_speed: reading(rng, 6.5, 3.0),
            // real HomeC exports carry the header text in some cloudCover cells
            cloud_cover: rng.random_bool(0.98).then(|| rng.random::<f64>()),
            wind_bearing: rng.random_range(0..360),
            precip_intensity: if raining { reading(rng, 0.02, 0.01) } else { 0.0 },
            precip_probability: if raining { rng.random::<f64>() } else { 0.0 },
        }
    }
}

fn row(rng: &mut ChaCha12Rng, i: usize, w: &Weather) -> Vec<String> {
    let time = START_TIME + i as i64 * 60;
    let daylight = ((i / 60) % 24) as f64;
    let solar = if (7.0..18.0).contains(&daylight) {
        reading(rng, 0.15 * (std::f64::consts::PI * (daylight - 7.0) / 11.0).sin(), 0.02)
    } else {
        reading(rng, 0.003, 0.001)
    };

    let channels = [
        reading(rng, 0.0, 0.05), // Dishwasher
        reading(rng, 0.08, 0.1), // Furnace 1
        reading(rng, 0.06, 0.08), // Furnace 2
        reading(rng, 0.04, 0.02), // Home office
        reading(rng, 0.06, 0.03), // Fridge
        reading(rng, 0.01, 0.005), // Wine cellar
        reading(rng, 0.013, 0.001), // Garage door
        reading(rng, 0.0, 0.02), // Kitchen 12
        reading(rng, 0.001, 0.01), // Kitchen 14
        reading(rng, 0.0, 0.005), // Kitchen 38
        reading(rng, 0.03, 0.01), // Barn
        reading(rng, 0.001, 0.05), // Well
        reading(rng, 0.004, 0.05), // Microwave
        reading(rng, 0.002, 0.02), // Living room
    ];
    let total: f64 = channels.iter().sum::<f64>() + reading(rng, 0.3, 0.1);

    let mut out = Vec::with_capacity(ATTRIBUTES.len());
    out.push(time.to_string());
    out.push(format!("{total:.6}"));
    out.push(format!("{solar:.6}"));
    out.push(format!("{total:.6}"));
    out.extend(channels.iter().map(|v| format!("{v:.6}")));
    out.push(format!("{solar:.6}"));
    out.push(format!("{:.2}", w.temperature));
    out.push(w.icon.to_string());
    out.push(format!("{:.2}", w.humidity));
    out.push(format!("{:.2}", w.visibility));
    out.push(w.summary.to_string());
    out.push(format!("{:.2}", w.temperature - w.wind_speed * 0.7));
    out.push(format!("{:.2}", w.pressure));
    out.push(format!("{:.2}", w.wind_speed));
    out.push(match w.cloud_cover {
        Some(c) => format!("{c:.2}"),
        None => "cloudCover".to_string(),
    });
    out.push(w.wind_bearing.to_string());
    out.push(format!("{:.4}", w.precip_intensity));
    out.push(format!("{:.2}", w.temperature - (1.0 - w.humidity) * 36.0));
    out.push(format!("{:.2}", w.precip_probability));
    out
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut rng = ChaCha12Rng::seed_from_u64(args.seed);

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    writer.write_record(ATTRIBUTES).context("writing header")?;

    let mut weather = Weather::sample(&mut rng, 0);
    for i in 0..args.rows {
        if i % 60 == 0 && i > 0 {
            weather = Weather::sample(&mut rng, i / 60);
        }
        let record = row(&mut rng, i, &weather);
        debug_assert_eq!(record.len(), ATTRIBUTES.len());
        writer
            .write_record(&record)
            .with_context(|| format!("writing row {i}"))?;
    }
    writer.flush().context("flushing output")?;

    println!(
        "Wrote {} rows ({} columns) to {}",
        args.rows,
        ATTRIBUTES.len(),
        args.output.display()
    );
    Ok(())
}
