use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use cinema_seat::config::{SeatData, SeatMapConfig};
use cinema_seat::core_modules::assets::AssetSource;
use cinema_seat::seat_map::{LogStatus, SeatMap};
use log::info;

/// Replays clicks on a seat map and writes the rendered surface to an image file.
#[derive(Parser, Debug)]
#[command(name = "visual_tester")]
struct Args {
    /// Seat data JSON ({"layout": [[1,0,...]], "taken": [[0,1,...]]}). Uses the built-in auditorium if omitted.
    #[arg(long)]
    seats: Option<PathBuf>,

    /// Surface width in pixels.
    #[arg(long, default_value_t = 1040)]
    width: u32,

    /// Surface height in pixels.
    #[arg(long, default_value_t = 800)]
    height: u32,

    /// Free seat glyph image. Requires --taken-glyph.
    #[arg(long, requires = "taken_glyph")]
    free_glyph: Option<PathBuf>,

    /// Taken/selected seat glyph image. Requires --free-glyph.
    #[arg(long, requires = "free_glyph")]
    taken_glyph: Option<PathBuf>,

    /// Glyph loading timeout in milliseconds.
    #[arg(long, default_value_t = 5000)]
    timeout_ms: u64,

    /// Surface-local click as X,Y. Repeat for several clicks.
    #[arg(long = "click", value_parser = parse_point)]
    clicks: Vec<(f64, f64)>,

    /// Resize the surface to WIDTHxHEIGHT after the initial render, before replaying clicks.
    #[arg(long, value_parser = parse_size)]
    resize: Option<(u32, u32)>,

    /// Output image path.
    output: PathBuf,
}

fn parse_point(value: &str) -> Result<(f64, f64), String> {
    let (x, y) = value.split_once(',').ok_or_else(|| format!("expected X,Y, got {value:?}"))?;
    let x = x.trim().parse::<f64>().map_err(|e| format!("bad x in {value:?}: {e}"))?;
    let y = y.trim().parse::<f64>().map_err(|e| format!("bad y in {value:?}: {e}"))?;
    Ok((x, y))
}

fn parse_size(value: &str) -> Result<(u32, u32), String> {
    let (w, h) = value.split_once('x').ok_or_else(|| format!("expected WIDTHxHEIGHT, got {value:?}"))?;
    let w = w.trim().parse::<u32>().map_err(|e| format!("bad width in {value:?}: {e}"))?;
    let h = h.trim().parse::<u32>().map_err(|e| format!("bad height in {value:?}: {e}"))?;
    Ok((w, h))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // --- 1. Argument Parsing & Setup ---
    let args = Args::parse();
    let seats = match &args.seats {
        Some(path) => SeatData::from_path(path).with_context(|| format!("loading seat data from {}", path.display()))?,
        None => SeatData::fixture(),
    };
    let assets = match (&args.free_glyph, &args.taken_glyph) {
        (Some(free_seat), Some(taken_seat)) => AssetSource::Files {
            free_seat: free_seat.clone(),
            taken_seat: taken_seat.clone(),
        },
        _ => AssetSource::Builtin,
    };
    let config = SeatMapConfig {
        surface_width: args.width,
        surface_height: args.height,
        assets,
        asset_timeout: Duration::from_millis(args.timeout_ms),
        ..SeatMapConfig::default()
    };

    // --- 2. Seat Map Initialization ---
    let mut seat_map = SeatMap::initialize(&seats, &config, LogStatus)
        .await
        .context("initializing seat map")?;
    let mut surface = seat_map.blank_surface();
    seat_map.render(&mut surface);

    // --- 3. Optional Resize ---
    if let Some((width, height)) = args.resize {
        seat_map.update_geometry(width, height);
    }

    // --- 4. Click Replay ---
    for (x, y) in &args.clicks {
        match seat_map.click(&mut surface, *x, *y) {
            Some(outcome) => info!("click ({x}, {y}): {outcome}"),
            None => info!("click ({x}, {y}): no seat"),
        }
    }

    // --- 5. Output ---
    let labels: Vec<String> = seat_map.selected_labels().iter().map(|l| l.to_string()).collect();
    println!("Selected seats: [{}]", labels.join(", "));
    surface
        .save(&args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;
    println!("Processing complete. Output saved to {}", args.output.display());
    Ok(())
}
