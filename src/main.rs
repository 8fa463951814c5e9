// An example runner for the `cinema_seat` library. It builds the reference
// auditorium, replays a few taps and writes the resulting surface to a PNG.
//
// For a scriptable tool, see the `visual_tester` crate.

use cinema_seat::config::{SeatData, SeatMapConfig};
use cinema_seat::core_modules::input::{PointerKind, SurfaceViewport, TapTracker};
use cinema_seat::seat_map::{LogStatus, SeatMap};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SeatMapConfig::default();
    let mut seat_map = SeatMap::initialize(&SeatData::fixture(), &config, LogStatus).await?;
    let mut surface = seat_map.blank_surface();
    seat_map.render(&mut surface);

    // The surface is shown at half size, 20px into the page.
    let viewport = SurfaceViewport {
        left: 20.0,
        top: 20.0,
        display_width: config.surface_width as f64 / 2.0,
        display_height: config.surface_height as f64 / 2.0,
        surface_width: config.surface_width,
        surface_height: config.surface_height,
    };
    let mut taps = TapTracker::new();

    // (page x, page y) of each tap in row 4: a free seat, a taken seat, the aisle, another free seat.
    for (page_x, page_y) in [(160.0, 145.0), (185.0, 145.0), (120.0, 145.0), (85.0, 145.0)] {
        taps.press(PointerKind::Touch, page_x, page_y);
        if !taps.release(PointerKind::Touch, page_x, page_y) {
            continue;
        }
        let (x, y) = viewport.to_surface(page_x, page_y);
        seat_map.click(&mut surface, x, y);
    }

    let labels: Vec<String> = seat_map.selected_labels().iter().map(|l| l.to_string()).collect();
    println!("Selected seats: {}", labels.join(", "));

    surface.save("seat_map.png")?;
    println!("Seat map saved to seat_map.png");
    Ok(())
}
