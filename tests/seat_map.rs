use std::time::Duration;

use cinema_seat::config::{SeatData, SeatMapConfig};
use cinema_seat::core_modules::assets::AssetSource;
use cinema_seat::error::{AssetError, ConfigError, SeatMapError};
use cinema_seat::seat_map::{CellRef, SeatLabel, SeatMap, ToggleOutcome, TAKEN_SEAT_MESSAGE};

/// Centre of a fixture cell on the default 1040x800 surface (80px cells).
fn centre_of(row: usize, column: usize) -> (f64, f64) {
    (column as f64 * 80.0 + 40.0, row as f64 * 80.0 + 40.0)
}

async fn fixture_map() -> SeatMap<cinema_seat::seat_map::RasterPainter, Vec<String>> {
    SeatMap::initialize(&SeatData::fixture(), &SeatMapConfig::default(), Vec::new())
        .await
        .unwrap()
}

#[tokio::test]
async fn clicking_a_free_seat_selects_it_with_aisle_excluded_number() {
    let mut map = fixture_map().await;
    let mut surface = map.blank_surface();
    map.render(&mut surface);

    // Row 3 has its first aisle at column 2, so column 3 is seat 3.
    let (x, y) = centre_of(3, 3);
    let outcome = map.click(&mut surface, x, y);
    assert_eq!(outcome, Some(ToggleOutcome::Selected(SeatLabel { row: 4, seat: 3 })));
    assert_eq!(map.selections(), &[CellRef::new(3, 3)]);
    assert_eq!(map.status().last().unwrap(), "selected seat: row 4 seat 3");
}

#[tokio::test]
async fn clicking_a_reserved_seat_reports_it_as_taken() {
    let mut map = fixture_map().await;
    let mut surface = map.blank_surface();

    let (x, y) = centre_of(3, 4);
    assert_eq!(map.click(&mut surface, x, y), Some(ToggleOutcome::AlreadyTaken));
    assert!(map.selections().is_empty());
    assert_eq!(map.status(), &vec![TAKEN_SEAT_MESSAGE.to_string()]);
}

#[tokio::test]
async fn first_row_labels_skip_both_aisles() {
    let mut map = fixture_map().await;
    let mut surface = map.blank_surface();

    let (x, y) = centre_of(0, 3);
    assert_eq!(map.click(&mut surface, x, y), Some(ToggleOutcome::Selected(SeatLabel { row: 1, seat: 3 })));
    let (x, y) = centre_of(0, 9);
    assert_eq!(map.click(&mut surface, x, y), Some(ToggleOutcome::Selected(SeatLabel { row: 1, seat: 8 })));
    // The back row has no aisles.
    let (x, y) = centre_of(9, 12);
    assert_eq!(map.click(&mut surface, x, y), Some(ToggleOutcome::Selected(SeatLabel { row: 10, seat: 13 })));
}

#[tokio::test]
async fn aisle_clicks_are_silent() {
    let mut map = fixture_map().await;
    let mut surface = map.blank_surface();
    let before = surface.clone();

    let (x, y) = centre_of(5, 8);
    assert_eq!(map.click(&mut surface, x, y), None);
    assert!(map.status().is_empty());
    assert_eq!(surface, before);
}

#[tokio::test]
async fn toggled_cells_match_a_fresh_full_render() {
    let mut map = fixture_map().await;
    let mut incremental = map.blank_surface();
    map.render(&mut incremental);

    for (row, column) in [(0, 0), (7, 10), (9, 2), (0, 0)] {
        let (x, y) = centre_of(row, column);
        map.click(&mut incremental, x, y);
    }
    assert_eq!(map.selections(), &[CellRef::new(7, 10), CellRef::new(9, 2)]);

    let mut full = map.blank_surface();
    map.render(&mut full);
    assert_eq!(incremental, full);

    // A deselected cell is back to its resting pixels.
    let resting = map.background().get_pixel(40, 40);
    assert_eq!(full.get_pixel(40, 40), resting);
}

#[tokio::test]
async fn resize_moves_the_hit_regions() {
    let mut map = fixture_map().await;
    map.update_geometry(520, 400);
    assert_eq!(map.hit_test(60.0, 20.0), Some(CellRef::new(0, 1)));
    assert_eq!(map.hit_test(100.0, 20.0), None);
    assert_eq!(map.hit_test(1000.0, 20.0), None);
    // The cached background keeps its original scale.
    assert_eq!(map.background().dimensions(), (1040, 800));
}

#[tokio::test]
async fn mismatched_seat_data_aborts_initialization() {
    let data = SeatData {
        layout: vec![vec![1; 13]; 10],
        taken: vec![vec![0; 12]; 10],
    };
    let result = SeatMap::initialize(&data, &SeatMapConfig::default(), Vec::<String>::new()).await;
    assert!(matches!(
        result,
        Err(SeatMapError::Config(ConfigError::DimensionMismatch { .. }))
    ));

    let empty = SeatData { layout: vec![], taken: vec![] };
    let result = SeatMap::initialize(&empty, &SeatMapConfig::default(), Vec::<String>::new()).await;
    assert!(matches!(result, Err(SeatMapError::Config(ConfigError::EmptyMatrix { .. }))));
}

#[tokio::test]
async fn missing_glyphs_abort_initialization() {
    let config = SeatMapConfig {
        assets: AssetSource::Files {
            free_seat: "/nonexistent/seat_empty.png".into(),
            taken_seat: "/nonexistent/seat_taken.png".into(),
        },
        asset_timeout: Duration::from_secs(5),
        ..SeatMapConfig::default()
    };
    let result = SeatMap::initialize(&SeatData::fixture(), &config, Vec::<String>::new()).await;
    assert!(matches!(result, Err(SeatMapError::Asset(AssetError::Load { .. }))));
}
