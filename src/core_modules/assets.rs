// THEORY:
// `SeatAssets` holds the two glyphs every cell is drawn with: the free-seat glyph
// and the taken/selected glyph. Preparing them is the only asynchronous step in
// the whole seat map, and it gates everything else: no hit-testing or drawing is
// possible until both glyphs are ready.
//
// Key architectural principles:
// 1.  **Bounded Wait**: Preparation runs under a single timeout. When it expires the
//     whole preparation fails with `AssetError::Timeout`; there is no fallback glyph.
// 2.  **Off the Event Thread**: Decoding image files is blocking work, so each file is
//     decoded on tokio's blocking pool and both files are loaded concurrently.
// 3.  **Built-in Glyphs**: When no image files are configured, simple procedural
//     glyphs are generated so the seat map can render without any assets on disk.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;

use image::{Rgba, RgbaImage};
use log::{debug, info, warn};

use crate::error::AssetError;

/// Edge length of the procedural glyphs, in pixels.
pub const BUILTIN_GLYPH_SIZE: u32 = 64;

const FREE_SEAT_COLOR: Rgba<u8> = Rgba([158, 196, 158, 255]);
const TAKEN_SEAT_COLOR: Rgba<u8> = Rgba([224, 86, 86, 255]);

/// Where the seat glyphs come from.
#[derive(Debug, Clone, PartialEq)]
pub enum AssetSource {
    /// Procedurally generated glyphs.
    Builtin,
    /// Image files decodable by the `image` crate.
    Files { free_seat: PathBuf, taken_seat: PathBuf },
}

/// The glyphs used to paint seats.
#[derive(Debug, Clone)]
pub struct SeatAssets {
    /// Drawn for free seats in the background and for deselected seats.
    pub free_seat: RgbaImage,
    /// Drawn for seats taken at load time and for seats the user selects.
    pub taken_seat: RgbaImage,
}

impl SeatAssets {
    /// Procedural glyphs of `size` x `size` pixels.
    pub fn builtin(size: u32) -> Self {
        Self {
            free_seat: seat_glyph(size, FREE_SEAT_COLOR),
            taken_seat: seat_glyph(size, TAKEN_SEAT_COLOR),
        }
    }

    /// Prepares the glyphs from `source`, failing if that takes longer than `timeout`.
    pub async fn prepare(source: &AssetSource, timeout: Duration) -> Result<Self, AssetError> {
        match source {
            AssetSource::Builtin => {
                debug!("Using built-in seat glyphs ({BUILTIN_GLYPH_SIZE}px)");
                Ok(Self::builtin(BUILTIN_GLYPH_SIZE))
            }
            AssetSource::Files { free_seat, taken_seat } => Self::load(free_seat, taken_seat, timeout).await,
        }
    }

    /// Loads both glyph files concurrently under one timeout.
    pub async fn load(free_seat: &Path, taken_seat: &Path, timeout: Duration) -> Result<Self, AssetError> {
        info!(
            "Loading seat glyphs from {} and {} (timeout {:?})",
            free_seat.display(),
            taken_seat.display(),
            timeout
        );
        let loading = futures::future::try_join(
            load_image(free_seat.to_path_buf()),
            load_image(taken_seat.to_path_buf()),
        );
        let (free_seat, taken_seat) = within(timeout, loading).await?;
        Ok(Self { free_seat, taken_seat })
    }
}

/// Runs an asset preparation future, turning an expired deadline into `AssetError::Timeout`.
pub async fn within<T, F>(timeout: Duration, preparation: F) -> Result<T, AssetError>
where
    F: Future<Output = Result<T, AssetError>>,
{
    match tokio::time::timeout(timeout, preparation).await {
        Ok(result) => result,
        Err(_) => {
            warn!("Seat asset preparation exceeded {timeout:?}");
            Err(AssetError::Timeout { timeout })
        }
    }
}

async fn load_image(path: PathBuf) -> Result<RgbaImage, AssetError> {
    let decode_path = path.clone();
    let decoded = tokio::task::spawn_blocking(move || image::open(decode_path)).await?;
    match decoded {
        Ok(image) => {
            debug!("Decoded {} ({}x{})", path.display(), image.width(), image.height());
            Ok(image.to_rgba8())
        }
        Err(source) => {
            warn!("Failed to decode {}: {source}", path.display());
            Err(AssetError::Load { path, source })
        }
    }
}

/// A seat silhouette: a backrest across the top and a wider cushion below it.
fn seat_glyph(size: u32, color: Rgba<u8>) -> RgbaImage {
    let size = size.max(4);
    let margin = size / 8;
    let backrest = (margin * 2, margin, size - margin * 2, size / 2);
    let cushion = (margin, size / 2 + margin / 2, size - margin, size - margin);
    RgbaImage::from_fn(size, size, |x, y| {
        let in_rect = |(x0, y0, x1, y1): (u32, u32, u32, u32)| x >= x0 && x < x1 && y >= y0 && y < y1;
        if in_rect(backrest) || in_rect(cushion) {
            color
        } else {
            Rgba([0, 0, 0, 0])
        }
    })
}
