use std::sync::Arc;

use crate::renderer::grid::ColorGrid;

/// Slices a color grid into fixed-size tiles.
///
/// Tiles are ordered top-left to bottom-right, starting from index 0.
/// Pixels past the last full tile row or column are dropped. Tiles are
/// handed out as shared grids, so many sprites can reference one tile
/// without copying pixels.
pub struct TileSheet {
    tile_width: u32,
    tile_height: u32,
    tiles: Vec<Arc<ColorGrid>>,
}

impl TileSheet {
    pub fn new(sheet: &ColorGrid, tile_width: u32, tile_height: u32) -> Self {
        assert!(tile_width > 0 && tile_height > 0);

        let columns = sheet.width() / tile_width;
        let rows = sheet.height() / tile_height;
        let mut tiles = Vec::with_capacity((columns * rows) as usize);

        for tile_y in 0..rows {
            for tile_x in 0..columns {
                let x_off = tile_x * tile_width;
                let y_off = tile_y * tile_height;

                let mut tile = ColorGrid::new(tile_width, tile_height);
                for y in 0..tile_height {
                    for x in 0..tile_width {
                        tile.set(x, y, sheet.get(x + x_off, y + y_off));
                    }
                }
                tiles.push(Arc::new(tile));
            }
        }

        Self {
            tile_width,
            tile_height,
            tiles,
        }
    }

    pub fn tile_width(&self) -> u32 {
        self.tile_width
    }

    pub fn tile_height(&self) -> u32 {
        self.tile_height
    }

    /// Number of tiles in the sheet.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The tile at the given index. Panics when the index is out of
    /// range; callers are responsible for range-checking indices coming
    /// from map data.
    pub fn tile(&self, index: usize) -> Arc<ColorGrid> {
        Arc::clone(&self.tiles[index])
    }
}
