use super::file::AssetFile;
use crate::error::AssetError;

/// File extension expected for tile map data.
pub const MAP_EXTENSION: &str = "pmap";

/// An integer tile-index grid, the shape a tile map component is built
/// from.
///
/// The text format is whitespace separated: column and row counts first,
/// then `columns × rows` indices in row-major order. Index values are not
/// validated against any tile sheet here; out-of-range indices surface
/// when the tile map component resolves them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileIndexGrid {
    columns: u32,
    rows: u32,
    indices: Vec<i32>,
}

impl TileIndexGrid {
    /// Parses the text form.
    pub fn parse(text: &str) -> Result<Self, AssetError> {
        let mut tokens = text.split_whitespace();

        let columns = next_int(&mut tokens)?;
        let rows = next_int(&mut tokens)?;
        if columns < 0 || rows < 0 {
            return Err(AssetError::malformed(
                "tile map",
                format!("negative dimensions {columns}x{rows}"),
            ));
        }

        let (columns, rows) = (columns as u32, rows as u32);
        let mut indices = Vec::with_capacity((columns * rows) as usize);
        for _ in 0..columns * rows {
            indices.push(next_int(&mut tokens)?);
        }

        Ok(Self {
            columns,
            rows,
            indices,
        })
    }

    /// Reads and parses a map file. Files without the `.pmap` extension
    /// are accepted with a logged warning.
    pub fn load(file: &AssetFile) -> Result<Self, AssetError> {
        if file.path().extension().and_then(|e| e.to_str()) != Some(MAP_EXTENSION) {
            log::warn!(
                "{} should have the extension .{MAP_EXTENSION}",
                file.path().display()
            );
        }
        Self::parse(&file.read_to_string()?)
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// The index at grid position `(x, y)`. Panics when out of range.
    pub fn get(&self, x: u32, y: u32) -> i32 {
        assert!(x < self.columns && y < self.rows);
        self.indices[(y * self.columns + x) as usize]
    }
}

fn next_int<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<i32, AssetError> {
    let token = tokens
        .next()
        .ok_or_else(|| AssetError::malformed("tile map", "unexpected end of data"))?;
    token
        .parse()
        .map_err(|_| AssetError::malformed("tile map", format!("expected integer, got {token:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_row_major_indices() {
        let grid = TileIndexGrid::parse("3 2\n1 2 3\n4 5 6\n").unwrap();
        assert_eq!(grid.columns(), 3);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.get(0, 0), 1);
        assert_eq!(grid.get(2, 0), 3);
        assert_eq!(grid.get(0, 1), 4);
        assert_eq!(grid.get(2, 1), 6);
    }

    #[test]
    fn truncated_data_is_malformed() {
        let err = TileIndexGrid::parse("2 2 1 2 3").unwrap_err();
        assert!(matches!(err, AssetError::Malformed { .. }));
    }

    #[test]
    fn non_numeric_data_is_malformed() {
        let err = TileIndexGrid::parse("2 1 one two").unwrap_err();
        assert!(matches!(err, AssetError::Malformed { .. }));
    }

    #[test]
    fn empty_grid_is_valid() {
        let grid = TileIndexGrid::parse("0 0").unwrap();
        assert_eq!(grid.columns(), 0);
        assert_eq!(grid.rows(), 0);
    }
}
