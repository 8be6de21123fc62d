//! Level parsing and the padded tile grid
//!
//! A level source is a whitespace-separated text stream:
//!
//! ```text
//! <width> <height>
//! <height rows, each width characters of '0'|'1'|'2'>
//! ```
//!
//! Rows are authored top to bottom; the grid stores them inverted so
//! row 0 is the bottom of the field. Storage is a single flat array in
//! column-major order with a wraparound band appended: the first
//! `band` columns are duplicated after the last real column so the
//! visibility window can run past the nominal field end without modular
//! indexing.

use crate::field::FieldError;

/// One cell of the static level grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileKind {
    #[default]
    Empty,
    Solid,
    Hazard,
}

impl TileKind {
    /// Map a level-source character to a tile. Unknown characters are
    /// silently treated as empty space.
    pub fn from_code(code: char) -> Self {
        match code {
            '1' => TileKind::Solid,
            '2' => TileKind::Hazard,
            _ => TileKind::Empty,
        }
    }
}

/// Parsed level before the wraparound band is applied.
///
/// Cells are column-major, bottom-origin: `cells[col * height + row]`
/// with row 0 at the bottom of the field.
#[derive(Debug, Clone)]
pub struct LevelData {
    pub width: usize,
    pub height: usize,
    cells: Vec<TileKind>,
}

impl LevelData {
    /// Parse a level from its text source.
    pub fn parse(source: &str) -> Result<Self, FieldError> {
        let mut tokens = source.split_whitespace();

        let width = parse_dimension(tokens.next(), "width")?;
        let height = parse_dimension(tokens.next(), "height")?;

        let mut cells = vec![TileKind::Empty; width * height];
        let mut codes = tokens.flat_map(|t| t.chars());

        // Stream order is row-major, top row first; storage is
        // column-major with row 0 at the bottom.
        for stream_row in 0..height {
            let row = height - 1 - stream_row;
            for col in 0..width {
                let code = codes.next().ok_or_else(|| {
                    FieldError::MalformedLevel(format!(
                        "cell stream ended at row {stream_row}, column {col} \
                         (expected {width}x{height} cells)"
                    ))
                })?;
                cells[col * height + row] = TileKind::from_code(code);
            }
        }

        Ok(Self { width, height, cells })
    }

    #[inline]
    pub(crate) fn at(&self, column: usize, row: usize) -> TileKind {
        self.cells[column * self.height + row]
    }
}

fn parse_dimension(token: Option<&str>, name: &str) -> Result<usize, FieldError> {
    let token =
        token.ok_or_else(|| FieldError::MalformedLevel(format!("missing {name}")))?;
    let value: i64 = token.parse().map_err(|_| {
        FieldError::MalformedLevel(format!("{name} is not an integer: {token:?}"))
    })?;
    if value <= 0 {
        return Err(FieldError::MalformedLevel(format!(
            "{name} must be positive, got {value}"
        )));
    }
    Ok(value as usize)
}

/// The immutable level geometry, padded for boundary-free scrolling.
///
/// Indexed `[column][row]` with row 0 at the bottom. Column count is
/// the authored field width plus the wraparound band; every query in
/// the valid scroll range `[0, field_width)` stays a plain linear index.
#[derive(Debug, Clone)]
pub struct TileGrid {
    cells: Vec<TileKind>,
    columns: usize,
    field_columns: usize,
    rows: usize,
}

impl TileGrid {
    /// Build a grid from parsed level data, duplicating the first
    /// `band` columns after the last real column.
    pub fn with_wraparound(level: &LevelData, band: usize) -> Self {
        let rows = level.height;
        let columns = level.width + band;
        let mut cells = Vec::with_capacity(columns * rows);

        for col in 0..level.width {
            for row in 0..rows {
                cells.push(level.at(col, row));
            }
        }
        // Copy the band one column at a time from the growing buffer:
        // when the band is wider than the field itself, later band
        // columns read columns the band already appended, wrapping
        // onto the start of the field again.
        for band_col in 0..band {
            for row in 0..rows {
                let cell = cells[band_col * rows + row];
                cells.push(cell);
            }
        }

        Self {
            cells,
            columns,
            field_columns: level.width,
            rows,
        }
    }

    /// Tile lookup. Fails with [`FieldError::OutOfRange`] past the
    /// padded bounds; unreachable while the scroll offset invariant
    /// holds, but raised rather than reading a wrong cell.
    pub fn at(&self, column: usize, row: usize) -> Result<TileKind, FieldError> {
        if column >= self.columns || row >= self.rows {
            return Err(FieldError::OutOfRange { column, row });
        }
        Ok(self.cells[column * self.rows + row])
    }

    #[inline]
    pub(crate) fn get(&self, column: usize, row: usize) -> TileKind {
        debug_assert!(column < self.columns && row < self.rows);
        self.cells[column * self.rows + row]
    }

    /// Column count including the wraparound band
    #[inline]
    pub fn column_count(&self) -> usize {
        self.columns
    }

    /// Authored field width, the scroll wrap period
    #[inline]
    pub fn field_width(&self) -> usize {
        self.field_columns
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn grid_from(source: &str, band: usize) -> TileGrid {
        let level = LevelData::parse(source).expect("level parses");
        TileGrid::with_wraparound(&level, band)
    }

    #[test]
    fn parses_and_inverts_rows() {
        // Authored top row "010", bottom row "000".
        let grid = grid_from("3 2  010  000", 0);
        // Row 0 is the bottom: all empty.
        for col in 0..3 {
            assert_eq!(grid.at(col, 0).unwrap(), TileKind::Empty);
        }
        // Row 1 is the authored top row.
        assert_eq!(grid.at(0, 1).unwrap(), TileKind::Empty);
        assert_eq!(grid.at(1, 1).unwrap(), TileKind::Solid);
        assert_eq!(grid.at(2, 1).unwrap(), TileKind::Empty);
    }

    #[test]
    fn hazard_and_unknown_codes() {
        let grid = grid_from("2 1  2x", 0);
        assert_eq!(grid.at(0, 0).unwrap(), TileKind::Hazard);
        assert_eq!(grid.at(1, 0).unwrap(), TileKind::Empty);
    }

    #[test]
    fn cells_may_be_whitespace_separated() {
        let grid = grid_from("2 2\n1 0\n0 1\n", 0);
        assert_eq!(grid.at(0, 1).unwrap(), TileKind::Solid);
        assert_eq!(grid.at(1, 1).unwrap(), TileKind::Empty);
        assert_eq!(grid.at(0, 0).unwrap(), TileKind::Empty);
        assert_eq!(grid.at(1, 0).unwrap(), TileKind::Solid);
    }

    #[test]
    fn wraparound_band_duplicates_leading_columns() {
        let grid = grid_from("3 2  012  210", 2);
        assert_eq!(grid.column_count(), 5);
        assert_eq!(grid.field_width(), 3);
        for band_col in 0..2 {
            for row in 0..2 {
                assert_eq!(
                    grid.at(3 + band_col, row).unwrap(),
                    grid.at(band_col, row).unwrap(),
                );
            }
        }
    }

    #[test]
    fn band_wider_than_field_wraps_onto_itself() {
        // A 2-column field with a 5-column band: the band repeats the
        // field cyclically, so every padded column mirrors column
        // index mod 2.
        let grid = grid_from("2 1  12", 5);
        assert_eq!(grid.column_count(), 7);
        for col in 0..7 {
            assert_eq!(grid.at(col, 0).unwrap(), grid.at(col % 2, 0).unwrap());
        }
        // Band columns also match the plain [0, band) duplication rule.
        for band_col in 0..5 {
            assert_eq!(
                grid.at(2 + band_col, 0).unwrap(),
                grid.at(band_col, 0).unwrap()
            );
        }
    }

    #[test]
    fn short_stream_is_malformed() {
        let err = LevelData::parse("3 2  010 00").unwrap_err();
        assert!(matches!(err, FieldError::MalformedLevel(_)));
    }

    #[test]
    fn missing_header_is_malformed() {
        assert!(matches!(
            LevelData::parse(""),
            Err(FieldError::MalformedLevel(_))
        ));
        assert!(matches!(
            LevelData::parse("3"),
            Err(FieldError::MalformedLevel(_))
        ));
    }

    #[test]
    fn non_positive_dimensions_are_malformed() {
        assert!(matches!(
            LevelData::parse("0 2"),
            Err(FieldError::MalformedLevel(_))
        ));
        assert!(matches!(
            LevelData::parse("3 -1"),
            Err(FieldError::MalformedLevel(_))
        ));
    }

    #[test]
    fn lookup_past_padded_bounds_fails() {
        let grid = grid_from("2 2  00  00", 1);
        assert!(grid.at(2, 0).is_ok());
        assert_eq!(
            grid.at(3, 0),
            Err(FieldError::OutOfRange { column: 3, row: 0 })
        );
        assert_eq!(
            grid.at(0, 2),
            Err(FieldError::OutOfRange { column: 0, row: 2 })
        );
    }

    proptest! {
        /// Any valid W x H source yields W + band columns of exactly H
        /// rows, with the band equal to the leading columns.
        #[test]
        fn grid_shape_and_band(
            width in 1usize..24,
            height in 1usize..12,
            band in 0usize..8,
            seed in any::<u64>(),
        ) {
            let mut source = format!("{width} {height}\n");
            let mut state = seed;
            for _ in 0..height {
                for _ in 0..width {
                    state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
                    source.push(char::from(b'0' + ((state >> 33) % 3) as u8));
                }
                source.push('\n');
            }

            let level = LevelData::parse(&source).unwrap();
            let grid = TileGrid::with_wraparound(&level, band);

            prop_assert_eq!(grid.column_count(), width + band);
            prop_assert_eq!(grid.row_count(), height);
            for col in 0..band {
                for row in 0..height {
                    prop_assert_eq!(
                        grid.at(width + col, row).unwrap(),
                        grid.at(col, row).unwrap()
                    );
                }
            }
        }
    }
}
