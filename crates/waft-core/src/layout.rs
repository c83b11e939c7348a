//! Cell kinds, grid positions, and the validated rectangular layout.

use crate::error::LayoutError;

/// Classification of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Walkable cell with no special semantics.
    Empty,
    /// Impassable cell. Excluded from the signal propagation graph and
    /// from gradient probes.
    Wall,
    /// Terminal cell with positive reward semantics. Emits scent at
    /// strength +1.0.
    Goal,
    /// Terminal cell with negative reward semantics. Emits scent at
    /// strength -1.0.
    Pit,
}

impl CellKind {
    /// Parse a layout sketch glyph: `.` empty, `#` wall, `G` goal, `P` pit.
    pub fn from_glyph(glyph: char) -> Option<CellKind> {
        match glyph {
            '.' => Some(CellKind::Empty),
            '#' => Some(CellKind::Wall),
            'G' => Some(CellKind::Goal),
            'P' => Some(CellKind::Pit),
            _ => None,
        }
    }

    /// The sketch glyph for this kind. Inverse of [`CellKind::from_glyph`].
    pub fn glyph(self) -> char {
        match self {
            CellKind::Empty => '.',
            CellKind::Wall => '#',
            CellKind::Goal => 'G',
            CellKind::Pit => 'P',
        }
    }
}

/// A position on the grid: `(row, col)` with `0 <= row < rows` and
/// `0 <= col < cols`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridPos {
    /// Zero-based row.
    pub row: u32,
    /// Zero-based column.
    pub col: u32,
}

impl GridPos {
    /// Create a position from `(row, col)`.
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// An immutable rectangular grid of [`CellKind`]s.
///
/// Cells are stored row-major. The layout is validated once at
/// construction and never mutated; the signal field and the environment
/// collaborator read the same wall kind, so both agree on passability.
///
/// # Examples
///
/// ```
/// use waft_core::{CellKind, GridLayout};
///
/// let layout = GridLayout::parse(
///     "G..\n\
///      .#.\n\
///      ..P",
/// )
/// .unwrap();
/// assert_eq!(layout.rows(), 3);
/// assert_eq!(layout.cols(), 3);
/// assert_eq!(layout.kind(1, 1), CellKind::Wall);
/// assert!(layout.is_wall(1, 1));
/// assert_eq!(layout.kind(0, 0), CellKind::Goal);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridLayout {
    rows: u32,
    cols: u32,
    cells: Vec<CellKind>,
}

impl GridLayout {
    /// Maximum dimension size: positions use `u32` but offsets are `i32`
    /// arithmetic, so each axis must fit.
    pub const MAX_DIM: usize = i32::MAX as usize;

    /// Create a layout from a row-major cell buffer.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::EmptyLayout`] if either dimension is 0,
    /// [`LayoutError::DimensionTooLarge`] if either exceeds
    /// [`GridLayout::MAX_DIM`], or [`LayoutError::CellCountMismatch`] if
    /// the buffer does not hold `rows * cols` entries.
    pub fn new(rows: usize, cols: usize, cells: Vec<CellKind>) -> Result<Self, LayoutError> {
        if rows == 0 || cols == 0 {
            return Err(LayoutError::EmptyLayout);
        }
        if rows > Self::MAX_DIM {
            return Err(LayoutError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(LayoutError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        let expected = rows * cols;
        if cells.len() != expected {
            return Err(LayoutError::CellCountMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            rows: rows as u32,
            cols: cols as u32,
            cells,
        })
    }

    /// Create a layout from rows of cells, validating rectangularity.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::RaggedRow`] if any row's width differs from
    /// the first row's, plus the errors of [`GridLayout::new`].
    pub fn from_rows(rows: Vec<Vec<CellKind>>) -> Result<Self, LayoutError> {
        if rows.is_empty() {
            return Err(LayoutError::EmptyLayout);
        }
        let expected = rows[0].len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != expected {
                return Err(LayoutError::RaggedRow {
                    row: i,
                    width: row.len(),
                    expected,
                });
            }
        }
        let height = rows.len();
        let cells: Vec<CellKind> = rows.into_iter().flatten().collect();
        Self::new(height, expected, cells)
    }

    /// Parse an ASCII layout sketch: one line per row, `.`/`#`/`G`/`P`
    /// glyphs per [`CellKind::from_glyph`]. Blank lines are skipped, and
    /// lines are trimmed of surrounding whitespace so sketches can be
    /// indented in test code.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownGlyph`] on the first unrecognized
    /// character, plus the errors of [`GridLayout::from_rows`].
    pub fn parse(sketch: &str) -> Result<Self, LayoutError> {
        let mut rows = Vec::new();
        for (r, line) in sketch
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
        {
            let mut row = Vec::with_capacity(line.len());
            for (c, glyph) in line.chars().enumerate() {
                let kind = CellKind::from_glyph(glyph).ok_or(LayoutError::UnknownGlyph {
                    glyph,
                    row: r,
                    col: c,
                })?;
                row.push(kind);
            }
            rows.push(row);
        }
        Self::from_rows(rows)
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells (`rows * cols`).
    pub fn cell_count(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    /// Whether `(row, col)` lies inside the grid.
    pub fn in_bounds(&self, row: u32, col: u32) -> bool {
        row < self.rows && col < self.cols
    }

    /// Row-major rank of `(row, col)`: `row * cols + col`.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is out of bounds. Out-of-bounds positions
    /// are a caller contract violation, not a recoverable condition.
    pub fn index(&self, row: u32, col: u32) -> usize {
        assert!(
            self.in_bounds(row, col),
            "position ({row}, {col}) out of bounds for {}x{} layout",
            self.rows,
            self.cols,
        );
        (row as usize) * (self.cols as usize) + (col as usize)
    }

    /// The kind of the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is out of bounds.
    pub fn kind(&self, row: u32, col: u32) -> CellKind {
        self.cells[self.index(row, col)]
    }

    /// Whether the cell at `(row, col)` is a wall.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is out of bounds.
    pub fn is_wall(&self, row: u32, col: u32) -> bool {
        self.kind(row, col) == CellKind::Wall
    }

    /// Row-major iterator over `(GridPos, CellKind)`.
    pub fn iter(&self) -> impl Iterator<Item = (GridPos, CellKind)> + '_ {
        let cols = self.cols as usize;
        self.cells.iter().enumerate().map(move |(i, &kind)| {
            let row = (i / cols) as u32;
            let col = (i % cols) as u32;
            (GridPos::new(row, col), kind)
        })
    }
}
