use std::fmt::{Display, Formatter};
use std::ops::{Deref, Index, IndexMut};

use generic_array::{ArrayLength, GenericArray};

/// Index struct to access elements in the [`Grid`].
/// Row 0 is the top of the board, column 0 is the leftmost column.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct GridIndex {
    row: usize,
    col: usize,
}

impl GridIndex {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }
}

impl From<(usize, usize)> for GridIndex {
    fn from(value: (usize, usize)) -> Self {
        Self::new(value.0, value.1)
    }
}

/// One of the eight straight-line directions a walk across the [`Grid`]
/// can take.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// Index of the neighboring cell one step this way.
    /// Returns `None` when the step would cross the top or left edge.
    fn step(self, from: GridIndex) -> Option<GridIndex> {
        let GridIndex { row, col } = from;
        let index = match self {
            Self::Up => GridIndex::new(row.checked_sub(1)?, col),
            Self::Down => GridIndex::new(row + 1, col),
            Self::Left => GridIndex::new(row, col.checked_sub(1)?),
            Self::Right => GridIndex::new(row, col + 1),
            Self::UpLeft => GridIndex::new(row.checked_sub(1)?, col.checked_sub(1)?),
            Self::UpRight => GridIndex::new(row.checked_sub(1)?, col + 1),
            Self::DownLeft => GridIndex::new(row + 1, col.checked_sub(1)?),
            Self::DownRight => GridIndex::new(row + 1, col + 1),
        };
        Some(index)
    }
}

/// Two-dimensional fixed-length array.
/// Has R rows and C columns, meaning that the required index bounds are:
/// row < R, col < C
#[derive(Clone, Debug)]
pub struct Grid<T, R: ArrayLength, C: ArrayLength> {
    contents: GenericArray<GenericArray<T, C>, R>,
}

impl<T, R: ArrayLength, C: ArrayLength> Grid<T, R, C> {
    pub fn rows(&self) -> usize {
        R::to_usize()
    }

    pub fn cols(&self) -> usize {
        C::to_usize()
    }

    /// Iterator over cells on the straight line that starts at `from` and
    /// continues in `direction` until it leaves the grid.
    /// A line never wraps around an edge; an out-of-bounds `from` yields
    /// an empty iterator.
    pub fn line_iter(&self, from: GridIndex, direction: Direction) -> LineIter<'_, T, R, C> {
        LineIter {
            current: Some(from),
            direction,
            grid: self,
        }
    }

    /// Iterator over all cells with their indices, row by row from the
    /// top-left corner.
    pub fn all_indexed(&self) -> impl Iterator<Item = (GridIndex, &T)> {
        (0..self.rows())
            .flat_map(move |row| self.line_iter(GridIndex::new(row, 0), Direction::Right).indexed())
    }
}

impl<T: Default, R: ArrayLength, C: ArrayLength> Default for Grid<T, R, C> {
    fn default() -> Self {
        Self {
            contents: Default::default(),
        }
    }
}

impl<T, R: ArrayLength, C: ArrayLength> Deref for Grid<T, R, C> {
    type Target = [GenericArray<T, C>];

    fn deref(&self) -> &Self::Target {
        &self.contents
    }
}

impl<T: Display, R: ArrayLength, C: ArrayLength> Display for Grid<T, R, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.iter() {
            for value in row {
                write!(f, "{}", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T, R: ArrayLength, C: ArrayLength> Index<GridIndex> for Grid<T, R, C> {
    type Output = T;

    fn index(&self, index: GridIndex) -> &Self::Output {
        &self.contents[index.row][index.col]
    }
}

impl<T, R: ArrayLength, C: ArrayLength> IndexMut<GridIndex> for Grid<T, R, C> {
    fn index_mut(&mut self, index: GridIndex) -> &mut Self::Output {
        &mut self.contents[index.row][index.col]
    }
}

/// Iterator that walks a [`Grid`] in a straight line, yielding cell
/// contents until the walk leaves the grid.
pub struct LineIter<'a, T, R: ArrayLength, C: ArrayLength> {
    current: Option<GridIndex>,
    direction: Direction,
    grid: &'a Grid<T, R, C>,
}

impl<'a, T, R: ArrayLength, C: ArrayLength> LineIter<'a, T, R, C> {
    /// Adapter that pairs every yielded cell with its [`GridIndex`].
    pub fn indexed(self) -> IndexedLineIter<'a, T, R, C> {
        IndexedLineIter { inner: self }
    }
}

impl<'a, T, R: ArrayLength, C: ArrayLength> Iterator for LineIter<'a, T, R, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        if current.row() >= self.grid.rows() || current.col() >= self.grid.cols() {
            return None;
        }
        self.current = self.direction.step(current);
        Some(&self.grid[current])
    }
}

/// [`LineIter`] combined with the index of every cell it yields.
pub struct IndexedLineIter<'a, T, R: ArrayLength, C: ArrayLength> {
    inner: LineIter<'a, T, R, C>,
}

impl<'a, T, R: ArrayLength, C: ArrayLength> Iterator for IndexedLineIter<'a, T, R, C> {
    type Item = (GridIndex, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.inner.current?;
        let item = self.inner.next()?;
        Some((index, item))
    }
}
