use ndarray::Array2;

/// Single coordinate axis used for rows, columns and positions.
///
/// Signed so that any integer position can be asked about, negative values are simply out of bounds.
pub type Coord = isize;

/// Count type used for grid dimensions, mine counts and total-cell counts.
pub type CellCount = usize;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Grid dimensions `(rows, cols)`.
pub type Size2 = (CellCount, CellCount);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self, bounds: Size2) -> Option<Self::Output>;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self, (rows, cols): Size2) -> Option<Self::Output> {
        let row = usize::try_from(self.0).ok()?;
        let col = usize::try_from(self.1).ok()?;
        (row < rows && col < cols).then_some([row, col])
    }
}

/// Inverse of [`ToNdIndex`], every in-bounds index fits in a [`Coord`].
pub(crate) const fn to_coords([row, col]: [usize; 2]) -> Coord2 {
    (row as Coord, col as Coord)
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        NeighborIter::new(index, self.dim())
    }
}

const DISPLACEMENTS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Size2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;

    let next = (row.checked_add(d_row)?, col.checked_add(d_col)?);
    next.to_nd_index(bounds).map(|_| next)
}

/// Iterates over the up-to-8 in-bounds neighbours of a position, never the position itself.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Size2,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Size2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}
