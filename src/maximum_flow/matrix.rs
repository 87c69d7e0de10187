use num_traits::Zero;
use std::ops::{Index, IndexMut};

// n x n, row-major in one buffer
#[derive(Clone, PartialEq, Debug)]
pub struct SquareMatrix<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T> Default for SquareMatrix<T> {
    fn default() -> Self {
        Self { size: 0, cells: Vec::new() }
    }
}

impl<T> SquareMatrix<T>
where
    T: Zero + Copy,
{
    pub fn new(size: usize) -> Self {
        Self { size, cells: vec![T::zero(); size * size] }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    // O(n^2)
    // grow by one row and one column, existing cells keep their (i, j)
    pub fn grow(&mut self) {
        let old = self.size;
        let new = old + 1;
        let mut cells = vec![T::zero(); new * new];
        for i in 0..old {
            cells[i * new..i * new + old].copy_from_slice(&self.cells[i * old..(i + 1) * old]);
        }
        self.size = new;
        self.cells = cells;
    }

    // resize to size x size and zero every cell
    pub fn reset(&mut self, size: usize) {
        self.size = size;
        self.cells.clear();
        self.cells.resize(size * size, T::zero());
    }

    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        &self.cells[i * self.size..(i + 1) * self.size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks_exact panics on a zero chunk size
        self.cells.chunks_exact(self.size.max(1)).take(self.size)
    }
}

impl<T> Index<(usize, usize)> for SquareMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(i < self.size && j < self.size, "index ({i}, {j}) out of range for {0}x{0} matrix", self.size);
        &self.cells[i * self.size + j]
    }
}

impl<T> IndexMut<(usize, usize)> for SquareMatrix<T> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        assert!(i < self.size && j < self.size, "index ({i}, {j}) out of range for {0}x{0} matrix", self.size);
        &mut self.cells[i * self.size + j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grow_preserves_cells() {
        let mut m = SquareMatrix::<i64>::new(2);
        m[(0, 1)] = 3;
        m[(1, 0)] = 4;
        m[(1, 1)] = 5;
        m.grow();

        assert_eq!(m.size(), 3);
        assert_eq!(m.row(0), &[0, 3, 0]);
        assert_eq!(m.row(1), &[4, 5, 0]);
        assert_eq!(m.row(2), &[0, 0, 0]);
    }

    #[test]
    fn grow_from_empty() {
        let mut m = SquareMatrix::<i64>::default();
        assert_eq!(m.rows().count(), 0);
        m.grow();
        assert_eq!(m.size(), 1);
        assert_eq!(m[(0, 0)], 0);
        assert_eq!(m.rows().count(), 1);
    }

    #[test]
    fn reset_zeroes() {
        let mut m = SquareMatrix::<i64>::new(2);
        m[(1, 1)] = 7;
        m.reset(3);
        assert_eq!(m.size(), 3);
        assert!(m.rows().all(|r| r.iter().all(|&c| c == 0)));
    }

    #[test]
    #[should_panic]
    fn out_of_range() {
        let m = SquareMatrix::<i64>::new(2);
        let _ = m[(2, 0)];
    }
}
