use std::fmt;
use std::ops::{Index, IndexMut};

use num_traits::Float;

use crate::traits::Vector;

/// A dense vector stored contiguously on the CPU.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseVector<T: Float> {
    data: Vec<T>,
}

impl<T: Float + fmt::Debug> DenseVector<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Creates a new DenseVector filled with zeros.
    pub fn zeros(len: usize) -> Self {
        Self {
            data: vec![T::zero(); len],
        }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T: Float + fmt::Debug> From<Vec<T>> for DenseVector<T> {
    fn from(data: Vec<T>) -> Self {
        Self::new(data)
    }
}

impl<T: Float> Index<usize> for DenseVector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T: Float> IndexMut<usize> for DenseVector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T: Float + fmt::Debug> Vector for DenseVector<T> {
    type Value = T;

    fn len(&self) -> usize {
        self.data.len()
    }
}

/// Writes `{ v0 v1 ... }`.
pub(crate) fn write_braced<T: fmt::Display>(f: &mut fmt::Formatter<'_>, values: &[T]) -> fmt::Result {
    write!(f, "{{")?;
    for v in values {
        write!(f, " {}", v)?;
    }
    write!(f, " }}")
}

impl<T: Float + fmt::Display> fmt::Display for DenseVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_braced(f, &self.data)
    }
}
