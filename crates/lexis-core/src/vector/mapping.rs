use std::fmt;

use serde::{Deserialize, Serialize};

/// Capacity of a mapping created with [`SparseMapping::new`]
pub const DEFAULT_CAPACITY: usize = 11;

/// Sorted index → value store with an implicit zero for absent indices.
///
/// Entries are kept in two parallel vectors, ascending by index with no
/// duplicates, and a stored value is never `0.0`: setting an index to zero
/// removes it. Consumers rely on the ascending order to merge or dot-product two
/// mappings in a single parallel scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<(usize, f64)>", from = "Vec<(usize, f64)>")]
pub struct SparseMapping {
    indices: Vec<usize>,
    values: Vec<f64>,
}

impl Default for SparseMapping {
    fn default() -> Self {
        Self::new()
    }
}

impl SparseMapping {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        SparseMapping {
            indices: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    /// Number of stored (non-zero) entries
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.indices.capacity().min(self.values.capacity())
    }

    /// Value at `index`, or `0.0` when nothing is stored there.
    pub fn get(&self, index: usize) -> f64 {
        match self.indices.binary_search(&index) {
            Ok(offset) => self.values[offset],
            Err(_) => 0.0,
        }
    }

    /// Store `value` at `index`; `0.0` removes the entry.
    pub fn set(&mut self, index: usize, value: f64) {
        match self.indices.binary_search(&index) {
            Ok(offset) if value == 0.0 => {
                self.indices.remove(offset);
                self.values.remove(offset);
            }
            Ok(offset) => self.values[offset] = value,
            Err(_) if value == 0.0 => {}
            Err(at) => {
                self.grow_if_full();
                self.indices.insert(at, index);
                self.values.insert(at, value);
            }
        }
    }

    /// Add `delta` to the value at `index`.
    pub fn add(&mut self, index: usize, delta: f64) {
        let current = self.get(index);
        self.set(index, current + delta);
    }

    /// Grow by a factor of 1.2, and by at least one slot.
    fn grow_if_full(&mut self) {
        let len = self.len();
        if len < self.capacity() {
            return;
        }
        let target = ((1.2 * len as f64) as usize).max(len + 1);
        self.indices.reserve_exact(target - len);
        self.values.reserve_exact(target - len);
    }

    /// Entries in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.indices.iter().copied().zip(self.values.iter().copied())
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Multiply every value by `factor`.
    ///
    /// Entries that become `0.0` (scaling by zero, or underflow) are dropped.
    pub fn scale(&mut self, factor: f64) {
        let mut kept = 0;
        for offset in 0..self.len() {
            let value = self.values[offset] * factor;
            if value != 0.0 {
                self.indices[kept] = self.indices[offset];
                self.values[kept] = value;
                kept += 1;
            }
        }
        self.indices.truncate(kept);
        self.values.truncate(kept);
    }
}

impl FromIterator<(usize, f64)> for SparseMapping {
    /// Later pairs win over earlier ones with the same index.
    fn from_iter<I: IntoIterator<Item = (usize, f64)>>(iter: I) -> Self {
        let mut mapping = SparseMapping::new();
        for (index, value) in iter {
            mapping.set(index, value);
        }
        mapping
    }
}

impl From<Vec<(usize, f64)>> for SparseMapping {
    fn from(entries: Vec<(usize, f64)>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<SparseMapping> for Vec<(usize, f64)> {
    fn from(mapping: SparseMapping) -> Self {
        mapping.iter().collect()
    }
}

impl fmt::Display for SparseMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, value) in self.iter() {
            write!(f, "({index},{value:?})")?;
        }
        Ok(())
    }
}
