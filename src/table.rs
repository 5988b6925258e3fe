use std::cmp::min;
use std::ops::Index;

use crate::utils::MyHash;

#[derive(Debug, Clone)]
struct Entry<T> {
    value: T,
    /// Index of the next entry in the same bucket (0 terminates the chain).
    next: usize,
}

/// Append-only hash-consing table.
///
/// Values are stored once: [`Table::put`] returns the index of an equal value
/// if one is already present. Indices start at 1; index 0 is the null slot
/// used to terminate bucket chains, and is never handed out.
#[derive(Debug, Clone)]
pub struct Table<T> {
    data: Vec<Entry<T>>,
    capacity: usize,

    buckets: Vec<usize>,
    bitmask: u64,
}

impl<T> Table<T> {
    /// Create a new table able to hold `2^bits - 1` values.
    pub fn new(bits: usize) -> Self {
        assert!(bits <= 31, "Storage bits should be in the range 0..=31");

        let capacity = 1 << bits;

        let buckets_bits = min(bits, 16);
        let buckets_size = 1 << buckets_bits;
        let buckets = vec![0; buckets_size];
        let bitmask = (buckets_size - 1) as u64;

        Self {
            data: Vec::new(),
            capacity,
            buckets,
            bitmask,
        }
    }

    /// Get the capacity of the table, including the null slot.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    /// Get the number of stored values.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Check whether `index` names a stored value.
    pub fn contains(&self, index: usize) -> bool {
        index != 0 && index <= self.data.len()
    }

    /// Get the reference to the value at the given index.
    pub fn value(&self, index: usize) -> &T {
        assert_ne!(index, 0, "Index is 0");
        &self.data[index - 1].value
    }

    /// Get the index of the next entry in the bucket chain.
    pub fn next(&self, index: usize) -> usize {
        assert_ne!(index, 0, "Index is 0");
        self.data[index - 1].next
    }

    fn set_next(&mut self, index: usize, next: usize) {
        assert_ne!(index, 0, "Index is 0");
        self.data[index - 1].next = next;
    }

    /// Add a new value to the table and return its index.
    fn add(&mut self, value: T) -> usize {
        let index = self.data.len() + 1;
        if index >= self.capacity {
            panic!("Storage is full");
        }
        self.data.push(Entry { value, next: 0 });
        index
    }
}

impl<T> Table<T>
where
    T: MyHash + Eq,
{
    fn bucket_index(&self, value: &T) -> usize {
        (value.hash() & self.bitmask) as usize
    }

    /// Put a value into the table and return its index.
    ///
    /// If an equal value is already stored, its index is returned instead.
    pub fn put(&mut self, value: T) -> usize {
        let bucket_index = self.bucket_index(&value);
        let mut index = self.buckets[bucket_index];

        if index == 0 {
            let i = self.add(value);
            self.buckets[bucket_index] = i;
            return i;
        }

        loop {
            if &value == self.value(index) {
                return index;
            }

            let next = self.next(index);

            if next == 0 {
                let i = self.add(value);
                self.set_next(index, i);
                return i;
            }
            index = next;
        }
    }
}

impl<T> Index<usize> for Table<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.value(index)
    }
}
