// history.rs - Bounded FIFO of recent grid hashes for loop detection

/// Fixed-capacity ring of hashes. Once full, each push overwrites the oldest
/// entry.
#[derive(Debug, Clone)]
pub struct HashHistory {
    entries: Vec<u32>,
    capacity: usize,
    head: usize, // next slot to overwrite once full
}

impl HashHistory {
    pub const DEFAULT_CAPACITY: usize = 64;

    /// Capacity of zero is bumped to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
            head: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, hash: u32) -> bool {
        self.entries.contains(&hash)
    }

    pub fn push(&mut self, hash: u32) {
        if self.entries.len() < self.capacity {
            self.entries.push(hash);
        } else {
            self.entries[self.head] = hash;
            self.head = (self.head + 1) % self.capacity;
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.head = 0;
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        let (newer, older) = self.entries.split_at(self.head);
        older.iter().chain(newer.iter()).copied()
    }
}

impl Default for HashHistory {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
