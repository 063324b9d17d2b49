/// Fixed-capacity ring buffer indexed by lag
///
/// `lag(0)` is the most recently pushed value, `lag(len - 1)` the oldest one
/// still held. Pushing onto a full buffer overwrites the oldest value, so a
/// step costs O(1) regardless of how long the simulation runs.
#[derive(Debug, Clone, PartialEq)]
pub struct LagBuffer {
    values: Vec<f64>,
    /// Slot holding lag 0
    head: usize,
    len: usize,
}

impl LagBuffer {
    /// Buffer holding at most `capacity` values; a capacity of zero holds one
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        LagBuffer {
            values: vec![0.0; capacity],
            head: capacity - 1,
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.values.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    pub fn push(&mut self, value: f64) {
        self.head = (self.head + 1) % self.capacity();
        self.values[self.head] = value;
        self.len = (self.len + 1).min(self.capacity());
    }

    /// Value `k` steps back from the most recent one
    ///
    /// # Panics
    /// Panics if `k >= len`.
    pub fn lag(&self, k: usize) -> f64 {
        assert!(k < self.len, "lag {} out of range (len {})", k, self.len);
        let capacity = self.capacity();
        self.values[(self.head + capacity - k) % capacity]
    }

    /// Most recent value first
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len).map(move |k| self.lag(k))
    }
}
