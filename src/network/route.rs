/// Number of direct-index buckets: every in-bounds cell id is below 78.
pub const ROUTE_KEYS: usize = 78;

/// Child-id -> parent-id table used by the path search.
///
/// The bucket index is the key itself, so lookups are O(1). A bucket may
/// hold more than one entry: `insert` appends, while `find` and `remove`
/// act on the oldest entry of the bucket.
#[derive(Debug, Clone)]
pub struct RouteTable {
    buckets: Vec<Vec<usize>>,
    len: usize,
}

impl Default for RouteTable {
    fn default() -> Self { Self::new() }
}

impl RouteTable {
    pub fn new() -> Self {
        Self { buckets: vec![Vec::new(); ROUTE_KEYS], len: 0 }
    }

    pub fn insert(&mut self, key: usize, value: usize) {
        if key >= self.buckets.len() {
            self.buckets.resize_with(key + 1, Vec::new);
        }
        self.buckets[key].push(value);
        self.len += 1;
    }

    pub fn find(&self, key: usize) -> Option<usize> {
        self.buckets.get(key).and_then(|b| b.first().copied())
    }

    pub fn remove(&mut self, key: usize) -> Option<usize> {
        let bucket = self.buckets.get_mut(key)?;
        if bucket.is_empty() { return None; }
        self.len -= 1;
        Some(bucket.remove(0))
    }

    pub fn clear(&mut self) {
        for b in &mut self.buckets { b.clear(); }
        self.len = 0;
    }

    pub fn len(&self) -> usize { self.len }

    pub fn is_empty(&self) -> bool { self.len == 0 }
}
