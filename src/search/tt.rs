//! Open-addressed evaluation cache.
//!
//! Each slot packs an entry into one `u64`: evaluation in the upper 32 bits,
//! position hash in the lower 32. A zero slot is empty, so a genuine hash of
//! zero lives in its own side slot.

pub const BYTES_PER_ENTRY: usize = std::mem::size_of::<u64>();
pub const DEFAULT_BYTES: usize = 1 << 20;

#[inline]
pub fn pack(hash: u32, eval: i32) -> u64 { ((eval as u32 as u64) << 32) | hash as u64 }

#[inline]
pub fn unpack(entry: u64) -> (u32, i32) { (entry as u32, (entry >> 32) as u32 as i32) }

pub struct TranspositionTable {
    slots: Vec<u64>,
    zero_hash: Option<i32>,
    len: usize,
}

impl Default for TranspositionTable {
    fn default() -> Self { TranspositionTable::with_capacity_bytes(DEFAULT_BYTES) }
}

impl TranspositionTable {
    /// At least one slot.
    pub fn with_capacity(entries: usize) -> Self {
        Self { slots: vec![0; entries.max(1)], zero_hash: None, len: 0 }
    }

    pub fn with_capacity_bytes(bytes: usize) -> Self { TranspositionTable::with_capacity(bytes / BYTES_PER_ENTRY) }

    pub fn capacity(&self) -> usize { self.slots.len() }

    pub fn len(&self) -> usize { self.len + self.zero_hash.is_some() as usize }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = 0);
        self.zero_hash = None;
        self.len = 0;
    }

    #[inline]
    fn home(&self, hash: u32) -> usize { hash as usize % self.slots.len() }

    /// Stores or overwrites `hash`. Dropped silently once every slot is taken.
    pub fn put(&mut self, hash: u32, eval: i32) {
        if hash == 0 { self.zero_hash = Some(eval); return; }
        let cap = self.slots.len();
        let mut idx = self.home(hash);
        for _ in 0..cap {
            let slot = self.slots[idx];
            if slot == 0 {
                self.slots[idx] = pack(hash, eval);
                self.len += 1;
                return;
            }
            if unpack(slot).0 == hash {
                self.slots[idx] = pack(hash, eval);
                return;
            }
            idx = (idx + 1) % cap;
        }
        log::trace!("transposition table full ({cap} entries), dropping {hash:#010x}");
    }

    pub fn get(&self, hash: u32) -> Option<i32> {
        if hash == 0 { return self.zero_hash; }
        let cap = self.slots.len();
        let mut idx = self.home(hash);
        for _ in 0..cap {
            let slot = self.slots[idx];
            if slot == 0 { return None; }
            let (h, eval) = unpack(slot);
            if h == hash { return Some(eval); }
            idx = (idx + 1) % cap;
        }
        None
    }

    pub fn contains(&self, hash: u32) -> bool { self.get(hash).is_some() }
}
