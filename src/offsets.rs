use rustc_hash::FxHashSet;

use crate::point::Offset;

/// The fixed target separation between counted pairs.
pub const DISTANCE: i64 = 1234;

/// Every integer displacement whose length is exactly a fixed distance.
///
/// The table always contains the negation of each entry, so scanning all
/// (point, offset) combinations discovers each unordered pair exactly twice.
#[derive(Debug, Clone)]
pub struct OffsetTable {
    offsets: FxHashSet<Offset>,
    distance: i64,
}

impl OffsetTable {
    /// Table for the program's fixed distance.
    pub fn new() -> Self {
        Self::for_distance(DISTANCE)
    }

    /// Enumerate every (dx, dy) with dx² + dy² = d².
    ///
    /// The float sqrt only proposes a candidate dy; acceptance requires the
    /// exact integer identity to hold.
    pub fn for_distance(d: i64) -> Self {
        debug_assert!(d > 0, "distance must be positive");

        let mut offsets = FxHashSet::default();
        let d_squared = d * d;

        for dx in 0..=d {
            let remainder = d_squared - dx * dx;
            let dy = (remainder as f64).sqrt() as i64;
            if dy * dy != remainder {
                continue;
            }

            offsets.insert(Offset::new(dx, dy));
            if dy != 0 {
                offsets.insert(Offset::new(dx, -dy));
            }
            if dx != 0 {
                offsets.insert(Offset::new(-dx, dy));
                if dy != 0 {
                    offsets.insert(Offset::new(-dx, -dy));
                }
            }
        }

        Self { offsets, distance: d }
    }

    pub fn distance(&self) -> i64 {
        self.distance
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn contains(&self, offset: &Offset) -> bool {
        self.offsets.contains(offset)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Offset> {
        self.offsets.iter()
    }
}

impl Default for OffsetTable {
    fn default() -> Self {
        Self::new()
    }
}
