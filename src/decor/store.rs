use crate::decor::geometry::Point;
use crate::decor::model::KindId;
use hashlink::LinkedHashMap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const DEFAULT_JITTER: f32 = 10.0;
/// Jitter above this would scatter drops off the surface altogether.
pub const MAX_JITTER: f32 = 500.0;

/// Identifies one placed decoration. Handles are never reused by a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle(u64);

impl std::fmt::Display for Handle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedItem {
    pub handle: Handle,
    pub kind: KindId,
    pub position: Point,
}

/// Decorations currently on the tree, in placement order.
#[derive(Debug, Clone)]
pub struct PlacementStore {
    items: LinkedHashMap<Handle, PlacedItem>,
    next_handle: u64,
    jitter: f32,
    rng: StdRng,
}

impl Default for PlacementStore {
    fn default() -> Self {
        Self::new(DEFAULT_JITTER)
    }
}

impl PlacementStore {
    pub fn new(jitter: f32) -> Self {
        Self::with_rng(jitter, StdRng::from_entropy())
    }

    /// Store with a deterministic jitter sequence.
    pub fn seeded(jitter: f32, seed: u64) -> Self {
        Self::with_rng(jitter, StdRng::seed_from_u64(seed))
    }

    fn with_rng(jitter: f32, rng: StdRng) -> Self {
        Self {
            items: LinkedHashMap::new(),
            next_handle: 1,
            jitter: sanitize_jitter(jitter),
            rng,
        }
    }

    pub fn jitter(&self) -> f32 {
        self.jitter
    }

    /// Places `kind` near `at`, offset by up to `jitter` on each axis.
    pub fn add(&mut self, kind: KindId, at: Point) -> Handle {
        let position = Point::new(at.x + self.offset(), at.y + self.offset());
        let handle = Handle(self.next_handle);
        self.next_handle += 1;
        self.items.insert(
            handle,
            PlacedItem {
                handle,
                kind,
                position,
            },
        );
        handle
    }

    fn offset(&mut self) -> f32 {
        if self.jitter > 0.0 {
            self.rng.gen_range(-self.jitter..=self.jitter)
        } else {
            0.0
        }
    }

    pub fn remove_by_handle(&mut self, handle: Handle) -> Option<PlacedItem> {
        self.items.remove(&handle)
    }

    /// The item closest to `at`, if it is no further than `tolerance`.
    /// Ties go to the earliest placed item.
    pub fn nearest(&self, at: Point, tolerance: f32) -> Option<&PlacedItem> {
        let limit = tolerance.max(0.0);
        self.items
            .values()
            .map(|item| (item, item.position.distance_sq(at)))
            .filter(|(_, dist_sq)| *dist_sq <= limit * limit)
            .fold(None, |best: Option<(&PlacedItem, f32)>, candidate| match best {
                Some((_, best_dist)) if best_dist <= candidate.1 => best,
                _ => Some(candidate),
            })
            .map(|(item, _)| item)
    }

    /// Removes the single item nearest to `at` when it lies within `tolerance`.
    pub fn remove_nearest(&mut self, at: Point, tolerance: f32) -> Option<PlacedItem> {
        let handle = self.nearest(at, tolerance)?.handle;
        self.items.remove(&handle)
    }

    pub fn get(&self, handle: Handle) -> Option<&PlacedItem> {
        self.items.get(&handle)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlacedItem> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

fn sanitize_jitter(jitter: f32) -> f32 {
    if !jitter.is_finite() {
        return 0.0;
    }
    let spread = jitter.abs();
    if spread > MAX_JITTER {
        tracing::warn!(jitter, max = MAX_JITTER, "placement jitter too large; clamping");
    }
    spread.min(MAX_JITTER)
}
