use crate::core::geometry::Rect;
use crate::core::quadtree::{Entry, QuadTree};
use crate::core::Particle;

/// Collision broad phase: given a particle, produce the indices of the
/// candidates it should be tested against.
///
/// The engine is parameterized by this strategy, with [`NaiveSweep`] and
/// [`QuadtreeIndex`] as interchangeable implementations. `rebuild` runs once
/// at the start of each step over the step-start positions; `candidates`
/// runs once per particle after that particle has been integrated.
pub trait CandidateFinder {
    /// Rebuild any per-step state from the current particle collection.
    fn rebuild(&mut self, bounds: Rect, particles: &[Particle]);

    /// Push candidate indices for `particles[index]` into `out`. May include
    /// `index` itself or indices of non-overlapping particles; the engine
    /// filters both. Must be deterministic given identical input.
    fn candidates(&self, index: usize, particles: &[Particle], out: &mut Vec<usize>);
}

/// Brute-force O(n²) candidate finder: every unordered pair exactly once.
#[derive(Debug, Default)]
pub struct NaiveSweep;

impl CandidateFinder for NaiveSweep {
    fn rebuild(&mut self, _bounds: Rect, _particles: &[Particle]) {}

    fn candidates(&self, index: usize, particles: &[Particle], out: &mut Vec<usize>) {
        out.extend(index + 1..particles.len());
    }
}

/// Quadtree broad phase: rebuilds a fresh spatial index each step and answers
/// candidate queries with a range query of the square centered on the
/// particle with half extents `2 · radius`.
#[derive(Debug)]
pub struct QuadtreeIndex {
    capacity: usize,
    tree: Option<QuadTree>,
}

impl QuadtreeIndex {
    /// Default node capacity before a subdivision.
    pub const DEFAULT_CAPACITY: usize = 4;

    pub fn new(capacity: usize) -> QuadtreeIndex {
        QuadtreeIndex {
            capacity: capacity.max(1),
            tree: None,
        }
    }
}

impl Default for QuadtreeIndex {
    fn default() -> Self {
        QuadtreeIndex::new(Self::DEFAULT_CAPACITY)
    }
}

impl CandidateFinder for QuadtreeIndex {
    fn rebuild(&mut self, bounds: Rect, particles: &[Particle]) {
        let mut tree = QuadTree::new(bounds, self.capacity);
        for (index, p) in particles.iter().enumerate() {
            // A disc that pokes past the universe boundary (e.g. right after
            // a resize) is not indexable this tick; the wall pass will pull
            // it back inside.
            let _ = tree.insert(Entry {
                index,
                x: p.x,
                y: p.y,
                radius: p.radius,
            });
        }
        self.tree = Some(tree);
    }

    fn candidates(&self, index: usize, particles: &[Particle], out: &mut Vec<usize>) {
        let Some(tree) = self.tree.as_ref() else {
            return;
        };
        let p = &particles[index];
        let range = Rect::new(p.x, p.y, p.radius * 2.0, p.radius * 2.0);
        let mut found = Vec::new();
        tree.query(&range, &mut found);
        out.extend(found.iter().map(|e| e.index));
    }
}
