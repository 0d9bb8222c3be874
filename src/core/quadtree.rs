use crate::core::geometry::Rect;

/// Nodes at this depth stop subdividing and absorb every entry they are
/// offered. Guards against unbounded recursion when many particles cluster
/// at the same point.
const MAX_DEPTH: usize = 16;

/// One indexed disc stored in the tree: the particle's index in the owning
/// collection plus a snapshot of its position and radius at rebuild time.
#[derive(Debug, Clone, Copy)]
pub struct Entry {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

/// A quadtree over particle discs, used as the collision broad phase.
///
/// Each node holds up to `capacity` entries before subdividing into four
/// quadrant children of half extent. Entries already stored at a node stay
/// there when it splits, so a divided node may still hold up to `capacity`
/// entries of its own. An entry whose disc straddles a child boundary (and
/// is therefore rejected by all four children) is retained by the parent
/// rather than dropped, so every disc contained by the root boundary stays
/// queryable.
///
/// The tree is rebuilt from scratch every tick and never outlives a step.
#[derive(Debug)]
pub struct QuadTree {
    boundary: Rect,
    capacity: usize,
    depth: usize,
    entries: Vec<Entry>,
    children: Option<Box<[QuadTree; 4]>>,
}

impl QuadTree {
    pub fn new(boundary: Rect, capacity: usize) -> QuadTree {
        QuadTree::with_depth(boundary, capacity, 0)
    }

    fn with_depth(boundary: Rect, capacity: usize, depth: usize) -> QuadTree {
        QuadTree {
            boundary,
            capacity,
            depth,
            entries: Vec::new(),
            children: None,
        }
    }

    /// Insert an entry. Returns false iff the disc is not fully contained by
    /// this node's boundary; a contained disc is always stored somewhere in
    /// the subtree.
    pub fn insert(&mut self, entry: Entry) -> bool {
        if !self
            .boundary
            .contains_disc(entry.x, entry.y, entry.radius)
        {
            return false;
        }

        if self.entries.len() < self.capacity || self.depth >= MAX_DEPTH {
            self.entries.push(entry);
            return true;
        }

        if self.children.is_none() {
            self.subdivide();
        }
        if let Some(children) = self.children.as_mut() {
            for child in children.iter_mut() {
                if child.insert(entry) {
                    return true;
                }
            }
        }

        // The disc straddles a child boundary; keep it here so it is not
        // lost from the index for this tick.
        self.entries.push(entry);
        true
    }

    /// Collect into `out` every stored entry whose disc is contained by
    /// `range`, pruning subtrees whose boundary does not intersect it.
    pub fn query(&self, range: &Rect, out: &mut Vec<Entry>) {
        if !self.boundary.intersects(range) {
            return;
        }

        for entry in &self.entries {
            if range.contains_disc(entry.x, entry.y, entry.radius) {
                out.push(*entry);
            }
        }

        if let Some(children) = self.children.as_ref() {
            for child in children.iter() {
                child.query(range, out);
            }
        }
    }

    /// Total number of entries stored in this subtree.
    pub fn len(&self) -> usize {
        let child_total: usize = self
            .children
            .as_ref()
            .map(|c| c.iter().map(QuadTree::len).sum())
            .unwrap_or(0);
        self.entries.len() + child_total
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn subdivide(&mut self) {
        let Rect { x, y, w, h } = self.boundary;
        let (hw, hh) = (w / 2.0, h / 2.0);
        let d = self.depth + 1;

        let ne = Rect::new(x + hw, y - hh, hw, hh);
        let nw = Rect::new(x - hw, y - hh, hw, hh);
        let se = Rect::new(x + hw, y + hh, hw, hh);
        let sw = Rect::new(x - hw, y + hh, hw, hh);

        self.children = Some(Box::new([
            QuadTree::with_depth(ne, self.capacity, d),
            QuadTree::with_depth(nw, self.capacity, d),
            QuadTree::with_depth(se, self.capacity, d),
            QuadTree::with_depth(sw, self.capacity, d),
        ]));
    }
}
