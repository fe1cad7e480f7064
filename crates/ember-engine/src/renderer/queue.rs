use super::camera::CameraView;
use super::raster::Renderer;
use super::traits::{DrawType, Renderable};
use crate::components::component::Component;

/// Ordering policy for a render queue. Chosen at construction and
/// immutable for the queue's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortPolicy {
    /// Entities draw in the order they were added.
    #[default]
    Default,
    /// Entities with a greater bottom edge (`y + height`) draw first.
    YSort,
    /// Ascending layer index; equal layers keep their relative order.
    Layered,
}

impl SortPolicy {
    /// Numeric code used by scene records.
    pub fn code(self) -> u32 {
        match self {
            SortPolicy::Default => 0,
            SortPolicy::YSort => 1,
            SortPolicy::Layered => 2,
        }
    }

    /// Inverse of [`code`](Self::code). Returns `None` for unknown codes.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(SortPolicy::Default),
            1 => Some(SortPolicy::YSort),
            2 => Some(SortPolicy::Layered),
            _ => None,
        }
    }
}

/// One queued handle: the component id plus the sort keys captured at the
/// last mutation or resync.
#[derive(Debug, Clone)]
struct QueueEntry {
    id: String,
    bottom: f32,
    layer: i32,
}

impl QueueEntry {
    fn capture(item: &dyn Renderable) -> Self {
        let b = item.bounds();
        Self {
            id: item.id().to_owned(),
            bottom: b.y() + b.height(),
            layer: item.layer(),
        }
    }
}

/// Maintains a render-ordered sequence of entity handles and drives their
/// draw calls.
///
/// The queue never owns entities; the scene does. Every mutation re-sorts
/// the whole sequence (O(n log n); scene populations are small), so the
/// order always reflects the policy as of the last mutation. All sorts are
/// stable: ties keep their previous relative order rather than falling to
/// a secondary key.
pub struct RenderQueue {
    policy: SortPolicy,
    entries: Vec<QueueEntry>,
}

impl RenderQueue {
    pub fn new(policy: SortPolicy) -> Self {
        Self {
            policy,
            entries: Vec::new(),
        }
    }

    pub fn policy(&self) -> SortPolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Queued ids in current draw order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.id.as_str())
    }

    /// Appends an entity, then fully re-sorts.
    pub fn add(&mut self, item: &dyn Renderable) {
        self.entries.push(QueueEntry::capture(item));
        self.sort();
    }

    /// Removes the first entry with the given id, then re-sorts.
    /// Silently does nothing when the id is absent.
    pub fn remove(&mut self, id: &str) {
        if let Some(idx) = self.entries.iter().position(|e| e.id == id) {
            self.entries.remove(idx);
            self.sort();
        }
    }

    /// Re-reads sort keys from the live entities and re-sorts, without
    /// structural change. Call after external bounds or layer edits.
    pub fn resync<'a>(&mut self, mut lookup: impl FnMut(&str) -> Option<&'a dyn Renderable>) {
        for entry in &mut self.entries {
            if let Some(item) = lookup(&entry.id) {
                let b = item.bounds();
                entry.bottom = b.y() + b.height();
                entry.layer = item.layer();
            }
        }
        self.sort();
    }

    fn sort(&mut self) {
        match self.policy {
            // A stable sort under a no-preference comparator is the
            // identity, so insertion order stands without sorting.
            SortPolicy::Default => {}
            SortPolicy::YSort => self.entries.sort_by(|a, b| b.bottom.total_cmp(&a.bottom)),
            SortPolicy::Layered => self.entries.sort_by(|a, b| a.layer.cmp(&b.layer)),
        }
    }

    /// Draws every visible entity in order. Static entities draw with a
    /// zero offset; dynamic entities draw with the current camera view.
    /// Ids that no longer resolve are skipped.
    pub fn render<'a>(
        &self,
        renderer: &mut Renderer,
        camera: &CameraView,
        mut lookup: impl FnMut(&str) -> Option<&'a dyn Renderable>,
    ) {
        for entry in &self.entries {
            let Some(item) = lookup(&entry.id) else {
                continue;
            };
            if !item.visible() {
                continue;
            }

            match item.draw_type() {
                DrawType::Dynamic => item.render(renderer, camera),
                DrawType::Static => item.render(renderer, &CameraView::STATIC),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::bounds::Bounds;
    use crate::components::sprite::Sprite;
    use crate::renderer::grid::ColorGrid;

    fn sprite(id: &str, y: f32, height: f32, layer: i32) -> Sprite {
        // Sprite takes its bounds size from the texture grid.
        Sprite::new(
            id,
            ColorGrid::new(1, height as u32),
            Bounds::new(0.0, y, 0.0, 0.0),
        )
        .with_layer(layer)
    }

    fn ordered_ids(queue: &RenderQueue) -> Vec<&str> {
        queue.ids().collect()
    }

    #[test]
    fn default_policy_preserves_insertion_order() {
        let mut queue = RenderQueue::new(SortPolicy::Default);
        let (a, b, c) = (
            sprite("a", 30.0, 5.0, 2),
            sprite("b", 10.0, 5.0, 1),
            sprite("c", 20.0, 5.0, 3),
        );
        queue.add(&a);
        queue.add(&b);
        queue.add(&c);
        assert_eq!(ordered_ids(&queue), ["a", "b", "c"]);

        queue.remove("b");
        assert_eq!(ordered_ids(&queue), ["a", "c"]);
    }

    #[test]
    fn y_sort_puts_greater_bottom_edge_first() {
        let mut queue = RenderQueue::new(SortPolicy::YSort);
        let (a, b, c) = (
            sprite("a", 10.0, 5.0, 0),  // bottom 15
            sprite("b", 40.0, 5.0, 0),  // bottom 45
            sprite("c", 20.0, 10.0, 0), // bottom 30
        );
        queue.add(&a);
        queue.add(&b);
        queue.add(&c);
        assert_eq!(ordered_ids(&queue), ["b", "c", "a"]);
    }

    #[test]
    fn y_sort_ties_keep_prior_relative_order() {
        let mut queue = RenderQueue::new(SortPolicy::YSort);
        let (a, b) = (sprite("a", 10.0, 5.0, 0), sprite("b", 10.0, 5.0, 0));
        queue.add(&a);
        queue.add(&b);
        assert_eq!(ordered_ids(&queue), ["a", "b"]);
    }

    #[test]
    fn layered_sort_is_ascending_and_stable() {
        let mut queue = RenderQueue::new(SortPolicy::Layered);
        let (a, b, c, d) = (
            sprite("a", 0.0, 1.0, 5),
            sprite("b", 0.0, 1.0, 1),
            sprite("c", 0.0, 1.0, 5),
            sprite("d", 0.0, 1.0, 3),
        );
        queue.add(&a);
        queue.add(&b);
        queue.add(&c);
        queue.add(&d);
        assert_eq!(ordered_ids(&queue), ["b", "d", "a", "c"]);
    }

    #[test]
    fn remove_of_unknown_id_is_a_no_op() {
        let mut queue = RenderQueue::new(SortPolicy::Default);
        let a = sprite("a", 0.0, 1.0, 0);
        queue.add(&a);
        queue.remove("missing");
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn resync_picks_up_bounds_edits() {
        let mut queue = RenderQueue::new(SortPolicy::YSort);
        let mut a = sprite("a", 10.0, 5.0, 0);
        let b = sprite("b", 40.0, 5.0, 0);
        queue.add(&a);
        queue.add(&b);
        assert_eq!(ordered_ids(&queue), ["b", "a"]);

        // Move "a" below "b" and resync.
        a.bounds_mut().set_position(0.0, 100.0);
        let items: Vec<&dyn Renderable> = vec![&a, &b];
        queue.resync(|id| items.iter().copied().find(|r| r.id() == id));
        assert_eq!(ordered_ids(&queue), ["a", "b"]);
    }

    #[test]
    fn sort_codes_round_trip() {
        for policy in [SortPolicy::Default, SortPolicy::YSort, SortPolicy::Layered] {
            assert_eq!(SortPolicy::from_code(policy.code()), Some(policy));
        }
        assert_eq!(SortPolicy::from_code(9), None);
    }

    #[test]
    fn render_skips_invisible_entities() {
        let mut queue = RenderQueue::new(SortPolicy::Default);
        let mut a = sprite("a", 0.0, 1.0, 0);
        a.set_visible(false);
        queue.add(&a);

        let mut renderer = Renderer::new(2, 2);
        let items: Vec<&dyn Renderable> = vec![&a];
        queue.render(&mut renderer, &CameraView::STATIC, |id| {
            items.iter().copied().find(|r| r.id() == id)
        });
        assert_eq!(renderer.frame().pixel(0, 0), crate::renderer::color::Color::BLACK.packed());
    }
}
