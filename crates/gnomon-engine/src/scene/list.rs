use crate::coords::Vec2;
use crate::paint::BlendMode;

use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command + compositing mode.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
    /// Compositing mode active when the item was recorded.
    pub blend: BlendMode,
}

/// Recorded draw stream for a frame.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame
///   allocation once warmed
///
/// # Origin
///
/// [`translate`](Self::translate) shifts the recording origin. Subsequently
/// pushed commands are stored with the shift already applied, so replayers
/// read finished coordinates and never track transform state. `clear()`
/// resets the origin.
///
/// # Blend scopes
///
/// [`push_blend`](Self::push_blend) / [`pop_blend`](Self::pop_blend) scope a
/// compositing mode over a run of draw commands. Scopes nest and must be
/// balanced; once every scope is popped the stream records
/// [`BlendMode::Normal`] again, so a scoped `Clear` cannot leak into
/// unrelated draws.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,

    /// Translation applied to commands at record time.
    origin: Vec2,
    /// Stack of active compositing modes; the top applies to pushed items.
    blend_stack: Vec<BlendMode>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items, the origin, and the blend stack. Keeps
    /// allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
        self.origin = Vec2::zero();
        self.blend_stack.clear();
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes a draw command with the given z-index.
    ///
    /// The item is recorded with the current origin applied and the current
    /// compositing mode attached.
    #[inline]
    pub fn push(&mut self, z: ZIndex, mut cmd: DrawCmd) {
        cmd.offset_by(self.origin);

        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
            blend: self.current_blend(),
        });

        self.sorted_dirty = true;
    }

    /// Shifts the recording origin by `delta`. Shifts accumulate.
    #[inline]
    pub fn translate(&mut self, delta: Vec2) {
        self.origin = self.origin + delta;
    }

    /// Begins a compositing scope. All draw commands pushed until
    /// [`pop_blend`](Self::pop_blend) are recorded with `mode`.
    ///
    /// Calls must be balanced with `pop_blend`.
    #[inline]
    pub fn push_blend(&mut self, mode: BlendMode) {
        self.blend_stack.push(mode);
    }

    /// Ends the most recent compositing scope started by
    /// [`push_blend`](Self::push_blend).
    ///
    /// # Panics
    /// Panics (debug only) if called without a matching `push_blend`.
    #[inline]
    pub fn pop_blend(&mut self) {
        debug_assert!(
            !self.blend_stack.is_empty(),
            "pop_blend called without matching push_blend"
        );
        self.blend_stack.pop();
    }

    #[inline]
    fn current_blend(&self) -> BlendMode {
        self.blend_stack.last().copied().unwrap_or_default()
    }

    /// Returns indices into `items` in paint order (back-to-front).
    ///
    /// This buffer is owned by `DrawList` and reused across frames.
    pub fn indices_in_paint_order(&mut self) -> &[usize] {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }
        &self.sorted_indices
    }

    /// Iterates items in paint order without cloning draw commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Stable ordering is ensured by SortKey including insertion order.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    fn fill_at(list: &mut DrawList, z: i32, x: f32, y: f32) {
        list.push_fill_circle(ZIndex::new(z), Vec2::new(x, y), 1.0, Color::BLACK);
    }

    fn centers_in_paint_order(list: &mut DrawList) -> Vec<Vec2> {
        list.iter_in_paint_order()
            .map(|item| match &item.cmd {
                DrawCmd::Circle(c) => c.center,
                other => panic!("unexpected command {other:?}"),
            })
            .collect()
    }

    // ── ordering ──────────────────────────────────────────────────────────

    #[test]
    fn equal_z_preserves_insertion_order() {
        let mut list = DrawList::new();
        fill_at(&mut list, 0, 1.0, 0.0);
        fill_at(&mut list, 0, 2.0, 0.0);
        fill_at(&mut list, 0, 3.0, 0.0);

        let xs: Vec<f32> = centers_in_paint_order(&mut list).iter().map(|c| c.x).collect();
        assert_eq!(xs, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn lower_z_paints_first() {
        let mut list = DrawList::new();
        fill_at(&mut list, 5, 1.0, 0.0);
        fill_at(&mut list, 0, 2.0, 0.0);

        let xs: Vec<f32> = centers_in_paint_order(&mut list).iter().map(|c| c.x).collect();
        assert_eq!(xs, vec![2.0, 1.0]);
    }

    // ── origin ────────────────────────────────────────────────────────────

    #[test]
    fn translate_applies_to_later_pushes_only() {
        let mut list = DrawList::new();
        fill_at(&mut list, 0, 1.0, 1.0);
        list.translate(Vec2::new(10.0, 20.0));
        fill_at(&mut list, 0, 1.0, 1.0);

        let centers = centers_in_paint_order(&mut list);
        assert_eq!(centers[0], Vec2::new(1.0, 1.0));
        assert_eq!(centers[1], Vec2::new(11.0, 21.0));
    }

    #[test]
    fn translate_accumulates() {
        let mut list = DrawList::new();
        list.translate(Vec2::new(5.0, 0.0));
        list.translate(Vec2::new(0.0, 5.0));
        fill_at(&mut list, 0, 0.0, 0.0);

        assert_eq!(centers_in_paint_order(&mut list)[0], Vec2::new(5.0, 5.0));
    }

    // ── blend scopes ──────────────────────────────────────────────────────

    #[test]
    fn blend_scope_covers_only_its_pushes() {
        let mut list = DrawList::new();
        fill_at(&mut list, 0, 0.0, 0.0);
        list.push_blend(BlendMode::Clear);
        fill_at(&mut list, 0, 0.0, 0.0);
        list.pop_blend();
        fill_at(&mut list, 0, 0.0, 0.0);

        let blends: Vec<BlendMode> = list.items().iter().map(|i| i.blend).collect();
        assert_eq!(blends, vec![BlendMode::Normal, BlendMode::Clear, BlendMode::Normal]);
    }

    #[test]
    fn blend_scopes_nest() {
        let mut list = DrawList::new();
        list.push_blend(BlendMode::Clear);
        list.push_blend(BlendMode::Normal);
        fill_at(&mut list, 0, 0.0, 0.0);
        list.pop_blend();
        fill_at(&mut list, 0, 0.0, 0.0);
        list.pop_blend();

        let blends: Vec<BlendMode> = list.items().iter().map(|i| i.blend).collect();
        assert_eq!(blends, vec![BlendMode::Normal, BlendMode::Clear]);
    }

    // ── clear ─────────────────────────────────────────────────────────────

    #[test]
    fn clear_resets_origin_and_blend() {
        let mut list = DrawList::new();
        list.translate(Vec2::new(7.0, 7.0));
        list.push_blend(BlendMode::Clear);
        fill_at(&mut list, 0, 0.0, 0.0);

        list.clear();
        assert!(list.is_empty());

        fill_at(&mut list, 0, 1.0, 2.0);
        let item = &list.items()[0];
        assert_eq!(item.blend, BlendMode::Normal);
        match &item.cmd {
            DrawCmd::Circle(c) => assert_eq!(c.center, Vec2::new(1.0, 2.0)),
            other => panic!("unexpected command {other:?}"),
        }
    }
}
