/// Compositing mode applied when a draw item is replayed.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum BlendMode {
    /// Source-over compositing.
    #[default]
    Normal,
    /// Erases already-drawn content wherever the shape covers it, leaving
    /// transparency behind; the shape's own color is ignored.
    Clear,
}
