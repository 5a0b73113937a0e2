//! Line fitting, justification, and the layout cache.

pub(crate) mod blocks;
pub mod cache;
pub mod wrap;

pub use cache::{CacheData, LayoutCache, WrapParams};
pub use wrap::{RenderSink, Word, WrappedText};

/// Horizontal alignment of wrapped text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Align {
    Left,
    Center,
    Right,
    /// Both margins flush; the last line of each paragraph stays left.
    #[default]
    Justified,
}
