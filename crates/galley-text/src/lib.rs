//! galley-text: paragraph text layout.
//!
//! Takes UTF-8 text, a wrap width, and an alignment mode, and produces
//! positioned words ready for a renderer. Line break opportunities follow
//! the Unicode Line Breaking Algorithm (UAX #14); lines are filled greedily
//! and justified by weighted gaps, with interword spaces carrying full
//! weight and ideograph boundaries half weight so CJK text justifies
//! without explicit spaces.
//!
//! Fonts stay behind the [`GlyphMetrics`] trait and drawing behind
//! [`RenderSink`]; the engine itself never touches a glyph. Layout is a
//! pure, bounded computation: any valid UTF-8 input produces a word list,
//! and degenerate inputs produce an empty one.

pub mod layout;
pub mod metrics;
pub mod unicode;

pub use layout::{Align, CacheData, LayoutCache, RenderSink, Word, WrapParams, WrappedText};
pub use metrics::{GlyphMetrics, Monospace};
