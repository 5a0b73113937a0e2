//! Greedy line fitting and justification.

use std::sync::Arc;

use crate::layout::Align;
use crate::layout::blocks;
use crate::layout::cache::{CacheData, LayoutCache, WrapParams};
use crate::metrics::GlyphMetrics;
use crate::unicode::rules::BreakOpportunity;
use crate::unicode::utf8;

/// A positioned, renderable run of text. Coordinates are pixels relative to
/// the paragraph's top-left origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    x: i32,
    y: i32,
}

impl Word {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }
}

/// Consumer of a finalized layout. Invoked strictly after layout completes,
/// never during; color and rasterization are the sink's business.
pub trait RenderSink {
    fn draw(&mut self, text: &str, x: i32, y: i32);
}

/// Calculates word positions for wrapped text: wrap width, tab width, line
/// height, paragraph spacing, and alignment are all configurable.
///
/// ```
/// use galley_text::{Monospace, WrappedText};
///
/// let font = Monospace::new(10, 10);
/// let mut wrapped = WrappedText::with_font(&font);
/// wrapped.set_wrap_width(90);
/// wrapped.wrap(&font, "aaaa bbbb cccc");
/// assert_eq!(wrapped.words().len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct WrappedText {
    space: i32,
    wrap_width: i32,
    tab_width: i32,
    line_height: i32,
    paragraph_break: i32,
    alignment: Align,
    result: Arc<CacheData>,
}

impl Default for WrappedText {
    fn default() -> Self {
        Self {
            space: 0,
            wrap_width: 1000,
            tab_width: 0,
            line_height: 0,
            paragraph_break: 0,
            alignment: Align::Justified,
            result: Arc::new(CacheData::default()),
        }
    }
}

impl WrappedText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a font's metrics; wrap width and alignment are still the
    /// caller's to set.
    pub fn with_font<F: GlyphMetrics>(font: &F) -> Self {
        let mut wrapped = Self::new();
        wrapped.set_font(font);
        wrapped
    }

    pub fn alignment(&self) -> Align {
        self.alignment
    }

    pub fn set_alignment(&mut self, alignment: Align) {
        self.alignment = alignment;
    }

    /// Wrap width in pixels, excluding any margins.
    pub fn wrap_width(&self) -> i32 {
        self.wrap_width
    }

    pub fn set_wrap_width(&mut self, width: i32) {
        self.wrap_width = width;
    }

    /// Width in pixels of a single tab character.
    pub fn tab_width(&self) -> i32 {
        self.tab_width
    }

    pub fn set_tab_width(&mut self, width: i32) {
        self.tab_width = width;
    }

    /// Height in pixels of one line within a paragraph.
    pub fn line_height(&self) -> i32 {
        self.line_height
    }

    pub fn set_line_height(&mut self, height: i32) {
        self.line_height = height;
    }

    /// Extra pixels between paragraphs.
    pub fn paragraph_break(&self) -> i32 {
        self.paragraph_break
    }

    pub fn set_paragraph_break(&mut self, height: i32) {
        self.paragraph_break = height;
    }

    /// Record the font's space advance and derive spacing defaults from its
    /// glyph height.
    pub fn set_font<F: GlyphMetrics>(&mut self, font: &F) {
        self.space = font.space();
        self.set_tab_width(4 * self.space);
        self.set_line_height(font.height() * 120 / 100);
        self.set_paragraph_break(font.height() * 40 / 100);
    }

    /// Lay out `text`, replacing any previous result.
    pub fn wrap<F: GlyphMetrics>(&mut self, font: &F, text: &str) {
        self.result = Arc::new(self.layout(font, text));
    }

    /// Lay out `text` through a cache: equal parameters return the memoized
    /// word list, byte for byte.
    pub fn wrap_cached<F: GlyphMetrics>(
        &mut self,
        font: &F,
        text: &str,
        cache: &mut LayoutCache,
    ) {
        let params = WrapParams {
            text: text.to_string(),
            font_id: font.font_id(),
            space: self.space,
            wrap_width: self.wrap_width,
            tab_width: self.tab_width,
            line_height: self.line_height,
            paragraph_break: self.paragraph_break,
            alignment: self.alignment,
        };
        if let Some(data) = cache.get(&params) {
            self.result = data;
            return;
        }
        let data = Arc::new(self.layout(font, text));
        cache.put(params, data.clone());
        self.result = data;
    }

    /// The laid-out words, in reading order with monotonically increasing
    /// positions.
    pub fn words(&self) -> &[Word] {
        &self.result.words
    }

    /// Total height of the wrapped text in pixels.
    pub fn height(&self) -> i32 {
        self.result.height
    }

    /// Feed every word to the sink, offset by `origin`.
    pub fn draw<S: RenderSink>(&self, sink: &mut S, origin: (i32, i32)) {
        for word in self.words() {
            sink.draw(&word.text, origin.0 + word.x, origin.1 + word.y);
        }
    }

    /// Spacing width of an interword character: space and no-break space
    /// measure as the configured space advance, tab as the tab width, and
    /// the remaining control characters as zero.
    fn space_width(&self, cp: u32) -> i32 {
        if cp == 0x0020 || cp == 0x00A0 {
            self.space
        } else if cp == 0x0009 {
            self.tab_width
        } else {
            0
        }
    }

    fn layout<F: GlyphMetrics>(&self, font: &F, text: &str) -> CacheData {
        if text.is_empty() || self.wrap_width <= 0 {
            return CacheData::default();
        }
        let mut blocks = blocks::merge_blocks(text);
        let Some(last) = blocks.last_mut() else {
            return CacheData::default();
        };
        // Sentinel so the final line always flushes.
        last.opportunity = BreakOpportunity::Mandatory;
        last.paragraph_end = true;

        // Per-block width, and the width a block adds to a line when it is
        // not at the line start. Space widths are deferred until a non-space
        // block lands, so trailing spaces never push a line past the wrap
        // width.
        let mut block_width = Vec::with_capacity(blocks.len());
        let mut added_width = Vec::with_capacity(blocks.len());
        let mut deferred = 0;
        for block in &blocks {
            let width = if block.interword {
                self.space_width(utf8::decode_code_point(text.as_bytes(), block.range.start))
            } else {
                font.width(&text[block.range.clone()])
            };
            block_width.push(width);
            if block.interword || block.space {
                added_width.push(0);
                deferred += width;
            } else {
                added_width.push(width + deferred);
                deferred = 0;
            }
        }

        let mut words: Vec<Word> = Vec::new();
        let mut cursor_x = 0;
        let mut cursor_y = 0;
        // Candidate width of the line being assembled.
        let mut line_width = 0;
        // First block of the current line, and the candidate end.
        let mut line_begin = 0;
        let mut line_end = 0;
        let mut n = 0;
        while n < blocks.len() {
            let block = &blocks[n];
            line_width += added_width[n];
            if block.opportunity != BreakOpportunity::Prohibited {
                let over = line_width > self.wrap_width;
                if !over {
                    line_end = n + 1;
                }
                if over || block.opportunity == BreakOpportunity::Mandatory {
                    // A line cut by overflow is mid-paragraph; a mandatory
                    // end closes it.
                    let is_end = !over;

                    // Every line carries at least one block, even one too
                    // wide for the margin.
                    if line_begin == line_end {
                        line_end = n + 1;
                    }
                    let next_line_begin = line_end;
                    while line_begin < line_end
                        && (blocks[line_end - 1].interword || blocks[line_end - 1].space)
                    {
                        line_end -= 1;
                    }

                    let first_word = words.len();
                    let mut weights: Vec<i32> = Vec::new();
                    for m in line_begin..line_end {
                        if !blocks[m].interword {
                            words.push(Word {
                                text: text[blocks[m].range.clone()].to_string(),
                                x: cursor_x,
                                y: cursor_y,
                            });
                            weights.push(blocks[m].weight);
                        } else if let Some(last) = weights.last_mut() {
                            // The interword space activates the gap after
                            // the word it follows.
                            *last = (*last).max(blocks[m].weight);
                        }
                        cursor_x += block_width[m];
                    }

                    self.adjust_line(&mut words[first_word..], cursor_x, is_end, &weights);

                    cursor_y += self.line_height;
                    cursor_x = 0;
                    if blocks[next_line_begin - 1].paragraph_end {
                        cursor_y += self.paragraph_break;
                    }
                    if next_line_begin < blocks.len() {
                        line_width = block_width[next_line_begin] - added_width[next_line_begin];
                    }
                    line_begin = next_line_begin;
                    line_end = next_line_begin;
                    n = next_line_begin;
                    continue;
                }
            }
            n += 1;
        }

        log::debug!(
            "wrapped {} bytes into {} words, height {}",
            text.len(),
            words.len(),
            cursor_y
        );
        CacheData {
            words,
            height: cursor_y,
        }
    }

    /// Shift a finalized line's words according to the alignment mode.
    ///
    /// `line_width` is the natural width of the stripped line; `weights[i]`
    /// is the spacing weight of the gap after `words[i]`. Justification
    /// distributes slack over weighted gaps by cumulative share, rounding
    /// each cumulative shift to the nearest pixel independently so the total
    /// lands exactly on the slack at the last gap. Negative slack (an
    /// overflowing line that contains compressible gaps) is distributed the
    /// same way, clamped to the total gap weight.
    fn adjust_line(&self, words: &mut [Word], line_width: i32, is_end: bool, weights: &[i32]) {
        if words.is_empty() {
            return;
        }
        let extra = self.wrap_width - line_width;

        if self.alignment == Align::Justified && !is_end && words.len() > 1 {
            let total: i64 = weights.iter().map(|&w| i64::from(w)).sum();
            if total == 0 {
                return;
            }
            let extra = i64::from(extra).max(-total);
            let mut partial = 0_i64;
            let mut shift = 0_i64;
            for (word, &weight) in words.iter_mut().zip(weights) {
                word.x += shift as i32;
                if weight != 0 {
                    partial += i64::from(weight);
                    shift = (2 * extra * partial / total + 1) / 2;
                }
            }
        } else if self.alignment == Align::Center || self.alignment == Align::Right {
            let shift = if self.alignment == Align::Center {
                extra / 2
            } else {
                extra
            };
            for word in words {
                word.x += shift;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::Monospace;

    const FONT: Monospace = Monospace {
        advance: 10,
        glyph_height: 10,
    };

    fn wrap_with(width: i32, alignment: Align, text: &str) -> WrappedText {
        let mut wrapped = WrappedText::with_font(&FONT);
        wrapped.set_wrap_width(width);
        wrapped.set_alignment(alignment);
        wrapped.wrap(&FONT, text);
        wrapped
    }

    fn positions(wrapped: &WrappedText) -> Vec<(&str, i32, i32)> {
        wrapped
            .words()
            .iter()
            .map(|w| (w.text(), w.x(), w.y()))
            .collect()
    }

    #[test]
    fn short_text_stays_on_one_line() {
        let wrapped = wrap_with(100, Align::Left, "aa bb cc");
        assert_eq!(
            positions(&wrapped),
            vec![("aa", 0, 0), ("bb", 30, 0), ("cc", 60, 0)]
        );
        // One line of height 12 (120% of the 10px glyph height) plus the
        // 4px paragraph break.
        assert_eq!(wrapped.height(), 16);
    }

    #[test]
    fn overflow_breaks_at_the_last_fitting_gap() {
        let wrapped = wrap_with(90, Align::Left, "aaaa bbbb cccc");
        assert_eq!(
            positions(&wrapped),
            vec![("aaaa", 0, 0), ("bbbb", 50, 0), ("cccc", 0, 12)]
        );
    }

    #[test]
    fn mandatory_break_splits_regardless_of_width() {
        let wrapped = wrap_with(1000, Align::Left, "a\n\tb");
        // Line two starts after the paragraph break; the tab advances the
        // pen without emitting a word.
        assert_eq!(
            positions(&wrapped),
            vec![("a", 0, 0), ("b", 40, 16)]
        );
    }

    #[test]
    fn overlong_token_overflows_without_failure() {
        let wrapped = wrap_with(100, Align::Left, "xxxxxxxxxxxxxxxxxxxx");
        assert_eq!(positions(&wrapped), vec![("xxxxxxxxxxxxxxxxxxxx", 0, 0)]);
    }

    #[test]
    fn overlong_token_still_breaks_the_line_before_it() {
        let wrapped = wrap_with(100, Align::Left, "aa xxxxxxxxxxxxxxxxxxxx bb");
        assert_eq!(
            positions(&wrapped),
            vec![
                ("aa", 0, 0),
                ("xxxxxxxxxxxxxxxxxxxx", 0, 12),
                ("bb", 0, 24),
            ]
        );
    }

    #[test]
    fn empty_text_is_empty_layout() {
        let wrapped = wrap_with(100, Align::Left, "");
        assert!(wrapped.words().is_empty());
        assert_eq!(wrapped.height(), 0);
    }

    #[test]
    fn non_positive_wrap_width_is_empty_layout() {
        for width in [0, -5] {
            let wrapped = wrap_with(width, Align::Left, "aa bb");
            assert!(wrapped.words().is_empty());
            assert_eq!(wrapped.height(), 0);
        }
    }

    #[test]
    fn trailing_spaces_never_overflow_a_line() {
        // "aaaa bbb" is 80px plus a trailing space: still one line at 90.
        let wrapped = wrap_with(90, Align::Left, "aaaa bbb ");
        assert_eq!(
            positions(&wrapped),
            vec![("aaaa", 0, 0), ("bbb", 50, 0)]
        );
    }

    #[test]
    fn center_alignment_shifts_by_half_the_slack() {
        let wrapped = wrap_with(100, Align::Center, "aa bb");
        // Natural width 50, slack 50, shift 25.
        assert_eq!(
            positions(&wrapped),
            vec![("aa", 25, 0), ("bb", 55, 0)]
        );
    }

    #[test]
    fn right_alignment_shifts_by_the_slack() {
        let wrapped = wrap_with(100, Align::Right, "aa bb");
        assert_eq!(
            positions(&wrapped),
            vec![("aa", 50, 0), ("bb", 80, 0)]
        );
    }

    #[test]
    fn justified_line_ends_exactly_at_the_wrap_width() {
        // First line "aaaa bbbb" has natural width 90; the 10px of slack
        // lands entirely in the single interword gap.
        let wrapped = wrap_with(100, Align::Justified, "aaaa bbbb cccc");
        assert_eq!(
            positions(&wrapped),
            vec![("aaaa", 0, 0), ("bbbb", 60, 0), ("cccc", 0, 12)]
        );
        let last_on_first_line = &wrapped.words()[1];
        assert_eq!(last_on_first_line.x() + 40, wrapped.wrap_width());
    }

    #[test]
    fn justification_splits_slack_across_gaps_by_weight() {
        // "aa bb cc dddd": the first line carries "aa bb cc" (natural width
        // 80, slack 20 over two full-weight gaps, 10 each).
        let wrapped = wrap_with(100, Align::Justified, "aa bb cc dddddddd");
        assert_eq!(
            positions(&wrapped),
            vec![
                ("aa", 0, 0),
                ("bb", 40, 0),
                ("cc", 80, 0),
                ("dddddddd", 0, 12),
            ]
        );
    }

    #[test]
    fn last_line_of_justified_paragraph_stays_left() {
        let wrapped = wrap_with(100, Align::Justified, "aaaa bbbb cccc");
        let last = wrapped.words().last().unwrap();
        assert_eq!(last.x(), 0);
    }

    #[test]
    fn single_word_line_is_never_stretched() {
        let wrapped = wrap_with(100, Align::Justified, "aaaa\nbbbb cccc dddd");
        assert_eq!(wrapped.words()[0].x(), 0);
    }

    #[test]
    fn paragraph_before_newline_is_not_justified() {
        // The line ends at a mandatory break, so it is a paragraph's last
        // line even though more text follows.
        let wrapped = wrap_with(100, Align::Justified, "aa bb\ncc dd");
        assert_eq!(
            positions(&wrapped)[..2],
            [("aa", 0, 0), ("bb", 30, 0)]
        );
    }

    #[test]
    fn ideographs_justify_without_spaces() {
        // Four 10px ideographs at wrap width 35: three fit with slack 5
        // spread over the two inner half-weight gaps and the trailing gap.
        let text = "\u{65E5}\u{672C}\u{8A9E}\u{6F22}";
        let wrapped = wrap_with(35, Align::Justified, text);
        let words = positions(&wrapped);
        assert_eq!(words.len(), 4);
        assert_eq!(words[3].2, 12);
        // Cumulative rounded shares of 5px over weights 1,1,1: +2, +3.
        assert_eq!(words[0].1, 0);
        assert_eq!(words[1].1, 12);
        assert_eq!(words[2].1, 23);
    }

    #[test]
    fn compression_is_clamped_to_total_weight() {
        // A no-break space glues "aaa" to "bbb", so the 70px pair overflows
        // the 50px line as a unit. The 20px deficit is compressed into the
        // no-break-space gap, clamped to its weight: one pixel of cumulative
        // shift, not twenty.
        let wrapped = wrap_with(50, Align::Justified, "aaa\u{00A0}bbb ccc");
        assert_eq!(
            positions(&wrapped),
            vec![("aaa", 0, 0), ("bbb", 39, 0), ("ccc", 0, 12)]
        );
    }

    #[test]
    fn quoted_words_never_split_from_their_quotes() {
        let wrapped = wrap_with(60, Align::Left, "say \"hi\" now");
        let texts: Vec<&str> = wrapped.words().iter().map(Word::text).collect();
        assert!(texts.contains(&"\"hi\""));
    }

    #[test]
    fn wrap_is_idempotent() {
        let mut wrapped = WrappedText::with_font(&FONT);
        wrapped.set_wrap_width(90);
        wrapped.wrap(&FONT, "aaaa bbbb cccc");
        let first: Vec<Word> = wrapped.words().to_vec();
        wrapped.wrap(&FONT, "aaaa bbbb cccc");
        assert_eq!(wrapped.words(), &first[..]);
    }

    #[test]
    fn draw_offsets_by_origin() {
        struct Collect(Vec<(String, i32, i32)>);
        impl RenderSink for Collect {
            fn draw(&mut self, text: &str, x: i32, y: i32) {
                self.0.push((text.to_string(), x, y));
            }
        }

        let wrapped = wrap_with(100, Align::Left, "aa bb");
        let mut sink = Collect(Vec::new());
        wrapped.draw(&mut sink, (7, 20));
        assert_eq!(
            sink.0,
            vec![("aa".to_string(), 7, 20), ("bb".to_string(), 37, 20)]
        );
    }

    #[test]
    fn height_counts_paragraph_breaks() {
        let wrapped = wrap_with(100, Align::Left, "aa\nbb");
        // Two lines of 12px, each closing a paragraph worth 4 extra pixels.
        assert_eq!(wrapped.height(), 32);
        assert_eq!(
            positions(&wrapped),
            vec![("aa", 0, 0), ("bb", 0, 16)]
        );
    }

    #[test]
    fn font_defaults_follow_the_metrics() {
        let font = Monospace::new(12, 20);
        let wrapped = WrappedText::with_font(&font);
        assert_eq!(wrapped.tab_width(), 48);
        assert_eq!(wrapped.line_height(), 24);
        assert_eq!(wrapped.paragraph_break(), 8);
    }

    #[test]
    fn lines_fit_within_the_wrap_width() {
        let text = "one two three four five six seven eight nine ten";
        for width in [40, 70, 100, 150] {
            let wrapped = wrap_with(width, Align::Left, text);
            for word in wrapped.words() {
                // Only a line's first word may protrude, and only when it is
                // an unbreakable token wider than the whole line.
                if word.x() > 0 {
                    assert!(
                        word.x() + FONT.width(word.text()) <= width,
                        "{:?} overflows width {width}",
                        word.text()
                    );
                }
            }
        }
    }

    #[test]
    fn number_cluster_survives_tight_wrapping() {
        let wrapped = wrap_with(50, Align::Left, "pay 100% tax");
        let texts: Vec<&str> = wrapped.words().iter().map(Word::text).collect();
        assert!(texts.contains(&"100%"));
    }

    #[test]
    fn korean_syllables_wrap_as_units() {
        // Two decomposed syllables (L+V+T, then L+V); at 25px the first
        // overflows alone and the second starts the next line.
        let wrapped = wrap_with(
            25,
            Align::Left,
            "\u{1100}\u{1161}\u{11A8}\u{1100}\u{1161}",
        );
        assert_eq!(
            positions(&wrapped),
            vec![
                ("\u{1100}\u{1161}\u{11A8}", 0, 0),
                ("\u{1100}\u{1161}", 0, 12),
            ]
        );
    }

    #[test]
    fn cached_wrap_matches_direct_wrap() {
        let text = "aaaa bbbb cccc";
        let mut direct = WrappedText::with_font(&FONT);
        direct.set_wrap_width(90);
        direct.wrap(&FONT, text);

        let mut cache = LayoutCache::new();
        let mut cached = WrappedText::with_font(&FONT);
        cached.set_wrap_width(90);
        // Cold, then warm: identical either way.
        cached.wrap_cached(&FONT, text, &mut cache);
        assert_eq!(cached.words(), direct.words());
        cached.wrap_cached(&FONT, text, &mut cache);
        assert_eq!(cached.words(), direct.words());
        assert_eq!(cached.height(), direct.height());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn changed_parameters_miss_the_cache() {
        let text = "aaaa bbbb cccc";
        let mut cache = LayoutCache::new();
        let mut wrapped = WrappedText::with_font(&FONT);
        wrapped.set_wrap_width(90);
        wrapped.wrap_cached(&FONT, text, &mut cache);
        assert_eq!(wrapped.words()[2].y(), 12);

        wrapped.set_wrap_width(1000);
        wrapped.wrap_cached(&FONT, text, &mut cache);
        assert_eq!(wrapped.words()[2].y(), 0);
        assert_eq!(cache.len(), 2);

        // A different font identity is a different key too.
        let other = Monospace::new(10, 16);
        wrapped.wrap_cached(&other, text, &mut cache);
        assert_eq!(cache.len(), 3);
    }
}
