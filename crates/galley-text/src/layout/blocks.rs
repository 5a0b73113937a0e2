//! Per-character scanning and block merging.
//!
//! A merged block is the smallest span the wrapper is allowed to treat as a
//! unit: never split across lines, never stretched internally. Justification
//! only ever widens the gaps between blocks, so any weighted gap must fall
//! on a block boundary.

use core::ops::Range;

use crate::unicode::class::{BreakClass, break_class};
use crate::unicode::rules::{BreakOpportunity, resolve_opportunities};
use crate::unicode::utf8;

/// Characters drawn as pure spacing: never emitted as words; their width
/// comes from the layout parameters, not the font.
fn is_interword_space(cp: u32) -> bool {
    matches!(cp, 0x0009..=0x000D | 0x0020 | 0x00A0)
}

/// Spaces with glyphs of their own (OGHAM SPACE MARK onward): drawable
/// mid-line, stripped at line ends.
fn is_space(cp: u32) -> bool {
    matches!(cp, 0x1680 | 0x2000..=0x200A | 0x202F | 0x205F | 0x3000)
}

/// One decoded character with its layout-relevant classification.
#[derive(Debug, Clone)]
pub(crate) struct CharInfo {
    pub cp: u32,
    /// Byte range in the source text.
    pub range: Range<usize>,
    pub interword: bool,
    pub space: bool,
    /// Line_Break class as assigned by the classifier. Rule scans may see a
    /// rewritten class, but block merging works on the original.
    pub class: BreakClass,
    pub opportunity: BreakOpportunity,
}

/// Decode and classify the whole text, then resolve break opportunities.
pub(crate) fn scan_characters(text: &str) -> Vec<CharInfo> {
    let bytes = text.as_bytes();
    let mut chars = Vec::new();
    let mut classes = Vec::new();
    let mut pos = 0;
    while pos < bytes.len() {
        let cp = utf8::decode_code_point(bytes, pos);
        let next = utf8::next_code_point(bytes, pos);
        let class = break_class(cp);
        classes.push(class);
        chars.push(CharInfo {
            cp,
            range: pos..next,
            interword: is_interword_space(cp),
            space: is_space(cp),
            class,
            opportunity: BreakOpportunity::Unresolved,
        });
        pos = next;
    }

    let mut opportunities = vec![BreakOpportunity::Unresolved; classes.len()];
    resolve_opportunities(&mut classes, &mut opportunities);
    for (info, opportunity) in chars.iter_mut().zip(opportunities) {
        info.opportunity = opportunity;
    }
    chars
}

/// An atomic span of source bytes for the wrapper.
#[derive(Debug, Clone)]
pub(crate) struct Block {
    /// Byte range in the source text.
    pub range: Range<usize>,
    /// Single interword-space character; spacing only, never drawn.
    pub interword: bool,
    /// Drawable space; stripped when it ends up at a line end.
    pub space: bool,
    /// Share of justification slack for the gap after this block:
    /// 0 rigid, 1 ideograph boundary, 2 interword space.
    pub weight: i32,
    /// Resolved opportunity at the end of this block.
    pub opportunity: BreakOpportunity,
    /// A line ending here also ends a paragraph.
    pub paragraph_end: bool,
}

/// Coalesce the text into merged blocks.
///
/// A new block starts when the previous block is an interword space (those
/// stay singletons so their width can be discounted individually), when the
/// interword/space classification changes, when the previous character's
/// opportunity was anything but prohibited, or when the previous block
/// already carries spacing weight.
pub(crate) fn merge_blocks(text: &str) -> Vec<Block> {
    let chars = scan_characters(text);
    let mut blocks: Vec<Block> = Vec::new();
    let mut current: Option<Block> = None;

    for c in &chars {
        let split = current.as_ref().is_some_and(|block| {
            block.interword
                || block.interword != c.interword
                || block.space != c.space
                || block.opportunity != BreakOpportunity::Prohibited
                || block.weight > 0
        });
        if split {
            blocks.extend(current.take());
        }

        let mut weight = 0;
        if c.cp == 0x0020 || c.cp == 0x00A0 {
            weight = 2;
        } else if c.class == BreakClass::ID {
            // Ideographs justify without explicit spaces: a half-weight gap
            // on each breakable side, the leading one assigned backward.
            if c.opportunity == BreakOpportunity::Allowed {
                weight = 1;
            }
            if let Some(prev) = blocks.last_mut() {
                if prev.opportunity == BreakOpportunity::Allowed && prev.weight == 0 {
                    prev.weight = 1;
                }
            }
        }

        let paragraph_end = c.opportunity == BreakOpportunity::Mandatory;
        if let Some(block) = current.as_mut() {
            block.range.end = c.range.end;
            block.interword = c.interword;
            block.space = c.space;
            block.weight = weight;
            block.opportunity = c.opportunity;
            block.paragraph_end = paragraph_end;
        } else {
            current = Some(Block {
                range: c.range.clone(),
                interword: c.interword,
                space: c.space,
                weight,
                opportunity: c.opportunity,
                paragraph_end,
            });
        }
    }
    blocks.extend(current);
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of<'a>(text: &'a str, block: &Block) -> &'a str {
        &text[block.range.clone()]
    }

    #[test]
    fn words_and_spaces_alternate() {
        let text = "aa bb cc";
        let blocks = merge_blocks(text);
        let pieces: Vec<&str> = blocks.iter().map(|b| text_of(text, b)).collect();
        assert_eq!(pieces, vec!["aa", " ", "bb", " ", "cc"]);
        assert!(blocks[1].interword && blocks[3].interword);
        assert_eq!(blocks[1].weight, 2);
        assert_eq!(blocks[3].weight, 2);
        assert_eq!(blocks[0].weight, 0);
    }

    #[test]
    fn interword_spaces_stay_singletons() {
        let text = "a  b";
        let blocks = merge_blocks(text);
        let pieces: Vec<&str> = blocks.iter().map(|b| text_of(text, b)).collect();
        assert_eq!(pieces, vec!["a", " ", " ", "b"]);
    }

    #[test]
    fn quoted_word_is_one_block() {
        let text = "a \"bb\" c";
        let blocks = merge_blocks(text);
        let pieces: Vec<&str> = blocks.iter().map(|b| text_of(text, b)).collect();
        assert_eq!(pieces, vec!["a", " ", "\"bb\"", " ", "c"]);
    }

    #[test]
    fn number_with_postfix_is_one_block() {
        let text = "take 100% now";
        let blocks = merge_blocks(text);
        let pieces: Vec<&str> = blocks.iter().map(|b| text_of(text, b)).collect();
        assert_eq!(pieces, vec!["take", " ", "100%", " ", "now"]);
    }

    #[test]
    fn ideographs_split_and_carry_half_weight() {
        let text = "\u{65E5}\u{672C}\u{8A9E}";
        let blocks = merge_blocks(text);
        assert_eq!(blocks.len(), 3);
        // Breakable gaps after the first two ideographs get half weight; the
        // final block ends at a mandatory position and stays rigid.
        assert_eq!(blocks[0].weight, 1);
        assert_eq!(blocks[1].weight, 1);
        assert_eq!(blocks[2].weight, 0);
        assert!(blocks[2].paragraph_end);
    }

    #[test]
    fn ideograph_weight_reaches_back_to_western_text() {
        // "ab日": the gap between the alphabetic block and the ideograph is
        // breakable, so the alphabetic block's boundary gains half weight.
        let text = "ab\u{65E5}";
        let blocks = merge_blocks(text);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].weight, 1);
    }

    #[test]
    fn newline_marks_paragraph_end() {
        let text = "aa\nbb";
        let blocks = merge_blocks(text);
        let pieces: Vec<&str> = blocks.iter().map(|b| text_of(text, b)).collect();
        assert_eq!(pieces, vec!["aa", "\n", "bb"]);
        assert!(blocks[1].interword);
        assert!(blocks[1].paragraph_end);
        assert_eq!(blocks[1].opportunity, BreakOpportunity::Mandatory);
        assert!(!blocks[0].paragraph_end);
    }

    #[test]
    fn crlf_stays_prohibited_inside() {
        let text = "a\r\nb";
        let blocks = merge_blocks(text);
        let pieces: Vec<&str> = blocks.iter().map(|b| text_of(text, b)).collect();
        // CR and LF are interword singletons; the CR block's end is the
        // prohibited CR-LF seam.
        assert_eq!(pieces, vec!["a", "\r", "\n", "b"]);
        assert_eq!(blocks[1].opportunity, BreakOpportunity::Prohibited);
        assert!(blocks[2].paragraph_end);
    }

    #[test]
    fn ogham_space_is_drawable_but_space() {
        let text = "a\u{1680}b";
        let blocks = merge_blocks(text);
        assert!(blocks[1].space);
        assert!(!blocks[1].interword);
        assert_eq!(blocks[1].weight, 0);
    }

    #[test]
    fn empty_text_yields_no_blocks() {
        assert!(merge_blocks("").is_empty());
    }
}
