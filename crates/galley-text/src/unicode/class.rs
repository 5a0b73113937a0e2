//! Line_Break classification (UAX #14, default assignments).

use bitflags::bitflags;
use hashbrown::HashMap;
use once_cell::sync::Lazy;

use super::tables;

bitflags! {
    /// Unicode Line_Break classes, as a bitmask so a scan can test one
    /// position against several classes in a single operation.
    ///
    /// The resolved classes AI, SG, XX and SA are folded into AL, and CJ
    /// into NS, which is the LB1 resolution for the default rule set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BreakClass: u64 {
        /// Ordinary alphabetic and symbol characters.
        const AL = 1 << 0;
        /// Break opportunity before and after (em dashes).
        const B2 = 1 << 1;
        /// Break after.
        const BA = 1 << 2;
        /// Break before.
        const BB = 1 << 3;
        /// Mandatory break.
        const BK = 1 << 4;
        /// Contingent break opportunity (replacement objects).
        const CB = 1 << 5;
        /// Close punctuation.
        const CL = 1 << 6;
        /// Combining mark.
        const CM = 1 << 7;
        /// Closing parenthesis.
        const CP = 1 << 8;
        /// Carriage return.
        const CR = 1 << 9;
        /// Emoji base.
        const EB = 1 << 10;
        /// Emoji modifier.
        const EM = 1 << 11;
        /// Exclamation or interrogation.
        const EX = 1 << 12;
        /// Non-breaking glue.
        const GL = 1 << 13;
        /// Hangul LV syllable.
        const H2 = 1 << 14;
        /// Hangul LVT syllable.
        const H3 = 1 << 15;
        /// Hebrew letter.
        const HL = 1 << 16;
        /// Hyphen.
        const HY = 1 << 17;
        /// Ideographic.
        const ID = 1 << 18;
        /// Inseparable characters (ellipses).
        const IN = 1 << 19;
        /// Infix numeric separator.
        const IS = 1 << 20;
        /// Hangul leading jamo.
        const JL = 1 << 21;
        /// Hangul trailing jamo.
        const JT = 1 << 22;
        /// Hangul vowel jamo.
        const JV = 1 << 23;
        /// Line feed.
        const LF = 1 << 24;
        /// Next line.
        const NL = 1 << 25;
        /// Nonstarters (small kana, certain punctuation).
        const NS = 1 << 26;
        /// Numeric.
        const NU = 1 << 27;
        /// Open punctuation.
        const OP = 1 << 28;
        /// Postfix numeric.
        const PO = 1 << 29;
        /// Prefix numeric.
        const PR = 1 << 30;
        /// Quotation.
        const QU = 1 << 31;
        /// Regional indicator.
        const RI = 1 << 32;
        /// Space.
        const SP = 1 << 33;
        /// Symbols allowing break after (solidus).
        const SY = 1 << 34;
        /// Word joiner.
        const WJ = 1 << 35;
        /// Zero width space.
        const ZW = 1 << 36;
        /// Zero width joiner.
        const ZWJ = 1 << 37;
    }
}

static EXACT_MAP: Lazy<HashMap<u32, BreakClass>> =
    Lazy::new(|| tables::EXACT.iter().copied().collect());

/// Look up the Line_Break class of a code point.
///
/// Total and pure: first the exact-match map, then the first range whose
/// upper bound covers the code point, and AL for everything beyond the
/// tables, including the invalid-byte sentinel.
pub fn break_class(cp: u32) -> BreakClass {
    if let Some(&class) = EXACT_MAP.get(&cp) {
        return class;
    }
    let idx = tables::RANGES.partition_point(|&(max, _)| max < cp);
    match tables::RANGES.get(idx) {
        Some(&(_, class)) => class,
        None => BreakClass::AL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unicode::utf8::INVALID_CODE_POINT;

    #[test]
    fn exact_tier_hits() {
        assert_eq!(break_class(0x0009), BreakClass::BA); // tab
        assert_eq!(break_class(0x000A), BreakClass::LF);
        assert_eq!(break_class(0x000D), BreakClass::CR);
        assert_eq!(break_class(0x0020), BreakClass::SP);
        assert_eq!(break_class(0x00A0), BreakClass::GL); // no-break space
        assert_eq!(break_class(0x2028), BreakClass::BK); // line separator
        assert_eq!(break_class(0x200B), BreakClass::ZW);
        assert_eq!(break_class(0x200D), BreakClass::ZWJ);
        assert_eq!(break_class('"' as u32), BreakClass::QU);
        assert_eq!(break_class('%' as u32), BreakClass::PO);
        assert_eq!(break_class('-' as u32), BreakClass::HY);
        assert_eq!(break_class(',' as u32), BreakClass::IS);
    }

    #[test]
    fn range_tier_hits() {
        assert_eq!(break_class('a' as u32), BreakClass::AL);
        assert_eq!(break_class('Z' as u32), BreakClass::AL);
        assert_eq!(break_class('7' as u32), BreakClass::NU);
        assert_eq!(break_class(0x4E00), BreakClass::ID); // CJK ideograph
        assert_eq!(break_class(0x05D0), BreakClass::HL); // Hebrew alef
        assert_eq!(break_class(0x1100), BreakClass::JL);
        assert_eq!(break_class(0x1161), BreakClass::JV);
        assert_eq!(break_class(0x11A8), BreakClass::JT);
        assert_eq!(break_class(0x1F1E6), BreakClass::RI); // regional indicator A
    }

    #[test]
    fn hangul_syllables() {
        assert_eq!(break_class(0xAC00), BreakClass::H2); // LV syllable
        assert_eq!(break_class(0xAC01), BreakClass::H3); // LVT syllable
    }

    #[test]
    fn unmapped_defaults_to_alphabetic() {
        assert_eq!(break_class(0x110000), BreakClass::AL);
        assert_eq!(break_class(INVALID_CODE_POINT), BreakClass::AL);
    }

    #[test]
    fn ranges_are_sorted() {
        assert!(tables::RANGES.windows(2).all(|w| w[0].0 < w[1].0));
    }
}
