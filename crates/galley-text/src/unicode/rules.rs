//! Break-opportunity resolution: rules LB3 through LB30b of the Unicode Line
//! Breaking Algorithm (UAX #14), over the default rule set.
//!
//! The rules form an ordered table of `(applies, scan)` function pairs. A
//! scan walks the whole class sequence and writes opportunities; `applies`
//! inspects the union of classes present in the text and skips scans whose
//! trigger classes never occur, which is most of them for most paragraphs.
//!
//! Precedence is positional, not procedural: a scan may only write a slot
//! that is still [`BreakOpportunity::Unresolved`], so whichever rule reaches
//! a position first owns it and the rules simply run in numeric order.

use super::class::BreakClass;

/// Resolved decision for the position directly after one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BreakOpportunity {
    /// Not yet claimed by any rule; becomes `Allowed` at finalization.
    #[default]
    Unresolved,
    /// The line must end here.
    Mandatory,
    /// The line must not end here.
    Prohibited,
    /// The line may end here.
    Allowed,
}

/// First write wins: later rules cannot override a settled slot.
fn settle(slot: &mut BreakOpportunity, value: BreakOpportunity) {
    if *slot == BreakOpportunity::Unresolved {
        *slot = value;
    }
}

type ScanFn = fn(&mut [BreakClass], &mut [BreakOpportunity]) -> BreakClass;

struct Rule {
    /// Whether the scan can match at all, given the union of classes present.
    applies: fn(BreakClass) -> bool,
    /// Walks the text; returns any classes it introduced by rewriting.
    scan: ScanFn,
}

// LB3: always break at the end of text.
fn applies_lb3(_: BreakClass) -> bool {
    true
}

fn scan_lb3(classes: &mut [BreakClass], opps: &mut [BreakOpportunity]) -> BreakClass {
    settle(&mut opps[classes.len() - 1], BreakOpportunity::Mandatory);
    BreakClass::empty()
}

// LB4: always break after hard line breaks.
fn applies_lb4(seen: BreakClass) -> bool {
    seen.intersects(BreakClass::BK)
}

fn scan_lb4(classes: &mut [BreakClass], opps: &mut [BreakOpportunity]) -> BreakClass {
    for i in 0..classes.len() {
        if classes[i] == BreakClass::BK {
            settle(&mut opps[i], BreakOpportunity::Mandatory);
        }
    }
    BreakClass::empty()
}

// LB5: treat CR LF as a single hard break, and CR, LF, NL as hard breaks.
// LB6: do not break before a hard break.
fn applies_lb5_6(seen: BreakClass) -> bool {
    seen.intersects(BreakClass::BK | BreakClass::CR | BreakClass::LF | BreakClass::NL)
}

fn scan_lb5_6(classes: &mut [BreakClass], opps: &mut [BreakOpportunity]) -> BreakClass {
    let hard = BreakClass::BK | BreakClass::CR | BreakClass::LF | BreakClass::NL;
    let len = classes.len();
    for i in 0..len {
        if classes[i] == BreakClass::CR {
            if i + 1 < len && classes[i + 1] == BreakClass::LF {
                settle(&mut opps[i], BreakOpportunity::Prohibited);
            } else {
                settle(&mut opps[i], BreakOpportunity::Mandatory);
            }
        } else if classes[i].intersects(BreakClass::LF | BreakClass::NL) {
            settle(&mut opps[i], BreakOpportunity::Mandatory);
        }
        if i > 0 && classes[i].intersects(hard) {
            settle(&mut opps[i - 1], BreakOpportunity::Prohibited);
        }
    }
    BreakClass::empty()
}

// LB7: do not break before spaces or zero width space.
fn applies_lb7(seen: BreakClass) -> bool {
    seen.intersects(BreakClass::SP | BreakClass::ZW)
}

fn scan_lb7(classes: &mut [BreakClass], opps: &mut [BreakOpportunity]) -> BreakClass {
    for i in 1..classes.len() {
        if classes[i].intersects(BreakClass::SP | BreakClass::ZW) {
            settle(&mut opps[i - 1], BreakOpportunity::Prohibited);
        }
    }
    BreakClass::empty()
}

// LB8: break before any character following a zero-width space, even with
// intervening spaces.
fn applies_lb8(seen: BreakClass) -> bool {
    seen.intersects(BreakClass::ZW)
}

fn scan_lb8(classes: &mut [BreakClass], opps: &mut [BreakOpportunity]) -> BreakClass {
    let mut after_zw = false;
    for i in 0..classes.len() {
        if classes[i] != BreakClass::SP && after_zw {
            settle(&mut opps[i - 1], BreakOpportunity::Allowed);
            after_zw = false;
        }
        if classes[i] == BreakClass::ZW {
            after_zw = true;
        }
    }
    BreakClass::empty()
}

// LB8a: do not break between a zero width joiner and an ideograph, emoji
// base or emoji modifier.
fn applies_lb8a(seen: BreakClass) -> bool {
    seen.intersects(BreakClass::ZWJ)
        && seen.intersects(BreakClass::ID | BreakClass::EB | BreakClass::EM)
}

fn scan_lb8a(classes: &mut [BreakClass], opps: &mut [BreakOpportunity]) -> BreakClass {
    for i in 0..classes.len().saturating_sub(1) {
        if classes[i] == BreakClass::ZWJ
            && classes[i + 1].intersects(BreakClass::ID | BreakClass::EB | BreakClass::EM)
        {
            settle(&mut opps[i], BreakOpportunity::Prohibited);
        }
    }
    BreakClass::empty()
}

// LB9: a combining character sequence takes on the class of its base
// character; ZWJ behaves like CM here. The rewrite is visible to every
// later rule.
// LB10: a combining mark or ZWJ with no eligible base becomes AL.
fn applies_lb9_10(seen: BreakClass) -> bool {
    seen.intersects(BreakClass::CM | BreakClass::ZWJ)
}

fn scan_lb9_10(classes: &mut [BreakClass], opps: &mut [BreakOpportunity]) -> BreakClass {
    let no_base = BreakClass::BK
        | BreakClass::CR
        | BreakClass::LF
        | BreakClass::NL
        | BreakClass::SP
        | BreakClass::ZW;
    let mut added = BreakClass::empty();
    let mut base = BreakClass::BK;
    for i in 0..classes.len() {
        if classes[i].intersects(BreakClass::CM | BreakClass::ZWJ) {
            if base.intersects(no_base) {
                classes[i] = BreakClass::AL;
                added = BreakClass::AL;
            } else {
                classes[i] = base;
                settle(&mut opps[i - 1], BreakOpportunity::Prohibited);
            }
        } else {
            base = classes[i];
        }
    }
    added
}

// LB11: do not break before or after a word joiner.
fn applies_lb11(seen: BreakClass) -> bool {
    seen.intersects(BreakClass::WJ)
}

fn scan_lb11(classes: &mut [BreakClass], opps: &mut [BreakOpportunity]) -> BreakClass {
    for i in 0..classes.len() {
        if classes[i] == BreakClass::WJ {
            settle(&mut opps[i], BreakOpportunity::Prohibited);
            if i > 0 {
                settle(&mut opps[i - 1], BreakOpportunity::Prohibited);
            }
        }
    }
    BreakClass::empty()
}

// LB12: do not break after glue characters.
// LB12a: do not break before glue, except after spaces and hyphens.
fn applies_lb12_12a(seen: BreakClass) -> bool {
    seen.intersects(BreakClass::GL)
}

fn scan_lb12_12a(classes: &mut [BreakClass], opps: &mut [BreakOpportunity]) -> BreakClass {
    for i in 0..classes.len() {
        if classes[i] == BreakClass::GL {
            settle(&mut opps[i], BreakOpportunity::Prohibited);
            if i > 0
                && !classes[i - 1].intersects(BreakClass::SP | BreakClass::BA | BreakClass::HY)
            {
                settle(&mut opps[i - 1], BreakOpportunity::Prohibited);
            }
        }
    }
    BreakClass::empty()
}

// LB13: do not break before closing punctuation, exclamation, infix
// separators, or symbols, even after spaces.
fn applies_lb13(seen: BreakClass) -> bool {
    seen.intersects(
        BreakClass::CL | BreakClass::CP | BreakClass::EX | BreakClass::IS | BreakClass::SY,
    )
}

fn scan_lb13(classes: &mut [BreakClass], opps: &mut [BreakOpportunity]) -> BreakClass {
    let closing =
        BreakClass::CL | BreakClass::CP | BreakClass::EX | BreakClass::IS | BreakClass::SY;
    for i in 1..classes.len() {
        if classes[i].intersects(closing) {
            settle(&mut opps[i - 1], BreakOpportunity::Prohibited);
        }
    }
    BreakClass::empty()
}

// LB14: do not break after open punctuation, even after spaces.
// LB15: do not break between a quotation mark and open punctuation, even
// with intervening spaces.
fn applies_lb14_15(seen: BreakClass) -> bool {
    seen.intersects(BreakClass::OP)
}

fn scan_lb14_15(classes: &mut [BreakClass], opps: &mut [BreakOpportunity]) -> BreakClass {
    let mut after_op = false;
    let mut after_qu = false;
    for i in 0..classes.len() {
        if classes[i] != BreakClass::SP {
            if after_op || (after_qu && classes[i] == BreakClass::OP) {
                settle(&mut opps[i - 1], BreakOpportunity::Prohibited);
            }
            after_op = classes[i] == BreakClass::OP;
            after_qu = classes[i] == BreakClass::QU;
        }
    }
    BreakClass::empty()
}

// LB16: do not break between closing punctuation and a nonstarter, even
// with intervening spaces.
fn applies_lb16(seen: BreakClass) -> bool {
    seen.intersects(BreakClass::CL | BreakClass::CP) && seen.intersects(BreakClass::NS)
}

fn scan_lb16(classes: &mut [BreakClass], opps: &mut [BreakOpportunity]) -> BreakClass {
    let mut after_close = false;
    for i in 0..classes.len() {
        if after_close && classes[i] == BreakClass::NS {
            settle(&mut opps[i - 1], BreakOpportunity::Prohibited);
        }
        if classes[i].intersects(BreakClass::CL | BreakClass::CP) {
            after_close = true;
        } else if classes[i] != BreakClass::SP {
            after_close = false;
        }
    }
    BreakClass::empty()
}

// LB17: do not break between two em dashes, even with intervening spaces.
fn applies_lb17(seen: BreakClass) -> bool {
    seen.intersects(BreakClass::B2)
}

fn scan_lb17(classes: &mut [BreakClass], opps: &mut [BreakOpportunity]) -> BreakClass {
    let mut after_b2 = false;
    for i in 0..classes.len() {
        if classes[i] == BreakClass::B2 {
            if after_b2 {
                settle(&mut opps[i - 1], BreakOpportunity::Prohibited);
            }
            after_b2 = true;
        } else if classes[i] != BreakClass::SP {
            after_b2 = false;
        }
    }
    BreakClass::empty()
}

// LB18: break after spaces.
fn applies_lb18(seen: BreakClass) -> bool {
    seen.intersects(BreakClass::SP)
}

fn scan_lb18(classes: &mut [BreakClass], opps: &mut [BreakOpportunity]) -> BreakClass {
    for i in 0..classes.len() {
        if classes[i] == BreakClass::SP {
            settle(&mut opps[i], BreakOpportunity::Allowed);
        }
    }
    BreakClass::empty()
}

// LB19: do not break before or after quotation marks.
fn applies_lb19(seen: BreakClass) -> bool {
    seen.intersects(BreakClass::QU)
}

fn scan_lb19(classes: &mut [BreakClass], opps: &mut [BreakOpportunity]) -> BreakClass {
    for i in 0..classes.len() {
        if classes[i] == BreakClass::QU {
            settle(&mut opps[i], BreakOpportunity::Prohibited);
            if i > 0 {
                settle(&mut opps[i - 1], BreakOpportunity::Prohibited);
            }
        }
    }
    BreakClass::empty()
}

// LB20: break before and after unresolved contingent breaks.
fn applies_lb20(seen: BreakClass) -> bool {
    seen.intersects(BreakClass::CB)
}

fn scan_lb20(classes: &mut [BreakClass], opps: &mut [BreakOpportunity]) -> BreakClass {
    for i in 0..classes.len() {
        if classes[i] == BreakClass::CB {
            settle(&mut opps[i], BreakOpportunity::Allowed);
            if i > 0 {
                settle(&mut opps[i - 1], BreakOpportunity::Allowed);
            }
        }
    }
    BreakClass::empty()
}

// LB21: do not break before hyphens, break-after characters, or
// nonstarters, and do not break after break-before characters.
fn applies_lb21(seen: BreakClass) -> bool {
    seen.intersects(BreakClass::BA | BreakClass::HY | BreakClass::NS | BreakClass::BB)
}

fn scan_lb21(classes: &mut [BreakClass], opps: &mut [BreakOpportunity]) -> BreakClass {
    for i in 0..classes.len() {
        if i > 0 && classes[i].intersects(BreakClass::BA | BreakClass::HY | BreakClass::NS) {
            settle(&mut opps[i - 1], BreakOpportunity::Prohibited);
        }
        if classes[i] == BreakClass::BB {
            settle(&mut opps[i], BreakOpportunity::Prohibited);
        }
    }
    BreakClass::empty()
}

// LB21a: do not break after a Hebrew letter plus hyphen.
fn applies_lb21a(seen: BreakClass) -> bool {
    seen.intersects(BreakClass::HL) && seen.intersects(BreakClass::HY | BreakClass::BA)
}

fn scan_lb21a(classes: &mut [BreakClass], opps: &mut [BreakOpportunity]) -> BreakClass {
    for i in 1..classes.len() {
        if classes[i - 1] == BreakClass::HL
            && classes[i].intersects(BreakClass::HY | BreakClass::BA)
        {
            settle(&mut opps[i], BreakOpportunity::Prohibited);
        }
    }
    BreakClass::empty()
}

// LB21b: do not break between a solidus and a Hebrew letter.
fn applies_lb21b(seen: BreakClass) -> bool {
    seen.intersects(BreakClass::SY) && seen.intersects(BreakClass::HL)
}

fn scan_lb21b(classes: &mut [BreakClass], opps: &mut [BreakOpportunity]) -> BreakClass {
    for i in 1..classes.len() {
        if classes[i - 1] == BreakClass::SY && classes[i] == BreakClass::HL {
            settle(&mut opps[i - 1], BreakOpportunity::Prohibited);
        }
    }
    BreakClass::empty()
}

// LB22: do not break before an ellipsis after letters, exclamation,
// ideographs, other ellipses, or numbers.
fn applies_lb22(seen: BreakClass) -> bool {
    seen.intersects(BreakClass::IN)
}

fn scan_lb22(classes: &mut [BreakClass], opps: &mut [BreakOpportunity]) -> BreakClass {
    let before = BreakClass::AL
        | BreakClass::HL
        | BreakClass::EX
        | BreakClass::ID
        | BreakClass::EB
        | BreakClass::EM
        | BreakClass::IN
        | BreakClass::NU;
    for i in 1..classes.len() {
        if classes[i - 1].intersects(before) && classes[i] == BreakClass::IN {
            settle(&mut opps[i - 1], BreakOpportunity::Prohibited);
        }
    }
    BreakClass::empty()
}

// LB23: do not break between digits and letters.
fn applies_lb23(seen: BreakClass) -> bool {
    seen.intersects(BreakClass::AL | BreakClass::HL) && seen.intersects(BreakClass::NU)
}

fn scan_lb23(classes: &mut [BreakClass], opps: &mut [BreakOpportunity]) -> BreakClass {
    let letters = BreakClass::AL | BreakClass::HL;
    for i in 1..classes.len() {
        if classes[i - 1].intersects(letters) {
            if classes[i] == BreakClass::NU {
                settle(&mut opps[i - 1], BreakOpportunity::Prohibited);
            }
        } else if classes[i - 1] == BreakClass::NU && classes[i].intersects(letters) {
            settle(&mut opps[i - 1], BreakOpportunity::Prohibited);
        }
    }
    BreakClass::empty()
}

// LB23a: do not break between a numeric prefix and an ideograph, or between
// an ideograph and a numeric postfix.
fn applies_lb23a(seen: BreakClass) -> bool {
    seen.intersects(BreakClass::PR | BreakClass::PO)
        && seen.intersects(BreakClass::ID | BreakClass::EB | BreakClass::EM)
}

fn scan_lb23a(classes: &mut [BreakClass], opps: &mut [BreakOpportunity]) -> BreakClass {
    let ideographic = BreakClass::ID | BreakClass::EB | BreakClass::EM;
    for i in 1..classes.len() {
        if classes[i - 1] == BreakClass::PR {
            if classes[i].intersects(ideographic) {
                settle(&mut opps[i - 1], BreakOpportunity::Prohibited);
            }
        } else if classes[i - 1].intersects(ideographic) && classes[i] == BreakClass::PO {
            settle(&mut opps[i - 1], BreakOpportunity::Prohibited);
        }
    }
    BreakClass::empty()
}

// LB24: do not break between a numeric prefix/postfix and letters.
fn applies_lb24(seen: BreakClass) -> bool {
    seen.intersects(BreakClass::PR | BreakClass::PO)
        && seen.intersects(BreakClass::AL | BreakClass::HL)
}

fn scan_lb24(classes: &mut [BreakClass], opps: &mut [BreakOpportunity]) -> BreakClass {
    let affix = BreakClass::PR | BreakClass::PO;
    let letters = BreakClass::AL | BreakClass::HL;
    for i in 1..classes.len() {
        if classes[i - 1].intersects(affix) {
            if classes[i].intersects(letters) {
                settle(&mut opps[i - 1], BreakOpportunity::Prohibited);
            }
        } else if classes[i - 1].intersects(letters) && classes[i].intersects(affix) {
            settle(&mut opps[i - 1], BreakOpportunity::Prohibited);
        }
    }
    BreakClass::empty()
}

// LB25: do not break inside number clusters such as "$(12.35)" or "100%".
fn applies_lb25(seen: BreakClass) -> bool {
    seen.intersects(
        BreakClass::CL
            | BreakClass::CP
            | BreakClass::NU
            | BreakClass::PO
            | BreakClass::PR
            | BreakClass::HY
            | BreakClass::IS
            | BreakClass::SY,
    ) && seen.intersects(BreakClass::PO | BreakClass::PR | BreakClass::OP | BreakClass::NU)
}

fn scan_lb25(classes: &mut [BreakClass], opps: &mut [BreakOpportunity]) -> BreakClass {
    let affix = BreakClass::PO | BreakClass::PR;
    for i in 1..classes.len() {
        if classes[i - 1].intersects(BreakClass::CL | BreakClass::CP | BreakClass::NU)
            && classes[i].intersects(affix)
        {
            settle(&mut opps[i - 1], BreakOpportunity::Prohibited);
        } else if classes[i - 1].intersects(affix)
            && classes[i].intersects(BreakClass::OP | BreakClass::NU)
        {
            settle(&mut opps[i - 1], BreakOpportunity::Prohibited);
        } else if classes[i - 1]
            .intersects(BreakClass::HY | BreakClass::IS | BreakClass::NU | BreakClass::SY)
            && classes[i] == BreakClass::NU
        {
            settle(&mut opps[i - 1], BreakOpportunity::Prohibited);
        }
    }
    BreakClass::empty()
}

// LB26: do not break inside a Korean syllable.
fn applies_lb26(seen: BreakClass) -> bool {
    seen.intersects(
        BreakClass::JL | BreakClass::JV | BreakClass::H2 | BreakClass::JT | BreakClass::H3,
    )
}

fn scan_lb26(classes: &mut [BreakClass], opps: &mut [BreakOpportunity]) -> BreakClass {
    for i in 1..classes.len() {
        if classes[i - 1] == BreakClass::JL {
            if classes[i]
                .intersects(BreakClass::JL | BreakClass::JV | BreakClass::H2 | BreakClass::H3)
            {
                settle(&mut opps[i - 1], BreakOpportunity::Prohibited);
            }
        } else if classes[i - 1].intersects(BreakClass::JV | BreakClass::H2) {
            if classes[i].intersects(BreakClass::JV | BreakClass::JT) {
                settle(&mut opps[i - 1], BreakOpportunity::Prohibited);
            }
        } else if classes[i - 1].intersects(BreakClass::JT | BreakClass::H3)
            && classes[i] == BreakClass::JT
        {
            settle(&mut opps[i - 1], BreakOpportunity::Prohibited);
        }
    }
    BreakClass::empty()
}

// LB27: a Korean syllable block behaves like an ideograph next to
// ellipses, postfixes, and prefixes.
fn applies_lb27(seen: BreakClass) -> bool {
    seen.intersects(
        BreakClass::JL | BreakClass::JV | BreakClass::H2 | BreakClass::JT | BreakClass::H3,
    ) && seen.intersects(BreakClass::IN | BreakClass::PO | BreakClass::PR)
}

fn scan_lb27(classes: &mut [BreakClass], opps: &mut [BreakOpportunity]) -> BreakClass {
    let hangul =
        BreakClass::JL | BreakClass::JV | BreakClass::JT | BreakClass::H2 | BreakClass::H3;
    for i in 1..classes.len() {
        if classes[i - 1].intersects(hangul) {
            if classes[i].intersects(BreakClass::IN | BreakClass::PO) {
                settle(&mut opps[i - 1], BreakOpportunity::Prohibited);
            }
        } else if classes[i - 1] == BreakClass::PR && classes[i].intersects(hangul) {
            settle(&mut opps[i - 1], BreakOpportunity::Prohibited);
        }
    }
    BreakClass::empty()
}

// LB28: do not break between alphabetics.
fn applies_lb28(seen: BreakClass) -> bool {
    seen.intersects(BreakClass::AL | BreakClass::HL)
}

fn scan_lb28(classes: &mut [BreakClass], opps: &mut [BreakOpportunity]) -> BreakClass {
    let letters = BreakClass::AL | BreakClass::HL;
    for i in 1..classes.len() {
        if classes[i - 1].intersects(letters) && classes[i].intersects(letters) {
            settle(&mut opps[i - 1], BreakOpportunity::Prohibited);
        }
    }
    BreakClass::empty()
}

// LB29: do not break between an infix separator and alphabetics ("e.g.").
fn applies_lb29(seen: BreakClass) -> bool {
    seen.intersects(BreakClass::IS) && seen.intersects(BreakClass::AL | BreakClass::HL)
}

fn scan_lb29(classes: &mut [BreakClass], opps: &mut [BreakOpportunity]) -> BreakClass {
    for i in 1..classes.len() {
        if classes[i - 1] == BreakClass::IS
            && classes[i].intersects(BreakClass::AL | BreakClass::HL)
        {
            settle(&mut opps[i - 1], BreakOpportunity::Prohibited);
        }
    }
    BreakClass::empty()
}

// LB30: do not break between letters or numbers and parentheses.
fn applies_lb30(seen: BreakClass) -> bool {
    seen.intersects(BreakClass::AL | BreakClass::HL | BreakClass::NU)
        && seen.intersects(BreakClass::OP | BreakClass::CP)
}

fn scan_lb30(classes: &mut [BreakClass], opps: &mut [BreakOpportunity]) -> BreakClass {
    let word = BreakClass::AL | BreakClass::HL | BreakClass::NU;
    for i in 1..classes.len() {
        if classes[i - 1].intersects(word) {
            if classes[i] == BreakClass::OP {
                settle(&mut opps[i - 1], BreakOpportunity::Prohibited);
            }
        } else if classes[i - 1] == BreakClass::CP && classes[i].intersects(word) {
            settle(&mut opps[i - 1], BreakOpportunity::Prohibited);
        }
    }
    BreakClass::empty()
}

// LB30a: break between two regional indicators only when an even number of
// them precede the position.
fn applies_lb30a(seen: BreakClass) -> bool {
    seen.intersects(BreakClass::RI)
}

fn scan_lb30a(classes: &mut [BreakClass], opps: &mut [BreakOpportunity]) -> BreakClass {
    #[derive(PartialEq)]
    enum State {
        Initial,
        FoundFirst,
        SearchSecond,
    }
    let mut state = State::Initial;
    for i in 0..classes.len() {
        if classes[i] == BreakClass::RI {
            // A slot settled earlier marks an RI that LB9 folded into a
            // combining sequence; it does not count toward the pairing.
            let counts = opps[i] == BreakOpportunity::Unresolved;
            match state {
                State::Initial => {
                    if counts {
                        state = State::FoundFirst;
                    }
                }
                State::FoundFirst => {
                    settle(&mut opps[i - 1], BreakOpportunity::Prohibited);
                    state = if counts {
                        State::Initial
                    } else {
                        State::SearchSecond
                    };
                }
                State::SearchSecond => {
                    if counts {
                        state = State::Initial;
                    }
                }
            }
        } else {
            state = State::Initial;
        }
    }
    BreakClass::empty()
}

// LB30b: do not break between an emoji base and an emoji modifier.
fn applies_lb30b(seen: BreakClass) -> bool {
    seen.intersects(BreakClass::EB) && seen.intersects(BreakClass::EM)
}

fn scan_lb30b(classes: &mut [BreakClass], opps: &mut [BreakOpportunity]) -> BreakClass {
    for i in 1..classes.len() {
        if classes[i - 1] == BreakClass::EB && classes[i] == BreakClass::EM {
            settle(&mut opps[i - 1], BreakOpportunity::Prohibited);
        }
    }
    BreakClass::empty()
}

// LB2 (never break at the start of text) needs no scan: opportunities only
// exist after characters.
static RULES: &[Rule] = &[
    Rule { applies: applies_lb3, scan: scan_lb3 },
    Rule { applies: applies_lb4, scan: scan_lb4 },
    Rule { applies: applies_lb5_6, scan: scan_lb5_6 },
    Rule { applies: applies_lb7, scan: scan_lb7 },
    Rule { applies: applies_lb8, scan: scan_lb8 },
    Rule { applies: applies_lb8a, scan: scan_lb8a },
    Rule { applies: applies_lb9_10, scan: scan_lb9_10 },
    Rule { applies: applies_lb11, scan: scan_lb11 },
    Rule { applies: applies_lb12_12a, scan: scan_lb12_12a },
    Rule { applies: applies_lb13, scan: scan_lb13 },
    Rule { applies: applies_lb14_15, scan: scan_lb14_15 },
    Rule { applies: applies_lb16, scan: scan_lb16 },
    Rule { applies: applies_lb17, scan: scan_lb17 },
    Rule { applies: applies_lb18, scan: scan_lb18 },
    Rule { applies: applies_lb19, scan: scan_lb19 },
    Rule { applies: applies_lb20, scan: scan_lb20 },
    Rule { applies: applies_lb21, scan: scan_lb21 },
    Rule { applies: applies_lb21a, scan: scan_lb21a },
    Rule { applies: applies_lb21b, scan: scan_lb21b },
    Rule { applies: applies_lb22, scan: scan_lb22 },
    Rule { applies: applies_lb23, scan: scan_lb23 },
    Rule { applies: applies_lb23a, scan: scan_lb23a },
    Rule { applies: applies_lb24, scan: scan_lb24 },
    Rule { applies: applies_lb25, scan: scan_lb25 },
    Rule { applies: applies_lb26, scan: scan_lb26 },
    Rule { applies: applies_lb27, scan: scan_lb27 },
    Rule { applies: applies_lb28, scan: scan_lb28 },
    Rule { applies: applies_lb29, scan: scan_lb29 },
    Rule { applies: applies_lb30, scan: scan_lb30 },
    Rule { applies: applies_lb30a, scan: scan_lb30a },
    Rule { applies: applies_lb30b, scan: scan_lb30b },
];

/// Run every applicable rule over the class sequence, then finalize.
///
/// `classes` may be rewritten in place (LB9/LB10); `opportunities` must
/// start all-`Unresolved` and come back fully resolved, with leftover slots
/// downgraded to `Allowed`.
pub fn resolve_opportunities(classes: &mut [BreakClass], opportunities: &mut [BreakOpportunity]) {
    debug_assert_eq!(classes.len(), opportunities.len());
    if classes.is_empty() {
        return;
    }
    let mut seen = classes
        .iter()
        .fold(BreakClass::empty(), |acc, &class| acc | class);
    for rule in RULES {
        if (rule.applies)(seen) {
            seen |= (rule.scan)(classes, opportunities);
        }
    }
    for slot in opportunities {
        if *slot == BreakOpportunity::Unresolved {
            *slot = BreakOpportunity::Allowed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unicode::class::break_class;
    use BreakOpportunity::{Allowed, Mandatory, Prohibited};

    /// Resolved opportunity after each character of `text`.
    fn resolve(text: &str) -> Vec<BreakOpportunity> {
        let mut classes: Vec<BreakClass> =
            text.chars().map(|c| break_class(c as u32)).collect();
        let mut opps = vec![BreakOpportunity::Unresolved; classes.len()];
        resolve_opportunities(&mut classes, &mut opps);
        opps
    }

    #[test]
    fn end_of_text_is_mandatory() {
        assert_eq!(resolve("ab"), vec![Prohibited, Mandatory]);
    }

    #[test]
    fn break_after_spaces_not_before() {
        // "a b": no break before the space, allowed after it.
        assert_eq!(resolve("a b"), vec![Prohibited, Allowed, Mandatory]);
    }

    #[test]
    fn space_runs_break_once_at_the_end() {
        assert_eq!(
            resolve("a  b"),
            vec![Prohibited, Prohibited, Allowed, Mandatory]
        );
    }

    #[test]
    fn crlf_is_one_hard_break() {
        assert_eq!(
            resolve("a\r\nb"),
            vec![Prohibited, Prohibited, Mandatory, Mandatory]
        );
    }

    #[test]
    fn lone_cr_and_lf_are_hard_breaks() {
        assert_eq!(resolve("a\rb"), vec![Prohibited, Mandatory, Mandatory]);
        assert_eq!(resolve("a\nb"), vec![Prohibited, Mandatory, Mandatory]);
    }

    #[test]
    fn zero_width_space_allows_break() {
        assert_eq!(
            resolve("a\u{200B}b"),
            vec![Prohibited, Allowed, Mandatory]
        );
    }

    #[test]
    fn glue_binds_both_sides() {
        // NO-BREAK SPACE between words.
        assert_eq!(
            resolve("a\u{00A0}b"),
            vec![Prohibited, Prohibited, Mandatory]
        );
    }

    #[test]
    fn quotation_marks_bind_both_sides() {
        let opps = resolve("a \"b\" c");
        // After the opening quote and after 'b' and after the closing quote:
        // all prohibited; breaks only after the interword spaces.
        assert_eq!(
            opps,
            vec![
                Prohibited, // a (before space)
                Allowed,    // space
                Prohibited, // opening quote
                Prohibited, // b
                Prohibited, // closing quote (before space)
                Allowed,    // space
                Mandatory,  // c (end of text)
            ]
        );
    }

    #[test]
    fn combining_mark_attaches_to_base() {
        // e + COMBINING ACUTE ACCENT + x
        let opps = resolve("e\u{0301}x");
        assert_eq!(opps, vec![Prohibited, Prohibited, Mandatory]);
    }

    #[test]
    fn stray_combining_mark_acts_alphabetic() {
        // A combining mark after a space has no base; LB10 makes it AL, and
        // the position before it stays an ordinary space break.
        let opps = resolve("a \u{0301}b");
        assert_eq!(opps, vec![Prohibited, Allowed, Prohibited, Mandatory]);
    }

    #[test]
    fn number_cluster_is_unbreakable() {
        assert_eq!(
            resolve("100%"),
            vec![Prohibited, Prohibited, Prohibited, Mandatory]
        );
        assert_eq!(
            resolve("$12"),
            vec![Prohibited, Prohibited, Mandatory]
        );
        assert_eq!(
            resolve("3.14"),
            vec![Prohibited, Prohibited, Prohibited, Mandatory]
        );
    }

    #[test]
    fn letters_and_digits_stay_together() {
        assert_eq!(
            resolve("x86"),
            vec![Prohibited, Prohibited, Mandatory]
        );
    }

    #[test]
    fn korean_jamo_form_one_syllable() {
        // L + V + T jamo sequence.
        let opps = resolve("\u{1100}\u{1161}\u{11A8}");
        assert_eq!(opps, vec![Prohibited, Prohibited, Mandatory]);
    }

    #[test]
    fn hangul_syllables_may_break_between() {
        // Two precomposed syllables: break allowed between them.
        let opps = resolve("\u{AC00}\u{AC00}");
        assert_eq!(opps, vec![Allowed, Mandatory]);
    }

    #[test]
    fn ideographs_break_between() {
        let opps = resolve("\u{65E5}\u{672C}\u{8A9E}");
        assert_eq!(opps, vec![Allowed, Allowed, Mandatory]);
    }

    #[test]
    fn small_kana_is_a_nonstarter() {
        // Katakana A + small ya: no break before the nonstarter.
        let opps = resolve("\u{30A2}\u{30E3}");
        assert_eq!(opps, vec![Prohibited, Mandatory]);
    }

    #[test]
    fn regional_indicator_pairs() {
        let ri = "\u{1F1E6}";
        // Two flags (four RIs): prohibited inside each pair, allowed between.
        let opps = resolve(&ri.repeat(4));
        assert_eq!(opps, vec![Prohibited, Allowed, Prohibited, Mandatory]);
    }

    #[test]
    fn word_joiner_binds_both_sides() {
        assert_eq!(
            resolve("a\u{2060}b"),
            vec![Prohibited, Prohibited, Mandatory]
        );
    }

    #[test]
    fn hyphen_binds_to_preceding_word() {
        // No break before '-'; break after it is allowed.
        assert_eq!(
            resolve("go-to"),
            vec![Prohibited, Prohibited, Allowed, Prohibited, Mandatory]
        );
    }

    #[test]
    fn infix_separator_binds_abbreviations() {
        // "e.g" pattern: no break around the period.
        assert_eq!(
            resolve("e.g"),
            vec![Prohibited, Prohibited, Mandatory]
        );
    }

    #[test]
    fn open_punctuation_binds_forward_even_after_spaces() {
        // "( a": the space after '(' cannot become a break.
        assert_eq!(
            resolve("( a"),
            vec![Prohibited, Prohibited, Mandatory]
        );
    }

    #[test]
    fn matches_reference_implementation_on_ascii() {
        // On ASCII letters, spaces, commas, periods, exclamation marks and
        // newlines, revision 39 and the reference crate's data agree.
        for text in [
            "The quick brown fox jumps over the lazy dog.",
            "Hello, world! How are you?\nFine, thanks.",
            "one two  three\n\nfour",
            "ends with spaces   ",
            "a b \nc",
        ] {
            let mut classes: Vec<BreakClass> =
                text.chars().map(|c| break_class(c as u32)).collect();
            let mut opps = vec![BreakOpportunity::Unresolved; classes.len()];
            resolve_opportunities(&mut classes, &mut opps);

            let mut end = 0;
            let mut ours = Vec::new();
            for (c, opp) in text.chars().zip(&opps) {
                end += c.len_utf8();
                match opp {
                    Mandatory => ours.push((end, unicode_linebreak::BreakOpportunity::Mandatory)),
                    Allowed => ours.push((end, unicode_linebreak::BreakOpportunity::Allowed)),
                    _ => {}
                }
            }
            let reference: Vec<_> = unicode_linebreak::linebreaks(text).collect();
            assert_eq!(ours, reference, "diverged on {text:?}");
        }
    }
}
