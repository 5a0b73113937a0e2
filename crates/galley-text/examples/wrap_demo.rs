use galley_text::{Align, Monospace, RenderSink, WrappedText};

/// Prints each word at its position instead of rasterizing it.
struct ConsoleSink;

impl RenderSink for ConsoleSink {
    fn draw(&mut self, text: &str, x: i32, y: i32) {
        println!("  ({x:>4}, {y:>3})  {text:?}");
    }
}

fn main() {
    let font = Monospace::new(10, 10);
    let text = "The quick brown fox jumps over the lazy dog.\n\
                Pack my box with five dozen liquor jugs.";

    let mut wrapped = WrappedText::with_font(&font);
    wrapped.set_wrap_width(220);

    for alignment in [Align::Left, Align::Center, Align::Right, Align::Justified] {
        wrapped.set_alignment(alignment);
        wrapped.wrap(&font, text);

        println!("=== {alignment:?} (wrap width {}) ===", wrapped.wrap_width());
        wrapped.draw(&mut ConsoleSink, (0, 0));
        println!("  total height: {}px", wrapped.height());
        println!();
    }

    // CJK text justifies through ideograph boundaries, no spaces needed.
    let cjk = "\u{3053}\u{308C}\u{306F}\u{65E5}\u{672C}\u{8A9E}\u{306E}\u{6BB5}\u{843D}\u{3067}\u{3059}";
    wrapped.set_alignment(Align::Justified);
    wrapped.set_wrap_width(45);
    wrapped.wrap(&font, cjk);

    println!("=== Justified ideographs (wrap width 45) ===");
    wrapped.draw(&mut ConsoleSink, (0, 0));
    println!("  total height: {}px", wrapped.height());
}
