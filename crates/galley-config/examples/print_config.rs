/// Example program to print the loaded configuration
///
/// Run with: cargo run -p galley-config --example print_config

fn main() {
    // Load configuration from galley.toml with environment overrides
    let config = galley_config::GalleyConfig::load();

    println!("=== Galley Configuration ===\n");

    println!("Text Settings:");
    println!("  Wrap Width: {:?}", config.text.wrap_width);
    println!("  Tab Width: {:?}", config.text.tab_width);
    println!("  Line Height: {:?}", config.text.line_height);
    println!("  Paragraph Break: {:?}", config.text.paragraph_break);
    println!("  Alignment: {:?}", config.text.alignment());
    println!();

    println!("Cache Settings:");
    println!("  Capacity: {:?}", config.cache.capacity);
    println!("  Refresh Interval: {:?}", config.cache.refresh_interval);
}
