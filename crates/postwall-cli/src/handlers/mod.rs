pub mod feed;
pub mod settings;

/// Short orientation text shown when no subcommand is given.
pub fn guidance(base_url: &str) {
    println!("postwall - settings-driven card wall for a feed backend\n");

    println!("Quick commands:");
    println!("  postwall feed show        # Fetch posts and render the card wall");
    println!("  postwall settings show    # Inspect settings and the resolved layout\n");

    println!("Backend: {} (override with --base-url or POSTWALL_URL)\n", base_url);

    println!("For more options:");
    println!("  postwall --help");
}
