// src/banner.rs

/// Prints the application startup banner to the console.
pub fn print_banner() {
    // Using a raw string literal for the multi-line banner
    let banner = r#"
                                 _
 ____   ____ ___  ____  ____  _| |_  ____ _   _ ____
|  _ \ / ___) _ \|    \|  _ \(_   _)/ ___) | | |  _ \
| |_| | |  | |_| | | | | |_| | | |_| |   | |_| | | | |
|  __/|_|   \___/|_|_|_|  __/   \__)_|    \____|_| |_|
|_|                    |_|

    Batch LLM Comparison Harness
"#;
    println!("{}", banner);
}
