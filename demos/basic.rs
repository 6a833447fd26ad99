/// Basic example packaging a small directory tree into a ZIP archive
///
/// Run with: cargo run --example basic
use std::fs;
use ziputil_rs::{ArchiveWriter, WriterOptions};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== ziputil-rs Basic Example ===\n");

    // Lay out some input files
    println!("1. Creating input tree...");
    let input = std::env::temp_dir().join("ziputil_basic_input");
    fs::create_dir_all(input.join("docs"))?;
    fs::create_dir_all(input.join("cache"))?;
    fs::write(input.join("readme.txt"), "This is a readme file for the basic example.")?;
    fs::write(input.join("docs/notes.md"), "# Notes\n\nThis is a markdown file.")?;

    // Package it
    println!("\n2. Creating archive...");
    let options = WriterOptions::from_toml_str("compression_level = 9")?;
    let mut writer = ArchiveWriter::create_with_options("example_basic.zip", options)?;
    writer.add_entry("README.txt", input.join("readme.txt"))?;
    writer.add_directory("bundle", &input)?;
    println!("   {} entries written", writer.entry_count());
    writer.close()?;
    println!("   ✓ Archive created: example_basic.zip");

    fs::remove_dir_all(&input)?;
    println!("\n✓ Example complete!");
    Ok(())
}
