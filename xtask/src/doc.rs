use anyhow::{Context, Result};
use colored::Colorize;
use std::process::Command;
use std::time::Instant;

/// rustdoc output for the library crate.
const DOC_INDEX: &str = "target/doc/i2s_device/index.html";

pub fn run(open: bool) -> Result<()> {
    println!();
    println!("{}", "📚 Building i2s-device documentation...".cyan().bold());
    println!();

    let start = Instant::now();

    // `std` so the mocks module and its examples are documented too
    let mut args = vec!["doc", "-p", "i2s-device", "--no-deps", "--features", "std"];
    if open {
        args.push("--open");
    }

    let output = Command::new("cargo")
        .args(&args)
        .output()
        .context("Failed to build documentation")?;

    if !output.status.success() {
        eprintln!("{}", "✗ Documentation build failed".red().bold());
        eprintln!();
        eprintln!("{}", String::from_utf8_lossy(&output.stderr));
        anyhow::bail!("Documentation build failed");
    }

    println!(
        "{}",
        format!("✓ Documentation built in {:.2}s", start.elapsed().as_secs_f64()).green()
    );

    if !open {
        println!();
        println!("   {}", format!("Open {DOC_INDEX} in your browser").dimmed());
        println!("   {}", "Or run 'cargo run -p xtask -- doc --open'".dimmed());
    }
    println!();

    Ok(())
}
