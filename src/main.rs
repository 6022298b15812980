//! # smoldump CLI
//!
//! Command-line interface for the smoldump library.

use std::env;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use smoldump::SmoldumpError;
use smoldump::cli::Args;
use smoldump::core::grouping::{GroupingStats, group_newest_first};
use smoldump::format::{OutputFormat, write_to_format};
use smoldump::progress::{no_progress, stderr_progress};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), SmoldumpError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = args.to_config()?;
    let output_path = config.resolve_output_path(&env::current_dir()?);

    // Print header
    println!("📦 smoldump v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("💬 Channel: {}", config.range.channel_id());
    println!("🔢 Range:   {} ..= {}", config.range.start(), config.range.end());
    println!("💾 Output:  {}", output_path.display());
    println!("📄 Format:  {}", config.format);
    println!();

    // Step 1: Fetch
    let client = config.client()?;
    let progress = if args.quiet {
        no_progress()
    } else {
        stderr_progress()
    };
    println!("⏳ Fetching messages from {}...", client.base_url());
    let fetch_start = Instant::now();
    let messages = client
        .fetch_range_with_progress(&config.range, &progress)
        .await?;
    let fetch_time = fetch_start.elapsed();
    println!(
        "   Found {} messages ({:.2}s)",
        messages.len(),
        fetch_time.as_secs_f64()
    );

    // Step 2: Render and write
    println!("💾 Writing {}...", config.format);
    let write_start = Instant::now();
    write_to_format(&messages, &output_path, config.format, &config.render)?;
    let write_time = write_start.elapsed();
    println!("   Written in {:.2}s", write_time.as_secs_f64());

    let total_time = total_start.elapsed();

    println!();
    println!("✅ Ranges exported! Output saved to {}", output_path.display());

    // Summary
    println!();
    println!("📊 Summary:");
    println!("   Messages:  {}", messages.len());
    if let (Some(first), Some(last)) = (messages.first(), messages.last()) {
        println!("   Oldest:    {} ({})", first.id, first.timestamp.to_rfc3339());
        println!("   Newest:    {} ({})", last.id, last.timestamp.to_rfc3339());
    }
    if config.format == OutputFormat::Text {
        let groups = group_newest_first(&messages, config.render.group_gap);
        let stats = GroupingStats::new(messages.len(), groups.len());
        println!(
            "   Groups:    {} ({:.1} messages/group)",
            stats.group_count,
            stats.messages_per_group()
        );
    }

    // Performance stats
    println!();
    println!("⚡ Performance:");
    println!("   Total time:  {:.2}s", total_time.as_secs_f64());

    Ok(())
}
