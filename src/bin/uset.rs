use clap::Parser;
use std::io;
use std::path::PathBuf;
use uset::{Config, Set, SetKind};

#[derive(Parser)]
#[command(version, about = "Build an unordered set and query it")]
struct Args {
    /// Items to put into the set
    items: Vec<String>,

    /// Items to remove after the set has been built
    #[arg(short, long, num_args = 1..)]
    remove: Vec<String>,

    /// Items to test for membership
    #[arg(short, long, num_args = 1..)]
    contains: Vec<String>,

    /// Compare the set against these items
    #[arg(long, num_args = 0..)]
    compare: Option<Vec<String>>,

    /// Kind of set to build: thread-safe (ts) or non-thread-safe (nts); overrides config
    #[arg(short, long, value_name = "KIND")]
    kind: Option<SetKind>,

    /// Shorthand for `--kind thread-safe`
    #[arg(short, long, conflicts_with = "kind")]
    thread_safe: bool,

    /// JSON file with factory settings
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable debug logs
    #[arg(short, long)]
    verbose: bool,
}

/// Example usage:
/// ```bash
/// ./target/release/uset a b c --remove b --contains a b
/// ./target/release/uset 1 2 3 --thread-safe --compare 3 2 1
/// ./target/release/uset 1 2 3 --kind nts --contains 2
/// ```
fn main() -> io::Result<()> {
    let args = Args::parse();

    simple_logger::SimpleLogger::new()
        .with_threads(false)
        .with_level(log::LevelFilter::Info)
        .with_module_level(
            "uset",
            if args.verbose {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            },
        )
        .init()
        .map_err(io::Error::other)?;

    let mut config = match &args.config {
        Some(path) => {
            log::info!("Factory config: {}", path.to_string_lossy());
            Config::from_file(path)?
        }
        None => Config::default(),
    };
    if let Some(kind) = args.kind {
        config.kind = kind;
    } else if args.thread_safe {
        config.kind = SetKind::ThreadSafe;
    }

    let mut set = uset::from_config(&config, args.items);
    set.remove(&args.remove);

    println!("kind: {}", set.kind());
    println!("size: {}", set.len());
    println!("empty: {}", set.is_empty());
    for item in &args.contains {
        println!("contains {item}: {}", set.contains(item.as_str()));
    }
    if let Some(other) = args.compare {
        let other = uset::new_set(SetKind::NonThreadSafe, other);
        println!("equal: {}", set.is_equal(&other));
    }

    let mut items = Vec::with_capacity(set.len());
    set.each(|item| {
        items.push(item.clone());
        true
    });
    items.sort();
    println!("items: [{}]", items.join(", "));

    Ok(())
}
