use clap::{Args as ClapArgs, Parser, Subcommand};
use remap_core::{Mapping, Options, map_with_options};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "remap-cli",
    about = "Remap nested JSON structures via from-path/to-path mapping files",
    version
)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Apply a mapping file to a source JSON file
    Map(MapArgs),
    /// Read the value at a single path of a source JSON file
    Get(GetArgs),
}

#[derive(ClapArgs, Debug)]
struct MapArgs {
    /// Source JSON file
    path: PathBuf,
    /// Mapping JSON file: an object of "from-path": "to-path" strings.
    /// A reserved "default" entry supplies a fallback for missing lookups.
    #[arg(long)]
    mapping: PathBuf,
    /// Path delimiter
    #[arg(long, default_value = "/")]
    delimiter: String,
    /// Optional output path; otherwise prints to stdout
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
struct GetArgs {
    /// Source JSON file
    path: PathBuf,
    /// Path to read, e.g. /items[-1]/name
    #[arg(long)]
    from: String,
    /// Path delimiter
    #[arg(long, default_value = "/")]
    delimiter: String,
}

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Map(a) => cmd_map(a),
        Cmd::Get(a) => cmd_get(a),
    }
}

fn load_json(path: &PathBuf) -> serde_json::Value {
    let data = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("error reading {}: {}", path.display(), e);
        std::process::exit(2);
    });
    serde_json::from_str(&data).unwrap_or_else(|e| {
        eprintln!("invalid JSON in {}: {}", path.display(), e);
        std::process::exit(2);
    })
}

// Mapping files are a JSON object of from/to path strings in application
// order. A reserved "default" entry carries the fallback value instead.
fn load_mapping(path: &PathBuf) -> Mapping {
    let value = load_json(path);
    let Some(obj) = value.as_object() else {
        eprintln!("mapping file must be a JSON object of from/to path strings");
        std::process::exit(2);
    };
    let mut mapping = Mapping::new();
    for (from, to) in obj {
        if from == "default" {
            mapping = mapping.with_default(to.clone());
            continue;
        }
        match to.as_str() {
            Some(to) => mapping = mapping.entry(from, to),
            None => {
                eprintln!("mapping entry {:?} must name a target path string", from);
                std::process::exit(2);
            }
        }
    }
    mapping
}

fn cmd_map(args: MapArgs) {
    let source = load_json(&args.path);
    let mapping = load_mapping(&args.mapping);
    let options = Options::with_delimiter(&args.delimiter);
    let result = map_with_options(&source, options, &mapping).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(4);
    });
    let rendered = serde_json::to_string_pretty(&result).unwrap_or_else(|e| {
        eprintln!("error rendering result: {}", e);
        std::process::exit(4);
    });
    if let Some(out) = args.out {
        std::fs::write(&out, rendered).unwrap_or_else(|e| {
            eprintln!("error writing {}: {}", out.display(), e);
            std::process::exit(5);
        });
    } else {
        println!("{}", rendered);
    }
}

fn cmd_get(args: GetArgs) {
    let source = load_json(&args.path);
    let mapper = remap_core::Remapper::with_options(&source, Options::with_delimiter(&args.delimiter));
    match mapper.get(&args.from) {
        Ok(Some(value)) => match serde_json::to_string_pretty(&value) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("error rendering value: {}", e);
                std::process::exit(4);
            }
        },
        Ok(None) => {
            eprintln!("not found: {}", args.from);
            std::process::exit(3);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(4);
        }
    }
}
