use clap::Parser;
use env_logger::Env;
use log::{error, info};

use rapid_ini::{IniContainer, IniError};

/// Read an INI file and print or query its properties
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the INI file
    #[arg(value_name = "FILE")]
    file: String,

    /// Print the value of this key (repeatable)
    #[arg(short, long, value_name = "KEY")]
    get: Vec<String>,

    /// Section used to qualify the --get keys
    #[arg(short, long, value_name = "SECTION", default_value = "")]
    section: String,

    /// Value printed for missing keys instead of failing
    #[arg(short, long, value_name = "VALUE")]
    default: Option<String>,

    /// Print every property as a JSON object
    #[arg(long)]
    json: bool,
}

fn run(args: &Args) -> Result<(), IniError> {
    let container = IniContainer::from_file(&args.file)?;
    info!("Read {} properties from {}", container.len(), args.file);

    if args.get.is_empty() {
        if args.json {
            println!("{}", serde_json::to_string_pretty(&container)?);
        } else {
            for (key, value) in container.properties() {
                println!("{}={}", key, value);
            }
        }
        return Ok(());
    }

    for key in &args.get {
        let value = match &args.default {
            Some(fallback) => container.get_section_value_or(&args.section, key, fallback),
            None => container.get_section_value(&args.section, key)?,
        };
        println!("{}", value);
    }

    Ok(())
}

fn main() {
    // Initialize the logger
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let args = Args::parse();

    if let Err(e) = run(&args) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
