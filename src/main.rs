use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use log::LevelFilter;
use sdts_reader::extract::{self, DEFAULT_OUTPUT_DIR, DEFAULT_PASSWORD};
use sdts_reader::{ErrorPolicy, ExtractConfig};
use std::path::PathBuf;
use std::process::exit;

fn main() {
    let matches = Command::new("sdts-extract")
        .about("Extracts resources from SDTS containers (data.dts) and SRK blobs")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("game_directory")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("password")
                .short('p')
                .long("password")
                .default_value(DEFAULT_PASSWORD)
                .help("Decryption password (the default is the engine's well-known key)")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("output_directory")
                .short('o')
                .long("output-directory")
                .default_value(DEFAULT_OUTPUT_DIR)
                .value_parser(value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("keep_going")
                .short('k')
                .long("keep-going")
                .help("Log failing files and continue instead of aborting the run")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("jobs")
                .short('j')
                .long("jobs")
                .default_value("0")
                .value_parser(value_parser!(usize))
                .help("Worker threads for decoding entries (0 = one per core)")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count),
        )
        .get_matches();

    init_logging(matches.get_count("verbose"));

    let config = build_config(&matches);
    match extract::run(&config) {
        Ok(summary) => {
            println!(
                "Extracted {} resources from {} containers and {} blobs into {}",
                summary.resources,
                summary.containers,
                summary.blobs,
                config.output.display()
            );
            if !summary.failed.is_empty() {
                eprintln!("{} files failed:", summary.failed.len());
                for path in &summary.failed {
                    eprintln!("  {}", path.display());
                }
                exit(2);
            }
        }
        Err(err) => {
            eprintln!("ERROR: {err}");
            exit(1);
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn build_config(matches: &ArgMatches) -> ExtractConfig {
    let root = matches
        .get_one::<PathBuf>("game_directory")
        .cloned()
        .unwrap_or_default();
    let output = matches
        .get_one::<PathBuf>("output_directory")
        .cloned()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
    let policy = if matches.get_flag("keep_going") {
        ErrorPolicy::SkipAndLog
    } else {
        ErrorPolicy::Abort
    };

    ExtractConfig::new(root, output)
        .with_password(matches.get_one::<String>("password").cloned())
        .with_policy(policy)
        .with_jobs(matches.get_one::<usize>("jobs").copied().unwrap_or(0))
}
