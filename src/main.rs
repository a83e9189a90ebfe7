use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use css_converter::converter::error::IoContext;
use css_converter::{ConverterConfig, ConverterError, ConverterResult, Dialect, convert, logging};
use log::{LevelFilter, debug, error, info};

/// Command line options collected from `env::args`
struct CliOptions {
    input: PathBuf,
    config_path: Option<PathBuf>,
    scss: bool,
    no_variables: bool,
    reformat: bool,
    verbose: bool,
}

fn print_usage(program: &str) {
    // Use eprintln for usage info since logger isn't initialized yet
    eprintln!(
        "Usage: {} [--scss] [--no-variables] [--reformat] [--config <file.json>] [--verbose] <input.css>",
        program
    );
    eprintln!("  --scss           Emit SCSS instead of LESS");
    eprintln!("  --no-variables   Keep color and font values inline");
    eprintln!("  --reformat       Pretty-print the result with malva");
    eprintln!("  --config <file>  Load options from a JSON config file");
    eprintln!("  --verbose        Log debug information to stderr");
    eprintln!("Example: {} styles.css > styles.less", program);
}

fn parse_args(args: &[String]) -> Option<CliOptions> {
    let mut input = None;
    let mut config_path = None;
    let mut scss = false;
    let mut no_variables = false;
    let mut reformat = false;
    let mut verbose = false;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--scss" => scss = true,
            "--no-variables" => no_variables = true,
            "--reformat" => reformat = true,
            "--verbose" => verbose = true,
            "--config" => config_path = Some(PathBuf::from(iter.next()?)),
            flag if flag.starts_with("--") => {
                eprintln!("Unknown option: {}", flag);
                return None;
            }
            path if input.is_none() => input = Some(PathBuf::from(path)),
            _ => return None,
        }
    }

    Some(CliOptions {
        input: input?,
        config_path,
        scss,
        no_variables,
        reformat,
        verbose,
    })
}

/// Merge the config file (if any) with command line flags
fn build_config(options: &CliOptions) -> ConverterResult<ConverterConfig> {
    let mut config = match &options.config_path {
        Some(path) => ConverterConfig::load(path)?,
        None => ConverterConfig::default(),
    };

    if options.scss {
        config.dialect = Dialect::Scss;
    }
    if options.no_variables {
        config.extract_variables = false;
    }
    if options.reformat {
        config.reformat = true;
    }
    if options.verbose {
        config.log_level = "debug".to_string();
    }

    Ok(config)
}

fn read_input(path: &Path) -> ConverterResult<String> {
    if !path.exists() {
        return Err(ConverterError::InputNotFound {
            path: path.to_path_buf(),
        });
    }
    fs::read_to_string(path).with_io_context(&format!("Failed to read {}", path.display()))
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("css_converter");

    let Some(options) = parse_args(&args) else {
        print_usage(program);
        process::exit(1);
    };

    let config = match build_config(&options) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = logging::init_logger(config.level_filter()) {
        eprintln!("Failed to initialize logger: {}", e);
        process::exit(1);
    }

    info!("Converting {} to {}", options.input.display(), config.dialect.extension());
    debug!("Using config: {:?}", config);

    let result = read_input(&options.input).and_then(|css| convert(&css, &config));
    match result {
        Ok(output) => print!("{}", output),
        Err(e) => {
            error!("Conversion failed: {}", e);
            if config.level_filter() < LevelFilter::Error {
                eprintln!("Conversion failed: {}", e);
            }
            process::exit(1);
        }
    }
}
