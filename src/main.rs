use clap::{CommandFactory, Parser};
use icopack::config::{self, CliOverrides, IconConfig};
use icopack::container::IcoWriter;
use icopack::imaging::RustBackend;
use icopack::output;
use icopack::pipeline::{ConvertRequest, convert};
use std::ffi::OsString;
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ICOPACK_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("ICOPACK_GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "icopack")]
#[command(about = "Pack one image into a multi-resolution .ico")]
#[command(long_about = "\
Pack one image into a multi-resolution .ico

The source is center-cropped to a square on its shorter side, resampled with
a Lanczos3 filter to every requested size, and written as one icon with a
PNG-compressed entry per size. Transparency is kept throughout.

  icopack logo.png                          # → logo.ico, sizes 16-256
  icopack logo.png app.ico --sizes 16,32,48,256 --sharpen

Sizes must be between 1 and 256. --sharpen applies a light unsharp mask to
variants of 64px and below, which keeps small icons crisp.

Run 'icopack --print-config' for a documented config file.")]
#[command(version = version_string())]
struct Cli {
    /// Source image (PNG, JPEG, GIF, BMP, TIFF, WebP)
    input: Option<PathBuf>,

    /// Destination icon [default: INPUT with .png swapped for .ico]
    output: Option<PathBuf>,

    /// Stray positional arguments, reported and ignored
    #[arg(hide = true)]
    extra: Vec<String>,

    /// Comma-separated square sizes, e.g. 16,32,48,256
    #[arg(long, value_name = "LIST", allow_hyphen_values = true)]
    sizes: Option<String>,

    /// Sharpen variants of 64px and below
    #[arg(long)]
    sharpen: bool,

    /// Read defaults from a TOML config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print a stock config file with all options documented, then exit
    #[arg(long)]
    print_config: bool,
}

/// Pull out flag-looking tokens the CLI does not define.
///
/// They are reported as unknown instead of aborting the run. Values that
/// follow a known option (`--sizes -1,16`) and everything after `--` are left
/// alone.
fn split_unknown_flags(args: impl IntoIterator<Item = OsString>) -> (Vec<OsString>, Vec<String>) {
    let mut cmd = Cli::command();
    cmd.build();

    let mut known = Vec::new();
    let mut unknown = Vec::new();
    let mut expecting_value = false;
    let mut escaped = false;

    for (i, arg) in args.into_iter().enumerate() {
        let text = arg.to_string_lossy().into_owned();
        if i == 0 || escaped || expecting_value || !text.starts_with('-') || text == "-" {
            expecting_value = false;
            known.push(arg);
            continue;
        }
        if text == "--" {
            escaped = true;
            known.push(arg);
            continue;
        }

        let matched = match text.strip_prefix("--") {
            Some(long) => {
                let (name, inline_value) = match long.split_once('=') {
                    Some((name, _)) => (name, true),
                    None => (long, false),
                };
                cmd.get_arguments()
                    .find(|a| a.get_long() == Some(name))
                    .map(|a| a.get_action().takes_values() && !inline_value)
            }
            None => {
                let mut shorts = text[1..].chars();
                match (shorts.next(), shorts.next()) {
                    (Some(short), None) => cmd
                        .get_arguments()
                        .find(|a| a.get_short() == Some(short))
                        .map(|a| a.get_action().takes_values()),
                    _ => None,
                }
            }
        };

        match matched {
            Some(takes_value) => {
                expecting_value = takes_value;
                known.push(arg);
            }
            None => unknown.push(text),
        }
    }

    (known, unknown)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, unknown_flags) = split_unknown_flags(std::env::args_os());
    let cli = Cli::parse_from(args);

    if cli.print_config {
        print!("{}", config::stock_config_toml());
        return Ok(());
    }

    for arg in cli.extra.iter().chain(&unknown_flags) {
        output::print_unknown_arg(arg);
    }

    let Some(input) = cli.input else {
        output::print_usage();
        std::process::exit(1);
    };

    let mut icon_config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => IconConfig::default(),
    };
    let overrides = CliOverrides {
        sizes: cli.sizes.as_deref(),
        sharpen: cli.sharpen,
    };
    if let Err(err) = icon_config.apply_overrides(&overrides) {
        output::print_usage_error(&err.to_string());
        std::process::exit(1);
    }

    let request = ConvertRequest::from_config(input, cli.output, &icon_config);
    let summary = convert(&RustBackend::new(), &IcoWriter::new(), &request)?;
    output::print_summary(&summary);

    Ok(())
}
