use clap::{Parser, Subcommand};
use dark_variant::config::{self, ConfigError, ToolConfig};
use dark_variant::imaging::{
    self, BrightnessFactor, Darkening, DarkeningStrategy, RustBackend, create_dark_variant,
};
use dark_variant::{imageset, output, variants};
use std::path::PathBuf;

/// Overrides for the transform configured in `dark-variant.toml`.
#[derive(clap::Args, Clone)]
struct TransformArgs {
    /// Brightness multiplier, must be > 0 (below 1 darkens, above 1 brightens)
    #[arg(long, value_parser = imaging::parse_factor)]
    factor: Option<BrightnessFactor>,

    /// How the dark variant is derived
    #[arg(long, value_enum)]
    strategy: Option<DarkeningStrategy>,
}

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "dark-variant")]
#[command(about = "Generate dark-mode variants of image assets")]
#[command(long_about = "\
Generate dark-mode variants of image assets

Every color channel of the source image is multiplied by a brightness
factor (default 0.3), rounded to the nearest value and clamped. Alpha is
left untouched and the image keeps its dimensions and color type.

Default jobs (override with dark-variant.toml):

  Assets.xcassets/
  ├── SYSMLogo.imageset/
  │   ├── SYSMLogo.png             # input
  │   └── SYSMLogo@2x.png          # input
  └── SYSMLogoDark.imageset/       # created if missing
      ├── SYSMLogoDark.png
      └── SYSMLogoDark@2x.png

Set RUST_LOG=debug for decode/encode diagnostics.

Run 'dark-variant gen-config' to generate a documented dark-variant.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Base directory for configured job paths and the config file
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// Config file, relative to --root (stock defaults if missing)
    #[arg(long, default_value = config::CONFIG_FILE_NAME, global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate every dark variant listed in the config
    Build(TransformArgs),
    /// Generate one dark variant from INPUT to OUTPUT
    Convert {
        input: PathBuf,
        output: PathBuf,
        #[command(flatten)]
        transform: TransformArgs,
    },
    /// Generate the dark counterpart of a whole .imageset directory
    Imageset {
        source: PathBuf,
        /// Destination directory (default: sibling <Name><Suffix>.imageset)
        #[arg(long)]
        dest: Option<PathBuf>,
        /// Inserted into generated names, overrides the config file
        #[arg(long)]
        suffix: Option<String>,
        #[command(flatten)]
        transform: TransformArgs,
    },
    /// Print a stock dark-variant.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();
    let cli = Cli::parse();
    let backend = RustBackend::new();

    match &cli.command {
        Command::Build(transform) => {
            let config = load_config(&cli)?;
            let darkening = resolve_darkening(&config, transform)?;
            println!(
                "{}",
                output::format_build_header(config.variants.len(), darkening)
            );
            let generated = variants::generate_variants(
                &backend,
                &cli.root,
                &config,
                darkening,
                output::print_created,
            )?;
            if !generated.is_empty() {
                println!("{}", output::format_done(&generated));
            }
        }
        Command::Convert {
            input,
            output: output_path,
            transform,
        } => {
            let config = load_config(&cli)?;
            let darkening = resolve_darkening(&config, transform)?;
            let variant = create_dark_variant(&backend, input, output_path, darkening)?;
            output::print_created(&variant);
        }
        Command::Imageset {
            source,
            dest,
            suffix,
            transform,
        } => {
            let mut config = load_config(&cli)?;
            if let Some(suffix) = suffix {
                config.suffix = suffix.clone();
                config.validate()?;
            }
            let darkening = resolve_darkening(&config, transform)?;
            println!("{}", output::format_imageset_header(source, darkening));
            let result = imageset::create_dark_imageset(
                &backend,
                source,
                dest.as_deref(),
                darkening,
                &config.suffix,
                output::print_created,
            )?;
            output::print_imageset_summary(&result);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the default `warn` level.
fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}

fn load_config(cli: &Cli) -> Result<ToolConfig, ConfigError> {
    config::load_config(&cli.root.join(&cli.config))
}

/// CLI flags win over the config file.
fn resolve_darkening(
    config: &ToolConfig,
    transform: &TransformArgs,
) -> Result<Darkening, ConfigError> {
    let factor = match transform.factor {
        Some(factor) => factor,
        None => config.brightness_factor()?,
    };
    let strategy = transform.strategy.unwrap_or(config.strategy);
    Ok(Darkening::new(strategy, factor))
}
