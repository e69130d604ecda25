use clap::{Parser, Subcommand};
use gevent_build::{resolve, OutputFormat, PluginBuildConfig, ResolverConfig, PYTHON_CONFIG_ENV};
use miette::{IntoDiagnostic, Result, WrapErr};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gevent-buildconf")]
#[command(author, version, about = "Build configuration for the uWSGI gevent plugin")]
struct Cli {
    /// Resolver config file (gevent-build.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// python-config style helper queried with --includes (empty means unset)
    #[arg(long, global = true, env = PYTHON_CONFIG_ENV)]
    python_config: Option<OsString>,

    /// Interpreter queried for include directories when no helper is set
    #[arg(long, global = true)]
    python: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the full plugin build configuration
    Show {
        /// Output format (toml, json, make)
        #[arg(long, default_value_t = OutputFormat::Make)]
        format: OutputFormat,
    },

    /// Print the compiler flags on one line
    Cflags,

    /// Print each include directory on its own line
    Includes,

    /// Print the C source file of each plugin module
    Sources {
        /// Plugin source directory
        #[arg(long, default_value = "plugins/gevent")]
        dir: PathBuf,
    },

    /// Print the object file each plugin module compiles to
    Objects {
        /// Build output directory
        #[arg(long, default_value = "build")]
        dir: PathBuf,
    },
}

impl Cli {
    /// Merge the config file with command-line and environment overrides.
    fn resolver_config(&self) -> Result<ResolverConfig> {
        let mut config = match &self.config {
            Some(path) => ResolverConfig::from_file(path)
                .into_diagnostic()
                .wrap_err_with(|| format!("Failed to load {}", path.display()))?,
            None => ResolverConfig::new(),
        };

        if let Some(helper) = self.python_config.as_ref().filter(|h| !h.is_empty()) {
            config = config.with_python_config(helper);
        }
        if let Some(python) = &self.python {
            config = config.with_interpreter(python);
        }

        Ok(config)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let resolver = cli.resolver_config()?;
    let plugin: PluginBuildConfig = resolve(&resolver)
        .into_diagnostic()
        .wrap_err("Failed to resolve gevent plugin build configuration")?;

    match cli.command {
        Commands::Show { format } => {
            let rendered = plugin.emit(format).into_diagnostic()?;
            print!("{}", rendered);
            if !rendered.ends_with('\n') {
                println!();
            }
        }

        Commands::Cflags => {
            println!("{}", plugin.compile_flags().join(" "));
        }

        Commands::Includes => {
            for dir in plugin.include_dirs() {
                println!("{}", dir.display());
            }
        }

        Commands::Sources { dir } => {
            for file in plugin.source_files(&dir) {
                println!("{}", file.display());
            }
        }

        Commands::Objects { dir } => {
            for file in plugin.object_files(&dir) {
                println!("{}", file.display());
            }
        }
    }

    Ok(())
}
