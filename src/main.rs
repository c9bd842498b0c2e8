use clap::{Parser, Subcommand};
use colored::Colorize;
use mobilecore::{commands, logging};

#[derive(Parser)]
#[command(name = "mobilecore")]
#[command(about = "Native computation core for mobile host bridges", long_about = None)]
#[command(version)]
struct Cli {
    /// Log every call and fallback
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default mobilecore.toml
    Init {
        /// Directory to write into (defaults to current directory)
        #[arg(default_value = ".")]
        dir: String,
        /// Host module name
        #[arg(long, default_value = "MobileCore")]
        name: String,
        /// Android package of the host module
        #[arg(long, default_value = "com.mobilecore")]
        package: String,
    },
    /// List every operation with its signature and failure value
    List,
    /// Invoke an operation by name and print what the host would receive
    Call {
        /// Operation name (e.g. fibonacci) or JavaScript name (e.g. addNumbers)
        operation: String,
        /// Operation arguments, e.g. `mobilecore call add -3.9 2.9`
        #[arg(allow_negative_numbers = true)]
        args: Vec<String>,
        /// Path to mobilecore.toml
        #[arg(long)]
        config: Option<String>,
    },
    /// Generate Kotlin, TypeScript and C bindings for the host
    Bindings {
        /// Path to mobilecore.toml
        #[arg(long)]
        config: Option<String>,
        /// Output directory
        #[arg(long, default_value = "bindings")]
        out: String,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Init { dir, name, package } => commands::init::execute(&dir, &name, &package),
        Commands::List => commands::list::execute(),
        Commands::Call {
            operation,
            args,
            config,
        } => commands::call::execute(&operation, &args, config.as_deref()),
        Commands::Bindings { config, out } => {
            commands::bindings::execute(config.as_deref(), &out)
        }
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
