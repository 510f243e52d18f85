use clap::{Args, Subcommand};
use entrygen_config::DEFAULT_CONFIG_FILE;
use std::path::PathBuf;

/// Available entrygen subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate build jobs for every entry file
    ///
    /// Loads the configuration, enumerates entry files in each input
    /// directory and prints one job per entry as a JSON array.
    Generate(GenerateArgs),

    /// Serve static files from a directory
    Serve(ServeArgs),

    /// Copy installed @fontsource font files into the output directory
    ///
    /// Files already present at the destination are left untouched.
    Fonts(FontsArgs),
}

/// Arguments for the generate command
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Configuration file (JSON)
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE, value_name = "FILE")]
    pub config: PathBuf,

    /// Generate a development build (source maps, live reload)
    ///
    /// Equivalent to running under the bundler's watch mode. A `prod` key in
    /// the configuration file still takes precedence.
    #[arg(short, long)]
    pub watch: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Write the jobs to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

/// Arguments for the serve command
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value_t = 8000)]
    pub port: u16,

    /// Directory to serve
    #[arg(short, long, default_value = "public", value_name = "DIR")]
    pub root: PathBuf,
}

/// Arguments for the fonts command
#[derive(Args, Debug, Clone)]
pub struct FontsArgs {
    /// Configuration file naming the output directory
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE, value_name = "FILE")]
    pub config: PathBuf,

    /// Directory containing installed packages
    #[arg(long, default_value = "node_modules", value_name = "DIR")]
    pub node_modules: PathBuf,
}
