use clap::Parser;

/// Command line interface for the application
#[derive(Parser)]
pub struct Cli {
    /// Port the HTTP API listens on
    #[arg(short, long, default_value_t = 3000)]
    pub port: u16,

    /// Sets the logging verbosity level for the application
    /// Possible values: "error", "warn", "info", "debug", "trace"
    /// Default: "info"
    #[arg(long, default_value_t = String::from("info"))]
    pub logging_level: String,

    /// Also write logs to daily rotating files in the "logs" directory
    #[arg(long, default_value_t = false)]
    pub log_to_file: bool,
}
