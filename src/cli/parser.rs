use clap::{Parser, Subcommand};

/// Command-line interface definition for rclientes
/// CLI application to register client contacts with SQLite
#[derive(Parser)]
#[command(
    name = "rclientes",
    version = env!("CARGO_PKG_VERSION"),
    about = "Register client contacts (name, email, phone) in a local SQLite database",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Save a new client record (all fields optional, no validation)
    Save {
        /// Client name
        #[arg(default_value = "")]
        name: String,

        /// Client email
        #[arg(default_value = "")]
        email: String,

        /// Client phone
        #[arg(default_value = "")]
        phone: String,
    },

    /// Show all stored client records
    View,

    /// Interactive session: set fields, save, view, clear
    Prompt,

    /// Manage the database (integrity check, vacuum, info, destructive upgrade)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,

        #[arg(
            long = "upgrade",
            help = "Drop and recreate the clientes table (ALL RECORDS ARE LOST)"
        )]
        upgrade: bool,
    },

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },
}
