use crate::export::ExportFormat;
use crate::models::punch_type::PunchType;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimeclock
#[derive(Parser)]
#[command(
    name = "rtimeclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple time clock CLI: punch in/out, lunch breaks and monthly attendance reports",
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

    /// Show the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Create a new account (a password is generated for you)
    Register {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        company: String,

        /// Postal code (CEP)
        #[arg(long)]
        cep: Option<String>,

        #[arg(long)]
        street: Option<String>,

        #[arg(long)]
        neighborhood: Option<String>,

        #[arg(long)]
        city: Option<String>,
    },

    /// Log in with email and password
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Log out the current user
    Logout,

    /// Change the password of an account
    ResetPassword {
        #[arg(long)]
        email: String,

        #[arg(long = "new", help = "New password")]
        new_password: String,

        #[arg(long = "confirm", help = "Repeat the new password")]
        confirm: String,
    },

    /// Record a punch for the logged-in user
    Punch {
        #[arg(value_enum)]
        kind: PunchType,

        #[arg(long, value_name = "FILE", help = "Attach a photo (jpg/png/webp)")]
        photo: Option<String>,

        #[arg(long, requires = "lon", allow_hyphen_values = true, help = "Latitude in decimal degrees")]
        lat: Option<f64>,

        #[arg(long, requires = "lat", allow_hyphen_values = true, help = "Longitude in decimal degrees")]
        lon: Option<f64>,

        #[arg(
            long,
            value_name = "YYYY-MM-DD HH:MM",
            help = "Record at this local time instead of now"
        )]
        at: Option<String>,
    },

    /// Show today's punches for the logged-in user
    Status,

    /// Monthly attendance report
    Report {
        #[arg(long, short, help = "Month (1-12), default: current")]
        month: Option<u32>,

        #[arg(long, short, help = "Year, default: current")]
        year: Option<i32>,
    },

    /// Export the monthly report
    Export {
        #[arg(long, short, help = "Month (1-12), default: current")]
        month: Option<u32>,

        #[arg(long, short, help = "Year, default: current")]
        year: Option<i32>,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Output file (default: relatorio_<year>_<month>.<ext>)")]
        file: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
