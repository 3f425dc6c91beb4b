use clap::{Parser, Subcommand};

/// Command-line interface definition for openspot
/// CLI application to open and list time-bounded open-space events
#[derive(Parser)]
#[command(
    name = "openspot",
    version = env!("CARGO_PKG_VERSION"),
    about = "Open a space for a time window, list what is open right now, search places, export a map payload",
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

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Open a space for a time window
    Open {
        /// What happens in the space (shown as the event title)
        title: String,

        /// Window start (e.g. "2024-05-01 09:00")
        #[arg(long = "start")]
        start: String,

        /// Window end, must be after start
        #[arg(long = "end")]
        end: String,

        /// Display address of the place
        #[arg(long = "addr")]
        address: String,

        /// Extra address detail (building, floor, ...)
        #[arg(long = "detail")]
        detail: Option<String>,

        /// Latitude of the place
        #[arg(long = "lat", allow_hyphen_values = true)]
        lat: f64,

        /// Longitude of the place
        #[arg(long = "lng", allow_hyphen_values = true)]
        lng: f64,

        /// Photo file to attach (encoding failures are ignored)
        #[arg(long = "photo")]
        photo: Option<String>,

        /// Cap attendance at N people (1-10)
        #[arg(long = "capacity")]
        capacity: Option<i32>,
    },

    /// Delete an event by id
    Del {
        /// Event id as shown by `list`
        id: String,

        /// Skip the confirmation prompt
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// List events whose window contains now
    List {
        #[arg(long = "all", help = "Include inactive and hidden events")]
        all: bool,

        #[arg(long = "json", help = "Print as JSON instead of a table")]
        json: bool,
    },

    /// Print the map payload (points + centroid) as JSON
    Map,

    /// Search for places by keyword
    Search {
        /// Free-text query
        query: String,

        /// Maximum number of candidates
        #[arg(long = "limit", short = 'l')]
        limit: Option<u32>,
    },

    /// Manage remembered activity names
    Fav {
        #[arg(long = "add", help = "Remember an activity name")]
        add: Option<String>,

        #[arg(long = "remove", help = "Forget an activity name")]
        remove: Option<String>,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },
}
