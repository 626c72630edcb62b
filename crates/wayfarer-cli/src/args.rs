use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{
    ActivityCommands, FlightCommands, HotelCommands, ItineraryArgs, SearchCommands, TripCommands,
};

/// Command-line travel planner
///
/// Wayfarer keeps trips with an inclusive date range, the flights and hotels
/// booked for them, and the activities planned for each day. Everything is
/// stored in a local SQLite file. The same operations are available to AI
/// assistants through the MCP server started by `wf serve`.
#[derive(Parser)]
#[command(version, about, name = "wf")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/wayfarer/wayfarer.db
    #[arg(long, global = true, env = "WAYFARER_DATABASE_FILE")]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands. Without one, all trips are listed.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage trips
    #[command(alias = "t")]
    Trip {
        #[command(subcommand)]
        command: TripCommands,
    },
    /// Manage flights booked for a trip
    #[command(alias = "f")]
    Flight {
        #[command(subcommand)]
        command: FlightCommands,
    },
    /// Manage hotel stays booked for a trip
    #[command(alias = "h")]
    Hotel {
        #[command(subcommand)]
        command: HotelCommands,
    },
    /// Manage activities planned for a day
    #[command(alias = "a")]
    Activity {
        #[command(subcommand)]
        command: ActivityCommands,
    },
    /// Show a trip day by day
    #[command(alias = "i")]
    Itinerary(ItineraryArgs),
    /// Search third-party booking APIs
    Search {
        #[command(subcommand)]
        command: SearchCommands,
    },
    /// Start the MCP server
    Serve,
}
