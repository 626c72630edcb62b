//! Command-line argument wrappers and the command handler.
//!
//! Each clap argument struct converts into the matching core parameter type
//! from [`wayfarer_core::params`], so clap attributes never leak into the
//! core crate:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```
//!
//! [`Cli`] owns the planner and the terminal renderer and runs one command.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use jiff::civil::Date;
use log::warn;
use wayfarer_core::{
    collaborators::{
        geocode::DEFAULT_NOMINATIM_URL, AttachmentStore, BookingSearch, DirectoryAttachmentStore,
        FlightQuery, Geocoder, HotelQuery, HttpBookingSearch, NominatimGeocoder, SearchConfig,
        TokenConfig,
    },
    display::{Activities, CreateResult, DeleteResult, Flights, Hotels, OperationStatus},
    params::{AddActivity, AddFlight, AddHotel, CreateTrip, DayQuery, DeleteTrip, Id},
    Planner,
};

use crate::renderer::TerminalRenderer;

// ============================================================================
// Trip commands
// ============================================================================

#[derive(Subcommand)]
pub enum TripCommands {
    /// Create a new trip
    Create(CreateTripArgs),
    /// List all trips with booking counts and costs
    List,
    /// Show a trip with its bookings and day-by-day itinerary
    Show(TripIdArgs),
    /// Permanently delete a trip and everything booked for it
    Delete(DeleteTripArgs),
}

/// Create a new trip
#[derive(Args)]
pub struct CreateTripArgs {
    /// Title of the trip
    pub title: String,
    /// First day of the trip (YYYY-MM-DD)
    #[arg(long)]
    pub start: String,
    /// Last day of the trip, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub end: String,
}

impl From<CreateTripArgs> for CreateTrip {
    fn from(val: CreateTripArgs) -> Self {
        CreateTrip {
            title: val.title,
            start_date: val.start,
            end_date: val.end,
        }
    }
}

#[derive(Args)]
pub struct TripIdArgs {
    /// ID of the trip
    pub trip_id: u64,
}

impl From<TripIdArgs> for Id {
    fn from(val: TripIdArgs) -> Self {
        Id { id: val.trip_id }
    }
}

/// Permanently delete a trip
///
/// Removes the trip together with all of its flights, hotels and
/// activities. This cannot be undone.
#[derive(Args)]
pub struct DeleteTripArgs {
    /// ID of the trip to delete
    pub trip_id: u64,
    /// Confirm permanent deletion
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeleteTripArgs> for DeleteTrip {
    fn from(val: DeleteTripArgs) -> Self {
        DeleteTrip {
            id: val.trip_id,
            confirmed: val.confirm,
        }
    }
}

// ============================================================================
// Booking commands
// ============================================================================

#[derive(Subcommand)]
pub enum FlightCommands {
    /// Record a flight for a trip
    Add(AddFlightArgs),
    /// List flights booked for a trip
    List(TripIdArgs),
}

#[derive(Args)]
pub struct AddFlightArgs {
    /// ID of the trip
    pub trip_id: u64,
    /// Ticket price
    #[arg(long, default_value_t = 0.0)]
    pub cost: f64,
    /// Seat assignment
    #[arg(long)]
    pub seat: Option<String>,
    /// Operating airline
    #[arg(long)]
    pub airline: Option<String>,
    /// Flight number
    #[arg(long)]
    pub flight_number: Option<String>,
    /// Booking confirmation code
    #[arg(long)]
    pub confirmation: Option<String>,
}

impl From<AddFlightArgs> for AddFlight {
    fn from(val: AddFlightArgs) -> Self {
        AddFlight {
            trip_id: val.trip_id,
            cost: val.cost,
            seat: val.seat,
            airline: val.airline,
            flight_number: val.flight_number,
            confirmation: val.confirmation,
        }
    }
}

#[derive(Subcommand)]
pub enum HotelCommands {
    /// Record a hotel stay for a trip
    Add(AddHotelArgs),
    /// List hotel stays booked for a trip
    List(TripIdArgs),
}

#[derive(Args)]
pub struct AddHotelArgs {
    /// ID of the trip
    pub trip_id: u64,
    /// Total price of the stay
    #[arg(long, default_value_t = 0.0)]
    pub cost: f64,
    /// Hotel name
    #[arg(long)]
    pub name: Option<String>,
    /// Street address
    #[arg(long)]
    pub address: Option<String>,
    /// Number of rooms
    #[arg(long, default_value_t = 1)]
    pub rooms: u32,
    /// Booking confirmation code
    #[arg(long)]
    pub confirmation: Option<String>,
}

impl From<AddHotelArgs> for AddHotel {
    fn from(val: AddHotelArgs) -> Self {
        AddHotel {
            trip_id: val.trip_id,
            cost: val.cost,
            name: val.name,
            address: val.address,
            rooms: val.rooms,
            confirmation: val.confirmation,
        }
    }
}

// ============================================================================
// Activity commands
// ============================================================================

#[derive(Subcommand)]
pub enum ActivityCommands {
    /// Plan an activity on one day of a trip
    Add(AddActivityArgs),
    /// List the activities of one day in the order they were added
    List(DayArgs),
}

#[derive(Args)]
pub struct AddActivityArgs {
    /// ID of the trip
    pub trip_id: u64,
    /// Day of the activity (YYYY-MM-DD)
    pub date: String,
    /// What is planned
    #[arg(long)]
    pub name: Option<String>,
    /// Time of day on a 12-hour clock, e.g. "8:00 AM"
    #[arg(long)]
    pub time: Option<String>,
    /// Expected cost
    #[arg(long)]
    pub cost: Option<f64>,
    /// File to attach (ticket, reservation, photo)
    #[arg(long, value_name = "FILE")]
    pub attach: Option<PathBuf>,
    /// Directory attachments are copied into. Defaults to
    /// $XDG_DATA_HOME/wayfarer/uploads
    #[arg(long, env = "WAYFARER_ATTACHMENTS_DIR")]
    pub attachments_dir: Option<PathBuf>,
    /// Where the activity takes place
    #[arg(long)]
    pub address: Option<String>,
    /// Booking confirmation code
    #[arg(long)]
    pub confirmation: Option<String>,
}

impl AddActivityArgs {
    /// Core parameters, with `file_path` pointing at the stored attachment.
    fn into_params(self, file_path: Option<String>) -> AddActivity {
        AddActivity {
            trip_id: self.trip_id,
            date: self.date,
            name: self.name,
            time: self.time,
            cost: self.cost,
            file_path,
            address: self.address,
            confirmation: self.confirmation,
        }
    }
}

#[derive(Args)]
pub struct DayArgs {
    /// ID of the trip
    pub trip_id: u64,
    /// Day to list (YYYY-MM-DD)
    pub date: String,
}

impl From<DayArgs> for DayQuery {
    fn from(val: DayArgs) -> Self {
        DayQuery {
            trip_id: val.trip_id,
            date: val.date,
        }
    }
}

/// Show a trip day by day
#[derive(Args)]
pub struct ItineraryArgs {
    /// ID of the trip
    pub trip_id: u64,
    /// Look up activity addresses and print their coordinates
    #[arg(long)]
    pub map: bool,
    /// Nominatim instance used by --map
    #[arg(long, env = "WAYFARER_GEOCODER_URL", default_value = DEFAULT_NOMINATIM_URL)]
    pub geocoder_url: String,
}

// ============================================================================
// Search commands
// ============================================================================

#[derive(Subcommand)]
pub enum SearchCommands {
    /// Search one-way flights
    Flights(SearchFlightsArgs),
    /// Search hotel availability
    Hotels(SearchHotelsArgs),
}

/// Endpoints and credentials for the booking search APIs
#[derive(Args)]
pub struct SearchApiArgs {
    /// Flight search base URL; origin, destination and date are appended
    #[arg(
        long,
        env = "WAYFARER_FLIGHTS_URL",
        default_value = "https://api.skyscanner.net/apiservices/browseroutes/v1.0/US/USD/en-US"
    )]
    pub flights_url: String,
    /// Hotel search URL
    #[arg(
        long,
        env = "WAYFARER_HOTELS_URL",
        default_value = "https://api.hotels.com/v1/search"
    )]
    pub hotels_url: String,
    /// API key sent in the `api-key` header
    #[arg(long, env = "WAYFARER_SEARCH_API_KEY", hide_env_values = true)]
    pub search_api_key: String,
    /// OAuth2 token endpoint; enables bearer authentication
    #[arg(long, env = "WAYFARER_SEARCH_TOKEN_URL", requires_all = ["client_id", "client_secret"])]
    pub token_url: Option<String>,
    /// OAuth2 client ID
    #[arg(long, env = "WAYFARER_SEARCH_CLIENT_ID")]
    pub client_id: Option<String>,
    /// OAuth2 client secret
    #[arg(long, env = "WAYFARER_SEARCH_CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: Option<String>,
    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,
}

impl From<SearchApiArgs> for SearchConfig {
    fn from(val: SearchApiArgs) -> Self {
        let mut config = SearchConfig::new(val.flights_url, val.hotels_url, val.search_api_key);
        config.timeout = Duration::from_secs(val.timeout);
        match (val.token_url, val.client_id, val.client_secret) {
            (Some(token_url), Some(client_id), Some(client_secret)) => {
                config.with_token(TokenConfig {
                    token_url,
                    client_id,
                    client_secret,
                })
            }
            _ => config,
        }
    }
}

#[derive(Args)]
pub struct SearchFlightsArgs {
    /// Origin airport code
    pub origin: String,
    /// Destination airport code
    pub destination: String,
    /// Departure date (YYYY-MM-DD)
    pub date: Date,
    #[command(flatten)]
    pub api: SearchApiArgs,
}

#[derive(Args)]
pub struct SearchHotelsArgs {
    /// City or area to search
    pub location: String,
    /// Check-in date (YYYY-MM-DD)
    pub check_in: Date,
    /// Check-out date (YYYY-MM-DD)
    pub check_out: Date,
    #[command(flatten)]
    pub api: SearchApiArgs,
}

// ============================================================================
// Handler
// ============================================================================

/// Runs CLI commands against a planner and renders the results.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    pub async fn handle_trip_command(&self, command: TripCommands) -> Result<()> {
        match command {
            TripCommands::Create(args) => {
                let trip = self
                    .planner
                    .create_trip(&args.into())
                    .await
                    .context("Failed to create trip")?;
                self.renderer.render(&CreateResult::new(trip).to_string())
            }
            TripCommands::List => self.list_trips().await,
            TripCommands::Show(args) => {
                let id: Id = args.into();
                let details = self
                    .planner
                    .show_trip(&id)
                    .await
                    .context("Failed to load trip")?;
                match details {
                    Some(details) => self.renderer.render(&details.to_string()),
                    None => bail!("Trip with ID {} not found", id.id),
                }
            }
            TripCommands::Delete(args) => {
                let params: DeleteTrip = args.into();
                let deleted = self
                    .planner
                    .delete_trip(&params)
                    .await
                    .context("Failed to delete trip")?;
                match deleted {
                    Some(trip) => self.renderer.render(&DeleteResult::new(trip).to_string()),
                    None => self
                        .renderer
                        .render(&OperationStatus::trip_not_found(params.id).to_string()),
                }
            }
        }
    }

    pub async fn handle_flight_command(&self, command: FlightCommands) -> Result<()> {
        match command {
            FlightCommands::Add(args) => {
                let flight = self
                    .planner
                    .add_flight(&args.into())
                    .await
                    .context("Failed to add flight")?;
                self.renderer.render(&CreateResult::new(flight).to_string())
            }
            FlightCommands::List(args) => {
                let flights = self
                    .planner
                    .flights(&args.into())
                    .await
                    .context("Failed to list flights")?;
                self.renderer.render(&Flights(flights).to_string())
            }
        }
    }

    pub async fn handle_hotel_command(&self, command: HotelCommands) -> Result<()> {
        match command {
            HotelCommands::Add(args) => {
                let hotel = self
                    .planner
                    .add_hotel(&args.into())
                    .await
                    .context("Failed to add hotel")?;
                self.renderer.render(&CreateResult::new(hotel).to_string())
            }
            HotelCommands::List(args) => {
                let hotels = self
                    .planner
                    .hotels(&args.into())
                    .await
                    .context("Failed to list hotels")?;
                self.renderer.render(&Hotels(hotels).to_string())
            }
        }
    }

    pub async fn handle_activity_command(&self, command: ActivityCommands) -> Result<()> {
        match command {
            ActivityCommands::Add(args) => self.add_activity(args).await,
            ActivityCommands::List(args) => {
                let activities = self
                    .planner
                    .activities_on(&args.into())
                    .await
                    .context("Failed to list activities")?;
                self.renderer.render(&Activities(activities).to_string())
            }
        }
    }

    async fn add_activity(&self, args: AddActivityArgs) -> Result<()> {
        let attach = args.attach.clone();
        let attachments_dir = args.attachments_dir.clone();
        let mut params = args.into_params(None);

        // Validate fully before the attachment is copied.
        params
            .validated_time()
            .context("Use a 12-hour time such as 8:00 AM")?;
        params.parsed_date().context("Failed to add activity")?;
        let trip = self
            .planner
            .get_trip(&Id { id: params.trip_id })
            .await
            .context("Failed to load trip")?;
        if trip.is_none() {
            bail!("Trip with ID {} not found", params.trip_id);
        }

        if let Some(path) = &attach {
            params.file_path = Some(self.store_attachment(path, attachments_dir).await?);
        }

        let activity = self
            .planner
            .add_activity(&params)
            .await
            .context("Failed to add activity")?;
        self.renderer.render(&CreateResult::new(activity).to_string())
    }

    async fn store_attachment(&self, path: &Path, root: Option<PathBuf>) -> Result<String> {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read attachment {}", path.display()))?;
        let store = match root {
            Some(root) => DirectoryAttachmentStore::new(root),
            None => DirectoryAttachmentStore::with_default_root()
                .context("Failed to locate attachment directory")?,
        };
        let name = path.to_string_lossy();
        store
            .store(&name, &bytes)
            .context("Failed to store attachment")
    }

    pub async fn handle_itinerary(&self, args: ItineraryArgs) -> Result<()> {
        let id = Id { id: args.trip_id };
        let Some(trip) = self.planner.get_trip(&id).await.context("Failed to load trip")? else {
            bail!("Trip with ID {} not found", id.id);
        };
        let itinerary = self
            .planner
            .itinerary(&id)
            .await
            .context("Failed to build itinerary")?
            .unwrap_or_default();

        let mut markdown = format!("{trip}\n{itinerary}");

        if args.map {
            let geocoder = NominatimGeocoder::new(args.geocoder_url)
                .context("Failed to create geocoder")?;
            markdown.push_str("## Map\n\n");
            let located = itinerary
                .days()
                .iter()
                .flat_map(|day| &day.activities)
                .filter_map(|a| a.address.as_deref().map(|address| (a, address)));
            for (activity, address) in located {
                let name = activity.name.as_deref().unwrap_or(address);
                markdown.push_str(&map_line(&geocoder, name, address).await);
            }
        }

        self.renderer.render(&markdown)
    }

    pub async fn handle_search_command(&self, command: SearchCommands) -> Result<()> {
        let payload = match command {
            SearchCommands::Flights(args) => {
                let search = HttpBookingSearch::new(args.api.into())
                    .context("Failed to create search client")?;
                search
                    .search_flights(&FlightQuery {
                        origin: args.origin,
                        destination: args.destination,
                        departure: args.date,
                    })
                    .await
                    .context("Flight search failed")?
            }
            SearchCommands::Hotels(args) => {
                let search = HttpBookingSearch::new(args.api.into())
                    .context("Failed to create search client")?;
                search
                    .search_hotels(&HotelQuery {
                        location: args.location,
                        check_in: args.check_in,
                        check_out: args.check_out,
                    })
                    .await
                    .context("Hotel search failed")?
            }
        };

        self.renderer.render_json(&payload)
    }

    pub async fn list_trips(&self) -> Result<()> {
        let summaries = self
            .planner
            .list_trips()
            .await
            .context("Failed to list trips")?;
        self.renderer.render(&summaries.to_string())
    }
}

/// One `--map` entry. A failed lookup only drops the coordinates.
async fn map_line(geocoder: &dyn Geocoder, name: &str, address: &str) -> String {
    match geocoder.geocode(address).await {
        Ok(Some(c)) => format!(
            "- {name}: {address} ({:.5}, {:.5}) https://www.openstreetmap.org/?mlat={}&mlon={}#map=16/{}/{}\n",
            c.latitude, c.longitude, c.latitude, c.longitude, c.latitude, c.longitude
        ),
        Ok(None) => format!("- {name}: {address} (location not found)\n"),
        Err(e) => {
            warn!("Geocoding '{address}' failed: {e}");
            format!("- {name}: {address}\n")
        }
    }
}
