use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use famtrip_core::entities::{
    Currency, Difficulty, Language, MapPoint, PlaceCategory, TransportMode,
};

#[derive(Debug, Parser)]
#[command(version, about = "Plan family trips: places, family groups and routes")]
pub struct Cli {
    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in and remember the session
    Login {
        email: String,
        #[arg(short, long)]
        password: String,
    },
    /// Create a new account
    Signup {
        email: String,
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        password: String,
    },
    /// Sign out and forget the session
    Logout,
    /// Show or change the profile of the signed in user
    Profile {
        /// New display name
        #[arg(long)]
        name: Option<String>,
        /// New avatar URL, an empty value removes it
        #[arg(long)]
        avatar_url: Option<String>,
    },
    /// Places of interest
    #[command(subcommand)]
    Places(PlacesCommand),
    /// Family groups and their members
    #[command(subcommand)]
    Family(FamilyCommand),
    /// Routes between places
    #[command(subcommand)]
    Routes(RoutesCommand),
    /// Look up locations by name
    Geocode {
        #[arg(required = true)]
        query: Vec<String>,
        /// Max. number of results
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Local preferences
    #[command(subcommand)]
    Settings(SettingsCommand),
}

#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Print the map as GeoJSON
    #[arg(long)]
    pub geojson: bool,
}

#[derive(Debug, Subcommand)]
pub enum PlacesCommand {
    /// List all visible places
    List {
        #[arg(short, long)]
        category: Option<PlaceCategory>,
        /// Minimum rating (1-5)
        #[arg(short = 'r', long)]
        min_rating: Option<u8>,
        /// Only public places
        #[arg(long, conflicts_with = "private")]
        public: bool,
        /// Only private places
        #[arg(long)]
        private: bool,
        /// Only places of this family group
        #[arg(short, long)]
        family: Option<String>,
        /// Search in name, description and category
        #[arg(short, long)]
        search: Option<String>,
        /// Select a place on the map
        #[arg(long)]
        select: Option<String>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Add a new place
    Add(NewPlaceArgs),
    /// Move a place to another position
    Move {
        id: String,
        /// New position as "lat,lng"
        #[arg(allow_hyphen_values = true)]
        pos: MapPoint,
    },
    /// Delete a place
    Delete { id: String },
}

#[derive(Debug, Args)]
pub struct NewPlaceArgs {
    pub name: String,
    #[arg(short, long, default_value = "other_attractions")]
    pub category: PlaceCategory,
    /// Rating (0-5)
    #[arg(short, long, default_value_t = 0)]
    pub rating: u8,
    #[arg(short, long)]
    pub description: Option<String>,
    /// Position as "lat,lng"
    #[arg(long, conflicts_with = "location", allow_hyphen_values = true)]
    pub at: Option<MapPoint>,
    /// Look up the position by name and take the first result
    #[arg(short, long)]
    pub location: Option<String>,
    /// Family group, defaults to the first one
    #[arg(short, long)]
    pub family: Option<String>,
    #[arg(long)]
    pub public: bool,
    #[arg(long)]
    pub entrance_fee: Option<String>,
    #[arg(long)]
    pub parking: bool,
}

#[derive(Debug, Subcommand)]
pub enum FamilyCommand {
    /// List the family groups
    List,
    /// Create a family group with yourself as admin
    Create { name: String },
    /// Rename a family group
    Rename { id: String, name: String },
    /// List the members of a family group
    Members { id: String },
    /// Add a user to a family group
    AddMember { id: String, user_id: String },
    /// Remove a user from a family group
    RemoveMember { id: String, user_id: String },
}

#[derive(Debug, Subcommand)]
pub enum RoutesCommand {
    /// List all visible routes
    List,
    /// Show a route with its waypoints
    Show {
        id: String,
        /// Draw straight lines instead of road paths
        #[arg(long)]
        straight: bool,
        /// Make the waypoint markers draggable
        #[arg(long)]
        edit: bool,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Create a route from at least two places
    Create(NewRouteArgs),
    /// Change the attributes of a route
    Edit {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(short, long)]
        mode: Option<TransportMode>,
        #[arg(long)]
        difficulty: Option<Difficulty>,
        /// Estimated duration in minutes
        #[arg(long)]
        duration: Option<u32>,
    },
    /// Move the waypoint at position FROM to position TO
    ///
    /// Positions start at 1, as listed by `routes show`.
    Reorder { id: String, from: usize, to: usize },
    /// Close the gaps of removed waypoints
    Compact { id: String },
    /// Places that can be added to a route
    Candidates {
        id: String,
        /// Search in name and location name
        #[arg(short, long, default_value = "")]
        search: String,
        #[arg(short, long)]
        category: Option<PlaceCategory>,
    },
    /// Append a place to a route
    AddStop { id: String, place_id: String },
    /// Remove a place from a route
    RemoveStop { id: String, place_id: String },
    /// Change the transport mode towards the next waypoint
    Transport {
        id: String,
        place_id: String,
        /// Omit to use the mode of the route
        mode: Option<TransportMode>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete a route
    Delete { id: String },
}

#[derive(Debug, Args)]
pub struct NewRouteArgs {
    pub name: String,
    /// Ids of the places in the order of the visit
    #[arg(required = true, num_args = 1..)]
    pub places: Vec<String>,
    #[arg(short, long)]
    pub description: Option<String>,
    #[arg(short, long, default_value = "walking")]
    pub mode: TransportMode,
    #[arg(long, default_value = "easy")]
    pub difficulty: Difficulty,
    /// Family group, defaults to the first one
    #[arg(short, long)]
    pub family: Option<String>,
    #[arg(long)]
    pub private: bool,
    /// Estimated duration in minutes
    #[arg(long)]
    pub duration: Option<u32>,
}

#[derive(Debug, Subcommand)]
pub enum SettingsCommand {
    /// Show the current settings
    Show,
    /// Change the settings
    Set {
        #[arg(short, long)]
        language: Option<Language>,
        #[arg(short, long)]
        currency: Option<Currency>,
    },
}
