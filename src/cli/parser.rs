use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for eventhost
#[derive(Parser)]
#[command(
    name = "eventhost",
    version = env!("CARGO_PKG_VERSION"),
    about = "Host and join events from the terminal: log in by email, share event codes, manage attendees",
    long_about = None
)]
pub struct Cli {
    /// Override the backend base URL (e.g. http://localhost:8080/api)
    #[arg(global = true, long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    /// Override the session file (useful for tests or several accounts)
    #[arg(global = true, long = "session", value_name = "FILE")]
    pub session: Option<String>,

    /// Print HTML fragments instead of terminal output
    #[arg(global = true, long = "html")]
    pub html: bool,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Log in (or sign up) with an email address
    Login {
        /// Email address
        email: String,
    },

    /// Forget the current session
    Logout,

    /// Show the current user and both event lists
    Dashboard,

    /// Create a new event and print its shareable code
    Create(CreateArgs),

    /// Register for an event using its code
    Register {
        /// Event code (case-insensitive)
        code: String,
    },

    /// List hosted and/or attending events (both when no filter is given)
    List {
        #[arg(long = "hosted", help = "Events you created")]
        hosted: bool,

        #[arg(long = "attending", help = "Events you registered for")]
        attending: bool,
    },

    /// Delete one of your events
    Delete {
        /// Event id (shown as #ID in listings)
        event_id: i64,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Show who registered for one of your events
    Attendees {
        /// Event id (shown as #ID in listings)
        event_id: i64,
    },
}

#[derive(Args)]
pub struct CreateArgs {
    #[arg(long, help = "Event title")]
    pub title: String,

    #[arg(long, default_value = "", help = "Event description")]
    pub description: String,

    #[arg(
        long = "at",
        value_name = "DATETIME",
        help = "Date and time (YYYY-MM-DD HH:MM or YYYY-MM-DDTHH:MM)"
    )]
    pub at: Option<String>,

    #[arg(long, help = "The event takes place online")]
    pub online: bool,

    #[arg(long, help = "Where the event takes place (required unless --online)")]
    pub location: Option<String>,
}
