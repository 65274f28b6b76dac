//! Biblio CLI
//!
//! Command-line front end for the Biblio lending catalog.
//!
//! # Commands
//!
//! - `add-item` / `add-member` - grow the catalog
//! - `borrow` / `return` / `cancel-hold` - lending transitions
//! - `search-items` / `search-members` - substring search
//! - `list-items` / `list-members` - full listings
//! - `most-borrowed` - popularity ranking
//! - `delete-member` - drop a member record

mod commands;

use biblio_core::{ItemId, Library, MemberId, DEFAULT_LOAN_DAYS};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Biblio command-line lending catalog.
#[derive(Parser)]
#[command(name = "biblio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the data directory holding the snapshot files
    #[arg(global = true, short, long, default_value = "biblio_data")]
    path: PathBuf,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an item to the catalog
    AddItem {
        /// Item title
        title: String,
        /// Item author
        author: String,
    },

    /// Register a new member
    AddMember {
        /// Member name
        name: String,
    },

    /// Borrow the first available item matching a title
    Borrow {
        /// Title to search for (case-insensitive substring)
        title: String,
        /// Borrowing member's identifier
        member: MemberId,

        /// Loan period in days
        #[arg(short, long, default_value_t = DEFAULT_LOAN_DAYS)]
        days: u32,
    },

    /// Return a borrowed item
    Return {
        /// Identifier of the item being returned
        item: ItemId,
        /// Identifier of the member returning it
        member: MemberId,
    },

    /// Leave an item's waiting list
    CancelHold {
        /// Item whose waiting list to leave
        item: ItemId,
        /// Member to remove from the queue
        member: MemberId,
    },

    /// Search items by title substring
    SearchItems {
        /// Query (empty matches everything)
        query: String,
    },

    /// Search members by identifier or name substring
    SearchMembers {
        /// Query (empty matches everything)
        query: String,
    },

    /// List all items in title order
    ListItems,

    /// List all members by identifier
    ListMembers,

    /// Show the most borrowed items
    MostBorrowed {
        /// How many items to show
        #[arg(short, long, default_value = "5")]
        top: usize,
    },

    /// Delete a member record
    DeleteMember {
        /// Identifier of the member to delete
        member: MemberId,
    },

    /// Show version information
    Version,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Commands::Version = cli.command {
        println!("Biblio CLI v{}", env!("CARGO_PKG_VERSION"));
        println!("Biblio Core v{}", biblio_core::VERSION);
        return Ok(());
    }

    tracing::debug!(path = %cli.path.display(), "opening library");
    let mut library = Library::open(&cli.path)?;

    match cli.command {
        Commands::AddItem { title, author } => commands::add_item(&mut library, &title, &author)?,
        Commands::AddMember { name } => commands::add_member(&mut library, &name)?,
        Commands::Borrow {
            title,
            member,
            days,
        } => commands::borrow(&mut library, &title, member, days)?,
        Commands::Return { item, member } => commands::return_item(&mut library, item, member)?,
        Commands::CancelHold { item, member } => {
            commands::cancel_hold(&mut library, item, member)?;
        }
        Commands::SearchItems { query } => commands::print_items(&library.search_items(&query)),
        Commands::SearchMembers { query } => {
            commands::print_members(&library, &library.search_members(&query));
        }
        Commands::ListItems => commands::print_items(&library.list_items()),
        Commands::ListMembers => commands::print_members(&library, &library.list_members()),
        Commands::MostBorrowed { top } => commands::most_borrowed(&library, top),
        Commands::DeleteMember { member } => commands::delete_member(&mut library, member)?,
        Commands::Version => unreachable!("handled above"),
    }

    Ok(())
}
