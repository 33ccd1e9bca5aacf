use crate::commands::{
    add::AddCommand,
    delete::DeleteCommand,
    edit::EditCommand,
    favorite::FavoriteCommand,
    import_export::{ExportCommand, ImportCommand},
    list::ListCommand,
    misc::{CategoriesCommand, OpenCommand},
    AppContext, CommandEnum,
};
use clap::{Parser, Subcommand};
use markshelf::error::Result;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None, disable_version_flag = true)]
pub struct Cli {
    /// Show the program version and exit
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// Optional custom database file path
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Optional custom configuration file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable color output
    #[arg(long)]
    pub nc: bool,

    /// Show debug information
    #[arg(short = 'g', long = "debug")]
    pub debug: bool,

    /// Output format: json, yaml, toml, plain, or colored
    #[arg(short = 'f', long, global = true)]
    pub format: Option<String>,

    /// Limit number of results shown
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Search keywords (when no subcommand is provided)
    #[arg(name = "KEYWORD")]
    pub keywords: Vec<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new bookmark
    Add {
        /// URL to bookmark
        url: String,

        /// Bookmark title
        #[arg(short, long)]
        title: Option<String>,

        /// Category, e.g. development or news
        #[arg(short, long)]
        category: Option<String>,

        /// Notes or description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// List bookmarks, optionally filtered and sorted
    List {
        /// Case-insensitive text matched against title, url, and description
        #[arg(short, long)]
        search: Option<String>,

        /// Only this category ("all" for every category)
        #[arg(short, long)]
        category: Option<String>,

        /// Only favorites
        #[arg(long)]
        favorites: bool,

        /// newest, oldest, title, or category
        #[arg(long)]
        sort: Option<String>,

        /// Limit number of results shown
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Edit fields of an existing bookmark
    Edit {
        /// Bookmark id
        id: String,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New URL
        #[arg(short, long)]
        url: Option<String>,

        /// New category
        #[arg(short, long)]
        category: Option<String>,

        /// New description (pass "" to clear it)
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Delete bookmark(s)
    Delete {
        /// Bookmark ids
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,

        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },

    /// Toggle the favorite flag
    Favorite {
        /// Bookmark ids
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Import bookmarks from a JSON export
    Import {
        /// File path to import from
        file: PathBuf,

        /// Merge without confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Export bookmarks to a timestamped JSON file
    Export {
        /// Directory to write into
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Print to stdout instead of writing a file
        #[arg(long, conflicts_with = "dir")]
        stdout: bool,
    },

    /// Show categories with bookmark counts
    Categories,

    /// Open bookmark(s) in browser
    Open {
        /// Bookmark ids to open
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },
}

/// Translate parsed arguments into the command to run
pub fn build_command(cli: Cli) -> CommandEnum {
    let format = cli.format;
    let nc = cli.nc;

    match cli.command {
        Some(Commands::Add {
            url,
            title,
            category,
            description,
        }) => CommandEnum::Add(AddCommand {
            url,
            title,
            category,
            description,
        }),
        Some(Commands::List {
            search,
            category,
            favorites,
            sort,
            limit,
        }) => CommandEnum::List(ListCommand {
            search,
            category,
            favorites,
            sort,
            limit,
            format,
            nc,
        }),
        Some(Commands::Edit {
            id,
            title,
            url,
            category,
            description,
        }) => CommandEnum::Edit(EditCommand {
            id,
            title,
            url,
            category,
            description,
        }),
        Some(Commands::Delete { ids, force }) => CommandEnum::Delete(DeleteCommand { ids, force }),
        Some(Commands::Favorite { ids }) => CommandEnum::Favorite(FavoriteCommand { ids }),
        Some(Commands::Import { file, yes }) => CommandEnum::Import(ImportCommand { file, yes }),
        Some(Commands::Export { dir, stdout }) => CommandEnum::Export(ExportCommand { dir, stdout }),
        Some(Commands::Categories) => CommandEnum::Categories(CategoriesCommand { nc }),
        Some(Commands::Open { ids }) => CommandEnum::Open(OpenCommand { ids }),
        None => {
            // Bare keywords search everything
            let search = (!cli.keywords.is_empty()).then(|| cli.keywords.join(" "));
            CommandEnum::List(ListCommand {
                search,
                limit: cli.limit,
                format,
                nc,
                ..Default::default()
            })
        }
    }
}

pub fn handle_args(cli: Cli, ctx: &mut AppContext) -> Result<()> {
    build_command(cli).execute(ctx)
}
