use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "nook")]
#[command(about = "Organize notes into categories from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage categories
    #[command(subcommand, alias = "cat")]
    Category(CategoryCmd),

    /// Manage items in a category
    #[command(subcommand, alias = "it")]
    Item(ItemCmd),

    /// List a category's items, filtered and sorted for display
    #[command(alias = "ls")]
    List {
        /// Category name
        category: String,

        /// Keep only items matching this query (name, description, or tags)
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Change a category's sort order
    Sort {
        /// Category name
        category: String,

        /// One of: alphabetical, dateAdded, dateModified
        order: String,
    },

    /// Export the whole store to a snapshot file
    Export {
        /// Directory to write the snapshot into (defaults to the current dir)
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Import a snapshot file, replacing the current store
    Import {
        /// Path to a previously exported snapshot
        path: PathBuf,
    },

    /// Delete every category and item
    Clear {
        /// Skip the confirmation
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum CategoryCmd {
    /// Add a category
    #[command(alias = "a")]
    Add {
        /// Category name
        name: String,
    },

    /// Delete a category and all of its items
    #[command(alias = "rm")]
    Delete {
        /// Category name (exact match)
        name: String,
    },

    /// List categories
    #[command(alias = "ls")]
    List,
}

#[derive(Subcommand, Debug)]
pub enum ItemCmd {
    /// Add an item to a category
    #[command(alias = "a")]
    Add {
        /// Category name
        category: String,

        /// Item name
        name: String,

        /// Free-form description
        #[arg(short, long, default_value = "")]
        desc: String,

        /// Tags, repeatable
        #[arg(short, long)]
        tag: Vec<String>,
    },

    /// Replace the item at a storage index
    #[command(alias = "e")]
    Edit {
        /// Category name
        category: String,

        /// Storage index as shown by `nook list`
        index: usize,

        /// New item name
        name: String,

        /// New description
        #[arg(short, long, default_value = "")]
        desc: String,

        /// New tags, repeatable
        #[arg(short, long)]
        tag: Vec<String>,
    },

    /// Delete the item at a storage index
    #[command(alias = "rm")]
    Delete {
        /// Category name
        category: String,

        /// Storage index as shown by `nook list`
        index: usize,
    },
}
