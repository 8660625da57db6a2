use chrono::{DateTime, Utc};
use clap::Parser;
use colored::*;
use nook::env::{Clock, SystemClock, UuidGen};
use nook::error::{NookError, Rejection, Result};
use nook::model::{Category, Item, ItemDraft, SortOrder};
use nook::persist::{self, FileStore, SnapshotStore};
use nook::search;
use nook::share::{FileShare, ShareAdapter};
use nook::snapshot::{self, Snapshot};
use nook::store::CategoryStore;
use once_cell::sync::Lazy;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{CategoryCmd, Cli, Commands, ItemCmd};

static HOME_OVERRIDE: Lazy<Option<PathBuf>> =
    Lazy::new(|| std::env::var_os("NOOK_HOME").map(PathBuf::from));

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut app = App::load()?;

    match cli.command {
        Commands::Category(cmd) => handle_category(&mut app, cmd),
        Commands::Item(cmd) => handle_item(&mut app, cmd),
        Commands::List { category, search } => handle_list(&app, category, search),
        Commands::Sort { category, order } => handle_sort(&mut app, category, order),
        Commands::Export { dir } => handle_export(&app, dir),
        Commands::Import { path } => handle_import(&mut app, path),
        Commands::Clear { yes } => handle_clear(&mut app, yes),
    }
}

struct App {
    files: FileStore,
    store: CategoryStore,
}

impl App {
    fn load() -> Result<Self> {
        let path = match HOME_OVERRIDE.as_ref() {
            Some(home) => home.join("store.json"),
            None => persist::default_data_file()?,
        };
        let files = FileStore::new(path);
        let mut store = CategoryStore::new();
        // Our own saved state goes through the same pipeline as foreign
        // snapshots, so a hand-edited or truncated file fails loudly here
        // instead of corrupting the store.
        if let Some(text) = files.load()? {
            let loaded = Snapshot::from_json(&text, &SystemClock, &mut UuidGen)?;
            store.import_data(loaded);
        }
        Ok(Self { files, store })
    }

    fn save(&mut self) -> Result<()> {
        let state = snapshot::to_export_snapshot(self.store.categories(), SystemClock.now());
        self.files.save(&state.to_json()?)
    }

    fn select_by_name(&mut self, name: &str) -> Result<()> {
        let id = self
            .store
            .find_category(name)
            .map(|c| c.id.clone())
            .ok_or_else(|| Rejection::CategoryNotFound(name.to_string()))?;
        self.store.select_category(&id);
        Ok(())
    }
}

fn handle_category(app: &mut App, cmd: CategoryCmd) -> Result<()> {
    match cmd {
        CategoryCmd::Add { name } => {
            let category = app.store.add_category(&name)?;
            app.save()?;
            println!("{}", format!("Added category: {}", category.name).green());
        }
        CategoryCmd::Delete { name } => {
            let removed = app.store.delete_category(&name)?;
            app.save()?;
            println!(
                "{}",
                format!(
                    "Deleted category '{}' and {} item(s)",
                    removed.name,
                    removed.items.len()
                )
                .green()
            );
        }
        CategoryCmd::List => print_categories(app.store.categories()),
    }
    Ok(())
}

fn handle_item(app: &mut App, cmd: ItemCmd) -> Result<()> {
    match cmd {
        ItemCmd::Add {
            category,
            name,
            desc,
            tag,
        } => {
            app.select_by_name(&category)?;
            let item = app.store.add_item(ItemDraft {
                name,
                description: desc,
                tags: tag,
            })?;
            app.save()?;
            println!(
                "{}",
                format!("Added '{}' to {}", item.name, category).green()
            );
        }
        ItemCmd::Edit {
            category,
            index,
            name,
            desc,
            tag,
        } => {
            app.select_by_name(&category)?;
            let item = app.store.edit_item(
                index,
                ItemDraft {
                    name,
                    description: desc,
                    tags: tag,
                },
            )?;
            app.save()?;
            println!("{}", format!("Updated item {}: {}", index, item.name).green());
        }
        ItemCmd::Delete { category, index } => {
            app.select_by_name(&category)?;
            let removed = app.store.delete_item(index)?;
            app.save()?;
            println!(
                "{}",
                format!("Deleted item {}: {}", index, removed.name).green()
            );
        }
    }
    Ok(())
}

fn handle_list(app: &App, category: String, query: Option<String>) -> Result<()> {
    let category = app
        .store
        .find_category(&category)
        .ok_or_else(|| Rejection::CategoryNotFound(category.clone()))?;

    let query = query.unwrap_or_default();
    let visible = search::sort_items(
        &search::filter_items(&category.items, &query),
        category.sort_order,
    );
    print_items(category, &visible);
    Ok(())
}

fn handle_sort(app: &mut App, category: String, order: String) -> Result<()> {
    let order: SortOrder = order.parse().map_err(NookError::Store)?;
    let id = app
        .store
        .find_category(&category)
        .map(|c| c.id.clone())
        .ok_or_else(|| Rejection::CategoryNotFound(category.clone()))?;

    app.store.update_category_sort_order(&id, order)?;
    app.save()?;
    println!(
        "{}",
        format!("Sorting '{}' by {}", category, order).green()
    );
    Ok(())
}

fn handle_export(app: &App, dir: Option<PathBuf>) -> Result<()> {
    let dir = match dir {
        Some(dir) => dir,
        None => std::env::current_dir().map_err(NookError::Io)?,
    };
    let state = snapshot::to_export_snapshot(app.store.categories(), Utc::now());
    let destination = FileShare::new(dir).deliver(&state.to_json()?)?;
    println!("{}", format!("Exported to {}", destination).green());
    Ok(())
}

fn handle_import(app: &mut App, path: PathBuf) -> Result<()> {
    let cwd = std::env::current_dir().map_err(NookError::Io)?;
    let mut share = FileShare::new(cwd).with_import_from(path);

    let Some(text) = share.acquire()? else {
        println!("{}", "Import cancelled.".yellow());
        return Ok(());
    };

    let incoming = Snapshot::from_json(&text, &SystemClock, &mut UuidGen)?;
    let count = incoming.categories.len();
    app.store.import_data(incoming);
    app.save()?;
    println!("{}", format!("Imported {} categorie(s)", count).green());
    Ok(())
}

fn handle_clear(app: &mut App, yes: bool) -> Result<()> {
    if !yes {
        println!(
            "{}",
            "This deletes every category and item. Re-run with --yes to confirm.".yellow()
        );
        return Ok(());
    }
    app.store.clear_all();
    app.save()?;
    println!("{}", "All data cleared.".green());
    Ok(())
}

fn print_categories(categories: &[Category]) {
    if categories.is_empty() {
        println!("No categories yet.");
        return;
    }
    let width = categories.iter().map(|c| c.name.width()).max().unwrap_or(0);
    for category in categories {
        let padding = " ".repeat(width.saturating_sub(category.name.width()));
        println!(
            "  {}{}  {:>3} item(s)  {:<12}  {}",
            category.name.bold(),
            padding,
            category.items.len(),
            category.sort_order.to_string(),
            format_time_ago(category.updated_at).dimmed()
        );
    }
}

fn print_items(category: &Category, visible: &[Item]) {
    if visible.is_empty() {
        println!("No items.");
        return;
    }
    let width = visible.iter().map(|i| i.name.width()).max().unwrap_or(0);
    for item in visible {
        // The printed index is the item's storage position, which is what
        // `item edit` and `item delete` take, even when the display order
        // is sorted or filtered.
        let index = category
            .items
            .iter()
            .position(|i| i.id == item.id)
            .unwrap_or_default();
        let padding = " ".repeat(width.saturating_sub(item.name.width()));
        let tags = if item.tags.is_empty() {
            String::new()
        } else {
            format!("[{}]", item.tags.join(", "))
        };
        println!(
            "{:>3}. {}{}  {}  {}",
            index,
            item.name.bold(),
            padding,
            tags,
            format_time_ago(item.updated_at).dimmed()
        );
        if !item.description.is_empty() {
            println!("     {}", item.description.dimmed());
        }
    }
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    timeago::Formatter::new().convert(duration.to_std().unwrap_or_default())
}
