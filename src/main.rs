use anyhow::{Context, Result};
use clap::Parser;
use folio_tui::app::run_tui;
use folio_tui::catalog::{thumbnail, Catalog, Filter};
use folio_tui::config::Config;
use folio_tui::logging;
use folio_tui::navigator::visible_folders;
use folio_tui::opener;
use folio_tui::ui::App;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(
    name = "folio",
    about = "Browse a project portfolio from the terminal",
    version
)]
struct Args {
    /// Catalog file to load instead of the built-in portfolio
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Directory that item source paths are relative to
    #[arg(long, value_name = "DIR")]
    media_root: Option<PathBuf>,

    /// Initial filter: all, industrial, canopy, schools or docs
    #[arg(short, long)]
    filter: Option<Filter>,

    /// Print the folders visible under the filter and exit (no TUI)
    #[arg(short, long)]
    list: bool,

    /// Print each PDF with its thumbnail path and exit
    #[arg(long)]
    thumbnails: bool,

    /// Recompress every thumbnail under DIR in place and exit
    #[arg(long, value_name = "DIR")]
    compress_thumbnails: Option<PathBuf>,

    /// Write the effective settings to the config file and exit
    #[arg(long)]
    save_config: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = logging::init()? {
        eprintln!("  Logging to {}", path.display());
    }

    if let Some(root) = &args.compress_thumbnails {
        return compress(root);
    }

    let mut config = Config::load();
    if let Some(path) = args.catalog {
        config.catalog_path = Some(path);
    }
    if let Some(root) = args.media_root {
        config.media_root = Some(root);
    }
    if let Some(filter) = args.filter {
        config.default_filter = filter;
    }

    if args.save_config {
        config.save().map_err(anyhow::Error::msg)?;
        eprintln!("  Saved settings to {}", Config::config_location());
        return Ok(());
    }

    let catalog = load_catalog(&config)?;
    tracing::info!(
        folders = catalog.len(),
        items = catalog.item_count(),
        "catalog loaded"
    );

    if args.list {
        print_listing(&catalog, &config);
        return Ok(());
    }

    if args.thumbnails {
        print_thumbnails(&catalog);
        return Ok(());
    }

    let mut app = App::new(Arc::new(catalog), &config);
    run_tui(&mut app)
}

fn load_catalog(config: &Config) -> Result<Catalog> {
    match &config.catalog_path {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("Failed to load catalog {}", path.display())),
        None => Catalog::embedded().context("Built-in catalog is invalid"),
    }
}

fn print_listing(catalog: &Catalog, config: &Config) {
    let filter = config.default_filter;
    let folders = visible_folders(catalog, filter);

    println!();
    println!("  {} ({} folders)", filter.label(), folders.len());
    println!();

    for folder in folders {
        println!(
            "  {}  [{}]  {} item{}, {} pdf",
            folder.display_name,
            folder.category.as_str(),
            folder.items.len(),
            if folder.items.len() == 1 { "" } else { "s" },
            folder.pdf_count()
        );
        for item in &folder.items {
            let path = opener::resolve(config.media_root.as_deref(), item);
            println!(
                "    {:<5} {}  {}",
                item.kind.label(),
                item.title,
                path.display()
            );
        }
    }
    println!();
}

fn print_thumbnails(catalog: &Catalog) {
    for folder in catalog.iter() {
        for item in folder.items.iter().filter(|i| i.is_pdf()) {
            let thumb = item
                .thumbnail_path
                .clone()
                .unwrap_or_else(|| thumbnail::thumbnail_path_for(&item.source_path));
            println!("{} -> {}", item.source_path.display(), thumb.display());
        }
    }
}

fn compress(root: &std::path::Path) -> Result<()> {
    eprintln!("  Compressing thumbnails under {}...", root.display());
    let report = thumbnail::compress_thumbnails(root)?;

    eprintln!(
        "  {} files, {:.1} KB -> {:.1} KB ({:.0}% smaller)",
        report.files,
        report.bytes_before as f64 / 1024.0,
        report.bytes_after as f64 / 1024.0,
        report.reduction_percent()
    );
    if report.failed > 0 {
        eprintln!("  {} files could not be recompressed", report.failed);
    }
    Ok(())
}
