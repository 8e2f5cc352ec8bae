//! Command-line host for the product filter sidebar.
//!
//! Loads a JSON product list, replays the requested filter selections through
//! a [`FilterSidebar`] and renders the surviving products as JSON.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use storefront_core::SidebarConfig;
use storefront_products::{FilterSidebar, Product, SidebarEvent, SortOrder, ALL_CATEGORIES};

/// Filter a product list the way the listing-page sidebar does.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "storefront-filter", version)]
pub struct Cli {
    /// JSON file holding an array of products.
    #[arg(long)]
    pub products: PathBuf,

    /// Upper bound on discounted price (defaults to the highest list price).
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Restrict to a category; repeat to select several.
    #[arg(long = "category")]
    pub categories: Vec<String>,

    /// Uncheck "All" without selecting anything (matches nothing).
    #[arg(long, conflicts_with = "categories")]
    pub no_categories: bool,

    /// Minimum rating (inclusive).
    #[arg(long)]
    pub min_rating: Option<f64>,

    /// Sort by discounted price: lowToHigh or highToLow.
    #[arg(long)]
    pub sort: Option<String>,

    /// Log output written to stderr.
    #[arg(long, value_enum, default_value_t = LogFormat::Json)]
    pub log_format: LogFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl Cli {
    /// Install the process-wide subscriber in the requested format.
    pub fn init_logging(&self) {
        match self.log_format {
            LogFormat::Json => storefront_observability::init(),
            LogFormat::Pretty => storefront_observability::init_pretty(),
        }
    }
}

/// Load the product file, filter it and return pretty-printed JSON.
pub fn run(cli: &Cli) -> anyhow::Result<String> {
    let config = SidebarConfig::from_env().context("invalid sidebar configuration")?;

    let raw = std::fs::read_to_string(&cli.products)
        .with_context(|| format!("failed to read {}", cli.products.display()))?;
    let products: Vec<Product> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse products from {}", cli.products.display()))?;

    let filtered = filter_products(products, cli, config)?;
    serde_json::to_string_pretty(&filtered).context("failed to serialize filtered products")
}

/// Replay the command-line selections as sidebar events.
pub fn filter_products(
    products: Vec<Product>,
    cli: &Cli,
    config: SidebarConfig,
) -> anyhow::Result<Vec<Product>> {
    let events = selection_events(cli)?;

    let mut sidebar = FilterSidebar::mount(products, config, |filtered: &[Product]| {
        tracing::debug!(count = filtered.len(), "filter result updated");
    });
    for event in events {
        sidebar.dispatch(event);
    }

    tracing::info!(
        input = sidebar.products().len(),
        output = sidebar.filtered().len(),
        "products filtered"
    );
    Ok(sidebar.filtered().to_vec())
}

fn selection_events(cli: &Cli) -> anyhow::Result<Vec<SidebarEvent>> {
    let mut events = Vec::new();

    if cli.no_categories {
        events.push(SidebarEvent::CategoryToggled {
            value: ALL_CATEGORIES.to_string(),
            checked: false,
        });
    }
    for category in &cli.categories {
        events.push(SidebarEvent::CategoryToggled {
            value: category.clone(),
            checked: true,
        });
    }
    if let Some(rating) = cli.min_rating {
        events.push(SidebarEvent::RatingSelected(rating));
    }
    if let Some(sort) = &cli.sort {
        let sort: SortOrder = sort
            .parse()
            .with_context(|| format!("invalid --sort value {sort:?}"))?;
        events.push(SidebarEvent::SortSelected(sort));
    }
    if let Some(price) = cli.max_price {
        events.push(SidebarEvent::PriceChanged(price));
    }

    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["storefront-filter", "--products", "catalog.json"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    fn catalog() -> Vec<Product> {
        vec![
            Product::new(100.0, 0.0, "Men", 4.0),
            Product::new(50.0, 50.0, "Women", 2.0),
            Product::new(60.0, 0.0, "Kids", 3.0),
        ]
    }

    #[test]
    fn no_flags_returns_everything_in_order() {
        let out = filter_products(catalog(), &parse(&[]), SidebarConfig::default()).unwrap();
        assert_eq!(out, catalog());
    }

    #[test]
    fn flags_combine_like_the_sidebar() {
        let cli = parse(&["--category", "Women", "--category", "Kids", "--sort", "highToLow"]);
        let out = filter_products(catalog(), &cli, SidebarConfig::default()).unwrap();
        let categories: Vec<_> = out.iter().map(|p| p.category.as_str()).collect();
        assert_eq!(categories, vec!["Kids", "Women"]);
    }

    #[test]
    fn max_price_and_rating_apply() {
        let cli = parse(&["--max-price", "70", "--min-rating", "3"]);
        let out = filter_products(catalog(), &cli, SidebarConfig::default()).unwrap();
        assert_eq!(out, vec![Product::new(60.0, 0.0, "Kids", 3.0)]);
    }

    #[test]
    fn no_categories_matches_nothing() {
        let cli = parse(&["--no-categories"]);
        let out = filter_products(catalog(), &cli, SidebarConfig::default()).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn bad_sort_is_an_error() {
        let cli = parse(&["--sort", "cheapest"]);
        let err = filter_products(catalog(), &cli, SidebarConfig::default()).unwrap_err();
        assert!(err.to_string().contains("--sort"));
    }

    #[test]
    fn no_categories_conflicts_with_category() {
        let result = Cli::try_parse_from([
            "storefront-filter",
            "--products",
            "catalog.json",
            "--no-categories",
            "--category",
            "Men",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn log_format_defaults_to_json() {
        assert_eq!(parse(&[]).log_format, LogFormat::Json);

        let cli = parse(&["--log-format", "pretty"]);
        assert_eq!(cli.log_format, LogFormat::Pretty);
        cli.init_logging();
        tracing::info!("pretty logging installed");

        let argv = ["storefront-filter", "--products", "x.json", "--log-format", "xml"];
        assert!(Cli::try_parse_from(argv).is_err());
    }

    #[test]
    fn missing_file_is_reported() {
        let cli = parse(&[]);
        let cli = Cli {
            products: PathBuf::from("/nonexistent/storefront/catalog.json"),
            ..cli
        };
        let err = run(&cli).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
