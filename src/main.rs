//! Binary entry point: bring up logging, build the starter catalog and print
//! it in name order followed by each sorted view of the working list.
use anyhow::{Context, Result};
use recipe_manager::{Catalog, Config, SortOrder};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    let mut catalog = Catalog::seeded(&config).context("failed to build starter catalog")?;

    println!("All Recipes:");
    println!("{}", catalog.render_all()?);

    for (title, order) in [
        ("Sorted by number of ingredients", SortOrder::IngredientCount),
        ("Sorted by popularity", SortOrder::PopularityDescending),
        ("Sorted by cuisine", SortOrder::CuisineAscending),
    ] {
        catalog
            .sort(order)
            .with_context(|| format!("failed to sort recipes ({order:?})"))?;
        println!("\n{title}:");
        println!("{}", catalog.render_list()?);
    }

    Ok(())
}
