use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use weatherai_core::{AppError, CatalogError, Config};
use weatherai_geo::{GeographyCatalog, StaticCatalog};
use weatherai_ui::{error_mapping::map_geo_error, AppRouter, HomePage, LocationSelector};

#[derive(Debug, Parser)]
#[command(name = "weatherai", about = "Pick a country and city, open its weather page")]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the home page
    Home,
    /// List all countries
    Countries,
    /// List the cities of a country (name or ISO code)
    Cities { country: String },
    /// Select a country and city, then open the location page
    Pick {
        #[arg(long)]
        country: String,
        #[arg(long)]
        city: String,
    },
    /// Open a path, e.g. /location/48.8566/2.3522
    Open { path: String },
}

fn main() {
    if let Err(e) = weatherai_core::init() {
        eprintln!("Logging unavailable: {e}");
    }

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        tracing::error!("{}", e);
        eprintln!("{}", e.user_message());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let (config, _warnings) = match &cli.config {
        Some(path) => Config::load_from(path)?.into_validated()?,
        None => Config::load_validated()?,
    };

    let catalog = Arc::new(
        StaticCatalog::load(config.catalog.dataset_dir.as_deref()).map_err(map_geo_error)?,
    );
    let home = HomePage::new(&config.ui, catalog.country_count());
    let router = Arc::new(AppRouter::new(config.navigation.base_path.clone(), home));

    match cli.command {
        Command::Home => {
            println!("{}", router.resolve("/")?);
        }
        Command::Countries => {
            for country in catalog.list_countries() {
                println!("{}\t{}", country.iso_code(), country.label);
            }
        }
        Command::Cities { country } => {
            let country = catalog
                .find_country(&country)
                .ok_or(CatalogError::CountryNotFound(country))?;
            let cities = catalog.list_cities(country.iso_code());
            if cities.is_empty() {
                println!("No cities listed for {}", country.label);
            }
            for city in cities {
                let coords = city.coordinates();
                println!(
                    "{}\t{}\t{}\t{}",
                    city.label,
                    city.value.state_code,
                    coords.latitude(),
                    coords.longitude()
                );
            }
        }
        Command::Pick { country, city } => {
            let mut selector = LocationSelector::new(catalog.clone(), router.clone())
                .with_base_path(config.navigation.base_path.clone());
            let country = selector.find_country(&country)?;
            selector.choose_country(country);

            if let Some(control) = selector.city_control() {
                let city = control.find(&city)?;
                control.choose(city)?;
            }

            if let Some(page) = router.current() {
                println!("{}", page.body);
            }
        }
        Command::Open { path } => {
            println!("{}", router.resolve(&path)?);
        }
    }

    Ok(())
}
