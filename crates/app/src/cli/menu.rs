use clap::{Args, Subcommand};

use comanda::fixtures;
use comanda_app::{
    database::{self, Db},
    domain::products::{PgProductsService, ProductsService, data::NewProduct},
};

#[derive(Debug, Args)]
pub(crate) struct MenuCommand {
    #[command(subcommand)]
    command: MenuSubcommand,
}

#[derive(Debug, Subcommand)]
enum MenuSubcommand {
    /// Insert the house menu into the catalog.
    Seed(SeedArgs),
}

#[derive(Debug, Args)]
struct SeedArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,
}

pub(crate) async fn run(command: MenuCommand) -> Result<(), String> {
    match command.command {
        MenuSubcommand::Seed(args) => seed(args).await,
    }
}

async fn seed(args: SeedArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let products = PgProductsService::new(Db::new(pool));

    for item in fixtures::menu() {
        let created = products
            .create_product(NewProduct {
                name: item.name,
                price: item.price,
                category: item.category,
                description: item.description,
                image_url: None,
            })
            .await
            .map_err(|error| format!("failed to seed menu item: {error}"))?;

        println!("seeded product {}: {}", created.id, created.name);
    }

    Ok(())
}
