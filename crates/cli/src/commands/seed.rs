//! Seed the database with demo data.
//!
//! Inserts demo users with an order apiece, going through the same
//! repositories the API uses so validation and status defaults apply.
//! Users that already exist are skipped, so the command can be re-run.
//!
//! # Usage
//!
//! ```bash
//! clem-cli seed
//! ```
//!
//! # Environment Variables
//!
//! - `CLEMENTINE_DATABASE_URL` - `PostgreSQL` connection string
//!   (falls back to `DATABASE_URL`)

use rust_decimal::Decimal;
use tracing::info;

use clementine_core::{NewOrderItem, Order, ProductId, User};

use clementine_api::db::{
    self, OrderItemRepository, OrderRepository, PgOrderItemRepository, PgOrderRepository,
    PgUserRepository, RepositoryError, UserRepository,
};

/// Insert demo users and orders.
///
/// # Errors
///
/// Returns an error if the database is unreachable or an insert fails.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let database_url = super::database_url()?;
    let pool = db::create_pool(&database_url).await?;
    info!("Connected to database");

    let users = PgUserRepository::new(pool.clone());
    let orders = PgOrderRepository::new(pool.clone());
    let items = PgOrderItemRepository::new(pool);

    let demo_users = [
        ("Ada Lovelace", "ada@example.com", Some("555-0100")),
        ("Grace Hopper", "grace@example.com", None),
    ];

    for (name, email, phone) in demo_users {
        let user = User::new(Some(name.to_owned()), email, phone.map(str::to_owned))?;

        let user_id = match users.create(&user).await {
            Ok(id) => id,
            Err(RepositoryError::Conflict(_)) => {
                info!(email, "User already exists, skipping");
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        info!(user_id = user_id.as_i32(), email, "Seeded user");

        let order = Order::new(user_id, Decimal::new(30, 0))?;
        let order_id = orders.create(&order).await?;

        items
            .add_item(&NewOrderItem {
                order_id,
                product_id: ProductId::new(9),
                qty: 2,
                price: Decimal::new(15, 0),
            })
            .await?;
        info!(order_id = order_id.as_i32(), "Seeded order");
    }

    info!("Seeding complete");
    Ok(())
}
