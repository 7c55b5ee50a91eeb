//! Seeds the database with a demo account and a few shoes.
//!
//! Safe to re-run: the demo user is reused if it already exists, and each
//! run adds another set of demo shoes.

use anyhow::Result;
use shoerack::{
    config::Config,
    database::{
        Database,
        models::{CreateShoe, CreateUser},
    },
    repositories::{shoe_repository::ShoeRepository, user_repository::UserRepository},
    services::user_service::PasswordHasher,
};
use tracing::info;

const DEMO_EMAIL: &str = "demo@example.com";
const DEMO_PASSWORD: &str = "password123";
const DEMO_SHOES: [(&str, &str); 3] = [
    ("Air Jordan 1", "Nike"),
    ("Yeezy Boost 350", "Adidas"),
    ("Chuck Taylor All Star", "Converse"),
];

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let config = Config::from_env()?;
    let db = Database::new(&config).await?;
    let pool = db.pool();

    info!("Starting database seed");

    let users = UserRepository::new(pool);
    let user = match users.get_user_by_email(DEMO_EMAIL).await? {
        Some(user) => user,
        None => {
            let password_hash = PasswordHasher::new(config.bcrypt_cost)
                .hash_password(DEMO_PASSWORD)
                .await?;
            users
                .create_user(CreateUser {
                    email: DEMO_EMAIL.to_string(),
                    password_hash,
                })
                .await?
        }
    };
    info!("Demo user ready: {}", user.email);

    let shoes = ShoeRepository::new(pool);
    for (name, brand) in DEMO_SHOES {
        shoes
            .create_shoe(CreateShoe {
                name: name.to_string(),
                brand: brand.to_string(),
                user_id: user.id.clone(),
            })
            .await?;
    }
    info!("Created {} demo shoes", DEMO_SHOES.len());
    info!("Demo credentials: {} / {}", DEMO_EMAIL, DEMO_PASSWORD);

    db.close().await;
    Ok(())
}
