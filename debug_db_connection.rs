//! Database connectivity check
//!
//! Connects to `DATABASE_URL`, prints who and where we are, and reports
//! whether the `users` and `posts` tables exist. Pass `--migrate` to apply
//! the bundled migrations first.

use postboard::backend::server::config::DATABASE_URL_VAR;
use postboard::backend::store::PgStore;
use sqlx::Row;

const TABLES: [&str; 2] = ["users", "posts"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let database_url = std::env::var(DATABASE_URL_VAR)
        .map_err(|_| format!("{} is not set", DATABASE_URL_VAR))?;
    let migrate = std::env::args().skip(1).any(|arg| arg == "--migrate");

    println!("DATABASE CONNECTION CHECK");
    println!("=========================");

    let store = match PgStore::connect(&database_url).await {
        Ok(store) => {
            println!("✅ Connected");
            store
        }
        Err(e) => {
            println!("❌ Connection failed: {}", e);
            println!("💡 Check host, port and credentials in {}", DATABASE_URL_VAR);
            return Err(e.into());
        }
    };

    let row = sqlx::query("SELECT current_database(), current_user, version()")
        .fetch_one(store.pool())
        .await?;
    let database: String = row.get(0);
    let user: String = row.get(1);
    let version: String = row.get(2);

    println!("📊 Database: {}", database);
    println!("👤 User: {}", user);
    println!("🔧 {}", version);

    if migrate {
        store.migrate().await?;
        println!("✅ Migrations applied");
    }

    for table in TABLES {
        let count: i64 = sqlx::query_scalar(
            "SELECT count(*) FROM information_schema.tables WHERE table_name = $1",
        )
        .bind(table)
        .fetch_one(store.pool())
        .await?;

        if count > 0 {
            println!("✅ Table '{}' exists", table);
        } else {
            println!("⚠️  Table '{}' is missing - run with --migrate", table);
        }
    }

    Ok(())
}
