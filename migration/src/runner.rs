use colored::*;
use futures::FutureExt;
use sea_orm::DatabaseConnection;
use sea_orm_migration::prelude::*;
use std::io::{self, Write};
use std::time::Instant;

const STATUS_COLUMN: usize = 80;

/// Applies every pending migration, one per line, and records each as applied.
pub async fn run_pending_migrations(url: &str) {
    let db = match sea_orm::Database::connect(url).await {
        Ok(db) => db,
        Err(e) => {
            println!("{} {}", "DB connection failed:".red(), e);
            std::process::exit(1);
        }
    };

    let pending = match migration::Migrator::get_pending_migrations(&db).await {
        Ok(p) => p,
        Err(e) => {
            println!("{} {}", "Failed to read migration status:".red(), e);
            std::process::exit(1);
        }
    };

    if pending.is_empty() {
        println!("{}", "Nothing to migrate".dimmed());
        return;
    }

    println!("Running migrations...");
    for m in pending {
        run_next(&db, m.name()).await;
    }
}

async fn run_next(db: &DatabaseConnection, name: &str) {
    let name_str = format!("Applying {}", name.bold());
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(name_str.len()));
    print!("{}{} ", name_str, dots);
    io::stdout().flush().ok();

    let start = Instant::now();
    let result = std::panic::AssertUnwindSafe(migration::Migrator::up(db, Some(1)))
        .catch_unwind()
        .await;

    match result {
        Ok(Ok(())) => {
            let time_str = format!("({:.2?})", start.elapsed()).dimmed();
            println!("{} {}", "done".green(), time_str);
        }
        Ok(Err(e)) => {
            println!("{} {}", "failed".red(), e);
            std::process::exit(1);
        }
        Err(_) => {
            println!("{}", "panicked".red());
            std::process::exit(1);
        }
    }
}
