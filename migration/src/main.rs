//! Schema tool for the attendance store.
//!
//! ```text
//! migration          apply pending migrations
//! migration fresh    delete the database file, then migrate from scratch
//! migration clean    delete the database file
//! ```

use std::{fs, path::Path};
use util::config;

mod runner;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let db_path = config::database_path();
    let url = format!("sqlite://{}?mode=rwc", db_path);
    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        Some("clean") => {
            remove_db_file(&db_path);
        }
        Some("fresh") => {
            remove_db_file(&db_path);
            create_db_dir(&db_path);
            runner::run_pending_migrations(&url).await;
        }
        _ => {
            create_db_dir(&db_path);
            runner::run_pending_migrations(&url).await;
        }
    }
}

fn remove_db_file(path: &str) {
    let db_path = Path::new(path);
    if !db_path.exists() {
        println!("DB file does not exist: {}", db_path.display());
        return;
    }
    match fs::remove_file(db_path) {
        Ok(()) => println!("Deleted DB: {}", db_path.display()),
        Err(e) => {
            println!("Failed to delete {}: {e}", db_path.display());
            std::process::exit(1);
        }
    }
}

fn create_db_dir(path: &str) {
    if let Some(parent) = Path::new(path).parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            println!("Failed to create DB directory {}: {e}", parent.display());
            std::process::exit(1);
        }
    }
}
