use chrono::Utc;
use clap::Subcommand;
use pomoduo_core::StateStore;
use uuid::Uuid;

use super::load_engine;

#[derive(Subcommand)]
pub enum LogAction {
    /// List entries, most recent first
    List,
    /// Delete one entry by id
    Remove {
        /// Entry id
        id: Uuid,
    },
    /// Delete all entries (the day window stays open)
    Clear,
}

pub fn run(action: LogAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = StateStore::open()?;
    let now = Utc::now();
    let mut engine = load_engine(&store, now);

    match action {
        LogAction::List => {
            let entries = engine.log().entries_sorted();
            println!("{}", serde_json::to_string_pretty(&entries)?);
            // Listing applied load-time catch-up; keep the slot in step.
            store.save(&engine, Utc::now())?;
        }
        LogAction::Remove { id } => {
            if !engine.remove_log_entry(id) {
                eprintln!("no log entry with id {id}");
                std::process::exit(1);
            }
            store.save(&engine, Utc::now())?;
            println!("removed {id}");
        }
        LogAction::Clear => {
            engine.clear_log();
            store.save(&engine, Utc::now())?;
            println!("log cleared");
        }
    }
    Ok(())
}
