//! The `quizdeck clear` command.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use quizdeck_core::traits::ResultStore;
use quizdeck_store::JsonFileStore;

pub async fn execute(store_path: PathBuf, yes: bool) -> Result<()> {
    if !yes {
        println!(
            "This erases all history in {}. Re-run with --yes to confirm.",
            store_path.display()
        );
        return Ok(());
    }

    let store: Arc<dyn ResultStore> = Arc::new(JsonFileStore::new(store_path));
    store.clear().await?;
    println!("History cleared.");

    Ok(())
}
