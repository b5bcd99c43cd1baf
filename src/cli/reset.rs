//! Reset command implementation

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;

use kudos::store::ProgressStore;

/// Delete all stored progression data
pub async fn reset_command(data_dir: &Path, yes: bool) -> Result<()> {
    if !yes {
        print!("Delete all progression data in {}? [y/N] ", data_dir.display());
        io::stdout().flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        let answer = answer.trim().to_lowercase();
        if answer != "y" && answer != "yes" {
            println!("Aborted.");
            return Ok(());
        }
    }

    let store = ProgressStore::with_path(&data_dir.join("progress.db"))?;
    store.reset()?;
    println!("Progression data deleted.");
    Ok(())
}
