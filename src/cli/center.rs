//! Center command implementation

use std::path::Path;

use anyhow::Result;

use kudos::store::ProgressStore;

use super::format_timestamp;

/// Show the notification center backlog
pub async fn center_command(
    data_dir: &Path,
    unread_only: bool,
    limit: usize,
    mark_read: bool,
) -> Result<()> {
    let store = ProgressStore::with_path(&data_dir.join("progress.db"))?;

    let records = store.center_records(limit, unread_only)?;
    if records.is_empty() {
        println!("No notifications.");
    } else {
        for record in &records {
            let marker = if record.read { " " } else { "*" };
            println!(
                "{} {}  {}",
                marker,
                format_timestamp(record.timestamp),
                record.title
            );
            println!("                    {}", record.message);
        }
    }

    if mark_read {
        let updated = store.mark_center_read()?;
        if updated > 0 {
            println!("Marked {} notification(s) as read.", updated);
        }
    }

    Ok(())
}
