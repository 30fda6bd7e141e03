use std::path::Path;

use comfy_table::{ContentArrangement, Table};

use crate::store;

pub fn run(dir: &Path) -> Result<(), String> {
    let activities = store::scan(dir)?;

    if activities.is_empty() {
        println!("  No activities found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "File", "Roll", "Status", "Current outcome"]);

    for (path, record) in &activities {
        let file = path
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_default();
        let status = if record.is_complete {
            "complete"
        } else {
            "in progress"
        };
        let outcome = if record.current_outcome.chars().count() > 50 {
            let cut: String = record.current_outcome.chars().take(47).collect();
            format!("{cut}...")
        } else if record.current_outcome.is_empty() {
            "—".to_string()
        } else {
            record.current_outcome.clone()
        };
        table.add_row(vec![
            record.name.clone(),
            file,
            record.roll_expression.clone(),
            status.to_string(),
            outcome,
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} activities", activities.len());

    Ok(())
}
