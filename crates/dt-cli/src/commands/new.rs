use std::path::Path;

use dt_core::ActivityRecord;

use crate::store;

pub fn run(file: &Path, name: &str, roll: Option<&str>, force: bool) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("activity name must not be empty".into());
    }

    let mut record = ActivityRecord::new(name.trim());
    if let Some(expr) = roll {
        record.roll_expression = expr.trim().to_string();
    }

    store::create(file, &record, force)?;

    println!(
        "  Created activity '{}' in {}",
        record.name,
        file.display()
    );
    println!(
        "  Roll {} with {} outcome ranges",
        record.roll_expression,
        record.outcomes.len()
    );

    Ok(())
}
