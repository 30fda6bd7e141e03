use std::path::Path;

use dt_core::{OutcomeEdit, SeededRoller};

use super::Context;

pub fn add(ctx: &Context, file: &Path) -> Result<(), String> {
    let roller = SeededRoller::from_config(&ctx.config);
    let len = super::edit_record(ctx, file, roller, |editor, record| {
        editor.add_outcome(record);
        Ok(record.outcomes.len())
    })?;

    println!("  Added outcome {} (1-20)", len - 1);
    Ok(())
}

pub fn remove(ctx: &Context, file: &Path, index: usize) -> Result<(), String> {
    let roller = SeededRoller::from_config(&ctx.config);
    let removed = super::edit_record(ctx, file, roller, |editor, record| {
        editor.remove_outcome(record, index)
    })?;

    println!(
        "  Removed outcome {index} ({}-{})",
        removed.min_roll, removed.max_roll
    );
    Ok(())
}

pub fn set(ctx: &Context, file: &Path, index: usize, edit: OutcomeEdit) -> Result<(), String> {
    if edit == OutcomeEdit::default() {
        return Err("nothing to change (pass --min, --max or --text)".into());
    }

    let roller = SeededRoller::from_config(&ctx.config);
    let range = super::edit_record(ctx, file, roller, |editor, record| {
        editor.update_outcome(record, index, edit)?;
        Ok(record.outcomes[index].clone())
    })?;

    println!(
        "  Outcome {index}: {}-{} {}",
        range.min_roll, range.max_roll, range.description
    );
    Ok(())
}
