use std::path::Path;

use dt_core::SeededRoller;

use super::Context;

pub fn run(ctx: &Context, file: &Path) -> Result<(), String> {
    let roller = SeededRoller::from_config(&ctx.config);
    let already = super::edit_record(ctx, file, roller, |editor, record| {
        let already = record.is_complete;
        editor.complete_activity(record);
        Ok(already)
    })?;

    if already {
        println!("  Already complete.");
    }

    Ok(())
}
