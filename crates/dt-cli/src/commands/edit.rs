use std::path::Path;

use dt_core::{FieldEdit, SeededRoller};

use super::Context;

pub fn run(ctx: &Context, file: &Path, edit: FieldEdit) -> Result<(), String> {
    if edit.is_empty() {
        return Err(
            "nothing to change (pass --name, --description, --duration, --cost or --roll)".into(),
        );
    }

    let roller = SeededRoller::from_config(&ctx.config);
    super::edit_record(ctx, file, roller, |editor, record| {
        editor.update_fields(record, edit);
        Ok(())
    })?;

    println!("  Updated {}", file.display());
    Ok(())
}
