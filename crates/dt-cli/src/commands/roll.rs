use std::path::Path;

use colored::Colorize;
use dt_core::{FixedRoll, RollSource, SeededRoller};

use super::Context;

pub fn run(
    ctx: &Context,
    file: &Path,
    seed: Option<u64>,
    result: Option<i64>,
) -> Result<(), String> {
    let roller: Box<dyn RollSource> = match (result, seed) {
        (Some(total), _) => Box::new(FixedRoll(total)),
        (None, Some(seed)) => Box::new(SeededRoller::new(seed)),
        (None, None) => Box::new(SeededRoller::from_config(&ctx.config)),
    };

    let rolled = super::edit_record(ctx, file, roller, |editor, record| {
        editor.roll_activity(record)
    })?;

    // With chat off nothing else reports the roll.
    if !ctx.config.chat_on_roll {
        println!(
            "  {} {}: {}",
            "Rolled".bold(),
            rolled.roll.breakdown(),
            rolled.outcome
        );
    }

    Ok(())
}
