pub mod complete;
pub mod edit;
pub mod list;
pub mod new;
pub mod outcome;
pub mod roll;
pub mod show;

use std::fs;
use std::path::Path;

use colored::Colorize;
use dt_core::{
    ActivityEditor, ActivityRecord, Catalog, EditorConfig, EditorResult, MessageLog, NoticeLevel,
    RollSource,
};

use crate::store;

/// Settings shared by every command that drives the editor.
pub struct Context {
    pub catalog: Catalog,
    pub config: EditorConfig,
}

impl Context {
    /// Build the context from global flags.
    pub fn load(lang: Option<&Path>, speaker: Option<String>, chat: bool) -> Result<Self, String> {
        let catalog = match lang {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .map_err(|e| format!("cannot read '{}': {e}", path.display()))?;
                Catalog::from_json(&json)
                    .map_err(|e| format!("invalid message file '{}': {e}", path.display()))?
            }
            None => Catalog::english(),
        };

        let mut config = EditorConfig::default().with_chat_on_roll(chat);
        if let Some(speaker) = speaker {
            config = config.with_speaker(speaker);
        }

        Ok(Self { catalog, config })
    }
}

type Editor<'a, R> = ActivityEditor<R, &'a mut MessageLog, &'a Catalog>;

/// Load the activity at `path`, run `op` on it, and save it back if `op`
/// succeeded. Chat messages and warnings are printed; errors come back as
/// their localized text.
fn edit_record<R, T, F>(ctx: &Context, path: &Path, roller: R, op: F) -> Result<T, String>
where
    R: RollSource,
    F: for<'a> FnOnce(&mut Editor<'a, R>, &mut ActivityRecord) -> EditorResult<T>,
{
    let mut record = store::load(path)?;
    let mut log = MessageLog::new();

    let result = {
        let mut editor =
            ActivityEditor::with_config(roller, &mut log, &ctx.catalog, ctx.config.clone());
        op(&mut editor, &mut record)
    };

    match result {
        Ok(value) => {
            store::save(path, &record)?;
            print_log(&log);
            Ok(value)
        }
        Err(e) => Err(log
            .last_error()
            .map(|n| n.message.clone())
            .unwrap_or_else(|| e.to_string())),
    }
}

/// Print chat messages and warnings posted during a command.
fn print_log(log: &MessageLog) {
    for chat in log.chats() {
        println!("  {}: {}", chat.speaker.bold(), chat.content);
    }
    for notice in log.notices() {
        if notice.level == NoticeLevel::Warning {
            println!("  {}", notice.message.yellow());
        }
    }
}
