//! Downtime activities for tabletop campaigns.
//!
//! A downtime activity is something a character does between adventures:
//! a description, a duration and cost, a die expression, and an ordered list
//! of outcome ranges that map the roll onto narrative text. This crate holds
//! the record type, the outcome resolver, a small dice engine, and the
//! [`ActivityEditor`] that front ends drive. Chat output, notifications and
//! user-facing text go through injected traits so the editor can run without
//! any particular host.

/// Activity records and outcome ranges.
pub mod activity;
/// Editor configuration.
pub mod config;
/// Dice formulas and roll results.
pub mod dice;
/// The activity editor: rolling, completing, and editing records.
pub mod editor;
/// Error types used throughout the crate.
pub mod error;
/// Message keys and the localization catalog.
pub mod i18n;
/// Chat and notification surfaces.
pub mod notify;
/// Outcome resolution over ordered roll ranges.
pub mod outcome;
/// Roll-number sources.
pub mod roller;

pub use activity::ActivityRecord;
pub use config::EditorConfig;
pub use dice::{DiceFormula, DiceParseError, DiceRoll};
pub use editor::{ActivityEditor, FieldEdit, OutcomeEdit, RollOutcome};
pub use error::{EditorError, EditorResult, RollError, ValidationError};
pub use i18n::{Catalog, Localizer, MessageKey};
pub use notify::{ChatMessage, MessageLog, NoticeLevel, Notification, Notifier};
pub use outcome::{OutcomeRange, Resolution, resolve};
pub use roller::{FixedRoll, RollSource, SeededRoller};
