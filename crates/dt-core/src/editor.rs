//! The activity editor.
//!
//! [`ActivityEditor`] is the surface a sheet or command line drives: it rolls
//! an activity, marks it complete, and adds, removes or edits outcome ranges.
//! Its collaborators are injected at construction so it can run against a
//! real host, a terminal, or a test harness alike:
//!
//! - a [`RollSource`] that turns the activity's die expression into a number,
//! - a [`Notifier`] for chat messages and error notices,
//! - a [`Localizer`] for every user-facing string.
//!
//! Every operation either applies completely or leaves the record untouched.
//! Errors are posted to the notifier and returned to the caller.

use crate::activity::ActivityRecord;
use crate::config::EditorConfig;
use crate::dice::DiceRoll;
use crate::error::{EditorError, EditorResult};
use crate::i18n::{Localizer, MessageKey};
use crate::notify::{ChatMessage, Notification, Notifier};
use crate::outcome::{OutcomeRange, check_bound, resolve};
use crate::roller::RollSource;

/// What a successful roll produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollOutcome {
    /// The raw roll.
    pub roll: DiceRoll,
    /// Index of the matching range, if any.
    pub matched: Option<usize>,
    /// The outcome text written to the record.
    pub outcome: String,
}

impl RollOutcome {
    /// The roll total.
    pub fn total(&self) -> i64 {
        self.roll.total
    }
}

/// Changes to one outcome range. `None` fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutcomeEdit {
    /// New lower bound.
    pub min_roll: Option<i64>,
    /// New upper bound.
    pub max_roll: Option<i64>,
    /// New text.
    pub description: Option<String>,
}

/// Changes to an activity's top-level fields. `None` fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldEdit {
    /// New name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New duration.
    pub duration: Option<String>,
    /// New cost.
    pub cost: Option<String>,
    /// New roll expression.
    pub roll_expression: Option<String>,
}

impl FieldEdit {
    /// Whether the edit changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.duration.is_none()
            && self.cost.is_none()
            && self.roll_expression.is_none()
    }
}

/// Rolls, completes and edits activity records.
pub struct ActivityEditor<R, N, L> {
    roller: R,
    notifier: N,
    localizer: L,
    config: EditorConfig,
}

impl<R: RollSource, N: Notifier, L: Localizer> ActivityEditor<R, N, L> {
    /// Create an editor with the default configuration.
    pub fn new(roller: R, notifier: N, localizer: L) -> Self {
        Self::with_config(roller, notifier, localizer, EditorConfig::default())
    }

    /// Create an editor with an explicit configuration.
    pub fn with_config(roller: R, notifier: N, localizer: L, config: EditorConfig) -> Self {
        Self {
            roller,
            notifier,
            localizer,
            config,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Get the notifier.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Roll the activity's die expression and record the matching outcome.
    ///
    /// Fails with [`EditorError::MissingRollExpression`] when the expression is
    /// blank and with [`EditorError::RollEvaluation`] when the roll source
    /// fails; in both cases the record is unchanged. A roll outside every
    /// range is not an error: the localized "no outcome" text is recorded.
    pub fn roll_activity(&mut self, record: &mut ActivityRecord) -> EditorResult<RollOutcome> {
        let expression = record.roll_expression.trim().to_string();
        if expression.is_empty() {
            return Err(self.reject(EditorError::MissingRollExpression));
        }

        let roll = match self.roller.roll(&expression) {
            Ok(roll) => roll,
            Err(e) => return Err(self.reject(e.into())),
        };

        let resolution = resolve(roll.total, &record.outcomes);
        let matched = resolution.index();
        let outcome = resolution.text_or(self.localizer.localize(MessageKey::OutcomeNone));
        tracing::debug!(total = roll.total, ?matched, "resolved outcome");

        record.current_outcome = outcome.clone();
        record.last_roll = Some(roll.total);
        tracing::info!(activity = %record.name, total = roll.total, "rolled activity");

        if self.config.chat_on_roll {
            let breakdown = roll.breakdown();
            let content = self.localizer.format(
                MessageKey::RollChat,
                &[
                    ("name", record.name.as_str()),
                    ("breakdown", breakdown.as_str()),
                    ("outcome", outcome.as_str()),
                ],
            );
            self.notifier
                .chat(ChatMessage::new(self.config.speaker.clone(), content));
        }

        Ok(RollOutcome {
            roll,
            matched,
            outcome,
        })
    }

    /// Mark the activity complete.
    ///
    /// Idempotent: a record that is already complete stays complete and no
    /// second message is posted.
    pub fn complete_activity(&mut self, record: &mut ActivityRecord) {
        if record.is_complete {
            tracing::debug!(activity = %record.name, "already complete");
            return;
        }
        record.is_complete = true;
        tracing::info!(activity = %record.name, "activity completed");

        let content = self
            .localizer
            .format(MessageKey::Completed, &[("name", record.name.as_str())]);
        self.notifier
            .chat(ChatMessage::new(self.config.speaker.clone(), content.clone()));
        self.notifier.notify(Notification::info(content));
    }

    /// Append a 1-20 range with empty text.
    pub fn add_outcome(&mut self, record: &mut ActivityRecord) {
        record.outcomes.push(OutcomeRange::placeholder());
        tracing::debug!(activity = %record.name, len = record.outcomes.len(), "added outcome");
    }

    /// Remove the range at `index`, keeping the others in order.
    pub fn remove_outcome(
        &mut self,
        record: &mut ActivityRecord,
        index: usize,
    ) -> EditorResult<OutcomeRange> {
        self.check_index(record, index)?;
        let removed = record.outcomes.remove(index);
        tracing::debug!(activity = %record.name, index, "removed outcome");
        Ok(removed)
    }

    /// Change the bounds and/or text of the range at `index`.
    ///
    /// Negative bounds are rejected. Inverted bounds are allowed but post a
    /// warning.
    pub fn update_outcome(
        &mut self,
        record: &mut ActivityRecord,
        index: usize,
        edit: OutcomeEdit,
    ) -> EditorResult<()> {
        self.check_index(record, index)?;
        for (field, value) in [("minRoll", edit.min_roll), ("maxRoll", edit.max_roll)] {
            if let Some(Err(e)) = value.map(|v| check_bound(field, v)) {
                return Err(self.reject(e.into()));
            }
        }

        let range = &mut record.outcomes[index];
        if let Some(min) = edit.min_roll {
            range.min_roll = min;
        }
        if let Some(max) = edit.max_roll {
            range.max_roll = max;
        }
        if let Some(text) = edit.description {
            range.description = text;
        }
        if range.is_inverted() {
            let index_text = index.to_string();
            let message = self
                .localizer
                .format(MessageKey::InvertedRange, &[("index", index_text.as_str())]);
            self.notifier.notify(Notification::warning(message));
        }
        tracing::debug!(activity = %record.name, index, "updated outcome");
        Ok(())
    }

    /// Apply edits to the activity's top-level fields.
    pub fn update_fields(&mut self, record: &mut ActivityRecord, edit: FieldEdit) {
        let FieldEdit {
            name,
            description,
            duration,
            cost,
            roll_expression,
        } = edit;
        if let Some(name) = name {
            record.name = name;
        }
        if let Some(description) = description {
            record.description = description;
        }
        if let Some(duration) = duration {
            record.duration = duration;
        }
        if let Some(cost) = cost {
            record.cost = cost;
        }
        if let Some(expr) = roll_expression {
            record.roll_expression = expr;
        }
        tracing::debug!(activity = %record.name, "updated fields");
    }

    /// The localized message for an error.
    pub fn describe(&self, error: &EditorError) -> String {
        match error {
            EditorError::MissingRollExpression => {
                self.localizer.localize(MessageKey::RollMissingExpression)
            }
            EditorError::RollEvaluation(e) => self
                .localizer
                .format(MessageKey::RollError, &[("error", e.to_string().as_str())]),
            EditorError::IndexOutOfRange { index, len } => self.localizer.format(
                MessageKey::IndexOutOfRange,
                &[
                    ("index", index.to_string().as_str()),
                    ("len", len.to_string().as_str()),
                ],
            ),
            EditorError::Validation(e) => self
                .localizer
                .format(MessageKey::InvalidRange, &[("error", e.to_string().as_str())]),
        }
    }

    fn check_index(&mut self, record: &ActivityRecord, index: usize) -> EditorResult<()> {
        let len = record.outcomes.len();
        if index >= len {
            return Err(self.reject(EditorError::IndexOutOfRange { index, len }));
        }
        Ok(())
    }

    /// Post `error` as a notification and hand it back for returning.
    fn reject(&mut self, error: EditorError) -> EditorError {
        tracing::warn!(%error, "operation rejected");
        let message = self.describe(&error);
        self.notifier.notify(Notification::error(message));
        error
    }
}
