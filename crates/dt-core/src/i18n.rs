//! User-facing text.
//!
//! Every string the editor shows is looked up by [`MessageKey`] through a
//! [`Localizer`]. [`Catalog`] ships English defaults and can overlay a flat
//! JSON object of translations:
//!
//! ```text
//! {
//!     "outcome.none": "Kein Ergebnis gefunden.",
//!     "roll.chat": "{name}: {breakdown} ergibt {outcome}"
//! }
//! ```
//!
//! Placeholders in braces are filled in by [`Localizer::format`].

use std::collections::HashMap;

/// Identifies one user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    /// Shown when a roll lands outside every range.
    OutcomeNone,
    /// The activity has no roll expression.
    RollMissingExpression,
    /// The roll source failed. Placeholder: `error`.
    RollError,
    /// Chat line after a roll. Placeholders: `name`, `breakdown`, `outcome`.
    RollChat,
    /// Activity marked complete. Placeholder: `name`.
    Completed,
    /// Bad outcome index. Placeholders: `index`, `len`.
    IndexOutOfRange,
    /// Range failed validation. Placeholder: `error`.
    InvalidRange,
    /// Range can never match because min is above max. Placeholder: `index`.
    InvertedRange,
}

impl MessageKey {
    /// Every key, in declaration order.
    pub const ALL: [MessageKey; 8] = [
        Self::OutcomeNone,
        Self::RollMissingExpression,
        Self::RollError,
        Self::RollChat,
        Self::Completed,
        Self::IndexOutOfRange,
        Self::InvalidRange,
        Self::InvertedRange,
    ];

    /// Stable dotted identifier used in translation files.
    pub fn id(self) -> &'static str {
        match self {
            Self::OutcomeNone => "outcome.none",
            Self::RollMissingExpression => "roll.missing-expression",
            Self::RollError => "roll.error",
            Self::RollChat => "roll.chat",
            Self::Completed => "activity.completed",
            Self::IndexOutOfRange => "outcome.index-out-of-range",
            Self::InvalidRange => "outcome.invalid",
            Self::InvertedRange => "outcome.inverted",
        }
    }

    /// Look a key up by its identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.id() == id)
    }

    /// English text.
    pub fn default_text(self) -> &'static str {
        match self {
            Self::OutcomeNone => "No outcome found for this roll.",
            Self::RollMissingExpression => "This activity has no roll expression.",
            Self::RollError => "Could not evaluate the roll: {error}",
            Self::RollChat => "{name} rolled {breakdown}: {outcome}",
            Self::Completed => "{name} is complete.",
            Self::IndexOutOfRange => "There is no outcome {index} (the activity has {len}).",
            Self::InvalidRange => "Invalid outcome range: {error}",
            Self::InvertedRange => {
                "Outcome {index} has its minimum above its maximum and can never match."
            }
        }
    }
}

impl std::fmt::Display for MessageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Turns message keys into display text.
pub trait Localizer {
    /// The raw text for `key`, placeholders unfilled.
    fn localize(&self, key: MessageKey) -> String;

    /// The text for `key` with `{name}` placeholders replaced from `args`.
    fn format(&self, key: MessageKey, args: &[(&str, &str)]) -> String {
        args.iter()
            .fold(self.localize(key), |text, (name, value)| {
                text.replace(&format!("{{{name}}}"), value)
            })
    }
}

impl<T: Localizer + ?Sized> Localizer for &T {
    fn localize(&self, key: MessageKey) -> String {
        (**self).localize(key)
    }
}

/// English defaults plus optional overrides.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    overrides: HashMap<MessageKey, String>,
}

impl Catalog {
    /// The built-in English catalog.
    pub fn english() -> Self {
        Self::default()
    }

    /// Overlay a flat `{ "id": "text" }` JSON object on the English defaults.
    ///
    /// Unknown identifiers are skipped.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let raw: HashMap<String, String> = serde_json::from_str(json)?;
        let mut catalog = Self::english();
        for (id, text) in raw {
            match MessageKey::from_id(&id) {
                Some(key) => catalog.set(key, text),
                None => tracing::warn!(id = %id, "ignoring unknown message id"),
            }
        }
        Ok(catalog)
    }

    /// Override the text for one key.
    pub fn set(&mut self, key: MessageKey, text: impl Into<String>) {
        self.overrides.insert(key, text.into());
    }
}

impl Localizer for Catalog {
    fn localize(&self, key: MessageKey) -> String {
        self.overrides
            .get(&key)
            .cloned()
            .unwrap_or_else(|| key.default_text().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for key in MessageKey::ALL {
            assert_eq!(MessageKey::from_id(key.id()), Some(key));
        }
        assert_eq!(MessageKey::from_id("nope"), None);
    }

    #[test]
    fn english_defaults() {
        let c = Catalog::english();
        assert_eq!(
            c.localize(MessageKey::OutcomeNone),
            "No outcome found for this roll."
        );
    }

    #[test]
    fn format_fills_placeholders() {
        let c = Catalog::english();
        let text = c.format(
            MessageKey::RollChat,
            &[("name", "Carousing"), ("breakdown", "1d20(4) = 4"), ("outcome", "Hangover")],
        );
        assert_eq!(text, "Carousing rolled 1d20(4) = 4: Hangover");
    }

    #[test]
    fn format_leaves_unknown_placeholders() {
        let c = Catalog::english();
        assert_eq!(c.format(MessageKey::Completed, &[]), "{name} is complete.");
    }

    #[test]
    fn json_overrides_merge_with_defaults() {
        let c = Catalog::from_json(
            r#"{"outcome.none": "Kein Ergebnis.", "made.up": "ignored"}"#,
        )
        .unwrap();
        assert_eq!(c.localize(MessageKey::OutcomeNone), "Kein Ergebnis.");
        assert_eq!(
            c.localize(MessageKey::RollMissingExpression),
            MessageKey::RollMissingExpression.default_text()
        );
    }

    #[test]
    fn json_must_be_flat_strings() {
        assert!(Catalog::from_json(r#"{"outcome.none": 3}"#).is_err());
        assert!(Catalog::from_json("not json").is_err());
    }

    #[test]
    fn set_overrides_one_key() {
        let mut c = Catalog::english();
        c.set(MessageKey::Completed, "Fertig: {name}");
        assert_eq!(
            c.format(MessageKey::Completed, &[("name", "Forge")]),
            "Fertig: Forge"
        );
    }

    #[test]
    fn borrowed_localizer() {
        let c = Catalog::english();
        let r: &Catalog = &c;
        assert_eq!(Localizer::localize(&r, MessageKey::RollChat), c.localize(MessageKey::RollChat));
    }
}
