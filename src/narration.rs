//! Narration text shaping applied before text goes to the speech service.
//!
//! The speech model paces itself from punctuation, so pause length is
//! controlled by rewriting it: stripping separators to run sentences
//! together, or padding them with ellipses and blank lines to slow down.

use std::sync::OnceLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

/// How strongly punctuation should translate into pauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PauseStrength {
    /// Remove pause-inducing separators and line breaks
    None,
    /// Leave the text as written
    #[default]
    Normal,
    /// Lengthen clause and sentence pauses
    Strong,
}

fn separators() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[,;:\-]").expect("valid separator pattern"))
}

fn line_breaks() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\n\r]+").expect("valid line break pattern"))
}

fn whitespace_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace pattern"))
}

/// Clause marks and sentence ends, each with trailing whitespace.
fn pause_marks() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([,;])\s*|([.?!])\s*").expect("valid pause mark pattern"))
}

/// Rewrite `text` for the given pause strength.
///
/// - `None`: `,` `;` `:` `-` and line breaks become spaces, whitespace runs
///   collapse to one space, and the ends are trimmed.
/// - `Strong`: a clause mark (`,` `;`) and the whitespace after it become the
///   mark followed by `" ... "`; a sentence end (`.` `?` `!`) and its
///   whitespace become the mark followed by `" \n\n"`. Inserted ellipses are
///   not rewritten again.
/// - `Normal`: unchanged.
pub fn apply_pause_style(text: &str, strength: PauseStrength) -> String {
    match strength {
        PauseStrength::None => {
            let text = separators().replace_all(text, " ");
            let text = line_breaks().replace_all(&text, " ");
            whitespace_runs().replace_all(&text, " ").trim().to_string()
        }
        PauseStrength::Strong => pause_marks()
            .replace_all(text, |caps: &Captures| match (caps.get(1), caps.get(2)) {
                (Some(clause), _) => format!("{} ... ", clause.as_str()),
                (_, Some(sentence)) => format!("{} \n\n", sentence.as_str()),
                _ => String::new(),
            })
            .into_owned(),
        PauseStrength::Normal => text.to_string(),
    }
}
