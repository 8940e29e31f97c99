//! Section labels of a documents bundle.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A bundle section: language code mapped to the section label in that
/// language, e.g. `{"en": "Articles", "pt": "Artigos"}`.
///
/// Equality is structural and ignores key order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Section(IndexMap<String, String>);

impl Section {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Adds (or replaces) the label for a language.
    pub fn with_label(mut self, language: impl Into<String>, label: impl Into<String>) -> Self {
        self.0.insert(language.into(), label.into());
        self
    }

    pub fn label(&self, language: &str) -> Option<&str> {
        self.0.get(language).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Reads a section from raw manifest data.
    ///
    /// Returns `None` unless the value is an object whose values are all strings.
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        object
            .iter()
            .map(|(language, label)| Some((language.clone(), label.as_str()?.to_string())))
            .collect::<Option<IndexMap<_, _>>>()
            .map(Self)
    }

    pub fn to_value(&self) -> Value {
        let object: Map<String, Value> = self
            .0
            .iter()
            .map(|(language, label)| (language.clone(), Value::String(label.clone())))
            .collect();
        Value::Object(object)
    }
}

impl<K, V> FromIterator<(K, V)> for Section
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Renders `{'en': 'Articles', 'pt': 'Artigos'}`. Error messages embed this
/// form and consumers match on it.
impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (position, (language, label)) in self.0.iter().enumerate() {
            if position > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", quoted(language), quoted(label))?;
        }
        write!(f, "}}")
    }
}

/// Quotes `text` as a mapping literal string: single quotes unless the text
/// holds a `'` and no `"`, with non-printable characters escaped.
fn quoted(text: &str) -> String {
    let quote = if text.contains('\'') && !text.contains('"') { '"' } else { '\'' };

    let mut out = String::with_capacity(text.len() + 2);
    out.push(quote);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if is_printable(c) => out.push(c),
            c => {
                let code = u32::from(c);
                if code < 0x100 {
                    out.push_str(&format!("\\x{:02x}", code));
                } else if code < 0x1_0000 {
                    out.push_str(&format!("\\u{:04x}", code));
                } else {
                    out.push_str(&format!("\\U{:08x}", code));
                }
            }
        }
    }
    out.push(quote);
    out
}

/// Space is the only printable separator. Control and invisible format
/// characters are escaped.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    !(c.is_control()
        || c.is_whitespace()
        || matches!(c, '\u{ad}' | '\u{200b}'..='\u{200f}' | '\u{2060}'..='\u{2064}' | '\u{feff}'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn articles() -> Section {
        Section::new()
            .with_label("en", "Articles")
            .with_label("pt", "Artigos")
    }

    #[test]
    fn display_renders_mapping_literal() {
        assert_eq!(articles().to_string(), "{'en': 'Articles', 'pt': 'Artigos'}");
    }

    #[test]
    fn display_switches_to_double_quotes_for_apostrophes() {
        let section = Section::new().with_label("en", "Editor's note");
        assert_eq!(section.to_string(), r#"{'en': "Editor's note"}"#);
    }

    #[test]
    fn display_escapes_single_quote_when_both_quotes_present() {
        let section = Section::new().with_label("en", r#"Editor's "note""#);
        assert_eq!(section.to_string(), r#"{'en': 'Editor\'s "note"'}"#);
    }

    #[test]
    fn display_escapes_control_characters() {
        let section = Section::new().with_label("en", "a\nb\tc\u{1}");
        assert_eq!(section.to_string(), r"{'en': 'a\nb\tc\x01'}");
    }

    #[test]
    fn display_escapes_backslashes_and_keeps_accents() {
        let section = Section::new().with_label("pt", "Artigos\\Resenhas É");
        assert_eq!(section.to_string(), r"{'pt': 'Artigos\\Resenhas É'}");
    }

    #[test]
    fn display_escapes_non_breaking_space() {
        let section = Section::new().with_label("en", "a\u{a0}b\u{2028}");
        assert_eq!(section.to_string(), r"{'en': 'a\xa0b\u2028'}");
    }

    #[test]
    fn equality_ignores_key_order() {
        let reversed = Section::new()
            .with_label("pt", "Artigos")
            .with_label("en", "Articles");
        assert_eq!(articles(), reversed);
    }

    #[test]
    fn from_value_reads_string_objects() {
        let section = Section::from_value(&json!({"en": "Articles", "pt": "Artigos"})).unwrap();
        assert_eq!(section, articles());
        assert_eq!(section.label("pt"), Some("Artigos"));
    }

    #[test]
    fn from_value_rejects_non_string_labels() {
        assert!(Section::from_value(&json!({"en": 1})).is_none());
        assert!(Section::from_value(&json!(["en", "Articles"])).is_none());
    }

    #[test]
    fn to_value_matches_serde_representation() {
        let section = articles();
        assert_eq!(section.to_value(), serde_json::to_value(&section).unwrap());
    }

    #[test]
    fn collects_from_pairs() {
        let section: Section = [("en", "Articles"), ("pt", "Artigos")].into_iter().collect();
        assert_eq!(section, articles());
        assert_eq!(section.len(), 2);
    }
}
