// Rust guideline compliant 2026-10-14

//! Record codec for artwork content files.
//!
//! A record is a Markdown file with a front-matter header followed by a
//! free-text body. Parsing happens in two phases: the header block is split
//! from the body on the delimiter lines, then every header line is parsed
//! into a key/value pair.
//!
//! ```text
//! record      = delimiter NL *( header-line NL ) delimiter [ NL body ]
//! delimiter   = "---"
//! header-line = key ":" [ WSP *WSP value ] *( NL block-item )
//! key         = ( ALPHA / DIGIT / "_" ) *( ALPHA / DIGIT / "_" / "-" )
//! block-item  = *WSP "-" WSP token
//! value       = dquoted / squoted / list / boolean / plain
//! dquoted     = DQUOTE *( escape / dchar ) DQUOTE [ comment ]
//! escape      = "\" ( DQUOTE / "\" / "n" / "r" )
//! dchar       = any char except DQUOTE, "\" and NL
//! squoted     = "'" *( "''" / schar ) "'" [ comment ]
//! schar       = any char except "'" and NL
//! list        = "[" [ token *( "," *WSP token ) ] "]"
//! boolean     = "true" / "false"
//! plain       = rest of the line up to a comment, whitespace trimmed
//! comment     = 1*WSP "#" *char
//! ```
//!
//! Blank lines, `#` comment lines and lines that are not `key: value` are
//! skipped, so hand-edited records the site generator accepts still read.
//! A recognised key with a malformed quoted value or list is an error. Text
//! values are written quoted whenever the plain form would not read back as
//! the same text.

use crate::{Error, Result};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Delimiter line that opens and closes the header block.
pub const DELIMITER: &str = "---";

/// A single header value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Free text.
    Text(String),
    /// `true` or `false`.
    Bool(bool),
    /// Bracketed list of bare tokens.
    List(Vec<String>),
}

impl FieldValue {
    /// Returns the text content, if this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Returns the boolean content, if this is a boolean value.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the list items, if this is a list value.
    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Short name of the value kind, used in diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Bool(_) => "boolean",
            FieldValue::List(_) => "list",
        }
    }

    fn render(&self) -> String {
        match self {
            FieldValue::Text(text) => escape_text(text),
            FieldValue::Bool(value) => value.to_string(),
            FieldValue::List(items) => format!("[{}]", items.join(", ")),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::List(value)
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            FieldValue::Text(text) => serializer.serialize_str(text),
            FieldValue::Bool(value) => serializer.serialize_bool(*value),
            FieldValue::List(items) => items.serialize(serializer),
        }
    }
}

/// Ordered header fields of a record.
///
/// Keys keep their insertion order so a written record reads the same way
/// it was assembled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    fields: Vec<(String, FieldValue)>,
}

impl Header {
    /// Creates an empty header.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a field, replacing any previous value for the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    /// Returns the value for a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// Returns the text value for a key, if present and textual.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(FieldValue::as_text)
    }

    /// Returns true if the key is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterates over fields in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if there are no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for Header {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// A parsed record: header fields plus body text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    /// Header fields.
    pub header: Header,
    /// Body text, trimmed. Empty when the record has no body.
    pub body: String,
}

impl Record {
    /// Creates a record from a header and a body.
    #[must_use]
    pub fn new(header: Header, body: impl Into<String>) -> Self {
        Self {
            header,
            body: body.into(),
        }
    }

    /// Renders the record in its on-disk form.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(DELIMITER);
        out.push('\n');
        for (key, value) in self.header.iter() {
            out.push_str(key);
            out.push_str(": ");
            out.push_str(&value.render());
            out.push('\n');
        }
        out.push_str(DELIMITER);
        out.push('\n');

        let body = self.body.trim();
        if !body.is_empty() {
            out.push_str(body);
            out.push('\n');
        }
        out
    }

    /// Parses a record from its on-disk form.
    ///
    /// # Errors
    ///
    /// Returns `Error::ParseFailure` if:
    /// - The opening or closing delimiter line is missing
    /// - A quoted value on a recognised key is unterminated, uses an unknown
    ///   escape, or is followed by text other than a comment
    /// - An inline list on a recognised key is unterminated
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);

        let mut offset = 0;
        let mut closed = false;
        let mut header_lines = Vec::new();
        for (index, line) in raw.split_inclusive('\n').enumerate() {
            offset += line.len();
            let content = line.trim_end_matches(|c| c == '\n' || c == '\r');
            if index == 0 {
                if content != DELIMITER {
                    return Err(Error::ParseFailure(
                        "missing opening header delimiter".to_string(),
                    ));
                }
                continue;
            }
            if content == DELIMITER {
                closed = true;
                break;
            }
            header_lines.push((index + 1, content));
        }
        if !closed {
            return Err(Error::ParseFailure(
                "missing closing header delimiter".to_string(),
            ));
        }

        let mut header = Header::new();
        let mut block: Option<(String, Vec<String>)> = None;
        for (line_no, content) in header_lines {
            let trimmed = content.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            if let Some(item) = block_item(trimmed) {
                match block.as_mut() {
                    Some((_, items)) => items.extend(item),
                    None => tracing::debug!(line = line_no, "skipping list item outside a list"),
                }
                continue;
            }
            if let Some((key, items)) = block.take() {
                header.insert(key, block_value(items));
            }

            let Some((key, rest)) = split_key(content) else {
                tracing::debug!(line = line_no, "skipping unrecognised header line");
                continue;
            };
            if rest.is_empty() || rest.starts_with('#') {
                block = Some((key.to_string(), Vec::new()));
                continue;
            }
            let value = parse_value(rest)
                .map_err(|msg| Error::ParseFailure(format!("line {line_no}: {msg}")))?;
            header.insert(key, value);
        }
        if let Some((key, items)) = block {
            header.insert(key, block_value(items));
        }

        let body = raw[offset..]
            .trim_start_matches(|c| c == '\n' || c == '\r')
            .trim_end()
            .to_string();

        Ok(Self { header, body })
    }
}

/// Splits `key: rest` off a top-level header line.
///
/// Returns `None` for indented lines and for lines whose prefix is not a
/// valid key followed by `:` and whitespace.
fn split_key(line: &str) -> Option<(&str, &str)> {
    if line.starts_with([' ', '\t']) {
        return None;
    }
    let (key, rest) = line.split_once(':')?;
    let mut chars = key.chars();
    let first = chars.next()?;
    if !(first.is_ascii_alphanumeric() || first == '_')
        || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return None;
    }
    if !(rest.is_empty() || rest.starts_with([' ', '\t'])) {
        return None;
    }
    Some((key, rest.trim()))
}

/// Returns the item of a `- item` line, `Some(None)` for a bare `-`.
fn block_item(trimmed: &str) -> Option<Option<String>> {
    let rest = trimmed.strip_prefix('-')?;
    if !(rest.is_empty() || rest.starts_with([' ', '\t'])) {
        return None;
    }
    let item = strip_comment(rest)
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .to_string();
    Some((!item.is_empty()).then_some(item))
}

/// A key with no inline value reads as a list when items follow it and as
/// empty text otherwise.
fn block_value(items: Vec<String>) -> FieldValue {
    if items.is_empty() {
        FieldValue::Text(String::new())
    } else {
        FieldValue::List(items)
    }
}

fn strip_comment(raw: &str) -> &str {
    match raw.find(" #").or_else(|| raw.find("\t#")) {
        Some(index) => &raw[..index],
        None => raw,
    }
}

fn parse_value(raw: &str) -> std::result::Result<FieldValue, String> {
    if let Some(rest) = raw.strip_prefix('"') {
        return parse_double_quoted(rest).map(FieldValue::Text);
    }
    if let Some(rest) = raw.strip_prefix('\'') {
        return parse_single_quoted(rest).map(FieldValue::Text);
    }

    let raw = strip_comment(raw).trim_end();
    if let Some(inner) = raw.strip_prefix('[') {
        let inner = inner
            .strip_suffix(']')
            .ok_or_else(|| "unterminated list".to_string())?;
        let items = inner
            .split(',')
            .map(|item| item.trim().trim_matches(|c| c == '"' || c == '\''))
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect();
        return Ok(FieldValue::List(items));
    }

    match raw {
        "true" => Ok(FieldValue::Bool(true)),
        "false" => Ok(FieldValue::Bool(false)),
        _ => Ok(FieldValue::Text(raw.to_string())),
    }
}

fn parse_double_quoted(rest: &str) -> std::result::Result<String, String> {
    let mut out = String::new();
    let mut chars = rest.char_indices();
    while let Some((index, c)) = chars.next() {
        match c {
            '"' => {
                ensure_trailing_blank(&rest[index + 1..])?;
                return Ok(out);
            }
            '\\' => match chars.next() {
                Some((_, '"')) => out.push('"'),
                Some((_, '\\')) => out.push('\\'),
                Some((_, 'n')) => out.push('\n'),
                Some((_, 'r')) => out.push('\r'),
                Some((_, other)) => return Err(format!("unknown escape `\\{other}`")),
                None => break,
            },
            _ => out.push(c),
        }
    }
    Err("unterminated quoted value".to_string())
}

fn parse_single_quoted(rest: &str) -> std::result::Result<String, String> {
    let mut out = String::new();
    let mut chars = rest.char_indices().peekable();
    while let Some((index, c)) = chars.next() {
        if c != '\'' {
            out.push(c);
            continue;
        }
        if matches!(chars.peek(), Some((_, '\''))) {
            chars.next();
            out.push('\'');
            continue;
        }
        ensure_trailing_blank(&rest[index + 1..])?;
        return Ok(out);
    }
    Err("unterminated quoted value".to_string())
}

fn ensure_trailing_blank(tail: &str) -> std::result::Result<(), String> {
    let tail = tail.trim();
    if tail.is_empty() || tail.starts_with('#') {
        Ok(())
    } else {
        Err(format!("unexpected text after quoted value: `{tail}`"))
    }
}

/// Leading characters the site generator's YAML reader treats as syntax.
const YAML_INDICATORS: [char; 13] = [
    '[', ']', '{', '}', '\'', '&', '*', '!', '|', '>', '%', '@', '`',
];

/// Returns true if a text value must be quoted to read back unchanged.
#[must_use]
pub fn needs_quotes(text: &str) -> bool {
    text.is_empty()
        || text.contains([':', '\n', '\r', '"', '#', '\\'])
        || text.trim() != text
        || text.starts_with(YAML_INDICATORS)
        || text.starts_with("- ")
        || text == "-"
        || reads_as_scalar(text)
}

/// True for text a YAML 1.2 core-schema reader would load as a boolean,
/// null or number instead of a string.
fn reads_as_scalar(text: &str) -> bool {
    let lower = text.to_ascii_lowercase();
    let unsigned = lower.trim_start_matches(['+', '-']);
    matches!(lower.as_str(), "true" | "false" | "null" | "~")
        || matches!(unsigned, ".inf" | ".nan")
        || unsigned.starts_with("0x")
        || unsigned.starts_with("0o")
        || text.parse::<f64>().is_ok()
}

/// Escapes a text value for a header line.
///
/// Values that are safe as plain text are returned unchanged. Others are
/// wrapped in double quotes with `"`, `\`, and line breaks backslash-escaped.
#[must_use]
pub fn escape_text(text: &str) -> String {
    if !needs_quotes(text) {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain_value_unchanged() {
        assert_eq!(escape_text("צבעי מים"), "צבעי מים");
        assert_eq!(escape_text("₪200"), "₪200");
    }

    #[test]
    fn test_escape_quotes_reserved_characters() {
        assert_eq!(escape_text("a: b"), "\"a: b\"");
        assert_eq!(escape_text("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(escape_text("#1"), "\"#1\"");
        assert_eq!(escape_text("two\nlines"), "\"two\\nlines\"");
    }

    #[test]
    fn test_escape_quotes_scalars_that_would_change_type() {
        assert_eq!(escape_text("2025"), "\"2025\"");
        assert_eq!(escape_text("true"), "\"true\"");
        assert_eq!(escape_text(""), "\"\"");
    }

    #[test]
    fn test_escape_quotes_scalars_in_any_case() {
        for text in ["True", "FALSE", "NULL", "Null", ".inf", "-.Inf", ".NaN", "0x1F", "0o17", "-"] {
            assert_eq!(escape_text(text), format!("\"{text}\""), "{text} should be quoted");
        }
        assert_eq!(escape_text("Truely"), "Truely");
        assert_eq!(escape_text("-x"), "-x");
    }

    #[test]
    fn test_parse_value_kinds() {
        let raw = "---\nsold: false\nsubjects: [sea, urban]\nyear: \"2025\"\nsize: 30 × 40 cm\n---\n";
        let record = Record::parse(raw).unwrap();
        assert_eq!(record.header.get("sold"), Some(&FieldValue::Bool(false)));
        assert_eq!(
            record.header.get("subjects"),
            Some(&FieldValue::List(vec!["sea".to_string(), "urban".to_string()]))
        );
        assert_eq!(record.header.text("year"), Some("2025"));
        assert_eq!(record.header.text("size"), Some("30 × 40 cm"));
        assert_eq!(record.body, "");
    }

    #[test]
    fn test_parse_single_quoted_value() {
        let record = Record::parse("---\ntitle: 'it''s: here'\n---\n").unwrap();
        assert_eq!(record.header.text("title"), Some("it's: here"));
    }

    #[test]
    fn test_parse_empty_list() {
        let record = Record::parse("---\nsubjects: []\n---\n").unwrap();
        assert_eq!(record.header.get("subjects"), Some(&FieldValue::List(vec![])));
    }

    #[test]
    fn test_parse_crlf_record() {
        let record = Record::parse("---\r\ntitle: Sea\r\n---\r\nBody\r\n").unwrap();
        assert_eq!(record.header.text("title"), Some("Sea"));
        assert_eq!(record.body, "Body");
    }

    #[test]
    fn test_parse_missing_opening_delimiter() {
        let err = Record::parse("title: Sea\n---\n").unwrap_err();
        assert!(matches!(err, Error::ParseFailure(_)));
    }

    #[test]
    fn test_parse_missing_closing_delimiter() {
        let err = Record::parse("---\ntitle: Sea\n").unwrap_err();
        assert!(matches!(err, Error::ParseFailure(_)));
    }

    #[test]
    fn test_parse_rejects_unterminated_quote() {
        let err = Record::parse("---\ntitle: \"Sea\n---\n").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_parse_skips_unrecognised_lines() {
        let raw = "---\n# draft\njust text\ntitle: Sea\n  nested: value\nhttp://x\n---\n";
        let record = Record::parse(raw).unwrap();
        assert_eq!(record.header.len(), 1);
        assert_eq!(record.header.text("title"), Some("Sea"));
    }

    #[test]
    fn test_parse_block_list() {
        let raw = "---\nsubjects:\n  - sea\n  # later\n  - \"urban\"\ntitle: Sea\ndescription:\n---\n";
        let record = Record::parse(raw).unwrap();
        assert_eq!(
            record.header.get("subjects"),
            Some(&FieldValue::List(vec!["sea".to_string(), "urban".to_string()]))
        );
        assert_eq!(record.header.text("title"), Some("Sea"));
        assert_eq!(record.header.text("description"), Some(""));
    }

    #[test]
    fn test_parse_hyphenated_key_and_trailing_comments() {
        let raw = "---\nalt-text: boat # shown on hover\nyear: \"2025\" # approx\nsold: false # for now\n---\n";
        let record = Record::parse(raw).unwrap();
        assert_eq!(record.header.text("alt-text"), Some("boat"));
        assert_eq!(record.header.text("year"), Some("2025"));
        assert_eq!(record.header.get("sold"), Some(&FieldValue::Bool(false)));
    }

    #[test]
    fn test_parse_rejects_malformed_value_on_known_key() {
        let err = Record::parse("---\ntitle: \"Sea\" trailing\n---\n").unwrap_err();
        assert!(err.to_string().contains("line 2"));
        let err = Record::parse("---\nsubjects: [sea, urban\n---\n").unwrap_err();
        assert!(matches!(err, Error::ParseFailure(_)));
    }

    #[test]
    fn test_header_insert_replaces_in_place() {
        let mut header = Header::new();
        header.insert("title", "One");
        header.insert("price", "₪1");
        header.insert("title", "Two");
        let keys: Vec<&str> = header.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["title", "price"]);
        assert_eq!(header.text("title"), Some("Two"));
    }

    #[test]
    fn test_render_without_body() {
        let mut header = Header::new();
        header.insert("title", "Sea");
        header.insert("sold", false);
        let rendered = Record::new(header, "  ").render();
        assert_eq!(rendered, "---\ntitle: Sea\nsold: false\n---\n");
    }

    #[test]
    fn test_render_with_body_round_trips() {
        let mut header = Header::new();
        header.insert("title", "Sea: at night");
        let record = Record::new(header, "\nA quiet harbour.\n");
        let parsed = Record::parse(&record.render()).unwrap();
        assert_eq!(parsed.header.text("title"), Some("Sea: at night"));
        assert_eq!(parsed.body, "A quiet harbour.");
    }
}
