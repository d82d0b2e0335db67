//! The parsed translation document and its line-folding builder.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::Result;
use crate::expand;
use crate::registry::ExpanderRegistry;
use crate::scanner;
use crate::utils;
use crate::version::LangVersion;

/// The `lang_id` root-scope field name.
pub const LANG_ID_FIELD: &str = "lang_id";
/// The `lang_desc` root-scope field name.
pub const LANG_DESC_FIELD: &str = "lang_desc";
/// The `lang_ver` root-scope field name.
pub const LANG_VER_FIELD: &str = "lang_ver";

/// One named group of translations: field name to stored (raw) value.
pub type Section = BTreeMap<String, String>;

/// A fully parsed borr document.
///
/// A borr file is a pseudo-ini translation format. Fields before the first
/// section header form the root scope, where only `lang_id`, `lang_desc`
/// and `lang_ver` are recognized; every later field belongs to the most
/// recent `[section]`. Parsing is permissive: lines that match nothing are
/// skipped, and a document missing its metadata still parses (callers check
/// the accessors themselves).
///
/// A document is populated once by [`Document::parse`] and read-only
/// afterwards; every parse yields an independent owned value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    lang_id: String,
    lang_description: String,
    lang_version: LangVersion,
    sections: BTreeMap<String, Section>,
}

/// A line the permissive parser skipped, reported by
/// [`Document::parse_with_warnings`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    /// 1-based line number.
    pub line: usize,
    pub message: String,
}

impl Document {
    /// Parses a complete borr document.
    ///
    /// The only fatal condition is a present but malformed `lang_ver`
    /// value, which aborts the whole parse; see
    /// [`Error::MalformedVersion`](crate::error::Error::MalformedVersion).
    pub fn parse(text: &str) -> Result<Self> {
        Ok(Self::parse_with_warnings(text)?.0)
    }

    /// Like [`Document::parse`], but also reports every line the grammar
    /// silently ignored. Warning collection never changes what is parsed.
    pub fn parse_with_warnings(text: &str) -> Result<(Self, Vec<ParseWarning>)> {
        let mut builder = Builder::default();
        for (idx, line) in text.split('\n').enumerate() {
            builder.line(idx + 1, line)?;
        }
        Ok((builder.document, builder.warnings))
    }

    pub fn lang_id(&self) -> &str {
        &self.lang_id
    }

    pub fn lang_description(&self) -> &str {
        &self.lang_description
    }

    pub fn lang_version(&self) -> LangVersion {
        self.lang_version
    }

    /// All sections, in name order.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections
            .iter()
            .map(|(name, section)| (name.as_str(), section))
    }

    /// Direct section lookup. Values are raw; nothing is expanded.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// The stored value of a field, without variable expansion.
    pub fn raw_field(&self, section: &str, field: &str) -> Option<&str> {
        self.sections
            .get(section)?
            .get(field)
            .map(String::as_str)
    }

    /// The fully expanded value of a field, resolved against the
    /// process-wide [`ExpanderRegistry::global`] table.
    ///
    /// A missing section or field is `Ok(None)`, never an error.
    pub fn field(&self, section: &str, field: &str) -> Result<Option<String>> {
        self.field_with(ExpanderRegistry::global(), section, field)
    }

    /// The fully expanded value of a field, resolved against an injected
    /// registry. Lets tests and embedders use isolated expander sets.
    pub fn field_with(
        &self,
        registry: &ExpanderRegistry,
        section: &str,
        field: &str,
    ) -> Result<Option<String>> {
        self.field_at(registry, section, field, 0)
    }

    pub(crate) fn field_at(
        &self,
        registry: &ExpanderRegistry,
        section: &str,
        field: &str,
        depth: usize,
    ) -> Result<Option<String>> {
        match self.raw_field(section, field) {
            Some(raw) => expand::expand_at(self, registry, Some(section), raw, depth).map(Some),
            None => Ok(None),
        }
    }

    /// Renders the document back to borr source.
    ///
    /// Values stay raw (variables are not expanded), multiline values
    /// become repeated `name[]` lines, and quotes and backslashes are
    /// re-escaped, so parsing the output yields an equal document.
    pub fn to_source(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "{LANG_ID_FIELD} = \"{}\"\n",
            utils::escape_value(&self.lang_id)
        ));
        out.push_str(&format!(
            "{LANG_DESC_FIELD} = \"{}\"\n",
            utils::escape_value(&self.lang_description)
        ));
        out.push_str(&format!("{LANG_VER_FIELD} = \"{}\"\n", self.lang_version));

        for (name, section) in &self.sections {
            out.push_str(&format!("\n[{name}]\n"));
            for (field, value) in section {
                if value.contains('\n') {
                    for part in value.split('\n') {
                        out.push_str(&format!(
                            "{field}[] = \"{}\"\n",
                            utils::escape_value(part)
                        ));
                    }
                } else {
                    out.push_str(&format!(
                        "{field} = \"{}\"\n",
                        utils::escape_value(value)
                    ));
                }
            }
        }

        out
    }
}

/// Folds lines into a [`Document`], tracking the current section.
#[derive(Default)]
struct Builder {
    document: Document,
    current_section: Option<String>,
    warnings: Vec<ParseWarning>,
}

impl Builder {
    fn line(&mut self, number: usize, line: &str) -> Result<()> {
        if scanner::is_empty_or_comment(line) {
            return Ok(());
        }

        let line = scanner::remove_inline_comments(line);

        // A section header only switches scope; it carries no field data.
        if let Some(name) = scanner::section_name(line) {
            self.current_section = Some(name.to_string());
            return Ok(());
        }

        let Some((field, value)) = scanner::translation(line) else {
            self.warn(number, "unrecognized line skipped");
            return Ok(());
        };

        let Some(section_name) = self.current_section.clone() else {
            return self.root_field(number, &field, value);
        };

        let key = scanner::base_field_name(&field).to_string();
        let section = self.document.sections.entry(section_name).or_default();
        match section.get_mut(&key) {
            Some(existing) if scanner::is_multiline_field(&field) => {
                existing.push('\n');
                existing.push_str(&value);
            }
            // Last write wins for duplicate single-line fields.
            _ => {
                section.insert(key, value);
            }
        }

        Ok(())
    }

    /// Root scope recognizes the three metadata fields and nothing else.
    fn root_field(&mut self, number: usize, field: &str, value: String) -> Result<()> {
        match field {
            LANG_ID_FIELD => self.document.lang_id = value,
            LANG_DESC_FIELD => self.document.lang_description = value,
            LANG_VER_FIELD => self.document.lang_version = value.parse()?,
            _ => self.warn(number, "field outside any section ignored"),
        }
        Ok(())
    }

    fn warn(&mut self, line: usize, message: &str) {
        self.warnings.push(ParseWarning {
            line,
            message: message.to_string(),
        });
    }
}
