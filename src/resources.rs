//! String, plural and icon resources for the details list
//!
//! Templates use printf-style placeholders (`%d`, `%s`, `%1$d`, `%%`).
//! The built-in bundle is English; a TOML bundle can replace or extend it:
//!
//! ```toml
//! [strings]
//! percentage_format = "%d %%"
//!
//! [plurals.runtime_content_description_format]
//! one = "Runs for %d minute"
//! other = "Runs for %d minutes"
//! ```

use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Resource lookup and formatting errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormattingError {
    #[error("No template for '{0}'")]
    MissingTemplate(&'static str),

    #[error("Template '{key}' expects {placeholder} but got a different argument type")]
    ArgumentMismatch { key: &'static str, placeholder: String },

    #[error("Template '{key}' references argument {index} which was not supplied")]
    MissingArgument { key: &'static str, index: usize },

    #[error("Invalid resource bundle: {0}")]
    Parse(String),

    #[error("Unknown resource key '{0}'")]
    UnknownKey(String),
}

// =============================================================================
// Keys
// =============================================================================

/// Plain string templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringKey {
    PercentageFormat,
    RatingContentDescriptionFormat,
    NetworkContentDescriptionFormat,
    CertificateContentDescriptionFormat,
    MinutesFormat,
    RelatedTitle,
}

impl StringKey {
    pub const ALL: [StringKey; 6] = [
        StringKey::PercentageFormat,
        StringKey::RatingContentDescriptionFormat,
        StringKey::NetworkContentDescriptionFormat,
        StringKey::CertificateContentDescriptionFormat,
        StringKey::MinutesFormat,
        StringKey::RelatedTitle,
    ];

    /// Resource name as used in bundles
    pub fn name(self) -> &'static str {
        match self {
            StringKey::PercentageFormat => "percentage_format",
            StringKey::RatingContentDescriptionFormat => "rating_content_description_format",
            StringKey::NetworkContentDescriptionFormat => "network_content_description_format",
            StringKey::CertificateContentDescriptionFormat => {
                "certificate_content_description_format"
            }
            StringKey::MinutesFormat => "minutes_format",
            StringKey::RelatedTitle => "related_title",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }
}

/// Count-dependent templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralKey {
    RuntimeContentDescriptionFormat,
}

impl PluralKey {
    pub const ALL: [PluralKey; 1] = [PluralKey::RuntimeContentDescriptionFormat];

    pub fn name(self) -> &'static str {
        match self {
            PluralKey::RuntimeContentDescriptionFormat => "runtime_content_description_format",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }
}

/// Badge icons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Rating,
    Network,
    Certificate,
    Runtime,
}

impl Icon {
    /// Terminal glyph for the icon
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Rating => "★",
            Icon::Network => "◉",
            Icon::Certificate => "▣",
            Icon::Runtime => "◷",
        }
    }
}

// =============================================================================
// Template arguments
// =============================================================================

/// A value substituted into a template
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Arg<'a> {
    Int(i64),
    Str(&'a str),
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(v: &'a str) -> Self {
        Arg::Str(v)
    }
}

impl fmt::Display for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Int(v) => write!(f, "{}", v),
            Arg::Str(s) => write!(f, "{}", s),
        }
    }
}

/// Substitute `args` into `template`.
///
/// `%s` accepts any argument, `%d` only integers. Positional placeholders
/// (`%2$s`) don't advance the sequential index.
fn format_template(key: &'static str, template: &str, args: &[Arg]) -> Result<String, FormattingError> {
    let re = regex::Regex::new(r"%(?:(\d+)\$)?([sd%])")
        .map_err(|e| FormattingError::Parse(e.to_string()))?;

    let mut out = String::with_capacity(template.len());
    let mut last = 0;
    let mut next = 0;

    for caps in re.captures_iter(template) {
        let Some(whole) = caps.get(0) else { continue };
        out.push_str(&template[last..whole.start()]);
        last = whole.end();

        let conversion = &caps[2];
        if conversion == "%" {
            out.push('%');
            continue;
        }

        let index = match caps.get(1) {
            Some(pos) => pos
                .as_str()
                .parse::<usize>()
                .ok()
                .and_then(|p| p.checked_sub(1))
                .ok_or_else(|| FormattingError::Parse(format!("bad position in '{}'", key)))?,
            None => {
                next += 1;
                next - 1
            }
        };

        let arg = args
            .get(index)
            .ok_or(FormattingError::MissingArgument { key, index })?;

        match (conversion, arg) {
            ("d", Arg::Str(_)) => {
                return Err(FormattingError::ArgumentMismatch {
                    key,
                    placeholder: whole.as_str().to_string(),
                })
            }
            _ => out.push_str(&arg.to_string()),
        }
    }

    out.push_str(&template[last..]);
    Ok(out)
}

// =============================================================================
// Bundle
// =============================================================================

/// Singular/plural template pair
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Plural {
    #[serde(default)]
    pub one: Option<String>,
    pub other: String,
}

impl Plural {
    /// Template for `count` (English rule: exactly 1 is singular)
    pub fn select(&self, count: i64) -> &str {
        match (&self.one, count) {
            (Some(one), 1) => one,
            _ => &self.other,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct BundleFile {
    #[serde(default)]
    strings: HashMap<String, String>,
    #[serde(default)]
    plurals: HashMap<String, Plural>,
}

/// Localised templates keyed by resource name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resources {
    strings: HashMap<StringKey, String>,
    plurals: HashMap<PluralKey, Plural>,
}

impl Resources {
    /// Built-in English bundle
    pub fn english() -> Self {
        let strings = [
            (StringKey::PercentageFormat, "%d%%"),
            (StringKey::RatingContentDescriptionFormat, "Rated %d%%"),
            (StringKey::NetworkContentDescriptionFormat, "Broadcast on %s"),
            (StringKey::CertificateContentDescriptionFormat, "Certified %s"),
            (StringKey::MinutesFormat, "%d minutes"),
            (StringKey::RelatedTitle, "Related"),
        ]
        .into_iter()
        .map(|(k, v)| (k, v.to_string()))
        .collect();

        let plurals = HashMap::from([(
            PluralKey::RuntimeContentDescriptionFormat,
            Plural {
                one: Some("Runtime of %d minute".to_string()),
                other: "Runtime of %d minutes".to_string(),
            },
        )]);

        Self { strings, plurals }
    }

    /// Parse a complete bundle. Keys missing from the file stay missing.
    pub fn from_toml(text: &str) -> Result<Self, FormattingError> {
        Self::default().with_overrides_from_toml(text)
    }

    /// Layer a (possibly partial) TOML bundle over this one
    pub fn with_overrides_from_toml(mut self, text: &str) -> Result<Self, FormattingError> {
        let file: BundleFile =
            toml::from_str(text).map_err(|e| FormattingError::Parse(e.to_string()))?;

        for (name, template) in file.strings {
            let key =
                StringKey::from_name(&name).ok_or_else(|| FormattingError::UnknownKey(name.clone()))?;
            self.strings.insert(key, template);
        }
        for (name, plural) in file.plurals {
            let key =
                PluralKey::from_name(&name).ok_or_else(|| FormattingError::UnknownKey(name.clone()))?;
            self.plurals.insert(key, plural);
        }
        Ok(self)
    }

    /// Format a string template
    pub fn string(&self, key: StringKey, args: &[Arg]) -> Result<String, FormattingError> {
        let template = self
            .strings
            .get(&key)
            .ok_or(FormattingError::MissingTemplate(key.name()))?;
        format_template(key.name(), template, args)
    }

    /// Format the plural form selected by `count`
    pub fn quantity_string(
        &self,
        key: PluralKey,
        count: i64,
        args: &[Arg],
    ) -> Result<String, FormattingError> {
        let plural = self
            .plurals
            .get(&key)
            .ok_or(FormattingError::MissingTemplate(key.name()))?;
        format_template(key.name(), plural.select(count), args)
    }
}
