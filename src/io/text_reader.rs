use anyhow::{anyhow, Context, Result};
use std::io::{BufRead, BufReader, Read};

/// The five raw strings a framework is built from.
///
/// The strings are kept untokenized; the [`generator`](crate::generator)
/// operations hand them to the dedicated parsers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameworkSource {
    /// The literals of the language.
    pub language: String,
    /// The literals of the assumptions.
    pub assumptions: String,
    /// The parenthesized rule groups.
    pub rules: String,
    /// The parenthesized contrary groups.
    pub contraries: String,
    /// The parenthesized preference groups, if any.
    pub preferences: Option<String>,
}

/// A reader for the plain-text framework format.
///
/// An instance is made of `section: content` lines; the sections are
/// `language`, `assumptions`, `rules`, `contraries` and (optionally)
/// `preferences`. Lines starting with `#` and blank lines are ignored, and a
/// section may span several lines by being repeated.
///
/// # Example
///
/// ```
/// # use abagen::io::TextFrameworkReader;
/// let instance = r#"
/// ## Toni's tutorial example
/// language: a, b, c, q, p, r, s, t
/// assumptions: a, b, c
/// rules: (p, q, a), (q), (r, b, c), (t, p, c), (s, t)
/// contraries: (a, r), (b, s), (c, t)
/// "#;
/// let source = TextFrameworkReader::default().read(&mut instance.as_bytes()).unwrap();
/// assert_eq!("a, b, c", source.assumptions);
/// assert_eq!(None, source.preferences);
/// ```
#[derive(Default)]
pub struct TextFrameworkReader;

impl TextFrameworkReader {
    /// Reads the five raw framework strings.
    ///
    /// An error is returned on unreadable or unrecognized lines, and when one
    /// of the four mandatory sections is missing.
    pub fn read(&self, reader: &mut dyn Read) -> Result<FrameworkSource> {
        let br = BufReader::new(reader);
        let mut language = None;
        let mut assumptions = None;
        let mut rules = None;
        let mut contraries = None;
        let mut preferences = None;
        for (i, line) in br.lines().enumerate() {
            let context = || format!("while reading line with index {}", i);
            let l = line.with_context(context)?;
            let l = l.trim();
            if l.is_empty() || l.starts_with('#') {
                continue;
            }
            let (section, content) = l
                .split_once(':')
                .ok_or_else(|| anyhow!(r#"expected a "section: content" line, got "{}""#, l))
                .with_context(context)?;
            let target = match section.trim().to_ascii_lowercase().as_str() {
                "language" => &mut language,
                "assumptions" => &mut assumptions,
                "rules" => &mut rules,
                "contraries" => &mut contraries,
                "preferences" => &mut preferences,
                _ => {
                    return Err(anyhow!(r#"unknown section "{}""#, section.trim()))
                        .with_context(context)
                }
            };
            append_content(target, content.trim());
        }
        let require = |section: Option<String>, name: &str| {
            section.ok_or_else(|| anyhow!(r#"missing section "{}""#, name))
        };
        Ok(FrameworkSource {
            language: require(language, "language")?,
            assumptions: require(assumptions, "assumptions")?,
            rules: require(rules, "rules")?,
            contraries: require(contraries, "contraries")?,
            preferences,
        })
    }
}

fn append_content(target: &mut Option<String>, content: &str) {
    match target {
        Some(existing) => {
            existing.push(' ');
            existing.push_str(content);
        }
        None => *target = Some(content.to_string()),
    }
}
