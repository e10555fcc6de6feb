//! The string-facing operations used to build, convert and analyze frameworks.
//!
//! Every operation takes the five raw strings of a framework (language,
//! assumptions, rules, contraries and optional preferences) and starts from a
//! freshly parsed framework, so no operation ever observes the side effects of
//! another one.

use crate::aba::{
    AbaError, AbaFramework, Atomizer, CycleRemover, Language, PREFERENCE_ATTACKS_TIMEOUT,
};
use crate::io::{parse_contraries, parse_literals, parse_preferences, parse_rules};
use anyhow::Result;
use strum_macros::{AsRefStr, Display, EnumString, EnumVariantNames};

/// The conversion a framework may be put through before an analysis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AsRefStr, Display, EnumString, EnumVariantNames)]
#[strum(serialize_all = "kebab-case")]
pub enum ConvertTo {
    /// Conversion to an atomic framework.
    Atomic,
    /// Conversion to a non-circular framework.
    NonCircular,
}

/// Builds a validated framework from the five raw strings.
///
/// # Example
///
/// ```
/// # use abagen::generator::build_framework;
/// let framework = build_framework("a, b, x", "a, b", "(x, a, b)", "(a, x)", None).unwrap();
/// assert!(framework.is_valid());
/// ```
pub fn build_framework(
    language: &str,
    assumptions: &str,
    rules: &str,
    contraries: &str,
    preferences: Option<&str>,
) -> Result<AbaFramework<String>> {
    let language = Language::new_with_labels(&parse_literals(language));
    let assumptions = parse_literals(assumptions);
    let rules = parse_rules(rules);
    let contraries = parse_contraries(contraries)?;
    let preferences = preferences.map(parse_preferences).unwrap_or_default();
    Ok(AbaFramework::try_new(
        language,
        &assumptions,
        rules,
        contraries,
        preferences,
    )?)
}

/// Builds a framework from the five raw strings and converts it to an atomic one.
///
/// A circular framework is first rewritten into a non-circular one.
/// Fails with [`AbaError::ConversionNotNeeded`] when the framework already is atomic.
pub fn convert_to_atomic(
    language: &str,
    assumptions: &str,
    rules: &str,
    contraries: &str,
    preferences: Option<&str>,
) -> Result<AbaFramework<String>> {
    let framework = build_framework(language, assumptions, rules, contraries, preferences)?;
    Ok(Atomizer::new_for_strings().atomize(&framework)?)
}

/// Builds a framework from the five raw strings and converts it to a non-circular one.
///
/// Fails with [`AbaError::ConversionNotNeeded`] when the framework already is non-circular.
pub fn convert_to_non_circular(
    language: &str,
    assumptions: &str,
    rules: &str,
    contraries: &str,
    preferences: Option<&str>,
) -> Result<AbaFramework<String>> {
    let framework = build_framework(language, assumptions, rules, contraries, preferences)?;
    Ok(CycleRemover::new_for_strings().remove_cycles(&framework)?)
}

/// Builds a framework, applying the requested conversion first.
///
/// When the conversion reports [`AbaError::ConversionNotNeeded`], the
/// untransformed framework is returned instead.
pub fn convert_first(
    language: &str,
    assumptions: &str,
    rules: &str,
    contraries: &str,
    preferences: Option<&str>,
    convert_to: Option<ConvertTo>,
) -> Result<AbaFramework<String>> {
    let converted = match convert_to {
        None => return build_framework(language, assumptions, rules, contraries, preferences),
        Some(ConvertTo::Atomic) => {
            convert_to_atomic(language, assumptions, rules, contraries, preferences)
        }
        Some(ConvertTo::NonCircular) => {
            convert_to_non_circular(language, assumptions, rules, contraries, preferences)
        }
    };
    match converted {
        Err(e) if matches!(e.downcast_ref::<AbaError>(), Some(AbaError::ConversionNotNeeded(_))) => {
            build_framework(language, assumptions, rules, contraries, preferences)
        }
        other => other,
    }
}

/// Builds a framework (converting it first if asked to) and synthesizes its arguments.
pub fn create_arguments(
    language: &str,
    assumptions: &str,
    rules: &str,
    contraries: &str,
    preferences: Option<&str>,
    convert_to: Option<ConvertTo>,
) -> Result<AbaFramework<String>> {
    let mut framework = convert_first(
        language,
        assumptions,
        rules,
        contraries,
        preferences,
        convert_to,
    )?;
    framework.compute_arguments();
    Ok(framework)
}

/// Builds a framework (converting it first if asked to) and computes its arguments and plain attacks.
pub fn create_attacks(
    language: &str,
    assumptions: &str,
    rules: &str,
    contraries: &str,
    preferences: Option<&str>,
    convert_to: Option<ConvertTo>,
) -> Result<AbaFramework<String>> {
    let mut framework = convert_first(
        language,
        assumptions,
        rules,
        contraries,
        preferences,
        convert_to,
    )?;
    framework.compute_attacks();
    Ok(framework)
}

/// Builds a framework (converting it first if asked to) and computes its
/// preference-modulated normal and reverse attacks.
///
/// The computation runs under the [`PREFERENCE_ATTACKS_TIMEOUT`] budget; it fails
/// with [`AbaError::MissingPreferences`] when no preference is given and with
/// [`AbaError::ComputationTimeout`] when the budget is exceeded.
pub fn create_preference_attacks(
    language: &str,
    assumptions: &str,
    rules: &str,
    contraries: &str,
    preferences: Option<&str>,
    convert_to: Option<ConvertTo>,
) -> Result<AbaFramework<String>> {
    let mut framework = convert_first(
        language,
        assumptions,
        rules,
        contraries,
        preferences,
        convert_to,
    )?;
    framework.compute_preference_attacks(PREFERENCE_ATTACKS_TIMEOUT)?;
    Ok(framework)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    const LANGUAGE: &str = "a, b, c, q, p, r, s, t";
    const ASSUMPTIONS: &str = "a, b, c";
    const RULES: &str = "(p, q, a), (q), (r, b, c), (t, p, c), (s, t)";
    const CONTRARIES: &str = "(a, r), (b, s), (c, t)";

    #[test]
    fn test_build_framework() {
        let framework = build_framework(LANGUAGE, ASSUMPTIONS, RULES, CONTRARIES, None).unwrap();
        assert!(framework.is_valid());
        assert!(!framework.is_circular());
        assert!(!framework.is_atomic());
        assert_eq!(8, framework.language().len());
        assert_eq!(5, framework.rules().len());
    }

    #[test]
    fn test_build_framework_with_invalid_literal() {
        let err = build_framework("a, p", "a, b", "(p, a)", "(a, p)", None).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AbaError>(),
            Some(AbaError::InvalidFramework(_))
        ));
    }

    #[test]
    fn test_convert_to_atomic() {
        let framework =
            convert_to_atomic(LANGUAGE, ASSUMPTIONS, RULES, CONTRARIES, None).unwrap();
        assert!(framework.is_atomic());
    }

    #[test]
    fn test_convert_to_non_circular_not_needed() {
        let err =
            convert_to_non_circular(LANGUAGE, ASSUMPTIONS, RULES, CONTRARIES, None).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AbaError>(),
            Some(AbaError::ConversionNotNeeded(_))
        ));
    }

    #[test]
    fn test_convert_first_falls_back_when_not_needed() {
        let framework = convert_first(
            LANGUAGE,
            ASSUMPTIONS,
            RULES,
            CONTRARIES,
            None,
            Some(ConvertTo::NonCircular),
        )
        .unwrap();
        // the tutorial example is non-circular: the untransformed framework is returned
        assert_eq!(8, framework.language().len());
        assert_eq!(5, framework.rules().len());
    }

    #[test]
    fn test_create_arguments() {
        let framework =
            create_arguments(LANGUAGE, ASSUMPTIONS, RULES, CONTRARIES, None, None).unwrap();
        let arguments = framework.arguments().unwrap();
        assert_eq!(8, arguments.len());
        assert!(arguments
            .iter()
            .any(|a| format!("{}", a) == "{a} |- p"));
    }

    #[test]
    fn test_create_attacks() {
        let framework =
            create_attacks(LANGUAGE, ASSUMPTIONS, RULES, CONTRARIES, None, None).unwrap();
        assert_eq!(10, framework.attacks().unwrap().len());
    }

    #[test]
    fn test_create_preference_attacks() {
        let framework = create_preference_attacks(
            LANGUAGE,
            ASSUMPTIONS,
            RULES,
            CONTRARIES,
            Some("(b, a)"),
            None,
        )
        .unwrap();
        assert!(!framework.normal_attacks().unwrap().is_empty());
        assert!(!framework.reverse_attacks().unwrap().is_empty());
    }

    #[test]
    fn test_create_preference_attacks_without_preferences() {
        let err =
            create_preference_attacks(LANGUAGE, ASSUMPTIONS, RULES, CONTRARIES, None, None)
                .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AbaError>(),
            Some(AbaError::MissingPreferences)
        ));
    }

    #[test]
    fn test_convert_to_from_str() {
        assert_eq!(Ok(ConvertTo::Atomic), ConvertTo::from_str("atomic"));
        assert_eq!(
            Ok(ConvertTo::NonCircular),
            ConvertTo::from_str("non-circular")
        );
        assert!(ConvertTo::from_str("unknown").is_err());
        assert_eq!("non-circular", ConvertTo::NonCircular.as_ref());
    }
}
