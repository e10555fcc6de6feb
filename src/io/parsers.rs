use crate::aba::{Body, BodyElement, Contrary, Preference, Rule};
use anyhow::{anyhow, Result};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WORD_PATTERN: Regex = Regex::new(r"\w+").unwrap();
    static ref GROUP_PATTERN: Regex = Regex::new(r"\((.*?)\)").unwrap();
}

/// Tokenizes a raw literal string into its word tokens.
///
/// Tokens are the maximal alphanumeric (word-character) runs of the input,
/// in order of appearance; everything else acts as a separator.
///
/// # Example
///
/// ```
/// # use abagen::io::parse_literals;
/// assert_eq!(vec!["a", "b", "c"], parse_literals("a, b ; c"));
/// ```
pub fn parse_literals(input: &str) -> Vec<String> {
    WORD_PATTERN
        .find_iter(input)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Tokenizes a raw relation string into its parenthesized groups of word tokens.
pub fn parse_groups(input: &str) -> Vec<Vec<String>> {
    GROUP_PATTERN
        .captures_iter(input)
        .map(|c| parse_literals(c.get(1).unwrap().as_str()))
        .collect()
}

/// Parses a raw rule string into rules.
///
/// Each parenthesized group yields one rule: its first token is the head, the
/// remaining tokens form the body (no token: empty body; one token: single
/// literal; several tokens: ordered tuple). Empty groups are skipped.
///
/// # Example
///
/// ```
/// # use abagen::io::parse_rules;
/// let rules = parse_rules("(p, q, a), (q)");
/// assert_eq!(2, rules.len());
/// assert_eq!("p <- (q, a)", format!("{}", rules[0]));
/// assert_eq!("q <- ()", format!("{}", rules[1]));
/// ```
pub fn parse_rules(input: &str) -> Vec<Rule<String>> {
    let mut rules = Vec::new();
    for group in parse_groups(input) {
        let mut tokens = group.into_iter();
        let head = match tokens.next() {
            Some(h) => h,
            None => continue,
        };
        let mut body_tokens: Vec<String> = tokens.collect();
        let body = match body_tokens.len() {
            0 => Body::Empty,
            1 => Body::Literal(body_tokens.pop().unwrap()),
            _ => Body::Tuple(body_tokens.into_iter().map(BodyElement::Literal).collect()),
        };
        rules.push(Rule::new(head, body));
    }
    rules
}

/// Parses a raw contrary string into contrariness facts.
///
/// A two-token group `(x, y)` states that `y` is contrary to `x`; a longer
/// group fans out, pairing its first token with each of the others. Empty
/// groups are skipped; a single-token group is rejected since a contrariness
/// fact needs two literals.
pub fn parse_contraries(input: &str) -> Result<Vec<Contrary<String>>> {
    let mut contraries = Vec::new();
    for group in parse_groups(input) {
        match group.len() {
            0 => continue,
            1 => {
                return Err(anyhow!(
                    "contrary group ({}) needs at least two literals",
                    group[0]
                ))
            }
            _ => {
                let of = &group[0];
                for by in &group[1..] {
                    contraries.push(Contrary::new(of.clone(), by.clone()));
                }
            }
        }
    }
    Ok(contraries)
}

/// Parses a raw preference string into preference facts.
///
/// A two-token group `(x, y)` states `x < y`; a longer group fans out, pairing
/// its first token with each of the others. Groups with less than two tokens
/// are skipped.
pub fn parse_preferences(input: &str) -> Vec<Preference<String>> {
    let mut preferences = Vec::new();
    for group in parse_groups(input) {
        if group.len() < 2 {
            continue;
        }
        let least = &group[0];
        for most in &group[1..] {
            preferences.push(Preference::new(least.clone(), most.clone()));
        }
    }
    preferences
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_literals_on_word_boundaries() {
        assert_eq!(
            vec!["a", "b1", "long_name"],
            parse_literals(" a ,b1;  long_name ")
        );
        assert!(parse_literals("  ,;  ").is_empty());
    }

    #[test]
    fn test_parse_groups() {
        assert_eq!(
            vec![vec!["a".to_string(), "b".to_string()], vec!["c".to_string()]],
            parse_groups("(a, b), (c)")
        );
    }

    #[test]
    fn test_parse_rules_arities() {
        let rules = parse_rules("(q), (s, t), (p, q, a)");
        assert_eq!("q <- ()", format!("{}", rules[0]));
        assert_eq!("s <- t", format!("{}", rules[1]));
        assert_eq!("p <- (q, a)", format!("{}", rules[2]));
    }

    #[test]
    fn test_parse_rules_skips_empty_groups() {
        assert_eq!(1, parse_rules("(), (q)").len());
    }

    #[test]
    fn test_parse_contraries_pairs_and_fan_out() {
        let contraries = parse_contraries("(a, r), (b, s, t)").unwrap();
        assert_eq!(
            vec![
                Contrary::new("a".to_string(), "r".to_string()),
                Contrary::new("b".to_string(), "s".to_string()),
                Contrary::new("b".to_string(), "t".to_string()),
            ],
            contraries
        );
    }

    #[test]
    fn test_parse_contraries_rejects_single_literal() {
        parse_contraries("(a)").unwrap_err();
    }

    #[test]
    fn test_parse_preferences_fan_out() {
        let preferences = parse_preferences("(b, a), (c, a, b), (x)");
        assert_eq!(
            vec![
                Preference::new("b".to_string(), "a".to_string()),
                Preference::new("c".to_string(), "a".to_string()),
                Preference::new("c".to_string(), "b".to_string()),
            ],
            preferences
        );
    }
}
