use super::{AbaFramework, Body, BodyElement, Leaf, Rule};
use crate::utils::LabelType;

impl<T> AbaFramework<T>
where
    T: LabelType,
{
    /// Computes the deductive closure of the rules.
    ///
    /// The framework is left untouched: the closure is built on a working copy
    /// of the rules, rewritten one step at a time until a fixpoint is reached.
    /// A step picks the first rule whose body holds a literal matched by the
    /// head of another rule and substitutes the matching rule for the literal
    /// (for tuple bodies, every matchable element of that rule is substituted
    /// in the same step); the scan then restarts from the first rule.
    ///
    /// Substituted rules are cloned, so each element of the returned list owns
    /// its nested rules; bodies of nested rules are never rewritten again.
    pub fn derive_rules(&self) -> Vec<Rule<T>> {
        let mut rules = self.rules().to_vec();
        while apply_rewrite_step(&mut rules) {}
        rules
    }

    /// Returns `true` iff the closure of the rules reveals self-referential derivations.
    ///
    /// The framework is circular when some rule carries an assumption directly in
    /// its body (i.e. can seed an argument) and some closure path goes through the
    /// same literal twice.
    pub fn is_circular(&self) -> bool {
        let derived_paths: Vec<Vec<Vec<Leaf<T>>>> =
            self.derive_rules().iter().map(|r| r.to_paths()).collect();
        for rule in self.rules() {
            let seeds_argument = match rule.body() {
                Body::Literal(l) => self.is_assumption(l),
                Body::Tuple(elements) => elements.iter().any(
                    |e| matches!(e, BodyElement::Literal(l) if self.is_assumption(l)),
                ),
                _ => false,
            };
            if seeds_argument
                && derived_paths
                    .iter()
                    .flatten()
                    .any(|path| has_repeated_step(path))
            {
                return true;
            }
        }
        false
    }
}

/// Applies a single closure rewrite step, returning `true` iff a rule was rewritten.
fn apply_rewrite_step<T>(rules: &mut [Rule<T>]) -> bool
where
    T: LabelType,
{
    for i in 0..rules.len() {
        match rules[i].body() {
            Body::Tuple(elements) => {
                // each substitutable element gets the last other rule whose head matches it
                let substitutions: Vec<(usize, usize)> = elements
                    .iter()
                    .enumerate()
                    .filter_map(|(j, e)| match e {
                        BodyElement::Literal(l) => {
                            last_matching_rule(rules, i, l).map(|k| (j, k))
                        }
                        BodyElement::Rule(_) => None,
                    })
                    .collect();
                if !substitutions.is_empty() {
                    let nested: Vec<(usize, Rule<T>)> = substitutions
                        .into_iter()
                        .map(|(j, k)| (j, rules[k].clone()))
                        .collect();
                    if let Body::Tuple(elements) = rules[i].body_mut() {
                        for (j, r) in nested {
                            elements[j] = BodyElement::Rule(Box::new(r));
                        }
                    }
                    return true;
                }
            }
            Body::Literal(l) => {
                // a single-literal body gets the first other rule whose head matches it
                if let Some(k) = first_matching_rule(rules, i, l) {
                    let nested = rules[k].clone();
                    *rules[i].body_mut() = Body::Rule(Box::new(nested));
                    return true;
                }
            }
            _ => {}
        }
    }
    false
}

fn first_matching_rule<T>(rules: &[Rule<T>], current: usize, literal: &T) -> Option<usize>
where
    T: LabelType,
{
    rules
        .iter()
        .enumerate()
        .find(|(k, r)| *k != current && r.head() == literal)
        .map(|(k, _)| k)
}

fn last_matching_rule<T>(rules: &[Rule<T>], current: usize, literal: &T) -> Option<usize>
where
    T: LabelType,
{
    rules
        .iter()
        .enumerate()
        .filter(|(k, r)| *k != current && r.head() == literal)
        .map(|(k, _)| k)
        .last()
}

fn has_repeated_step<T>(path: &[Leaf<T>]) -> bool
where
    T: LabelType,
{
    path.iter()
        .enumerate()
        .any(|(i, step)| path[i + 1..].contains(step))
}
