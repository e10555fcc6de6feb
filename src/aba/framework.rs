use super::{
    AbaError, Argument, Atom, Attack, Body, BodyElement, Contrary, Language, Preference, Rule,
    SubsetAttack,
};
use crate::utils::LabelType;
use std::fmt::Display;

/// An Assumption-based Argumentation framework.
///
/// A framework aggregates a language, a distinguished non-empty subset of assumptions,
/// derivation rules, contrariness facts and (optional) preferences over assumptions.
/// Construction validates the structural invariants; an invalid aggregate is rejected
/// with [`AbaError::InvalidFramework`] and never observed by callers.
///
/// Arguments and the three attack relations are computed lazily by the synthesis
/// operations and stay `None` until then.
///
/// # Example
///
/// ```
/// # use abagen::aba::{AbaFramework, Body, BodyElement, Contrary, Language, Rule};
/// let language = Language::new_with_labels(&["a", "b", "p"]);
/// let rules = vec![Rule::new(
///     "p",
///     Body::Tuple(vec![BodyElement::Literal("a"), BodyElement::Literal("b")]),
/// )];
/// let contraries = vec![Contrary::new("a", "p")];
/// let framework = AbaFramework::try_new(language, &["a", "b"], rules, contraries, vec![]).unwrap();
/// assert!(framework.is_valid());
/// assert!(framework.is_atomic());
/// ```
#[derive(Clone, Debug)]
pub struct AbaFramework<T>
where
    T: LabelType,
{
    language: Language<T>,
    is_assumption: Vec<bool>,
    assumption_indices: Vec<usize>,
    rules: Vec<Rule<T>>,
    contraries: Vec<Contrary<T>>,
    preferences: Vec<Preference<T>>,
    arguments: Option<Vec<Argument<T>>>,
    attacks: Option<Vec<Attack>>,
    normal_attacks: Option<Vec<SubsetAttack<T>>>,
    reverse_attacks: Option<Vec<SubsetAttack<T>>>,
}

impl<T> AbaFramework<T>
where
    T: LabelType,
{
    /// Builds a framework and checks its structural invariants.
    ///
    /// The assumptions must form a non-empty subset of the language; every literal
    /// occurring in a rule or a contrariness fact must belong to the language; if
    /// preferences are provided, every literal they mention must be an assumption.
    /// Violating any of these yields [`AbaError::InvalidFramework`].
    ///
    /// Duplicated assumption labels are considered once.
    pub fn try_new(
        language: Language<T>,
        assumptions: &[T],
        rules: Vec<Rule<T>>,
        contraries: Vec<Contrary<T>>,
        preferences: Vec<Preference<T>>,
    ) -> Result<Self, AbaError> {
        let mut is_assumption = vec![false; language.len()];
        let mut assumption_indices = Vec::with_capacity(assumptions.len());
        for a in assumptions {
            let id = language
                .get_atom(a)
                .map_err(|_| {
                    AbaError::InvalidFramework(format!(
                        "assumption {} does not belong to the language",
                        a
                    ))
                })?
                .id();
            if !is_assumption[id] {
                is_assumption[id] = true;
                assumption_indices.push(id);
            }
        }
        let framework = AbaFramework {
            language,
            is_assumption,
            assumption_indices,
            rules,
            contraries,
            preferences,
            arguments: None,
            attacks: None,
            normal_attacks: None,
            reverse_attacks: None,
        };
        framework.check_validity()?;
        Ok(framework)
    }

    fn check_validity(&self) -> Result<(), AbaError> {
        if self.assumption_indices.is_empty() {
            return Err(AbaError::InvalidFramework(
                "the set of assumptions is empty".to_string(),
            ));
        }
        for rule in &self.rules {
            for l in rule.literals() {
                if !self.language.contains(l) {
                    return Err(AbaError::InvalidFramework(format!(
                        "literal {} of rule \"{}\" does not belong to the language",
                        l, rule
                    )));
                }
            }
        }
        for c in &self.contraries {
            for l in [c.of(), c.by()] {
                if !self.language.contains(l) {
                    return Err(AbaError::InvalidFramework(format!(
                        "literal {} of contrary \"{}\" does not belong to the language",
                        l, c
                    )));
                }
            }
        }
        for p in &self.preferences {
            for l in [p.least(), p.most()] {
                if !self.is_assumption(l) {
                    return Err(AbaError::InvalidFramework(format!(
                        "literal {} of preference \"{}\" is not an assumption",
                        l, p
                    )));
                }
            }
        }
        Ok(())
    }

    /// Returns `true` iff the structural invariants of the framework hold.
    ///
    /// Always true for a framework built by [`try_new`](Self::try_new).
    pub fn is_valid(&self) -> bool {
        self.check_validity().is_ok()
    }

    /// Returns `true` iff the provided rule is atomic, i.e. its body is empty or
    /// made of assumptions only.
    pub fn is_atomic_rule(&self, rule: &Rule<T>) -> bool {
        match rule.body() {
            Body::Empty => true,
            Body::Literal(l) => self.is_assumption(l),
            Body::Rule(_) => false,
            Body::Tuple(elements) => elements.iter().all(|e| match e {
                BodyElement::Literal(l) => self.is_assumption(l),
                BodyElement::Rule(_) => false,
            }),
        }
    }

    /// Returns `true` iff the framework is valid and all its rules are atomic.
    pub fn is_atomic(&self) -> bool {
        self.is_valid() && self.rules.iter().all(|r| self.is_atomic_rule(r))
    }

    /// Returns the underlying language.
    pub fn language(&self) -> &Language<T> {
        &self.language
    }

    /// Returns the number of assumptions.
    pub fn n_assumptions(&self) -> usize {
        self.assumption_indices.len()
    }

    /// Returns `true` iff the provided label is an assumption of the framework.
    ///
    /// Labels outside the language are not assumptions.
    pub fn is_assumption(&self, label: &T) -> bool {
        self.language
            .get_atom(label)
            .map(|a| self.is_assumption[a.id()])
            .unwrap_or(false)
    }

    /// Provides an iterator to the assumptions, in declaration order.
    pub fn iter_assumptions(&self) -> impl Iterator<Item = &Atom<T>> + '_ {
        self.assumption_indices
            .iter()
            .map(move |i| self.language.get_atom_by_id(*i))
    }

    /// Returns the labels of the assumptions, in declaration order.
    pub fn assumption_labels(&self) -> Vec<T> {
        self.iter_assumptions().map(|a| a.label().clone()).collect()
    }

    /// Returns the rules of the framework.
    pub fn rules(&self) -> &[Rule<T>] {
        &self.rules
    }

    /// Returns the contrariness facts of the framework.
    pub fn contraries(&self) -> &[Contrary<T>] {
        &self.contraries
    }

    /// Returns the preference facts of the framework.
    pub fn preferences(&self) -> &[Preference<T>] {
        &self.preferences
    }

    /// Returns the synthesized arguments, or `None` if they have not been computed yet.
    pub fn arguments(&self) -> Option<&[Argument<T>]> {
        self.arguments.as_deref()
    }

    /// Returns the plain attacks, or `None` if they have not been computed yet.
    pub fn attacks(&self) -> Option<&[Attack]> {
        self.attacks.as_deref()
    }

    /// Returns the preference-modulated normal attacks, or `None` if they have not been computed yet.
    pub fn normal_attacks(&self) -> Option<&[SubsetAttack<T>]> {
        self.normal_attacks.as_deref()
    }

    /// Returns the preference-modulated reverse attacks, or `None` if they have not been computed yet.
    pub fn reverse_attacks(&self) -> Option<&[SubsetAttack<T>]> {
        self.reverse_attacks.as_deref()
    }

    pub(crate) fn set_arguments(&mut self, arguments: Vec<Argument<T>>) {
        self.arguments = Some(arguments);
    }

    pub(crate) fn set_attacks(&mut self, attacks: Vec<Attack>) {
        self.attacks = Some(attacks);
    }

    pub(crate) fn set_subset_attacks(
        &mut self,
        normal: Vec<SubsetAttack<T>>,
        reverse: Vec<SubsetAttack<T>>,
    ) {
        self.normal_attacks = Some(normal);
        self.reverse_attacks = Some(reverse);
    }
}

impl<T> Display for AbaFramework<T>
where
    T: LabelType,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Language: {}", self.language)?;
        write!(f, "Assumptions: {{")?;
        for (i, a) in self.iter_assumptions().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", a)?;
        }
        writeln!(f, "}}")?;
        writeln!(f, "Rules:")?;
        for (i, r) in self.rules.iter().enumerate() {
            writeln!(f, "R{}: {}", i, r)?;
        }
        writeln!(f, "Contraries:")?;
        for (i, c) in self.contraries.iter().enumerate() {
            writeln!(f, "C{}: {}", i, c)?;
        }
        if !self.preferences.is_empty() {
            writeln!(f, "Preferences:")?;
            for (i, p) in self.preferences.iter().enumerate() {
                writeln!(f, "P{}: {}", i, p)?;
            }
        }
        if let Some(arguments) = &self.arguments {
            writeln!(f, "Arguments:")?;
            for (i, a) in arguments.iter().enumerate() {
                writeln!(f, "A{}: {}", i, a)?;
            }
        }
        if let Some(attacks) = &self.attacks {
            writeln!(f, "Attacks:")?;
            for a in attacks {
                writeln!(f, "{}", a)?;
            }
        }
        if let Some(normal_attacks) = &self.normal_attacks {
            writeln!(f, "Normal attacks:")?;
            for (i, a) in normal_attacks.iter().enumerate() {
                writeln!(f, "NA{}: {}", i, a)?;
            }
        }
        if let Some(reverse_attacks) = &self.reverse_attacks {
            writeln!(f, "Reverse attacks:")?;
            for (i, a) in reverse_attacks.iter().enumerate() {
                writeln!(f, "RA{}: {}", i, a)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    use super::*;

    pub(crate) fn tuple_body(literals: &[&'static str]) -> Body<&'static str> {
        Body::Tuple(literals.iter().map(|l| BodyElement::Literal(*l)).collect())
    }

    /// The tutorial example: non-circular, non-atomic (rule `p <- (q, a)` has the non-assumption `q`).
    pub(crate) fn toni_tutorial_ex() -> AbaFramework<&'static str> {
        let language = Language::new_with_labels(&["a", "b", "c", "q", "p", "r", "s", "t"]);
        let rules = vec![
            Rule::new("p", tuple_body(&["q", "a"])),
            Rule::new("q", Body::Empty),
            Rule::new("r", tuple_body(&["b", "c"])),
            Rule::new("t", tuple_body(&["p", "c"])),
            Rule::new("s", Body::Literal("t")),
        ];
        let contraries = vec![
            Contrary::new("a", "r"),
            Contrary::new("b", "s"),
            Contrary::new("c", "t"),
        ];
        AbaFramework::try_new(language, &["a", "b", "c"], rules, contraries, vec![]).unwrap()
    }

    /// A framework whose rules `y <- y` and `x <- x` support themselves.
    pub(crate) fn self_supporting_ex() -> AbaFramework<&'static str> {
        let language = Language::new_with_labels(&["a", "b", "x", "y", "z"]);
        let rules = vec![
            Rule::new("y", Body::Literal("b")),
            Rule::new("y", Body::Literal("y")),
            Rule::new("x", Body::Literal("x")),
            Rule::new("x", Body::Literal("a")),
            Rule::new("z", tuple_body(&["x", "y"])),
        ];
        let contraries = vec![Contrary::new("a", "z")];
        AbaFramework::try_new(language, &["a", "b"], rules, contraries, vec![]).unwrap()
    }
}
