use crate::utils::LabelType;
use std::fmt::Display;

/// A step on a derivation path: a literal, or the marker left by an empty rule body.
///
/// The last step of a path is the leaf of the corresponding derivation branch;
/// it is the only step that may be [`Leaf::Empty`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Leaf<T>
where
    T: LabelType,
{
    /// A literal of the language.
    Literal(T),
    /// The empty literal, closing the derivation of a fact.
    Empty,
}

impl<T> Leaf<T>
where
    T: LabelType,
{
    /// Returns the literal label, or `None` for the empty literal.
    pub fn literal(&self) -> Option<&T> {
        match self {
            Leaf::Literal(l) => Some(l),
            Leaf::Empty => None,
        }
    }
}

impl<T> Display for Leaf<T>
where
    T: LabelType,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Leaf::Literal(l) => write!(f, "{}", l),
            Leaf::Empty => Ok(()),
        }
    }
}

/// An element of a tuple rule body.
///
/// Parsed rules only contain literals; rule closure replaces matched literals
/// with the rules deriving them, each nested rule being exclusively owned by
/// its parent (the closure of a rule is a tree, never a DAG).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BodyElement<T>
where
    T: LabelType,
{
    /// A plain literal.
    Literal(T),
    /// A nested rule substituted for a literal during closure.
    Rule(Box<Rule<T>>),
}

/// The body of a rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Body<T>
where
    T: LabelType,
{
    /// The empty body; the head is a fact.
    Empty,
    /// A single literal.
    Literal(T),
    /// A nested rule substituted for a single-literal body during closure.
    Rule(Box<Rule<T>>),
    /// An ordered tuple of literals and (after closure) nested rules.
    Tuple(Vec<BodyElement<T>>),
}

/// A rule of a framework: the head is derivable if the body is.
///
/// # Example
///
/// ```
/// # use abagen::aba::{Body, Rule};
/// let rule = Rule::new("q".to_string(), Body::Empty);
/// assert_eq!(vec![vec!["q".to_string()]], rule.to_paths().iter().map(|p| {
///     p.iter().filter_map(|s| s.literal().cloned()).collect::<Vec<String>>()
/// }).collect::<Vec<_>>());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule<T>
where
    T: LabelType,
{
    head: T,
    body: Body<T>,
}

impl<T> Rule<T>
where
    T: LabelType,
{
    /// Builds a rule from its head and body.
    pub fn new(head: T, body: Body<T>) -> Self {
        Rule { head, body }
    }

    /// Returns the head of the rule.
    pub fn head(&self) -> &T {
        &self.head
    }

    /// Returns the body of the rule.
    pub fn body(&self) -> &Body<T> {
        &self.body
    }

    pub(crate) fn body_mut(&mut self) -> &mut Body<T> {
        &mut self.body
    }

    /// Collects the literals occurring in the rule, head included.
    ///
    /// Nested rules are traversed recursively.
    pub fn literals(&self) -> Vec<&T> {
        let mut literals = vec![&self.head];
        collect_body_literals(&self.body, &mut literals);
        literals
    }

    /// Flattens the rule into the list of its derivation paths.
    ///
    /// A path goes from the head through every branch of the (possibly nested)
    /// body down to a terminal literal; a tuple body contributes one or more
    /// paths per element, and an empty body contributes the empty literal.
    pub fn to_paths(&self) -> Vec<Vec<Leaf<T>>> {
        collect_paths(&self.head, &self.body)
    }
}

fn collect_body_literals<'a, T>(body: &'a Body<T>, literals: &mut Vec<&'a T>)
where
    T: LabelType,
{
    match body {
        Body::Empty => {}
        Body::Literal(l) => literals.push(l),
        Body::Rule(r) => {
            literals.push(&r.head);
            collect_body_literals(&r.body, literals);
        }
        Body::Tuple(elements) => {
            for e in elements {
                match e {
                    BodyElement::Literal(l) => literals.push(l),
                    BodyElement::Rule(r) => {
                        literals.push(&r.head);
                        collect_body_literals(&r.body, literals);
                    }
                }
            }
        }
    }
}

fn collect_paths<T>(current_head: &T, body: &Body<T>) -> Vec<Vec<Leaf<T>>>
where
    T: LabelType,
{
    let mut paths = Vec::new();
    let prefix_nested = |nested: &Rule<T>, paths: &mut Vec<Vec<Leaf<T>>>| {
        for nested_path in nested.to_paths() {
            let mut path = Vec::with_capacity(1 + nested_path.len());
            path.push(Leaf::Literal(current_head.clone()));
            path.extend(nested_path);
            paths.push(path);
        }
    };
    match body {
        Body::Tuple(elements) => {
            for element in elements {
                match element {
                    BodyElement::Rule(r) => prefix_nested(r, &mut paths),
                    BodyElement::Literal(l) => paths.push(vec![
                        Leaf::Literal(current_head.clone()),
                        Leaf::Literal(l.clone()),
                    ]),
                }
            }
        }
        Body::Rule(r) => prefix_nested(r, &mut paths),
        Body::Literal(l) => paths.push(vec![
            Leaf::Literal(current_head.clone()),
            Leaf::Literal(l.clone()),
        ]),
        Body::Empty => paths.push(vec![Leaf::Literal(current_head.clone()), Leaf::Empty]),
    }
    paths
}

impl<T> Display for Rule<T>
where
    T: LabelType,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <- ", self.head)?;
        fmt_body(&self.body, f)
    }
}

fn fmt_body<T>(body: &Body<T>, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
where
    T: LabelType,
{
    match body {
        Body::Empty => write!(f, "()"),
        Body::Literal(l) => write!(f, "{}", l),
        Body::Rule(r) => write!(f, "[{}]", r),
        Body::Tuple(elements) => {
            write!(f, "(")?;
            for (i, e) in elements.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                match e {
                    BodyElement::Literal(l) => write!(f, "{}", l)?,
                    BodyElement::Rule(r) => write!(f, "[{}]", r)?,
                }
            }
            write!(f, ")")
        }
    }
}
