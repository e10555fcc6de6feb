use crate::utils::LabelType;
use std::collections::HashMap;
use std::fmt::Display;

/// A contrariness fact: the literal `by` is contrary to the literal `of`.
///
/// The relation is many-to-many; [`ContraryMap`] gathers, for each literal,
/// the tuple of literals declared contrary to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contrary<T>
where
    T: LabelType,
{
    of: T,
    by: T,
}

impl<T> Contrary<T>
where
    T: LabelType,
{
    /// Builds a contrariness fact stating that `by` is contrary to `of`.
    pub fn new(of: T, by: T) -> Self {
        Contrary { of, by }
    }

    /// Returns the literal whose contrary is declared.
    pub fn of(&self) -> &T {
        &self.of
    }

    /// Returns the declared contrary literal.
    pub fn by(&self) -> &T {
        &self.by
    }
}

impl<T> Display for Contrary<T>
where
    T: LabelType,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "contrary of {} is {}", self.of, self.by)
    }
}

/// The projection of a set of contrariness facts as a literal-to-contraries map.
///
/// # Example
///
/// ```
/// # use abagen::aba::{Contrary, ContraryMap};
/// let contraries = vec![Contrary::new("a", "r"), Contrary::new("a", "s")];
/// let map = ContraryMap::from_contraries(&contraries);
/// assert_eq!(Some(&["r", "s"] as &[&str]), map.contraries_of(&"a"));
/// assert_eq!(None, map.contraries_of(&"r"));
/// ```
pub struct ContraryMap<T>
where
    T: LabelType,
{
    map: HashMap<T, Vec<T>>,
}

impl<T> ContraryMap<T>
where
    T: LabelType,
{
    /// Gathers a set of contrariness facts, accumulating the contraries of each literal in declaration order.
    pub fn from_contraries(contraries: &[Contrary<T>]) -> Self {
        let mut map: HashMap<T, Vec<T>> = HashMap::new();
        for c in contraries {
            map.entry(c.of.clone()).or_default().push(c.by.clone());
        }
        ContraryMap { map }
    }

    /// Returns the contraries of a literal, or `None` if it has none declared.
    pub fn contraries_of(&self, literal: &T) -> Option<&[T]> {
        self.map.get(literal).map(|v| v.as_slice())
    }

    /// Returns `true` iff `by` is declared contrary to `of`.
    pub fn is_contrary(&self, of: &T, by: &T) -> bool {
        self.contraries_of(of)
            .map_or(false, |contraries| contraries.contains(by))
    }
}
