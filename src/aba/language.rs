use crate::utils::LabelType;
use anyhow::{anyhow, Result};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt::Display;

/// Handles a literal of the language.
///
/// Each literal has a label and an identifier which are unique in a language.
/// This uniqueness condition imposes literals are made from [Language] objects, and not directly by the [Atom] struct.
///
/// The type of the labels must be a [`LabelType`] instance.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Atom<T>
where
    T: LabelType,
{
    id: usize,
    label: T,
}

impl<T> Atom<T>
where
    T: LabelType,
{
    /// Returns the label of the literal.
    pub fn label(&self) -> &T {
        &self.label
    }

    /// Returns the id of the literal.
    pub fn id(&self) -> usize {
        self.id
    }
}

impl<T> Display for Atom<T>
where
    T: LabelType,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Handles the set of literals on which a framework is built.
///
/// # Example
///
/// ```
/// # use abagen::aba::Language;
/// let language = Language::new_with_labels(&["a", "b", "c", "p", "q", "r", "s", "t"]);
/// for (i, l) in language.iter().enumerate() {
///     assert_eq!(i, language.get_atom(l.label()).unwrap().id());
///     assert_eq!(l, language.get_atom_by_id(i));
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Language<T>
where
    T: LabelType,
{
    atoms: Vec<Atom<T>>,
    label_to_id: HashMap<T, usize>,
}

impl<T> Language<T>
where
    T: LabelType,
{
    /// Builds a new language given the labels of its literals.
    ///
    /// Each literal is assigned an id equal to its index in the provided slice.
    /// If a label appears multiple times, the first occurrence is the only one that is considered.
    ///
    /// # Example
    ///
    /// ```
    /// # use abagen::aba::Language;
    /// let language = Language::new_with_labels(&["a", "b", "a"]);
    /// assert_eq!(2, language.len());
    /// ```
    pub fn new_with_labels(labels: &[T]) -> Self {
        let mut label_to_id = HashMap::new();
        let mut atoms = Vec::with_capacity(labels.len());
        for l in labels.iter() {
            match label_to_id.entry(l.clone()) {
                Entry::Occupied(_) => continue,
                Entry::Vacant(e) => {
                    e.insert(atoms.len());
                }
            }
            atoms.push(Atom {
                id: atoms.len(),
                label: l.clone(),
            });
        }
        Language { atoms, label_to_id }
    }

    /// Returns the number of literals in the language.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    /// Returns `true` iff the language has no literal.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Returns `true` iff the provided label belongs to the language.
    pub fn contains(&self, label: &T) -> bool {
        self.label_to_id.contains_key(label)
    }

    /// Returns the literal associated with a label.
    ///
    /// An error is returned if no literal corresponds to the provided label.
    pub fn get_atom(&self, label: &T) -> Result<&Atom<T>> {
        self.label_to_id
            .get(label)
            .map(|i| &self.atoms[*i])
            .ok_or_else(|| anyhow!("no such literal: {}", label))
    }

    /// Returns the literal with the corresponding identifier.
    ///
    /// # Panics
    ///
    /// Panics if no literal has the corresponding identifier.
    pub fn get_atom_by_id(&self, id: usize) -> &Atom<T> {
        &self.atoms[id]
    }

    /// Provides an iterator to the literals, in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Atom<T>> {
        self.atoms.iter()
    }

    /// Returns the labels of the literals, in id order.
    pub fn labels(&self) -> Vec<T> {
        self.atoms.iter().map(|a| a.label.clone()).collect()
    }
}

impl<T> Display for Language<T>
where
    T: LabelType,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, a) in self.atoms.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", a)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_labels() {
        let labels = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let l = Language::new_with_labels(&labels);
        assert_eq!(3, l.len());
        assert!(!l.is_empty());
        for (i, a) in l.iter().enumerate() {
            assert_eq!(i, a.id());
            assert_eq!(&labels[i], a.label());
        }
    }

    #[test]
    fn test_new_empty() {
        let l = Language::new_with_labels(&[] as &[String]);
        assert_eq!(0, l.len());
        assert!(l.is_empty());
    }

    #[test]
    fn test_duplicate_label() {
        let labels = vec!["a", "a", "b"];
        let l = Language::new_with_labels(&labels);
        assert_eq!(2, l.len());
        assert_eq!(1, l.get_atom(&"b").unwrap().id());
    }

    #[test]
    fn test_contains() {
        let l = Language::new_with_labels(&["a", "b"]);
        assert!(l.contains(&"a"));
        assert!(!l.contains(&"c"));
    }

    #[test]
    fn test_get_atom_unknown_label() {
        let l = Language::new_with_labels(&["a", "b"]);
        l.get_atom(&"c").unwrap_err();
    }

    #[test]
    fn test_display() {
        let l = Language::new_with_labels(&["a", "b"]);
        assert_eq!("{a, b}", format!("{}", l));
    }

    #[test]
    fn test_labels_round_trip() {
        let l = Language::new_with_labels(&["a", "b"]);
        assert_eq!(vec!["a", "b"], l.labels());
    }
}
