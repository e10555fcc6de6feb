use crate::utils::LabelType;
use std::collections::HashMap;
use std::fmt::Display;

/// A preference fact over assumptions: `least` is strictly less preferred than `most`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preference<T>
where
    T: LabelType,
{
    least: T,
    most: T,
}

impl<T> Preference<T>
where
    T: LabelType,
{
    /// Builds a preference fact stating `least < most`.
    pub fn new(least: T, most: T) -> Self {
        Preference { least, most }
    }

    /// Returns the less preferred assumption.
    pub fn least(&self) -> &T {
        &self.least
    }

    /// Returns the more preferred assumption.
    pub fn most(&self) -> &T {
        &self.most
    }
}

impl<T> Display for Preference<T>
where
    T: LabelType,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} < {}", self.least, self.most)
    }
}

/// The projection of a set of preference facts as a least-to-mosts map.
pub struct PreferenceMap<T>
where
    T: LabelType,
{
    map: HashMap<T, Vec<T>>,
}

impl<T> PreferenceMap<T>
where
    T: LabelType,
{
    /// Gathers a set of preference facts, accumulating the "most" sets in declaration order.
    pub fn from_preferences(preferences: &[Preference<T>]) -> Self {
        let mut map: HashMap<T, Vec<T>> = HashMap::new();
        for p in preferences {
            map.entry(p.least.clone()).or_default().push(p.most.clone());
        }
        PreferenceMap { map }
    }

    /// Returns the assumptions preferred over the provided one, or `None` if there are none.
    pub fn preferred_over(&self, least: &T) -> Option<&[T]> {
        self.map.get(least).map(|v| v.as_slice())
    }

    /// Returns `true` iff `most` is declared preferred over `least`.
    pub fn is_preferred_over(&self, least: &T, most: &T) -> bool {
        self.preferred_over(least)
            .map_or(false, |mosts| mosts.contains(most))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_accumulates() {
        let preferences = vec![Preference::new("b", "a"), Preference::new("b", "c")];
        let map = PreferenceMap::from_preferences(&preferences);
        assert_eq!(Some(&["a", "c"] as &[&str]), map.preferred_over(&"b"));
        assert_eq!(None, map.preferred_over(&"a"));
    }

    #[test]
    fn test_is_preferred_over() {
        let map = PreferenceMap::from_preferences(&[Preference::new("b", "a")]);
        assert!(map.is_preferred_over(&"b", &"a"));
        assert!(!map.is_preferred_over(&"a", &"b"));
    }

    #[test]
    fn test_display() {
        assert_eq!("b < a", format!("{}", Preference::new("b", "a")));
    }
}
