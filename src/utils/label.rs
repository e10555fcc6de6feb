use std::fmt::{Debug, Display};
use std::hash::Hash;

/// The trait for literal labels.
///
/// The literals of a framework may be labeled by any type that can be put in maps and displayed.
/// This trait is just a shortcut used to combine the required bounds.
///
/// Simple types like [usize] and [String] implement [LabelType].
pub trait LabelType: Clone + Debug + Display + Eq + Hash {}
impl<T: Clone + Debug + Display + Eq + Hash> LabelType for T {}
