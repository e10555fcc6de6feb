use super::{AbaFramework, Leaf};
use crate::utils::LabelType;
use std::collections::HashMap;
use std::fmt::Display;

/// An argument: a claim justified by the tuple of its supporting leaves.
///
/// The leaves are the assumptions supporting the claim, or the single empty
/// literal when the claim is derived from a fact. Two arguments are equal iff
/// both their claim and their leaves match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Argument<T>
where
    T: LabelType,
{
    claim: T,
    leaves: Vec<Leaf<T>>,
}

impl<T> Argument<T>
where
    T: LabelType,
{
    /// Builds an argument from its claim and supporting leaves.
    pub fn new(claim: T, leaves: Vec<Leaf<T>>) -> Self {
        Argument { claim, leaves }
    }

    /// Builds the argument an assumption always provides for itself.
    pub fn reflexive(assumption: T) -> Self {
        Argument {
            claim: assumption.clone(),
            leaves: vec![Leaf::Literal(assumption)],
        }
    }

    /// Returns the claim of the argument.
    pub fn claim(&self) -> &T {
        &self.claim
    }

    /// Returns the supporting leaves of the argument.
    pub fn leaves(&self) -> &[Leaf<T>] {
        &self.leaves
    }
}

impl<T> Display for Argument<T>
where
    T: LabelType,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, l) in self.leaves.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", l)?;
        }
        write!(f, "}} |- {}", self.claim)
    }
}

impl<T> AbaFramework<T>
where
    T: LabelType,
{
    /// Synthesizes the arguments derivable from the assumptions and stores them on the framework.
    ///
    /// Every closure path contributes a claim-to-leaf pair; the leaves accumulated
    /// by a claim are restricted to assumptions (a claim whose single path ends on
    /// the empty literal keeps it). One reflexive argument per assumption is then
    /// appended when not already present.
    ///
    /// Arguments already computed are kept as is.
    pub fn compute_arguments(&mut self) {
        if self.arguments().is_some() {
            return;
        }
        let mut claims: Vec<T> = Vec::new();
        let mut leaves_by_claim: HashMap<T, Vec<Leaf<T>>> = HashMap::new();
        for derived in self.derive_rules() {
            for path in derived.to_paths() {
                let claim = match path.first() {
                    Some(Leaf::Literal(l)) => l.clone(),
                    _ => continue,
                };
                let leaf = path.last().expect("paths hold at least the head").clone();
                leaves_by_claim
                    .entry(claim.clone())
                    .or_insert_with(|| {
                        claims.push(claim.clone());
                        Vec::new()
                    })
                    .push(leaf);
            }
        }
        let mut arguments = Vec::new();
        for claim in claims {
            let leaves = &leaves_by_claim[&claim];
            if leaves.len() > 1 {
                let assumption_leaves = leaves
                    .iter()
                    .filter(
                        |leaf| matches!(leaf, Leaf::Literal(l) if self.is_assumption(l)),
                    )
                    .cloned()
                    .collect();
                arguments.push(Argument::new(claim, assumption_leaves));
            } else {
                let keep = match &leaves[0] {
                    Leaf::Literal(l) => self.is_assumption(l),
                    Leaf::Empty => true,
                };
                if keep {
                    arguments.push(Argument::new(claim, vec![leaves[0].clone()]));
                }
            }
        }
        for assumption in self.assumption_labels() {
            let reflexive = Argument::reflexive(assumption);
            if !arguments.contains(&reflexive) {
                arguments.push(reflexive);
            }
        }
        self.set_arguments(arguments);
    }
}
