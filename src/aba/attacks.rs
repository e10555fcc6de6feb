use super::{AbaFramework, ContraryMap, Leaf};
use crate::utils::LabelType;
use std::fmt::Display;

/// An attack between two arguments, given by their indices in the argument list of a framework.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Attack {
    source: usize,
    destination: usize,
}

impl Attack {
    /// Builds an attack from the source argument index to the destination argument index.
    pub fn new(source: usize, destination: usize) -> Self {
        Attack {
            source,
            destination,
        }
    }

    /// Returns the index of the attacking argument.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Returns the index of the attacked argument.
    pub fn destination(&self) -> usize {
        self.destination
    }
}

impl Display for Attack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "A{} attacks A{}", self.source, self.destination)
    }
}

impl<T> AbaFramework<T>
where
    T: LabelType,
{
    /// Computes the plain attacks between the arguments of the framework and stores them.
    ///
    /// An argument attacks another iff its claim belongs to the contrary set of one
    /// of the leaves of the attacked argument. Every ordered pair of argument
    /// indices is considered, self-attacks included.
    ///
    /// Arguments are synthesized first if needed; attacks already computed are kept as is.
    pub fn compute_attacks(&mut self) {
        if self.attacks().is_some() {
            return;
        }
        self.compute_arguments();
        let contraries = ContraryMap::from_contraries(self.contraries());
        let arguments = self.arguments().expect("just computed");
        let mut attacks = Vec::new();
        for (i, attacker) in arguments.iter().enumerate() {
            for (j, attacked) in arguments.iter().enumerate() {
                let is_attack = attacked.leaves().iter().any(|leaf| match leaf {
                    Leaf::Literal(l) => contraries.is_contrary(l, attacker.claim()),
                    Leaf::Empty => false,
                });
                if is_attack {
                    attacks.push(Attack::new(i, j));
                }
            }
        }
        self.set_attacks(attacks);
    }
}
