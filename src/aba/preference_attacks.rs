use super::{AbaError, AbaFramework, ContraryMap, Leaf, PreferenceMap};
use crate::utils::{CancellationToken, LabelType};
use permutator::Combination;
use std::collections::HashSet;
use std::fmt::Display;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// The wall-clock budget granted to a preference-modulated attack computation.
pub const PREFERENCE_ATTACKS_TIMEOUT: Duration = Duration::from_secs(60);

/// A preference-modulated attack between two subsets of the assumptions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubsetAttack<T>
where
    T: LabelType,
{
    source: Vec<T>,
    destination: Vec<T>,
}

impl<T> SubsetAttack<T>
where
    T: LabelType,
{
    /// Builds an attack from a source assumption subset to a destination one.
    pub fn new(source: Vec<T>, destination: Vec<T>) -> Self {
        SubsetAttack {
            source,
            destination,
        }
    }

    /// Returns the attacking assumption subset.
    pub fn source(&self) -> &[T] {
        &self.source
    }

    /// Returns the attacked assumption subset.
    pub fn destination(&self) -> &[T] {
        &self.destination
    }
}

impl<T> Display for SubsetAttack<T>
where
    T: LabelType,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let write_subset = |f: &mut std::fmt::Formatter<'_>, subset: &[T]| {
            write!(f, "{{")?;
            for (i, a) in subset.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", a)?;
            }
            write!(f, "}}")
        };
        write_subset(f, &self.source)?;
        write!(f, " -> ")?;
        write_subset(f, &self.destination)
    }
}

/// Enumerates the power set of the provided assumptions.
///
/// Subsets are listed by increasing size, starting with the empty one, the
/// elements of each keeping the declaration order of the assumptions.
///
/// # Example
///
/// ```
/// # use abagen::aba::assumption_subsets;
/// assert_eq!(8, assumption_subsets(&["a", "b", "c"]).len());
/// ```
pub fn assumption_subsets<T>(assumptions: &[T]) -> Vec<Vec<T>>
where
    T: LabelType,
{
    let mut subsets = Vec::with_capacity(1 << assumptions.len());
    subsets.push(Vec::new());
    for size in 1..=assumptions.len() {
        assumptions
            .combination(size)
            .for_each(|c| subsets.push(c.into_iter().cloned().collect()));
    }
    subsets
}

struct DedupedAttacks<T>
where
    T: LabelType,
{
    seen: HashSet<SubsetAttack<T>>,
    attacks: Vec<SubsetAttack<T>>,
}

impl<T> DedupedAttacks<T>
where
    T: LabelType,
{
    fn new() -> Self {
        DedupedAttacks {
            seen: HashSet::new(),
            attacks: Vec::new(),
        }
    }

    fn insert(&mut self, attack: SubsetAttack<T>) {
        if self.seen.insert(attack.clone()) {
            self.attacks.push(attack);
        }
    }
}

fn leaves_within<T>(leaves: &[Leaf<T>], subset: &[T]) -> bool
where
    T: LabelType,
{
    leaves.iter().all(|leaf| match leaf {
        Leaf::Literal(l) => subset.contains(l),
        Leaf::Empty => false,
    })
}

/// Computes the normal and reverse attacks of a framework over its assumption subsets.
///
/// Returns `None` when the provided token is cancelled before the enumeration completes.
/// Arguments are synthesized on the framework first if needed.
pub(crate) fn compute_subset_attacks<T>(
    framework: &mut AbaFramework<T>,
    token: &CancellationToken,
) -> Option<(Vec<SubsetAttack<T>>, Vec<SubsetAttack<T>>)>
where
    T: LabelType,
{
    framework.compute_arguments();
    let subsets = assumption_subsets(&framework.assumption_labels());
    let contraries = ContraryMap::from_contraries(framework.contraries());
    let preferences = PreferenceMap::from_preferences(framework.preferences());
    let arguments = framework.arguments().expect("just computed");
    let mut normal = DedupedAttacks::new();
    let mut reverse = DedupedAttacks::new();
    for source in &subsets {
        if token.is_cancelled() {
            return None;
        }
        for destination in &subsets {
            if token.is_cancelled() {
                return None;
            }
            for argument in arguments {
                if leaves_within(argument.leaves(), source) {
                    for y in destination {
                        // the attacked assumption must not be preferred over a supporting leaf
                        if contraries.is_contrary(y, argument.claim())
                            && !argument.leaves().iter().any(|leaf| {
                                matches!(leaf, Leaf::Literal(x) if preferences.is_preferred_over(x, y))
                            })
                        {
                            normal.insert(SubsetAttack::new(source.clone(), destination.clone()));
                        }
                    }
                }
                if leaves_within(argument.leaves(), destination) {
                    for x in source {
                        // the would-be attacker is itself defeated by a preferred leaf
                        if contraries.is_contrary(x, argument.claim())
                            && argument.leaves().iter().any(|leaf| {
                                matches!(leaf, Leaf::Literal(y) if preferences.is_preferred_over(y, x))
                            })
                        {
                            reverse.insert(SubsetAttack::new(source.clone(), destination.clone()));
                        }
                    }
                }
            }
        }
    }
    Some((normal.attacks, reverse.attacks))
}

impl<T> AbaFramework<T>
where
    T: LabelType + Send + 'static,
{
    /// Computes the preference-modulated normal and reverse attacks and stores them.
    ///
    /// The subset enumeration is exponential in the number of assumptions, so it is
    /// dispatched to a worker thread and joined for at most the provided budget.
    /// On timeout the worker is cancelled through its token and
    /// [`AbaError::ComputationTimeout`] is returned; a framework with no preferences
    /// is rejected upfront with [`AbaError::MissingPreferences`].
    ///
    /// On success the framework also holds the arguments synthesized on the way.
    /// Attacks already computed are kept as is.
    pub fn compute_preference_attacks(&mut self, budget: Duration) -> Result<(), AbaError> {
        if self.preferences().is_empty() {
            return Err(AbaError::MissingPreferences);
        }
        if self.normal_attacks().is_some() && self.reverse_attacks().is_some() {
            return Ok(());
        }
        let token = CancellationToken::new();
        let worker_token = token.clone();
        let mut worker_framework = self.clone();
        let (sender, receiver) = mpsc::channel();
        thread::spawn(move || {
            let outcome = compute_subset_attacks(&mut worker_framework, &worker_token).map(
                |(normal, reverse)| {
                    worker_framework.set_subset_attacks(normal, reverse);
                    worker_framework
                },
            );
            let _ = sender.send(outcome);
        });
        match receiver.recv_timeout(budget) {
            Ok(Some(computed)) => {
                *self = computed;
                Ok(())
            }
            Ok(None) | Err(_) => {
                token.cancel();
                Err(AbaError::ComputationTimeout(budget))
            }
        }
    }
}
