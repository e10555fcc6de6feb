//! A module containing the material needed to handle Assumption-based Argumentation frameworks.

mod arguments;
pub use arguments::Argument;

mod atomizer;
pub use atomizer::Atomizer;
pub use atomizer::GuardLabelsFn;

mod attacks;
pub use attacks::Attack;

mod contrary;
pub use contrary::Contrary;
pub use contrary::ContraryMap;

mod cycle_remover;
pub use cycle_remover::CycleRemover;
pub use cycle_remover::IndexedLabelFn;

mod derivation;

mod errors;
pub use errors::AbaError;

mod framework;
pub use framework::AbaFramework;

mod language;
pub use language::Atom;
pub use language::Language;

mod preference;
pub use preference::Preference;
pub use preference::PreferenceMap;

mod preference_attacks;
pub use preference_attacks::assumption_subsets;
pub use preference_attacks::SubsetAttack;
pub use preference_attacks::PREFERENCE_ATTACKS_TIMEOUT;

mod rule;
pub use rule::Body;
pub use rule::BodyElement;
pub use rule::Leaf;
pub use rule::Rule;
