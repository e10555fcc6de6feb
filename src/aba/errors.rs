use std::fmt::Display;
use std::time::Duration;

/// The errors raised by the framework operations.
///
/// Each variant is a distinct, named condition the caller is expected to render to the user.
/// They are carried through [`anyhow::Error`] chains at the API edges and remain downcastable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbaError {
    /// A structural invariant of the framework does not hold; raised at construction, fatal to the call.
    InvalidFramework(String),
    /// A transform's precondition (circular, non-atomic) already fails to hold.
    ///
    /// Callers are expected to catch this condition and fall back to the untransformed framework.
    ConversionNotNeeded(String),
    /// A transform's postcondition does not hold after rewriting; indicates a modeling defect, never retried.
    ConversionFailed(String),
    /// Preference-modulated attacks were requested on a framework with no preferences.
    MissingPreferences,
    /// The preference-modulated attack computation exceeded its time budget.
    ComputationTimeout(Duration),
}

impl Display for AbaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AbaError::InvalidFramework(msg) => write!(f, "invalid framework: {}", msg),
            AbaError::ConversionNotNeeded(msg) => write!(f, "no conversion needed: {}", msg),
            AbaError::ConversionFailed(msg) => {
                write!(f, "something went wrong during conversion: {}", msg)
            }
            AbaError::MissingPreferences => {
                write!(f, "no preferences specified; cannot compute")
            }
            AbaError::ComputationTimeout(budget) => write!(
                f,
                "attack computation did not complete within {}s; try reducing the assumption set",
                budget.as_secs()
            ),
        }
    }
}

impl std::error::Error for AbaError {}
