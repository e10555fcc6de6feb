use super::{
    AbaError, AbaFramework, Body, BodyElement, Contrary, CycleRemover, Language, Rule,
};
use crate::utils::LabelType;

/// The type of the functions building the defended/not-defended guard labels of a literal.
pub type GuardLabelsFn<T> = dyn Fn(&T) -> (T, T);

/// A structure used to rewrite a framework into an atomic one.
///
/// Each non-assumption literal `l` gains a "defended" and a "not defended"
/// guard, both added to the language and the assumptions, with the
/// not-defended guard contrary to the defended one and `l` contrary to the
/// not-defended guard; rule bodies then refer to the defended guards only,
/// which makes every rule atomic. A circular framework is first rewritten by
/// the given [`CycleRemover`].
pub struct Atomizer<T>
where
    T: LabelType,
{
    guard_labels_fn: Box<GuardLabelsFn<T>>,
    cycle_remover: CycleRemover<T>,
}

impl Atomizer<String> {
    /// Creates an atomizer for string-labelled frameworks, guarding `l` with `l_d` and `l_nd`.
    pub fn new_for_strings() -> Self {
        Atomizer::new_with_label_fns(
            Box::new(|label| (format!("{}_d", label), format!("{}_nd", label))),
            CycleRemover::new_for_strings(),
        )
    }
}

impl<T> Atomizer<T>
where
    T: LabelType,
{
    /// Creates an atomizer given a guard label factory and the cycle remover to apply first when needed.
    ///
    /// Given a non-assumption label, the factory must output a unique (defended, not defended) label pair.
    pub fn new_with_label_fns(
        guard_labels_fn: Box<GuardLabelsFn<T>>,
        cycle_remover: CycleRemover<T>,
    ) -> Self {
        Self {
            guard_labels_fn,
            cycle_remover,
        }
    }

    /// Rewrites a framework into an atomic one.
    ///
    /// [`AbaError::ConversionNotNeeded`] is returned if the framework (once
    /// non-circular) already is atomic; [`AbaError::ConversionFailed`] is
    /// returned if the rewritten framework unexpectedly remains non-atomic.
    pub fn atomize(&self, framework: &AbaFramework<T>) -> Result<AbaFramework<T>, AbaError> {
        let decircularized;
        let framework = if framework.is_circular() {
            decircularized = self.cycle_remover.remove_cycles(framework)?;
            &decircularized
        } else {
            framework
        };
        if framework.is_atomic() {
            return Err(AbaError::ConversionNotNeeded(
                "the framework already is atomic".to_string(),
            ));
        }
        let mut labels = framework.language().labels();
        let mut assumptions = framework.assumption_labels();
        let mut contraries = framework.contraries().to_vec();
        for atom in framework.language().iter() {
            if !framework.is_assumption(atom.label()) {
                let (defended, not_defended) = (self.guard_labels_fn)(atom.label());
                labels.push(defended.clone());
                labels.push(not_defended.clone());
                assumptions.push(defended.clone());
                assumptions.push(not_defended.clone());
                contraries.push(Contrary::new(defended, not_defended.clone()));
                contraries.push(Contrary::new(not_defended, atom.label().clone()));
            }
        }
        let new_rules = framework
            .rules()
            .iter()
            .map(|r| Rule::new(r.head().clone(), self.guarded_body(framework, r.body())))
            .collect();
        let converted = AbaFramework::try_new(
            Language::new_with_labels(&labels),
            &assumptions,
            new_rules,
            contraries,
            framework.preferences().to_vec(),
        )
        .map_err(|e| AbaError::ConversionFailed(e.to_string()))?;
        if !converted.is_atomic() {
            return Err(AbaError::ConversionFailed(
                "the rewritten framework still is not atomic".to_string(),
            ));
        }
        Ok(converted)
    }

    fn guarded_body(&self, framework: &AbaFramework<T>, body: &Body<T>) -> Body<T> {
        match body {
            Body::Literal(l) => Body::Literal(self.guarded_literal(framework, l)),
            Body::Tuple(elements) => Body::Tuple(
                elements
                    .iter()
                    .map(|e| match e {
                        BodyElement::Literal(l) => {
                            BodyElement::Literal(self.guarded_literal(framework, l))
                        }
                        // nested rules only appear in closures, never in framework rules
                        BodyElement::Rule(_) => e.clone(),
                    })
                    .collect(),
            ),
            _ => body.clone(),
        }
    }

    fn guarded_literal(&self, framework: &AbaFramework<T>, literal: &T) -> T {
        if framework.is_assumption(literal) {
            literal.clone()
        } else {
            (self.guard_labels_fn)(literal).0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(label: &str) -> String {
        label.to_string()
    }

    fn tuple_body(literals: &[&str]) -> Body<String> {
        Body::Tuple(
            literals
                .iter()
                .map(|l| BodyElement::Literal(s(l)))
                .collect(),
        )
    }

    fn toni_tutorial_ex() -> AbaFramework<String> {
        let language = Language::new_with_labels(&[
            s("a"),
            s("b"),
            s("c"),
            s("q"),
            s("p"),
            s("r"),
            s("s"),
            s("t"),
        ]);
        let rules = vec![
            Rule::new(s("p"), tuple_body(&["q", "a"])),
            Rule::new(s("q"), Body::Empty),
            Rule::new(s("r"), tuple_body(&["b", "c"])),
            Rule::new(s("t"), tuple_body(&["p", "c"])),
            Rule::new(s("s"), Body::Literal(s("t"))),
        ];
        let contraries = vec![
            Contrary::new(s("a"), s("r")),
            Contrary::new(s("b"), s("s")),
            Contrary::new(s("c"), s("t")),
        ];
        AbaFramework::try_new(language, &[s("a"), s("b"), s("c")], rules, contraries, vec![])
            .unwrap()
    }

    #[test]
    fn test_atomize() {
        let framework = toni_tutorial_ex();
        assert!(!framework.is_atomic());
        let converted = Atomizer::new_for_strings().atomize(&framework).unwrap();
        assert!(converted.is_atomic());
        // every non-assumption literal got two guard assumptions
        for l in ["q", "p", "r", "s", "t"] {
            assert!(converted.is_assumption(&format!("{}_d", l)));
            assert!(converted.is_assumption(&format!("{}_nd", l)));
        }
        assert_eq!(3 + 10, converted.n_assumptions());
        // bodies refer to the defended guards, heads are untouched
        assert_eq!(
            &Rule::new(s("p"), tuple_body(&["q_d", "a"])),
            &converted.rules()[0]
        );
        assert_eq!(
            &Rule::new(s("s"), Body::Literal(s("t_d"))),
            &converted.rules()[4]
        );
        // guard contrariness: q_nd contrary of q_d, q contrary of q_nd
        assert!(converted
            .contraries()
            .contains(&Contrary::new(s("q_d"), s("q_nd"))));
        assert!(converted
            .contraries()
            .contains(&Contrary::new(s("q_nd"), s("q"))));
    }

    #[test]
    fn test_atomize_not_needed() {
        let language = Language::new_with_labels(&[s("a"), s("p")]);
        let rules = vec![Rule::new(s("p"), Body::Literal(s("a")))];
        let framework =
            AbaFramework::try_new(language, &[s("a")], rules, vec![], vec![]).unwrap();
        match Atomizer::new_for_strings().atomize(&framework) {
            Err(AbaError::ConversionNotNeeded(_)) => {}
            r => panic!("unexpected result: {:?}", r),
        }
    }

    #[test]
    fn test_atomize_removes_cycles_first() {
        let language = Language::new_with_labels(&[s("a"), s("x"), s("y")]);
        let rules = vec![
            Rule::new(s("x"), Body::Literal(s("x"))),
            Rule::new(s("x"), Body::Literal(s("a"))),
            Rule::new(s("y"), Body::Literal(s("x"))),
        ];
        let framework =
            AbaFramework::try_new(language, &[s("a")], rules, vec![], vec![]).unwrap();
        assert!(framework.is_circular());
        let converted = Atomizer::new_for_strings().atomize(&framework).unwrap();
        assert!(converted.is_atomic());
        assert!(!converted.is_circular());
    }
}
