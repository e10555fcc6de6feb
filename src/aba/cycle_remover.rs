use super::{AbaError, AbaFramework, Body, BodyElement, Language, Rule};
use crate::utils::LabelType;

/// The type of the functions building the level-indexed copies of a literal label.
pub type IndexedLabelFn<T> = dyn Fn(&T, usize) -> T;

/// A structure used to rewrite a circular framework into a non-circular one.
///
/// The rewrite stratifies the rules over `k = |language \ assumptions|` levels:
/// atomic rules are replicated under level-indexed heads, while the
/// non-assumption literals in non-atomic rule bodies are pushed one level down.
/// No path of the rewritten framework can go through the same literal twice,
/// since levels strictly decrease along derivations.
pub struct CycleRemover<T>
where
    T: LabelType,
{
    new_label_fn: Box<IndexedLabelFn<T>>,
}

impl CycleRemover<String> {
    /// Creates a remover for string-labelled frameworks, indexing literals by suffixing the level.
    pub fn new_for_strings() -> Self {
        CycleRemover::new_with_label_fn(Box::new(|label, level| format!("{}{}", label, level)))
    }
}

impl<T> CycleRemover<T>
where
    T: LabelType,
{
    /// Creates a remover given a function used to build the level-indexed literal labels.
    ///
    /// Given a label of the initial framework and a level, this function must output a unique label.
    pub fn new_with_label_fn(new_label_fn: Box<IndexedLabelFn<T>>) -> Self {
        Self { new_label_fn }
    }

    /// Rewrites a circular framework into a non-circular one.
    ///
    /// [`AbaError::ConversionNotNeeded`] is returned if the framework is not circular;
    /// [`AbaError::ConversionFailed`] is returned if the rewritten framework
    /// unexpectedly remains circular.
    pub fn remove_cycles(&self, framework: &AbaFramework<T>) -> Result<AbaFramework<T>, AbaError> {
        if !framework.is_circular() {
            return Err(AbaError::ConversionNotNeeded(
                "the framework already is non-circular".to_string(),
            ));
        }
        let k = framework.language().len() - framework.n_assumptions();
        let mut labels = framework.language().labels();
        let mut new_rules = Vec::new();
        for rule in framework.rules() {
            if framework.is_atomic_rule(rule) {
                for level in 1..=k {
                    if level != k {
                        let head = (self.new_label_fn)(rule.head(), level);
                        labels.push(head.clone());
                        new_rules.push(Rule::new(head, rule.body().clone()));
                    } else {
                        new_rules.push(rule.clone());
                    }
                }
            } else {
                for level in 2..=k {
                    let body = self.indexed_body(framework, rule.body(), level - 1, &mut labels);
                    let head = if level != k {
                        let head = (self.new_label_fn)(rule.head(), level);
                        labels.push(head.clone());
                        head
                    } else {
                        rule.head().clone()
                    };
                    new_rules.push(Rule::new(head, body));
                }
            }
        }
        let converted = AbaFramework::try_new(
            Language::new_with_labels(&labels),
            &framework.assumption_labels(),
            new_rules,
            framework.contraries().to_vec(),
            framework.preferences().to_vec(),
        )
        .map_err(|e| AbaError::ConversionFailed(e.to_string()))?;
        if converted.is_circular() {
            return Err(AbaError::ConversionFailed(
                "the rewritten framework still is circular".to_string(),
            ));
        }
        Ok(converted)
    }

    fn indexed_body(
        &self,
        framework: &AbaFramework<T>,
        body: &Body<T>,
        level: usize,
        labels: &mut Vec<T>,
    ) -> Body<T> {
        match body {
            Body::Literal(l) => Body::Literal(self.indexed_literal(framework, l, level, labels)),
            Body::Tuple(elements) => Body::Tuple(
                elements
                    .iter()
                    .map(|e| match e {
                        BodyElement::Literal(l) => BodyElement::Literal(
                            self.indexed_literal(framework, l, level, labels),
                        ),
                        // nested rules only appear in closures, never in framework rules
                        BodyElement::Rule(_) => e.clone(),
                    })
                    .collect(),
            ),
            _ => body.clone(),
        }
    }

    fn indexed_literal(
        &self,
        framework: &AbaFramework<T>,
        literal: &T,
        level: usize,
        labels: &mut Vec<T>,
    ) -> T {
        if framework.is_assumption(literal) {
            literal.clone()
        } else {
            let indexed = (self.new_label_fn)(literal, level);
            labels.push(indexed.clone());
            indexed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aba::Contrary;

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

    fn self_supporting_ex() -> AbaFramework<String> {
        let language = Language::new_with_labels(&[s("a"), s("b"), s("x"), s("y"), s("z")]);
        let rules = vec![
            Rule::new(s("y"), Body::Literal(s("b"))),
            Rule::new(s("y"), Body::Literal(s("y"))),
            Rule::new(s("x"), Body::Literal(s("x"))),
            Rule::new(s("x"), Body::Literal(s("a"))),
            Rule::new(s("z"), tuple_body(&["x", "y"])),
        ];
        let contraries = vec![Contrary::new(s("a"), s("z"))];
        AbaFramework::try_new(language, &[s("a"), s("b")], rules, contraries, vec![]).unwrap()
    }

    #[test]
    fn test_remove_cycles() {
        let framework = self_supporting_ex();
        assert!(framework.is_circular());
        let converted = CycleRemover::new_for_strings()
            .remove_cycles(&framework)
            .unwrap();
        assert!(!converted.is_circular());
        assert_eq!(12, converted.rules().len());
        // atomic rules are replicated along the level ladder
        assert_eq!(
            &Rule::new(s("y1"), Body::Literal(s("b"))),
            &converted.rules()[0]
        );
        assert_eq!(
            &Rule::new(s("y"), Body::Literal(s("b"))),
            &converted.rules()[2]
        );
        // the self-supporting rule now refers to the previous level
        assert_eq!(
            &Rule::new(s("y2"), Body::Literal(s("y1"))),
            &converted.rules()[3]
        );
        assert_eq!(
            &Rule::new(s("z"), tuple_body(&["x2", "y2"])),
            &converted.rules()[11]
        );
        for l in ["y1", "y2", "x1", "x2", "z2"] {
            assert!(converted.language().contains(&s(l)));
        }
        assert_eq!(2, converted.n_assumptions());
    }

    #[test]
    fn test_remove_cycles_keeps_assumption_body_literals() {
        let framework = self_supporting_ex();
        let converted = CycleRemover::new_for_strings()
            .remove_cycles(&framework)
            .unwrap();
        // bodies made of assumptions are untouched by the indexing
        assert!(converted
            .rules()
            .iter()
            .any(|r| r == &Rule::new(s("x1"), Body::Literal(s("a")))));
    }

    #[test]
    fn test_remove_cycles_not_needed() {
        let language = Language::new_with_labels(&[s("a"), s("p")]);
        let rules = vec![Rule::new(s("p"), Body::Literal(s("a")))];
        let framework =
            AbaFramework::try_new(language, &[s("a")], rules, vec![], vec![]).unwrap();
        match CycleRemover::new_for_strings().remove_cycles(&framework) {
            Err(AbaError::ConversionNotNeeded(_)) => {}
            r => panic!("unexpected result: {:?}", r),
        }
    }
}
