use crate::classifier::NameClassifier;
use std::sync::Arc;

/// One name with every strategy's label, side by side.
#[derive(Debug, Clone, PartialEq)]
pub struct EnsembleRecord {
    pub name: String,
    /// `(strategy, label)` in the ensemble's strategy order.
    pub labels: Vec<(String, String)>,
}

impl EnsembleRecord {
    pub fn label_for(&self, strategy: &str) -> Option<&str> {
        self.labels
            .iter()
            .find(|(s, _)| s == strategy)
            .map(|(_, l)| l.as_str())
    }

    /// True when every strategy produced the same label.
    pub fn is_unanimous(&self) -> bool {
        self.labels.windows(2).all(|w| w[0].1 == w[1].1)
    }
}

/// Runs several strategies over the same names for comparison. Labels are
/// reported per strategy, never merged into a vote.
#[derive(Clone, Default)]
pub struct EnsembleClassifier {
    members: Vec<Arc<dyn NameClassifier>>,
}

impl EnsembleClassifier {
    pub fn new(members: Vec<Arc<dyn NameClassifier>>) -> Self {
        Self { members }
    }

    pub fn strategies(&self) -> Vec<&str> {
        self.members.iter().map(|m| m.strategy()).collect()
    }

    pub fn compare(&self, names: &[String]) -> Vec<EnsembleRecord> {
        if names.is_empty() {
            return Vec::new();
        }

        // One batch per strategy, then transpose into per-name records.
        let columns: Vec<(&str, Vec<String>)> = self
            .members
            .iter()
            .map(|m| (m.strategy(), m.classify(names)))
            .collect();

        names
            .iter()
            .enumerate()
            .map(|(i, name)| EnsembleRecord {
                name: name.clone(),
                labels: columns
                    .iter()
                    .map(|(strategy, labels)| {
                        let label = labels
                            .get(i)
                            .cloned()
                            .unwrap_or_else(|| crate::classifier::ERROR.to_string());
                        (strategy.to_string(), label)
                    })
                    .collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::SurnameClassifier;

    struct Constant(&'static str, &'static str);

    impl NameClassifier for Constant {
        fn strategy(&self) -> &str {
            self.0
        }

        fn classify(&self, names: &[String]) -> Vec<String> {
            vec![self.1.to_string(); names.len()]
        }
    }

    #[test]
    fn one_label_per_strategy_per_name() {
        let ensemble = EnsembleClassifier::new(vec![
            Arc::new(SurnameClassifier),
            Arc::new(Constant("always-irish", "Irish")),
        ]);
        assert_eq!(ensemble.strategies(), vec!["surname", "always-irish"]);

        let names = vec!["Maria Garcia".to_string(), "Sean Murphy".to_string()];
        let records = ensemble.compare(&names);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Maria Garcia");
        assert_eq!(records[0].label_for("surname"), Some("Spanish"));
        assert_eq!(records[0].label_for("always-irish"), Some("Irish"));
        assert!(!records[0].is_unanimous());
        assert!(records[1].is_unanimous());
        assert_eq!(records[1].label_for("missing"), None);
    }

    #[test]
    fn empty_names_no_records() {
        let ensemble = EnsembleClassifier::new(vec![Arc::new(SurnameClassifier)]);
        assert!(ensemble.compare(&[]).is_empty());
    }
}
