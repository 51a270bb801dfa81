use crate::classifier::categories::ERROR;
use crate::classifier::{ClassifierError, NameClassifier};

/// A classification head that scores a whole batch in one call and reports
/// its top label per input, in input order.
pub trait BatchLabeler: Send + Sync {
    fn top_labels(&self, inputs: &[String]) -> Result<Vec<String>, ClassifierError>;
}

pub struct DiscriminativeClassifier<M> {
    model: M,
}

impl<M: BatchLabeler> DiscriminativeClassifier<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }
}

impl<M: BatchLabeler> NameClassifier for DiscriminativeClassifier<M> {
    fn strategy(&self) -> &str {
        "discriminative"
    }

    /// Labels come straight from the model. A failed or short batch marks
    /// every name as [`ERROR`], since there is only the one call.
    fn classify(&self, names: &[String]) -> Vec<String> {
        if names.is_empty() {
            return Vec::new();
        }

        match self.model.top_labels(names) {
            Ok(labels) if labels.len() == names.len() => labels,
            Ok(labels) => {
                tracing::warn!(
                    expected = names.len(),
                    got = labels.len(),
                    "classifier returned the wrong number of labels"
                );
                vec![ERROR.to_string(); names.len()]
            }
            Err(e) => {
                tracing::warn!(error = %e, count = names.len(), "batch classification failed");
                vec![ERROR.to_string(); names.len()]
            }
        }
    }
}
