use crate::classifier::categories::{parse_label, ERROR, NATIONALITY_CATEGORIES};
use crate::classifier::{ClassifierError, NameClassifier};

/// A model that turns a prompt into text.
pub trait TextGenerator: Send + Sync {
    fn generate(&self, prompt: &str) -> Result<String, ClassifierError>;
}

/// Asks an instruction-following model to pick one category per name.
///
/// One model call per name. A failed call marks only that name as
/// [`ERROR`]; the rest of the batch carries on.
pub struct GenerativeClassifier<G> {
    generator: G,
}

pub fn build_prompt(name: &str) -> String {
    format!(
        "You are a linguist who specialises in onomastics, the study of personal names. \
         Decide which geographic and linguistic origin is most likely for the name below.\n\n\
         Name: \"{name}\"\n\n\
         Pick the most probable origin from this list: {list}\n\n\
         Answer with exactly one word from the list.",
        list = NATIONALITY_CATEGORIES.join(", ")
    )
}

impl<G: TextGenerator> GenerativeClassifier<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    pub fn classify_one(&self, name: &str) -> String {
        match self.generator.generate(&build_prompt(name)) {
            Ok(raw) => parse_label(&raw),
            Err(e) => {
                tracing::warn!(name, error = %e, "classification failed for name");
                ERROR.to_string()
            }
        }
    }
}

impl<G: TextGenerator> NameClassifier for GenerativeClassifier<G> {
    fn strategy(&self) -> &str {
        "generative"
    }

    fn classify(&self, names: &[String]) -> Vec<String> {
        names.iter().map(|name| self.classify_one(name)).collect()
    }
}
