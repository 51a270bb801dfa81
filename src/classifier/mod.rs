mod categories;
mod classifier_error;
pub mod discriminative;
mod ensemble;
pub mod generative;
pub mod huggingface;
mod surname;

pub use categories::{parse_label, ERROR, NATIONALITY_CATEGORIES, UNKNOWN};
pub use classifier_error::ClassifierError;
pub use discriminative::{BatchLabeler, DiscriminativeClassifier};
pub use ensemble::{EnsembleClassifier, EnsembleRecord};
pub use generative::{GenerativeClassifier, TextGenerator};
pub use huggingface::{HostedModel, UnavailableModel};
pub use surname::SurnameClassifier;

use std::sync::Arc;
use std::time::Duration;

/// Name → label capability. Implementations return exactly one label per
/// input, in input order, and must not call a model for an empty slice.
pub trait NameClassifier: Send + Sync {
    fn strategy(&self) -> &str;
    fn classify(&self, names: &[String]) -> Vec<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Strategy {
    Generative,
    Discriminative,
    Surname,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Generative => "generative",
            Strategy::Discriminative => "discriminative",
            Strategy::Surname => "surname",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ModelSettings {
    pub base_url: String,
    pub token: Option<String>,
    pub generative_model: String,
    pub classifier_model: Option<String>,
    pub timeout: Duration,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            base_url: huggingface::DEFAULT_BASE_URL.to_string(),
            token: None,
            generative_model: huggingface::DEFAULT_GENERATIVE_MODEL.to_string(),
            classifier_model: None,
            timeout: Duration::from_secs(30),
        }
    }
}

fn hosted(settings: &ModelSettings, model: Option<&str>) -> Result<HostedModel, ClassifierError> {
    let model = model.ok_or_else(|| ClassifierError::Unavailable("no model configured".into()))?;
    HostedModel::new(
        &settings.base_url,
        model,
        settings.token.clone(),
        settings.timeout,
    )
}

fn load_generative(settings: &ModelSettings) -> Arc<dyn NameClassifier> {
    tracing::info!(model = %settings.generative_model, "loading generative name model");
    match hosted(settings, Some(&settings.generative_model)) {
        Ok(model) => {
            tracing::info!("generative name model loaded");
            Arc::new(GenerativeClassifier::new(model))
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to load generative model; names will be labelled Error");
            Arc::new(GenerativeClassifier::new(UnavailableModel::new(e.to_string())))
        }
    }
}

fn load_discriminative(settings: &ModelSettings) -> Arc<dyn NameClassifier> {
    tracing::info!(model = ?settings.classifier_model, "loading name classification model");
    match hosted(settings, settings.classifier_model.as_deref()) {
        Ok(model) => {
            tracing::info!("name classification model loaded");
            Arc::new(DiscriminativeClassifier::new(model))
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to load classification model; names will be labelled Error");
            Arc::new(DiscriminativeClassifier::new(UnavailableModel::new(e.to_string())))
        }
    }
}

/// Builds the strategy used for ZIP analyses. Called once at startup.
pub fn load_classifier(strategy: Strategy, settings: &ModelSettings) -> Arc<dyn NameClassifier> {
    match strategy {
        Strategy::Generative => load_generative(settings),
        Strategy::Discriminative => load_discriminative(settings),
        Strategy::Surname => Arc::new(SurnameClassifier),
    }
}

/// Every strategy side by side for the comparison view. The primary
/// classifier is reused rather than loaded twice.
pub fn load_ensemble(primary: Arc<dyn NameClassifier>, settings: &ModelSettings) -> EnsembleClassifier {
    let mut members = vec![primary.clone()];
    for strategy in [Strategy::Generative, Strategy::Discriminative, Strategy::Surname] {
        if strategy.as_str() == primary.strategy() {
            continue;
        }
        if strategy == Strategy::Discriminative && settings.classifier_model.is_none() {
            // Without a configured model this column would be all errors.
            continue;
        }
        members.push(load_classifier(strategy, settings));
    }
    EnsembleClassifier::new(members)
}
