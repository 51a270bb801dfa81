use crate::attom::{AttomClient, PropertySource};
use crate::classifier::{load_classifier, load_ensemble};
use crate::config::{Cli, Command};
use crate::router::{handle, AppState};
use astra::Server;
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod attom;
mod classifier;
mod cli;
mod config;
mod domain;
mod errors;
mod pipeline;
mod responses;
mod router;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "property_explorer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let args = Cli::parse();
    init_tracing();

    // 1️⃣ Records API client
    let attom = match AttomClient::new(args.api.settings()) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "could not build records API client");
            std::process::exit(1);
        }
    };
    if !attom.has_api_key() {
        tracing::warn!("ATTOM_API_KEY is not set; every lookup will fail with a configuration error");
    }
    let properties: Arc<dyn PropertySource> = Arc::new(attom);

    // 2️⃣ Name model, loaded once for the life of the process
    let model_settings = args.model.settings();
    let classifier = load_classifier(args.model.classifier, &model_settings);

    let outcome = match args.command() {
        Command::Serve => {
            let ensemble = load_ensemble(classifier.clone(), &model_settings);
            serve(
                &args,
                AppState {
                    properties,
                    classifier,
                    ensemble,
                },
            );
            Ok(())
        }
        Command::Lookup {
            street,
            city,
            state,
            zip,
            json,
        } => cli::run_lookup(
            properties.as_ref(),
            &street,
            &city,
            &state,
            zip.as_deref(),
            json,
        ),
        Command::Analyze { zip } => cli::run_analyze(properties.as_ref(), classifier.as_ref(), &zip),
        Command::Compare { names } => {
            cli::run_compare(&load_ensemble(classifier, &model_settings), &names);
            Ok(())
        }
    };

    if let Err(e) = outcome {
        eprintln!("❌ {e}");
        std::process::exit(1);
    }
}

fn serve(args: &Cli, state: AppState) {
    let addr = args.server.bind;
    tracing::info!(%addr, "starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(args.server.max_workers);

    // 3️⃣ Serve requests, each one handled start to finish on its worker
    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => responses::html_error_response(err),
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
    }

    tracing::info!("server shut down cleanly");
}
