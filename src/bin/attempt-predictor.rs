// ABOUTME: Command line entry point: run the web application or a one-off prediction
// ABOUTME: Loads configuration from the environment and applies flag overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Attempt Predictor Binary
//!
//! Usage:
//! ```bash
//! # Serve the page and proxy on the configured port
//! attempt-predictor serve --http-port 3000
//!
//! # Ask the backend once and print the recommendations
//! attempt-predictor predict --division Open --sex 1 --bodyweight 120+ --reveal
//! ```

use anyhow::{anyhow, bail, Result};
use attempt_core::constants::backend::UNKNOWN_ERROR;
use attempt_core::models::{Division, Sex, WeightClass};
use attempt_predictor::{
    config::environment::ServerConfig,
    form::PredictionForm,
    gateway::HttpModelGateway,
    logging::{self, LoggingConfig},
    page::{Phase, PredictionPage, Submission},
    render::render_text,
    resources::ServerResources,
    server::PredictorServer,
};
use clap::{Parser, Subcommand};
use std::env;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "attempt-predictor",
    about = "Powerlifting attempt predictor",
    long_about = "Web form and same-origin proxy in front of a powerlifting attempt prediction backend."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the web application
    Serve {
        /// Override HTTP port
        #[arg(long)]
        http_port: Option<u16>,

        /// Override the prediction backend URL
        #[arg(long)]
        backend_url: Option<String>,
    },
    /// Request one prediction and print it
    Predict {
        /// Division: Open, Junior, Teen, Youth or Master
        #[arg(long)]
        division: Division,

        /// Sex code: 0 for female, 1 for male
        #[arg(long)]
        sex: Sex,

        /// Bodyweight class label, e.g. 93 or 84+
        #[arg(long)]
        bodyweight: String,

        /// Override the prediction backend URL
        #[arg(long)]
        backend_url: Option<String>,

        /// Also list the received visualizations
        #[arg(long)]
        reveal: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = ServerConfig::from_env()?;

    match cli.command {
        Command::Serve {
            http_port,
            backend_url,
        } => {
            if let Some(http_port) = http_port {
                config.http_port = http_port;
            }
            if let Some(backend_url) = backend_url {
                config.backend.url = backend_url;
            }
            config.validate()?;

            logging::init_from_env()?;
            info!("{}", config.summary());

            let resources = Arc::new(ServerResources::from_config(config)?);
            PredictorServer::new(resources).run().await
        }
        Command::Predict {
            division,
            sex,
            bodyweight,
            backend_url,
            reveal,
        } => {
            if let Some(backend_url) = backend_url {
                config.backend.url = backend_url;
            }
            config.validate()?;

            let mut logging = LoggingConfig::from_env();
            if env::var("RUST_LOG").is_err() {
                logging.level = "warn".to_owned();
            }
            logging.init()?;

            let mut form = PredictionForm::default();
            form.select_division(Some(division));
            form.select_sex(Some(sex));
            form.select_bodyweight(Some(WeightClass::parse_for(sex, &bodyweight)?))?;

            predict(form, &config.backend.url, reveal).await
        }
    }
}

async fn predict(form: PredictionForm, backend_url: &str, reveal: bool) -> Result<()> {
    let gateway = HttpModelGateway::new(backend_url);
    let page = PredictionPage::with_form(form);

    match page.submit(&gateway).await {
        Submission::Completed(Phase::Success) => {
            if reveal {
                page.reveal_visualizations();
            }
            print!("{}", render_text(&page.snapshot()));
            Ok(())
        }
        Submission::Completed(_) => {
            let state = page.snapshot();
            Err(anyhow!(state.error().unwrap_or(UNKNOWN_ERROR).to_owned()))
        }
        Submission::Invalid(e) => Err(e.into()),
        Submission::InFlight => bail!("A prediction is already in flight"),
    }
}
