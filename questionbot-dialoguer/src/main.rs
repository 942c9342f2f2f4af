use anyhow::{Context, bail};
use clap::Parser;
use questionbot::Service;
use questionbot_dialoguer::{DialoguerFrontend, render_summary};
use tracing::info;

mod cli;
mod logging;

use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let config = cli.config();
    let service = Service::new(config.clone()).with_context(|| {
        format!(
            "loading questionnaires from {}",
            config.data_path.display()
        )
    })?;
    if service.is_empty() {
        bail!("no questionnaires in {}", config.data_path.display());
    }

    let frontend = if cli.plain {
        DialoguerFrontend::plain()
    } else {
        DialoguerFrontend::new()
    };

    let mut questionnaire = match cli.questionnaire.as_deref() {
        Some(label) => service.select(label)?,
        None => match frontend.choose(&service) {
            Ok(questionnaire) => questionnaire,
            Err(questionbot_dialoguer::DialoguerError::Cancelled) => return Ok(()),
            Err(err) => return Err(err.into()),
        },
    };

    match questionbot::run(&mut questionnaire, frontend) {
        Ok(transcript) => {
            println!();
            print!("{}", render_summary(&questionnaire, &transcript));
            info!(
                completed = questionnaire.completed(),
                "questionnaire finished"
            );
            Ok(())
        }
        Err(err) if err.is_cancelled() => {
            info!("questionnaire cancelled");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
