//! Run the bundled "Ad" questionnaire with the dialoguer frontend.
//!
//! Run with: cargo run -p questionbot-dialoguer --example ad

use questionbot::load_questionnaires;
use questionbot_dialoguer::{DialoguerFrontend, render_summary};

fn main() -> anyhow::Result<()> {
    let mut questionnaires = load_questionnaires(include_str!("../data/questionnaires.toml"))?;
    let mut ad = questionnaires.remove(0);

    let transcript = questionbot::run(&mut ad, DialoguerFrontend::new())?;
    print!("{}", render_summary(&ad, &transcript));
    Ok(())
}
