use std::path::Path;

use carepath_audit::events::{action, AuditEvent};
use carepath_cli::config::{self, CarepathConfig};
use carepath_cli::output;
use carepath_core::error::CoreError;
use carepath_core::form::IntakeForm;
use carepath_core::models::evaluation::Evaluation;
use carepath_core::models::intake::IntakeRecord;
use carepath_core::presets::get_preset;
use carepath_export::bundle::write_bundle;
use carepath_export::styles::DocumentStyles;
use carepath_narrative::explain::{explain, Narrative, UNAVAILABLE_NOTICE};
use carepath_narrative::generator::{self, NarrativeSettings};
use eyre::Result;
use tracing::info;

use crate::OutputArgs;

pub async fn evaluate(path: &Path, args: &OutputArgs) -> Result<()> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read intake at {}: {e}", path.display()))?;
    let form = IntakeForm::from_json(&contents)?;
    route(form.into_record(), args).await
}

pub async fn preset(id: &str, args: &OutputArgs) -> Result<()> {
    let preset = get_preset(id).ok_or_else(|| CoreError::UnknownPreset(id.to_string()))?;
    info!(preset = preset.id, "routing preset");
    route(preset.record(), args).await
}

pub fn presets() -> Result<()> {
    for (preset, result) in carepath_rules::run_presets() {
        let mismatch = if result.route == preset.expected_route {
            String::new()
        } else {
            format!("  [expected {}]", preset.expected_route)
        };
        println!(
            "{:<26} {} → {} ({}){mismatch}",
            preset.id, preset.name, result.route, result.urgency
        );
    }
    Ok(())
}

pub fn config_show() -> Result<()> {
    let path = config::config_path()?;
    let config = config::load_or_default()?.with_env_overrides();

    eprintln!("# {}", path.display());
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

pub fn config_init(force: bool) -> Result<()> {
    let path = config::config_path()?;
    if path.exists() && !force {
        return Err(eyre::eyre!(
            "config already exists at {} (use --force to overwrite)",
            path.display()
        ));
    }

    let written = config::save_config(&CarepathConfig::default())?;
    println!("wrote {}", written.display());
    Ok(())
}

/// Evaluate, then narrate, print and export. Narration and export only ever
/// read the finished evaluation.
async fn route(intake: IntakeRecord, args: &OutputArgs) -> Result<()> {
    let config = config::load_or_default()?.with_env_overrides();

    let result = carepath_rules::evaluate(&intake);
    let evaluation = Evaluation::new(intake, result);
    AuditEvent::evaluation(&evaluation).emit();

    let narrative = if args.explain {
        Some(narrate(&evaluation, &config.narrative).await)
    } else {
        None
    };

    if args.json {
        let text = narrative.as_ref().map(Narrative::text);
        println!("{}", output::render_json(&evaluation, text)?);
    } else {
        print!("{}", output::render_result(&evaluation.result));
        if let Some(narrative) = &narrative {
            print!("{}", output::render_narrative(narrative.text()));
        }
    }

    if let Some(explicit) = &args.export {
        let dir = config.export_dir_or(explicit.as_deref());
        let generated = narrative
            .as_ref()
            .filter(|n| n.is_generated())
            .map(Narrative::text);

        let path = write_bundle(&dir, &evaluation, generated, &DocumentStyles::default())?;
        AuditEvent::new(action::EXPORT, &evaluation)
            .with_details(serde_json::json!({ "path": path.display().to_string() }))
            .emit();
        eprintln!("exported {}", path.display());
    }

    Ok(())
}

async fn narrate(evaluation: &Evaluation, settings: &NarrativeSettings) -> Narrative {
    let narrative = match generator::connect(settings).await {
        Some(generator) => {
            info!(
                model_id = generator.model_id(),
                evaluation_id = %evaluation.id,
                "explaining evaluation"
            );
            explain(
                &generator,
                &evaluation.intake,
                &evaluation.result,
                settings.timeout(),
            )
            .await
        }
        None => Narrative::Unavailable(UNAVAILABLE_NOTICE.to_string()),
    };

    AuditEvent::new(action::EXPLAIN, evaluation)
        .with_details(serde_json::json!({ "generated": narrative.is_generated() }))
        .emit();
    narrative
}
