use std::sync::Mutex;
use std::time::Duration;

use carepath_core::models::intake::IntakeRecord;
use carepath_core::models::routing::RoutingResult;
use carepath_core::presets::get_preset;
use carepath_narrative::error::NarrativeError;
use carepath_narrative::explain::{conform, explain, Narrative, UNAVAILABLE_NOTICE};
use carepath_narrative::generator::TextGenerator;
use carepath_narrative::prompt::{header_line, DISCLAIMER};

/// Replies with a fixed text, or fails when `reply` is `None`. Records prompts.
struct Canned {
    reply: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl Canned {
    fn replying(text: &str) -> Self {
        Self {
            reply: Some(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn failing() -> Self {
        Self {
            reply: None,
            prompts: Mutex::new(Vec::new()),
        }
    }
}

impl TextGenerator for Canned {
    async fn generate(&self, _system_prompt: &str, prompt: &str) -> Result<String, NarrativeError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply
            .clone()
            .ok_or_else(|| NarrativeError::Invocation("service unavailable".to_string()))
    }
}

struct Stalled;

impl TextGenerator for Stalled {
    async fn generate(&self, _system_prompt: &str, _prompt: &str) -> Result<String, NarrativeError> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok("too late".to_string())
    }
}

fn decided(preset_id: &str) -> (IntakeRecord, RoutingResult) {
    let intake = get_preset(preset_id).unwrap().record();
    let result = carepath_rules::evaluate(&intake);
    (intake, result)
}

#[tokio::test]
async fn well_formed_reply_is_kept() {
    let (intake, result) = decided("mild_cough");
    let reply = format!(
        "{}\n\nYour symptoms are stable and have happened before.\n\n{DISCLAIMER}",
        header_line(&result)
    );
    let generator = Canned::replying(&reply);

    let narrative = explain(&generator, &intake, &result, Duration::from_secs(5)).await;

    assert_eq!(narrative, Narrative::Generated(reply));
    let prompts = generator.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("Recurrent similar symptoms with stable trend."));
}

#[tokio::test]
async fn missing_header_and_disclaimer_are_added() {
    let (intake, result) = decided("fever_immunocompromised");
    let generator = Canned::replying("Fever with a weakened immune system needs a same-day visit.");

    let narrative = explain(&generator, &intake, &result, Duration::from_secs(5)).await;

    assert!(narrative.is_generated());
    let text = narrative.text();
    assert!(text.starts_with("Recommended care setting: Urgent Care (Same day)"));
    assert!(text.ends_with(DISCLAIMER));
}

#[tokio::test]
async fn service_failure_is_soft() {
    let (intake, result) = decided("chest_pain_red_flag");
    let narrative = explain(&Canned::failing(), &intake, &result, Duration::from_secs(5)).await;

    assert_eq!(narrative, Narrative::Unavailable(UNAVAILABLE_NOTICE.to_string()));
}

#[tokio::test]
async fn slow_service_times_out() {
    let (intake, result) = decided("chest_pain_red_flag");
    let narrative = explain(&Stalled, &intake, &result, Duration::from_millis(20)).await;

    assert!(!narrative.is_generated());
    assert_eq!(narrative.text(), UNAVAILABLE_NOTICE);
}

#[tokio::test]
async fn reply_naming_another_route_is_rejected() {
    let (intake, result) = decided("chest_pain_red_flag");
    let generator = Canned::replying("Recommended care setting: Urgent Care (Same day)\n\nGo today.");

    let narrative = explain(&generator, &intake, &result, Duration::from_secs(5)).await;
    assert_eq!(narrative.text(), UNAVAILABLE_NOTICE);
}

#[test]
fn conform_rejects_empty_and_contradicting_replies() {
    let (_, result) = decided("mild_cough");

    assert!(matches!(conform("   \n", &result), Err(NarrativeError::EmptyResponse)));
    assert!(matches!(
        conform("You should go to the ED now.", &result),
        Err(NarrativeError::Contradiction(_))
    ));
    assert!(matches!(
        conform("Primary care is fine.\nRecommended care setting: Self-care (Monitor)", &result),
        Err(NarrativeError::Contradiction(_))
    ));
}

#[test]
fn conform_allows_other_routes_in_the_body() {
    let (_, result) = decided("mild_cough");
    let reply = "Recommended care setting: PCP (24–72 hrs)\n\nIf things get worse, urgent care or the ED may be needed.";

    let text = conform(reply, &result).unwrap();
    assert!(text.starts_with(reply));
    assert!(text.ends_with(DISCLAIMER));
}
