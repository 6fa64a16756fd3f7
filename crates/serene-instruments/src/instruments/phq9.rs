use serene_core::models::instrument::InstrumentKind;

use super::{band, two_week_frequency_scale};
use crate::scoring::AssessmentDefinition;
use crate::Instrument;

/// PHQ-9: Patient Health Questionnaire, depression module.
/// 9 items, each rated 0–3 over the last two weeks. Total 0–27.
/// Item 9 (thoughts of self-harm) is critical: any non-zero answer flags
/// the result for follow-up regardless of the total.
pub struct Phq9;

/// Zero-based index of the self-harm item.
pub const SELF_HARM_ITEM: usize = 8;

impl Instrument for Phq9 {
    fn kind(&self) -> InstrumentKind {
        InstrumentKind::Phq9
    }

    fn definition(&self) -> &AssessmentDefinition {
        static DEFINITION: std::sync::LazyLock<AssessmentDefinition> =
            std::sync::LazyLock::new(|| AssessmentDefinition {
                kind: InstrumentKind::Phq9,
                title: "Depression Assessment (PHQ-9)".to_string(),
                instructions: "Over the last 2 weeks, how often have you been bothered by any of the following problems?"
                    .to_string(),
                items: [
                    "Little interest or pleasure in doing things",
                    "Feeling down, depressed, or hopeless",
                    "Trouble falling or staying asleep, or sleeping too much",
                    "Feeling tired or having little energy",
                    "Poor appetite or overeating",
                    "Feeling bad about yourself, or that you are a failure or have let yourself or your family down",
                    "Trouble concentrating on things, such as reading the newspaper or watching television",
                    "Moving or speaking so slowly that other people could have noticed, or being so fidgety or restless that you have been moving around a lot more than usual",
                    "Thoughts that you would be better off dead, or of hurting yourself in some way",
                ]
                .map(String::from)
                .to_vec(),
                answer_scale: two_week_frequency_scale(),
                reversed_items: vec![],
                critical_items: vec![SELF_HARM_ITEM],
                severity_bands: vec![
                    band(
                        0,
                        4,
                        "Minimal or none",
                        "Your responses suggest minimal or no depressive symptoms.",
                        &[
                            "Keep doing the activities that bring you energy and enjoyment.",
                            "Stay connected with friends and family.",
                            "Check in with yourself again in a few weeks.",
                        ],
                    ),
                    band(
                        5,
                        9,
                        "Mild",
                        "Your responses suggest mild depressive symptoms.",
                        &[
                            "Plan at least one small, enjoyable activity each day.",
                            "Aim for regular sleep, meals, and time outdoors.",
                            "Use the mood journal to notice patterns in how you feel.",
                            "Retake this assessment in two weeks to track changes.",
                        ],
                    ),
                    band(
                        10,
                        14,
                        "Moderate",
                        "Your responses suggest moderate depressive symptoms.",
                        &[
                            "Consider reaching out to a counselor or therapist.",
                            "Talk with your doctor about how you have been feeling.",
                            "Break tasks into small steps and acknowledge each one you finish.",
                            "Let someone you trust know what you are going through.",
                        ],
                    ),
                    band(
                        15,
                        19,
                        "Moderately severe",
                        "Your responses suggest moderately severe depressive symptoms.",
                        &[
                            "We encourage you to contact a mental health professional soon.",
                            "Ask your doctor about treatment options, including therapy and medication.",
                            "Lean on your support network and avoid isolating yourself.",
                        ],
                    ),
                    band(
                        20,
                        27,
                        "Severe",
                        "Your responses suggest severe depressive symptoms.",
                        &[
                            "Please contact a mental health professional as soon as possible.",
                            "If you are thinking about harming yourself, contact a crisis line or emergency services now.",
                            "Do not go through this alone; reach out to someone you trust today.",
                        ],
                    ),
                ],
            });
        &DEFINITION
    }
}
