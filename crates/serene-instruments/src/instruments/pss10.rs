use serene_core::models::instrument::InstrumentKind;

use super::{answer_scale, band};
use crate::scoring::AssessmentDefinition;
use crate::Instrument;

/// PSS-10: Perceived Stress Scale, 10-item version.
/// 10 items, each rated 0–4 over the last month. Items 4, 5, 7 and 8 are
/// positively worded and reverse scored. Total 0–40.
pub struct Pss10;

impl Instrument for Pss10 {
    fn kind(&self) -> InstrumentKind {
        InstrumentKind::Pss10
    }

    fn definition(&self) -> &AssessmentDefinition {
        static DEFINITION: std::sync::LazyLock<AssessmentDefinition> =
            std::sync::LazyLock::new(|| AssessmentDefinition {
                kind: InstrumentKind::Pss10,
                title: "Stress Assessment (PSS-10)".to_string(),
                instructions: "In the last month, how often have you...".to_string(),
                items: [
                    "been upset because of something that happened unexpectedly?",
                    "felt that you were unable to control the important things in your life?",
                    "felt nervous and stressed?",
                    "felt confident about your ability to handle your personal problems?",
                    "felt that things were going your way?",
                    "found that you could not cope with all the things that you had to do?",
                    "been able to control irritations in your life?",
                    "felt that you were on top of things?",
                    "been angered because of things that happened that were outside of your control?",
                    "felt difficulties were piling up so high that you could not overcome them?",
                ]
                .map(String::from)
                .to_vec(),
                answer_scale: answer_scale(&[
                    (0, "Never"),
                    (1, "Almost never"),
                    (2, "Sometimes"),
                    (3, "Fairly often"),
                    (4, "Very often"),
                ]),
                reversed_items: vec![3, 4, 6, 7],
                critical_items: vec![],
                severity_bands: vec![
                    band(
                        0,
                        13,
                        "Low stress",
                        "Your perceived stress is in the low range.",
                        &[
                            "Keep up the habits that help you manage day-to-day pressure.",
                            "Take regular breaks, even on good days.",
                        ],
                    ),
                    band(
                        14,
                        26,
                        "Moderate stress",
                        "Your perceived stress is in the moderate range.",
                        &[
                            "Schedule short relaxation breaks through the day, such as a guided meditation.",
                            "Identify the main sources of stress and what parts of them you can change.",
                            "Protect time for sleep, movement, and activities you enjoy.",
                            "Try a stress-relief game or breathing exercise when pressure builds.",
                        ],
                    ),
                    band(
                        27,
                        40,
                        "High stress",
                        "Your perceived stress is in the high range.",
                        &[
                            "Consider talking with a counselor or therapist about managing stress.",
                            "Reduce or delegate commitments where you can.",
                            "Practice a relaxation technique daily, even for a few minutes.",
                            "Reach out to friends, family, or a support group.",
                        ],
                    ),
                ],
            });
        &DEFINITION
    }
}
