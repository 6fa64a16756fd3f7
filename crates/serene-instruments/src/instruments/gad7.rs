use serene_core::models::instrument::InstrumentKind;

use super::{band, two_week_frequency_scale};
use crate::scoring::AssessmentDefinition;
use crate::Instrument;

/// GAD-7: Generalized Anxiety Disorder 7-item scale.
/// 7 items, each rated 0–3 over the last two weeks. Total 0–21.
pub struct Gad7;

impl Instrument for Gad7 {
    fn kind(&self) -> InstrumentKind {
        InstrumentKind::Gad7
    }

    fn definition(&self) -> &AssessmentDefinition {
        static DEFINITION: std::sync::LazyLock<AssessmentDefinition> =
            std::sync::LazyLock::new(|| AssessmentDefinition {
                kind: InstrumentKind::Gad7,
                title: "Anxiety Assessment (GAD-7)".to_string(),
                instructions: "Over the last 2 weeks, how often have you been bothered by the following problems?"
                    .to_string(),
                items: [
                    "Feeling nervous, anxious, or on edge",
                    "Not being able to stop or control worrying",
                    "Worrying too much about different things",
                    "Trouble relaxing",
                    "Being so restless that it is hard to sit still",
                    "Becoming easily annoyed or irritable",
                    "Feeling afraid, as if something awful might happen",
                ]
                .map(String::from)
                .to_vec(),
                answer_scale: two_week_frequency_scale(),
                reversed_items: vec![],
                critical_items: vec![],
                severity_bands: vec![
                    band(
                        0,
                        4,
                        "Minimal anxiety",
                        "Your responses suggest minimal anxiety symptoms.",
                        &[
                            "Keep up the routines that help you feel balanced.",
                            "Try a short breathing exercise when you notice tension.",
                            "Check in with yourself again in a few weeks.",
                        ],
                    ),
                    band(
                        5,
                        9,
                        "Mild anxiety",
                        "Your responses suggest mild anxiety symptoms.",
                        &[
                            "Practice a daily relaxation technique such as box breathing or a guided meditation.",
                            "Limit caffeine and keep a regular sleep schedule.",
                            "Write down recurring worries and set aside a short, fixed time to review them.",
                            "Retake this assessment in two weeks to track changes.",
                        ],
                    ),
                    band(
                        10,
                        14,
                        "Moderate anxiety",
                        "Your responses suggest moderate anxiety symptoms that may be affecting daily life.",
                        &[
                            "Consider talking with a counselor or therapist about what you are experiencing.",
                            "Build regular physical activity into your week.",
                            "Use grounding techniques when anxiety rises.",
                            "Share how you are feeling with someone you trust.",
                        ],
                    ),
                    band(
                        15,
                        21,
                        "Severe anxiety",
                        "Your responses suggest severe anxiety symptoms.",
                        &[
                            "We strongly encourage you to contact a mental health professional.",
                            "Talk with your doctor about your symptoms and treatment options.",
                            "If you feel unable to cope or unsafe, contact a crisis line or emergency services now.",
                        ],
                    ),
                ],
            });
        &DEFINITION
    }
}
