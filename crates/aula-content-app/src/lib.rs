//! Aula content app library.

#[allow(unused)]
use dioxus::prelude::*;

pub mod components;
pub mod config;
pub mod media;

use aula_content_core::{AssetSource, MediaAsset, MediaKind, SmolStr};
use components::{LessonContent, TestQuestionContent};
use media::MediaClient;

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

/// Demo shell: one lesson body and one test question, sharing a media
/// client provided through context.
#[component]
pub fn App() -> Element {
    use_context_provider(MediaClient::from_config);

    let lesson = use_signal(|| {
        String::from(
            "Magnetic fields wrap around a current-carrying wire.\n\
             [IMAGE:field-lines-overview]\n\
             The right-hand rule gives the field direction.",
        )
    });
    let question = use_signal(|| {
        String::from(
            "<p data-start=\"0\" data-end=\"42\">Which diagram shows the field of a bar magnet?</p>\
             [IMAGE:bar-magnet-a] [VIDEO:field-demo]",
        )
    });
    let lesson_sources = use_signal(|| {
        vec![AssetSource {
            assets: vec![MediaAsset::new(
                "field-lines-overview",
                MediaKind::Image,
                Some(SmolStr::new("/assets/demo/field-lines.png")),
            )],
        }]
    });
    let question_sources = use_signal(Vec::new);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        main { class: "aula-page",
            section {
                h2 { "Lesson" }
                LessonContent { content: lesson, sources: lesson_sources }
            }
            section {
                h2 { "Question" }
                TestQuestionContent { content: question, sources: question_sources }
            }
        }
    }
}
