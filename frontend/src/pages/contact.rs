use serde_json::json;
use shared::analytics::params;
use yew::prelude::*;

use crate::context::AppContext;
use crate::views::PageContent;

pub fn load() -> PageContent {
    PageContent {
        heading: "聯絡我們",
        paragraphs: vec!["Send us a note and we will get back to you."],
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub content: PageContent,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let ctx = use_context::<AppContext>().expect("App context not found");
    let sent = use_state(|| false);

    let on_send = {
        let analytics = ctx.analytics.clone();
        let sent = sent.clone();
        Callback::from(move |_: MouseEvent| {
            analytics.track_event("contact_submit", params(json!({ "form": "contact" })));
            analytics.track_conversion(
                "contact_form",
                params(json!({ "value": 1.0, "currency": "TWD" })),
            );
            sent.set(true);
        })
    };

    html! {
        <div class="contact-page container mx-auto px-4 py-12">
            <h1 class="text-3xl font-bold mb-6">{props.content.heading}</h1>
            { for props.content.paragraphs.iter().map(|p| html! { <p class="mb-4 text-gray-600">{*p}</p> }) }
            if *sent {
                <p class="mt-4 text-green-600">{"感謝您的來信！"}</p>
            } else {
                <button onclick={on_send} class="mt-4 px-6 py-3 rounded bg-blue-600 text-white">
                    {"送出"}
                </button>
            }
        </div>
    }
}
