use yew::prelude::*;

use crate::views::PageContent;

pub fn load() -> PageContent {
    PageContent {
        heading: "關於我們",
        paragraphs: vec![
            "A small router shell used to check page-view and conversion tracking.",
            "Titles are set from route metadata after each navigation.",
        ],
    }
}

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub content: PageContent,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    html! {
        <div class="about-page container mx-auto px-4 py-12">
            <h1 class="text-3xl font-bold mb-6">{props.content.heading}</h1>
            { for props.content.paragraphs.iter().map(|p| html! { <p class="mb-4 text-gray-600">{*p}</p> }) }
            <section id="team" class="mt-12">
                <h2 class="text-2xl font-semibold mb-4">{"團隊"}</h2>
                <p class="text-gray-600">{"Link here with /about#team to land on this section."}</p>
            </section>
        </div>
    }
}
