use yew::prelude::*;
use yew_router::prelude::*;

use crate::views::PageContent;
use crate::Route;

pub fn load() -> PageContent {
    PageContent {
        heading: "歡迎來到 GA Router Demo",
        paragraphs: vec![
            "This page and its siblings are tracked as page views on every navigation.",
            "Use the links above to move between pages without reloading.",
        ],
    }
}

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub content: PageContent,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    html! {
        <div class="home-page container mx-auto px-4 py-12">
            <h1 class="text-3xl font-bold mb-6">{props.content.heading}</h1>
            { for props.content.paragraphs.iter().map(|p| html! { <p class="mb-4 text-gray-600">{*p}</p> }) }
            <Link<Route> to={Route::Contact} classes={classes!("inline-block", "mt-4", "px-6", "py-3", "rounded", "bg-blue-600", "text-white")}>
                {"聯絡我們"}
            </Link<Route>>
        </div>
    }
}
