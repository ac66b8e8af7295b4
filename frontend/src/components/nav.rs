use yew::prelude::*;
use yew_router::prelude::*;

use crate::views::use_current_route;
use crate::Route;

#[function_component(Nav)]
pub fn nav() -> Html {
    let current_route = use_current_route();

    let link_classes = |route: Route| {
        classes!(
            "px-3", "py-2", "rounded-md", "text-sm", "font-medium",
            "transition-colors", "duration-200",
            if current_route.as_ref() == Some(&route) {
                classes!("bg-white/20", "text-white")
            } else {
                classes!("text-white/90", "hover:bg-white/10", "hover:text-white")
            }
        )
    };

    html! {
        <nav class={classes!("sticky", "top-0", "z-50", "bg-gradient-to-r", "from-slate-800", "to-blue-600", "text-white", "shadow-lg")}>
            <div class={classes!("max-w-7xl", "mx-auto", "px-4", "flex", "h-16", "items-center", "space-x-6")}>
                <Link<Route> to={Route::Home} classes={classes!("text-lg", "font-medium", "bg-white", "text-blue-600", "px-2", "py-0.5", "rounded")}>
                    {"GA Router Demo"}
                </Link<Route>>
                <Link<Route> to={Route::Home} classes={link_classes(Route::Home)}>{"首頁"}</Link<Route>>
                <Link<Route> to={Route::About} classes={link_classes(Route::About)}>{"關於我們"}</Link<Route>>
                <Link<Route> to={Route::Contact} classes={link_classes(Route::Contact)}>{"聯絡我們"}</Link<Route>>
            </div>
        </nav>
    }
}
