use log::debug;
use shared::routing::{app_routes, RouteTable};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::context::AppContext;
use crate::pages::{about::About, contact::Contact, home::Home};
use crate::Route;

/// Static copy of one page, produced by its view loader.
#[derive(Debug, Clone, PartialEq)]
pub struct PageContent {
    pub heading: &'static str,
    pub paragraphs: Vec<&'static str>,
}

/// The route table with the page loaders wired in.
pub fn routes() -> RouteTable<PageContent> {
    app_routes(
        crate::pages::home::load,
        crate::pages::about::load,
        crate::pages::contact::load,
    )
}

#[derive(Properties, PartialEq)]
pub struct RouteViewProps {
    pub route: Route,
}

/// Resolves the route's lazy view on first render and shows the page.
#[function_component(RouteView)]
pub fn route_view(props: &RouteViewProps) -> Html {
    let ctx = use_context::<AppContext>().expect("App context not found");
    let Some(definition) = ctx.router.table().by_name(props.route.name()) else {
        return html! {};
    };
    if !definition.view.is_loaded() {
        debug!("Loading view for {}", definition.name);
    }
    let content = definition.view.get().clone();

    match props.route {
        Route::Home => html! { <Home content={content} /> },
        Route::About => html! { <About content={content} /> },
        Route::Contact => html! { <Contact content={content} /> },
    }
}

/// Route for the current browser location, matched by the shared table so
/// rendering agrees with the title and page-view hook.
#[hook]
pub fn use_current_route() -> Option<Route> {
    let ctx = use_context::<AppContext>().expect("App context not found");
    let location = use_location();
    location.and_then(|l| {
        ctx.router
            .resolve(l.path())
            .and_then(|definition| Route::from_name(definition.name))
    })
}

#[function_component(RouteOutlet)]
pub fn route_outlet() -> Html {
    match use_current_route() {
        Some(route) => {
            debug!("Route switch: {:?}", route);
            html! { <RouteView route={route} /> }
        }
        None => html! {},
    }
}
