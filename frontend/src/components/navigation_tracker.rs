use yew::prelude::*;
use yew_router::prelude::*;

use crate::browser::{history, scroll};
use crate::context::AppContext;

/// Settles a navigation every time the browser location changes.
///
/// Renders nothing. Each history entry carries its own key, so the router
/// can tell back/forward from a new entry and restore scroll per entry.
#[function_component(NavigationTracker)]
pub fn navigation_tracker() -> Html {
    let ctx = use_context::<AppContext>().expect("App context not found");
    let location = use_location();

    // Keyed by entry too: back/forward between two entries of the same path
    // must still settle.
    let current = location.map(|l| {
        (
            format!("{}{}{}", l.path(), l.query_str(), l.hash()),
            history::current_entry_key(),
        )
    });

    use_effect_with(current, move |current| {
        if let Some((full_path, entry)) = current {
            let target = ctx
                .router
                .navigate(full_path, entry.clone())
                .settle(scroll::current_position());
            scroll::apply(&target);
        }
        || ()
    });

    html! {}
}
