use std::rc::Rc;

use log::{debug, info};
use shared::analytics::Analytics;
use shared::routing::{NavigationHook, Router};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::browser::{BrowserDocument, BrowserScheduler, GtagSink};
use crate::components::footer::Footer;
use crate::components::nav::Nav;
use crate::components::navigation_tracker::NavigationTracker;
use crate::context::AppContext;
use crate::views::RouteOutlet;

pub mod browser;
pub mod components;
pub mod config;
pub mod context;
pub mod version;
pub mod views;
pub mod pages {
    pub mod about;
    pub mod contact;
    pub mod home;
}

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
}

impl Route {
    /// Name of the matching entry in the route table.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::About => "about",
            Route::Contact => "contact",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "home" => Some(Route::Home),
            "about" => Some(Route::About),
            "contact" => Some(Route::Contact),
            _ => None,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub context: AppContext,
    #[prop_or_default]
    pub basename: Option<AttrValue>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    debug!("App component rendering");

    {
        let analytics = props.context.analytics.clone();
        use_effect_with((), move |_| move || analytics.cancel_engagement());
    }

    html! {
        <ContextProvider<AppContext> context={props.context.clone()}>
            <BrowserRouter basename={props.basename.clone()}>
                <div class="app-container">
                    <Nav />
                    <main class="flex-1">
                        <RouteOutlet />
                    </main>
                    <Footer />
                </div>
                <NavigationTracker />
            </BrowserRouter>
        </ContextProvider<AppContext>>
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    // Initialize logging
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    console_error_panic_hook::set_once();
    info!("Initializing application...");

    browser::scroll::take_over_restoration();
    let config = config::load();
    info!(
        "Analytics {}",
        if config.analytics.active_measurement_id().is_some() { "enabled" } else { "disabled" }
    );

    let document = Rc::new(BrowserDocument);
    let analytics = Analytics::new(
        config.analytics.clone(),
        Rc::new(GtagSink),
        document.clone(),
        Rc::new(BrowserScheduler),
    );
    if config.analytics.enabled {
        analytics.initialize();
    }

    let router = Router::new(
        views::routes(),
        &config.base_url,
        NavigationHook::new(analytics.clone(), document),
    );
    let basename = (config.base_url != "/").then(|| AttrValue::from(config.base_url.clone()));

    info!("Mounting application");
    yew::Renderer::<App>::with_props(AppProps {
        context: AppContext {
            analytics,
            router: Rc::new(router),
        },
        basename,
    })
    .render();
    info!("Application mounted");

    Ok(())
}

// Add a start function that Trunk can call
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run_app().await {
            log::error!("Failed to run app: {:?}", e);
        }
    });
    Ok(())
}
