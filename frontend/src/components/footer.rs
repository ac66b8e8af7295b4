use yew::prelude::*;

use crate::version::Version;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="bg-gradient-to-r from-slate-800 to-blue-600 text-white mt-auto">
            <div class="container mx-auto px-4 py-6 flex justify-between items-center text-sm">
                <span class="text-blue-100">{"GA Router Demo"}</span>
                <span class="font-mono text-white/90" title={Version::build_info()}>{Version::short()}</span>
            </div>
        </footer>
    }
}
