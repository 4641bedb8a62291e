mod components;
mod config;
mod services;

use yew::prelude::*;

use crate::components::entry_form::EntryForm;
use crate::components::header::Header;
use crate::config::FormConfig;
use crate::services::api::SheetEndpoint;

#[function_component(App)]
fn app() -> Html {
    let endpoint = use_memo((), |_| SheetEndpoint::new(&FormConfig::from_build_env()));

    html! {
        <div class="min-h-screen bg-gray-100 p-4">
            <div class="max-w-md mx-auto bg-white rounded-lg shadow p-6">
                <Header title="Add Social Calendar Entry" />
                <EntryForm endpoint={(*endpoint).clone()} />
            </div>
        </div>
    }
}

fn main() {
    // Initialize tracing
    tracing_wasm::set_as_global_default();

    yew::Renderer::<App>::new().render();
}
