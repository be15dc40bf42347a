use log::{error, info};
use yew::prelude::*;

mod catalog;
mod config;
mod hooks;
mod selection;
mod timer;
mod visibility;
mod components {
    pub mod animated_section;
    pub mod flow_arrow;
    pub mod particles;
    pub mod professional_tile;
    pub mod stat_badge;
    pub mod step_card;
    pub mod step_icon;
}
mod pages {
    pub mod infographic;
}

use catalog::{PROFESSIONALS, STEPS};
use config::PageConfig;
use pages::infographic::{CatalogUnavailable, Infographic};
use selection::Selection;

fn initial_selection() -> Option<Selection> {
    if let Err(e) = catalog::validate(STEPS, PROFESSIONALS) {
        error!("Step catalog rejected: {}", e);
        return None;
    }
    Selection::new(STEPS.len())
        .map_err(|e| error!("Cannot highlight steps: {}", e))
        .ok()
}

#[function_component]
fn App() -> Html {
    let config = use_memo(|_| PageConfig::load(), ());

    match initial_selection() {
        Some(initial) => {
            info!("Rendering infographic");
            html! { <Infographic initial={initial} config={(*config).clone()} /> }
        }
        None => html! { <CatalogUnavailable /> },
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiled_catalog_gives_a_starting_highlight() {
        let initial = initial_selection().unwrap();
        assert_eq!(initial.active(), 0);
        assert_eq!(initial.len(), STEPS.len());
    }
}
