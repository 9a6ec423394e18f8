use leptos::prelude::*;

use gematria_ui::app::App;
use gematria_ui::config::AppConfig;
use gematria_ui::logging;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_document();
    logging::init(config.log_level);
    tracing::info!(api_base = %config.api_base, "mounting gematria client");

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
