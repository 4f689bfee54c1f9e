use log::{debug, error, info};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod decor;
mod timers;
mod lead {
    pub mod emailjs;
    pub mod form;
    pub mod phone;
    pub mod validation;
}
mod carousel {
    pub mod state;
    pub mod testimonials;
}
mod components {
    pub mod floating_elements;
    pub mod lead_form;
    pub mod testimonial_carousel;
}
mod pages {
    pub mod landing;
}

use config::EmailJsConfig;
use lead::emailjs::EmailJsClient;
use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub mailer: EmailJsClient,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    let mailer = props.mailer.clone();
    let switch = move |route: Route| match route {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing mailer={mailer.clone()} /> }
        }
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    };

    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    let emailjs = match EmailJsConfig::from_build_env() {
        Ok(emailjs) => emailjs,
        Err(e) => {
            error!("Invalid EmailJS configuration: {}", e);
            panic!("invalid EmailJS configuration: {e}");
        }
    };
    debug!("EmailJS service {} template {}", emailjs.service_id, emailjs.template_id);

    info!("Starting application");
    yew::Renderer::<App>::with_props(AppProps {
        mailer: EmailJsClient::new(emailjs),
    })
    .render();
}
