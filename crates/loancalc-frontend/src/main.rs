mod components;
mod pages;
mod platform;
mod providers;
mod routes;

use yew::prelude::*;
use yew_router::prelude::*;

use providers::{LayoutProvider, LocaleProvider, ThemeProvider};
use routes::{Route, switch};

#[function_component(App)]
fn app() -> Html {
    html! {
        <ThemeProvider>
            <LocaleProvider>
                <LayoutProvider>
                    <BrowserRouter>
                        <Switch<Route> render={switch} />
                    </BrowserRouter>
                </LayoutProvider>
            </LocaleProvider>
        </ThemeProvider>
    }
}

fn main() {
    loancalc::log::setup().expect("Failed to setup logging");
    yew::Renderer::<App>::new().render();
}
