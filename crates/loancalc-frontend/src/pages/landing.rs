use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

/// Entry point for signed-out visitors; login happens outside this app.
#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    html! {
        <main class="min-h-screen flex flex-col items-center justify-center bg-gray-50 dark:bg-gray-900 text-gray-900 dark:text-gray-100">
            <h1 class="text-3xl font-bold mb-4">{ "loancalc" }</h1>
            <Link<Route> to={Route::Rooms} classes={classes!("text-blue-600", "hover:underline")}>
                { "Rooms" }
            </Link<Route>>
        </main>
    }
}
