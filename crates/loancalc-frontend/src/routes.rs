use yew::prelude::*;
use yew_router::prelude::*;

use loancalc::id::RoomId;
use loancalc::navigation::Destination;

use crate::pages::{LandingPage, RoomPage, RoomsHome, RoomsLayout};

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Landing,
    #[at("/rooms")]
    Rooms,
    #[at("/rooms/:id")]
    Room { id: RoomId },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Landing => Route::Landing,
            Destination::Rooms => Route::Rooms,
            Destination::Room(id) => Route::Room { id },
        }
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Landing => html! { <LandingPage /> },
        Route::Rooms => html! { <RoomsLayout><RoomsHome /></RoomsLayout> },
        Route::Room { id } => html! { <RoomsLayout><RoomPage id={id} /></RoomsLayout> },
        Route::NotFound => html! { <div>{ "404 Not Found" }</div> },
    }
}
