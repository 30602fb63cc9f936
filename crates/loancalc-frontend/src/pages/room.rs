use yew::prelude::*;

use loancalc::id::RoomId;

#[derive(Properties, PartialEq)]
pub struct RoomPageProps {
    pub id: RoomId,
}

#[function_component(RoomPage)]
pub fn room_page(props: &RoomPageProps) -> Html {
    html! {
        <section class="p-8">
            <h1 class="text-2xl font-bold">{ format!("Room {}", props.id) }</h1>
        </section>
    }
}
