use yew::prelude::*;

use loancalc::i18n::Message;

use crate::components::{RoomsSidebar, icons};
use crate::providers::use_locale;

#[derive(Properties, PartialEq)]
pub struct RoomsLayoutProps {
    #[prop_or_default]
    pub children: Html,
}

/// Sidebar next to the routed page. On small screens the sidebar is an overlay
/// opened from the menu button.
#[function_component(RoomsLayout)]
pub fn rooms_layout(props: &RoomsLayoutProps) -> Html {
    let locale = use_locale().locale;
    let sidebar_open = use_state(|| false);

    let open_sidebar = {
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |_: MouseEvent| sidebar_open.set(true))
    };
    let close_sidebar = {
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |_: ()| sidebar_open.set(false))
    };

    let sidebar_classes = classes!(
        "fixed", "inset-y-0", "start-0", "z-40", "transition-transform",
        "md:static", "md:translate-x-0",
        (!*sidebar_open).then_some("-translate-x-full rtl:translate-x-full"),
    );

    html! {
        <div class="flex h-screen bg-gray-50 dark:bg-gray-900">
            <div class={sidebar_classes}>
                <RoomsSidebar on_close={close_sidebar} />
            </div>
            <div class="flex-1 flex flex-col min-w-0">
                <header class="md:hidden p-2 border-b border-gray-200 dark:border-gray-700">
                    <button
                        class="p-2 rounded-md text-gray-600 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-800"
                        aria-label={Message::OpenSidebar.text(locale)}
                        onclick={open_sidebar}
                    >
                        { icons::menu("h-6 w-6") }
                    </button>
                </header>
                <main class="flex-1 overflow-y-auto text-gray-900 dark:text-gray-100">
                    { props.children.clone() }
                </main>
            </div>
        </div>
    }
}

#[function_component(RoomsHome)]
pub fn rooms_home() -> Html {
    let locale = use_locale().locale;
    html! {
        <section class="p-8">
            <h1 class="text-2xl font-bold">{ Message::MyRooms.text(locale) }</h1>
        </section>
    }
}
