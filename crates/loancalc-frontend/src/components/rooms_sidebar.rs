use std::rc::Rc;

use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use loancalc::async_callback;
use loancalc::data::Room;
use loancalc::i18n::{self, Message};
use loancalc::navigation::is_viewing_room;
use loancalc::panel::{PanelAction, RoomsPanel, StateDispatch};
use loancalc::preferences::Theme;

use crate::components::{ConfirmationDialog, icons};
use crate::platform::{
    BrowserSession, BrowserTimer, RouterHost, SidebarDispatch, SidebarState, select_clipboard,
};
use crate::providers::{api, use_layout, use_locale, use_theme};
use crate::routes::Route;

const ROW_ACTION_CLASSES: &str =
    "p-3 rounded-lg transition-all duration-200 opacity-50 group-hover:opacity-100";
const MUTED_BUTTON_CLASSES: &str = "flex items-center justify-center w-full p-2 rounded-md bg-gray-100 hover:bg-gray-200 dark:bg-gray-700 dark:hover:bg-gray-600 text-gray-700 dark:text-gray-200";

#[derive(Properties, PartialEq)]
pub struct RoomsSidebarProps {
    /// Asks the surrounding layout to hide the sidebar (mobile)
    pub on_close: Callback<()>,
}

#[function_component(RoomsSidebar)]
pub fn rooms_sidebar(props: &RoomsSidebarProps) -> Html {
    let theme = use_theme();
    let locale_context = use_locale();
    let layout = use_layout();
    let locale = locale_context.locale;

    let state = use_reducer(SidebarState::default);
    let dispatch = SidebarDispatch(state.dispatcher());

    // The panel lives across renders; the close callback it calls must not go stale
    let on_close = use_mut_ref(|| props.on_close.clone());
    *on_close.borrow_mut() = props.on_close.clone();

    let navigator = use_navigator().expect("RoomsSidebar must be rendered inside a router");
    let panel = use_memo((), {
        let on_close = on_close.clone();
        move |_| {
            RoomsPanel::new(
                Rc::new(api::create()),
                Rc::new(BrowserSession),
                Rc::new(RouterHost::new(navigator, on_close)),
                select_clipboard(),
                Rc::new(BrowserTimer),
            )
        }
    });

    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_default();

    use_effect_with(path.clone(), {
        let panel = panel.clone();
        let dispatch = dispatch.clone();
        move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                panel.load_rooms(&dispatch).await;
            });
        }
    });

    let on_input = {
        let dispatch = dispatch.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                dispatch.dispatch(PanelAction::SetRoomCode(input.value()));
            }
        })
    };

    let join = async_callback!([panel, dispatch] |code: String| {
        panel.join_room(&dispatch, code).await;
    });
    let on_join = {
        let code = state.0.room_code.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            join.emit(code.clone());
        })
    };

    let on_create = async_callback!([panel, dispatch] {
        panel.create_room(&dispatch).await;
    });

    let on_copy = async_callback!([panel, dispatch] |code: String| {
        panel.copy_code(&dispatch, code).await;
    });

    let on_open_leave = {
        let panel = panel.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |room: Room| panel.open_leave(&dispatch, room))
    };

    let on_cancel_leave = {
        let panel = panel.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |_: ()| panel.cancel_leave(&dispatch))
    };

    let on_confirm_leave = {
        let candidate = state.0.leave_candidate.clone();
        async_callback!([panel, dispatch, candidate] {
            panel.confirm_leave(&dispatch, candidate).await;
        })
    };

    let on_logout = {
        let panel = panel.clone();
        Callback::from(move |_: MouseEvent| panel.logout())
    };

    let rooms = state.0.rooms.iter().enumerate().map(|(index, room)| {
        let is_active = is_viewing_room(&path, room.id);
        let row_classes = if is_active {
            "bg-blue-600 text-white"
        } else {
            "text-gray-900 dark:text-gray-100 hover:bg-gray-100 dark:hover:bg-gray-700"
        };
        let action_hover = if is_active {
            "hover:bg-blue-700"
        } else {
            "hover:bg-gray-200 dark:hover:bg-gray-600"
        };

        let copy = on_copy.reform({
            let code = room.code.clone();
            move |_: MouseEvent| code.clone()
        });
        let leave = on_open_leave.reform({
            let room = room.clone();
            move |_: MouseEvent| room.clone()
        });

        html! {
            <li
                key={room.id.get().to_string()}
                class="animate-fadeIn px-2"
                style={format!("animation-delay: {}ms", index * 50)}
            >
                <div class={classes!("group", "flex", "items-center", "justify-between", "rounded-lg", "transition-colors", "mb-2", row_classes)}>
                    <Link<Route>
                        to={Route::Room { id: room.id }}
                        classes={classes!("flex-grow", "p-3", "text-sm", "font-semibold", "truncate")}
                    >
                        { i18n::room_label(locale, &room.code) }
                    </Link<Route>>
                    <div class="flex items-center">
                        <button
                            class={classes!(ROW_ACTION_CLASSES, action_hover)}
                            title={Message::CopyRoomCode.text(locale)}
                            onclick={copy}
                        >
                            {
                                if state.0.is_copied(&room.code) {
                                    icons::check("h-4 w-4 text-green-500")
                                } else {
                                    icons::copy("h-4 w-4")
                                }
                            }
                        </button>
                        <button
                            class={classes!(ROW_ACTION_CLASSES, action_hover)}
                            title={Message::LeaveRoom.text(locale)}
                            onclick={leave}
                        >
                            { icons::leave("h-4 w-4 text-red-500") }
                        </button>
                    </div>
                </div>
            </li>
        }
    });

    let leave_body = state
        .0
        .leave_candidate
        .as_ref()
        .map(|room| i18n::leave_room_confirmation(locale, &room.code))
        .unwrap_or_default();

    html! {
        <>
            <aside class="w-80 bg-white dark:bg-gray-800 border-e border-gray-200 dark:border-gray-700 h-full p-4 flex flex-col">
                <div class="flex items-center justify-between mb-6 px-2">
                    <h2 class="text-2xl font-bold text-gray-900 dark:text-gray-100">
                        { Message::MyRooms.text(locale) }
                    </h2>
                    <button
                        class="md:hidden p-1 rounded-md hover:bg-gray-100 dark:hover:bg-gray-700 text-gray-500"
                        aria-label={Message::CloseSidebar.text(locale)}
                        onclick={props.on_close.reform(|_: MouseEvent| ())}
                    >
                        { icons::close("h-6 w-6") }
                    </button>
                </div>

                <nav class="flex-grow overflow-y-auto -mx-2 pe-1">
                    <ul>{ for rooms }</ul>
                </nav>

                <div class="mt-auto pt-4 border-t border-gray-200 dark:border-gray-700">
                    {
                        if let Some(error) = state.0.error.as_ref() {
                            html! {
                                <p class="text-red-600 dark:text-red-400 text-sm text-center mb-2">
                                    { error.text(locale) }
                                </p>
                            }
                        } else {
                            html! {}
                        }
                    }

                    <form onsubmit={on_join} class="mb-4">
                        <input
                            type="text"
                            class="w-full px-3 py-2 rounded-lg mb-2 border border-gray-300 dark:border-gray-600 bg-white dark:bg-gray-900 text-gray-900 dark:text-gray-100 focus:outline-none focus:ring-2 focus:ring-blue-500"
                            placeholder={Message::RoomCode.text(locale)}
                            value={state.0.room_code.clone()}
                            oninput={on_input}
                        />
                        <button
                            type="submit"
                            class="w-full py-2 rounded-lg bg-blue-600 hover:bg-blue-700 text-white"
                        >
                            { Message::JoinRoom.text(locale) }
                        </button>
                    </form>

                    <div class="flex items-center my-2">
                        <div class="flex-grow border-t border-gray-200 dark:border-gray-700"></div>
                        <span class="flex-shrink mx-2 text-xs text-gray-500">{ Message::Or.text(locale) }</span>
                        <div class="flex-grow border-t border-gray-200 dark:border-gray-700"></div>
                    </div>

                    <button
                        class="w-full py-2 rounded-lg bg-gray-200 hover:bg-gray-300 dark:bg-gray-700 dark:hover:bg-gray-600 text-gray-900 dark:text-gray-100 mb-4"
                        onclick={on_create}
                    >
                        { Message::CreateRoom.text(locale) }
                    </button>

                    <div class="space-y-2">
                        <button
                            class="w-full py-2 px-4 flex items-center justify-center rounded-lg bg-gray-100 hover:bg-gray-200 dark:bg-gray-700 dark:hover:bg-gray-600 text-gray-700 dark:text-gray-200"
                            aria-label={Message::Logout.text(locale)}
                            onclick={on_logout}
                        >
                            { icons::logout("h-4 w-4 me-2") }
                            <span class="font-semibold text-xs">{ Message::Logout.text(locale) }</span>
                        </button>

                        <div class="flex items-center justify-center space-x-2">
                            <button
                                class={MUTED_BUTTON_CLASSES}
                                aria-label={Message::ToggleTheme.text(locale)}
                                onclick={theme.toggle.reform(|_: MouseEvent| ())}
                            >
                                {
                                    match theme.theme {
                                        Theme::Light => icons::moon("h-4 w-4"),
                                        Theme::Dark => icons::sun("h-4 w-4"),
                                    }
                                }
                            </button>
                            <button
                                class={MUTED_BUTTON_CLASSES}
                                aria-label={Message::ChangeLanguage.text(locale)}
                                onclick={locale_context.cycle.reform(|_: MouseEvent| ())}
                            >
                                { icons::globe("h-4 w-4 me-1.5") }
                                <span class="font-semibold text-xs">{ locale.code().to_uppercase() }</span>
                            </button>
                            <button
                                class={classes!(
                                    MUTED_BUTTON_CLASSES,
                                    layout.simplified.is_enabled().then_some("text-blue-600")
                                )}
                                aria-label={Message::ToggleSimplifiedLayout.text(locale)}
                                aria-pressed={layout.simplified.is_enabled().to_string()}
                                onclick={layout.toggle.reform(|_: MouseEvent| ())}
                            >
                                { icons::kettle("h-4 w-4") }
                            </button>
                        </div>
                    </div>
                </div>
            </aside>

            <ConfirmationDialog
                is_open={state.0.leave_dialog_open}
                title={Message::LeaveRoomTitle.text(locale)}
                confirm_label={Message::Confirm.text(locale)}
                cancel_label={Message::Cancel.text(locale)}
                on_confirm={on_confirm_leave}
                on_close={on_cancel_leave}
            >
                { leave_body }
            </ConfirmationDialog>
        </>
    }
}
