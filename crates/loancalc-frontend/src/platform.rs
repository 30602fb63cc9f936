//! Browser implementations of the rooms panel's collaborators.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gloo_storage::{LocalStorage, Storage};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlDocument, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::Navigator;

use loancalc::clipboard::{Clipboard, FallbackClipboard};
use loancalc::errors::ClipboardError;
use loancalc::log::debug;
use loancalc::navigation::Destination;
use loancalc::panel::{PanelAction, PanelHost, PanelState, StateDispatch, Timer};
use loancalc::session::{SessionStore, TOKEN_KEY};

use crate::routes::Route;

/// Session token in `localStorage`, stored as the raw string the login page wrote.
pub struct BrowserSession;

impl SessionStore for BrowserSession {
    fn token(&self) -> Option<String> {
        LocalStorage::raw()
            .get_item(TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }

    fn clear(&self) {
        LocalStorage::delete(TOKEN_KEY);
    }
}

/// `navigator.clipboard`, only present in secure contexts.
pub struct NativeClipboard {
    clipboard: web_sys::Clipboard,
}

impl NativeClipboard {
    pub fn detect() -> Option<Self> {
        let navigator = web_sys::window()?.navigator();
        let present = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
            .map(|value| !value.is_undefined() && !value.is_null())
            .unwrap_or(false);

        present.then(|| Self {
            clipboard: navigator.clipboard(),
        })
    }
}

#[async_trait::async_trait(?Send)]
impl Clipboard for NativeClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        wasm_bindgen_futures::JsFuture::from(self.clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|err| ClipboardError::Rejected(format!("{err:?}")))
    }
}

/// Copies through a hidden textarea and `document.execCommand("copy")`.
pub struct LegacyClipboard;

impl LegacyClipboard {
    fn copy(text: &str) -> Result<(), ClipboardError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(ClipboardError::Unavailable)?;
        let body = document.body().ok_or(ClipboardError::Unavailable)?;
        let text_area = document
            .create_element("textarea")
            .ok()
            .and_then(|el| el.dyn_into::<HtmlTextAreaElement>().ok())
            .ok_or(ClipboardError::Unavailable)?;

        text_area.set_value(text);
        let style = text_area.style();
        for (property, value) in [("position", "fixed"), ("top", "0"), ("left", "0")] {
            style.set_property(property, value).ok();
        }

        body.append_child(&text_area)
            .map_err(|err| ClipboardError::Rejected(format!("{err:?}")))?;
        text_area.focus().ok();
        text_area.select();

        let copied = match document.dyn_ref::<HtmlDocument>() {
            Some(html_document) => html_document.exec_command("copy"),
            None => Ok(false),
        };
        body.remove_child(&text_area).ok();

        match copied {
            Ok(true) => Ok(()),
            Ok(false) => Err(ClipboardError::CommandFailed),
            Err(err) => Err(ClipboardError::Rejected(format!("{err:?}"))),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl Clipboard for LegacyClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        Self::copy(text)
    }
}

/// Native clipboard with the legacy path as fallback, or the legacy path alone
/// when the browser has no clipboard API.
pub fn select_clipboard() -> Rc<dyn Clipboard> {
    match NativeClipboard::detect() {
        Some(native) => Rc::new(FallbackClipboard::new(
            Rc::new(native),
            Rc::new(LegacyClipboard),
        )),
        None => {
            debug!("navigator.clipboard unavailable, using legacy copy");
            Rc::new(LegacyClipboard)
        }
    }
}

pub struct BrowserTimer;

#[async_trait::async_trait(?Send)]
impl Timer for BrowserTimer {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}

/// Navigation through the app router; sidebar closing through the layout.
pub struct RouterHost {
    navigator: Navigator,
    on_close: Rc<RefCell<Callback<()>>>,
}

impl RouterHost {
    pub fn new(navigator: Navigator, on_close: Rc<RefCell<Callback<()>>>) -> Self {
        Self {
            navigator,
            on_close,
        }
    }
}

impl PanelHost for RouterHost {
    fn navigate(&self, destination: Destination) {
        self.navigator.push(&Route::from(destination));
    }

    fn current_path(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default()
    }

    fn close_sidebar(&self) {
        self.on_close.borrow().emit(());
    }
}

/// [`PanelState`] as a Yew reducer.
#[derive(Default, PartialEq)]
pub struct SidebarState(pub PanelState);

impl Reducible for SidebarState {
    type Action = PanelAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.0.clone();
        state.apply(action);
        Rc::new(Self(state))
    }
}

#[derive(Clone)]
pub struct SidebarDispatch(pub UseReducerDispatcher<SidebarState>);

impl StateDispatch for SidebarDispatch {
    fn dispatch(&self, action: PanelAction) {
        self.0.dispatch(action);
    }
}
