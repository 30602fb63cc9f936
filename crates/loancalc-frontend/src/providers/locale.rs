use gloo_storage::{LocalStorage, Storage};
use yew::prelude::*;

use loancalc::preferences::Locale;

const LOCALE_KEY: &str = "locale";

#[derive(Debug, Clone, PartialEq)]
pub struct LocaleContext {
    pub locale: Locale,
    /// Moves to the next interface language.
    pub cycle: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct LocaleProviderProps {
    pub children: Children,
}

#[function_component(LocaleProvider)]
pub fn locale_provider(props: &LocaleProviderProps) -> Html {
    let locale = use_state(|| LocalStorage::get::<Locale>(LOCALE_KEY).unwrap_or_default());

    let cycle = {
        let locale = locale.clone();
        Callback::from(move |_| {
            let next = locale.next();
            LocalStorage::set(LOCALE_KEY, next).ok();
            locale.set(next);
        })
    };

    // Keep <html lang dir> in step so Hebrew renders right-to-left
    use_effect_with(*locale, |locale| {
        if let Some(html) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            html.set_attribute("lang", locale.code()).ok();
            html.set_attribute("dir", if locale.is_rtl() { "rtl" } else { "ltr" })
                .ok();
        }
    });

    let context = LocaleContext {
        locale: *locale,
        cycle,
    };

    html! {
        <ContextProvider<LocaleContext> context={context}>
            {props.children.clone()}
        </ContextProvider<LocaleContext>>
    }
}

#[hook]
pub fn use_locale() -> LocaleContext {
    use_context::<LocaleContext>().expect("use_locale must be used within a LocaleProvider")
}
