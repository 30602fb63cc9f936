use gloo_storage::{LocalStorage, Storage};
use web_sys::window;
use yew::prelude::*;

use loancalc::preferences::Theme;

const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

fn prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn apply_theme(theme: Theme) {
    if let Some(html) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let class_list = html.class_list();
        match theme {
            Theme::Dark => {
                class_list.add_1("dark").ok();
            }
            Theme::Light => {
                class_list.remove_1("dark").ok();
            }
        }
    }
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = use_state(|| {
        LocalStorage::get::<Theme>(THEME_KEY).unwrap_or_else(|_| {
            if prefers_dark() {
                Theme::Dark
            } else {
                Theme::Light
            }
        })
    });

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let new_theme = theme.toggled();
            LocalStorage::set(THEME_KEY, new_theme).ok();
            theme.set(new_theme);
        })
    };

    use_effect_with(*theme, |theme| apply_theme(*theme));

    let context = ThemeContext {
        theme: *theme,
        toggle,
    };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            {props.children.clone()}
        </ContextProvider<ThemeContext>>
    }
}

#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("use_theme must be used within a ThemeProvider")
}
