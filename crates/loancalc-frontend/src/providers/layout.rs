use gloo_storage::{LocalStorage, Storage};
use yew::prelude::*;

use loancalc::preferences::SimplifiedLayout;

const SIMPLIFIED_KEY: &str = "simplifiedLayout";

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutContext {
    pub simplified: SimplifiedLayout,
    pub toggle: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct LayoutProviderProps {
    pub children: Children,
}

#[function_component(LayoutProvider)]
pub fn layout_provider(props: &LayoutProviderProps) -> Html {
    let simplified =
        use_state(|| LocalStorage::get::<SimplifiedLayout>(SIMPLIFIED_KEY).unwrap_or_default());

    let toggle = {
        let simplified = simplified.clone();
        Callback::from(move |_| {
            let next = simplified.toggled();
            LocalStorage::set(SIMPLIFIED_KEY, next).ok();
            simplified.set(next);
        })
    };

    use_effect_with(*simplified, |simplified| {
        if let Some(html) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            html.class_list()
                .toggle_with_force("simplified", simplified.is_enabled())
                .ok();
        }
    });

    let context = LayoutContext {
        simplified: *simplified,
        toggle,
    };

    html! {
        <ContextProvider<LayoutContext> context={context}>
            {props.children.clone()}
        </ContextProvider<LayoutContext>>
    }
}

#[hook]
pub fn use_layout() -> LayoutContext {
    use_context::<LayoutContext>().expect("use_layout must be used within a LayoutProvider")
}
