use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmationDialogProps {
    pub is_open: bool,
    pub title: AttrValue,
    pub confirm_label: AttrValue,
    pub cancel_label: AttrValue,
    pub on_confirm: Callback<()>,
    /// Fired by the cancel button and by clicking the backdrop
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ConfirmationDialog)]
pub fn confirmation_dialog(props: &ConfirmationDialogProps) -> Html {
    if !props.is_open {
        return html! {};
    }

    let on_backdrop = props.on_close.reform(|_: MouseEvent| ());
    let on_cancel = props.on_close.reform(|_: MouseEvent| ());
    let on_confirm = props.on_confirm.reform(|_: MouseEvent| ());
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center bg-black/50 p-4"
            onclick={on_backdrop}
        >
            <div
                class="w-full max-w-sm bg-white dark:bg-gray-800 border border-gray-200 dark:border-gray-700 rounded-xl p-6 shadow-lg"
                role="dialog"
                aria-modal="true"
                onclick={stop}
            >
                <h3 class="text-lg font-semibold text-gray-900 dark:text-gray-100 mb-2">
                    { props.title.clone() }
                </h3>
                <div class="text-sm text-gray-600 dark:text-gray-400 mb-6">
                    { for props.children.iter() }
                </div>
                <div class="flex justify-end space-x-2">
                    <button
                        class="px-4 py-2 text-sm rounded-md bg-gray-100 hover:bg-gray-200 dark:bg-gray-700 dark:hover:bg-gray-600 text-gray-800 dark:text-gray-100"
                        onclick={on_cancel}
                    >
                        { props.cancel_label.clone() }
                    </button>
                    <button
                        class="px-4 py-2 text-sm rounded-md bg-red-600 hover:bg-red-700 text-white focus:outline-none focus:ring-2 focus:ring-red-500"
                        onclick={on_confirm}
                    >
                        { props.confirm_label.clone() }
                    </button>
                </div>
            </div>
        </div>
    }
}
