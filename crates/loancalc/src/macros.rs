#[macro_export]
/// Builds a Yew `Callback` that runs an async block on the browser's event loop.
///
/// Every listed variable is cloned once when the callback is built and again
/// for each invocation, so the spawned future owns its captures.
///
/// Without an event parameter:
/// ```compile_fail
/// let on_create = async_callback!([panel, dispatch] {
///     panel.create_room(&dispatch).await;
/// });
/// ```
///
/// With an event parameter, optionally typed:
/// ```compile_fail
/// let on_copy = async_callback!([panel, dispatch] |code: String| {
///     panel.copy_code(&dispatch, code).await;
/// });
/// ```
///
/// The body runs after the handler returns, so anything that must happen
/// synchronously (such as `prevent_default`) belongs in a plain callback.
macro_rules! async_callback {
    // Must come first: a closure is also a valid `expr`
    ([$($var:ident),* $(,)?] |$event:ident $(: $ty:ty)?| $body:expr) => {
        {
            $(let $var = $var.clone();)*
            Callback::from(move |$event $(: $ty)?| {
                $(let $var = $var.clone();)*
                wasm_bindgen_futures::spawn_local(async move {
                    $body
                });
            })
        }
    };

    ([$($var:ident),* $(,)?] $body:expr) => {
        {
            $(let $var = $var.clone();)*
            Callback::from(move |_| {
                $(let $var = $var.clone();)*
                wasm_bindgen_futures::spawn_local(async move {
                    $body
                });
            })
        }
    };
}
