//! Inline SVG icons used by the sidebar.

use yew::prelude::*;

fn stroke_icon(class: &'static str, paths: Html) -> Html {
    html! {
        <svg class={class} fill="none" stroke="currentColor" viewBox="0 0 24 24"
            stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            { paths }
        </svg>
    }
}

pub fn copy(class: &'static str) -> Html {
    stroke_icon(class, html! {
        <>
            <rect x="9" y="9" width="13" height="13" rx="2" ry="2" />
            <path d="M5 15H4a2 2 0 01-2-2V4a2 2 0 012-2h9a2 2 0 012 2v1" />
        </>
    })
}

pub fn check(class: &'static str) -> Html {
    stroke_icon(class, html! { <polyline points="20 6 9 17 4 12" /> })
}

pub fn leave(class: &'static str) -> Html {
    stroke_icon(class, html! {
        <>
            <circle cx="12" cy="12" r="10" />
            <line x1="15" y1="9" x2="9" y2="15" />
            <line x1="9" y1="9" x2="15" y2="15" />
        </>
    })
}

pub fn close(class: &'static str) -> Html {
    stroke_icon(class, html! {
        <>
            <line x1="18" y1="6" x2="6" y2="18" />
            <line x1="6" y1="6" x2="18" y2="18" />
        </>
    })
}

pub fn menu(class: &'static str) -> Html {
    stroke_icon(class, html! {
        <>
            <line x1="3" y1="6" x2="21" y2="6" />
            <line x1="3" y1="12" x2="21" y2="12" />
            <line x1="3" y1="18" x2="21" y2="18" />
        </>
    })
}

pub fn logout(class: &'static str) -> Html {
    stroke_icon(class, html! {
        <>
            <path d="M9 21H5a2 2 0 01-2-2V5a2 2 0 012-2h4" />
            <polyline points="16 17 21 12 16 7" />
            <line x1="21" y1="12" x2="9" y2="12" />
        </>
    })
}

pub fn moon(class: &'static str) -> Html {
    stroke_icon(class, html! { <path d="M21 12.79A9 9 0 1111.21 3 7 7 0 0021 12.79z" /> })
}

pub fn sun(class: &'static str) -> Html {
    stroke_icon(class, html! {
        <>
            <circle cx="12" cy="12" r="5" />
            <line x1="12" y1="1" x2="12" y2="3" />
            <line x1="12" y1="21" x2="12" y2="23" />
            <line x1="1" y1="12" x2="3" y2="12" />
            <line x1="21" y1="12" x2="23" y2="12" />
        </>
    })
}

pub fn globe(class: &'static str) -> Html {
    stroke_icon(class, html! {
        <>
            <circle cx="12" cy="12" r="10" />
            <line x1="2" y1="12" x2="22" y2="12" />
            <path d="M12 2a15.3 15.3 0 014 10 15.3 15.3 0 01-4 10 15.3 15.3 0 01-4-10 15.3 15.3 0 014-10z" />
        </>
    })
}

// Kettle, the simplified layout toggle
pub fn kettle(class: &'static str) -> Html {
    stroke_icon(class, html! {
        <>
            <path d="M6 9h10l1 10a2 2 0 01-2 2H7a2 2 0 01-2-2z" />
            <path d="M9 9V6a3 3 0 016 0v3" />
            <path d="M17 12l4-2" />
        </>
    })
}
