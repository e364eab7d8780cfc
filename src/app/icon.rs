use leptos::prelude::*;

use crate::icons::Icon;

#[component]
pub fn IconView(
    icon: Icon,
    #[prop(default = 24)] size: u32,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let size = size.to_string();
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size.clone()
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=class
            inner_html=icon.markup()
        ></svg>
    }
}
