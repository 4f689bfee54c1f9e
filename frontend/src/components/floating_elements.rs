use yew::prelude::*;

use crate::decor::{browser_random, scatter, FLOATING_ELEMENT_COUNT};

#[function_component(FloatingElements)]
pub fn floating_elements() -> Html {
    // Generated once per mount.
    let elements = use_state(|| scatter(FLOATING_ELEMENT_COUNT, browser_random));

    html! {
        <>
            { for elements.iter().map(|element| html! {
                <div key={element.id} class="floating-dot" style={element.style()}></div>
            }) }
        </>
    }
}
