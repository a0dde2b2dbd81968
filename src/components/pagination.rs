//! Pager strip under paginated tables.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use leptos::prelude::*;

/// One page back, never below the first page.
fn step_back(page: i64) -> i64 {
    (page - 1).max(1)
}

/// One page forward, never past the last page.
fn step_forward(page: i64, last: i64) -> i64 {
    (page + 1).min(last)
}

/// Previous/next controls with a "Page X sur Y" label. Hidden entirely when
/// there is at most one page.
#[component]
pub fn Pager(page: RwSignal<i64>, #[prop(into)] total_pages: Signal<i64>) -> impl IntoView {
    let prev = move |_: leptos::ev::MouseEvent| {
        page.update(|p| *p = step_back(*p));
    };
    let next = move |_: leptos::ev::MouseEvent| {
        let last = total_pages.get();
        page.update(|p| *p = step_forward(*p, last));
    };

    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <div class="pager">
                <button
                    class="btn pager__button"
                    disabled=move || page.get() <= 1
                    on:click=prev
                >
                    "Précédent"
                </button>
                <span class="pager__label">
                    {move || format!("Page {} sur {}", page.get(), total_pages.get())}
                </span>
                <button
                    class="btn pager__button"
                    disabled=move || page.get() >= total_pages.get()
                    on:click=next
                >
                    "Suivant"
                </button>
            </div>
        </Show>
    }
}
