//! Page-number strip with ellipses.

use leptos::prelude::*;

use crate::util::list_view::{PageLink, page_range};

/// Hidden when everything fits on one page.
#[component]
pub fn Pagination(
    #[prop(into)] current: Signal<usize>,
    #[prop(into)] total: Signal<usize>,
    on_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <Show when=move || (total.get() > 1)>
            <nav class="pagination">
                <ul>
                    {move || {
                        page_range(current.get(), total.get())
                            .into_iter()
                            .map(|link| match link {
                                PageLink::Ellipsis => {
                                    view! {
                                        <li class="page-item disabled">
                                            <span class="page-link">"..."</span>
                                        </li>
                                    }
                                        .into_any()
                                }
                                PageLink::Page(n) => {
                                    view! {
                                        <li class="page-item" class:active=move || current.get() == n>
                                            <button class="page-link" on:click=move |_| on_change.run(n)>
                                                {n}
                                            </button>
                                        </li>
                                    }
                                        .into_any()
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </nav>
        </Show>
    }
}
