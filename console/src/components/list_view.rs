//! Generic searchable, sortable, paginated table.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::components::pagination::Pagination;
use crate::state::auth::AuthState;
use crate::state::fetch::Fetch;
use crate::util::list_view::{ListPage, ListQuery, ListRow, PAGE_SIZES, apply};

#[component]
pub fn ListView(
    #[prop(into)] title: String,
    columns: &'static [&'static str],
    #[prop(into)] rows: Signal<Fetch<Vec<ListRow>>>,
    /// Create page, shown to signed-in users.
    #[prop(optional)]
    add_path: Option<&'static str>,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let query = RwSignal::new(ListQuery::default());
    let page = Memo::new(move |_| {
        rows.with(|fetch| match fetch {
            Fetch::Ready(rows) => query.with(|q| apply(rows, q)),
            Fetch::Loading | Fetch::Failed(_) => ListPage::default(),
        })
    });

    let noun = title.to_lowercase();
    let empty_message = format!("No {noun} available.");
    let add_label = StoredValue::new(format!("Add {title}"));

    view! {
        <div class="list-view">
            <Title text=format!("Warehouse Manager | {title}")/>
            <h1>{title.clone()}</h1>
            {add_path
                .map(|path| {
                    view! {
                        <Show when=move || auth.get().can_edit_inventory()>
                            <A href=path>{add_label.get_value()}</A>
                        </Show>
                    }
                })}
            <div class="list-view__controls">
                <input
                    class="list-view__search"
                    type="text"
                    placeholder=format!("Search {noun}...")
                    prop:value=move || query.with(|q| q.search.clone())
                    on:input=move |ev| query.update(|q| q.set_search(event_target_value(&ev)))
                />
                <label>
                    "Items per page: "
                    <select
                        prop:value=move || query.with(|q| q.page_size.to_string())
                        on:change=move |ev| {
                            if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                                query.update(|q| q.set_page_size(size));
                            }
                        }
                    >
                        {PAGE_SIZES.iter().map(|size| view! { <option value=size.to_string()>{*size}</option> }).collect_view()}
                    </select>
                </label>
            </div>
            {move || match rows.get() {
                Fetch::Loading => view! { <p>"Loading..."</p> }.into_any(),
                Fetch::Failed(message) => view! { <p class="list-view__error">{message}</p> }.into_any(),
                Fetch::Ready(_) if page.with(|p| p.rows.is_empty()) => view! { <p>{empty_message.clone()}</p> }.into_any(),
                Fetch::Ready(_) => {
                    view! {
                        <table class="list-view__table">
                            <thead>
                                <tr>{render_headers(columns, query)}<th>"Actions"</th></tr>
                            </thead>
                            <tbody>
                                {move || page.get().rows.into_iter().map(render_row).collect_view()}
                            </tbody>
                        </table>
                        <Pagination
                            current=Signal::derive(move || page.with(|p| p.page))
                            total=Signal::derive(move || page.with(|p| p.total_pages))
                            on_change=Callback::new(move |n| {
                                let total = page.with_untracked(|p| p.total_pages);
                                query.update(|q| q.set_page(n, total));
                            })
                        />
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

fn render_headers(columns: &'static [&'static str], query: RwSignal<ListQuery>) -> impl IntoView {
    columns
        .iter()
        .enumerate()
        .map(|(index, label)| {
            view! {
                <th class="list-view__header" on:click=move |_| query.update(|q| q.toggle_sort(index))>
                    {*label}
                    " "
                    {move || query.with(|q| q.sort_marker(index))}
                </th>
            }
        })
        .collect_view()
}

fn render_row(row: ListRow) -> impl IntoView {
    let link = row.link.map(|href| view! { <A href=href>"Details"</A> });
    view! {
        <tr>
            {row.cells.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}
            <td>{link}</td>
        </tr>
    }
}
