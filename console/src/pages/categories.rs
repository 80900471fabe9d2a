//! Categories: list, details with the items they group, and creation.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::components::details_view::{DetailRow, DetailsView, EditableField};
use crate::components::form_field::TextField;
use crate::components::list_view::ListView;
use crate::net::api::HttpGateway;
use crate::net::types::{Category, Item, NewCategory};
use crate::pages::{list_rows, navigate_on, route_id};
use crate::state::auth::AuthState;
use crate::state::fetch::Fetch;
use crate::util::form::required;
use crate::util::list_view::Listed;
use crate::util::task::{load, load_into, run_action};

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let gateway = expect_context::<HttpGateway>();
    let categories = load(async move { gateway.list_categories().await });

    view! {
        <ListView title="Categories" columns=Category::columns() rows=list_rows(categories) add_path="/categories/add"/>
    }
}

#[component]
pub fn CategoryDetailsPage() -> impl IntoView {
    let gateway = expect_context::<HttpGateway>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let id = route_id();
    let category = RwSignal::new(Fetch::<Category>::Loading);
    let items = RwSignal::new(Fetch::<Vec<Item>>::Loading);
    let error = RwSignal::new(None::<String>);

    let gw = gateway.clone();
    Effect::new(move || match id.get() {
        Some(id) => {
            let (for_category, for_items) = (gw.clone(), gw.clone());
            load_into(category, async move { for_category.get_category(id).await });
            load_into(items, async move { for_items.category_items(id).await });
        }
        None => category.set(Fetch::Failed("Unknown category.".to_owned())),
    });

    let editable = Signal::derive(move || auth.with(AuthState::can_edit_inventory));
    let on_name = Callback::new(move |name: String| {
        let Some(current) = category.with_untracked(|f| f.ready().cloned()) else {
            return;
        };
        let edit = NewCategory { name };
        let gw = gateway.clone();
        run_action(async move { gw.update_category(current.id, &edit).await }, error, move |updated| {
            category.set(Fetch::Ready(updated));
        });
    });
    let name = Signal::derive(move || category.with(|f| f.ready().map(|c| c.name.clone()).unwrap_or_default()));
    let id_label = Signal::derive(move || category.with(|f| f.ready().map(|c| c.id.to_string()).unwrap_or_default()));

    view! {
        <DetailsView title="Category" back_path="/categories">
            {move || match category.get() {
                Fetch::Loading => view! { <p>"Loading..."</p> }.into_any(),
                Fetch::Failed(message) => view! { <p class="notice notice--error">{message}</p> }.into_any(),
                Fetch::Ready(_) => {
                    view! {
                        <DetailRow label="ID" value=id_label/>
                        <EditableField label="Name" value=name editable=editable on_save=on_name/>
                    }
                        .into_any()
                }
            }}
            {move || error.get().map(|message| view! { <p class="notice notice--error">{message}</p> })}
            <h2>"Items in Category"</h2>
            {move || match items.get() {
                Fetch::Loading => view! { <p>"Loading..."</p> }.into_any(),
                Fetch::Failed(message) => view! { <p class="notice notice--error">{message}</p> }.into_any(),
                Fetch::Ready(list) if list.is_empty() => view! { <p>"No items in this category."</p> }.into_any(),
                Fetch::Ready(list) => view! {
                    <table class="list-view__table">
                        <thead>
                            <tr><th>"Name"</th><th>"Actions"</th></tr>
                        </thead>
                        <tbody>
                            {list
                                .into_iter()
                                .map(|item| view! {
                                    <tr>
                                        <td>{item.name}</td>
                                        <td><A href=format!("/items/{}", item.id)>"View Item Details"</A></td>
                                    </tr>
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }
                    .into_any(),
            }}
        </DetailsView>
    }
}

#[component]
pub fn AddCategoryPage() -> impl IntoView {
    let gateway = expect_context::<HttpGateway>();
    let name = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let redirect = RwSignal::new(None::<String>);
    navigate_on(redirect);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let payload = match required(&name.get_untracked(), "Name is required.") {
            Ok(name) => NewCategory { name },
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        let gw = gateway.clone();
        run_action(async move { gw.add_category(&payload).await }, error, move |created| {
            redirect.set(Some(format!("/categories/{}", created.id)));
        });
    };

    view! {
        <div class="form-page">
            <Title text="Warehouse Manager | Add Category"/>
            <h1>"Add Category"</h1>
            {move || error.get().map(|text| view! { <p class="notice notice--error">{text}</p> })}
            <form on:submit=on_submit>
                <TextField label="Name" value=name/>
                <button type="submit">"Add Category"</button>
            </form>
        </div>
    }
}
