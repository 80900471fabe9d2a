//! Item catalogue: list, details with inline edits and stock, and creation.

#[cfg(test)]
#[path = "items_test.rs"]
mod items_test;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::components::details_view::{ConfirmDelete, DetailRow, DetailsView, EditableField};
use crate::components::form_field::{SelectField, TextField};
use crate::components::list_view::ListView;
use crate::net::api::HttpGateway;
use crate::net::types::{Category, Item, NewItem, Stock};
use crate::pages::{list_rows, navigate_on, route_id, select_options};
use crate::state::auth::AuthState;
use crate::state::fetch::Fetch;
use crate::util::form::{parse_id, required};
use crate::util::list_view::Listed;
use crate::util::task::{load, load_into, run_action};

#[component]
pub fn ItemsPage() -> impl IntoView {
    let gateway = expect_context::<HttpGateway>();
    let items = load(async move { gateway.list_items().await });

    view! { <ListView title="Items" columns=Item::columns() rows=list_rows(items) add_path="/items/add"/> }
}

#[component]
pub fn ItemDetailsPage() -> impl IntoView {
    let gateway = expect_context::<HttpGateway>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let id = route_id();
    let item = RwSignal::new(Fetch::<Item>::Loading);
    let stock = RwSignal::new(Fetch::<Vec<Stock>>::Loading);
    let error = RwSignal::new(None::<String>);
    let redirect = RwSignal::new(None::<String>);
    navigate_on(redirect);

    let gw = gateway.clone();
    Effect::new(move || match id.get() {
        Some(id) => {
            let (for_item, for_stock) = (gw.clone(), gw.clone());
            load_into(item, async move { for_item.get_item(id).await });
            load_into(stock, async move { for_stock.stock_for_item(id).await });
        }
        None => item.set(Fetch::Failed("Unknown item.".to_owned())),
    });

    let editable = Signal::derive(move || auth.with(AuthState::can_edit_inventory));
    let gw = gateway.clone();
    let save = move |apply: fn(&mut NewItem, String), value: String| {
        let Some(current) = item.with_untracked(|f| f.ready().cloned()) else {
            return;
        };
        let mut edit = NewItem::from(&current);
        apply(&mut edit, value);
        let gw = gw.clone();
        run_action(async move { gw.update_item(current.id, &edit).await }, error, move |updated| {
            item.set(Fetch::Ready(updated));
        });
    };
    let on_name = {
        let save = save.clone();
        Callback::new(move |value| save(|edit, v| edit.name = v, value))
    };
    let on_description = Callback::new(move |value| save(|edit, v| edit.description = v, value));
    let on_delete = Callback::new(move |()| {
        let Some(id) = id.get_untracked() else { return };
        let gw = gateway.clone();
        run_action(async move { gw.delete_item(id).await }, error, move |_| {
            redirect.set(Some("/items".to_owned()));
        });
    });

    let field = move |pick: fn(&Item) -> String| Signal::derive(move || item.with(|f| f.ready().map(pick).unwrap_or_default()));

    view! {
        <DetailsView title="Item" back_path="/items">
            {move || match item.get() {
                Fetch::Loading => view! { <p>"Loading..."</p> }.into_any(),
                Fetch::Failed(message) => view! { <p class="notice notice--error">{message}</p> }.into_any(),
                Fetch::Ready(current) => {
                    view! {
                        <EditableField label="Name" value=field(|i| i.name.clone()) editable=editable on_save=on_name/>
                        <EditableField
                            label="Description"
                            value=field(|i| i.description.clone())
                            editable=editable
                            on_save=on_description
                        />
                        <DetailRow label="Category" value=field(Item::category_label)/>
                        <A href=format!("/categories/{}", current.category_id)>"View Category"</A>
                        <Show when=move || editable.get()>
                            <A href=format!("/stock/movement/add/{}", current.id)>"Add Stock Movement"</A>
                            <ConfirmDelete label="item" on_confirm=on_delete/>
                        </Show>
                    }
                        .into_any()
                }
            }}
            {move || error.get().map(|message| view! { <p class="notice notice--error">{message}</p> })}
            <h2>"Stock by Warehouse"</h2>
            {move || match stock.get() {
                Fetch::Loading => view! { <p>"Loading..."</p> }.into_any(),
                Fetch::Failed(message) => view! { <p class="notice notice--error">{message}</p> }.into_any(),
                Fetch::Ready(entries) if entries.is_empty() => view! { <p>"No stock recorded for this item."</p> }.into_any(),
                Fetch::Ready(entries) => view! {
                    <table class="list-view__table">
                        <thead>
                            <tr><th>"Warehouse"</th><th>"Stock Level"</th><th>"Date Added"</th></tr>
                        </thead>
                        <tbody>
                            {entries
                                .into_iter()
                                .map(|entry| view! {
                                    <tr>
                                        <td><A href=format!("/warehouses/{}", entry.warehouse_id)>{entry.warehouse.name}</A></td>
                                        <td>{entry.stock_level}</td>
                                        <td>{entry.date_added}</td>
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

fn validate_new_item(name: &str, description: &str, category_id: &str) -> Result<NewItem, &'static str> {
    Ok(NewItem {
        name: required(name, "Name is required.")?,
        description: description.trim().to_owned(),
        category_id: parse_id(category_id, "Pick a category.")?,
    })
}

#[component]
pub fn AddItemPage() -> impl IntoView {
    let gateway = expect_context::<HttpGateway>();
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let redirect = RwSignal::new(None::<String>);
    navigate_on(redirect);

    let categories = {
        let gw = gateway.clone();
        load(async move { gw.list_categories().await })
    };
    let category_options = select_options(categories, |c: &Category| (c.id.to_string(), c.name.clone()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let payload = match validate_new_item(&name.get_untracked(), &description.get_untracked(), &category.get_untracked()) {
            Ok(payload) => payload,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        let gw = gateway.clone();
        run_action(async move { gw.add_item(&payload).await }, error, move |created| {
            redirect.set(Some(format!("/items/{}", created.id)));
        });
    };

    view! {
        <div class="form-page">
            <Title text="Warehouse Manager | Add Item"/>
            <h1>"Add Item"</h1>
            {move || error.get().map(|text| view! { <p class="notice notice--error">{text}</p> })}
            <form on:submit=on_submit>
                <TextField label="Name" value=name/>
                <TextField label="Description" value=description/>
                <SelectField label="Category" value=category options=category_options placeholder="Select a category"/>
                <button type="submit">"Add Item"</button>
            </form>
        </div>
    }
}
