//! Warehouses: list, details with stock on hand, and creation.

#[cfg(test)]
#[path = "warehouses_test.rs"]
mod warehouses_test;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::components::details_view::{ConfirmDelete, DetailsView, EditableField};
use crate::components::form_field::TextField;
use crate::components::list_view::ListView;
use crate::net::api::HttpGateway;
use crate::net::types::{NewWarehouse, Stock, Warehouse};
use crate::pages::{list_rows, navigate_on, route_id};
use crate::state::auth::AuthState;
use crate::state::fetch::Fetch;
use crate::util::form::required;
use crate::util::list_view::Listed;
use crate::util::task::{load, load_into, run_action};

#[component]
pub fn WarehousesPage() -> impl IntoView {
    let gateway = expect_context::<HttpGateway>();
    let warehouses = load(async move { gateway.list_warehouses().await });

    view! {
        <ListView title="Warehouses" columns=Warehouse::columns() rows=list_rows(warehouses) add_path="/warehouses/add"/>
    }
}

#[component]
pub fn WarehouseDetailsPage() -> impl IntoView {
    let gateway = expect_context::<HttpGateway>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let id = route_id();
    let warehouse = RwSignal::new(Fetch::<Warehouse>::Loading);
    let stock = RwSignal::new(Fetch::<Vec<Stock>>::Loading);
    let error = RwSignal::new(None::<String>);
    let redirect = RwSignal::new(None::<String>);
    navigate_on(redirect);

    let gw = gateway.clone();
    Effect::new(move || match id.get() {
        Some(id) => {
            let (for_warehouse, for_stock) = (gw.clone(), gw.clone());
            load_into(warehouse, async move { for_warehouse.get_warehouse(id).await });
            load_into(stock, async move { for_stock.stock_for_warehouse(id).await });
        }
        None => warehouse.set(Fetch::Failed("Unknown warehouse.".to_owned())),
    });

    let editable = Signal::derive(move || auth.with(AuthState::can_edit_inventory));
    let gw = gateway.clone();
    let save = move |apply: fn(&mut NewWarehouse, String), value: String| {
        let Some(current) = warehouse.with_untracked(|f| f.ready().cloned()) else {
            return;
        };
        let mut edit = NewWarehouse::from(&current);
        apply(&mut edit, value);
        let gw = gw.clone();
        run_action(async move { gw.update_warehouse(current.id, &edit).await }, error, move |updated| {
            warehouse.set(Fetch::Ready(updated));
        });
    };
    let on_name = {
        let save = save.clone();
        Callback::new(move |value| save(|edit, v| edit.name = v, value))
    };
    let on_location = Callback::new(move |value| save(|edit, v| edit.location = v, value));
    let on_delete = Callback::new(move |()| {
        let Some(id) = id.get_untracked() else { return };
        let gw = gateway.clone();
        run_action(async move { gw.delete_warehouse(id).await }, error, move |_| {
            redirect.set(Some("/warehouses".to_owned()));
        });
    });

    let field = move |pick: fn(&Warehouse) -> String| {
        Signal::derive(move || warehouse.with(|f| f.ready().map(pick).unwrap_or_default()))
    };

    view! {
        <DetailsView title="Warehouse" back_path="/warehouses">
            {move || match warehouse.get() {
                Fetch::Loading => view! { <p>"Loading..."</p> }.into_any(),
                Fetch::Failed(message) => view! { <p class="notice notice--error">{message}</p> }.into_any(),
                Fetch::Ready(_) => {
                    view! {
                        <EditableField label="Name" value=field(|w| w.name.clone()) editable=editable on_save=on_name/>
                        <EditableField
                            label="Location"
                            value=field(|w| w.location.clone())
                            editable=editable
                            on_save=on_location
                        />
                        <Show when=move || editable.get()>
                            <ConfirmDelete label="warehouse" on_confirm=on_delete/>
                        </Show>
                    }
                        .into_any()
                }
            }}
            {move || error.get().map(|message| view! { <p class="notice notice--error">{message}</p> })}
            <h2>"Stock in Warehouse"</h2>
            {move || match stock.get() {
                Fetch::Loading => view! { <p>"Loading..."</p> }.into_any(),
                Fetch::Failed(message) => view! { <p class="notice notice--error">{message}</p> }.into_any(),
                Fetch::Ready(entries) if entries.is_empty() => view! { <p>"No stock found in this warehouse."</p> }.into_any(),
                Fetch::Ready(entries) => view! {
                    <table class="list-view__table">
                        <thead>
                            <tr><th>"Item Name"</th><th>"Quantity"</th><th>"Actions"</th></tr>
                        </thead>
                        <tbody>
                            {entries
                                .into_iter()
                                .map(|entry| view! {
                                    <tr>
                                        <td>{entry.item.name}</td>
                                        <td>{entry.stock_level}</td>
                                        <td><A href=format!("/items/{}", entry.item_id)>"View Item Details"</A></td>
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

fn validate_new_warehouse(name: &str, location: &str) -> Result<NewWarehouse, &'static str> {
    Ok(NewWarehouse {
        name: required(name, "Name is required.")?,
        location: required(location, "Location is required.")?,
    })
}

#[component]
pub fn AddWarehousePage() -> impl IntoView {
    let gateway = expect_context::<HttpGateway>();
    let name = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let redirect = RwSignal::new(None::<String>);
    navigate_on(redirect);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let payload = match validate_new_warehouse(&name.get_untracked(), &location.get_untracked()) {
            Ok(payload) => payload,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        let gw = gateway.clone();
        run_action(async move { gw.add_warehouse(&payload).await }, error, move |created| {
            redirect.set(Some(format!("/warehouses/{}", created.id)));
        });
    };

    view! {
        <div class="form-page">
            <Title text="Warehouse Manager | Add Warehouse"/>
            <h1>"Add Warehouse"</h1>
            {move || error.get().map(|text| view! { <p class="notice notice--error">{text}</p> })}
            <form on:submit=on_submit>
                <TextField label="Name" value=name/>
                <TextField label="Location" value=location/>
                <button type="submit">"Add Warehouse"</button>
            </form>
        </div>
    }
}
