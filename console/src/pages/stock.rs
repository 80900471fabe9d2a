//! Stock levels, stock movement history, and recording a movement.

#[cfg(test)]
#[path = "stock_test.rs"]
mod stock_test;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_meta::Title;
use session::{Clock, SystemClock};

use crate::components::form_field::{SelectField, TextField};
use crate::components::list_view::ListView;
use crate::net::api::HttpGateway;
use crate::net::types::{Category, Item, MovementType, NewStockMovement, Stock, StockMovement, Warehouse};
use crate::pages::{list_rows, navigate_on, route_id, select_options};
use crate::state::fetch::Fetch;
use crate::util::form::{iso_date, parse_date, parse_id, parse_price, parse_quantity};
use crate::util::list_view::Listed;
use crate::util::task::{load, run_action};

#[component]
pub fn StockPage() -> impl IntoView {
    let gateway = expect_context::<HttpGateway>();
    let stock = load(async move { gateway.list_stock().await });

    view! { <ListView title="Stock" columns=Stock::columns() rows=list_rows(stock)/> }
}

#[component]
pub fn MovementsPage() -> impl IntoView {
    let gateway = expect_context::<HttpGateway>();
    let movements = load(async move { gateway.list_movements().await });

    view! {
        <ListView
            title="Stock Movements"
            columns=StockMovement::columns()
            rows=list_rows(movements)
            add_path="/stock/movement/add"
        />
    }
}

/// Items offered for selection, optionally narrowed to one category.
fn items_in_category(items: &[Item], category_id: Option<i64>) -> Vec<(String, String)> {
    items
        .iter()
        .filter(|item| category_id.is_none_or(|id| item.category_id == id))
        .map(|item| (item.id.to_string(), item.name.clone()))
        .collect()
}

fn validate_new_movement(
    item_id: &str,
    warehouse_id: &str,
    movement_type: &str,
    quantity: &str,
    price: &str,
    movement_date: &str,
) -> Result<NewStockMovement, &'static str> {
    const PICK_BOTH: &str = "Please select both an item and a warehouse.";
    Ok(NewStockMovement {
        item_id: parse_id(item_id, PICK_BOTH)?,
        warehouse_id: parse_id(warehouse_id, PICK_BOTH)?,
        movement_type: MovementType::parse(movement_type).ok_or("Pick inflow or outflow.")?,
        quantity: parse_quantity(quantity)?,
        movement_date: parse_date(movement_date)?,
        price: parse_price(price)?,
    })
}

#[component]
pub fn AddMovementPage() -> impl IntoView {
    let gateway = expect_context::<HttpGateway>();
    let preset_item = route_id();
    let category = RwSignal::new(String::new());
    let item = RwSignal::new(preset_item.get_untracked().map(|id| id.to_string()).unwrap_or_default());
    let warehouse = RwSignal::new(String::new());
    let movement_type = RwSignal::new(MovementType::Inflow.as_str().to_owned());
    let quantity = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let movement_date = RwSignal::new(iso_date(SystemClock.now_millis()));
    let error = RwSignal::new(None::<String>);
    let redirect = RwSignal::new(None::<String>);
    navigate_on(redirect);

    let categories = {
        let gw = gateway.clone();
        load(async move { gw.list_categories().await })
    };
    let items = {
        let gw = gateway.clone();
        load(async move { gw.list_items().await })
    };
    let warehouses = {
        let gw = gateway.clone();
        load(async move { gw.list_warehouses().await })
    };

    // Changing the category filter invalidates the picked item.
    Effect::new(move |previous: Option<String>| {
        let current = category.get();
        if previous.is_some_and(|p| p != current) {
            item.set(String::new());
        }
        current
    });

    let category_options = select_options(categories, |c: &Category| (c.id.to_string(), c.name.clone()));
    let warehouse_options = select_options(warehouses, |w: &Warehouse| (w.id.to_string(), w.name.clone()));
    let item_options = Signal::derive(move || {
        let filter = category.with(|c| c.parse::<i64>().ok());
        items.with(|f| f.ready().map(|list| items_in_category(list, filter)).unwrap_or_default())
    });
    let type_options = Signal::derive(|| {
        [MovementType::Inflow, MovementType::Outflow]
            .into_iter()
            .map(|t| (t.as_str().to_owned(), t.as_str().to_owned()))
            .collect::<Vec<_>>()
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let payload = match validate_new_movement(
            &item.get_untracked(),
            &warehouse.get_untracked(),
            &movement_type.get_untracked(),
            &quantity.get_untracked(),
            &price.get_untracked(),
            &movement_date.get_untracked(),
        ) {
            Ok(payload) => payload,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        let gw = gateway.clone();
        run_action(async move { gw.add_movement(&payload).await }, error, move |_| {
            redirect.set(Some("/stock/movement".to_owned()));
        });
    };

    view! {
        <div class="form-page">
            <Title text="Warehouse Manager | Add Stock Movement"/>
            <h1>"Add Stock Movement"</h1>
            {move || error.get().map(|text| view! { <p class="notice notice--error">{text}</p> })}
            {move || items.with(Fetch::is_loading).then(|| view! { <p>"Loading..."</p> })}
            <form on:submit=on_submit>
                <SelectField label="Category" value=category options=category_options placeholder="All categories"/>
                <SelectField label="Item" value=item options=item_options placeholder="Select an item"/>
                <SelectField label="Warehouse" value=warehouse options=warehouse_options placeholder="Select a warehouse"/>
                <SelectField label="Movement Type" value=movement_type options=type_options/>
                <TextField label="Quantity" value=quantity kind="number"/>
                <TextField label="Price" value=price kind="number"/>
                <TextField label="Date" value=movement_date kind="date"/>
                <button type="submit">"Add Stock Movement"</button>
            </form>
        </div>
    }
}
