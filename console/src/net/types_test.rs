use super::*;

fn item_json() -> serde_json::Value {
    serde_json::json!({
        "id": 4,
        "name": "Pallet jack",
        "description": "Manual, 2.5t",
        "category_id": 2,
        "category": { "id": 2, "name": "Equipment" }
    })
}

#[test]
fn stock_movement_parses_nested_models() {
    let body = serde_json::json!({
        "id": 11,
        "item_id": 4,
        "warehouse_id": 1,
        "movement_type": "outflow",
        "quantity": 3,
        "movement_date": "2024-05-02",
        "price": 12.5,
        "item": item_json(),
        "warehouse": { "id": 1, "name": "North", "location": "Oslo" },
        "remaining_quantity": 0
    });
    let movement: StockMovement = serde_json::from_value(body).expect("movement");
    assert_eq!(movement.movement_type, MovementType::Outflow);
    assert_eq!(movement.item.category_label(), "Equipment");
    assert_eq!(movement.warehouse.location, "Oslo");
}

#[test]
fn item_without_embedded_category_labels_by_id() {
    let mut body = item_json();
    body["category"] = serde_json::Value::Null;
    let item: Item = serde_json::from_value(body).expect("item");
    assert_eq!(item.category_label(), "#2");
}

#[test]
fn movement_type_uses_backend_tags() {
    assert_eq!(
        serde_json::to_value(MovementType::Inflow).expect("json"),
        serde_json::json!("inflow")
    );
    assert_eq!(MovementType::parse("outflow"), Some(MovementType::Outflow));
    assert_eq!(MovementType::parse("in"), None);
    assert_eq!(MovementType::Outflow.as_str(), "outflow");
}

#[test]
fn new_stock_movement_serializes_create_payload() {
    let payload = NewStockMovement {
        item_id: 4,
        warehouse_id: 1,
        movement_type: MovementType::Inflow,
        quantity: 10,
        movement_date: "2024-05-01".to_owned(),
        price: 9.99,
    };
    assert_eq!(
        serde_json::to_value(&payload).expect("json"),
        serde_json::json!({
            "item_id": 4,
            "warehouse_id": 1,
            "movement_type": "inflow",
            "quantity": 10,
            "movement_date": "2024-05-01",
            "price": 9.99
        })
    );
}

#[test]
fn ack_tolerates_missing_fields() {
    let ack: Ack = serde_json::from_str("{}").expect("ack");
    assert_eq!(ack, Ack::default());
}

#[test]
fn item_edit_starts_from_current_fields() {
    let item: Item = serde_json::from_value(item_json()).expect("item");
    let mut edit = NewItem::from(&item);
    edit.name = "Pallet jack XL".to_owned();
    assert_eq!(
        serde_json::to_value(&edit).expect("json"),
        serde_json::json!({
            "name": "Pallet jack XL",
            "description": "Manual, 2.5t",
            "category_id": 2
        })
    );
}
