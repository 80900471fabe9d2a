use super::*;

fn item(id: i64, category_id: i64, name: &str) -> Item {
    Item {
        id,
        name: name.to_owned(),
        description: String::new(),
        category_id,
        category: None,
    }
}

#[test]
fn items_filter_by_category_when_one_is_picked() {
    let items = [item(1, 10, "Crate"), item(2, 20, "Drill"), item(3, 10, "Pallet")];
    assert_eq!(
        items_in_category(&items, Some(10)),
        [("1".to_owned(), "Crate".to_owned()), ("3".to_owned(), "Pallet".to_owned())]
    );
    assert_eq!(items_in_category(&items, None).len(), 3);
}

#[test]
fn new_movement_parses_every_field() {
    let movement = validate_new_movement("4", "1", "outflow", "3", "12.5", "2024-05-02").expect("valid movement");
    assert_eq!(movement.movement_type, MovementType::Outflow);
    assert_eq!(movement.quantity, 3);
    assert_eq!(movement.price, 12.5);
}

#[test]
fn new_movement_requires_item_and_warehouse_first() {
    assert_eq!(
        validate_new_movement("", "1", "inflow", "0", "x", ""),
        Err("Please select both an item and a warehouse.")
    );
    assert_eq!(
        validate_new_movement("4", "1", "inflow", "0", "1", "2024-05-02"),
        Err("Quantity must be a positive whole number.")
    );
}
