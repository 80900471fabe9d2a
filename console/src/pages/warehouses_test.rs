use super::*;

#[test]
fn new_warehouse_trims_both_fields() {
    assert_eq!(
        validate_new_warehouse(" North ", " Oslo "),
        Ok(NewWarehouse {
            name: "North".to_owned(),
            location: "Oslo".to_owned()
        })
    );
}

#[test]
fn new_warehouse_requires_location() {
    assert_eq!(validate_new_warehouse("North", "  "), Err("Location is required."));
}
