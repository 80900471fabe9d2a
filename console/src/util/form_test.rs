use super::*;

// =============================================================================
// scalar fields
// =============================================================================

#[test]
fn required_trims_and_rejects_blank() {
    assert_eq!(required("  Shelf A ", "Name is required."), Ok("Shelf A".to_owned()));
    assert_eq!(required("   ", "Name is required."), Err("Name is required."));
}

#[test]
fn parse_id_accepts_positive_integers_only() {
    assert_eq!(parse_id(" 12 ", "Pick a category."), Ok(12));
    assert_eq!(parse_id("0", "Pick a category."), Err("Pick a category."));
    assert_eq!(parse_id("", "Pick a category."), Err("Pick a category."));
}

#[test]
fn parse_quantity_rejects_zero_negative_and_fractional() {
    assert_eq!(parse_quantity("5"), Ok(5));
    assert!(parse_quantity("0").is_err());
    assert!(parse_quantity("-2").is_err());
    assert!(parse_quantity("1.5").is_err());
}

#[test]
fn parse_price_accepts_non_negative_decimals() {
    assert_eq!(parse_price("12.50"), Ok(12.5));
    assert_eq!(parse_price("0"), Ok(0.0));
    assert!(parse_price("-1").is_err());
    assert!(parse_price("NaN").is_err());
}

#[test]
fn parse_date_checks_shape_and_ranges() {
    assert_eq!(parse_date("2024-05-01"), Ok("2024-05-01".to_owned()));
    assert!(parse_date("2024-5-1").is_err());
    assert!(parse_date("2024-13-01").is_err());
    assert!(parse_date("01/05/2024").is_err());
}

#[test]
fn iso_date_formats_utc_calendar_date() {
    assert_eq!(iso_date(0), "1970-01-01");
    assert_eq!(iso_date(1_717_200_000_000), "2024-06-01");
    assert_eq!(iso_date(951_782_400_000), "2000-02-29");
    assert_eq!(iso_date(-86_400_000), "1969-12-31");
}

#[test]
fn parse_email_requires_local_part_and_dotted_domain() {
    assert_eq!(parse_email(" ann@example.com "), Ok("ann@example.com".to_owned()));
    assert_eq!(parse_email(""), Err("Email is required."));
    assert_eq!(parse_email("ann@localhost"), Err("Enter a valid email address."));
    assert_eq!(parse_email("@example.com"), Err("Enter a valid email address."));
}

// =============================================================================
// composite forms
// =============================================================================

#[test]
fn validate_login_input_trims_username_but_not_password() {
    assert_eq!(
        validate_login_input("  ann ", " pw "),
        Ok(("ann".to_owned(), " pw ".to_owned()))
    );
    assert_eq!(validate_login_input("   ", "pw"), Err("Enter both username and password."));
    assert_eq!(validate_login_input("ann", ""), Err("Enter both username and password."));
}

#[test]
fn validate_password_change_enforces_rules_in_order() {
    assert_eq!(
        validate_password_change("", "longenough", "longenough"),
        Err("Enter your current password.")
    );
    assert_eq!(
        validate_password_change("old", "short", "short"),
        Err("New password must be at least 8 characters.")
    );
    assert_eq!(
        validate_password_change("old", "longenough", "longenougH"),
        Err("New passwords do not match.")
    );
    assert_eq!(
        validate_password_change("longenough", "longenough", "longenough"),
        Err("New password must differ from the current one.")
    );
    let change = validate_password_change("oldpassword", "newpassword", "newpassword").expect("valid");
    assert_eq!(change.new_password, "newpassword");
}
