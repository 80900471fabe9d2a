//! Form input validation shared by the create and edit pages.
//!
//! Validators return the cleaned value or the inline message to show.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use session::PasswordChange;

pub const MIN_PASSWORD_LEN: usize = 8;

/// Trimmed non-empty value.
pub fn required(raw: &str, message: &'static str) -> Result<String, &'static str> {
    let value = raw.trim();
    if value.is_empty() { Err(message) } else { Ok(value.to_owned()) }
}

/// Positive record id from a text field or `<select>` value.
pub fn parse_id(raw: &str, message: &'static str) -> Result<i64, &'static str> {
    raw.trim().parse::<i64>().ok().filter(|id| *id > 0).ok_or(message)
}

pub fn parse_quantity(raw: &str) -> Result<i64, &'static str> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|q| *q > 0)
        .ok_or("Quantity must be a positive whole number.")
}

pub fn parse_price(raw: &str) -> Result<f64, &'static str> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p >= 0.0)
        .ok_or("Price must be a non-negative number.")
}

/// `YYYY-MM-DD`, as produced by `<input type="date">`.
pub fn parse_date(raw: &str) -> Result<String, &'static str> {
    const MESSAGE: &str = "Enter a date as YYYY-MM-DD.";
    let value = raw.trim();
    let parts: Vec<&str> = value.split('-').collect();
    let well_formed = matches!(parts.as_slice(), [y, m, d]
        if y.len() == 4 && m.len() == 2 && d.len() == 2
            && parts.iter().all(|p| p.bytes().all(|b| b.is_ascii_digit())));
    if !well_formed {
        return Err(MESSAGE);
    }
    let month: u32 = parts[1].parse().map_err(|_| MESSAGE)?;
    let day: u32 = parts[2].parse().map_err(|_| MESSAGE)?;
    if (1..=12).contains(&month) && (1..=31).contains(&day) {
        Ok(value.to_owned())
    } else {
        Err(MESSAGE)
    }
}

/// `YYYY-MM-DD` (UTC) for a Unix timestamp in milliseconds.
pub fn iso_date(epoch_millis: i64) -> String {
    // Days-to-civil conversion over the proleptic Gregorian calendar.
    let days = epoch_millis.div_euclid(86_400_000) + 719_468;
    let era = days.div_euclid(146_097);
    let doe = days - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);
    format!("{year:04}-{month:02}-{day:02}")
}

/// Minimal shape check; the backend performs the real validation.
pub fn parse_email(raw: &str) -> Result<String, &'static str> {
    let value = required(raw, "Email is required.")?;
    match value.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(value),
        _ => Err("Enter a valid email address."),
    }
}

pub fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

pub fn validate_password_change(current: &str, new: &str, confirm: &str) -> Result<PasswordChange, &'static str> {
    if current.is_empty() {
        return Err("Enter your current password.");
    }
    if new.len() < MIN_PASSWORD_LEN {
        return Err("New password must be at least 8 characters.");
    }
    if new != confirm {
        return Err("New passwords do not match.");
    }
    if new == current {
        return Err("New password must differ from the current one.");
    }
    Ok(PasswordChange {
        current_password: current.to_owned(),
        new_password: new.to_owned(),
    })
}
