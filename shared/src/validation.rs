//! Validation utilities for the weather history service
//!
//! Request-boundary checks. The aggregator itself never validates; it only
//! reports whether anything matched.

// ============================================================================
// Date Validations
// ============================================================================

/// Parse a month or day query value as a base-10 integer.
///
/// Stricter than a prefix parse on purpose: `"5th"` and `"3.5"` are rejected.
pub fn parse_calendar_component(raw: &str) -> Result<i64, &'static str> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| "Invalid month or day format")
}

/// Validate month is in 1-12
pub fn validate_month(month: i64) -> Result<u32, &'static str> {
    if !(1..=12).contains(&month) {
        return Err("Month must be between 1 and 12");
    }
    Ok(month as u32)
}

/// Validate day is in 1-31.
///
/// Does not check the day against the month: 04-31 passes here and later
/// surfaces as "no data" from the aggregator.
pub fn validate_day(day: i64) -> Result<u32, &'static str> {
    if !(1..=31).contains(&day) {
        return Err("Day must be between 1 and 31");
    }
    Ok(day as u32)
}

// ============================================================================
// General Validations
// ============================================================================

/// Validate email has a `local@domain.tld` shape
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.chars().any(char::is_whitespace) {
        return Err("Invalid email format");
    }

    let (local, domain) = match email.split_once('@') {
        Some(parts) => parts,
        None => return Err("Invalid email format"),
    };

    if local.is_empty() || domain.contains('@') {
        return Err("Invalid email format");
    }

    // Needs a dot with at least one character on each side
    let last = domain.len().saturating_sub(1);
    if domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i < last)
    {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}

/// Validate a city identifier before it is turned into a file name.
/// Lowercase ASCII letters, digits and `-` only.
pub fn validate_city_id(city_id: &str) -> Result<(), &'static str> {
    if city_id.is_empty() {
        return Err("City identifier is required");
    }
    if city_id.len() > 64 {
        return Err("City identifier is too long");
    }
    if !city_id
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err("City identifier must be lowercase alphanumeric or '-'");
    }
    Ok(())
}
