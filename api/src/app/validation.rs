//! Registration input validation
//!
//! Stateless checks run before any collaborator is contacted.

use std::sync::OnceLock;

use chrono::{Days, Months, NaiveDate};
use regex::Regex;

use super::registration_policy::MIN_AGE_YEARS;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // local part, "@", then a domain with at least one dot-separated segment
        let pattern = r"^\w+([-+.']\w+)*@\w+([-.]\w+)*\.\w+([-.]\w+)*$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Both names must be non-empty. Whitespace counts as content.
pub fn has_required_names(firstname: &str, surname: &str) -> bool {
    !firstname.is_empty() && !surname.is_empty()
}

/// Check an email address against the accepted grammar.
///
/// The whole string must match, so a second `@` or a leading or trailing
/// separator fails.
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Whether someone born on `date_of_birth` is old enough to register on `today`.
///
/// Passes when `date_of_birth + MIN_AGE_YEARS - 1 day < today`, which admits
/// the birthday itself. A 29 February birth date lands on 28 February in
/// non-leap years. Dates too close to the calendar bounds to shift fail.
pub fn is_old_enough(date_of_birth: NaiveDate, today: NaiveDate) -> bool {
    date_of_birth
        .checked_add_months(Months::new(MIN_AGE_YEARS * 12))
        .and_then(|d| d.checked_sub_days(Days::new(1)))
        .is_some_and(|eligible_from| eligible_from < today)
}
