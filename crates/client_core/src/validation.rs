//! Pure validation over a booking draft. Rebuilds the full error mapping on
//! every pass; rules are evaluated independently so a later field's error is
//! never hidden by an earlier one.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use shared::domain::BookingDraft;

/// The closed set of draft attributes the form exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BookingField {
    Name,
    Email,
    CheckIn,
    CheckOut,
    RoomType,
    Guests,
}

impl BookingField {
    /// Wire/form name of the field, as the rendering surface knows it.
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingField::Name => "name",
            BookingField::Email => "email",
            BookingField::CheckIn => "checkIn",
            BookingField::CheckOut => "checkOut",
            BookingField::RoomType => "roomType",
            BookingField::Guests => "guests",
        }
    }
}

/// Field-keyed error texts; absence of a key means the field is currently
/// valid. Ordered map so iteration is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<BookingField, String>);

impl ValidationErrors {
    fn insert(&mut self, field: BookingField, text: impl Into<String>) {
        self.0.insert(field, text.into());
    }

    pub fn get(&self, field: BookingField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (BookingField, &str)> {
        self.0.iter().map(|(field, text)| (*field, text.as_str()))
    }
}

/// Validates a draft snapshot. Pure: identical drafts yield identical
/// error mappings.
pub fn validate(draft: &BookingDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if draft.name.trim().is_empty() {
        errors.insert(BookingField::Name, "Name is required");
    }

    if draft.email.trim().is_empty() {
        errors.insert(BookingField::Email, "Email is required");
    } else if !looks_like_email(&draft.email) {
        errors.insert(BookingField::Email, "Email is invalid");
    }

    if draft.check_in.is_empty() {
        errors.insert(BookingField::CheckIn, "Check-in date is required");
    }
    if draft.check_out.is_empty() {
        errors.insert(BookingField::CheckOut, "Check-out date is required");
    }

    // Ordering only applies once both dates parse as calendar dates; the
    // ordering message takes precedence over a required message on the
    // check-out field (it cannot collide: required means empty).
    if let (Some(check_in), Some(check_out)) = (
        parse_iso_date(&draft.check_in),
        parse_iso_date(&draft.check_out),
    ) {
        if check_in >= check_out {
            errors.insert(
                BookingField::CheckOut,
                "Check-out date must be after check-in date",
            );
        }
    }

    if draft.guests < 1 {
        errors.insert(BookingField::Guests, "Number of guests must be at least 1");
    }

    errors
}

fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Coarse syntactic email check: some substring must have the shape
/// `<non-ws>+ '@' <non-ws>+ '.' <non-ws>+`. Deliberately not RFC
/// validation; the backend owns the real decision.
fn looks_like_email(raw: &str) -> bool {
    let chars: Vec<char> = raw.chars().collect();
    for at in 0..chars.len() {
        if chars[at] != '@' {
            continue;
        }
        if at == 0 || chars[at - 1].is_whitespace() {
            continue;
        }
        let mut j = at + 1;
        while j < chars.len() && !chars[j].is_whitespace() {
            if chars[j] == '.'
                && j > at + 1
                && chars.get(j + 1).is_some_and(|c| !c.is_whitespace())
            {
                return true;
            }
            j += 1;
        }
    }
    false
}

#[cfg(test)]
#[path = "tests/validation_tests.rs"]
mod tests;
