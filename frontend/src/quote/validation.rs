use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::i18n::{t, Language};
use crate::quote::form::{FormStep, QuoteField, QuoteFormData};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[0-9 ()/-]{6,20}$").unwrap());
static POSTAL_CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{4,6}$").unwrap());
static DATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());

pub const NAME_LENGTH: (usize, usize) = (2, 100);
pub const ADDRESS_LENGTH: (usize, usize) = (5, 200);
pub const GOODS_LENGTH: (usize, usize) = (3, 500);
pub const MAX_REQUIREMENTS_LENGTH: usize = 1000;
pub const WEIGHT_RANGE_KG: (f64, f64) = (1.0, 50_000.0);
pub const DIMENSION_RANGE_CM: (f64, f64) = (1.0, 1000.0);
/// A standard 13.6 m trailer holds 33 euro pallets.
pub const PALLET_RANGE: (u32, u32) = (1, 33);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldError {
    Required,
    TooShort(usize),
    TooLong(usize),
    InvalidEmail,
    InvalidPhone,
    InvalidPostalCode,
    InvalidNumber,
    OutOfRange { min: f64, max: f64 },
    NotWholeNumber,
    InvalidDate,
    ConsentRequired,
    SameAsPickup,
}

impl FieldError {
    pub fn message(&self, lang: Language) -> String {
        match *self {
            FieldError::Required => t("Dieses Feld ist erforderlich.", "This field is required.")
                .get(lang)
                .to_string(),
            FieldError::TooShort(min) => match lang {
                Language::De => format!("Bitte mindestens {} Zeichen eingeben.", min),
                Language::En => format!("Please enter at least {} characters.", min),
            },
            FieldError::TooLong(max) => match lang {
                Language::De => format!("Bitte höchstens {} Zeichen eingeben.", max),
                Language::En => format!("Please enter no more than {} characters.", max),
            },
            FieldError::InvalidEmail => t(
                "Bitte eine gültige E-Mail-Adresse eingeben.",
                "Please enter a valid email address.",
            )
            .get(lang)
            .to_string(),
            FieldError::InvalidPhone => t(
                "Bitte eine gültige Telefonnummer eingeben.",
                "Please enter a valid phone number.",
            )
            .get(lang)
            .to_string(),
            FieldError::InvalidPostalCode => t(
                "Die Postleitzahl muss aus 4 bis 6 Ziffern bestehen.",
                "The postal code must consist of 4 to 6 digits.",
            )
            .get(lang)
            .to_string(),
            FieldError::InvalidNumber => t("Bitte eine Zahl eingeben.", "Please enter a number.")
                .get(lang)
                .to_string(),
            FieldError::OutOfRange { min, max } => match lang {
                Language::De => format!("Bitte einen Wert zwischen {} und {} eingeben.", min, max),
                Language::En => format!("Please enter a value between {} and {}.", min, max),
            },
            FieldError::NotWholeNumber => t("Bitte eine ganze Zahl eingeben.", "Please enter a whole number.")
                .get(lang)
                .to_string(),
            FieldError::InvalidDate => t("Bitte ein gültiges Datum wählen.", "Please choose a valid date.")
                .get(lang)
                .to_string(),
            FieldError::ConsentRequired => t(
                "Bitte stimmen Sie der Datenschutzerklärung zu.",
                "Please accept the privacy policy.",
            )
            .get(lang)
            .to_string(),
            FieldError::SameAsPickup => t(
                "Abhol- und Lieferort müssen sich unterscheiden.",
                "Pickup and delivery location must differ.",
            )
            .get(lang)
            .to_string(),
        }
    }
}

/// Error per field for one validation pass. Rebuilt from scratch each time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormValidationErrors {
    errors: BTreeMap<QuoteField, FieldError>,
}

impl FormValidationErrors {
    pub fn get(&self, field: QuoteField) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// First invalid field in form order.
    pub fn first_field(&self) -> Option<QuoteField> {
        self.errors.keys().next().copied()
    }

    /// Replaces the entry for one field, used by blur validation.
    pub fn set(&mut self, field: QuoteField, error: Option<FieldError>) {
        match error {
            Some(error) => {
                self.errors.insert(field, error);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    /// Entries in form order.
    pub fn iter(&self) -> impl Iterator<Item = (QuoteField, &FieldError)> {
        self.errors.iter().map(|(field, error)| (*field, error))
    }

    fn collect(fields: impl Iterator<Item = QuoteField>, data: &QuoteFormData) -> Self {
        let errors = fields
            .filter_map(|field| validate_field(field, data).map(|error| (field, error)))
            .collect();
        Self { errors }
    }
}

pub fn validate(data: &QuoteFormData) -> FormValidationErrors {
    FormValidationErrors::collect(QuoteField::ALL.into_iter(), data)
}

pub fn validate_step(step: FormStep, data: &QuoteFormData) -> FormValidationErrors {
    FormValidationErrors::collect(step.fields(), data)
}

pub fn validate_field(field: QuoteField, data: &QuoteFormData) -> Option<FieldError> {
    use QuoteField::*;
    let value = data.text_of(field).trim();
    match field {
        CompanyName | ContactPerson | PickupCity | DeliveryCity => length(value, NAME_LENGTH),
        PickupAddress => length(value, ADDRESS_LENGTH),
        DeliveryAddress => length(value, ADDRESS_LENGTH).or_else(|| same_location(data)),
        GoodsDescription => length(value, GOODS_LENGTH),
        Email => pattern(value, &EMAIL_RE, FieldError::InvalidEmail),
        Phone => pattern(value, &PHONE_RE, FieldError::InvalidPhone),
        PickupPostalCode | DeliveryPostalCode => pattern(value, &POSTAL_CODE_RE, FieldError::InvalidPostalCode),
        WeightKg => {
            if value.is_empty() {
                Some(FieldError::Required)
            } else {
                number_in_range(value, WEIGHT_RANGE_KG)
            }
        }
        LengthCm | WidthCm | HeightCm => optional(value, |v| number_in_range(v, DIMENSION_RANGE_CM)),
        Pallets => optional(value, pallet_count),
        QuoteField::Timeframe => data.timeframe.is_none().then_some(FieldError::Required),
        PickupDate => optional(value, date),
        Requirements => (value.chars().count() > MAX_REQUIREMENTS_LENGTH)
            .then_some(FieldError::TooLong(MAX_REQUIREMENTS_LENGTH)),
        PrivacyAccepted => (!data.privacy_accepted).then_some(FieldError::ConsentRequired),
    }
}

/// Parses a user-typed number, accepting a decimal comma.
pub fn parse_number(value: &str) -> Option<f64> {
    let normalized = value.trim().replace(',', ".");
    normalized.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn length(value: &str, (min, max): (usize, usize)) -> Option<FieldError> {
    let count = value.chars().count();
    if count == 0 {
        Some(FieldError::Required)
    } else if count < min {
        Some(FieldError::TooShort(min))
    } else if count > max {
        Some(FieldError::TooLong(max))
    } else {
        None
    }
}

fn pattern(value: &str, re: &Regex, error: FieldError) -> Option<FieldError> {
    if value.is_empty() {
        Some(FieldError::Required)
    } else if !re.is_match(value) {
        Some(error)
    } else {
        None
    }
}

fn optional(value: &str, rule: impl Fn(&str) -> Option<FieldError>) -> Option<FieldError> {
    if value.is_empty() {
        None
    } else {
        rule(value)
    }
}

fn number_in_range(value: &str, (min, max): (f64, f64)) -> Option<FieldError> {
    match parse_number(value) {
        None => Some(FieldError::InvalidNumber),
        Some(n) if n < min || n > max => Some(FieldError::OutOfRange { min, max }),
        Some(_) => None,
    }
}

fn pallet_count(value: &str) -> Option<FieldError> {
    let (min, max) = PALLET_RANGE;
    let Some(n) = parse_number(value) else {
        return Some(FieldError::InvalidNumber);
    };
    if n.fract() != 0.0 {
        return Some(FieldError::NotWholeNumber);
    }
    if n < f64::from(min) || n > f64::from(max) {
        return Some(FieldError::OutOfRange {
            min: f64::from(min),
            max: f64::from(max),
        });
    }
    None
}

fn date(value: &str) -> Option<FieldError> {
    if !DATE_RE.is_match(value) || chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
        Some(FieldError::InvalidDate)
    } else {
        None
    }
}

fn normalize_location(part: &str) -> String {
    part.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn same_location(data: &QuoteFormData) -> Option<FieldError> {
    let pickup = [&data.pickup_address, &data.pickup_postal_code, &data.pickup_city];
    let delivery = [&data.delivery_address, &data.delivery_postal_code, &data.delivery_city];
    if pickup.iter().chain(delivery.iter()).any(|part| part.trim().is_empty()) {
        return None;
    }
    let identical = pickup
        .iter()
        .zip(delivery.iter())
        .all(|(a, b)| normalize_location(a) == normalize_location(b));
    identical.then_some(FieldError::SameAsPickup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::form::Timeframe;

    fn complete_form() -> QuoteFormData {
        QuoteFormData {
            company_name: "Nordsee Fisch AG".into(),
            contact_person: "Tom Hansen".into(),
            email: "tom.hansen@nordsee-fisch.de".into(),
            phone: "+49 471 123456".into(),
            pickup_address: "Am Fischkai 3".into(),
            pickup_postal_code: "27572".into(),
            pickup_city: "Bremerhaven".into(),
            delivery_address: "Invalidenstraße 117".into(),
            delivery_postal_code: "10115".into(),
            delivery_city: "Berlin".into(),
            goods_description: "Tiefkühlware, 12 Paletten".into(),
            length_cm: "120".into(),
            width_cm: "80".into(),
            height_cm: "160".into(),
            weight_kg: "8400".into(),
            pallets: "12".into(),
            timeframe: Some(Timeframe::NextWeek),
            pickup_date: "2026-11-02".into(),
            recurring: true,
            requirements: "Kühlkette -18 °C".into(),
            privacy_accepted: true,
        }
    }

    #[test]
    fn complete_form_has_no_errors() {
        let errors = validate(&complete_form());
        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    }

    #[test]
    fn empty_required_fields_are_reported() {
        let errors = validate(&QuoteFormData::default());
        for field in QuoteField::ALL {
            if field == QuoteField::PrivacyAccepted {
                assert_eq!(errors.get(field), Some(&FieldError::ConsentRequired));
            } else if field.is_required() {
                assert_eq!(errors.get(field), Some(&FieldError::Required), "{:?}", field);
            } else {
                assert_eq!(errors.get(field), None, "{:?}", field);
            }
        }
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let mut data = complete_form();
        data.company_name = "   ".into();
        assert_eq!(validate_field(QuoteField::CompanyName, &data), Some(FieldError::Required));
    }

    #[test]
    fn name_length_bounds() {
        let mut data = complete_form();
        data.contact_person = "T".into();
        assert_eq!(validate_field(QuoteField::ContactPerson, &data), Some(FieldError::TooShort(2)));
        data.contact_person = "x".repeat(101);
        assert_eq!(validate_field(QuoteField::ContactPerson, &data), Some(FieldError::TooLong(100)));
        data.contact_person = "Jo".into();
        assert_eq!(validate_field(QuoteField::ContactPerson, &data), None);
    }

    #[test]
    fn email_and_phone_formats() {
        let mut data = complete_form();
        data.email = "tom@localhost".into();
        assert_eq!(validate_field(QuoteField::Email, &data), Some(FieldError::InvalidEmail));
        data.email = "tom @example.de".into();
        assert_eq!(validate_field(QuoteField::Email, &data), Some(FieldError::InvalidEmail));

        data.phone = "call me".into();
        assert_eq!(validate_field(QuoteField::Phone, &data), Some(FieldError::InvalidPhone));
        data.phone = "0421/555-310".into();
        assert_eq!(validate_field(QuoteField::Phone, &data), None);
    }

    #[test]
    fn postal_codes_need_four_to_six_digits() {
        let mut data = complete_form();
        for good in ["10115", "1010", "123456"] {
            data.pickup_postal_code = good.into();
            assert_eq!(validate_field(QuoteField::PickupPostalCode, &data), None, "{}", good);
        }
        for bad in ["AB123", "123", "1234567", "10 115", "١٠١١٥", "１０１１５"] {
            data.pickup_postal_code = bad.into();
            assert_eq!(
                validate_field(QuoteField::PickupPostalCode, &data),
                Some(FieldError::InvalidPostalCode),
                "{}",
                bad
            );
        }
    }

    #[test]
    fn weight_range_is_enforced() {
        let mut data = complete_form();
        for inside in ["1", "50000", "12,5", "49999.9"] {
            data.weight_kg = inside.into();
            assert_eq!(validate_field(QuoteField::WeightKg, &data), None, "{}", inside);
        }
        for outside in ["0", "0.5", "50001", "-3"] {
            data.weight_kg = outside.into();
            assert!(
                matches!(validate_field(QuoteField::WeightKg, &data), Some(FieldError::OutOfRange { .. })),
                "{}",
                outside
            );
        }
        data.weight_kg = "heavy".into();
        assert_eq!(validate_field(QuoteField::WeightKg, &data), Some(FieldError::InvalidNumber));
    }

    #[test]
    fn dimensions_are_optional_but_bounded() {
        let mut data = complete_form();
        data.length_cm = String::new();
        assert_eq!(validate_field(QuoteField::LengthCm, &data), None);
        data.width_cm = "1000".into();
        assert_eq!(validate_field(QuoteField::WidthCm, &data), None);
        data.height_cm = "1001".into();
        assert_eq!(
            validate_field(QuoteField::HeightCm, &data),
            Some(FieldError::OutOfRange { min: 1.0, max: 1000.0 })
        );
        data.height_cm = "0".into();
        assert!(validate_field(QuoteField::HeightCm, &data).is_some());
    }

    #[test]
    fn pallets_must_be_whole_and_fit_a_trailer() {
        let mut data = complete_form();
        data.pallets = "2.5".into();
        assert_eq!(validate_field(QuoteField::Pallets, &data), Some(FieldError::NotWholeNumber));
        data.pallets = "34".into();
        assert!(validate_field(QuoteField::Pallets, &data).is_some());
        data.pallets = "33".into();
        assert_eq!(validate_field(QuoteField::Pallets, &data), None);
        data.pallets = "a few".into();
        assert_eq!(validate_field(QuoteField::Pallets, &data), Some(FieldError::InvalidNumber));
    }

    #[test]
    fn pickup_date_must_be_a_real_date() {
        let mut data = complete_form();
        data.pickup_date = "2026-02-30".into();
        assert_eq!(validate_field(QuoteField::PickupDate, &data), Some(FieldError::InvalidDate));
        data.pickup_date = "02.11.2026".into();
        assert_eq!(validate_field(QuoteField::PickupDate, &data), Some(FieldError::InvalidDate));
        data.pickup_date = "２０２６-１１-０２".into();
        assert_eq!(validate_field(QuoteField::PickupDate, &data), Some(FieldError::InvalidDate));
    }

    #[test]
    fn identical_pickup_and_delivery_is_rejected() {
        let mut data = complete_form();
        data.delivery_address = "  am fischkai   3 ".into();
        data.delivery_postal_code = "27572".into();
        data.delivery_city = "BREMERHAVEN".into();
        assert_eq!(validate_field(QuoteField::DeliveryAddress, &data), Some(FieldError::SameAsPickup));

        data.delivery_postal_code = "27568".into();
        assert_eq!(validate_field(QuoteField::DeliveryAddress, &data), None);
    }

    #[test]
    fn step_validation_only_covers_that_step() {
        let mut data = QuoteFormData::default();
        data.company_name = "Nordsee Fisch AG".into();
        let errors = validate_step(FormStep::Contact, &data);
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().all(|(field, _)| field.step() == FormStep::Contact));
        assert_eq!(errors.first_field(), Some(QuoteField::ContactPerson));
    }

    #[test]
    fn validation_is_pure() {
        let data = complete_form();
        assert_eq!(validate(&data), validate(&data));
    }

    #[test]
    fn set_updates_single_entry() {
        let mut errors = validate(&QuoteFormData::default());
        let before = errors.len();
        errors.set(QuoteField::Email, None);
        assert_eq!(errors.len(), before - 1);
        errors.set(QuoteField::Email, Some(FieldError::InvalidEmail));
        assert_eq!(errors.get(QuoteField::Email), Some(&FieldError::InvalidEmail));
    }

    #[test]
    fn messages_exist_in_both_languages() {
        let error = FieldError::OutOfRange { min: 1.0, max: 1000.0 };
        assert!(error.message(Language::De).contains("1000"));
        assert!(error.message(Language::En).starts_with("Please"));
    }
}
