use crate::i18n::{t, Language, Text};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Timeframe {
    Express,
    ThisWeek,
    NextWeek,
    Flexible,
}

impl Timeframe {
    pub const ALL: [Timeframe; 4] = [
        Timeframe::Express,
        Timeframe::ThisWeek,
        Timeframe::NextWeek,
        Timeframe::Flexible,
    ];

    pub fn value(self) -> &'static str {
        match self {
            Timeframe::Express => "express",
            Timeframe::ThisWeek => "this-week",
            Timeframe::NextWeek => "next-week",
            Timeframe::Flexible => "flexible",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|option| option.value() == value)
    }

    pub fn label(self, lang: Language) -> &'static str {
        let text: Text = match self {
            Timeframe::Express => t("Express (innerhalb 24 Std.)", "Express (within 24 hours)"),
            Timeframe::ThisWeek => t("Diese Woche", "This week"),
            Timeframe::NextWeek => t("Nächste Woche", "Next week"),
            Timeframe::Flexible => t("Flexibel", "Flexible"),
        };
        text.get(lang)
    }
}

/// Everything a prospect enters in the quote form. Numbers stay as typed until validation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuoteFormData {
    pub company_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub pickup_address: String,
    pub pickup_postal_code: String,
    pub pickup_city: String,
    pub delivery_address: String,
    pub delivery_postal_code: String,
    pub delivery_city: String,
    pub goods_description: String,
    pub length_cm: String,
    pub width_cm: String,
    pub height_cm: String,
    pub weight_kg: String,
    pub pallets: String,
    pub timeframe: Option<Timeframe>,
    pub pickup_date: String,
    pub recurring: bool,
    pub requirements: String,
    pub privacy_accepted: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QuoteField {
    CompanyName,
    ContactPerson,
    Email,
    Phone,
    PickupAddress,
    PickupPostalCode,
    PickupCity,
    DeliveryAddress,
    DeliveryPostalCode,
    DeliveryCity,
    GoodsDescription,
    LengthCm,
    WidthCm,
    HeightCm,
    WeightKg,
    Pallets,
    Timeframe,
    PickupDate,
    Requirements,
    PrivacyAccepted,
}

impl QuoteField {
    pub const ALL: [QuoteField; 20] = [
        QuoteField::CompanyName,
        QuoteField::ContactPerson,
        QuoteField::Email,
        QuoteField::Phone,
        QuoteField::PickupAddress,
        QuoteField::PickupPostalCode,
        QuoteField::PickupCity,
        QuoteField::DeliveryAddress,
        QuoteField::DeliveryPostalCode,
        QuoteField::DeliveryCity,
        QuoteField::GoodsDescription,
        QuoteField::LengthCm,
        QuoteField::WidthCm,
        QuoteField::HeightCm,
        QuoteField::WeightKg,
        QuoteField::Pallets,
        QuoteField::Timeframe,
        QuoteField::PickupDate,
        QuoteField::Requirements,
        QuoteField::PrivacyAccepted,
    ];

    pub fn step(self) -> FormStep {
        use QuoteField::*;
        match self {
            CompanyName | ContactPerson | Email | Phone => FormStep::Contact,
            PickupAddress | PickupPostalCode | PickupCity | DeliveryAddress
            | DeliveryPostalCode | DeliveryCity => FormStep::Route,
            GoodsDescription | LengthCm | WidthCm | HeightCm | WeightKg | Pallets => FormStep::Cargo,
            QuoteField::Timeframe | PickupDate | Requirements | PrivacyAccepted => FormStep::Schedule,
        }
    }

    /// DOM id of the input, used to focus the first invalid field.
    pub fn input_id(self) -> &'static str {
        use QuoteField::*;
        match self {
            CompanyName => "quote-company-name",
            ContactPerson => "quote-contact-person",
            Email => "quote-email",
            Phone => "quote-phone",
            PickupAddress => "quote-pickup-address",
            PickupPostalCode => "quote-pickup-postal-code",
            PickupCity => "quote-pickup-city",
            DeliveryAddress => "quote-delivery-address",
            DeliveryPostalCode => "quote-delivery-postal-code",
            DeliveryCity => "quote-delivery-city",
            GoodsDescription => "quote-goods-description",
            LengthCm => "quote-length",
            WidthCm => "quote-width",
            HeightCm => "quote-height",
            WeightKg => "quote-weight",
            Pallets => "quote-pallets",
            QuoteField::Timeframe => "quote-timeframe",
            PickupDate => "quote-pickup-date",
            Requirements => "quote-requirements",
            PrivacyAccepted => "quote-privacy",
        }
    }

    pub fn label(self, lang: Language) -> &'static str {
        use QuoteField::*;
        let text = match self {
            CompanyName => t("Firma", "Company"),
            ContactPerson => t("Ansprechpartner", "Contact person"),
            Email => t("E-Mail", "Email"),
            Phone => t("Telefon", "Phone"),
            PickupAddress => t("Abholadresse", "Pickup address"),
            PickupPostalCode => t("PLZ (Abholung)", "Postal code (pickup)"),
            PickupCity => t("Ort (Abholung)", "City (pickup)"),
            DeliveryAddress => t("Lieferadresse", "Delivery address"),
            DeliveryPostalCode => t("PLZ (Lieferung)", "Postal code (delivery)"),
            DeliveryCity => t("Ort (Lieferung)", "City (delivery)"),
            GoodsDescription => t("Beschreibung der Ware", "Description of goods"),
            LengthCm => t("Länge (cm)", "Length (cm)"),
            WidthCm => t("Breite (cm)", "Width (cm)"),
            HeightCm => t("Höhe (cm)", "Height (cm)"),
            WeightKg => t("Gewicht (kg)", "Weight (kg)"),
            Pallets => t("Anzahl Paletten", "Number of pallets"),
            QuoteField::Timeframe => t("Zeitrahmen", "Timeframe"),
            PickupDate => t("Wunschtermin Abholung", "Preferred pickup date"),
            Requirements => t("Besondere Anforderungen", "Special requirements"),
            PrivacyAccepted => t(
                "Ich habe die Datenschutzerklärung gelesen und bin mit der Verarbeitung meiner Angaben einverstanden.",
                "I have read the privacy policy and agree to my details being processed.",
            ),
        };
        text.get(lang)
    }

    pub fn is_required(self) -> bool {
        !matches!(
            self,
            QuoteField::LengthCm
                | QuoteField::WidthCm
                | QuoteField::HeightCm
                | QuoteField::Pallets
                | QuoteField::PickupDate
                | QuoteField::Requirements
        )
    }
}

impl QuoteFormData {
    /// Raw text of a field. Checkbox and select fields render as their stored value.
    pub fn text_of(&self, field: QuoteField) -> &str {
        use QuoteField::*;
        match field {
            CompanyName => &self.company_name,
            ContactPerson => &self.contact_person,
            Email => &self.email,
            Phone => &self.phone,
            PickupAddress => &self.pickup_address,
            PickupPostalCode => &self.pickup_postal_code,
            PickupCity => &self.pickup_city,
            DeliveryAddress => &self.delivery_address,
            DeliveryPostalCode => &self.delivery_postal_code,
            DeliveryCity => &self.delivery_city,
            GoodsDescription => &self.goods_description,
            LengthCm => &self.length_cm,
            WidthCm => &self.width_cm,
            HeightCm => &self.height_cm,
            WeightKg => &self.weight_kg,
            Pallets => &self.pallets,
            QuoteField::Timeframe => self.timeframe.map(|t| t.value()).unwrap_or(""),
            PickupDate => &self.pickup_date,
            Requirements => &self.requirements,
            PrivacyAccepted => {
                if self.privacy_accepted {
                    "true"
                } else {
                    ""
                }
            }
        }
    }

    /// Stores a text input's value. Non-text fields are ignored here.
    pub fn set_text(&mut self, field: QuoteField, value: String) {
        use QuoteField::*;
        let slot = match field {
            CompanyName => &mut self.company_name,
            ContactPerson => &mut self.contact_person,
            Email => &mut self.email,
            Phone => &mut self.phone,
            PickupAddress => &mut self.pickup_address,
            PickupPostalCode => &mut self.pickup_postal_code,
            PickupCity => &mut self.pickup_city,
            DeliveryAddress => &mut self.delivery_address,
            DeliveryPostalCode => &mut self.delivery_postal_code,
            DeliveryCity => &mut self.delivery_city,
            GoodsDescription => &mut self.goods_description,
            LengthCm => &mut self.length_cm,
            WidthCm => &mut self.width_cm,
            HeightCm => &mut self.height_cm,
            WeightKg => &mut self.weight_kg,
            Pallets => &mut self.pallets,
            PickupDate => &mut self.pickup_date,
            Requirements => &mut self.requirements,
            QuoteField::Timeframe => {
                self.timeframe = self::Timeframe::from_value(&value);
                return;
            }
            PrivacyAccepted => return,
        };
        *slot = value;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormStep {
    Contact = 1,
    Route = 2,
    Cargo = 3,
    Schedule = 4,
}

impl FormStep {
    pub const ALL: [FormStep; 4] = [FormStep::Contact, FormStep::Route, FormStep::Cargo, FormStep::Schedule];

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn next(self) -> Option<Self> {
        match self {
            FormStep::Contact => Some(FormStep::Route),
            FormStep::Route => Some(FormStep::Cargo),
            FormStep::Cargo => Some(FormStep::Schedule),
            FormStep::Schedule => None,
        }
    }

    pub fn previous(self) -> Option<Self> {
        match self {
            FormStep::Contact => None,
            FormStep::Route => Some(FormStep::Contact),
            FormStep::Cargo => Some(FormStep::Route),
            FormStep::Schedule => Some(FormStep::Cargo),
        }
    }

    pub fn fields(self) -> impl Iterator<Item = QuoteField> {
        QuoteField::ALL.into_iter().filter(move |field| field.step() == self)
    }

    pub fn title(self, lang: Language) -> &'static str {
        let text = match self {
            FormStep::Contact => t("Kontakt", "Contact"),
            FormStep::Route => t("Strecke", "Route"),
            FormStep::Cargo => t("Sendung", "Shipment"),
            FormStep::Schedule => t("Termin", "Schedule"),
        };
        text.get(lang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_belongs_to_exactly_one_step() {
        let total: usize = FormStep::ALL.iter().map(|step| step.fields().count()).sum();
        assert_eq!(total, QuoteField::ALL.len());
        assert_eq!(FormStep::Contact.fields().count(), 4);
        assert_eq!(FormStep::Route.fields().count(), 6);
    }

    #[test]
    fn steps_walk_forward_and_back() {
        assert_eq!(FormStep::Contact.next(), Some(FormStep::Route));
        assert_eq!(FormStep::Schedule.next(), None);
        assert_eq!(FormStep::Contact.previous(), None);
        assert_eq!(FormStep::Cargo.previous(), Some(FormStep::Route));
        assert_eq!(FormStep::Schedule.number(), 4);
    }

    #[test]
    fn set_text_updates_the_matching_field() {
        let mut data = QuoteFormData::default();
        data.set_text(QuoteField::PickupCity, "Bremen".into());
        data.set_text(QuoteField::Timeframe, "next-week".into());
        data.set_text(QuoteField::PrivacyAccepted, "true".into());
        assert_eq!(data.pickup_city, "Bremen");
        assert_eq!(data.timeframe, Some(Timeframe::NextWeek));
        assert!(!data.privacy_accepted);
        assert_eq!(data.text_of(QuoteField::Timeframe), "next-week");
    }

    #[test]
    fn unknown_timeframe_clears_selection() {
        let mut data = QuoteFormData {
            timeframe: Some(Timeframe::Express),
            ..Default::default()
        };
        data.set_text(QuoteField::Timeframe, "someday".into());
        assert_eq!(data.timeframe, None);
    }

    #[test]
    fn input_ids_are_unique() {
        let mut ids: Vec<_> = QuoteField::ALL.iter().map(|f| f.input_id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), QuoteField::ALL.len());
    }
}
