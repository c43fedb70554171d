use crate::config;
use crate::i18n::{t, Language};
use crate::quote::form::QuoteFormData;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailtoLink {
    pub url: String,
    /// Soft check over the fields the subject line depends on. The link is built either way.
    pub is_valid: bool,
}

pub fn build_mailto(data: &QuoteFormData, lang: Language) -> MailtoLink {
    build_mailto_to(config::get_quote_recipient(), data, lang)
}

pub fn build_mailto_to(recipient: &str, data: &QuoteFormData, lang: Language) -> MailtoLink {
    let subject = subject(data, lang);
    let body = body(data, lang);
    let url = format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    );
    MailtoLink {
        url,
        is_valid: has_core_fields(data),
    }
}

fn has_core_fields(data: &QuoteFormData) -> bool {
    [
        &data.company_name,
        &data.contact_person,
        &data.email,
        &data.pickup_city,
        &data.delivery_city,
        &data.goods_description,
    ]
    .iter()
    .all(|value| !value.trim().is_empty())
}

fn subject(data: &QuoteFormData, lang: Language) -> String {
    format!(
        "{}: {} - {} ({})",
        t("Angebotsanfrage", "Quote request").get(lang),
        data.pickup_city.trim(),
        data.delivery_city.trim(),
        data.company_name.trim()
    )
}

fn yes_no(value: bool, lang: Language) -> &'static str {
    if value {
        t("Ja", "Yes").get(lang)
    } else {
        t("Nein", "No").get(lang)
    }
}

fn body(data: &QuoteFormData, lang: Language) -> String {
    let timeframe = data.timeframe.map(|tf| tf.label(lang)).unwrap_or("");
    let lines = [
        t("Guten Tag,", "Hello,").get(lang).to_string(),
        String::new(),
        t(
            "hiermit bitten wir um ein Angebot für folgenden Transport:",
            "we kindly request a quote for the following shipment:",
        )
        .get(lang)
        .to_string(),
        String::new(),
        format!("{}: {}", t("Firma", "Company").get(lang), data.company_name.trim()),
        format!("{}: {}", t("Ansprechpartner", "Contact person").get(lang), data.contact_person.trim()),
        format!("{}: {}", t("E-Mail", "Email").get(lang), data.email.trim()),
        format!("{}: {}", t("Telefon", "Phone").get(lang), data.phone.trim()),
        String::new(),
        format!(
            "{}: {}, {} {}",
            t("Abholung", "Pickup").get(lang),
            data.pickup_address.trim(),
            data.pickup_postal_code.trim(),
            data.pickup_city.trim()
        ),
        format!(
            "{}: {}, {} {}",
            t("Lieferung", "Delivery").get(lang),
            data.delivery_address.trim(),
            data.delivery_postal_code.trim(),
            data.delivery_city.trim()
        ),
        String::new(),
        format!("{}: {}", t("Ware", "Goods").get(lang), data.goods_description.trim()),
        format!(
            "{}: {} x {} x {} cm",
            t("Maße (L x B x H)", "Dimensions (L x W x H)").get(lang),
            data.length_cm.trim(),
            data.width_cm.trim(),
            data.height_cm.trim()
        ),
        format!("{}: {} kg", t("Gewicht", "Weight").get(lang), data.weight_kg.trim()),
        format!("{}: {}", t("Paletten", "Pallets").get(lang), data.pallets.trim()),
        String::new(),
        format!("{}: {}", t("Zeitrahmen", "Timeframe").get(lang), timeframe),
        format!("{}: {}", t("Wunschtermin", "Preferred date").get(lang), data.pickup_date.trim()),
        format!(
            "{}: {}",
            t("Regelmäßiger Transport", "Recurring shipment").get(lang),
            yes_no(data.recurring, lang)
        ),
        String::new(),
        format!("{}:", t("Besondere Anforderungen", "Special requirements").get(lang)),
        data.requirements.trim().to_string(),
        String::new(),
        t("Mit freundlichen Grüßen", "Kind regards").get(lang).to_string(),
        data.contact_person.trim().to_string(),
    ];
    // RFC 6068 line breaks
    lines.join("\r\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::form::Timeframe;

    fn sample() -> QuoteFormData {
        QuoteFormData {
            company_name: "Möbelwerk Süd & Co".into(),
            contact_person: "Lena Maier".into(),
            email: "lena@moebelwerk.de".into(),
            phone: "+49 89 4455".into(),
            pickup_address: "Industriestraße 8".into(),
            pickup_postal_code: "80331".into(),
            pickup_city: "München".into(),
            delivery_address: "Kaiserstraße 1".into(),
            delivery_postal_code: "20095".into(),
            delivery_city: "Hamburg".into(),
            goods_description: "Schränke, verpackt".into(),
            weight_kg: "1200".into(),
            timeframe: Some(Timeframe::Express),
            recurring: false,
            privacy_accepted: true,
            ..Default::default()
        }
    }

    #[test]
    fn generation_is_idempotent() {
        let data = sample();
        assert_eq!(build_mailto(&data, Language::De), build_mailto(&data, Language::De));
    }

    #[test]
    fn url_is_percent_encoded() {
        let link = build_mailto_to("anfrage@example.de", &sample(), Language::De);
        assert!(link.url.starts_with("mailto:anfrage@example.de?subject="));
        assert!(link.url.contains("&body="));
        let query = &link.url["mailto:anfrage@example.de?".len()..];
        assert!(!query.contains(' '));
        assert!(!query.contains('\n'));
        assert!(query.contains("M%C3%BCnchen"));
        assert!(query.contains("%26%20Co"));
        assert!(link.is_valid);
    }

    #[test]
    fn body_lines_end_with_crlf() {
        let url = build_mailto_to("a@b.de", &sample(), Language::De).url;
        let body = &url[url.find("&body=").unwrap()..];
        assert!(body.contains("%0D%0A"));
        assert!(!body.replace("%0D%0A", "").contains("%0A"));
    }

    #[test]
    fn subject_and_body_follow_language() {
        let data = sample();
        let de = build_mailto_to("a@b.de", &data, Language::De).url;
        let en = build_mailto_to("a@b.de", &data, Language::En).url;
        assert!(de.contains("Angebotsanfrage"));
        assert!(en.contains("Quote%20request"));
        assert!(en.contains("Recurring%20shipment%3A%20No"));
    }

    #[test]
    fn empty_form_still_builds_but_is_not_valid() {
        let link = build_mailto_to("a@b.de", &QuoteFormData::default(), Language::En);
        assert!(link.url.starts_with("mailto:a@b.de?subject="));
        assert!(!link.is_valid);
    }

    #[test]
    fn validity_uses_only_core_fields() {
        let mut data = sample();
        data.phone.clear();
        data.weight_kg.clear();
        assert!(build_mailto(&data, Language::De).is_valid);
        data.delivery_city = "  ".into();
        assert!(!build_mailto(&data, Language::De).is_valid);
    }
}
