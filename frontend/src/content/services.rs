use crate::i18n::{t, Text};

pub struct Service {
    pub icon: &'static str,
    pub title: Text,
    pub description: Text,
    pub highlights: [Text; 3],
}

pub static SERVICES: [Service; 6] = [
    Service {
        icon: "🚛",
        title: t("Komplett- & Teilladungen", "Full & part loads"),
        description: t(
            "Direktverkehre ohne Umschlag für zeitkritische und empfindliche Güter.",
            "Direct transport without transshipment for time-critical and sensitive goods.",
        ),
        highlights: [
            t("FTL & LTL europaweit", "FTL & LTL across Europe"),
            t("Planen- und Kofferaufbauten", "Curtainsiders and box bodies"),
            t("Fester Fahrer pro Tour", "One driver per tour"),
        ],
    },
    Service {
        icon: "📦",
        title: t("Stückgut", "General cargo"),
        description: t(
            "Palettierte Sendungen im Netzwerk, täglich ab Bremen.",
            "Palletised shipments through our network, daily from Bremen.",
        ),
        highlights: [
            t("24–48 h in Deutschland", "24–48 h within Germany"),
            t("Avisierung inklusive", "Delivery notice included"),
            t("Hebebühne auf Anfrage", "Tail lift on request"),
        ],
    },
    Service {
        icon: "❄️",
        title: t("Temperaturgeführte Transporte", "Temperature-controlled transport"),
        description: t(
            "Kühl- und Tiefkühllogistik mit lückenloser Temperaturdokumentation.",
            "Chilled and frozen logistics with complete temperature records.",
        ),
        highlights: [
            t("-25 °C bis +25 °C", "-25 °C to +25 °C"),
            t("Zwei-Kammer-Auflieger", "Dual-compartment trailers"),
            t("IFS Logistics", "IFS Logistics"),
        ],
    },
    Service {
        icon: "⚠️",
        title: t("Gefahrgut (ADR)", "Dangerous goods (ADR)"),
        description: t(
            "Geschulte Fahrer und ausgestattete Fahrzeuge für Gefahrgut aller gängigen Klassen.",
            "Trained drivers and equipped vehicles for dangerous goods of all common classes.",
        ),
        highlights: [
            t("ADR-Klassen 2–9", "ADR classes 2–9"),
            t("Gefahrgutbeauftragter im Haus", "In-house safety adviser"),
            t("Dokumentenprüfung", "Document checks"),
        ],
    },
    Service {
        icon: "🏭",
        title: t("Lagerung & Kontraktlogistik", "Warehousing & contract logistics"),
        description: t(
            "18.000 Palettenstellplätze mit Kommissionierung, Konfektionierung und Versand.",
            "18,000 pallet spaces with picking, kitting and dispatch.",
        ),
        highlights: [
            t("WMS mit Kundenportal", "WMS with customer portal"),
            t("Cross-Docking", "Cross-docking"),
            t("Zolllager", "Customs warehouse"),
        ],
    },
    Service {
        icon: "⏱️",
        title: t("Express & Sonderfahrten", "Express & dedicated runs"),
        description: t(
            "Wenn es brennt: Direktfahrt mit Sprinter oder Lkw, in der Regel innerhalb von zwei Stunden vorgeladen.",
            "When it's urgent: direct run by van or truck, usually loaded within two hours.",
        ),
        highlights: [
            t("24/7 erreichbar", "Available 24/7"),
            t("Live-Status per SMS", "Live status via SMS"),
            t("Nachtzustellung", "Overnight delivery"),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn every_service_is_translated() {
        for service in &SERVICES {
            for text in std::iter::once(&service.title)
                .chain(std::iter::once(&service.description))
                .chain(service.highlights.iter())
            {
                assert!(!text.get(Language::De).is_empty());
                assert!(!text.get(Language::En).is_empty());
            }
        }
    }
}
