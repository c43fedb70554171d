use crate::i18n::{t, Text};

pub struct FaqEntry {
    pub id: &'static str,
    pub question: Text,
    pub answer: Text,
}

pub static FAQ: [FaqEntry; 6] = [
    FaqEntry {
        id: "quote-time",
        question: t("Wie schnell erhalte ich ein Angebot?", "How quickly will I receive a quote?"),
        answer: t(
            "Anfragen, die werktags bis 15 Uhr eingehen, beantworten wir in der Regel am selben Tag. Bei Sonderfahrten rufen wir Sie direkt an.",
            "Requests received on working days before 3 pm are usually answered the same day. For dedicated runs we call you directly.",
        ),
    },
    FaqEntry {
        id: "minimum-size",
        question: t("Gibt es eine Mindestmenge?", "Is there a minimum shipment size?"),
        answer: t(
            "Nein. Wir transportieren ab einer Palette. Für Paketsendungen arbeiten wir mit Partnern zusammen.",
            "No. We carry shipments from a single pallet. For parcels we work with partners.",
        ),
    },
    FaqEntry {
        id: "tracking",
        question: t("Kann ich meine Sendung verfolgen?", "Can I track my shipment?"),
        answer: t(
            "Ja. Sie erhalten eine Sendungsnummer und können den Status jederzeit online abrufen oder sich per SMS benachrichtigen lassen.",
            "Yes. You receive a tracking number and can check the status online at any time or get notified by SMS.",
        ),
    },
    FaqEntry {
        id: "insurance",
        question: t("Wie ist meine Ware versichert?", "How are my goods insured?"),
        answer: t(
            "Wir haften nach ADSp bzw. CMR. Eine zusätzliche Warentransportversicherung bieten wir auf Wunsch zum Warenwert an.",
            "We are liable under ADSp or CMR. Additional cargo insurance at the value of the goods is available on request.",
        ),
    },
    FaqEntry {
        id: "customs",
        question: t("Übernehmen Sie die Verzollung?", "Do you handle customs clearance?"),
        answer: t(
            "Ja, für Sendungen in die Schweiz, nach Großbritannien und Norwegen erledigen wir Export- und Importverzollung.",
            "Yes, for shipments to Switzerland, the UK and Norway we handle export and import clearance.",
        ),
    },
    FaqEntry {
        id: "recurring",
        question: t("Bieten Sie Rahmenverträge an?", "Do you offer framework contracts?"),
        answer: t(
            "Für regelmäßige Transporte vereinbaren wir feste Konditionen. Kreuzen Sie im Formular einfach „regelmäßiger Transport“ an.",
            "For recurring shipments we agree fixed rates. Simply tick \"recurring shipment\" in the form.",
        ),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn ids_are_unique_and_answers_translated() {
        let mut ids: Vec<_> = FAQ.iter().map(|e| e.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), FAQ.len());
        for entry in &FAQ {
            assert!(!entry.answer.get(Language::De).is_empty());
            assert!(!entry.answer.get(Language::En).is_empty());
        }
    }
}
