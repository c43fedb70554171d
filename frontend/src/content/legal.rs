//! Copy for the terms, privacy and imprint pages.

use crate::i18n::{t, Text};

pub struct LegalSection {
    pub heading: Text,
    pub paragraphs: &'static [Text],
}

pub struct LegalDocument {
    pub title: Text,
    pub updated: &'static str,
    pub sections: &'static [LegalSection],
}

pub const TERMS: LegalDocument = LegalDocument {
    title: t("Allgemeine Geschäftsbedingungen", "Terms and conditions"),
    updated: "2026-03-01",
    sections: &[
        LegalSection {
            heading: t("1. Geltungsbereich", "1. Scope"),
            paragraphs: &[t(
                "Diese Bedingungen gelten für alle Verkehrsverträge der Brandt Logistik GmbH. Ergänzend gelten die Allgemeinen Deutschen Spediteurbedingungen (ADSp 2017) in ihrer jeweils aktuellen Fassung.",
                "These terms apply to all transport contracts of Brandt Logistik GmbH. The German Freight Forwarders' Standard Terms and Conditions (ADSp 2017), as amended, apply in addition.",
            )],
        },
        LegalSection {
            heading: t("2. Angebote", "2. Quotes"),
            paragraphs: &[
                t(
                    "Angebote sind freibleibend und gelten 14 Tage. Maßgeblich sind die bei der Anfrage gemachten Angaben zu Gewicht, Maßen und Art der Ware.",
                    "Quotes are subject to change and valid for 14 days. They are based on the weight, dimensions and type of goods stated in the request.",
                ),
                t(
                    "Eine über das Formular dieser Website erstellte Anfrage ist unverbindlich. Ein Vertrag kommt erst mit unserer schriftlichen Auftragsbestätigung zustande.",
                    "A request created with the form on this website is non-binding. A contract is only concluded with our written order confirmation.",
                ),
            ],
        },
        LegalSection {
            heading: t("3. Haftung", "3. Liability"),
            paragraphs: &[t(
                "Die Haftung richtet sich nach den ADSp bzw. bei grenzüberschreitenden Transporten nach der CMR.",
                "Liability is governed by the ADSp or, for cross-border transport, by the CMR.",
            )],
        },
        LegalSection {
            heading: t("4. Zahlung", "4. Payment"),
            paragraphs: &[t(
                "Rechnungen sind innerhalb von 30 Tagen ohne Abzug zahlbar.",
                "Invoices are payable within 30 days without deduction.",
            )],
        },
        LegalSection {
            heading: t("5. Gerichtsstand", "5. Place of jurisdiction"),
            paragraphs: &[t(
                "Gerichtsstand ist Bremen. Es gilt deutsches Recht.",
                "The place of jurisdiction is Bremen. German law applies.",
            )],
        },
    ],
};

pub const PRIVACY: LegalDocument = LegalDocument {
    title: t("Datenschutzerklärung", "Privacy policy"),
    updated: "2026-03-01",
    sections: &[
        LegalSection {
            heading: t("Verantwortlicher", "Controller"),
            paragraphs: &[t(
                "Verantwortlich für die Datenverarbeitung auf dieser Website ist die Brandt Logistik GmbH, Hafenstraße 24, 28197 Bremen.",
                "The controller for data processing on this website is Brandt Logistik GmbH, Hafenstraße 24, 28197 Bremen, Germany.",
            )],
        },
        LegalSection {
            heading: t("Angebotsanfragen", "Quote requests"),
            paragraphs: &[t(
                "Das Anfrageformular sendet keine Daten an unsere Server. Ihre Angaben werden in Ihrem E-Mail-Programm zu einer Nachricht zusammengestellt, die Sie selbst absenden. Wir verarbeiten die E-Mail zur Angebotserstellung (Art. 6 Abs. 1 lit. b DSGVO).",
                "The quote form does not send any data to our servers. Your details are assembled into a message in your email program, which you send yourself. We process the email to prepare a quote (Art. 6(1)(b) GDPR).",
            )],
        },
        LegalSection {
            heading: t("Chat", "Chat"),
            paragraphs: &[t(
                "Nachrichten im Chat werden zusammen mit einer zufälligen Sitzungskennung an einen Automatisierungsdienst übertragen, der die Antwort erzeugt. Bitte geben Sie im Chat keine sensiblen Daten ein.",
                "Chat messages are sent, together with a random session identifier, to an automation service that generates the reply. Please do not enter sensitive data in the chat.",
            )],
        },
        LegalSection {
            heading: t("Lokaler Speicher", "Local storage"),
            paragraphs: &[t(
                "Wir speichern Ihre Sprachauswahl, Ihre Cookie-Einstellungen und die Chat-Sitzungskennung im lokalen Speicher Ihres Browsers. Diese Daten verlassen Ihr Gerät nicht, außer der Sitzungskennung beim Chatten.",
                "We store your language choice, your cookie settings and the chat session identifier in your browser's local storage. This data does not leave your device, except for the session identifier when you chat.",
            )],
        },
        LegalSection {
            heading: t("Ihre Rechte", "Your rights"),
            paragraphs: &[t(
                "Sie haben das Recht auf Auskunft, Berichtigung, Löschung, Einschränkung der Verarbeitung, Datenübertragbarkeit und Widerspruch sowie auf Beschwerde bei einer Aufsichtsbehörde.",
                "You have the right to access, rectification, erasure, restriction of processing, data portability and objection, and to lodge a complaint with a supervisory authority.",
            )],
        },
    ],
};

pub const IMPRINT_TITLE: Text = t("Impressum", "Imprint");
pub const IMPRINT_RESPONSIBLE: Text = t(
    "Verantwortlich für den Inhalt nach § 18 Abs. 2 MStV",
    "Responsible for content under Section 18(2) MStV",
);
pub const IMPRINT_DISPUTE: Text = t(
    "Wir sind nicht bereit oder verpflichtet, an Streitbeilegungsverfahren vor einer Verbraucherschlichtungsstelle teilzunehmen.",
    "We are neither willing nor obliged to take part in dispute resolution proceedings before a consumer arbitration board.",
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn documents_have_translated_sections() {
        for doc in [&TERMS, &PRIVACY] {
            assert!(!doc.sections.is_empty());
            for section in doc.sections {
                assert!(!section.heading.get(Language::En).is_empty());
                assert!(!section.paragraphs.is_empty());
                for paragraph in section.paragraphs {
                    assert!(!paragraph.get(Language::De).is_empty());
                    assert!(!paragraph.get(Language::En).is_empty());
                }
            }
        }
    }
}
