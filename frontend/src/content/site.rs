use crate::i18n::{t, Text};

pub struct NavLink {
    pub anchor: &'static str,
    pub label: Text,
}

pub static NAV_LINKS: [NavLink; 5] = [
    NavLink { anchor: "services", label: t("Leistungen", "Services") },
    NavLink { anchor: "industries", label: t("Branchen", "Industries") },
    NavLink { anchor: "about", label: t("Über uns", "About us") },
    NavLink { anchor: "faq", label: t("FAQ", "FAQ") },
    NavLink { anchor: "quote", label: t("Angebot anfragen", "Request a quote") },
];

pub struct Hero {
    pub eyebrow: Text,
    pub title: Text,
    pub subtitle: Text,
    pub primary_cta: Text,
    pub secondary_cta: Text,
}

pub const HERO: Hero = Hero {
    eyebrow: t("Spedition & Kontraktlogistik seit 1987", "Freight forwarding & contract logistics since 1987"),
    title: t("Ihre Ware. Pünktlich. Europaweit.", "Your goods. On time. Across Europe."),
    subtitle: t(
        "Von der Einzelpalette bis zur Komplettladung: Brandt Logistik bringt Ihre Sendung sicher ans Ziel, mit eigener Flotte und persönlichem Ansprechpartner.",
        "From a single pallet to a full truckload: Brandt Logistik gets your shipment there safely, with our own fleet and a dedicated contact person.",
    ),
    primary_cta: t("Angebot anfordern", "Get a quote"),
    secondary_cta: t("Unsere Leistungen", "Our services"),
};

pub struct Stat {
    pub value: &'static str,
    pub label: Text,
}

pub static STATS: [Stat; 4] = [
    Stat { value: "120+", label: t("eigene Lkw", "own trucks") },
    Stat { value: "28", label: t("Länder", "countries") },
    Stat { value: "98,7 %", label: t("Termintreue", "on-time delivery") },
    Stat { value: "24/7", label: t("Disposition", "dispatch") },
];

pub struct About {
    pub title: Text,
    pub paragraphs: [Text; 2],
    pub values: [Text; 4],
}

pub const ABOUT: About = About {
    title: t("Familienunternehmen mit Weitblick", "A family business with vision"),
    paragraphs: [
        t(
            "Was 1987 mit einem Lkw am Bremer Hafen begann, ist heute ein Logistikpartner für Industrie und Handel in ganz Europa. Wir sind inhabergeführt und entscheiden schnell.",
            "What started in 1987 with one truck at the port of Bremen is today a logistics partner for industry and retail across Europe. We are owner-managed and decide quickly.",
        ),
        t(
            "Unsere Disponenten kennen ihre Kunden beim Namen. Jede Anfrage wird von einem festen Ansprechpartner betreut, vom Angebot bis zur Zustellung.",
            "Our dispatchers know their customers by name. Every request is handled by one dedicated contact, from quote to delivery.",
        ),
    ],
    values: [
        t("Feste Ansprechpartner", "Dedicated contacts"),
        t("Sendungsverfolgung in Echtzeit", "Real-time tracking"),
        t("ISO 9001 zertifiziert", "ISO 9001 certified"),
        t("CO₂-reduzierte Flotte (Euro 6)", "Lower-emission fleet (Euro 6)"),
    ],
};

pub struct SectionHeading {
    pub title: Text,
    pub subtitle: Text,
}

pub const SERVICES_HEADING: SectionHeading = SectionHeading {
    title: t("Unsere Leistungen", "Our services"),
    subtitle: t("Alles aus einer Hand, von der Abholung bis zur Auslieferung.", "Everything from one source, from pickup to delivery."),
};

pub const INDUSTRIES_HEADING: SectionHeading = SectionHeading {
    title: t("Branchen", "Industries"),
    subtitle: t("Erfahrung, die sich auf Ihre Ware versteht.", "Experience that understands your goods."),
};

pub const PARTNERS_HEADING: SectionHeading = SectionHeading {
    title: t("Partner & Zertifikate", "Partners & certificates"),
    subtitle: t("Netzwerke, auf die wir uns verlassen.", "Networks we rely on."),
};

pub const TESTIMONIALS_HEADING: SectionHeading = SectionHeading {
    title: t("Das sagen unsere Kunden", "What our customers say"),
    subtitle: t("Langjährige Partnerschaften statt Einzelaufträge.", "Long-term partnerships instead of one-off jobs."),
};

pub const FAQ_HEADING: SectionHeading = SectionHeading {
    title: t("Häufige Fragen", "Frequently asked questions"),
    subtitle: t("Kurz beantwortet. Für alles Weitere sind wir persönlich da.", "Answered briefly. For everything else we are there in person."),
};

pub const QUOTE_HEADING: SectionHeading = SectionHeading {
    title: t("Unverbindliches Angebot anfordern", "Request a non-binding quote"),
    subtitle: t(
        "In vier kurzen Schritten. Ihr E-Mail-Programm öffnet sich anschließend mit einer vorausgefüllten Anfrage.",
        "In four short steps. Your email program then opens with a pre-filled request.",
    ),
};

pub const FOOTER_TAGLINE: Text = t(
    "Spedition, Lagerung und Kontraktlogistik aus Bremen.",
    "Freight forwarding, warehousing and contract logistics from Bremen.",
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    fn filled(text: &Text) -> bool {
        !text.get(Language::De).trim().is_empty() && !text.get(Language::En).trim().is_empty()
    }

    #[test]
    fn all_copy_is_translated() {
        assert!(NAV_LINKS.iter().all(|l| filled(&l.label) && !l.anchor.is_empty()));
        for text in [HERO.eyebrow, HERO.title, HERO.subtitle, HERO.primary_cta, HERO.secondary_cta] {
            assert!(filled(&text));
        }
        assert!(STATS.iter().all(|s| filled(&s.label)));
        assert!(ABOUT.paragraphs.iter().chain(ABOUT.values.iter()).all(filled));
        for heading in [
            &SERVICES_HEADING,
            &INDUSTRIES_HEADING,
            &PARTNERS_HEADING,
            &TESTIMONIALS_HEADING,
            &FAQ_HEADING,
            &QUOTE_HEADING,
        ] {
            assert!(filled(&heading.title) && filled(&heading.subtitle));
        }
    }
}
