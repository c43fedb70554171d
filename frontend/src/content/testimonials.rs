use crate::i18n::{t, Text};

pub struct Testimonial {
    pub quote: Text,
    pub author: &'static str,
    pub role: Text,
    pub company: &'static str,
}

pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: t(
            "Seit sechs Jahren fährt Brandt unsere Tiefkühlware nach Süddeutschland. Keine einzige Reklamation wegen Temperatur.",
            "Brandt has carried our frozen goods to southern Germany for six years. Not a single temperature complaint.",
        ),
        author: "Tom Hansen",
        role: t("Leiter Versand", "Head of shipping"),
        company: "Nordsee Fisch AG",
    },
    Testimonial {
        quote: t(
            "Freitagabend angerufen, Samstagfrüh war das Ersatzteil in Linz. So stellen wir uns einen Partner vor.",
            "Called on Friday evening, the spare part was in Linz on Saturday morning. That is what we expect from a partner.",
        ),
        author: "Petra Vogt",
        role: t("Einkauf", "Purchasing"),
        company: "Vogt Antriebstechnik GmbH",
    },
    Testimonial {
        quote: t(
            "Lager, Kommissionierung und Versand laufen komplett über Brandt. Wir konzentrieren uns auf den Verkauf.",
            "Warehousing, picking and dispatch all run through Brandt. We can focus on sales.",
        ),
        author: "Mehmet Aydın",
        role: t("Geschäftsführer", "Managing director"),
        company: "Küchenwelt Online",
    },
];
