use crate::i18n::{t, Text};

pub struct Industry {
    pub icon: &'static str,
    pub name: Text,
    pub description: Text,
}

pub static INDUSTRIES: [Industry; 6] = [
    Industry {
        icon: "🍎",
        name: t("Lebensmittel", "Food"),
        description: t("Kühlkette und HACCP-konforme Abläufe.", "Cold chain and HACCP-compliant processes."),
    },
    Industry {
        icon: "⚙️",
        name: t("Maschinenbau", "Mechanical engineering"),
        description: t("Schwer- und Überbreitentransporte mit Begleitung.", "Heavy and oversized loads with escort."),
    },
    Industry {
        icon: "🛒",
        name: t("Handel & E-Commerce", "Retail & e-commerce"),
        description: t("Filialbelieferung und Retourenabwicklung.", "Store deliveries and returns handling."),
    },
    Industry {
        icon: "🧪",
        name: t("Chemie", "Chemicals"),
        description: t("ADR-Transporte und gesicherte Lagerung.", "ADR transport and secured storage."),
    },
    Industry {
        icon: "🚗",
        name: t("Automotive", "Automotive"),
        description: t("Just-in-time und Just-in-sequence.", "Just-in-time and just-in-sequence."),
    },
    Industry {
        icon: "🏗️",
        name: t("Baustoffe", "Building materials"),
        description: t("Baustellenbelieferung mit Kran und Mitnahmestapler.", "Site deliveries with crane and truck-mounted forklift."),
    },
];
