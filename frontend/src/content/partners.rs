use crate::i18n::{t, Text};

pub struct Partner {
    pub name: &'static str,
    pub description: Text,
}

pub static PARTNERS: [Partner; 5] = [
    Partner {
        name: "CargoLine",
        description: t("Stückgutnetzwerk", "General cargo network"),
    },
    Partner {
        name: "DSLV",
        description: t("Bundesverband Spedition und Logistik", "German freight forwarding association"),
    },
    Partner {
        name: "ISO 9001",
        description: t("Qualitätsmanagement", "Quality management"),
    },
    Partner {
        name: "IFS Logistics",
        description: t("Lebensmittelsicherheit", "Food safety"),
    },
    Partner {
        name: "SQAS",
        description: t("Sicherheit in der Chemielogistik", "Safety in chemical logistics"),
    },
];
