// Cost classes used for classification, and which of them count as energy.

/// Italian cost classes found in the notes to financial statements.
pub const COST_CLASSES: &[&str] = &[
    "commissioni",
    "ammortamenti",
    "prestazione servizi",
    "energia elettrica",
    "compenso dipendenti",
    "assicurazioni",
    "imposte",
    "telecomunicazioni",
    "logistica",
    "carburanti e/o combustibili",
    "affitto e/o noleggio",
];

/// The cost classes whose amounts are summed into energy costs.
pub const ENERGY_CLASSES: &[&str] = &["energia elettrica", "carburanti e/o combustibili"];

pub fn cost_classes() -> Vec<String> {
    COST_CLASSES.iter().map(|s| s.to_string()).collect()
}

pub fn energy_classes() -> Vec<String> {
    ENERGY_CLASSES.iter().map(|s| s.to_string()).collect()
}

/// Stems this short only match whole words.
pub const WHOLE_WORD_MAX_LEN: usize = 3;

/// Keyword stems that point at a cost class, Italian and English.
/// A single-word stem matches any word of the description starting with it,
/// except stems of [`WHOLE_WORD_MAX_LEN`] characters or fewer, which must
/// equal a whole word ("gas" matches "Gas" but not "Gastronomia"). A
/// multi-word stem matches as a substring.
pub fn keywords_for(label: &str) -> &'static [&'static str] {
    match label {
        "commissioni" => &["commission", "bancari", "bank fee"],
        "ammortamenti" => &["ammortament", "depreciation", "amortization", "amortisation"],
        "prestazione servizi" => &[
            "servizi",
            "prestazion",
            "consulen",
            "consulting",
            "legal",
            "accounting",
            "marketing",
            "support",
            "maintenance",
            "manutenzion",
            "services",
        ],
        "energia elettrica" => &[
            "energia",
            "elettric",
            "electric",
            "energy",
            "power",
            "utilities",
            "luce",
        ],
        "compenso dipendenti" => &[
            "dipendent",
            "salari",
            "stipendi",
            "personale",
            "payroll",
            "wages",
            "training",
            "formazione",
        ],
        "assicurazioni" => &["assicura", "insurance", "polizz"],
        "imposte" => &["impost", "tasse", "tax", "taxes", "iva", "tribut"],
        "telecomunicazioni" => &["telefon", "telecom", "internet", "phone", "mobile"],
        "logistica" => &[
            "logistic",
            "trasport",
            "spedizion",
            "shipping",
            "freight",
            "packaging",
            "travel",
            "viaggi",
            "taxi",
        ],
        "carburanti e/o combustibili" => &[
            "carburant",
            "combustibil",
            "gasolio",
            "benzina",
            "metano",
            "riscaldament",
            "fuel",
            "gas",
            "heating",
        ],
        "affitto e/o noleggio" => &["affitt", "noleggi", "locazion", "rent", "lease", "leasing"],
        _ => &[],
    }
}
