use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a day looks the way it does. Drives the balance policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Reason {
    #[default]
    Normal,
    Absence,
    CompensationUsed,
    Vacation,
    MedicalLeave,
    OptionalHoliday,
    Other,
}

impl Reason {
    pub const ALL: [Reason; 7] = [
        Reason::Normal,
        Reason::Absence,
        Reason::CompensationUsed,
        Reason::Vacation,
        Reason::MedicalLeave,
        Reason::OptionalHoliday,
        Reason::Other,
    ];

    /// Convert enum → table string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Reason::Normal => "normal",
            Reason::Absence => "absence",
            Reason::CompensationUsed => "compensation_used",
            Reason::Vacation => "vacation",
            Reason::MedicalLeave => "medical_leave",
            Reason::OptionalHoliday => "optional_holiday",
            Reason::Other => "other",
        }
    }

    /// Convert table string → enum.
    ///
    /// Rows written by older front-ends used Portuguese labels
    /// ("Falta", "Ferias", "Atestado médico", ...); they decode to the same
    /// variants.
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s.trim() {
            "normal" | "Normal" => Some(Reason::Normal),
            "absence" | "Falta" => Some(Reason::Absence),
            "compensation_used" | "Compensação de horas" => Some(Reason::CompensationUsed),
            "vacation" | "Ferias" | "Férias" => Some(Reason::Vacation),
            "medical_leave" | "Atestado" | "Atestado médico" => Some(Reason::MedicalLeave),
            "optional_holiday" | "Ponto facultativo" => Some(Reason::OptionalHoliday),
            "other" | "Outro" => Some(Reason::Other),
            _ => None,
        }
    }

    /// Helper: convert input from CLI (case-insensitive, `-` or `_`, short aliases)
    pub fn from_code(code: &str) -> Option<Self> {
        let normalized = code.trim().to_lowercase().replace('-', "_");
        match normalized.as_str() {
            "n" | "normal" => Some(Reason::Normal),
            "a" | "absence" => Some(Reason::Absence),
            "c" | "comp" | "compensation" | "compensation_used" => {
                Some(Reason::CompensationUsed)
            }
            "v" | "vacation" => Some(Reason::Vacation),
            "m" | "medical" | "medical_leave" => Some(Reason::MedicalLeave),
            "o" | "optional" | "optional_holiday" => Some(Reason::OptionalHoliday),
            "x" | "other" => Some(Reason::Other),
            _ => Reason::from_db_str(code),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Reason::Normal => "Normal",
            Reason::Absence => "Absence",
            Reason::CompensationUsed => "Compensation",
            Reason::Vacation => "Vacation",
            Reason::MedicalLeave => "Medical leave",
            Reason::OptionalHoliday => "Optional holiday",
            Reason::Other => "Other",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
