//! The two catalog tables exposed by the API

/// Which catalog table a request targets.
///
/// Stars and galaxies share a schema but live in independent tables; no
/// relationship between them is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Star,
    Galaxy,
}

impl EntityKind {
    pub const ALL: [EntityKind; 2] = [EntityKind::Star, EntityKind::Galaxy];

    /// SQL table name.
    pub fn table(self) -> &'static str {
        match self {
            Self::Star => "Estrellas",
            Self::Galaxy => "Galaxias",
        }
    }

    /// Route segment, also used as the plural noun in messages.
    pub fn segment(self) -> &'static str {
        match self {
            Self::Star => "estrellas",
            Self::Galaxy => "galaxias",
        }
    }

    /// Lowercase singular noun ("estrella").
    pub fn noun(self) -> &'static str {
        match self {
            Self::Star => "estrella",
            Self::Galaxy => "galaxia",
        }
    }

    /// Capitalized singular noun ("Estrella").
    pub fn label(self) -> &'static str {
        match self {
            Self::Star => "Estrella",
            Self::Galaxy => "Galaxia",
        }
    }

    pub fn not_found_message(self) -> String {
        format!("{} no encontrada", self.label())
    }

    pub fn updated_message(self) -> String {
        format!("{} actualizada", self.label())
    }

    pub fn deleted_message(self) -> String {
        format!("{} eliminada", self.label())
    }
}
