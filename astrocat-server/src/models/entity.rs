//! Catalog record types
//!
//! - `EntityPayload`: raw request body, every field optional
//! - `EntityFields`: the four validated, required columns
//! - `Entity`: a stored row including its database-assigned id

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use super::{Label, StellarMass, ValidationError};

/// Request body for create and full-replace update.
///
/// Fields are optional so that a missing field becomes a 400 with a
/// `{message}` body instead of a deserializer rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct EntityPayload {
    pub nombre: Option<String>,
    pub masa_estelar: Option<Value>,
    pub tipo_de_estrella: Option<String>,
    pub origen_galactico: Option<String>,
}

impl EntityPayload {
    /// Validate every required field, reporting the first failure in
    /// column order.
    pub fn validate(&self) -> Result<EntityFields, ValidationError> {
        Ok(EntityFields {
            nombre: Label::new("nombre", self.nombre.as_deref())?,
            masa_estelar: StellarMass::from_json(self.masa_estelar.as_ref())?,
            tipo_de_estrella: Label::new("tipo_de_estrella", self.tipo_de_estrella.as_deref())?,
            origen_galactico: Label::new("origen_galactico", self.origen_galactico.as_deref())?,
        })
    }
}

/// Validated column values shared by create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityFields {
    pub nombre: Label,
    pub masa_estelar: StellarMass,
    pub tipo_de_estrella: Label,
    pub origen_galactico: Label,
}

/// Stored record as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Entity {
    pub id: i64,
    pub nombre: String,
    pub masa_estelar: f64,
    pub tipo_de_estrella: String,
    pub origen_galactico: String,
}

impl Entity {
    pub fn from_fields(id: i64, fields: &EntityFields) -> Self {
        Self {
            id,
            nombre: fields.nombre.as_str().to_owned(),
            masa_estelar: fields.masa_estelar.value(),
            tipo_de_estrella: fields.tipo_de_estrella.as_str().to_owned(),
            origen_galactico: fields.origen_galactico.as_str().to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sirius() -> EntityPayload {
        serde_json::from_value(json!({
            "nombre": "Sirius",
            "masa_estelar": 2.02,
            "tipo_de_estrella": "A1V",
            "origen_galactico": "Via Lactea"
        }))
        .unwrap()
    }

    #[test]
    fn valid_payload() {
        let fields = sirius().validate().unwrap();
        assert_eq!(fields.nombre.as_str(), "Sirius");
        assert_eq!(fields.masa_estelar.value(), 2.02);
    }

    #[test]
    fn reports_first_missing_field() {
        let payload = EntityPayload {
            nombre: None,
            tipo_de_estrella: None,
            ..sirius()
        };
        let err = payload.validate().unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "nombre" });
    }

    #[test]
    fn each_field_is_required() {
        let cases = [
            ("nombre", EntityPayload { nombre: None, ..sirius() }),
            ("masa_estelar", EntityPayload { masa_estelar: None, ..sirius() }),
            ("tipo_de_estrella", EntityPayload { tipo_de_estrella: None, ..sirius() }),
            ("origen_galactico", EntityPayload { origen_galactico: None, ..sirius() }),
        ];

        for (field, payload) in cases {
            let err = payload.validate().unwrap_err();
            assert_eq!(err.field(), field);
        }
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let payload: EntityPayload = serde_json::from_value(json!({
            "id": 99,
            "nombre": "Vega",
            "masa_estelar": "2.1",
            "tipo_de_estrella": "A0V",
            "origen_galactico": "Via Lactea",
            "color": "blue"
        }))
        .unwrap();
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn entity_echoes_validated_fields() {
        let fields = sirius().validate().unwrap();
        let entity = Entity::from_fields(7, &fields);
        assert_eq!(
            serde_json::to_value(&entity).unwrap(),
            json!({
                "id": 7,
                "nombre": "Sirius",
                "masa_estelar": 2.02,
                "tipo_de_estrella": "A1V",
                "origen_galactico": "Via Lactea"
            })
        );
    }
}
