use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

use crate::errors::ValidationError;

// ============================================================================
// Product Models
// ============================================================================

/// Producto as stored in the `productos` table.
///
/// Only the key is guaranteed; a NULL in any other column is passed through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Producto {
    pub id_productos: i32,
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
    pub precio: Option<Decimal>,
    pub categoria: Option<String>,
}

/// Producto with its ingredient list embedded.
///
/// `ingredientes` is always an array; a product without linked ingredients
/// serializes as `"ingredientes": []`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ProductoDetalle {
    pub id_productos: i32,
    pub producto: Option<String>,
    pub descripcion: Option<String>,
    pub precio: Option<Decimal>,
    pub categoria: Option<String>,
    #[sqlx(json)]
    #[serde(default)]
    pub ingredientes: Vec<IngredienteDetalle>,
}

/// One entry of a product's ingredient list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredienteDetalle {
    pub ingrediente: Option<String>,
    pub cantidad: Option<serde_json::Number>,
    pub es_extra: Option<bool>,
}

// ============================================================================
// Order Models
// ============================================================================

/// Pedido row. `fecha` is read as a UTC instant and serialized in RFC 3339.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Pedido {
    pub id_pedido: i32,
    pub codigo: Option<String>,
    pub fecha: Option<DateTime<Utc>>,
    pub estado: Option<String>,
}

// ============================================================================
// Customer Models
// ============================================================================

/// Cliente with province, country and language references resolved to names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Cliente {
    pub id_cliente: i32,
    pub nombre: Option<String>,
    pub dni: Option<String>,
    pub telefono: Option<String>,
    pub mail: Option<String>,
    pub id_puntos: Option<i32>,
    pub provincia: Option<String>,
    pub pais: Option<String>,
    pub idioma: Option<String>,
}

/// Row returned by a Cliente insert. The password column is never read back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ClienteCreado {
    pub id_cliente: i32,
    pub nombre: String,
    pub dni: String,
    pub telefono: Option<String>,
    pub mail: String,
    pub id_provincia: Option<i32>,
    pub id_puntos: Option<i32>,
    pub id_idioma: Option<i32>,
}

/// Payload for creating a Cliente.
///
/// `dni` and `telefono` accept a string or a number; references accept an
/// integer or a numeric string.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NuevoCliente {
    pub nombre: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub dni: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub telefono: Option<String>,
    pub mail: Option<String>,
    #[serde(default, deserialize_with = "reference_id")]
    pub id_provincia: Option<i32>,
    #[serde(default, deserialize_with = "reference_id")]
    pub id_puntos: Option<i32>,
    #[serde(default, deserialize_with = "reference_id")]
    pub id_idioma: Option<i32>,
    #[serde(rename = "contraseña")]
    pub password: Option<String>,
}

impl NuevoCliente {
    /// Name, national id and email must be present and not blank
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing: Vec<&'static str> = [
            ("nombre", &self.nombre),
            ("dni", &self.dni),
            ("mail", &self.mail),
        ]
        .into_iter()
        .filter(|(_, value)| is_blank(value.as_deref()))
        .map(|(field, _)| field)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingFields(missing))
        }
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<TextOrNumber>::deserialize(deserializer)?.map(|value| match value {
            TextOrNumber::Text(text) => text,
            TextOrNumber::Number(number) => number.to_string(),
        }),
    )
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdOrText {
    Id(i64),
    Text(String),
}

/// Integer reference, also accepted as a numeric string. A blank string is absent.
fn reference_id<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let id = match Option::<IdOrText>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(IdOrText::Id(id)) => id,
        Some(IdOrText::Text(text)) if text.trim().is_empty() => return Ok(None),
        Some(IdOrText::Text(text)) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| de::Error::custom(format!("invalid reference id {text:?}")))?,
    };

    i32::try_from(id)
        .map(Some)
        .map_err(|_| de::Error::custom(format!("reference id {id} out of range")))
}

// ============================================================================
// Employee Models
// ============================================================================

/// Empleado row. Role columns vary between deployments and are carried as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Empleado {
    pub id_empleado: i32,
    pub nombre: Option<String>,
    #[sqlx(json)]
    #[serde(flatten)]
    pub detalle: serde_json::Map<String, serde_json::Value>,
}

// ============================================================================
// Payment Models
// ============================================================================

/// Pago joined to its payment method and order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct PagoDetalle {
    pub id_pago: i32,
    pub monto: Option<Decimal>,
    pub metodo_pago: Option<String>,
    pub codigo_pedido: Option<String>,
}

/// Pago as stored in the `pago` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Pago {
    pub id_pago: i32,
    pub monto: Decimal,
    pub id_metodo_pago: i32,
    pub id_pedido: i32,
}

/// Payload for creating a Pago
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NuevoPago {
    pub monto: Option<Decimal>,
    #[serde(default, deserialize_with = "reference_id")]
    pub id_metodo_pago: Option<i32>,
    #[serde(default, deserialize_with = "reference_id")]
    pub id_pedido: Option<i32>,
}

impl NuevoPago {
    /// All three fields must be present and non-zero
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut missing = Vec::new();
        if self.monto.map_or(true, |m| m.is_zero()) {
            missing.push("monto");
        }
        if self.id_metodo_pago.map_or(true, |id| id == 0) {
            missing.push("id_metodo_pago");
        }
        if self.id_pedido.map_or(true, |id| id == 0) {
            missing.push("id_pedido");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingFields(missing))
        }
    }
}

// ============================================================================
// Diagnostics
// ============================================================================

/// Result of a backend round trip used for liveness reporting
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthStatus {
    pub connected: bool,
    pub server_time: Option<DateTime<Utc>>,
}

impl HealthStatus {
    pub fn up(server_time: DateTime<Utc>) -> Self {
        Self {
            connected: true,
            server_time: Some(server_time),
        }
    }

    pub fn down() -> Self {
        Self {
            connected: false,
            server_time: None,
        }
    }
}
