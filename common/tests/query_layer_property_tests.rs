// Property-based tests for the query layer: input validation and row shapes

use common::errors::ValidationError;
use common::models::{NuevoCliente, NuevoPago, ProductoDetalle};
use proptest::prelude::*;
use rust_decimal::Decimal;
use serde_json::json;

fn blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

// Cliente creation requires non-blank name, national id and email.
// For any payload, validation passes exactly when all three are present and
// non-blank, and otherwise names precisely the failing fields in order.
proptest! {
    #[test]
    fn property_cliente_required_fields(
        nombre in prop::option::of("[ a-zA-Z]{0,10}"),
        dni in prop::option::of("[ 0-9]{0,9}"),
        mail in prop::option::of("[ a-z@.]{0,12}"),
        telefono in prop::option::of("[0-9]{6,10}"),
    ) {
        let nuevo = NuevoCliente {
            nombre: nombre.clone(),
            dni: dni.clone(),
            mail: mail.clone(),
            telefono,
            ..Default::default()
        };

        let expected: Vec<&'static str> = [("nombre", &nombre), ("dni", &dni), ("mail", &mail)]
            .into_iter()
            .filter(|(_, v)| blank(v))
            .map(|(f, _)| f)
            .collect();

        match nuevo.validate() {
            Ok(()) => prop_assert!(expected.is_empty()),
            Err(ValidationError::MissingFields(fields)) => prop_assert_eq!(fields, expected),
            Err(other) => prop_assert!(false, "unexpected error {:?}", other),
        }
    }
}

// A national id or phone sent as a JSON number is kept as its decimal text,
// and numeric-string references parse to the same id as integer ones.
proptest! {
    #[test]
    fn property_numeric_scalars_are_accepted(
        dni in 1u64..100_000_000_000,
        telefono in 100_000u64..10_000_000_000,
        id_provincia in 1i32..10_000,
        as_text in any::<bool>(),
    ) {
        let reference = if as_text { json!(id_provincia.to_string()) } else { json!(id_provincia) };
        let nuevo: NuevoCliente = serde_json::from_value(json!({
            "nombre": "Ana",
            "dni": dni,
            "telefono": telefono,
            "mail": "a@b.c",
            "id_provincia": reference,
        }))
        .unwrap();

        prop_assert_eq!(nuevo.dni, Some(dni.to_string()));
        prop_assert_eq!(nuevo.telefono, Some(telefono.to_string()));
        prop_assert_eq!(nuevo.id_provincia, Some(id_provincia));
    }
}

// Pago creation rejects a missing or zero amount and missing or zero references.
proptest! {
    #[test]
    fn property_pago_falsy_fields_rejected(
        cents in prop::option::of(-100_000i64..100_000),
        id_metodo_pago in prop::option::of(0i32..5),
        id_pedido in prop::option::of(0i32..5),
    ) {
        let nuevo = NuevoPago {
            monto: cents.map(|c| Decimal::new(c, 2)),
            id_metodo_pago,
            id_pedido,
        };

        let falsy = cents.map_or(true, |c| c == 0)
            || id_metodo_pago.map_or(true, |id| id == 0)
            || id_pedido.map_or(true, |id| id == 0);

        prop_assert_eq!(nuevo.validate().is_err(), falsy);
    }
}

// The embedded ingredient list is always an array in the response body,
// whatever the number of ingredients the aggregation produced.
proptest! {
    #[test]
    fn property_ingredient_list_always_array(
        ingredientes in prop::collection::vec(("[a-z]{3,8}", 1u32..5, any::<bool>()), 0..6),
    ) {
        let aggregated: Vec<serde_json::Value> = ingredientes
            .iter()
            .map(|(nombre, cantidad, es_extra)| {
                json!({"ingrediente": nombre, "cantidad": cantidad, "es_extra": es_extra})
            })
            .collect();

        let producto: ProductoDetalle = serde_json::from_value(json!({
            "id_productos": 1,
            "producto": "Combo",
            "descripcion": null,
            "precio": "9.90",
            "categoria": null,
            "ingredientes": aggregated,
        }))
        .unwrap();

        let body = serde_json::to_value(&producto).unwrap();
        let list = body["ingredientes"].as_array();
        prop_assert!(list.is_some());
        prop_assert_eq!(list.unwrap().len(), ingredientes.len());
    }
}

#[test]
fn missing_ingredient_field_defaults_to_empty_list() {
    let producto: ProductoDetalle = serde_json::from_value(json!({
        "id_productos": 2,
        "producto": "Agua",
        "descripcion": null,
        "precio": "1.50",
        "categoria": "Bebidas"
    }))
    .unwrap();
    assert!(producto.ingredientes.is_empty());
    assert_eq!(serde_json::to_value(&producto).unwrap()["ingredientes"], json!([]));
}
