// SQL statements for repositories
// One statement per operation; every read carries its fixed ordering.

/// Statements over `productos` and its ingredient junction
pub mod producto_queries {
    pub const LIST: &str = r#"
        SELECT id_productos, nombre, descripcion, precio::numeric AS precio, categoria
        FROM productos
        ORDER BY nombre
    "#;

    /// Products with their ingredient list built in a single round trip.
    ///
    /// # NULL Handling
    /// - The FILTER drops the all-NULL row a LEFT JOIN yields for products without
    ///   ingredients, so JSON_AGG sees no input and returns NULL.
    /// - COALESCE turns that NULL into '[]', never an absent or null list.
    pub const LIST_WITH_INGREDIENTS: &str = r#"
        SELECT
            p.id_productos,
            p.nombre AS producto,
            p.descripcion,
            p.precio::numeric AS precio,
            p.categoria,
            COALESCE(
                JSON_AGG(
                    JSON_BUILD_OBJECT(
                        'ingrediente', i.nombre,
                        'cantidad', pi.cantidad,
                        'es_extra', pi.es_extra
                    )
                ) FILTER (WHERE i.id_ingredientes IS NOT NULL),
                '[]'::json
            ) AS ingredientes
        FROM productos p
        LEFT JOIN productos_ingredientes pi ON p.id_productos = pi.id_productos
        LEFT JOIN ingredientes i ON pi.id_ingredientes = i.id_ingredientes
        GROUP BY p.id_productos
        ORDER BY p.nombre
    "#;
}

pub mod pedido_queries {
    /// `fecha` is read as `timestamptz`; sessions run in UTC, so zone-less
    /// timestamps are taken as UTC and zoned ones keep their instant.
    /// Orders without a date sort after every dated one.
    pub const LIST: &str = r#"
        SELECT id_pedido, codigo::text AS codigo, fecha::timestamptz AS fecha, estado::text AS estado
        FROM pedido
        ORDER BY fecha DESC NULLS LAST
    "#;
}

/// Statements over `cliente`
pub mod cliente_queries {
    /// Province, country and language references resolved to names.
    /// LEFT JOINs keep customers whose references are NULL or dangling.
    pub const LIST: &str = r#"
        SELECT
            c.id_cliente,
            c.nombre,
            c.dni::text AS dni,
            c.telefono::text AS telefono,
            c.mail,
            c.id_puntos,
            p.nombre AS provincia,
            pa.nombre AS pais,
            i.nombre AS idioma
        FROM cliente c
        LEFT JOIN provincia p ON c.id_provincia = p.id_provincia
        LEFT JOIN pais pa ON p.id_pais = pa.id_pais
        LEFT JOIN idioma i ON c.id_idioma = i.id_idioma
        ORDER BY c.nombre
    "#;

    pub const INSERT: &str = r#"
        INSERT INTO cliente (nombre, dni, telefono, mail, id_provincia, id_puntos, id_idioma, "contraseña")
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id_cliente, nombre, dni::text AS dni, telefono::text AS telefono, mail,
            id_provincia, id_puntos, id_idioma
    "#;
}

pub mod empleado_queries {
    /// Identity columns typed, the rest of the row carried as a JSON object
    pub const LIST: &str = r#"
        SELECT
            e.id_empleado,
            e.nombre,
            to_jsonb(e) - 'id_empleado' - 'nombre' AS detalle
        FROM empleado e
        ORDER BY e.nombre
    "#;
}

/// Statements over `pago`
pub mod pago_queries {
    pub const LIST: &str = r#"
        SELECT
            p.id_pago,
            p.monto::numeric AS monto,
            m.nombre AS metodo_pago,
            pe.codigo::text AS codigo_pedido
        FROM pago p
        JOIN metodopago m ON p.id_metodo_pago = m.id_metodo_pago
        JOIN pedido pe ON p.id_pedido = pe.id_pedido
        ORDER BY p.id_pago DESC
    "#;

    pub const INSERT: &str = r#"
        INSERT INTO pago (monto, id_metodo_pago, id_pedido)
        VALUES ($1, $2, $3)
        RETURNING id_pago, monto::numeric AS monto, id_metodo_pago, id_pedido
    "#;
}

pub mod catalog_queries {
    pub const LIST_TABLES: &str = r#"
        SELECT table_name::text
        FROM information_schema.tables
        WHERE table_schema = 'public'
        ORDER BY table_name
    "#;
}
