//! API documentation: Swagger UI page plus the OpenAPI document it renders

use axum::{response::Html, routing::get, Json, Router};
use serde_json::{json, Map, Value};

use crate::models::EntityKind;

const SWAGGER_UI: &str = r#"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>API de Estrellas</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5.9.0/swagger-ui.css" />
    <style>
        body {
            margin: 0;
            background: #fafafa;
        }
    </style>
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5.9.0/swagger-ui-bundle.js"></script>
    <script>
        window.onload = function() {
            window.ui = SwaggerUIBundle({
                url: '/api-docs/openapi.json',
                dom_id: '#swagger-ui',
                deepLinking: true,
                presets: [SwaggerUIBundle.presets.apis]
            });
        };
    </script>
</body>
</html>
"#;

/// GET /api-docs - interactive documentation
async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_UI)
}

/// GET /api-docs/openapi.json
async fn openapi_json() -> Json<Value> {
    Json(openapi_document())
}

fn message_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": {
            "application/json": {
                "schema": { "$ref": "#/components/schemas/Mensaje" }
            }
        }
    })
}

fn id_parameter(kind: EntityKind) -> Value {
    json!({
        "name": "id",
        "in": "path",
        "required": true,
        "description": format!("ID de la {}", kind.noun()),
        "schema": { "type": "integer", "format": "int64" }
    })
}

fn input_body() -> Value {
    json!({
        "required": true,
        "content": {
            "application/json": {
                "schema": { "$ref": "#/components/schemas/RegistroEntrada" }
            }
        }
    })
}

fn record_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": {
            "application/json": {
                "schema": { "$ref": "#/components/schemas/Registro" }
            }
        }
    })
}

fn paths_for(kind: EntityKind) -> (String, Value, String, Value) {
    let label = kind.label();
    let noun = kind.noun();
    let plural = kind.segment();
    let not_found = format!("{} no encontrada", label);

    let collection = json!({
        "get": {
            "tags": [label],
            "summary": format!("Obtener todas las {}", plural),
            "responses": {
                "200": {
                    "description": format!("Lista de {}", plural),
                    "content": {
                        "application/json": {
                            "schema": {
                                "type": "array",
                                "items": { "$ref": "#/components/schemas/Registro" }
                            }
                        }
                    }
                },
                "500": message_response("Error interno")
            }
        },
        "post": {
            "tags": [label],
            "summary": format!("Crear una nueva {}", noun),
            "requestBody": input_body(),
            "responses": {
                "201": record_response(&format!("{} creada", label)),
                "400": message_response("Faltan datos requeridos"),
                "500": message_response("Error interno")
            }
        }
    });

    let item = json!({
        "get": {
            "tags": [label],
            "summary": format!("Obtener {} por ID", noun),
            "parameters": [id_parameter(kind)],
            "responses": {
                "200": record_response(&format!("{} encontrada", label)),
                "404": message_response(&not_found),
                "500": message_response("Error interno")
            }
        },
        "put": {
            "tags": [label],
            "summary": format!("Actualizar una {} por ID", noun),
            "parameters": [id_parameter(kind)],
            "requestBody": input_body(),
            "responses": {
                "200": message_response(&kind.updated_message()),
                "400": message_response("Faltan datos requeridos"),
                "404": message_response(&not_found),
                "500": message_response("Error interno")
            }
        },
        "delete": {
            "tags": [label],
            "summary": format!("Eliminar una {} por ID", noun),
            "parameters": [id_parameter(kind)],
            "responses": {
                "200": message_response(&kind.deleted_message()),
                "404": message_response(&not_found),
                "500": message_response("Error interno")
            }
        }
    });

    (
        format!("/{}", plural),
        collection,
        format!("/{}/{{id}}", plural),
        item,
    )
}

/// Build the OpenAPI 3.0 document for every catalog route.
pub fn openapi_document() -> Value {
    let mut paths = Map::new();
    for kind in EntityKind::ALL {
        let (collection_path, collection, item_path, item) = paths_for(kind);
        paths.insert(collection_path, collection);
        paths.insert(item_path, item);
    }

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "API de Estrellas",
            "description": "API para gestionar información de estrellas y galaxias en el universo.",
            "version": env!("CARGO_PKG_VERSION")
        },
        "servers": [{ "url": "/" }],
        "paths": paths,
        "components": {
            "schemas": {
                "Registro": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "integer", "format": "int64" },
                        "nombre": { "type": "string" },
                        "masa_estelar": { "type": "number" },
                        "tipo_de_estrella": { "type": "string" },
                        "origen_galactico": { "type": "string" }
                    }
                },
                "RegistroEntrada": {
                    "type": "object",
                    "required": ["nombre", "masa_estelar", "tipo_de_estrella", "origen_galactico"],
                    "properties": {
                        "nombre": { "type": "string", "maxLength": 255 },
                        "masa_estelar": { "type": "number", "exclusiveMinimum": 0 },
                        "tipo_de_estrella": { "type": "string", "maxLength": 255 },
                        "origen_galactico": { "type": "string", "maxLength": 255 }
                    }
                },
                "Mensaje": {
                    "type": "object",
                    "properties": {
                        "message": { "type": "string" }
                    }
                }
            }
        }
    })
}

/// Documentation routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/api-docs", get(swagger_ui))
        .route("/api-docs/openapi.json", get(openapi_json))
}
