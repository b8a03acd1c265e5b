//! OpenAPI 3.0 description of the booking API.

use serde_json::{json, Value};

fn json_ref(description: &str, schema: &str) -> Value {
    json!({
        "description": description,
        "content": {
            "application/json": {
                "schema": { "$ref": format!("#/components/schemas/{}", schema) }
            }
        }
    })
}

fn id_parameter() -> Value {
    json!({
        "name": "id",
        "in": "path",
        "required": true,
        "schema": { "type": "integer", "format": "int32" }
    })
}

/// Build the document served at `/swagger.json`.
///
/// `server_url` is advertised as the single server entry.
pub fn document(server_url: &str) -> Value {
    let list = json!({
        "summary": "List all bookings",
        "responses": {
            "200": {
                "description": "List of bookings",
                "content": {
                    "application/json": {
                        "schema": {
                            "type": "array",
                            "items": { "$ref": "#/components/schemas/Booking" }
                        }
                    }
                }
            }
        }
    });

    let create = json!({
        "summary": "Create booking",
        "requestBody": {
            "required": true,
            "content": {
                "application/json": {
                    "schema": { "$ref": "#/components/schemas/Booking" }
                }
            }
        },
        "responses": {
            "201": json_ref("Booking created", "Booking"),
            "400": json_ref("Malformed JSON request", "Error")
        }
    });

    let get_by_id = json!({
        "summary": "Get booking by ID",
        "parameters": [id_parameter()],
        "responses": {
            "200": json_ref("Booking found", "Booking"),
            "400": json_ref("Invalid ID format", "Error"),
            "404": json_ref("Booking not found", "Error")
        }
    });

    let delete = json!({
        "summary": "Delete booking",
        "security": [{ "basicAuth": [] }],
        "parameters": [id_parameter()],
        "responses": {
            "204": { "description": "Booking deleted" },
            "400": json_ref("Invalid ID format", "Error"),
            "401": json_ref("Unauthorized", "Error"),
            "404": json_ref("Booking not found", "Error"),
            "405": json_ref("Method not allowed", "Error")
        }
    });

    json!({
        "openapi": "3.0.1",
        "info": {
            "title": "Booking API",
            "version": "1.0.0"
        },
        "servers": [{ "url": server_url }],
        "paths": {
            "/bookings": { "get": list, "post": create },
            "/bookings/{id}": { "get": get_by_id, "delete": delete }
        },
        "components": {
            "schemas": {
                "Booking": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "integer", "format": "int32", "example": 1 },
                        "guestName": { "type": "string", "example": "John Wick" },
                        "roomType": { "type": "string", "example": "Continental Suite" }
                    }
                },
                "Error": {
                    "type": "object",
                    "properties": {
                        "error": { "type": "string", "example": "Booking not found" }
                    }
                }
            },
            "securitySchemes": {
                "basicAuth": { "type": "http", "scheme": "basic" }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_structure() {
        let doc = document("http://localhost:8080");
        assert_eq!(doc["info"]["title"], "Booking API");
        assert_eq!(doc["servers"][0]["url"], "http://localhost:8080");
        assert!(doc["paths"]["/bookings"]["post"].is_object());
        assert_eq!(
            doc["paths"]["/bookings/{id}"]["delete"]["security"][0]["basicAuth"],
            json!([])
        );
        assert_eq!(
            doc["components"]["securitySchemes"]["basicAuth"]["scheme"],
            "basic"
        );
    }
}
