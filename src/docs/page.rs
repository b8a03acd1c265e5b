//! Swagger UI page served at `/docs`.

use axum::response::Html;

const SWAGGER_UI: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Booking API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist/swagger-ui.css">
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist/swagger-ui-bundle.js"></script>
  <script>
    window.onload = () => { SwaggerUIBundle({ url: '/swagger.json', dom_id: '#swagger-ui' }); };
  </script>
</body>
</html>
"#;

pub async fn docs_page() -> Html<&'static str> {
    Html(SWAGGER_UI)
}
