//! Viewer page handler — `GET /` and every unmatched path.

use axum::response::Html;

// Script that renders an AsyncAPI document inside a `<redoc>` element.
macro_rules! renderer_script_url {
    () => {
        "https://raw.githubusercontent.com/wegroupwolves/natsapi/master/render-asyncapi/redoc.asyncapi.js"
    };
}

const PAGE: &str = concat!(
    "<!DOCTYPE html>
<html>
  <head>
    <meta charset='utf-8'>
    <title>AsyncAPI</title>
  </head>
  <body>
    <redoc spec-url='/asyncapi.json'></redoc>
    <script src='",
    renderer_script_url!(),
    "'></script>
  </body>
</html>
"
);

/// Returns the static viewer page. The page loads the schema from
/// `/asyncapi.json` on the same host.
pub async fn page() -> Html<&'static str> {
    Html(PAGE)
}
