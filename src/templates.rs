//! HTML page rendering
//!
//! Two small pages, built with `format!`. No template engine: the pages
//! carry no logic beyond one optional result line.

/// Landing page (`GET /`)
pub fn index_page() -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>FWI Prediction</title>
</head>
<body>
    <h1>Forest Fire Weather Index (FWI) Prediction</h1>
    <p>Predicts the Fire Weather Index from weather and fuel-moisture measurements.</p>
    <p><a href="/predictdata">Go to the prediction form</a></p>
    <footer><small>fwi-server v{}</small></footer>
</body>
</html>
"#,
        env!("CARGO_PKG_VERSION")
    )
}

/// Form page (`GET /predictdata` and the `POST` response), with an
/// optional result/error line above the form.
pub fn form_page(result: Option<&str>) -> String {
    let result_block = match result {
        Some(text) => format!("    <h2>{}</h2>\n", escape(text)),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>FWI Prediction</title>
</head>
<body>
    <h1>FWI Prediction</h1>
{result_block}    <form action="/predictdata" method="post">
        <label>Temperature <input type="text" name="Temperature" required></label><br>
        <label>RH <input type="text" name="RH" required></label><br>
        <label>Ws <input type="text" name="Ws" required></label><br>
        <label>Rain <input type="text" name="Rain" required></label><br>
        <label>FFMC <input type="text" name="FFMC" required></label><br>
        <label>DMC <input type="text" name="DMC" required></label><br>
        <label>ISI <input type="text" name="ISI" required></label><br>
        <label>Classes <input type="text" name="Classes"></label><br>
        <label>Region <input type="text" name="Region"></label><br>
        <button type="submit">Predict</button>
    </form>
</body>
</html>
"#
    )
}

/// Minimal HTML escaping for the result line.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
