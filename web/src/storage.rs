//! Browser `localStorage`, reached through `document::eval`.

use dioxus::document::eval;
use dioxus::prelude::*;

use crate::config::CONFIG;

fn storage_key(name: &str) -> String {
    format!("{}.{}", CONFIG.storage_prefix, name)
}

/// JSON-quote `value` for splicing into a script.
fn js_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

pub async fn load(name: &str) -> Option<String> {
    let key = js_string(&storage_key(name));
    match eval(&format!("return window.localStorage.getItem({key});"))
        .join::<Option<String>>()
        .await
    {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!(?error, name, "failed to read browser storage");
            None
        }
    }
}

pub fn save(name: &str, value: &str) {
    let key = js_string(&storage_key(name));
    let value = js_string(value);
    run(name, format!("window.localStorage.setItem({key}, {value}); return null;"));
}

pub fn remove(name: &str) {
    let key = js_string(&storage_key(name));
    run(name, format!("window.localStorage.removeItem({key}); return null;"));
}

fn run(name: &str, script: String) {
    let name = name.to_string();
    spawn(async move {
        if let Err(error) = eval(&script).join::<()>().await {
            tracing::warn!(?error, name, "failed to write browser storage");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_prefixed_and_quoted() {
        assert_eq!(storage_key("session"), "hris.session");
        assert_eq!(js_string("a\"b"), r#""a\"b""#);
    }
}
