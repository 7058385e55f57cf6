//! Server-rendered HTML shell.
//!
//! Every page is the same document: `lang`/`dir` from the request locale,
//! a localized title, and the page state as JSON in
//! `<script id="__ADMINHUB_STATE__">` for the client application to hydrate.

use axum::response::Html;
use serde::Serialize;
use serde_json::Value;

use adminhub_entity::session::SessionUser;
use adminhub_i18n::ResolvedLocale;

/// Element id of the embedded state script.
pub const STATE_ELEMENT_ID: &str = "__ADMINHUB_STATE__";

/// State embedded in a page.
#[derive(Debug, Clone, Serialize)]
pub struct PageState<'a> {
    /// Page identifier, e.g. `users.list`.
    pub page: &'a str,
    /// Signed-in user, absent on the sign-in page.
    pub user: Option<&'a SessionUser>,
    /// Locale, direction and messages.
    pub locale: &'a ResolvedLocale,
    /// Page-specific data.
    pub data: Value,
}

/// Render the shell for `state` with the message at `title_key` as title.
pub fn page_shell(title_key: &str, state: &PageState<'_>) -> Html<String> {
    let locale = state.locale;
    let title = escape_html(locale.messages.text(title_key));
    let app_name = escape_html(locale.messages.text("app.name"));
    let json = serde_json::to_string(state).unwrap_or_else(|_| "{}".to_string());

    Html(format!(
        "<!DOCTYPE html>\n\
         <html lang=\"{lang}\" dir=\"{dir}\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title} | {app_name}</title>\n\
         <link rel=\"stylesheet\" href=\"/assets/app.css\">\n\
         </head>\n\
         <body>\n\
         <div id=\"root\"></div>\n\
         <script id=\"{id}\" type=\"application/json\">{state}</script>\n\
         <script type=\"module\" src=\"/assets/app.js\"></script>\n\
         </body>\n\
         </html>\n",
        lang = locale.locale.code(),
        dir = locale.direction.as_str(),
        id = STATE_ELEMENT_ID,
        state = escape_script_json(&json),
    ))
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Keep JSON from closing the surrounding `<script>` element.
fn escape_script_json(json: &str) -> String {
    json.replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
}
