//! Server-rendered HTML pages.
//!
//! Pages are plain `format!` templates. Every value that came from a user or
//! the database goes through [`escape`] before it is interpolated.

pub mod auth;
pub mod schedule;
pub mod staff;
pub mod todos;
pub mod tournament;

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

fn base_style() -> &'static str {
    r#"
    * { box-sizing: border-box; }
    body {
        font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
        margin: 0; background: #f4f6f8; color: #1a1a2e;
    }
    nav { background: #1a1a2e; padding: 12px 24px; display: flex; gap: 16px; align-items: center; }
    nav a { color: #fff; text-decoration: none; font-size: 14px; }
    nav .user { margin-left: auto; color: #aab; font-size: 13px; }
    main { max-width: 760px; margin: 24px auto; background: #fff; border-radius: 12px; padding: 24px; }
    h1 { font-size: 22px; margin-top: 0; }
    table { width: 100%; border-collapse: collapse; margin-bottom: 24px; }
    th, td { text-align: left; padding: 8px; border-bottom: 1px solid #e5e7eb; font-size: 14px; }
    form.inline { display: inline; }
    .form-group { margin-bottom: 12px; }
    .form-group label { display: block; font-size: 13px; margin-bottom: 4px; color: #555; }
    input, select { padding: 8px; border: 1px solid #d1d5db; border-radius: 6px; font-size: 14px; }
    button { padding: 8px 14px; border: none; border-radius: 6px; background: #4a6cf7; color: #fff; cursor: pointer; }
    .error { background: #fde8e8; color: #b42318; padding: 10px; border-radius: 6px; margin-bottom: 16px; }
    .empty { color: #888; font-style: italic; }
    .link { margin-top: 16px; font-size: 14px; }
    "#
}

/// Wrap a page body in the shared document shell.
///
/// `username` is the signed-in user; when present the navigation bar is
/// shown.
pub fn layout(title: &str, username: Option<&str>, body: &str) -> String {
    let nav = match username {
        Some(name) => format!(
            r#"<nav>
  <a href="/">Aufgaben</a>
  <a href="/teams">Teams</a>
  <a href="/games">Spiele</a>
  <a href="/favorites">Favoriten</a>
  <a href="/standings">Tabelle</a>
  <a href="/schedule">Spielplan</a>
  <a href="/staff">Betreuer</a>
  <span class="user">{name} · <a href="/logout">Abmelden</a></span>
</nav>"#,
            name = escape(name),
        ),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="de"><head>
<meta charset="utf-8"><meta name="viewport" content="width=device-width,initial-scale=1">
<title>{title} - Spielplan</title>
<style>{style}</style>
</head><body>
{nav}
<main>
{body}
</main>
</body></html>"#,
        title = escape(title),
        style = base_style(),
    )
}

/// The error banner shown above a form, or nothing.
pub(crate) fn error_banner(error: Option<&str>) -> String {
    error
        .map(|e| format!(r#"<div class="error">{}</div>"#, escape(e)))
        .unwrap_or_default()
}

/// Standalone page for failures that have no form to re-render.
pub fn error_page(message: &str) -> String {
    let body = format!(
        r#"<h1>Fehler</h1>
{banner}
<p class="link"><a href="/">Zur Startseite</a></p>"#,
        banner = error_banner(Some(message)),
    );
    layout("Fehler", None, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_neutralizes_markup() {
        assert_eq!(
            escape(r#"<script>alert("x") & 'y'</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#x27;y&#x27;&lt;/script&gt;"
        );
        assert_eq!(escape("Bären 2:1"), "Bären 2:1");
    }

    #[test]
    fn test_layout_shows_nav_only_when_signed_in() {
        let anonymous = layout("Anmelden", None, "<p>x</p>");
        assert!(!anonymous.contains("<nav>"));

        let signed_in = layout("Aufgaben", Some("<alice>"), "<p>x</p>");
        assert!(signed_in.contains("<nav>"));
        assert!(signed_in.contains("&lt;alice&gt;"));
        assert!(!signed_in.contains("<alice>"));
    }

    #[test]
    fn test_error_page_escapes_message() {
        let page = error_page("<b>kaputt</b>");
        assert!(page.contains("&lt;b&gt;kaputt&lt;/b&gt;"));
    }
}
