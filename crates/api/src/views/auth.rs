//! Login and registration forms.

use super::{error_banner, escape, layout};

/// Message shown for any failed login. Unknown user and wrong password are
/// deliberately the same text.
pub const LOGIN_FAILED: &str = "Benutzername oder Passwort ist falsch.";

/// Message shown when registering a username that is already taken.
pub const USERNAME_TAKEN: &str = "Benutzername existiert bereits.";

/// Message shown when the registration form is submitted incomplete.
pub const FIELDS_REQUIRED: &str = "Benutzername und Passwort dürfen nicht leer sein.";

struct AuthPage<'a> {
    title: &'a str,
    action: &'a str,
    button_label: &'a str,
    password_autocomplete: &'a str,
    footer: &'a str,
}

fn render(page: AuthPage<'_>, username: &str, error: Option<&str>) -> String {
    let body = format!(
        r#"<h1>{title}</h1>
{banner}
<form method="POST" action="{action}">
  <div class="form-group">
    <label>Benutzername</label>
    <input type="text" name="username" value="{username}" required autocomplete="username">
  </div>
  <div class="form-group">
    <label>Passwort</label>
    <input type="password" name="password" required autocomplete="{autocomplete}">
  </div>
  <button type="submit">{button}</button>
</form>
<p class="link">{footer}</p>"#,
        title = page.title,
        banner = error_banner(error),
        action = page.action,
        username = escape(username),
        autocomplete = page.password_autocomplete,
        button = page.button_label,
        footer = page.footer,
    );
    layout(page.title, None, &body)
}

/// The login form, optionally with an error and the username to refill.
pub fn login_page(username: &str, error: Option<&str>) -> String {
    render(
        AuthPage {
            title: "Anmelden",
            action: "/login",
            button_label: "Anmelden",
            password_autocomplete: "current-password",
            footer: r#"Noch kein Konto? <a href="/register">Registrieren</a>"#,
        },
        username,
        error,
    )
}

pub fn register_page(username: &str, error: Option<&str>) -> String {
    render(
        AuthPage {
            title: "Registrieren",
            action: "/register",
            button_label: "Konto anlegen",
            password_autocomplete: "new-password",
            footer: r#"Schon registriert? <a href="/login">Anmelden</a>"#,
        },
        username,
        error,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_page_refills_username_escaped() {
        let page = login_page(r#"bob"><script>"#, Some(LOGIN_FAILED));
        assert!(page.contains(r#"value="bob&quot;&gt;&lt;script&gt;""#));
        assert!(page.contains(LOGIN_FAILED));
        assert!(page.contains(r#"action="/login""#));
    }

    #[test]
    fn test_register_page_without_error_has_no_banner() {
        let page = register_page("", None);
        assert!(!page.contains(r#"class="error""#));
        assert!(page.contains(r#"action="/register""#));
    }
}
