//! The to-do list on the start page.

use spielplan_db::models::todo::Todo;

use super::{error_banner, escape, layout};

const DUE_FORMAT: &str = "%d.%m.%Y %H:%M";

pub fn todo_page(username: &str, todos: &[Todo], error: Option<&str>) -> String {
    let rows = if todos.is_empty() {
        r#"<tr><td colspan="3" class="empty">Keine offenen Aufgaben.</td></tr>"#.to_string()
    } else {
        todos
            .iter()
            .map(|todo| {
                format!(
                    r#"<tr>
  <td>{content}</td>
  <td>{due}</td>
  <td><form class="inline" method="POST" action="/complete">
    <input type="hidden" name="id" value="{id}">
    <button type="submit">Erledigt</button>
  </form></td>
</tr>"#,
                    content = escape(&todo.content),
                    due = todo.due.format(DUE_FORMAT),
                    id = todo.id,
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    let body = format!(
        r#"<h1>Aufgaben</h1>
{banner}
<table>
<tr><th>Aufgabe</th><th>Fällig</th><th></th></tr>
{rows}
</table>
<form method="POST" action="/">
  <div class="form-group">
    <label>Neue Aufgabe</label>
    <input type="text" name="contents" required maxlength="500">
  </div>
  <div class="form-group">
    <label>Fällig am</label>
    <input type="datetime-local" name="due_at" required>
  </div>
  <button type="submit">Hinzufügen</button>
</form>"#,
        banner = error_banner(error),
    );
    layout("Aufgaben", Some(username), &body)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn test_todo_rows_are_escaped_and_dated() {
        let todos = vec![Todo {
            id: 7,
            user_id: 1,
            content: "<i>Bälle</i> pumpen".to_string(),
            due: Utc.with_ymd_and_hms(2024, 6, 1, 18, 30, 0).unwrap(),
        }];
        let page = todo_page("alice", &todos, None);
        assert!(page.contains("&lt;i&gt;Bälle&lt;/i&gt; pumpen"));
        assert!(page.contains("01.06.2024 18:30"));
        assert!(page.contains(r#"name="id" value="7""#));
    }

    #[test]
    fn test_empty_list_has_placeholder() {
        let page = todo_page("alice", &[], None);
        assert!(page.contains("Keine offenen Aufgaben."));
    }
}
