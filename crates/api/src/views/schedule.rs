//! The matchday schedule.

use spielplan_db::models::schedule::ScheduleListing;
use spielplan_db::models::team::Team;

use super::tournament::team_options;
use super::{error_banner, escape, layout};

const KICKOFF_FORMAT: &str = "%d.%m.%Y %H:%M";

pub fn schedule_page(
    username: &str,
    entries: &[ScheduleListing],
    teams: &[Team],
    error: Option<&str>,
) -> String {
    let rows = if entries.is_empty() {
        r#"<tr><td colspan="4" class="empty">Noch nichts angesetzt.</td></tr>"#.to_string()
    } else {
        entries
            .iter()
            .map(|entry| {
                let kickoff = entry
                    .kickoff
                    .map(|k| k.format(KICKOFF_FORMAT).to_string())
                    .unwrap_or_else(|| "offen".to_string());
                format!(
                    r#"<tr>
  <td>{matchday}.</td>
  <td>{home} – {away}</td>
  <td>{kickoff}</td>
  <td><form class="inline" method="POST" action="/schedule/{id}/delete">
    <button type="submit">Entfernen</button>
  </form></td>
</tr>"#,
                    matchday = entry.matchday,
                    home = escape(&entry.home_team),
                    away = escape(&entry.away_team),
                    id = entry.id,
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    let options = team_options(teams);
    let body = format!(
        r#"<h1>Spielplan</h1>
{banner}
<table>
<tr><th>Spieltag</th><th>Begegnung</th><th>Anstoß</th><th></th></tr>
{rows}
</table>
<form method="POST" action="/schedule">
  <div class="form-group">
    <label>Heim</label>
    <select name="home_team_id" required>{options}</select>
  </div>
  <div class="form-group">
    <label>Gast</label>
    <select name="away_team_id" required>{options}</select>
  </div>
  <div class="form-group">
    <label>Spieltag</label>
    <input type="number" name="matchday" min="1" max="99" value="1" required style="width:80px">
  </div>
  <div class="form-group">
    <label>Anstoß</label>
    <input type="datetime-local" name="kickoff">
  </div>
  <button type="submit">Ansetzen</button>
</form>"#,
        banner = error_banner(error),
    );
    layout("Spielplan", Some(username), &body)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn entry(id: i64, matchday: i32, kickoff: bool) -> ScheduleListing {
        ScheduleListing {
            id,
            fixture_id: 1,
            matchday,
            kickoff: kickoff.then(|| Utc.with_ymd_and_hms(2024, 5, 4, 15, 30, 0).unwrap()),
            home_team_id: 1,
            home_team: "Adler".to_string(),
            away_team_id: 2,
            away_team: "<Bären>".to_string(),
        }
    }

    #[test]
    fn test_entries_show_matchday_and_kickoff() {
        let page = schedule_page("alice", &[entry(5, 2, true), entry(6, 3, false)], &[], None);
        assert!(page.contains("<td>2.</td>"));
        assert!(page.contains("Adler – &lt;Bären&gt;"));
        assert!(page.contains("04.05.2024 15:30"));
        assert!(page.contains("<td>offen</td>"));
        assert!(page.contains(r#"action="/schedule/6/delete""#));
    }

    #[test]
    fn test_empty_schedule_shows_form_error() {
        let page = schedule_page("alice", &[], &[], Some("Spieltag fehlt"));
        assert!(page.contains("Noch nichts angesetzt."));
        assert!(page.contains(r#"<div class="error">Spieltag fehlt</div>"#));
    }
}
