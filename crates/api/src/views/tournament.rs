//! Teams, games, favorites, and the standings table.

use spielplan_core::standings::{GroupTable, Standing};
use spielplan_db::models::game::GameListing;
use spielplan_db::models::team::Team;

use super::{error_banner, escape, layout};

pub fn teams_page(username: &str, teams: &[Team], error: Option<&str>) -> String {
    let rows = if teams.is_empty() {
        r#"<tr><td colspan="3" class="empty">Noch keine Teams.</td></tr>"#.to_string()
    } else {
        teams
            .iter()
            .map(|team| {
                format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                    escape(&team.name),
                    team.trainer.as_deref().map(escape).unwrap_or_default(),
                    team.group_name.as_deref().map(escape).unwrap_or_default(),
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    let body = format!(
        r#"<h1>Teams</h1>
{banner}
<table>
<tr><th>Name</th><th>Trainer</th><th>Gruppe</th></tr>
{rows}
</table>
<form method="POST" action="/teams">
  <div class="form-group">
    <label>Name</label>
    <input type="text" name="name" required maxlength="100">
  </div>
  <div class="form-group">
    <label>Trainer</label>
    <input type="text" name="trainer" maxlength="100">
  </div>
  <div class="form-group">
    <label>Gruppe</label>
    <input type="text" name="group" maxlength="50">
  </div>
  <button type="submit">Team anlegen</button>
</form>"#,
        banner = error_banner(error),
    );
    layout("Teams", Some(username), &body)
}

pub(crate) fn team_options(teams: &[Team]) -> String {
    teams
        .iter()
        .map(|team| format!(r#"<option value="{}">{}</option>"#, team.id, escape(&team.name)))
        .collect::<Vec<_>>()
        .join("")
}

fn game_rows(games: &[GameListing], editable: bool) -> String {
    if games.is_empty() {
        return r#"<tr><td colspan="4" class="empty">Keine Spiele.</td></tr>"#.to_string();
    }

    games
        .iter()
        .map(|game| {
            let star = if game.is_favorite { "★" } else { "☆" };
            let result_form = if editable {
                format!(
                    r#"<form class="inline" method="POST" action="/games/{id}/result">
    <input type="number" name="home_goals" min="0" value="{home}" style="width:60px">
    <input type="number" name="away_goals" min="0" value="{away}" style="width:60px">
    <button type="submit">Speichern</button>
  </form>"#,
                    id = game.id,
                    home = game.home_goals,
                    away = game.away_goals,
                )
            } else {
                String::new()
            };
            format!(
                r#"<tr>
  <td>{home_team} – {away_team}</td>
  <td>{home}:{away}</td>
  <td>{result_form}</td>
  <td><form class="inline" method="POST" action="/games/{id}/favorite">
    <button type="submit" title="Favorit umschalten">{star}</button>
  </form></td>
</tr>"#,
                home_team = escape(&game.home_team),
                away_team = escape(&game.away_team),
                home = game.home_goals,
                away = game.away_goals,
                id = game.id,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn games_page(
    username: &str,
    games: &[GameListing],
    teams: &[Team],
    error: Option<&str>,
) -> String {
    let options = team_options(teams);
    let body = format!(
        r#"<h1>Spiele</h1>
{banner}
<table>
<tr><th>Begegnung</th><th>Ergebnis</th><th>Ergebnis ändern</th><th>Favorit</th></tr>
{rows}
</table>
<form method="POST" action="/games">
  <div class="form-group">
    <label>Heim</label>
    <select name="home_team_id" required>{options}</select>
    <input type="number" name="home_goals" min="0" value="0" style="width:60px">
  </div>
  <div class="form-group">
    <label>Gast</label>
    <select name="away_team_id" required>{options}</select>
    <input type="number" name="away_goals" min="0" value="0" style="width:60px">
  </div>
  <button type="submit">Spiel eintragen</button>
</form>"#,
        banner = error_banner(error),
        rows = game_rows(games, true),
    );
    layout("Spiele", Some(username), &body)
}

pub fn favorites_page(username: &str, games: &[GameListing]) -> String {
    let body = format!(
        r#"<h1>Favoriten</h1>
<table>
<tr><th>Begegnung</th><th>Ergebnis</th><th></th><th>Favorit</th></tr>
{rows}
</table>"#,
        rows = game_rows(games, false),
    );
    layout("Favoriten", Some(username), &body)
}

fn standing_rows(standings: &[Standing]) -> String {
    if standings.is_empty() {
        return r#"<tr><td colspan="7" class="empty">Noch keine Teams.</td></tr>"#.to_string();
    }
    standings
        .iter()
        .enumerate()
        .map(|(rank, s)| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}:{}</td></tr>",
                rank + 1,
                escape(&s.name),
                s.played,
                s.wins,
                s.draws,
                s.losses,
                s.goals_for,
                s.goals_against,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One table per group. A league without groups renders a single table
/// with no heading.
pub fn standings_page(username: &str, tables: &[GroupTable]) -> String {
    let grouped = tables.iter().any(|t| t.group.is_some());
    let sections = tables
        .iter()
        .map(|table| {
            let heading = match (&table.group, grouped) {
                (Some(group), _) => format!("<h2>Gruppe {}</h2>\n", escape(group)),
                (None, true) => "<h2>Ohne Gruppe</h2>\n".to_string(),
                (None, false) => String::new(),
            };
            format!(
                r#"{heading}<table>
<tr><th>#</th><th>Team</th><th>Sp.</th><th>S</th><th>U</th><th>N</th><th>Tore</th></tr>
{rows}
</table>"#,
                rows = standing_rows(&table.standings),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let body = format!("<h1>Tabelle</h1>\n{sections}");
    layout("Tabelle", Some(username), &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(is_favorite: bool) -> GameListing {
        GameListing {
            id: 3,
            home_team_id: 1,
            home_team: "Adler & Co".to_string(),
            away_team_id: 2,
            away_team: "Bären".to_string(),
            home_goals: 2,
            away_goals: 1,
            is_favorite,
        }
    }

    #[test]
    fn test_games_page_marks_favorites() {
        let page = games_page("alice", &[listing(true)], &[], None);
        assert!(page.contains("Adler &amp; Co – Bären"));
        assert!(page.contains("2:1"));
        assert!(page.contains("★"));
        assert!(page.contains(r#"action="/games/3/favorite""#));
        assert!(page.contains(r#"action="/games/3/result""#));
    }

    #[test]
    fn test_favorites_page_has_no_result_form() {
        let page = favorites_page("alice", &[listing(true)]);
        assert!(!page.contains("/games/3/result"));
        assert!(page.contains("/games/3/favorite"));
    }

    fn standing(team_id: i64, name: &str, group: Option<&str>) -> Standing {
        Standing {
            team_id,
            name: name.to_string(),
            group: group.map(str::to_string),
            played: 2,
            wins: 1,
            draws: 1,
            losses: 0,
            goals_for: 3,
            goals_against: 1,
        }
    }

    #[test]
    fn test_standings_rows_are_ranked() {
        let tables = [GroupTable {
            group: None,
            standings: vec![standing(1, "Adler", None)],
        }];
        let page = standings_page("alice", &tables);
        assert!(page.contains("<td>1</td><td>Adler</td><td>2</td><td>1</td><td>1</td><td>0</td><td>3:1</td>"));
        assert!(!page.contains("<h2>"));
    }

    #[test]
    fn test_each_group_restarts_the_rank() {
        let tables = [
            GroupTable {
                group: Some("A".to_string()),
                standings: vec![standing(1, "Adler", Some("A"))],
            },
            GroupTable {
                group: None,
                standings: vec![standing(2, "<Bären>", None)],
            },
        ];
        let page = standings_page("alice", &tables);
        assert!(page.contains("<h2>Gruppe A</h2>"));
        assert!(page.contains("<h2>Ohne Gruppe</h2>"));
        assert!(page.contains("<td>1</td><td>&lt;Bären&gt;</td>"));
    }

    #[test]
    fn test_teams_page_shows_group() {
        let teams = [Team {
            id: 1,
            name: "Adler".to_string(),
            trainer: None,
            group_name: Some("B".to_string()),
        }];
        let page = teams_page("alice", &teams, None);
        assert!(page.contains("<td>Adler</td><td></td><td>B</td>"));
        assert!(page.contains(r#"name="group""#));
    }
}
