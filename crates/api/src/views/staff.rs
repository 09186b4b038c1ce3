//! Team staff and who helps out where.

use spielplan_db::models::staff::{StaffMember, TeamStaffListing};
use spielplan_db::models::team::Team;

use super::tournament::team_options;
use super::{error_banner, escape, layout};

fn staff_rows(staff: &[StaffMember], options: &str) -> String {
    if staff.is_empty() {
        return r#"<tr><td colspan="3" class="empty">Noch niemand eingetragen.</td></tr>"#
            .to_string();
    }
    staff
        .iter()
        .map(|member| {
            format!(
                r#"<tr>
  <td>{name}</td>
  <td>{role}</td>
  <td><form class="inline" method="POST" action="/staff/{id}/teams">
    <select name="team_id" required>{options}</select>
    <button type="submit">Zuordnen</button>
  </form></td>
</tr>"#,
                name = escape(&member.name),
                role = member.role.as_deref().map(escape).unwrap_or_default(),
                id = member.id,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn membership_rows(memberships: &[TeamStaffListing]) -> String {
    if memberships.is_empty() {
        return r#"<tr><td colspan="4" class="empty">Keine Zuordnungen.</td></tr>"#.to_string();
    }
    memberships
        .iter()
        .map(|m| {
            format!(
                r#"<tr>
  <td>{team}</td>
  <td>{name}</td>
  <td>{role}</td>
  <td><form class="inline" method="POST" action="/staff/{staff_id}/teams/{team_id}/remove">
    <button type="submit">Entfernen</button>
  </form></td>
</tr>"#,
                team = escape(&m.team),
                name = escape(&m.name),
                role = m.role.as_deref().map(escape).unwrap_or_default(),
                staff_id = m.staff_id,
                team_id = m.team_id,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn staff_page(
    username: &str,
    staff: &[StaffMember],
    teams: &[Team],
    memberships: &[TeamStaffListing],
    error: Option<&str>,
) -> String {
    let body = format!(
        r#"<h1>Betreuer</h1>
{banner}
<table>
<tr><th>Name</th><th>Funktion</th><th>Team</th></tr>
{staff_rows}
</table>
<form method="POST" action="/staff">
  <div class="form-group">
    <label>Name</label>
    <input type="text" name="name" required maxlength="100">
  </div>
  <div class="form-group">
    <label>Funktion</label>
    <input type="text" name="role" maxlength="50">
  </div>
  <button type="submit">Eintragen</button>
</form>
<h2>Teams</h2>
<table>
<tr><th>Team</th><th>Name</th><th>Funktion</th><th></th></tr>
{membership_rows}
</table>"#,
        banner = error_banner(error),
        staff_rows = staff_rows(staff, &team_options(teams)),
        membership_rows = membership_rows(memberships),
    );
    layout("Betreuer", Some(username), &body)
}
