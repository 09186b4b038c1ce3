//! Validation for team, game, schedule, and staff form input.

use crate::error::CoreError;
use crate::todos::parse_timestamp;
use crate::types::{DbId, Timestamp};

/// Longest accepted team or trainer name, matching the column width.
pub const MAX_NAME_LENGTH: usize = 100;

/// Upper bound on goals per side; anything higher is a typo.
pub const MAX_GOALS: i32 = 999;

/// Longest accepted group label or staff role.
pub const MAX_LABEL_LENGTH: usize = 50;

/// Highest matchday a fixture can be scheduled on.
pub const MAX_MATCHDAY: i32 = 99;

/// Trim and check a team name.
pub fn validate_team_name(raw: &str) -> Result<String, CoreError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(CoreError::Validation("Der Teamname darf nicht leer sein.".into()));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Der Teamname darf höchstens {MAX_NAME_LENGTH} Zeichen lang sein."
        )));
    }
    Ok(name.to_string())
}

/// Trim an optional trainer name; blank input means no trainer.
pub fn normalize_trainer(raw: Option<&str>) -> Result<Option<String>, CoreError> {
    let Some(trainer) = raw.map(str::trim).filter(|t| !t.is_empty()) else {
        return Ok(None);
    };
    if trainer.chars().count() > MAX_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Der Trainername darf höchstens {MAX_NAME_LENGTH} Zeichen lang sein."
        )));
    }
    Ok(Some(trainer.to_string()))
}

/// Trim an optional group label; blank input leaves the team ungrouped.
pub fn normalize_group(raw: Option<&str>) -> Result<Option<String>, CoreError> {
    optional_label(raw, "Die Gruppe")
}

/// Trim and check a staff member's name.
pub fn validate_staff_name(raw: &str) -> Result<String, CoreError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(CoreError::Validation("Der Name darf nicht leer sein.".into()));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Der Name darf höchstens {MAX_NAME_LENGTH} Zeichen lang sein."
        )));
    }
    Ok(name.to_string())
}

/// Trim an optional staff role such as "Betreuer".
pub fn normalize_role(raw: Option<&str>) -> Result<Option<String>, CoreError> {
    optional_label(raw, "Die Funktion")
}

fn optional_label(raw: Option<&str>, what: &str) -> Result<Option<String>, CoreError> {
    let Some(label) = raw.map(str::trim).filter(|l| !l.is_empty()) else {
        return Ok(None);
    };
    if label.chars().count() > MAX_LABEL_LENGTH {
        return Err(CoreError::Validation(format!(
            "{what} darf höchstens {MAX_LABEL_LENGTH} Zeichen lang sein."
        )));
    }
    Ok(Some(label.to_string()))
}

/// Parse the matchday a fixture is scheduled on.
pub fn parse_matchday(raw: &str) -> Result<i32, CoreError> {
    match raw.trim().parse::<i32>() {
        Ok(day) if (1..=MAX_MATCHDAY).contains(&day) => Ok(day),
        _ => Err(CoreError::Validation(format!(
            "Der Spieltag muss eine Zahl zwischen 1 und {MAX_MATCHDAY} sein."
        ))),
    }
}

/// Parse an optional kickoff time. Blank input means not yet fixed.
pub fn parse_kickoff(raw: Option<&str>) -> Result<Option<Timestamp>, CoreError> {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return Ok(None);
    };
    parse_timestamp(raw)
        .map(Some)
        .ok_or_else(|| CoreError::Validation("Ungültige Anstoßzeit.".into()))
}

/// Parse a goal count from form input. Blank input counts as zero.
pub fn parse_goals(raw: &str) -> Result<i32, CoreError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }
    match raw.parse::<i32>() {
        Ok(goals) if (0..=MAX_GOALS).contains(&goals) => Ok(goals),
        _ => Err(CoreError::Validation(format!(
            "Tore müssen eine Zahl zwischen 0 und {MAX_GOALS} sein."
        ))),
    }
}

/// Parse a team id selected in a form.
pub fn parse_team_id(raw: &str) -> Result<DbId, CoreError> {
    parse_selected_id(raw).ok_or_else(|| CoreError::Validation("Bitte ein Team auswählen.".into()))
}

/// Parse a staff member id selected in a form.
pub fn parse_staff_id(raw: &str) -> Result<DbId, CoreError> {
    parse_selected_id(raw)
        .ok_or_else(|| CoreError::Validation("Bitte eine Person auswählen.".into()))
}

fn parse_selected_id(raw: &str) -> Option<DbId> {
    raw.trim().parse::<DbId>().ok().filter(|id| *id > 0)
}

/// A team cannot play against itself.
pub fn validate_pairing(home_team_id: DbId, away_team_id: DbId) -> Result<(), CoreError> {
    if home_team_id == away_team_id {
        return Err(CoreError::Validation(
            "Heim- und Auswärtsteam müssen verschieden sein.".into(),
        ));
    }
    Ok(())
}
