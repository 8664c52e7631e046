use crate::{
    api::{Departement, DepartementPayload, SaveRequest},
    utils::{csv::build_csv, status::parse_deadline},
};

pub const DEFAULT_CLOCK_IN: &str = "08:00";
pub const DEFAULT_CLOCK_OUT: &str = "17:00";

pub type DepartementSave = SaveRequest<DepartementPayload, DepartementPayload, i64>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartementForm {
    pub editing: Option<i64>,
    pub departement_name: String,
    pub max_clock_in_time: String,
    pub max_clock_out_time: String,
}

impl Default for DepartementForm {
    fn default() -> Self {
        Self {
            editing: None,
            departement_name: String::new(),
            max_clock_in_time: DEFAULT_CLOCK_IN.into(),
            max_clock_out_time: DEFAULT_CLOCK_OUT.into(),
        }
    }
}

/// `HH:MM` view of a stored deadline such as `08:00:00`.
pub fn short_time(raw: &str) -> String {
    parse_deadline(raw)
        .map(|time| time.format("%H:%M").to_string())
        .unwrap_or_else(|_| raw.trim().to_string())
}

fn normalize_deadline(raw: &str, field: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    let well_formed = trimmed.len() == 5 && trimmed.as_bytes()[2] == b':';
    match parse_deadline(trimmed) {
        Ok(time) if well_formed => Ok(time.format("%H:%M").to_string()),
        _ => Err(format!("{field} harus berformat HH:MM")),
    }
}

impl DepartementForm {
    pub fn for_edit(departement: &Departement) -> Self {
        Self {
            editing: Some(departement.id),
            departement_name: departement.departement_name.clone(),
            max_clock_in_time: short_time(&departement.max_clock_in_time),
            max_clock_out_time: short_time(&departement.max_clock_out_time),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.editing.is_some()
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit() {
            "Edit Departement"
        } else {
            "Add Departement"
        }
    }

    pub fn description(&self) -> &'static str {
        if self.is_edit() {
            "Update the departement's details."
        } else {
            "Fill out to create a new departement."
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_edit() {
            "Save"
        } else {
            "Create"
        }
    }

    pub fn to_request(&self) -> Result<DepartementSave, String> {
        let departement_name = self.departement_name.trim();
        if departement_name.is_empty() {
            return Err("Nama departement wajib diisi".into());
        }
        let payload = DepartementPayload {
            departement_name: departement_name.to_string(),
            max_clock_in_time: normalize_deadline(&self.max_clock_in_time, "Max Clock In Time")?,
            max_clock_out_time: normalize_deadline(&self.max_clock_out_time, "Max Clock Out Time")?,
        };
        Ok(match self.editing {
            Some(id) => SaveRequest::Edit { id, payload },
            None => SaveRequest::Add(payload),
        })
    }
}

pub fn departements_csv(rows: &[Departement]) -> String {
    build_csv(
        &["Departement Name", "Max Clock In Time", "Max Clock Out Time"],
        rows.iter().map(|row| {
            vec![
                row.departement_name.clone(),
                row.max_clock_in_time.clone(),
                row.max_clock_out_time.clone(),
            ]
        }),
    )
}
