use crate::{
    api::{encode_segment, Employee, EmployeePayload, SaveRequest},
    utils::csv::build_csv,
};

/// Select value meaning "no department filter".
pub const ALL_DEPARTEMENTS: &str = "__all__";

pub type EmployeeSave = SaveRequest<EmployeePayload>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeForm {
    pub editing: Option<String>,
    pub employee_id: String,
    pub name: String,
    pub address: String,
    pub departement_id: String,
}

impl EmployeeForm {
    pub fn for_edit(employee: &Employee) -> Self {
        Self {
            editing: Some(employee.employee_id.clone()),
            employee_id: employee.employee_id.clone(),
            name: employee.name.clone(),
            address: employee.address.clone(),
            departement_id: employee.departement_id.clone(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.editing.is_some()
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit() {
            "Edit Employee"
        } else {
            "Add New Employee"
        }
    }

    pub fn description(&self) -> &'static str {
        if self.is_edit() {
            "Update employee information."
        } else {
            "Fill the form to add a new employee."
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_edit() {
            "Save Changes"
        } else {
            "Create Employee"
        }
    }

    /// Every field is required; the department id travels as a number.
    pub fn to_request(&self) -> Result<EmployeeSave, String> {
        let required = [
            (&self.employee_id, "Employee ID wajib diisi"),
            (&self.name, "Nama wajib diisi"),
            (&self.address, "Alamat wajib diisi"),
            (&self.departement_id, "Departement wajib dipilih"),
        ];
        if let Some((_, message)) = required.iter().find(|(value, _)| value.trim().is_empty()) {
            return Err((*message).to_string());
        }
        let departement_id = self
            .departement_id
            .trim()
            .parse::<i64>()
            .map_err(|_| "Departement tidak valid".to_string())?;
        let payload = EmployeePayload {
            employee_id: self.employee_id.trim().to_string(),
            name: self.name.trim().to_string(),
            address: self.address.trim().to_string(),
            departement_id,
        };
        Ok(match &self.editing {
            Some(id) => SaveRequest::Edit {
                id: id.clone(),
                payload,
            },
            None => SaveRequest::Add(payload),
        })
    }
}

pub fn detail_path(employee_id: &str) -> String {
    format!("/admin/employee/{}", encode_segment(employee_id))
}

pub fn departement_label(employee: &Employee) -> String {
    employee
        .departement_name
        .as_deref()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or("-")
        .to_string()
}

/// Exact department-name match; [`ALL_DEPARTEMENTS`] keeps every row.
pub fn filter_by_departement(rows: &[Employee], filter: &str) -> Vec<Employee> {
    if filter == ALL_DEPARTEMENTS {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|row| row.departement_name.as_deref() == Some(filter))
        .cloned()
        .collect()
}

pub fn save_message(edit: bool) -> &'static str {
    if edit {
        "Berhasil mengedit karyawan"
    } else {
        "Berhasil menambahkan karyawan"
    }
}

pub fn employees_csv(rows: &[Employee]) -> String {
    build_csv(
        &["ID", "Name", "Address", "Department"],
        rows.iter().map(|row| {
            vec![
                row.employee_id.clone(),
                row.name.clone(),
                row.address.clone(),
                departement_label(row),
            ]
        }),
    )
}
