use crate::model::{employee::Employee, leave_request::LeaveRequestWithDecision};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The whole datastore, serialized verbatim to the backing file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub employees: Vec<Employee>,
    pub leave_requests: Vec<LeaveRequestWithDecision>,
    pub next_employee_id: u64,
    pub next_leave_request_id: u64,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            employees: Vec::new(),
            leave_requests: Vec::new(),
            next_employee_id: 1,
            next_leave_request_id: 1,
        }
    }
}

impl Document {
    /// Checks that ids are unique and that neither counter can hand out an id
    /// already in use or run past `u64::MAX`.
    pub fn check_ids(&self) -> Result<(), String> {
        check_sequence(
            "employee",
            self.employees.iter().map(|e| e.id),
            self.next_employee_id,
        )?;
        check_sequence(
            "leave request",
            self.leave_requests.iter().map(|r| r.id),
            self.next_leave_request_id,
        )
    }
}

fn check_sequence(kind: &str, ids: impl Iterator<Item = u64>, next: u64) -> Result<(), String> {
    if next == 0 || next == u64::MAX {
        return Err(format!("{} id counter {} is out of range", kind, next));
    }

    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(format!("duplicate {} id {}", kind, id));
        }
        if id >= next {
            return Err(format!(
                "{} id counter {} does not exceed stored id {}",
                kind, next, id
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_starts_counters_at_one() {
        let doc = Document::default();
        assert_eq!(
            serde_json::to_value(&doc).unwrap(),
            serde_json::json!({
                "employees": [],
                "leave_requests": [],
                "next_employee_id": 1,
                "next_leave_request_id": 1
            })
        );
        assert!(doc.check_ids().is_ok());
    }

    #[test]
    fn stale_counter_is_reported() {
        let mut doc = Document::default();
        doc.employees.push(Employee {
            id: 4,
            name: "Ann".to_string(),
            department: None,
        });
        doc.next_employee_id = 4;
        assert!(doc.check_ids().is_err());

        doc.next_employee_id = 5;
        assert!(doc.check_ids().is_ok());
    }

    #[test]
    fn duplicate_ids_are_reported() {
        let ann = |id| Employee {
            id,
            name: "Ann".to_string(),
            department: None,
        };
        let doc = Document {
            employees: vec![ann(1), ann(1)],
            next_employee_id: 2,
            ..Document::default()
        };
        assert_eq!(doc.check_ids().unwrap_err(), "duplicate employee id 1");
    }

    #[test]
    fn saturated_counter_is_reported() {
        let doc = Document {
            next_leave_request_id: u64::MAX,
            ..Document::default()
        };
        assert!(doc.check_ids().is_err());
    }

    #[test]
    fn missing_keys_do_not_parse() {
        let result = serde_json::from_str::<Document>(r#"{"employees": []}"#);
        assert!(result.is_err());
    }
}
