use crate::utils::validation::{ValidationError, non_blank};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "name": "Ann",
        "department": "Engineering"
    })
)]
pub struct Employee {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = "Ann")]
    pub name: String,

    #[schema(example = "Engineering", nullable = true)]
    pub department: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateEmployee {
    #[schema(example = "Ann")]
    pub name: String,
    #[schema(example = "Engineering", nullable = true)]
    #[serde(default)]
    pub department: Option<String>,
}

/// A validated employee payload, ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub name: String,
    pub department: Option<String>,
}

impl CreateEmployee {
    pub fn validate(self) -> Result<NewEmployee, ValidationError> {
        let mut errors = ValidationError::default();

        let name = errors.check(
            "name",
            non_blank(&self.name, "Employee name cannot be empty"),
        );

        match name {
            Some(name) if errors.is_empty() => Ok(NewEmployee {
                name,
                department: self.department,
            }),
            _ => Err(errors),
        }
    }
}

impl Employee {
    pub fn from_new(id: u64, new: NewEmployee) -> Self {
        Self {
            id,
            name: new.name,
            department: new.department,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_stored_trimmed() {
        let new = CreateEmployee {
            name: "  Ann ".to_string(),
            department: Some("Ops".to_string()),
        }
        .validate()
        .unwrap();

        assert_eq!(new.name, "Ann");
        assert_eq!(new.department.as_deref(), Some("Ops"));
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = CreateEmployee {
            name: "   ".to_string(),
            department: None,
        }
        .validate()
        .unwrap_err();

        assert!(err.has_field("name"));
        assert_eq!(err.errors[0].message, "Employee name cannot be empty");
    }

    #[test]
    fn missing_department_serializes_as_null() {
        let employee = Employee::from_new(
            1,
            NewEmployee {
                name: "Ann".to_string(),
                department: None,
            },
        );
        let value = serde_json::to_value(&employee).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": 1, "name": "Ann", "department": null})
        );
    }
}
