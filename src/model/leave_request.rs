use crate::utils::validation::{MAX_TEXT_LEN, ValidationError, date_order, max_chars, min_id};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use utoipa::{IntoParams, ToSchema};

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    ToSchema,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LeaveStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    /// Only terminal statuses can be the outcome of a decision.
    pub fn is_terminal(&self) -> bool {
        matches!(self, LeaveStatus::Approved | LeaveStatus::Rejected)
    }
}

#[derive(Deserialize, Serialize, ToSchema)]
pub struct CreateLeave {
    #[schema(example = 1)]
    pub employee_id: u64,
    #[schema(example = "2024-01-10", format = "date", value_type = String)]
    pub start_date: NaiveDate,
    #[schema(example = "2024-01-12", format = "date", value_type = String)]
    pub end_date: NaiveDate,
    #[schema(example = "Family trip", nullable = true)]
    #[serde(default)]
    pub reason: Option<String>,
}

/// A leave request as returned right after submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LeaveRequest {
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = 1)]
    pub employee_id: u64,
    #[schema(example = "2024-01-10", format = "date", value_type = String)]
    pub start_date: NaiveDate,
    #[schema(example = "2024-01-12", format = "date", value_type = String)]
    pub end_date: NaiveDate,
    #[schema(example = "Family trip", nullable = true)]
    pub reason: Option<String>,
    pub status: LeaveStatus,
}

/// The stored form of a leave request, including the outcome of any decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "id": 1,
    "employee_id": 1,
    "start_date": "2024-01-10",
    "end_date": "2024-01-12",
    "reason": null,
    "status": "approved",
    "reviewer": "Bob",
    "comment": null
}))]
pub struct LeaveRequestWithDecision {
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = 1)]
    pub employee_id: u64,
    #[schema(example = "2024-01-10", format = "date", value_type = String)]
    pub start_date: NaiveDate,
    #[schema(example = "2024-01-12", format = "date", value_type = String)]
    pub end_date: NaiveDate,
    #[schema(nullable = true)]
    pub reason: Option<String>,
    pub status: LeaveStatus,
    #[schema(example = "Bob", nullable = true)]
    pub reviewer: Option<String>,
    #[schema(nullable = true)]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLeaveRequest {
    pub employee_id: u64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: Option<String>,
}

#[derive(Deserialize, Serialize, ToSchema)]
pub struct LeaveDecision {
    #[schema(example = "approved")]
    pub status: LeaveStatus,
    #[schema(example = "Bob")]
    pub reviewer: String,
    #[schema(example = "Enjoy your trip", nullable = true)]
    #[serde(default)]
    pub comment: Option<String>,
}

/// A validated decision; `status` is always terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub status: LeaveStatus,
    pub reviewer: String,
    pub comment: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct LeaveFilter {
    #[schema(example = 1)]
    /// Filter by employee identifier
    pub employee_id: Option<u64>,
    /// Filter by leave status
    pub status: Option<LeaveStatus>,
}

impl CreateLeave {
    pub fn validate(self) -> Result<NewLeaveRequest, ValidationError> {
        let mut errors = ValidationError::default();

        errors.check("employee_id", min_id("employee_id", self.employee_id, 1));
        errors.check("end_date", date_order(self.start_date, self.end_date));
        errors.check(
            "reason",
            max_chars("reason", self.reason.as_deref(), MAX_TEXT_LEN),
        );

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewLeaveRequest {
            employee_id: self.employee_id,
            start_date: self.start_date,
            end_date: self.end_date,
            reason: self.reason,
        })
    }
}

impl LeaveDecision {
    pub fn validate(self) -> Result<Decision, ValidationError> {
        let mut errors = ValidationError::default();

        if !self.status.is_terminal() {
            errors.push(
                "status",
                "Decision status must be either approved or rejected",
            );
        }
        errors.check(
            "comment",
            max_chars("comment", self.comment.as_deref(), MAX_TEXT_LEN),
        );

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Decision {
            status: self.status,
            reviewer: self.reviewer,
            comment: self.comment,
        })
    }
}

impl LeaveRequestWithDecision {
    /// A freshly submitted request: pending, with no reviewer or comment.
    pub fn submitted(id: u64, new: NewLeaveRequest) -> Self {
        Self {
            id,
            employee_id: new.employee_id,
            start_date: new.start_date,
            end_date: new.end_date,
            reason: new.reason,
            status: LeaveStatus::Pending,
            reviewer: None,
            comment: None,
        }
    }

    pub fn apply(&mut self, decision: Decision) {
        self.status = decision.status;
        self.reviewer = Some(decision.reviewer);
        self.comment = decision.comment;
    }

    pub fn matches(&self, filter: &LeaveFilter) -> bool {
        filter.employee_id.is_none_or(|id| self.employee_id == id)
            && filter.status.is_none_or(|status| self.status == status)
    }
}

impl From<&LeaveRequestWithDecision> for LeaveRequest {
    fn from(record: &LeaveRequestWithDecision) -> Self {
        Self {
            id: record.id,
            employee_id: record.employee_id,
            start_date: record.start_date,
            end_date: record.end_date,
            reason: record.reason.clone(),
            status: record.status,
        }
    }
}
