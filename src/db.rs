use crate::model::{
    document::Document,
    employee::{Employee, NewEmployee},
    leave_request::{Decision, LeaveFilter, LeaveRequest, LeaveRequestWithDecision, NewLeaveRequest},
};
use actix_web::web::Data;
use derive_more::Display;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, info};

#[derive(Debug, Display)]
pub enum StorageError {
    #[display(fmt = "Employee {} does not exist", _0)]
    EmployeeNotFound(u64),

    #[display(fmt = "Leave request {} does not exist", _0)]
    LeaveRequestNotFound(u64),

    #[display(fmt = "Invalid data file {}: {}", path, reason)]
    Corrupt { path: String, reason: String },

    #[display(fmt = "Failed to access data file {}: {}", path, source)]
    Io { path: String, source: io::Error },

    #[display(fmt = "No {} ids left to assign", _0)]
    IdsExhausted(&'static str),
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// JSON-file backed store: an in-memory [`Document`] rewritten in full after
/// every mutation.
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    doc: Document,
}

/// The store as shared between actix workers.
pub type SharedStore = Data<Mutex<Store>>;

pub fn init_store(path: impl Into<PathBuf>) -> Result<SharedStore, StorageError> {
    let store = Store::open(path)?;
    info!(
        path = %store.path().display(),
        employees = store.document().employees.len(),
        leave_requests = store.document().leave_requests.len(),
        "Store loaded"
    );
    Ok(Data::new(Mutex::new(store)))
}

impl Store {
    /// Loads `path` if it exists, otherwise starts from an empty document.
    /// Nothing is written until the first mutation.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();

        let doc = match fs::read_to_string(&path) {
            Ok(content) => {
                let doc: Document =
                    serde_json::from_str(&content).map_err(|e| StorageError::Corrupt {
                        path: path.display().to_string(),
                        reason: e.to_string(),
                    })?;
                doc.check_ids().map_err(|reason| StorageError::Corrupt {
                    path: path.display().to_string(),
                    reason,
                })?;
                doc
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No data file, starting empty");
                Document::default()
            }
            Err(source) => {
                return Err(StorageError::Io {
                    path: path.display().to_string(),
                    source,
                });
            }
        };

        Ok(Self { path, doc })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Writes `doc` to disk and only then makes it the in-memory state, so a
    /// failed write leaves the store as it was.
    fn commit(&mut self, doc: Document) -> Result<(), StorageError> {
        let io_error = |source: io::Error| StorageError::Io {
            path: self.path.display().to_string(),
            source,
        };

        let content = serde_json::to_string_pretty(&doc).map_err(|e| io_error(e.into()))?;
        fs::write(&self.path, content).map_err(io_error)?;

        self.doc = doc;
        Ok(())
    }

    /* =========================
    Employees
    ========================= */

    pub fn create_employee(&mut self, input: NewEmployee) -> Result<Employee, StorageError> {
        let id = self.doc.next_employee_id;
        let next_id = id
            .checked_add(1)
            .ok_or(StorageError::IdsExhausted("employee"))?;
        let employee = Employee::from_new(id, input);

        let mut doc = self.doc.clone();
        doc.employees.push(employee.clone());
        doc.next_employee_id = next_id;
        self.commit(doc)?;

        Ok(employee)
    }

    pub fn list_employees(&self) -> &[Employee] {
        &self.doc.employees
    }

    pub fn get_employee(&self, id: u64) -> Option<&Employee> {
        self.doc.employees.iter().find(|e| e.id == id)
    }

    /* =========================
    Leave requests
    ========================= */

    pub fn create_leave_request(
        &mut self,
        input: NewLeaveRequest,
    ) -> Result<LeaveRequest, StorageError> {
        if self.get_employee(input.employee_id).is_none() {
            return Err(StorageError::EmployeeNotFound(input.employee_id));
        }

        let id = self.doc.next_leave_request_id;
        let next_id = id
            .checked_add(1)
            .ok_or(StorageError::IdsExhausted("leave request"))?;
        let record = LeaveRequestWithDecision::submitted(id, input);
        let created = LeaveRequest::from(&record);

        let mut doc = self.doc.clone();
        doc.leave_requests.push(record);
        doc.next_leave_request_id = next_id;
        self.commit(doc)?;

        Ok(created)
    }

    pub fn list_leave_requests(&self, filter: &LeaveFilter) -> Vec<LeaveRequestWithDecision> {
        self.doc
            .leave_requests
            .iter()
            .filter(|r| r.matches(filter))
            .cloned()
            .collect()
    }

    pub fn get_leave_request(&self, id: u64) -> Option<&LeaveRequestWithDecision> {
        self.doc.leave_requests.iter().find(|r| r.id == id)
    }

    pub fn apply_decision(
        &mut self,
        id: u64,
        decision: Decision,
    ) -> Result<LeaveRequestWithDecision, StorageError> {
        let mut doc = self.doc.clone();
        let record = doc
            .leave_requests
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StorageError::LeaveRequestNotFound(id))?;

        record.apply(decision);
        let updated = record.clone();
        self.commit(doc)?;

        Ok(updated)
    }
}
