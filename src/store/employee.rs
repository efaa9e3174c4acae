//! Employee model and in-memory store
//!
//! Records live in a `Vec` in insertion order and are found by linear
//! scan; ids come from a counter that only ever increments, so an id is
//! never reused even after its record is deleted.

use parking_lot::RwLock;
use serde::Serialize;
use serde_json::Value;

use crate::utils::AppError;
use crate::utils::validation::is_valid_email;

/// Employee record as stored and as serialized to the client
///
/// Inbound bodies never deserialize into this type; they arrive as raw
/// JSON and go through [`EmployeeDraft::from_json`] so the validation
/// pipeline owns every error message.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Assigned by the store, immutable after creation
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub position: String,
}

/// Validated, trimmed employee fields - everything but the id
#[derive(Debug, Clone)]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub position: String,
}

const REQUIRED_FIELDS: [&str; 4] = ["firstName", "lastName", "email", "position"];

impl EmployeeDraft {
    /// Validate a raw JSON body into a draft
    ///
    /// The checks run as an ordered pipeline so the reported reason is
    /// deterministic:
    ///
    /// 1. presence - every field exists, is non-null and (for strings)
    ///    non-empty after trimming
    /// 2. type - every field is a JSON string
    /// 3. email shape - minimal `local@domain.tld` check
    ///
    /// The body arrives as [`Value`] rather than a typed payload so that
    /// missing and wrong-type fields surface these messages instead of a
    /// serde rejection.
    pub fn from_json(body: &Value) -> Result<Self, AppError> {
        let missing = REQUIRED_FIELDS.iter().any(|field| match body.get(field) {
            None | Some(Value::Null) => true,
            Some(Value::String(s)) => s.trim().is_empty(),
            Some(_) => false,
        });
        if missing {
            return Err(AppError::validation(
                "All fields (firstName, lastName, email, position) are required.",
            ));
        }

        let non_string = REQUIRED_FIELDS
            .iter()
            .any(|field| !body.get(field).is_some_and(Value::is_string));
        if non_string {
            return Err(AppError::validation("All fields must be strings."));
        }

        let text = |field: &str| -> String {
            body.get(field)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .trim()
                .to_string()
        };

        let draft = Self {
            first_name: text("firstName"),
            last_name: text("lastName"),
            email: text("email"),
            position: text("position"),
        };

        if !is_valid_email(&draft.email) {
            return Err(AppError::validation("Invalid email format."));
        }

        Ok(draft)
    }
}

/// Store-level failures
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Employee with this email already exists.")]
    DuplicateEmail,

    #[error("Another employee with this email already exists.")]
    EmailTakenByOther,

    #[error("Employee not found.")]
    NotFound,
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::DuplicateEmail | StoreError::EmailTakenByOther => {
                AppError::conflict(e.to_string())
            }
            StoreError::NotFound => AppError::not_found(e.to_string()),
        }
    }
}

#[derive(Debug)]
struct StoreInner {
    records: Vec<Employee>,
    next_id: i64,
}

/// In-memory employee store
///
/// One `RwLock` covers both the record list and the id counter, so the
/// validate-duplicate-then-mutate sequence inside each operation is
/// atomic with respect to concurrent requests.
#[derive(Debug)]
pub struct EmployeeStore {
    inner: RwLock<StoreInner>,
}

impl EmployeeStore {
    /// Create an empty store; ids start at 1
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                records: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// All records, in insertion order
    pub fn list(&self) -> Vec<Employee> {
        self.inner.read().records.clone()
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.inner.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().records.is_empty()
    }

    /// Linear scan for a record by id
    pub fn get(&self, id: i64) -> Option<Employee> {
        self.inner
            .read()
            .records
            .iter()
            .find(|emp| emp.id == id)
            .cloned()
    }

    /// Append a new record, assigning the next counter value as its id
    ///
    /// Fails with [`StoreError::DuplicateEmail`] if any stored record
    /// already uses the draft's email.
    pub fn create(&self, draft: EmployeeDraft) -> Result<Employee, StoreError> {
        let mut inner = self.inner.write();

        if inner.records.iter().any(|emp| emp.email == draft.email) {
            return Err(StoreError::DuplicateEmail);
        }

        let employee = Employee {
            id: inner.next_id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            email: draft.email,
            position: draft.position,
        };
        inner.next_id += 1;
        inner.records.push(employee.clone());

        Ok(employee)
    }

    /// Replace all fields (never the id) on the record with the given id
    ///
    /// The uniqueness check excludes the record itself: a record may keep
    /// its own email but not take another's.
    pub fn update(&self, id: i64, draft: EmployeeDraft) -> Result<Employee, StoreError> {
        let mut inner = self.inner.write();

        let index = inner
            .records
            .iter()
            .position(|emp| emp.id == id)
            .ok_or(StoreError::NotFound)?;

        let taken = inner
            .records
            .iter()
            .any(|emp| emp.email == draft.email && emp.id != id);
        if taken {
            return Err(StoreError::EmailTakenByOther);
        }

        let record = &mut inner.records[index];
        record.first_name = draft.first_name;
        record.last_name = draft.last_name;
        record.email = draft.email;
        record.position = draft.position;

        Ok(record.clone())
    }

    /// Permanently remove the record with the given id
    pub fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut inner = self.inner.write();

        let index = inner
            .records
            .iter()
            .position(|emp| emp.id == id)
            .ok_or(StoreError::NotFound)?;

        inner.records.remove(index);
        Ok(())
    }
}

impl Default for EmployeeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft(first: &str, last: &str, email: &str, position: &str) -> EmployeeDraft {
        EmployeeDraft {
            first_name: first.into(),
            last_name: last.into(),
            email: email.into(),
            position: position.into(),
        }
    }

    #[test]
    fn create_assigns_increasing_ids() {
        let store = EmployeeStore::new();
        let a = store.create(draft("John", "Doe", "a@b.com", "Dev")).unwrap();
        let b = store.create(draft("Jane", "Roe", "c@d.com", "QA")).unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[test]
    fn ids_are_never_reused_after_delete() {
        let store = EmployeeStore::new();
        store.create(draft("A", "A", "a@a.com", "Dev")).unwrap();
        let b = store.create(draft("B", "B", "b@b.com", "Dev")).unwrap();
        store.delete(b.id).unwrap();
        let c = store.create(draft("C", "C", "c@c.com", "Dev")).unwrap();
        assert_eq!(c.id, 3);
    }

    #[test]
    fn duplicate_email_is_rejected_and_store_unchanged() {
        let store = EmployeeStore::new();
        store.create(draft("A", "A", "a@b.com", "Dev")).unwrap();
        let err = store
            .create(draft("B", "B", "a@b.com", "QA"))
            .unwrap_err();
        assert_eq!(err, StoreError::DuplicateEmail);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn update_may_keep_own_email_but_not_take_anothers() {
        let store = EmployeeStore::new();
        let a = store.create(draft("A", "A", "a@a.com", "Dev")).unwrap();
        let b = store.create(draft("B", "B", "b@b.com", "QA")).unwrap();

        // Self-exclusion: keeping its own email succeeds
        let updated = store
            .update(a.id, draft("A2", "A2", "a@a.com", "Lead"))
            .unwrap();
        assert_eq!(updated.id, a.id);
        assert_eq!(updated.first_name, "A2");

        // Taking b's email fails
        let err = store
            .update(a.id, draft("A2", "A2", "b@b.com", "Lead"))
            .unwrap_err();
        assert_eq!(err, StoreError::EmailTakenByOther);
        assert_eq!(store.get(b.id).unwrap().email, "b@b.com");
    }

    #[test]
    fn update_never_reassigns_the_id() {
        let store = EmployeeStore::new();
        let a = store.create(draft("A", "A", "a@a.com", "Dev")).unwrap();
        let updated = store
            .update(a.id, draft("X", "Y", "x@y.com", "Ops"))
            .unwrap();
        assert_eq!(updated.id, a.id);
    }

    #[test]
    fn update_and_delete_report_missing_records() {
        let store = EmployeeStore::new();
        assert_eq!(
            store.update(9999, draft("X", "Y", "x@y.com", "Ops")),
            Err(StoreError::NotFound)
        );
        assert_eq!(store.delete(9999), Err(StoreError::NotFound));
    }

    #[test]
    fn delete_removes_exactly_one_record() {
        let store = EmployeeStore::new();
        let a = store.create(draft("A", "A", "a@a.com", "Dev")).unwrap();
        let b = store.create(draft("B", "B", "b@b.com", "QA")).unwrap();
        store.delete(a.id).unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.get(a.id).is_none());
        assert!(store.get(b.id).is_some());
    }

    #[test]
    fn list_preserves_insertion_order() {
        let store = EmployeeStore::new();
        store.create(draft("A", "A", "a@a.com", "Dev")).unwrap();
        store.create(draft("B", "B", "b@b.com", "QA")).unwrap();
        store.create(draft("C", "C", "c@c.com", "Ops")).unwrap();
        let emails: Vec<String> = store.list().into_iter().map(|e| e.email).collect();
        assert_eq!(emails, vec!["a@a.com", "b@b.com", "c@c.com"]);
    }

    // ── Draft validation pipeline ───────────────────────────────────

    fn payload() -> Value {
        json!({
            "firstName": "John",
            "lastName": "Doe",
            "email": "john@example.com",
            "position": "Developer",
        })
    }

    #[test]
    fn draft_trims_all_fields() {
        let mut body = payload();
        body["firstName"] = json!("  John  ");
        body["email"] = json!(" john@example.com ");
        let draft = EmployeeDraft::from_json(&body).unwrap();
        assert_eq!(draft.first_name, "John");
        assert_eq!(draft.email, "john@example.com");
    }

    #[test]
    fn draft_rejects_missing_null_and_blank_fields() {
        for field in ["firstName", "lastName", "email", "position"] {
            for bad in [None, Some(json!(null)), Some(json!("")), Some(json!("   "))] {
                let mut body = payload();
                match bad {
                    None => {
                        body.as_object_mut().unwrap().remove(field);
                    }
                    Some(v) => body[field] = v,
                }
                let err = EmployeeDraft::from_json(&body).unwrap_err();
                assert_eq!(
                    err.to_string(),
                    "All fields (firstName, lastName, email, position) are required."
                );
            }
        }
    }

    #[test]
    fn draft_rejects_non_string_fields() {
        let mut body = payload();
        body["position"] = json!(42);
        let err = EmployeeDraft::from_json(&body).unwrap_err();
        assert_eq!(err.to_string(), "All fields must be strings.");
    }

    #[test]
    fn presence_is_checked_before_type() {
        // A null field and a numeric field together report the presence error
        let mut body = payload();
        body["firstName"] = json!(null);
        body["position"] = json!(42);
        let err = EmployeeDraft::from_json(&body).unwrap_err();
        assert_eq!(
            err.to_string(),
            "All fields (firstName, lastName, email, position) are required."
        );
    }

    #[test]
    fn draft_rejects_malformed_email() {
        let mut body = payload();
        body["email"] = json!("not-an-email");
        let err = EmployeeDraft::from_json(&body).unwrap_err();
        assert_eq!(err.to_string(), "Invalid email format.");
    }
}
