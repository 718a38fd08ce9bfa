use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{EmployeeRecord, EmployeeStore, MemberRecord};

/// Initial records for the join-request screen
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub employees: Vec<EmployeeRecord>,
    #[serde(default)]
    pub members: Vec<MemberRecord>,
}

#[derive(Debug, Clone)]
pub enum SeedError {
    Parse(String),
    EmptyEmployeeId,
    DuplicateEmployeeId(String),
    DuplicateMemberId(u32),
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedError::Parse(message) => write!(f, "Invalid seed data: {}", message),
            SeedError::EmptyEmployeeId => write!(f, "Employee id must not be empty"),
            SeedError::DuplicateEmployeeId(id) => write!(f, "Duplicate employee id: {}", id),
            SeedError::DuplicateMemberId(id) => write!(f, "Duplicate member id: {}", id),
        }
    }
}

impl std::error::Error for SeedError {}

impl SeedData {
    /// Parse and validate seed data from JSON
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        let seed: SeedData =
            serde_json::from_str(json).map_err(|e| SeedError::Parse(e.to_string()))?;
        seed.validate()?;
        Ok(seed)
    }

    pub fn validate(&self) -> Result<(), SeedError> {
        let mut seen = HashSet::with_capacity(self.employees.len());
        for employee in &self.employees {
            if employee.id.trim().is_empty() {
                return Err(SeedError::EmptyEmployeeId);
            }
            if !seen.insert(employee.id.as_str()) {
                return Err(SeedError::DuplicateEmployeeId(employee.id.clone()));
            }
        }

        let mut seen = HashSet::with_capacity(self.members.len());
        for member in &self.members {
            if !seen.insert(member.id) {
                return Err(SeedError::DuplicateMemberId(member.id));
            }
        }
        Ok(())
    }

    pub fn employee_store(&self) -> EmployeeStore {
        EmployeeStore::new(self.employees.clone())
    }
}
