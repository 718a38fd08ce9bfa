use crate::{EmployeeRecord, EmployeeStore, MemberRecord, Presence, Role};

pub fn employee(id: &str, name: &str, attendance: u32) -> EmployeeRecord {
    EmployeeRecord {
        id: id.to_string(),
        name: name.to_string(),
        position: "Engineer".to_string(),
        role: Role::User,
        email: format!("{}@example.com", id),
        attendance,
        active: false,
    }
}

/// The five join requests the portal ships with
pub fn seed_employees() -> Vec<EmployeeRecord> {
    let rows = [
        ("1", "Jane Cooper", "Product Designer", Role::Manager, "jane@microsoft.com", 12),
        ("2", "Floyd Miles", "Software Engineer", Role::User, "floyd@yahoo.com", 4),
        ("3", "Ronald Richards", "HR Specialist", Role::Admin, "ronald@adobe.com", 21),
        ("4", "Marvin McKinney", "Data Analyst", Role::User, "marvin@tesla.com", 9),
        ("5", "Jerome Bell", "Marketing Lead", Role::Manager, "jerome@google.com", 16),
    ];

    rows.into_iter()
        .map(|(id, name, position, role, email, attendance)| EmployeeRecord {
            id: id.to_string(),
            name: name.to_string(),
            position: position.to_string(),
            role,
            email: email.to_string(),
            attendance,
            active: false,
        })
        .collect()
}

pub fn seed_store() -> EmployeeStore {
    EmployeeStore::new(seed_employees())
}

pub fn seed_members() -> Vec<MemberRecord> {
    let rows = [
        (1, "Aneesh Menon", Presence::Online),
        (2, "Jane Cooper", Presence::Offline),
        (3, "Floyd Miles", Presence::Online),
        (4, "Ronald Richards", Presence::Offline),
    ];

    rows.into_iter()
        .map(|(id, name, status)| MemberRecord {
            id,
            name: name.to_string(),
            status,
        })
        .collect()
}

/// `count` employees with ids "1".."count" and strictly increasing attendance
pub fn numbered_employees(count: usize) -> Vec<EmployeeRecord> {
    (1..=count)
        .map(|i| employee(&i.to_string(), &format!("Employee {}", i), i as u32))
        .collect()
}
