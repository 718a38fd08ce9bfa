mod join_requests;

pub use join_requests::JoinRequests;
