//! Object identifier generation

use shared::ObjectId;

/// Generate a new object identifier, unique for the lifetime of the process
pub fn new_id() -> ObjectId {
    uuid::Uuid::new_v4().to_string()
}
