use serde::Serialize;

/// A space opened for a time window.
///
/// `start`, `end` and `created_at` are stored as civil-timestamp text in
/// KST. They stay as text on the model because rows written by older
/// versions may carry forms the canonical formatter no longer emits; the
/// active-window filter re-parses them on every read.
#[derive(Debug, Clone, Serialize)]
pub struct OpenEvent {
    pub id: String,             // ⇔ events.id (TEXT, uuid hex)
    pub title: String,          // ⇔ events.title (truncated at creation)
    pub photo: String,          // ⇔ events.photo (encoded blob, '' = none)
    pub start: String,          // ⇔ events.start (TEXT "YYYY-MM-DD HH:MM")
    pub end: String,            // ⇔ events."end"
    pub address: String,        // ⇔ events.address
    pub address_detail: String, // ⇔ events.address_detail (may be '')
    pub lat: f64,               // ⇔ events.lat
    pub lng: f64,               // ⇔ events.lng
    pub capacity_enabled: bool, // ⇔ events.capacity_enabled (INT 0/1)
    pub capacity_max: Option<i32>, // ⇔ events.capacity_max (NULL when unlimited)
    pub hidden: bool,           // ⇔ events.hidden (INT 0/1, soft delete)
    pub created_at: String,     // ⇔ events.created_at (TEXT, ordering key)
}

impl OpenEvent {
    pub fn has_photo(&self) -> bool {
        !self.photo.is_empty()
    }
}
