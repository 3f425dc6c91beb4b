use serde::Serialize;

/// A remembered activity name, keyed by its trimmed text.
#[derive(Debug, Clone, Serialize)]
pub struct Favorite {
    pub activity: String,   // ⇔ favs.activity (TEXT PRIMARY KEY)
    pub created_at: String, // ⇔ favs.created_at (TEXT, ordering key)
}
