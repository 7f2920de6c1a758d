/// Text channel subscribed to periodic availability broadcasts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationChannel {
    /// Discord text channel ID, kept as an opaque string.
    pub id: String,
    /// Channel name at the time it was subscribed.
    pub name: String,
}

impl NotificationChannel {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
