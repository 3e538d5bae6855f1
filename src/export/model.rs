use serde::Serialize;

/// Flat record shape shared by the CSV and JSON exports.
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    pub id: i64,
    pub user_id: String,
    pub date: String,
    pub hours: f64,
    pub kind: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub note: Option<String>,
    pub submitted: bool,
    pub confirmed_at: Option<String>,
}

pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "id",
        "user_id",
        "date",
        "hours",
        "kind",
        "start_time",
        "end_time",
        "note",
        "submitted",
        "confirmed_at",
    ]
}

pub(crate) fn entry_to_row(e: &EntryExport) -> Vec<String> {
    vec![
        e.id.to_string(),
        e.user_id.clone(),
        e.date.clone(),
        format!("{:.2}", e.hours),
        e.kind.clone(),
        e.start_time.clone().unwrap_or_default(),
        e.end_time.clone().unwrap_or_default(),
        e.note.clone().unwrap_or_default(),
        e.submitted.to_string(),
        e.confirmed_at.clone().unwrap_or_default(),
    ]
}
