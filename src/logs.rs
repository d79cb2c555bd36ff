use crate::models::LogSummary;
use crate::view::{LogRow, LogsView, Page};

const EMPTY: &str = "No history yet.";
const UNAVAILABLE: &str = "Could not load logs.";

impl Page {
    pub fn render_logs(&mut self, logs: &[LogSummary]) {
        if logs.is_empty() {
            self.logs = Some(LogsView {
                message: Some(EMPTY.to_string()),
                rows: Vec::new(),
                placeholder: false,
            });
            return;
        }

        let rows = logs
            .iter()
            .map(|entry| LogRow {
                label: match &entry.log_id {
                    Some(id) => format!("Entry #{id}"),
                    None => "Entry".to_string(),
                },
                summary: entry
                    .recommendation
                    .clone()
                    .unwrap_or_else(|| "Recommendation unavailable".to_string()),
            })
            .collect();
        self.logs = Some(LogsView {
            message: None,
            rows,
            placeholder: false,
        });
    }

    pub fn render_logs_unavailable(&mut self) {
        self.logs = Some(LogsView {
            message: Some(UNAVAILABLE.to_string()),
            rows: Vec::new(),
            placeholder: true,
        });
    }
}
