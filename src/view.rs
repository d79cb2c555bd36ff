use crate::models::LOG_FIELDS;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

pub mod ids {
    pub const STATUS: &str = "status";
    pub const FORM: &str = "daily-form";
    pub const SUBMIT_BTN: &str = "submit-btn";
    pub const RESET_BTN: &str = "reset-btn";
    pub const PROFILE_DETAILS: &str = "profile-details";
    pub const LOGS_LIST: &str = "logs-list";
    pub const REFRESH_PROFILE: &str = "refresh-profile";
    pub const REFRESH_LOGS: &str = "refresh-logs";
}

pub const PANEL_IDS: [&str; 4] = ["recommendation", "reasoning", "calorie_estimate", "next_steps"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Info,
    Error,
}

impl Tone {
    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Info => "info",
            Tone::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Status {
    pub message: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Panel {
    pub text: String,
    pub placeholder: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormState {
    pub values: BTreeMap<String, String>,
    pub disabled: bool,
}

impl FormState {
    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileRow {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileView {
    pub rows: Vec<ProfileRow>,
    pub placeholder: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRow {
    pub label: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogsView {
    pub message: Option<String>,
    pub rows: Vec<LogRow>,
    pub placeholder: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub status: Status,
    pub form: FormState,
    pub panels: BTreeMap<String, Panel>,
    /// `None` when the profile and history views are not part of the page.
    pub profile: Option<ProfileView>,
    pub logs: Option<LogsView>,
    #[serde(skip)]
    pub(crate) submission: u64,
}

impl Page {
    pub fn new(today: NaiveDate, history: bool) -> Self {
        let mut page = Self {
            status: Status::default(),
            form: FormState::default(),
            panels: BTreeMap::new(),
            profile: history.then(|| ProfileView {
                rows: Vec::new(),
                placeholder: true,
            }),
            logs: history.then(|| LogsView {
                message: None,
                rows: Vec::new(),
                placeholder: true,
            }),
            submission: 0,
        };
        page.clear_form();
        page.fill_date(today);
        page.clear_panels();
        page.set_status("Idle", Tone::Info);
        page
    }

    pub fn panel(&self, id: &str) -> Option<&Panel> {
        self.panels.get(id)
    }

    pub fn has_history(&self) -> bool {
        self.profile.is_some()
    }

    pub(crate) fn clear_form(&mut self) {
        self.form.values = LOG_FIELDS
            .iter()
            .map(|name| (name.to_string(), String::new()))
            .collect();
    }
}
