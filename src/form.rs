use crate::models::{LOG_FIELDS, LogEntry};
use crate::view::{Page, Tone};
use chrono::{Local, NaiveDate};
use std::collections::HashMap;

impl Page {
    pub fn fill_date_today(&mut self) {
        self.fill_date(Local::now().date_naive());
    }

    pub fn fill_date(&mut self, date: NaiveDate) {
        self.form
            .values
            .insert("log_date".to_string(), date.format("%Y-%m-%d").to_string());
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.form.disabled = is_loading;
        let message = if is_loading { "Submitting..." } else { "Idle" };
        self.set_status(message, Tone::Info);
    }

    pub fn apply_input(&mut self, input: &HashMap<String, String>) {
        for name in LOG_FIELDS {
            if let Some(value) = input.get(name) {
                self.form.values.insert(name.to_string(), value.clone());
            }
        }
    }

    pub fn collect_payload(&self) -> LogEntry {
        let mut entry = LogEntry::default();
        for name in LOG_FIELDS {
            let value = self.form.value(name).trim();
            if let Some(slot) = entry.field_mut(name) {
                *slot = (!value.is_empty()).then(|| value.to_string());
            }
        }
        entry
    }

    pub fn reset_form(&mut self) {
        self.reset_form_at(Local::now().date_naive());
    }

    pub fn reset_form_at(&mut self, today: NaiveDate) {
        self.clear_form();
        self.fill_date(today);
        self.clear_panels();
        self.set_status("Idle", Tone::Info);
    }

    /// Starts a submission and returns its ticket. Only the newest ticket may
    /// apply its response.
    pub(crate) fn begin_submission(&mut self) -> u64 {
        self.submission = self.submission.wrapping_add(1);
        self.submission
    }

    pub(crate) fn is_latest_submission(&self, ticket: u64) -> bool {
        self.submission == ticket
    }
}

#[cfg(test)]
mod tests {
    use crate::models::LogEntry;
    use crate::view::{PANEL_IDS, Page, Tone};
    use chrono::NaiveDate;
    use std::collections::HashMap;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()
    }

    fn input(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn collect_payload_trims_and_maps_empty_to_null() {
        let mut page = Page::new(day(), false);
        page.apply_input(&input(&[
            ("weight", "  71.5 "),
            ("activity", "   "),
            ("food_eaten", "oats\n"),
            ("unknown", "ignored"),
        ]));

        let payload = page.collect_payload();
        assert_eq!(
            payload,
            LogEntry {
                log_date: Some("2026-01-05".to_string()),
                weight: Some("71.5".to_string()),
                activity: None,
                hunger_level: None,
                food_eaten: Some("oats".to_string()),
                planned_workout: None,
            }
        );
        assert!(!page.form.values.contains_key("unknown"));
    }

    #[test]
    fn collect_payload_is_idempotent_on_canonical_values() {
        let mut page = Page::new(day(), false);
        page.apply_input(&input(&[("weight", " 70 "), ("hunger_level", "High ")]));
        let first = page.collect_payload();

        let mut canonical = HashMap::new();
        for name in crate::models::LOG_FIELDS {
            let mut copy = first.clone();
            let value = copy.field_mut(name).unwrap().take().unwrap_or_default();
            canonical.insert(name.to_string(), value);
        }
        let mut replay = Page::new(day(), false);
        replay.apply_input(&canonical);

        assert_eq!(replay.collect_payload(), first);
    }

    #[test]
    fn set_loading_toggles_controls_and_status() {
        let mut page = Page::new(day(), false);
        page.set_loading(true);
        assert!(page.form.disabled);
        assert_eq!(page.status.message, "Submitting...");

        page.set_loading(false);
        assert!(!page.form.disabled);
        assert_eq!(page.status.message, "Idle");
    }

    #[test]
    fn reset_restores_defaults_regardless_of_prior_content() {
        let mut page = Page::new(day(), true);
        page.apply_input(&input(&[("log_date", "2025-12-31"), ("weight", "80")]));
        page.render_response(&crate::models::CoachResponse {
            recommendation: Some("Eat".to_string()),
            ..Default::default()
        });
        page.render_logs(&[]);
        page.set_status("boom", Tone::Error);

        let later = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        page.reset_form_at(later);

        assert_eq!(page.form.value("log_date"), "2026-02-01");
        assert_eq!(page.form.value("weight"), "");
        for id in PANEL_IDS {
            let panel = page.panel(id).unwrap();
            assert_eq!(panel.text, "Awaiting input.");
            assert!(panel.placeholder);
        }
        assert_eq!(page.status.message, "Idle");
        assert_eq!(page.status.tone, Tone::Info);
        assert_eq!(
            page.logs.as_ref().unwrap().message.as_deref(),
            Some("No history yet.")
        );
    }

    #[test]
    fn fill_date_today_uses_iso_format() {
        let mut page = Page::new(day(), false);
        page.fill_date_today();
        let value = page.form.value("log_date");
        assert!(NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok());
    }

    #[test]
    fn newer_submission_supersedes_older_ticket() {
        let mut page = Page::new(day(), false);
        let first = page.begin_submission();
        let second = page.begin_submission();
        assert!(!page.is_latest_submission(first));
        assert!(page.is_latest_submission(second));
    }
}
