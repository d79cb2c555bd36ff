use crate::models::{PROFILE_FIELDS, Profile};
use crate::view::{Page, ProfileRow, ProfileView};

const MISSING: &str = "—";
const UNAVAILABLE: &str = "Could not load profile.";

impl Page {
    pub fn render_profile(&mut self, profile: &Profile) {
        let rows = PROFILE_FIELDS
            .iter()
            .map(|(key, label)| ProfileRow {
                label: label.to_string(),
                value: profile.text(key).unwrap_or_else(|| MISSING.to_string()),
            })
            .collect();
        self.profile = Some(ProfileView {
            rows,
            placeholder: false,
        });
    }

    pub fn render_profile_unavailable(&mut self) {
        self.profile = Some(ProfileView {
            rows: vec![ProfileRow {
                label: UNAVAILABLE.to_string(),
                value: String::new(),
            }],
            placeholder: true,
        });
    }
}
