use crate::models::CoachResponse;
use crate::view::{PANEL_IDS, Page, Panel};

const AWAITING: &str = "Awaiting input.";
const NO_DATA: &str = "No data";

impl Page {
    pub fn clear_panels(&mut self) {
        for id in PANEL_IDS {
            self.panels.insert(
                id.to_string(),
                Panel {
                    text: AWAITING.to_string(),
                    placeholder: true,
                },
            );
        }
    }

    pub fn render_response(&mut self, data: &CoachResponse) {
        for (id, value) in data.panel_values() {
            let text = value.filter(|text| !text.is_empty()).unwrap_or(NO_DATA);
            self.panels.insert(
                id.to_string(),
                Panel {
                    text: text.to_string(),
                    placeholder: false,
                },
            );
        }
    }
}
