use crate::view::{Page, Status, Tone};

impl Page {
    pub fn set_status(&mut self, message: impl Into<String>, tone: Tone) {
        self.status = Status {
            message: message.into(),
            tone,
        };
    }
}
