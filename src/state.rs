use crate::client::CoachClient;

#[derive(Clone)]
pub struct AppState {
    pub client: CoachClient,
}

impl AppState {
    pub fn new(client: CoachClient) -> Self {
        Self { client }
    }
}
