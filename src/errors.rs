use reqwest::StatusCode;
use std::fmt;

#[derive(Debug)]
pub enum ClientError {
    Network(reqwest::Error),
    Http { status: StatusCode, body: String },
    Parse(serde_json::Error),
}

impl ClientError {
    pub fn http(status: StatusCode, body: impl Into<String>) -> Self {
        Self::Http {
            status,
            body: body.into(),
        }
    }

    pub fn is_http(&self) -> bool {
        matches!(self, ClientError::Http { .. })
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Network(err) => write!(f, "{err}"),
            ClientError::Http { status, body } if body.trim().is_empty() => {
                write!(f, "Request failed: {}", status.as_u16())
            }
            ClientError::Http { body, .. } => f.write_str(body),
            ClientError::Parse(err) => write!(f, "Invalid response: {err}"),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Network(err) => Some(err),
            ClientError::Parse(err) => Some(err),
            ClientError::Http { .. } => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err)
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}
