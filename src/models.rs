use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

pub const LOG_FIELDS: [&str; 6] = [
    "log_date",
    "weight",
    "activity",
    "hunger_level",
    "food_eaten",
    "planned_workout",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub log_date: Option<String>,
    pub weight: Option<String>,
    pub activity: Option<String>,
    pub hunger_level: Option<String>,
    pub food_eaten: Option<String>,
    pub planned_workout: Option<String>,
}

impl LogEntry {
    pub fn field_mut(&mut self, name: &str) -> Option<&mut Option<String>> {
        match name {
            "log_date" => Some(&mut self.log_date),
            "weight" => Some(&mut self.weight),
            "activity" => Some(&mut self.activity),
            "hunger_level" => Some(&mut self.hunger_level),
            "food_eaten" => Some(&mut self.food_eaten),
            "planned_workout" => Some(&mut self.planned_workout),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoachResponse {
    #[serde(default)]
    pub log_id: Option<LogId>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub recommendation: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub reasoning: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub calorie_estimate: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub next_steps: Option<String>,
}

impl CoachResponse {
    pub fn panel_values(&self) -> [(&'static str, Option<&str>); 4] {
        [
            ("recommendation", self.recommendation.as_deref()),
            ("reasoning", self.reasoning.as_deref()),
            ("calorie_estimate", self.calorie_estimate.as_deref()),
            ("next_steps", self.next_steps.as_deref()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LogId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for LogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogId::Number(id) => write!(f, "{id}"),
            LogId::Text(id) => f.write_str(id),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogSummary {
    #[serde(default)]
    pub log_id: Option<LogId>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub recommendation: Option<String>,
}

pub const PROFILE_FIELDS: [(&str, &str); 10] = [
    ("sex", "Sex"),
    ("height", "Height"),
    ("weight_range", "Weight range"),
    ("goal", "Goal"),
    ("training_style", "Training style"),
    ("focus_areas", "Focus areas"),
    ("gym_closures", "Gym closures"),
    ("menstrual_cycle_notes", "Menstrual cycle notes"),
    ("fueling_sensitivity", "Fueling sensitivity"),
    ("reassurance_needs", "Reassurance needs"),
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Profile(pub serde_json::Map<String, Value>);

impl Profile {
    pub fn text(&self, key: &str) -> Option<String> {
        self.0.get(key).and_then(scalar_text)
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) if number.as_f64() != Some(0.0) => Some(number.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(scalar_text))
}
