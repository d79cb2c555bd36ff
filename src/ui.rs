use crate::models::LOG_FIELDS;
use crate::view::{LogsView, PANEL_IDS, Page, ProfileView, ids};

pub fn render_index(page: &Page) -> String {
    let disabled = if page.form.disabled { " disabled" } else { "" };
    let refresh = if page.form.disabled {
        r#"<meta http-equiv="refresh" content="2" />"#
    } else {
        ""
    };

    INDEX_HTML
        .replace("{{REFRESH}}", refresh)
        .replace("{{STATUS_ID}}", ids::STATUS)
        .replace("{{TONE}}", page.status.tone.as_str())
        .replace("{{STATUS}}", &escape_html(&page.status.message))
        .replace("{{FORM_ID}}", ids::FORM)
        .replace("{{FIELDS}}", &render_fields(page, disabled))
        .replace("{{SUBMIT_ID}}", ids::SUBMIT_BTN)
        .replace("{{RESET_ID}}", ids::RESET_BTN)
        .replace("{{DISABLED}}", disabled)
        .replace("{{PANELS}}", &render_panels(page))
        .replace("{{HISTORY}}", &render_history(page))
}

fn render_fields(page: &Page, disabled: &str) -> String {
    LOG_FIELDS
        .iter()
        .map(|name| {
            let value = escape_html(page.form.value(name));
            let label = field_label(name);
            let control = match *name {
                "log_date" => format!(
                    r#"<input type="date" id="{name}" name="{name}" value="{value}"{disabled} />"#
                ),
                "weight" | "hunger_level" => format!(
                    r#"<input type="text" id="{name}" name="{name}" value="{value}" placeholder="{hint}"{disabled} />"#,
                    hint = field_hint(name),
                ),
                _ => format!(
                    r#"<textarea id="{name}" name="{name}" rows="2" placeholder="{hint}"{disabled}>{value}</textarea>"#,
                    hint = field_hint(name),
                ),
            };
            format!(r#"<label class="field" for="{name}"><span>{label}</span>{control}</label>"#)
        })
        .collect::<Vec<_>>()
        .join("\n        ")
}

fn field_label(name: &str) -> &'static str {
    match name {
        "log_date" => "Date",
        "weight" => "Weight",
        "activity" => "Activity",
        "hunger_level" => "Hunger",
        "food_eaten" => "Food eaten",
        _ => "Planned workout",
    }
}

fn field_hint(name: &str) -> &'static str {
    match name {
        "weight" => "e.g. 68.4",
        "hunger_level" => "Low / Medium / High",
        "activity" => "Steps, walks, chores",
        "food_eaten" => "Meals and snacks so far",
        _ => "What you plan to train",
    }
}

fn render_panels(page: &Page) -> String {
    PANEL_IDS
        .iter()
        .filter_map(|id| page.panel(id).map(|panel| (id, panel)))
        .map(|(id, panel)| {
            format!(
                r#"<div class="card"><h3>{title}</h3><p id="{id}" class="panel-text{class}">{text}</p></div>"#,
                title = panel_title(id),
                class = placeholder_class(panel.placeholder),
                text = escape_html(&panel.text),
            )
        })
        .collect::<Vec<_>>()
        .join("\n      ")
}

fn panel_title(id: &str) -> &'static str {
    match id {
        "recommendation" => "Recommendation",
        "reasoning" => "Reasoning",
        "calorie_estimate" => "Calorie estimate",
        _ => "Next steps",
    }
}

fn render_history(page: &Page) -> String {
    let (Some(profile), Some(logs)) = (&page.profile, &page.logs) else {
        return String::new();
    };
    HISTORY_HTML
        .replace("{{PROFILE_BTN}}", ids::REFRESH_PROFILE)
        .replace("{{PROFILE}}", &render_profile(profile))
        .replace("{{LOGS_BTN}}", ids::REFRESH_LOGS)
        .replace("{{LOGS}}", &render_logs(logs))
}

fn render_profile(view: &ProfileView) -> String {
    let rows = view
        .rows
        .iter()
        .map(|row| {
            format!(
                r#"<div class="detail-row"><dt>{}</dt><dd>{}</dd></div>"#,
                escape_html(&row.label),
                escape_html(&row.value)
            )
        })
        .collect::<String>();
    format!(
        r#"<dl id="{id}" class="details{class}">{rows}</dl>"#,
        id = ids::PROFILE_DETAILS,
        class = placeholder_class(view.placeholder),
    )
}

fn render_logs(view: &LogsView) -> String {
    let body = match &view.message {
        Some(message) => escape_html(message),
        None => view
            .rows
            .iter()
            .map(|row| {
                format!(
                    r#"<div class="log-row"><strong>{}</strong><p>{}</p></div>"#,
                    escape_html(&row.label),
                    escape_html(&row.summary)
                )
            })
            .collect(),
    };
    format!(
        r#"<div id="{id}" class="logs{class}">{body}</div>"#,
        id = ids::LOGS_LIST,
        class = placeholder_class(view.placeholder),
    )
}

fn placeholder_class(placeholder: bool) -> &'static str {
    if placeholder { " placeholder" } else { "" }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '{' => escaped.push_str("&#123;"),
            '}' => escaped.push_str("&#125;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

const HISTORY_HTML: &str = r#"<section class="history">
      <div class="card">
        <div class="card-header">
          <h2>Profile</h2>
          <form method="post" action="/refresh-profile">
            <button class="btn-ghost" id="{{PROFILE_BTN}}" type="submit">Refresh</button>
          </form>
        </div>
        {{PROFILE}}
      </div>
      <div class="card">
        <div class="card-header">
          <h2>Recent logs</h2>
          <form method="post" action="/refresh-logs">
            <button class="btn-ghost" id="{{LOGS_BTN}}" type="submit">Refresh</button>
          </form>
        </div>
        {{LOGS}}
      </div>
    </section>"#;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  {{REFRESH}}
  <title>Daily Coach</title>
  <style>
    :root {
      --bg: #f3f1ea;
      --ink: #24292f;
      --muted: #6b7078;
      --accent: #2f7a5b;
      --danger: #b8432f;
      --card: #ffffff;
      --line: rgba(36, 41, 47, 0.1);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Inter", "Segoe UI", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(920px, 100%);
      display: grid;
      gap: 24px;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
    }

    h2, h3 {
      margin: 0 0 10px;
    }

    .card {
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 16px;
      padding: 18px;
    }

    .card-header {
      display: flex;
      align-items: center;
      justify-content: space-between;
    }

    form.daily {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
      gap: 14px;
    }

    .field {
      display: grid;
      gap: 6px;
      font-size: 0.9rem;
      color: var(--muted);
    }

    input, textarea {
      font: inherit;
      color: var(--ink);
      border: 1px solid var(--line);
      border-radius: 10px;
      padding: 10px 12px;
    }

    .actions {
      display: flex;
      gap: 12px;
      grid-column: 1 / -1;
    }

    button {
      border: none;
      border-radius: 999px;
      padding: 12px 20px;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
    }

    button:disabled, input:disabled, textarea:disabled {
      opacity: 0.55;
      cursor: not-allowed;
    }

    .btn-ghost {
      background: transparent;
      color: var(--accent);
      border: 1px solid var(--accent);
      padding: 8px 14px;
    }

    .panels, .history {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 16px;
    }

    .placeholder {
      color: var(--muted);
      font-style: italic;
    }

    .details {
      display: grid;
      gap: 6px;
      margin: 0;
    }

    .detail-row {
      display: flex;
      justify-content: space-between;
      gap: 12px;
    }

    .detail-row dd {
      margin: 0;
      text-align: right;
    }

    .log-row {
      border-top: 1px solid var(--line);
      padding: 8px 0;
    }

    .log-row p {
      margin: 4px 0 0;
    }

    .status {
      font-size: 0.95rem;
      color: var(--muted);
      min-height: 1.2em;
    }

    .status[data-tone="error"] {
      color: var(--danger);
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Daily Coach</h1>
      <p class="field">Log today, get a recommendation for the rest of the day.</p>
    </header>

    <section class="card">
      <form id="{{FORM_ID}}" class="daily" method="post" action="/submit">
        {{FIELDS}}
        <div class="actions">
          <button id="{{SUBMIT_ID}}" type="submit"{{DISABLED}}>Get coaching</button>
          <button class="btn-ghost" id="{{RESET_ID}}" type="submit" formaction="/reset" formnovalidate{{DISABLED}}>Reset</button>
        </div>
      </form>
    </section>

    <div class="status" id="{{STATUS_ID}}" data-tone="{{TONE}}">{{STATUS}}</div>

    <section class="panels">
      {{PANELS}}
    </section>

    {{HISTORY}}
  </main>
</body>
</html>
"#;
