use crate::journal::models::LogBook;

pub fn render_page(today: &str, today_text: &str, data: &LogBook) -> String {
    PAGE_HTML
        .replace("{{TODAY}}", today)
        .replace("{{NOTE}}", &escape(today_text))
        .replace("{{HISTORY}}", &render_history(data))
}

fn render_history(data: &LogBook) -> String {
    let mut out = String::new();
    for (date, text) in data.entries_desc() {
        out.push_str(&format!(
            "<article class=\"entry\"><h3>{date}</h3><p>{}</p></article>\n",
            escape(text).replace('\n', "<br>")
        ));
    }
    if out.is_empty() {
        out.push_str(r#"<p class="empty">No entries yet. Write your first note above.</p>"#);
    }
    out
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const PAGE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Daily Log</title>
  <style>
    :root {
      --bg: #f6f3ee;
      --ink: #2d2a25;
      --accent: #7a5c2f;
      --accent-soft: #efe6d8;
      --warn: #b8442e;
      --card: #ffffff;
      --line: rgba(45, 42, 37, 0.12);
      --shadow: 0 18px 44px rgba(45, 42, 37, 0.12);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(160deg, var(--bg), #ece5da 70%);
      color: var(--ink);
      font-family: "Avenir Next", "Segoe UI", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 16px 48px;
    }

    .app {
      width: min(720px, 100%);
      display: grid;
      gap: 20px;
    }

    .card {
      background: var(--card);
      border-radius: 18px;
      border: 1px solid var(--line);
      box-shadow: var(--shadow);
      padding: 24px;
    }

    header.card {
      display: flex;
      align-items: baseline;
      justify-content: space-between;
      flex-wrap: wrap;
      gap: 8px;
    }

    h1 {
      margin: 0;
      font-size: 1.8rem;
    }

    h2 {
      margin: 0 0 6px;
      font-size: 1.2rem;
    }

    .nav-link {
      color: var(--accent);
      text-decoration: none;
      font-weight: 600;
    }

    .date-label {
      color: #7d766b;
      margin: 0 0 12px;
    }

    textarea {
      width: 100%;
      min-height: 140px;
      resize: vertical;
      padding: 12px;
      border: 1px solid var(--line);
      border-radius: 10px;
      font-size: 1rem;
      font-family: inherit;
    }

    .buttons {
      display: flex;
      gap: 10px;
      margin-top: 12px;
      flex-wrap: wrap;
    }

    .buttons form {
      margin: 0;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 10px;
      padding: 10px 16px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
    }

    button.ghost {
      background: var(--accent-soft);
      color: var(--accent);
    }

    button.danger {
      background: transparent;
      color: var(--warn);
      border: 1px solid var(--warn);
    }

    .entry {
      padding: 12px 0;
      border-bottom: 1px solid var(--line);
    }

    .entry:last-child {
      border-bottom: none;
    }

    .entry h3 {
      margin: 0 0 6px;
      font-size: 1rem;
      color: var(--accent);
    }

    .entry p {
      margin: 0;
      white-space: normal;
    }

    .empty {
      color: #7d766b;
      font-style: italic;
    }
  </style>
</head>
<body>
  <main class="app">
    <header class="card">
      <h1>Daily Log</h1>
      <a class="nav-link" href="/habits">&larr; Habit Tracker</a>
    </header>

    <section class="card">
      <h2>Today</h2>
      <p class="date-label">{{TODAY}}</p>
      <form method="post" action="/log/save" id="editor">
        <textarea name="note" placeholder="What happened today?">{{NOTE}}</textarea>
        <div class="buttons">
          <button type="submit">Save</button>
        </div>
      </form>
      <div class="buttons">
        <form method="post" action="/log/clear-today">
          <button class="ghost" type="submit">Clear today</button>
        </form>
        <form method="post" action="/log/clear-all" onsubmit="return confirm('Delete all saved entries?')">
          <button class="danger" type="submit">Clear all</button>
        </form>
      </div>
    </section>

    <section class="card">
      <h2>History</h2>
      {{HISTORY}}
    </section>
  </main>
</body>
</html>
"#;
