use crate::habits::calendar::{MonthGrid, MonthRef};
use crate::habits::models::HabitData;
use chrono::NaiveDate;

pub fn render_page(
    data: &HabitData,
    grid: &MonthGrid,
    selected: NaiveDate,
    selected_key: &str,
) -> String {
    let month = MonthRef {
        year: grid.year,
        month0: grid.month0,
    };
    let prev = month.prev();
    let next = month.next();

    let (completed, total) = data.completion_summary(selected_key);
    let summary = if total == 0 {
        "0/0 habits".to_string()
    } else {
        format!("{completed}/{total} completed")
    };

    PAGE_HTML
        .replace("{{MONTH_LABEL}}", &escape(&grid.label))
        .replace("{{PREV_HREF}}", &view_href(prev, selected_key))
        .replace("{{NEXT_HREF}}", &view_href(next, selected_key))
        .replace("{{CELLS}}", &render_cells(grid))
        .replace(
            "{{SELECTED_LABEL}}",
            &escape(&selected.format("%a, %b %-d, %Y").to_string()),
        )
        .replace("{{SELECTED_SUMMARY}}", &summary)
        .replace("{{CHECKLIST}}", &render_checklist(data, grid, selected_key))
        .replace("{{ROSTER}}", &render_roster(data, grid, selected_key))
        .replace("{{VIEW_FIELDS}}", &view_fields(grid, selected_key))
}

fn view_href(month: MonthRef, selected_key: &str) -> String {
    format!(
        "/habits?year={}&month={}&selected={selected_key}",
        month.year, month.month0
    )
}

fn view_fields(grid: &MonthGrid, selected_key: &str) -> String {
    format!(
        r#"<input type="hidden" name="year" value="{}"><input type="hidden" name="month" value="{}"><input type="hidden" name="selected" value="{selected_key}">"#,
        grid.year, grid.month0
    )
}

fn render_cells(grid: &MonthGrid) -> String {
    let mut out = String::new();
    for _ in 0..grid.leading_blanks {
        out.push_str(r#"<div class="day day-empty"></div>"#);
        out.push('\n');
    }
    for cell in &grid.cells {
        let mut classes = String::from("day");
        if cell.is_today {
            classes.push_str(" day-today");
        }
        if cell.is_selected {
            classes.push_str(" day-selected");
        }
        if cell.completed_count > 0 {
            classes.push_str(" day-has-completed");
        }
        let badge = if cell.total_habits > 0 {
            format!("{}/{}", cell.completed_count, cell.total_habits)
        } else {
            "-".to_string()
        };
        let href = format!(
            "/habits?year={}&month={}&selected={}",
            grid.year, grid.month0, cell.date
        );
        out.push_str(&format!(
            r#"<a class="{classes}" href="{href}"><span class="day-num">{}</span><span class="day-count">{badge}</span></a>"#,
            cell.day
        ));
        out.push('\n');
    }
    out
}

fn render_checklist(data: &HabitData, grid: &MonthGrid, selected_key: &str) -> String {
    if data.habits.is_empty() {
        return r#"<p class="empty">No habits yet. Add one below to start checking days off.</p>"#
            .to_string();
    }

    let mut out = String::new();
    for habit in &data.habits {
        let done = data.is_completed(selected_key, &habit.id);
        let checked = if done { " checked" } else { "" };
        out.push_str(&format!(
            concat!(
                r#"<form method="post" action="/habits/toggle" class="check-row">"#,
                r#"<input type="hidden" name="id" value="{id}">"#,
                r#"<input type="hidden" name="date" value="{date}">"#,
                r#"<input type="hidden" name="completed" value="{target}">"#,
                "{view}",
                r#"<label><input type="checkbox" onchange="this.form.submit()"{checked}> <span>{name}</span></label>"#,
                "</form>\n",
            ),
            id = escape(&habit.id),
            date = selected_key,
            target = !done,
            view = view_fields(grid, selected_key),
            checked = checked,
            name = escape(&habit.name),
        ));
    }
    out
}

fn render_roster(data: &HabitData, grid: &MonthGrid, selected_key: &str) -> String {
    if data.habits.is_empty() {
        return r#"<p class="empty">No habits yet. Add one above.</p>"#.to_string();
    }

    let mut out = String::new();
    for habit in &data.habits {
        out.push_str(&format!(
            concat!(
                r#"<div class="habit-row"><span class="habit-name">{name}</span>"#,
                r#"<form method="post" action="/habits/delete" onsubmit="{confirm}">"#,
                r#"<input type="hidden" name="id" value="{id}">"#,
                "{view}",
                r#"<button class="danger" type="submit">Delete</button>"#,
                "</form></div>\n",
            ),
            name = escape(&habit.name),
            confirm = confirm_attr(&habit.name),
            id = escape(&habit.id),
            view = view_fields(grid, selected_key),
        ));
    }
    out
}

/// `onsubmit` attribute for a delete form. The name is escaped for the JS
/// string first and for the HTML attribute second, in that order, since the
/// parser decodes entities before the script runs.
fn confirm_attr(name: &str) -> String {
    let js = name.replace('\\', "\\\\").replace('\'', "\\'");
    escape(&format!("return confirm('Delete habit \"{js}\"?')"))
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
  <title>Habit Tracker</title>
  <style>
    :root {
      --bg: #f2f5f1;
      --ink: #24312a;
      --accent: #2f7a55;
      --accent-soft: #dcefe4;
      --warn: #b8442e;
      --card: #ffffff;
      --line: rgba(36, 49, 42, 0.12);
      --shadow: 0 18px 44px rgba(36, 49, 42, 0.12);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(160deg, var(--bg), #e4ece6 70%);
      color: var(--ink);
      font-family: "Avenir Next", "Segoe UI", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 16px 48px;
    }

    .app {
      width: min(920px, 100%);
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
      margin: 0 0 12px;
      font-size: 1.2rem;
    }

    .nav-link {
      color: var(--accent);
      text-decoration: none;
      font-weight: 600;
    }

    .month-bar {
      display: flex;
      align-items: center;
      justify-content: space-between;
      margin-bottom: 14px;
    }

    .month-bar a {
      color: var(--accent);
      text-decoration: none;
      font-size: 1.3rem;
      padding: 2px 10px;
      border-radius: 8px;
    }

    .month-bar a:hover {
      background: var(--accent-soft);
    }

    .month-label {
      font-weight: 600;
      font-size: 1.1rem;
    }

    .weekdays,
    .grid {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 6px;
    }

    .weekdays span {
      text-align: center;
      font-size: 0.75rem;
      text-transform: uppercase;
      letter-spacing: 0.08em;
      color: #6d7a72;
      padding-bottom: 6px;
    }

    .day {
      min-height: 58px;
      border: 1px solid var(--line);
      border-radius: 10px;
      padding: 6px;
      display: flex;
      flex-direction: column;
      justify-content: space-between;
      text-decoration: none;
      color: inherit;
    }

    .day:hover {
      border-color: var(--accent);
    }

    .day-empty {
      border: none;
    }

    .day-num {
      font-weight: 600;
    }

    .day-count {
      font-size: 0.8rem;
      color: #6d7a72;
    }

    .day-has-completed .day-count {
      color: var(--accent);
      font-weight: 600;
    }

    .day-today {
      border-color: var(--accent);
      background: var(--accent-soft);
    }

    .day-selected {
      outline: 2px solid var(--accent);
    }

    .summary {
      color: #6d7a72;
      margin: 0 0 12px;
    }

    .check-row {
      margin: 0;
      padding: 8px 0;
      border-bottom: 1px solid var(--line);
    }

    .check-row:last-child {
      border-bottom: none;
    }

    .check-row label {
      display: flex;
      align-items: center;
      gap: 10px;
      cursor: pointer;
    }

    .check-row input[type="checkbox"] {
      width: 18px;
      height: 18px;
      accent-color: var(--accent);
    }

    .add-form {
      display: flex;
      gap: 10px;
      margin-bottom: 14px;
    }

    .add-form input[type="text"] {
      flex: 1;
      padding: 10px 12px;
      border: 1px solid var(--line);
      border-radius: 10px;
      font-size: 1rem;
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

    button.danger {
      background: transparent;
      color: var(--warn);
      border: 1px solid var(--warn);
      padding: 6px 12px;
    }

    .habit-row {
      display: flex;
      align-items: center;
      justify-content: space-between;
      padding: 8px 0;
      border-bottom: 1px solid var(--line);
    }

    .habit-row:last-child {
      border-bottom: none;
    }

    .habit-row form {
      margin: 0;
    }

    .empty {
      color: #6d7a72;
      font-style: italic;
    }
  </style>
</head>
<body>
  <main class="app">
    <header class="card">
      <h1>Habit Tracker</h1>
      <a class="nav-link" href="/log">Daily Log &rarr;</a>
    </header>

    <section class="card">
      <div class="month-bar">
        <a href="{{PREV_HREF}}" aria-label="Previous month">&larr;</a>
        <span class="month-label">{{MONTH_LABEL}}</span>
        <a href="{{NEXT_HREF}}" aria-label="Next month">&rarr;</a>
      </div>
      <div class="weekdays">
        <span>Sun</span><span>Mon</span><span>Tue</span><span>Wed</span><span>Thu</span><span>Fri</span><span>Sat</span>
      </div>
      <div class="grid">
{{CELLS}}      </div>
    </section>

    <section class="card">
      <h2>{{SELECTED_LABEL}}</h2>
      <p class="summary">{{SELECTED_SUMMARY}}</p>
      {{CHECKLIST}}
    </section>

    <section class="card">
      <h2>Habits</h2>
      <form class="add-form" method="post" action="/habits/add">
        <input type="text" name="name" placeholder="New habit name" autocomplete="off">
        {{VIEW_FIELDS}}
        <button type="submit">Add</button>
      </form>
      {{ROSTER}}
    </section>
  </main>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::habits::calendar::{month_grid, MonthRef};

    fn sample_grid(data: &HabitData) -> MonthGrid {
        let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        month_grid(data, MonthRef { year: 2024, month0: 0 }, Some(today), today)
    }

    #[test]
    fn page_escapes_habit_names() {
        let mut data = HabitData::default();
        data.add_habit("<script>alert(1)</script>");
        let grid = sample_grid(&data);
        let selected = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let page = render_page(&data, &grid, selected, "2024-01-15");
        assert!(!page.contains("<script>alert(1)</script>"));
        assert!(page.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn empty_roster_renders_empty_states_and_dash_badges() {
        let data = HabitData::default();
        let grid = sample_grid(&data);
        let selected = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let page = render_page(&data, &grid, selected, "2024-01-15");
        assert!(page.contains("No habits yet"));
        assert!(page.contains("0/0 habits"));
        assert!(page.contains(r#"<span class="day-count">-</span>"#));
    }

    #[test]
    fn confirm_attr_survives_quotes_in_names() {
        let attr = confirm_attr("Don't \"skip\"");
        assert!(attr.contains("\\&#39;"));
        assert!(!attr.contains('"'));
    }
}
