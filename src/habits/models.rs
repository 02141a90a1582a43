use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub name: String,
}

/// Per-day completion states, keyed by habit id. Absent key reads as false.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DayRecord {
    pub completed: BTreeMap<String, bool>,
}

/// The whole habit tracker model, persisted as one JSON blob. Roster order
/// is insertion order and doubles as display order.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HabitData {
    pub habits: Vec<Habit>,
    pub days: BTreeMap<String, DayRecord>,
}

impl HabitData {
    /// Adds a habit with a freshly generated id. Whitespace-only names are
    /// rejected as a no-op.
    pub fn add_habit(&mut self, name: &str) -> Option<&Habit> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        self.habits.push(Habit {
            id: generate_id(),
            name: name.to_string(),
        });
        self.habits.last()
    }

    /// Removes a habit and purges its completion entries from every day.
    /// Completion entries must not outlive their habit.
    pub fn remove_habit(&mut self, id: &str) -> bool {
        let before = self.habits.len();
        self.habits.retain(|habit| habit.id != id);
        if self.habits.len() == before {
            return false;
        }
        for record in self.days.values_mut() {
            record.completed.remove(id);
        }
        true
    }

    pub fn habit(&self, id: &str) -> Option<&Habit> {
        self.habits.iter().find(|habit| habit.id == id)
    }

    /// Lazily materializes the record for a date key. Note that looking at a
    /// day creates its (empty) record in memory; it only reaches disk with
    /// the next save.
    pub fn day_record(&mut self, key: &str) -> &mut DayRecord {
        self.days.entry(key.to_string()).or_default()
    }

    /// Marks a habit done/undone for a date. Returns false and leaves the
    /// model untouched when the id is not in the roster.
    pub fn set_completed(&mut self, key: &str, habit_id: &str, done: bool) -> bool {
        if self.habit(habit_id).is_none() {
            return false;
        }
        self.day_record(key)
            .completed
            .insert(habit_id.to_string(), done);
        true
    }

    pub fn is_completed(&self, key: &str, habit_id: &str) -> bool {
        self.days
            .get(key)
            .and_then(|record| record.completed.get(habit_id))
            .copied()
            .unwrap_or(false)
    }

    /// `(completed, total)` for a date. Total is always the current roster
    /// size, so past days are re-read against today's roster; entries left
    /// behind by deleted habits never count.
    pub fn completion_summary(&self, key: &str) -> (usize, usize) {
        let total = self.habits.len();
        let completed = match self.days.get(key) {
            Some(record) => self
                .habits
                .iter()
                .filter(|habit| record.completed.get(&habit.id).copied().unwrap_or(false))
                .count(),
            None => 0,
        };
        (completed, total)
    }
}

/// Millisecond timestamp plus a random suffix, both base-36. Not guaranteed
/// unique, but collisions need two ids in the same millisecond with the same
/// random draw.
fn generate_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64;
    let suffix: u32 = rand::random();
    format!("{}{}", to_base36(millis), to_base36(suffix as u64))
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = String::new();
    while value > 0 {
        out.insert(0, DIGITS[(value % 36) as usize] as char);
        value /= 36;
    }
    out
}

#[derive(Debug, Deserialize)]
pub struct AddHabitRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteHabitRequest {
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct DeleteHabitResponse {
    pub removed: bool,
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub id: String,
    pub date: String,
    pub completed: bool,
}

#[derive(Debug, Serialize)]
pub struct DaySummaryResponse {
    pub date: String,
    pub completed_count: usize,
    pub total_habits: usize,
}

#[derive(Debug, Serialize)]
pub struct ChecklistItem {
    pub id: String,
    pub name: String,
    pub completed: bool,
}

#[derive(Debug, Serialize)]
pub struct DayResponse {
    pub date: String,
    pub completed_count: usize,
    pub total_habits: usize,
    pub items: Vec<ChecklistItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_habit_trims_and_rejects_blank() {
        let mut data = HabitData::default();
        assert!(data.add_habit("   ").is_none());
        assert!(data.add_habit("").is_none());
        let habit = data.add_habit("  Read 20 pages  ").expect("habit added");
        assert_eq!(habit.name, "Read 20 pages");
        assert_eq!(data.habits.len(), 1);
    }

    #[test]
    fn generated_ids_are_base36_and_distinct() {
        let mut data = HabitData::default();
        let a = data.add_habit("a").expect("added").id.clone();
        let b = data.add_habit("b").expect("added").id.clone();
        assert_ne!(a, b);
        for id in [&a, &b] {
            assert!(id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn remove_habit_purges_all_completions() {
        let mut data = HabitData::default();
        let id = data.add_habit("Stretch").expect("added").id.clone();
        data.set_completed("2024-01-05", &id, true);
        data.set_completed("2024-02-10", &id, true);
        data.set_completed("2024-02-11", &id, false);

        assert!(data.remove_habit(&id));
        for record in data.days.values() {
            assert!(!record.completed.contains_key(&id));
        }
        assert!(!data.remove_habit(&id), "second delete is a no-op");
    }

    #[test]
    fn summary_total_tracks_current_roster() {
        let mut data = HabitData::default();
        let first = data.add_habit("One").expect("added").id.clone();
        data.set_completed("2024-01-05", &first, true);
        assert_eq!(data.completion_summary("2024-01-05"), (1, 1));

        // Adding a habit retroactively changes historical totals.
        data.add_habit("Two");
        assert_eq!(data.completion_summary("2024-01-05"), (1, 2));

        // Deleting drops the completed count with it.
        data.remove_habit(&first);
        assert_eq!(data.completion_summary("2024-01-05"), (0, 1));
    }

    #[test]
    fn summary_ignores_stale_entries() {
        let mut data = HabitData::default();
        let id = data.add_habit("Run").expect("added").id.clone();
        data.day_record("2024-03-01")
            .completed
            .insert("gone".to_string(), true);
        data.set_completed("2024-03-01", &id, true);
        // "gone" is not in the roster, so it contributes to neither count.
        assert_eq!(data.completion_summary("2024-03-01"), (1, 1));
    }

    #[test]
    fn set_completed_requires_known_habit() {
        let mut data = HabitData::default();
        assert!(!data.set_completed("2024-01-01", "nope", true));
        assert!(data.days.is_empty(), "failed toggle must not create a record");
    }

    #[test]
    fn day_record_materializes_lazily() {
        let mut data = HabitData::default();
        assert!(!data.days.contains_key("2024-06-01"));
        data.day_record("2024-06-01");
        assert!(data.days.contains_key("2024-06-01"));
        assert!(data.days["2024-06-01"].completed.is_empty());
    }
}
