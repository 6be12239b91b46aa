// src/filter.rs

use chrono::{DateTime, Duration, Utc};

use crate::models::{Priority, Task};

/// Completion bucket for the task list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    /// Not yet completed.
    Pending,
    Completed,
    /// Not completed and past due.
    Overdue,
}

/// Calendar bucket for due-date filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueWindow {
    Today,
    Tomorrow,
    /// Due within the next seven days, today included.
    Week,
}

/// Criteria for the visible subset of the task list. The default filter
/// passes every task through unchanged.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub status: StatusFilter,
    /// `None` shows every priority.
    pub priority: Option<Priority>,
    /// Case-insensitive substring of title or description; empty disables.
    pub search: String,
    /// `None` disables due-date bucketing.
    pub due: Option<DueWindow>,
}

impl TaskFilter {
    /// Derive the visible subset of `tasks`, preserving their order.
    ///
    /// Pure: `now` is the instant the overdue/window checks evaluate
    /// against, and the input collection is never mutated. The predicates
    /// intersect — a task shows up iff it passes status, priority, search
    /// and due window independently.
    pub fn apply<'a>(&self, tasks: &'a [Task], now: DateTime<Utc>) -> Vec<&'a Task> {
        let needle = self.search.to_lowercase();
        tasks
            .iter()
            .filter(|task| self.status_matches(task, now))
            .filter(|task| self.priority.map_or(true, |p| task.priority == p))
            .filter(|task| search_matches(task, &needle))
            .filter(|task| self.due_matches(task, now))
            .collect()
    }

    fn status_matches(&self, task: &Task, now: DateTime<Utc>) -> bool {
        match self.status {
            StatusFilter::All => true,
            StatusFilter::Pending => !task.is_done,
            StatusFilter::Completed => task.is_done,
            StatusFilter::Overdue => {
                !task.is_done && task.due_at.is_some_and(|due| due < now)
            }
        }
    }

    fn due_matches(&self, task: &Task, now: DateTime<Utc>) -> bool {
        let Some(window) = self.due else { return true };
        let Some(due) = task.due_at else { return false };
        let today = now.date_naive();
        let due_date = due.date_naive();
        match window {
            DueWindow::Today => due_date == today,
            DueWindow::Tomorrow => due_date == today + Duration::days(1),
            DueWindow::Week => due_date >= today && due_date < today + Duration::days(7),
        }
    }
}

fn search_matches(task: &Task, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    task.title.to_lowercase().contains(needle)
        || task.description.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 8, 12, 0, 0).unwrap()
    }

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 9, 0, 0).unwrap()
    }

    fn task(id: i64, title: &str) -> Task {
        Task {
            id,
            title: title.to_string(),
            description: String::new(),
            priority: Priority::Low,
            is_done: false,
            due_at: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn default_filter_passes_everything_unchanged() {
        let tasks = vec![task(1, "Buy milk")];
        let filter = TaskFilter::default();

        let visible = filter.apply(&tasks, now());
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 1);

        // Pure: a second run over the same inputs gives the same result.
        let again = filter.apply(&tasks, now());
        assert_eq!(visible, again);
        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn search_matches_title_or_description() {
        let mut with_description = task(2, "Groceries");
        with_description.description = "Milk and eggs".to_string();
        let tasks = vec![task(1, "Buy milk"), with_description, task(3, "Walk dog")];

        let filter = TaskFilter {
            search: "MILK".to_string(),
            ..TaskFilter::default()
        };
        let visible = filter.apply(&tasks, now());
        let ids: Vec<i64> = visible.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2]);

        let filter = TaskFilter {
            search: "eggs".to_string(),
            ..TaskFilter::default()
        };
        let ids: Vec<i64> = filter.apply(&tasks, now()).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2]);

        let filter = TaskFilter {
            search: "bread".to_string(),
            ..TaskFilter::default()
        };
        assert!(filter.apply(&tasks, now()).is_empty());
    }

    #[test]
    fn status_buckets_split_on_the_done_flag() {
        let mut done = task(1, "Done");
        done.is_done = true;
        let tasks = vec![done, task(2, "Open")];

        let pending = TaskFilter {
            status: StatusFilter::Pending,
            ..TaskFilter::default()
        };
        let ids: Vec<i64> = pending.apply(&tasks, now()).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2]);

        let completed = TaskFilter {
            status: StatusFilter::Completed,
            ..TaskFilter::default()
        };
        let ids: Vec<i64> = completed.apply(&tasks, now()).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn overdue_needs_a_past_due_date_and_an_open_task() {
        let yesterday = at(2026, 8, 7);
        let mut open_overdue = task(1, "Open overdue");
        open_overdue.due_at = Some(yesterday);
        let mut done_overdue = task(2, "Done overdue");
        done_overdue.due_at = Some(yesterday);
        done_overdue.is_done = true;
        let mut due_later = task(3, "Due later");
        due_later.due_at = Some(at(2026, 8, 20));
        let tasks = vec![open_overdue, done_overdue, due_later, task(4, "No date")];

        let filter = TaskFilter {
            status: StatusFilter::Overdue,
            ..TaskFilter::default()
        };
        let ids: Vec<i64> = filter.apply(&tasks, now()).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn priority_filter_keeps_only_the_selected_value() {
        let mut high = task(1, "High");
        high.priority = Priority::High;
        let tasks = vec![high, task(2, "Low")];

        let filter = TaskFilter {
            priority: Some(Priority::High),
            ..TaskFilter::default()
        };
        let ids: Vec<i64> = filter.apply(&tasks, now()).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn predicates_intersect() {
        let mut wanted = task(1, "Pay rent");
        wanted.priority = Priority::High;
        let wrong_priority = task(2, "Pay rent");
        let mut wrong_status = task(3, "Pay rent");
        wrong_status.priority = Priority::High;
        wrong_status.is_done = true;
        let tasks = vec![wanted, wrong_priority, wrong_status, task(4, "Other")];

        let filter = TaskFilter {
            status: StatusFilter::Pending,
            priority: Some(Priority::High),
            search: "rent".to_string(),
            ..TaskFilter::default()
        };
        let ids: Vec<i64> = filter.apply(&tasks, now()).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn due_windows_bucket_by_calendar_date() {
        let mut today = task(1, "Today");
        today.due_at = Some(at(2026, 8, 8));
        let mut tomorrow = task(2, "Tomorrow");
        tomorrow.due_at = Some(at(2026, 8, 9));
        let mut next_week = task(3, "In six days");
        next_week.due_at = Some(at(2026, 8, 13));
        let mut far_out = task(4, "Far out");
        far_out.due_at = Some(at(2026, 9, 1));
        let tasks = vec![today, tomorrow, next_week, far_out, task(5, "No date")];

        let ids = |window: DueWindow| -> Vec<i64> {
            let filter = TaskFilter {
                due: Some(window),
                ..TaskFilter::default()
            };
            filter.apply(&tasks, now()).iter().map(|t| t.id).collect()
        };

        assert_eq!(ids(DueWindow::Today), vec![1]);
        assert_eq!(ids(DueWindow::Tomorrow), vec![2]);
        assert_eq!(ids(DueWindow::Week), vec![1, 2, 3]);
    }
}
