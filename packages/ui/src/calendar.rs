//! Task calendar: tasks grouped by the day they are due.

use std::collections::BTreeMap;

use chrono::{Datelike, Local, NaiveDate};
use dioxus::prelude::*;
use store::Task;

/// Tasks keyed by due day, plus the ones whose due date could not be read.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DueDays<'a> {
    pub by_day: BTreeMap<NaiveDate, Vec<&'a Task>>,
    pub undated: Vec<&'a Task>,
}

impl DueDays<'_> {
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.by_day.keys().copied()
    }

    pub fn has_tasks_on(&self, day: NaiveDate) -> bool {
        self.by_day.contains_key(&day)
    }
}

/// Group tasks by due day. Order within a day follows the input order.
pub fn group_by_day(tasks: &[Task]) -> DueDays<'_> {
    let mut grouped = DueDays::default();
    for task in tasks {
        match task.due_day() {
            Some(day) => grouped.by_day.entry(day).or_default().push(task),
            None => grouped.undated.push(task),
        }
    }
    grouped
}

/// Tasks due on `day`, in input order.
pub fn tasks_due_on(tasks: &[Task], day: NaiveDate) -> Vec<&Task> {
    tasks.iter().filter(|t| t.due_day() == Some(day)).collect()
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Month grid with task markers and the list for the selected day.
#[component]
pub fn TaskCalendar(tasks: Vec<Task>) -> Element {
    let mut selected = use_signal(today);

    let day = selected();
    let first = day.with_day(1).unwrap_or(day);
    let grouped = group_by_day(&tasks);
    let due_today = tasks_due_on(&tasks, day);

    // Leading blanks so the 1st lands on its weekday column (Sunday first).
    let offset = first.weekday().num_days_from_sunday() as usize;
    let month_days: Vec<NaiveDate> = first
        .iter_days()
        .take_while(|d| d.month() == first.month())
        .collect();
    let marked: Vec<(NaiveDate, u32, bool)> = month_days
        .iter()
        .map(|d| (*d, d.day(), grouped.has_tasks_on(*d)))
        .collect();
    let undated: Vec<Task> = grouped.undated.iter().map(|t| (*t).clone()).collect();
    let heading = day.format("%a %b %-d %Y").to_string();
    let month_label = first.format("%B %Y").to_string();

    rsx! {
        div {
            class: "task-calendar",
            div {
                class: "calendar-header",
                button {
                    onclick: move |_| {
                        let prev = first.pred_opt().unwrap_or(first);
                        selected.set(prev.with_day(1).unwrap_or(prev));
                    },
                    "<"
                }
                span { class: "calendar-month", "{month_label}" }
                button {
                    onclick: move |_| {
                        if let Some(next) = first.checked_add_months(chrono::Months::new(1)) {
                            selected.set(next);
                        }
                    },
                    ">"
                }
            }
            div {
                class: "calendar-grid",
                for name in ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"] {
                    div { class: "calendar-weekday", "{name}" }
                }
                for _ in 0..offset {
                    div { class: "calendar-blank" }
                }
                for (date, number, has_tasks) in marked {
                    button {
                        key: "{date}",
                        class: match (date == day, has_tasks) {
                            (true, _) => "calendar-day selected",
                            (false, true) => "calendar-day has-tasks",
                            (false, false) => "calendar-day",
                        },
                        onclick: move |_| selected.set(date),
                        "{number}"
                    }
                }
            }
            h2 { class: "calendar-list-heading", "Tasks Due on {heading}" }
            ul {
                class: "calendar-task-list",
                for task in due_today {
                    TaskCard { task: task.clone() }
                }
            }
            if !undated.is_empty() {
                h3 { class: "calendar-list-heading", "No due date" }
                ul {
                    class: "calendar-task-list",
                    for task in undated {
                        TaskCard { task }
                    }
                }
            }
        }
    }
}

#[component]
pub fn TaskCard(task: Task) -> Element {
    rsx! {
        li {
            class: "task-card",
            h3 { "{task.title}" }
            p { class: "task-course", "{task.course}" }
            p { class: "task-estimate", "{task.time_estimate}" }
            if !task.description.is_empty() {
                p { class: "task-description", "{task.description}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(title: &str, due: &str) -> Task {
        Task {
            title: title.to_string(),
            course: "BIOL 1300".to_string(),
            time_estimate: "45 minutes".to_string(),
            due_date: due.to_string(),
            description: String::new(),
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_group_by_day() {
        let tasks = vec![
            task("Lab report", "2024-10-03T23:59:00Z"),
            task("Flashcards", "2024-10-01"),
            task("Reading", "2024-10-03 09:00"),
            task("Someday", "whenever"),
        ];
        let grouped = group_by_day(&tasks);

        assert_eq!(
            grouped.days().collect::<Vec<_>>(),
            vec![day(2024, 10, 1), day(2024, 10, 3)]
        );
        let titles: Vec<_> = grouped.by_day[&day(2024, 10, 3)]
            .iter()
            .map(|t| t.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Lab report", "Reading"]);
        assert_eq!(grouped.undated.len(), 1);
        assert_eq!(grouped.undated[0].title, "Someday");
        assert!(!grouped.has_tasks_on(day(2024, 10, 2)));
    }

    #[test]
    fn test_tasks_due_on() {
        let tasks = vec![
            task("A", "2024-12-09"),
            task("B", "2024-12-10"),
            task("C", "2024-12-09T08:00:00"),
        ];
        let due: Vec<_> = tasks_due_on(&tasks, day(2024, 12, 9))
            .into_iter()
            .map(|t| t.title.as_str())
            .collect();
        assert_eq!(due, vec!["A", "C"]);
        assert!(tasks_due_on(&tasks, day(2025, 1, 1)).is_empty());
    }

    #[test]
    fn test_empty_snapshot() {
        let grouped = group_by_day(&[]);
        assert!(grouped.by_day.is_empty());
        assert!(grouped.undated.is_empty());
    }
}
