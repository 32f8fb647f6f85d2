//! Month grid calendar
//!
//! Renders one month as an ARIA grid. Navigation buttons carry the target
//! month in `data-month` (`YYYY-MM`); wiring them up is left to the page.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use forma_core::prelude::*;

use crate::component::compose;
use crate::components::button::{ButtonSize, ButtonVariant, button_class};
use crate::error::{ComponentError, Result};
use crate::icons;

/// Dates of the weeks covering `month` of `year`, each starting on
/// `week_start`. Leading and trailing days belong to the adjacent months.
///
/// # Errors
///
/// Returns [`ComponentError::InvalidProperty`] when `month` is not in
/// `1..=12` or the year is out of chrono's range.
pub fn month_weeks(year: i32, month: u32, week_start: Weekday) -> Result<Vec<[NaiveDate; 7]>> {
	let invalid = || ComponentError::InvalidProperty(format!("invalid month {year}-{month:02}"));
	let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
	let next = first.checked_add_months(Months::new(1)).ok_or_else(invalid)?;
	let days_in_month = next.signed_duration_since(first).num_days() as u64;

	let lead = u64::from(
		(7 + first.weekday().num_days_from_monday() - week_start.num_days_from_monday()) % 7,
	);
	let start = first.checked_sub_days(Days::new(lead)).ok_or_else(invalid)?;
	let week_count = (lead + days_in_month).div_ceil(7) as usize;

	let days: Vec<NaiveDate> = start.iter_days().take(week_count * 7).collect();
	let weeks: Vec<[NaiveDate; 7]> = days
		.chunks_exact(7)
		.filter_map(|chunk| <[NaiveDate; 7]>::try_from(chunk).ok())
		.collect();
	if weeks.len() != week_count {
		return Err(invalid());
	}
	Ok(weeks)
}

/// Calendar properties
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarProps {
	/// Any day of the month to display
	pub month: NaiveDate,
	/// Selected day
	pub selected: Option<NaiveDate>,
	/// Day marked as today
	pub today: Option<NaiveDate>,
	/// First column of the grid
	pub week_start: Weekday,
	/// Whether days of adjacent months are drawn
	pub show_outside_days: bool,
	/// Extra classes
	pub class: String,
}

impl Default for CalendarProps {
	fn default() -> Self {
		Self {
			month: NaiveDate::default(),
			selected: None,
			today: None,
			week_start: Weekday::Sun,
			show_outside_days: true,
			class: String::new(),
		}
	}
}

impl CalendarProps {
	/// Create properties showing the month containing `month`
	pub fn new(month: NaiveDate) -> Self {
		Self {
			month,
			..Self::default()
		}
	}

	/// Set the selected day
	pub fn selected(mut self, day: NaiveDate) -> Self {
		self.selected = Some(day);
		self
	}

	/// Set the day marked as today
	pub fn today(mut self, day: NaiveDate) -> Self {
		self.today = Some(day);
		self
	}

	/// Set the first column of the grid
	pub fn week_start(mut self, week_start: Weekday) -> Self {
		self.week_start = week_start;
		self
	}

	/// Set whether days of adjacent months are drawn
	pub fn show_outside_days(mut self, show: bool) -> Self {
		self.show_outside_days = show;
		self
	}

	/// Append extra classes
	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.class = class.into();
		self
	}
}

const NAV: &str = "absolute size-8 bg-transparent p-0 opacity-50 hover:opacity-100";
const DAY_BUTTON: &str = "size-8 p-0 font-normal aria-selected:opacity-100 data-[selected-single=true]:bg-primary data-[selected-single=true]:text-primary-foreground data-[today=true]:bg-accent data-[today=true]:text-accent-foreground data-[outside=true]:text-muted-foreground";

fn nav_button(slot: &'static str, label: &'static str, target: Option<NaiveDate>, side: &str, icon: Node) -> Node {
	button((
		r#type("button"),
		data_slot(slot),
		aria("label", label),
		target.map(|m| data("month", m.format("%Y-%m").to_string())),
		when(target.is_none(), disabled()),
		class(button_class(ButtonVariant::Outline, ButtonSize::Icon, &cn!(NAV, side))),
		icon,
	))
}

fn day_cell(props: &CalendarProps, day: NaiveDate) -> Node {
	let outside = day.month() != props.month.month() || day.year() != props.month.year();
	if outside && !props.show_outside_days {
		return td((role("gridcell"), aria("hidden", "true"), class("size-8 p-0")));
	}

	let iso = day.to_string();
	let is_selected = props.selected == Some(day);
	let is_today = props.today == Some(day);
	let markers = (
		when(is_selected, aria("selected", "true")),
		when(is_selected, data("selected-single", "true")),
		when(is_today, data("today", "true")),
		when(outside, data("outside", "true")),
	);

	td((
		role("gridcell"),
		data("day", iso.clone()),
		markers.clone(),
		class("relative size-8 p-0 text-center text-sm"),
		button((
			r#type("button"),
			data_slot("calendar-day"),
			data("day", iso),
			markers,
			tab_index(if is_selected { "0" } else { "-1" }),
			class(button_class(ButtonVariant::Ghost, ButtonSize::Icon, DAY_BUTTON)),
			day.day().to_string(),
		)),
	))
}

/// Renders the month grid.
///
/// # Errors
///
/// Fails only when the displayed month lies at the edge of chrono's date
/// range.
pub fn calendar(props: &CalendarProps) -> Result<Node> {
	let weeks = month_weeks(props.month.year(), props.month.month(), props.week_start)?;
	let caption = props.month.format("%B %Y").to_string();
	let first = props.month.with_day(1).unwrap_or(props.month);

	let header_row: Vec<Node> = weeks
		.first()
		.map(|week| {
			week.iter()
				.map(|day| {
					let short: String = day.format("%a").to_string().chars().take(2).collect();
					th((
						attr("scope", "col"),
						aria("label", day.format("%A").to_string()),
						class("text-muted-foreground w-8 rounded-md text-[0.8rem] font-normal"),
						short,
					))
				})
				.collect()
		})
		.unwrap_or_default();

	let body_rows: Vec<Node> = weeks
		.iter()
		.map(|week| {
			tr((
				class("mt-2 flex w-full"),
				week.iter().map(|day| day_cell(props, *day)).collect::<Vec<_>>(),
			))
		})
		.collect();

	Ok(compose(
		"div",
		(data_slot("calendar"), class(cn!("bg-background p-3", props.class))),
		div((
			class("flex flex-col gap-4"),
			div((
				data_slot("calendar-caption"),
				class("relative flex h-8 items-center justify-center"),
				nav_button(
					"calendar-previous",
					"Go to the previous month",
					first.checked_sub_months(Months::new(1)),
					"left-0",
					icons::chevron_left("size-4"),
				),
				span((
					role("status"),
					aria("live", "polite"),
					class("text-sm font-medium"),
					caption.clone(),
				)),
				nav_button(
					"calendar-next",
					"Go to the next month",
					first.checked_add_months(Months::new(1)),
					"right-0",
					icons::chevron_right("size-4"),
				),
			)),
			table((
				role("grid"),
				aria("label", caption),
				class("w-full border-collapse"),
				thead((aria("hidden", "true"), tr((class("flex"), header_row)))),
				tbody(body_rows),
			)),
		)),
	))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn date(y: i32, m: u32, d: u32) -> NaiveDate {
		NaiveDate::from_ymd_opt(y, m, d).unwrap()
	}

	#[rstest]
	#[case(2025, 6, Weekday::Sun, 5, date(2025, 6, 1), date(2025, 7, 5))]
	#[case(2025, 6, Weekday::Mon, 6, date(2025, 5, 26), date(2025, 7, 6))]
	#[case(2026, 2, Weekday::Sun, 4, date(2026, 2, 1), date(2026, 2, 28))]
	#[case(2024, 2, Weekday::Mon, 5, date(2024, 1, 29), date(2024, 3, 3))]
	fn test_month_weeks(
		#[case] year: i32,
		#[case] month: u32,
		#[case] week_start: Weekday,
		#[case] count: usize,
		#[case] first: NaiveDate,
		#[case] last: NaiveDate,
	) {
		let weeks = month_weeks(year, month, week_start).unwrap();
		assert_eq!(weeks.len(), count);
		assert_eq!(weeks[0][0], first);
		assert_eq!(weeks[0][0].weekday(), week_start);
		assert_eq!(weeks[count - 1][6], last);
	}

	#[rstest]
	#[case(0)]
	#[case(13)]
	fn test_month_weeks_rejects_bad_month(#[case] month: u32) {
		let err = month_weeks(2025, month, Weekday::Sun).unwrap_err();
		assert!(matches!(err, ComponentError::InvalidProperty(_)));
		assert!(err.to_string().contains("invalid month"));
	}

	#[rstest]
	fn test_day_markers() {
		let props = CalendarProps::new(date(2025, 6, 15))
			.selected(date(2025, 6, 10))
			.today(date(2025, 6, 12));
		let html = calendar(&props).unwrap().render_to_string();

		assert!(html.contains(r#"<table role="grid" aria-label="June 2025" "#));
		assert!(html.contains(
			r#"<td role="gridcell" data-day="2025-06-10" aria-selected="true" data-selected-single="true" class="#
		));
		assert!(html.contains(r#"<td role="gridcell" data-day="2025-06-12" data-today="true" class="#));
		assert!(html.contains(r#"<td role="gridcell" data-day="2025-07-01" data-outside="true" class="#));
		assert_eq!(html.matches("aria-selected=").count(), 2);
	}

	#[rstest]
	fn test_header_and_navigation() {
		let html = calendar(&CalendarProps::new(date(2025, 1, 31)).week_start(Weekday::Mon))
			.unwrap()
			.render_to_string();
		assert!(html.contains(r#"data-slot="calendar-previous" aria-label="Go to the previous month" data-month="2024-12""#));
		assert!(html.contains(r#"data-slot="calendar-next" aria-label="Go to the next month" data-month="2025-02""#));
		assert!(html.contains(r#"<th scope="col" aria-label="Monday" class="#));
		assert!(html.contains(">Mo</th>"));
		assert!(html.contains(r#"class="lucide lucide-chevron-left size-4""#));
	}

	#[rstest]
	fn test_hidden_outside_days() {
		let html = calendar(&CalendarProps::new(date(2025, 6, 1)).show_outside_days(false))
			.unwrap()
			.render_to_string();
		assert!(!html.contains("data-outside"));
		assert!(html.contains(r#"<td role="gridcell" aria-hidden="true" class="size-8 p-0"></td>"#));
		assert_eq!(html.matches(r#"data-slot="calendar-day""#).count(), 30);
	}
}
