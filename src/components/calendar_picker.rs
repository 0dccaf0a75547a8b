//! Month-grid date picker bound to a `YYYY-MM-DD` string signal.

use leptos::prelude::*;
use time::{Date, OffsetDateTime};

use crate::util::calendar::{MonthView, WEEKDAY_LABELS, format_iso_date, parse_iso_date};

#[component]
pub fn CalendarPicker(value: RwSignal<String>) -> impl IntoView {
    let today: Date = OffsetDateTime::now_utc().date();
    let initial = value.with_untracked(|raw| parse_iso_date(raw)).unwrap_or(today);
    let month = RwSignal::new(MonthView::containing(initial));
    let selected = move || value.with(|raw| parse_iso_date(raw));

    let days = move || {
        month
            .get()
            .grid(today, selected())
            .into_iter()
            .map(|day| {
                let mut class = String::from("calendar__day");
                if !day.in_month {
                    class.push_str(" calendar__day--outside");
                }
                if day.is_today {
                    class.push_str(" calendar__day--today");
                }
                if day.is_selected {
                    class.push_str(" calendar__day--selected");
                }
                let date = day.date;
                view! {
                    <button type="button" class=class on:click=move |_| value.set(format_iso_date(date))>
                        {date.day()}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <div class="calendar">
            <div class="calendar__header">
                <button type="button" class="btn btn--icon" on:click=move |_| month.update(|m| *m = m.prev())>
                    "‹"
                </button>
                <span class="calendar__title">{move || month.get().title()}</span>
                <button type="button" class="btn btn--icon" on:click=move |_| month.update(|m| *m = m.next())>
                    "›"
                </button>
            </div>
            <div class="calendar__weekdays">
                {WEEKDAY_LABELS.iter().map(|label| view! { <span>{*label}</span> }).collect_view()}
            </div>
            <div class="calendar__grid">{days}</div>
        </div>
    }
}
