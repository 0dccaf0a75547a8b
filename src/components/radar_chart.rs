//! SVG radar chart of per-subject mastery.

use leptos::prelude::*;

use crate::util::radar::{RadarGeometry, SubjectMastery};

const GEOMETRY: RadarGeometry = RadarGeometry { size: 240.0, padding: 40.0 };
const RINGS: usize = 4;

#[component]
pub fn RadarChart(#[prop(into)] data: Signal<Vec<SubjectMastery>>) -> impl IntoView {
    let view_box = format!("0 0 {0} {0}", GEOMETRY.size);

    let chart = move || {
        let data = data.get();
        let count = data.len();
        // A polygon needs at least three axes.
        if count < 3 {
            return view! { <p class="radar-chart__empty">"Grades from three or more subjects will appear here."</p> }
                .into_any();
        }
        let percentages: Vec<f64> = data.iter().map(|m| m.percentage).collect();
        let rings = GEOMETRY
            .ring_paths(count, RINGS)
            .into_iter()
            .map(|d| view! { <path class="radar-chart__ring" d=d></path> })
            .collect_view();
        let axes = (0..count)
            .map(|index| {
                let tip = GEOMETRY.vertex(index, count, 1.0);
                let c = format!("{:.2}", GEOMETRY.center());
                view! {
                    <line
                        class="radar-chart__axis"
                        x1=c.clone()
                        y1=c
                        x2=format!("{:.2}", tip.x)
                        y2=format!("{:.2}", tip.y)
                    ></line>
                }
            })
            .collect_view();
        let labels = data
            .iter()
            .enumerate()
            .map(|(index, mastery)| {
                let (point, anchor) = GEOMETRY.label_anchor(index, count);
                view! {
                    <text
                        class="radar-chart__label"
                        x=format!("{:.2}", point.x)
                        y=format!("{:.2}", point.y)
                        text-anchor=anchor
                    >
                        {format!("{} {:.0}%", mastery.subject, mastery.percentage)}
                    </text>
                }
            })
            .collect_view();
        let data_path = GEOMETRY.data_path(&percentages, 100.0);

        view! {
            <svg class="radar-chart__svg" viewBox=view_box.clone() role="img" aria-label="Subject mastery">
                {rings}
                {axes}
                <path class="radar-chart__data" d=data_path></path>
                {labels}
            </svg>
        }
        .into_any()
    };

    view! { <div class="radar-chart">{chart}</div> }
}
