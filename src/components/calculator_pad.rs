//! Scientific calculator keypad, display, and history.

use leptos::prelude::*;

use crate::state::calculator::CalculatorState;

/// Keypad rows: (label, text inserted). Function keys open a parenthesis.
const KEYS: [[(&str, &str); 5]; 6] = [
    [("sin", "sin("), ("cos", "cos("), ("tan", "tan("), ("ln", "ln("), ("log", "log(")],
    [("√", "√("), ("x²", "^2"), ("xʸ", "^"), ("(", "("), (")", ")")],
    [("7", "7"), ("8", "8"), ("9", "9"), ("÷", "÷"), ("π", "π")],
    [("4", "4"), ("5", "5"), ("6", "6"), ("×", "×"), ("e", "e")],
    [("1", "1"), ("2", "2"), ("3", "3"), ("−", "−"), ("!", "!")],
    [("0", "0"), (".", "."), ("%", "%"), ("+", "+"), ("Ans", "ans")],
];

#[component]
pub fn CalculatorPad(state: RwSignal<CalculatorState>) -> impl IntoView {
    let keys = KEYS
        .iter()
        .map(|row| {
            row.iter()
                .map(|(label, text)| {
                    let text = *text;
                    view! {
                        <button type="button" class="calculator__key" on:click=move |_| state.update(|s| s.press(text))>
                            {*label}
                        </button>
                    }
                })
                .collect_view()
        })
        .collect_view();

    let history = move || {
        state.with(|s| {
            s.history()
                .enumerate()
                .map(|(index, entry)| {
                    let line = format!("{} = {}", entry.expression, entry.result);
                    view! {
                        <li>
                            <button type="button" class="calculator__history-entry" on:click=move |_| state.update(|s| s.recall(index))>
                                {line}
                            </button>
                        </li>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div class="calculator">
            <div class="calculator__display">
                <input
                    class="calculator__input"
                    type="text"
                    placeholder="0"
                    prop:value=move || state.with(|s| s.input.clone())
                    on:input=move |ev| state.update(|s| s.input = event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            state.update(CalculatorState::evaluate);
                        }
                    }
                />
                <output class=move || {
                    if state.with(|s| s.is_error) { "calculator__result calculator__result--error" } else { "calculator__result" }
                }>
                    {move || state.with(|s| s.display.clone())}
                </output>
            </div>
            <div class="calculator__controls">
                <button type="button" class="btn" on:click=move |_| state.update(CalculatorState::toggle_mode)>
                    {move || state.with(|s| s.mode.label())}
                </button>
                <button type="button" class="btn" on:click=move |_| state.update(CalculatorState::backspace)>"⌫"</button>
                <button type="button" class="btn" on:click=move |_| state.update(CalculatorState::clear)>"C"</button>
                <button type="button" class="btn btn--primary" on:click=move |_| state.update(CalculatorState::evaluate)>
                    "="
                </button>
            </div>
            <div class="calculator__keys">{keys}</div>
            <ul class="calculator__history">{history}</ul>
        </div>
    }
}
