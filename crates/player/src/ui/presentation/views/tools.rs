//! Tool box: pick a tool, show its panel

use dioxus::prelude::*;

use mucit_domain::ToolId;

use crate::ui::presentation::state::use_shell_state;

fn tool_icon(tool: ToolId) -> &'static str {
    match tool {
        ToolId::Calculator => "🧮",
        ToolId::Ruler => "📏",
        ToolId::UnitConverter => "⚖️",
        ToolId::Stopwatch => "⏱️",
        ToolId::DrawingBoard => "🎨",
        ToolId::Dictionary => "📖",
    }
}

#[component]
pub fn ToolsView() -> Element {
    let mut state = use_shell_state();
    let selected = state.shell.read().tool;

    let content = match selected {
        Some(tool) => rsx! {
            div {
                class: "card tool-panel",
                "data-tool": tool.slug(),
                h2 { "{tool_icon(tool)} {tool.label()}" }
                p { class: "hint", "Bu araç yakında burada olacak." }
                button {
                    class: "btn btn-ghost",
                    onclick: move |_| state.navigate(|s| s.close_tool()),
                    "← Tüm araçlar"
                }
            }
        },
        None => rsx! {
            div {
                class: "tool-grid",
                for tool in ToolId::ALL {
                    button {
                        key: "{tool.slug()}",
                        class: "tool-card",
                        onclick: move |_| state.navigate(|s| s.select_tool(tool)),
                        span { class: "tool-icon", "{tool_icon(tool)}" }
                        span { class: "tool-label", "{tool.label()}" }
                    }
                }
            }
        },
    };

    rsx! {
        section {
            class: "screen tools",
            h1 { class: "title", "Araç Kutusu" }
            {content}
        }
    }
}
