use navweave::application::HoverTransition;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

use super::plural;

pub struct HoverView<'a> {
    transitions: &'a [HoverTransition],
}

impl<'a> HoverView<'a> {
    pub fn new(transitions: &'a [HoverTransition]) -> Self {
        Self { transitions }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let final_state = self.transitions.last().map(|t| t.to).unwrap_or("closed");
        let final_text = if final_state == "closed" {
            ColoredText::dim(final_state)
        } else {
            ColoredText::success(final_state)
        };
        let mut out = format!(
            "{} {} {}, panel ends {}\n",
            Icon::Success.colored(supports_color, supports_unicode),
            ColoredText::plain("Hover replay:").bold().render(supports_color),
            plural(self.transitions.len(), "step", "steps"),
            final_text.render(supports_color)
        );

        let arrow = Icon::Arrow.render(supports_unicode);
        for t in self.transitions {
            let mut line = format!(
                "  {:>6}ms  {:<5}  {} {} {}",
                t.at_ms, t.event, t.from, arrow, t.to
            );
            if let Some(close_at) = t.close_at_ms {
                line.push_str(&format!("  (closes at {}ms)", close_at));
            }
            if t.implicit {
                line.push_str("  (implicit)");
            }

            let styled = if t.from == t.to {
                ColoredText::dim(line)
            } else {
                ColoredText::plain(line)
            };
            out.push_str(&styled.render(supports_color));
            out.push('\n');
        }

        out
    }
}
