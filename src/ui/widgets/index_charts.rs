//! Line charts of recent index closes.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
};
use rust_decimal::prelude::ToPrimitive;

use crate::market::IndexChart;
use crate::ui::KeyHints;
use crate::ui::layout::stacked;

/// One chart per index, stacked vertically.
pub struct IndexCharts;

impl IndexCharts {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        title: &str,
        charts: &[IndexChart],
        keys: &KeyHints,
    ) {
        let outer = Block::default()
            .title(title.to_string())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        if charts.is_empty() {
            let empty = Paragraph::new(format!(
                "No chart data loaded. Press {} to refresh.",
                keys.refresh
            ))
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(empty, inner);
            return;
        }

        for (chart, slot) in charts.iter().zip(stacked(inner, charts.len())) {
            Self::render_chart(frame, slot, chart);
        }
    }

    fn render_chart(frame: &mut Frame, area: Rect, chart: &IndexChart) {
        let series = &chart.series;
        let data = series.chart_data();

        let heading = match (series.last_close(), series.change_percent()) {
            (Some(last), Some(change)) => {
                let sign = if change.is_sign_negative() { "" } else { "+" };
                format!(" {} {:.2} ({}{:.2}%) ", chart.name, last, sign, change)
            }
            _ => format!(" {} ", chart.name),
        };
        let color = match series.change_percent() {
            Some(change) if change.is_sign_negative() => Color::Red,
            Some(_) => Color::Green,
            None => Color::White,
        };

        let (lo, hi) = series
            .bounds()
            .and_then(|(lo, hi)| Some((lo.to_f64()?, hi.to_f64()?)))
            .unwrap_or((0.0, 1.0));
        // Pad flat series so the line is not drawn on the border.
        let pad = if hi > lo { (hi - lo) * 0.05 } else { 1.0 };
        let x_max = data.len().saturating_sub(1).max(1) as f64;

        let x_labels: Vec<Span> = match (series.points.first(), series.points.last()) {
            (Some(first), Some(last)) => vec![
                Span::raw(first.timestamp.format("%d %b").to_string()),
                Span::raw(last.timestamp.format("%d %b").to_string()),
            ],
            _ => Vec::new(),
        };

        let dataset = Dataset::default()
            .name(chart.name.clone())
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(color))
            .data(&data);

        let widget = Chart::new(vec![dataset])
            .block(Block::default().title(heading).borders(Borders::TOP))
            .x_axis(
                Axis::default()
                    .style(Style::default().fg(Color::DarkGray))
                    .bounds([0.0, x_max])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .style(Style::default().fg(Color::DarkGray))
                    .bounds([lo - pad, hi + pad])
                    .labels(vec![
                        Span::raw(format!("{:.0}", lo - pad)),
                        Span::raw(format!("{:.0}", hi + pad)),
                    ]),
            );

        frame.render_widget(widget, area);
    }
}
