use std::path::{Path, PathBuf};

use charming::{
    component::{Axis, Grid, Title},
    datatype::DataPointItem,
    element::{AxisLabel, AxisType, ItemStyle, LineStyle, LineStyleType, NameLocation, SplitLine},
    series::Bar,
    Chart, ImageFormat, ImageRenderer,
};
use tracing::info;

use crate::error::{AnalysisError, Result};
use crate::model::decimal::to_chart_value;
use crate::model::summary::SummaryRecord;

pub const AVERAGE_PNL_FILE: &str = "average_pnl_by_sentiment.png";
pub const WIN_RATE_FILE: &str = "win_rate_by_sentiment.png";

const WIDTH: u32 = 1000;
const HEIGHT: u32 = 600;
const X_AXIS_NAME: &str = "Market Sentiment Classification";

const PROFIT_COLOR: &str = "green";
const LOSS_COLOR: &str = "red";
const WIN_RATE_COLOR: &str = "skyblue";

pub fn bar_color(profitable: bool) -> &'static str {
    if profitable {
        PROFIT_COLOR
    } else {
        LOSS_COLOR
    }
}

/// Layout shared by both charts: rotated category labels, dashed horizontal
/// grid lines and a grid sized to fit its labels.
fn bar_chart(title: &str, y_name: &str, summaries: &[SummaryRecord]) -> (Chart, Axis) {
    let categories = summaries
        .iter()
        .map(|s| s.classification.label().to_string())
        .collect::<Vec<_>>();

    let chart = Chart::new()
        .title(Title::new().text(title).left("center"))
        .grid(Grid::new().left("8%").right("4%").bottom("12%").contain_label(true))
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .name(X_AXIS_NAME)
                .name_location(NameLocation::Middle)
                .name_gap(70)
                .data(categories)
                .axis_label(AxisLabel::new().rotate(45)),
        );

    let y_axis = Axis::new()
        .type_(AxisType::Value)
        .name(y_name)
        .name_location(NameLocation::Middle)
        .name_gap(60)
        .split_line(
            SplitLine::new()
                .show(true)
                .line_style(LineStyle::new().type_(LineStyleType::Dashed).opacity(0.7)),
        );

    (chart, y_axis)
}

/// Average closed PnL per classification, each bar coloured by its own sign.
pub fn average_pnl_chart(summaries: &[SummaryRecord]) -> Chart {
    let (chart, y_axis) = bar_chart(
        "Average Closed PnL per Trade by Market Sentiment",
        "Average Closed PnL (USD)",
        summaries,
    );

    let data = summaries
        .iter()
        .map(|s| {
            DataPointItem::new(to_chart_value(s.average_pnl))
                .item_style(ItemStyle::new().color(bar_color(s.is_profitable())))
        })
        .collect::<Vec<_>>();

    chart
        .y_axis(y_axis)
        .series(Bar::new().name("Average_PnL").data(data))
}

pub fn win_rate_chart(summaries: &[SummaryRecord]) -> Chart {
    let (chart, y_axis) = bar_chart(
        "Win Rate by Market Sentiment Classification",
        "Win Rate (%)",
        summaries,
    );

    let data = summaries
        .iter()
        .map(|s| DataPointItem::new(to_chart_value(s.win_rate)))
        .collect::<Vec<_>>();

    chart.y_axis(y_axis.min(0).max(100)).series(
        Bar::new()
            .name("Win_Rate")
            .item_style(ItemStyle::new().color(WIN_RATE_COLOR))
            .data(data),
    )
}

/// Writes `chart` as a PNG. The renderer lives only for this call.
pub fn save_png(chart: &Chart, path: &Path) -> Result<()> {
    let mut renderer = ImageRenderer::new(WIDTH, HEIGHT);
    renderer
        .save_format(ImageFormat::Png, chart, path)
        .map_err(|e| AnalysisError::Render {
            path: path.to_path_buf(),
            message: format!("{:?}", e),
        })
}

pub fn render(summaries: &[SummaryRecord], output_dir: &Path) -> Result<Vec<PathBuf>> {
    let charts = [
        (AVERAGE_PNL_FILE, average_pnl_chart(summaries)),
        (WIN_RATE_FILE, win_rate_chart(summaries)),
    ];

    let mut written = Vec::with_capacity(charts.len());
    for (file, chart) in charts {
        let path = output_dir.join(file);
        save_png(&chart, &path)?;
        info!(path = %path.display(), "chart saved");
        written.push(path);
    }
    Ok(written)
}
