use std::collections::HashMap;

use contracts::logs::{parse_br_date, LogEntry};
use js_sys::{Array, Function, Reflect};
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlCanvasElement;

/// Bucket the filtered log set by day: one `(DD/MM/YYYY, count)` pair per
/// distinct date, ordered by true calendar date ascending. Date strings that
/// do not parse bucket after every parsable one, in string order.
pub fn daily_counts(logs: &[LogEntry]) -> Vec<(String, u64)> {
    let mut buckets: HashMap<&str, u64> = HashMap::new();
    for log in logs {
        *buckets.entry(log.date.as_str()).or_insert(0) += 1;
    }

    let mut counts: Vec<(String, u64)> = buckets
        .into_iter()
        .map(|(date, count)| (date.to_string(), count))
        .collect();
    counts.sort_by(|(a, _), (b, _)| {
        let (da, db) = (parse_br_date(a), parse_br_date(b));
        match (da, db) {
            (Some(da), Some(db)) => da.cmp(&db),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.cmp(b),
        }
    });
    counts
}

#[derive(Serialize)]
struct ChartConfig {
    #[serde(rename = "type")]
    kind: &'static str,
    data: ChartData,
    options: ChartOptions,
}

#[derive(Serialize)]
struct ChartData {
    labels: Vec<String>,
    datasets: Vec<ChartDataset>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChartDataset {
    label: &'static str,
    data: Vec<u64>,
    background_color: &'static str,
    border_color: &'static str,
    border_width: f64,
    border_radius: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChartOptions {
    responsive: bool,
    maintain_aspect_ratio: bool,
    scales: ChartScales,
    plugins: ChartPlugins,
}

#[derive(Serialize)]
struct ChartScales {
    y: ChartAxis,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChartAxis {
    begin_at_zero: bool,
}

#[derive(Serialize)]
struct ChartPlugins {
    legend: ChartLegend,
    title: ChartTitle,
}

#[derive(Serialize)]
struct ChartLegend {
    display: bool,
}

#[derive(Serialize)]
struct ChartTitle {
    display: bool,
    text: &'static str,
}

fn bar_config(counts: &[(String, u64)]) -> ChartConfig {
    ChartConfig {
        kind: "bar",
        data: ChartData {
            labels: counts.iter().map(|(date, _)| date.clone()).collect(),
            datasets: vec![ChartDataset {
                label: "Logins por Dia",
                data: counts.iter().map(|(_, count)| *count).collect(),
                background_color: "rgba(0, 224, 239, 0.6)",
                border_color: "rgba(0, 240, 255, 1)",
                border_width: 1.5,
                border_radius: 4,
            }],
        },
        options: ChartOptions {
            responsive: true,
            maintain_aspect_ratio: false,
            scales: ChartScales {
                y: ChartAxis { begin_at_zero: true },
            },
            plugins: ChartPlugins {
                legend: ChartLegend { display: false },
                title: ChartTitle {
                    display: true,
                    text: "Volume de Acessos Diários",
                },
            },
        },
    }
}

/// Owns the Chart.js instance bound to one canvas. `render` always destroys
/// the previous instance before constructing a new one, so re-rendering on
/// every filter change never accumulates hidden charts.
#[derive(Default)]
pub struct ChartRenderer {
    instance: Option<JsValue>,
}

impl ChartRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        canvas: &HtmlCanvasElement,
        counts: &[(String, u64)],
    ) -> Result<(), JsValue> {
        self.dispose();

        let window =
            web_sys::window().ok_or_else(|| JsValue::from_str("window not available"))?;
        let chart_value = Reflect::get(&window, &JsValue::from_str("Chart"))?;
        if !chart_value.is_function() {
            return Err(JsValue::from_str("Chart.js is not loaded"));
        }
        let chart_ctor: Function = chart_value.dyn_into()?;

        let config = bar_config(counts)
            .serialize(&Serializer::json_compatible())
            .map_err(|err| JsValue::from_str(&err.to_string()))?;

        let args = Array::new();
        args.push(canvas);
        args.push(&config);
        let instance = Reflect::construct(&chart_ctor, &args)?;
        self.instance = Some(instance);
        Ok(())
    }

    /// Destroy the current instance, if any.
    pub fn dispose(&mut self) {
        let Some(instance) = self.instance.take() else {
            return;
        };
        let destroy = Reflect::get(&instance, &JsValue::from_str("destroy"))
            .ok()
            .and_then(|v| v.dyn_into::<Function>().ok());
        if let Some(destroy) = destroy {
            let _ = destroy.call0(&instance);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log(date: &str) -> LogEntry {
        LogEntry {
            name: "Ana".into(),
            company: "X".into(),
            date: date.into(),
            time: "10:00".into(),
        }
    }

    #[test]
    fn buckets_count_entries_per_day() {
        let logs = vec![log("05/04/2024"), log("05/04/2024"), log("06/04/2024")];
        let counts = daily_counts(&logs);
        assert_eq!(
            counts,
            vec![("05/04/2024".to_string(), 2), ("06/04/2024".to_string(), 1)]
        );
    }

    #[test]
    fn buckets_are_chronological_even_from_reverse_input() {
        // Most-recent-first input, as the sorted log set arrives.
        let logs = vec![
            log("10/05/2024"),
            log("28/04/2024"),
            log("01/01/2024"),
            log("31/12/2023"),
        ];
        let dates: Vec<String> = daily_counts(&logs).into_iter().map(|(d, _)| d).collect();
        assert_eq!(dates, ["31/12/2023", "01/01/2024", "28/04/2024", "10/05/2024"]);
    }

    #[test]
    fn calendar_order_beats_string_order() {
        let logs = vec![log("02/01/2024"), log("10/12/2023")];
        let dates: Vec<String> = daily_counts(&logs).into_iter().map(|(d, _)| d).collect();
        // String order would put "02/01/2024" first.
        assert_eq!(dates, ["10/12/2023", "02/01/2024"]);
    }

    #[test]
    fn unparsable_dates_bucket_last() {
        let logs = vec![log("zz"), log("01/03/2024"), log("aa")];
        let dates: Vec<String> = daily_counts(&logs).into_iter().map(|(d, _)| d).collect();
        assert_eq!(dates, ["01/03/2024", "aa", "zz"]);
    }
}
