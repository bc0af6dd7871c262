use super::units::{ByteUnit, bytes_to_level};
use models::modem::DataUsageSettings;
use serde_json::{Value, json};

const FOREGROUND: &str = "white";

/// Base ApexCharts options shared by the extension panels. Missing labels and
/// bounds are left out of the tree rather than set to `null`.
pub fn base_chart_options(
    title: Option<&str>,
    x_title: Option<&str>,
    y_title: Option<&str>,
    y_min: Option<f64>,
    y_max: Option<f64>,
) -> Value {
    let mut options = json!({
        "chart": {
            "toolbar": { "show": false },
            "foreColor": FOREGROUND
        },
        "tooltip": { "enabled": false },
        "dataLabels": { "enabled": false },
        "title": {
            "align": "center",
            "style": { "fontSize": "16px", "color": FOREGROUND }
        },
        "yaxis": {
            "title": {
                "style": { "fontSize": "14px", "color": FOREGROUND }
            },
            "labels": {
                "style": { "colors": FOREGROUND }
            }
        },
        "xaxis": {
            "title": {
                "style": { "fontSize": "14px", "color": FOREGROUND }
            },
            "labels": {
                "show": true,
                "style": { "colors": FOREGROUND }
            }
        },
        "grid": { "borderColor": FOREGROUND }
    });

    insert_some(&mut options["title"], "text", title);
    insert_some(&mut options["xaxis"]["title"], "text", x_title);
    insert_some(&mut options["yaxis"]["title"], "text", y_title);
    insert_some(&mut options["yaxis"], "min", y_min);
    insert_some(&mut options["yaxis"], "max", y_max);

    options
}

fn insert_some<T: Into<Value>>(target: &mut Value, key: &str, value: Option<T>) {
    if let (Some(value), Some(object)) = (value, target.as_object_mut()) {
        object.insert(key.to_string(), value.into());
    }
}

/// Bar chart of daily received and transmitted data. Every point is scaled to
/// one unit, `unit` or the one fitting the largest point.
pub fn data_usage_chart(settings: &DataUsageSettings, unit: Option<ByteUnit>) -> Value {
    let unit = unit.unwrap_or_else(|| {
        let largest = settings
            .data_points
            .values()
            .map(|(rx, tx)| (*rx).max(*tx))
            .max()
            .unwrap_or_default();
        ByteUnit::fitting(largest as f64)
    });
    let level = |bytes: u64| bytes_to_level(bytes as f64, Some(unit)).0;

    let y_title = format!("Data ({unit})");
    let mut options = base_chart_options(
        Some("Data usage"),
        Some("Day of month"),
        Some(&y_title),
        Some(0.0),
        None,
    );

    options["chart"]["type"] = json!("bar");
    options["xaxis"]["categories"] = settings
        .data_points
        .keys()
        .map(|day| json!(day))
        .collect();
    options["series"] = json!([
        {
            "name": "RX",
            "data": settings.data_points.values().map(|(rx, _)| level(*rx)).collect::<Vec<_>>()
        },
        {
            "name": "TX",
            "data": settings.data_points.values().map(|(_, tx)| level(*tx)).collect::<Vec<_>>()
        }
    ]);

    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_base_options_without_labels() {
        let options = base_chart_options(None, None, None, None, None);

        assert_eq!(options["chart"]["foreColor"], "white");
        assert_eq!(options["chart"]["toolbar"]["show"], false);
        assert_eq!(options["title"]["style"]["fontSize"], "16px");
        assert_eq!(options["xaxis"]["labels"]["show"], true);
        assert!(options["title"].get("text").is_none());
        assert!(options["yaxis"].get("min").is_none());
        assert!(options["yaxis"].get("max").is_none());
    }

    #[test]
    fn test_base_options_with_labels() {
        let options = base_chart_options(
            Some("Signal"),
            Some("Time"),
            Some("dBm"),
            Some(-120.0),
            Some(-40.0),
        );

        assert_eq!(options["title"]["text"], "Signal");
        assert_eq!(options["xaxis"]["title"]["text"], "Time");
        assert_eq!(options["yaxis"]["title"]["text"], "dBm");
        assert_eq!(options["yaxis"]["min"], -120.0);
        assert_eq!(options["yaxis"]["max"], -40.0);
        assert_eq!(options["grid"]["borderColor"], "white");
    }

    #[test]
    fn test_data_usage_chart_scales_to_fitting_unit() {
        let settings = DataUsageSettings {
            data_points: BTreeMap::from([(1, (1_048_576, 524_288)), (2, (3_145_728, 0))]),
            ..Default::default()
        };

        let chart = data_usage_chart(&settings, None);

        assert_eq!(chart["yaxis"]["title"]["text"], "Data (MB)");
        assert_eq!(chart["xaxis"]["categories"], json!([1, 2]));
        assert_eq!(chart["series"][0]["data"], json!([1.0, 3.0]));
        assert_eq!(chart["series"][1]["data"], json!([0.5, 0.0]));
    }

    #[test]
    fn test_data_usage_chart_empty() {
        let chart = data_usage_chart(&DataUsageSettings::default(), Some(ByteUnit::Gigabytes));

        assert_eq!(chart["yaxis"]["title"]["text"], "Data (GB)");
        assert_eq!(chart["series"][0]["data"], json!([]));
    }
}
