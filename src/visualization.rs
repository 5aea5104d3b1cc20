use crate::ledger::GroupLedger;
use crate::report::CurrencyFormat;
use log::debug;
use serde_json::{Value, json};

// Generates Chart.js configuration for visualizing member balances in a group
pub struct Visualization;

impl Visualization {
    /// Generates a Chart.js bar chart of every member's net position.
    ///
    /// Bars are in major units (minor units scaled by the currency's digits);
    /// receivables are green and dues red. Members appear in join order.
    pub fn generate_balance_chart(ledger: &GroupLedger, currency: &CurrencyFormat) -> Value {
        let group = ledger.group();
        debug!(
            "Generating balance chart for group {} with {} entries",
            group.id,
            ledger.entries().len()
        );

        let balances = ledger.balances();
        let scale = 10f64.powi(currency.minor_unit_digits as i32);

        let mut labels: Vec<String> = Vec::new();
        let mut data: Vec<f64> = Vec::new();
        let mut background_colors = Vec::new();
        let mut border_colors = Vec::new();
        for member in &group.members {
            let net = balances.get(&member.id).copied().unwrap_or(0);
            let (r, g, b) = match net {
                n if n > 0 => (75, 192, 192),
                n if n < 0 => (255, 99, 132),
                _ => (201, 203, 207),
            };
            labels.push(member.name.clone());
            data.push(net as f64 / scale);
            background_colors.push(format!("rgba({}, {}, {}, 0.6)", r, g, b));
            border_colors.push(format!("rgba({}, {}, {}, 1)", r, g, b));
        }

        let chart_config = json!({
            "type": "bar",
            "data": {
                "labels": labels,
                "datasets": [{
                    "label": "Net Position",
                    "data": data,
                    "backgroundColor": background_colors,
                    "borderColor": border_colors,
                    "borderWidth": 1
                }]
            },
            "options": {
                "scales": {
                    "y": {
                        "title": {
                            "display": true,
                            "text": format!("Balance ({})", currency.symbol)
                        }
                    },
                    "x": {
                        "title": {
                            "display": true,
                            "text": "Members"
                        }
                    }
                },
                "plugins": {
                    "title": {
                        "display": true,
                        "text": format!("Balances for Group: {}", group.name)
                    }
                }
            }
        });

        debug!("Generated Chart.js configuration for group {}", group.id);
        chart_config
    }
}
