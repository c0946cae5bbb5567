use std::fmt::{self, Write};
use std::time::Duration;

use super::tabs::{Panel, Tab, TabState};

const TRADE_COLUMNS: [&str; 7] = ["Time", "Market", "Outcome", "Size", "Price", "Trader", ""];
const TRADER_COLUMNS: [&str; 7] = [
    "Trader",
    "Trades",
    "Total Volume",
    "Avg Size",
    "Max Size",
    "First Trade",
    "Last Trade",
];

/// Page shell. Panels carry their fragment URL and poll policy as data
/// attributes; `app.js` does the fetching.
pub fn render_page(tabs: &TabState, refresh: Duration) -> Result<String, fmt::Error> {
    let mut html = String::new();
    write!(
        html,
        r##"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Polymarket Large Trade Monitor</title>
<link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css">
<link rel="stylesheet" href="/style.css">
</head>
<body data-refresh-ms="{}">
<header><h1><i class="fas fa-chart-line"></i> Polymarket Large Trade Monitor</h1></header>
<section id="stats" class="stats-grid" data-partial="{}" data-target="#stats"></section>
<nav class="tabs">"##,
        refresh.as_millis(),
        Panel::Stats.partial_path(),
    )?;

    for tab in Tab::ALL {
        write!(
            html,
            r#"<button class="tab-btn{}" data-tab="{tab}"><i class="fas {}"></i> {}</button>"#,
            active_class(tabs, tab),
            tab.icon(),
            tab.label(),
        )?;
    }
    html.push_str("</nav>\n");

    for tab in Tab::ALL {
        let target = match tab {
            Tab::Trades => "#tradesTable tbody",
            Tab::Traders => "#tradersTable tbody",
            Tab::Alerts => "#alertsList",
        };
        write!(
            html,
            r#"<div id="{tab}-tab" class="tab-content{}" data-partial="{}" data-target="{target}" data-poll="{}">"#,
            active_class(tabs, tab),
            Panel::Tab(tab).partial_path(),
            tab.poll_policy().as_str(),
        )?;
        match tab {
            Tab::Trades => write_table(&mut html, "tradesTable", &TRADE_COLUMNS)?,
            Tab::Traders => write_table(&mut html, "tradersTable", &TRADER_COLUMNS)?,
            Tab::Alerts => html.push_str(r#"<div id="alertsList" class="alerts-list"></div>"#),
        }
        html.push_str("</div>\n");
    }

    html.push_str("<script src=\"/app.js\"></script>\n</body>\n</html>\n");
    Ok(html)
}

fn active_class(tabs: &TabState, tab: Tab) -> &'static str {
    if tabs.is_active(tab) {
        " active"
    } else {
        ""
    }
}

fn write_table(html: &mut String, id: &str, columns: &[&str]) -> fmt::Result {
    write!(html, r#"<table id="{id}"><thead><tr>"#)?;
    for column in columns {
        write!(html, "<th>{column}</th>")?;
    }
    html.push_str("</tr></thead><tbody></tbody></table>");
    Ok(())
}
