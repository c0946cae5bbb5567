//! HTML fragments swapped into the dashboard page.

use std::fmt::{self, Write};

use chrono::TimeZone;

use super::format::{
    format_address, format_alert_type, format_count, format_currency, format_date,
    format_outcome, format_price, format_question,
};
use crate::models::{Alert, Trade, TradeStats, TraderAggregate};

/// Stat cards in display order: element id, label, value.
pub fn stat_cards(stats: &TradeStats) -> [(&'static str, &'static str, String); 6] {
    [
        ("totalTrades", "Total Trades", format_count(Some(stats.total_trades))),
        ("uniqueTraders", "Unique Traders", format_count(Some(stats.unique_traders))),
        ("totalVolume", "Total Volume", format_currency(stats.total_volume)),
        ("avgSize", "Avg Trade Size", format_currency(stats.avg_size)),
        ("newAccountTrades", "New Account Trades", format_count(stats.new_account_trades)),
        ("maxSize", "Largest Trade", format_currency(stats.max_size)),
    ]
}

pub fn render_stats(stats: &TradeStats) -> Result<String, fmt::Error> {
    let mut html = String::new();
    for (id, label, value) in stat_cards(stats) {
        write!(
            html,
            r#"<div class="stat-card"><div class="stat-value" id="{id}">{}</div><div class="stat-label">{label}</div></div>"#,
            escape_html(&value)
        )?;
    }
    Ok(html)
}

pub fn render_trades<Tz>(trades: &[Trade], tz: &Tz) -> Result<String, fmt::Error>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    if trades.is_empty() {
        return Ok(r#"<tr><td colspan="7" class="empty-state"><i class="fas fa-inbox"></i><p>No large trades recorded yet.</p><p>The monitor is running and will capture trades &gt;$25k.</p></td></tr>"#.to_string());
    }

    let mut html = String::new();
    for trade in trades {
        let badge = if trade.is_new_account {
            r#"<span class="new-badge">NEW</span>"#
        } else {
            ""
        };
        write!(
            html,
            r#"<tr><td>{}</td><td>{}</td><td>{}</td><td class="size">{}</td><td>{}</td><td class="trader-address">{}</td><td>{badge}</td></tr>"#,
            format_date(trade.timestamp.as_ref(), tz),
            escape_html(&format_question(trade.market_question.as_deref())),
            escape_html(&format_outcome(trade.outcome.as_deref())),
            format_currency(trade.size),
            format_price(trade.price),
            escape_html(&format_address(trade.trader_address.as_deref())),
        )?;
    }
    Ok(html)
}

pub fn render_traders<Tz>(traders: &[TraderAggregate], tz: &Tz) -> Result<String, fmt::Error>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    if traders.is_empty() {
        return Ok(r#"<tr><td colspan="7" class="empty-state"><i class="fas fa-users"></i><p>No trader data available yet.</p></td></tr>"#.to_string());
    }

    let mut html = String::new();
    for trader in traders {
        write!(
            html,
            r#"<tr><td class="trader-address">{}</td><td>{}</td><td class="size">{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>"#,
            escape_html(&format_address(trader.trader_address.as_deref())),
            trader.trade_count,
            format_currency(trader.total_volume),
            format_currency(trader.avg_size),
            format_currency(trader.max_size),
            format_date(trader.first_trade.as_ref(), tz),
            format_date(trader.last_trade.as_ref(), tz),
        )?;
    }
    Ok(html)
}

pub fn render_alerts<Tz>(alerts: &[Alert], tz: &Tz) -> Result<String, fmt::Error>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    if alerts.is_empty() {
        return Ok(r#"<div class="empty-state"><i class="fas fa-bell-slash"></i><p>No alerts yet.</p><p>Alerts appear when large trades from new accounts are detected.</p></div>"#.to_string());
    }

    let mut html = String::new();
    for alert in alerts {
        let class = if alert.is_new_account() {
            "new-account"
        } else {
            "large-trade"
        };
        write!(
            html,
            r#"<div class="alert-item {class}"><div class="alert-header"><span class="alert-type">{}</span><span class="alert-time">{}</span></div><div class="alert-message">{}</div><div class="alert-details"><span><i class="fas fa-chart-line"></i> {}</span><span><i class="fas fa-wallet"></i> {}</span></div></div>"#,
            escape_html(&format_alert_type(alert.kind.as_deref().unwrap_or_default())),
            format_date(alert.created_at.as_ref(), tz),
            escape_html(alert.message.as_deref().unwrap_or_default()),
            format_currency(alert.size),
            escape_html(&format_address(alert.trader_address.as_deref())),
        )?;
    }
    Ok(html)
}

/// Escape text for use inside element content or a quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::models::{RowId, Timestamp};

    fn trade(size: f64, is_new_account: bool) -> Trade {
        Trade {
            id: RowId::Int(1),
            timestamp: Some(Timestamp::Text("2024-03-05T14:07:00Z".into())),
            market_question: Some("Will ETH flip BTC?".into()),
            outcome: Some("No".into()),
            size: Some(size),
            price: Some(0.42),
            trader_address: Some("0xabcdef0123456789abcdef0123456789abcd1234".into()),
            is_new_account,
            is_sports: false,
        }
    }

    fn alert(kind: &str) -> Alert {
        Alert {
            id: RowId::Int(9),
            trade_id: RowId::Int(1),
            kind: Some(kind.into()),
            message: Some("$30k from <fresh> wallet".into()),
            created_at: Some(Timestamp::Millis(1_700_000_000_000)),
            market_question: None,
            size: Some(30_000.0),
            trader_address: Some("0xabcdef0123456789abcdef0123456789abcd1234".into()),
            timestamp: None,
        }
    }

    #[test]
    fn test_trade_row() {
        let html = render_trades(&[trade(30_000.0, true)], &Utc).unwrap();
        assert!(html.contains("<td>Mar 5, 02:07 PM</td>"));
        assert!(html.contains("<td>Will ETH flip BTC?...</td>"));
        assert!(html.contains(r#"<td class="size">$30,000</td>"#));
        assert!(html.contains("<td>42.0%</td>"));
        assert!(html.contains("0xabcdef...1234"));
        assert!(html.contains(r#"<span class="new-badge">NEW</span>"#));
    }

    #[test]
    fn test_trade_row_without_badge() {
        let html = render_trades(&[trade(26_000.0, false)], &Utc).unwrap();
        assert!(!html.contains("new-badge"));
    }

    #[test]
    fn test_empty_states_are_distinct() {
        let trades = render_trades(&[], &Utc).unwrap();
        let traders = render_traders(&[], &Utc).unwrap();
        let alerts = render_alerts(&[], &Utc).unwrap();
        assert!(trades.contains("No large trades recorded yet."));
        assert!(traders.contains("No trader data available yet."));
        assert!(alerts.contains("No alerts yet."));
    }

    #[test]
    fn test_alert_classes_and_escaping() {
        let html = render_alerts(&[alert("NEW_ACCOUNT_LARGE_TRADE"), alert("LARGE_TRADE")], &Utc)
            .unwrap();
        assert!(html.contains(r#"<div class="alert-item new-account">"#));
        assert!(html.contains(r#"<div class="alert-item large-trade">"#));
        assert!(html.contains("NEW ACCOUNT LARGE TRADE"));
        assert!(html.contains("$30k from &lt;fresh&gt; wallet"));
        assert!(html.contains("Nov 14, 10:13 PM"));
    }

    #[test]
    fn test_untyped_alert_renders_as_large_trade() {
        let untyped = Alert { kind: None, ..alert("") };
        assert!(!untyped.is_new_account());
        let html = render_alerts(&[untyped], &Utc).unwrap();
        assert!(html.contains(r#"<div class="alert-item large-trade"><div class="alert-header"><span class="alert-type"></span>"#));
    }

    #[test]
    fn test_trader_row() {
        let trader = TraderAggregate {
            trader_address: Some("0x1111111111111111111111111111111111112222".into()),
            trade_count: 3,
            total_volume: Some(90_000.0),
            avg_size: Some(30_000.0),
            max_size: Some(50_000.0),
            first_trade: Some(Timestamp::Millis(1_700_000_000_000)),
            last_trade: None,
        };
        let html = render_traders(&[trader], &Utc).unwrap();
        assert!(html.contains("0x111111...2222"));
        assert!(html.contains("<td>3</td>"));
        assert!(html.contains("$90,000"));
        assert!(html.contains("<td>-</td>"));
    }

    #[test]
    fn test_stats_with_empty_aggregates() {
        let html = render_stats(&TradeStats::default()).unwrap();
        assert!(html.contains(r#"id="totalTrades">0<"#));
        assert!(html.contains(r#"id="totalVolume">$0<"#));
        assert!(html.contains(r#"id="newAccountTrades">0<"#));
    }
}
