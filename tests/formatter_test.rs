use market_news_etl::clean_response;
use market_news_etl::core::formatter::{classify_line, format_document, format_line, LineRule};

#[test]
fn test_bold_heading_maps_to_label() {
    for label in ["Bitcoin", "Stocks", "Gold", "Real Estate", "Market Condition"] {
        let line = format!("**{}**", label);
        assert_eq!(format_line(&line), format!("{}:", label));
    }
}

#[test]
fn test_source_bullet_keeps_remainder() {
    let remainders = [
        " CoinDesk (https://www.coindesk.com/markets)",
        " CNBC (https://www.cnbc.com/market-update)",
        "Bloomberg",
        "",
    ];
    for rest in remainders {
        let line = format!("- Source:{}", rest);
        let out = format_line(&line);
        assert!(out.starts_with("Source:"));
        assert_eq!(&out["Source:".len()..], rest);
    }
}

#[test]
fn test_unmatched_lines_are_byte_identical() {
    let raw = "Risk: Medium\nVolatility: High\n* Source: starred bullet\n-Source: no space\nTrend: **Neutral**";
    assert_eq!(clean_response(raw), raw);
    for line in raw.lines() {
        assert_eq!(classify_line(line), LineRule::Passthrough);
    }
}

#[test]
fn test_documented_scenario() {
    assert_eq!(
        clean_response("  Hello\n- Source: X\n**Y**  \n"),
        "Hello\nSource: X\nY:"
    );
}

#[test]
fn test_empty_input_yields_empty_output() {
    assert_eq!(clean_response(""), "");
    assert_eq!(format_document("").line_count(), 1);
    assert_eq!(format_document("").to_file_contents(), "\n");
}

#[test]
fn test_line_order_is_preserved() {
    let doc = format_document("**A**\nfirst\n- Source: s\nlast");
    assert_eq!(doc.lines, vec!["A:", "first", "Source: s", "last"]);
}
