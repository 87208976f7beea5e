/// Fixed prompt sent to the model on every run.
pub const INVESTMENT_NEWS_PROMPT: &str = r#"
Provide the latest investment news for Bitcoin, Stocks, Gold, and Real Estate.
Follow this exact format, keeping details realistic:

Bitcoin: "Bitcoin remains steady around $24,500, with a slight dip in trading volume."
Source: CoinDesk (https://www.coindesk.com/markets)
Risk: Medium
Volatility: High
Trend: Neutral
Market Condition: Stable
Sector: Cryptocurrency
Historical Performance: Up 3% last month

Stocks: "US stocks close higher, Nasdaq leads gains."
Source: CNBC (https://www.cnbc.com/market-update)
Risk: Low
Volatility: Medium
Trend: Bullish
Market Condition: Strong
Sector: Technology
Historical Performance: Up 7% last month

Gold: "Gold prices edge higher on geopolitical tensions."
Source: Reuters (https://www.reuters.com/markets/commodities)
Risk: Low
Volatility: Low
Trend: Bullish
Market Condition: Safe Haven
Sector: Commodities
Historical Performance: Up 5% last month

Real Estate: "US home sales fall 7.7% as mortgage rates soar."
Source: Bloomberg (https://www.bloomberg.com/news/articles)
Risk: High
Volatility: Medium
Trend: Bearish
Market Condition: Weak
Sector: Housing
Historical Performance: Down 4% last month
"#;

/// Asset classes the prompt asks about, in prompt order.
pub const ASSETS: [&str; 4] = ["Bitcoin", "Stocks", "Gold", "Real Estate"];
