pub mod daily_quote;
