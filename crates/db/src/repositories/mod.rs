mod daily_quote_repo;

pub use daily_quote_repo::DailyQuoteRepo;
