//! Financial quotes shown alongside loading screens and the dashboard

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub quote: &'static str,
    pub author: &'static str,
}

pub const QUOTES: [Quote; 10] = [
    Quote {
        quote: "The stock market is filled with individuals who know the price of everything, but the value of nothing.",
        author: "Philip Fisher",
    },
    Quote {
        quote: "It's not how much money you make, but how much money you keep, how hard it works for you, and how many generations you keep it for.",
        author: "Robert Kiyosaki",
    },
    Quote {
        quote: "The real measure of your wealth is how much you'd be worth if you lost all your money.",
        author: "Anonymous",
    },
    Quote {
        quote: "Don't save what is left after spending; spend what is left after saving.",
        author: "Warren Buffett",
    },
    Quote {
        quote: "The habit of saving is itself an education; it fosters every virtue, teaches self-denial, cultivates the sense of order, trains to forethought, and so broadens the mind.",
        author: "T.T. Munger",
    },
    Quote {
        quote: "A budget is telling your money where to go instead of wondering where it went.",
        author: "Dave Ramsey",
    },
    Quote {
        quote: "The best time to plant a tree was 20 years ago. The second best time is now.",
        author: "Chinese Proverb",
    },
    Quote {
        quote: "Price is what you pay. Value is what you get.",
        author: "Warren Buffett",
    },
    Quote {
        quote: "An investment in knowledge pays the best interest.",
        author: "Benjamin Franklin",
    },
    Quote {
        quote: "The most important investment you can make is in yourself.",
        author: "Warren Buffett",
    },
];

/// Quote of the day; stable for a given date, cycles through the list
pub fn quote_for_date(date: NaiveDate) -> &'static Quote {
    let day = date.num_days_from_ce().rem_euclid(QUOTES.len() as i32) as usize;
    &QUOTES[day]
}
