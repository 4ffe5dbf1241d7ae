//! The canned text every issue is assembled from.
//!
//! Every pool is a non-empty literal. Nothing here changes at runtime.

pub const NEWSLETTER_TITLE: &str = "Old County Times";

pub const MAIN_ARTICLE_TITLES: [&str; 5] = [
    "The monthly meeting rocked",
    "Quarterly review exceeds expectations",
    "Team building event brings everyone together",
    "New office policies announced",
    "Company picnic scheduled for next month",
];

pub const MAIN_ARTICLE_CONTENTS: [&str; 5] = [
    "As with (almost) every last Friday of the month, we had our typical monthly meeting with the entire team. We received the sad news that, this month, the sales target — probably — will not be met. It was also announced that our 30th branch will open next month. Our CEO announced that with the arrival of the 50 new employees, the amount of coffee consumed increased slightly.",
    "The quarterly numbers are in and they show remarkable progress across all departments. Employee satisfaction surveys indicate a 15% improvement over last quarter. The new coffee machine in the break room has been particularly well-received by the team.",
    "Last Friday's team building activities brought together employees from all departments for a day of collaboration and fun. The escape room challenge was won by the marketing team, while the accounting department dominated the trivia contest.",
    "Management has announced several new policies aimed at improving work-life balance. The new flexible working hours policy will take effect next month, along with the introduction of casual Fridays.",
    "Save the date! Our annual company picnic has been scheduled for the last Saturday of next month. There will be games, food, and prizes for the whole family. RSVP deadline is two weeks from today.",
];

pub const LEFT_COLUMN_TITLES: [&str; 5] = [
    "\"We want broccoli pie!\"",
    "\"Coffee machine needs fixing!\"",
    "\"More parking spaces needed!\"",
    "\"Bring back pizza Fridays!\"",
    "\"Office temperature too cold!\"",
];

pub const LEFT_COLUMN_CONTENTS: [&str; 5] = [
    "Popular outcry was not silenced. But the broccoli pie protest came to a sad end. Informants claim that the result of the party at the office last Friday (26) was not friendly at all. Instead of the broccoli pie, the delivery lady brought chicken pie. The team's vegans, who currently make up 95% of the people, were disappointed.",
    "The office coffee machine has been acting up again, producing what can only be described as 'brown water' instead of coffee. Facilities management has promised a replacement by next week, but employees remain skeptical.",
    "With the recent hiring spree, the parking lot has become a battleground. Employees are arriving earlier just to secure a spot. Management is considering renting additional spaces across the street.",
    "The beloved pizza Friday tradition was discontinued last month due to budget constraints. A petition with over 200 signatures has been submitted to management requesting its return.",
    "The ongoing thermostat wars continue as employees bundle up in winter coats while working. The facilities team claims the temperature is 'optimal,' but the evidence suggests otherwise.",
];

/// A joke's setup line and the dialogue that follows it. The lines always travel together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JokeRecord {
    pub setup: &'static str,
    pub lines: &'static [&'static str],
}

pub const JOKES: [JokeRecord; 3] = [
    JokeRecord {
        setup: "At the cinema box office:",
        lines: &[
            "— Two tickets, please.",
            "— Is it for Romeo and Juliet?",
            "— No, it's for me and my girlfriend.",
        ],
    },
    JokeRecord {
        setup: "At the office printer:",
        lines: &[
            "— Why won't this print?",
            "— Did you try turning it off and on?",
            "— Yes, my computer is working fine.",
        ],
    },
    JokeRecord {
        setup: "In the break room:",
        lines: &[
            "— Is the coffee fresh?",
            "— Define fresh.",
            "— Made this century?",
        ],
    },
];

pub const JOKE_COLUMN_TITLE: &str = "Joke of the month";

pub const JOKE_COLUMN_NOTE: &str = "Note: For contributions to the jokes column, send your suggestion to humor@ourcompany.com.br (we will need it).";

pub const COMIC_SECTION_TITLE: &str = "Comic strip of the month";

pub const COMIC_SECTION_CAPTION: &str =
    "Caption: Special thanks to Bia Franzoli for their amazing newspaper design inspiration";

pub const CONTRIBUTE_SECTION_TITLE: &str = "Contribute to Old County Times";

pub const CONTRIBUTE_SECTION_PARAGRAPHS: [&str; 2] = [
    "Tell us about everyday events at the company: we accept reports, images, jokes and whatever else your creativity allows. Share with us the achievements and defeats in your area so that we can always be together on this journey.",
    "Note: All contributions will be selected and evaluated by a mediator before entering the next edition.",
];

pub const WEEKDAYS: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Every date in the paper falls in this year.
pub const PUBLICATION_YEAR: u16 = 2014;

/// Highest day-of-month ever printed, so every month is valid.
pub const LAST_PRINTED_DAY: u8 = 28;

pub const HIGHEST_EDITION: u32 = 100;
