use crate::domain::content_pools::{
    JokeRecord, COMIC_SECTION_CAPTION, COMIC_SECTION_TITLE, CONTRIBUTE_SECTION_PARAGRAPHS,
    CONTRIBUTE_SECTION_TITLE, HIGHEST_EDITION, JOKES, JOKE_COLUMN_NOTE, JOKE_COLUMN_TITLE,
    LAST_PRINTED_DAY, LEFT_COLUMN_CONTENTS, LEFT_COLUMN_TITLES, MAIN_ARTICLE_CONTENTS,
    MAIN_ARTICLE_TITLES, MONTHS, NEWSLETTER_TITLE, PUBLICATION_YEAR, WEEKDAYS,
};
use crate::domain::newsletter_document::{
    Article, Column, ComicSection, ContributeSection, Header, NewsletterDocument, RightColumn,
};
use rand::Rng;
use std::fmt;

/// Choose one element of `pool`, uniformly by index.
///
/// # Panics
///
/// Panics if `pool` is empty. Every pool is a non-empty literal, so an empty one is a
/// programming error rather than something to recover from.
pub fn pick<'a, T, R>(rng: &mut R, pool: &'a [T]) -> &'a T
where
    R: Rng + ?Sized,
{
    &pool[rng.gen_range(0..pool.len())]
}

/// A printed date. Weekday, month and day are drawn independently, so the combination
/// does not have to exist on a real calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewsletterDate {
    pub weekday: &'static str,
    pub month: &'static str,
    pub day: u8,
    pub year: u16,
}

impl fmt::Display for NewsletterDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {} {}, {}", self.weekday, self.month, self.day, self.year)
    }
}

pub fn random_date<R>(rng: &mut R) -> NewsletterDate
where
    R: Rng + ?Sized,
{
    NewsletterDate {
        weekday: *pick(rng, &WEEKDAYS),
        month: *pick(rng, &MONTHS),
        day: rng.gen_range(1..=LAST_PRINTED_DAY),
        year: PUBLICATION_YEAR,
    }
}

/// Assembles newsletter issues from fixed pools of canned text.
#[derive(Debug, Clone, Copy)]
pub struct ContentGenerator {
    main_article_titles: &'static [&'static str],
    main_article_contents: &'static [&'static str],
    left_column_titles: &'static [&'static str],
    left_column_contents: &'static [&'static str],
    jokes: &'static [JokeRecord],
}

impl Default for ContentGenerator {
    fn default() -> Self {
        Self {
            main_article_titles: &MAIN_ARTICLE_TITLES,
            main_article_contents: &MAIN_ARTICLE_CONTENTS,
            left_column_titles: &LEFT_COLUMN_TITLES,
            left_column_contents: &LEFT_COLUMN_CONTENTS,
            jokes: &JOKES,
        }
    }
}

impl ContentGenerator {
    pub fn random_joke<R>(&self, rng: &mut R) -> &'static JokeRecord
    where
        R: Rng + ?Sized,
    {
        pick(rng, self.jokes)
    }

    /// Build a fresh issue using the thread-local generator, seeded from OS entropy.
    pub fn generate(&self) -> NewsletterDocument {
        self.generate_with(&mut rand::thread_rng())
    }

    pub fn generate_with<R>(&self, rng: &mut R) -> NewsletterDocument
    where
        R: Rng + ?Sized,
    {
        let header = Header {
            edition: format!("Edition nº {}", rng.gen_range(1..=HIGHEST_EDITION)),
            date: random_date(rng).to_string(),
        };

        // Title and body are drawn separately, the caption date is a second independent draw.
        let main_article = Article {
            title: pick(rng, self.main_article_titles).to_string(),
            content: pick(rng, self.main_article_contents).to_string(),
            image_caption: format!(
                "Photo of the online call via Google Meet held on Friday, {}.",
                random_date(rng)
            ),
        };

        let left_column = Column {
            title: pick(rng, self.left_column_titles).to_string(),
            content: pick(rng, self.left_column_contents).to_string(),
        };

        let joke = self.random_joke(rng);
        let right_column = RightColumn {
            title: JOKE_COLUMN_TITLE.to_string(),
            content: joke.setup.to_string(),
            joke_lines: joke.lines.iter().map(|line| line.to_string()).collect(),
            note: JOKE_COLUMN_NOTE.to_string(),
        };

        NewsletterDocument {
            header,
            title: NEWSLETTER_TITLE.to_string(),
            main_article,
            left_column,
            right_column,
            comic_section: ComicSection {
                title: COMIC_SECTION_TITLE.to_string(),
                caption: COMIC_SECTION_CAPTION.to_string(),
            },
            contribute_section: ContributeSection {
                title: CONTRIBUTE_SECTION_TITLE.to_string(),
                paragraphs: CONTRIBUTE_SECTION_PARAGRAPHS
                    .iter()
                    .map(|paragraph| paragraph.to_string())
                    .collect(),
            },
        }
    }
}
