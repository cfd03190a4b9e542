//! Service categories that gate paragraphs of the follow-up email.

use std::collections::HashMap;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Music,
    VideoOrPhoto,
    Band,
    Ceilidh,
    SingingWaiter,
}

pub const LIVE_BAND: &str = "Live Band (3/5/7 piece)";
pub const SINGING_WAITING: &str = "Singing Waiting";
pub const CEILIDH: &str = "Ceilidh";

const MUSIC: &[&str] = &[
    LIVE_BAND,
    SINGING_WAITING,
    "Bagpipes",
    "Acoustic Duo",
    "Karaoke/Bandeoke",
    "Saxophone Solo",
    "DJ",
    CEILIDH,
];
const VIDEO_OR_PHOTO: &[&str] = &["Wedding Film", "Photography"];
const BAND: &[&str] = &[LIVE_BAND];
const CEILIDH_ONLY: &[&str] = &[CEILIDH];
const SINGING_WAITER: &[&str] = &[SINGING_WAITING];

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Music,
        Category::VideoOrPhoto,
        Category::Band,
        Category::Ceilidh,
        Category::SingingWaiter,
    ];

    /// Built-in trigger services for this category.
    pub fn default_triggers(self) -> &'static [&'static str] {
        match self {
            Category::Music => MUSIC,
            Category::VideoOrPhoto => VIDEO_OR_PHOTO,
            Category::Band => BAND,
            Category::Ceilidh => CEILIDH_ONLY,
            Category::SingingWaiter => SINGING_WAITER,
        }
    }
}

/// Category → trigger-service table. `Default` is the built-in data.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryTable {
    triggers: HashMap<Category, Vec<String>>,
}

impl Default for CategoryTable {
    fn default() -> Self {
        let triggers = Category::ALL
            .iter()
            .map(|c| (*c, c.default_triggers().iter().map(|s| s.to_string()).collect()))
            .collect();
        Self { triggers }
    }
}

impl CategoryTable {
    /// Replace the trigger list of one category.
    pub fn with_triggers<I, S>(mut self, category: Category, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.triggers.insert(category, names.into_iter().map(Into::into).collect());
        self
    }

    pub fn triggers(&self, category: Category) -> &[String] {
        self.triggers.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True when any of `services` triggers `category`.
    pub fn has_category<S: AsRef<str>>(&self, services: &[S], category: Category) -> bool {
        let triggers = self.triggers(category);
        services.iter().any(|s| triggers.iter().any(|t| t == s.as_ref()))
    }
}

/// [`CategoryTable::has_category`] against the built-in table.
pub fn has_category<S: AsRef<str>>(services: &[S], category: Category) -> bool {
    let triggers = category.default_triggers();
    services.iter().any(|s| triggers.contains(&s.as_ref()))
}
