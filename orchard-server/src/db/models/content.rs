//! Site Content Model (Singletons)
//!
//! One editable record per storefront section. Sections that were never
//! saved read as their built-in defaults.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Editable storefront section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentSection {
    Hero,
    About,
    Gallery,
}

impl ContentSection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Gallery => "gallery",
        }
    }

    /// Confirmation shown after saving
    pub fn saved_message(&self) -> &'static str {
        match self {
            Self::Hero => "✓ Zawartość Hero zapisana",
            Self::About => "✓ Zawartość About zapisana",
            Self::Gallery => "✓ Galeria zapisana",
        }
    }
}

impl fmt::Display for ContentSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentSection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hero" => Ok(Self::Hero),
            "about" => Ok(Self::About),
            "gallery" => Ok(Self::Gallery),
            other => Err(format!("Unknown content section: {}", other)),
        }
    }
}

/// Hero banner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroContent {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    #[serde(default)]
    pub background_image: Option<String>,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            title: "Witaj w Srebrnej Sadzie".into(),
            subtitle: "Świeże jabłka z naszego rodzinnego sadu".into(),
            description: "Uprawiamy wysokiej jakości jabłka metodami tradycyjnymi.".into(),
            background_image: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutCard {
    pub icon: String,
    pub title: String,
    pub description: String,
}

impl AboutCard {
    fn new(icon: &str, title: &str, description: &str) -> Self {
        Self {
            icon: icon.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}

/// "About us" cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutContent {
    pub cards: Vec<AboutCard>,
}

impl Default for AboutContent {
    fn default() -> Self {
        Self {
            cards: vec![
                AboutCard::new(
                    "🌳",
                    "Nasz Sad",
                    "Znajdujący się w Srebrnej, Naruszewo, nasz sad od pokoleń uprawia świeże, pyszne jabłka.",
                ),
                AboutCard::new(
                    "🍎",
                    "Jabłka Najwyższej Jakości",
                    "Uprawiamy wiele odmian jabłek, każdą wybraną ze względu na jej unikalny smak i wartość odżywczą.",
                ),
                AboutCard::new(
                    "👨‍🌾",
                    "Tradycja Rodzinna",
                    "Nasza rodzina uprawia ziemię w Naruszewie od dziesięcioleci.",
                ),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub photo_url: Option<String>,
    pub category: String,
}

impl GalleryImage {
    fn placeholder(id: &str, title: &str, description: &str, category: &str) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            photo_url: None,
            category: category.into(),
        }
    }
}

/// Photo gallery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryContent {
    pub images: Vec<GalleryImage>,
}

impl Default for GalleryContent {
    fn default() -> Self {
        Self {
            images: vec![
                GalleryImage::placeholder("1", "Widok Sadu", "Piękny widok na nasz sad", "orchard"),
                GalleryImage::placeholder("2", "Świeże Jabłka", "Świeżo zebrane jabłka", "apples"),
                GalleryImage::placeholder("3", "Czas Zbioru", "Zbieranie jabłek", "harvest"),
            ],
        }
    }
}

/// Stored singleton record, keyed by section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteContent<T> {
    pub section: ContentSection,
    pub content: T,
    /// Unix millis
    pub updated_at: i64,
}
