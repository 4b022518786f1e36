//! Filename-based design category classification.
//!
//! The studio's naming convention prefixes every deliverable with a short
//! mnemonic code (`AF-concert.jpg`, `BAN-site-2024.png`). Classification is
//! a first-match scan over an ordered rule table; anything the table does
//! not recognize lands in the catch-all "Autre" bucket.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Design category assigned to an image by filename pattern.
///
/// Serialized labels are the French ones the portfolio front end filters
/// on, so renaming a variant is a breaking change to deployed manifests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Affiche,
    #[serde(rename = "Bannière")]
    Banniere,
    #[serde(rename = "Carte de visite")]
    CarteDeVisite,
    Flyer,
    Logo,
    Kakemono,
    Catalogue,
    Maquette,
    Autre,
}

impl Category {
    /// Wire label, identical to the serialized form.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Affiche => "Affiche",
            Self::Banniere => "Bannière",
            Self::CarteDeVisite => "Carte de visite",
            Self::Flyer => "Flyer",
            Self::Logo => "Logo",
            Self::Kakemono => "Kakemono",
            Self::Catalogue => "Catalogue",
            Self::Maquette => "Maquette",
            Self::Autre => "Autre",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classification rules in priority order.
///
/// The first matching pattern wins, so earlier rules shadow later ones
/// (`CV-logo.png` is a business card, not a logo). Reordering this table
/// changes the category of existing files.
static RULES: LazyLock<Vec<(Category, Regex)>> = LazyLock::new(|| {
    [
        (Category::Affiche, "^(AF|A2F|affiche)"),
        (Category::Banniere, "^(BAN|banniere|banner)"),
        (Category::CarteDeVisite, "^(CV|carte|business.?card)"),
        (Category::Flyer, "^(FLY|flyer|depliant)"),
        (Category::Logo, "^(LOGO|logo)"),
        (Category::Kakemono, "^(KAK|kakemono)"),
        (Category::Catalogue, "^(CAT|catalogue)"),
        (Category::Maquette, "^(MAQ|maquette)"),
    ]
    .into_iter()
    .map(|(category, pattern)| {
        let re = Regex::new(&format!("(?i){pattern}")).expect("static pattern must compile");
        (category, re)
    })
    .collect()
});

/// Looser logo detection used for a project's representative image:
/// `logo` anywhere in the name, any case.
static LOGO_HINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("(?i)logo").expect("static pattern must compile"));

/// Classify a filename into a design category.
///
/// Pure and total: every input gets a label, unmatched names get
/// [`Category::Autre`].
pub fn classify(filename: &str) -> Category {
    RULES
        .iter()
        .find(|(_, re)| re.is_match(filename))
        .map_or(Category::Autre, |(category, _)| *category)
}

/// Whether a filename looks like a logo regardless of its category.
///
/// Catches names like `client-logo-v2.png` that the prefix rules miss.
/// Only influences a node's `logo` field, never the stored category.
pub fn is_logo_hint(filename: &str) -> bool {
    LOGO_HINT.is_match(filename)
}
