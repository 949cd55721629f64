//! Offline vocabulary dataset, served when no generator credential is configured.

use std::collections::HashMap;

use async_trait::async_trait;

use super::{VocabularyError, VocabularyProvider, DEFAULT_LANGUAGE};
use crate::models::VocabularyItem;

/// Provider backed by fixed word lists keyed by `(theme, language)`.
///
/// A language without its own list for a theme falls back to the English list.
#[derive(Debug, Clone, Default)]
pub struct StaticVocabularyProvider {
    datasets: HashMap<(String, String), Vec<VocabularyItem>>,
}

impl StaticVocabularyProvider {
    /// Empty provider; every theme is unavailable until added.
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider with the bundled park and cafe datasets.
    pub fn seeded() -> Self {
        Self::new()
            .with_theme("park", DEFAULT_LANGUAGE, park_english())
            .with_theme("cafe", DEFAULT_LANGUAGE, cafe_english())
            .with_theme("park", "dutch", park_dutch())
            .with_theme("cafe", "dutch", cafe_dutch())
    }

    pub fn with_theme(mut self, theme: &str, language: &str, items: Vec<VocabularyItem>) -> Self {
        self.datasets
            .insert((theme.to_string(), language.to_string()), items);
        self
    }

    fn lookup(&self, theme: &str, language: &str) -> Option<&[VocabularyItem]> {
        let key = |lang: &str| (theme.to_string(), lang.to_string());

        if language != DEFAULT_LANGUAGE {
            if let Some(items) = self.datasets.get(&key(language)) {
                return Some(items.as_slice());
            }
            tracing::debug!(theme, language, "No offline data for language, falling back to English");
        }

        self.datasets.get(&key(DEFAULT_LANGUAGE)).map(Vec::as_slice)
    }
}

#[async_trait]
impl VocabularyProvider for StaticVocabularyProvider {
    async fn generate(
        &self,
        theme: &str,
        count: usize,
        language: &str,
    ) -> Result<Vec<VocabularyItem>, VocabularyError> {
        let items = self
            .lookup(theme, language)
            .ok_or_else(|| VocabularyError::DataUnavailable(theme.to_string()))?;

        Ok(items.iter().take(count).cloned().collect())
    }

    fn name(&self) -> &'static str {
        "offline"
    }
}

fn park_english() -> Vec<VocabularyItem> {
    vec![
        VocabularyItem::new("bench", "A long seat for two or more people", "We sat on the bench in the park."),
        VocabularyItem::new("playground", "An area for children with swings, slides, etc.", "The children had fun at the playground."),
        VocabularyItem::new("fountain", "An ornamental structure that sends water into the air", "The fountain in the park was beautiful."),
        VocabularyItem::new("path", "A way or track for walking or cycling", "We walked along the path through the park."),
        VocabularyItem::new("tree", "A tall plant with a wooden trunk and branches", "The trees in the park provide shade in summer."),
        VocabularyItem::new("grass", "Plants with narrow green leaves that cover the ground", "The grass in the park was freshly cut."),
        VocabularyItem::new("picnic", "An outdoor meal", "We had a picnic in the park on Sunday."),
        VocabularyItem::new("jogger", "A person who runs at a steady speed for exercise", "Joggers often use the park in the morning."),
        VocabularyItem::new("lake", "A large area of water surrounded by land", "There is a small lake in the center of the park."),
        VocabularyItem::new("garden", "An area where flowers and plants are grown", "The botanical garden in the park has rare flowers."),
    ]
}

fn cafe_english() -> Vec<VocabularyItem> {
    vec![
        VocabularyItem::new("coffee", "A hot drink made from roasted coffee beans", "I ordered a coffee at the cafe."),
        VocabularyItem::new("barista", "A person who makes and serves coffee", "The barista made a beautiful design in my latte."),
        VocabularyItem::new("menu", "A list of food and drinks available", "The cafe has a varied menu with many options."),
        VocabularyItem::new("pastry", "A sweet baked food made with dough", "The cafe sells delicious pastries."),
        VocabularyItem::new("table", "A piece of furniture with a flat top", "We found a table by the window in the cafe."),
        VocabularyItem::new("espresso", "A strong coffee made by forcing steam through ground coffee beans", "An espresso is perfect for a quick caffeine boost."),
        VocabularyItem::new("latte", "Coffee made with hot milk", "She ordered a vanilla latte at the cafe."),
        VocabularyItem::new("wifi", "Wireless internet connection", "The cafe offers free wifi to customers."),
        VocabularyItem::new("ambiance", "The character and atmosphere of a place", "The cafe has a cozy ambiance with soft lighting."),
        VocabularyItem::new("tip", "Money given to a server as a reward for good service", "I left a generous tip at the cafe."),
    ]
}

fn park_dutch() -> Vec<VocabularyItem> {
    vec![
        VocabularyItem::new("bench", "A long seat for two or more people", "We sat on the bench in the park.")
            .with_dutch("bank", "Een lange zitplaats voor twee of meer personen", "We zaten op de bank in het park."),
        VocabularyItem::new("playground", "An area for children with swings, slides, etc.", "The children had fun at the playground.")
            .with_dutch("speeltuin", "Een gebied voor kinderen met schommels, glijbanen, etc.", "De kinderen hadden plezier in de speeltuin."),
        VocabularyItem::new("fountain", "An ornamental structure that sends water into the air", "The fountain in the park was beautiful.")
            .with_dutch("fontein", "Een sierelement dat water in de lucht spuit", "De fontein in het park was prachtig."),
        VocabularyItem::new("path", "A way or track for walking or cycling", "We walked along the path through the park.")
            .with_dutch("pad", "Een weg of spoor om te wandelen of fietsen", "We liepen over het pad door het park."),
        VocabularyItem::new("tree", "A tall plant with a wooden trunk and branches", "The trees in the park provide shade in summer.")
            .with_dutch("boom", "Een hoge plant met een houten stam en takken", "De bomen in het park geven schaduw in de zomer."),
    ]
}

fn cafe_dutch() -> Vec<VocabularyItem> {
    vec![
        VocabularyItem::new("coffee", "A hot drink made from roasted coffee beans", "I ordered a coffee at the cafe.")
            .with_dutch("koffie", "Een warme drank gemaakt van gebrande koffiebonen", "Ik bestelde een koffie in het café."),
        VocabularyItem::new("barista", "A person who makes and serves coffee", "The barista made a beautiful design in my latte.")
            .with_dutch("barista", "Een persoon die koffie maakt en serveert", "De barista maakte een mooie tekening in mijn latte."),
        VocabularyItem::new("menu", "A list of food and drinks available", "The cafe has a varied menu with many options.")
            .with_dutch("menu", "Een lijst met beschikbaar eten en drinken", "Het café heeft een gevarieerd menu met veel opties."),
        VocabularyItem::new("pastry", "A sweet baked food made with dough", "The cafe sells delicious pastries.")
            .with_dutch("gebak", "Een zoet gebakken voedsel gemaakt van deeg", "Het café verkoopt heerlijk gebak."),
        VocabularyItem::new("table", "A piece of furniture with a flat top", "We found a table by the window in the cafe.")
            .with_dutch("tafel", "Een meubelstuk met een plat oppervlak", "We vonden een tafel bij het raam in het café."),
    ]
}
