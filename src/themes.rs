//! The fixed catalog of learning themes.

use crate::models::Theme;

#[derive(Debug, Clone)]
pub struct ThemeCatalog {
    themes: Vec<Theme>,
}

impl ThemeCatalog {
    pub fn new(themes: Vec<Theme>) -> Self {
        Self { themes }
    }

    pub fn all(&self) -> &[Theme] {
        &self.themes
    }

    pub fn get(&self, id: &str) -> Option<&Theme> {
        self.themes.iter().find(|t| t.id == id)
    }

    pub fn is_valid(&self, id: &str) -> bool {
        self.get(id).is_some()
    }
}

impl Default for ThemeCatalog {
    fn default() -> Self {
        const THEMES: [(&str, &str, &str); 10] = [
            ("cafe", "Café/Coffee Shop", "Vocabulary related to cafés and coffee shops"),
            ("park", "Park/Nature", "Vocabulary related to parks and nature"),
            ("airport", "Airport/Travel", "Vocabulary related to airports and travel"),
            ("kitchen", "Kitchen/Cooking", "Vocabulary related to kitchens and cooking"),
            ("office", "Office/Workplace", "Vocabulary related to offices and workplaces"),
            ("beach", "Beach/Ocean", "Vocabulary related to beaches and oceans"),
            ("city", "City/Urban", "Vocabulary related to cities and urban environments"),
            ("home", "Home/Living Space", "Vocabulary related to homes and living spaces"),
            ("grocery", "Grocery Store/Shopping", "Vocabulary related to grocery stores and shopping"),
            ("restaurant", "Restaurant/Dining", "Vocabulary related to restaurants and dining"),
        ];

        Self::new(
            THEMES
                .iter()
                .map(|(id, name, description)| Theme {
                    id: id.to_string(),
                    name: name.to_string(),
                    description: Some(description.to_string()),
                })
                .collect(),
        )
    }
}
