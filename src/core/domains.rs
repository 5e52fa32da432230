//! Recruitment domains and the fixed option lists of the application form

use serde::{Deserialize, Serialize};

/// A team applicants can join.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Domain {
    #[display("Web/App Dev")]
    WebAppDevelopment,
    #[display("Research and Development")]
    ResearchAndDevelopment,
    #[display("Corporate")]
    Corporate,
    #[display("Creatives")]
    Creatives,
}

impl Domain {
    /// Order of the cards in "Choose Your Path".
    pub const ALL: [Domain; 4] = [
        Domain::WebAppDevelopment,
        Domain::ResearchAndDevelopment,
        Domain::Corporate,
        Domain::Creatives,
    ];

    /// Order of the options in the form's domain select.
    pub const FORM_ORDER: [Domain; 4] = [
        Domain::Corporate,
        Domain::ResearchAndDevelopment,
        Domain::WebAppDevelopment,
        Domain::Creatives,
    ];

    /// Value stored in `interested_domain`.
    pub fn form_value(&self) -> &'static str {
        match self {
            Domain::WebAppDevelopment => "Web/App Dev",
            Domain::ResearchAndDevelopment => "Research and Development",
            Domain::Corporate => "Corporate",
            Domain::Creatives => "Creatives",
        }
    }

    #[cfg(test)]
    fn from_form_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.form_value() == value)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Domain::WebAppDevelopment => "Web App Development",
            Domain::ResearchAndDevelopment => "Research & Development",
            Domain::Corporate => "Corporate",
            Domain::Creatives => "Creatives",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Domain::WebAppDevelopment => {
                "Build scalable, modern applications for real-world impact. Master the frontier of web technologies."
            }
            Domain::ResearchAndDevelopment => {
                "Explore new territories in AI, ML, and data science. Pioneer the unknown frontiers of technology."
            }
            Domain::Corporate => {
                "Lead partnerships, growth, and organizational impact. Become the sheriff of business strategy."
            }
            Domain::Creatives => {
                "Bring stories to life with design and media. Paint the narrative of our digital frontier."
            }
        }
    }

    pub fn badge(&self) -> &'static str {
        match self {
            Domain::WebAppDevelopment => "Frontend & Backend",
            Domain::ResearchAndDevelopment => "AI & ML",
            Domain::Corporate => "Leadership",
            Domain::Creatives => "Design & Media",
        }
    }

    pub fn image(&self) -> &'static str {
        match self {
            Domain::WebAppDevelopment => "/cowboy-at-saloon-table-with-cards-representing-web.png",
            Domain::ResearchAndDevelopment => "/explorer-cowboy-with-map-representing-research-and.png",
            Domain::Corporate => "/sheriff-badge-representing-corporate-leadership-an.png",
            Domain::Creatives => "/artist-with-brush-representing-creativity-and-desi.png",
        }
    }

    pub fn image_alt(&self) -> &'static str {
        match self {
            Domain::WebAppDevelopment => "Web Development",
            Domain::ResearchAndDevelopment => "Research & Development",
            Domain::Corporate => "Corporate",
            Domain::Creatives => "Creatives",
        }
    }
}

/// Year of study options.
pub const YEARS: [&str; 3] = ["I", "II", "III"];

/// Department options.
pub const DEPARTMENTS: [&str; 5] = ["DSBS", "NWC", "CINTEL", "CTech", "Other"];

/// Build `(value, label)` pairs for a select, led by a disabled-style placeholder.
pub fn select_options<'a>(
    placeholder: &str,
    values: impl IntoIterator<Item = &'a str>,
) -> Vec<(String, String)> {
    std::iter::once((String::new(), placeholder.to_string()))
        .chain(values.into_iter().map(|v| (v.to_string(), v.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_values_round_trip() {
        for domain in Domain::ALL {
            assert_eq!(Domain::from_form_value(domain.form_value()), Some(domain));
        }
        assert_eq!(Domain::from_form_value("Sheriff"), None);
    }

    #[test]
    fn test_display_matches_form_value() {
        for domain in Domain::ALL {
            assert_eq!(domain.to_string(), domain.form_value());
        }
    }

    #[test]
    fn test_form_order_covers_all_domains() {
        for domain in Domain::ALL {
            assert!(Domain::FORM_ORDER.contains(&domain));
        }
    }

    #[test]
    fn test_select_options_placeholder_first() {
        let options = select_options("Select Year", YEARS);
        assert_eq!(options.len(), 4);
        assert_eq!(options[0], (String::new(), "Select Year".to_string()));
        assert_eq!(options[3], ("III".to_string(), "III".to_string()));
    }
}
