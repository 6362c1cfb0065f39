//! Static content catalog rendered by the landing page
//!
//! Hero copy, the feature card grid, and the footer call-to-action. Pure
//! data; layout and styling belong to the rendering layer.

use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
    pub is_new: bool,
}

pub const HERO_TITLE: &str = "Your Complete Wellness Journey";
pub const HERO_SUBTITLE: &str = "Transform your lifestyle with our comprehensive wellness \
    tracking tools. Start your journey to a healthier, happier you today.";
pub const HERO_CTA_LABEL: &str = "Begin Your Journey";

pub const FOOTER_TITLE: &str = "Start Your Wellness Journey Today";
pub const FOOTER_CTA_LABEL: &str = "Get Started Now";

pub const FEATURES: &[FeatureCard] = &[
    FeatureCard {
        title: "Compare Foods",
        description: "Make informed choices by comparing nutritional values of different foods",
        is_new: false,
    },
    FeatureCard {
        title: "Track Nutrition",
        description: "Monitor your daily intake with detailed nutrition tracking",
        is_new: false,
    },
    FeatureCard {
        title: "BMI Calculator",
        description: "Calculate and track your BMI progress over time",
        is_new: false,
    },
    FeatureCard {
        title: "Healthy Recipes",
        description: "Discover and save nutritious meal ideas",
        is_new: false,
    },
    FeatureCard {
        title: "Calorie Counter",
        description: "Track your daily calorie intake and set goals",
        is_new: true,
    },
    FeatureCard {
        title: "Wellness Journal",
        description: "Record your daily wellness activities and mood",
        is_new: true,
    },
    FeatureCard {
        title: "Meditation Timer",
        description: "Set timers for your mindfulness practice",
        is_new: true,
    },
    FeatureCard {
        title: "Progress Tracker",
        description: "Visualize your wellness journey with charts",
        is_new: true,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_feature_grid_shape() {
        assert_eq!(FEATURES.len(), 8);
        assert_eq!(FEATURES.iter().filter(|f| f.is_new).count(), 4);
    }

    #[test]
    fn test_feature_titles_are_unique() {
        let titles: HashSet<_> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(titles.len(), FEATURES.len());
    }

    #[test]
    fn test_feature_card_serialization() {
        let json = serde_json::to_string(&FEATURES[4]).unwrap();
        assert!(json.contains("\"title\":\"Calorie Counter\""));
        assert!(json.contains("\"is_new\":true"));
    }

    #[test]
    fn test_copy_is_non_empty() {
        assert!(!HERO_TITLE.is_empty());
        assert!(!HERO_SUBTITLE.is_empty());
        assert!(!HERO_CTA_LABEL.is_empty());
        assert!(!FOOTER_TITLE.is_empty());
        assert!(!FOOTER_CTA_LABEL.is_empty());
    }
}
