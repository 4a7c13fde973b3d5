// Advisory messages shown next to a BMI result.
// One template per category; the ideal weight range is interpolated in a single place.

use crate::calculator::{Category, IdealWeightRange};

pub const PLACEHOLDER_TITLE: &str = "Your BMI Result";
pub const PLACEHOLDER_PROMPT: &str =
    "Enter your height and weight, and you'll see your BMI result here.";

struct Template {
    category: Category,
    lead: &'static str,
    phrase: &'static str,
    range_intro: &'static str,
}

const TEMPLATES: [Template; 6] = [
    Template {
        category: Category::Underweight,
        lead: "You are",
        phrase: "underweight",
        range_intro: "A healthy weight range might be around",
    },
    Template {
        category: Category::Healthy,
        lead: "Your BMI suggests you are a",
        phrase: "healthy weight",
        range_intro: "Your ideal weight is between",
    },
    Template {
        category: Category::Overweight,
        lead: "You are",
        phrase: "overweight",
        range_intro: "A healthier weight range could be",
    },
    Template {
        category: Category::ObeseClass1,
        lead: "You are in",
        phrase: "Class 1 obesity",
        range_intro: "Consider aiming for a weight between",
    },
    Template {
        category: Category::ObeseClass2,
        lead: "You are in",
        phrase: "Class 2 obesity",
        range_intro: "A healthy weight range might be around",
    },
    Template {
        category: Category::ObeseClass3,
        lead: "You are in",
        phrase: "Class 3 obesity (morbid obesity)",
        range_intro: "A healthier weight range could be",
    },
];

fn template(category: Category) -> &'static Template {
    // TEMPLATES is ordered like Category
    let t = &TEMPLATES[category as usize];
    debug_assert_eq!(t.category, category);
    t
}

/// The emphasised category phrase, e.g. "healthy weight"
pub fn phrase(category: Category) -> &'static str {
    template(category).phrase
}

/// Render the advisory sentence for a category.
///
/// The range sentence is left out when no ideal weight range is known.
pub fn render(category: Category, range: Option<&IdealWeightRange>, weight_label: &str) -> String {
    let t = template(category);
    let mut message = format!("{} {}.", t.lead, t.phrase);
    if let Some(range) = range {
        message.push_str(&format!(
            " {} {:.1} {} - {:.1} {}.",
            t.range_intro, range.min, weight_label, range.max, weight_label
        ));
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_category_order() {
        for category in Category::ALL {
            assert_eq!(template(category).category, category);
        }
    }

    #[test]
    fn test_render_healthy() {
        let range = IdealWeightRange { min: 59.9, max: 80.7 };
        assert_eq!(
            render(Category::Healthy, Some(&range), "kgs"),
            "Your BMI suggests you are a healthy weight. Your ideal weight is between 59.9 kgs - 80.7 kgs."
        );
    }

    #[test]
    fn test_render_keeps_trailing_zero() {
        let range = IdealWeightRange { min: 60.0, max: 81.0 };
        let message = render(Category::ObeseClass1, Some(&range), "lbs");
        assert_eq!(
            message,
            "You are in Class 1 obesity. Consider aiming for a weight between 60.0 lbs - 81.0 lbs."
        );
    }

    #[test]
    fn test_render_without_range() {
        assert_eq!(
            render(Category::ObeseClass3, None, "kgs"),
            "You are in Class 3 obesity (morbid obesity)."
        );
    }

    #[test]
    fn test_every_category_has_distinct_phrase() {
        let mut phrases: Vec<_> = Category::ALL.iter().map(|c| phrase(*c)).collect();
        phrases.sort();
        phrases.dedup();
        assert_eq!(phrases.len(), Category::ALL.len());
    }
}
