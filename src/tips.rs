use crate::models::{BabyDevelopment, TipEntry};
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Fixed catalog built once at startup. Weekly and development keys are
/// sorted ascending; lookups take the largest key at or below the target,
/// falling back to the smallest key.
pub struct TipCatalog {
    weekly: Vec<(u32, Vec<TipEntry>)>,
    by_category: Vec<(&'static str, Vec<String>)>,
    development: Vec<(u32, BabyDevelopment)>,
}

static CATALOG: Lazy<TipCatalog> = Lazy::new(build_catalog);

pub fn weekly_tips(week: u32) -> Vec<TipEntry> {
    closest_at_or_below(&CATALOG.weekly, week).clone()
}

/// Weekly tips filtered to the preferred categories (case-insensitive).
/// When fewer than three survive the filter, the remainder of the same
/// week's list tops the result up, in declaration order.
pub fn personalized_tips(week: u32, preferred_categories: &[String]) -> Vec<TipEntry> {
    let pool = weekly_tips(week);
    if preferred_categories.is_empty() {
        return pool;
    }

    let wanted: Vec<String> = preferred_categories
        .iter()
        .map(|category| category.to_lowercase())
        .collect();
    let mut picked: Vec<TipEntry> = pool
        .iter()
        .filter(|entry| wanted.contains(&entry.category.to_lowercase()))
        .cloned()
        .collect();

    for entry in &pool {
        if picked.len() >= 3 {
            break;
        }
        if !wanted.contains(&entry.category.to_lowercase()) {
            picked.push(entry.clone());
        }
    }

    picked
}

/// Case-insensitive substring search over tip text and category, across
/// both the weekly table and the category lists. Duplicate tip text keeps
/// its first occurrence.
pub fn search_tips(keyword: &str) -> Vec<TipEntry> {
    let needle = keyword.to_lowercase();
    let mut results = Vec::new();

    for (_, entries) in &CATALOG.weekly {
        for entry in entries {
            if entry.tip.to_lowercase().contains(&needle)
                || entry.category.to_lowercase().contains(&needle)
            {
                results.push(entry.clone());
            }
        }
    }

    for (category, tips) in &CATALOG.by_category {
        for tip in tips {
            if tip.to_lowercase().contains(&needle) {
                results.push(TipEntry {
                    category: capitalize(category),
                    tip: tip.clone(),
                });
            }
        }
    }

    let mut seen = HashSet::new();
    results.retain(|entry| seen.insert(entry.tip.clone()));
    results
}

/// Deterministic pick over the flattened weekly tips: the zero-based
/// day-of-year modulo the catalog size.
pub fn tip_of_the_day(today: NaiveDate) -> TipEntry {
    let flattened: Vec<&TipEntry> = CATALOG
        .weekly
        .iter()
        .flat_map(|(_, entries)| entries)
        .collect();
    let index = today.ordinal0() as usize % flattened.len();
    flattened[index].clone()
}

/// Supplementary tips for one lowercase category name; empty for unknown
/// categories.
pub fn category_tips(category: &str) -> Vec<String> {
    CATALOG
        .by_category
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, tips)| tips.clone())
        .unwrap_or_default()
}

pub fn development_for_week(week: u32) -> BabyDevelopment {
    closest_at_or_below(&CATALOG.development, week).clone()
}

/// Size of the flattened weekly catalog, the denominator for read stats.
pub fn weekly_tip_count() -> usize {
    CATALOG.weekly.iter().map(|(_, entries)| entries.len()).sum()
}

fn closest_at_or_below<T>(table: &[(u32, T)], week: u32) -> &T {
    let mut selected = &table[0];
    for candidate in table {
        if candidate.0 <= week {
            selected = candidate;
        }
    }
    &selected.1
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn entry(category: &str, tip: &str) -> TipEntry {
    TipEntry {
        category: category.to_string(),
        tip: tip.to_string(),
    }
}

fn development(size: &str, length: &str, note: &str) -> BabyDevelopment {
    BabyDevelopment {
        size: size.to_string(),
        length: length.to_string(),
        development: note.to_string(),
    }
}

fn build_catalog() -> TipCatalog {
    let weekly = vec![
        (1, vec![
            entry("Health", "Start taking prenatal vitamins with folic acid to prevent birth defects."),
            entry("Lifestyle", "Avoid alcohol, smoking, and limit caffeine intake to less than 200mg daily."),
            entry("Nutrition", "Focus on a balanced diet rich in fruits, vegetables, and whole grains."),
            entry("Planning", "Track your menstrual cycle to confirm pregnancy."),
        ]),
        (4, vec![
            entry("Symptoms", "Morning sickness may begin. Try eating small, frequent meals throughout the day."),
            entry("Health", "Schedule your first prenatal appointment with your healthcare provider."),
            entry("Self-care", "Get plenty of rest - your body is working hard to grow your baby."),
            entry("Nutrition", "Include protein-rich foods like eggs, lean meats, and legumes in your diet."),
        ]),
        (8, vec![
            entry("Development", "Your baby's heart is beating and major organs are forming rapidly."),
            entry("Nutrition", "Increase protein intake to support rapid cell growth and development."),
            entry("Health", "Stay hydrated and consider ginger tea for morning sickness relief."),
            entry("Exercise", "Begin gentle exercises like walking or prenatal yoga if approved by your doctor."),
        ]),
        (12, vec![
            entry("Milestone", "End of first trimester! Risk of miscarriage decreases significantly."),
            entry("Health", "You may start feeling more energetic as morning sickness typically subsides."),
            entry("Planning", "Consider when to announce your pregnancy to family and friends."),
            entry("Screening", "Discuss genetic screening options with your healthcare provider."),
        ]),
        (16, vec![
            entry("Development", "You might start feeling baby's first movements (quickening) soon."),
            entry("Health", "Consider getting a flu shot - it's safe and recommended during pregnancy."),
            entry("Nutrition", "Increase calcium intake for baby's developing bones and teeth."),
            entry("Comfort", "You may need to start wearing maternity clothes as your belly grows."),
        ]),
        (20, vec![
            entry("Milestone", "Halfway point! Anatomy scan can reveal baby's gender and development."),
            entry("Exercise", "Continue moderate exercise like walking, swimming, or prenatal yoga."),
            entry("Comfort", "Invest in comfortable, supportive maternity bras and clothing."),
            entry("Planning", "Start researching childbirth classes and pediatricians."),
        ]),
        (24, vec![
            entry("Development", "Baby's hearing is developing - talk, read, and sing to your baby!"),
            entry("Health", "Glucose screening test may be scheduled to check for gestational diabetes."),
            entry("Planning", "Start thinking about baby names and begin nursery planning."),
            entry("Nutrition", "Focus on iron-rich foods to prevent anemia - spinach, lean meats, beans."),
        ]),
        (28, vec![
            entry("Milestone", "Third trimester begins! Baby's survival rate increases significantly if born now."),
            entry("Health", "You may start feeling more tired again - this is completely normal."),
            entry("Preparation", "Consider taking childbirth and newborn care classes."),
            entry("Monitoring", "Start paying attention to baby's movement patterns daily."),
        ]),
        (32, vec![
            entry("Development", "Baby's movements may feel stronger but less frequent due to less space."),
            entry("Health", "Monitor for signs of preeclampsia: swelling, headaches, vision changes."),
            entry("Planning", "Start preparing your hospital bag and birth plan."),
            entry("Comfort", "Sleep on your side with pillows for support - avoid sleeping on your back."),
        ]),
        (36, vec![
            entry("Preparation", "Baby is considered full-term at 37 weeks - you're almost there!"),
            entry("Health", "Group B strep test may be performed between 35-37 weeks."),
            entry("Planning", "Finalize your birth plan and discuss with your healthcare provider."),
            entry("Comfort", "Practice relaxation and breathing techniques for labor."),
        ]),
        (40, vec![
            entry("Milestone", "Your due date! Remember, only 5% of babies are born on their actual due date."),
            entry("Signs", "Watch for signs of labor: regular contractions, water breaking, bloody show."),
            entry("Preparation", "Stay calm and rest when possible - labor could start any time!"),
            entry("Health", "Keep your healthcare provider's contact information handy at all times."),
        ]),
    ];

    let by_category = vec![
        ("nutrition", vec![
            "Eat folate-rich foods like leafy greens, citrus fruits, and fortified cereals".to_string(),
            "Include omega-3 fatty acids from fish, walnuts, and flaxseeds for brain development".to_string(),
            "Stay hydrated with 8-10 glasses of water daily".to_string(),
            "Limit processed foods and focus on whole, nutrient-dense options".to_string(),
            "Eat small, frequent meals to manage nausea and maintain energy levels".to_string(),
        ]),
        ("exercise", vec![
            "Aim for 30 minutes of moderate exercise most days of the week".to_string(),
            "Try prenatal yoga to improve flexibility and reduce stress".to_string(),
            "Swimming is excellent low-impact exercise during pregnancy".to_string(),
            "Walking is safe throughout pregnancy and helps with circulation".to_string(),
            "Avoid contact sports and activities with fall risk".to_string(),
        ]),
        ("wellness", vec![
            "Practice stress-reduction techniques like meditation or deep breathing".to_string(),
            "Get 7-9 hours of sleep per night when possible".to_string(),
            "Take time for self-care and activities you enjoy".to_string(),
            "Stay connected with supportive friends and family".to_string(),
            "Consider prenatal massage for relaxation and comfort".to_string(),
        ]),
        ("safety", vec![
            "Avoid raw or undercooked meats, eggs, and seafood".to_string(),
            "Limit exposure to cleaning chemicals and paint fumes".to_string(),
            "Wear seatbelts properly with the lap belt under your belly".to_string(),
            "Avoid hot tubs, saunas, and activities that raise core body temperature".to_string(),
            "Stay up to date with recommended vaccines during pregnancy".to_string(),
        ]),
    ];

    let development = vec![
        (4, development("Poppy seed", "2mm", "Heart begins to beat")),
        (8, development("Raspberry", "16mm", "All major organs forming")),
        (12, development("Lime", "61mm", "Reflexes developing")),
        (16, development("Avocado", "116mm", "Can hear sounds")),
        (20, development("Banana", "166mm", "Can suck thumb")),
        (24, development("Corn", "300mm", "Lungs developing")),
        (28, development("Eggplant", "375mm", "Can open eyes")),
        (32, development("Squash", "427mm", "Bones hardening")),
        (36, development("Papaya", "472mm", "Gaining weight rapidly")),
        (40, development("Watermelon", "508mm", "Ready for birth!")),
    ];

    TipCatalog {
        weekly,
        by_category,
        development,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn weekly_lookup_floors_to_nearest_declared_week() {
        assert_eq!(weekly_tips(0), weekly_tips(1));
        assert_eq!(weekly_tips(3), weekly_tips(1));
        assert_eq!(weekly_tips(4), weekly_tips(7));
        assert_eq!(weekly_tips(39), weekly_tips(36));
        assert_eq!(weekly_tips(40), weekly_tips(99));
        assert_eq!(weekly_tips(24).len(), 4);
    }

    #[test]
    fn empty_preferences_return_the_weekly_list() {
        assert_eq!(personalized_tips(24, &[]), weekly_tips(24));
    }

    #[test]
    fn preferences_filter_then_top_up_to_three() {
        let picked = personalized_tips(24, &["nutrition".to_string()]);
        assert_eq!(picked.len(), 3);
        assert_eq!(picked[0].category, "Nutrition");

        let pool = weekly_tips(24);
        for entry in &picked {
            assert!(pool.contains(entry), "top-up stays within the same week");
        }
    }

    #[test]
    fn preference_matching_is_case_insensitive() {
        let picked = personalized_tips(24, &["NUTRITION".to_string()]);
        assert!(picked.iter().any(|entry| entry.category == "Nutrition"));
    }

    #[test]
    fn matched_preferences_are_not_topped_up() {
        // Week 1 has one Health, one Lifestyle, one Nutrition, one Planning
        // tip; three preferences match exactly three.
        let preferred = vec![
            "health".to_string(),
            "lifestyle".to_string(),
            "nutrition".to_string(),
        ];
        let picked = personalized_tips(1, &preferred);
        assert_eq!(picked.len(), 3);
        assert!(picked.iter().all(|entry| entry.category != "Planning"));
    }

    #[test]
    fn search_matches_tip_text_without_duplicates() {
        let results = search_tips("heart");
        assert!(results
            .iter()
            .any(|entry| entry.category == "Development" && entry.tip.contains("heart is beating")));

        let mut seen = HashSet::new();
        for entry in &results {
            assert!(seen.insert(entry.tip.clone()), "duplicate tip: {}", entry.tip);
        }
    }

    #[test]
    fn search_matches_categories_and_tags_category_tips() {
        let results = search_tips("nutrition");
        assert!(results.iter().any(|entry| entry.category == "Nutrition"));
        assert!(results
            .iter()
            .any(|entry| entry.tip.starts_with("Eat folate-rich foods")));
    }

    #[test]
    fn search_is_case_insensitive() {
        assert_eq!(search_tips("YOGA"), search_tips("yoga"));
        assert!(!search_tips("YOGA").is_empty());
    }

    #[test]
    fn tip_of_the_day_is_deterministic() {
        let day = NaiveDate::from_ymd_opt(2026, 5, 14).unwrap();
        assert_eq!(tip_of_the_day(day), tip_of_the_day(day));
    }

    #[test]
    fn tip_of_the_day_indexes_by_day_of_year() {
        let flattened_len = weekly_tip_count();
        let first = tip_of_the_day(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        assert_eq!(first, weekly_tips(1)[0]);

        let leap_day_366 = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        let expected_index = 365 % flattened_len;
        let flattened: Vec<TipEntry> = CATALOG
            .weekly
            .iter()
            .flat_map(|(_, entries)| entries.clone())
            .collect();
        assert_eq!(tip_of_the_day(leap_day_366), flattened[expected_index]);
    }

    #[test]
    fn category_tips_lookup() {
        assert_eq!(category_tips("nutrition").len(), 5);
        assert_eq!(category_tips("safety").len(), 5);
        assert!(category_tips("unknown").is_empty());
    }

    #[test]
    fn development_lookup_floors_with_week_four_minimum() {
        assert_eq!(development_for_week(2).size, "Poppy seed");
        assert_eq!(development_for_week(33).size, "Squash");
        assert_eq!(development_for_week(40).size, "Watermelon");
    }

    #[test]
    fn catalog_counts() {
        assert_eq!(weekly_tip_count(), 44);
    }
}
