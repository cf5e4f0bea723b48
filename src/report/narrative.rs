//! Narrative copy for the detailed report.
//!
//! All text lives in const tables so the tier ladder and the
//! category-by-domain lookups stay pure data; the selection code around them
//! is trivial and the tables can be walked exhaustively by tests.

use serde::{Deserialize, Serialize};

use crate::classify::Level;
use crate::domains::{CategoryKey, MainCategory};

/// Narrative block for a single domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightsAndTips {
    pub level: Level,
    pub insights: Vec<String>,
    pub tips: Vec<String>,
}

struct TierText {
    level: Level,
    insight: &'static str,
    tip: &'static str,
}

/// Base insight/tip pair per qualitative tier, independent of domain.
static TIER_TEXT: [TierText; 5] = [
    TierText {
        level: Level::High,
        insight: "This is a standout area: you solved items here quickly and with very few errors.",
        tip: "Keep the edge with occasional timed challenges at the hardest difficulty.",
    },
    TierText {
        level: Level::AboveAverage,
        insight: "You performed comfortably above the typical range in this area.",
        tip: "Push into harder material to turn a strength into a standout.",
    },
    TierText {
        level: Level::Average,
        insight: "Your results here sit squarely in the typical range.",
        tip: "Short, regular practice sessions will move this above the average band.",
    },
    TierText {
        level: Level::BelowAverage,
        insight: "This area came in below the typical range and weighed on your overall result.",
        tip: "Focus on accuracy before speed; pace follows once the error rate drops.",
    },
    TierText {
        level: Level::NeedsImprovement,
        insight: "This area needs attention: most items here were missed or skipped.",
        tip: "Start with untimed beginner sets to rebuild the fundamentals.",
    },
];

/// Extra domain-specific tip, keyed by taxonomy and category.
const EXTRA_TIPS: &[(MainCategory, CategoryKey, &str)] = &[
    (
        MainCategory::IqTest,
        CategoryKey::LogicalReasoning,
        "Work through syllogism drills and spot-the-rule grids a few times a week.",
    ),
    (
        MainCategory::IqTest,
        CategoryKey::NumericalAbility,
        "Practice mental arithmetic and number-sequence puzzles without a calculator.",
    ),
    (
        MainCategory::IqTest,
        CategoryKey::SpatialReasoning,
        "Rotate and fold shapes in your head; cube-net and tangram puzzles help.",
    ),
    (
        MainCategory::IqTest,
        CategoryKey::VerbalAbility,
        "Read varied material and summarize each piece in two sentences.",
    ),
    (
        MainCategory::IqTest,
        CategoryKey::Memory,
        "Use spaced repetition on short lists, then lengthen the lists gradually.",
    ),
    (
        MainCategory::DrivingLicence,
        CategoryKey::Perception,
        "Train hazard spotting with dashcam clips, naming each hazard aloud.",
    ),
    (
        MainCategory::DrivingLicence,
        CategoryKey::SignalKnowledge,
        "Quiz yourself on road signs daily until recognition is instant.",
    ),
    (
        MainCategory::DrivingLicence,
        CategoryKey::RoadRules,
        "Reread the highway-code sections you miss most often.",
    ),
    (
        MainCategory::DrivingLicence,
        CategoryKey::EyeSight,
        "Practice scanning far ahead and checking mirrors on a fixed rhythm.",
    ),
    (
        MainCategory::DrivingLicence,
        CategoryKey::SafeDriving,
        "Rehearse defensive scenarios: following distance, escape routes, worst cases.",
    ),
    (
        MainCategory::Logic,
        CategoryKey::PropositionalLogic,
        "Build truth tables by hand for compound statements until it feels routine.",
    ),
    (
        MainCategory::Logic,
        CategoryKey::EpistemicLogic,
        "Work puzzles about what each agent knows and does not know, step by step.",
    ),
    (
        MainCategory::Logic,
        CategoryKey::PredicateLogic,
        "Translate everyday claims into quantified form and back again.",
    ),
    (
        MainCategory::Logic,
        CategoryKey::ModalLogic,
        "Contrast necessity and possibility with small worked model sketches.",
    ),
    (
        MainCategory::Logic,
        CategoryKey::ProofTechniques,
        "Redo classic proofs by induction and contradiction from a blank page.",
    ),
];

/// Explanatory copy for each taxonomy/category pair.
const DOMAIN_DESCRIPTIONS: &[(MainCategory, CategoryKey, &str)] = &[
    (
        MainCategory::IqTest,
        CategoryKey::LogicalReasoning,
        "How well you draw sound conclusions from given facts and spot the rule behind a pattern.",
    ),
    (
        MainCategory::IqTest,
        CategoryKey::NumericalAbility,
        "Comfort with numbers: arithmetic, ratios, and sequences under light time pressure.",
    ),
    (
        MainCategory::IqTest,
        CategoryKey::SpatialReasoning,
        "Mentally rotating, folding, and assembling shapes in space.",
    ),
    (
        MainCategory::IqTest,
        CategoryKey::VerbalAbility,
        "Vocabulary, analogies, and grasping relationships between words.",
    ),
    (
        MainCategory::IqTest,
        CategoryKey::Memory,
        "Holding and recalling information over short spans.",
    ),
    (
        MainCategory::DrivingLicence,
        CategoryKey::Perception,
        "Noticing developing hazards early and judging distance and speed.",
    ),
    (
        MainCategory::DrivingLicence,
        CategoryKey::SignalKnowledge,
        "Recognizing road signs, signals, and markings at a glance.",
    ),
    (
        MainCategory::DrivingLicence,
        CategoryKey::RoadRules,
        "Knowing right-of-way, limits, and the rules of the highway code.",
    ),
    (
        MainCategory::DrivingLicence,
        CategoryKey::EyeSight,
        "Visual acuity and the scanning habits that keep a full picture of the road.",
    ),
    (
        MainCategory::DrivingLicence,
        CategoryKey::SafeDriving,
        "Anticipating other drivers' mistakes and keeping safety margins.",
    ),
    (
        MainCategory::Logic,
        CategoryKey::PropositionalLogic,
        "Reasoning with and, or, not, and implication between whole statements.",
    ),
    (
        MainCategory::Logic,
        CategoryKey::EpistemicLogic,
        "Reasoning about knowledge and belief, including what others know.",
    ),
    (
        MainCategory::Logic,
        CategoryKey::PredicateLogic,
        "Quantified reasoning with 'all', 'some', and relations between objects.",
    ),
    (
        MainCategory::Logic,
        CategoryKey::ModalLogic,
        "Reasoning about necessity and possibility across alternative situations.",
    ),
    (
        MainCategory::Logic,
        CategoryKey::ProofTechniques,
        "Constructing rigorous arguments: direct proof, induction, contradiction.",
    ),
];

fn tier_text(level: Level) -> &'static TierText {
    // Every Level variant has a row; the fallback keeps the lookup total.
    TIER_TEXT
        .iter()
        .find(|tier| tier.level == level)
        .unwrap_or(&TIER_TEXT[4])
}

fn extra_tip(category: MainCategory, key: CategoryKey) -> Option<&'static str> {
    EXTRA_TIPS
        .iter()
        .find(|(c, k, _)| *c == category && *k == key)
        .map(|(_, _, tip)| *tip)
}

/// Narrative for one domain: the tier's base insight/tip pair plus at most
/// one taxonomy-specific tip. Unknown taxonomy or domain key simply appends
/// nothing.
pub fn generate_insights_and_tips(
    domain_key: &str,
    score: i64,
    main_category: Option<MainCategory>,
) -> InsightsAndTips {
    let level = Level::from_domain_score(score);
    let tier = tier_text(level);
    let mut tips = vec![tier.tip.to_string()];
    if let (Some(category), Some(key)) = (main_category, CategoryKey::parse(domain_key)) {
        if let Some(extra) = extra_tip(category, key) {
            tips.push(extra.to_string());
        }
    }
    InsightsAndTips {
        level,
        insights: vec![tier.insight.to_string()],
        tips,
    }
}

/// Explanatory copy for a domain, or `""` for unknown combinations.
pub fn get_domain_description(domain_key: &str, main_category: Option<MainCategory>) -> String {
    let Some(category) = main_category else {
        return String::new();
    };
    let Some(key) = CategoryKey::parse(domain_key) else {
        return String::new();
    };
    DOMAIN_DESCRIPTIONS
        .iter()
        .find(|(c, k, _)| *c == category && *k == key)
        .map(|(_, _, text)| (*text).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tier_has_distinct_copy() {
        for (i, a) in TIER_TEXT.iter().enumerate() {
            assert!(!a.insight.is_empty() && !a.tip.is_empty());
            for b in TIER_TEXT.iter().skip(i + 1) {
                assert_ne!(a.level, b.level);
                assert_ne!(a.insight, b.insight);
                assert_ne!(a.tip, b.tip);
            }
        }
    }

    #[test]
    fn test_every_taxonomy_category_pair_has_tip_and_description() {
        for (category, key, tip) in EXTRA_TIPS {
            assert!(!tip.is_empty());
            assert!(
                !get_domain_description(key.as_str(), Some(*category)).is_empty(),
                "missing description for {:?}/{:?}",
                category,
                key
            );
        }
        assert_eq!(EXTRA_TIPS.len(), 15);
        assert_eq!(DOMAIN_DESCRIPTIONS.len(), 15);
    }

    #[test]
    fn test_insights_for_known_combination() {
        let result =
            generate_insights_and_tips("memory", 26, Some(MainCategory::IqTest));
        assert_eq!(result.level, Level::High);
        assert_eq!(result.insights.len(), 1);
        // Base tip plus exactly one domain-specific tip.
        assert_eq!(result.tips.len(), 2);
        assert!(result.tips[1].contains("spaced repetition"));
    }

    #[test]
    fn test_insights_for_unknown_category_or_key() {
        let no_category = generate_insights_and_tips("memory", 12, None);
        assert_eq!(no_category.level, Level::BelowAverage);
        assert_eq!(no_category.tips.len(), 1);

        let unknown_key =
            generate_insights_and_tips("juggling", 12, Some(MainCategory::IqTest));
        assert_eq!(unknown_key.tips.len(), 1);

        // A driving key under the IQ taxonomy has no table entry either.
        let mismatched =
            generate_insights_and_tips("road-rules", 12, Some(MainCategory::IqTest));
        assert_eq!(mismatched.tips.len(), 1);
    }

    #[test]
    fn test_description_degrades_to_empty() {
        assert_eq!(get_domain_description("memory", None), "");
        assert_eq!(
            get_domain_description("juggling", Some(MainCategory::Logic)),
            ""
        );
        assert_eq!(
            get_domain_description("road-rules", Some(MainCategory::IqTest)),
            ""
        );
        assert!(!get_domain_description("road-rules", Some(MainCategory::DrivingLicence))
            .is_empty());
    }
}
